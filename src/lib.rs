//! # Health Risk Assessor
//!
//! This library backs a single-session CLI tool that collects five
//! personal health metrics and scores three risk conditions with a
//! logistic classifier trained on synthetic data at startup.
//!
//! ## Modules
//!
//! - `data` - Input validation, feature scaling, synthetic training data
//! - `models` - Logistic regression classifier
//! - `risk` - Conditions, advice table, and the risk aggregator

pub mod data;
pub mod models;
pub mod risk;

pub use data::profile::HealthProfile;
pub use data::scaler::StandardScaler;
pub use models::logistic::LogisticRegression;
pub use risk::{Condition, PredictionMode, RiskModel, RiskReport};
