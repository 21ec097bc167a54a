//! Input validation, feature scaling, and synthetic training data

pub mod profile;
pub mod scaler;
pub mod synthetic;

pub use profile::{HealthProfile, InvalidInput};
pub use scaler::StandardScaler;
