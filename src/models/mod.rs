//! Classification models

pub mod logistic;

pub use logistic::{LogisticRegression, LogisticRegressionError};
