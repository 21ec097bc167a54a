//! Logistic regression for binary classification
//!
//! Fitted once at startup on the scaled synthetic training matrix and
//! queried for the positive-class probability of a single scaled
//! feature vector.

use ndarray::{Array1, Array2};
use thiserror::Error;

/// Errors for logistic regression
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogisticRegressionError {
    #[error("Model has not been fitted yet")]
    NotFitted,

    #[error("Dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
}

/// Logistic regression classifier fitted by gradient descent
#[derive(Debug, Clone)]
pub struct LogisticRegression {
    /// Fitted coefficients
    pub coefficients: Option<Array1<f64>>,
    /// Intercept term
    pub intercept: Option<f64>,
    /// Learning rate
    learning_rate: f64,
    /// Maximum iterations
    max_iter: usize,
    /// Convergence tolerance on the log loss
    tolerance: f64,
    /// L2 penalty strength, 0 disables regularization
    l2_penalty: f64,
}

impl Default for LogisticRegression {
    fn default() -> Self {
        Self::new(0.01, 1000, 1e-6, 0.0)
    }
}

impl LogisticRegression {
    /// Create a new logistic regression model
    pub fn new(learning_rate: f64, max_iter: usize, tolerance: f64, l2_penalty: f64) -> Self {
        Self {
            coefficients: None,
            intercept: None,
            learning_rate,
            max_iter,
            tolerance,
            l2_penalty,
        }
    }

    /// Create with L2 regularization, `c` as inverse penalty strength
    pub fn with_l2(c: f64) -> Self {
        Self::new(0.01, 1000, 1e-6, 1.0 / c)
    }

    /// Numerically stable sigmoid
    fn sigmoid(z: f64) -> f64 {
        if z >= 0.0 {
            1.0 / (1.0 + (-z).exp())
        } else {
            let exp_z = z.exp();
            exp_z / (1.0 + exp_z)
        }
    }

    /// Binary cross-entropy
    fn log_loss(y_true: &Array1<f64>, y_pred: &Array1<f64>) -> f64 {
        let eps = 1e-15;
        let n = y_true.len() as f64;

        -y_true
            .iter()
            .zip(y_pred.iter())
            .map(|(&y, &p)| {
                let p_clipped = p.clamp(eps, 1.0 - eps);
                y * p_clipped.ln() + (1.0 - y) * (1.0 - p_clipped).ln()
            })
            .sum::<f64>()
            / n
    }

    /// Fit weights and intercept using gradient descent
    pub fn fit(&mut self, x: &Array2<f64>, y: &Array1<f64>) -> Result<(), LogisticRegressionError> {
        if x.nrows() != y.len() {
            return Err(LogisticRegressionError::DimensionMismatch {
                expected: x.nrows(),
                got: y.len(),
            });
        }

        let n_samples = x.nrows() as f64;
        let n_features = x.ncols();

        let mut weights = Array1::<f64>::zeros(n_features);
        let mut bias = 0.0;
        let mut prev_cost = f64::INFINITY;

        for iter in 0..self.max_iter {
            let linear = x.dot(&weights) + bias;
            let predictions = linear.mapv(Self::sigmoid);

            let errors = &predictions - y;
            let mut dw = x.t().dot(&errors) / n_samples;
            let db = errors.sum() / n_samples;

            if self.l2_penalty > 0.0 {
                dw = &dw + &(&weights * self.l2_penalty);
            }

            weights = &weights - &(&dw * self.learning_rate);
            bias -= self.learning_rate * db;

            let cost = Self::log_loss(y, &predictions);
            if (prev_cost - cost).abs() < self.tolerance {
                tracing::debug!(iteration = iter, cost, "gradient descent converged");
                break;
            }
            prev_cost = cost;
        }

        self.coefficients = Some(weights);
        self.intercept = Some(bias);

        Ok(())
    }

    /// Positive-class probability for a single feature vector
    pub fn predict_proba(&self, x: &Array1<f64>) -> Result<f64, LogisticRegressionError> {
        let weights = self
            .coefficients
            .as_ref()
            .ok_or(LogisticRegressionError::NotFitted)?;
        let bias = self.intercept.ok_or(LogisticRegressionError::NotFitted)?;

        if x.len() != weights.len() {
            return Err(LogisticRegressionError::DimensionMismatch {
                expected: weights.len(),
                got: x.len(),
            });
        }

        Ok(Self::sigmoid(x.dot(weights) + bias))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_sigmoid() {
        assert!((LogisticRegression::sigmoid(0.0) - 0.5).abs() < 1e-10);
        assert!(LogisticRegression::sigmoid(100.0) > 0.99);
        assert!(LogisticRegression::sigmoid(-100.0) < 0.01);
    }

    #[test]
    fn test_not_fitted() {
        let model = LogisticRegression::default();
        assert_eq!(
            model.predict_proba(&array![1.0, 2.0]),
            Err(LogisticRegressionError::NotFitted)
        );
    }

    #[test]
    fn test_fit_separable_data() {
        // Points left of the origin labeled 0, right labeled 1
        let x = array![[-2.0], [-1.5], [-1.0], [1.0], [1.5], [2.0]];
        let y = array![0.0, 0.0, 0.0, 1.0, 1.0, 1.0];

        let mut model = LogisticRegression::new(0.5, 5000, 1e-9, 0.0);
        model.fit(&x, &y).unwrap();

        assert!(model.predict_proba(&array![-2.0]).unwrap() < 0.5);
        assert!(model.predict_proba(&array![2.0]).unwrap() > 0.5);
    }

    #[test]
    fn test_probability_in_unit_interval() {
        let x = array![[0.1, 0.9], [0.8, 0.2], [0.4, 0.6], [0.7, 0.3]];
        let y = array![1.0, 0.0, 1.0, 0.0];

        let mut model = LogisticRegression::default();
        model.fit(&x, &y).unwrap();

        let p = model.predict_proba(&array![0.5, 0.5]).unwrap();
        assert!((0.0..=1.0).contains(&p));
    }

    #[test]
    fn test_l2_shrinks_weights() {
        let x = array![[-2.0], [-1.0], [1.0], [2.0]];
        let y = array![0.0, 0.0, 1.0, 1.0];

        let mut plain = LogisticRegression::new(0.01, 2000, 1e-12, 0.0);
        let mut ridge = LogisticRegression::with_l2(0.1);
        plain.fit(&x, &y).unwrap();
        ridge.fit(&x, &y).unwrap();

        let w_plain = plain.coefficients.as_ref().unwrap()[0].abs();
        let w_ridge = ridge.coefficients.as_ref().unwrap()[0].abs();
        assert!(w_ridge < w_plain);
    }

    #[test]
    fn test_dimension_mismatch() {
        let x = array![[0.0, 1.0], [1.0, 0.0]];
        let y = array![0.0, 1.0];

        let mut model = LogisticRegression::default();
        model.fit(&x, &y).unwrap();

        assert_eq!(
            model.predict_proba(&array![1.0]),
            Err(LogisticRegressionError::DimensionMismatch {
                expected: 2,
                got: 1
            })
        );
    }
}
