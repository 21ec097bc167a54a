//! StandardScaler: per-column normalization fitted once at startup

use ndarray::{Array1, Array2, Axis};

/// Per-column mean/std scaler, read-only after fitting.
#[derive(Debug, Clone)]
pub struct StandardScaler {
    means: Array1<f64>,
    stds: Array1<f64>,
}

impl StandardScaler {
    /// Fit on a training matrix (n_samples x n_features), computing the
    /// population mean and standard deviation of each column.
    pub fn fit(x: &Array2<f64>) -> Self {
        let means = x.mean_axis(Axis(0)).unwrap_or_else(|| Array1::zeros(x.ncols()));
        let stds = x.std_axis(Axis(0), 0.0);

        Self { means, stds }
    }

    /// Standardize a single feature vector: subtract mean, divide by
    /// std, per dimension. Columns with near-zero std map to 0.
    ///
    /// Panics on dimension mismatch; that is a programming error, not
    /// an input error.
    pub fn transform(&self, x: &Array1<f64>) -> Array1<f64> {
        assert_eq!(
            x.len(),
            self.means.len(),
            "feature vector has {} dimensions, scaler was fitted on {}",
            x.len(),
            self.means.len()
        );

        Array1::from_iter(x.iter().enumerate().map(|(j, &v)| {
            let std = self.stds[j];
            if std > 1e-10 {
                (v - self.means[j]) / std
            } else {
                0.0
            }
        }))
    }

    /// Number of features the scaler was fitted on
    pub fn n_features(&self) -> usize {
        self.means.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_fit_statistics() {
        let x = array![[1.0, 10.0], [2.0, 20.0], [3.0, 30.0]];
        let scaler = StandardScaler::fit(&x);

        assert!((scaler.means[0] - 2.0).abs() < 1e-10);
        assert!((scaler.means[1] - 20.0).abs() < 1e-10);
        // Population std of [1,2,3]
        assert!((scaler.stds[0] - (2.0f64 / 3.0).sqrt()).abs() < 1e-10);
    }

    #[test]
    fn test_transform_centers_and_scales() {
        let x = array![[1.0, 10.0], [2.0, 20.0], [3.0, 30.0]];
        let scaler = StandardScaler::fit(&x);

        let scaled = scaler.transform(&array![2.0, 20.0]);
        assert!(scaled[0].abs() < 1e-10);
        assert!(scaled[1].abs() < 1e-10);

        let scaled = scaler.transform(&array![3.0, 30.0]);
        assert!(scaled[0] > 0.0);
        assert!(scaled[1] > 0.0);
    }

    #[test]
    fn test_constant_column_maps_to_zero() {
        let x = array![[5.0, 1.0], [5.0, 2.0], [5.0, 3.0]];
        let scaler = StandardScaler::fit(&x);

        let scaled = scaler.transform(&array![5.0, 2.0]);
        assert_eq!(scaled[0], 0.0);
    }

    #[test]
    #[should_panic]
    fn test_dimension_mismatch_panics() {
        let x = array![[1.0, 2.0], [3.0, 4.0]];
        let scaler = StandardScaler::fit(&x);
        scaler.transform(&array![1.0, 2.0, 3.0]);
    }
}
