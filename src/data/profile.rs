//! Validated health metrics for a single assessment
//!
//! All five fields are validated together: the caller gets a single
//! generic error whether a value is out of range or was never a valid
//! integer to begin with.

use ndarray::Array1;
use thiserror::Error;

/// Valid age range (years)
pub const AGE_RANGE: (i64, i64) = (18, 120);
/// Valid body-mass-index range
pub const BMI_RANGE: (i64, i64) = (10, 50);
/// Valid glucose range (mg/dL)
pub const GLUCOSE_RANGE: (i64, i64) = (70, 300);

/// The single user-facing error kind: any field failed parsing or its
/// range/membership constraint.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invalid input")]
pub struct InvalidInput;

/// One person's health metrics, immutable once validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthProfile {
    age: i64,
    bmi: i64,
    glucose: i64,
    smoker: i64,
    family_history: i64,
}

impl HealthProfile {
    /// Validate and build a profile from the five raw integers.
    ///
    /// Constraints: age in [18,120], bmi in [10,50], glucose in
    /// [70,300], smoker and family_history in {0,1}.
    pub fn new(
        age: i64,
        bmi: i64,
        glucose: i64,
        smoker: i64,
        family_history: i64,
    ) -> Result<Self, InvalidInput> {
        let in_range = |v: i64, (lo, hi): (i64, i64)| v >= lo && v <= hi;

        if !in_range(age, AGE_RANGE)
            || !in_range(bmi, BMI_RANGE)
            || !in_range(glucose, GLUCOSE_RANGE)
            || !matches!(smoker, 0 | 1)
            || !matches!(family_history, 0 | 1)
        {
            return Err(InvalidInput);
        }

        Ok(Self {
            age,
            bmi,
            glucose,
            smoker,
            family_history,
        })
    }

    /// Feature vector in model order: [age, bmi, glucose, smoker, family].
    pub fn features(&self) -> Array1<f64> {
        Array1::from_vec(vec![
            self.age as f64,
            self.bmi as f64,
            self.glucose as f64,
            self.smoker as f64,
            self.family_history as f64,
        ])
    }

    /// Number of features the model expects
    pub const N_FEATURES: usize = 5;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_profile() {
        let profile = HealthProfile::new(45, 28, 110, 1, 1).unwrap();
        let features = profile.features();

        assert_eq!(features.len(), HealthProfile::N_FEATURES);
        assert_eq!(features.to_vec(), vec![45.0, 28.0, 110.0, 1.0, 1.0]);
    }

    #[test]
    fn test_bounds_accepted() {
        assert!(HealthProfile::new(18, 10, 70, 0, 0).is_ok());
        assert!(HealthProfile::new(120, 50, 300, 1, 1).is_ok());
    }

    #[test]
    fn test_age_out_of_range() {
        assert_eq!(HealthProfile::new(17, 28, 110, 1, 1), Err(InvalidInput));
        assert_eq!(HealthProfile::new(121, 28, 110, 1, 1), Err(InvalidInput));
    }

    #[test]
    fn test_bmi_out_of_range() {
        assert_eq!(HealthProfile::new(45, 9, 110, 1, 1), Err(InvalidInput));
        assert_eq!(HealthProfile::new(45, 51, 110, 1, 1), Err(InvalidInput));
    }

    #[test]
    fn test_glucose_out_of_range() {
        assert_eq!(HealthProfile::new(45, 28, 69, 1, 1), Err(InvalidInput));
        assert_eq!(HealthProfile::new(45, 28, 301, 1, 1), Err(InvalidInput));
    }

    #[test]
    fn test_flags_must_be_binary() {
        assert_eq!(HealthProfile::new(45, 28, 110, 2, 1), Err(InvalidInput));
        assert_eq!(HealthProfile::new(45, 28, 110, 1, -1), Err(InvalidInput));
    }
}
