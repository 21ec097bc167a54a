//! Risk conditions, advice table, and the risk aggregator
//!
//! `RiskModel` owns the scaler and classifier state fitted once at
//! startup; it is immutable afterwards and injected into callers rather
//! than held as global state.

use ndarray::Array2;
use rand::Rng;

use crate::data::profile::HealthProfile;
use crate::data::scaler::StandardScaler;
use crate::data::synthetic;
use crate::models::logistic::{LogisticRegression, LogisticRegressionError};

/// A risk percentage at or above this threshold earns an advice line
pub const ADVICE_THRESHOLD: f64 = 60.0;

/// The three assessed conditions, in reporting order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Diabetes,
    Heart,
    Obesity,
}

impl Condition {
    /// Fixed reporting order
    pub const ALL: [Condition; 3] = [Condition::Diabetes, Condition::Heart, Condition::Obesity];

    /// Lowercase condition name
    pub fn name(&self) -> &'static str {
        match self {
            Condition::Diabetes => "diabetes",
            Condition::Heart => "heart",
            Condition::Obesity => "obesity",
        }
    }

    /// Capitalized name for the risk summary
    pub fn label(&self) -> &'static str {
        match self {
            Condition::Diabetes => "Diabetes",
            Condition::Heart => "Heart",
            Condition::Obesity => "Obesity",
        }
    }

    /// Advice shown when the condition's risk is high
    pub fn advice(&self) -> &'static str {
        match self {
            Condition::Diabetes => "🩸 Cut sugar, increase activity",
            Condition::Heart => "❤️ Exercise, reduce cholesterol",
            Condition::Obesity => "⚖️ Balanced diet, walk 30 mins/day",
        }
    }
}

/// How condition probabilities are produced.
///
/// `Shared` fits a single binary classifier and broadcasts its
/// probability to all three conditions; `PerCondition` fits one
/// classifier per condition instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PredictionMode {
    #[default]
    Shared,
    PerCondition,
}

/// Scaler + classifier state, fitted once and read-only afterwards
#[derive(Debug, Clone)]
pub struct RiskModel {
    scaler: StandardScaler,
    classifiers: Vec<LogisticRegression>,
    mode: PredictionMode,
}

impl RiskModel {
    /// Train on a fresh synthetic dataset drawn from `rng`.
    ///
    /// Features are uniform noise and labels are coin flips, so the
    /// fitted model is noise too; results vary between processes.
    pub fn train<R: Rng + ?Sized>(
        rng: &mut R,
        mode: PredictionMode,
    ) -> Result<Self, LogisticRegressionError> {
        let (x, y) = synthetic::training_set(rng);
        let scaler = StandardScaler::fit(&x);
        let x_scaled = Self::scale_matrix(&scaler, &x);

        let n_classifiers = match mode {
            PredictionMode::Shared => 1,
            PredictionMode::PerCondition => Condition::ALL.len(),
        };

        let mut classifiers = Vec::with_capacity(n_classifiers);
        for i in 0..n_classifiers {
            let labels = if i == 0 { y.clone() } else { synthetic::labels(rng) };
            let mut classifier = LogisticRegression::default();
            classifier.fit(&x_scaled, &labels)?;
            classifiers.push(classifier);
        }

        tracing::debug!(?mode, n_classifiers, "risk model trained");

        Ok(Self {
            scaler,
            classifiers,
            mode,
        })
    }

    fn scale_matrix(scaler: &StandardScaler, x: &Array2<f64>) -> Array2<f64> {
        let mut scaled = Array2::zeros(x.raw_dim());
        for (i, row) in x.rows().into_iter().enumerate() {
            scaled.row_mut(i).assign(&scaler.transform(&row.to_owned()));
        }
        scaled
    }

    /// Score a validated profile against all three conditions.
    ///
    /// Percentages are rounded to 2 decimals and reported in the fixed
    /// order diabetes, heart, obesity. In `Shared` mode all three carry
    /// the same value.
    pub fn predict_risks(
        &self,
        profile: &HealthProfile,
    ) -> Result<RiskReport, LogisticRegressionError> {
        let scaled = self.scaler.transform(&profile.features());

        let mut entries = Vec::with_capacity(Condition::ALL.len());
        for (i, condition) in Condition::ALL.iter().enumerate() {
            let classifier = match self.mode {
                PredictionMode::Shared => &self.classifiers[0],
                PredictionMode::PerCondition => &self.classifiers[i],
            };
            let probability = classifier.predict_proba(&scaled)?;
            entries.push((*condition, round_pct(probability * 100.0)));
        }

        Ok(RiskReport { entries })
    }
}

/// Round a percentage to 2 decimal places
fn round_pct(pct: f64) -> f64 {
    (pct * 100.0).round() / 100.0
}

/// Ordered condition-to-percentage mapping for one assessment
#[derive(Debug, Clone, PartialEq)]
pub struct RiskReport {
    entries: Vec<(Condition, f64)>,
}

impl RiskReport {
    /// Build a report from already-rounded entries
    pub fn from_entries(entries: Vec<(Condition, f64)>) -> Self {
        Self { entries }
    }

    /// Condition/percentage pairs in reporting order
    pub fn entries(&self) -> &[(Condition, f64)] {
        &self.entries
    }

    /// One bullet line per condition for the risk summary
    pub fn summary_lines(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|(condition, pct)| format!("• {}: {:.2}%", condition.label(), pct))
            .collect()
    }

    /// Advice lines for every condition at or above the threshold;
    /// empty when all risks are low
    pub fn advice_lines(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|(_, pct)| *pct >= ADVICE_THRESHOLD)
            .map(|(condition, pct)| format!("{} (Risk: {:.2}%)", condition.advice(), pct))
            .collect()
    }
}
