//! Prediction service: Orchestrates the normalize-and-score pipeline.
//!
//! All three invocation adapters (HTTP, stdin, CLI) funnel into this
//! service, which keeps the normalization contract and the canonical
//! feature order identical across transports.

use std::sync::Arc;

use crate::domain::{normalize, PatientRecord, Prediction};
use crate::ports::Scorer;
use crate::StrokesenseError;

/// Truthy environment variable enabling strict key checking.
///
/// Lenient mode (default) silently ignores unrecognized record keys for
/// compatibility with existing callers; strict mode rejects them, which
/// catches caller typos such as `smokingStatsu`.
pub const STRICT_KEYS_ENV: &str = "STROKESENSE_STRICT_KEYS";

/// Service for scoring patient records.
///
/// Holds the already-loaded scoring artifact behind the [`Scorer`] port.
/// The artifact is immutable after load, so one service instance is shared
/// read-only across concurrent requests.
pub struct PredictionService<S: Scorer> {
    scorer: Arc<S>,
    strict: bool,
}

impl<S: Scorer> PredictionService<S> {
    /// Create a new prediction service.
    ///
    /// Strict key checking is taken from [`STRICT_KEYS_ENV`].
    #[must_use]
    pub fn new(scorer: Arc<S>) -> Self {
        Self::with_strict(scorer, crate::parse_bool_env(STRICT_KEYS_ENV))
    }

    /// Create a service with an explicit strictness setting.
    #[must_use]
    pub fn with_strict(scorer: Arc<S>, strict: bool) -> Self {
        Self { scorer, strict }
    }

    /// Score an already-parsed JSON value.
    ///
    /// # Errors
    /// Returns [`StrokesenseError::MalformedInput`] when the value is not a
    /// JSON object, otherwise whatever [`Self::predict`] returns.
    pub fn predict_value(&self, raw: &serde_json::Value) -> Result<Prediction, StrokesenseError> {
        let record = raw.as_object().ok_or_else(|| {
            StrokesenseError::MalformedInput("Patient record must be a JSON object".to_string())
        })?;
        self.predict(record)
    }

    /// Run the full pipeline on a patient record.
    ///
    /// The record is normalized into the canonical feature vector, scored
    /// once, and discarded. No state persists across invocations.
    ///
    /// # Errors
    /// Returns a normalization or scoring error; failures are terminal for
    /// the invocation, never retried.
    pub fn predict(&self, record: &PatientRecord) -> Result<Prediction, StrokesenseError> {
        let vector = normalize(record, self.strict)?;
        let risk = self.scorer.score(&vector)?;

        let prediction = Prediction::new(risk);
        tracing::info!(
            "Prediction complete: strokeRisk={:.4}, risk={}: {}",
            prediction.stroke_risk,
            prediction.risk_level,
            prediction.risk_level.description()
        );

        Ok(prediction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::linear::tests::{sample_record, write_test_artifact};
    use crate::adapters::LinearScorer;
    use crate::domain::RiskLevel;
    use crate::ports::ScoreError;
    use tempfile::tempdir;

    fn create_test_service(strict: bool) -> PredictionService<LinearScorer> {
        let temp = tempdir().expect("tempdir");
        let path = write_test_artifact(temp.path());
        let scorer = LinearScorer::load(&path).expect("Model should load for tests");
        PredictionService::with_strict(Arc::new(scorer), strict)
    }

    #[test]
    fn test_pipeline_end_to_end() {
        let service = create_test_service(false);
        let prediction = service.predict(&sample_record()).expect("Should predict");

        assert!((0.0..=1.0).contains(&prediction.stroke_risk));
        assert_eq!(
            prediction.risk_level,
            RiskLevel::from_probability(prediction.stroke_risk)
        );
    }

    #[test]
    fn test_missing_field_surfaces_by_name() {
        let service = create_test_service(false);
        let mut record = sample_record();
        record.remove("bmi");

        let err = service.predict(&record).expect_err("Should fail");
        assert!(err.to_string().contains("bmi"));
    }

    #[test]
    fn test_non_object_input_is_malformed() {
        let service = create_test_service(false);
        let err = service
            .predict_value(&serde_json::json!([1, 2, 3]))
            .expect_err("Should fail");
        assert!(matches!(err, StrokesenseError::MalformedInput(_)));
    }

    #[test]
    fn test_strict_mode_rejects_typos() {
        let service = create_test_service(true);
        let mut record = sample_record();
        record.insert("hyperTension".into(), serde_json::json!(true));

        let err = service.predict(&record).expect_err("Should fail");
        assert!(err.to_string().contains("hyperTension"));
    }

    #[test]
    fn test_scorer_errors_propagate() {
        struct FailingScorer;
        impl Scorer for FailingScorer {
            fn score(
                &self,
                _features: &crate::domain::FeatureVector,
            ) -> Result<f64, ScoreError> {
                Err(ScoreError::FeatureMismatch("forced".into()))
            }
        }

        let service = PredictionService::with_strict(Arc::new(FailingScorer), false);
        let err = service.predict(&sample_record()).expect_err("Should fail");
        assert!(matches!(err, StrokesenseError::Score(_)));
    }
}
