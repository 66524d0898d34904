//! Linear model adapter: Implementation of `Scorer` backed by a JSON artifact.
//!
//! The artifact is a standardized logistic-regression pipeline exported by
//! the training side: per-feature scaler statistics and coefficients for
//! numeric features, per-level coefficients (one-hot) for categorical
//! features, plus an intercept. The adapter treats it as a black box that
//! yields a two-class probability pair.
//!
//! # Thread Safety
//!
//! The pipeline is immutable after [`LinearScorer::load`]; a single instance
//! is shared read-only across concurrent requests without locking.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{FeatureValue, FeatureVector};
use crate::ports::{ScoreError, Scorer};

/// Model parameters exported by the training pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportedPipeline {
    pub schema_version: u32,
    /// Feature names in the positional order the model was trained with.
    pub feature_names: Vec<String>,
    pub intercept: f64,
    /// Per-feature term, keyed by feature name.
    pub terms: BTreeMap<String, FeatureTerm>,
}

/// How a single feature contributes to the decision function.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FeatureTerm {
    /// Standardized numeric feature: `(x - mean) / std * coef`.
    Numeric { mean: f64, std: f64, coef: f64 },
    /// One-hot categorical feature: coefficient of the observed level.
    Categorical { levels: BTreeMap<String, f64> },
}

impl FeatureTerm {
    /// Contribution of one slot to the decision function.
    fn contribution(&self, name: &str, value: &FeatureValue) -> Result<f64, ScoreError> {
        match (self, value) {
            (Self::Numeric { mean, std, coef }, FeatureValue::Num(x)) => {
                Ok((x - mean) / std * coef)
            }
            (Self::Numeric { .. }, FeatureValue::Cat(s)) => Err(ScoreError::FeatureMismatch(
                format!("Feature '{name}' expects a numeric value, got '{s}'"),
            )),
            (Self::Categorical { levels }, FeatureValue::Cat(s)) => {
                levels.get(s).copied().ok_or_else(|| {
                    ScoreError::FeatureMismatch(format!(
                        "Unknown category '{s}' for feature '{name}'"
                    ))
                })
            }
            (Self::Categorical { .. }, FeatureValue::Num(x)) => Err(ScoreError::FeatureMismatch(
                format!("Feature '{name}' expects a category, got {x}"),
            )),
        }
    }
}

/// Scorer backed by an exported linear pipeline loaded from disk.
#[derive(Debug)]
pub struct LinearScorer {
    pipeline: ExportedPipeline,
}

impl LinearScorer {
    /// Load the scoring artifact from a JSON file.
    ///
    /// The artifact is loaded at most once per process; callers keep the
    /// returned scorer for the process lifetime.
    ///
    /// # Errors
    /// Returns [`ScoreError::ArtifactNotFound`] when the path does not
    /// resolve to an existing file, and [`ScoreError::ArtifactCorrupt`] when
    /// the file cannot be deserialized or is internally inconsistent.
    pub fn load(path: &Path) -> Result<Self, ScoreError> {
        if !path.is_file() {
            return Err(ScoreError::ArtifactNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ScoreError::ArtifactCorrupt(e.to_string()))?;
        let pipeline: ExportedPipeline = serde_json::from_str(&content)
            .map_err(|e| ScoreError::ArtifactCorrupt(e.to_string()))?;

        Self::validate(&pipeline)?;

        tracing::info!(
            "Loaded model from {:?} (schema_version={}, n_features={})",
            path,
            pipeline.schema_version,
            pipeline.feature_names.len()
        );

        Ok(Self { pipeline })
    }

    /// Basic sanity checks on the deserialized pipeline.
    fn validate(pipeline: &ExportedPipeline) -> Result<(), ScoreError> {
        if pipeline.feature_names.is_empty() {
            return Err(ScoreError::ArtifactCorrupt(
                "Model declares no features".into(),
            ));
        }

        for name in &pipeline.feature_names {
            match pipeline.terms.get(name) {
                None => {
                    return Err(ScoreError::ArtifactCorrupt(format!(
                        "Model is missing a term for feature '{name}'"
                    )));
                }
                Some(FeatureTerm::Numeric { std, .. }) if *std <= 0.0 => {
                    return Err(ScoreError::ArtifactCorrupt(format!(
                        "Feature '{name}' has non-positive std {std}"
                    )));
                }
                Some(FeatureTerm::Categorical { levels }) if levels.is_empty() => {
                    return Err(ScoreError::ArtifactCorrupt(format!(
                        "Feature '{name}' declares no levels"
                    )));
                }
                Some(_) => {}
            }
        }

        Ok(())
    }

    /// Class-probability pair `[P(no stroke), P(stroke)]`.
    ///
    /// # Errors
    /// Returns [`ScoreError::FeatureMismatch`] when the vector's shape or
    /// field domain is incompatible with the artifact.
    pub fn predict_proba(&self, features: &FeatureVector) -> Result<[f64; 2], ScoreError> {
        let names = &self.pipeline.feature_names;
        if features.len() != names.len() {
            return Err(ScoreError::FeatureMismatch(format!(
                "Expected {} features, got {}",
                names.len(),
                features.len()
            )));
        }

        let mut z = self.pipeline.intercept;
        for (name, value) in names.iter().zip(features.values()) {
            // Validated at load time, so every name resolves to a term.
            let term = self.pipeline.terms.get(name).ok_or_else(|| {
                ScoreError::ArtifactCorrupt(format!("Model is missing a term for feature '{name}'"))
            })?;
            z += term.contribution(name, value)?;
        }

        let positive = sigmoid(z);
        Ok([1.0 - positive, positive])
    }
}

impl Scorer for LinearScorer {
    fn score(&self, features: &FeatureVector) -> Result<f64, ScoreError> {
        Ok(self.predict_proba(features)?[1])
    }
}

/// Logistic function: 1 / (1 + exp(-x)).
fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}
