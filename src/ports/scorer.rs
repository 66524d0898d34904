//! Scorer port: Trait for the opaque scoring artifact.
//!
//! The classifier itself is an external collaborator; this trait is the
//! narrow seam between the prediction pipeline and whatever artifact format
//! backs it, so the format is swappable without touching the normalizer or
//! the invocation adapters.

use std::path::PathBuf;

use crate::domain::FeatureVector;

/// Errors from loading or applying a scoring artifact.
#[derive(Debug, thiserror::Error)]
pub enum ScoreError {
    /// The artifact path does not resolve to an existing file.
    #[error("Model file not found at {}. Please ensure the model file exists.", .0.display())]
    ArtifactNotFound(PathBuf),

    /// The artifact exists but cannot be deserialized into a usable scorer.
    #[error("Failed to load model: {0}")]
    ArtifactCorrupt(String),

    /// The vector's shape or field domain is incompatible with the artifact
    /// (e.g. a categorical value never seen at training time).
    #[error("Feature mismatch: {0}")]
    FeatureMismatch(String),
}

/// Trait for scoring a canonical feature vector.
///
/// Implementations are pure functions of (loaded artifact, vector): no
/// internal mutable state beyond the artifact itself, so a single instance
/// is safely shared read-only across concurrent requests.
pub trait Scorer: Send + Sync {
    /// Probability of the positive ("had stroke") class, in [0, 1].
    ///
    /// The underlying classifier returns a two-class probability pair; this
    /// operation extracts position 1 of that output.
    ///
    /// # Errors
    /// Returns [`ScoreError::FeatureMismatch`] if the vector is incompatible
    /// with what the artifact expects. Never retried; every failure is
    /// terminal for the invocation.
    fn score(&self, features: &FeatureVector) -> Result<f64, ScoreError>;
}
