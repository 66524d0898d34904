//! Prediction result types.
//!
//! Represents the output of the stroke-risk scoring pipeline.

use serde::{Deserialize, Serialize};

/// Risk level classification for stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    /// Low risk of stroke
    Low,
    /// Moderate risk, monitoring recommended
    Moderate,
    /// High risk, intervention recommended
    High,
}

impl RiskLevel {
    /// Classify a probability using the same buckets the frontend renders
    /// (33% and 66% on the percentage scale).
    #[must_use]
    pub fn from_probability(probability: f64) -> Self {
        if probability < 0.33 {
            Self::Low
        } else if probability < 0.66 {
            Self::Moderate
        } else {
            Self::High
        }
    }

    /// Get a human-readable description.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Low => "Low risk - No significant indicators",
            Self::Moderate => "Moderate risk - Follow-up recommended",
            Self::High => "High risk - Immediate consultation advised",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "LOW"),
            Self::Moderate => write!(f, "MODERATE"),
            Self::High => write!(f, "HIGH"),
        }
    }
}

/// A completed stroke-risk prediction.
///
/// Only `stroke_risk` crosses the wire; the risk level and timestamp exist
/// for logging and diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    /// Probability of the positive ("had stroke") class, in [0, 1].
    pub stroke_risk: f64,

    /// Risk classification derived from the probability.
    pub risk_level: RiskLevel,

    /// Timestamp of the prediction.
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Prediction {
    /// Create a prediction from a scored probability.
    #[must_use]
    pub fn new(stroke_risk: f64) -> Self {
        Self {
            stroke_risk,
            risk_level: RiskLevel::from_probability(stroke_risk),
            created_at: chrono::Utc::now(),
        }
    }
}
