//! Canonical feature vector consumed by the scoring artifact.
//!
//! The artifact was trained against a fixed positional ordering of ten
//! features. The scorer receives a positional vector, not a keyed mapping,
//! so any reordering silently corrupts predictions.

use serde::{Deserialize, Serialize};

/// Canonical feature names in the exact order the scoring artifact expects.
///
/// Order: gender, age, hypertension, heart_disease, ever_married, work_type,
/// Residence_type, avg_glucose_level, bmi, smoking_status. The mixed-case
/// `Residence_type` is the name the artifact was trained with.
pub const MODEL_FEATURES: [&str; 10] = [
    "gender",
    "age",
    "hypertension",
    "heart_disease",
    "ever_married",
    "work_type",
    "Residence_type",
    "avg_glucose_level",
    "bmi",
    "smoking_status",
];

/// A single slot of the feature vector.
///
/// Patient records are loosely typed on the wire: numeric features arrive as
/// JSON numbers, categorical features as strings. No value-domain validation
/// happens here; a value the artifact cannot use surfaces later as a scorer
/// error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FeatureValue {
    /// Numeric feature (age, avg_glucose_level, bmi, coerced booleans).
    Num(f64),
    /// Categorical feature (gender, work_type, ...).
    Cat(String),
}

impl FeatureValue {
    /// Map a JSON value into a feature slot.
    ///
    /// Returns `None` for values that leave the slot unset (`null`, arrays,
    /// objects); the normalizer reports those as missing fields.
    #[must_use]
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Number(n) => n.as_f64().map(Self::Num),
            serde_json::Value::String(s) => Some(Self::Cat(s.clone())),
            serde_json::Value::Bool(b) => Some(Self::Num(f64::from(u8::from(*b)))),
            _ => None,
        }
    }
}

impl std::fmt::Display for FeatureValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Num(n) => write!(f, "{n}"),
            Self::Cat(s) => write!(f, "{s}"),
        }
    }
}

/// An ordered sequence of exactly ten feature slots in canonical order.
///
/// Constructed only by the normalizer (and test helpers), consumed once by
/// the scorer, then discarded. No state persists across invocations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    values: Vec<FeatureValue>,
}

impl FeatureVector {
    /// Build a vector from slots already in canonical order.
    ///
    /// # Errors
    /// Returns an error if the slot count is not exactly ten.
    pub fn from_values(values: Vec<FeatureValue>) -> Result<Self, String> {
        if values.len() != MODEL_FEATURES.len() {
            return Err(format!(
                "Expected {} features, got {}",
                MODEL_FEATURES.len(),
                values.len()
            ));
        }
        Ok(Self { values })
    }

    /// Slots in canonical order.
    #[must_use]
    pub fn values(&self) -> &[FeatureValue] {
        &self.values
    }

    /// Number of slots (always ten).
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
