//! Domain layer: Core business types and logic.
//!
//! This module contains pure Rust types with no transport concerns:
//! the canonical feature vector, the wire-to-canonical normalizer, and
//! prediction result types.

mod features;
mod patient;
mod risk;

pub use features::{FeatureValue, FeatureVector, MODEL_FEATURES};
pub use patient::{normalize, NormalizeError, PatientRecord};
pub use risk::{Prediction, RiskLevel};
