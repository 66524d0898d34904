//! Application layer: Use cases and services.
//!
//! This module orchestrates domain logic with ports to implement the
//! shared normalize-and-score pipeline behind every invocation adapter.

mod prediction;

pub use prediction::{PredictionService, STRICT_KEYS_ENV};
