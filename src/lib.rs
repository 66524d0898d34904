//! # Strokesense
//!
//! Stroke-risk prediction exposed through three invocation surfaces that share
//! a single normalize-and-score pipeline.
//!
//! This crate provides:
//! - Normalization of loosely-typed patient records into the canonical
//!   ordered feature vector the scoring artifact expects
//! - A scorer adapter that loads a serialized classifier from disk
//! - Three thin front ends: an HTTP endpoint, a one-shot stdin protocol,
//!   and a one-shot CLI-argument protocol
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - `domain`: Core types (feature vector, normalizer, risk levels)
//! - `ports`: Trait definitions for external operations
//! - `adapters`: Concrete implementations (linear model artifact)
//! - `application`: Use cases orchestrating domain and ports
//! - `server`: HTTP routing and request handling

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;
pub mod server;

pub use domain::{FeatureValue, FeatureVector, Prediction, RiskLevel};

/// Result type for strokesense operations.
pub type Result<T> = std::result::Result<T, StrokesenseError>;

/// Main error type for strokesense.
#[derive(Debug, thiserror::Error)]
pub enum StrokesenseError {
    #[error("Invalid patient record: {0}")]
    Normalize(#[from] domain::NormalizeError),

    #[error("Scoring failed: {0}")]
    Score(#[from] ports::ScoreError),

    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Parse a truthy environment variable (`1`/`true`/`yes`).
pub fn parse_bool_env(name: &str) -> bool {
    std::env::var(name)
        .map(|v| matches!(v.as_str(), "1" | "true" | "TRUE" | "yes" | "YES"))
        .unwrap_or(false)
}

/// Environment variable naming the directory that holds scoring artifacts.
pub const MODEL_DIR_ENV: &str = "STROKESENSE_MODEL_DIR";

/// Default artifact directory, relative to the working directory.
pub const DEFAULT_MODEL_DIR: &str = "models";

/// Default artifact file name inside the artifact directory.
pub const DEFAULT_MODEL_FILE: &str = "stroke_model.json";

/// Resolve an artifact file name against the configured artifact directory.
#[must_use]
pub fn resolve_model_path(file_name: Option<&str>) -> std::path::PathBuf {
    let dir = std::env::var(MODEL_DIR_ENV).unwrap_or_else(|_| DEFAULT_MODEL_DIR.to_string());
    std::path::Path::new(&dir).join(file_name.unwrap_or(DEFAULT_MODEL_FILE))
}
