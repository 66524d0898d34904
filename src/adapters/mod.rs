//! Adapters layer: Concrete implementations of ports.
//!
//! - `linear`: logistic-regression pipeline loaded from a JSON artifact

pub mod linear;

pub use linear::LinearScorer;
