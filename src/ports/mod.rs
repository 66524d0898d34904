//! Ports layer: Trait definitions for external operations.
//!
//! Following Hexagonal Architecture, these traits define the boundary
//! between the application and the scoring artifact.

mod scorer;

pub use scorer::{ScoreError, Scorer};
