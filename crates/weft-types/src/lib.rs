//! # weft-types
//!
//! Shared types, identifiers, error types, and numeric constants
//! for the Weft constrained-dynamics solvers.
//!
//! This crate has zero domain logic — it defines the vocabulary
//! that all other Weft crates share.

pub mod constants;
pub mod error;
pub mod ids;
pub mod scalar;

pub use error::{WeftError, WeftResult};
pub use ids::ParticleId;
pub use scalar::Scalar;
