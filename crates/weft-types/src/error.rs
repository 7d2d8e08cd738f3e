//! Error types for the Weft solvers.
//!
//! All crates return `WeftResult<T>` from fallible operations.
//! Malformed input fails fast at construction with a descriptive
//! error; numerical non-convergence is reported in-band by the
//! solvers and is not an error.

use thiserror::Error;

/// Unified error type for the Weft solvers.
#[derive(Debug, Error)]
pub enum WeftError {
    /// Matrix/vector dimensions disagree.
    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// A particle constraint specification is malformed.
    #[error("Invalid constraint: {0}")]
    InvalidConstraint(String),

    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Convenience alias for `Result<T, WeftError>`.
pub type WeftResult<T> = Result<T, WeftError>;
