//! Scalar type alias for the solvers.
//!
//! Using `f64` for numerical robustness: the solvers terminate on a
//! relative squared-residual tolerance of 1e-24, which is below f32
//! resolution. This alias keeps the choice in one place.

/// The floating-point type used throughout the solvers.
pub type Scalar = f64;
