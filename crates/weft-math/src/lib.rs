//! # weft-math
//!
//! Linear algebra primitives for the Weft solvers.
//!
//! Provides:
//! - Re-exports of `glam` f64 types (`DVec3`, `DMat3`) for per-particle blocks
//! - Dense row-major matrix type for the system operator
//! - Slice-level vector helpers (dot products, scaled updates)

pub mod dense;
pub mod vector;

// Re-export glam f64 types as the canonical small-matrix types for Weft.
pub use glam::{DMat3, DVec3};

pub use dense::DenseMatrix;
