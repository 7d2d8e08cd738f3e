//! Jacobi (diagonal) preconditioner.
//!
//! `M = diag(A)`, computed once at solver construction and applied as a
//! per-entry multiplication by the stored inverse diagonal. Strictly
//! positive diagonal entries are a caller contract; a zero or negative
//! entry surfaces as non-convergence, which the iteration cap bounds.

use serde::{Deserialize, Serialize};
use weft_math::DenseMatrix;
use weft_types::Scalar;

/// Jacobi preconditioner, stored as diagonal and inverse diagonal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JacobiPreconditioner {
    diag: Vec<Scalar>,
    inv_diag: Vec<Scalar>,
}

impl JacobiPreconditioner {
    /// Extracts the diagonal of `A`.
    pub fn new(matrix: &DenseMatrix) -> Self {
        let diag = matrix.diagonal();
        let inv_diag = diag.iter().map(|d| 1.0 / d).collect();
        Self { diag, inv_diag }
    }

    /// The diagonal of `A` (the preconditioner `M`).
    pub fn diagonal(&self) -> &[Scalar] {
        &self.diag
    }

    /// Applies `M⁻¹` to a vector.
    pub fn apply(&self, v: &[Scalar]) -> Vec<Scalar> {
        debug_assert_eq!(v.len(), self.inv_diag.len());
        v.iter().zip(&self.inv_diag).map(|(x, d)| x * d).collect()
    }
}
