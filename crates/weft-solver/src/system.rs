//! The linear system handed to a solver.
//!
//! An external assembler builds `A` and `b` from simulation state each
//! step. The solver takes the system by value, so the assembler's
//! buffers are never mutated and later assembler-side changes cannot
//! reach a running solve.

use serde::{Deserialize, Serialize};
use weft_math::DenseMatrix;
use weft_types::{Scalar, WeftError, WeftResult};

/// An SPD linear system `A x = b`.
///
/// Symmetry and positive-definiteness of `A` are a caller contract and
/// are not checked; a violating matrix surfaces as non-convergence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearSystem {
    matrix: DenseMatrix,
    rhs: Vec<Scalar>,
}

impl LinearSystem {
    /// Creates a system, validating that `A` is square and `b` matches.
    pub fn new(matrix: DenseMatrix, rhs: Vec<Scalar>) -> WeftResult<Self> {
        if !matrix.is_square() {
            return Err(WeftError::DimensionMismatch(format!(
                "System matrix must be square, got {}×{}",
                matrix.rows, matrix.cols
            )));
        }
        if rhs.len() != matrix.rows {
            return Err(WeftError::DimensionMismatch(format!(
                "RHS length ({}) != matrix dimension ({})",
                rhs.len(),
                matrix.rows
            )));
        }
        Ok(Self { matrix, rhs })
    }

    /// System dimension n.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.matrix.rows
    }

    /// The stored operator `A`.
    #[inline]
    pub fn matrix(&self) -> &DenseMatrix {
        &self.matrix
    }

    /// The stored right-hand side `b`.
    #[inline]
    pub fn rhs(&self) -> &[Scalar] {
        &self.rhs
    }

    /// Residual `b - A x` for an iterate `x`.
    pub fn residual(&self, x: &[Scalar]) -> Vec<Scalar> {
        let ax = self.matrix.matvec(x);
        self.rhs.iter().zip(&ax).map(|(b, a)| b - a).collect()
    }
}
