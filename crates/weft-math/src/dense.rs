//! Dense matrix representation.
//!
//! The system operators handled by the solvers are small and dense
//! (assembled per simulation step by an external component), so a
//! flat row-major layout is sufficient. Sparse specialization is
//! deliberately out of scope.

use serde::{Deserialize, Serialize};
use weft_types::{Scalar, WeftError, WeftResult};

/// Dense row-major matrix.
///
/// Entry `(r, c)` lives at `data[r * cols + c]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DenseMatrix {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub cols: usize,
    /// Row-major entries (length = rows * cols).
    pub data: Vec<Scalar>,
}

impl DenseMatrix {
    /// Creates a zero matrix with the given dimensions.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Creates the n×n identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        m
    }

    /// Creates a matrix from row slices.
    ///
    /// All rows must have the same length.
    pub fn from_rows(rows: &[Vec<Scalar>]) -> WeftResult<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, |r| r.len());
        for (i, row) in rows.iter().enumerate() {
            if row.len() != ncols {
                return Err(WeftError::DimensionMismatch(format!(
                    "Row {} has {} entries, expected {}",
                    i,
                    row.len(),
                    ncols
                )));
            }
        }
        let mut data = Vec::with_capacity(nrows * ncols);
        for row in rows {
            data.extend_from_slice(row);
        }
        Ok(Self {
            rows: nrows,
            cols: ncols,
            data,
        })
    }

    /// Returns entry `(r, c)`.
    #[inline]
    pub fn get(&self, r: usize, c: usize) -> Scalar {
        self.data[r * self.cols + c]
    }

    /// Sets entry `(r, c)`.
    #[inline]
    pub fn set(&mut self, r: usize, c: usize, value: Scalar) {
        self.data[r * self.cols + c] = value;
    }

    /// Returns true if the matrix is square.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Matrix-vector product `A * v`.
    ///
    /// `v.len()` must equal `self.cols`.
    pub fn matvec(&self, v: &[Scalar]) -> Vec<Scalar> {
        debug_assert_eq!(v.len(), self.cols);
        let mut out = vec![0.0; self.rows];
        for r in 0..self.rows {
            let row = &self.data[r * self.cols..(r + 1) * self.cols];
            let mut acc = 0.0;
            for (a, x) in row.iter().zip(v) {
                acc += a * x;
            }
            out[r] = acc;
        }
        out
    }

    /// Returns the main diagonal (square matrices only).
    pub fn diagonal(&self) -> Vec<Scalar> {
        debug_assert!(self.is_square());
        (0..self.rows).map(|i| self.get(i, i)).collect()
    }
}
