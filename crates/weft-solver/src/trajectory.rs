//! Solve trajectory — the full iterate history of a CG or SD solve.
//!
//! The unconstrained solvers return every intermediate iterate together
//! with the matching search direction (CG) or residual (SD). This exists
//! for convergence diagnostics and visualization; production constrained
//! stepping uses [`crate::ConstrainedPcgSolver`], which returns only the
//! final answer.

use serde::{Deserialize, Serialize};
use weft_types::Scalar;

/// Ordered iterate history `x_0, x_1, …, x_k` of one solve.
///
/// `iterates` and `directions` always have equal length ≥ 1: index 0
/// holds the seed iterate and initial direction, index `i` the state
/// after iteration `i`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveTrajectory {
    /// Intermediate solution vectors, seed first.
    pub iterates: Vec<Vec<Scalar>>,
    /// Search directions (CG) or residuals (SD), aligned with `iterates`.
    pub directions: Vec<Vec<Scalar>>,
    /// Whether the squared residual fell below the tolerance threshold
    /// (false means the iteration cap ended the loop first — the final
    /// iterate is still the best available and is valid output).
    pub converged: bool,
}

impl SolveTrajectory {
    /// Number of iterations actually taken.
    #[inline]
    pub fn iterations(&self) -> u32 {
        (self.iterates.len() - 1) as u32
    }

    /// The final (best-available) iterate.
    pub fn final_iterate(&self) -> &[Scalar] {
        self.iterates
            .last()
            .expect("trajectory holds at least the seed iterate")
    }
}
