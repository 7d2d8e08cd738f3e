//! Solver configuration.
//!
//! Iteration cap and convergence tolerance. Everything is passed at
//! construction; there are no config files or environment variables.

use serde::{Deserialize, Serialize};
use weft_types::constants::{DEFAULT_MAX_ITERATIONS, SOLVER_TOLERANCE};
use weft_types::{Scalar, WeftError, WeftResult};

/// Configuration shared by all three solvers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Maximum solver iterations per solve.
    pub max_iterations: u32,

    /// Relative convergence tolerance ε.
    /// Iteration stops once the squared residual falls below
    /// ε² times its initial value.
    pub tolerance: Scalar,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            tolerance: SOLVER_TOLERANCE,
        }
    }
}

impl SolverConfig {
    /// Creates a config with an explicit iteration cap and the
    /// default tolerance.
    pub fn with_max_iterations(max_iterations: u32) -> Self {
        Self {
            max_iterations,
            ..Default::default()
        }
    }

    /// Checks that the tolerance is usable.
    pub fn validate(&self) -> WeftResult<()> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(WeftError::InvalidConfig(format!(
                "Tolerance must be finite and non-negative, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }

    /// Squared-residual termination threshold for a given initial
    /// squared residual.
    #[inline]
    pub(crate) fn threshold(&self, delta_0: Scalar) -> Scalar {
        self.tolerance * self.tolerance * delta_0
    }
}
