//! Steepest descent solver.
//!
//! Uses the residual itself as the descent direction every step, with
//! no conjugacy correction. This is the un-accelerated baseline: on the
//! same SPD system it converges strictly no faster than CG, which makes
//! it useful as a cross-check rather than a production solver.

use weft_math::vector::{add_scaled, dot, norm_sq};
use weft_math::DenseMatrix;
use weft_types::Scalar;

use crate::config::SolverConfig;
use crate::system::LinearSystem;
use crate::trajectory::SolveTrajectory;

/// Steepest descent solver for `A x = b`.
///
/// Same constructor signature, termination rule, and output shape as
/// [`crate::ConjugateGradientSolver`].
pub struct SteepestDescentSolver {
    system: LinearSystem,
    config: SolverConfig,
}

impl SteepestDescentSolver {
    /// Creates a solver with an explicit iteration cap and the default
    /// tolerance.
    pub fn new(system: LinearSystem, max_iterations: u32) -> Self {
        Self {
            system,
            config: SolverConfig::with_max_iterations(max_iterations),
        }
    }

    /// Creates a solver with full configuration control.
    pub fn with_config(
        system: LinearSystem,
        config: SolverConfig,
    ) -> weft_types::WeftResult<Self> {
        config.validate()?;
        Ok(Self { system, config })
    }

    /// The stored operator `A`.
    pub fn matrix(&self) -> &DenseMatrix {
        self.system.matrix()
    }

    /// The stored right-hand side `b`.
    pub fn rhs(&self) -> &[Scalar] {
        self.system.rhs()
    }

    /// Solve `A x = b` from `x_0 = 0`.
    ///
    /// Returns the trajectory of iterates and residuals. Termination is
    /// the same as CG: iteration cap or relative squared-residual
    /// tolerance, whichever triggers first.
    pub fn solve(&self) -> SolveTrajectory {
        let a = self.system.matrix();
        let n = self.system.dimension();

        let mut x = vec![0.0; n];
        let mut r = self.system.residual(&x);

        let mut iterates = vec![x.clone()];
        let mut residuals = vec![r.clone()];

        let mut delta = norm_sq(&r);
        let threshold = self.config.threshold(delta);

        let mut i = 0u32;
        while i < self.config.max_iterations && delta > threshold {
            let q = a.matvec(&r);
            let alpha = delta / dot(&r, &q);

            // update x
            add_scaled(&mut x, alpha, &r);

            // recompute r from the iterate
            r = self.system.residual(&x);
            delta = norm_sq(&r);

            i += 1;
            iterates.push(x.clone());
            residuals.push(r.clone());
            tracing::trace!(iteration = i, residual = delta, "sd_iteration");
        }

        let converged = delta <= threshold;
        tracing::debug!(iterations = i, residual = delta, converged, "sd_solve");

        SolveTrajectory {
            iterates,
            directions: residuals,
            converged,
        }
    }
}
