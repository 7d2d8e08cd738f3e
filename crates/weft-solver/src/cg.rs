//! Conjugate gradient solver (Shewchuk formulation).
//!
//! Unconstrained dense CG with A-orthogonal search directions. For an
//! n×n SPD system this reaches the exact solution in at most n
//! iterations in exact arithmetic. Returns the full iterate trajectory
//! for convergence diagnostics.

use weft_math::vector::{add_scaled, dot, norm_sq};
use weft_math::DenseMatrix;
use weft_types::Scalar;

use crate::config::SolverConfig;
use crate::system::LinearSystem;
use crate::trajectory::SolveTrajectory;

/// Conjugate gradient solver for `A x = b`.
///
/// Owns its system; the caller's matrices are never mutated.
pub struct ConjugateGradientSolver {
    system: LinearSystem,
    config: SolverConfig,
}

impl ConjugateGradientSolver {
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
    /// Returns the trajectory of iterates and search directions. The
    /// loop ends when the iteration cap is reached **or** the squared
    /// residual falls below ε² times its initial value, whichever
    /// triggers first; a capped, partially converged trajectory is
    /// valid output, not an error.
    pub fn solve(&self) -> SolveTrajectory {
        let n = self.system.dimension();
        let a = self.system.matrix();

        let mut x = vec![0.0; n];
        let mut r = self.system.residual(&x);
        let mut d = r.clone();

        let mut iterates = vec![x.clone()];
        let mut directions = vec![d.clone()];

        let mut delta_new = norm_sq(&r);
        let threshold = self.config.threshold(delta_new);

        let mut i = 0u32;
        while i < self.config.max_iterations && delta_new > threshold {
            let q = a.matvec(&d);
            let alpha = delta_new / dot(&d, &q);

            // update x
            add_scaled(&mut x, alpha, &d);

            // recompute r from the iterate
            r = self.system.residual(&x);
            let delta_old = delta_new;
            delta_new = norm_sq(&r);
            let beta = delta_new / delta_old;

            // update d
            for k in 0..n {
                d[k] = r[k] + beta * d[k];
            }

            i += 1;
            iterates.push(x.clone());
            directions.push(d.clone());
            tracing::trace!(iteration = i, residual = delta_new, "cg_iteration");
        }

        let converged = delta_new <= threshold;
        tracing::debug!(
            iterations = i,
            residual = delta_new,
            converged,
            "cg_solve"
        );

        SolveTrajectory {
            iterates,
            directions,
            converged,
        }
    }
}
