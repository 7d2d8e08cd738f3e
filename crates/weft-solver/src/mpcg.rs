//! Modified preconditioned conjugate gradient (filtered PCG).
//!
//! Solves `A · Δv = b` over stacked per-particle 3-vectors, holding the
//! components along each particle's prohibited directions fixed at the
//! target velocity. Every vector entering or leaving the operator `A`
//! or the preconditioner is passed through the constraint filter, which
//! keeps the free subspace invariant under the restricted operator —
//! the conjugacy argument CG relies on does not survive an unfiltered
//! vector anywhere in the loop.
//!
//! Algorithm from Baraff & Witkin, "Large Steps in Cloth Simulation"
//! (SIGGRAPH '98), with an added iteration cap so that ill-conditioned
//! or inconsistent inputs terminate with a non-converged report instead
//! of looping forever.

use serde::{Deserialize, Serialize};
use weft_math::vector::{add_scaled, dot, sub_scaled};
use weft_math::{DenseMatrix, DVec3};
use weft_types::constants::PARTICLE_DOF;
use weft_types::{Scalar, WeftError, WeftResult};

use crate::config::SolverConfig;
use crate::constraint::ParticleConstraintSet;
use crate::precondition::JacobiPreconditioner;
use crate::system::LinearSystem;

/// Outcome of a constrained solve.
///
/// Non-convergence is a recoverable state, not an error: `delta_v`
/// holds the best-available iterate either way.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveReport {
    /// The solved velocity update, stacked (length 3n).
    pub delta_v: Vec<Scalar>,
    /// Number of iterations actually performed.
    pub iterations: u32,
    /// Final filtered squared residual `rᵀ M⁻¹ r`.
    pub residual: Scalar,
    /// Whether the residual fell below the tolerance threshold before
    /// the iteration cap.
    pub converged: bool,
}

/// Constrained, Jacobi-preconditioned CG solver.
///
/// Constructed once per assembled system; owns copies of all inputs
/// and performs pure numerical iteration in `solve()`.
pub struct ConstrainedPcgSolver {
    system: LinearSystem,
    constraints: ParticleConstraintSet,
    target: Vec<DVec3>,
    preconditioner: JacobiPreconditioner,
    config: SolverConfig,
}

impl ConstrainedPcgSolver {
    /// Creates a solver with the default configuration.
    ///
    /// `matrix` must be 3n×3n, `rhs` length 3n, `constraints` and
    /// `target` sized for n particles. `diag(A)` must be strictly
    /// positive (caller contract, not validated).
    pub fn new(
        matrix: DenseMatrix,
        rhs: Vec<Scalar>,
        constraints: ParticleConstraintSet,
        target: Vec<DVec3>,
    ) -> WeftResult<Self> {
        Self::with_config(matrix, rhs, constraints, target, SolverConfig::default())
    }

    /// Creates a solver with full configuration control.
    pub fn with_config(
        matrix: DenseMatrix,
        rhs: Vec<Scalar>,
        constraints: ParticleConstraintSet,
        target: Vec<DVec3>,
        config: SolverConfig,
    ) -> WeftResult<Self> {
        config.validate()?;

        let n = constraints.num_particles();
        if target.len() != n {
            return Err(WeftError::DimensionMismatch(format!(
                "Target velocity has {} entries, expected one per particle ({})",
                target.len(),
                n
            )));
        }

        let system = LinearSystem::new(matrix, rhs)?;
        if system.dimension() != n * PARTICLE_DOF {
            return Err(WeftError::DimensionMismatch(format!(
                "System dimension ({}) != 3 × {} particles",
                system.dimension(),
                n
            )));
        }

        let preconditioner = JacobiPreconditioner::new(system.matrix());

        Ok(Self {
            system,
            constraints,
            target,
            preconditioner,
            config,
        })
    }

    /// The stored operator `A`.
    pub fn matrix(&self) -> &DenseMatrix {
        self.system.matrix()
    }

    /// The stored right-hand side `b`.
    pub fn rhs(&self) -> &[Scalar] {
        self.system.rhs()
    }

    /// The Jacobi preconditioner `M = diag(A)`.
    pub fn preconditioner(&self) -> &JacobiPreconditioner {
        &self.preconditioner
    }

    /// The per-particle target velocity `z`.
    pub fn target(&self) -> &[DVec3] {
        &self.target
    }

    /// Number of particles.
    pub fn num_particles(&self) -> usize {
        self.constraints.num_particles()
    }

    /// Applies the constraint filter `S` to an arbitrary stacked
    /// 3n-vector. Pure; does not touch solver state.
    pub fn filter(&self, v: &[Scalar]) -> WeftResult<Vec<Scalar>> {
        self.constraints.filter(v)
    }

    /// The target velocity stacked into a 3n-vector.
    fn stacked_target(&self) -> Vec<Scalar> {
        let mut out = Vec::with_capacity(self.target.len() * PARTICLE_DOF);
        for z in &self.target {
            out.extend_from_slice(&[z.x, z.y, z.z]);
        }
        out
    }

    /// Solve `A · Δv = b` subject to the particle constraints.
    ///
    /// The seed iterate is `(I − S)·z`: prohibited components start at
    /// their target value and are never altered afterwards (every
    /// search direction is filtered), free components start at zero.
    pub fn solve(&self) -> SolveReport {
        let a = self.system.matrix();
        let filter = &self.constraints;
        let m = &self.preconditioner;

        let mut delta_v = filter.apply_complement(&self.stacked_target());

        // δ₀ = filter(b)ᵀ M⁻¹ filter(b), the reference scale for convergence
        let fb = filter.apply(self.system.rhs());
        let delta_0 = dot(&fb, &m.apply(&fb));
        let threshold = self.config.threshold(delta_0);

        let mut r = filter.apply(&self.system.residual(&delta_v));
        let mut c = filter.apply(&m.apply(&r));
        let mut delta_new = dot(&r, &c);

        let mut i = 0u32;
        while delta_new > threshold && i < self.config.max_iterations {
            let q = filter.apply(&a.matvec(&c));
            let alpha = delta_new / dot(&c, &q);

            add_scaled(&mut delta_v, alpha, &c);
            sub_scaled(&mut r, alpha, &q);

            let s = m.apply(&r);
            let delta_old = delta_new;
            delta_new = dot(&r, &s);
            let beta = delta_new / delta_old;

            // next direction, filtered back into the free subspace
            let combined: Vec<Scalar> =
                s.iter().zip(&c).map(|(si, ci)| si + beta * ci).collect();
            c = filter.apply(&combined);

            i += 1;
            tracing::trace!(iteration = i, residual = delta_new, "mpcg_iteration");
        }

        let converged = delta_new <= threshold;
        tracing::debug!(
            iterations = i,
            residual = delta_new,
            converged,
            "mpcg_solve"
        );

        SolveReport {
            delta_v,
            iterations: i,
            residual: delta_new,
            converged,
        }
    }
}
