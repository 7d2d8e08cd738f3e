//! Numeric constants and solver defaults.

use crate::scalar::Scalar;

/// Relative convergence tolerance ε for the iterative solvers.
///
/// Iteration stops when the squared residual falls below
/// ε² times its initial value.
pub const SOLVER_TOLERANCE: Scalar = 1.0e-12;

/// Default iteration cap for solvers constructed without an explicit one.
pub const DEFAULT_MAX_ITERATIONS: u32 = 1000;

/// Degrees of freedom per particle (3D velocity).
pub const PARTICLE_DOF: usize = 3;
