//! # weft-solver
//!
//! Iterative linear-system solvers for constrained particle dynamics.
//!
//! ## Key Types
//!
//! - [`LinearSystem`] — owned SPD operator `A` and right-hand side `b`
//! - [`ConjugateGradientSolver`] — unconstrained CG (Shewchuk formulation)
//! - [`SteepestDescentSolver`] — un-accelerated baseline
//! - [`ConstrainedPcgSolver`] — Baraff–Witkin filtered PCG for per-particle
//!   kinematic constraints
//! - [`ParticleConstraintSet`] — compiled per-particle projection filter
//!
//! An external assembler builds `A` and `b` each simulation step; the
//! solvers own no simulation state and perform pure numerical iteration.

pub mod cg;
pub mod config;
pub mod constraint;
pub mod mpcg;
pub mod precondition;
pub mod sd;
pub mod system;
pub mod trajectory;

pub use cg::ConjugateGradientSolver;
pub use config::SolverConfig;
pub use constraint::{ParticleConstraint, ParticleConstraintSet};
pub use mpcg::{ConstrainedPcgSolver, SolveReport};
pub use precondition::JacobiPreconditioner;
pub use sd::SteepestDescentSolver;
pub use system::LinearSystem;
pub use trajectory::SolveTrajectory;
