//! Per-particle kinematic constraint filter.
//!
//! Each particle carries zero to three mutually independent prohibited
//! directions. A particle's constraint compiles to a 3×3 projection
//! matrix `S_i` that zeroes velocity components along those directions;
//! the global filter `S = blockdiag(S_1, …, S_n)` is idempotent and
//! symmetric. Every vector crossing into physically meaningful
//! velocity/residual/direction space inside the constrained solver must
//! pass through this filter.

use serde::{Deserialize, Serialize};
use weft_math::{DMat3, DVec3};
use weft_types::constants::PARTICLE_DOF;
use weft_types::{ParticleId, Scalar, WeftError, WeftResult};

/// Outer product `p pᵀ` as a column-major 3×3 matrix.
#[inline]
fn outer(p: DVec3) -> DMat3 {
    DMat3::from_cols(p * p.x, p * p.y, p * p.z)
}

/// Constraint on a single particle: up to three prohibited unit
/// directions.
///
/// Directions are normalized at construction. The caller must supply
/// mutually independent directions; with three of them the particle is
/// fully fixed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParticleConstraint {
    directions: Vec<DVec3>,
}

impl ParticleConstraint {
    /// An unconstrained (fully free) particle.
    pub fn free() -> Self {
        Self::default()
    }

    /// Creates a constraint from prohibited directions.
    ///
    /// Fails if more than three directions are given or any direction
    /// has (near-)zero length.
    pub fn new(directions: &[DVec3]) -> WeftResult<Self> {
        if directions.len() > PARTICLE_DOF {
            return Err(WeftError::InvalidConstraint(format!(
                "A particle has {} degrees of freedom, got {} prohibited directions",
                PARTICLE_DOF,
                directions.len()
            )));
        }
        let mut normalized = Vec::with_capacity(directions.len());
        for (i, dir) in directions.iter().enumerate() {
            let len = dir.length();
            if len < 1e-12 {
                return Err(WeftError::InvalidConstraint(format!(
                    "Prohibited direction {} has zero length",
                    i
                )));
            }
            normalized.push(*dir / len);
        }
        Ok(Self {
            directions: normalized,
        })
    }

    /// The normalized prohibited directions.
    pub fn prohibited(&self) -> &[DVec3] {
        &self.directions
    }

    /// Number of degrees of freedom removed (0–3).
    pub fn dof_removed(&self) -> usize {
        self.directions.len()
    }

    /// The projection matrix `S_i` onto the free subspace.
    ///
    /// Identity for a free particle, zero for a fully fixed one.
    pub fn projection(&self) -> DMat3 {
        if self.directions.len() == PARTICLE_DOF {
            return DMat3::ZERO;
        }
        let mut s = DMat3::IDENTITY;
        for p in &self.directions {
            s = s - outer(*p);
        }
        s
    }
}

/// Compiled constraint set: one projection matrix per particle, indexed
/// by [`ParticleId`].
///
/// Fixed for the lifetime of the solver that owns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticleConstraintSet {
    projections: Vec<DMat3>,
}

impl ParticleConstraintSet {
    /// Compiles per-particle constraints into projection matrices.
    pub fn new(constraints: &[ParticleConstraint]) -> Self {
        Self {
            projections: constraints.iter().map(|c| c.projection()).collect(),
        }
    }

    /// A set of `n` unconstrained particles.
    pub fn all_free(n: usize) -> Self {
        Self {
            projections: vec![DMat3::IDENTITY; n],
        }
    }

    /// Number of particles.
    #[inline]
    pub fn num_particles(&self) -> usize {
        self.projections.len()
    }

    /// Stacked vector length (3n) this set filters.
    #[inline]
    pub fn stacked_len(&self) -> usize {
        self.projections.len() * PARTICLE_DOF
    }

    /// The projection matrix `S_i` for one particle.
    pub fn projection(&self, id: ParticleId) -> &DMat3 {
        &self.projections[id.index()]
    }

    /// Applies the filter `S` to a stacked 3n-vector.
    ///
    /// Pure function; fails if `v` does not have length 3n.
    pub fn filter(&self, v: &[Scalar]) -> WeftResult<Vec<Scalar>> {
        self.check_len(v)?;
        Ok(self.apply(v))
    }

    /// Applies the complement `I − S`, keeping only the prohibited
    /// components. Used to seed the constrained solve from the target
    /// velocity so free components start at zero.
    pub fn filter_complement(&self, v: &[Scalar]) -> WeftResult<Vec<Scalar>> {
        self.check_len(v)?;
        Ok(self.apply_complement(v))
    }

    fn check_len(&self, v: &[Scalar]) -> WeftResult<()> {
        if v.len() != self.stacked_len() {
            return Err(WeftError::DimensionMismatch(format!(
                "Vector length ({}) != 3 × {} particles",
                v.len(),
                self.num_particles()
            )));
        }
        Ok(())
    }

    /// Unchecked filter application for the iteration loop, where all
    /// working vectors share the validated stacked length.
    pub(crate) fn apply(&self, v: &[Scalar]) -> Vec<Scalar> {
        debug_assert_eq!(v.len(), self.stacked_len());
        let mut out = vec![0.0; v.len()];
        for (i, s) in self.projections.iter().enumerate() {
            let base = i * PARTICLE_DOF;
            let v_i = DVec3::new(v[base], v[base + 1], v[base + 2]);
            let s_v = *s * v_i;
            out[base] = s_v.x;
            out[base + 1] = s_v.y;
            out[base + 2] = s_v.z;
        }
        out
    }

    /// Unchecked `I − S` application.
    pub(crate) fn apply_complement(&self, v: &[Scalar]) -> Vec<Scalar> {
        let filtered = self.apply(v);
        v.iter().zip(&filtered).map(|(vi, fi)| vi - fi).collect()
    }
}
