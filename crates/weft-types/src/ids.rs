//! Strongly-typed identifiers for simulation entities.
//!
//! Newtype wrapper prevents accidental mixing of particle indices
//! with raw component (3n-vector) offsets.

use serde::{Deserialize, Serialize};

/// Index into the per-particle arrays (constraints, targets).
///
/// One particle owns three consecutive components of the stacked
/// 3n-vectors handled by the constrained solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParticleId(pub u32);

impl ParticleId {
    /// Returns the raw index as `usize` for array indexing.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for ParticleId {
    fn from(val: u32) -> Self {
        Self(val)
    }
}
