//! Slice-level vector helpers used by the iteration loops.

use weft_types::Scalar;

/// Dot product of two equal-length slices.
#[inline]
pub fn dot(a: &[Scalar], b: &[Scalar]) -> Scalar {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Squared Euclidean norm.
#[inline]
pub fn norm_sq(a: &[Scalar]) -> Scalar {
    dot(a, a)
}

/// In-place scaled update: `x += s * d`.
#[inline]
pub fn add_scaled(x: &mut [Scalar], s: Scalar, d: &[Scalar]) {
    debug_assert_eq!(x.len(), d.len());
    for (xi, di) in x.iter_mut().zip(d) {
        *xi += s * di;
    }
}

/// In-place scaled update: `x -= s * d`.
#[inline]
pub fn sub_scaled(x: &mut [Scalar], s: Scalar, d: &[Scalar]) {
    debug_assert_eq!(x.len(), d.len());
    for (xi, di) in x.iter_mut().zip(d) {
        *xi -= s * di;
    }
}
