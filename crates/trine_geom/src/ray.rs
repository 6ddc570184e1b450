use trine_math::{Scalar, Vector3};

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::line::Line;

/// Positions within a `Ray`.
pub mod index {
    pub const ORIGIN: usize = 0;
    pub const DIRECTION: usize = 1;
}

/// A ray in 3D space: an origin and a unit direction.
///
/// Points along the ray are `origin + t * direction` for `t >= 0`.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(transparent)]
pub struct Ray<T = f32>([Vector3<T>; 2]);

impl_flat_primitive!(Ray, 6, renormalized);

impl<T: Scalar> Ray<T> {
    /// Create a new ray. The direction is normalized.
    pub fn new(origin: Vector3<T>, direction: Vector3<T>) -> Self {
        Self([origin, direction.normalize()])
    }

    fn renormalized(self) -> Self {
        Self::new(self.origin(), self.direction())
    }

    /// A ray at the origin looking down -Z.
    pub fn identity() -> Self {
        Self([Vector3::zeros(), -Vector3::unit_z()])
    }

    /// A ray starting at the line's start and pointing towards its end.
    pub fn from_line(line: &Line<T>) -> Self {
        Self::new(line.start(), line.direction())
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Vector3<T> {
        self.0[index::ORIGIN]
    }

    /// Get the direction vector of the ray.
    #[inline]
    pub fn direction(&self) -> Vector3<T> {
        self.0[index::DIRECTION]
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    pub fn at(&self, t: T) -> Vector3<T> {
        self.origin() + self.direction() * t
    }
}

impl<T: Scalar> Default for Ray<T> {
    fn default() -> Self {
        Self::identity()
    }
}
