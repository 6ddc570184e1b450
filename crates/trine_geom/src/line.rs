use trine_math::{Scalar, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ray::Ray;

/// Positions within a `Line`.
pub mod index {
    pub const START: usize = 0;
    pub const END: usize = 1;
}

/// A line through two points.
///
/// Queries in [`crate::geometric_tests`] decide whether it is treated as an
/// infinite line or as the segment between `start` and `end`.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(transparent)]
pub struct Line<T = f32>([Vector3<T>; 2]);

impl_flat_primitive!(Line, 6);

impl<T: Scalar> Line<T> {
    pub fn new(start: Vector3<T>, end: Vector3<T>) -> Self {
        Self([start, end])
    }

    pub fn zeros() -> Self {
        Self([Vector3::zeros(); 2])
    }

    /// Same as [`Line::new`].
    pub fn from_points(start: Vector3<T>, end: Vector3<T>) -> Self {
        Self::new(start, end)
    }

    /// The unit-length line from the ray's origin along its direction.
    pub fn from_ray(ray: &Ray<T>) -> Self {
        Self::new(ray.origin(), ray.origin() + ray.direction())
    }

    #[inline]
    pub fn start(&self) -> Vector3<T> {
        self.0[index::START]
    }

    #[inline]
    pub fn end(&self) -> Vector3<T> {
        self.0[index::END]
    }

    /// `end - start`, not normalized.
    pub fn direction(&self) -> Vector3<T> {
        self.end() - self.start()
    }

    pub fn length(&self) -> T {
        self.direction().length()
    }
}

impl<T: Scalar> Default for Line<T> {
    fn default() -> Self {
        Self::zeros()
    }
}
