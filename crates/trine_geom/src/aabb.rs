use trine_math::{Matrix44, Scalar, Stack, Vector3};

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::error::{GeomError, GeomResult};
use crate::interval::Interval;

/// Positions within an `Aabb`.
pub mod index {
    pub const MINIMUM: usize = 0;
    pub const MAXIMUM: usize = 1;
}

/// Axis-Aligned Bounding Box stored as its `[minimum, maximum]` corners.
///
/// Every constructor keeps `minimum <= maximum` componentwise.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(transparent)]
pub struct Aabb<T = f32>([Vector3<T>; 2]);

impl_flat_primitive!(Aabb, 6, ordered);

impl<T: Scalar> Aabb<T> {
    /// A box with both corners at the origin.
    pub fn zeros() -> Self {
        Self([Vector3::zeros(); 2])
    }

    /// Create an AABB from two corner points, in any order.
    pub fn from_bounds(a: Vector3<T>, b: Vector3<T>) -> Self {
        Self([a.min(b), a.max(b)])
    }

    fn ordered(self) -> Self {
        Self::from_bounds(self.minimum(), self.maximum())
    }

    /// The tightest box around `points`.
    pub fn from_points(points: &[Vector3<T>]) -> GeomResult<Self> {
        let (first, rest) = points.split_first().ok_or_else(|| {
            log::debug!("aabb from an empty point set");
            GeomError::Empty("aabb")
        })?;
        Ok(Self([*first, *first]).add_points(rest))
    }

    /// Same as [`Aabb::from_points`] for a stack of points.
    pub fn from_stack(points: &Stack<T, 3>) -> GeomResult<Self> {
        Self::from_points(points.rows())
    }

    /// The tightest box around every box in `aabbs`.
    pub fn from_aabbs(aabbs: &[Aabb<T>]) -> GeomResult<Self> {
        let (first, rest) = aabbs.split_first().ok_or_else(|| {
            log::debug!("aabb from an empty box set");
            GeomError::Empty("aabb")
        })?;
        Ok(first.add_aabbs(rest))
    }

    /// Grow the box to include `points`. Never shrinks.
    pub fn add_points(&self, points: &[Vector3<T>]) -> Self {
        let (min, max) = points
            .iter()
            .fold((self.minimum(), self.maximum()), |(min, max), p| (min.min(*p), max.max(*p)));
        Self([min, max])
    }

    /// Grow the box to include every box in `aabbs`. Never shrinks.
    pub fn add_aabbs(&self, aabbs: &[Aabb<T>]) -> Self {
        aabbs.iter().fold(*self, |acc, other| {
            Self([acc.minimum().min(other.minimum()), acc.maximum().max(other.maximum())])
        })
    }

    #[inline]
    pub fn minimum(&self) -> Vector3<T> {
        self.0[index::MINIMUM]
    }

    #[inline]
    pub fn maximum(&self) -> Vector3<T> {
        self.0[index::MAXIMUM]
    }

    /// Returns the center point of the bounding box.
    pub fn centre_point(&self) -> Vector3<T> {
        (self.minimum() + self.maximum()) * T::half()
    }

    /// Get the interval for a specific axis (0=X, 1=Y, 2=Z).
    pub fn axis_interval(&self, axis: usize) -> Interval<T> {
        Interval::new(self.minimum()[axis], self.maximum()[axis])
    }

    /// The nearest point inside the box.
    pub fn clamp_point(&self, point: Vector3<T>) -> Vector3<T> {
        Vector3::new(
            self.axis_interval(0).clamp(point.x()),
            self.axis_interval(1).clamp(point.y()),
            self.axis_interval(2).clamp(point.z()),
        )
    }

    /// [`Aabb::clamp_point`] for every row.
    pub fn clamp_points(&self, points: &Stack<T, 3>) -> Stack<T, 3> {
        points.map_rows(|p| self.clamp_point(*p))
    }

    /// True if `point` is inside or on the surface of the box.
    pub fn contains_point(&self, point: Vector3<T>) -> bool {
        (0..3).all(|axis| self.axis_interval(axis).contains(point[axis]))
    }

    /// The eight corners, minimum first and maximum last.
    pub fn corners(&self) -> [Vector3<T>; 8] {
        let (lo, hi) = (self.minimum(), self.maximum());
        [
            Vector3::new(lo.x(), lo.y(), lo.z()),
            Vector3::new(hi.x(), lo.y(), lo.z()),
            Vector3::new(lo.x(), hi.y(), lo.z()),
            Vector3::new(hi.x(), hi.y(), lo.z()),
            Vector3::new(lo.x(), lo.y(), hi.z()),
            Vector3::new(hi.x(), lo.y(), hi.z()),
            Vector3::new(lo.x(), hi.y(), hi.z()),
            Vector3::new(hi.x(), hi.y(), hi.z()),
        ]
    }

    /// Transform the box by `matrix`.
    /// Computes the bounding box of all 8 transformed corners.
    pub fn transform(&self, matrix: &Matrix44<T>) -> Self {
        let corners = self.corners().map(|corner| matrix.apply_to_point(corner));
        let first = Self([corners[0], corners[0]]);
        first.add_points(&corners[1..])
    }
}

impl<T: Scalar> Default for Aabb<T> {
    fn default() -> Self {
        Self::zeros()
    }
}
