//! Axis-aligned minimum bounding boxes.
//!
//! An AAMBB bounds its contents under any rotation about the origin: it is the
//! cube `[-r, r]^3` where `r` is the largest distance from the origin of any
//! point added to it. Callers supply any translation themselves.
//!
//! Because the radius comes from point lengths, adding an AAMBB's own corners
//! back into it grows it by a factor of `sqrt(3)` each time. Do not feed a box
//! into itself.

use trine_math::{Scalar, Stack, Vector3};

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::aabb::Aabb;
use crate::error::{GeomError, GeomResult};

/// Positions within an `Aambb`.
pub mod index {
    pub const MINIMUM: usize = 0;
    pub const MAXIMUM: usize = 1;
}

/// An origin-centred cube stored as `[minimum, maximum]`, with
/// `minimum == -maximum`.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(transparent)]
pub struct Aambb<T = f32>([Vector3<T>; 2]);

impl_flat_primitive!(Aambb, 6, symmetric);

impl<T: Scalar> Aambb<T> {
    pub fn zeros() -> Self {
        Self::from_radius(T::zero())
    }

    fn from_radius(radius: T) -> Self {
        let extent = Vector3::splat(radius);
        Self([-extent, extent])
    }

    // Raw corners keep only their largest magnitude as the radius.
    fn symmetric(self) -> Self {
        let radius = self.minimum().abs().max(self.maximum().abs()).max_element();
        Self::from_radius(radius)
    }

    /// The cube that contains `points` under any rotation.
    pub fn from_points(points: &[Vector3<T>]) -> GeomResult<Self> {
        if points.is_empty() {
            log::debug!("aambb from an empty point set");
            return Err(GeomError::Empty("aambb"));
        }
        Ok(Self::zeros().add_points(points))
    }

    /// The cube that contains the box spanned by `minimum` and `maximum`.
    pub fn from_bounds(minimum: Vector3<T>, maximum: Vector3<T>) -> Self {
        Self::zeros().add_points(&[minimum, maximum])
    }

    /// The cube that contains every corner of every box in `aabbs`.
    pub fn from_aabbs(aabbs: &[Aabb<T>]) -> GeomResult<Self> {
        if aabbs.is_empty() {
            log::debug!("aambb from an empty box set");
            return Err(GeomError::Empty("aambb"));
        }
        Ok(Self::zeros().add_aabbs(aabbs))
    }

    /// Grow to contain `points`.
    ///
    /// Only the current radius is kept, not the corners, so this does not
    /// compound on repeated calls with the same points.
    pub fn add_points(&self, points: &[Vector3<T>]) -> Self {
        let radius = points
            .iter()
            .fold(self.radius(), |radius, p| radius.max(p.length()));
        Self::from_radius(radius)
    }

    /// Grow to contain every box in `aabbs`.
    pub fn add_aabbs(&self, aabbs: &[Aabb<T>]) -> Self {
        let corners: Vec<Vector3<T>> = aabbs.iter().flat_map(|aabb| aabb.corners()).collect();
        self.add_points(&corners)
    }

    /// Half the edge length.
    pub fn radius(&self) -> T {
        self.maximum().x()
    }

    /// Always the origin.
    pub fn centre_point(&self) -> Vector3<T> {
        (self.minimum() + self.maximum()) * T::half()
    }

    #[inline]
    pub fn minimum(&self) -> Vector3<T> {
        self.0[index::MINIMUM]
    }

    #[inline]
    pub fn maximum(&self) -> Vector3<T> {
        self.0[index::MAXIMUM]
    }

    pub fn clamp_points(&self, points: &Stack<T, 3>) -> Stack<T, 3> {
        self.as_aabb().clamp_points(points)
    }

    pub fn as_aabb(&self) -> Aabb<T> {
        Aabb::from_bounds(self.minimum(), self.maximum())
    }
}

impl<T: Scalar> Default for Aambb<T> {
    fn default() -> Self {
        Self::zeros()
    }
}
