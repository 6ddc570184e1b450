//! Sphere primitive.

use trine_math::{Scalar, Vector3, Vector4};

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::aabb::Aabb;
use crate::error::{GeomError, GeomResult};

/// Positions within a `Sphere`.
pub mod index {
    /// First of the three centre components.
    pub const POSITION: usize = 0;
    pub const RADIUS: usize = 3;
}

/// A sphere stored as `[x, y, z, radius]`.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(transparent)]
pub struct Sphere<T = f32>(Vector4<T>);

impl_flat_primitive!(Sphere, 4, clamped);

impl<T: Scalar> Sphere<T> {
    /// Create a new sphere. Negative radii are clamped to zero.
    pub fn new(center: Vector3<T>, radius: T) -> Self {
        Self(center.extend(radius.max(T::zero())))
    }

    fn clamped(self) -> Self {
        Self::new(self.position(), self.radius())
    }

    /// An origin-centred sphere reaching the furthest of `points`.
    ///
    /// This is not the minimal bounding sphere: the centre is always the
    /// origin, whatever the points' own centroid is.
    pub fn from_points(points: &[Vector3<T>]) -> GeomResult<Self> {
        if points.is_empty() {
            log::debug!("sphere from an empty point set");
            return Err(GeomError::Empty("sphere"));
        }
        let radius = points
            .iter()
            .fold(T::zero(), |radius, p| radius.max(p.length()));
        Ok(Self::new(Vector3::zeros(), radius))
    }

    pub fn position(&self) -> Vector3<T> {
        Vector3::from_vector4(self.0).0
    }

    pub fn radius(&self) -> T {
        self.0[index::RADIUS]
    }

    /// The box that exactly encloses the sphere.
    pub fn bounding_box(&self) -> Aabb<T> {
        let rvec = Vector3::splat(self.radius());
        Aabb::from_bounds(self.position() - rvec, self.position() + rvec)
    }
}
