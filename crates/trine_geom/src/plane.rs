//! Infinite planes.
//!
//! A plane is a unit normal `n` and a distance `d` such that every point `p`
//! on the plane satisfies `n · p = d`. The point `n * d` is the plane's
//! closest point to the origin. Flipping the normal also negates `d`, so the
//! same set of points is described with the opposite facing.

use trine_math::{Scalar, Vector3, Vector4};

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::error::{GeomError, GeomResult};

/// Positions within a `Plane`.
pub mod index {
    /// First of the three normal components.
    pub const NORMAL: usize = 0;
    pub const DISTANCE: usize = 3;
}

/// A plane stored as `[nx, ny, nz, d]`.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(transparent)]
pub struct Plane<T = f32>(Vector4<T>);

impl_flat_primitive!(Plane, 4, normalized);

impl<T: Scalar> Plane<T> {
    /// A plane with the given normal (normalized here) at `distance` along it.
    pub fn new(normal: Vector3<T>, distance: T) -> Self {
        Self(normal.normalize().extend(distance))
    }

    // The distance is kept as given, as with `Plane::new`.
    fn normalized(self) -> Self {
        Self::new(self.normal(), self.distance())
    }

    /// The XY plane through the origin, facing +Z.
    pub fn identity() -> Self {
        Self(Vector4::new(T::zero(), T::zero(), T::one(), T::zero()))
    }

    /// The plane through three points.
    ///
    /// The normal is `normalize((p1 - p2) x (p3 - p2))`, so winding order
    /// decides which way the plane faces.
    pub fn from_points(p1: Vector3<T>, p2: Vector3<T>, p3: Vector3<T>) -> GeomResult<Self> {
        let a = p1 - p2;
        let b = p3 - p2;
        let cross = a.cross(b);
        let tolerance = T::epsilon() * a.squared_length() * b.squared_length();
        if cross.squared_length() <= tolerance {
            log::debug!("plane from collinear points {} {} {}", p1, p2, p3);
            return Err(GeomError::CollinearPoints);
        }
        let normal = cross.normalize();
        Ok(Self(normal.extend(normal.dot(p2))))
    }

    /// The plane through `position` with the given normal.
    pub fn from_position(position: Vector3<T>, normal: Vector3<T>) -> Self {
        let normal = normal.normalize();
        Self(normal.extend(normal.dot(position)))
    }

    /// The XY plane at `z = distance`, facing +Z or -Z when `invert` is set.
    pub fn xy(invert: bool, distance: T) -> Self {
        Self::axis_plane(Vector3::unit_z(), invert, distance)
    }

    /// The XZ plane at `y = distance`, facing +Y or -Y when `invert` is set.
    pub fn xz(invert: bool, distance: T) -> Self {
        Self::axis_plane(Vector3::unit_y(), invert, distance)
    }

    /// The YZ plane at `x = distance`, facing +X or -X when `invert` is set.
    pub fn yz(invert: bool, distance: T) -> Self {
        Self::axis_plane(Vector3::unit_x(), invert, distance)
    }

    fn axis_plane(normal: Vector3<T>, invert: bool, distance: T) -> Self {
        let plane = Self(normal.extend(distance));
        if invert {
            plane.invert_normal()
        } else {
            plane
        }
    }

    /// The same plane facing the other way.
    pub fn invert_normal(&self) -> Self {
        Self(-self.0)
    }

    pub fn normal(&self) -> Vector3<T> {
        Vector3::from_vector4(self.0).0
    }

    pub fn distance(&self) -> T {
        self.0[index::DISTANCE]
    }

    /// The point on the plane closest to the origin.
    pub fn position(&self) -> Vector3<T> {
        self.normal() * self.distance()
    }

    /// Distance of `point` above the plane, negative behind it.
    pub fn signed_distance(&self, point: Vector3<T>) -> T {
        self.normal().dot(point) - self.distance()
    }

    pub fn as_vector(&self) -> Vector4<T> {
        self.0
    }
}

impl<T: Scalar> Default for Plane<T> {
    fn default() -> Self {
        Self::identity()
    }
}
