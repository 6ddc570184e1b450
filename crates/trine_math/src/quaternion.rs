//! Rotation quaternions.
//!
//! Components are stored `(x, y, z, w)`. Quaternions used as rotations must be
//! unit length; nothing here normalizes implicitly.

use std::ops::{Mul, Neg};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::euler::Euler;
use crate::matrix::{Matrix33, Matrix44};
use crate::scalar::Scalar;
use crate::transform::ApplyToVector;
use crate::vector::{Vector3, Vector4};

/// Component positions within a `Quaternion`.
pub mod index {
    pub const X: usize = 0;
    pub const Y: usize = 1;
    pub const Z: usize = 2;
    pub const W: usize = 3;
}

/// `w` magnitude above which a quaternion is treated as the identity by
/// [`Quaternion::power`].
const IDENTITY_W_THRESHOLD: f64 = 0.9999;

/// A quaternion `(x, y, z, w)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(transparent)]
pub struct Quaternion<T = f32>(Vector4<T>);

// SAFETY: `repr(transparent)` over a `Pod` vector.
unsafe impl<T: Scalar> bytemuck::Zeroable for Quaternion<T> {}
// SAFETY: see above.
unsafe impl<T: Scalar> bytemuck::Pod for Quaternion<T> {}

impl<T: Scalar> Quaternion<T> {
    pub fn identity() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::one())
    }

    pub fn new(x: T, y: T, z: T, w: T) -> Self {
        Self(Vector4::new(x, y, z, w))
    }

    pub fn from_vector(v: Vector4<T>) -> Self {
        Self(v)
    }

    pub fn as_vector(&self) -> Vector4<T> {
        self.0
    }

    #[inline]
    pub fn x(&self) -> T {
        self.0[index::X]
    }

    #[inline]
    pub fn y(&self) -> T {
        self.0[index::Y]
    }

    #[inline]
    pub fn z(&self) -> T {
        self.0[index::Z]
    }

    #[inline]
    pub fn w(&self) -> T {
        self.0[index::W]
    }

    /// The vector part.
    #[inline]
    pub fn xyz(&self) -> Vector3<T> {
        self.0.truncate()
    }

    fn from_half_angle(axis: Vector3<T>, theta: T) -> Self {
        let half = theta * T::half();
        let (s, c) = half.sin_cos();
        Self(Vector4::from_vector3(axis * s, c))
    }

    pub fn from_x_rotation(theta: T) -> Self {
        Self::from_half_angle(Vector3::unit_x(), theta)
    }

    pub fn from_y_rotation(theta: T) -> Self {
        Self::from_half_angle(Vector3::unit_y(), theta)
    }

    pub fn from_z_rotation(theta: T) -> Self {
        Self::from_half_angle(Vector3::unit_z(), theta)
    }

    /// Rotation of `theta` radians about `axis`.
    ///
    /// The axis is normalized here; a zero axis yields NaN.
    pub fn from_axis_rotation(axis: Vector3<T>, theta: T) -> Self {
        Self::from_half_angle(axis.normalize(), theta)
    }

    /// Roll, then pitch, then yaw. See [`crate::euler`].
    pub fn from_eulers(eulers: Euler<T>) -> Self {
        let pitch = Self::from_x_rotation(eulers.pitch());
        let yaw = Self::from_y_rotation(eulers.yaw());
        let roll = Self::from_z_rotation(eulers.roll());
        yaw.cross(pitch.cross(roll))
    }

    /// The rotation that undoes [`Quaternion::from_eulers`].
    pub fn from_inverse_of_eulers(eulers: Euler<T>) -> Self {
        Self::from_eulers(eulers).conjugate()
    }

    /// Extract the rotation from a pure rotation matrix.
    pub fn from_matrix33(matrix: &Matrix33<T>) -> Self {
        // Work on the column-vector form r[i][j] = m[j][i].
        let r = |i: usize, j: usize| matrix[j][i];
        let one = T::one();
        let quarter = T::from_f64(0.25);
        let trace = r(0, 0) + r(1, 1) + r(2, 2);

        if trace > T::zero() {
            let s = (trace + one).sqrt() * T::two();
            Self::new(
                (r(2, 1) - r(1, 2)) / s,
                (r(0, 2) - r(2, 0)) / s,
                (r(1, 0) - r(0, 1)) / s,
                quarter * s,
            )
        } else if r(0, 0) > r(1, 1) && r(0, 0) > r(2, 2) {
            let s = (one + r(0, 0) - r(1, 1) - r(2, 2)).sqrt() * T::two();
            Self::new(
                quarter * s,
                (r(0, 1) + r(1, 0)) / s,
                (r(0, 2) + r(2, 0)) / s,
                (r(2, 1) - r(1, 2)) / s,
            )
        } else if r(1, 1) > r(2, 2) {
            let s = (one + r(1, 1) - r(0, 0) - r(2, 2)).sqrt() * T::two();
            Self::new(
                (r(0, 1) + r(1, 0)) / s,
                quarter * s,
                (r(1, 2) + r(2, 1)) / s,
                (r(0, 2) - r(2, 0)) / s,
            )
        } else {
            let s = (one + r(2, 2) - r(0, 0) - r(1, 1)).sqrt() * T::two();
            Self::new(
                (r(0, 2) + r(2, 0)) / s,
                (r(1, 2) + r(2, 1)) / s,
                quarter * s,
                (r(1, 0) - r(0, 1)) / s,
            )
        }
    }

    /// Extract the rotation from the upper-left 3x3 of an affine matrix.
    pub fn from_matrix44(matrix: &Matrix44<T>) -> Self {
        Self::from_matrix33(&matrix.matrix33())
    }

    /// Hamilton product `self ⊗ other`.
    ///
    /// Historically called "cross"; it is the quaternion counterpart of
    /// [`Matrix::multiply`](crate::Matrix::multiply): `other` is applied
    /// first, then `self`. Not commutative.
    pub fn cross(self, other: Self) -> Self {
        let (v1, w1) = (self.xyz(), self.w());
        let (v2, w2) = (other.xyz(), other.w());
        let v = v2 * w1 + v1 * w2 + v1.cross(v2);
        Self::new(v.x(), v.y(), v.z(), w1 * w2 - v1.dot(v2))
    }

    /// Same rotation angle about the opposite axis.
    pub fn conjugate(self) -> Self {
        Self::new(-self.x(), -self.y(), -self.z(), self.w())
    }

    /// `conjugate / squared_length`, valid for non-unit quaternions too.
    pub fn inverse(self) -> Self {
        Self(self.conjugate().0 / self.squared_length())
    }

    /// All four components negated. Represents the same rotation.
    pub fn negate(self) -> Self {
        Self(-self.0)
    }

    pub fn dot(self, other: Self) -> T {
        self.0.dot(other.0)
    }

    pub fn squared_length(self) -> T {
        self.0.squared_length()
    }

    pub fn length(self) -> T {
        self.0.length()
    }

    /// Zero quaternions become NaN.
    pub fn normalize(self) -> Self {
        Self(self.0.normalize())
    }

    /// True only when every component is exactly zero.
    pub fn is_zero_length(self) -> bool {
        self.0.iter().all(|&v| v == T::zero())
    }

    pub fn is_non_zero_length(self) -> bool {
        !self.is_zero_length()
    }

    /// True when this is (approximately) the identity `(0, 0, 0, 1)`.
    pub fn is_identity(self) -> bool {
        self.abs_diff_eq(&Self::identity(), T::default_epsilon())
    }

    /// Rotation angle in radians, `2 * acos(w)`.
    pub fn rotation_angle(self) -> T {
        let w = self.w().max(-T::one()).min(T::one());
        w.acos() * T::two()
    }

    /// Unit rotation axis.
    ///
    /// The identity rotation has no axis; for `w` at or near `±1` this
    /// returns `(0, 0, -1)`.
    pub fn rotation_axis(self) -> Vector3<T> {
        let sin_half_sq = T::one() - self.w() * self.w();
        if sin_half_sq <= T::epsilon() {
            log::debug!("rotation axis requested for an identity quaternion, using -Z");
            return Vector3::new(T::zero(), T::zero(), -T::one());
        }
        self.xyz() / sin_half_sq.sqrt()
    }

    /// Scale the rotation angle by `exponent`.
    ///
    /// Quaternions with `|w| > 0.9999` are returned unchanged since their
    /// axis is not recoverable.
    pub fn power(self, exponent: T) -> Self {
        if self.w().abs() > T::from_f64(IDENTITY_W_THRESHOLD) {
            log::debug!("power of a near-identity quaternion, returning it unchanged");
            return self;
        }
        let alpha = self.w().acos();
        let new_alpha = alpha * exponent;
        let multi = new_alpha.sin() / alpha.sin();
        Self(Vector4::from_vector3(self.xyz() * multi, new_alpha.cos()))
    }

    /// Rotation matrix for this quaternion.
    pub fn matrix33(&self) -> Matrix33<T> {
        Matrix33::from_quaternion(*self)
    }

    pub fn matrix44(&self) -> Matrix44<T> {
        Matrix44::from_quaternion(*self)
    }

    pub fn cast<U: Scalar>(self) -> Quaternion<U> {
        Quaternion(self.0.cast())
    }
}

impl<T: Scalar> Default for Quaternion<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Scalar> Mul for Quaternion<T> {
    type Output = Self;

    /// Same as [`Quaternion::cross`].
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.cross(rhs)
    }
}

impl<T: Scalar> Mul<Vector3<T>> for Quaternion<T> {
    type Output = Vector3<T>;

    /// Rotate a vector.
    #[inline]
    fn mul(self, rhs: Vector3<T>) -> Vector3<T> {
        self.apply_to_vector(rhs)
    }
}

impl<T: Scalar> Neg for Quaternion<T> {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

impl<T: Scalar> AbsDiffEq for Quaternion<T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.0.abs_diff_eq(&other.0, epsilon)
    }
}

impl<T: Scalar> RelativeEq for Quaternion<T> {
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.0.relative_eq(&other.0, epsilon, max_relative)
    }
}

impl<T: Scalar> UlpsEq for Quaternion<T> {
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: T, max_ulps: u32) -> bool {
        self.0.ulps_eq(&other.0, epsilon, max_ulps)
    }
}
