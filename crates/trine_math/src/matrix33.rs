//! 3x3 rotation and scale matrices.
//!
//! Rotations follow the right-hand rule with angles in radians. Because
//! vectors multiply on the left, each matrix here is the transpose of the
//! textbook column-vector form.

use crate::euler::Euler;
use crate::matrix::{Matrix33, Matrix44};
use crate::quaternion::Quaternion;
use crate::scalar::Scalar;
use crate::vector::Vector3;

impl<T: Scalar> Matrix33<T> {
    /// Rotation of `theta` radians about X.
    pub fn from_x_rotation(theta: T) -> Self {
        let (s, c) = theta.sin_cos();
        let (zero, one) = (T::zero(), T::one());
        Self::from_array([[one, zero, zero], [zero, c, s], [zero, -s, c]])
    }

    /// Rotation of `theta` radians about Y.
    pub fn from_y_rotation(theta: T) -> Self {
        let (s, c) = theta.sin_cos();
        let (zero, one) = (T::zero(), T::one());
        Self::from_array([[c, zero, -s], [zero, one, zero], [s, zero, c]])
    }

    /// Rotation of `theta` radians about Z.
    pub fn from_z_rotation(theta: T) -> Self {
        let (s, c) = theta.sin_cos();
        let (zero, one) = (T::zero(), T::one());
        Self::from_array([[c, s, zero], [-s, c, zero], [zero, zero, one]])
    }

    /// Rotation of `theta` radians about an arbitrary axis.
    ///
    /// The axis is normalized here; a zero axis yields NaN.
    pub fn from_axis_rotation(axis: Vector3<T>, theta: T) -> Self {
        let [x, y, z] = axis.normalize().to_array();
        let (s, c) = theta.sin_cos();
        let t = T::one() - c;
        Self::from_array([
            [t * x * x + c, t * x * y + s * z, t * x * z - s * y],
            [t * x * y - s * z, t * y * y + c, t * y * z + s * x],
            [t * x * z + s * y, t * y * z - s * x, t * z * z + c],
        ])
    }

    /// Roll, then pitch, then yaw. See [`crate::euler`].
    pub fn from_eulers(eulers: Euler<T>) -> Self {
        let roll = Self::from_z_rotation(eulers.roll());
        let pitch = Self::from_x_rotation(eulers.pitch());
        let yaw = Self::from_y_rotation(eulers.yaw());
        Self::multiply(yaw, Self::multiply(pitch, roll))
    }

    /// Rotation matrix of a unit quaternion.
    pub fn from_quaternion(quat: Quaternion<T>) -> Self {
        let [x, y, z, w] = quat.as_vector().to_array();
        let one = T::one();
        let two = T::two();

        let (xx, yy, zz) = (x * x, y * y, z * z);
        let (xy, xz, yz) = (x * y, x * z, y * z);
        let (wx, wy, wz) = (w * x, w * y, w * z);

        Self::from_array([
            [one - two * (yy + zz), two * (xy + wz), two * (xz - wy)],
            [two * (xy - wz), one - two * (xx + zz), two * (yz + wx)],
            [two * (xz + wy), two * (yz - wx), one - two * (xx + yy)],
        ])
    }

    /// The opposite rotation of a unit quaternion.
    pub fn from_inverse_of_quaternion(quat: Quaternion<T>) -> Self {
        Self::from_quaternion(quat.conjugate())
    }

    /// Non-uniform scale along the axes.
    pub fn from_scale(scale: Vector3<T>) -> Self {
        Self::from_diagonal(scale)
    }

    /// Scale by `k` along a unit `direction`: `I + (k - 1) n nᵀ`.
    pub fn from_direction_scale(direction: Vector3<T>, k: T) -> Self {
        let n = direction.to_array();
        let k1 = k - T::one();
        let mut m = Self::identity();
        for (i, ni) in n.iter().enumerate() {
            for (j, nj) in n.iter().enumerate() {
                m.0[i][j] = m.0[i][j] + k1 * *ni * *nj;
            }
        }
        m
    }

    /// Upper-left 3x3 of a 4x4.
    pub fn from_matrix44(matrix: &Matrix44<T>) -> Self {
        matrix.matrix33()
    }
}
