//! Four component (homogeneous) vectors.

use crate::matrix::Matrix44;
use crate::scalar::Scalar;
use crate::vector::{Vector3, Vector4};

/// Component positions within a `Vector4`.
pub mod index {
    pub const X: usize = 0;
    pub const Y: usize = 1;
    pub const Z: usize = 2;
    pub const W: usize = 3;
}

impl<T: Scalar> Vector4<T> {
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self([x, y, z, w])
    }

    #[inline]
    pub fn x(self) -> T {
        self.0[index::X]
    }

    #[inline]
    pub fn y(self) -> T {
        self.0[index::Y]
    }

    #[inline]
    pub fn z(self) -> T {
        self.0[index::Z]
    }

    #[inline]
    pub fn w(self) -> T {
        self.0[index::W]
    }

    /// Unit vectors are directions, so `w` is 0.
    pub fn unit_x() -> Self {
        Self::new(T::one(), T::zero(), T::zero(), T::zero())
    }

    pub fn unit_y() -> Self {
        Self::new(T::zero(), T::one(), T::zero(), T::zero())
    }

    pub fn unit_z() -> Self {
        Self::new(T::zero(), T::zero(), T::one(), T::zero())
    }

    pub fn unit_w() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::one())
    }

    /// Extend a 3D vector with `w` (1 for points, 0 for directions).
    pub fn from_vector3(v: Vector3<T>, w: T) -> Self {
        let [x, y, z] = v.0;
        Self::new(x, y, z, w)
    }

    /// Row 3 of a 4x4 matrix, including its `w`.
    pub fn from_matrix44_translation(matrix: &Matrix44<T>) -> Self {
        matrix.row(3)
    }

    /// The `xyz` part, dropping `w`.
    #[inline]
    pub fn truncate(self) -> Vector3<T> {
        Vector3::new(self.0[0], self.0[1], self.0[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector4_accessors() {
        let v = Vector4::<f32>::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.x(), 1.0);
        assert_eq!(v.y(), 2.0);
        assert_eq!(v.z(), 3.0);
        assert_eq!(v.w(), 4.0);
        assert_eq!(v[index::W], 4.0);
    }

    #[test]
    fn test_vector4_units_are_directions() {
        assert_eq!(Vector4::<f32>::unit_x().w(), 0.0);
        assert_eq!(Vector4::<f32>::unit_z(), Vector4::new(0.0, 0.0, 1.0, 0.0));
        assert_eq!(Vector4::<f32>::unit_w(), Vector4::new(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_vector4_from_vector3() {
        let v = Vector4::from_vector3(Vector3::<f32>::new(1.0, 2.0, 3.0), 1.0);
        assert_eq!(v, Vector4::new(1.0, 2.0, 3.0, 1.0));
        assert_eq!(v.truncate(), Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_vector4_from_matrix44_translation() {
        let m = Matrix44::<f32>::from_translation(Vector3::new(4.0, 5.0, 6.0));
        assert_eq!(Vector4::from_matrix44_translation(&m), Vector4::new(4.0, 5.0, 6.0, 1.0));
    }
}
