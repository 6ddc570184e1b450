//! Three component vectors.

use crate::matrix::Matrix44;
use crate::scalar::Scalar;
use crate::vector::{Vector3, Vector4};

/// Component positions within a `Vector3`.
pub mod index {
    pub const X: usize = 0;
    pub const Y: usize = 1;
    pub const Z: usize = 2;
}

impl<T: Scalar> Vector3<T> {
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self([x, y, z])
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

    pub fn unit_x() -> Self {
        Self::new(T::one(), T::zero(), T::zero())
    }

    pub fn unit_y() -> Self {
        Self::new(T::zero(), T::one(), T::zero())
    }

    pub fn unit_z() -> Self {
        Self::new(T::zero(), T::zero(), T::one())
    }

    /// Right-handed cross product.
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        let [ax, ay, az] = self.0;
        let [bx, by, bz] = other.0;
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Unit normal of the triangle `v1, v2, v3`.
    ///
    /// Counter-clockwise winding: the edges are taken relative to `v2`, so the
    /// result is `normalize(cross(v3 - v2, v1 - v2))`. Degenerate triangles
    /// produce NaN.
    pub fn generate_normals(v1: Self, v2: Self, v3: Self) -> Self {
        Self::generate_normals_unnormalized(v1, v2, v3).normalize()
    }

    /// [`Vector3::generate_normals`] without the final normalize. The length
    /// is twice the triangle's area, which suits area-weighted vertex normals.
    pub fn generate_normals_unnormalized(v1: Self, v2: Self, v3: Self) -> Self {
        let a = v1 - v2;
        let b = v3 - v2;
        b.cross(a)
    }

    /// Split a homogeneous vector into its `xyz` part and `w`.
    pub fn from_vector4(v: Vector4<T>) -> (Self, T) {
        let [x, y, z, w] = v.0;
        (Self::new(x, y, z), w)
    }

    /// Translation stored in row 3 of a 4x4 matrix.
    pub fn from_matrix44_translation(matrix: &Matrix44<T>) -> Self {
        matrix.translation()
    }

    /// Append a `w` component.
    #[inline]
    pub fn extend(self, w: T) -> Vector4<T> {
        Vector4::from_vector3(self, w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_vector3_accessors() {
        let v = Vector3::<f32>::new(1.0, 2.0, 3.0);
        assert_eq!(v.x(), 1.0);
        assert_eq!(v.y(), 2.0);
        assert_eq!(v.z(), 3.0);
        assert_eq!(v[index::Z], 3.0);
    }

    #[test]
    fn test_vector3_cross() {
        let x = Vector3::<f32>::unit_x();
        let y = Vector3::<f32>::unit_y();
        assert_eq!(x.cross(y), Vector3::unit_z());
        assert_eq!(y.cross(x), -Vector3::unit_z());

        let a = Vector3::<f32>::new(1.0, 2.0, 3.0);
        let b = Vector3::<f32>::new(4.0, 5.0, 6.0);
        assert_eq!(a.cross(b), Vector3::new(-3.0, 6.0, -3.0));
    }

    #[test]
    fn test_vector3_generate_normals() {
        let v1 = Vector3::<f32>::new(1.0, 0.0, 0.0);
        let v2 = Vector3::<f32>::new(0.0, 0.0, 0.0);
        let v3 = Vector3::<f32>::new(0.0, 1.0, 0.0);
        let n = Vector3::generate_normals(v1, v2, v3);
        assert_relative_eq!(n, Vector3::new(0.0, 0.0, -1.0));

        // Reversing the winding flips the normal.
        let n = Vector3::generate_normals(v3, v2, v1);
        assert_relative_eq!(n, Vector3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_vector3_generate_normals_unnormalized() {
        let v1 = Vector3::<f32>::new(2.0, 0.0, 0.0);
        let v2 = Vector3::<f32>::new(0.0, 0.0, 0.0);
        let v3 = Vector3::<f32>::new(0.0, 3.0, 0.0);
        let n = Vector3::generate_normals_unnormalized(v1, v2, v3);
        assert_eq!(n, Vector3::new(0.0, 0.0, -6.0));
        assert_eq!(n.length() * 0.5, 3.0);
        assert_eq!(n.normalize(), Vector3::generate_normals(v1, v2, v3));
    }

    #[test]
    fn test_vector3_from_vector4() {
        let (v, w) = Vector3::from_vector4(Vector4::<f32>::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(w, 4.0);
    }

    #[test]
    fn test_vector3_from_matrix44_translation() {
        let m = Matrix44::<f32>::from_translation(Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(Vector3::from_matrix44_translation(&m), Vector3::new(1.0, 2.0, 3.0));
    }
}
