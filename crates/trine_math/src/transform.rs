// Applying matrices and quaternions to vectors.
//
// `ApplyToVector` is implemented once per (transform, vector size) pair so the
// right behaviour is picked at compile time:
//
// - Matrix33 x Vector3: `v · M`
// - Matrix33 x Vector4: rotates `xyz`, keeps `w`
// - Matrix44 x Vector3: a direction (w = 0), translation is ignored
// - Matrix44 x Vector4: homogeneous, divided by `w` when `w != 0`
// - Quaternion x Vector3/Vector4: `q · v · q⁻¹`, keeping `w`

use crate::matrix::{Matrix33, Matrix44};
use crate::quaternion::Quaternion;
use crate::scalar::Scalar;
use crate::stack::Stack;
use crate::vector::{Vector, Vector3, Vector4};

/// Transforms that can be applied to `N`-component vectors.
pub trait ApplyToVector<T: Scalar, const N: usize> {
    /// Transform a single vector.
    fn apply_to_vector(&self, vector: Vector<T, N>) -> Vector<T, N>;

    /// Transform every row of a stack.
    fn apply_to_vectors(&self, vectors: &Stack<T, N>) -> Stack<T, N> {
        vectors.map_rows(|v| self.apply_to_vector(*v))
    }
}

impl<T: Scalar> ApplyToVector<T, 3> for Matrix33<T> {
    fn apply_to_vector(&self, vector: Vector3<T>) -> Vector3<T> {
        self.mul_row_vector(vector)
    }
}

impl<T: Scalar> ApplyToVector<T, 4> for Matrix33<T> {
    fn apply_to_vector(&self, vector: Vector4<T>) -> Vector4<T> {
        let (xyz, w) = Vector3::from_vector4(vector);
        self.mul_row_vector(xyz).extend(w)
    }
}

impl<T: Scalar> ApplyToVector<T, 3> for Matrix44<T> {
    fn apply_to_vector(&self, vector: Vector3<T>) -> Vector3<T> {
        self.apply_to_direction(vector)
    }
}

impl<T: Scalar> ApplyToVector<T, 4> for Matrix44<T> {
    fn apply_to_vector(&self, vector: Vector4<T>) -> Vector4<T> {
        let transformed = self.mul_row_vector(vector);
        let w = transformed.w();
        if w != T::zero() {
            transformed / w
        } else {
            transformed
        }
    }
}

impl<T: Scalar> Matrix44<T> {
    /// Transform a point (w = 1), including translation and perspective
    /// divide.
    pub fn apply_to_point(&self, point: Vector3<T>) -> Vector3<T> {
        self.apply_to_vector(point.extend(T::one())).truncate()
    }

    /// Transform a direction (w = 0). Translation does not apply.
    pub fn apply_to_direction(&self, direction: Vector3<T>) -> Vector3<T> {
        self.mul_row_vector(direction.extend(T::zero())).truncate()
    }
}

impl<T: Scalar> ApplyToVector<T, 3> for Quaternion<T> {
    fn apply_to_vector(&self, vector: Vector3<T>) -> Vector3<T> {
        let pure = Quaternion::from_vector(vector.extend(T::zero()));
        self.cross(pure).cross(self.inverse()).xyz()
    }
}

impl<T: Scalar> ApplyToVector<T, 4> for Quaternion<T> {
    fn apply_to_vector(&self, vector: Vector4<T>) -> Vector4<T> {
        let (xyz, w) = Vector3::from_vector4(vector);
        ApplyToVector::<T, 3>::apply_to_vector(self, xyz).extend(w)
    }
}

/// Scale every vector by `scale` along each axis.
pub fn apply_scale<T: Scalar>(vectors: &Stack<T, 3>, scale: Vector3<T>) -> Stack<T, 3> {
    Matrix33::from_scale(scale).apply_to_vectors(vectors)
}

/// Scale every vector by `k` along `direction`, leaving perpendicular
/// components untouched. `k = 0` flattens onto the plane through the origin
/// with normal `direction`.
///
/// `direction` must be unit length.
pub fn apply_direction_scale<T: Scalar>(
    vectors: &Stack<T, 3>,
    direction: Vector3<T>,
    k: T,
) -> Stack<T, 3> {
    Matrix33::from_direction_scale(direction, k).apply_to_vectors(vectors)
}
