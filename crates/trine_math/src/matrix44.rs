//! 4x4 affine and projection matrices.
//!
//! Translation is stored in row 3. Projection matrices produce OpenGL clip
//! space: points inside the view volume land in `[-1, 1]^3` after the divide
//! by `w`.

use std::ops::{Index, IndexMut};

use crate::euler::Euler;
use crate::matrix::{Matrix33, Matrix44};
use crate::quaternion::Quaternion;
use crate::scalar::Scalar;
use crate::vector::{Vector, Vector3, Vector4};

impl<T: Scalar> Matrix44<T> {
    /// Embed a 3x3 in the upper-left corner of an identity matrix.
    pub fn from_matrix33(matrix: &Matrix33<T>) -> Self {
        let [r0, r1, r2] = matrix.0;
        Self::from_rows([
            r0.extend(T::zero()),
            r1.extend(T::zero()),
            r2.extend(T::zero()),
            Vector4::unit_w(),
        ])
    }

    /// Copy of the upper-left 3x3.
    pub fn matrix33(&self) -> Matrix33<T> {
        Matrix33::from_rows([self.0[0].truncate(), self.0[1].truncate(), self.0[2].truncate()])
    }

    /// Borrowed view of the upper-left 3x3. No copy is made.
    pub fn matrix33_view(&self) -> Matrix33View<'_, T> {
        Matrix33View { rows: &self.0 }
    }

    /// Mutable view of the upper-left 3x3. Writes go straight into `self`.
    pub fn matrix33_view_mut(&mut self) -> Matrix33ViewMut<'_, T> {
        Matrix33ViewMut { rows: &mut self.0 }
    }

    pub fn from_x_rotation(theta: T) -> Self {
        Self::from_matrix33(&Matrix33::from_x_rotation(theta))
    }

    pub fn from_y_rotation(theta: T) -> Self {
        Self::from_matrix33(&Matrix33::from_y_rotation(theta))
    }

    pub fn from_z_rotation(theta: T) -> Self {
        Self::from_matrix33(&Matrix33::from_z_rotation(theta))
    }

    pub fn from_axis_rotation(axis: Vector3<T>, theta: T) -> Self {
        Self::from_matrix33(&Matrix33::from_axis_rotation(axis, theta))
    }

    pub fn from_eulers(eulers: Euler<T>) -> Self {
        Self::from_matrix33(&Matrix33::from_eulers(eulers))
    }

    pub fn from_quaternion(quat: Quaternion<T>) -> Self {
        Self::from_matrix33(&Matrix33::from_quaternion(quat))
    }

    pub fn from_inverse_of_quaternion(quat: Quaternion<T>) -> Self {
        Self::from_matrix33(&Matrix33::from_inverse_of_quaternion(quat))
    }

    /// Non-uniform scale; `w` is left at 1.
    pub fn from_scale(scale: Vector3<T>) -> Self {
        Self::from_diagonal(scale.extend(T::one()))
    }

    /// Translation by `translation`, stored in row 3.
    pub fn from_translation(translation: Vector3<T>) -> Self {
        let mut m = Self::identity();
        m.0[3] = translation.extend(T::one());
        m
    }

    /// The translation part (row 3, `xyz`).
    pub fn translation(&self) -> Vector3<T> {
        self.0[3].truncate()
    }

    /// Perspective projection from a vertical field of view.
    ///
    /// `fovy` is in radians; `aspect` is width over height.
    pub fn perspective_projection(fovy: T, aspect: T, near: T, far: T) -> Self {
        let ymax = near * (fovy * T::half()).tan();
        let xmax = ymax * aspect;
        Self::perspective_projection_from_bounds(-xmax, xmax, -ymax, ymax, near, far)
    }

    /// Perspective projection from the near plane's bounds.
    pub fn perspective_projection_from_bounds(
        left: T,
        right: T,
        bottom: T,
        top: T,
        near: T,
        far: T,
    ) -> Self {
        let zero = T::zero();
        let two = T::two();

        let a = (right + left) / (right - left);
        let b = (top + bottom) / (top - bottom);
        let c = -(far + near) / (far - near);
        let d = -two * far * near / (far - near);
        let e = two * near / (right - left);
        let f = two * near / (top - bottom);

        Self::from_array([
            [e, zero, zero, zero],
            [zero, f, zero, zero],
            [a, b, c, -T::one()],
            [zero, zero, d, zero],
        ])
    }

    /// Orthographic projection of the given box.
    pub fn orthogonal_projection(left: T, right: T, bottom: T, top: T, near: T, far: T) -> Self {
        let zero = T::zero();
        let two = T::two();

        let rml = right - left;
        let tmb = top - bottom;
        let fmn = far - near;

        Self::from_array([
            [two / rml, zero, zero, zero],
            [zero, two / tmb, zero, zero],
            [zero, zero, -two / fmn, zero],
            [
                -(right + left) / rml,
                -(top + bottom) / tmb,
                -(far + near) / fmn,
                T::one(),
            ],
        ])
    }
}

/// Read-only view of the upper-left 3x3 of a [`Matrix44`].
#[derive(Debug, Clone, Copy)]
pub struct Matrix33View<'a, T> {
    rows: &'a [Vector<T, 4>; 4],
}

impl<T: Scalar> Matrix33View<'_, T> {
    /// The first three components of `index`'s row.
    pub fn row(&self, index: usize) -> Vector3<T> {
        self.rows[index_checked(index)].truncate()
    }

    pub fn to_matrix33(&self) -> Matrix33<T> {
        Matrix33::from_rows([self.row(0), self.row(1), self.row(2)])
    }
}

impl<T> Index<(usize, usize)> for Matrix33View<'_, T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.rows[index_checked(row)][index_checked(col)]
    }
}

/// Mutable view of the upper-left 3x3 of a [`Matrix44`].
pub struct Matrix33ViewMut<'a, T> {
    rows: &'a mut [Vector<T, 4>; 4],
}

impl<T: Scalar> Matrix33ViewMut<'_, T> {
    /// Overwrite the block with `matrix`, leaving row/column 3 untouched.
    pub fn set(&mut self, matrix: &Matrix33<T>) {
        for (dst, src) in self.rows.iter_mut().zip(matrix.rows()) {
            dst.0[..3].copy_from_slice(src.as_slice());
        }
    }

    pub fn to_matrix33(&self) -> Matrix33<T> {
        Matrix33::from_rows([
            self.rows[0].truncate(),
            self.rows[1].truncate(),
            self.rows[2].truncate(),
        ])
    }
}

impl<T> Index<(usize, usize)> for Matrix33ViewMut<'_, T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.rows[index_checked(row)][index_checked(col)]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix33ViewMut<'_, T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.rows[index_checked(row)][index_checked(col)]
    }
}

#[inline]
fn index_checked(index: usize) -> usize {
    assert!(index < 3, "index {index} out of range for a 3x3 view");
    index
}
