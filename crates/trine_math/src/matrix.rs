//! Row-major matrices.
//!
//! Matrices are stored as `R` row vectors and use the row-vector-on-the-left
//! convention: a vector is transformed as `v' = v · M`. A 4x4 therefore keeps
//! its translation in row 3, and its memory layout is identical to an OpenGL
//! (column-major, column-vector) matrix, so it can be uploaded as is.
//!
//! Composition follows the usual reading order of transform chains: in
//! `multiply(a, b)` the rightmost matrix `b` is applied to a vector first.

use std::ops::{Index, IndexMut, Mul};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::error::{MathError, Result};
use crate::scalar::Scalar;
use crate::vector::Vector;

/// An `R` x `C` matrix of `T`, stored row by row.
#[derive(Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Matrix<T, const R: usize, const C: usize>(pub(crate) [Vector<T, C>; R]);

/// 3x3 rotation/scale matrix.
pub type Matrix33<T = f32> = Matrix<T, 3, 3>;
/// 4x4 affine or projection matrix.
pub type Matrix44<T = f32> = Matrix<T, 4, 4>;

// SAFETY: `repr(transparent)` over an array of `Pod` vectors; no padding.
unsafe impl<T: Scalar, const R: usize, const C: usize> bytemuck::Zeroable for Matrix<T, R, C> {}
// SAFETY: see above.
unsafe impl<T: Scalar, const R: usize, const C: usize> bytemuck::Pod for Matrix<T, R, C> {}

impl<T: Scalar, const R: usize, const C: usize> Matrix<T, R, C> {
    #[inline]
    pub const fn from_rows(rows: [Vector<T, C>; R]) -> Self {
        Self(rows)
    }

    /// Build from nested row arrays.
    pub fn from_array(rows: [[T; C]; R]) -> Self {
        Self(rows.map(Vector::from_array))
    }

    /// Build from a flat, row-major slice of `R * C` scalars.
    pub fn from_slice(values: &[T]) -> Result<Self> {
        if values.len() != R * C {
            return Err(MathError::ShapeMismatch {
                expected: R * C,
                found: values.len(),
            });
        }
        Ok(Self(std::array::from_fn(|i| {
            Vector::from_array(std::array::from_fn(|j| values[i * C + j]))
        })))
    }

    pub fn zeros() -> Self {
        Self([Vector::zeros(); R])
    }

    pub fn to_array(self) -> [[T; C]; R] {
        self.0.map(Vector::to_array)
    }

    /// Row-major scalar view. No copy is made.
    pub fn as_flat(&self) -> &[T] {
        bytemuck::cast_slice(std::slice::from_ref(self))
    }

    #[inline]
    pub fn rows(&self) -> &[Vector<T, C>; R] {
        &self.0
    }

    #[inline]
    pub fn row(&self, index: usize) -> Vector<T, C> {
        self.0[index]
    }

    pub fn column(&self, index: usize) -> Vector<T, R> {
        Vector::from_array(std::array::from_fn(|i| self.0[i][index]))
    }

    pub fn transpose(&self) -> Matrix<T, C, R> {
        Matrix(std::array::from_fn(|j| self.column(j)))
    }

    /// Raw row-major product `self · rhs`.
    ///
    /// With row vectors this applies `self` first, then `rhs`. Prefer
    /// [`Matrix::multiply`] for composing transforms.
    pub fn matmul<const K: usize>(&self, rhs: &Matrix<T, C, K>) -> Matrix<T, R, K> {
        Matrix(std::array::from_fn(|i| rhs.mul_row_vector(self.0[i])))
    }

    /// Transform a row vector: `v · self`.
    pub fn mul_row_vector(&self, v: Vector<T, R>) -> Vector<T, C> {
        self.0
            .iter()
            .zip(v.iter())
            .fold(Vector::zeros(), |acc, (row, &s)| acc + *row * s)
    }

    pub fn cast<U: Scalar>(&self) -> Matrix<U, R, C> {
        Matrix(self.0.map(Vector::cast))
    }

    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|row| row.is_finite())
    }
}

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    pub fn identity() -> Self {
        Self::from_diagonal(Vector::splat(T::one()))
    }

    pub fn from_diagonal(diagonal: Vector<T, N>) -> Self {
        let mut m = Self::zeros();
        for i in 0..N {
            m.0[i][i] = diagonal[i];
        }
        m
    }

    pub fn diagonal(&self) -> Vector<T, N> {
        Vector::from_array(std::array::from_fn(|i| self.0[i][i]))
    }

    pub fn trace(&self) -> T {
        self.diagonal().sum()
    }

    /// Compose two transforms so that `b` is applied first, then `a`.
    ///
    /// ```
    /// use trine_math::{ApplyToVector, Matrix33, Vector3};
    /// use std::f32::consts::FRAC_PI_2;
    ///
    /// let rotate = Matrix33::<f32>::from_z_rotation(FRAC_PI_2);
    /// let scale = Matrix33::<f32>::from_scale(Vector3::new(2.0, 1.0, 1.0));
    /// // scale x first, then rotate it onto y
    /// let m = Matrix33::multiply(rotate, scale);
    /// let v = m.apply_to_vector(Vector3::unit_x());
    /// assert!((v - Vector3::new(0.0, 2.0, 0.0)).length() < 1e-6);
    /// ```
    #[inline]
    pub fn multiply(a: Self, b: Self) -> Self {
        b.matmul(&a)
    }

    /// [`Matrix::multiply`] into a caller-owned buffer.
    ///
    /// The output cannot alias either input:
    ///
    /// ```compile_fail
    /// use trine_math::Matrix44;
    ///
    /// let mut m = Matrix44::<f32>::identity();
    /// Matrix44::multiply_into(&m, &m, &mut m);
    /// ```
    pub fn multiply_into(a: &Self, b: &Self, out: &mut Self) {
        for i in 0..N {
            out.0[i] = a.mul_row_vector(b.0[i]);
        }
    }

    /// Determinant by Gaussian elimination with partial pivoting.
    pub fn determinant(&self) -> T {
        let mut a = self.to_array();
        let mut det = T::one();
        for col in 0..N {
            let pivot = Self::pivot_row(&a, col);
            if a[pivot][col] == T::zero() {
                return T::zero();
            }
            if pivot != col {
                a.swap(pivot, col);
                det = -det;
            }
            det = det * a[col][col];
            for row in (col + 1)..N {
                let factor = a[row][col] / a[col][col];
                for k in col..N {
                    a[row][k] = a[row][k] - factor * a[col][k];
                }
            }
        }
        det
    }

    /// General inverse by Gauss-Jordan elimination with partial pivoting.
    ///
    /// Fails with [`MathError::SingularMatrix`] when a pivot vanishes
    /// relative to the largest element of the matrix.
    pub fn inverse(&self) -> Result<Self> {
        let mut a = self.to_array();
        let mut inv = Self::identity().to_array();

        let largest = a
            .iter()
            .flat_map(|row| row.iter())
            .fold(T::zero(), |acc, v| acc.max(v.abs()));
        let tolerance = largest * T::epsilon() * T::from_f64(N as f64);

        for col in 0..N {
            let pivot = Self::pivot_row(&a, col);
            if !(a[pivot][col].abs() > tolerance) {
                log::debug!("matrix inverse: pivot {} is numerically zero", col);
                return Err(MathError::SingularMatrix);
            }
            a.swap(pivot, col);
            inv.swap(pivot, col);

            let scale = T::one() / a[col][col];
            for k in 0..N {
                a[col][k] = a[col][k] * scale;
                inv[col][k] = inv[col][k] * scale;
            }

            for row in 0..N {
                if row == col {
                    continue;
                }
                let factor = a[row][col];
                if factor == T::zero() {
                    continue;
                }
                for k in 0..N {
                    a[row][k] = a[row][k] - factor * a[col][k];
                    inv[row][k] = inv[row][k] - factor * inv[col][k];
                }
            }
        }

        Ok(Self::from_array(inv))
    }

    fn pivot_row(a: &[[T; N]; N], col: usize) -> usize {
        (col..N).fold(col, |best, row| {
            if a[row][col].abs() > a[best][col].abs() {
                row
            } else {
                best
            }
        })
    }
}

impl<T: Scalar, const N: usize> Default for Matrix<T, N, N> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Scalar, const N: usize> Mul for Matrix<T, N, N> {
    type Output = Self;

    /// Same as [`Matrix::multiply`]: `rhs` is applied first.
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::multiply(self, rhs)
    }
}

impl<T: Scalar, const R: usize, const C: usize> Mul<Matrix<T, R, C>> for Vector<T, R> {
    type Output = Vector<T, C>;

    /// Row vector times matrix, `v · M`.
    #[inline]
    fn mul(self, rhs: Matrix<T, R, C>) -> Vector<T, C> {
        rhs.mul_row_vector(self)
    }
}

impl<T, const R: usize, const C: usize> Index<usize> for Matrix<T, R, C> {
    type Output = Vector<T, C>;

    #[inline]
    fn index(&self, index: usize) -> &Vector<T, C> {
        &self.0[index]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<usize> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Vector<T, C> {
        &mut self.0[index]
    }
}

impl<T: Scalar, const R: usize, const C: usize> From<[[T; C]; R]> for Matrix<T, R, C> {
    fn from(rows: [[T; C]; R]) -> Self {
        Self::from_array(rows)
    }
}

impl<T: std::fmt::Debug, const R: usize, const C: usize> std::fmt::Debug for Matrix<T, R, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.0.iter().map(|row| &row.0)).finish()
    }
}

impl<T: std::fmt::Display, const R: usize, const C: usize> std::fmt::Display for Matrix<T, R, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", row)?;
        }
        Ok(())
    }
}

impl<T: Scalar, const R: usize, const C: usize> AbsDiffEq for Matrix<T, R, C> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T: Scalar, const R: usize, const C: usize> RelativeEq for Matrix<T, R, C> {
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T: Scalar, const R: usize, const C: usize> UlpsEq for Matrix<T, R, C> {
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: T, max_ulps: u32) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}
