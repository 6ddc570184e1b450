//! Fixed-size vectors generic over element type and dimension.
//!
//! `Vector<T, N>` is the numeric array every other `trine` type is built on.
//! Dimension-specific constructors and accessors live in `vector3` and
//! `vector4`; everything that is meaningful for any `N` lives here.

use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::error::{MathError, Result};
use crate::scalar::Scalar;

/// An `N`-component vector of `T`.
#[derive(Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>(pub(crate) [T; N]);

/// 2D vector.
pub type Vector2<T = f32> = Vector<T, 2>;
/// 3D vector.
pub type Vector3<T = f32> = Vector<T, 3>;
/// 4D vector.
pub type Vector4<T = f32> = Vector<T, 4>;

// SAFETY: `Vector` is `repr(transparent)` over `[T; N]` and `T: Pod`, so it has
// no padding and every bit pattern is valid.
unsafe impl<T: Scalar, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
// SAFETY: see above.
unsafe impl<T: Scalar, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Wrap an array.
    #[inline]
    pub const fn from_array(components: [T; N]) -> Self {
        Self(components)
    }

    /// All components set to `value`.
    #[inline]
    pub fn splat(value: T) -> Self {
        Self([value; N])
    }

    #[inline]
    pub fn zeros() -> Self {
        Self::splat(T::zero())
    }

    /// Build a vector from a slice, checking its length.
    pub fn from_slice(values: &[T]) -> Result<Self> {
        let components: [T; N] = values.try_into().map_err(|_| MathError::ShapeMismatch {
            expected: N,
            found: values.len(),
        })?;
        Ok(Self(components))
    }

    #[inline]
    pub fn to_array(self) -> [T; N] {
        self.0
    }

    #[inline]
    pub fn as_array(&self) -> &[T; N] {
        &self.0
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Apply `f` to every component.
    #[inline]
    pub fn map<U: Scalar>(self, f: impl Fn(T) -> U) -> Vector<U, N> {
        Vector(self.0.map(f))
    }

    /// Combine two vectors component by component.
    #[inline]
    pub fn zip_map(self, other: Self, f: impl Fn(T, T) -> T) -> Self {
        Self(std::array::from_fn(|i| f(self.0[i], other.0[i])))
    }

    /// Convert to another precision.
    pub fn cast<U: Scalar>(self) -> Vector<U, N> {
        self.map(|v| U::from_f64(v.as_f64()))
    }

    #[inline]
    pub fn dot(self, other: Self) -> T {
        self.0
            .iter()
            .zip(other.0.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
    }

    #[inline]
    pub fn squared_length(self) -> T {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> T {
        self.squared_length().sqrt()
    }

    /// Scale to unit length.
    ///
    /// A zero-length vector has no direction; the division yields NaN
    /// components rather than panicking. Use [`Vector::try_normalize`] when
    /// the input may be degenerate.
    #[inline]
    pub fn normalize(self) -> Self {
        self / self.length()
    }

    /// Scale to unit length, or `None` if the length is zero or not finite.
    pub fn try_normalize(self) -> Option<Self> {
        let length = self.length();
        if length > T::zero() && length.is_finite() {
            Some(self / length)
        } else {
            None
        }
    }

    /// Rescale to `length`. Zero vectors become NaN, as with `normalize`.
    #[inline]
    pub fn set_length(self, length: T) -> Self {
        self.normalize() * length
    }

    /// Linear interpolation `self + (other - self) * t`.
    ///
    /// `t` is not clamped, so values outside `[0, 1]` extrapolate.
    #[inline]
    pub fn interpolate(self, other: Self, t: T) -> Self {
        self + (other - self) * t
    }

    /// Componentwise minimum.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        self.zip_map(other, T::min)
    }

    /// Componentwise maximum.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        self.zip_map(other, T::max)
    }

    #[inline]
    pub fn abs(self) -> Self {
        self.map(T::abs)
    }

    /// Sum of the components.
    #[inline]
    pub fn sum(self) -> T {
        self.0.iter().fold(T::zero(), |acc, &v| acc + v)
    }

    /// Smallest component.
    pub fn min_element(self) -> T {
        self.0.iter().fold(T::infinity(), |acc, &v| acc.min(v))
    }

    /// Largest component.
    pub fn max_element(self) -> T {
        self.0.iter().fold(T::neg_infinity(), |acc, &v| acc.max(v))
    }

    pub fn is_finite(self) -> bool {
        self.0.iter().all(|v| v.is_finite())
    }

    pub fn is_nan(self) -> bool {
        self.0.iter().any(|v| v.is_nan())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }
}

impl<T: Scalar> Vector<T, 2> {
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self([x, y])
    }

    #[inline]
    pub fn x(self) -> T {
        self.0[0]
    }

    #[inline]
    pub fn y(self) -> T {
        self.0[1]
    }

    pub fn unit_x() -> Self {
        Self::new(T::one(), T::zero())
    }

    pub fn unit_y() -> Self {
        Self::new(T::zero(), T::one())
    }
}

impl<T: Scalar, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T: std::fmt::Debug, const N: usize> std::fmt::Debug for Vector<T, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Vector").field(&self.0).finish()
    }
}

impl<T: std::fmt::Display, const N: usize> std::fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", v)?;
        }
        write!(f, "]")
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(components: [T; N]) -> Self {
        Self(components)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    fn from(v: Vector<T, N>) -> Self {
        v.0
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.0[index]
    }
}

macro_rules! impl_componentwise_op {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt) => {
        impl<T: Scalar, const N: usize> $trait for Vector<T, N> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self {
                self.zip_map(rhs, |a, b| a $op b)
            }
        }

        impl<T: Scalar, const N: usize> $trait<T> for Vector<T, N> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: T) -> Self {
                self.map(|a| a $op rhs)
            }
        }

        impl<T: Scalar, const N: usize> $assign_trait for Vector<T, N> {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                *self = *self $op rhs;
            }
        }

        impl<T: Scalar, const N: usize> $assign_trait<T> for Vector<T, N> {
            #[inline]
            fn $assign_method(&mut self, rhs: T) {
                *self = *self $op rhs;
            }
        }
    };
}

impl_componentwise_op!(Add, add, AddAssign, add_assign, +);
impl_componentwise_op!(Sub, sub, SubAssign, sub_assign, -);
impl_componentwise_op!(Mul, mul, MulAssign, mul_assign, *);
impl_componentwise_op!(Div, div, DivAssign, div_assign, /);

impl<T: Scalar, const N: usize> Neg for Vector<T, N> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.map(|a| -a)
    }
}

macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {
        $(
            impl<const N: usize> Mul<Vector<$t, N>> for $t {
                type Output = Vector<$t, N>;

                #[inline]
                fn mul(self, rhs: Vector<$t, N>) -> Vector<$t, N> {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_lhs_mul!(f32, f64);

impl<T: Scalar, const N: usize> std::iter::Sum for Vector<T, N> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zeros(), |acc, v| acc + v)
    }
}

impl<T: Scalar, const N: usize> AbsDiffEq for Vector<T, N> {
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

impl<T: Scalar, const N: usize> RelativeEq for Vector<T, N> {
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

impl<T: Scalar, const N: usize> UlpsEq for Vector<T, N> {
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

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_vector_creation() {
        let v = Vector::from_array([1.0f32, 2.0, 3.0]);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[1], 2.0);
        assert_eq!(v[2], 3.0);
        assert_eq!(Vector::<f32, 4>::zeros().to_array(), [0.0; 4]);
        assert_eq!(Vector::<f32, 2>::splat(7.0), Vector2::new(7.0, 7.0));
    }

    #[test]
    fn test_vector_from_slice_shape() {
        let v = Vector::<f32, 3>::from_slice(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(v.to_array(), [1.0, 2.0, 3.0]);

        let err = Vector::<f32, 3>::from_slice(&[1.0, 2.0]).unwrap_err();
        assert_eq!(err, MathError::ShapeMismatch { expected: 3, found: 2 });
    }

    #[test]
    fn test_vector_operations() {
        let a = Vector::from_array([1.0f32, 2.0, 3.0]);
        let b = Vector::from_array([4.0f32, 5.0, 6.0]);
        assert_eq!(a + b, Vector::from_array([5.0, 7.0, 9.0]));
        assert_eq!(b - a, Vector::from_array([3.0, 3.0, 3.0]));
        assert_eq!(a * b, Vector::from_array([4.0, 10.0, 18.0]));
        assert_eq!(a * 2.0, Vector::from_array([2.0, 4.0, 6.0]));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(-a, Vector::from_array([-1.0, -2.0, -3.0]));

        let mut c = a;
        c += b;
        c /= 5.0;
        assert_eq!(c, Vector::from_array([1.0, 1.4, 1.8]));
    }

    #[test]
    fn test_vector_length() {
        let v = Vector2::<f32>::new(3.0, 4.0);
        assert_eq!(v.squared_length(), 25.0);
        assert_eq!(v.length(), 5.0);
    }

    #[test]
    fn test_vector_normalize() {
        let v = Vector::from_array([2.0f32, 0.0, 0.0, 0.0]);
        assert_eq!(v.normalize(), Vector::from_array([1.0, 0.0, 0.0, 0.0]));

        let v = Vector::from_array([1.0f64, 1.0, 1.0]);
        assert_relative_eq!(v.normalize().length(), 1.0);
    }

    #[test]
    fn test_vector_normalize_zero_is_nan() {
        let zero = Vector::<f32, 3>::zeros();
        assert!(zero.normalize().is_nan());
        assert!(zero.try_normalize().is_none());
        assert!(Vector2::<f32>::new(0.0, 2.0).try_normalize().is_some());
    }

    #[test]
    fn test_vector_set_length() {
        let v = Vector2::<f32>::new(3.0, 4.0).set_length(10.0);
        assert_relative_eq!(v, Vector2::new(6.0, 8.0), epsilon = 1e-5);
    }

    #[test]
    fn test_vector_dot() {
        let a = Vector2::<f32>::new(1.0, 0.0);
        let b = Vector2::<f32>::new(0.0, 1.0);
        assert_eq!(a.dot(b), 0.0);
        assert_eq!(a.dot(a), 1.0);
        assert_eq!(a.dot(-a), -1.0);
    }

    #[test]
    fn test_vector_interpolate() {
        let a = Vector2::<f32>::new(0.0, 10.0);
        let b = Vector2::<f32>::new(10.0, 20.0);
        assert_eq!(a.interpolate(b, 0.0), a);
        assert_eq!(a.interpolate(b, 1.0), b);
        assert_eq!(a.interpolate(b, 0.5), Vector2::new(5.0, 15.0));
        assert_eq!(a.interpolate(b, 2.0), Vector2::new(20.0, 30.0));
    }

    #[test]
    fn test_vector_reductions() {
        let v = Vector::from_array([-1.0f32, 4.0, 2.0]);
        assert_eq!(v.sum(), 5.0);
        assert_eq!(v.min_element(), -1.0);
        assert_eq!(v.max_element(), 4.0);
        assert_eq!(v.abs(), Vector::from_array([1.0, 4.0, 2.0]));

        let w = Vector::from_array([0.0f32, 5.0, 1.0]);
        assert_eq!(v.min(w), Vector::from_array([-1.0, 4.0, 1.0]));
        assert_eq!(v.max(w), Vector::from_array([0.0, 5.0, 2.0]));
    }

    #[test]
    fn test_vector_cast() {
        let v = Vector2::<f32>::new(0.5, -2.0);
        let d: Vector2<f64> = v.cast();
        assert_eq!(d, Vector2::new(0.5f64, -2.0));
    }

    #[test]
    fn test_vector_sum_iter() {
        let total: Vector2<f32> = [Vector2::new(1.0, 2.0), Vector2::new(3.0, 4.0)]
            .into_iter()
            .sum();
        assert_eq!(total, Vector2::new(4.0, 6.0));
    }

    #[test]
    fn test_vector_display() {
        assert_eq!(Vector2::<f32>::new(1.0, 2.5).to_string(), "[1, 2.5]");
    }

    #[test]
    fn test_vector_pod_view() {
        let v = Vector::from_array([1.0f32, 2.0, 3.0]);
        let raw: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&v));
        assert_eq!(raw, &[1.0, 2.0, 3.0]);
    }
}
