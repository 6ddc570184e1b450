//! Floating point element type shared by every vector, matrix and quaternion.

use std::fmt::{Debug, Display};
use std::iter::Sum;

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use num_traits::{Float, FloatConst};

/// Element type of all `trine` values.
///
/// Implemented for `f32` (the default everywhere) and `f64`. The `Pod` bound
/// lets vectors and matrices be viewed as flat scalar slices for GPU upload.
pub trait Scalar:
    Float
    + FloatConst
    + Default
    + Debug
    + Display
    + Sum
    + bytemuck::Pod
    + AbsDiffEq<Epsilon = Self>
    + RelativeEq
    + UlpsEq
    + Send
    + Sync
    + 'static
{
    /// Convert a literal. Lossy for `f32`.
    fn from_f64(value: f64) -> Self;

    /// Widen to `f64`.
    fn as_f64(self) -> f64;

    #[inline]
    fn half() -> Self {
        Self::from_f64(0.5)
    }

    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }
}

impl Scalar for f32 {
    #[inline]
    fn from_f64(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn as_f64(self) -> f64 {
        self as f64
    }
}

impl Scalar for f64 {
    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }

    #[inline]
    fn as_f64(self) -> f64 {
        self
    }
}
