//! Lossless conversions to and from `glam`.
//!
//! Row-major matrices with row vectors share their memory layout with glam's
//! column-major, column-vector matrices, so each of our rows is one glam
//! column and `multiply(a, b)` corresponds to glam's `a * b`.

use crate::matrix::{Matrix33, Matrix44};
use crate::quaternion::Quaternion;
use crate::vector::{Vector2, Vector3, Vector4};

macro_rules! impl_vector_conversions {
    ($ours:ident, $scalar:ty, $glam:ty) => {
        impl From<$glam> for $ours<$scalar> {
            fn from(v: $glam) -> Self {
                Self::from_array(v.to_array())
            }
        }

        impl From<$ours<$scalar>> for $glam {
            fn from(v: $ours<$scalar>) -> Self {
                <$glam>::from_array(v.to_array())
            }
        }
    };
}

impl_vector_conversions!(Vector2, f32, glam::Vec2);
impl_vector_conversions!(Vector3, f32, glam::Vec3);
impl_vector_conversions!(Vector4, f32, glam::Vec4);
impl_vector_conversions!(Vector2, f64, glam::DVec2);
impl_vector_conversions!(Vector3, f64, glam::DVec3);
impl_vector_conversions!(Vector4, f64, glam::DVec4);

macro_rules! impl_quaternion_conversions {
    ($scalar:ty, $glam:ty) => {
        impl From<$glam> for Quaternion<$scalar> {
            fn from(q: $glam) -> Self {
                Self::new(q.x, q.y, q.z, q.w)
            }
        }

        impl From<Quaternion<$scalar>> for $glam {
            fn from(q: Quaternion<$scalar>) -> Self {
                <$glam>::from_xyzw(q.x(), q.y(), q.z(), q.w())
            }
        }
    };
}

impl_quaternion_conversions!(f32, glam::Quat);
impl_quaternion_conversions!(f64, glam::DQuat);

macro_rules! impl_matrix_conversions {
    ($ours:ident, $scalar:ty, $glam:ty) => {
        impl From<$glam> for $ours<$scalar> {
            fn from(m: $glam) -> Self {
                Self::from_array(m.to_cols_array_2d())
            }
        }

        impl From<$ours<$scalar>> for $glam {
            fn from(m: $ours<$scalar>) -> Self {
                <$glam>::from_cols_array_2d(&m.to_array())
            }
        }
    };
}

impl_matrix_conversions!(Matrix33, f32, glam::Mat3);
impl_matrix_conversions!(Matrix44, f32, glam::Mat4);
impl_matrix_conversions!(Matrix33, f64, glam::DMat3);
impl_matrix_conversions!(Matrix44, f64, glam::DMat4);
