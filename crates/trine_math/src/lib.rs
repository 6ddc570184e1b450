//! Trine Math - vectors, matrices and quaternions for 3D graphics.
//!
//! Every type is a small `Copy` value over a fixed-size array of a
//! [`Scalar`] (`f32` by default, `f64` on request):
//!
//! - **Vectors**: [`Vector2`], [`Vector3`], [`Vector4`] and batches of them
//!   in a [`Stack`]
//! - **Matrices**: row-major [`Matrix33`] and [`Matrix44`], vectors multiply
//!   on the left
//! - **Rotations**: [`Quaternion`] (`x, y, z, w`) and [`Euler`] angles
//!
//! # Example
//!
//! ```
//! use trine_math::{Matrix44, Quaternion, Vector3};
//! use std::f32::consts::FRAC_PI_2;
//!
//! let rotate = Matrix44::from_quaternion(Quaternion::from_z_rotation(FRAC_PI_2));
//! let translate = Matrix44::from_translation(Vector3::new(0.0, 0.0, 5.0));
//! // rotate first, then translate
//! let model = Matrix44::multiply(translate, rotate);
//!
//! let p = model.apply_to_point(Vector3::new(1.0, 0.0, 0.0));
//! assert!((p - Vector3::new(0.0, 1.0, 5.0)).length() < 1e-6);
//! ```

pub mod error;
pub mod euler;
pub mod interop;
pub mod matrix;
pub mod matrix33;
pub mod matrix44;
pub mod quaternion;
pub mod scalar;
pub mod stack;
pub mod transform;
pub mod trig;
pub mod vector;
pub mod vector3;
pub mod vector4;

#[cfg(feature = "serde")]
mod serde_impl;

// Re-export commonly used types
pub use error::{MathError, Result};
pub use euler::Euler;
pub use matrix::{Matrix, Matrix33, Matrix44};
pub use matrix44::{Matrix33View, Matrix33ViewMut};
pub use quaternion::Quaternion;
pub use scalar::Scalar;
pub use stack::Stack;
pub use transform::{apply_direction_scale, apply_scale, ApplyToVector};
pub use vector::{Vector, Vector2, Vector3, Vector4};
