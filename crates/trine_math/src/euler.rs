//! Euler angles.
//!
//! Angles are stored as `[pitch, roll, yaw]` in radians and follow a Y-up
//! convention: pitch rotates about X, yaw about Y and roll about Z. When
//! converted to a matrix or quaternion, roll is applied first, then pitch,
//! then yaw.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::scalar::Scalar;
use crate::vector::Vector3;

/// Component positions within an `Euler`.
pub mod index {
    pub const PITCH: usize = 0;
    pub const ROLL: usize = 1;
    pub const YAW: usize = 2;
}

/// Pitch, roll and yaw in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(transparent)]
pub struct Euler<T = f32>(Vector3<T>);

impl<T: Scalar> Euler<T> {
    pub fn new(pitch: T, roll: T, yaw: T) -> Self {
        Self(Vector3::new(pitch, roll, yaw))
    }

    /// Reinterpret a `[pitch, roll, yaw]` vector.
    pub fn from_vector(angles: Vector3<T>) -> Self {
        Self(angles)
    }

    pub fn as_vector(&self) -> Vector3<T> {
        self.0
    }

    /// Rotation about X.
    #[inline]
    pub fn pitch(&self) -> T {
        self.0[index::PITCH]
    }

    /// Rotation about Z.
    #[inline]
    pub fn roll(&self) -> T {
        self.0[index::ROLL]
    }

    /// Rotation about Y.
    #[inline]
    pub fn yaw(&self) -> T {
        self.0[index::YAW]
    }
}

impl<T: Scalar> Default for Euler<T> {
    fn default() -> Self {
        Self(Vector3::zeros())
    }
}
