//! 2D rectangles.
//!
//! A rectangle is a position and a size. The size may be negative, which
//! describes the same area as the positive size anchored at the opposite
//! corner; the `left`/`right`/`bottom`/`top` accessors and [`Rectangle::bounds`]
//! always report the normalized extents.

use trine_math::{Scalar, Vector2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Positions within a `Rectangle`.
pub mod index {
    pub const POSITION: usize = 0;
    pub const SIZE: usize = 1;
}

/// A rectangle stored as `[[x, y], [width, height]]`.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(transparent)]
pub struct Rectangle<T = f32>([Vector2<T>; 2]);

impl_flat_primitive!(Rectangle, 4);

impl<T: Scalar> Rectangle<T> {
    pub fn zeros() -> Self {
        Self([Vector2::zeros(); 2])
    }

    /// Taken literally: a negative width or height is kept.
    pub fn from_position(x: T, y: T, width: T, height: T) -> Self {
        Self([Vector2::new(x, y), Vector2::new(width, height)])
    }

    /// The rectangle spanning the given edges, in either order. The result
    /// always has a non-negative size.
    pub fn from_bounds(left: T, right: T, bottom: T, top: T) -> Self {
        let (xmin, xmax) = (left.min(right), left.max(right));
        let (ymin, ymax) = (bottom.min(top), bottom.max(top));
        Self::from_position(xmin, ymin, xmax - xmin, ymax - ymin)
    }

    /// `(left, right, bottom, top)` with negative sizes accounted for.
    pub fn bounds(&self) -> (T, T, T, T) {
        (self.left(), self.right(), self.bottom(), self.top())
    }

    pub fn position(&self) -> Vector2<T> {
        self.0[index::POSITION]
    }

    /// The literal size, possibly negative.
    pub fn size(&self) -> Vector2<T> {
        self.0[index::SIZE]
    }

    pub fn abs_size(&self) -> Vector2<T> {
        self.size().abs()
    }

    pub fn x(&self) -> T {
        self.position().x()
    }

    pub fn y(&self) -> T {
        self.position().y()
    }

    pub fn width(&self) -> T {
        self.size().x()
    }

    pub fn height(&self) -> T {
        self.size().y()
    }

    pub fn abs_width(&self) -> T {
        self.width().abs()
    }

    pub fn abs_height(&self) -> T {
        self.height().abs()
    }

    pub fn left(&self) -> T {
        self.x().min(self.x() + self.width())
    }

    pub fn right(&self) -> T {
        self.x().max(self.x() + self.width())
    }

    pub fn bottom(&self) -> T {
        self.y().min(self.y() + self.height())
    }

    pub fn top(&self) -> T {
        self.y().max(self.y() + self.height())
    }

    /// Scale position and size componentwise.
    ///
    /// Scaling the position as well means the rectangle moves unless it sits
    /// at the origin.
    pub fn scale_by_vector(&self, scale: Vector2<T>) -> Self {
        Self([self.position() * scale, self.size() * scale])
    }

    /// `abs_width / abs_height`.
    pub fn aspect_ratio(&self) -> T {
        self.abs_width() / self.abs_height()
    }
}

impl<T: Scalar> Default for Rectangle<T> {
    fn default() -> Self {
        Self::zeros()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_from_position() {
        let rect = Rectangle::from_position(1.0, 2.0, 3.0, 4.0);
        assert_eq!(rect.position(), Vector2::new(1.0, 2.0));
        assert_eq!(rect.size(), Vector2::new(3.0, 4.0));
        assert_eq!(rect.as_flat(), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_rectangle_from_bounds_swapped() {
        let rect = Rectangle::from_bounds(5.0, 1.0, 8.0, 2.0);
        assert_eq!(rect, Rectangle::from_position(1.0, 2.0, 4.0, 6.0));
    }

    #[test]
    fn test_rectangle_negative_size() {
        let rect = Rectangle::from_position(1.0, 1.0, -2.0, -3.0);
        assert_eq!(rect.width(), -2.0);
        assert_eq!(rect.abs_width(), 2.0);
        assert_eq!(rect.abs_height(), 3.0);
        assert_eq!(rect.abs_size(), Vector2::new(2.0, 3.0));
        assert_eq!(rect.bounds(), (-1.0, 1.0, -2.0, 1.0));
        assert_eq!(rect.left(), -1.0);
        assert_eq!(rect.top(), 1.0);
    }

    #[test]
    fn test_rectangle_scale_by_vector_moves() {
        let rect = Rectangle::from_position(1.0, 1.0, 2.0, 2.0);
        let scaled = rect.scale_by_vector(Vector2::new(2.0, 3.0));
        assert_eq!(scaled.position(), Vector2::new(2.0, 3.0));
        assert_eq!(scaled.size(), Vector2::new(4.0, 6.0));
    }

    #[test]
    fn test_rectangle_aspect_ratio() {
        let rect = Rectangle::from_position(0.0, 0.0, -16.0, 9.0);
        assert_eq!(rect.aspect_ratio(), 16.0 / 9.0);
    }

    #[test]
    fn test_rectangle_zeros() {
        assert_eq!(Rectangle::<f32>::zeros().bounds(), (0.0, 0.0, 0.0, 0.0));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_rectangle_serde() {
        let rect = Rectangle::from_position(1.0f64, 2.0, -3.0, 4.0);
        let json = serde_json::to_string(&rect).unwrap();
        assert_eq!(json, "[[1.0,2.0],[-3.0,4.0]]");
        let back: Rectangle<f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rect);
    }
}
