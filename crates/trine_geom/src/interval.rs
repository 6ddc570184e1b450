use trine_math::Scalar;

/// A closed range `[min, max]` along one axis.
///
/// Used for box extents and the per-axis slabs of ray/box tests. An interval
/// with `min > max` is empty.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval<T = f32> {
    pub min: T,
    pub max: T,
}

impl<T: Scalar> Interval<T> {
    /// Create a new interval given min and max values.
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    /// An empty interval (min > max, contains nothing).
    pub fn empty() -> Self {
        Self::new(T::infinity(), T::neg_infinity())
    }

    /// A universe interval (contains everything).
    pub fn universe() -> Self {
        Self::new(T::neg_infinity(), T::infinity())
    }

    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }

    /// Returns true if x is within the interval [min, max] (inclusive).
    pub fn contains(&self, x: T) -> bool {
        self.min <= x && x <= self.max
    }

    /// Clamps x to be within the interval [min, max].
    pub fn clamp(&self, x: T) -> T {
        x.max(self.min).min(self.max)
    }

    /// The overlap of two intervals, empty if they are disjoint.
    pub fn intersection(a: &Self, b: &Self) -> Self {
        Self::new(a.min.max(b.min), a.max.min(b.max))
    }
}

impl<T: Scalar> Default for Interval<T> {
    fn default() -> Self {
        Self::empty()
    }
}
