//! Batches of vectors.
//!
//! A `Stack<T, N>` is an `(M, N)` array: `M` rows, each an `N`-component
//! vector. Every single-vector operation has a batched form here that runs
//! independently per row. Reductions "along the last axis" produce one scalar
//! per row, reductions along the first axis produce one vector.
//!
//! Binary operations between two stacks broadcast: equal row counts are
//! paired row by row, and a stack with exactly one row is applied to every
//! row of the other. Anything else is a `BroadcastMismatch`.

use std::ops::{Add, Div, Mul, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{MathError, Result};
use crate::scalar::Scalar;
use crate::vector::{Vector, Vector3};

/// A stack of `N`-component row vectors.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "T: Scalar + Serialize",
        deserialize = "T: Scalar + Deserialize<'de>"
    ))
)]
pub struct Stack<T: Scalar, const N: usize> {
    rows: Vec<Vector<T, N>>,
}

impl<T: Scalar, const N: usize> Stack<T, N> {
    /// An empty stack.
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            rows: Vec::with_capacity(capacity),
        }
    }

    pub fn from_rows(rows: Vec<Vector<T, N>>) -> Self {
        Self { rows }
    }

    /// Build from a flat, row-major buffer of `M * N` scalars.
    pub fn from_flat(values: &[T]) -> Result<Self> {
        if values.len() % N != 0 {
            return Err(MathError::ShapeMismatch {
                expected: N,
                found: values.len() % N,
            });
        }
        let rows = values
            .chunks_exact(N)
            .map(Vector::from_slice)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rows })
    }

    /// The stack as a flat, row-major scalar slice. No copy is made.
    pub fn as_flat(&self) -> &[T] {
        bytemuck::cast_slice(self.rows.as_slice())
    }

    /// Borrowed view of every row.
    #[inline]
    pub fn rows(&self) -> &[Vector<T, N>] {
        &self.rows
    }

    #[inline]
    pub fn rows_mut(&mut self) -> &mut [Vector<T, N>] {
        &mut self.rows
    }

    #[inline]
    pub fn row(&self, index: usize) -> Option<&Vector<T, N>> {
        self.rows.get(index)
    }

    /// Number of rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn push(&mut self, row: Vector<T, N>) {
        self.rows.push(row);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vector<T, N>> {
        self.rows.iter()
    }

    pub fn into_rows(self) -> Vec<Vector<T, N>> {
        self.rows
    }

    /// Apply `f` to every row, producing a new stack.
    pub fn map_rows<U: Scalar, const M: usize>(
        &self,
        f: impl Fn(&Vector<T, N>) -> Vector<U, M>,
    ) -> Stack<U, M> {
        Stack {
            rows: self.rows.iter().map(f).collect(),
        }
    }

    /// Apply `f` to every row in parallel.
    #[cfg(feature = "rayon")]
    pub fn par_map_rows<U: Scalar, const M: usize>(
        &self,
        f: impl Fn(&Vector<T, N>) -> Vector<U, M> + Sync + Send,
    ) -> Stack<U, M> {
        use rayon::prelude::*;

        Stack {
            rows: self.rows.par_iter().map(f).collect(),
        }
    }

    /// Reduce every row to a single value.
    pub fn map_reduce<R>(&self, f: impl Fn(&Vector<T, N>) -> R) -> Vec<R> {
        self.rows.iter().map(f).collect()
    }

    /// Pair the rows of two stacks, broadcasting a single-row operand.
    pub fn zip_broadcast<R>(
        &self,
        other: &Stack<T, N>,
        f: impl Fn(&Vector<T, N>, &Vector<T, N>) -> R,
    ) -> Result<Vec<R>> {
        match (self.len(), other.len()) {
            (l, r) if l == r => Ok(self
                .rows
                .iter()
                .zip(other.rows.iter())
                .map(|(a, b)| f(a, b))
                .collect()),
            (_, 1) => Ok(self.rows.iter().map(|a| f(a, &other.rows[0])).collect()),
            (1, _) => Ok(other.rows.iter().map(|b| f(&self.rows[0], b)).collect()),
            (left, right) => Err(MathError::BroadcastMismatch { left, right }),
        }
    }

    /// Length of every row.
    pub fn lengths(&self) -> Vec<T> {
        self.map_reduce(|v| v.length())
    }

    pub fn squared_lengths(&self) -> Vec<T> {
        self.map_reduce(|v| v.squared_length())
    }

    /// Every row scaled to unit length. Zero rows become NaN.
    pub fn normalized(&self) -> Self {
        self.map_rows(|v| v.normalize())
    }

    /// Normalize every row without allocating.
    pub fn normalize_in_place(&mut self) {
        for row in &mut self.rows {
            *row = row.normalize();
        }
    }

    /// Every row rescaled to `length`.
    pub fn with_length(&self, length: T) -> Self {
        self.map_rows(|v| v.set_length(length))
    }

    /// Row-wise dot products, broadcasting a single-row operand.
    pub fn dots(&self, other: &Stack<T, N>) -> Result<Vec<T>> {
        self.zip_broadcast(other, |a, b| a.dot(*b))
    }

    /// Dot product of every row with `v`.
    pub fn dots_vector(&self, v: Vector<T, N>) -> Vec<T> {
        self.map_reduce(|row| row.dot(v))
    }

    /// Row-wise `a + (b - a) * t`.
    pub fn interpolate(a: &Self, b: &Self, t: T) -> Result<Self> {
        let rows = a.zip_broadcast(b, |x, y| x.interpolate(*y, t))?;
        Ok(Self { rows })
    }

    /// Sum of each row.
    pub fn sums(&self) -> Vec<T> {
        self.map_reduce(|v| v.sum())
    }

    /// Smallest component of each row.
    pub fn mins(&self) -> Vec<T> {
        self.map_reduce(|v| v.min_element())
    }

    /// Largest component of each row.
    pub fn maxs(&self) -> Vec<T> {
        self.map_reduce(|v| v.max_element())
    }

    /// Componentwise minimum over all rows, `None` when empty.
    pub fn min_rows(&self) -> Option<Vector<T, N>> {
        self.rows.iter().copied().reduce(Vector::min)
    }

    /// Componentwise maximum over all rows, `None` when empty.
    pub fn max_rows(&self) -> Option<Vector<T, N>> {
        self.rows.iter().copied().reduce(Vector::max)
    }

    /// Row-wise addition with broadcasting.
    pub fn try_add(&self, other: &Self) -> Result<Self> {
        Ok(Self {
            rows: self.zip_broadcast(other, |a, b| *a + *b)?,
        })
    }

    /// Row-wise subtraction with broadcasting.
    pub fn try_sub(&self, other: &Self) -> Result<Self> {
        Ok(Self {
            rows: self.zip_broadcast(other, |a, b| *a - *b)?,
        })
    }

    /// Row-wise componentwise multiplication with broadcasting.
    pub fn try_mul(&self, other: &Self) -> Result<Self> {
        Ok(Self {
            rows: self.zip_broadcast(other, |a, b| *a * *b)?,
        })
    }
}

impl<T: Scalar> Stack<T, 3> {
    /// Row-wise cross products, broadcasting a single-row operand.
    pub fn cross(&self, other: &Self) -> Result<Self> {
        Ok(Self {
            rows: self.zip_broadcast(other, |a, b| a.cross(*b))?,
        })
    }

    /// Unit normals of a batch of triangles.
    ///
    /// The three stacks hold the first, second and third vertex of each
    /// triangle. See [`Vector3::generate_normals`] for the winding.
    pub fn generate_normals(v1: &Self, v2: &Self, v3: &Self) -> Result<Self> {
        Ok(Self::generate_normals_unnormalized(v1, v2, v3)?.normalized())
    }

    /// Raw cross products for a batch of triangles, each twice its triangle's
    /// area long.
    pub fn generate_normals_unnormalized(v1: &Self, v2: &Self, v3: &Self) -> Result<Self> {
        let a = v1.try_sub(v2)?;
        let b = v3.try_sub(v2)?;
        b.cross(&a)
    }

    /// Cross product of every row with `v`.
    pub fn cross_vector(&self, v: Vector3<T>) -> Self {
        self.map_rows(|row| row.cross(v))
    }
}

impl<T: Scalar, const N: usize> From<Vec<Vector<T, N>>> for Stack<T, N> {
    fn from(rows: Vec<Vector<T, N>>) -> Self {
        Self { rows }
    }
}

impl<T: Scalar, const N: usize> FromIterator<Vector<T, N>> for Stack<T, N> {
    fn from_iter<I: IntoIterator<Item = Vector<T, N>>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

impl<'a, T: Scalar, const N: usize> IntoIterator for &'a Stack<T, N> {
    type Item = &'a Vector<T, N>;
    type IntoIter = std::slice::Iter<'a, Vector<T, N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl<T: Scalar, const N: usize> std::ops::Index<usize> for Stack<T, N> {
    type Output = Vector<T, N>;

    fn index(&self, index: usize) -> &Vector<T, N> {
        &self.rows[index]
    }
}

macro_rules! impl_broadcast_vector_op {
    ($trait:ident, $method:ident, $op:tt) => {
        impl<T: Scalar, const N: usize> $trait<Vector<T, N>> for Stack<T, N> {
            type Output = Stack<T, N>;

            fn $method(self, rhs: Vector<T, N>) -> Stack<T, N> {
                self.map_rows(|row| *row $op rhs)
            }
        }

        impl<T: Scalar, const N: usize> $trait<T> for Stack<T, N> {
            type Output = Stack<T, N>;

            fn $method(self, rhs: T) -> Stack<T, N> {
                self.map_rows(|row| *row $op rhs)
            }
        }
    };
}

impl_broadcast_vector_op!(Add, add, +);
impl_broadcast_vector_op!(Sub, sub, -);
impl_broadcast_vector_op!(Mul, mul, *);
impl_broadcast_vector_op!(Div, div, /);
