//! Serde support for const-generic arrays.
//!
//! Vectors serialize as a fixed-length sequence of components and matrices as
//! a sequence of rows, e.g. `[[1.0, 0.0], [0.0, 1.0]]` in JSON.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeTuple, Serializer};

use crate::matrix::Matrix;
use crate::vector::Vector;

struct ArrayVisitor<T, const N: usize>(PhantomData<T>);

impl<'de, T: Deserialize<'de>, const N: usize> Visitor<'de> for ArrayVisitor<T, N> {
    type Value = [T; N];

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a sequence of length {}", N)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<[T; N], A::Error> {
        let mut values = Vec::with_capacity(N);
        for i in 0..N {
            let value = seq
                .next_element()?
                .ok_or_else(|| de::Error::invalid_length(i, &self))?;
            values.push(value);
        }
        if seq.next_element::<de::IgnoredAny>()?.is_some() {
            return Err(de::Error::invalid_length(N + 1, &self));
        }
        values
            .try_into()
            .map_err(|_| de::Error::invalid_length(N, &self))
    }
}

fn serialize_array<S: Serializer, T: Serialize>(items: &[T], serializer: S) -> Result<S::Ok, S::Error> {
    let mut tuple = serializer.serialize_tuple(items.len())?;
    for item in items {
        tuple.serialize_element(item)?;
    }
    tuple.end()
}

impl<T: Serialize, const N: usize> Serialize for Vector<T, N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_array(&self.0, serializer)
    }
}

impl<'de, T: Deserialize<'de>, const N: usize> Deserialize<'de> for Vector<T, N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer
            .deserialize_tuple(N, ArrayVisitor::<T, N>(PhantomData))
            .map(Vector)
    }
}

impl<T: Serialize, const R: usize, const C: usize> Serialize for Matrix<T, R, C> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_array(&self.0, serializer)
    }
}

impl<'de, T: Deserialize<'de>, const R: usize, const C: usize> Deserialize<'de> for Matrix<T, R, C> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer
            .deserialize_tuple(R, ArrayVisitor::<Vector<T, C>, R>(PhantomData))
            .map(Matrix)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Matrix33, Quaternion, Stack, Vector3};

    #[test]
    fn test_vector_json() {
        let v = Vector3::<f32>::new(1.0, 2.5, -3.0);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "[1.0,2.5,-3.0]");
        assert_eq!(serde_json::from_str::<Vector3<f32>>(&json).unwrap(), v);
    }

    #[test]
    fn test_vector_json_wrong_length() {
        assert!(serde_json::from_str::<Vector3<f32>>("[1.0,2.0]").is_err());
        assert!(serde_json::from_str::<Vector3<f32>>("[1.0,2.0,3.0,4.0]").is_err());
    }

    #[test]
    fn test_matrix_json() {
        let m = Matrix33::<f64>::from_scale(Vector3::new(2.0, 3.0, 4.0));
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "[[2.0,0.0,0.0],[0.0,3.0,0.0],[0.0,0.0,4.0]]");
        assert_eq!(serde_json::from_str::<Matrix33<f64>>(&json).unwrap(), m);
    }

    #[test]
    fn test_quaternion_and_stack_json() {
        let q = Quaternion::<f32>::identity();
        assert_eq!(serde_json::to_string(&q).unwrap(), "[0.0,0.0,0.0,1.0]");

        let s: Stack<f32, 3> = vec![Vector3::new(1.0, 0.0, 0.0)].into();
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(serde_json::from_str::<Stack<f32, 3>>(&json).unwrap(), s);
    }
}
