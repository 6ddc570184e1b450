//! Triangle-list meshes for simple shapes.
//!
//! Vertices come as stacks ready to upload: six per quad, thirty-six per cube,
//! two triangles per face. Texture coordinates line up row for row with the
//! matching vertex stack.

use trine_math::{Scalar, Stack, Vector2, Vector3};

// One face: two triangles over the corners of a unit square.
const FACE_CORNERS: [[f64; 2]; 6] = [
    [1.0, 1.0],
    [-1.0, 1.0],
    [1.0, -1.0],
    [-1.0, 1.0],
    [-1.0, -1.0],
    [1.0, -1.0],
];

// Per-face vertex signs for the cube, in `FACE_CORNERS` order:
// +Y, -Y, +Z, -Z, -X, +X.
const CUBE_SIGNS: [[f64; 3]; 36] = [
    [1.0, 1.0, -1.0],
    [-1.0, 1.0, -1.0],
    [1.0, 1.0, 1.0],
    [-1.0, 1.0, -1.0],
    [-1.0, 1.0, 1.0],
    [1.0, 1.0, 1.0],
    [1.0, -1.0, 1.0],
    [-1.0, -1.0, 1.0],
    [1.0, -1.0, -1.0],
    [-1.0, -1.0, 1.0],
    [-1.0, -1.0, -1.0],
    [1.0, -1.0, -1.0],
    [1.0, 1.0, 1.0],
    [-1.0, 1.0, 1.0],
    [1.0, -1.0, 1.0],
    [-1.0, 1.0, 1.0],
    [-1.0, -1.0, 1.0],
    [1.0, -1.0, 1.0],
    [1.0, -1.0, -1.0],
    [-1.0, -1.0, -1.0],
    [1.0, 1.0, -1.0],
    [-1.0, -1.0, -1.0],
    [-1.0, 1.0, -1.0],
    [1.0, 1.0, -1.0],
    [-1.0, 1.0, 1.0],
    [-1.0, 1.0, -1.0],
    [-1.0, -1.0, 1.0],
    [-1.0, 1.0, -1.0],
    [-1.0, -1.0, -1.0],
    [-1.0, -1.0, 1.0],
    [1.0, 1.0, -1.0],
    [1.0, 1.0, 1.0],
    [1.0, -1.0, -1.0],
    [1.0, 1.0, 1.0],
    [1.0, -1.0, 1.0],
    [1.0, -1.0, -1.0],
];

fn face_coords<T: Scalar>() -> impl Iterator<Item = Vector2<T>> {
    FACE_CORNERS.iter().map(|[u, v]| {
        Vector2::new(T::from_f64((u + 1.0) * 0.5), T::from_f64((v + 1.0) * 0.5))
    })
}

/// A quad in the XY plane spanning `[-width, width] x [-height, height]`.
///
/// `width` and `height` are half extents.
pub fn create_quad<T: Scalar>(width: T, height: T) -> Stack<T, 3> {
    FACE_CORNERS
        .iter()
        .map(|[x, y]| Vector3::new(width * T::from_f64(*x), height * T::from_f64(*y), T::zero()))
        .collect()
}

/// Texture coordinates for [`create_quad`], in `[0, 1]`.
pub fn quad_texture_coords<T: Scalar>() -> Stack<T, 2> {
    face_coords().collect()
}

/// An axis-aligned cube centred on the origin with the given half extents.
pub fn create_cube<T: Scalar>(width: T, height: T, depth: T) -> Stack<T, 3> {
    let extent = Vector3::new(width, height, depth);
    CUBE_SIGNS
        .iter()
        .map(|&signs| Vector3::from(signs.map(T::from_f64)) * extent)
        .collect()
}

/// Texture coordinates for [`create_cube`]: the quad layout on each face.
pub fn cube_texture_coords<T: Scalar>() -> Stack<T, 2> {
    (0..6).flat_map(|_| face_coords()).collect()
}
