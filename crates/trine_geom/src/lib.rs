//! Geometric primitives and intersection queries built on `trine_math`.
//!
//! Every primitive is a small fixed-shape block of scalars (`Line` is two
//! points, `Plane` is a normal and a distance, and so on) with named
//! accessors. The `index` module next to each type documents where each part
//! lives in the flat layout returned by `as_flat`.
//!
//! ```
//! use trine_geom::{geometric_tests, Plane, Ray};
//! use trine_math::Vector3;
//!
//! let ray = Ray::new(Vector3::new(0.0, 5.0, 0.0), Vector3::new(0.0, -1.0, 0.0));
//! let ground = Plane::xz(false, 0.0);
//! let hit = geometric_tests::ray_intersect_plane(&ray, &ground, true).unwrap();
//! assert_eq!(hit, Vector3::new(0.0, 0.0, 0.0));
//! ```

#[macro_use]
mod macros;

pub mod aabb;
pub mod aambb;
pub mod error;
pub mod geometry;
pub mod interval;
pub mod line;
pub mod plane;
pub mod ray;
pub mod rectangle;
pub mod sphere;

pub use aabb::Aabb;
pub use aambb::Aambb;
pub use error::{GeomError, GeomResult};
pub use interval::Interval;
pub use line::Line;
pub use plane::Plane;
pub use ray::Ray;
pub use rectangle::Rectangle;
pub use sphere::Sphere;

use trine_math::{MathError, Scalar};

/// Read a primitive out of a flat scalar slice, checking its length first.
pub(crate) fn read_flat<T: Scalar, P: bytemuck::Pod>(values: &[T]) -> GeomResult<P> {
    let expected = std::mem::size_of::<P>() / std::mem::size_of::<T>();
    if values.len() != expected {
        return Err(MathError::ShapeMismatch {
            expected,
            found: values.len(),
        }
        .into());
    }
    Ok(bytemuck::pod_read_unaligned(bytemuck::cast_slice(values)))
}
