use approx::assert_abs_diff_eq;
use trine_geom::{geometric_tests, Aabb, GeomError, Line, Plane, Ray, Sphere};
use trine_math::{ApplyToVector, Matrix44, Quaternion, Vector3};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn closest_point_on_line_projects_onto_axis() {
    let line = Line::new(Vector3::zeros(), Vector3::new(10.0, 0.0, 0.0));
    let point = geometric_tests::closest_point_on_line(&line, Vector3::new(5.0, 10.0, 0.0));
    assert_eq!(point, Vector3::new(5.0, 0.0, 0.0));
}

#[test]
fn ray_meets_ground_plane_only_from_the_front() {
    let ray = Ray::new(Vector3::zeros(), Vector3::new(0.0, 1.0, 0.0));
    let plane = Plane::xz(false, 0.0);

    assert_eq!(
        geometric_tests::ray_intersect_plane(&ray, &plane, false),
        Some(Vector3::zeros())
    );
    // Travelling along the normal means approaching from behind.
    assert_eq!(geometric_tests::ray_intersect_plane(&ray, &plane, true), None);
}

#[test]
fn aabb_from_symmetric_points_is_centred() {
    let aabb = Aabb::from_points(&[Vector3::new(-1.0, -1.0, -1.0), Vector3::new(1.0, 1.0, 1.0)]).unwrap();
    assert_eq!(aabb.centre_point(), Vector3::zeros());
}

#[test]
fn overlapping_spheres_penetrate() {
    let s1 = Sphere::new(Vector3::zeros(), 1.0);
    let s2 = Sphere::new(Vector3::new(1.5, 0.0, 0.0), 1.0);
    assert!(geometric_tests::sphere_does_intersect_sphere(&s1, &s2));
    assert_eq!(geometric_tests::sphere_penetration_sphere(&s1, &s2), 0.5);
}

#[test]
fn half_turn_about_x_flips_y() {
    let q = Quaternion::<f32>::from_x_rotation(std::f32::consts::PI);
    let v = q.apply_to_vector(Vector3::new(0.0, 1.0, 0.0));
    assert_abs_diff_eq!(v, Vector3::new(0.0, -1.0, 0.0), epsilon = 1e-6);
}

#[test]
fn ray_misses_box_behind_origin() {
    let aabb = Aabb::from_bounds(Vector3::new(-1.0, -1.0, 5.0), Vector3::new(1.0, 1.0, 6.0));
    let ray = Ray::new(Vector3::zeros(), Vector3::new(0.0, 0.0, -1.0));
    assert_eq!(geometric_tests::ray_intersect_aabb(&ray, &aabb), None);

    let towards = Ray::new(Vector3::zeros(), Vector3::new(0.0, 0.0, 1.0));
    assert_eq!(
        geometric_tests::ray_intersect_aabb(&towards, &aabb),
        Some(Vector3::new(0.0, 0.0, 5.0))
    );
}

#[test]
fn ray_parallel_to_slab_outside_it_misses() {
    let aabb = Aabb::from_bounds(Vector3::new(-1.0, -1.0, -1.0), Vector3::new(1.0, 1.0, 1.0));
    // Zero Y direction with the origin above the box.
    let ray = Ray::new(Vector3::new(-5.0, 2.0, 0.0), Vector3::new(1.0, 0.0, 0.0));
    assert_eq!(geometric_tests::ray_intersect_aabb(&ray, &aabb), None);

    // Same direction inside the slab hits.
    let ray = Ray::new(Vector3::new(-5.0, 0.5, 0.0), Vector3::new(1.0, 0.0, 0.0));
    assert_eq!(
        geometric_tests::ray_intersect_aabb(&ray, &aabb),
        Some(Vector3::new(-1.0, 0.5, 0.0))
    );
}

#[test]
fn transformed_box_still_contains_transformed_points() {
    let aabb = Aabb::from_bounds(Vector3::new(0.0, 0.0, 0.0), Vector3::new(2.0, 1.0, 1.0));
    let m = Matrix44::multiply(
        Matrix44::from_translation(Vector3::new(3.0, -1.0, 2.0)),
        Matrix44::from_z_rotation(0.6),
    );
    let moved = aabb.transform(&m);
    for corner in aabb.corners() {
        let p = m.apply_to_point(corner);
        assert!(moved.add_points(&[p]) == moved, "{} escaped {:?}", p, moved);
    }
}

#[test]
fn plane_from_collinear_points_is_an_error() {
    init_logger();
    let result = Plane::<f32>::from_points(
        Vector3::new(0.0, 0.0, 0.0),
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(3.0, 0.0, 0.0),
    );
    assert_eq!(result, Err(GeomError::CollinearPoints));
}

#[test]
fn empty_point_sets_are_errors() {
    init_logger();
    assert!(matches!(Aabb::<f32>::from_points(&[]), Err(GeomError::Empty(_))));
    assert!(matches!(Sphere::<f32>::from_points(&[]), Err(GeomError::Empty(_))));
}

#[test]
fn glam_agrees_on_plane_hit() {
    // Compare against glam's own ray/plane arithmetic.
    let origin = glam::Vec3::new(1.0, 4.0, -2.0);
    let direction = glam::Vec3::new(0.3, -1.0, 0.2).normalize();
    let normal = glam::Vec3::Y;
    let t = (0.5 - origin.dot(normal)) / direction.dot(normal);
    let expected = origin + direction * t;

    let ray = Ray::new(Vector3::from(origin), Vector3::from(direction));
    let plane = Plane::xz(false, 0.5);
    let hit = geometric_tests::ray_intersect_plane(&ray, &plane, true).unwrap();
    assert_abs_diff_eq!(hit, Vector3::from(expected), epsilon = 1e-5);
}

#[test]
fn flat_input_keeps_ray_and_box_invariants() {
    let ray = Ray::<f32>::from_slice(&[0.0, 0.0, -5.0, 0.0, 0.0, 2.0]).unwrap();
    let unit = Aabb::from_bounds(Vector3::new(-1.0, -1.0, -1.0), Vector3::new(1.0, 1.0, 1.0));
    assert_eq!(geometric_tests::ray_intersect_aabb_distance(&ray, &unit), Some(4.0));

    // Corners given max-first still describe the same box.
    let swapped = Aabb::<f32>::from_slice(&[1.0, 1.0, 1.0, -1.0, -1.0, -1.0]).unwrap();
    assert_eq!(swapped, unit);
    assert_eq!(
        geometric_tests::ray_intersect_aabb(&ray, &swapped),
        Some(Vector3::new(0.0, 0.0, -1.0))
    );

    let sphere = Sphere::<f32>::from_slice(&[0.0, 0.0, 0.0, -1.0]).unwrap();
    assert_eq!(sphere.radius(), 0.0);
}
