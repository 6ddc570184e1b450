use approx::{abs_diff_eq, relative_eq};
use proptest::prelude::*;
use trine_math::{ApplyToVector, Matrix33, Matrix44, Quaternion, Stack, Vector3};

fn component() -> impl Strategy<Value = f64> {
    -100.0f64..100.0
}

fn vector3() -> impl Strategy<Value = Vector3<f64>> {
    (component(), component(), component()).prop_map(|(x, y, z)| Vector3::new(x, y, z))
}

fn non_zero_vector3() -> impl Strategy<Value = Vector3<f64>> {
    vector3().prop_filter("vector must not be near zero", |v| v.length() > 1e-3)
}

fn angle() -> impl Strategy<Value = f64> {
    -std::f64::consts::TAU..std::f64::consts::TAU
}

proptest! {
    #[test]
    fn normalized_vectors_have_unit_length(v in non_zero_vector3()) {
        prop_assert!(relative_eq!(v.normalize().length(), 1.0, epsilon = 1e-12));
    }

    #[test]
    fn normalize_is_idempotent(v in non_zero_vector3()) {
        let once = v.normalize();
        prop_assert!(relative_eq!(once.normalize(), once, epsilon = 1e-12));
    }

    #[test]
    fn dot_is_commutative(a in vector3(), b in vector3()) {
        prop_assert_eq!(a.dot(b), b.dot(a));
    }

    #[test]
    fn cross_is_anti_commutative(a in vector3(), b in vector3()) {
        prop_assert_eq!(a.cross(b), -b.cross(a));
    }

    #[test]
    fn cross_is_perpendicular(a in vector3(), b in vector3()) {
        let c = a.cross(b);
        prop_assert!(abs_diff_eq!(c.dot(a), 0.0, epsilon = 1e-6));
        prop_assert!(abs_diff_eq!(c.dot(b), 0.0, epsilon = 1e-6));
    }

    #[test]
    fn quaternion_and_matrix_rotations_agree(axis in non_zero_vector3(), theta in angle(), v in vector3()) {
        let from_quat = Matrix33::from_quaternion(Quaternion::from_axis_rotation(axis, theta));
        let from_axis = Matrix33::from_axis_rotation(axis, theta);
        prop_assert!(abs_diff_eq!(from_quat.apply_to_vector(v), from_axis.apply_to_vector(v), epsilon = 1e-9));
    }

    #[test]
    fn quaternion_rotation_matches_its_matrix(axis in non_zero_vector3(), theta in angle(), v in vector3()) {
        let q = Quaternion::from_axis_rotation(axis, theta);
        prop_assert!(abs_diff_eq!(q.apply_to_vector(v), q.matrix33().apply_to_vector(v), epsilon = 1e-9));
    }

    #[test]
    fn quaternion_cross_composes_like_multiply(
        a in non_zero_vector3(), ta in angle(),
        b in non_zero_vector3(), tb in angle(),
    ) {
        let q1 = Quaternion::from_axis_rotation(a, ta);
        let q2 = Quaternion::from_axis_rotation(b, tb);
        let composed = Matrix44::from_quaternion(q1.cross(q2));
        let multiplied = Matrix44::multiply(q1.matrix44(), q2.matrix44());
        prop_assert!(abs_diff_eq!(composed, multiplied, epsilon = 1e-9));
    }

    #[test]
    fn rotation_preserves_length(axis in non_zero_vector3(), theta in angle(), v in vector3()) {
        let rotated = Matrix33::from_axis_rotation(axis, theta).apply_to_vector(v);
        prop_assert!(relative_eq!(rotated.length(), v.length(), epsilon = 1e-9));
    }

    #[test]
    fn rigid_transform_inverse_round_trips(axis in non_zero_vector3(), theta in angle(), t in vector3(), p in vector3()) {
        let m = Matrix44::multiply(Matrix44::from_translation(t), Matrix44::from_axis_rotation(axis, theta));
        let inv = m.inverse().unwrap();
        let back = inv.apply_to_point(m.apply_to_point(p));
        prop_assert!(abs_diff_eq!(back, p, epsilon = 1e-8));
    }

    #[test]
    fn batched_lengths_match_single(rows in prop::collection::vec(vector3(), 0..32)) {
        let stack: Stack<f64, 3> = rows.iter().copied().collect();
        let lengths = stack.lengths();
        prop_assert_eq!(lengths.len(), rows.len());
        for (row, length) in rows.iter().zip(lengths) {
            prop_assert_eq!(row.length(), length);
        }
    }
}

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn degenerate_inputs_fall_back_without_panicking() {
    init_logger();

    let singular = Matrix33::<f64>::from_scale(Vector3::new(1.0, 0.0, 1.0));
    assert_eq!(singular.inverse(), Err(trine_math::MathError::SingularMatrix));

    let identity = Quaternion::<f64>::identity();
    assert_eq!(identity.rotation_axis(), Vector3::new(0.0, 0.0, -1.0));
    assert_eq!(identity.power(3.0), identity);

    assert!(Vector3::<f64>::zeros().normalize().is_nan());
    assert_eq!(Vector3::<f64>::zeros().try_normalize(), None);
}
