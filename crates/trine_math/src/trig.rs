//! Field of view helpers. All angles are radians.

use crate::scalar::Scalar;

/// Field of view that shows `height` units at `distance`.
pub fn calculate_fov<T: Scalar>(height: T, distance: T) -> T {
    T::two() * (height * T::half()).atan2(distance)
}

/// Height visible at `distance` with field of view `fov`.
pub fn calculate_height<T: Scalar>(fov: T, distance: T) -> T {
    T::two() * distance * (fov * T::half()).tan()
}

/// `(width, height)` of the view plane at `distance`.
pub fn calculate_plane_size<T: Scalar>(aspect_ratio: T, fov: T, distance: T) -> (T, T) {
    let height = calculate_height(fov, distance);
    (height * aspect_ratio, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_calculate_fov() {
        assert_relative_eq!(calculate_fov(2.0f64, 1.0), FRAC_PI_2);
    }

    #[test]
    fn test_calculate_height() {
        assert_relative_eq!(calculate_height(FRAC_PI_2, 1.0f64), 2.0, epsilon = 1e-12);
        let fov = calculate_fov(10.0f64, 4.0);
        assert_relative_eq!(calculate_height(fov, 4.0), 10.0, epsilon = 1e-12);
    }

    #[test]
    fn test_calculate_plane_size() {
        let (w, h) = calculate_plane_size(2.0f64, FRAC_PI_2, 1.0);
        assert_relative_eq!(w, 4.0, epsilon = 1e-12);
        assert_relative_eq!(h, 2.0, epsilon = 1e-12);
    }
}
