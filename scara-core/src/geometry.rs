use std::f64::consts::{PI, TAU};

/// Euclidean distance from the origin to `(x, y)`.
#[inline]
pub fn distance(x: f64, y: f64) -> f64 {
    (x.powi(2) + y.powi(2)).sqrt()
}

/// Calculate the angle of a triangle using the law of cosines.
///
/// Returns the angle opposite side `c`, given the three side lengths. Both
/// `a` and `b` must be positive. If the sides cannot form a triangle the
/// cosine falls outside [-1, 1] and the result is NaN.
pub fn law_of_cosines(a: f64, b: f64, c: f64) -> f64 {
    cosine_of(a, b, c).acos()
}

/// Law of cosines with the cosine clamped into [-1, 1].
///
/// Only meaningful once the triangle is known to exist; it absorbs
/// round-off on the reach boundary where the cosine lands a hair past ±1.
pub fn law_of_cosines_clamped(a: f64, b: f64, c: f64) -> f64 {
    cosine_of(a, b, c).clamp(-1.0, 1.0).acos()
}

#[inline]
fn cosine_of(a: f64, b: f64, c: f64) -> f64 {
    let a2 = a.powi(2);
    let b2 = b.powi(2);
    let c2 = c.powi(2);

    let numerator = a2 + b2 - c2;
    let denominator = 2.0 * a * b;

    numerator / denominator
}

/// Convert radians into degrees.
#[inline]
pub fn to_degrees(radians: f64) -> f64 {
    radians * 180.0 / PI
}

/// Convert degrees into radians.
#[inline]
pub fn to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Wrap an angle into [0, 2π) using a floored modulo.
///
/// NaN is passed through.
pub fn wrap_radians(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Wrap an angle into [0, 360) using a floored modulo.
pub fn wrap_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Calculate the shortest rotation between two points on a circle.
///
/// The result lies in (-π, π].
pub fn shortest_rotation(distance: f64) -> f64 {
    let dist_normal = wrap_radians(distance);

    if dist_normal > PI {
        dist_normal - TAU
    } else {
        dist_normal
    }
}

/// Magnitude of the smallest turn taking `current` onto `target`.
#[inline]
pub fn min_angle_diff(current: f64, target: f64) -> f64 {
    shortest_rotation(target - current).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn test_distance() {
        assert_eq!(distance(0.0, 0.0), 0.0);
        assert_eq!(distance(3.0, 4.0), 5.0);
        assert_eq!(distance(-3.0, -4.0), 5.0);
    }

    #[test]
    fn test_law_of_cosines() {
        assert!((law_of_cosines(3.0, 4.0, 5.0) - PI / 2.0).abs() < TOLERANCE);
        assert!((law_of_cosines(1.0, 1.0, 1.0) - PI / 3.0).abs() < TOLERANCE);
        assert!((law_of_cosines(100.0, 100.0, 200.0) - PI).abs() < TOLERANCE);
        assert!(law_of_cosines(100.0, 100.0, 200.0001).is_nan());
    }

    #[test]
    fn test_law_of_cosines_clamped() {
        assert!((law_of_cosines_clamped(100.0, 100.0, 200.0001) - PI).abs() < TOLERANCE);
        assert!(law_of_cosines_clamped(300.0, 100.0, 100.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_to_degrees() {
        assert!((to_degrees(PI) - 180.0).abs() < TOLERANCE);
        assert!((to_degrees(2.0 * 0.3) - 2.0 * to_degrees(0.3)).abs() < TOLERANCE);
        assert!((to_radians(to_degrees(1.234)) - 1.234).abs() < TOLERANCE);
    }

    #[test]
    fn test_wrap_radians() {
        assert_eq!(wrap_radians(0.0), 0.0);
        assert!((wrap_radians(-PI / 2.0) - 1.5 * PI).abs() < TOLERANCE);
        assert!((wrap_radians(5.0 * PI) - PI).abs() < TOLERANCE);
        assert!(wrap_radians(-1e-20) < TAU);
        assert!(wrap_radians(f64::NAN).is_nan());
    }

    #[test]
    fn test_wrap_degrees() {
        assert_eq!(wrap_degrees(-90.0), 270.0);
        assert_eq!(wrap_degrees(720.0), 0.0);
        assert_eq!(wrap_degrees(405.0), 45.0);
    }

    #[test]
    fn test_shortest_rotation() {
        assert!(shortest_rotation(45.0_f64.to_radians()) < 46.0_f64.to_radians());
        assert!(shortest_rotation(179.0_f64.to_radians()) < 180.0_f64.to_radians());
        assert!((shortest_rotation(270.0_f64.to_radians()) + PI / 2.0).abs() < TOLERANCE);
        assert!((shortest_rotation(-450.0_f64.to_radians()) + PI / 2.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_min_angle_diff() {
        assert!((min_angle_diff(0.1, TAU - 0.1) - 0.2).abs() < TOLERANCE);
        assert!((min_angle_diff(PI, 0.0) - PI).abs() < TOLERANCE);
        assert!(min_angle_diff(1.0, 1.0 + TAU).abs() < TOLERANCE);
    }
}
