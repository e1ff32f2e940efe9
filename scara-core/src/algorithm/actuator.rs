//! Mapping from the joint frame into the actuator frame.
//!
//! The motors have their zero position and rotation sense fixed by the
//! mechanical build. The offsets below match that wiring and have no
//! geometric derivation.

use std::f64::consts::PI;

use super::ik::JointAngles;
use crate::geometry::{to_degrees, wrap_radians};

/// Convert joint angles into actuator angles.
///
/// Both results are wrapped into [0, 2π). NaN input yields NaN output.
pub fn convert_to_actuator_angles(a1: f64, a2: f64) -> (f64, f64) {
    let alpha = wrap_radians(2.5 * PI - a1);
    let beta = wrap_radians(3.0 * PI - (a2 - alpha + 2.0 * PI));

    (alpha, beta)
}

/// Motor angles for the base and elbow actuator.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ActuatorAngles {
    /// Base actuator angle in radians.
    pub alpha: f64,
    /// Elbow actuator angle in radians.
    pub beta: f64,
}

impl ActuatorAngles {
    pub fn new(alpha: f64, beta: f64) -> Self {
        Self { alpha, beta }
    }

    /// Construct from angles in degrees.
    pub fn from_degrees(alpha: f64, beta: f64) -> Self {
        Self {
            alpha: alpha.to_radians(),
            beta: beta.to_radians(),
        }
    }

    /// Whether both angles are numbers.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.alpha.is_finite() && self.beta.is_finite()
    }
}

impl From<JointAngles> for ActuatorAngles {
    fn from(value: JointAngles) -> Self {
        let (alpha, beta) = convert_to_actuator_angles(value.a1, value.a2);
        Self { alpha, beta }
    }
}

impl std::fmt::Display for ActuatorAngles {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "alpha={:.4}rad ({:.2}°) beta={:.4}rad ({:.2}°)",
            self.alpha,
            to_degrees(self.alpha),
            self.beta,
            to_degrees(self.beta)
        )
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, TAU};

    use super::*;

    #[test]
    fn test_convert_fully_stretched() {
        let (alpha, beta) = convert_to_actuator_angles(0.0, PI);

        assert!((alpha - FRAC_PI_2).abs() < 1e-9);
        assert!((beta - FRAC_PI_2).abs() < 1e-9);
    }

    #[test]
    fn test_convert_wraps_negative() {
        let (alpha, beta) = convert_to_actuator_angles(3.0 * PI, -PI);

        assert!((0.0..TAU).contains(&alpha));
        assert!((0.0..TAU).contains(&beta));
        assert!((alpha - 1.5 * PI).abs() < 1e-9);
    }

    #[test]
    fn test_convert_nan() {
        let (alpha, beta) = convert_to_actuator_angles(f64::NAN, 1.0);

        assert!(alpha.is_nan());
        assert!(beta.is_nan());

        let (alpha, beta) = convert_to_actuator_angles(1.0, f64::NAN);

        assert!(alpha.is_finite());
        assert!(beta.is_nan());
    }

    #[test]
    fn test_convert_range() {
        let mut a1 = -4.0 * PI;
        while a1 < 4.0 * PI {
            let mut a2 = -PI;
            while a2 <= PI {
                let (alpha, beta) = convert_to_actuator_angles(a1, a2);
                assert!((0.0..TAU).contains(&alpha), "alpha {} for {}", alpha, a1);
                assert!((0.0..TAU).contains(&beta), "beta {} for {}", beta, a2);
                a2 += 0.05;
            }
            a1 += 0.07;
        }
    }

    #[test]
    fn test_actuator_display() {
        let angles = ActuatorAngles::from_degrees(45.0, 135.0);

        assert_eq!(
            angles.to_string(),
            "alpha=0.7854rad (45.00°) beta=2.3562rad (135.00°)"
        );
    }
}
