use nalgebra::{Point2, Vector2};

use super::ik::JointAngles;
use crate::arm::ArmGeometry;

/// Forward kinematics for a two-link planar arm.
///
/// The elbow angle is the interior angle between the segments, so the
/// second segment points back along `A1 + A2 - π`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ForwardKinematics {
    geometry: ArmGeometry,
}

impl ForwardKinematics {
    pub fn new(geometry: ArmGeometry) -> Self {
        Self { geometry }
    }

    /// Position of the elbow joint.
    pub fn elbow(&self, angles: &JointAngles) -> Point2<f64> {
        Point2::from(self.geometry.segment1_length() * heading(angles.a1))
    }

    /// Position of the end effector.
    pub fn solve(&self, angles: &JointAngles) -> Point2<f64> {
        self.elbow(angles) - self.geometry.segment2_length() * heading(angles.a1 + angles.a2)
    }
}

#[inline]
fn heading(angle: f64) -> Vector2<f64> {
    Vector2::new(angle.cos(), angle.sin())
}
