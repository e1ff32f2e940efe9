use std::f64::consts::FRAC_PI_2;

use super::actuator::ActuatorAngles;
use crate::{
    arm::{ArmGeometry, Target},
    geometry::{self, law_of_cosines, law_of_cosines_clamped, min_angle_diff, to_degrees},
};

/// Turning the base axis moves the whole arm, so it weighs in more when
/// picking between the two elbow branches.
const BASE_AXIS_WEIGHT: f64 = 1.3;

/// Elbow branch of a solution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Elbow {
    /// Branch produced by the principal value of `acos`.
    Primary,
    /// Reflection of the primary branch across the line to the target.
    Mirror,
}

/// Joint angles in the base frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JointAngles {
    /// Absolute angle of the base joint in radians.
    pub a1: f64,
    /// Elbow angle between the segments in radians, negative on the mirror branch.
    pub a2: f64,
}

impl JointAngles {
    pub fn new(a1: f64, a2: f64) -> Self {
        Self { a1, a2 }
    }

    /// Whether both angles are numbers.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.a1.is_finite() && self.a2.is_finite()
    }
}

impl std::fmt::Display for JointAngles {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "A1={:.4}rad ({:.2}°) A2={:.4}rad ({:.2}°)",
            self.a1,
            to_degrees(self.a1),
            self.a2,
            to_degrees(self.a2)
        )
    }
}

/// Split the target into the base angle, the elbow offset of the first
/// segment and the interior elbow angle.
fn triangle(x: f64, y: f64, l1: f64, l2: f64, law: fn(f64, f64, f64) -> f64) -> (f64, f64, f64) {
    let distance = geometry::distance(x, y);
    let base_angle = y.atan2(x);

    // At the origin the offset triangle is 0/0. With equal segments the
    // folded arm approaches it at a right angle.
    let elbow_offset = if distance == 0.0 && l1 == l2 {
        FRAC_PI_2
    } else {
        law(distance, l1, l2)
    };

    let interior = law(l1, l2, distance);

    log::trace!(
        "IK ({:.2}, {:.2}) dist {:.4} base {:.4}rad offset {:.4}rad interior {:.4}rad",
        x,
        y,
        distance,
        base_angle,
        elbow_offset,
        interior
    );

    (base_angle, elbow_offset, interior)
}

/// Solve the joint angles for `(x, y)`.
///
/// Returns `(A1, A2)` in radians on the primary branch. An unreachable
/// target yields NaN for both angles.
pub fn solve_joint_angles(
    x: f64,
    y: f64,
    segment1_length: f64,
    segment2_length: f64,
) -> (f64, f64) {
    let (base_angle, elbow_offset, interior) =
        triangle(x, y, segment1_length, segment2_length, law_of_cosines);

    (base_angle + elbow_offset, interior)
}

/// Inverse kinematics for a two-link planar arm.
#[derive(Clone, Copy, Debug, Default)]
pub struct InverseKinematics {
    geometry: ArmGeometry,
}

impl InverseKinematics {
    pub fn new(geometry: ArmGeometry) -> Self {
        Self { geometry }
    }

    #[inline]
    pub fn geometry(&self) -> &ArmGeometry {
        &self.geometry
    }

    /// Solve the primary branch without a reach check.
    ///
    /// NaN propagates for an unreachable target.
    pub fn solve_unchecked(&self, target: &Target) -> JointAngles {
        let (a1, a2) = solve_joint_angles(
            target.x(),
            target.y(),
            self.geometry.segment1_length(),
            self.geometry.segment2_length(),
        );

        JointAngles::new(a1, a2)
    }

    /// Solve the primary branch.
    pub fn solve(&self, target: &Target) -> crate::Result<JointAngles> {
        self.solutions(target).map(|[primary, _]| primary)
    }

    /// Solve the mirror branch.
    pub fn solve_mirror(&self, target: &Target) -> crate::Result<JointAngles> {
        self.solutions(target).map(|[_, mirror]| mirror)
    }

    /// Solve a single branch.
    pub fn solve_elbow(&self, target: &Target, elbow: Elbow) -> crate::Result<JointAngles> {
        match elbow {
            Elbow::Primary => self.solve(target),
            Elbow::Mirror => self.solve_mirror(target),
        }
    }

    /// Solve both elbow branches, primary first.
    ///
    /// On the reach boundary both branches coincide.
    pub fn solutions(&self, target: &Target) -> crate::Result<[JointAngles; 2]> {
        if let Err(e) = self.geometry.check_reach(target) {
            log::debug!("IK target {} rejected: {}", target, e);
            return Err(e);
        }

        let (base_angle, elbow_offset, interior) = triangle(
            target.x(),
            target.y(),
            self.geometry.segment1_length(),
            self.geometry.segment2_length(),
            law_of_cosines_clamped,
        );

        Ok([
            JointAngles::new(base_angle + elbow_offset, interior),
            JointAngles::new(base_angle - elbow_offset, -interior),
        ])
    }

    /// Solve the branch needing the least actuator travel from `current`.
    ///
    /// Each branch is scored by its minimal base turn, weighted by
    /// 1.3, plus its minimal elbow turn. Ties go to the
    /// primary branch.
    pub fn solve_nearest(
        &self,
        target: &Target,
        current: &ActuatorAngles,
    ) -> crate::Result<(Elbow, JointAngles)> {
        let [primary, mirror] = self.solutions(target)?;

        let cost = |angles: JointAngles| {
            let actuator = ActuatorAngles::from(angles);

            BASE_AXIS_WEIGHT * min_angle_diff(current.alpha, actuator.alpha)
                + min_angle_diff(current.beta, actuator.beta)
        };

        let primary_cost = cost(primary);
        let mirror_cost = cost(mirror);

        log::trace!(
            "IK branch cost primary {:.4} mirror {:.4}",
            primary_cost,
            mirror_cost
        );

        if mirror_cost < primary_cost {
            Ok((Elbow::Mirror, mirror))
        } else {
            Ok((Elbow::Primary, primary))
        }
    }
}
