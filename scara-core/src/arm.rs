use nalgebra::Point2;
use serde::Deserialize;

use crate::{geometry, Error};

/// Segment lengths of the two-link arm.
///
/// Both lengths are finite and positive. With equal lengths the arm can
/// fold onto itself and reach the origin.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(try_from = "RawArmGeometry")]
pub struct ArmGeometry {
    /// Length of the segment between base and elbow.
    segment1_length: f64,
    /// Length of the segment between elbow and end effector.
    segment2_length: f64,
}

#[derive(Deserialize)]
struct RawArmGeometry {
    segment1_length: f64,
    segment2_length: f64,
}

impl TryFrom<RawArmGeometry> for ArmGeometry {
    type Error = Error;

    fn try_from(value: RawArmGeometry) -> Result<Self, Self::Error> {
        Self::new(value.segment1_length, value.segment2_length)
    }
}

impl Default for ArmGeometry {
    fn default() -> Self {
        Self {
            segment1_length: 100.0,
            segment2_length: 100.0,
        }
    }
}

impl ArmGeometry {
    /// Construct the arm geometry from its segment lengths.
    pub fn new(segment1_length: f64, segment2_length: f64) -> crate::Result<Self> {
        let valid = |length: f64| length.is_finite() && length > 0.0;

        if valid(segment1_length) && valid(segment2_length) {
            Ok(Self {
                segment1_length,
                segment2_length,
            })
        } else {
            Err(Error::InvalidGeometry {
                segment1_length,
                segment2_length,
            })
        }
    }

    #[inline]
    pub fn segment1_length(&self) -> f64 {
        self.segment1_length
    }

    #[inline]
    pub fn segment2_length(&self) -> f64 {
        self.segment2_length
    }

    /// Furthest distance from the origin, with the arm fully stretched.
    #[inline]
    pub fn max_reach(&self) -> f64 {
        self.segment1_length + self.segment2_length
    }

    /// Closest distance from the origin, with the arm fully folded.
    #[inline]
    pub fn min_reach(&self) -> f64 {
        (self.segment1_length - self.segment2_length).abs()
    }

    /// Whether the target lies within the reach band of the arm.
    pub fn is_reachable(&self, target: &Target) -> bool {
        let distance = target.distance();

        distance <= self.max_reach() && distance >= self.min_reach()
    }

    /// Check the target against the reach band.
    pub fn check_reach(&self, target: &Target) -> crate::Result<()> {
        if self.is_reachable(target) {
            Ok(())
        } else {
            Err(Error::UnreachableTarget {
                distance: target.distance(),
                min_reach: self.min_reach(),
                max_reach: self.max_reach(),
            })
        }
    }
}

impl std::fmt::Display for ArmGeometry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Segment 1: {:.2} Segment 2: {:.2} Reach: [{:.2}, {:.2}]",
            self.segment1_length,
            self.segment2_length,
            self.min_reach(),
            self.max_reach()
        )
    }
}

/// Desired end effector position in the base frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Target {
    /// The point in the plane.
    pub point: Point2<f64>,
}

impl Default for Target {
    fn default() -> Self {
        Self {
            point: Point2::origin(),
        }
    }
}

impl Target {
    /// Construct a new target.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            point: Point2::new(x, y),
        }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.point.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.point.y
    }

    /// Distance from the origin to the target.
    #[inline]
    pub fn distance(&self) -> f64 {
        geometry::distance(self.point.x, self.point.y)
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.point.x, self.point.y)
    }
}

impl From<(f64, f64)> for Target {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Target {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Point2<f64>> for Target {
    fn from(point: Point2<f64>) -> Self {
        Self { point }
    }
}
