use std::{error, fmt};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// Target lies outside the annulus the arm can reach.
    UnreachableTarget {
        /// Distance from the origin to the target.
        distance: f64,
        /// Inner radius of the reach band.
        min_reach: f64,
        /// Outer radius of the reach band.
        max_reach: f64,
    },
    /// Segment lengths must be finite and positive.
    InvalidGeometry {
        segment1_length: f64,
        segment2_length: f64,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnreachableTarget {
                distance,
                min_reach,
                max_reach,
            } => write!(
                f,
                "unreachable target: distance {:.2} outside reach [{:.2}, {:.2}]",
                distance, min_reach, max_reach
            ),
            Error::InvalidGeometry {
                segment1_length,
                segment2_length,
            } => write!(
                f,
                "invalid arm geometry: segment lengths {} and {} must be positive",
                segment1_length, segment2_length
            ),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        None
    }
}
