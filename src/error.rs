use crate::types::Point;
use std::fmt;

/// Reason a single coordinate value was rejected
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoordinateError {
    #[error("{input} is not a number")]
    NotNumeric { input: String },

    #[error("{value} can not be NaN or infinite")]
    NonFinite { value: f64 },

    #[error("{value} is not in range ±{bound}")]
    OutOfRange { value: f64, bound: f64 },
}

/// Coordinate axis, used to tell which half of a pair or rectangle failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Latitude => f.write_str("latitude"),
            Axis::Longitude => f.write_str("longitude"),
        }
    }
}

/// Why a polygon ring can not be used for containment tests
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PolygonDefect {
    /// The ring has no vertices
    Empty,
    /// First and last vertex differ
    NotClosed { first: Point, last: Point },
}

impl fmt::Display for PolygonDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolygonDefect::Empty => f.write_str("ring has no vertices"),
            PolygonDefect::NotClosed { first, last } => write!(
                f,
                "ring is not closed (first vertex ({}, {}) != last vertex ({}, {}))",
                first.x, first.y, last.x, last.y
            ),
        }
    }
}

/// Validation and geometry errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Invalid latitude given")]
    InvalidLatitude(#[source] CoordinateError),

    #[error("Invalid longitude given")]
    InvalidLongitude(#[source] CoordinateError),

    #[error("Expected {expected} coordinate values, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("Rectangle {axis} bounds are not increasing ({min} >= {max})")]
    UnorderedRect { axis: Axis, min: f64, max: f64 },

    #[error("Malformed polygon: {0}")]
    MalformedPolygon(PolygonDefect),
}

impl Error {
    /// Underlying coordinate failure for `InvalidLatitude`/`InvalidLongitude`
    pub fn coordinate_error(&self) -> Option<&CoordinateError> {
        match self {
            Error::InvalidLatitude(cause) | Error::InvalidLongitude(cause) => Some(cause),
            _ => None,
        }
    }

    pub(crate) fn for_axis(axis: Axis, cause: CoordinateError) -> Self {
        match axis {
            Axis::Latitude => Error::InvalidLatitude(cause),
            Axis::Longitude => Error::InvalidLongitude(cause),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
