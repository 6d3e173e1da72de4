use crate::error::{Error, Result};
use crate::types::LatLong;
use crate::validate::validate_lat_long_rect;

/// Validated latitude/longitude rectangle in decimal degrees
///
/// Every component is a valid coordinate for its axis and both axes are
/// strictly increasing (`lat_min < lat_max`, `lon_min < lon_max`), so
/// degenerate and inverted rectangles can not be represented.
///
/// # Limitations
///
/// **Anti-meridian handling**: a region crossing the ±180° longitude line can
/// not be expressed, since `lon_min` must be smaller than `lon_max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLongRect {
    pub(crate) lat_min: f64,
    pub(crate) lon_min: f64,
    pub(crate) lat_max: f64,
    pub(crate) lon_max: f64,
}

impl LatLongRect {
    /// Validate and create a rectangle from its south-west and north-east bounds
    pub fn new(lat_min: f64, lon_min: f64, lat_max: f64, lon_max: f64) -> Result<Self> {
        validate_lat_long_rect(&[lat_min, lon_min, lat_max, lon_max])
    }

    pub fn lat_min(&self) -> f64 {
        self.lat_min
    }

    pub fn lon_min(&self) -> f64 {
        self.lon_min
    }

    pub fn lat_max(&self) -> f64 {
        self.lat_max
    }

    pub fn lon_max(&self) -> f64 {
        self.lon_max
    }

    pub fn south_west(&self) -> LatLong {
        LatLong::from_validated(self.lat_min, self.lon_min)
    }

    pub fn north_east(&self) -> LatLong {
        LatLong::from_validated(self.lat_max, self.lon_max)
    }

    /// Check whether a position lies inside the rectangle
    ///
    /// Bounds are inclusive, so corners and edges count as contained.
    pub fn contains(&self, position: &LatLong) -> bool {
        (self.lat_min..=self.lat_max).contains(&position.lat())
            && (self.lon_min..=self.lon_max).contains(&position.lon())
    }
}

impl TryFrom<[f64; 4]> for LatLongRect {
    type Error = Error;

    fn try_from(rect: [f64; 4]) -> Result<Self> {
        validate_lat_long_rect(&rect)
    }
}

impl From<LatLongRect> for [f64; 4] {
    fn from(rect: LatLongRect) -> Self {
        [rect.lat_min, rect.lon_min, rect.lat_max, rect.lon_max]
    }
}
