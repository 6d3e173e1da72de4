use crate::distance::haversine;
use crate::error::{Error, Result};
use crate::validate::{validate_latitude, validate_longitude};

/// Validated geographic position in decimal degrees
///
/// Both components are finite and within their axis bounds; the only way to
/// obtain a `LatLong` is through validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLong {
    lat: f64,
    lon: f64,
}

impl LatLong {
    /// Validate and create a position
    ///
    /// # Errors
    ///
    /// [`Error::InvalidLatitude`] or [`Error::InvalidLongitude`], latitude first.
    pub fn new(lat: f64, lon: f64) -> Result<Self> {
        let lat = validate_latitude(&lat)?;
        let lon = validate_longitude(&lon)?;
        Ok(Self { lat, lon })
    }

    /// Components must already have passed validation
    pub(crate) fn from_validated(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Latitude in decimal degrees
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in decimal degrees
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Great-circle distance to `other` in kilometers
    pub fn distance_to(&self, other: &LatLong) -> f64 {
        haversine(self.lat, self.lon, other.lat, other.lon)
    }
}

impl TryFrom<(f64, f64)> for LatLong {
    type Error = Error;

    fn try_from((lat, lon): (f64, f64)) -> Result<Self> {
        Self::new(lat, lon)
    }
}

impl From<LatLong> for (f64, f64) {
    fn from(value: LatLong) -> Self {
        (value.lat, value.lon)
    }
}
