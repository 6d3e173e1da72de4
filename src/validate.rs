use crate::error::{Axis, CoordinateError, Error, Result};
use crate::input::CoordinateInput;
use crate::types::LatLongRect;

/// Largest absolute latitude in decimal degrees
pub const LATITUDE_BOUND: f64 = 90.0;

/// Largest absolute longitude in decimal degrees
pub const LONGITUDE_BOUND: f64 = 180.0;

/// Validate a single coordinate against an absolute bound
///
/// The input must convert to a real number, must be finite and its absolute
/// value must not exceed `bound`. The converted value is returned unchanged.
///
/// # Errors
///
/// Returns the first failing condition: [`CoordinateError::NotNumeric`],
/// [`CoordinateError::NonFinite`] or [`CoordinateError::OutOfRange`].
pub fn validate_coordinate<T: CoordinateInput + ?Sized>(
    input: &T,
    bound: f64,
) -> std::result::Result<f64, CoordinateError> {
    debug_assert!(bound > 0.0, "coordinate bound must be positive");

    let value = input.to_coordinate()?;
    if !value.is_finite() {
        return Err(CoordinateError::NonFinite { value });
    }
    if value.abs() > bound {
        return Err(CoordinateError::OutOfRange { value, bound });
    }
    Ok(value)
}

fn validate_axis<T: CoordinateInput + ?Sized>(input: &T, axis: Axis) -> Result<f64> {
    let bound = match axis {
        Axis::Latitude => LATITUDE_BOUND,
        Axis::Longitude => LONGITUDE_BOUND,
    };

    validate_coordinate(input, bound).map_err(|cause| {
        log::trace!("rejected {axis}: {cause}");
        Error::for_axis(axis, cause)
    })
}

/// Validate a latitude in decimal degrees (`-90..=90`)
pub fn validate_latitude<T: CoordinateInput + ?Sized>(latitude: &T) -> Result<f64> {
    validate_axis(latitude, Axis::Latitude)
}

/// Validate a longitude in decimal degrees (`-180..=180`)
pub fn validate_longitude<T: CoordinateInput + ?Sized>(longitude: &T) -> Result<f64> {
    validate_axis(longitude, Axis::Longitude)
}

pub fn is_valid_latitude<T: CoordinateInput + ?Sized>(latitude: &T) -> bool {
    validate_latitude(latitude).is_ok()
}

pub fn is_valid_longitude<T: CoordinateInput + ?Sized>(longitude: &T) -> bool {
    validate_longitude(longitude).is_ok()
}

/// Validate a `[latitude, longitude]` pair
///
/// The latitude is checked first, so an input with two bad values reports
/// [`Error::InvalidLatitude`].
pub fn validate_lat_long<T: CoordinateInput>(pair: &[T]) -> Result<(f64, f64)> {
    let [lat, lon] = pair else {
        return Err(Error::InvalidLength {
            expected: 2,
            actual: pair.len(),
        });
    };

    Ok((validate_latitude(lat)?, validate_longitude(lon)?))
}

pub fn is_valid_lat_long<T: CoordinateInput>(pair: &[T]) -> bool {
    validate_lat_long(pair).is_ok()
}

/// Validate a `[lat_min, lon_min, lat_max, lon_max]` rectangle
///
/// Each component is validated once, in order, and the ordering check runs
/// on the validated values. Both axes must be strictly increasing.
pub fn validate_lat_long_rect<T: CoordinateInput>(rect: &[T]) -> Result<LatLongRect> {
    let [lat_min, lon_min, lat_max, lon_max] = rect else {
        return Err(Error::InvalidLength {
            expected: 4,
            actual: rect.len(),
        });
    };

    let lat_min = validate_latitude(lat_min)?;
    let lon_min = validate_longitude(lon_min)?;
    let lat_max = validate_latitude(lat_max)?;
    let lon_max = validate_longitude(lon_max)?;

    if lat_min >= lat_max {
        return Err(Error::UnorderedRect {
            axis: Axis::Latitude,
            min: lat_min,
            max: lat_max,
        });
    }
    if lon_min >= lon_max {
        return Err(Error::UnorderedRect {
            axis: Axis::Longitude,
            min: lon_min,
            max: lon_max,
        });
    }

    Ok(LatLongRect {
        lat_min,
        lon_min,
        lat_max,
        lon_max,
    })
}

pub fn is_valid_lat_long_rect<T: CoordinateInput>(rect: &[T]) -> bool {
    validate_lat_long_rect(rect).is_ok()
}
