/// Mean Earth radius in kilometers used by [`haversine`]
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometers between two points in decimal degrees
///
/// Inputs are not validated; run them through
/// [`validate_lat_long`](crate::validate_lat_long) first if they come from
/// untrusted sources.
///
/// # Limitations
///
/// The Earth is treated as a perfect sphere of radius [`EARTH_RADIUS_KM`], so
/// results deviate from ellipsoidal (geodesic) distances by up to ~0.5%.
pub fn haversine(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    haversine_with_radius(EARTH_RADIUS_KM, lat1, lon1, lat2, lon2)
}

/// Great-circle distance on a sphere of the given `radius`
///
/// The result has the same unit as `radius`.
pub fn haversine_with_radius(radius: f64, lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1 = lat1.to_radians();
    let lon1 = lon1.to_radians();
    let lat2 = lat2.to_radians();
    let lon2 = lon2.to_radians();

    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    // rounding can push `a` just outside [0, 1] for antipodal points
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().asin();

    radius * c
}
