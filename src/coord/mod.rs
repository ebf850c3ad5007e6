use crate::error::HexMapError;
use geo_types::Point;
use h3o::LatLng;

/// Trait for types that can provide WGS84 coordinates.
///
/// Implemented for `(f64, f64)` tuples (longitude, latitude) and
/// `geo_types::Point<f64>`. This allows functions to accept either type,
/// following the GeoJSON x/y convention.
pub trait Coordinate {
    /// Returns the x-coordinate (longitude).
    fn x(&self) -> f64;
    /// Returns the y-coordinate (latitude).
    fn y(&self) -> f64;
}

impl Coordinate for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }
    fn y(&self) -> f64 {
        self.1
    }
}

impl Coordinate for Point<f64> {
    fn x(&self) -> f64 {
        Point::x(*self)
    }
    fn y(&self) -> f64 {
        Point::y(*self)
    }
}

/// Checks that a latitude/longitude pair lies on the globe.
///
/// Latitude must be within -90..=90 and longitude within -180..=180. NaN and
/// infinities are rejected.
pub fn validate_lat_lng(lat: f64, lng: f64) -> Result<(), HexMapError> {
    if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
        return Err(HexMapError::InvalidLatitude(lat));
    }
    if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
        return Err(HexMapError::InvalidLongitude(lng));
    }
    Ok(())
}

/// Converts a validated latitude/longitude in degrees to an `h3o::LatLng`.
pub(crate) fn to_lat_lng(lat: f64, lng: f64) -> Result<LatLng, HexMapError> {
    validate_lat_lng(lat, lng)?;
    LatLng::new(lat, lng).map_err(|_| HexMapError::InvalidLatitude(lat))
}
