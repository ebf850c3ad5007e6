use crate::error::HexMapError;
use geo_types::{Coord, LineString, Polygon};

/// Converts an open `(lat, lng)` boundary ring into a closed `(lng, lat)`
/// polygon ring.
///
/// `ring[i] == (boundary[i].1, boundary[i].0)` for every input point, and the
/// first point is appended once more to close the ring. Point order is kept
/// as-is; re-winding would flip the polygon's face orientation.
///
/// # Example
/// ```
/// use hexmap_rs::to_polygon_ring;
///
/// # fn main() -> Result<(), hexmap_rs::HexMapError> {
/// let ring = to_polygon_ring(&[(1.0, 10.0), (2.0, 20.0), (3.0, 30.0)])?;
/// assert_eq!(ring, vec![(10.0, 1.0), (20.0, 2.0), (30.0, 3.0), (10.0, 1.0)]);
/// # Ok(())
/// # }
/// ```
pub fn to_polygon_ring(boundary: &[(f64, f64)]) -> Result<Vec<(f64, f64)>, HexMapError> {
    if boundary.len() < 3 {
        return Err(HexMapError::InvalidRing(boundary.len()));
    }

    let mut ring = Vec::with_capacity(boundary.len() + 1);
    ring.extend(boundary.iter().map(|&(lat, lng)| (lng, lat)));
    ring.push(ring[0]);

    Ok(ring)
}

/// `true` if the ring has at least 4 positions and ends where it starts.
pub fn is_closed_ring(ring: &[(f64, f64)]) -> bool {
    ring.len() >= 4 && ring.first() == ring.last()
}

/// Builds a `geo_types::Polygon` (x = longitude, y = latitude) from a closed
/// polygon ring.
pub fn ring_to_polygon(ring: &[(f64, f64)]) -> Polygon<f64> {
    let coords: Vec<Coord<f64>> = ring.iter().map(|&(x, y)| Coord { x, y }).collect();
    Polygon::new(LineString::from(coords), vec![])
}
