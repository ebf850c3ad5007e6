use crate::coord::Coordinate;
use crate::error::HexMapError;
use crate::geom::{ring_to_polygon, to_polygon_ring};
use crate::index::{
    CellId, boundary_of, cell_from_point, center_of, children_of, disk_around, is_pentagon,
};
use geo_types::{Point, Polygon};

/// A single H3 cell with its center.
///
/// Each `HexCell` represents one hexagon (or pentagon) of the grid, with its
/// identifier, resolution and center point in WGS84 (x = longitude,
/// y = latitude).
///
/// # Example
///
/// ```
/// use hexmap_rs::HexCell;
///
/// # fn main() -> Result<(), hexmap_rs::HexMapError> {
/// // Vashi, Navi Mumbai
/// let cell = HexCell::from_lat_lng(19.0760, 72.9945, 7)?;
/// println!("Cell ID: {}", cell.id);
/// println!("Center: ({}, {})", cell.lat(), cell.lng());
///
/// // Closed (lng, lat) ring, ready for GeoJSON
/// let ring = cell.polygon_ring()?;
/// assert_eq!(ring.first(), ring.last());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct HexCell {
    /// H3 identifier of this cell
    pub id: CellId,
    /// Center point, x = longitude, y = latitude
    pub center: Point<f64>,
    /// Resolution (0-15), where higher values mean smaller cells
    pub resolution: u8,
}

impl HexCell {
    /// Create a HexCell from an existing identifier.
    pub fn from_id(id: CellId) -> Self {
        let (lat, lng) = center_of(id);
        Self {
            id,
            center: Point::new(lng, lat),
            resolution: id.resolution(),
        }
    }

    /// Create a HexCell from latitude and longitude in degrees.
    pub fn from_lat_lng(lat: f64, lng: f64, resolution: u8) -> Result<Self, HexMapError> {
        let id = cell_from_point(lat, lng, resolution)?;
        Ok(Self::from_id(id))
    }

    /// Create a HexCell from WGS84 (lon/lat) coordinates
    ///
    /// # Example
    /// ```
    /// use hexmap_rs::HexCell;
    /// use geo_types::Point;
    ///
    /// # fn main() -> Result<(), hexmap_rs::HexMapError> {
    /// // From tuple
    /// let cell = HexCell::from_wgs84(&(72.9945, 19.0760), 9)?;
    /// // From Point
    /// let same = HexCell::from_wgs84(&Point::new(72.9945, 19.0760), 9)?;
    /// assert_eq!(cell.id, same.id);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_wgs84(coord: &impl Coordinate, resolution: u8) -> Result<Self, HexMapError> {
        Self::from_lat_lng(coord.y(), coord.x(), resolution)
    }

    /// Latitude of the cell center in degrees.
    pub fn lat(&self) -> f64 {
        self.center.y()
    }

    /// Longitude of the cell center in degrees.
    pub fn lng(&self) -> f64 {
        self.center.x()
    }

    pub fn is_pentagon(&self) -> bool {
        is_pentagon(self.id)
    }

    /// Open `(lat, lng)` boundary ring.
    pub fn boundary(&self) -> Result<Vec<(f64, f64)>, HexMapError> {
        boundary_of(self.id)
    }

    /// Closed `(lng, lat)` ring of this cell's boundary.
    pub fn polygon_ring(&self) -> Result<Vec<(f64, f64)>, HexMapError> {
        to_polygon_ring(&self.boundary()?)
    }

    /// Converts this cell to a polygon.
    ///
    /// Returns a `geo_types::Polygon` of the cell boundary (x = longitude),
    /// suitable for spatial operations or GeoJSON export.
    pub fn to_polygon(&self) -> Result<Polygon<f64>, HexMapError> {
        Ok(ring_to_polygon(&self.polygon_ring()?))
    }

    /// `true` if the point (x = longitude) is indexed into this cell.
    ///
    /// Membership is decided by the grid, not by a planar test on the
    /// boundary ring, so cells crossing the antimeridian or covering a pole
    /// work too. A point on a shared edge belongs to exactly one cell.
    pub fn contains(&self, coord: &impl Coordinate) -> Result<bool, HexMapError> {
        let id = cell_from_point(coord.y(), coord.x(), self.resolution)?;
        Ok(id == self.id)
    }

    /// All descendants at `resolution`, sorted by identifier.
    pub fn children(&self, resolution: u8) -> Result<Vec<HexCell>, HexMapError> {
        let mut ids: Vec<CellId> = children_of(self.id, resolution)?.into_iter().collect();
        ids.sort_unstable();
        Ok(ids.into_iter().map(Self::from_id).collect())
    }

    /// All cells within `radius` grid steps, sorted by identifier.
    pub fn disk(&self, radius: i32) -> Result<Vec<HexCell>, HexMapError> {
        let mut ids: Vec<CellId> = disk_around(self.id, radius)?.into_iter().collect();
        ids.sort_unstable();
        Ok(ids.into_iter().map(Self::from_id).collect())
    }
}
