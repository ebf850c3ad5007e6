use crate::coord::to_lat_lng;
use crate::error::HexMapError;
use crate::index::identifier::{CellId, resolution_from_u8};
use h3o::{CellIndex, LatLng};
use std::collections::HashSet;

/// Maps a WGS84 latitude/longitude (degrees) to the cell containing it.
///
/// # Errors
///
/// Returns an invalid-input error if the latitude is outside -90..=90, the
/// longitude is outside -180..=180, or the resolution is greater than 15.
///
/// # Example
/// ```
/// use hexmap_rs::cell_from_point;
///
/// # fn main() -> Result<(), hexmap_rs::HexMapError> {
/// let cell = cell_from_point(19.0760, 72.9945, 7)?;
/// assert_eq!(cell.resolution(), 7);
/// assert!(cell_from_point(999.0, 0.0, 7).is_err());
/// # Ok(())
/// # }
/// ```
pub fn cell_from_point(lat: f64, lng: f64, resolution: u8) -> Result<CellId, HexMapError> {
    let res = resolution_from_u8(resolution)?;
    let ll = to_lat_lng(lat, lng)?;
    Ok(CellId::new(ll.to_cell(res)))
}

/// Returns every descendant of `cell` at `child_resolution`.
///
/// The hierarchy is walked exhaustively, so a hexagon yields `7^k` children
/// for `k = child_resolution - cell.resolution()`; pentagons yield fewer.
pub fn children_of(cell: CellId, child_resolution: u8) -> Result<HashSet<CellId>, HexMapError> {
    let parent = cell.resolution();
    let res = resolution_from_u8(child_resolution)?;
    if child_resolution <= parent {
        return Err(HexMapError::InvalidChildResolution {
            parent,
            child: child_resolution,
        });
    }

    Ok(cell.index().children(res).map(CellId::new).collect())
}

/// Returns the vertices of `cell` as `(lat, lng)` pairs in degrees.
///
/// The ring keeps the indexing library's winding order and is open: the
/// first vertex is not repeated at the end. Hexagons crossing an icosahedron
/// edge can carry extra distortion vertices; pentagons may have as few as 5.
pub fn boundary_of(cell: CellId) -> Result<Vec<(f64, f64)>, HexMapError> {
    let boundary = cell.index().boundary();
    let ring: Vec<(f64, f64)> = boundary.iter().map(|ll| (ll.lat(), ll.lng())).collect();

    if ring.len() < 3 {
        return Err(HexMapError::InvalidCellId(cell.to_string()));
    }
    Ok(ring)
}

/// Returns all cells within `radius` grid steps of `cell`, including `cell`.
///
/// Distance is counted in cell hops over the grid's adjacency, not in
/// metres. Near pentagons the disk is smaller than `1 + 3k(k + 1)`.
pub fn disk_around(cell: CellId, radius: i32) -> Result<HashSet<CellId>, HexMapError> {
    let k = u32::try_from(radius).map_err(|_| HexMapError::InvalidRadius(radius))?;
    let disk: Vec<CellIndex> = cell.index().grid_disk(k);
    Ok(disk.into_iter().map(CellId::new).collect())
}

/// Returns the ancestor of `cell` at a coarser (or equal) resolution.
pub fn parent_of(cell: CellId, resolution: u8) -> Result<CellId, HexMapError> {
    let res = resolution_from_u8(resolution)?;
    cell.index()
        .parent(res)
        .map(CellId::new)
        .ok_or(HexMapError::InvalidResolution(resolution))
}

/// Center of `cell` as `(lat, lng)` in degrees.
pub fn center_of(cell: CellId) -> (f64, f64) {
    let ll = LatLng::from(cell.index());
    (ll.lat(), ll.lng())
}

pub fn is_pentagon(cell: CellId) -> bool {
    cell.index().is_pentagon()
}

/// Number of grid steps between two cells of the same resolution.
pub fn grid_distance(a: CellId, b: CellId) -> Result<u32, HexMapError> {
    let d = a
        .index()
        .grid_distance(b.index())
        .map_err(|e| HexMapError::InvalidCellId(format!("{} -> {}: {}", a, b, e)))?;
    u32::try_from(d).map_err(|_| HexMapError::InvalidCellId(format!("{} -> {}", a, b)))
}
