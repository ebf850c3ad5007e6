//! # hexmap-rs
//!
//! Draws H3 hexagonal cells at several resolutions onto a static Leaflet map.
//! There are currently three main entry points.
//!
//! ### 1. Grid functions - Single Cell Operations
//!
//! ```
//! use hexmap_rs::{boundary_of, cell_from_point, children_of, disk_around, to_polygon_ring};
//!
//! # fn main() -> Result<(), hexmap_rs::HexMapError> {
//! let coarse = cell_from_point(19.0760, 72.9945, 7)?;
//! let children = children_of(coarse, 9)?;
//! assert_eq!(children.len(), 49);
//!
//! let disk = disk_around(cell_from_point(19.0649, 73.0016, 10)?, 2)?;
//! assert_eq!(disk.len(), 19);
//!
//! // (lat, lng) open ring -> (lng, lat) closed ring
//! let ring = to_polygon_ring(&boundary_of(coarse)?)?;
//! assert_eq!(ring.first(), ring.last());
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `HexCell` / `HexLayer` - Cells and Styled Collections
//!
//! ```
//! use hexmap_rs::{HexCell, HexLayer, PolygonStyle};
//!
//! # fn main() -> Result<(), hexmap_rs::HexMapError> {
//! let mall = HexCell::from_lat_lng(19.0649, 73.0016, 10)?;
//! let layer = HexLayer::builder()
//!     .cells(mall.disk(2)?)
//!     .style(PolygonStyle::new("#dc3545", 0.6))
//!     .build()?;
//! assert_eq!(layer.len(), 19);
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. `MapConfig` - Whole Maps
//!
//! ```no_run
//! use hexmap_rs::{MapConfig, generate_map, success_message};
//!
//! let config = MapConfig::default().output_path("vashi.html");
//! generate_map(&config).unwrap();
//! println!("{}", success_message(&config.output_path));
//! ```
//!
//! Or draw onto any [`MapCanvas`]:
//!
//! ```
//! use hexmap_rs::{LeafletMap, MapConfig, build_map};
//!
//! # fn main() -> Result<(), hexmap_rs::HexMapError> {
//! let config = MapConfig::default();
//! let mut map = LeafletMap::from_config(&config);
//! let summary = build_map(&config, &mut map)?;
//! assert_eq!(map.features().len(), summary.polygons());
//! # Ok(())
//! # }
//! ```
//!

pub mod cell;
pub mod config;
pub mod coord;
pub mod error;
pub mod geom;
pub mod index;
pub mod layer;
pub mod pipeline;
pub mod render;

pub use cell::HexCell;
pub use config::{LayerConfig, MapConfig, MarkerConfig, PolygonStyle};
pub use coord::{Coordinate, validate_lat_lng};
pub use error::HexMapError;
pub use geom::{is_closed_ring, polygon_feature, ring_to_geojson, ring_to_polygon, to_polygon_ring};
pub use index::{
    APERTURE, CellId, MAX_RESOLUTION, boundary_of, cell_from_point, center_of,
    children_of, disk_around, grid_distance, hex_disk_size, is_pentagon, parent_of,
};
pub use layer::{HexLayer, HexLayerBuilder};
pub use pipeline::{MapLayers, MapSummary, build_layers, build_map, generate_map, success_message};
pub use render::{LeafletMap, MapCanvas, draw_cell, draw_layer, draw_marker};

pub use geo_types;
pub use geojson;
