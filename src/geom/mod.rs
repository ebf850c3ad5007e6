mod feature;
mod ring;

pub use feature::{polygon_feature, ring_to_geojson};
pub use ring::{is_closed_ring, ring_to_polygon, to_polygon_ring};
