use crate::config::PolygonStyle;
use crate::error::HexMapError;
use crate::geom::ring::is_closed_ring;
use geojson::{Feature, Geometry, JsonObject, JsonValue, Value};

/// Converts a closed `(lng, lat)` ring into a GeoJSON polygon geometry.
pub fn ring_to_geojson(ring: &[(f64, f64)]) -> Result<Geometry, HexMapError> {
    if !is_closed_ring(ring) {
        return Err(HexMapError::RenderError(format!(
            "polygon ring with {} positions is not closed",
            ring.len()
        )));
    }

    let positions: Vec<Vec<f64>> = ring.iter().map(|&(x, y)| vec![x, y]).collect();
    Ok(Geometry::new(Value::Polygon(vec![positions])))
}

/// Wraps a ring into a GeoJSON feature carrying its style and popup.
///
/// The properties use Leaflet path option names (`fillColor`,
/// `fillOpacity`, `color`, `weight`) so the page script can hand them to
/// `L.geoJSON` unchanged.
pub fn polygon_feature(
    ring: &[(f64, f64)],
    style: &PolygonStyle,
    popup: &str,
) -> Result<Feature, HexMapError> {
    let geometry = ring_to_geojson(ring)?;

    let mut properties = JsonObject::new();
    properties.insert("fillColor".into(), JsonValue::from(style.fill_color.clone()));
    properties.insert("fillOpacity".into(), JsonValue::from(style.fill_opacity));
    properties.insert("color".into(), JsonValue::from(style.color.clone()));
    properties.insert("weight".into(), JsonValue::from(style.weight));
    properties.insert("popup".into(), JsonValue::from(popup));

    Ok(Feature {
        bbox: None,
        geometry: Some(geometry),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    })
}
