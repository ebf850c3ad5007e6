use crate::config::{MapConfig, MarkerConfig, PolygonStyle};
use crate::error::HexMapError;
use crate::geom::polygon_feature;
use crate::render::MapCanvas;
use geojson::{Feature, FeatureCollection};
use log::{debug, info};
use std::path::Path;

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8" />
<meta name="viewport" content="width=device-width, initial-scale=1.0" />
<title>{{TITLE}}</title>
<link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/leaflet@1.9.3/dist/leaflet.css" />
<link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/Leaflet.awesome-markers/2.0.2/leaflet.awesome-markers.css" />
<link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/4.7.0/css/font-awesome.min.css" />
<script src="https://cdn.jsdelivr.net/npm/leaflet@1.9.3/dist/leaflet.js"></script>
<script src="https://cdnjs.cloudflare.com/ajax/libs/Leaflet.awesome-markers/2.0.2/leaflet.awesome-markers.js"></script>
<style>html, body, #map { width: 100%; height: 100%; margin: 0; padding: 0; }</style>
</head>
<body>
<div id="map"></div>
<script>
var view = {{VIEW}};
var markers = {{MARKERS}};
var cells = {{CELLS}};

var map = L.map("map").setView(view.center, view.zoom);
L.tileLayer(view.tiles, { maxZoom: 19, attribution: view.attribution }).addTo(map);

markers.forEach(function (m) {
    var icon = L.AwesomeMarkers.icon({ icon: m.icon, markerColor: m.color, prefix: "fa" });
    L.marker(m.location, { icon: icon }).bindPopup(m.popup).addTo(map);
});

L.geoJSON(cells, {
    style: function (feature) {
        var p = feature.properties;
        return { fillColor: p.fillColor, fillOpacity: p.fillOpacity, color: p.color, weight: p.weight };
    },
    onEachFeature: function (feature, layer) {
        layer.bindPopup(feature.properties.popup);
    }
}).addTo(map);
</script>
</body>
</html>
"#;

/// A Leaflet web map that collects markers and GeoJSON polygons and exports
/// them as one self-contained HTML page.
///
/// # Example
/// ```no_run
/// use hexmap_rs::{LeafletMap, MapCanvas, HexCell, PolygonStyle, draw_cell};
///
/// # fn main() -> Result<(), hexmap_rs::HexMapError> {
/// let mut map = LeafletMap::new((19.0760, 72.9945), 13);
/// let cell = HexCell::from_lat_lng(19.0760, 72.9945, 7)?;
/// draw_cell(&mut map, &cell, &PolygonStyle::new("#007bff", 0.2), "coarse")?;
/// map.save("map.html")?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct LeafletMap {
    title: String,
    center: (f64, f64),
    zoom_start: u8,
    tiles: String,
    attribution: String,
    markers: Vec<MarkerConfig>,
    features: Vec<Feature>,
}

impl LeafletMap {
    /// Empty map over OpenStreetMap tiles.
    pub fn new(center: (f64, f64), zoom_start: u8) -> Self {
        let defaults = MapConfig::default();
        Self {
            title: defaults.title,
            center,
            zoom_start,
            tiles: defaults.tiles,
            attribution: defaults.attribution,
            markers: Vec::new(),
            features: Vec::new(),
        }
    }

    /// Empty map with the view settings of `config`.
    pub fn from_config(config: &MapConfig) -> Self {
        Self {
            title: config.title.clone(),
            center: config.center,
            zoom_start: config.zoom_start,
            tiles: config.tiles.clone(),
            attribution: config.attribution.clone(),
            markers: Vec::new(),
            features: Vec::new(),
        }
    }

    pub fn markers(&self) -> &[MarkerConfig] {
        &self.markers
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    /// The collected polygons as a GeoJSON feature collection.
    pub fn to_feature_collection(&self) -> FeatureCollection {
        FeatureCollection {
            bbox: None,
            features: self.features.clone(),
            foreign_members: None,
        }
    }

    /// Renders the page.
    pub fn to_html(&self) -> Result<String, HexMapError> {
        let view = serde_json::json!({
            "center": [self.center.0, self.center.1],
            "zoom": self.zoom_start,
            "tiles": self.tiles,
            "attribution": self.attribution,
        });
        let view = to_script_json(&view)?;
        let markers = to_script_json(&self.markers)?;
        let cells = to_script_json(&self.to_feature_collection())?;

        Ok(PAGE_TEMPLATE
            .replace("{{TITLE}}", &escape_html(&self.title))
            .replace("{{VIEW}}", &view)
            .replace("{{MARKERS}}", &markers)
            .replace("{{CELLS}}", &cells))
    }

    /// Writes the page to `path` in a single write.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), HexMapError> {
        let path = path.as_ref();
        let html = self.to_html()?;
        std::fs::write(path, html.as_bytes())
            .map_err(|e| HexMapError::IoError(format!("{}: {}", path.display(), e)))?;

        info!(
            "wrote {} markers and {} polygons to {}",
            self.markers.len(),
            self.features.len(),
            path.display()
        );
        Ok(())
    }
}

impl MapCanvas for LeafletMap {
    fn add_marker(&mut self, marker: &MarkerConfig) {
        debug!("marker '{}' at {:?}", marker.popup, marker.location);
        self.markers.push(marker.clone());
    }

    fn add_polygon(
        &mut self,
        ring: &[(f64, f64)],
        style: &PolygonStyle,
        popup: &str,
    ) -> Result<(), HexMapError> {
        let feature = polygon_feature(ring, style, popup)?;
        self.features.push(feature);
        Ok(())
    }
}

/// Serializes to JSON that is safe to inline in a `<script>` element.
fn to_script_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, HexMapError> {
    let json = serde_json::to_string(value).map_err(|e| HexMapError::RenderError(e.to_string()))?;
    Ok(json
        .replace("</", "<\\/")
        .replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029"))
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
