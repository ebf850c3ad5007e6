use crate::error::HexMapError;
use crate::index::MAX_RESOLUTION;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Fill and outline styling of one polygon layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonStyle {
    pub fill_color: String,
    pub fill_opacity: f64,
    /// Outline color
    pub color: String,
    /// Outline width in pixels
    pub weight: f64,
}

impl PolygonStyle {
    /// Style with a black 1.5px outline.
    pub fn new(fill_color: impl Into<String>, fill_opacity: f64) -> Self {
        Self {
            fill_color: fill_color.into(),
            fill_opacity,
            color: "black".to_string(),
            weight: 1.5,
        }
    }

    pub fn outline(mut self, color: impl Into<String>, weight: f64) -> Self {
        self.color = color.into();
        self.weight = weight;
        self
    }
}

/// A point marker with a popup and an icon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerConfig {
    /// `(lat, lng)` in degrees
    pub location: (f64, f64),
    pub popup: String,
    /// Icon name, e.g. `train`
    pub icon: String,
    pub color: String,
}

impl MarkerConfig {
    pub fn new(location: (f64, f64), popup: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            location,
            popup: popup.into(),
            icon: icon.into(),
            color: "black".to_string(),
        }
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }
}

/// One layer of hexagons.
///
/// Layers seeded from a coordinate (coarse and hyperlocal) carry a `point`;
/// the neighborhood layer is derived from the coarse cell and has none.
/// `disk_radius` is only read for the hyperlocal layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerConfig {
    /// Seed `(lat, lng)` in degrees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point: Option<(f64, f64)>,
    pub resolution: u8,
    pub style: PolygonStyle,
    pub popup: String,
    #[serde(default)]
    pub disk_radius: i32,
}

impl LayerConfig {
    /// Layer seeded from the cell containing `point`.
    pub fn new(point: (f64, f64), resolution: u8, style: PolygonStyle) -> Self {
        Self {
            point: Some(point),
            ..Self::derived(resolution, style)
        }
    }

    /// Layer whose cells come from another layer rather than a coordinate.
    pub fn derived(resolution: u8, style: PolygonStyle) -> Self {
        Self {
            point: None,
            resolution,
            style,
            popup: format!("<b>Resolution {} Hexagon</b>", resolution),
            disk_radius: 0,
        }
    }

    /// Sets the popup to `<b>Resolution N Hexagon</b><br>(caption)`.
    pub fn caption(mut self, caption: &str) -> Self {
        self.popup = format!(
            "<b>Resolution {} Hexagon</b><br>({})",
            self.resolution, caption
        );
        self
    }

    pub fn popup(mut self, popup: impl Into<String>) -> Self {
        self.popup = popup.into();
        self
    }

    pub fn disk_radius(mut self, radius: i32) -> Self {
        self.disk_radius = radius;
        self
    }
}

/// Everything that decides *what* is drawn on the map.
///
/// `MapConfig::default()` is the Navi Mumbai reference map: a resolution 7
/// cell over Vashi, its resolution 9 children, and a radius 2 disk of
/// resolution 10 cells around Inorbit Mall.
///
/// # Example
/// ```
/// use hexmap_rs::MapConfig;
///
/// let config = MapConfig::default()
///     .output_path("vashi.html")
///     .zoom_start(14);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    pub title: String,
    pub output_path: PathBuf,
    /// Initial map center `(lat, lng)` in degrees
    pub center: (f64, f64),
    pub zoom_start: u8,
    /// Tile URL template handed to `L.tileLayer`
    pub tiles: String,
    pub attribution: String,
    pub markers: Vec<MarkerConfig>,
    pub coarse: LayerConfig,
    pub neighborhood: LayerConfig,
    pub hyperlocal: LayerConfig,
}

impl Default for MapConfig {
    fn default() -> Self {
        let center = (19.0760, 72.9945);
        let inorbit_mall = (19.0649, 73.0016);

        Self {
            title: "Navi Mumbai H3 Grid".to_string(),
            output_path: PathBuf::from("navi_mumbai_hex_grid_final.html"),
            center,
            zoom_start: 13,
            tiles: "https://tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors".to_string(),
            markers: vec![
                MarkerConfig::new((19.0671, 72.9987), "Vashi Railway Station", "train"),
                MarkerConfig::new(inorbit_mall, "Inorbit Mall, Vashi", "shopping-cart"),
                MarkerConfig::new((19.0330, 73.0297), "Seawoods Grand Central", "building"),
            ],
            coarse: LayerConfig::new(center, 7, PolygonStyle::new("#007bff", 0.2))
                .caption("Covers a large part of the city"),
            neighborhood: LayerConfig::derived(9, PolygonStyle::new("#ffc107", 0.4))
                .caption("Neighborhood/Sector Level"),
            hyperlocal: LayerConfig::new(inorbit_mall, 10, PolygonStyle::new("#dc3545", 0.6))
                .caption("Hyperlocal: Mall/Complex Level")
                .disk_radius(2),
        }
    }
}

impl MapConfig {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    pub fn center(mut self, lat: f64, lng: f64) -> Self {
        self.center = (lat, lng);
        self
    }

    pub fn zoom_start(mut self, zoom: u8) -> Self {
        self.zoom_start = zoom;
        self
    }

    pub fn markers(mut self, markers: Vec<MarkerConfig>) -> Self {
        self.markers = markers;
        self
    }

    pub fn coarse(mut self, layer: LayerConfig) -> Self {
        self.coarse = layer;
        self
    }

    pub fn neighborhood(mut self, layer: LayerConfig) -> Self {
        self.neighborhood = layer;
        self
    }

    pub fn hyperlocal(mut self, layer: LayerConfig) -> Self {
        self.hyperlocal = layer;
        self
    }

    /// Checks seed points, resolution ordering and ranges before any cell is
    /// computed.
    pub fn validate(&self) -> Result<(), HexMapError> {
        for (name, layer) in [("coarse", &self.coarse), ("hyperlocal", &self.hyperlocal)] {
            if layer.point.is_none() {
                return Err(HexMapError::InvalidConfig(format!(
                    "{} layer needs a seed point",
                    name
                )));
            }
        }
        if self.neighborhood.point.is_some() {
            return Err(HexMapError::InvalidConfig(
                "neighborhood layer is derived from the coarse cell and takes no seed point"
                    .to_string(),
            ));
        }
        for layer in [&self.coarse, &self.neighborhood, &self.hyperlocal] {
            if layer.resolution > MAX_RESOLUTION {
                return Err(HexMapError::InvalidResolution(layer.resolution));
            }
        }
        if self.neighborhood.resolution <= self.coarse.resolution {
            return Err(HexMapError::InvalidConfig(format!(
                "neighborhood resolution {} must be finer than coarse resolution {}",
                self.neighborhood.resolution, self.coarse.resolution
            )));
        }
        if self.hyperlocal.disk_radius < 0 {
            return Err(HexMapError::InvalidRadius(self.hyperlocal.disk_radius));
        }
        Ok(())
    }

    /// Parses a configuration from JSON.
    pub fn from_json(s: &str) -> Result<Self, HexMapError> {
        serde_json::from_str(s).map_err(|e| HexMapError::InvalidConfig(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, HexMapError> {
        serde_json::to_string_pretty(self).map_err(|e| HexMapError::InvalidConfig(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_reference_map() {
        let config = MapConfig::default();

        assert_eq!(config.center, (19.0760, 72.9945));
        assert_eq!(config.zoom_start, 13);
        assert_eq!(config.markers.len(), 3);
        assert_eq!(config.coarse.resolution, 7);
        assert_eq!(config.neighborhood.resolution, 9);
        assert_eq!(config.hyperlocal.resolution, 10);
        assert_eq!(config.hyperlocal.point, Some((19.0649, 73.0016)));
        assert_eq!(config.neighborhood.point, None);
        assert_eq!(config.hyperlocal.disk_radius, 2);
        assert_eq!(
            config.output_path,
            PathBuf::from("navi_mumbai_hex_grid_final.html")
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_caption_popup() {
        let layer = LayerConfig::derived(9, PolygonStyle::new("#ffc107", 0.4))
            .caption("Neighborhood/Sector Level");
        assert_eq!(
            layer.popup,
            "<b>Resolution 9 Hexagon</b><br>(Neighborhood/Sector Level)"
        );
    }

    #[test]
    fn test_style_defaults() {
        let style = PolygonStyle::new("#007bff", 0.2);
        assert_eq!(style.color, "black");
        assert_eq!(style.weight, 1.5);

        let style = style.outline("#333333", 2.0);
        assert_eq!(style.color, "#333333");
        assert_eq!(style.weight, 2.0);
    }

    #[test]
    fn test_validate_rejects_coarser_neighborhood() {
        let config = MapConfig::default()
            .neighborhood(LayerConfig::derived(7, PolygonStyle::new("#ffc107", 0.4)));
        assert!(matches!(
            config.validate(),
            Err(HexMapError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_checks_seed_points() {
        let config = MapConfig::default().neighborhood(LayerConfig::new(
            (19.0760, 72.9945),
            9,
            PolygonStyle::new("#ffc107", 0.4),
        ));
        assert!(matches!(
            config.validate(),
            Err(HexMapError::InvalidConfig(ref msg)) if msg.contains("neighborhood")
        ));

        let config = MapConfig::default()
            .hyperlocal(LayerConfig::derived(10, PolygonStyle::new("#dc3545", 0.6)));
        assert_eq!(
            config.validate(),
            Err(HexMapError::InvalidConfig(
                "hyperlocal layer needs a seed point".to_string()
            ))
        );
    }

    #[test]
    fn test_json_omits_derived_point() -> Result<(), HexMapError> {
        let json = MapConfig::default().to_json()?;
        let value: serde_json::Value =
            serde_json::from_str(&json).map_err(|e| HexMapError::InvalidConfig(e.to_string()))?;

        assert!(value["neighborhood"].get("point").is_none());
        assert!(value["coarse"].get("point").is_some());
        assert_eq!(MapConfig::from_json(&json)?.neighborhood.point, None);
        Ok(())
    }

    #[test]
    fn test_validate_rejects_bad_resolution_and_radius() {
        let config = MapConfig::default().hyperlocal(LayerConfig::new(
            (19.0649, 73.0016),
            16,
            PolygonStyle::new("#dc3545", 0.6),
        ));
        assert_eq!(config.validate(), Err(HexMapError::InvalidResolution(16)));

        let config = MapConfig::default().hyperlocal(
            LayerConfig::new((19.0649, 73.0016), 10, PolygonStyle::new("#dc3545", 0.6))
                .disk_radius(-1),
        );
        assert_eq!(config.validate(), Err(HexMapError::InvalidRadius(-1)));
    }

    #[test]
    fn test_json_round_trip() -> Result<(), HexMapError> {
        let config = MapConfig::default().zoom_start(12).title("Vashi");
        let json = config.to_json()?;
        let parsed = MapConfig::from_json(&json)?;

        assert_eq!(parsed.title, "Vashi");
        assert_eq!(parsed.zoom_start, 12);
        assert_eq!(parsed.markers.len(), 3);
        assert_eq!(parsed.markers[0].icon, "train");
        assert_eq!(parsed.neighborhood.resolution, 9);
        assert_eq!(parsed.hyperlocal.disk_radius, 2);
        assert!((parsed.center.0 - 19.0760).abs() < 1e-9);
        assert!((parsed.center.1 - 72.9945).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(matches!(
            MapConfig::from_json("{ not json"),
            Err(HexMapError::InvalidConfig(_))
        ));
    }
}
