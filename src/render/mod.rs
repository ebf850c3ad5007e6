mod leaflet;

pub use leaflet::LeafletMap;

use crate::cell::HexCell;
use crate::config::{MarkerConfig, PolygonStyle};
use crate::error::HexMapError;
use crate::layer::HexLayer;

/// Anything that can collect map geometry.
///
/// Rings are closed `(lng, lat)` polygon rings; marker locations are
/// `(lat, lng)`.
pub trait MapCanvas {
    fn add_marker(&mut self, marker: &MarkerConfig);

    fn add_polygon(
        &mut self,
        ring: &[(f64, f64)],
        style: &PolygonStyle,
        popup: &str,
    ) -> Result<(), HexMapError>;
}

/// Draws one cell outline onto `canvas`.
pub fn draw_cell<C: MapCanvas + ?Sized>(
    canvas: &mut C,
    cell: &HexCell,
    style: &PolygonStyle,
    popup: &str,
) -> Result<(), HexMapError> {
    let ring = cell.polygon_ring()?;
    canvas.add_polygon(&ring, style, popup)
}

/// Draws every cell of a layer with the layer's style and popup.
///
/// Returns the number of polygons drawn.
pub fn draw_layer<C: MapCanvas + ?Sized>(
    canvas: &mut C,
    layer: &HexLayer,
) -> Result<usize, HexMapError> {
    let rings = layer.to_polygon_rings()?;
    for ring in &rings {
        canvas.add_polygon(ring, layer.style(), layer.popup())?;
    }
    Ok(rings.len())
}

pub fn draw_marker<C: MapCanvas + ?Sized>(canvas: &mut C, marker: &MarkerConfig) {
    canvas.add_marker(marker);
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Canvas that only records what it was given.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingCanvas {
        pub markers: Vec<MarkerConfig>,
        pub polygons: Vec<(Vec<(f64, f64)>, String, String)>,
    }

    impl MapCanvas for RecordingCanvas {
        fn add_marker(&mut self, marker: &MarkerConfig) {
            self.markers.push(marker.clone());
        }

        fn add_polygon(
            &mut self,
            ring: &[(f64, f64)],
            style: &PolygonStyle,
            popup: &str,
        ) -> Result<(), HexMapError> {
            self.polygons
                .push((ring.to_vec(), style.fill_color.clone(), popup.to_string()));
            Ok(())
        }
    }

    #[test]
    fn test_draw_cell() -> Result<(), HexMapError> {
        let mut canvas = RecordingCanvas::default();
        let cell = HexCell::from_lat_lng(19.0760, 72.9945, 7)?;
        let style = PolygonStyle::new("#007bff", 0.2);

        draw_cell(&mut canvas, &cell, &style, "coarse")?;

        assert_eq!(canvas.polygons.len(), 1);
        let (ring, fill, popup) = &canvas.polygons[0];
        assert_eq!(ring, &cell.polygon_ring()?);
        assert_eq!(fill, "#007bff");
        assert_eq!(popup, "coarse");
        Ok(())
    }

    #[test]
    fn test_draw_layer() -> Result<(), HexMapError> {
        let mut canvas = RecordingCanvas::default();
        let cell = HexCell::from_lat_lng(19.0760, 72.9945, 7)?;
        let layer = HexLayer::builder()
            .cells(cell.children(8)?)
            .style(PolygonStyle::new("#ffc107", 0.4))
            .popup("children")
            .build()?;

        let drawn = draw_layer(&mut canvas, &layer)?;

        assert_eq!(drawn, 7);
        assert_eq!(canvas.polygons.len(), 7);
        assert!(canvas.polygons.iter().all(|(_, fill, p)| fill == "#ffc107" && p == "children"));
        Ok(())
    }

    #[test]
    fn test_draw_marker() {
        let mut canvas = RecordingCanvas::default();
        let marker = MarkerConfig::new((19.0671, 72.9987), "Vashi Railway Station", "train");
        draw_marker(&mut canvas, &marker);
        assert_eq!(canvas.markers, vec![marker]);
    }
}
