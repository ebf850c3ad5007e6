use crate::cell::HexCell;
use crate::config::PolygonStyle;
use crate::error::HexMapError;
use geo::BoundingRect;
use geo_types::{MultiPolygon, Rect};
use rayon::prelude::*;

/// A styled set of cells at one resolution, drawn as one group on the map.
#[derive(Debug, Clone)]
pub struct HexLayer {
    name: String,
    cells: Vec<HexCell>,
    resolution: u8,
    style: PolygonStyle,
    popup: String,
}

impl HexLayer {
    pub fn builder() -> HexLayerBuilder {
        HexLayerBuilder::new()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn resolution(&self) -> u8 {
        self.resolution
    }

    pub fn style(&self) -> &PolygonStyle {
        &self.style
    }

    pub fn popup(&self) -> &str {
        &self.popup
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[HexCell] {
        &self.cells
    }

    pub fn iter(&self) -> impl Iterator<Item = &HexCell> {
        self.cells.iter()
    }

    /// Closed `(lng, lat)` rings, in cell order. Boundaries are computed in
    /// parallel.
    pub fn to_polygon_rings(&self) -> Result<Vec<Vec<(f64, f64)>>, HexMapError> {
        self.cells
            .par_iter()
            .map(|cell| cell.polygon_ring())
            .collect()
    }

    /// Bounding box of all cell polygons, `None` for an empty layer.
    pub fn bounding_rect(&self) -> Result<Option<Rect<f64>>, HexMapError> {
        let polygons = self
            .cells
            .par_iter()
            .map(|cell| cell.to_polygon())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(MultiPolygon::new(polygons).bounding_rect())
    }
}

#[derive(Debug, Default)]
pub struct HexLayerBuilder {
    name: Option<String>,
    cells: Vec<HexCell>,
    style: Option<PolygonStyle>,
    popup: Option<String>,
}

impl HexLayerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn cell(mut self, cell: HexCell) -> Self {
        self.cells.push(cell);
        self
    }

    pub fn cells(mut self, cells: impl IntoIterator<Item = HexCell>) -> Self {
        self.cells.extend(cells);
        self
    }

    pub fn style(mut self, style: PolygonStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn popup(mut self, popup: impl Into<String>) -> Self {
        self.popup = Some(popup.into());
        self
    }

    /// Fails if the layer mixes resolutions or has no style.
    pub fn build(self) -> Result<HexLayer, HexMapError> {
        let style = self
            .style
            .ok_or_else(|| HexMapError::InvalidConfig("layer style must be set".to_string()))?;

        let resolution = self.cells.first().map_or(0, |c| c.resolution);
        if let Some(other) = self.cells.iter().find(|c| c.resolution != resolution) {
            return Err(HexMapError::InvalidConfig(format!(
                "layer mixes resolution {} with resolution {}",
                resolution, other.resolution
            )));
        }

        let popup = self
            .popup
            .unwrap_or_else(|| format!("<b>Resolution {} Hexagon</b>", resolution));

        Ok(HexLayer {
            name: self.name.unwrap_or_else(|| format!("resolution-{}", resolution)),
            cells: self.cells,
            resolution,
            style,
            popup,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn disk_layer() -> Result<HexLayer, HexMapError> {
        let center = HexCell::from_lat_lng(19.0649, 73.0016, 10)?;
        HexLayer::builder()
            .name("hyperlocal")
            .cells(center.disk(2)?)
            .style(PolygonStyle::new("#dc3545", 0.6))
            .build()
    }

    #[test]
    fn test_builder() -> Result<(), HexMapError> {
        let layer = disk_layer()?;

        assert_eq!(layer.name(), "hyperlocal");
        assert_eq!(layer.resolution(), 10);
        assert_eq!(layer.len(), 19);
        assert_eq!(layer.popup(), "<b>Resolution 10 Hexagon</b>");
        assert_eq!(layer.style().fill_color, "#dc3545");
        Ok(())
    }

    #[test]
    fn test_builder_requires_style() -> Result<(), HexMapError> {
        let cell = HexCell::from_lat_lng(19.0649, 73.0016, 10)?;
        let result = HexLayer::builder().cell(cell).build();
        assert!(matches!(result, Err(HexMapError::InvalidConfig(_))));
        Ok(())
    }

    #[test]
    fn test_builder_rejects_mixed_resolutions() -> Result<(), HexMapError> {
        let result = HexLayer::builder()
            .cell(HexCell::from_lat_lng(19.0649, 73.0016, 10)?)
            .cell(HexCell::from_lat_lng(19.0649, 73.0016, 9)?)
            .style(PolygonStyle::new("#dc3545", 0.6))
            .build();
        assert_eq!(
            result.err(),
            Some(HexMapError::InvalidConfig(
                "layer mixes resolution 10 with resolution 9".to_string()
            ))
        );
        Ok(())
    }

    #[test]
    fn test_to_polygon_rings_keeps_cell_order() -> Result<(), HexMapError> {
        let layer = disk_layer()?;
        let rings = layer.to_polygon_rings()?;

        assert_eq!(rings.len(), layer.len());
        for (ring, cell) in rings.iter().zip(layer.iter()) {
            assert_eq!(ring, &cell.polygon_ring()?);
        }
        Ok(())
    }

    #[test]
    fn test_bounding_rect() -> Result<(), HexMapError> {
        let layer = disk_layer()?;
        let rect = layer.bounding_rect()?;

        assert!(rect.is_some());
        if let Some(rect) = rect {
            assert!(rect.min().x < 73.0016 && rect.max().x > 73.0016);
            assert!(rect.min().y < 19.0649 && rect.max().y > 19.0649);
        }
        Ok(())
    }

    #[test]
    fn test_empty_layer() -> Result<(), HexMapError> {
        let layer = HexLayer::builder()
            .style(PolygonStyle::new("#007bff", 0.2))
            .build()?;
        assert!(layer.is_empty());
        assert_eq!(layer.bounding_rect()?, None);
        Ok(())
    }
}
