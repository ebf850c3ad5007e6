use crate::cell::HexCell;
use crate::config::{LayerConfig, MapConfig};
use crate::error::HexMapError;
use crate::index::CellId;
use crate::layer::HexLayer;
use crate::render::{LeafletMap, MapCanvas, draw_layer, draw_marker};
use log::{debug, info};
use serde::Serialize;
use std::path::Path;

/// What was drawn by [`build_map`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapSummary {
    pub markers: usize,
    pub coarse_cell: CellId,
    pub neighborhood_cells: usize,
    pub hyperlocal_center: CellId,
    pub hyperlocal_cells: usize,
}

impl MapSummary {
    pub fn polygons(&self) -> usize {
        1 + self.neighborhood_cells + self.hyperlocal_cells
    }
}

/// The three hexagon layers described by a config.
#[derive(Debug, Clone)]
pub struct MapLayers {
    pub coarse: HexLayer,
    pub neighborhood: HexLayer,
    pub hyperlocal: HexLayer,
    pub hyperlocal_center: CellId,
}

fn cell_at(name: &str, layer: &LayerConfig) -> Result<HexCell, HexMapError> {
    let (lat, lng) = layer
        .point
        .ok_or_else(|| HexMapError::InvalidConfig(format!("{} layer needs a seed point", name)))?;
    HexCell::from_lat_lng(lat, lng, layer.resolution)
}

fn styled(name: &str, cells: Vec<HexCell>, layer: &LayerConfig) -> Result<HexLayer, HexMapError> {
    HexLayer::builder()
        .name(name)
        .cells(cells)
        .style(layer.style.clone())
        .popup(layer.popup.clone())
        .build()
}

/// Computes the coarse cell, its children and the hyperlocal disk.
pub fn build_layers(config: &MapConfig) -> Result<MapLayers, HexMapError> {
    config.validate()?;

    let coarse_cell = cell_at("coarse", &config.coarse)?;
    debug!("coarse cell {} at resolution {}", coarse_cell.id, coarse_cell.resolution);

    let children = coarse_cell.children(config.neighborhood.resolution)?;
    debug!(
        "{} children at resolution {}",
        children.len(),
        config.neighborhood.resolution
    );

    let center = cell_at("hyperlocal", &config.hyperlocal)?;
    let disk = center.disk(config.hyperlocal.disk_radius)?;
    debug!(
        "{} cells within {} steps of {}",
        disk.len(),
        config.hyperlocal.disk_radius,
        center.id
    );

    Ok(MapLayers {
        coarse: styled("coarse", vec![coarse_cell], &config.coarse)?,
        neighborhood: styled("neighborhood", children, &config.neighborhood)?,
        hyperlocal: styled("hyperlocal", disk, &config.hyperlocal)?,
        hyperlocal_center: center.id,
    })
}

/// Draws the markers and the three layers of `config` onto `canvas`.
///
/// Layers are drawn coarse first so finer cells sit on top.
pub fn build_map<C: MapCanvas + ?Sized>(
    config: &MapConfig,
    canvas: &mut C,
) -> Result<MapSummary, HexMapError> {
    let layers = build_layers(config)?;

    for marker in &config.markers {
        draw_marker(canvas, marker);
    }
    draw_layer(canvas, &layers.coarse)?;
    let neighborhood_cells = draw_layer(canvas, &layers.neighborhood)?;
    let hyperlocal_cells = draw_layer(canvas, &layers.hyperlocal)?;

    let coarse_cell = layers
        .coarse
        .cells()
        .first()
        .map(|c| c.id)
        .ok_or_else(|| HexMapError::RenderError("coarse layer is empty".to_string()))?;

    Ok(MapSummary {
        markers: config.markers.len(),
        coarse_cell,
        neighborhood_cells,
        hyperlocal_center: layers.hyperlocal_center,
        hyperlocal_cells,
    })
}

/// Renders `config` to a Leaflet page and writes it to `config.output_path`.
pub fn generate_map(config: &MapConfig) -> Result<MapSummary, HexMapError> {
    let mut map = LeafletMap::from_config(config);
    let summary = build_map(config, &mut map)?;
    map.save(&config.output_path)?;

    info!(
        "coarse cell {}, {} neighborhood cells, {} hyperlocal cells",
        summary.coarse_cell, summary.neighborhood_cells, summary.hyperlocal_cells
    );
    Ok(summary)
}

/// The line printed once the map has been written.
pub fn success_message(path: impl AsRef<Path>) -> String {
    format!(
        "Successfully generated the map. Please open the file '{}' in your web browser.",
        path.as_ref().display()
    )
}
