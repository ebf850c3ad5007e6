/// Error type for hexmap-rs operations.
#[derive(Debug, PartialEq)]
pub enum HexMapError {
    /// Latitude is not finite or outside -90..=90.
    InvalidLatitude(f64),
    /// Longitude is not finite or outside -180..=180.
    InvalidLongitude(f64),
    /// The resolution is outside the valid range (0-15).
    InvalidResolution(u8),
    /// A child resolution was requested that is not finer than its parent.
    InvalidChildResolution { parent: u8, child: u8 },
    /// The cell identifier is malformed or does not name a valid cell.
    InvalidCellId(String),
    /// A grid disk was requested with a negative radius.
    InvalidRadius(i32),
    /// A boundary ring has too few points to form a polygon.
    InvalidRing(usize),
    /// The map configuration is inconsistent.
    InvalidConfig(String),
    /// The renderer could not process a shape or serialize the map.
    RenderError(String),
    /// File I/O error.
    IoError(String),
}

impl HexMapError {
    /// Returns `true` for errors caused by bad coordinates, resolutions,
    /// identifiers or ring inputs.
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, HexMapError::RenderError(_) | HexMapError::IoError(_))
    }
}

impl std::fmt::Display for HexMapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HexMapError::InvalidLatitude(lat) => write!(f, "Invalid latitude: {}", lat),
            HexMapError::InvalidLongitude(lng) => write!(f, "Invalid longitude: {}", lng),
            HexMapError::InvalidResolution(r) => write!(f, "Invalid resolution: {}", r),
            HexMapError::InvalidChildResolution { parent, child } => write!(
                f,
                "Invalid child resolution: {} is not finer than {}",
                child, parent
            ),
            HexMapError::InvalidCellId(id) => write!(f, "Invalid cell identifier: {}", id),
            HexMapError::InvalidRadius(k) => write!(f, "Invalid disk radius: {}", k),
            HexMapError::InvalidRing(n) => {
                write!(f, "Invalid ring: {} points, at least 3 required", n)
            }
            HexMapError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            HexMapError::RenderError(msg) => write!(f, "Render error: {}", msg),
            HexMapError::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for HexMapError {}
