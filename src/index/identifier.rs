use crate::error::HexMapError;
use crate::index::constants::MAX_RESOLUTION;
use h3o::{CellIndex, Resolution};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Opaque identifier of one H3 cell at one resolution.
///
/// A `CellId` is always valid: the only ways to get one are from the grid
/// generator or by parsing, and parsing rejects malformed identifiers.
///
/// # Format
///
/// The canonical text form is the 15-digit lowercase hexadecimal encoding of
/// the 64-bit H3 index, e.g. `8760145b0ffffff`.
///
/// # Example
/// ```
/// use hexmap_rs::{CellId, cell_from_point};
///
/// # fn main() -> Result<(), hexmap_rs::HexMapError> {
/// let cell = cell_from_point(19.0760, 72.9945, 7)?;
/// let restored: CellId = cell.to_string().parse()?;
/// assert_eq!(cell, restored);
/// assert_eq!(restored.resolution(), 7);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(CellIndex);

impl CellId {
    pub(crate) fn new(index: CellIndex) -> Self {
        Self(index)
    }

    pub(crate) fn index(self) -> CellIndex {
        self.0
    }

    /// Resolution (0-15) this cell belongs to.
    pub fn resolution(self) -> u8 {
        u8::from(self.0.resolution())
    }

    /// Raw 64-bit H3 index.
    pub fn as_u64(self) -> u64 {
        u64::from(self.0)
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CellId {
    type Err = HexMapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        CellIndex::from_str(trimmed)
            .map(Self)
            .map_err(|_| HexMapError::InvalidCellId(trimmed.to_string()))
    }
}

impl TryFrom<u64> for CellId {
    type Error = HexMapError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        CellIndex::try_from(value)
            .map(Self)
            .map_err(|_| HexMapError::InvalidCellId(format!("{:x}", value)))
    }
}

impl From<CellId> for u64 {
    fn from(cell: CellId) -> Self {
        cell.as_u64()
    }
}

impl Serialize for CellId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CellId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Converts a numeric resolution to an `h3o::Resolution`.
pub fn resolution_from_u8(resolution: u8) -> Result<Resolution, HexMapError> {
    if resolution > MAX_RESOLUTION {
        return Err(HexMapError::InvalidResolution(resolution));
    }
    Resolution::try_from(resolution).map_err(|_| HexMapError::InvalidResolution(resolution))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() -> Result<(), HexMapError> {
        let id: CellId = "8a2a1072b59ffff".parse()?;
        assert_eq!(id.to_string(), "8a2a1072b59ffff");
        assert_eq!(id.resolution(), 10);
        assert_eq!(id.as_u64(), 0x8a2a1072b59ffff);
        Ok(())
    }

    #[test]
    fn test_try_from_u64() -> Result<(), HexMapError> {
        let id = CellId::try_from(0x8a2a1072b59ffff)?;
        assert_eq!(u64::from(id), 0x8a2a1072b59ffff);
        Ok(())
    }

    #[test]
    fn test_invalid_identifier() {
        assert!(matches!(
            "invalid".parse::<CellId>(),
            Err(HexMapError::InvalidCellId(_))
        ));
        assert!(matches!(
            CellId::try_from(0),
            Err(HexMapError::InvalidCellId(_))
        ));
        assert!("".parse::<CellId>().is_err());
    }

    #[test]
    fn test_serde_as_string() -> Result<(), HexMapError> {
        let id: CellId = "8a2a1072b59ffff".parse()?;
        let json = serde_json::to_string(&id).map_err(|e| HexMapError::IoError(e.to_string()))?;
        assert_eq!(json, "\"8a2a1072b59ffff\"");

        let back: CellId =
            serde_json::from_str(&json).map_err(|e| HexMapError::IoError(e.to_string()))?;
        assert_eq!(back, id);
        Ok(())
    }

    #[test]
    fn test_resolution_from_u8() {
        assert!(resolution_from_u8(0).is_ok());
        assert!(resolution_from_u8(15).is_ok());
        assert_eq!(
            resolution_from_u8(16),
            Err(HexMapError::InvalidResolution(16))
        );
    }
}
