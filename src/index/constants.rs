/// Finest H3 resolution.
pub const MAX_RESOLUTION: u8 = 15;

/// Number of children a hexagon has at the next finer resolution.
pub const APERTURE: usize = 7;

/// Number of cells in a hexagonal disk of radius `k` away from pentagons.
///
/// `1 + 3k(k + 1)`; pentagon distortion can only shrink a real disk.
pub const fn hex_disk_size(k: u32) -> usize {
    1 + 3 * (k as usize) * (k as usize + 1)
}
