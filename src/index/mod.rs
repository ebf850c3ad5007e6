pub mod constants;
mod identifier;
mod indexing;

pub use constants::{APERTURE, MAX_RESOLUTION, hex_disk_size};
pub use identifier::{CellId, resolution_from_u8};
pub use indexing::{
    boundary_of, cell_from_point, center_of, children_of, disk_around, grid_distance,
    is_pentagon, parent_of,
};
