//! Board geometry: the occupancy map, its coordinates, and the eight
//! compass directions a token may step in.
mod direction;
mod grid;
mod square;

pub use direction::*;
pub use grid::*;
pub use square::*;
