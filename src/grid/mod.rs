pub mod cell;
pub mod grid;
pub mod parser;

pub use cell::Cell;
pub use grid::Grid;
pub use parser::{parse_terrain, parse_terrain_from_str};
