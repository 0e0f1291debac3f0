//! Terrain sources feeding [`AntColonySimulator::setup`](crate::AntColonySimulator::setup).
//!
//! A terrain grid holds `true` for rock and `false` for floor. Cave
//! generators live outside this crate and plug in through [`TerrainSource`].

use crate::error::{Result, SimError};
use crate::grid::{parse_terrain, Grid};

/// Anything able to produce a rock/floor layout
pub trait TerrainSource {
    fn terrain(&self) -> Result<Grid<bool>>;
}

/// Terrain read from a `#`/`.` map file
#[derive(Clone, Debug)]
pub struct MapFile {
    pub path: String,
}

impl MapFile {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl TerrainSource for MapFile {
    fn terrain(&self) -> Result<Grid<bool>> {
        parse_terrain(&self.path)
    }
}

/// Empty arena with a rock border
#[derive(Clone, Copy, Debug)]
pub struct OpenField {
    pub rows: usize,
    pub cols: usize,
}

impl TerrainSource for OpenField {
    fn terrain(&self) -> Result<Grid<bool>> {
        open_field(self.rows, self.cols)
    }
}

/// Rock on the border, floor everywhere else
pub fn open_field(rows: usize, cols: usize) -> Result<Grid<bool>> {
    if rows == 0 || cols == 0 {
        return Err(SimError::InvalidTerrain(format!(
            "open field needs a positive size, got {}x{}",
            rows, cols
        )));
    }
    if rows.checked_mul(cols).is_none() {
        return Err(SimError::InvalidTerrain(format!(
            "open field of {}x{} cells is too large",
            rows, cols
        )));
    }

    let mut grid = Grid::filled(rows, cols, false);
    for y in 0..rows as i32 {
        for x in 0..cols as i32 {
            if grid.is_border(x, y) {
                grid.set(x, y, true)?;
            }
        }
    }
    Ok(grid)
}
