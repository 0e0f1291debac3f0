use crate::error::{Result, SimError};
use crate::grid::grid::Grid;
use std::fs::File;
use std::io::{BufRead, BufReader};

const ROCK: char = '#';
const FLOOR: char = '.';

/// Parse a terrain map from a file path. `true` cells are rock.
pub fn parse_terrain(path: &str) -> Result<Grid<bool>> {
    let file = File::open(path)?;
    let reader = BufReader::with_capacity(64 * 1024, file);

    let mut rows: Vec<Vec<bool>> = Vec::with_capacity(256);
    for (n, line) in reader.lines().enumerate() {
        let line = line?;
        push_row(&mut rows, n + 1, &line)?;
    }

    into_grid(rows)
}

/// Parse a terrain map directly from an in-memory string
pub fn parse_terrain_from_str(src: &str) -> Result<Grid<bool>> {
    let mut rows: Vec<Vec<bool>> = Vec::new();
    for (n, line) in src.lines().enumerate() {
        push_row(&mut rows, n + 1, line)?;
    }

    into_grid(rows)
}

fn push_row(rows: &mut Vec<Vec<bool>>, line_no: usize, raw: &str) -> Result<()> {
    let line = raw.trim_end();
    if line.is_empty() {
        return Ok(());
    }

    let row = line
        .chars()
        .map(|c| match c {
            ROCK => Ok(true),
            FLOOR => Ok(false),
            other => Err(SimError::InvalidTerrain(format!(
                "line {}: unexpected character '{}'",
                line_no, other
            ))),
        })
        .collect::<Result<Vec<bool>>>()?;

    if let Some(first) = rows.first() {
        if first.len() != row.len() {
            return Err(SimError::InvalidTerrain(format!(
                "line {}: expected {} cells, found {}",
                line_no,
                first.len(),
                row.len()
            )));
        }
    }

    rows.push(row);
    Ok(())
}

fn into_grid(rows: Vec<Vec<bool>>) -> Result<Grid<bool>> {
    if rows.is_empty() {
        return Err(SimError::InvalidTerrain("map has no rows".to_string()));
    }

    let cols = rows[0].len();
    Ok(Grid::from_fn(rows.len(), cols, |x, y| rows[y as usize][x as usize]))
}
