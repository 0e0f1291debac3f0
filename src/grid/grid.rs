use crate::direction::Direction;
use crate::error::{Result, SimError};
use crate::grid::cell::Cell;

/// Dense rectangular grid of `rows × cols` values, stored row-major.
///
/// Coordinates are `(x, y)` with `x` the column and `y` the row. Every query
/// that takes coordinates fails with [`SimError::OutOfBounds`] when they fall
/// outside the grid; neighborhoods silently drop off-grid neighbors.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T: Default + Clone> Grid<T> {
    /// Create a grid where every cell holds `T::default()`
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, T::default())
    }
}

impl<T: Clone> Grid<T> {
    /// Create a grid where every cell holds a copy of `value`
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        Self {
            rows,
            cols,
            cells: vec![value; rows * cols],
        }
    }

    /// Positioned copy of the cell at `(x, y)`
    pub fn cell(&self, x: i32, y: i32) -> Result<Cell<T>> {
        self.get(x, y).map(|data| Cell::new(x, y, data.clone()))
    }

    /// Cells within Chebyshev distance `radius` of `(x, y)`, center excluded
    pub fn moore_neighborhood(&self, x: i32, y: i32, radius: u32) -> Result<Vec<Cell<T>>> {
        self.index(x, y)?;
        let r = radius as i32;

        let mut neighborhood = Vec::with_capacity(((2 * r + 1) * (2 * r + 1)) as usize);
        for i in x - r..=x + r {
            for j in y - r..=y + r {
                if (i != x || j != y) && self.contains(i, j) {
                    neighborhood.push(self.cell_unchecked(i, j));
                }
            }
        }

        Ok(neighborhood)
    }

    /// Cells within Manhattan distance `radius` of `(x, y)`, center excluded
    pub fn neumann_neighborhood(&self, x: i32, y: i32, radius: u32) -> Result<Vec<Cell<T>>> {
        self.index(x, y)?;
        let r = radius as i32;

        let mut neighborhood = Vec::new();
        for i in x - r..=x + r {
            for j in y - r..=y + r {
                if (i != x || j != y) && self.contains(i, j) && (i - x).abs() + (j - y).abs() <= r {
                    neighborhood.push(self.cell_unchecked(i, j));
                }
            }
        }

        Ok(neighborhood)
    }

    /// The forward cone seen when facing `direction` from `(x, y)`.
    ///
    /// These are the Moore neighbors within Manhattan distance 1 of
    /// `(x + dx, y + dy)`: three cells for every heading, fewer at the edges.
    pub fn directional_neighborhood(&self, x: i32, y: i32, direction: Direction) -> Result<Vec<Cell<T>>> {
        self.index(x, y)?;
        let (tx, ty) = (x + direction.dx(), y + direction.dy());

        let mut neighborhood = Vec::with_capacity(3);
        for i in x - 1..=x + 1 {
            for j in y - 1..=y + 1 {
                if (i != x || j != y) && self.contains(i, j) && (i - tx).abs() + (j - ty).abs() <= 1 {
                    neighborhood.push(self.cell_unchecked(i, j));
                }
            }
        }

        Ok(neighborhood)
    }

    #[inline]
    fn cell_unchecked(&self, x: i32, y: i32) -> Cell<T> {
        Cell::new(x, y, self.cells[y as usize * self.cols + x as usize].clone())
    }
}

impl<T> Grid<T> {
    /// Build a grid by evaluating `f(x, y)` for every cell
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(i32, i32) -> T) -> Self {
        let mut cells = Vec::with_capacity(rows * cols);
        for y in 0..rows {
            for x in 0..cols {
                cells.push(f(x as i32, y as i32));
            }
        }
        Self { rows, cols, cells }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `(x, y)` lies inside the grid
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.cols && (y as usize) < self.rows
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Result<usize> {
        if self.contains(x, y) {
            Ok(y as usize * self.cols + x as usize)
        } else {
            Err(SimError::OutOfBounds { x, y })
        }
    }

    pub fn get(&self, x: i32, y: i32) -> Result<&T> {
        let idx = self.index(x, y)?;
        Ok(&self.cells[idx])
    }

    pub fn get_mut(&mut self, x: i32, y: i32) -> Result<&mut T> {
        let idx = self.index(x, y)?;
        Ok(&mut self.cells[idx])
    }

    pub fn set(&mut self, x: i32, y: i32, val: T) -> Result<()> {
        let idx = self.index(x, y)?;
        self.cells[idx] = val;
        Ok(())
    }

    /// True iff `(x, y)` touches the first or last row or column
    pub fn is_border(&self, x: i32, y: i32) -> bool {
        x == 0 || y == 0 || x == self.cols as i32 - 1 || y == self.rows as i32 - 1
    }

    pub fn manhattan_distance(&self, x1: i32, y1: i32, x2: i32, y2: i32) -> Result<u32> {
        self.index(x1, y1)?;
        self.index(x2, y2)?;
        Ok((x1 - x2).unsigned_abs() + (y1 - y2).unsigned_abs())
    }

    /// Every value with its coordinates, row by row
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32, &T)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, v)| ((i % cols) as i32, (i / cols) as i32, v))
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> + '_ {
        self.cells.iter_mut()
    }

    /// Grid of the same shape with `f` applied to every value
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            rows: self.rows,
            cols: self.cols,
            cells: self.cells.iter().map(f).collect(),
        }
    }
}
