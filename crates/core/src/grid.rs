//! Grid module - manages the square playfield
//!
//! The grid is an `N×N` matrix of color ids where `0` means empty. `N` is chosen
//! at construction (up to [`MAX_GRID_SIZE`]); storage is a flat array sized for
//! the maximum so the grid never allocates and copies cheaply for undo.
//! Coordinates: (x, y) where x is the column (left to right) and y the row
//! (top to bottom).
//!
//! Unlike a falling-block well, cleared lines are simply emptied in place;
//! nothing shifts.

use arrayvec::ArrayVec;

use crate::shapes::Shape;
use crate::types::{Cell, ColorId, EMPTY, MAX_GRID_SIZE};

/// Total number of cells in storage
const GRID_CAPACITY: usize = (MAX_GRID_SIZE as usize) * (MAX_GRID_SIZE as usize);

/// Indices of full rows or full columns, ascending
pub type LineIndices = ArrayVec<usize, { MAX_GRID_SIZE as usize }>;

/// Lines detected (and cleared) in one pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineClear {
    pub rows: LineIndices,
    pub cols: LineIndices,
}

impl LineClear {
    /// Total lines in this clear; a row and a column count separately.
    pub fn count(&self) -> usize {
        self.rows.len() + self.cols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.cols.is_empty()
    }
}

/// The game grid using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: u8,
    /// Flat array of cells, row-major order (y * size + x)
    cells: [Cell; GRID_CAPACITY],
}

impl Grid {
    /// Create a new empty grid. `size` is clamped to `1..=MAX_GRID_SIZE`.
    pub fn new(size: u8) -> Self {
        Self {
            size: size.clamp(1, MAX_GRID_SIZE),
            cells: [EMPTY; GRID_CAPACITY],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i8, y: i8) -> Option<usize> {
        if self.is_out_of_bounds(x, y) {
            return None;
        }
        Some((y as usize) * (self.size as usize) + (x as usize))
    }

    /// Side length of the grid
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and empty
    pub fn is_valid(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(EMPTY))
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(c) if c != EMPTY)
    }

    /// Check if position is out of bounds
    pub fn is_out_of_bounds(&self, x: i8, y: i8) -> bool {
        x < 0 || y < 0 || x >= self.size as i8 || y >= self.size as i8
    }

    /// Check whether every occupied cell of `shape`, anchored at (x, y),
    /// lands inside the grid on an empty cell.
    pub fn fits(&self, shape: &Shape, x: i8, y: i8) -> bool {
        shape.cells().all(|(dx, dy)| {
            match (x.checked_add(dx), y.checked_add(dy)) {
                (Some(px), Some(py)) => self.is_valid(px, py),
                _ => false,
            }
        })
    }

    /// Write `color` into every occupied cell of `shape` anchored at (x, y).
    ///
    /// Returns false (and writes nothing) if the shape does not fit.
    pub fn commit(&mut self, shape: &Shape, x: i8, y: i8, color: ColorId) -> bool {
        // First check if all positions are valid
        if !self.fits(shape, x, y) {
            return false;
        }

        // Then write all cells
        for (dx, dy) in shape.cells() {
            self.set(x + dx, y + dy, color);
        }

        true
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        let n = self.size as usize;
        if y >= n {
            return false;
        }
        self.cells[y * n..(y + 1) * n].iter().all(|&c| c != EMPTY)
    }

    /// Check if a column is completely filled
    pub fn is_col_full(&self, x: usize) -> bool {
        let n = self.size as usize;
        if x >= n {
            return false;
        }
        (0..n).all(|y| self.cells[y * n + x] != EMPTY)
    }

    /// Indices of every full row, ascending
    pub fn full_rows(&self) -> LineIndices {
        (0..self.size as usize)
            .filter(|&y| self.is_row_full(y))
            .collect()
    }

    /// Indices of every full column, ascending
    pub fn full_cols(&self) -> LineIndices {
        (0..self.size as usize)
            .filter(|&x| self.is_col_full(x))
            .collect()
    }

    /// Empty the given rows. Out-of-range indices are ignored.
    pub fn clear_rows(&mut self, rows: &[usize]) {
        let n = self.size as usize;
        for &y in rows.iter().filter(|&&y| y < n) {
            self.cells[y * n..(y + 1) * n].fill(EMPTY);
        }
    }

    /// Empty the given columns. Out-of-range indices are ignored.
    pub fn clear_cols(&mut self, cols: &[usize]) {
        let n = self.size as usize;
        for &x in cols.iter().filter(|&&x| x < n) {
            for y in 0..n {
                self.cells[y * n + x] = EMPTY;
            }
        }
    }

    /// Detect all full rows and columns, then clear them.
    ///
    /// Detection runs on the whole grid before anything is cleared, so a cell
    /// shared by a full row and a full column counts toward both.
    pub fn clear_full_lines(&mut self) -> LineClear {
        let clear = LineClear {
            rows: self.full_rows(),
            cols: self.full_cols(),
        };
        self.clear_rows(&clear.rows);
        self.clear_cols(&clear.cols);
        clear
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells().iter().filter(|&&c| c != EMPTY).count()
    }

    /// True when no cell is filled
    pub fn is_empty(&self) -> bool {
        self.cells().iter().all(|&c| c == EMPTY)
    }

    /// The live cells (row-major, `size * size` long)
    pub fn cells(&self) -> &[Cell] {
        let n = self.size as usize;
        &self.cells[..n * n]
    }

    /// Iterate rows as slices
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells().chunks(self.size as usize)
    }

    /// Copy into a fixed `MAX_GRID_SIZE` square, padding with empty cells.
    pub fn write_u8_grid(
        &self,
        out: &mut [[u8; MAX_GRID_SIZE as usize]; MAX_GRID_SIZE as usize],
    ) {
        for row in out.iter_mut() {
            row.fill(EMPTY);
        }
        for (y, row) in self.rows().enumerate() {
            out[y][..row.len()].copy_from_slice(row);
        }
    }

    /// Inverse of [`Grid::write_u8_grid`]: take the top-left `size` square.
    pub fn from_u8_grid(
        cells: &[[u8; MAX_GRID_SIZE as usize]; MAX_GRID_SIZE as usize],
        size: u8,
    ) -> Self {
        let mut grid = Self::new(size);
        let n = grid.size as usize;
        for (y, row) in cells.iter().take(n).enumerate() {
            grid.cells[y * n..(y + 1) * n].copy_from_slice(&row[..n]);
        }
        grid
    }

    /// Build a grid from text rows: `.` is empty, `1`-`9` is a color id and
    /// any other character is color 1. The grid side is the number of rows.
    ///
    /// Returns None if the rows are not square or exceed the maximum size.
    pub fn from_rows(rows: &[&str]) -> Option<Self> {
        let n = rows.len();
        if n == 0 || n > MAX_GRID_SIZE as usize {
            return None;
        }
        let mut grid = Self::new(n as u8);
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != n {
                return None;
            }
            for (x, ch) in row.chars().enumerate() {
                let cell = match ch {
                    '.' => EMPTY,
                    '1'..='9' => ch as u8 - b'0',
                    _ => 1,
                };
                grid.set(x as i8, y as i8, cell);
            }
        }
        Some(grid)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(crate::types::DEFAULT_GRID_SIZE)
    }
}
