//! Grid module - occupancy state of the playfield
//!
//! A fixed `rows x cols` matrix of cells, each empty or holding the color of a
//! locked block. Uses a flat row-major vector sized once per session.
//! Coordinates: (row, col) where row 0 is the top and col 0 the left edge.
//!
//! The grid knows nothing about pieces. Mutators do not check whether a write
//! is legal for play; that is the job of [`crate::checker`].

use crate::error::{CoreError, Result};
use crate::types::{Cell, ColorId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Row-major cells (row * cols + col)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid with every cell unoccupied
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(CoreError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the cell at (row, col)
    pub fn get(&self, row: usize, col: usize) -> Result<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    pub fn is_occupied(&self, row: usize, col: usize) -> Result<bool> {
        self.get(row, col).map(|cell| cell.is_some())
    }

    /// Mark a cell occupied with the given color
    pub fn occupy(&mut self, row: usize, col: usize, color: ColorId) -> Result<()> {
        let idx = self.index(row, col)?;
        self.cells[idx] = Some(color);
        Ok(())
    }

    /// Mark a cell unoccupied
    pub fn clear(&mut self, row: usize, col: usize) -> Result<()> {
        let idx = self.index(row, col)?;
        self.cells[idx] = None;
        Ok(())
    }

    /// Cells of a single row, left to right
    pub fn row(&self, row: usize) -> Result<&[Cell]> {
        if row >= self.rows {
            return Err(CoreError::OutOfBounds {
                row,
                col: 0,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.row_cells(row))
    }

    fn row_cells(&self, row: usize) -> &[Cell] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        row < self.rows && self.row_cells(row).iter().all(|cell| cell.is_some())
    }

    /// Empty every cell of a row. Out-of-range rows are ignored.
    pub fn clear_row(&mut self, row: usize) {
        if row >= self.rows {
            return;
        }
        let start = row * self.cols;
        self.cells[start..start + self.cols].fill(None);
    }

    /// Copy occupancy and color of row `src` over row `dst`
    pub(crate) fn copy_row(&mut self, src: usize, dst: usize) {
        let width = self.cols;
        self.cells
            .copy_within(src * width..src * width + width, dst * width);
    }

    /// Row-major view of every cell
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Empty the whole grid
    pub fn reset(&mut self) {
        self.cells.fill(None);
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Build a grid from text rows: `.` is empty, any other char is occupied.
    ///
    /// The occupied color is derived from the char so tests can tell rows apart
    /// after a collapse: `R B G Y W` map to their colors, anything else is red.
    pub fn from_rows(lines: &[&str]) -> Self {
        let rows = lines.len();
        let cols = lines.first().map(|l| l.chars().count()).unwrap_or(0);
        let mut grid = Self::new(rows, cols);
        for (r, line) in lines.iter().enumerate() {
            for (c, ch) in line.chars().enumerate().take(cols) {
                grid.cells[r * cols + c] = match ch {
                    '.' => None,
                    'B' => Some(ColorId::Blue),
                    'G' => Some(ColorId::Green),
                    'Y' => Some(ColorId::Yellow),
                    'W' => Some(ColorId::White),
                    _ => Some(ColorId::Red),
                };
            }
        }
        grid
    }

    /// Render back to the text form accepted by [`Grid::from_rows`]
    pub fn to_rows(&self) -> Vec<String> {
        (0..self.rows)
            .map(|r| {
                self.row_cells(r)
                    .iter()
                    .map(|cell| match cell {
                        None => '.',
                        Some(ColorId::Red) => 'R',
                        Some(ColorId::Blue) => 'B',
                        Some(ColorId::Green) => 'G',
                        Some(ColorId::Yellow) => 'Y',
                        Some(ColorId::White) => 'W',
                    })
                    .collect()
            })
            .collect()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(crate::types::BOARD_ROWS, crate::types::BOARD_COLS)
    }
}
