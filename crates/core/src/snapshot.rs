//! Read-only copy of the game state for renderers.

use crate::piece::Piece;
use crate::types::{Cell, GamePhase};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameSnapshot {
    pub rows: usize,
    pub cols: usize,
    /// Row-major grid cells
    pub cells: Vec<Cell>,
    pub active: Option<Piece>,
    pub next: Option<Piece>,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub phase: GamePhase,
    pub quick_drop: bool,
}

impl GameSnapshot {
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells[row * self.cols + col]
    }
}
