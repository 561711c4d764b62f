//! Piece controller - active and queued pieces
//!
//! Owns the falling piece and one piece of lookahead. Every position or
//! rotation change goes through [`checker::is_valid_position`]; a rejected
//! request leaves the piece untouched.

use rand::Rng;

use crate::checker;
use crate::error::Result;
use crate::grid::Grid;
use crate::shapes::{self, filled_offsets, Matrix, Shape};
use crate::types::{ColorId, PieceKind};

/// A piece instance on (or about to enter) the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: ColorId,
    row: i32,
    col: i32,
    rotation: usize,
}

impl Piece {
    /// A piece in rotation 0 anchored at (0, 0)
    pub fn new(kind: PieceKind, color: ColorId) -> Self {
        Self {
            kind,
            color,
            row: 0,
            col: 0,
            rotation: 0,
        }
    }

    pub fn at(self, row: i32, col: i32) -> Self {
        Self { row, col, ..self }
    }

    /// Same piece in another rotation state
    pub fn in_rotation(self, rotation: usize) -> Result<Self> {
        self.shape().cells_at(rotation)?;
        Ok(Self { rotation, ..self })
    }

    pub fn row(&self) -> i32 {
        self.row
    }

    pub fn col(&self) -> i32 {
        self.col
    }

    pub fn rotation(&self) -> usize {
        self.rotation
    }

    pub fn shape(&self) -> &'static Shape {
        shapes::shape(self.kind)
    }

    pub fn max_rotation(&self) -> usize {
        self.shape().max_rotation()
    }

    /// Matrix of the current rotation state
    pub fn matrix(&self) -> Matrix {
        // rotation is only ever set from the shape's own table
        self.shape().cells_at(self.rotation).unwrap_or_default()
    }

    /// Absolute (row, col) of every filled cell
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        filled_offsets(self.matrix()).map(move |(i, j)| (self.row + i as i32, self.col + j as i32))
    }

    pub fn fits(&self, grid: &Grid) -> bool {
        checker::is_valid_position(self.kind, self.rotation, self.row, self.col, grid)
    }
}

/// Spawns pieces from an injected random source and applies validated moves
#[derive(Debug, Clone)]
pub struct PieceController<R> {
    rng: R,
    spawn_col: i32,
    active: Option<Piece>,
    next: Option<Piece>,
}

impl<R: Rng> PieceController<R> {
    pub fn new(rng: R, cols: usize) -> Self {
        Self {
            rng,
            spawn_col: (cols / 2) as i32,
            active: None,
            next: None,
        }
    }

    pub fn active(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    pub fn next(&self) -> Option<&Piece> {
        self.next.as_ref()
    }

    pub fn spawn_col(&self) -> i32 {
        self.spawn_col
    }

    /// A fresh piece of uniformly random kind and, independently, uniformly
    /// random color, placed at the spawn anchor in rotation 0.
    pub fn spawn(&mut self) -> Piece {
        let kinds = shapes::catalog();
        let kind = kinds[self.rng.gen_range(0..kinds.len())].kind;
        let color = ColorId::ALL[self.rng.gen_range(0..ColorId::ALL.len())];
        Piece::new(kind, color).at(0, self.spawn_col)
    }

    /// Fill both the active slot and the lookahead slot with new pieces.
    pub fn deal(&mut self) -> Piece {
        let active = self.spawn();
        self.active = Some(active);
        self.next = Some(self.spawn());
        active
    }

    /// The queued piece becomes active at the spawn anchor; a new piece is
    /// queued behind it.
    pub fn promote_next(&mut self) -> Piece {
        let queued = match self.next.take() {
            Some(piece) => piece,
            None => self.spawn(),
        };
        let active = Piece {
            row: 0,
            col: self.spawn_col,
            rotation: 0,
            ..queued
        };
        self.active = Some(active);
        self.next = Some(self.spawn());
        active
    }

    /// Move the active piece by (`d_row`, `d_col`) if the target is valid.
    pub fn try_move(&mut self, d_row: i32, d_col: i32, grid: &Grid) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        let moved = active.at(active.row + d_row, active.col + d_col);
        if !moved.fits(grid) {
            return false;
        }
        self.active = Some(moved);
        true
    }

    /// Advance to the next rotation state (wrapping) in place if it fits.
    pub fn try_rotate(&mut self, grid: &Grid) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        let rotated = Piece {
            rotation: active.shape().next_rotation(active.rotation),
            ..active
        };
        if !rotated.fits(grid) {
            return false;
        }
        self.active = Some(rotated);
        true
    }

    /// Remove the active piece, e.g. when it locks
    pub fn take_active(&mut self) -> Option<Piece> {
        self.active.take()
    }

    pub fn clear(&mut self) {
        self.active = None;
        self.next = None;
    }

    #[cfg(test)]
    pub(crate) fn set_active(&mut self, piece: Piece) {
        self.active = Some(piece);
    }

    #[cfg(test)]
    pub(crate) fn set_next(&mut self, piece: Piece) {
        self.next = Some(piece);
    }
}
