//! Shape catalog - piece kinds and their rotation states
//!
//! Every kind owns an ordered, immutable table of rotation states. A state is
//! a small matrix of 0/1 cells; rows may be ragged, missing trailing cells are
//! empty. Offsets are relative to the piece anchor (its top-left corner), not
//! grid coordinates.
//!
//! Rotation only ever advances forward through the table and wraps around.

use crate::error::{CoreError, Result};
use crate::types::PieceKind;

/// One rotation state: rows of 0/1 cells.
pub type Matrix = &'static [&'static [u8]];

const I_STATES: &[Matrix] = &[
    &[&[1, 1, 1, 1]],
    &[&[1], &[1], &[1], &[1]],
];

const J_STATES: &[Matrix] = &[
    &[&[0, 1], &[0, 1], &[1, 1]],
    &[&[1], &[1, 1, 1]],
    &[&[1, 1], &[1], &[1]],
    &[&[1, 1, 1], &[0, 0, 1]],
];

const L_STATES: &[Matrix] = &[
    &[&[1], &[1], &[1, 1]],
    &[&[0, 0, 1], &[1, 1, 1]],
    &[&[1, 1], &[0, 1], &[0, 1]],
    &[&[1, 1, 1], &[1]],
];

const O_STATES: &[Matrix] = &[&[&[1, 1], &[1, 1]]];

const S_STATES: &[Matrix] = &[
    &[&[0, 1, 1], &[1, 1]],
    &[&[1], &[1, 1], &[0, 1]],
];

const T_STATES: &[Matrix] = &[
    &[&[1, 1, 1], &[0, 1, 0]],
    &[&[0, 1], &[1, 1], &[0, 1]],
    &[&[0, 1], &[1, 1, 1]],
    &[&[1], &[1, 1], &[1]],
];

const Z_STATES: &[Matrix] = &[
    &[&[1, 1], &[0, 1, 1]],
    &[&[0, 1], &[1, 1], &[1, 0]],
];

/// A piece kind together with its rotation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub kind: PieceKind,
    states: &'static [Matrix],
}

static CATALOG: [Shape; 7] = [
    Shape { kind: PieceKind::I, states: I_STATES },
    Shape { kind: PieceKind::J, states: J_STATES },
    Shape { kind: PieceKind::L, states: L_STATES },
    Shape { kind: PieceKind::O, states: O_STATES },
    Shape { kind: PieceKind::S, states: S_STATES },
    Shape { kind: PieceKind::T, states: T_STATES },
    Shape { kind: PieceKind::Z, states: Z_STATES },
];

/// Every shape in the catalog, in [`PieceKind::ALL`] order
pub fn catalog() -> &'static [Shape] {
    &CATALOG
}

/// Look up the shape for a piece kind
pub fn shape(kind: PieceKind) -> &'static Shape {
    match kind {
        PieceKind::I => &CATALOG[0],
        PieceKind::J => &CATALOG[1],
        PieceKind::L => &CATALOG[2],
        PieceKind::O => &CATALOG[3],
        PieceKind::S => &CATALOG[4],
        PieceKind::T => &CATALOG[5],
        PieceKind::Z => &CATALOG[6],
    }
}

pub fn rotation_count(kind: PieceKind) -> usize {
    shape(kind).rotation_count()
}

/// Relative-offset matrix of `kind` in the given rotation state
pub fn cells_at(kind: PieceKind, rotation: usize) -> Result<Matrix> {
    shape(kind).cells_at(rotation)
}

impl Shape {
    pub fn rotation_count(&self) -> usize {
        self.states.len()
    }

    /// Highest valid rotation index
    pub fn max_rotation(&self) -> usize {
        self.states.len() - 1
    }

    pub fn cells_at(&self, rotation: usize) -> Result<Matrix> {
        self.states
            .get(rotation)
            .copied()
            .ok_or(CoreError::InvalidRotation {
                kind: self.kind,
                rotation,
                count: self.states.len(),
            })
    }

    /// Rotation index that follows `rotation`, wrapping to 0
    pub fn next_rotation(&self, rotation: usize) -> usize {
        (rotation + 1) % self.states.len()
    }
}

/// Width of a matrix: its longest row
pub fn matrix_width(matrix: Matrix) -> usize {
    matrix.iter().map(|row| row.len()).max().unwrap_or(0)
}

pub fn matrix_height(matrix: Matrix) -> usize {
    matrix.len()
}

/// Relative (row, col) offsets of the filled cells of a matrix
pub fn filled_offsets(matrix: Matrix) -> impl Iterator<Item = (usize, usize)> {
    matrix.iter().enumerate().flat_map(|(i, row)| {
        row.iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == 1)
            .map(move |(j, _)| (i, j))
    })
}
