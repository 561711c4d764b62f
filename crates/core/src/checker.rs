//! Collision/validity checker
//!
//! The single gatekeeper for piece legality. Every move, rotation and drop is
//! approved here and nowhere else.

use crate::grid::Grid;
use crate::shapes::{self, filled_offsets, matrix_height, matrix_width, Matrix};
use crate::types::PieceKind;

/// Check whether `kind` in `rotation` anchored at (`row`, `col`) fits the grid.
///
/// The bounding box must lie inside the grid on all four sides (the top edge
/// is enforced like the floor, so nothing may hang above row 0) and no filled
/// cell may overlap an occupied grid cell. An out-of-range rotation is never
/// valid.
pub fn is_valid_position(kind: PieceKind, rotation: usize, row: i32, col: i32, grid: &Grid) -> bool {
    match shapes::cells_at(kind, rotation) {
        Ok(matrix) => fits(matrix, row, col, grid),
        Err(_) => false,
    }
}

/// Same check for a raw matrix
pub fn fits(matrix: Matrix, row: i32, col: i32, grid: &Grid) -> bool {
    let width = matrix_width(matrix) as i64;
    let height = matrix_height(matrix) as i64;
    let (row, col) = (row as i64, col as i64);

    if col < 0 || col + width > grid.cols() as i64 {
        return false;
    }
    if row < 0 || row + height > grid.rows() as i64 {
        return false;
    }

    let (row, col) = (row as usize, col as usize);
    filled_offsets(matrix).all(|(i, j)| {
        // In range after the bounds check; treat a failed lookup as blocked.
        !grid.is_occupied(row + i, col + j).unwrap_or(true)
    })
}
