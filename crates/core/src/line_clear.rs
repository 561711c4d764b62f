//! Line-clear engine - full-row detection and collapse
//!
//! Only rows a just-locked piece could have filled are scanned. The window
//! starts at the piece's top row and spans its height, or
//! [`MAX_PIECE_SIZE`] rows when the height is unknown.

use crate::grid::Grid;
use crate::types::MAX_PIECE_SIZE;

/// Full rows in `[from_row, min(from_row + span - 1, rows - 1)]`, ascending.
pub fn find_clearable_rows(from_row: usize, row_span: Option<usize>, grid: &Grid) -> Vec<usize> {
    let span = row_span.unwrap_or(MAX_PIECE_SIZE);
    if span == 0 || from_row >= grid.rows() {
        return Vec::new();
    }
    let last = (from_row + span - 1).min(grid.rows() - 1);

    (from_row..=last).filter(|&row| grid.is_row_full(row)).collect()
}

/// Clear each row and collapse everything above it down by one.
///
/// Rows are processed in the order given, each with its own full collapse
/// before the next: for a cleared row `r`, rows `r - 1 ..= 0` move down one
/// and row 0 ends up empty. Feed this the ascending output of
/// [`find_clearable_rows`]; collapsing an upper row first leaves lower
/// indices untouched, so each index still names the row it was found at.
pub fn clear_and_collapse(rows: &[usize], grid: &mut Grid) {
    for &row in rows {
        if row >= grid.rows() {
            continue;
        }
        grid.clear_row(row);
        for r in (1..=row).rev() {
            grid.copy_row(r - 1, r);
        }
        grid.clear_row(0);
    }
}
