//! Scoring module - clear points, level progression and gravity speed
//!
//! All functions are pure. A clear is scored with the level in effect before
//! the cleared lines are counted.

use crate::types::{CLEAR_MULTIPLIERS, LINES_PER_LEVEL};

/// Multiplier for clearing `row_count` rows in one lock
///
/// 1 → 4, 2 → 10, 3 → 30, 4 → 120. Zero or more than four rows cannot come
/// out of the scan window; they fall back to 1.
pub fn clear_multiplier(row_count: usize) -> u32 {
    match row_count {
        1..=4 => CLEAR_MULTIPLIERS[row_count],
        _ => CLEAR_MULTIPLIERS[0],
    }
}

/// Points awarded for a clear: `level * multiplier(row_count)`
pub fn score_for_clear(row_count: usize, level: u32) -> u32 {
    level.saturating_mul(clear_multiplier(row_count))
}

/// Level for a cumulative line count: `lines / 10 + 1`
pub fn level_for_lines(lines: u32) -> u32 {
    lines / LINES_PER_LEVEL + 1
}

/// Add this turn's cleared rows and derive the new level.
///
/// Returns `(new_lines_cleared, new_level)`.
pub fn update_progression(lines_cleared: u32, cleared_this_turn: u32) -> (u32, u32) {
    let lines = lines_cleared.saturating_add(cleared_this_turn);
    (lines, level_for_lines(lines))
}

/// Drop interval for a level from a non-increasing table
///
/// `table[0]` is level 1; levels past the end use the last entry. An empty
/// table yields `fallback_ms`.
pub fn gravity_interval_ms(level: u32, table: &[u32], fallback_ms: u32) -> u32 {
    let idx = (level.max(1) - 1) as usize;
    table
        .get(idx)
        .or_else(|| table.last())
        .copied()
        .unwrap_or(fallback_ms)
}
