//! Error kinds raised by the simulation core.
//!
//! These all indicate a caller bypassed the validity checker or handed in a
//! broken config; normal play reports rejected moves as `false`, not errors.

use mattris_types::PieceKind;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("rotation {rotation} is out of range for {kind:?} ({count} states)")]
    InvalidRotation {
        kind: PieceKind,
        rotation: usize,
        count: usize,
    },

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T, E = CoreError> = std::result::Result<T, E>;
