//! Shared types module - plain data and constants
//!
//! This crate defines the vocabulary shared by the simulation core, the input
//! layer and the terminal renderer. Everything here is pure data with no
//! external dependencies.
//!
//! # Board Dimensions
//!
//! The canonical playfield is 20 rows by 10 columns. Coordinates are
//! `(row, col)` with row 0 at the top and column 0 at the left. Pieces spawn
//! at `(0, cols / 2)`.
//!
//! # Game Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Frame interval of the game loop (~60 FPS) |
//! | `GRAVITY_INTERVALS_MS` | 1000..100 | Drop interval per level |
//! | `QUICK_DROP_MS` | 50 | Drop interval while quick drop is held |
//! | `REPEAT_DELAY_MS` | 200 | Hold time before a movement key repeats |
//! | `REPEAT_INTERVAL_MS` | 200 | Cadence of repeated movement |
//!
//! # Examples
//!
//! ```
//! use mattris_types::{ColorId, GamePhase, PieceKind, BOARD_COLS, BOARD_ROWS};
//!
//! assert_eq!(PieceKind::T.as_str(), "T");
//! assert_eq!(PieceKind::ALL.len(), 7);
//! assert_eq!(ColorId::ALL.len(), 5);
//! assert_eq!(GamePhase::default(), GamePhase::GameOver);
//! assert_eq!((BOARD_ROWS, BOARD_COLS), (20, 10));
//! ```

/// Board height in cells (20 rows)
pub const BOARD_ROWS: usize = 20;

/// Board width in cells (10 columns)
pub const BOARD_COLS: usize = 10;

/// Tallest rotation state in the catalog; bounds the line-clear scan window.
pub const MAX_PIECE_SIZE: usize = 4;

/// Rows cleared per level step
pub const LINES_PER_LEVEL: u32 = 10;

/// Fixed frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Drop intervals by level (milliseconds per row)
///
/// Index 0 = level 1. Levels past the end of the table use the last entry.
pub const GRAVITY_INTERVALS_MS: [u32; 6] = [1000, 750, 500, 300, 200, 100];

/// Drop interval while the quick-drop input is held
pub const QUICK_DROP_MS: u32 = 50;

/// Hold time before a movement key starts repeating
pub const REPEAT_DELAY_MS: u32 = 200;

/// Interval between repeated movement actions
pub const REPEAT_INTERVAL_MS: u32 = 200;

/// Score multiplier by rows cleared in a single lock.
///
/// Index 0 and anything past 4 fall back to `1`.
pub const CLEAR_MULTIPLIERS: [u32; 5] = [1, 4, 10, 30, 120];

/// The seven piece kinds, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Single-letter name, used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::J => "J",
            PieceKind::L => "L",
            PieceKind::O => "O",
            PieceKind::S => "S",
            PieceKind::T => "T",
            PieceKind::Z => "Z",
        }
    }
}

/// Block colors. Chosen per piece independently of its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorId {
    Red,
    Blue,
    Green,
    Yellow,
    White,
}

impl ColorId {
    pub const ALL: [ColorId; 5] = [
        ColorId::Red,
        ColorId::Blue,
        ColorId::Green,
        ColorId::Yellow,
        ColorId::White,
    ];

    /// 24-bit RGB value of the color.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            ColorId::Red => (0xff, 0x00, 0x00),
            ColorId::Blue => (0x00, 0x00, 0xff),
            ColorId::Green => (0x00, 0x80, 0x00),
            ColorId::Yellow => (0xff, 0xff, 0x00),
            ColorId::White => (0xff, 0xff, 0xff),
        }
    }
}

/// A cell on the grid
///
/// - `None`: empty
/// - `Some(color)`: occupied by a locked block of that color
pub type Cell = Option<ColorId>;

/// Lifecycle phase of a game session.
///
/// `GameOver` doubles as the initial state: a fresh session waits there for
/// the start command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GamePhase {
    #[default]
    GameOver,
    Running,
    Paused,
}

/// Commands accepted by the game.
///
/// Each is ignored when the current phase does not permit it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one column left
    MoveLeft,
    /// Move piece one column right
    MoveRight,
    /// Advance the rotation state by one (wrapping)
    Rotate,
    /// Move piece one row down, locking it if it cannot move
    SoftDrop,
    /// Switch gravity to the quick-drop interval
    HardDropStart,
    /// Restore the level-derived gravity interval
    HardDropEnd,
    /// Start from `GameOver`, otherwise toggle between running and paused
    TogglePauseOrStart,
}
