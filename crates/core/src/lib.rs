//! Core game logic - pure, deterministic, and testable
//!
//! Rules, state and simulation for a falling-block puzzle. Nothing here
//! touches the terminal, the clock or the OS; time arrives as elapsed
//! milliseconds and randomness as an injected [`rand::Rng`].
//!
//! # Module Structure
//!
//! - [`grid`]: occupancy matrix addressed as (row, col), row 0 at the top
//! - [`shapes`]: the seven piece kinds and their rotation tables
//! - [`checker`]: bounds and overlap validation, the only move gatekeeper
//! - [`piece`]: active/next pieces and validated moves
//! - [`line_clear`]: full-row detection and sequential collapse
//! - [`scoring`]: clear multipliers, levels and the gravity schedule
//! - [`timer`]: frame-driven gravity countdown
//! - [`game_state`]: the session aggregate and its phase machine
//!
//! # Example
//!
//! ```
//! use mattris_core::{Game, GameConfig};
//! use mattris_core::types::{GameAction, GamePhase};
//!
//! let mut game = Game::new(GameConfig::default().with_seed(7))?;
//! assert_eq!(game.phase(), GamePhase::GameOver);
//!
//! game.apply_action(GameAction::TogglePauseOrStart);
//! assert_eq!(game.phase(), GamePhase::Running);
//!
//! // One second at level 1 drops the piece one row
//! assert!(game.tick(1000));
//! assert_eq!(game.active().unwrap().row(), 1);
//! # Ok::<(), mattris_core::error::CoreError>(())
//! ```

#[macro_use]
extern crate tracing;

pub mod checker;
pub mod config;
pub mod error;
pub mod game_state;
pub mod grid;
pub mod line_clear;
pub mod piece;
pub mod scoring;
pub mod shapes;
pub mod snapshot;
pub mod timer;

pub use mattris_types as types;

pub use checker::is_valid_position;
pub use config::GameConfig;
pub use error::{CoreError, Result};
pub use game_state::{DropOutcome, Game, LockEvent};
pub use grid::Grid;
pub use piece::{Piece, PieceController};
pub use snapshot::GameSnapshot;
pub use timer::DropTimer;
