//! Terminal "game renderer" module.
//!
//! Renders a [`core::GameSnapshot`] into a framebuffer of styled characters and
//! flushes it to the terminal with crossterm, redrawing only the cells that
//! changed since the previous frame. No widget toolkit is involved.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use mattris_core as core;
pub use mattris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
