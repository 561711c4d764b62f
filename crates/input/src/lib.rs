//! Terminal input module (engine-facing).
//!
//! Independent of any UI framework. Maps `crossterm` key events to logical
//! [`InputKey`]s and turns presses, releases and elapsed time into
//! [`crate::types::GameAction`]s with held-key repeat.

pub mod handler;
pub mod map;

pub use mattris_types as types;

pub use handler::InputHandler;
pub use map::{map_key, should_quit, InputKey};
