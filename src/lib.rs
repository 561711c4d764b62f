//! Mattris (workspace facade crate).
//!
//! Re-exports the workspace crates under one name and owns the runtime
//! configuration of the terminal game.

pub mod config;

pub use mattris_core as core;
pub use mattris_input as input;
pub use mattris_term as term;
pub use mattris_types as types;

pub use config::{AppConfig, InputConfig};
