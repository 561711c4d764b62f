//! Game configuration
//!
//! Board size and the gravity schedule are tunable; everything else about the
//! rules is fixed. Missing fields take their defaults when deserialized.

use serde::Deserialize;

use crate::error::{CoreError, Result};
use crate::types::{BOARD_COLS, BOARD_ROWS, GRAVITY_INTERVALS_MS, MAX_PIECE_SIZE, QUICK_DROP_MS};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    /// Drop interval per level in ms; entry 0 is level 1, the last entry
    /// covers every higher level. Must be non-increasing.
    pub gravity_ms: Vec<u32>,
    /// Drop interval while quick drop is held
    pub quick_drop_ms: u32,
    /// Piece RNG seed; fresh entropy when absent
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: BOARD_ROWS,
            cols: BOARD_COLS,
            gravity_ms: GRAVITY_INTERVALS_MS.to_vec(),
            quick_drop_ms: QUICK_DROP_MS,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        // Pieces spawn at column cols / 2, so the right half must fit the
        // widest state.
        if self.rows < MAX_PIECE_SIZE || self.cols < 2 * MAX_PIECE_SIZE {
            return Err(CoreError::InvalidConfig(format!(
                "board {}x{} cannot spawn every piece (need at least {MAX_PIECE_SIZE}x{})",
                self.rows,
                self.cols,
                2 * MAX_PIECE_SIZE
            )));
        }
        if self.gravity_ms.is_empty() {
            return Err(CoreError::InvalidConfig("gravity_ms is empty".into()));
        }
        if self.gravity_ms.contains(&0) {
            return Err(CoreError::InvalidConfig("gravity_ms contains a zero interval".into()));
        }
        if let Some(w) = self.gravity_ms.windows(2).find(|w| w[1] > w[0]) {
            return Err(CoreError::InvalidConfig(format!(
                "gravity_ms must be non-increasing, found {} then {}",
                w[0], w[1]
            )));
        }
        if self.quick_drop_ms == 0 {
            return Err(CoreError::InvalidConfig("quick_drop_ms must be positive".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert_eq!((config.rows, config.cols), (20, 10));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: GameConfig =
            serde_json::from_str(r#"{ "cols": 12, "seed": 7 }"#).unwrap();
        assert_eq!(config.cols, 12);
        assert_eq!(config.rows, BOARD_ROWS);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.gravity_ms, GRAVITY_INTERVALS_MS.to_vec());
    }

    #[test]
    fn test_validate_rejects_bad_tables() {
        let increasing = GameConfig {
            gravity_ms: vec![500, 800],
            ..GameConfig::default()
        };
        assert!(matches!(increasing.validate(), Err(CoreError::InvalidConfig(_))));

        let empty = GameConfig {
            gravity_ms: vec![],
            ..GameConfig::default()
        };
        assert!(empty.validate().is_err());

        let zero = GameConfig {
            gravity_ms: vec![100, 0],
            ..GameConfig::default()
        };
        assert!(zero.validate().is_err());

        let short = GameConfig {
            rows: 3,
            ..GameConfig::default()
        };
        assert!(short.validate().is_err());

        let narrow = GameConfig {
            cols: 7,
            ..GameConfig::default()
        };
        assert!(narrow.validate().is_err());

        let no_quick = GameConfig {
            quick_drop_ms: 0,
            ..GameConfig::default()
        };
        assert!(no_quick.validate().is_err());
    }
}
