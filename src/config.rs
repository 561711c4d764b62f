//! Runtime configuration for the terminal game.
//!
//! Read from a JSON file whose path is the first command-line argument or the
//! `MATTRIS_CONFIG` environment variable. Every field is optional:
//!
//! ```json
//! {
//!   "game": { "rows": 20, "cols": 10, "gravity_ms": [1000, 750, 500], "seed": 42 },
//!   "input": { "repeat_delay_ms": 200, "repeat_interval_ms": 200 }
//! }
//! ```
//!
//! `MATTRIS_SEED` overrides `game.seed`.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::core::GameConfig;
use crate::input::handler::DEFAULT_KEY_RELEASE_TIMEOUT_MS;
use crate::input::InputHandler;
use crate::types::{REPEAT_DELAY_MS, REPEAT_INTERVAL_MS};

pub const CONFIG_ENV: &str = "MATTRIS_CONFIG";
pub const SEED_ENV: &str = "MATTRIS_SEED";

/// Held-key repeat timing
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub repeat_delay_ms: u32,
    pub repeat_interval_ms: u32,
    /// Treat a key as released after this long without a press event
    pub key_release_timeout_ms: u32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            repeat_delay_ms: REPEAT_DELAY_MS,
            repeat_interval_ms: REPEAT_INTERVAL_MS,
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }
}

impl InputConfig {
    pub fn handler(&self) -> InputHandler {
        InputHandler::with_config(self.repeat_delay_ms, self.repeat_interval_ms)
            .with_key_release_timeout_ms(self.key_release_timeout_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub input: InputConfig,
}

impl AppConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text).context("invalid config JSON")?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path`, or the defaults when there is none.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("in config {}", path.display()))
    }

    /// Resolve the config from the command line and environment.
    pub fn from_env() -> Result<Self> {
        let path = std::env::args_os()
            .nth(1)
            .or_else(|| std::env::var_os(CONFIG_ENV))
            .map(std::path::PathBuf::from);
        let seed = std::env::var(SEED_ENV).ok();
        Self::load(path.as_deref())?.with_seed_override(seed.as_deref())
    }

    pub fn with_seed_override(mut self, seed: Option<&str>) -> Result<Self> {
        if let Some(seed) = seed {
            let seed = seed
                .trim()
                .parse::<u64>()
                .with_context(|| format!("{SEED_ENV} must be an unsigned integer, got {seed:?}"))?;
            self.game.seed = Some(seed);
        }
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        self.game.validate()?;
        if self.input.repeat_interval_ms == 0 {
            bail!("input.repeat_interval_ms must be positive");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_all_defaults() {
        let config = AppConfig::from_json("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.input.repeat_delay_ms, 200);
        assert_eq!(config.game.rows, 20);
    }

    #[test]
    fn test_nested_fields_override_defaults() {
        let config = AppConfig::from_json(
            r#"{ "game": { "cols": 12, "quick_drop_ms": 30 }, "input": { "repeat_interval_ms": 80 } }"#,
        )
        .unwrap();
        assert_eq!(config.game.cols, 12);
        assert_eq!(config.game.quick_drop_ms, 30);
        assert_eq!(config.game.rows, 20);
        assert_eq!(config.input.repeat_interval_ms, 80);
        assert_eq!(config.input.repeat_delay_ms, 200);
    }

    #[test]
    fn test_invalid_game_config_is_rejected() {
        let err = AppConfig::from_json(r#"{ "game": { "gravity_ms": [100, 200] } }"#).unwrap_err();
        assert!(err.to_string().contains("non-increasing"), "{err}");
        assert!(AppConfig::from_json(r#"{ "input": { "repeat_interval_ms": 0 } }"#).is_err());
        assert!(AppConfig::from_json("[1, 2]").is_err());
    }

    #[test]
    fn test_seed_override() {
        let config = AppConfig::default().with_seed_override(Some(" 99 ")).unwrap();
        assert_eq!(config.game.seed, Some(99));

        let unchanged = AppConfig::default().with_seed_override(None).unwrap();
        assert_eq!(unchanged.game.seed, None);

        assert!(AppConfig::default().with_seed_override(Some("abc")).is_err());
    }

    #[test]
    fn test_missing_file_names_the_path() {
        let err = AppConfig::load(Some(Path::new("/nonexistent/mattris.json"))).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/mattris.json"));
    }

    #[test]
    fn test_no_path_means_defaults() {
        assert_eq!(AppConfig::load(None).unwrap(), AppConfig::default());
    }
}
