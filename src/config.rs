use serde::Deserialize;
use std::path::PathBuf;

use crate::error::{Result, WordGameError};

/// Default fastText model location (working directory)
pub const DEFAULT_MODEL_PATH: &str = "cc.en.300.bin";
/// Default word list location (working directory)
pub const DEFAULT_WORDS_PATH: &str = "words.txt";
pub const DEFAULT_HINT_COUNT: usize = 10;
pub const DEFAULT_PORT: u16 = 8000;

pub const ENV_MODEL_PATH: &str = "WORD_GAME_MODEL_PATH";
pub const ENV_WORDS_PATH: &str = "WORD_GAME_WORDS_PATH";
pub const ENV_HINT_COUNT: &str = "WORD_GAME_HINT_COUNT";
pub const ENV_PORT: &str = "PORT";

/// Engine configuration.
///
/// A missing model file is not a configuration error: the engine runs in
/// fallback mode.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub model_path: PathBuf,
    pub words_path: PathBuf,
    pub hint_count: usize,
    pub port: u16,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            words_path: PathBuf::from(DEFAULT_WORDS_PATH),
            hint_count: DEFAULT_HINT_COUNT,
            port: DEFAULT_PORT,
        }
    }
}

impl EngineConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup, falling back to defaults for unset keys
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(ENV_MODEL_PATH) {
            config.model_path = PathBuf::from(path);
        }
        if let Some(path) = lookup(ENV_WORDS_PATH) {
            config.words_path = PathBuf::from(path);
        }
        if let Some(raw) = lookup(ENV_HINT_COUNT) {
            config.hint_count = parse_number(ENV_HINT_COUNT, &raw)?;
        }
        if let Some(raw) = lookup(ENV_PORT) {
            config.port = parse_number(ENV_PORT, &raw)?;
        }

        Ok(config)
    }

    pub fn with_model_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.model_path = path.into();
        self
    }

    pub fn with_words_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.words_path = path.into();
        self
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| WordGameError::Config(format!("{} must be a number, got '{}'", key, raw)))
}
