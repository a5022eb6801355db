use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the word game engine
#[derive(Error, Debug)]
pub enum WordGameError {
    /// Embedding model could not be found at the configured path
    #[error("Embedding model unavailable at {path}: {reason}")]
    ModelUnavailable { path: PathBuf, reason: String },

    /// Embedding model file exists but could not be read
    #[error("Failed to load embedding model: {0}")]
    ModelLoad(String),

    /// Vector lookup failed for a single token
    #[error("Vector lookup failed for '{token}': {message}")]
    Vector { token: String, message: String },

    /// Filesystem errors (word lists, model files)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Unknown game id
    #[error("Game not found: {0}")]
    SessionNotFound(String),

    /// No words available to pick a secret from
    #[error("Vocabulary is empty")]
    EmptyVocabulary,

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Blocking task panicked or was cancelled
    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl From<String> for WordGameError {
    fn from(s: String) -> Self {
        WordGameError::Other(s)
    }
}

impl From<&str> for WordGameError {
    fn from(s: &str) -> Self {
        WordGameError::Other(s.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, WordGameError>;
