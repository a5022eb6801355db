pub mod memory;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::Token;
use crate::error::Result;

pub use memory::MemorySessionStore;

/// Length of generated game ids
pub const SESSION_ID_LEN: usize = 22;

/// Trait for game session storage
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Store a new session (replaces any session with the same id)
    async fn insert(&self, session: GameSession) -> Result<()>;

    /// Get session by id
    async fn get(&self, id: &str) -> Result<Option<GameSession>>;

    /// Secret word of a game, if the game exists
    async fn secret_word_for(&self, id: &str) -> Result<Option<Token>> {
        Ok(self.get(id).await?.map(|session| session.secret))
    }

    /// Count a guess against a session
    async fn record_guess(&self, id: &str, correct: bool) -> Result<()>;

    /// Get session statistics
    async fn stats(&self) -> Result<SessionStats>;

    /// Drop sessions created more than `max_age` ago
    async fn cleanup(&self, max_age: chrono::Duration) -> Result<u64>;
}

/// One game in progress
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    pub id: String,
    pub secret: Token,
    pub created_at: DateTime<Utc>,
    pub guesses: u32,
    pub solved: bool,
}

impl GameSession {
    /// New session with a freshly generated id
    pub fn new(secret: Token) -> Self {
        Self::with_id(generate_session_id(), secret)
    }

    pub fn with_id(id: impl Into<String>, secret: Token) -> Self {
        Self {
            id: id.into(),
            secret,
            created_at: Utc::now(),
            guesses: 0,
            solved: false,
        }
    }
}

/// Session statistics
#[derive(Debug, Clone, Default, Serialize)]
pub struct SessionStats {
    pub total_sessions: u64,
    pub solved_sessions: u64,
    pub total_guesses: u64,
    pub avg_guesses: f64,
    pub oldest_session: Option<DateTime<Utc>>,
    pub newest_session: Option<DateTime<Utc>>,
}

/// Random URL-safe game id
pub fn generate_session_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(SESSION_ID_LEN)
        .map(char::from)
        .collect()
}
