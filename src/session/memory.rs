use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::{Result, WordGameError};
use crate::session::{GameSession, SessionStats, SessionStore};

/// In-process session store; sessions are lost on restart
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    sessions: Mutex<HashMap<String, GameSession>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, GameSession>> {
        self.sessions.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn insert(&self, session: GameSession) -> Result<()> {
        self.lock().insert(session.id.clone(), session);
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<GameSession>> {
        Ok(self.lock().get(id).cloned())
    }

    async fn record_guess(&self, id: &str, correct: bool) -> Result<()> {
        let mut sessions = self.lock();
        let session = sessions
            .get_mut(id)
            .ok_or_else(|| WordGameError::SessionNotFound(id.to_string()))?;

        session.guesses = session.guesses.saturating_add(1);
        session.solved |= correct;
        Ok(())
    }

    async fn stats(&self) -> Result<SessionStats> {
        let sessions = self.lock();

        let total_sessions = sessions.len() as u64;
        let solved_sessions = sessions.values().filter(|s| s.solved).count() as u64;
        let total_guesses: u64 = sessions.values().map(|s| s.guesses as u64).sum();

        let avg_guesses = if total_sessions > 0 {
            total_guesses as f64 / total_sessions as f64
        } else {
            0.0
        };

        Ok(SessionStats {
            total_sessions,
            solved_sessions,
            total_guesses,
            avg_guesses,
            oldest_session: sessions.values().map(|s| s.created_at).min(),
            newest_session: sessions.values().map(|s| s.created_at).max(),
        })
    }

    async fn cleanup(&self, max_age: chrono::Duration) -> Result<u64> {
        let cutoff = Utc::now() - max_age;
        let mut sessions = self.lock();

        let before = sessions.len();
        sessions.retain(|_, session| session.created_at >= cutoff);

        Ok((before - sessions.len()) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Token;

    #[tokio::test]
    async fn test_store_create() {
        let store = MemorySessionStore::new();
        let stats = store.stats().await.unwrap();
        assert_eq!(stats.total_sessions, 0);
        assert!(stats.oldest_session.is_none());
    }

    #[tokio::test]
    async fn test_insert_and_lookup() {
        let store = MemorySessionStore::new();
        store
            .insert(GameSession::with_id("abc", Token::new("River")))
            .await
            .unwrap();

        let secret = store.secret_word_for("abc").await.unwrap();
        assert_eq!(secret, Some(Token::new("river")));
        assert!(store.secret_word_for("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_record_guess() {
        let store = MemorySessionStore::new();
        store
            .insert(GameSession::with_id("g1", Token::new("temple")))
            .await
            .unwrap();

        store.record_guess("g1", false).await.unwrap();
        store.record_guess("g1", true).await.unwrap();

        let session = store.get("g1").await.unwrap().unwrap();
        assert_eq!(session.guesses, 2);
        assert!(session.solved);

        let err = store.record_guess("nope", false).await.unwrap_err();
        assert!(matches!(err, WordGameError::SessionNotFound(_)));
    }

    #[tokio::test]
    async fn test_stats() {
        let store = MemorySessionStore::new();
        store.insert(GameSession::with_id("a", Token::new("apple"))).await.unwrap();
        store.insert(GameSession::with_id("b", Token::new("banana"))).await.unwrap();

        store.record_guess("a", false).await.unwrap();
        store.record_guess("a", true).await.unwrap();
        store.record_guess("b", false).await.unwrap();

        let stats = store.stats().await.unwrap();
        assert_eq!(stats.total_sessions, 2);
        assert_eq!(stats.solved_sessions, 1);
        assert_eq!(stats.total_guesses, 3);
        assert_eq!(stats.avg_guesses, 1.5);
        assert!(stats.oldest_session.is_some());
        assert!(stats.newest_session.is_some());
    }

    #[tokio::test]
    async fn test_cleanup() {
        let store = MemorySessionStore::new();

        let mut old = GameSession::with_id("old", Token::new("forest"));
        old.created_at = Utc::now() - chrono::Duration::days(3);
        store.insert(old).await.unwrap();
        store.insert(GameSession::with_id("new", Token::new("garden"))).await.unwrap();

        let deleted = store.cleanup(chrono::Duration::days(1)).await.unwrap();
        assert_eq!(deleted, 1);
        assert!(store.get("old").await.unwrap().is_none());
        assert!(store.get("new").await.unwrap().is_some());
    }
}
