use std::path::Path;
use std::sync::{Arc, RwLock};
use std::time::Instant;

use crate::config::{EngineConfig, DEFAULT_HINT_COUNT};
use crate::core::{GuessOutcome, Token, Vocabulary};
use crate::embedding::{FastTextSource, LoadOutcome, VectorSource};
use crate::error::{Result, WordGameError};
use crate::ranking::{Rank, RankedList, RankingEngine};
use crate::session::{GameSession, MemorySessionStore, SessionStats, SessionStore};
use crate::similarity::{Scored, SimilarityScorer};

/// Main word game orchestrator
pub struct GameEngine {
    sessions: Arc<dyn SessionStore>,
    ranking: RankingEngine,
    vocabulary: RwLock<Vocabulary>,
    fasttext: Option<Arc<FastTextSource>>,
    hint_count: usize,
}

impl GameEngine {
    /// Create engine from configuration.
    ///
    /// Loads the word list (built-in words if missing) and tries to load the
    /// fastText model; without a model, scoring uses character overlap.
    pub async fn new(config: &EngineConfig) -> Result<Self> {
        let vocabulary = Vocabulary::load_or_builtin(&config.words_path);

        let fasttext = Arc::new(FastTextSource::new());
        let loader = Arc::clone(&fasttext);
        let model_path = config.model_path.clone();
        let outcome = tokio::task::spawn_blocking(move || loader.load(&model_path)).await?;

        match &outcome {
            LoadOutcome::Loaded(model) => {
                tracing::info!("✅ Embedding scorer initialized ({} dims)", model.dims());
            }
            LoadOutcome::Unavailable(e) => {
                tracing::warn!("⚠️ Embedding model unavailable, using character overlap: {}", e);
            }
        }

        let mut engine = Self::with_parts(
            Arc::clone(&fasttext) as Arc<dyn VectorSource>,
            vocabulary,
            Arc::new(MemorySessionStore::new()),
        );
        engine.fasttext = Some(fasttext);
        engine.hint_count = config.hint_count;

        Ok(engine)
    }

    /// Assemble an engine from explicit collaborators
    pub fn with_parts(
        source: Arc<dyn VectorSource>,
        vocabulary: Vocabulary,
        sessions: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            sessions,
            ranking: RankingEngine::new(SimilarityScorer::new(source)),
            vocabulary: RwLock::new(vocabulary),
            fasttext: None,
            hint_count: DEFAULT_HINT_COUNT,
        }
    }

    pub fn with_hint_count(mut self, hint_count: usize) -> Self {
        self.hint_count = hint_count;
        self
    }

    pub fn hint_count(&self) -> usize {
        self.hint_count
    }

    pub fn model_available(&self) -> bool {
        self.ranking.scorer().is_model_available()
    }

    /// Snapshot of the current vocabulary
    pub fn vocabulary(&self) -> Vocabulary {
        self.vocabulary
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Replace the vocabulary; running computations keep their snapshot
    pub fn set_vocabulary(&self, vocabulary: Vocabulary) {
        *self.vocabulary.write().unwrap_or_else(|e| e.into_inner()) = vocabulary;
    }

    /// Reload the word list from disk, returning the new word count
    pub async fn reload_vocabulary(&self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref().to_path_buf();
        let vocabulary = tokio::task::spawn_blocking(move || Vocabulary::load(&path)).await??;

        let size = vocabulary.len();
        self.set_vocabulary(vocabulary);
        tracing::info!("🔄 Vocabulary reloaded ({} words)", size);

        Ok(size)
    }

    /// Retry loading the fastText model; returns whether a model is loaded
    pub async fn load_model(&self, path: impl AsRef<Path>) -> Result<bool> {
        let fasttext = self.fasttext.clone().ok_or_else(|| {
            WordGameError::Other("engine was not built with a fastText source".to_string())
        })?;
        let path = path.as_ref().to_path_buf();

        let outcome = tokio::task::spawn_blocking(move || fasttext.load(&path)).await?;
        Ok(outcome.is_loaded())
    }

    /// Start a new game with a random secret word
    pub async fn new_game(&self) -> Result<GameSession> {
        let secret = {
            let vocabulary = self.vocabulary();
            let mut rng = rand::thread_rng();
            vocabulary.random_word(&mut rng).cloned()
        }
        .ok_or(WordGameError::EmptyVocabulary)?;

        let session = GameSession::new(secret);
        self.sessions.insert(session.clone()).await?;

        tracing::debug!("New game {}", session.id);
        Ok(session)
    }

    /// Score a guess for a running game
    pub async fn score_guess(&self, game_id: &str, guess: &str) -> Result<GuessOutcome> {
        let start = Instant::now();

        let guess = Token::new(guess);
        let secret = self.secret_for(game_id).await?;
        let vocabulary = self.vocabulary();
        let ranking = self.ranking.clone();

        let outcome = tokio::task::spawn_blocking(move || {
            evaluate(&ranking, &secret, guess, &vocabulary)
        })
        .await?;

        self.sessions.record_guess(game_id, outcome.is_correct).await?;

        tracing::info!(
            "🎯 {} → {} ({:.1}ms)",
            game_id,
            outcome.display(),
            start.elapsed().as_secs_f64() * 1000.0
        );

        Ok(outcome)
    }

    /// The `count` vocabulary words closest to a game's secret
    pub async fn hints(&self, game_id: &str, count: Option<usize>) -> Result<RankedList> {
        let secret = self.secret_for(game_id).await?;
        let vocabulary = self.vocabulary();
        let ranking = self.ranking.clone();
        let k = count.unwrap_or(self.hint_count);

        let hints = tokio::task::spawn_blocking(move || {
            ranking.top_k(&secret, vocabulary.as_slice(), k)
        })
        .await?;

        Ok(hints)
    }

    /// Score two words directly, without a game
    pub fn score_words(&self, secret: &str, guess: &str) -> Scored {
        self.ranking.scorer().score_detailed(guess, secret)
    }

    /// Rank of `guess` for `secret` over the current vocabulary
    pub fn rank_word(&self, secret: &str, guess: &str) -> Option<Rank> {
        let vocabulary = self.vocabulary();
        self.ranking
            .rank_of(&Token::new(secret), &Token::new(guess), vocabulary.as_slice())
    }

    /// Top `k` words for `secret` over the current vocabulary
    pub fn hints_for(&self, secret: &str, k: usize) -> RankedList {
        let vocabulary = self.vocabulary();
        self.ranking
            .top_k(&Token::new(secret), vocabulary.as_slice(), k)
    }

    /// Get session statistics
    pub async fn session_stats(&self) -> Result<SessionStats> {
        self.sessions.stats().await
    }

    /// Drop games older than `max_age_hours`
    pub async fn cleanup_sessions(&self, max_age_hours: i64) -> Result<u64> {
        self.sessions
            .cleanup(chrono::Duration::hours(max_age_hours))
            .await
    }

    async fn secret_for(&self, game_id: &str) -> Result<Token> {
        self.sessions
            .secret_word_for(game_id)
            .await?
            .ok_or_else(|| WordGameError::SessionNotFound(game_id.to_string()))
    }
}

/// Score and rank one guess, sharing a single ranking pass
fn evaluate(
    ranking: &RankingEngine,
    secret: &Token,
    guess: Token,
    vocabulary: &Vocabulary,
) -> GuessOutcome {
    let scored = ranking.scorer().score_tokens(&guess, secret);
    let similarity = scored.score();
    let is_correct = &guess == secret;

    let rank = if !is_correct && vocabulary.contains(&guess) {
        ranking
            .ranked(secret, vocabulary.as_slice())
            .rank_of(&guess)
    } else {
        None
    };

    let ranked_words = vocabulary.len() - usize::from(vocabulary.contains(secret));

    GuessOutcome {
        guess,
        similarity,
        score: similarity.points(),
        is_correct,
        rank,
        method: scored.method(),
        ranked_words,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ScoringMethod, SimilarityScore};
    use std::io::Write;

    fn fallback_engine(words: &[&str]) -> GameEngine {
        GameEngine::with_parts(
            Arc::new(FastTextSource::new()),
            Vocabulary::from_words(words),
            Arc::new(MemorySessionStore::new()),
        )
    }

    async fn start_with_secret(engine: &GameEngine, secret: &str) -> String {
        let session = GameSession::new(Token::new(secret));
        let id = session.id.clone();
        engine.sessions.insert(session).await.unwrap();
        id
    }

    #[tokio::test]
    async fn test_engine_creation_without_model() {
        let dir = tempfile::tempdir().unwrap();
        let mut words = std::fs::File::create(dir.path().join("words.txt")).unwrap();
        writeln!(words, "dog\ncat\nwolf").unwrap();

        let config = EngineConfig::default()
            .with_model_path(dir.path().join("cc.en.300.bin"))
            .with_words_path(dir.path().join("words.txt"));

        let engine = GameEngine::new(&config).await.unwrap();
        assert!(!engine.model_available());
        assert_eq!(engine.vocabulary().len(), 3);
        assert!(!engine.load_model(dir.path().join("still-missing.bin")).await.unwrap());
    }

    #[tokio::test]
    async fn test_new_game_picks_vocabulary_word() {
        let engine = fallback_engine(&["dog", "cat", "wolf"]);
        let session = engine.new_game().await.unwrap();

        assert!(engine.vocabulary().contains(&session.secret));
        assert_eq!(
            engine.sessions.secret_word_for(&session.id).await.unwrap(),
            Some(session.secret)
        );
    }

    #[tokio::test]
    async fn test_new_game_empty_vocabulary() {
        let engine = fallback_engine(&[]);
        let err = engine.new_game().await.unwrap_err();
        assert!(matches!(err, WordGameError::EmptyVocabulary));
    }

    #[tokio::test]
    async fn test_score_guess() {
        let engine = fallback_engine(&["dog", "cat", "wolf"]);
        let id = start_with_secret(&engine, "dog").await;

        let outcome = engine.score_guess(&id, " Wolf ").await.unwrap();
        assert_eq!(outcome.guess.as_str(), "wolf");
        assert_eq!(outcome.score, 17);
        assert!(!outcome.is_correct);
        assert_eq!(outcome.rank, Some(1));
        assert_eq!(outcome.method, ScoringMethod::Fallback);
        assert_eq!(outcome.ranked_words, 2);

        let outcome = engine.score_guess(&id, "cat").await.unwrap();
        assert_eq!(outcome.similarity, SimilarityScore::ZERO);
        assert_eq!(outcome.rank, Some(2));
    }

    #[tokio::test]
    async fn test_correct_guess() {
        let engine = fallback_engine(&["dog", "cat", "wolf"]);
        let id = start_with_secret(&engine, "dog").await;

        let outcome = engine.score_guess(&id, "DOG").await.unwrap();
        assert!(outcome.is_correct);
        assert_eq!(outcome.score, 100);
        assert_eq!(outcome.method, ScoringMethod::Exact);
        assert_eq!(outcome.rank, None);

        let session = engine.sessions.get(&id).await.unwrap().unwrap();
        assert!(session.solved);
        assert_eq!(session.guesses, 1);
    }

    #[tokio::test]
    async fn test_guess_outside_vocabulary() {
        let engine = fallback_engine(&["dog", "cat", "wolf"]);
        let id = start_with_secret(&engine, "dog").await;

        let outcome = engine.score_guess(&id, "fox").await.unwrap();
        assert_eq!(outcome.rank, None);
        assert!(outcome.similarity.value() > 0.0);
    }

    #[tokio::test]
    async fn test_score_guess_errors() {
        let engine = fallback_engine(&["dog"]);
        let id = start_with_secret(&engine, "dog").await;

        let err = engine.score_guess("unknown", "dog").await.unwrap_err();
        assert!(matches!(err, WordGameError::SessionNotFound(_)));

        // Still a live game afterwards
        assert!(engine.score_guess(&id, "dog").await.unwrap().is_correct);
    }

    #[tokio::test]
    async fn test_empty_guess_scores_zero() {
        let engine = fallback_engine(&["dog", "cat", "wolf"]);
        let id = start_with_secret(&engine, "dog").await;

        for guess in ["", "   "] {
            let outcome = engine.score_guess(&id, guess).await.unwrap();
            assert_eq!(outcome.score, 0);
            assert_eq!(outcome.similarity, SimilarityScore::ZERO);
            assert_eq!(outcome.rank, None);
            assert!(!outcome.is_correct);
            assert_eq!(outcome.method, ScoringMethod::Fallback);
        }

        let session = engine.sessions.get(&id).await.unwrap().unwrap();
        assert_eq!(session.guesses, 2);
        assert!(!session.solved);
    }

    #[tokio::test]
    async fn test_hints() {
        let engine = fallback_engine(&["dog", "cat", "wolf"]).with_hint_count(1);
        let id = start_with_secret(&engine, "dog").await;

        let hints = engine.hints(&id, None).await.unwrap();
        assert_eq!(hints.len(), 1);
        assert_eq!(hints.as_slice()[0].word.as_str(), "wolf");

        let hints = engine.hints(&id, Some(5)).await.unwrap();
        assert_eq!(hints.len(), 2);
    }

    #[tokio::test]
    async fn test_reload_vocabulary() {
        let engine = fallback_engine(&["dog"]);
        let before = engine.vocabulary();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "river\nocean\nlake").unwrap();

        let size = engine.reload_vocabulary(file.path()).await.unwrap();
        assert_eq!(size, 3);
        assert_eq!(engine.vocabulary().len(), 3);
        // Earlier snapshots are unaffected
        assert_eq!(before.len(), 1);

        assert!(engine.reload_vocabulary("/nonexistent/words.txt").await.is_err());
        assert_eq!(engine.vocabulary().len(), 3);
    }

    #[test]
    fn test_direct_queries() {
        let engine = fallback_engine(&["apple", "banana", "cherry"]);

        let scored = engine.score_words("apple", "banana");
        assert!((scored.score().value() - 1.0 / 6.0).abs() < 1e-12);
        assert_eq!(engine.rank_word("apple", "apple"), None);
        assert_eq!(engine.hints_for("apple", 5).len(), 2);
    }
}
