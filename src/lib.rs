//! # Word Game Engine
//!
//! Semantic scoring engine for a hidden-word guessing game:
//! - fastText word vectors (subword-aware, so any word gets a vector)
//! - Cosine similarity remapped onto `[0, 1]`
//! - Character-overlap fallback when no model is available
//! - Exhaustive, deterministic ranking of a fixed vocabulary for
//!   proximity feedback and hints
//! - Multiple interfaces: Rust library, HTTP API, CLI
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use word_game_engine::{EngineConfig, GameEngine};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let engine = GameEngine::new(&EngineConfig::from_env()?).await?;
//!
//!     let game = engine.new_game().await?;
//!     let outcome = engine.score_guess(&game.id, "ocean").await?;
//!
//!     println!("{} points, rank {:?}", outcome.score, outcome.rank);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod core;
pub mod embedding;
pub mod engine;
pub mod error;
pub mod ranking;
pub mod session;
pub mod similarity;

// Re-export primary types
pub use config::EngineConfig;
pub use crate::core::{GuessOutcome, ScoringMethod, SimilarityScore, Token, Vocabulary};
pub use embedding::{FastTextSource, LoadOutcome, StaticVectorSource, Vector, VectorSource};
pub use engine::GameEngine;
pub use error::{Result, WordGameError};
pub use ranking::{Rank, RankedList, RankedWord, RankingEngine};
pub use session::{GameSession, MemorySessionStore, SessionStore};
pub use similarity::{Scored, SimilarityScorer};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
