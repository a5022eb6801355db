use serde::{Deserialize, Serialize};

use crate::core::{ScoringMethod, SimilarityScore, Token};

/// Result of scoring one guess against a game's secret word
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuessOutcome {
    /// Normalized guess
    pub guess: Token,

    /// Similarity to the secret (0.0 - 1.0)
    pub similarity: SimilarityScore,

    /// Game points, `round(similarity × 100)`
    pub score: u8,

    /// Guess equals the secret
    pub is_correct: bool,

    /// 1-based proximity rank among the vocabulary, if defined
    #[serde(default)]
    pub rank: Option<usize>,

    /// Scoring path used (exact, embedding, fallback)
    pub method: ScoringMethod,

    /// Number of ranked words the rank is out of
    pub ranked_words: usize,
}

impl GuessOutcome {
    /// Get display string for logging
    pub fn display(&self) -> String {
        match self.rank {
            Some(rank) => format!(
                "{} - {} pts (#{} of {}) [{}]",
                self.guess, self.score, rank, self.ranked_words, self.method
            ),
            None => format!("{} - {} pts [{}]", self.guess, self.score, self.method),
        }
    }
}
