use rayon::prelude::*;
use std::collections::HashSet;
use std::time::Instant;

use crate::core::Token;
use crate::ranking::{Rank, RankedList, RankedWord};
use crate::similarity::SimilarityScorer;

/// Eligible-vocabulary size at which scoring switches to rayon
pub const PARALLEL_THRESHOLD: usize = 512;

/// Ranks a vocabulary by similarity to a secret word.
///
/// Every call recomputes the full ordering: secrets differ per game and
/// the vocabulary can be reloaded between requests.
#[derive(Debug, Clone)]
pub struct RankingEngine {
    scorer: SimilarityScorer,
    parallel_threshold: usize,
}

impl RankingEngine {
    pub fn new(scorer: SimilarityScorer) -> Self {
        Self {
            scorer,
            parallel_threshold: PARALLEL_THRESHOLD,
        }
    }

    /// Override the size at which scoring goes parallel
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    pub fn scorer(&self) -> &SimilarityScorer {
        &self.scorer
    }

    /// Full ranked list for `secret`, secret excluded.
    ///
    /// Repeated vocabulary entries are scored once, at their first position.
    pub fn ranked(&self, secret: &Token, vocabulary: &[Token]) -> RankedList {
        let start = Instant::now();

        let mut seen = HashSet::with_capacity(vocabulary.len());
        let eligible: Vec<&Token> = vocabulary
            .iter()
            .filter(|word| *word != secret && seen.insert(*word))
            .collect();

        let entries: Vec<RankedWord> = if eligible.len() >= self.parallel_threshold {
            eligible
                .par_iter()
                .map(|word| self.entry(word, secret))
                .collect()
        } else {
            eligible.iter().map(|word| self.entry(word, secret)).collect()
        };

        let ranked = RankedList::from_scored(entries);

        tracing::debug!(
            "Ranked {} words against '{}' in {:.2}ms",
            ranked.len(),
            secret,
            start.elapsed().as_secs_f64() * 1000.0
        );

        ranked
    }

    /// 1-based rank of `guess` among the vocabulary, secret excluded.
    ///
    /// `None` when the guess is the secret itself or not in the vocabulary.
    pub fn rank_of(&self, secret: &Token, guess: &Token, vocabulary: &[Token]) -> Option<Rank> {
        if guess == secret || !vocabulary.contains(guess) {
            return None;
        }
        self.ranked(secret, vocabulary).rank_of(guess)
    }

    /// The `k` words most similar to `secret`
    pub fn top_k(&self, secret: &Token, vocabulary: &[Token], k: usize) -> RankedList {
        if k == 0 {
            return RankedList::default();
        }
        self.ranked(secret, vocabulary).truncate(k)
    }

    fn entry(&self, word: &Token, secret: &Token) -> RankedWord {
        let similarity = self.scorer.score_tokens(word, secret).score();
        RankedWord::new(word.clone(), similarity)
    }
}
