pub mod engine;

use serde::{Deserialize, Serialize};

use crate::core::{SimilarityScore, Token};

pub use engine::{RankingEngine, PARALLEL_THRESHOLD};

/// 1-based position in a ranked list (secret word excluded)
pub type Rank = usize;

/// Vocabulary word with its similarity to the secret
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedWord {
    pub word: Token,
    pub similarity: SimilarityScore,
}

impl RankedWord {
    pub fn new(word: Token, similarity: SimilarityScore) -> Self {
        Self { word, similarity }
    }
}

/// Words ordered by similarity, highest first.
///
/// Ties keep their original vocabulary order, so the same inputs always
/// produce the same list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RankedList {
    entries: Vec<RankedWord>,
}

impl RankedList {
    /// Sort entries (given in vocabulary order) by similarity descending
    pub fn from_scored(mut entries: Vec<RankedWord>) -> Self {
        // sort_by is stable
        entries.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
        Self { entries }
    }

    /// 1-based rank of `word`, if present
    pub fn rank_of(&self, word: &Token) -> Option<Rank> {
        self.entries
            .iter()
            .position(|entry| &entry.word == word)
            .map(|idx| idx + 1)
    }

    /// First `k` entries
    pub fn top(&self, k: usize) -> RankedList {
        Self {
            entries: self.entries.iter().take(k).cloned().collect(),
        }
    }

    pub fn truncate(mut self, k: usize) -> Self {
        self.entries.truncate(k);
        self
    }

    /// Entry at a 1-based rank
    pub fn get(&self, rank: Rank) -> Option<&RankedWord> {
        rank.checked_sub(1).and_then(|idx| self.entries.get(idx))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RankedWord> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[RankedWord] {
        &self.entries
    }

    pub fn into_vec(self) -> Vec<RankedWord> {
        self.entries
    }
}

impl IntoIterator for RankedList {
    type Item = RankedWord;
    type IntoIter = std::vec::IntoIter<RankedWord>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a RankedList {
    type Item = &'a RankedWord;
    type IntoIter = std::slice::Iter<'a, RankedWord>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
