use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Similarity between two tokens, always within `[0.0, 1.0]`.
///
/// Construction clamps out-of-range values and maps NaN to `0.0`, so a
/// `SimilarityScore` can never hold an undefined value.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct SimilarityScore(f64);

impl SimilarityScore {
    pub const ZERO: SimilarityScore = SimilarityScore(0.0);
    pub const EXACT: SimilarityScore = SimilarityScore(1.0);

    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            Self::ZERO
        } else {
            // `+ 0.0` turns -0.0 into 0.0 so `total_cmp` sees one zero
            Self(value.clamp(0.0, 1.0) + 0.0)
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Game points: `round(similarity × 100)`, in `0..=100`
    pub fn points(self) -> u8 {
        (self.0 * 100.0).round() as u8
    }

    pub fn is_exact(self) -> bool {
        self.0 >= 1.0
    }

    /// Total order over scores (never NaN, so this matches `partial_cmp`)
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl From<f64> for SimilarityScore {
    fn from(value: f64) -> Self {
        SimilarityScore::new(value)
    }
}

impl From<SimilarityScore> for f64 {
    fn from(score: SimilarityScore) -> Self {
        score.0
    }
}

impl fmt::Display for SimilarityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

/// Which path produced a similarity score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringMethod {
    /// Identical normalized tokens
    Exact,
    /// Cosine similarity of embedding vectors
    Embedding,
    /// Character-set Jaccard overlap
    Fallback,
}

impl ScoringMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoringMethod::Exact => "exact",
            ScoringMethod::Embedding => "embedding",
            ScoringMethod::Fallback => "fallback",
        }
    }
}

impl fmt::Display for ScoringMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
