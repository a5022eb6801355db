//! Pairwise word similarity.
//!
//! [`SimilarityScorer`] scores two words in `[0, 1]`: identical words score
//! `1.0` without touching the model, embedding vectors are compared by
//! cosine similarity remapped onto `[0, 1]`, and anything that prevents an
//! embedding comparison degrades to character-set Jaccard overlap. The
//! degradation is visible in the returned [`Scored`] value.

pub mod cosine;
pub mod fallback;

use std::sync::Arc;

use crate::core::{ScoringMethod, SimilarityScore, Token};
use crate::embedding::{FastTextSource, Vector, VectorSource};

pub use cosine::{cosine_similarity, remap_unit};
pub use fallback::jaccard_chars;

/// Why a score came from the fallback path
#[derive(Debug, Clone, PartialEq)]
pub enum FallbackReason {
    /// No embedding model is loaded
    ModelUnavailable,
    /// Vector lookup failed for this pair
    VectorError(String),
    /// One of the words is empty after normalization
    EmptyToken,
}

/// Outcome of scoring one pair of tokens
#[derive(Debug, Clone, PartialEq)]
pub enum Scored {
    /// Identical normalized tokens
    Exact,
    /// Computed from embedding vectors
    Embedding(SimilarityScore),
    /// Computed by character overlap
    Fallback {
        score: SimilarityScore,
        reason: FallbackReason,
    },
}

impl Scored {
    pub fn score(&self) -> SimilarityScore {
        match self {
            Scored::Exact => SimilarityScore::EXACT,
            Scored::Embedding(score) => *score,
            Scored::Fallback { score, .. } => *score,
        }
    }

    pub fn method(&self) -> ScoringMethod {
        match self {
            Scored::Exact => ScoringMethod::Exact,
            Scored::Embedding(_) => ScoringMethod::Embedding,
            Scored::Fallback { .. } => ScoringMethod::Fallback,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Scored::Fallback { .. })
    }
}

/// Scores word pairs against an injected vector source
#[derive(Clone)]
pub struct SimilarityScorer {
    source: Arc<dyn VectorSource>,
}

impl SimilarityScorer {
    pub fn new(source: Arc<dyn VectorSource>) -> Self {
        Self { source }
    }

    /// Scorer with no model loaded; always uses character overlap
    pub fn without_model() -> Self {
        Self::new(Arc::new(FastTextSource::new()))
    }

    pub fn source(&self) -> &Arc<dyn VectorSource> {
        &self.source
    }

    pub fn is_model_available(&self) -> bool {
        self.source.is_available()
    }

    /// Similarity of two raw words, in `[0, 1]`
    pub fn score(&self, a: &str, b: &str) -> SimilarityScore {
        self.score_detailed(a, b).score()
    }

    /// Like [`score`](Self::score) but reports which path was taken
    pub fn score_detailed(&self, a: &str, b: &str) -> Scored {
        self.score_tokens(&Token::new(a), &Token::new(b))
    }

    /// Score two already-normalized tokens
    pub fn score_tokens(&self, a: &Token, b: &Token) -> Scored {
        if a == b {
            return Scored::Exact;
        }

        if a.is_empty() || b.is_empty() {
            return Scored::Fallback {
                score: SimilarityScore::ZERO,
                reason: FallbackReason::EmptyToken,
            };
        }

        if !self.source.is_available() {
            return Self::fallback(a, b, FallbackReason::ModelUnavailable);
        }

        match self.vectors(a, b) {
            Ok((u, v)) => Scored::Embedding(Self::embedding_score(&u, &v)),
            Err(e) => {
                tracing::warn!("⚠️ {} lookup failed, using fallback: {}", self.source.name(), e);
                Self::fallback(a, b, FallbackReason::VectorError(e.to_string()))
            }
        }
    }

    fn vectors(&self, a: &Token, b: &Token) -> crate::error::Result<(Vector, Vector)> {
        let u = self.source.vector_of(a)?;
        let v = self.source.vector_of(b)?;

        if u.dims() != v.dims() {
            return Err(crate::error::WordGameError::Vector {
                token: b.to_string(),
                message: format!("dimension mismatch ({} vs {})", u.dims(), v.dims()),
            });
        }

        Ok((u, v))
    }

    /// Degenerate (zero-norm) vectors carry no direction and score 0.0
    fn embedding_score(u: &Vector, v: &Vector) -> SimilarityScore {
        // Skips remap_unit on purpose: zero-norm scores 0.0, not 0.5
        if u.norm() == 0.0 || v.norm() == 0.0 {
            return SimilarityScore::ZERO;
        }
        let cos = cosine_similarity(u.as_slice(), v.as_slice());
        SimilarityScore::new(remap_unit(cos))
    }

    fn fallback(a: &Token, b: &Token, reason: FallbackReason) -> Scored {
        Scored::Fallback {
            score: SimilarityScore::new(jaccard_chars(a.as_str(), b.as_str())),
            reason,
        }
    }
}

impl std::fmt::Debug for SimilarityScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimilarityScorer")
            .field("source", &self.source.name())
            .field("available", &self.source.is_available())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embedding::StaticVectorSource;

    fn scorer_with_vectors() -> SimilarityScorer {
        let source = StaticVectorSource::new()
            .with_vector("king", vec![0.9, 0.1, 0.3])
            .with_vector("queen", vec![0.8, 0.2, 0.35])
            .with_vector("carrot", vec![-0.5, 0.9, 0.0])
            .with_vector("void", vec![0.0, 0.0, 0.0])
            .with_vector("flat", vec![1.0, 0.0]);
        SimilarityScorer::new(Arc::new(source))
    }

    #[test]
    fn test_exact_match_bypasses_model() {
        let scorer = SimilarityScorer::without_model();
        assert_eq!(scorer.score_detailed("  Apple ", "APPLE"), Scored::Exact);
        assert_eq!(scorer.score("apple", "apple").value(), 1.0);

        // Not in the static table, still exact
        let scorer = scorer_with_vectors();
        assert_eq!(scorer.score("unicorn", "Unicorn"), SimilarityScore::EXACT);
    }

    #[test]
    fn test_fallback_without_model() {
        let scorer = SimilarityScorer::without_model();
        assert!(!scorer.is_model_available());

        let scored = scorer.score_detailed("apple", "banana");
        assert_eq!(scored.method(), ScoringMethod::Fallback);
        assert!(matches!(
            scored,
            Scored::Fallback { reason: FallbackReason::ModelUnavailable, .. }
        ));
        assert!((scored.score().value() - 1.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_fallback_is_deterministic() {
        let scorer = SimilarityScorer::without_model();
        let first = scorer.score("wolf", "dog");
        for _ in 0..10 {
            assert_eq!(scorer.score("wolf", "dog"), first);
        }
    }

    #[test]
    fn test_embedding_path() {
        let scorer = scorer_with_vectors();

        let related = scorer.score_detailed("king", "queen");
        let unrelated = scorer.score_detailed("king", "carrot");

        assert_eq!(related.method(), ScoringMethod::Embedding);
        assert_eq!(unrelated.method(), ScoringMethod::Embedding);
        assert!(related.score() > unrelated.score());
        assert!(related.score().value() < 1.0);
    }

    #[test]
    fn test_embedding_matches_remapped_cosine() {
        let scorer = scorer_with_vectors();
        let cos = cosine_similarity(&[0.9, 0.1, 0.3], &[-0.5, 0.9, 0.0]);
        let expected = (cos + 1.0) / 2.0;
        assert!((scorer.score("king", "carrot").value() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_zero_vector_scores_zero() {
        let scorer = scorer_with_vectors();
        let scored = scorer.score_detailed("void", "king");
        assert_eq!(scored, Scored::Embedding(SimilarityScore::ZERO));
    }

    #[test]
    fn test_vector_error_degrades_per_call() {
        let scorer = scorer_with_vectors();

        let scored = scorer.score_detailed("king", "kingdom");
        assert!(matches!(
            scored,
            Scored::Fallback { reason: FallbackReason::VectorError(_), .. }
        ));
        assert_eq!(scored.score().value(), jaccard_chars("king", "kingdom"));

        // The next call still uses the model
        assert_eq!(scorer.score_detailed("king", "queen").method(), ScoringMethod::Embedding);
    }

    #[test]
    fn test_dimension_mismatch_degrades() {
        let scorer = scorer_with_vectors();
        assert!(scorer.score_detailed("king", "flat").is_fallback());
    }

    #[test]
    fn test_empty_tokens_score_zero() {
        let scorer = scorer_with_vectors();
        assert_eq!(scorer.score("", "king"), SimilarityScore::ZERO);
        assert_eq!(scorer.score("king", "   "), SimilarityScore::ZERO);
        assert!(matches!(
            scorer.score_detailed("", "unicorn"),
            Scored::Fallback { reason: FallbackReason::EmptyToken, .. }
        ));
    }

    #[test]
    fn test_empty_tokens_are_identical() {
        let scorer = SimilarityScorer::without_model();
        assert_eq!(scorer.score_detailed("", ""), Scored::Exact);
        assert_eq!(scorer.score("  ", ""), SimilarityScore::EXACT);
    }

    #[test]
    fn test_range_and_symmetry() {
        let words = ["king", "queen", "carrot", "void", "flat", "apple", "", "KING"];
        for scorer in [scorer_with_vectors(), SimilarityScorer::without_model()] {
            for a in words {
                for b in words {
                    let ab = scorer.score(a, b);
                    let ba = scorer.score(b, a);
                    assert!((0.0..=1.0).contains(&ab.value()), "{a} vs {b}: {ab}");
                    assert_eq!(ab, ba, "{a} vs {b}");
                }
            }
        }
    }
}
