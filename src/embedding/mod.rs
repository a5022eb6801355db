pub mod fasttext;
pub mod memory;

use std::sync::Arc;

use crate::core::Token;
use crate::error::{Result, WordGameError};

pub use fasttext::{FastTextModel, FastTextSource};
pub use memory::StaticVectorSource;

/// Trait for word-vector providers
pub trait VectorSource: Send + Sync {
    /// Vector for any token, including words unseen during training.
    ///
    /// Errors are per-token; callers degrade to fallback scoring for that
    /// call only.
    fn vector_of(&self, token: &Token) -> Result<Vector>;

    /// Whether a model is currently loaded
    fn is_available(&self) -> bool;

    /// Get source name for logging
    fn name(&self) -> &str;
}

/// Immutable embedding vector, cheap to clone
#[derive(Debug, Clone, PartialEq)]
pub struct Vector(Arc<[f32]>);

impl Vector {
    pub fn new(values: Vec<f32>) -> Self {
        Self(values.into())
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    pub fn dims(&self) -> usize {
        self.0.len()
    }

    /// Euclidean norm, accumulated in f64
    pub fn norm(&self) -> f64 {
        self.0
            .iter()
            .map(|&x| (x as f64) * (x as f64))
            .sum::<f64>()
            .sqrt()
    }
}

impl From<Vec<f32>> for Vector {
    fn from(values: Vec<f32>) -> Self {
        Vector::new(values)
    }
}

/// Result of a model load attempt
pub enum LoadOutcome {
    /// Model is loaded (freshly, or it already was)
    Loaded(Arc<FastTextModel>),
    /// No model; scoring continues on the character-overlap fallback
    Unavailable(WordGameError),
}

impl LoadOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadOutcome::Loaded(_))
    }

    pub fn model(&self) -> Option<&Arc<FastTextModel>> {
        match self {
            LoadOutcome::Loaded(model) => Some(model),
            LoadOutcome::Unavailable(_) => None,
        }
    }
}

impl std::fmt::Debug for LoadOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadOutcome::Loaded(model) => f
                .debug_struct("Loaded")
                .field("path", &model.path())
                .field("dims", &model.dims())
                .finish(),
            LoadOutcome::Unavailable(e) => f.debug_tuple("Unavailable").field(e).finish(),
        }
    }
}
