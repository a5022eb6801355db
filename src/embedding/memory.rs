use std::collections::HashMap;

use crate::core::Token;
use crate::embedding::{Vector, VectorSource};
use crate::error::{Result, WordGameError};

/// Fixed token → vector table.
///
/// Has no subword model, so unknown tokens fail per call and the scorer
/// falls back for that pair. Used by tests, benches and small demos.
#[derive(Debug, Clone, Default)]
pub struct StaticVectorSource {
    vectors: HashMap<Token, Vector>,
}

impl StaticVectorSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with_vector(mut self, word: &str, values: Vec<f32>) -> Self {
        self.insert(word, values);
        self
    }

    pub fn insert(&mut self, word: &str, values: Vec<f32>) {
        self.vectors.insert(Token::new(word), Vector::new(values));
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<(S, Vec<f32>)> for StaticVectorSource {
    fn from_iter<I: IntoIterator<Item = (S, Vec<f32>)>>(iter: I) -> Self {
        let mut source = Self::new();
        for (word, values) in iter {
            source.insert(word.as_ref(), values);
        }
        source
    }
}

impl VectorSource for StaticVectorSource {
    fn vector_of(&self, token: &Token) -> Result<Vector> {
        self.vectors
            .get(token)
            .cloned()
            .ok_or_else(|| WordGameError::Vector {
                token: token.to_string(),
                message: "token not in static table".to_string(),
            })
    }

    fn is_available(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        "static"
    }
}
