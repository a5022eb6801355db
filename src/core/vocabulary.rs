use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::core::Token;
use crate::error::Result;

/// Words used when no corpus file is available
const BUILTIN_WORDS: &[&str] = &[
    "apple", "banana", "cherry", "dragon", "elephant", "forest", "garden",
    "hammer", "island", "jungle", "knight", "lighthouse", "mountain",
    "ocean", "palace", "quasar", "river", "sunset", "temple", "universe",
];

/// Ordered, deduplicated set of tokens that ranking and hints run against.
///
/// Cloning is cheap: the word list is shared behind an `Arc`, so a reload
/// swaps in a new `Vocabulary` while in-flight passes keep their snapshot.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    words: Arc<[Token]>,
    index: Arc<HashMap<Token, usize>>,
}

impl Vocabulary {
    /// Build from raw words, normalizing each one.
    ///
    /// Empty entries are skipped and later duplicates dropped, so the first
    /// occurrence of a word fixes its position.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut ordered = Vec::new();
        let mut index = HashMap::new();

        for raw in words {
            let token = Token::new(raw);
            if token.is_empty() || index.contains_key(&token) {
                continue;
            }
            index.insert(token.clone(), ordered.len());
            ordered.push(token);
        }

        Self {
            words: ordered.into(),
            index: Arc::new(index),
        }
    }

    /// Read a newline-separated word list (one word per line)
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let vocabulary = Self::from_words(contents.lines());

        tracing::info!(
            "Loaded {} words from {}",
            vocabulary.len(),
            path.as_ref().display()
        );

        Ok(vocabulary)
    }

    /// Small built-in word list
    pub fn builtin() -> Self {
        Self::from_words(BUILTIN_WORDS)
    }

    /// Load a word list, degrading to the built-in list if it can't be read
    pub fn load_or_builtin(path: impl AsRef<Path>) -> Self {
        match Self::load(path.as_ref()) {
            Ok(vocabulary) if !vocabulary.is_empty() => vocabulary,
            Ok(_) => {
                tracing::warn!(
                    "⚠️ Word list {} is empty, using built-in words",
                    path.as_ref().display()
                );
                Self::builtin()
            }
            Err(e) => {
                tracing::warn!(
                    "⚠️ Word list {} unavailable ({}), using built-in words",
                    path.as_ref().display(),
                    e
                );
                Self::builtin()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, token: &Token) -> bool {
        self.index.contains_key(token)
    }

    /// 0-based position in corpus order
    pub fn position(&self, token: &Token) -> Option<usize> {
        self.index.get(token).copied()
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.words
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.words.iter()
    }

    /// Pick a uniformly random word
    pub fn random_word<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Token> {
        self.words.choose(rng)
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::from_words(std::iter::empty::<&str>())
    }
}

impl<'a> IntoIterator for &'a Vocabulary {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
