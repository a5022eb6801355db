use finalfusion::compat::fasttext::ReadFastText;
use finalfusion::embeddings::Embeddings;
use finalfusion::storage::NdArray;
use finalfusion::vocab::FastTextSubwordVocab;
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock, RwLock};
use std::time::Instant;

use crate::core::Token;
use crate::embedding::{LoadOutcome, Vector, VectorSource};
use crate::error::{Result, WordGameError};

/// Maximum number of token vectors kept in the lookup cache
pub const DEFAULT_CACHE_CAPACITY: usize = 50_000;

/// Pretrained fastText model (`.bin` format).
///
/// fastText composes vectors from character n-grams, so every token gets a
/// vector even if it never appeared in the training data.
pub struct FastTextModel {
    embeddings: Embeddings<FastTextSubwordVocab, NdArray>,
    path: PathBuf,
}

impl FastTextModel {
    /// Read a fastText binary model from disk
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);

        let embeddings = Embeddings::<FastTextSubwordVocab, NdArray>::read_fasttext(&mut reader)
            .map_err(|e| WordGameError::ModelLoad(format!("{}: {}", path.display(), e)))?;

        Ok(Self {
            embeddings,
            path: path.to_path_buf(),
        })
    }

    pub fn dims(&self) -> usize {
        self.embeddings.dims()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Vector for a word, composed from subwords when out of vocabulary
    pub fn vector(&self, word: &str) -> Option<Vector> {
        self.embeddings
            .embedding(word)
            .map(|embedding| Vector::new(embedding.iter().copied().collect()))
    }
}

/// Lazily loaded, process-wide fastText vector source.
///
/// The model is loaded at most once; concurrent first loads are serialized
/// and later calls return the cached model. A failed load leaves the source
/// unavailable until a later `load` succeeds.
pub struct FastTextSource {
    model: OnceLock<Arc<FastTextModel>>,
    load_lock: Mutex<()>,
    cache: RwLock<HashMap<Token, Vector>>,
    cache_capacity: usize,
}

impl FastTextSource {
    /// Create an empty (unavailable) source
    pub fn new() -> Self {
        Self::with_cache_capacity(DEFAULT_CACHE_CAPACITY)
    }

    pub fn with_cache_capacity(cache_capacity: usize) -> Self {
        Self {
            model: OnceLock::new(),
            load_lock: Mutex::new(()),
            cache: RwLock::new(HashMap::new()),
            cache_capacity,
        }
    }

    /// Load the model from `path` unless one is already loaded.
    ///
    /// Never fails hard: a missing or unreadable file yields
    /// `LoadOutcome::Unavailable` with a diagnostic and a warning log.
    pub fn load(&self, path: impl AsRef<Path>) -> LoadOutcome {
        if let Some(model) = self.model.get() {
            return LoadOutcome::Loaded(Arc::clone(model));
        }

        let _guard = self.load_lock.lock().unwrap_or_else(|e| e.into_inner());

        // Another caller may have finished loading while we waited
        if let Some(model) = self.model.get() {
            return LoadOutcome::Loaded(Arc::clone(model));
        }

        let path = path.as_ref();
        if !path.exists() {
            let err = WordGameError::ModelUnavailable {
                path: path.to_path_buf(),
                reason: "file not found; download a pretrained fastText model such as \
                         https://dl.fbaipublicfiles.com/fasttext/vectors-crawl/cc.en.300.bin"
                    .to_string(),
            };
            tracing::warn!("⚠️ {}", err);
            return LoadOutcome::Unavailable(err);
        }

        tracing::info!("Loading fastText model from {}...", path.display());
        let start = Instant::now();

        match FastTextModel::read(path) {
            Ok(model) => {
                let model = Arc::new(model);
                let model = Arc::clone(self.model.get_or_init(|| model));
                tracing::info!(
                    "✅ fastText model loaded ({} dims, {:.1}s)",
                    model.dims(),
                    start.elapsed().as_secs_f64()
                );
                LoadOutcome::Loaded(model)
            }
            Err(e) => {
                tracing::warn!("⚠️ fastText model unavailable: {}", e);
                LoadOutcome::Unavailable(e)
            }
        }
    }

    /// The loaded model, if any
    pub fn model(&self) -> Option<Arc<FastTextModel>> {
        self.model.get().cloned()
    }

    /// Number of cached token vectors
    pub fn cached_vectors(&self) -> usize {
        self.cache.read().map(|cache| cache.len()).unwrap_or(0)
    }

    fn cached(&self, token: &Token) -> Option<Vector> {
        self.cache.read().ok()?.get(token).cloned()
    }

    fn remember(&self, token: &Token, vector: &Vector) {
        if let Ok(mut cache) = self.cache.write() {
            if cache.len() < self.cache_capacity {
                cache.insert(token.clone(), vector.clone());
            }
        }
    }
}

impl Default for FastTextSource {
    fn default() -> Self {
        Self::new()
    }
}

impl VectorSource for FastTextSource {
    fn vector_of(&self, token: &Token) -> Result<Vector> {
        let model = self.model.get().ok_or_else(|| WordGameError::ModelUnavailable {
            path: PathBuf::new(),
            reason: "no fastText model loaded".to_string(),
        })?;

        if let Some(vector) = self.cached(token) {
            return Ok(vector);
        }

        let vector = model.vector(token.as_str()).ok_or_else(|| WordGameError::Vector {
            token: token.to_string(),
            message: "no word or subword vectors found".to_string(),
        })?;

        self.remember(token, &vector);
        Ok(vector)
    }

    fn is_available(&self) -> bool {
        self.model.get().is_some()
    }

    fn name(&self) -> &str {
        "fasttext"
    }
}
