use crate::dataset::load_documents;
use crate::error::RetrievalError;
use crate::retriever::{Retriever, RetrieverConfig};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Memoizes built retrievers by corpus path.
///
/// Loading and index construction happen under the lock, so concurrent first
/// access to the same path loads the corpus exactly once. Failed loads are
/// not cached; callers may retry. Built retrievers are immutable, so searches
/// against the returned `Arc` need no further locking.
pub struct RetrieverCache {
    config: RetrieverConfig,
    entries: Mutex<HashMap<PathBuf, Arc<Retriever>>>,
}

impl RetrieverCache {
    pub fn new(config: RetrieverConfig) -> Self {
        Self {
            config,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Return the retriever for `path`, building it on first access.
    pub fn get_or_build(&self, path: &Path) -> Result<Arc<Retriever>, RetrievalError> {
        let mut entries = self.entries.lock();
        if let Some(retriever) = entries.get(path) {
            return Ok(Arc::clone(retriever));
        }
        let documents = load_documents(path)?;
        let retriever = Arc::new(Retriever::new(documents, self.config));
        entries.insert(path.to_path_buf(), Arc::clone(&retriever));
        Ok(retriever)
    }

    /// Drop the cached retriever for `path`. Returns whether an entry was
    /// present.
    pub fn invalidate(&self, path: &Path) -> bool {
        self.entries.lock().remove(path).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}
