use super::{DatasetError, NewsDataset};
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};
use tracing::info;

/// Memoized dataset handle: the file is read at most once per cache.
///
/// A failed load leaves the cache empty so the caller can surface the error.
#[derive(Debug)]
pub struct DatasetCache {
    path: PathBuf,
    dataset: OnceLock<Arc<NewsDataset>>,
}

impl DatasetCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            dataset: OnceLock::new(),
        }
    }

    /// Cache already holding `dataset`; used for in-memory datasets and tests.
    pub fn preloaded(path: impl Into<PathBuf>, dataset: NewsDataset) -> Self {
        let cache = Self::new(path);
        let _ = cache.dataset.set(Arc::new(dataset));
        cache
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_loaded(&self) -> bool {
        self.dataset.get().is_some()
    }

    pub fn get_or_load(&self) -> Result<Arc<NewsDataset>, DatasetError> {
        if let Some(dataset) = self.dataset.get() {
            return Ok(dataset.clone());
        }

        let loaded = Arc::new(NewsDataset::from_path(&self.path)?);
        info!(
            path = %self.path.display(),
            rows = loaded.len(),
            categories = loaded.categories().len(),
            "news dataset loaded"
        );

        // A concurrent loader may have won; keep whichever landed first.
        Ok(self.dataset.get_or_init(|| loaded).clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_not_cached() {
        let cache = DatasetCache::new("./does-not-exist.csv");
        let error = cache.get_or_load().expect_err("missing dataset");
        assert!(matches!(error, DatasetError::Io(_)));
        assert!(!cache.is_loaded());
    }

    #[test]
    fn preloaded_cache_returns_same_handle() {
        let dataset = NewsDataset::from_reader("text,label\nhello,World\n".as_bytes())
            .expect("dataset parses");
        let cache = DatasetCache::preloaded("memory", dataset);

        let first = cache.get_or_load().expect("cached");
        let second = cache.get_or_load().expect("cached");
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.len(), 1);
    }
}
