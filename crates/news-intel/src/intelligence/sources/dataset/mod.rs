mod cache;
mod normalizer;
mod parser;

pub use cache::DatasetCache;

use super::{ArticleSource, SourceError, SourceKind};
use crate::intelligence::domain::Article;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

/// Selector sentinel that keeps every dataset row.
pub const ALL_CATEGORIES: &str = "All";

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to read news dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid news dataset CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("news dataset is missing required column '{column}'")]
    MissingColumn { column: &'static str },
}

/// One dataset row as read; `text` is `None` when the cell was empty or absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetRow {
    pub line: u64,
    pub text: Option<String>,
    pub label: String,
}

/// Read-only labeled article table.
#[derive(Debug, Clone, Default)]
pub struct NewsDataset {
    rows: Vec<DatasetRow>,
    categories: Vec<String>,
}

impl NewsDataset {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let rows = parser::parse_rows(reader)?;
        Ok(Self::from_rows(rows))
    }

    pub fn from_rows(rows: Vec<DatasetRow>) -> Self {
        let mut categories: Vec<String> = Vec::new();
        for row in &rows {
            if !categories.contains(&row.label) {
                categories.push(row.label.clone());
            }
        }

        Self { rows, categories }
    }

    pub fn rows(&self) -> &[DatasetRow] {
        &self.rows
    }

    /// Distinct labels in first-seen order.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn count_label(&self, label: &str) -> usize {
        self.rows.iter().filter(|row| row.label == label).count()
    }

    /// Rows kept by a selector choice; unknown categories select nothing.
    pub fn select<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a DatasetRow> + 'a {
        self.rows
            .iter()
            .filter(move |row| category == ALL_CATEGORIES || row.label == category)
    }
}

/// Dataset-backed source, filtered by category label.
#[derive(Debug, Clone)]
pub struct DatasetSource {
    cache: Arc<DatasetCache>,
}

impl DatasetSource {
    pub fn new(cache: Arc<DatasetCache>) -> Self {
        Self { cache }
    }

    pub fn cache(&self) -> &DatasetCache {
        &self.cache
    }
}

impl ArticleSource for DatasetSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Dataset
    }

    fn selections(&self) -> Result<Vec<String>, SourceError> {
        let dataset = self.cache.get_or_load()?;
        let mut selections = Vec::with_capacity(dataset.categories().len() + 1);
        selections.push(ALL_CATEGORIES.to_string());
        selections.extend(dataset.categories().iter().cloned());
        Ok(selections)
    }

    fn fetch(&self, selection: &str) -> Result<Vec<Article>, SourceError> {
        let dataset = self.cache.get_or_load()?;
        dataset
            .select(selection)
            .map(|row| match &row.text {
                Some(text) => Ok(Article::labeled(text.clone(), row.label.clone())),
                None => Err(SourceError::Row { line: row.line }),
            })
            .collect()
    }
}
