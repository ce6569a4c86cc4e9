//! Article sources feeding the report builder.
//!
//! Two strategies sit behind [`ArticleSource`]: the curated scenario lists and
//! a labeled dataset loaded once per process. The source kind also decides
//! which rule profile classifies its articles.

mod dataset;
mod scenario;

pub use dataset::{
    DatasetCache, DatasetError, DatasetRow, DatasetSource, NewsDataset, ALL_CATEGORIES,
};
pub use scenario::{Scenario, ScenarioSource};

use super::classifier::RuleProfile;
use super::domain::Article;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which family of inputs a report was generated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Scenario,
    Dataset,
}

impl SourceKind {
    pub const fn ordered() -> [Self; 2] {
        [Self::Scenario, Self::Dataset]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Scenario => "News Scenario",
            Self::Dataset => "News Dataset",
        }
    }

    pub const fn profile(self) -> &'static RuleProfile {
        match self {
            Self::Scenario => &RuleProfile::SCENARIO,
            Self::Dataset => &RuleProfile::DATASET,
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scenario => f.write_str("scenario"),
            Self::Dataset => f.write_str("dataset"),
        }
    }
}

/// Capability shared by every article source.
pub trait ArticleSource: Send + Sync {
    fn kind(&self) -> SourceKind;

    /// Options offered by the single-choice selector, in display order.
    fn selections(&self) -> Result<Vec<String>, SourceError>;

    /// Articles for `selection`, in source order.
    fn fetch(&self, selection: &str) -> Result<Vec<Article>, SourceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("unknown scenario '{0}'")]
    UnknownScenario(String),
    #[error("dataset row on line {line} has no article text")]
    Row { line: u64 },
    #[error(transparent)]
    Dataset(#[from] DatasetError),
}
