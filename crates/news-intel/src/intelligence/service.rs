use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use super::report::{IntelligenceReport, ReportBuilder, ReportError, ReportExport};
use super::sources::{
    ArticleSource, DatasetCache, DatasetError, DatasetSource, ScenarioSource, SourceError,
    SourceKind,
};
use crate::config::IntelligenceConfig;

/// Selector options for one configured source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceOptions {
    pub source: SourceKind,
    pub label: &'static str,
    pub selections: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum IntelligenceError {
    #[error("{} source is not configured", .0)]
    SourceUnavailable(SourceKind),
    #[error(transparent)]
    Report(#[from] ReportError),
}

impl From<SourceError> for IntelligenceError {
    fn from(value: SourceError) -> Self {
        Self::Report(ReportError::Source(value))
    }
}

/// Registry of report builders keyed by source kind.
#[derive(Debug, Clone, Default)]
pub struct IntelligenceService {
    builders: BTreeMap<SourceKind, ReportBuilder>,
}

impl IntelligenceService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source(mut self, source: Arc<dyn ArticleSource>) -> Self {
        let builder = ReportBuilder::new(source);
        self.builders.insert(builder.kind(), builder);
        self
    }

    /// Scenario source always; dataset source when a path is configured.
    ///
    /// The dataset is loaded eagerly so a missing file or column fails startup.
    pub fn from_config(config: &IntelligenceConfig) -> Result<Self, DatasetError> {
        let service = Self::new().with_source(Arc::new(ScenarioSource));

        let Some(path) = &config.dataset_path else {
            info!("no dataset configured; serving scenario reports only");
            return Ok(service);
        };

        let cache = Arc::new(DatasetCache::new(path.clone()));
        cache.get_or_load()?;
        Ok(service.with_source(Arc::new(DatasetSource::new(cache))))
    }

    pub fn supports(&self, kind: SourceKind) -> bool {
        self.builders.contains_key(&kind)
    }

    pub fn sources(&self) -> Result<Vec<SourceOptions>, IntelligenceError> {
        self.builders
            .values()
            .map(|builder| {
                let kind = builder.kind();
                Ok(SourceOptions {
                    source: kind,
                    label: kind.label(),
                    selections: builder.source().selections()?,
                })
            })
            .collect()
    }

    pub fn generate(
        &self,
        kind: SourceKind,
        selection: &str,
    ) -> Result<IntelligenceReport, IntelligenceError> {
        let builder = self
            .builders
            .get(&kind)
            .ok_or(IntelligenceError::SourceUnavailable(kind))?;
        Ok(builder.build(selection)?)
    }

    pub fn export(
        &self,
        kind: SourceKind,
        selection: &str,
    ) -> Result<ReportExport, IntelligenceError> {
        let report = self.generate(kind, selection)?;
        Ok(report.to_csv()?)
    }
}
