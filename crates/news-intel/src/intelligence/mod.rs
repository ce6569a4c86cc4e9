pub mod classifier;
pub mod domain;
pub mod report;
pub mod router;
pub mod service;
pub mod sources;

pub use classifier::{Classifier, RuleProfile};
pub use domain::{Article, Classification, ImpactLevel, KeywordHits, Sentiment};
pub use report::{IntelligenceReport, ReportBuilder, ReportError, ReportExport, ReportRow};
pub use router::intelligence_router;
pub use service::{IntelligenceError, IntelligenceService, SourceOptions};
pub use sources::{ArticleSource, Scenario, SourceError, SourceKind};
