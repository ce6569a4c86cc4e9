use super::super::domain::{ImpactLevel, KeywordHits, Sentiment};
use super::super::sources::SourceKind;
use super::summary::ReportSummary;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One classified article as shown in the report table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    /// Headline for scenario reports, truncated article text for dataset reports.
    pub headline: String,
    pub topic: String,
    pub impact_level: ImpactLevel,
    pub sentiment: Sentiment,
    pub executive_insight: &'static str,
    pub impact_score: u32,
    pub sentiment_score: i32,
    pub signals: KeywordHits,
}

#[derive(Debug, Clone, Serialize)]
pub struct IntelligenceReport {
    pub source: SourceKind,
    pub selection: String,
    pub generated_at: DateTime<Utc>,
    pub columns: [&'static str; 5],
    pub rows: Vec<ReportRow>,
    pub summary: ReportSummary,
}

impl IntelligenceReport {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
