use super::super::domain::{ImpactLevel, Sentiment};
use super::views::ReportRow;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImpactCount {
    pub impact_level: ImpactLevel,
    pub label: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentimentCount {
    pub sentiment: Sentiment,
    pub label: &'static str,
    pub count: usize,
}

/// Roll-up printed above the report table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    pub total: usize,
    pub impact: Vec<ImpactCount>,
    pub sentiment: Vec<SentimentCount>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attention_required: Vec<String>,
}

impl ReportSummary {
    pub fn from_rows(rows: &[ReportRow]) -> Self {
        let impact = ImpactLevel::ordered()
            .into_iter()
            .map(|impact_level| ImpactCount {
                impact_level,
                label: impact_level.label(),
                count: rows
                    .iter()
                    .filter(|row| row.impact_level == impact_level)
                    .count(),
            })
            .collect();

        let sentiment = Sentiment::ordered()
            .into_iter()
            .map(|sentiment| SentimentCount {
                sentiment,
                label: sentiment.label(),
                count: rows.iter().filter(|row| row.sentiment == sentiment).count(),
            })
            .collect();

        let attention_required = rows
            .iter()
            .filter(|row| row.impact_level == ImpactLevel::High)
            .map(|row| row.headline.clone())
            .collect();

        Self {
            total: rows.len(),
            impact,
            sentiment,
            attention_required,
        }
    }

    pub fn impact_count(&self, level: ImpactLevel) -> usize {
        self.impact
            .iter()
            .find(|entry| entry.impact_level == level)
            .map(|entry| entry.count)
            .unwrap_or(0)
    }

    pub fn sentiment_count(&self, sentiment: Sentiment) -> usize {
        self.sentiment
            .iter()
            .find(|entry| entry.sentiment == sentiment)
            .map(|entry| entry.count)
            .unwrap_or(0)
    }
}
