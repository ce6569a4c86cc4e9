use super::super::classifier::Classifier;
use super::super::domain::Article;
use super::super::sources::{ArticleSource, SourceKind};
use super::export::report_columns;
use super::summary::ReportSummary;
use super::views::{IntelligenceReport, ReportRow};
use super::ReportError;
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info};

/// Pairs an article source with the classifier matching its rule profile.
#[derive(Clone)]
pub struct ReportBuilder {
    source: Arc<dyn ArticleSource>,
    classifier: Classifier,
}

impl ReportBuilder {
    pub fn new(source: Arc<dyn ArticleSource>) -> Self {
        let classifier = Classifier::new(source.kind().profile());
        Self { source, classifier }
    }

    pub fn kind(&self) -> SourceKind {
        self.source.kind()
    }

    pub fn source(&self) -> &dyn ArticleSource {
        self.source.as_ref()
    }

    /// Fetches the selection and classifies every article in source order.
    ///
    /// Any source failure aborts the whole report; no partial rows are returned.
    pub fn build(&self, selection: &str) -> Result<IntelligenceReport, ReportError> {
        let kind = self.kind();
        let articles = self.source.fetch(selection)?;
        let rows = classify_articles(&self.classifier, &articles);
        let summary = ReportSummary::from_rows(&rows);

        info!(
            source = %kind,
            selection,
            rows = rows.len(),
            high_impact = summary.attention_required.len(),
            "intelligence report generated"
        );

        Ok(IntelligenceReport {
            source: kind,
            selection: selection.to_string(),
            generated_at: Utc::now(),
            columns: report_columns(kind),
            rows,
            summary,
        })
    }
}

impl std::fmt::Debug for ReportBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportBuilder")
            .field("source", &self.kind())
            .field("profile", &self.classifier.profile().name)
            .finish()
    }
}

pub(crate) fn classify_articles(classifier: &Classifier, articles: &[Article]) -> Vec<ReportRow> {
    articles
        .iter()
        .map(|article| {
            let classification = classifier.classify_article(article);
            debug!(
                topic = %classification.topic,
                impact = classification.impact_score,
                sentiment = classification.sentiment_score,
                "article classified"
            );

            ReportRow {
                headline: article.display_text(),
                topic: classification.topic,
                impact_level: classification.impact_level,
                sentiment: classification.sentiment,
                executive_insight: classification.insight,
                impact_score: classification.impact_score,
                sentiment_score: classification.sentiment_score,
                signals: classification.signals,
            }
        })
        .collect()
}
