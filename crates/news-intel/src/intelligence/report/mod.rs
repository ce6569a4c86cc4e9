mod builder;
mod export;
mod summary;
pub mod views;

pub use builder::ReportBuilder;
pub use export::{report_columns, ReportExport, REPORT_FILE_NAME};
pub use summary::{ImpactCount, ReportSummary, SentimentCount};
pub use views::{IntelligenceReport, ReportRow};

use super::sources::SourceError;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error("failed to encode report CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to flush report CSV: {0}")]
    Io(#[from] std::io::Error),
}

impl IntelligenceReport {
    /// Serializes the table with its header row; generated fresh on every call.
    pub fn to_csv(&self) -> Result<ReportExport, ReportError> {
        export::write_csv(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intelligence::domain::{Article, ImpactLevel, Sentiment};
    use crate::intelligence::sources::{
        ArticleSource, DatasetCache, DatasetSource, NewsDataset, ScenarioSource, SourceKind,
    };
    use std::sync::Arc;

    struct FixedSource(Vec<Article>);

    impl ArticleSource for FixedSource {
        fn kind(&self) -> SourceKind {
            SourceKind::Scenario
        }

        fn selections(&self) -> Result<Vec<String>, SourceError> {
            Ok(vec!["fixed".to_string()])
        }

        fn fetch(&self, _selection: &str) -> Result<Vec<Article>, SourceError> {
            Ok(self.0.clone())
        }
    }

    fn parse_csv(bytes: &[u8]) -> (Vec<String>, Vec<Vec<String>>) {
        let mut reader = csv::Reader::from_reader(bytes);
        let headers = reader
            .headers()
            .expect("headers")
            .iter()
            .map(String::from)
            .collect();
        let rows = reader
            .records()
            .map(|record| {
                record
                    .expect("record")
                    .iter()
                    .map(String::from)
                    .collect::<Vec<_>>()
            })
            .collect();
        (headers, rows)
    }

    #[test]
    fn scenario_report_preserves_article_order() {
        let builder = ReportBuilder::new(Arc::new(ScenarioSource));
        let report = builder.build("AI & Startup Activity").expect("report builds");

        assert_eq!(report.source, SourceKind::Scenario);
        assert_eq!(report.len(), 2);
        assert_eq!(report.rows[0].headline, "AI startup announces major acquisition");
        assert_eq!(report.rows[1].headline, "Tech firm launches new AI platform");
        assert_eq!(report.rows[0].impact_level, ImpactLevel::High);
        assert_eq!(report.rows[0].sentiment, Sentiment::Positive);
        assert_eq!(report.summary.total, 2);
    }

    #[test]
    fn source_errors_abort_the_report() {
        let builder = ReportBuilder::new(Arc::new(ScenarioSource));
        let error = builder.build("Unknown").expect_err("unknown scenario");
        assert!(matches!(
            error,
            ReportError::Source(SourceError::UnknownScenario(_))
        ));
    }

    #[test]
    fn csv_export_uses_scenario_header_and_quotes_fields() {
        let source = FixedSource(vec![Article::headline(
            "Merger, layoffs and a \"record\" quarter",
            "Details follow.\nMore lines.",
        )]);
        let report = ReportBuilder::new(Arc::new(source))
            .build("fixed")
            .expect("report builds");
        let export = report.to_csv().expect("csv export");

        assert_eq!(export.file_name, "executive_news_intelligence_report.csv");
        assert_eq!(export.mime.essence_str(), "text/csv");
        assert_eq!(export.mime.get_param(mime::CHARSET), Some(mime::UTF_8));
        let text = String::from_utf8(export.bytes.clone()).expect("utf-8");
        assert!(text.starts_with("Title,Topic,Impact Level,Sentiment,Executive Insight\n"));
        assert!(text.contains("\"Merger, layoffs and a \"\"record\"\" quarter\""));

        let (_, rows) = parse_csv(&export.bytes);
        assert_eq!(rows[0][0], "Merger, layoffs and a \"record\" quarter");
        assert_eq!(rows[0].len(), 5);
    }

    #[test]
    fn csv_round_trip_matches_rows() {
        let builder = ReportBuilder::new(Arc::new(ScenarioSource));
        let report = builder
            .build("Regulation & Policy News")
            .expect("report builds");
        let export = report.to_csv().expect("csv export");
        let (headers, rows) = parse_csv(&export.bytes);

        assert_eq!(headers, report.columns.to_vec());
        let exported: Vec<(String, String, String)> = rows
            .into_iter()
            .map(|row| (row[1].clone(), row[2].clone(), row[3].clone()))
            .collect();
        let expected: Vec<(String, String, String)> = report
            .rows
            .iter()
            .map(|row| {
                (
                    row.topic.clone(),
                    row.impact_level.label().to_string(),
                    row.sentiment.label().to_string(),
                )
            })
            .collect();
        assert_eq!(exported, expected);
    }

    #[test]
    fn dataset_report_truncates_display_text_only() {
        let long_text = format!("{} lawsuit crisis", "market ".repeat(30));
        let dataset = NewsDataset::from_rows(vec![crate::intelligence::sources::DatasetRow {
            line: 2,
            text: Some(long_text.clone()),
            label: "Business".to_string(),
        }]);
        let source = DatasetSource::new(Arc::new(DatasetCache::preloaded("memory", dataset)));
        let report = ReportBuilder::new(Arc::new(source))
            .build("Business")
            .expect("report builds");

        let row = &report.rows[0];
        assert_eq!(row.headline.chars().count(), 123);
        assert!(row.headline.ends_with("..."));
        assert!(long_text.starts_with(row.headline.trim_end_matches("...")));
        assert_eq!(row.impact_score, 6);
        assert_eq!(row.impact_level, ImpactLevel::High);
        assert_eq!(row.topic, "Business");

        let export = report.to_csv().expect("csv export");
        let (headers, _) = parse_csv(&export.bytes);
        assert_eq!(
            headers,
            vec![
                "Article Text",
                "Category",
                "Impact Level",
                "Sentiment",
                "Executive Insight"
            ]
        );
    }

    #[test]
    fn empty_selection_exports_header_only() {
        let report = ReportBuilder::new(Arc::new(FixedSource(Vec::new())))
            .build("fixed")
            .expect("report builds");
        let export = report.to_csv().expect("csv export");
        let (headers, rows) = parse_csv(&export.bytes);
        assert_eq!(headers.len(), 5);
        assert!(rows.is_empty());
        assert!(report.is_empty());
    }
}
