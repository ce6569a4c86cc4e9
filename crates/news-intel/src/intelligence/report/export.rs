use super::super::sources::SourceKind;
use super::views::IntelligenceReport;
use super::ReportError;

pub const REPORT_FILE_NAME: &str = "executive_news_intelligence_report.csv";

/// Header row of the exported table.
pub const fn report_columns(kind: SourceKind) -> [&'static str; 5] {
    match kind {
        SourceKind::Scenario => [
            "Title",
            "Topic",
            "Impact Level",
            "Sentiment",
            "Executive Insight",
        ],
        SourceKind::Dataset => [
            "Article Text",
            "Category",
            "Impact Level",
            "Sentiment",
            "Executive Insight",
        ],
    }
}

/// Downloadable CSV rendering of a report.
#[derive(Debug, Clone)]
pub struct ReportExport {
    pub file_name: &'static str,
    pub mime: mime::Mime,
    pub bytes: Vec<u8>,
}

impl ReportExport {
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.file_name)
    }
}

pub(crate) fn write_csv(report: &IntelligenceReport) -> Result<ReportExport, ReportError> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record(report.columns)?;

    for row in &report.rows {
        writer.write_record([
            row.headline.as_str(),
            row.topic.as_str(),
            row.impact_level.label(),
            row.sentiment.label(),
            row.executive_insight,
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| ReportError::Io(err.into_error()))?;

    Ok(ReportExport {
        file_name: REPORT_FILE_NAME,
        mime: mime::TEXT_CSV_UTF_8,
        bytes,
    })
}
