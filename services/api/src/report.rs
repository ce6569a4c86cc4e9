use chrono::Local;
use clap::Args;
use news_intel::error::AppError;
use news_intel::intelligence::report::REPORT_FILE_NAME;
use news_intel::intelligence::sources::{
    DatasetCache, DatasetSource, ScenarioSource, ALL_CATEGORIES,
};
use news_intel::intelligence::{
    ArticleSource, IntelligenceError, IntelligenceReport, ReportBuilder,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct ScenarioReportArgs {
    /// Scenario to analyze, e.g. "AI & Startup Activity"
    #[arg(long)]
    pub(crate) name: String,
    /// Write the CSV export to this file or directory
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct DatasetReportArgs {
    /// CSV dataset with `text` and `label` columns
    #[arg(long)]
    pub(crate) path: PathBuf,
    /// Category label to keep ("All" keeps every row)
    #[arg(long, default_value = ALL_CATEGORIES)]
    pub(crate) category: String,
    /// Write the CSV export to this file or directory
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

pub(crate) fn run_scenario_report(args: ScenarioReportArgs) -> Result<(), AppError> {
    let ScenarioReportArgs { name, output } = args;
    generate(Arc::new(ScenarioSource), &name, output)
}

pub(crate) fn run_dataset_report(args: DatasetReportArgs) -> Result<(), AppError> {
    let DatasetReportArgs {
        path,
        category,
        output,
    } = args;

    let cache = Arc::new(DatasetCache::new(path));
    cache.get_or_load()?;
    generate(Arc::new(DatasetSource::new(cache)), &category, output)
}

fn generate(
    source: Arc<dyn ArticleSource>,
    selection: &str,
    output: Option<PathBuf>,
) -> Result<(), AppError> {
    let builder = ReportBuilder::new(source);
    let report = builder
        .build(selection)
        .map_err(IntelligenceError::from)?;

    render_report(&report);

    if let Some(output) = output {
        let path = resolve_output_path(&output);
        let export = report.to_csv().map_err(IntelligenceError::from)?;
        std::fs::write(&path, &export.bytes)?;
        println!("\nCSV export written to {}", path.display());
    }

    Ok(())
}

/// Directories receive the default report file name.
pub(crate) fn resolve_output_path(output: &Path) -> PathBuf {
    if output.is_dir() {
        output.join(REPORT_FILE_NAME)
    } else {
        output.to_path_buf()
    }
}

pub(crate) fn render_report(report: &IntelligenceReport) {
    println!("Executive Intelligence Report");
    println!(
        "Source: {} | Selection: {} | Generated {}",
        report.source.label(),
        report.selection,
        report
            .generated_at
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M")
    );

    let summary = &report.summary;
    let impact = summary
        .impact
        .iter()
        .map(|entry| format!("{} {}", entry.count, entry.label))
        .collect::<Vec<_>>()
        .join(" | ");
    let sentiment = summary
        .sentiment
        .iter()
        .map(|entry| format!("{} {}", entry.count, entry.label))
        .collect::<Vec<_>>()
        .join(" | ");
    println!("\n{} article(s) analyzed", summary.total);
    println!("Impact: {impact}");
    println!("Sentiment: {sentiment}");

    if !summary.attention_required.is_empty() {
        println!("\nRequires executive attention");
        for headline in &summary.attention_required {
            println!("- {}", headline);
        }
    }

    if report.rows.is_empty() {
        println!("\nNo articles matched this selection");
        return;
    }

    println!("\n{}", report.columns.join(" | "));
    for row in &report.rows {
        println!(
            "- {} | {} | {} | {} | {}",
            row.headline,
            row.topic,
            row.impact_level.label(),
            row.sentiment.label(),
            row.executive_insight
        );
    }
}
