use clap::{Args, ValueEnum};
use serde_json::{json, Value};
use std::io;
use std::path::PathBuf;

use ratio_engine_core::analyze_statements;
use ratio_engine_core::diagnostics::diagnose;
use ratio_engine_core::report::{MarkdownRenderer, PlainTextRenderer, ReportBuilder, ReportRenderer};

use super::{load_statements, StatementArgs};
use crate::output::report_file;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Text,
    Markdown,
}

/// Arguments for building and exporting the analysis report
#[derive(Args)]
pub struct ReportArgs {
    #[command(flatten)]
    pub statements: StatementArgs,

    /// Report format
    #[arg(long, default_value = "text")]
    pub format: ReportFormat,

    /// Destination file; defaults to ratio_report_<timestamp>.<ext>
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Report title
    #[arg(long)]
    pub title: Option<String>,

    /// Label for the earlier period
    #[arg(long, default_value = "Prior")]
    pub prior_label: String,

    /// Label for the later period
    #[arg(long, default_value = "Current")]
    pub current_label: String,
}

pub fn run_report(args: ReportArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let loaded = load_statements(&args.statements)?;
    let output = analyze_statements(&loaded.input, &loaded.config)?;
    let diagnostics = diagnose(&output.result);

    let now = chrono::Local::now();
    let mut builder = ReportBuilder::new()
        .generated_on(now.date_naive())
        .period_labels(args.prior_label, args.current_label);
    if let Some(title) = args.title {
        builder = builder.title(title);
    }
    let report = builder.build(&loaded.input, &output.result, &diagnostics);

    let renderer: Box<dyn ReportRenderer> = match args.format {
        ReportFormat::Text => Box::new(PlainTextRenderer),
        ReportFormat::Markdown => Box::new(MarkdownRenderer),
    };
    let rendered = renderer.render(&report);
    let path = args.out.unwrap_or_else(|| {
        report_file::default_report_path(now.naive_local(), renderer.extension())
    });
    let bytes = report_file::export_report(&path, &rendered, &mut io::stdout())?;

    let mut warnings = loaded.warnings;
    warnings.extend(output.warnings);

    Ok(json!({
        "result": {
            "path": path.display().to_string(),
            "format": renderer.format_name(),
            "bytes": bytes,
            "critical_findings": diagnostics.has_critical(),
        },
        "methodology": output.methodology,
        "warnings": warnings,
    }))
}
