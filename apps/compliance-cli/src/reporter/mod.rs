//! Compliance report output
//!
//! # Output Formats
//!
//! - **Text**: Human-readable report with per-check status markers
//! - **Json**: The report's wire form, for piping into other tools
//! - **JsonPretty**: Same, indented

mod console;
mod json;

use std::io::{self, Write};

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use shared_types::ComplianceReport;

pub use console::ConsoleReporter;
pub use json::JsonReporter;

/// Output format for compliance reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Console output with status markers
    #[default]
    Text,
    /// Compact JSON
    Json,
    /// Pretty-printed JSON
    JsonPretty,
}

/// A report plus what it was produced from
pub struct ReportContext<'a> {
    pub report: &'a ComplianceReport,
    pub source: String,
    pub checked_at: DateTime<Utc>,
}

impl<'a> ReportContext<'a> {
    pub fn new(report: &'a ComplianceReport, source: impl Into<String>) -> Self {
        Self {
            report,
            source: source.into(),
            checked_at: Utc::now(),
        }
    }
}

/// Reporter for compliance results
pub struct Reporter {
    format: OutputFormat,
}

impl Reporter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Report to stdout
    pub fn report(&self, context: &ReportContext<'_>) -> Result<()> {
        let output = self.format_report(context)?;
        let mut stdout = io::stdout().lock();
        stdout.write_all(output.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }

    pub fn format_report(&self, context: &ReportContext<'_>) -> Result<String> {
        match self.format {
            OutputFormat::Text => ConsoleReporter::format(context),
            OutputFormat::Json => JsonReporter::format(context.report, false),
            OutputFormat::JsonPretty => JsonReporter::format(context.report, true),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use test_support::sample_report;

    #[test]
    fn test_reporter_text_format() {
        let report = sample_report();
        let context = ReportContext::new(&report, "visit.txt");
        let output = Reporter::new(OutputFormat::Text)
            .format_report(&context)
            .unwrap();

        assert!(output.contains("visit.txt"));
        assert!(output.contains("Diagnosis or Assessment"));
    }

    #[test]
    fn test_reporter_json_format() {
        let report = sample_report();
        let context = ReportContext::new(&report, "visit.txt");
        let output = Reporter::new(OutputFormat::Json)
            .format_report(&context)
            .unwrap();

        assert!(output.contains("\"overallStatus\":\"non-compliant\""));
        assert!(!output.contains("visit.txt"));
    }

    #[test]
    fn test_default_format() {
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }
}
