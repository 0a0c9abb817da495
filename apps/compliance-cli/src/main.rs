//! Compliance CLI
//!
//! Runs the SOAP compliance engine over a note file (and optionally the
//! transcript it was generated from) and prints a report.

mod input;
mod reporter;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use compliance_engine::ComplianceEngine;
use shared_types::{ClinicalDocument, OverallStatus};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use reporter::{OutputFormat, ReportContext, Reporter};

#[derive(Parser, Debug)]
#[command(name = "compliance-cli")]
#[command(version, about = "Check a SOAP note for documentation compliance")]
struct Args {
    /// Path to the note, or `-` to read it from stdin
    note: PathBuf,

    /// Path to the source transcript
    #[arg(short, long)]
    transcript: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Exit with status 1 when the note is at or below this level
    #[arg(long, value_enum, default_value_t = FailOn::Never)]
    fail_on: FailOn,
}

/// Threshold for a failing exit status
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FailOn {
    Never,
    NeedsReview,
    NonCompliant,
}

impl FailOn {
    fn is_met_by(self, status: OverallStatus) -> bool {
        match self {
            FailOn::Never => false,
            FailOn::NeedsReview => status != OverallStatus::Compliant,
            FailOn::NonCompliant => status == OverallStatus::NonCompliant,
        }
    }
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    // Logs go to stderr; stdout carries the report
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let note = input::read_source(&args.note)?;
    let transcript = args
        .transcript
        .as_deref()
        .map(input::read_source)
        .transpose()?;

    let document = ClinicalDocument::new(note, transcript)?;
    tracing::info!("Checking {}", args.note.display());

    let engine = ComplianceEngine::new();
    let report = engine.check_document(&document);

    let context = ReportContext::new(&report, input::display_name(&args.note));
    Reporter::new(args.format).report(&context)?;

    if args.fail_on.is_met_by(report.overall_status) {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fail_on_thresholds() {
        assert!(!FailOn::Never.is_met_by(OverallStatus::NonCompliant));

        assert!(FailOn::NeedsReview.is_met_by(OverallStatus::NeedsReview));
        assert!(FailOn::NeedsReview.is_met_by(OverallStatus::NonCompliant));
        assert!(!FailOn::NeedsReview.is_met_by(OverallStatus::Compliant));

        assert!(FailOn::NonCompliant.is_met_by(OverallStatus::NonCompliant));
        assert!(!FailOn::NonCompliant.is_met_by(OverallStatus::NeedsReview));
    }

    #[test]
    fn test_parses_arguments() {
        let args = Args::try_parse_from([
            "compliance-cli",
            "note.txt",
            "--transcript",
            "transcript.txt",
            "--format",
            "json-pretty",
            "--fail-on",
            "needs-review",
        ])
        .unwrap();

        assert_eq!(args.note, PathBuf::from("note.txt"));
        assert_eq!(args.transcript, Some(PathBuf::from("transcript.txt")));
        assert_eq!(args.format, OutputFormat::JsonPretty);
        assert_eq!(args.fail_on, FailOn::NeedsReview);
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["compliance-cli", "-"]).unwrap();
        assert_eq!(args.format, OutputFormat::Text);
        assert_eq!(args.fail_on, FailOn::Never);
        assert!(args.transcript.is_none());
    }
}
