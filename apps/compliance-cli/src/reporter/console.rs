//! Console reporter for compliance reports
//!
//! Provides human-readable output with status indicators.

use std::fmt::Write;

use anyhow::Result;
use shared_types::{CheckResult, CheckStatus, OverallStatus};

use super::ReportContext;

/// Console format reporter
pub struct ConsoleReporter;

impl ConsoleReporter {
    /// Format a report for console output
    pub fn format(context: &ReportContext<'_>) -> Result<String> {
        let report = context.report;
        let mut output = String::new();

        writeln!(output, "SOAP Note Compliance Report")?;
        writeln!(output, "════════════════════════════════════════════════════════════")?;
        writeln!(output, "Source:   {}", context.source)?;
        writeln!(output, "Checked:  {}", context.checked_at.to_rfc3339())?;
        writeln!(output)?;

        writeln!(
            output,
            "Status:   {}",
            Self::status_label(report.overall_status)
        )?;
        writeln!(output, "Score:    {}%", report.compliance_score)?;
        writeln!(
            output,
            "Checks:   {} passed, {} failed, {} warnings ({} total)",
            report.passed_checks, report.failed_checks, report.warning_checks, report.total_checks
        )?;
        writeln!(output)?;

        for check in &report.checks {
            Self::format_check(&mut output, check)?;
        }

        writeln!(output)?;
        writeln!(output, "{}", report.summary)?;

        if report.critical_failed > 0 {
            writeln!(output)?;
            writeln!(
                output,
                "!! Critical issues detected ({}). This document requires review and correction before finalization.",
                report.critical_failed
            )?;
        }

        Ok(output)
    }

    fn format_check(output: &mut String, check: &CheckResult) -> Result<()> {
        writeln!(
            output,
            "  {} {} [{}] ({})",
            Self::status_symbol(check.status),
            check.name,
            check.severity.as_str().to_uppercase(),
            check.category
        )?;
        writeln!(output, "      {}", check.description)?;
        Ok(())
    }

    fn status_symbol(status: CheckStatus) -> &'static str {
        match status {
            CheckStatus::Pass => "✓",
            CheckStatus::Fail => "✗",
            CheckStatus::Warning => "!",
        }
    }

    fn status_label(status: OverallStatus) -> String {
        status.as_str().replace('-', " ").to_uppercase()
    }
}
