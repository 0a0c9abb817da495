//! Score aggregation and classification

use shared_types::{CheckResult, CheckStatus, ComplianceReport, OverallStatus};

use crate::rules::RuleEvaluation;

/// Outcome counts over the checks that produced a result
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub warning: usize,
    pub critical_failed: usize,
}

impl Tally {
    pub fn from_checks(checks: &[CheckResult]) -> Self {
        checks.iter().fold(Self::default(), |mut tally, check| {
            tally.total += 1;
            match check.status {
                CheckStatus::Pass => tally.passed += 1,
                CheckStatus::Fail => tally.failed += 1,
                CheckStatus::Warning => tally.warning += 1,
            }
            if check.is_critical_failure() {
                tally.critical_failed += 1;
            }
            tally
        })
    }
}

/// Drop abstentions and build the report from what remains
pub fn aggregate<I>(evaluations: I) -> ComplianceReport
where
    I: IntoIterator<Item = RuleEvaluation>,
{
    let checks = evaluations
        .into_iter()
        .filter_map(RuleEvaluation::into_check_result)
        .collect();
    build_report(checks)
}

/// Tally, score, classify and summarize a list of check results
pub fn build_report(checks: Vec<CheckResult>) -> ComplianceReport {
    let tally = Tally::from_checks(&checks);
    let score = compliance_score(tally.passed, tally.total);
    let status = classify(&tally);
    let summary = summarize(status, score, &checks);

    ComplianceReport {
        overall_status: status,
        compliance_score: score,
        total_checks: tally.total,
        passed_checks: tally.passed,
        failed_checks: tally.failed,
        warning_checks: tally.warning,
        critical_failed: tally.critical_failed,
        checks,
        summary,
    }
}

/// `round(100 * passed / total)` with halves rounded up, 0 when `total` is 0
pub fn compliance_score(passed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let passed = passed.min(total);
    let rounded = (passed * 200 + total) / (total * 2);
    u8::try_from(rounded).unwrap_or(100)
}

/// First match wins: any critical failure, then any failure or more than
/// one warning, then compliant.
pub fn classify(tally: &Tally) -> OverallStatus {
    if tally.critical_failed > 0 {
        OverallStatus::NonCompliant
    } else if tally.failed > 0 || tally.warning > 1 {
        OverallStatus::NeedsReview
    } else {
        OverallStatus::Compliant
    }
}

pub fn summarize(status: OverallStatus, score: u8, checks: &[CheckResult]) -> String {
    match status {
        OverallStatus::Compliant => format!(
            "Documentation meets all compliance requirements ({}% compliant).",
            score
        ),
        OverallStatus::NonCompliant => {
            let issues = join_names(checks.iter().filter(|c| c.is_critical_failure()));
            format!(
                "Critical compliance issues detected: {}. Document requires review before finalization.",
                issues
            )
        }
        OverallStatus::NeedsReview => {
            let failed: Vec<&CheckResult> = checks
                .iter()
                .filter(|c| c.status == CheckStatus::Fail)
                .collect();
            // warnings alone can trigger review; name them instead
            let issues = if failed.is_empty() {
                join_names(checks.iter().filter(|c| c.status == CheckStatus::Warning))
            } else {
                join_names(failed.into_iter())
            };
            format!("Documentation needs review. Issues found: {}.", issues)
        }
    }
}

fn join_names<'a>(checks: impl Iterator<Item = &'a CheckResult>) -> String {
    checks
        .map(|c| c.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
