//! Report types shared by the engine and every caller.
//!
//! Field names and the literal values of every vocabulary below are a
//! compatibility surface: renderers switch on them, so serde renames must
//! never drift.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How serious a failed check is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }
}

/// Which documentation concern a check belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Completeness,
    Safety,
    Continuity,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Completeness => "completeness",
            Category::Safety => "safety",
            Category::Continuity => "continuity",
        }
    }
}

/// Outcome of a single check that produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Pass,
    Fail,
    Warning,
}

impl CheckStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckStatus::Pass => "pass",
            CheckStatus::Fail => "fail",
            CheckStatus::Warning => "warning",
        }
    }
}

/// Classification of the whole note
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverallStatus {
    Compliant,
    NeedsReview,
    NonCompliant,
}

impl OverallStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OverallStatus::Compliant => "compliant",
            OverallStatus::NeedsReview => "needs-review",
            OverallStatus::NonCompliant => "non-compliant",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),+) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )+
    };
}

display_as_str!(Severity, Category, CheckStatus, OverallStatus);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    pub id: String, // e.g., "subjective_present"
    pub name: String,
    pub description: String,
    pub status: CheckStatus,
    pub severity: Severity,
    pub category: Category,
}

impl CheckResult {
    pub fn is_critical_failure(&self) -> bool {
        self.status == CheckStatus::Fail && self.severity == Severity::Critical
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceReport {
    pub overall_status: OverallStatus,
    pub compliance_score: u8, // 0..=100
    pub total_checks: usize,
    pub passed_checks: usize,
    pub failed_checks: usize,
    pub warning_checks: usize,
    pub critical_failed: usize,
    pub checks: Vec<CheckResult>,
    pub summary: String,
}

impl ComplianceReport {
    pub fn is_compliant(&self) -> bool {
        self.overall_status == OverallStatus::Compliant
    }

    /// Look up a check by its rule id
    pub fn check(&self, id: &str) -> Option<&CheckResult> {
        self.checks.iter().find(|c| c.id == id)
    }

    /// All checks that failed, in report order
    pub fn failed(&self) -> impl Iterator<Item = &CheckResult> {
        self.checks
            .iter()
            .filter(|c| c.status == CheckStatus::Fail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sample_report() -> ComplianceReport {
        ComplianceReport {
            overall_status: OverallStatus::NonCompliant,
            compliance_score: 50,
            total_checks: 2,
            passed_checks: 1,
            failed_checks: 1,
            warning_checks: 0,
            critical_failed: 1,
            checks: vec![
                CheckResult {
                    id: "plan_present".to_string(),
                    name: "Treatment Plan Documented".to_string(),
                    description: "Plan section must be present".to_string(),
                    status: CheckStatus::Fail,
                    severity: Severity::Critical,
                    category: Category::Completeness,
                },
                CheckResult {
                    id: "followup_present".to_string(),
                    name: "Follow-up Instructions".to_string(),
                    description: "Return instructions".to_string(),
                    status: CheckStatus::Pass,
                    severity: Severity::Medium,
                    category: Category::Continuity,
                },
            ],
            summary: "Critical compliance issues detected: Treatment Plan Documented.".to_string(),
        }
    }

    #[test]
    fn test_report_uses_camel_case_field_names() {
        let value = serde_json::to_value(sample_report()).unwrap();
        let object = value.as_object().unwrap();

        for key in [
            "overallStatus",
            "complianceScore",
            "totalChecks",
            "passedChecks",
            "failedChecks",
            "warningChecks",
            "criticalFailed",
            "checks",
            "summary",
        ] {
            assert!(object.contains_key(key), "missing {}", key);
        }
        assert_eq!(object.len(), 9);
    }

    #[test]
    fn test_vocabulary_literals() {
        let value = serde_json::to_value(sample_report()).unwrap();
        assert_eq!(value["overallStatus"], json!("non-compliant"));
        assert_eq!(
            value["checks"][0],
            json!({
                "id": "plan_present",
                "name": "Treatment Plan Documented",
                "description": "Plan section must be present",
                "status": "fail",
                "severity": "critical",
                "category": "completeness"
            })
        );
        assert_eq!(
            serde_json::to_value(OverallStatus::NeedsReview).unwrap(),
            json!("needs-review")
        );
        assert_eq!(serde_json::to_value(CheckStatus::Warning).unwrap(), json!("warning"));
        assert_eq!(serde_json::to_value(Severity::Low).unwrap(), json!("low"));
    }

    #[test]
    fn test_display_matches_serialized_form() {
        for status in [
            OverallStatus::Compliant,
            OverallStatus::NeedsReview,
            OverallStatus::NonCompliant,
        ] {
            let serialized = serde_json::to_value(status).unwrap();
            assert_eq!(serialized, json!(status.to_string()));
        }
        assert_eq!(Severity::High.to_string(), "high");
        assert_eq!(Category::Continuity.to_string(), "continuity");
    }

    #[test]
    fn test_report_lookups() {
        let report = sample_report();
        assert!(!report.is_compliant());
        assert_eq!(
            report.check("followup_present").map(|c| c.status),
            Some(CheckStatus::Pass)
        );
        assert!(report.check("missing").is_none());

        let failed: Vec<_> = report.failed().map(|c| c.id.as_str()).collect();
        assert_eq!(failed, vec!["plan_present"]);
        assert!(report.checks[0].is_critical_failure());
    }

    #[test]
    fn test_report_deserializes_from_wire_form() {
        let report = sample_report();
        let text = serde_json::to_string(&report).unwrap();
        let parsed: ComplianceReport = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, report);
    }
}
