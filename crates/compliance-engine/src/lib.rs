//! Deterministic compliance checks for generated SOAP notes.
//!
//! Given a note and the transcript it was generated from, the engine runs a
//! fixed table of structural and content rules and returns a scored
//! [`ComplianceReport`]. Evaluation is pure: no I/O, no state kept between
//! calls.

pub mod patterns;
pub mod report;
pub mod rules;
pub mod sections;

use std::sync::Arc;

use shared_types::{ClinicalDocument, ComplianceReport};

pub use report::{aggregate, build_report};
pub use rules::{
    standard_rules, Branch, RuleDefinition, RuleError, RuleEvaluation, RuleLabel, RuleOutcome,
    RuleSet, RuleSummary, Strategy, RULESET_VERSION,
};
pub use sections::{locate_header, locate_section, SectionMatch, SoapSection};

/// ComplianceEngine entry point
#[derive(Debug, Clone)]
pub struct ComplianceEngine {
    rules: Arc<RuleSet>,
}

impl ComplianceEngine {
    /// Engine backed by the standard rule table
    pub fn new() -> Self {
        Self {
            rules: RuleSet::standard(),
        }
    }

    pub fn with_rules(rules: RuleSet) -> Self {
        Self {
            rules: Arc::new(rules),
        }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Check a note against every rule. `transcript` may be empty.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(note_len = note.len(), transcript_len = transcript.len())
    )]
    pub fn check_compliance(&self, note: &str, transcript: &str) -> ComplianceReport {
        let report = aggregate(self.rules.evaluate(note, transcript));

        tracing::debug!(
            status = %report.overall_status,
            score = report.compliance_score,
            total = report.total_checks,
            "compliance check complete"
        );

        report
    }

    /// Check a validated document
    pub fn check_document(&self, document: &ClinicalDocument) -> ComplianceReport {
        self.check_compliance(document.note(), document.transcript())
    }
}

impl Default for ComplianceEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Check a note with the standard rule table
pub fn check_compliance(note: &str, transcript: &str) -> ComplianceReport {
    ComplianceEngine::new().check_compliance(note, transcript)
}
