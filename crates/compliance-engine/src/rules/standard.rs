//! The standard SOAP documentation rule set
//!
//! Seven rules: one per SOAP section, medication dosage, follow-up
//! instructions and red-flag symptom handling. Built once per process and
//! shared read-only.

use std::sync::Arc;

use lazy_static::lazy_static;
use shared_types::{Category, Severity};

use super::{Branch, RuleDefinition, RuleError, RuleLabel, RuleSet, Strategy};
use crate::patterns::*;
use crate::sections::SoapSection;

/// Version of the standard rule table
pub const RULESET_VERSION: &str = "1.0.0";

lazy_static! {
    static ref STANDARD_RULES: Arc<RuleSet> = Arc::new(build_standard_rules().unwrap());
}

/// Shared handle to the standard rule table
pub fn standard_rules() -> Arc<RuleSet> {
    Arc::clone(&STANDARD_RULES)
}

impl RuleSet {
    /// The standard rule table, shared across the process
    pub fn standard() -> Arc<RuleSet> {
        standard_rules()
    }
}

/// Build a fresh copy of the standard rule table
pub fn build_standard_rules() -> Result<RuleSet, RuleError> {
    let medication_plan = RuleLabel::new(
        "Medication Plan Documented",
        "Medication status appropriately documented (no medications prescribed or pending results)",
    );

    let rules = vec![
        section_rule(
            "subjective_present",
            RuleLabel::new(
                "Chief Complaint Documented",
                "Patient's primary complaint must be documented in Subjective section",
            ),
            SoapSection::Subjective,
            SUBJECTIVE_CONTENT,
        )?,
        section_rule(
            "objective_present",
            RuleLabel::new(
                "Clinical Findings Documented",
                "Objective findings (vitals, physical exam, or test results) must be present",
            ),
            SoapSection::Objective,
            OBJECTIVE_CONTENT,
        )?,
        section_rule(
            "assessment_present",
            RuleLabel::new(
                "Diagnosis or Assessment",
                "Clinical assessment or working diagnosis must be documented",
            ),
            SoapSection::Assessment,
            ASSESSMENT_CONTENT,
        )?,
        section_rule(
            "plan_present",
            RuleLabel::new(
                "Treatment Plan Documented",
                "Plan section must include treatment, medications, or follow-up instructions",
            ),
            SoapSection::Plan,
            PLAN_CONTENT,
        )?,
        RuleDefinition::new(
            "medication_dosage",
            RuleLabel::new(
                "Medication Dosage Specified",
                "Prescribed medications must include specific dosage",
            ),
            Severity::High,
            Category::Safety,
            Strategy::conditional(vec![
                Branch::when(PRESCRIBING_DECLINED)?.labelled(medication_plan.clone()),
                Branch::when(PRESCRIBING)?.requiring(DOSAGE)?,
                Branch::when(MEDICATION_DEFERRED)?.labelled(medication_plan),
            ])?,
        ),
        RuleDefinition::new(
            "followup_present",
            RuleLabel::new(
                "Follow-up Instructions",
                "Follow-up plan or return instructions should be documented",
            ),
            Severity::Medium,
            Category::Continuity,
            Strategy::advisory(FOLLOW_UP)?,
        ),
        RuleDefinition::new(
            "red_flag_addressed",
            RuleLabel::new(
                "Critical Symptoms Addressed",
                "Urgent symptoms require immediate diagnostic or treatment plan",
            ),
            Severity::Critical,
            Category::Safety,
            Strategy::safety_gate(RED_FLAG_SYMPTOMS, URGENT_RESPONSE)?,
        ),
    ];

    RuleSet::new(RULESET_VERSION, rules)
}

fn section_rule(
    id: &str,
    label: RuleLabel,
    section: SoapSection,
    patterns: &[&str],
) -> Result<RuleDefinition, RuleError> {
    Ok(RuleDefinition::new(
        id,
        label,
        Severity::Critical,
        Category::Completeness,
        Strategy::section_content(section, patterns)?,
    ))
}
