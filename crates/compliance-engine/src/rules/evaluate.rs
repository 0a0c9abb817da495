use regex::RegexSet;

use super::{Branch, RuleDefinition, RuleEvaluation, RuleLabel, RuleOutcome, Strategy};
use crate::sections::{locate_section, SoapSection};

impl RuleDefinition {
    /// Evaluate this rule against a note and its source transcript.
    ///
    /// Total over any pair of strings: an empty transcript simply never
    /// triggers transcript-dependent gates.
    pub fn evaluate(&self, note: &str, transcript: &str) -> RuleEvaluation {
        let (outcome, label) = match &self.strategy {
            Strategy::SectionContent { section, content } => {
                (section_outcome(note, *section, content), None)
            }
            Strategy::Conditional { branches } => conditional_outcome(note, branches),
            Strategy::Advisory { pattern } => (
                RuleOutcome::pass_or(pattern.is_match(note), RuleOutcome::Warning),
                None,
            ),
            Strategy::SafetyGate { triggers, response } => {
                (gate_outcome(note, transcript, triggers, response), None)
            }
        };

        tracing::debug!(rule = %self.id, ?outcome, "rule evaluated");

        RuleEvaluation {
            rule_id: self.id.clone(),
            outcome,
            label: label.unwrap_or(&self.label).clone(),
            severity: self.severity,
            category: self.category,
        }
    }
}

fn section_outcome(note: &str, section: SoapSection, content: &RegexSet) -> RuleOutcome {
    let found = locate_section(note, section);
    RuleOutcome::pass_or(
        found.present && content.is_match(found.window_text),
        RuleOutcome::Fail,
    )
}

fn conditional_outcome<'a>(
    note: &str,
    branches: &'a [Branch],
) -> (RuleOutcome, Option<&'a RuleLabel>) {
    let Some(branch) = branches.iter().find(|b| b.when.is_match(note)) else {
        return (RuleOutcome::Abstain, None);
    };

    let satisfied = branch
        .require
        .as_ref()
        .map_or(true, |required| required.is_match(note));

    (
        RuleOutcome::pass_or(satisfied, RuleOutcome::Fail),
        branch.label.as_ref(),
    )
}

fn gate_outcome(
    note: &str,
    transcript: &str,
    triggers: &[String],
    response: &RegexSet,
) -> RuleOutcome {
    let note_lower = note.to_lowercase();
    let transcript_lower = transcript.to_lowercase();

    let triggered = triggers
        .iter()
        .any(|t| transcript_lower.contains(t.as_str()) || note_lower.contains(t.as_str()));

    if !triggered {
        return RuleOutcome::Abstain;
    }
    RuleOutcome::pass_or(response.is_match(note), RuleOutcome::Fail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{Category, Severity};

    fn rule(strategy: Strategy) -> RuleDefinition {
        RuleDefinition::new(
            "test_rule",
            RuleLabel::new("Test Rule", "Used in tests"),
            Severity::High,
            Category::Safety,
            strategy,
        )
    }

    #[test]
    fn test_section_content_requires_header() {
        let rule = rule(Strategy::section_content(SoapSection::Plan, &["rest"]).unwrap());
        assert_eq!(rule.evaluate("Advised rest.", "").outcome, RuleOutcome::Fail);
        assert_eq!(rule.evaluate("PLAN: rest", "").outcome, RuleOutcome::Pass);
    }

    #[test]
    fn test_section_content_requires_qualifying_text() {
        let rule = rule(Strategy::section_content(SoapSection::Plan, &["rest", "fluids"]).unwrap());
        assert_eq!(rule.evaluate("PLAN: none", "").outcome, RuleOutcome::Fail);
        assert_eq!(rule.evaluate("PLAN: FLUIDS", "").outcome, RuleOutcome::Pass);
    }

    #[test]
    fn test_conditional_first_matching_branch_decides() {
        let rule = rule(
            Strategy::conditional(vec![
                Branch::when(&["aspirin"]).unwrap().requiring(&[r"\d+\s*mg"]).unwrap(),
                Branch::when(&["no medication"])
                    .unwrap()
                    .labelled(RuleLabel::new("Deferred", "Nothing prescribed")),
            ])
            .unwrap(),
        );

        let dosed = rule.evaluate("Aspirin 81 mg daily", "");
        assert_eq!(dosed.outcome, RuleOutcome::Pass);
        assert_eq!(dosed.label.name, "Test Rule");

        let undosed = rule.evaluate("Aspirin daily. No medication otherwise.", "");
        assert_eq!(undosed.outcome, RuleOutcome::Fail);

        let deferred = rule.evaluate("No medication today", "");
        assert_eq!(deferred.outcome, RuleOutcome::Pass);
        assert_eq!(deferred.label.name, "Deferred");
    }

    #[test]
    fn test_conditional_abstains_without_trigger() {
        let rule = rule(Strategy::conditional(vec![Branch::when(&["aspirin"]).unwrap()]).unwrap());
        assert_eq!(rule.evaluate("Rest and fluids", "").outcome, RuleOutcome::Abstain);
    }

    #[test]
    fn test_advisory_warns_instead_of_failing() {
        let rule = rule(Strategy::advisory(&[r"follow[\s-]?up"]).unwrap());
        assert_eq!(rule.evaluate("Follow-up in 2 weeks", "").outcome, RuleOutcome::Pass);
        assert_eq!(rule.evaluate("Rest", "").outcome, RuleOutcome::Warning);
    }

    #[test]
    fn test_gate_triggers_from_transcript_or_note() {
        let rule = rule(Strategy::safety_gate(&["bleeding"], &["urgent"]).unwrap());

        assert_eq!(rule.evaluate("Plan: rest", "").outcome, RuleOutcome::Abstain);
        assert_eq!(
            rule.evaluate("Plan: rest", "Patient has BLEEDING gums").outcome,
            RuleOutcome::Fail
        );
        assert_eq!(
            rule.evaluate("Bleeding noted. Urgent referral.", "").outcome,
            RuleOutcome::Pass
        );
    }

    #[test]
    fn test_gate_response_must_be_in_note_not_transcript() {
        let rule = rule(Strategy::safety_gate(&["bleeding"], &["urgent"]).unwrap());
        let evaluation = rule.evaluate("Plan: rest", "bleeding, urgent care visit");
        assert_eq!(evaluation.outcome, RuleOutcome::Fail);
    }

    #[test]
    fn test_evaluation_carries_rule_metadata() {
        let rule = rule(Strategy::advisory(&["x"]).unwrap());
        let evaluation = rule.evaluate("x", "");
        assert_eq!(evaluation.rule_id, "test_rule");
        assert_eq!(evaluation.severity, Severity::High);
        assert_eq!(evaluation.category, Category::Safety);
        assert_eq!(evaluation.label.description, "Used in tests");
    }
}
