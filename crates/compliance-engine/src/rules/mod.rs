//! Declarative rule table
//!
//! A rule is data: an id, a display label, a severity, a category and one
//! of four evaluation strategies. The evaluator walks the table without
//! any rule-specific branching, so rule sets can be tested and extended on
//! their own.

mod evaluate;
mod ruleset;
pub mod standard;

pub use ruleset::{RuleSet, RuleSummary};
pub use standard::{standard_rules, RULESET_VERSION};

use regex::{RegexSet, RegexSetBuilder};
use serde::Serialize;
use shared_types::{Category, CheckResult, CheckStatus, Severity};
use thiserror::Error;

use crate::sections::SoapSection;

/// Errors raised while building a rule set
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("Invalid rule pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("Rule has no patterns: {0}")]
    EmptyPatterns(&'static str),

    #[error("Duplicate rule id: {0}")]
    DuplicateId(String),

    #[error("Rule set has no rule that always reports a result")]
    NoMandatoryRules,
}

/// Display name and description carried into a check result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleLabel {
    pub name: String,
    pub description: String,
}

impl RuleLabel {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Compile a list of alternatives into a case-insensitive set
fn compile(patterns: &[&str], what: &'static str) -> Result<RegexSet, RuleError> {
    if patterns.is_empty() {
        return Err(RuleError::EmptyPatterns(what));
    }
    Ok(RegexSetBuilder::new(patterns)
        .case_insensitive(true)
        .build()?)
}

/// One arm of a conditional rule
#[derive(Debug, Clone)]
pub struct Branch {
    /// Note-wide trigger; the first branch whose trigger matches decides
    pub when: RegexSet,
    /// When set, the branch passes only if one of these also matches the note
    pub require: Option<RegexSet>,
    /// Replaces the rule's label when this branch decides
    pub label: Option<RuleLabel>,
}

impl Branch {
    pub fn when(patterns: &[&str]) -> Result<Self, RuleError> {
        Ok(Self {
            when: compile(patterns, "branch trigger")?,
            require: None,
            label: None,
        })
    }

    pub fn requiring(mut self, patterns: &[&str]) -> Result<Self, RuleError> {
        self.require = Some(compile(patterns, "branch requirement")?);
        Ok(self)
    }

    pub fn labelled(mut self, label: RuleLabel) -> Self {
        self.label = Some(label);
        self
    }
}

/// How a rule decides its outcome
#[derive(Debug, Clone)]
pub enum Strategy {
    /// The section header must exist and its window must match one alternative
    SectionContent {
        section: SoapSection,
        content: RegexSet,
    },

    /// Ordered branches over the whole note; abstains when no trigger matches
    Conditional { branches: Vec<Branch> },

    /// Whole-note match passes, otherwise a warning (never a failure)
    Advisory { pattern: RegexSet },

    /// Fires when a trigger phrase appears in the note or transcript, then
    /// requires a response pattern in the note; abstains otherwise
    SafetyGate {
        triggers: Vec<String>,
        response: RegexSet,
    },
}

impl Strategy {
    pub fn section_content(section: SoapSection, patterns: &[&str]) -> Result<Self, RuleError> {
        Ok(Strategy::SectionContent {
            section,
            content: compile(patterns, "section content")?,
        })
    }

    pub fn conditional(branches: Vec<Branch>) -> Result<Self, RuleError> {
        if branches.is_empty() {
            return Err(RuleError::EmptyPatterns("conditional branches"));
        }
        Ok(Strategy::Conditional { branches })
    }

    pub fn advisory(patterns: &[&str]) -> Result<Self, RuleError> {
        Ok(Strategy::Advisory {
            pattern: compile(patterns, "advisory")?,
        })
    }

    pub fn safety_gate(triggers: &[&str], response: &[&str]) -> Result<Self, RuleError> {
        if triggers.is_empty() {
            return Err(RuleError::EmptyPatterns("safety gate triggers"));
        }
        Ok(Strategy::SafetyGate {
            triggers: triggers.iter().map(|t| t.to_lowercase()).collect(),
            response: compile(response, "safety gate response")?,
        })
    }

    /// Short machine name of the strategy
    pub fn kind(&self) -> &'static str {
        match self {
            Strategy::SectionContent { .. } => "section_content",
            Strategy::Conditional { .. } => "conditional",
            Strategy::Advisory { .. } => "advisory",
            Strategy::SafetyGate { .. } => "safety_gate",
        }
    }

    /// Whether the strategy can decline to produce a result
    pub fn may_abstain(&self) -> bool {
        matches!(
            self,
            Strategy::Conditional { .. } | Strategy::SafetyGate { .. }
        )
    }
}

/// A single entry of the rule table
#[derive(Debug, Clone)]
pub struct RuleDefinition {
    pub id: String,
    pub label: RuleLabel,
    pub severity: Severity,
    pub category: Category,
    pub strategy: Strategy,
}

impl RuleDefinition {
    pub fn new(
        id: impl Into<String>,
        label: RuleLabel,
        severity: Severity,
        category: Category,
        strategy: Strategy,
    ) -> Self {
        Self {
            id: id.into(),
            label,
            severity,
            category,
            strategy,
        }
    }
}

/// Outcome of evaluating one rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleOutcome {
    Pass,
    Fail,
    Warning,
    /// Precondition not met; excluded from every count
    Abstain,
}

impl RuleOutcome {
    /// Pass when `passed`, otherwise `otherwise`
    pub fn pass_or(passed: bool, otherwise: RuleOutcome) -> Self {
        if passed {
            RuleOutcome::Pass
        } else {
            otherwise
        }
    }

    pub fn status(self) -> Option<CheckStatus> {
        match self {
            RuleOutcome::Pass => Some(CheckStatus::Pass),
            RuleOutcome::Fail => Some(CheckStatus::Fail),
            RuleOutcome::Warning => Some(CheckStatus::Warning),
            RuleOutcome::Abstain => None,
        }
    }
}

/// A rule's outcome together with the metadata a check result needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleEvaluation {
    pub rule_id: String,
    pub outcome: RuleOutcome,
    pub label: RuleLabel,
    pub severity: Severity,
    pub category: Category,
}

impl RuleEvaluation {
    /// Convert into a report entry; abstentions produce nothing
    pub fn into_check_result(self) -> Option<CheckResult> {
        let status = self.outcome.status()?;
        Some(CheckResult {
            id: self.rule_id,
            name: self.label.name,
            description: self.label.description,
            status,
            severity: self.severity,
            category: self.category,
        })
    }
}
