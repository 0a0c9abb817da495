use std::collections::HashSet;

use serde::Serialize;
use shared_types::{Category, Severity};

use super::{RuleDefinition, RuleError, RuleEvaluation};

/// A versioned, read-only table of rules evaluated in order
#[derive(Debug, Clone)]
pub struct RuleSet {
    version: String,
    rules: Vec<RuleDefinition>,
}

/// Rule metadata without its patterns, for listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub severity: Severity,
    pub category: Category,
    pub kind: &'static str,
}

impl RuleSet {
    /// Build a rule set.
    ///
    /// Ids must be unique, and at least one rule must never abstain so that
    /// every report has a non-zero total.
    pub fn new(version: impl Into<String>, rules: Vec<RuleDefinition>) -> Result<Self, RuleError> {
        let mut seen = HashSet::new();
        for rule in &rules {
            if !seen.insert(rule.id.as_str()) {
                return Err(RuleError::DuplicateId(rule.id.clone()));
            }
        }

        if rules.iter().all(|r| r.strategy.may_abstain()) {
            return Err(RuleError::NoMandatoryRules);
        }

        Ok(Self {
            version: version.into(),
            rules,
        })
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn rules(&self) -> &[RuleDefinition] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&RuleDefinition> {
        self.rules.iter().find(|r| r.id == id)
    }

    /// Evaluate every rule in table order, abstentions included
    pub fn evaluate(&self, note: &str, transcript: &str) -> Vec<RuleEvaluation> {
        self.rules
            .iter()
            .map(|rule| rule.evaluate(note, transcript))
            .collect()
    }

    pub fn summaries(&self) -> Vec<RuleSummary> {
        self.rules
            .iter()
            .map(|rule| RuleSummary {
                id: rule.id.clone(),
                name: rule.label.name.clone(),
                description: rule.label.description.clone(),
                severity: rule.severity,
                category: rule.category,
                kind: rule.strategy.kind(),
            })
            .collect()
    }
}
