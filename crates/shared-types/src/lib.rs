pub mod document;
pub mod types;

pub use document::{ClinicalDocument, InvalidInputError};
pub use types::{Category, CheckResult, CheckStatus, ComplianceReport, OverallStatus, Severity};
