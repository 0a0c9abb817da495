//! Request and response bodies for the Compliance API

use compliance_engine::RuleSummary;
use serde::{Deserialize, Serialize};
use shared_types::ComplianceReport;

/// Body of `POST /api/notes/check-compliance`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckComplianceRequest {
    #[serde(default)]
    pub soap_note: Option<String>,
    #[serde(default)]
    pub transcript: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckComplianceResponse {
    pub success: bool,
    pub compliance: ComplianceReport,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub ruleset_version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RulesResponse {
    pub version: String,
    pub rules: Vec<RuleSummary>,
}
