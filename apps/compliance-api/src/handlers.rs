//! HTTP handlers for the Compliance API

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use shared_types::ClinicalDocument;

use crate::error::ApiError;
use crate::models::*;
use crate::state::AppState;

/// Health check endpoint
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: "compliance-api".to_string(),
        ruleset_version: state.engine.rules().version().to_string(),
    })
}

/// Check a note (and optional transcript) for compliance
pub async fn check_compliance(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CheckComplianceRequest>, JsonRejection>,
) -> Result<Json<CheckComplianceResponse>, ApiError> {
    let Json(req) = payload?;
    let note = req.soap_note.unwrap_or_default();

    let limit = state.config.max_note_bytes;
    if note.len() > limit {
        return Err(ApiError::NoteTooLarge { limit });
    }

    let document = ClinicalDocument::new(note, req.transcript)?;

    tracing::info!(
        "Checking compliance: note {} bytes, transcript {} bytes",
        document.note().len(),
        document.transcript().len()
    );

    let report = state.engine.check_document(&document);

    tracing::info!(
        status = %report.overall_status,
        score = report.compliance_score,
        critical_failed = report.critical_failed,
        "Compliance check complete"
    );

    Ok(Json(CheckComplianceResponse {
        success: true,
        compliance: report,
    }))
}

/// List the active rule table
pub async fn list_rules(State(state): State<Arc<AppState>>) -> Json<RulesResponse> {
    let rules = state.engine.rules();
    Json(RulesResponse {
        version: rules.version().to_string(),
        rules: rules.summaries(),
    })
}
