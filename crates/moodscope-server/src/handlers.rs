//! API route handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::Json;
use tracing::{debug, info, warn};

use moodscope_core::AnalysisResult;

use crate::error::{ApiError, Result};
use crate::models::{
    AnalyzeRequest, ClearHistoryResponse, HealthResponse, HistoryEntryResponse, HistoryQuery,
    HistoryResponse,
};
use crate::state::AppState;

/// POST /api/analyze - Analyze text and record it in the history.
pub async fn analyze_text(
    State(state): State<AppState>,
    payload: std::result::Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalysisResult>> {
    let Json(req) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    if req.text.trim().is_empty() {
        return Err(ApiError::EmptyText);
    }

    debug!(text_len = req.text.len(), "Analyzing text");
    let result = state.analyzer.analyze(req.text.as_str());

    // A failed history write does not fail the analysis
    if let Err(e) = state.db.record_result(&result) {
        warn!("Failed to record history entry: {}", e);
    }

    Ok(Json(result))
}

/// GET /api/history - Recent analyses, newest first.
pub async fn get_history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<HistoryResponse>> {
    let entries = state
        .db
        .recent_records(query.limit)?
        .into_iter()
        .map(HistoryEntryResponse::from)
        .collect();
    let total = state.db.count()?;

    Ok(Json(HistoryResponse { entries, total }))
}

/// DELETE /api/history - Remove all history entries.
pub async fn clear_history(State(state): State<AppState>) -> Result<Json<ClearHistoryResponse>> {
    let cleared = state.db.clear_history()?;
    info!(cleared, "History cleared");

    Ok(Json(ClearHistoryResponse { cleared }))
}

/// GET /api/health - Liveness check.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
