//! HTTP handler for the analytics endpoint

use axum::{extract::State, Json};

use crate::error::AppResult;
use crate::models::AnalyticsSummary;
use crate::services::AnalyticsService;
use crate::AppState;

/// Get operational analytics aggregates
pub async fn get_analytics(State(state): State<AppState>) -> AppResult<Json<AnalyticsSummary>> {
    let service = AnalyticsService::new(state.db);
    let summary = service.summary().await?;
    Ok(Json(summary))
}
