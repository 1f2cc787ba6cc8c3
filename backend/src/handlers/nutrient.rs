//! HTTP handlers for NPK nutrient reading endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::error::AppResult;
use crate::models::StatusMessage;
use crate::services::nutrient::{NutrientReading, RecordNutrientInput};
use crate::services::NutrientService;
use crate::AppState;

/// Get recent NPK readings for a field
pub async fn get_npk_levels(
    State(state): State<AppState>,
    Path(field_id): Path<i64>,
) -> AppResult<Json<Vec<NutrientReading>>> {
    let service = NutrientService::new(state.db);
    let readings = service.recent(field_id).await?;
    Ok(Json(readings))
}

/// Record a new NPK reading for a field
pub async fn record_npk_levels(
    State(state): State<AppState>,
    Path(field_id): Path<i64>,
    Json(input): Json<RecordNutrientInput>,
) -> AppResult<(StatusCode, Json<StatusMessage>)> {
    let service = NutrientService::new(state.db);
    service.record(field_id, input).await?;
    Ok((
        StatusCode::CREATED,
        Json(StatusMessage::success("NPK levels updated")),
    ))
}
