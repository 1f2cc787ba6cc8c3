//! HTTP handlers for field management endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::AppResult;
use crate::models::StatusMessage;
use crate::services::field::{FieldDetail, FieldSummary, UpdateFieldInput};
use crate::services::FieldService;
use crate::AppState;

/// List all fields
pub async fn list_fields(State(state): State<AppState>) -> AppResult<Json<Vec<FieldSummary>>> {
    let service = FieldService::new(state.db);
    let fields = service.list().await?;
    Ok(Json(fields))
}

/// Get a field with its latest nutrient reading
pub async fn get_field_detail(
    State(state): State<AppState>,
    Path(field_id): Path<i64>,
) -> AppResult<Json<FieldDetail>> {
    let service = FieldService::new(state.db);
    let detail = service.detail(field_id).await?;
    Ok(Json(detail))
}

/// Partially update a field's live readings
pub async fn update_field(
    State(state): State<AppState>,
    Json(input): Json<UpdateFieldInput>,
) -> AppResult<Json<StatusMessage>> {
    let service = FieldService::new(state.db);
    service.update(input).await?;
    Ok(Json(StatusMessage::success("Field updated")))
}
