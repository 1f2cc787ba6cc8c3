//! HTTP handlers for irrigation endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::AppResult;
use crate::services::irrigation::{IrrigationRecord, StartIrrigationInput};
use crate::services::IrrigationService;
use crate::AppState;

/// Response for a scheduled irrigation run
#[derive(Debug, Serialize)]
pub struct StartIrrigationResponse {
    pub status: String,
    pub message: String,
    pub scheduled_time: DateTime<Utc>,
    pub duration: i64,
    pub water_volume: f64,
}

/// Schedule an irrigation run for a field
pub async fn start_irrigation(
    State(state): State<AppState>,
    Json(input): Json<StartIrrigationInput>,
) -> AppResult<Json<StartIrrigationResponse>> {
    let service = IrrigationService::new(state.db);
    let scheduled = service.start(input).await?;

    Ok(Json(StartIrrigationResponse {
        status: "success".to_string(),
        message: "Irrigation started".to_string(),
        scheduled_time: scheduled.scheduled_time,
        duration: scheduled.duration,
        water_volume: scheduled.water_volume,
    }))
}

/// Get recent irrigation records for a field
pub async fn get_irrigation_history(
    State(state): State<AppState>,
    Path(field_id): Path<i64>,
) -> AppResult<Json<Vec<IrrigationRecord>>> {
    let service = IrrigationService::new(state.db);
    let records = service.history(field_id).await?;
    Ok(Json(records))
}
