//! HTTP handler for the crop yield forecast endpoint

use std::collections::BTreeMap;

use axum::{extract::State, Json};

use crate::error::AppResult;
use crate::models::FieldForecastSeries;
use crate::services::ForecastService;
use crate::AppState;

/// Get yield forecasts grouped by field name
pub async fn get_crop_yield_forecast(
    State(state): State<AppState>,
) -> AppResult<Json<BTreeMap<String, FieldForecastSeries>>> {
    let service = ForecastService::new(state.db);
    let forecasts = service.crop_yield_forecast().await?;
    Ok(Json(forecasts))
}
