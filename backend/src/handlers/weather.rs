//! HTTP handlers for weather endpoints

use axum::{extract::State, Json};

use crate::error::AppResult;
use crate::models::StatusMessage;
use crate::services::weather::{DailyWeather, UpdateWeatherInput};
use crate::services::WeatherService;
use crate::AppState;

/// Get the upcoming weather forecast
pub async fn get_weather(State(state): State<AppState>) -> AppResult<Json<Vec<DailyWeather>>> {
    let service = WeatherService::new(state.db);
    let forecast = service.forecast().await?;
    Ok(Json(forecast))
}

/// Upsert the forecast for a date
pub async fn update_weather(
    State(state): State<AppState>,
    Json(input): Json<UpdateWeatherInput>,
) -> AppResult<Json<StatusMessage>> {
    let service = WeatherService::new(state.db);
    service.upsert(input).await?;
    Ok(Json(StatusMessage::success("Weather updated")))
}
