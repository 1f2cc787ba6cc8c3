//! Route definitions for the Agri Dashboard Platform

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Dashboard metrics
        .route("/dashboard", get(handlers::get_dashboard))
        // Field management
        .route("/fields", get(handlers::list_fields))
        .route("/field/:field_id", get(handlers::get_field_detail))
        .route("/field-update", post(handlers::update_field))
        // Irrigation control
        .route("/irrigation/start", post(handlers::start_irrigation))
        .route(
            "/irrigation/history/:field_id",
            get(handlers::get_irrigation_history),
        )
        // Yield forecasting
        .route("/crop-yield-forecast", get(handlers::get_crop_yield_forecast))
        // Alerts
        .route("/alerts", get(handlers::list_alerts).post(handlers::create_alert))
        .route("/alerts/:alert_id/resolve", put(handlers::resolve_alert))
        // Weather
        .route("/weather", get(handlers::get_weather))
        .route("/weather/update", post(handlers::update_weather))
        // NPK nutrient readings
        .route(
            "/npk-levels/:field_id",
            get(handlers::get_npk_levels).post(handlers::record_npk_levels),
        )
        // Analytics
        .route("/analytics", get(handlers::get_analytics))
        // Health check
        .route("/health-check", get(handlers::health_check))
}
