//! HTTP handlers for alert endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::error::AppResult;
use crate::models::StatusMessage;
use crate::services::alert::{ActiveAlert, CreateAlertInput};
use crate::services::AlertService;
use crate::AppState;

/// List unresolved alerts
pub async fn list_alerts(State(state): State<AppState>) -> AppResult<Json<Vec<ActiveAlert>>> {
    let service = AlertService::new(state.db);
    let alerts = service.unresolved().await?;
    Ok(Json(alerts))
}

/// Resolve an alert; succeeds even for unknown ids
pub async fn resolve_alert(
    State(state): State<AppState>,
    Path(alert_id): Path<i64>,
) -> AppResult<Json<StatusMessage>> {
    let service = AlertService::new(state.db);
    service.resolve(alert_id).await?;
    Ok(Json(StatusMessage::success("Alert resolved")))
}

/// Create a new alert
pub async fn create_alert(
    State(state): State<AppState>,
    Json(input): Json<CreateAlertInput>,
) -> AppResult<(StatusCode, Json<StatusMessage>)> {
    let service = AlertService::new(state.db);
    service.create(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(StatusMessage::success("Alert created")),
    ))
}
