//! HTTP handlers for the dashboard landing page and summary metrics

use axum::{extract::State, response::Html, Json};

use crate::error::AppResult;
use crate::models::DashboardSummary;
use crate::services::DashboardService;
use crate::AppState;

/// Serve the dashboard shell; the page pulls its data from /api.
pub async fn index() -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>Agri Dashboard</title></head>
<body>
  <h1>Agri Dashboard</h1>
  <p>The dashboard front end is served separately; this API lives under <code>/api</code>.</p>
</body>
</html>"#,
    )
}

/// Get the headline dashboard metrics
pub async fn get_dashboard(State(state): State<AppState>) -> AppResult<Json<DashboardSummary>> {
    let service = DashboardService::new(state.db);
    let summary = service.summary().await?;
    Ok(Json(summary))
}
