//! Operational analytics service

use sqlx::SqlitePool;

use crate::error::AppResult;
use crate::models::{AnalyticsSummary, IrrigationStatus};
use crate::services::round_dp;

/// Analytics service aggregating operational counters
#[derive(Clone)]
pub struct AnalyticsService {
    db: SqlitePool,
}

impl AnalyticsService {
    /// Create a new AnalyticsService instance
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Operational aggregates; moisture and area rounded to 2 decimals.
    pub async fn summary(&self) -> AppResult<AnalyticsSummary> {
        let total_fields: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM fields")
            .fetch_one(&self.db)
            .await?;

        let average_moisture: Option<f64> =
            sqlx::query_scalar("SELECT AVG(soil_moisture) FROM fields")
                .fetch_one(&self.db)
                .await?;

        let scheduled_irrigations: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM irrigation_records WHERE status = $1")
                .bind(IrrigationStatus::Scheduled.as_str())
                .fetch_one(&self.db)
                .await?;

        let active_alerts: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM alerts WHERE resolved = 0")
                .fetch_one(&self.db)
                .await?;

        let total_area: Option<f64> = sqlx::query_scalar("SELECT SUM(area_hectares) FROM fields")
            .fetch_one(&self.db)
            .await?;

        let alert_types: i64 =
            sqlx::query_scalar("SELECT COUNT(DISTINCT alert_type) FROM alerts")
                .fetch_one(&self.db)
                .await?;

        Ok(AnalyticsSummary {
            total_fields,
            average_moisture: round_dp(average_moisture.unwrap_or(0.0), 2),
            scheduled_irrigations,
            active_alerts,
            total_area_hectares: round_dp(total_area.unwrap_or(0.0), 2),
            alert_types,
        })
    }
}
