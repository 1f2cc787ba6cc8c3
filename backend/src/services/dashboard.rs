//! Dashboard summary service

use sqlx::SqlitePool;

use crate::error::AppResult;
use crate::models::{DashboardSummary, NpkLevels};
use crate::services::round_dp;

/// Averages shown before any field has been registered.
const DEFAULT_SOIL_MOISTURE: f64 = 72.0;
const DEFAULT_TEMPERATURE: f64 = 24.0;
const DEFAULT_CROP_HEALTH: f64 = 85.0;

/// Dashboard service deriving the headline metrics
#[derive(Clone)]
pub struct DashboardService {
    db: SqlitePool,
}

impl DashboardService {
    /// Create a new DashboardService instance
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Headline metrics: fleet-wide averages, latest NPK reading, and the
    /// percentage of fields in a healthy status. Rounded to 1 decimal.
    pub async fn summary(&self) -> AppResult<DashboardSummary> {
        let avg_moisture: Option<f64> =
            sqlx::query_scalar("SELECT AVG(soil_moisture) FROM fields")
                .fetch_one(&self.db)
                .await?;

        let avg_temperature: Option<f64> =
            sqlx::query_scalar("SELECT AVG(temperature) FROM fields")
                .fetch_one(&self.db)
                .await?;

        let latest_npk: Option<(f64, f64, f64)> = sqlx::query_as(
            r#"
            SELECT nitrogen, phosphorus, potassium
            FROM npk_levels
            ORDER BY recorded_at DESC
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.db)
        .await?;

        let healthy_fields: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM fields WHERE health_status IN ('Healthy', 'Excellent', 'Optimal')",
        )
        .fetch_one(&self.db)
        .await?;

        let total_fields: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM fields")
            .fetch_one(&self.db)
            .await?;

        let crop_health = if total_fields > 0 {
            healthy_fields as f64 / total_fields as f64 * 100.0
        } else {
            DEFAULT_CROP_HEALTH
        };

        Ok(DashboardSummary {
            soil_moisture: round_dp(avg_moisture.unwrap_or(DEFAULT_SOIL_MOISTURE), 1),
            temperature: round_dp(avg_temperature.unwrap_or(DEFAULT_TEMPERATURE), 1),
            npk_levels: latest_npk
                .map(|(n, p, k)| NpkLevels { n, p, k })
                .unwrap_or(NpkLevels::BASELINE),
            crop_health: round_dp(crop_health, 1),
        })
    }
}
