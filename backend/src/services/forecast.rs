//! Crop yield forecast service
//!
//! Forecasts are synthetic. The first time any caller asks for them and the
//! table is empty, a week of predictions is generated for every field; after
//! that the stored rows are served as-is.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate, Utc};
use sqlx::SqlitePool;

use crate::error::AppResult;
use crate::models::FieldForecastSeries;

/// Days of predictions generated per field.
pub const FORECAST_DAYS: i64 = 7;

/// Rows served per request; covers a week for four fields.
const FORECAST_LIMIT: i64 = 28;

const BASE_YIELD: f64 = 500.0;
const DAILY_YIELD_GAIN: f64 = 20.0;
const FIELD_YIELD_FACTOR: f64 = 50.0;

/// Yield forecast service
#[derive(Clone)]
pub struct ForecastService {
    db: SqlitePool,
}

#[derive(Debug, sqlx::FromRow)]
struct ForecastRow {
    name: String,
    forecast_date: NaiveDate,
    predicted_yield: f64,
}

/// Synthetic predicted yield for a field on a given day offset.
pub fn synthetic_yield(field_id: i64, day_offset: i64) -> f64 {
    BASE_YIELD + day_offset as f64 * DAILY_YIELD_GAIN + field_id as f64 * FIELD_YIELD_FACTOR
}

impl ForecastService {
    /// Create a new ForecastService instance
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Forecasts grouped by field name into parallel date/yield series.
    ///
    /// Generates the synthetic week on first call against an empty table;
    /// any existing row anywhere suppresses generation.
    pub async fn crop_yield_forecast(
        &self,
    ) -> AppResult<BTreeMap<String, FieldForecastSeries>> {
        let mut rows = self.recent_forecasts().await?;

        if rows.is_empty() {
            self.generate_synthetic_week().await?;
            rows = self.recent_forecasts().await?;
        }

        let mut grouped: BTreeMap<String, FieldForecastSeries> = BTreeMap::new();
        for row in rows {
            grouped
                .entry(row.name)
                .or_default()
                .push(row.forecast_date, row.predicted_yield);
        }

        Ok(grouped)
    }

    async fn recent_forecasts(&self) -> AppResult<Vec<ForecastRow>> {
        let rows = sqlx::query_as::<_, ForecastRow>(
            r#"
            SELECT f.name, cyf.forecast_date, cyf.predicted_yield
            FROM crop_yield_forecast cyf
            JOIN fields f ON cyf.field_id = f.id
            ORDER BY cyf.forecast_date DESC
            LIMIT $1
            "#,
        )
        .bind(FORECAST_LIMIT)
        .fetch_all(&self.db)
        .await?;

        Ok(rows)
    }

    async fn generate_synthetic_week(&self) -> AppResult<()> {
        let field_ids: Vec<i64> = sqlx::query_scalar("SELECT id FROM fields ORDER BY id")
            .fetch_all(&self.db)
            .await?;

        let today = Utc::now().date_naive();
        let now = Utc::now();

        let mut tx = self.db.begin().await?;
        for field_id in field_ids {
            for day_offset in 0..FORECAST_DAYS {
                sqlx::query(
                    r#"
                    INSERT INTO crop_yield_forecast (field_id, forecast_date, predicted_yield, created_at)
                    VALUES ($1, $2, $3, $4)
                    "#,
                )
                .bind(field_id)
                .bind(today + Duration::days(day_offset))
                .bind(synthetic_yield(field_id, day_offset))
                .bind(now)
                .execute(&mut *tx)
                .await?;
            }
        }
        tx.commit().await?;

        tracing::info!("Generated synthetic yield forecasts");
        Ok(())
    }
}
