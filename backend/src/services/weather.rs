//! Weather forecast service
//!
//! Weather entries are global (not tied to a field) and keyed by forecast
//! date, with one row per date kept up to date via upsert.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::error::AppResult;

/// Days of forecast served to the dashboard.
const WEATHER_FORECAST_DAYS: i64 = 5;

/// Weather service for the daily forecast table
#[derive(Clone)]
pub struct WeatherService {
    db: SqlitePool,
}

/// One day of forecast
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct DailyWeather {
    pub date: NaiveDate,
    pub condition: String,
    pub min_temp: f64,
    pub max_temp: f64,
    pub humidity: f64,
    pub precipitation: f64,
}

/// Input for upserting a day of forecast
#[derive(Debug, Deserialize)]
pub struct UpdateWeatherInput {
    pub forecast_date: NaiveDate,
    pub condition: String,
    pub min_temp: f64,
    pub max_temp: f64,
    pub humidity: f64,
    pub precipitation: Option<f64>,
}

impl WeatherService {
    /// Create a new WeatherService instance
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Upcoming forecast days, earliest first
    pub async fn forecast(&self) -> AppResult<Vec<DailyWeather>> {
        let days = sqlx::query_as::<_, DailyWeather>(
            r#"
            SELECT forecast_date AS date, condition, min_temp, max_temp, humidity, precipitation
            FROM weather
            ORDER BY forecast_date
            LIMIT $1
            "#,
        )
        .bind(WEATHER_FORECAST_DAYS)
        .fetch_all(&self.db)
        .await?;

        Ok(days)
    }

    /// Update the row for a date, inserting it when absent.
    ///
    /// Precipitation defaults to 0 when omitted.
    pub async fn upsert(&self, input: UpdateWeatherInput) -> AppResult<()> {
        let precipitation = input.precipitation.unwrap_or(0.0);

        let updated = sqlx::query(
            r#"
            UPDATE weather
            SET condition = $1, min_temp = $2, max_temp = $3, humidity = $4, precipitation = $5
            WHERE forecast_date = $6
            "#,
        )
        .bind(&input.condition)
        .bind(input.min_temp)
        .bind(input.max_temp)
        .bind(input.humidity)
        .bind(precipitation)
        .bind(input.forecast_date)
        .execute(&self.db)
        .await?;

        if updated.rows_affected() == 0 {
            sqlx::query(
                r#"
                INSERT INTO weather (forecast_date, condition, min_temp, max_temp, humidity, precipitation, created_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                "#,
            )
            .bind(input.forecast_date)
            .bind(&input.condition)
            .bind(input.min_temp)
            .bind(input.max_temp)
            .bind(input.humidity)
            .bind(precipitation)
            .bind(Utc::now())
            .execute(&self.db)
            .await?;
        }

        Ok(())
    }
}
