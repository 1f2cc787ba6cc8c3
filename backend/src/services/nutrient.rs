//! NPK nutrient reading service

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::error::AppResult;

/// Nutrient service for the append-only NPK reading log
#[derive(Clone)]
pub struct NutrientService {
    db: SqlitePool,
}

/// Bare NPK concentrations, without the recording timestamp
#[derive(Debug, Clone, Copy, Serialize, sqlx::FromRow)]
pub struct NutrientValues {
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
}

/// A recorded NPK reading
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct NutrientReading {
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub recorded_at: DateTime<Utc>,
}

/// Input for recording a reading. Values are stored as sent, including
/// out-of-range spikes.
#[derive(Debug, Deserialize)]
pub struct RecordNutrientInput {
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
}

impl NutrientService {
    /// Create a new NutrientService instance
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Most recent reading for a field, if any
    pub async fn latest_values(&self, field_id: i64) -> AppResult<Option<NutrientValues>> {
        let values = sqlx::query_as::<_, NutrientValues>(
            r#"
            SELECT nitrogen, phosphorus, potassium
            FROM npk_levels
            WHERE field_id = $1
            ORDER BY recorded_at DESC
            LIMIT 1
            "#,
        )
        .bind(field_id)
        .fetch_optional(&self.db)
        .await?;

        Ok(values)
    }

    /// Up to 10 recent readings for a field, newest first
    pub async fn recent(&self, field_id: i64) -> AppResult<Vec<NutrientReading>> {
        let readings = sqlx::query_as::<_, NutrientReading>(
            r#"
            SELECT nitrogen, phosphorus, potassium, recorded_at
            FROM npk_levels
            WHERE field_id = $1
            ORDER BY recorded_at DESC
            LIMIT 10
            "#,
        )
        .bind(field_id)
        .fetch_all(&self.db)
        .await?;

        Ok(readings)
    }

    /// Append a reading for a field
    pub async fn record(&self, field_id: i64, input: RecordNutrientInput) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO npk_levels (field_id, nitrogen, phosphorus, potassium, recorded_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(field_id)
        .bind(input.nitrogen)
        .bind(input.phosphorus)
        .bind(input.potassium)
        .bind(Utc::now())
        .execute(&self.db)
        .await?;

        Ok(())
    }
}
