//! Field management service

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::error::{AppError, AppResult};
use crate::models::HealthStatus;
use crate::services::nutrient::{NutrientService, NutrientValues};

/// Field service for tracked plots and their live readings
#[derive(Clone)]
pub struct FieldService {
    db: SqlitePool,
}

/// Field summary row for the list view
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct FieldSummary {
    pub id: i64,
    pub name: String,
    pub area: f64,
    pub moisture: f64,
    pub temperature: f64,
    pub status: String,
}

/// Full field attributes plus the latest nutrient reading
#[derive(Debug, Clone, Serialize)]
pub struct FieldDetail {
    pub id: i64,
    pub name: String,
    pub crop: String,
    pub area: f64,
    pub moisture: f64,
    pub temperature: f64,
    pub status: String,
    pub npk: Option<NutrientValues>,
}

#[derive(Debug, sqlx::FromRow)]
struct FieldRow {
    id: i64,
    name: String,
    crop: String,
    area_hectares: f64,
    soil_moisture: f64,
    temperature: f64,
    health_status: String,
}

/// Input for partially updating a field's live readings
#[derive(Debug, Deserialize)]
pub struct UpdateFieldInput {
    pub field_id: i64,
    pub soil_moisture: Option<f64>,
    pub temperature: Option<f64>,
    pub health_status: Option<HealthStatus>,
}

impl FieldService {
    /// Create a new FieldService instance
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Get all field summaries, ordered by id
    pub async fn list(&self) -> AppResult<Vec<FieldSummary>> {
        let fields = sqlx::query_as::<_, FieldSummary>(
            r#"
            SELECT id, name, area_hectares AS area, soil_moisture AS moisture,
                   temperature, health_status AS status
            FROM fields
            ORDER BY id
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(fields)
    }

    /// Get a field by id with its latest nutrient reading
    pub async fn detail(&self, field_id: i64) -> AppResult<FieldDetail> {
        let field = sqlx::query_as::<_, FieldRow>(
            r#"
            SELECT id, name, crop, area_hectares, soil_moisture, temperature, health_status
            FROM fields
            WHERE id = $1
            "#,
        )
        .bind(field_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Field".to_string()))?;

        let npk = NutrientService::new(self.db.clone())
            .latest_values(field_id)
            .await?;

        Ok(FieldDetail {
            id: field.id,
            name: field.name,
            crop: field.crop,
            area: field.area_hectares,
            moisture: field.soil_moisture,
            temperature: field.temperature,
            status: field.health_status,
            npk,
        })
    }

    /// Merge only the explicitly supplied attributes into a field.
    ///
    /// A request without any attributes, or naming an unknown field id, is a
    /// no-op that still reports success.
    pub async fn update(&self, input: UpdateFieldInput) -> AppResult<()> {
        if input.soil_moisture.is_none()
            && input.temperature.is_none()
            && input.health_status.is_none()
        {
            return Ok(());
        }

        let Some(existing) = sqlx::query_as::<_, FieldRow>(
            r#"
            SELECT id, name, crop, area_hectares, soil_moisture, temperature, health_status
            FROM fields
            WHERE id = $1
            "#,
        )
        .bind(input.field_id)
        .fetch_optional(&self.db)
        .await?
        else {
            return Ok(());
        };

        let soil_moisture = input.soil_moisture.unwrap_or(existing.soil_moisture);
        let temperature = input.temperature.unwrap_or(existing.temperature);
        let health_status = input
            .health_status
            .map(|status| status.as_str().to_string())
            .unwrap_or(existing.health_status);

        sqlx::query(
            r#"
            UPDATE fields
            SET soil_moisture = $1, temperature = $2, health_status = $3
            WHERE id = $4
            "#,
        )
        .bind(soil_moisture)
        .bind(temperature)
        .bind(&health_status)
        .bind(input.field_id)
        .execute(&self.db)
        .await?;

        Ok(())
    }
}
