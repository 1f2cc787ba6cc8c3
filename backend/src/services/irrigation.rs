//! Irrigation scheduling service
//!
//! Starting irrigation is simulated: it appends a Scheduled record and bumps
//! the owning field's soil moisture, without talking to any hardware.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::error::AppResult;
use crate::models::IrrigationStatus;

/// Default run length when the request does not specify one.
pub const DEFAULT_DURATION_MINUTES: i64 = 30;

/// Default water volume when the request does not specify one.
pub const DEFAULT_WATER_VOLUME_LITERS: f64 = 500.0;

/// Cap on the soil-moisture bump from a single irrigation event.
pub const MAX_MOISTURE_BUMP: f64 = 15.0;

/// Fixed offset between the request and the equipment actually starting.
const EQUIPMENT_LAG_MINUTES: i64 = 2;

/// Irrigation service for scheduling and history
#[derive(Clone)]
pub struct IrrigationService {
    db: SqlitePool,
}

/// A scheduled or past irrigation run
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct IrrigationRecord {
    pub id: i64,
    pub duration: i64,
    pub water_volume: f64,
    pub scheduled_time: DateTime<Utc>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Input for starting irrigation on a field
#[derive(Debug, Deserialize)]
pub struct StartIrrigationInput {
    pub field_id: i64,
    pub duration: Option<i64>,
    pub water_volume: Option<f64>,
}

/// What was scheduled, echoed back to the caller
#[derive(Debug, Clone, Serialize)]
pub struct ScheduledIrrigation {
    pub scheduled_time: DateTime<Utc>,
    pub duration: i64,
    pub water_volume: f64,
}

/// Soil-moisture increase for a given water volume, capped per event.
pub fn moisture_bump(water_volume_liters: f64) -> f64 {
    (water_volume_liters / 100.0).min(MAX_MOISTURE_BUMP)
}

impl IrrigationService {
    /// Create a new IrrigationService instance
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Schedule an irrigation run and apply its moisture bump to the field
    pub async fn start(&self, input: StartIrrigationInput) -> AppResult<ScheduledIrrigation> {
        let duration = input.duration.unwrap_or(DEFAULT_DURATION_MINUTES);
        let water_volume = input.water_volume.unwrap_or(DEFAULT_WATER_VOLUME_LITERS);

        let now = Utc::now();
        let scheduled_time = now + Duration::minutes(EQUIPMENT_LAG_MINUTES);

        let mut tx = self.db.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO irrigation_records
                (field_id, duration_minutes, water_volume_liters, scheduled_time, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(input.field_id)
        .bind(duration)
        .bind(water_volume)
        .bind(scheduled_time)
        .bind(IrrigationStatus::Scheduled.as_str())
        .bind(now)
        .execute(&mut *tx)
        .await?;

        sqlx::query("UPDATE fields SET soil_moisture = soil_moisture + $1 WHERE id = $2")
            .bind(moisture_bump(water_volume))
            .bind(input.field_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(ScheduledIrrigation {
            scheduled_time,
            duration,
            water_volume,
        })
    }

    /// Up to 10 recent irrigation records for a field, newest first
    pub async fn history(&self, field_id: i64) -> AppResult<Vec<IrrigationRecord>> {
        let records = sqlx::query_as::<_, IrrigationRecord>(
            r#"
            SELECT id, duration_minutes AS duration, water_volume_liters AS water_volume,
                   scheduled_time, status, created_at
            FROM irrigation_records
            WHERE field_id = $1
            ORDER BY created_at DESC
            LIMIT 10
            "#,
        )
        .bind(field_id)
        .fetch_all(&self.db)
        .await?;

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn moisture_bump_scales_with_volume() {
        assert_eq!(moisture_bump(500.0), 5.0);
        assert_eq!(moisture_bump(1500.0), 15.0);
    }

    #[test]
    fn moisture_bump_is_capped() {
        assert_eq!(moisture_bump(2000.0), MAX_MOISTURE_BUMP);
        assert_eq!(moisture_bump(100_000.0), MAX_MOISTURE_BUMP);
    }

    proptest! {
        #[test]
        fn moisture_bump_never_exceeds_cap(volume in 0.0f64..1_000_000.0) {
            prop_assert!(moisture_bump(volume) <= MAX_MOISTURE_BUMP);
        }

        #[test]
        fn moisture_bump_matches_formula(volume in 0.0f64..1_000_000.0) {
            prop_assert_eq!(moisture_bump(volume), (volume / 100.0).min(15.0));
        }
    }
}
