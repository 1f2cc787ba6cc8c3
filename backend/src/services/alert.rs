//! Operational alert service

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::error::AppResult;
use crate::models::AlertPriority;

/// Alert service for actionable field notifications
#[derive(Clone)]
pub struct AlertService {
    db: SqlitePool,
}

/// An unresolved alert joined with its field name
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ActiveAlert {
    pub id: i64,
    pub field_id: i64,
    pub field_name: String,
    #[serde(rename = "type")]
    pub alert_type: String,
    pub message: String,
    pub recommendation: String,
    pub priority: String,
    pub created_at: DateTime<Utc>,
}

/// Input for creating an alert
#[derive(Debug, Deserialize)]
pub struct CreateAlertInput {
    pub field_id: i64,
    pub alert_type: String,
    pub message: String,
    pub recommendation: String,
    pub priority: Option<AlertPriority>,
}

impl AlertService {
    /// Create a new AlertService instance
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// All unresolved alerts with their field names.
    ///
    /// Priority is TEXT, so descending order collates as Medium, Low, High
    /// rather than by severity; within equal priority, newest first.
    pub async fn unresolved(&self) -> AppResult<Vec<ActiveAlert>> {
        let alerts = sqlx::query_as::<_, ActiveAlert>(
            r#"
            SELECT a.id, a.field_id, f.name AS field_name, a.alert_type,
                   a.message, a.recommendation, a.priority, a.created_at
            FROM alerts a
            JOIN fields f ON a.field_id = f.id
            WHERE a.resolved = 0
            ORDER BY a.priority DESC, a.created_at DESC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(alerts)
    }

    /// Flip an alert's resolved flag.
    ///
    /// Succeeds whether or not the id exists; resolving twice is a no-op.
    pub async fn resolve(&self, alert_id: i64) -> AppResult<()> {
        sqlx::query("UPDATE alerts SET resolved = 1 WHERE id = $1")
            .bind(alert_id)
            .execute(&self.db)
            .await?;

        Ok(())
    }

    /// Create a new alert; priority defaults to Medium
    pub async fn create(&self, input: CreateAlertInput) -> AppResult<()> {
        let priority = input.priority.unwrap_or_default();

        sqlx::query(
            r#"
            INSERT INTO alerts (field_id, alert_type, message, recommendation, priority, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(input.field_id)
        .bind(&input.alert_type)
        .bind(&input.message)
        .bind(&input.recommendation)
        .bind(priority.as_str())
        .bind(Utc::now())
        .execute(&self.db)
        .await?;

        Ok(())
    }
}
