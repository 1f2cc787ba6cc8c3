//! Shared helpers for integration tests: an in-memory database with the real
//! schema, plus raw row inserts for fixtures that need explicit timestamps.

#![allow(dead_code)]

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

/// Fresh single-connection in-memory database with the schema applied.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("connect to in-memory database");

    agri_backend::db::init_schema(&pool)
        .await
        .expect("create schema");

    pool
}

pub async fn insert_field(
    pool: &SqlitePool,
    name: &str,
    crop: &str,
    area: f64,
    moisture: f64,
    temperature: f64,
    status: &str,
) -> i64 {
    sqlx::query_scalar(
        r#"
        INSERT INTO fields (name, crop, area_hectares, soil_moisture, temperature, health_status, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id
        "#,
    )
    .bind(name)
    .bind(crop)
    .bind(area)
    .bind(moisture)
    .bind(temperature)
    .bind(status)
    .bind(Utc::now())
    .fetch_one(pool)
    .await
    .expect("insert field")
}

pub async fn field_moisture(pool: &SqlitePool, field_id: i64) -> f64 {
    sqlx::query_scalar("SELECT soil_moisture FROM fields WHERE id = $1")
        .bind(field_id)
        .fetch_one(pool)
        .await
        .expect("read field moisture")
}

pub async fn insert_npk(
    pool: &SqlitePool,
    field_id: i64,
    nitrogen: f64,
    phosphorus: f64,
    potassium: f64,
    recorded_at: DateTime<Utc>,
) {
    sqlx::query(
        r#"
        INSERT INTO npk_levels (field_id, nitrogen, phosphorus, potassium, recorded_at)
        VALUES ($1, $2, $3, $4, $5)
        "#,
    )
    .bind(field_id)
    .bind(nitrogen)
    .bind(phosphorus)
    .bind(potassium)
    .bind(recorded_at)
    .execute(pool)
    .await
    .expect("insert npk reading");
}

pub async fn insert_alert(
    pool: &SqlitePool,
    field_id: i64,
    alert_type: &str,
    priority: &str,
    created_at: DateTime<Utc>,
) -> i64 {
    sqlx::query_scalar(
        r#"
        INSERT INTO alerts (field_id, alert_type, message, recommendation, priority, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id
        "#,
    )
    .bind(field_id)
    .bind(alert_type)
    .bind(format!("{alert_type} in field {field_id}"))
    .bind("Check the field")
    .bind(priority)
    .bind(created_at)
    .fetch_one(pool)
    .await
    .expect("insert alert")
}

pub async fn count(pool: &SqlitePool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .expect("count rows")
}
