//! Schema management and demo data seeding
//!
//! Both steps run at process start, before the API accepts traffic, and are
//! safe to repeat on every restart: table creation uses `IF NOT EXISTS` and
//! seeding either skips on unique-key conflict or checks for existing rows.

use chrono::{Duration, Utc};
use sqlx::SqlitePool;

use crate::models::{AlertPriority, HealthStatus};

/// One `CREATE TABLE` statement per persisted entity.
const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS fields (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL UNIQUE,
        crop TEXT NOT NULL,
        area_hectares REAL NOT NULL,
        soil_moisture REAL NOT NULL,
        temperature REAL NOT NULL,
        health_status TEXT NOT NULL,
        created_at TIMESTAMP NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS npk_levels (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        field_id INTEGER NOT NULL,
        nitrogen REAL NOT NULL,
        phosphorus REAL NOT NULL,
        potassium REAL NOT NULL,
        recorded_at TIMESTAMP NOT NULL,
        FOREIGN KEY(field_id) REFERENCES fields(id)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS irrigation_records (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        field_id INTEGER NOT NULL,
        duration_minutes INTEGER NOT NULL,
        water_volume_liters REAL NOT NULL,
        scheduled_time TIMESTAMP NOT NULL,
        status TEXT NOT NULL,
        created_at TIMESTAMP NOT NULL,
        FOREIGN KEY(field_id) REFERENCES fields(id)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS crop_yield_forecast (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        field_id INTEGER NOT NULL,
        forecast_date DATE NOT NULL,
        predicted_yield REAL NOT NULL,
        created_at TIMESTAMP NOT NULL,
        FOREIGN KEY(field_id) REFERENCES fields(id)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS alerts (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        field_id INTEGER NOT NULL,
        alert_type TEXT NOT NULL,
        message TEXT NOT NULL,
        recommendation TEXT NOT NULL,
        priority TEXT NOT NULL,
        created_at TIMESTAMP NOT NULL,
        resolved INTEGER NOT NULL DEFAULT 0,
        FOREIGN KEY(field_id) REFERENCES fields(id)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS weather (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        forecast_date DATE NOT NULL UNIQUE,
        condition TEXT NOT NULL,
        min_temp REAL NOT NULL,
        max_temp REAL NOT NULL,
        humidity REAL NOT NULL,
        precipitation REAL NOT NULL,
        created_at TIMESTAMP NOT NULL
    )
    "#,
];

/// Create the six entity tables. Idempotent.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    tracing::debug!("Schema initialized");
    Ok(())
}

/// Populate baseline demo data.
///
/// Unique-key conflicts (field names, weather dates) are skipped via
/// `ON CONFLICT DO NOTHING`; NPK readings and alerts carry no unique key, so
/// they are only seeded into empty tables. Any other error aborts seeding.
pub async fn seed_demo_data(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let now = Utc::now();

    let fields_data: [(&str, &str, f64, f64, f64, HealthStatus); 4] = [
        ("Field A - Wheat", "Wheat", 15.0, 75.0, 23.0, HealthStatus::Healthy),
        ("Field B - Corn", "Corn", 20.0, 68.0, 25.0, HealthStatus::NeedsWater),
        ("Field C - Soybeans", "Soybeans", 12.0, 80.0, 22.0, HealthStatus::Excellent),
        ("Field D - Rice", "Rice", 18.0, 85.0, 26.0, HealthStatus::Optimal),
    ];

    for (name, crop, area, moisture, temperature, status) in fields_data {
        sqlx::query(
            r#"
            INSERT INTO fields (name, crop, area_hectares, soil_moisture, temperature, health_status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT(name) DO NOTHING
            "#,
        )
        .bind(name)
        .bind(crop)
        .bind(area)
        .bind(moisture)
        .bind(temperature)
        .bind(status.as_str())
        .bind(now)
        .execute(pool)
        .await?;
    }

    let field_ids: Vec<i64> = sqlx::query_scalar("SELECT id FROM fields ORDER BY id")
        .fetch_all(pool)
        .await?;

    let npk_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM npk_levels")
        .fetch_one(pool)
        .await?;

    if npk_count == 0 {
        let npk_data: [(f64, f64, f64); 4] = [
            (68.0, 45.0, 72.0),
            (55.0, 35.0, 60.0),
            (70.0, 50.0, 75.0),
            (75.0, 55.0, 80.0),
        ];

        for (field_id, (nitrogen, phosphorus, potassium)) in field_ids.iter().zip(npk_data) {
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
            .bind(now)
            .execute(pool)
            .await?;
        }
    }

    let alert_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM alerts")
        .fetch_one(pool)
        .await?;

    if alert_count == 0 && field_ids.len() >= 2 {
        let alerts_data = [
            (
                field_ids[1],
                "Nutrient Deficiency",
                "Low Phosphorus in Field B",
                "Apply phosphate fertilizer within 3 days",
                AlertPriority::High,
            ),
            (
                field_ids[0],
                "Irrigation Scheduled",
                "Irrigation Scheduled for Field A",
                "Next irrigation: Today at 6:00 PM (2 hours remaining)",
                AlertPriority::Medium,
            ),
        ];

        for (field_id, alert_type, message, recommendation, priority) in alerts_data {
            sqlx::query(
                r#"
                INSERT INTO alerts (field_id, alert_type, message, recommendation, priority, created_at)
                VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(field_id)
            .bind(alert_type)
            .bind(message)
            .bind(recommendation)
            .bind(priority.as_str())
            .bind(now)
            .execute(pool)
            .await?;
        }
    }

    let weather_data: [(i64, &str, f64, f64, f64, f64); 5] = [
        (0, "Clear", 20.0, 28.0, 65.0, 0.0),
        (1, "Partly Cloudy", 19.0, 27.0, 70.0, 5.0),
        (2, "Clear", 21.0, 29.0, 60.0, 0.0),
        (3, "Clear", 20.0, 28.0, 65.0, 0.0),
        (4, "Clear", 22.0, 30.0, 55.0, 0.0),
    ];

    for (day_offset, condition, min_temp, max_temp, humidity, precipitation) in weather_data {
        let forecast_date = now.date_naive() + Duration::days(day_offset);
        sqlx::query(
            r#"
            INSERT INTO weather (forecast_date, condition, min_temp, max_temp, humidity, precipitation, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT(forecast_date) DO NOTHING
            "#,
        )
        .bind(forecast_date)
        .bind(condition)
        .bind(min_temp)
        .bind(max_temp)
        .bind(humidity)
        .bind(precipitation)
        .bind(now)
        .execute(pool)
        .await?;
    }

    tracing::info!("Demo data seeded");
    Ok(())
}
