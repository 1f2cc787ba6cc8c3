//! Dashboard summary integration tests

mod common;

use agri_backend::services::DashboardService;
use chrono::{Duration, Utc};
use shared::models::NpkLevels;

#[tokio::test]
async fn empty_store_falls_back_to_baseline_metrics() {
    let pool = common::test_pool().await;

    let summary = DashboardService::new(pool).summary().await.unwrap();

    assert_eq!(summary.soil_moisture, 72.0);
    assert_eq!(summary.temperature, 24.0);
    assert_eq!(summary.npk_levels, NpkLevels::BASELINE);
    assert_eq!(summary.crop_health, 85.0);
}

#[tokio::test]
async fn averages_and_crop_health_over_four_fields() {
    let pool = common::test_pool().await;
    common::insert_field(&pool, "North", "Wheat", 15.0, 75.0, 23.0, "Healthy").await;
    common::insert_field(&pool, "South", "Corn", 20.0, 68.0, 25.0, "Needs Water").await;
    common::insert_field(&pool, "East", "Soybeans", 12.0, 80.0, 22.0, "Excellent").await;
    common::insert_field(&pool, "West", "Rice", 18.0, 85.0, 26.0, "Optimal").await;

    let summary = DashboardService::new(pool).summary().await.unwrap();

    assert_eq!(summary.soil_moisture, 77.0);
    assert_eq!(summary.temperature, 24.0);
    // 3 of 4 fields are in a healthy status
    assert_eq!(summary.crop_health, 75.0);
}

#[tokio::test]
async fn npk_levels_come_from_the_most_recent_reading() {
    let pool = common::test_pool().await;
    let field_id = common::insert_field(&pool, "North", "Wheat", 15.0, 75.0, 23.0, "Healthy").await;

    let now = Utc::now();
    common::insert_npk(&pool, field_id, 50.0, 30.0, 55.0, now - Duration::hours(2)).await;
    common::insert_npk(&pool, field_id, 61.0, 42.0, 70.0, now).await;

    let summary = DashboardService::new(pool).summary().await.unwrap();

    assert_eq!(
        summary.npk_levels,
        NpkLevels {
            n: 61.0,
            p: 42.0,
            k: 70.0
        }
    );
}

#[tokio::test]
async fn moisture_average_is_rounded_to_one_decimal() {
    let pool = common::test_pool().await;
    common::insert_field(&pool, "North", "Wheat", 15.0, 70.1, 23.0, "Healthy").await;
    common::insert_field(&pool, "South", "Corn", 20.0, 70.2, 23.0, "Healthy").await;
    common::insert_field(&pool, "East", "Soybeans", 12.0, 70.2, 23.0, "Healthy").await;

    let summary = DashboardService::new(pool).summary().await.unwrap();

    // (70.1 + 70.2 + 70.2) / 3 = 70.1666...
    assert_eq!(summary.soil_moisture, 70.2);
    assert_eq!(summary.crop_health, 100.0);
}
