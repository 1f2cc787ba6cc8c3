//! Irrigation scheduling integration tests

mod common;

use agri_backend::services::irrigation::{
    StartIrrigationInput, DEFAULT_DURATION_MINUTES, DEFAULT_WATER_VOLUME_LITERS,
};
use agri_backend::services::IrrigationService;
use chrono::Utc;

#[tokio::test]
async fn standard_volume_bumps_moisture_by_five_points() {
    let pool = common::test_pool().await;
    let field_id = common::insert_field(&pool, "North", "Wheat", 15.0, 68.0, 25.0, "Needs Water").await;

    IrrigationService::new(pool.clone())
        .start(StartIrrigationInput {
            field_id,
            duration: None,
            water_volume: Some(500.0),
        })
        .await
        .unwrap();

    assert_eq!(common::field_moisture(&pool, field_id).await, 73.0);
}

#[tokio::test]
async fn large_volume_bump_is_capped_at_fifteen_points() {
    let pool = common::test_pool().await;
    let field_id = common::insert_field(&pool, "North", "Wheat", 15.0, 68.0, 25.0, "Needs Water").await;

    IrrigationService::new(pool.clone())
        .start(StartIrrigationInput {
            field_id,
            duration: None,
            water_volume: Some(2000.0),
        })
        .await
        .unwrap();

    assert_eq!(common::field_moisture(&pool, field_id).await, 83.0);
}

#[tokio::test]
async fn omitted_parameters_use_documented_defaults() {
    let pool = common::test_pool().await;
    let field_id = common::insert_field(&pool, "North", "Wheat", 15.0, 68.0, 25.0, "Needs Water").await;

    let scheduled = IrrigationService::new(pool.clone())
        .start(StartIrrigationInput {
            field_id,
            duration: None,
            water_volume: None,
        })
        .await
        .unwrap();

    assert_eq!(scheduled.duration, DEFAULT_DURATION_MINUTES);
    assert_eq!(scheduled.water_volume, DEFAULT_WATER_VOLUME_LITERS);
}

#[tokio::test]
async fn scheduling_lags_two_minutes_behind_the_request() {
    let pool = common::test_pool().await;
    let field_id = common::insert_field(&pool, "North", "Wheat", 15.0, 68.0, 25.0, "Needs Water").await;

    let before = Utc::now();
    let scheduled = IrrigationService::new(pool.clone())
        .start(StartIrrigationInput {
            field_id,
            duration: None,
            water_volume: None,
        })
        .await
        .unwrap();

    let lag = (scheduled.scheduled_time - before).num_seconds();
    assert!((115..=125).contains(&lag), "lag was {lag}s");
}

#[tokio::test]
async fn history_returns_scheduled_records_newest_first() {
    let pool = common::test_pool().await;
    let field_id = common::insert_field(&pool, "North", "Wheat", 15.0, 68.0, 25.0, "Needs Water").await;

    let service = IrrigationService::new(pool.clone());
    for volume in [100.0, 200.0, 300.0] {
        service
            .start(StartIrrigationInput {
                field_id,
                duration: Some(10),
                water_volume: Some(volume),
            })
            .await
            .unwrap();
    }

    let history = service.history(field_id).await.unwrap();

    assert_eq!(history.len(), 3);
    assert!(history.iter().all(|record| record.status == "Scheduled"));
    assert!(history[0].created_at >= history[1].created_at);
    assert!(history[1].created_at >= history[2].created_at);
}

#[tokio::test]
async fn history_is_limited_to_ten_records() {
    let pool = common::test_pool().await;
    let field_id = common::insert_field(&pool, "North", "Wheat", 15.0, 10.0, 25.0, "Needs Water").await;

    let service = IrrigationService::new(pool.clone());
    for _ in 0..12 {
        service
            .start(StartIrrigationInput {
                field_id,
                duration: Some(5),
                water_volume: Some(50.0),
            })
            .await
            .unwrap();
    }

    let history = service.history(field_id).await.unwrap();
    assert_eq!(history.len(), 10);
}
