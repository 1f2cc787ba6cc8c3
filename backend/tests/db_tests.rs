//! Schema and seed integration tests

mod common;

use agri_backend::db;

#[tokio::test]
async fn schema_creation_is_idempotent() {
    let pool = common::test_pool().await;

    // Second run against existing tables succeeds
    db::init_schema(&pool).await.unwrap();
    db::init_schema(&pool).await.unwrap();
}

#[tokio::test]
async fn seeding_populates_baseline_demo_data() {
    let pool = common::test_pool().await;

    db::seed_demo_data(&pool).await.unwrap();

    assert_eq!(common::count(&pool, "fields").await, 4);
    assert_eq!(common::count(&pool, "npk_levels").await, 4);
    assert_eq!(common::count(&pool, "alerts").await, 2);
    assert_eq!(common::count(&pool, "weather").await, 5);
}

#[tokio::test]
async fn reseeding_creates_no_duplicates() {
    let pool = common::test_pool().await;

    db::seed_demo_data(&pool).await.unwrap();
    db::seed_demo_data(&pool).await.unwrap();

    assert_eq!(common::count(&pool, "fields").await, 4);
    assert_eq!(common::count(&pool, "npk_levels").await, 4);
    assert_eq!(common::count(&pool, "alerts").await, 2);
    assert_eq!(common::count(&pool, "weather").await, 5);
}

#[tokio::test]
async fn seeding_skips_conflicting_rows_without_aborting() {
    let pool = common::test_pool().await;
    common::insert_field(&pool, "Field A - Wheat", "Wheat", 99.0, 10.0, 10.0, "Stressed").await;

    db::seed_demo_data(&pool).await.unwrap();

    // The pre-existing field kept its values; the other three were added
    assert_eq!(common::count(&pool, "fields").await, 4);
    let area: f64 = sqlx::query_scalar("SELECT area_hectares FROM fields WHERE name = 'Field A - Wheat'")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(area, 99.0);
}

#[tokio::test]
async fn seeded_fields_match_the_demo_farm() {
    let pool = common::test_pool().await;

    db::seed_demo_data(&pool).await.unwrap();

    let names: Vec<String> = sqlx::query_scalar("SELECT name FROM fields ORDER BY id")
        .fetch_all(&pool)
        .await
        .unwrap();
    assert_eq!(
        names,
        vec![
            "Field A - Wheat",
            "Field B - Corn",
            "Field C - Soybeans",
            "Field D - Rice",
        ]
    );

    let statuses: Vec<String> =
        sqlx::query_scalar("SELECT health_status FROM fields ORDER BY id")
            .fetch_all(&pool)
            .await
            .unwrap();
    assert_eq!(statuses, vec!["Healthy", "Needs Water", "Excellent", "Optimal"]);
}
