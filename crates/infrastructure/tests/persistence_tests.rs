//! Integration tests for the SQLite weather record store
//!
//! Each test runs against a fresh, migrated in-memory database.

#![allow(clippy::expect_used)]

use std::time::Duration;

use application::ports::WeatherRecordStore;
use chrono::{DateTime, TimeZone, Utc};
use domain::{ObservedConditions, WeatherPatch, WeatherRecord, WeatherRecordId};
use infrastructure::persistence::{AsyncDatabase, SqliteWeatherRecordStore};

// ============================================================================
// Test Helpers
// ============================================================================

async fn create_store() -> SqliteWeatherRecordStore {
    let db = AsyncDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");
    SqliteWeatherRecordStore::new(db.pool().clone())
}

fn at(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, hour, 0, 0).unwrap()
}

fn record(city: &str, temperature: f64, fetched_at: DateTime<Utc>) -> WeatherRecord {
    WeatherRecord::from_observation(
        ObservedConditions {
            city_name: city.to_string(),
            country: "Testland".to_string(),
            temperature,
            humidity: 50,
            wind_speed: 10.0,
            description: "Clear".to_string(),
        },
        fetched_at,
    )
    .expect("valid record")
}

// ============================================================================
// Insert / Get
// ============================================================================

#[tokio::test]
async fn insert_then_get_returns_same_record() {
    let store = create_store().await;
    let inserted = store
        .insert(&record("Paris", 18.5, at(9)))
        .await
        .expect("insert");

    let fetched = store
        .get(&inserted.id)
        .await
        .expect("get")
        .expect("record exists");

    assert_eq!(fetched, inserted);
    assert_eq!(fetched.fetched_at, at(9));
}

#[tokio::test]
async fn insert_stamps_created_and_updated_at() {
    let store = create_store().await;
    let before = Utc::now() - chrono::Duration::seconds(1);

    let inserted = store
        .insert(&record("Paris", 18.5, at(9)))
        .await
        .expect("insert");

    assert!(inserted.created_at >= before);
    assert_eq!(inserted.created_at, inserted.updated_at);
}

#[tokio::test]
async fn get_unknown_id_returns_none() {
    let store = create_store().await;
    let result = store.get(&WeatherRecordId::new()).await.expect("get");
    assert!(result.is_none());
}

#[tokio::test]
async fn duplicate_id_is_persistence_error() {
    let store = create_store().await;
    let rec = record("Paris", 18.5, at(9));
    store.insert(&rec).await.expect("first insert");

    let err = store.insert(&rec).await.unwrap_err();
    assert!(matches!(
        err,
        application::error::ApplicationError::Persistence(_)
    ));
}

// ============================================================================
// List
// ============================================================================

#[tokio::test]
async fn list_empty_store() {
    let store = create_store().await;
    assert!(store.list().await.expect("list").is_empty());
}

#[tokio::test]
async fn list_returns_records_in_creation_order() {
    let store = create_store().await;
    // fetched_at deliberately runs backwards
    let first = store.insert(&record("Oslo", 1.0, at(12))).await.expect("insert");
    tokio::time::sleep(Duration::from_millis(2)).await;
    let second = store.insert(&record("Rome", 2.0, at(11))).await.expect("insert");
    tokio::time::sleep(Duration::from_millis(2)).await;
    let third = store.insert(&record("Lima", 3.0, at(10))).await.expect("insert");

    let ids: Vec<_> = store
        .list()
        .await
        .expect("list")
        .into_iter()
        .map(|r| r.id)
        .collect();

    assert_eq!(ids, vec![first.id, second.id, third.id]);
}

// ============================================================================
// Latest by city
// ============================================================================

#[tokio::test]
async fn latest_for_city_picks_greatest_fetched_at() {
    let store = create_store().await;
    let newer = store.insert(&record("Paris", 20.0, at(14))).await.expect("insert");
    store.insert(&record("Paris", 15.0, at(8))).await.expect("insert");
    store.insert(&record("Berlin", 30.0, at(20))).await.expect("insert");

    let latest = store
        .latest_for_city("Paris")
        .await
        .expect("query")
        .expect("record exists");

    assert_eq!(latest.id, newer.id);
    assert!((latest.temperature - 20.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn latest_for_city_is_exact_match() {
    let store = create_store().await;
    store.insert(&record("Paris", 20.0, at(14))).await.expect("insert");

    assert!(store.latest_for_city("paris").await.expect("query").is_none());
    assert!(store.latest_for_city("Par").await.expect("query").is_none());
}

#[tokio::test]
async fn latest_for_unknown_city_returns_none() {
    let store = create_store().await;
    assert!(store.latest_for_city("Nowhere").await.expect("query").is_none());
}

// ============================================================================
// Update
// ============================================================================

#[tokio::test]
async fn update_overwrites_fields_and_refreshes_updated_at() {
    let store = create_store().await;
    let inserted = store.insert(&record("Paris", 18.5, at(9))).await.expect("insert");
    tokio::time::sleep(Duration::from_millis(2)).await;

    let patch = WeatherPatch::from_json(&serde_json::json!({
        "temperature": 22.5,
        "humidity": "40",
        "description": "Sunny"
    }))
    .expect("object body");
    let mut changed = inserted.clone();
    patch.apply(&mut changed);

    let updated = store
        .update(&changed)
        .await
        .expect("update")
        .expect("row exists");

    assert!((updated.temperature - 22.5).abs() < f64::EPSILON);
    assert_eq!(updated.humidity, 40);
    assert_eq!(updated.description, "Sunny");
    assert_eq!(updated.city_name, "Paris");
    assert_eq!(updated.created_at, inserted.created_at);
    assert!(updated.updated_at > inserted.updated_at);

    let reread = store.get(&inserted.id).await.expect("get").expect("exists");
    assert_eq!(reread, updated);
}

#[tokio::test]
async fn update_missing_row_returns_none() {
    let store = create_store().await;
    let result = store
        .update(&record("Ghost", 0.0, at(1)))
        .await
        .expect("update");
    assert!(result.is_none());
}

// ============================================================================
// Delete
// ============================================================================

#[tokio::test]
async fn delete_removes_record() {
    let store = create_store().await;
    let inserted = store.insert(&record("Paris", 18.5, at(9))).await.expect("insert");

    assert!(store.delete(&inserted.id).await.expect("delete"));
    assert!(store.get(&inserted.id).await.expect("get").is_none());
    assert!(!store.delete(&inserted.id).await.expect("second delete"));
}

#[tokio::test]
async fn delete_unknown_id_returns_false() {
    let store = create_store().await;
    assert!(!store.delete(&WeatherRecordId::new()).await.expect("delete"));
}
