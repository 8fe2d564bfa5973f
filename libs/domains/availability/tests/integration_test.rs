//! Integration tests for the Availability domain
//!
//! These tests use real PostgreSQL via testcontainers to ensure:
//! - The overlap scan pushed down to SQL matches the half-open semantics
//! - Override writes persist the overridden flag
//! - Bulk writes are transactional across units

use chrono::NaiveDate;
use domain_availability::*;
use domain_properties::{
    CreateProperty, CreateUnit, Currency, Money, PgPropertyRepository, PropertyRepository,
    UnitType,
};
use test_utils::{TestDataBuilder, TestDatabase};
use uuid::Uuid;

fn d(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

async fn seed_unit(db: &TestDatabase, builder: &TestDataBuilder, suffix: &str) -> Uuid {
    let repo = PgPropertyRepository::new(db.connection());

    let property = repo
        .create(CreateProperty {
            name: builder.name("property", suffix),
            description: None,
            address: "1 Test Street".to_string(),
            city: "Porto".to_string(),
            country: "Portugal".to_string(),
        })
        .await
        .unwrap();

    let unit = repo
        .create_unit(CreateUnit {
            property_id: property.id,
            name: builder.name("unit", suffix),
            unit_type: UnitType::Room,
            base_price: Money::new(9_900, Currency::Eur),
            max_guests: 2,
            bedrooms: 1,
        })
        .await
        .unwrap();

    unit.id
}

fn blocked(unit_id: Uuid, start: &str, end: &str) -> CreateAvailability {
    CreateAvailability {
        unit_id,
        start_date: d(start),
        end_date: d(end),
        status: AvailabilityStatus::Blocked,
        reason: Some("owner stay".to_string()),
        notes: None,
        override_conflicts: false,
    }
}

#[tokio::test]
async fn test_create_then_fetch_round_trips_status_and_reason() {
    let db = TestDatabase::new().await;
    let builder = TestDataBuilder::from_test_name("round_trip");
    let unit_id = seed_unit(&db, &builder, "main").await;

    let service = AvailabilityService::new(PgAvailabilityRepository::new(db.connection()));

    let created = service
        .create(blocked(unit_id, "2026-06-01", "2026-06-10"))
        .await
        .unwrap();

    let fetched = service.get(created.id).await.unwrap();

    assert_eq!(fetched.status, AvailabilityStatus::Blocked);
    assert_eq!(fetched.reason.as_deref(), Some("owner stay"));
    assert!(!fetched.overridden);
}

#[tokio::test]
async fn test_overlapping_create_conflicts_without_override() {
    let db = TestDatabase::new().await;
    let builder = TestDataBuilder::from_test_name("overlap_conflict");
    let unit_id = seed_unit(&db, &builder, "main").await;

    let service = AvailabilityService::new(PgAvailabilityRepository::new(db.connection()));

    let existing = service
        .create(blocked(unit_id, "2026-06-01", "2026-06-10"))
        .await
        .unwrap();

    let result = service.create(blocked(unit_id, "2026-06-05", "2026-06-15")).await;

    match result {
        Err(AvailabilityError::Conflict(conflicts)) => {
            assert_eq!(conflicts.len(), 1);
            assert_eq!(conflicts[0].record_id, existing.id);
        }
        other => panic!("expected conflict, got {:?}", other.map(|r| r.id)),
    }
}

#[tokio::test]
async fn test_adjacent_windows_do_not_conflict() {
    let db = TestDatabase::new().await;
    let builder = TestDataBuilder::from_test_name("adjacent_ok");
    let unit_id = seed_unit(&db, &builder, "main").await;

    let service = AvailabilityService::new(PgAvailabilityRepository::new(db.connection()));

    service
        .create(blocked(unit_id, "2026-06-01", "2026-06-10"))
        .await
        .unwrap();

    // Starts exactly where the first ends
    let second = service
        .create(blocked(unit_id, "2026-06-10", "2026-06-20"))
        .await
        .unwrap();

    assert!(!second.overridden);
}

#[tokio::test]
async fn test_override_persists_overridden_flag() {
    let db = TestDatabase::new().await;
    let builder = TestDataBuilder::from_test_name("override_flag");
    let unit_id = seed_unit(&db, &builder, "main").await;

    let service = AvailabilityService::new(PgAvailabilityRepository::new(db.connection()));

    service
        .create(blocked(unit_id, "2026-06-01", "2026-06-10"))
        .await
        .unwrap();

    let mut input = blocked(unit_id, "2026-06-05", "2026-06-15");
    input.override_conflicts = true;
    let forced = service.create(input).await.unwrap();

    let fetched = service.get(forced.id).await.unwrap();
    assert!(fetched.overridden);
}

#[tokio::test]
async fn test_conflict_check_is_a_pure_read() {
    let db = TestDatabase::new().await;
    let builder = TestDataBuilder::from_test_name("pure_read");
    let unit_id = seed_unit(&db, &builder, "main").await;

    let service = AvailabilityService::new(PgAvailabilityRepository::new(db.connection()));

    service
        .create(blocked(unit_id, "2026-06-01", "2026-06-10"))
        .await
        .unwrap();

    let conflicts = service
        .check_conflicts(ConflictQuery {
            unit_id,
            start_date: d("2026-06-05"),
            end_date: d("2026-06-20"),
            exclude: None,
        })
        .await
        .unwrap();

    assert_eq!(conflicts.len(), 1);

    // Nothing was written by the check
    let records = service
        .list(AvailabilityFilter {
            unit_id: Some(unit_id),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(records.len(), 1);
}

#[tokio::test]
async fn test_bulk_is_all_or_nothing() {
    let db = TestDatabase::new().await;
    let builder = TestDataBuilder::from_test_name("bulk_atomic");
    let clean_unit = seed_unit(&db, &builder, "clean").await;
    let conflicted_unit = seed_unit(&db, &builder, "conflicted").await;

    let service = AvailabilityService::new(PgAvailabilityRepository::new(db.connection()));

    service
        .create(blocked(conflicted_unit, "2026-06-05", "2026-06-15"))
        .await
        .unwrap();

    let result = service
        .bulk_update(BulkUpdateAvailability {
            unit_ids: vec![clean_unit, conflicted_unit],
            start_date: d("2026-06-01"),
            end_date: d("2026-06-10"),
            status: AvailabilityStatus::Maintenance,
            reason: Some("deep clean".to_string()),
            override_conflicts: false,
        })
        .await;

    assert!(matches!(result, Err(AvailabilityError::Conflict(_))));

    // The clean unit must not have been written
    let records = service
        .list(AvailabilityFilter {
            unit_id: Some(clean_unit),
            ..Default::default()
        })
        .await
        .unwrap();
    assert!(records.is_empty(), "no partial writes on bulk conflict");
}

#[tokio::test]
async fn test_bulk_writes_all_units_when_clean() {
    let db = TestDatabase::new().await;
    let builder = TestDataBuilder::from_test_name("bulk_clean");
    let unit_a = seed_unit(&db, &builder, "a").await;
    let unit_b = seed_unit(&db, &builder, "b").await;

    let service = AvailabilityService::new(PgAvailabilityRepository::new(db.connection()));

    let created = service
        .bulk_update(BulkUpdateAvailability {
            unit_ids: vec![unit_a, unit_b],
            start_date: d("2026-06-01"),
            end_date: d("2026-06-10"),
            status: AvailabilityStatus::Maintenance,
            reason: None,
            override_conflicts: false,
        })
        .await
        .unwrap();

    assert_eq!(created.len(), 2);

    for unit_id in [unit_a, unit_b] {
        let records = service
            .list(AvailabilityFilter {
                unit_id: Some(unit_id),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].status, AvailabilityStatus::Maintenance);
    }
}

#[tokio::test]
async fn test_update_can_shrink_into_adjacent_slot() {
    let db = TestDatabase::new().await;
    let builder = TestDataBuilder::from_test_name("update_shrink");
    let unit_id = seed_unit(&db, &builder, "main").await;

    let service = AvailabilityService::new(PgAvailabilityRepository::new(db.connection()));

    let first = service
        .create(blocked(unit_id, "2026-06-01", "2026-06-10"))
        .await
        .unwrap();
    service
        .create(blocked(unit_id, "2026-06-10", "2026-06-20"))
        .await
        .unwrap();

    // Shrinking the first window must not conflict with itself or the
    // adjacent window
    let updated = service
        .update(
            first.id,
            UpdateAvailability {
                end_date: Some(d("2026-06-08")),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.end_date, d("2026-06-08"));
    assert!(!updated.overridden);
}
