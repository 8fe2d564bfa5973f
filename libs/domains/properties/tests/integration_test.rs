//! Integration tests for the Properties domain
//!
//! These tests use real PostgreSQL via testcontainers to ensure:
//! - Database queries work correctly
//! - Enum columns round-trip
//! - The property -> unit cascade is enforced

use domain_properties::*;
use test_utils::{TestDataBuilder, TestDatabase, assertions::*};

fn property_input(builder: &TestDataBuilder, suffix: &str) -> CreateProperty {
    CreateProperty {
        name: builder.name("property", suffix),
        description: Some("Integration test property".to_string()),
        address: "1 Test Street".to_string(),
        city: "Lisbon".to_string(),
        country: "Portugal".to_string(),
    }
}

fn unit_input(builder: &TestDataBuilder, property_id: uuid::Uuid, suffix: &str) -> CreateUnit {
    CreateUnit {
        property_id,
        name: builder.name("unit", suffix),
        unit_type: UnitType::Apartment,
        base_price: Money::new(12_500, Currency::Eur),
        max_guests: 4,
        bedrooms: 2,
    }
}

#[tokio::test]
async fn test_create_and_get_property() {
    let db = TestDatabase::new().await;
    let repo = PgPropertyRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("create_and_get_property");

    let input = property_input(&builder, "main");
    let created = repo.create(input.clone()).await.unwrap();

    assert_eq!(created.name, input.name);
    assert_eq!(created.status, PropertyStatus::Active);

    let retrieved = repo.get_by_id(created.id).await.unwrap();
    let retrieved = assert_some(retrieved, "property should exist");

    assert_uuid_eq(retrieved.id, created.id, "retrieved property id");
    assert_eq!(retrieved.city, "Lisbon");
}

#[tokio::test]
async fn test_unit_round_trips_price_and_type() {
    let db = TestDatabase::new().await;
    let repo = PgPropertyRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("unit_round_trip");

    let property = repo.create(property_input(&builder, "main")).await.unwrap();
    let unit = repo
        .create_unit(unit_input(&builder, property.id, "loft"))
        .await
        .unwrap();

    let retrieved = repo.get_unit_by_id(unit.id).await.unwrap();
    let retrieved = assert_some(retrieved, "unit should exist");

    assert_eq!(retrieved.base_price, Money::new(12_500, Currency::Eur));
    assert_eq!(retrieved.unit_type, UnitType::Apartment);
    assert_eq!(retrieved.max_guests, 4);
}

#[tokio::test]
async fn test_delete_property_cascades_to_units() {
    let db = TestDatabase::new().await;
    let repo = PgPropertyRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("cascade_delete");

    let property = repo.create(property_input(&builder, "main")).await.unwrap();
    let unit = repo
        .create_unit(unit_input(&builder, property.id, "loft"))
        .await
        .unwrap();

    let deleted = repo.delete(property.id).await.unwrap();
    assert!(deleted);

    let orphan = repo.get_unit_by_id(unit.id).await.unwrap();
    assert!(orphan.is_none(), "unit should be removed with its property");
}

#[tokio::test]
async fn test_list_units_filters_by_property() {
    let db = TestDatabase::new().await;
    let repo = PgPropertyRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("list_units_filter");

    let property_a = repo.create(property_input(&builder, "a")).await.unwrap();
    let property_b = repo.create(property_input(&builder, "b")).await.unwrap();

    repo.create_unit(unit_input(&builder, property_a.id, "a1"))
        .await
        .unwrap();
    repo.create_unit(unit_input(&builder, property_a.id, "a2"))
        .await
        .unwrap();
    repo.create_unit(unit_input(&builder, property_b.id, "b1"))
        .await
        .unwrap();

    let units = repo
        .list_units(UnitFilter {
            property_id: Some(property_a.id),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(units.len(), 2);
    assert!(units.iter().all(|u| u.property_id == property_a.id));
}

#[tokio::test]
async fn test_update_property_status() {
    let db = TestDatabase::new().await;
    let repo = PgPropertyRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("update_status");

    let property = repo.create(property_input(&builder, "main")).await.unwrap();

    let updated = repo
        .update(
            property.id,
            UpdateProperty {
                status: Some(PropertyStatus::Inactive),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.status, PropertyStatus::Inactive);
    assert_eq!(updated.name, property.name);
}
