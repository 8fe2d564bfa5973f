use async_trait::async_trait;
use uuid::Uuid;

use crate::error::PropertyResult;
use crate::models::{
    CreateProperty, CreateUnit, Property, PropertyFilter, Unit, UnitFilter, UpdateProperty,
    UpdateUnit,
};

/// Repository trait for Property and Unit persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PropertyRepository: Send + Sync {
    /// Create a new property
    async fn create(&self, input: CreateProperty) -> PropertyResult<Property>;

    /// Get a property by ID
    async fn get_by_id(&self, id: Uuid) -> PropertyResult<Option<Property>>;

    /// List properties with optional filters
    async fn list(&self, filter: PropertyFilter) -> PropertyResult<Vec<Property>>;

    /// Update an existing property
    async fn update(&self, id: Uuid, input: UpdateProperty) -> PropertyResult<Property>;

    /// Delete a property by ID (cascades to its units)
    async fn delete(&self, id: Uuid) -> PropertyResult<bool>;

    /// Create a new unit
    async fn create_unit(&self, input: CreateUnit) -> PropertyResult<Unit>;

    /// Get a unit by ID
    async fn get_unit_by_id(&self, id: Uuid) -> PropertyResult<Option<Unit>>;

    /// List units with optional filters
    async fn list_units(&self, filter: UnitFilter) -> PropertyResult<Vec<Unit>>;

    /// Update an existing unit
    async fn update_unit(&self, id: Uuid, input: UpdateUnit) -> PropertyResult<Unit>;

    /// Delete a unit by ID
    async fn delete_unit(&self, id: Uuid) -> PropertyResult<bool>;
}
