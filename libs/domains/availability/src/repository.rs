use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::error::AvailabilityResult;
use crate::models::{AvailabilityFilter, AvailabilityRecord};

/// Repository trait for availability record persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AvailabilityRepository: Send + Sync {
    /// Insert a fully-built record
    async fn create(&self, record: AvailabilityRecord) -> AvailabilityResult<AvailabilityRecord>;

    /// Get a record by ID
    async fn get_by_id(&self, id: Uuid) -> AvailabilityResult<Option<AvailabilityRecord>>;

    /// List records with optional filters
    async fn list(&self, filter: AvailabilityFilter) -> AvailabilityResult<Vec<AvailabilityRecord>>;

    /// Persist an updated record
    async fn update(&self, record: AvailabilityRecord) -> AvailabilityResult<AvailabilityRecord>;

    /// Delete a record by ID
    async fn delete(&self, id: Uuid) -> AvailabilityResult<bool>;

    /// Records on `unit_id` whose `[start_date, end_date)` intersects
    /// `[start, end)`; `exclude` skips the record being updated
    async fn find_overlapping(
        &self,
        unit_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
        exclude: Option<Uuid>,
    ) -> AvailabilityResult<Vec<AvailabilityRecord>>;

    /// Insert all records inside a single transaction; either every record
    /// lands or none do
    async fn create_many(
        &self,
        records: Vec<AvailabilityRecord>,
    ) -> AvailabilityResult<Vec<AvailabilityRecord>>;
}
