use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::error::{AvailabilityError, AvailabilityResult};
use crate::models::{
    AvailabilityFilter, AvailabilityRecord, BulkUpdateAvailability, ConflictDescriptor,
    ConflictQuery, CreateAvailability, UpdateAvailability,
};
use crate::repository::AvailabilityRepository;

/// Service layer for availability windows and conflict detection
#[derive(Clone)]
pub struct AvailabilityService<R: AvailabilityRepository> {
    repository: Arc<R>,
}

impl<R: AvailabilityRepository> AvailabilityService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Pure read: descriptors for every record on the unit overlapping
    /// `[start_date, end_date)`, skipping `exclude` if given
    pub async fn check_conflicts(
        &self,
        query: ConflictQuery,
    ) -> AvailabilityResult<Vec<ConflictDescriptor>> {
        validate_range(query.start_date, query.end_date)?;

        let overlapping = self
            .repository
            .find_overlapping(query.unit_id, query.start_date, query.end_date, query.exclude)
            .await?;

        Ok(overlapping
            .iter()
            .map(ConflictDescriptor::from_availability)
            .collect())
    }

    /// Create a record, refusing overlapping writes unless the caller set
    /// `override_conflicts`
    pub async fn create(
        &self,
        input: CreateAvailability,
    ) -> AvailabilityResult<AvailabilityRecord> {
        input
            .validate()
            .map_err(|e| AvailabilityError::Validation(e.to_string()))?;
        validate_range(input.start_date, input.end_date)?;

        let conflicts = self
            .check_conflicts(ConflictQuery {
                unit_id: input.unit_id,
                start_date: input.start_date,
                end_date: input.end_date,
                exclude: None,
            })
            .await?;

        let overridden = self.resolve_conflicts(&conflicts, input.override_conflicts)?;

        let record = AvailabilityRecord::new(input, overridden);
        self.repository.create(record).await
    }

    /// Get a record by ID
    pub async fn get(&self, id: Uuid) -> AvailabilityResult<AvailabilityRecord> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(AvailabilityError::NotFound(id))
    }

    /// List records with filters
    pub async fn list(
        &self,
        filter: AvailabilityFilter,
    ) -> AvailabilityResult<Vec<AvailabilityRecord>> {
        self.repository.list(filter).await
    }

    /// Update a record, re-running conflict detection against the new range
    /// while excluding the record itself
    pub async fn update(
        &self,
        id: Uuid,
        input: UpdateAvailability,
    ) -> AvailabilityResult<AvailabilityRecord> {
        input
            .validate()
            .map_err(|e| AvailabilityError::Validation(e.to_string()))?;

        let mut record = self.get(id).await?;

        let override_conflicts = input.override_conflicts;
        record.apply_update(input);
        validate_range(record.start_date, record.end_date)?;

        let conflicts = self
            .check_conflicts(ConflictQuery {
                unit_id: record.unit_id,
                start_date: record.start_date,
                end_date: record.end_date,
                exclude: Some(record.id),
            })
            .await?;

        record.overridden = self.resolve_conflicts(&conflicts, override_conflicts)?;

        self.repository.update(record).await
    }

    /// Delete a record
    pub async fn delete(&self, id: Uuid) -> AvailabilityResult<()> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(AvailabilityError::NotFound(id));
        }

        Ok(())
    }

    /// Write the same window across several units atomically.
    ///
    /// Conflicts are collected for every targeted unit before anything is
    /// written; a single non-overridden conflict aborts the whole batch.
    pub async fn bulk_update(
        &self,
        input: BulkUpdateAvailability,
    ) -> AvailabilityResult<Vec<AvailabilityRecord>> {
        input
            .validate()
            .map_err(|e| AvailabilityError::Validation(e.to_string()))?;
        validate_range(input.start_date, input.end_date)?;

        let mut all_conflicts = Vec::new();
        for unit_id in &input.unit_ids {
            let conflicts = self
                .check_conflicts(ConflictQuery {
                    unit_id: *unit_id,
                    start_date: input.start_date,
                    end_date: input.end_date,
                    exclude: None,
                })
                .await?;
            all_conflicts.extend(conflicts);
        }

        let overridden = self.resolve_conflicts(&all_conflicts, input.override_conflicts)?;

        let records: Vec<AvailabilityRecord> = input
            .unit_ids
            .iter()
            .map(|unit_id| {
                AvailabilityRecord::new(
                    CreateAvailability {
                        unit_id: *unit_id,
                        start_date: input.start_date,
                        end_date: input.end_date,
                        status: input.status,
                        reason: input.reason.clone(),
                        notes: None,
                        override_conflicts: input.override_conflicts,
                    },
                    overridden,
                )
            })
            .collect();

        self.repository.create_many(records).await
    }

    /// Decide whether a write may proceed given the detected conflicts.
    ///
    /// Returns the `overridden` flag for the new record(s), or the conflict
    /// error when the caller did not ask to force the write.
    fn resolve_conflicts(
        &self,
        conflicts: &[ConflictDescriptor],
        override_conflicts: bool,
    ) -> AvailabilityResult<bool> {
        if conflicts.is_empty() {
            return Ok(false);
        }

        if !override_conflicts {
            return Err(AvailabilityError::Conflict(conflicts.to_vec()));
        }

        tracing::warn!(
            conflict_count = conflicts.len(),
            "Overriding conflicts on availability write"
        );
        Ok(true)
    }
}

fn validate_range(
    start: chrono::NaiveDate,
    end: chrono::NaiveDate,
) -> AvailabilityResult<()> {
    if start >= end {
        return Err(AvailabilityError::Validation(format!(
            "start_date {} must be before end_date {}",
            start, end
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AvailabilityStatus;
    use crate::repository::MockAvailabilityRepository;
    use chrono::NaiveDate;
    use mockall::predicate::eq;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn blocked_record(unit_id: Uuid, start: &str, end: &str) -> AvailabilityRecord {
        AvailabilityRecord::new(
            CreateAvailability {
                unit_id,
                start_date: d(start),
                end_date: d(end),
                status: AvailabilityStatus::Blocked,
                reason: Some("maintenance".to_string()),
                notes: None,
                override_conflicts: false,
            },
            false,
        )
    }

    fn create_input(unit_id: Uuid, override_conflicts: bool) -> CreateAvailability {
        CreateAvailability {
            unit_id,
            start_date: d("2026-06-01"),
            end_date: d("2026-06-10"),
            status: AvailabilityStatus::Blocked,
            reason: Some("renovation".to_string()),
            notes: None,
            override_conflicts,
        }
    }

    #[tokio::test]
    async fn test_create_rejects_inverted_range() {
        let mock_repo = MockAvailabilityRepository::new();
        let service = AvailabilityService::new(mock_repo);

        let result = service
            .create(CreateAvailability {
                unit_id: Uuid::now_v7(),
                start_date: d("2026-06-10"),
                end_date: d("2026-06-01"),
                status: AvailabilityStatus::Blocked,
                reason: None,
                notes: None,
                override_conflicts: false,
            })
            .await;

        assert!(matches!(result, Err(AvailabilityError::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_without_conflicts_is_not_overridden() {
        let mut mock_repo = MockAvailabilityRepository::new();
        let unit_id = Uuid::now_v7();

        mock_repo
            .expect_find_overlapping()
            .returning(|_, _, _, _| Ok(vec![]));
        mock_repo.expect_create().returning(Ok);

        let service = AvailabilityService::new(mock_repo);
        let record = service.create(create_input(unit_id, false)).await.unwrap();

        assert!(!record.overridden);
        assert_eq!(record.unit_id, unit_id);
    }

    #[tokio::test]
    async fn test_create_with_conflict_fails_without_override() {
        let mut mock_repo = MockAvailabilityRepository::new();
        let unit_id = Uuid::now_v7();
        let existing = blocked_record(unit_id, "2026-06-05", "2026-06-15");

        mock_repo
            .expect_find_overlapping()
            .returning(move |_, _, _, _| Ok(vec![existing.clone()]));

        let service = AvailabilityService::new(mock_repo);
        let result = service.create(create_input(unit_id, false)).await;

        match result {
            Err(AvailabilityError::Conflict(conflicts)) => {
                assert_eq!(conflicts.len(), 1);
                assert_eq!(conflicts[0].unit_id, unit_id);
            }
            other => panic!("expected conflict error, got {:?}", other.map(|r| r.id)),
        }
    }

    #[tokio::test]
    async fn test_create_with_override_marks_record_overridden() {
        let mut mock_repo = MockAvailabilityRepository::new();
        let unit_id = Uuid::now_v7();
        let existing = blocked_record(unit_id, "2026-06-05", "2026-06-15");

        mock_repo
            .expect_find_overlapping()
            .returning(move |_, _, _, _| Ok(vec![existing.clone()]));
        mock_repo.expect_create().returning(Ok);

        let service = AvailabilityService::new(mock_repo);
        let record = service.create(create_input(unit_id, true)).await.unwrap();

        assert!(record.overridden);
    }

    #[tokio::test]
    async fn test_update_excludes_own_record_from_conflict_scan() {
        let mut mock_repo = MockAvailabilityRepository::new();
        let unit_id = Uuid::now_v7();
        let existing = blocked_record(unit_id, "2026-06-01", "2026-06-10");
        let record_id = existing.id;

        {
            let existing = existing.clone();
            mock_repo
                .expect_get_by_id()
                .with(eq(record_id))
                .returning(move |_| Ok(Some(existing.clone())));
        }

        mock_repo
            .expect_find_overlapping()
            .withf(move |_, _, _, exclude| *exclude == Some(record_id))
            .returning(|_, _, _, _| Ok(vec![]));
        mock_repo.expect_update().returning(Ok);

        let service = AvailabilityService::new(mock_repo);
        let updated = service
            .update(
                record_id,
                UpdateAvailability {
                    end_date: Some(d("2026-06-12")),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.end_date, d("2026-06-12"));
    }

    #[tokio::test]
    async fn test_check_conflicts_maps_records_to_descriptors() {
        let mut mock_repo = MockAvailabilityRepository::new();
        let unit_id = Uuid::now_v7();
        let existing = blocked_record(unit_id, "2026-06-05", "2026-06-15");
        let existing_id = existing.id;

        mock_repo
            .expect_find_overlapping()
            .returning(move |_, _, _, _| Ok(vec![existing.clone()]));

        let service = AvailabilityService::new(mock_repo);
        let conflicts = service
            .check_conflicts(ConflictQuery {
                unit_id,
                start_date: d("2026-06-01"),
                end_date: d("2026-06-10"),
                exclude: None,
            })
            .await
            .unwrap();

        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].record_id, existing_id);
        assert_eq!(conflicts[0].status, "blocked");
    }

    #[tokio::test]
    async fn test_bulk_aborts_when_any_unit_conflicts() {
        let mut mock_repo = MockAvailabilityRepository::new();
        let clean_unit = Uuid::now_v7();
        let conflicted_unit = Uuid::now_v7();
        let existing = blocked_record(conflicted_unit, "2026-06-05", "2026-06-15");

        mock_repo
            .expect_find_overlapping()
            .returning(move |unit_id, _, _, _| {
                if unit_id == conflicted_unit {
                    Ok(vec![existing.clone()])
                } else {
                    Ok(vec![])
                }
            });
        // create_many must never run
        mock_repo.expect_create_many().never();

        let service = AvailabilityService::new(mock_repo);
        let result = service
            .bulk_update(BulkUpdateAvailability {
                unit_ids: vec![clean_unit, conflicted_unit],
                start_date: d("2026-06-01"),
                end_date: d("2026-06-10"),
                status: AvailabilityStatus::Blocked,
                reason: None,
                override_conflicts: false,
            })
            .await;

        match result {
            Err(AvailabilityError::Conflict(conflicts)) => {
                assert_eq!(conflicts.len(), 1);
                assert_eq!(conflicts[0].unit_id, conflicted_unit);
            }
            other => panic!("expected conflict error, got {:?}", other.map(|r| r.len())),
        }
    }

    #[tokio::test]
    async fn test_bulk_writes_one_record_per_unit() {
        let mut mock_repo = MockAvailabilityRepository::new();
        let units = vec![Uuid::now_v7(), Uuid::now_v7(), Uuid::now_v7()];

        mock_repo
            .expect_find_overlapping()
            .returning(|_, _, _, _| Ok(vec![]));
        mock_repo
            .expect_create_many()
            .withf(|records| records.len() == 3)
            .returning(Ok);

        let service = AvailabilityService::new(mock_repo);
        let created = service
            .bulk_update(BulkUpdateAvailability {
                unit_ids: units.clone(),
                start_date: d("2026-06-01"),
                end_date: d("2026-06-10"),
                status: AvailabilityStatus::Maintenance,
                reason: Some("deep clean".to_string()),
                override_conflicts: false,
            })
            .await
            .unwrap();

        assert_eq!(created.len(), 3);
        for (record, unit_id) in created.iter().zip(units) {
            assert_eq!(record.unit_id, unit_id);
            assert_eq!(record.status, AvailabilityStatus::Maintenance);
            assert!(!record.overridden);
        }
    }

    #[tokio::test]
    async fn test_bulk_with_override_forces_and_marks_records() {
        let mut mock_repo = MockAvailabilityRepository::new();
        let unit_id = Uuid::now_v7();
        let existing = blocked_record(unit_id, "2026-06-05", "2026-06-15");

        mock_repo
            .expect_find_overlapping()
            .returning(move |_, _, _, _| Ok(vec![existing.clone()]));
        mock_repo.expect_create_many().returning(Ok);

        let service = AvailabilityService::new(mock_repo);
        let created = service
            .bulk_update(BulkUpdateAvailability {
                unit_ids: vec![unit_id],
                start_date: d("2026-06-01"),
                end_date: d("2026-06-10"),
                status: AvailabilityStatus::Blocked,
                reason: None,
                override_conflicts: true,
            })
            .await
            .unwrap();

        assert!(created.iter().all(|r| r.overridden));
    }

    #[tokio::test]
    async fn test_delete_missing_record_is_not_found() {
        let mut mock_repo = MockAvailabilityRepository::new();
        let id = Uuid::now_v7();

        mock_repo
            .expect_delete()
            .with(eq(id))
            .returning(|_| Ok(false));

        let service = AvailabilityService::new(mock_repo);
        let result = service.delete(id).await;

        assert!(matches!(result, Err(AvailabilityError::NotFound(_))));
    }
}
