use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use ts_rs::TS;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Status of an availability window
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    Default,
    DeriveActiveEnum,
    EnumIter,
    ToSchema,
    TS,
)]
#[ts(export)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "availability_status")]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AvailabilityStatus {
    #[default]
    #[sea_orm(string_value = "available")]
    Available,
    #[sea_orm(string_value = "blocked")]
    Blocked,
    #[sea_orm(string_value = "maintenance")]
    Maintenance,
}

/// Half-open interval overlap test over `[start, end)` date ranges.
///
/// Adjacent ranges (one ending exactly where the other starts) do not
/// overlap, so back-to-back windows on the same unit are legal.
pub fn ranges_overlap(
    a_start: NaiveDate,
    a_end: NaiveDate,
    b_start: NaiveDate,
    b_end: NaiveDate,
) -> bool {
    a_start < b_end && a_end > b_start
}

/// AvailabilityRecord - one calendar window on a unit
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, TS)]
#[ts(export)]
pub struct AvailabilityRecord {
    /// Unique identifier
    #[ts(as = "String")]
    pub id: Uuid,
    /// Unit this window applies to
    #[ts(as = "String")]
    pub unit_id: Uuid,
    /// Inclusive start of the window
    #[ts(as = "String")]
    pub start_date: NaiveDate,
    /// Exclusive end of the window
    #[ts(as = "String")]
    pub end_date: NaiveDate,
    pub status: AvailabilityStatus,
    pub reason: Option<String>,
    pub notes: Option<String>,
    /// True when this record was written over existing conflicts
    pub overridden: bool,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

/// What kind of record produced a conflict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, ToSchema, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ConflictKind {
    Availability,
    Booking,
}

/// One existing record overlapping a requested date range.
///
/// Transient; returned in conflict-check responses and in the `details` of
/// 409 errors, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, TS)]
#[ts(export)]
pub struct ConflictDescriptor {
    /// ID of the conflicting record
    #[ts(as = "String")]
    pub record_id: Uuid,
    #[ts(as = "String")]
    pub unit_id: Uuid,
    pub kind: ConflictKind,
    /// Status of the conflicting record, e.g. "blocked" or "confirmed"
    pub status: String,
    #[ts(as = "String")]
    pub start_date: NaiveDate,
    #[ts(as = "String")]
    pub end_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ConflictDescriptor {
    /// Build a descriptor from an availability record
    pub fn from_availability(record: &AvailabilityRecord) -> Self {
        Self {
            record_id: record.id,
            unit_id: record.unit_id,
            kind: ConflictKind::Availability,
            status: record.status.to_string(),
            start_date: record.start_date,
            end_date: record.end_date,
            reason: record.reason.clone(),
        }
    }
}

/// DTO for creating an availability record
#[derive(Debug, Clone, Deserialize, Validate, ToSchema, TS)]
#[ts(export)]
pub struct CreateAvailability {
    #[ts(as = "String")]
    pub unit_id: Uuid,
    #[ts(as = "String")]
    pub start_date: NaiveDate,
    #[ts(as = "String")]
    pub end_date: NaiveDate,
    #[serde(default)]
    pub status: AvailabilityStatus,
    #[validate(length(max = 255))]
    pub reason: Option<String>,
    #[validate(length(max = 1000))]
    pub notes: Option<String>,
    /// Write even if the range overlaps existing records
    #[serde(default)]
    pub override_conflicts: bool,
}

/// DTO for updating an availability record
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema, TS)]
#[ts(export)]
pub struct UpdateAvailability {
    #[ts(as = "Option<String>")]
    pub start_date: Option<NaiveDate>,
    #[ts(as = "Option<String>")]
    pub end_date: Option<NaiveDate>,
    pub status: Option<AvailabilityStatus>,
    #[validate(length(max = 255))]
    pub reason: Option<String>,
    #[validate(length(max = 1000))]
    pub notes: Option<String>,
    #[serde(default)]
    pub override_conflicts: bool,
}

/// DTO for writing the same window across several units at once
#[derive(Debug, Clone, Deserialize, Validate, ToSchema, TS)]
#[ts(export)]
pub struct BulkUpdateAvailability {
    #[validate(length(min = 1, max = 100))]
    #[ts(as = "Vec<String>")]
    pub unit_ids: Vec<Uuid>,
    #[ts(as = "String")]
    pub start_date: NaiveDate,
    #[ts(as = "String")]
    pub end_date: NaiveDate,
    pub status: AvailabilityStatus,
    #[validate(length(max = 255))]
    pub reason: Option<String>,
    #[serde(default)]
    pub override_conflicts: bool,
}

/// Query filters for listing availability records
#[derive(Debug, Clone, Deserialize, ToSchema, IntoParams)]
pub struct AvailabilityFilter {
    pub unit_id: Option<Uuid>,
    /// Only records ending after this date
    pub from: Option<NaiveDate>,
    /// Only records starting before this date
    pub to: Option<NaiveDate>,
    pub status: Option<AvailabilityStatus>,
    #[serde(default = "default_limit")]
    pub limit: usize,
    #[serde(default)]
    pub offset: usize,
}

/// Query parameters for the conflict-check endpoint
#[derive(Debug, Clone, Deserialize, ToSchema, IntoParams)]
pub struct ConflictQuery {
    pub unit_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Record to skip, used when checking an update against itself
    pub exclude: Option<Uuid>,
}

fn default_limit() -> usize {
    50
}

impl Default for AvailabilityFilter {
    fn default() -> Self {
        Self {
            unit_id: None,
            from: None,
            to: None,
            status: None,
            limit: default_limit(),
            offset: 0,
        }
    }
}

impl AvailabilityRecord {
    /// Create a new record from CreateAvailability; `overridden` marks a
    /// forced write over existing conflicts
    pub fn new(input: CreateAvailability, overridden: bool) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            unit_id: input.unit_id,
            start_date: input.start_date,
            end_date: input.end_date,
            status: input.status,
            reason: input.reason,
            notes: input.notes,
            overridden,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply updates from UpdateAvailability DTO
    pub fn apply_update(&mut self, update: UpdateAvailability) {
        if let Some(start_date) = update.start_date {
            self.start_date = start_date;
        }
        if let Some(end_date) = update.end_date {
            self.end_date = end_date;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(reason) = update.reason {
            self.reason = Some(reason);
        }
        if let Some(notes) = update.notes {
            self.notes = Some(notes);
        }
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_overlap_partial() {
        assert!(ranges_overlap(
            d("2026-06-01"),
            d("2026-06-10"),
            d("2026-06-05"),
            d("2026-06-15")
        ));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let (a_start, a_end) = (d("2026-06-01"), d("2026-06-10"));
        let (b_start, b_end) = (d("2026-06-05"), d("2026-06-15"));

        assert_eq!(
            ranges_overlap(a_start, a_end, b_start, b_end),
            ranges_overlap(b_start, b_end, a_start, a_end)
        );
    }

    #[test]
    fn test_adjacent_ranges_do_not_overlap() {
        // Checkout day equals the next check-in day
        assert!(!ranges_overlap(
            d("2026-06-01"),
            d("2026-06-10"),
            d("2026-06-10"),
            d("2026-06-20")
        ));
    }

    #[test]
    fn test_contained_range_overlaps() {
        assert!(ranges_overlap(
            d("2026-06-01"),
            d("2026-06-30"),
            d("2026-06-10"),
            d("2026-06-12")
        ));
    }

    #[test]
    fn test_disjoint_ranges_do_not_overlap() {
        assert!(!ranges_overlap(
            d("2026-06-01"),
            d("2026-06-05"),
            d("2026-07-01"),
            d("2026-07-05")
        ));
    }

    #[test]
    fn test_new_record_carries_override_flag() {
        let record = AvailabilityRecord::new(
            CreateAvailability {
                unit_id: Uuid::now_v7(),
                start_date: d("2026-06-01"),
                end_date: d("2026-06-10"),
                status: AvailabilityStatus::Blocked,
                reason: Some("renovation".to_string()),
                notes: None,
                override_conflicts: true,
            },
            true,
        );

        assert!(record.overridden);
        assert_eq!(record.status, AvailabilityStatus::Blocked);
        assert_eq!(record.reason.as_deref(), Some("renovation"));
    }

    #[test]
    fn test_wire_types_export_to_typescript() {
        assert!(AvailabilityRecord::decl().contains("overridden"));
        assert!(ConflictDescriptor::decl().contains("record_id"));
        assert!(BulkUpdateAvailability::decl().contains("unit_ids"));
    }

    #[test]
    fn test_conflict_descriptor_from_availability() {
        let record = AvailabilityRecord::new(
            CreateAvailability {
                unit_id: Uuid::now_v7(),
                start_date: d("2026-06-01"),
                end_date: d("2026-06-10"),
                status: AvailabilityStatus::Maintenance,
                reason: Some("boiler".to_string()),
                notes: None,
                override_conflicts: false,
            },
            false,
        );

        let descriptor = ConflictDescriptor::from_availability(&record);
        assert_eq!(descriptor.record_id, record.id);
        assert_eq!(descriptor.kind, ConflictKind::Availability);
        assert_eq!(descriptor.status, "maintenance");
        assert_eq!(descriptor.reason.as_deref(), Some("boiler"));
    }
}
