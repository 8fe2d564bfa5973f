//! Availability Domain
//!
//! Calendar windows on units (`[start_date, end_date)`, per-day granularity)
//! plus the conflict detector the rest of the platform leans on. Writes that
//! overlap existing windows are refused with a structured 409 carrying the
//! overlapping records; callers can resubmit with `override_conflicts` to
//! force the write, which marks the new record `overridden`.
//!
//! Bulk writes across units are all-or-nothing: conflicts are collected for
//! every unit up front and the inserts share one database transaction.

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{AvailabilityError, AvailabilityResult};
pub use models::{
    AvailabilityFilter, AvailabilityRecord, AvailabilityStatus, BulkUpdateAvailability,
    ConflictDescriptor, ConflictKind, ConflictQuery, CreateAvailability, UpdateAvailability,
    ranges_overlap,
};
pub use postgres::PgAvailabilityRepository;
pub use repository::AvailabilityRepository;
pub use service::AvailabilityService;
