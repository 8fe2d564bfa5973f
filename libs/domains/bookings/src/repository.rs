use async_trait::async_trait;
use chrono::NaiveDate;
use domain_availability::ConflictDescriptor;
use domain_properties::Unit;
use uuid::Uuid;

use crate::error::BookingResult;
use crate::models::{Booking, BookingFilter};

/// Repository trait for booking persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Insert a fully-built booking
    async fn create(&self, booking: Booking) -> BookingResult<Booking>;

    /// Get a booking by ID
    async fn get_by_id(&self, id: Uuid) -> BookingResult<Option<Booking>>;

    /// List bookings with optional filters
    async fn list(&self, filter: BookingFilter) -> BookingResult<Vec<Booking>>;

    /// Persist an updated booking
    async fn update(&self, booking: Booking) -> BookingResult<Booking>;

    /// Delete a booking by ID
    async fn delete(&self, id: Uuid) -> BookingResult<bool>;

    /// Non-cancelled bookings on `unit_id` whose `[check_in, check_out)`
    /// intersects `[start, end)`; `exclude` skips the booking being updated
    async fn find_overlapping_active(
        &self,
        unit_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
        exclude: Option<Uuid>,
    ) -> BookingResult<Vec<Booking>>;
}

/// Seam into the properties domain for unit lookups during quoting
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UnitSource: Send + Sync {
    async fn get_unit(&self, id: Uuid) -> BookingResult<Option<Unit>>;
}

/// Seam into the availability domain: blocked or maintenance windows
/// overlapping a requested range
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AvailabilityConflictSource: Send + Sync {
    async fn find_blocking(
        &self,
        unit_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> BookingResult<Vec<ConflictDescriptor>>;
}
