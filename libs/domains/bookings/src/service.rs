use chrono::NaiveDate;
use domain_availability::{ConflictDescriptor, ConflictKind};
use domain_properties::Unit;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::error::{BookingError, BookingResult};
use crate::models::{Booking, BookingFilter, BookingStatus, CreateBooking, UpdateBooking};
use crate::repository::{AvailabilityConflictSource, BookingRepository, UnitSource};

/// Service layer for booking quoting, conflict checks and lifecycle
#[derive(Clone)]
pub struct BookingService<R, U, A>
where
    R: BookingRepository,
    U: UnitSource,
    A: AvailabilityConflictSource,
{
    repository: Arc<R>,
    units: Arc<U>,
    availability: Arc<A>,
}

/// Descriptor for a booking acting as a conflict source
fn descriptor_from_booking(booking: &Booking) -> ConflictDescriptor {
    ConflictDescriptor {
        record_id: booking.id,
        unit_id: booking.unit_id,
        kind: ConflictKind::Booking,
        status: booking.status.to_string(),
        start_date: booking.check_in,
        end_date: booking.check_out,
        reason: None,
    }
}

impl<R, U, A> BookingService<R, U, A>
where
    R: BookingRepository,
    U: UnitSource,
    A: AvailabilityConflictSource,
{
    pub fn new(repository: R, units: U, availability: A) -> Self {
        Self {
            repository: Arc::new(repository),
            units: Arc::new(units),
            availability: Arc::new(availability),
        }
    }

    /// Create a booking: quote the price, scan both conflict sources, and
    /// refuse overlaps unless the caller set `override_conflicts`
    pub async fn create(&self, input: CreateBooking) -> BookingResult<Booking> {
        input
            .validate()
            .map_err(|e| BookingError::Validation(e.to_string()))?;
        validate_range(input.check_in, input.check_out)?;

        let unit = self.get_unit(input.unit_id).await?;

        if input.guests > unit.max_guests {
            return Err(BookingError::Validation(format!(
                "{} guests exceed the unit capacity of {}",
                input.guests, unit.max_guests
            )));
        }

        let conflicts = self
            .scan_conflicts(input.unit_id, input.check_in, input.check_out, None)
            .await?;
        self.resolve_conflicts(conflicts, input.override_conflicts)?;

        let nights = (input.check_out - input.check_in).num_days();
        let total_price = unit.base_price.multiply(nights);

        let booking = Booking::new(input, total_price);
        self.repository.create(booking).await
    }

    /// Get a booking by ID
    pub async fn get(&self, id: Uuid) -> BookingResult<Booking> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(BookingError::BookingNotFound(id))
    }

    /// List bookings with filters
    pub async fn list(&self, filter: BookingFilter) -> BookingResult<Vec<Booking>> {
        self.repository.list(filter).await
    }

    /// Update a booking; date changes re-run conflict detection excluding
    /// the booking itself and re-quote the total
    pub async fn update(&self, id: Uuid, input: UpdateBooking) -> BookingResult<Booking> {
        input
            .validate()
            .map_err(|e| BookingError::Validation(e.to_string()))?;

        let mut booking = self.get(id).await?;
        let dates_changed = input.check_in.is_some() || input.check_out.is_some();
        let override_conflicts = input.override_conflicts;

        booking.apply_update(input);
        validate_range(booking.check_in, booking.check_out)?;

        let unit = self.get_unit(booking.unit_id).await?;

        if booking.guests > unit.max_guests {
            return Err(BookingError::Validation(format!(
                "{} guests exceed the unit capacity of {}",
                booking.guests, unit.max_guests
            )));
        }

        if dates_changed {
            let conflicts = self
                .scan_conflicts(
                    booking.unit_id,
                    booking.check_in,
                    booking.check_out,
                    Some(booking.id),
                )
                .await?;
            self.resolve_conflicts(conflicts, override_conflicts)?;

            booking.total_price = unit.base_price.multiply(booking.nights());
        }

        self.repository.update(booking).await
    }

    /// Cancel a booking, removing it as a conflict source
    pub async fn cancel(&self, id: Uuid) -> BookingResult<Booking> {
        let mut booking = self.get(id).await?;

        booking.status = BookingStatus::Cancelled;
        booking.updated_at = chrono::Utc::now();

        tracing::info!(booking_id = %id, "Cancelled booking");
        self.repository.update(booking).await
    }

    /// Delete a booking
    pub async fn delete(&self, id: Uuid) -> BookingResult<()> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(BookingError::BookingNotFound(id));
        }

        Ok(())
    }

    async fn get_unit(&self, unit_id: Uuid) -> BookingResult<Unit> {
        self.units
            .get_unit(unit_id)
            .await?
            .ok_or(BookingError::UnitNotFound(unit_id))
    }

    /// Both conflict sources: overlapping non-cancelled bookings and
    /// overlapping blocked or maintenance availability windows
    async fn scan_conflicts(
        &self,
        unit_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
        exclude: Option<Uuid>,
    ) -> BookingResult<Vec<ConflictDescriptor>> {
        let bookings = self
            .repository
            .find_overlapping_active(unit_id, start, end, exclude)
            .await?;

        let mut conflicts: Vec<ConflictDescriptor> =
            bookings.iter().map(descriptor_from_booking).collect();

        let blocking = self.availability.find_blocking(unit_id, start, end).await?;
        conflicts.extend(blocking);

        Ok(conflicts)
    }

    fn resolve_conflicts(
        &self,
        conflicts: Vec<ConflictDescriptor>,
        override_conflicts: bool,
    ) -> BookingResult<()> {
        if conflicts.is_empty() {
            return Ok(());
        }

        if !override_conflicts {
            return Err(BookingError::Conflict(conflicts));
        }

        tracing::warn!(
            conflict_count = conflicts.len(),
            "Overriding conflicts on booking write"
        );
        Ok(())
    }
}

fn validate_range(check_in: NaiveDate, check_out: NaiveDate) -> BookingResult<()> {
    if check_in >= check_out {
        return Err(BookingError::Validation(format!(
            "check_in {} must be before check_out {}",
            check_in, check_out
        )));
    }
    Ok(())
}
