use chrono::{DateTime, NaiveDate, Utc};
use domain_properties::Money;
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use ts_rs::TS;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Lifecycle status of a booking
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
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "booking_status")]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "confirmed")]
    Confirmed,
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
    #[sea_orm(string_value = "checked_out")]
    CheckedOut,
}

impl BookingStatus {
    /// Cancelled bookings stop being conflict sources
    pub fn is_conflict_source(&self) -> bool {
        !matches!(self, BookingStatus::Cancelled)
    }
}

/// Booking - a guest reservation on a unit over `[check_in, check_out)`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, TS)]
#[ts(export)]
pub struct Booking {
    /// Unique identifier
    #[ts(as = "String")]
    pub id: Uuid,
    /// Unit being booked
    #[ts(as = "String")]
    pub unit_id: Uuid,
    pub guest_name: String,
    pub guest_email: String,
    /// Inclusive arrival day
    #[ts(as = "String")]
    pub check_in: NaiveDate,
    /// Exclusive departure day
    #[ts(as = "String")]
    pub check_out: NaiveDate,
    pub guests: i32,
    /// Quoted as nights * unit base price at creation time
    pub total_price: Money,
    pub status: BookingStatus,
    pub notes: Option<String>,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a booking
#[derive(Debug, Clone, Deserialize, Validate, ToSchema, TS)]
#[ts(export)]
pub struct CreateBooking {
    #[ts(as = "String")]
    pub unit_id: Uuid,
    #[validate(length(min = 1, max = 255))]
    pub guest_name: String,
    #[validate(email)]
    pub guest_email: String,
    #[ts(as = "String")]
    pub check_in: NaiveDate,
    #[ts(as = "String")]
    pub check_out: NaiveDate,
    #[validate(range(min = 1, max = 50))]
    pub guests: i32,
    #[validate(length(max = 1000))]
    pub notes: Option<String>,
    /// Book even if the range overlaps blocked windows or other bookings
    #[serde(default)]
    pub override_conflicts: bool,
}

/// DTO for updating a booking
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema, TS)]
#[ts(export)]
pub struct UpdateBooking {
    #[ts(as = "Option<String>")]
    pub check_in: Option<NaiveDate>,
    #[ts(as = "Option<String>")]
    pub check_out: Option<NaiveDate>,
    #[validate(range(min = 1, max = 50))]
    pub guests: Option<i32>,
    pub status: Option<BookingStatus>,
    #[validate(length(max = 1000))]
    pub notes: Option<String>,
    #[serde(default)]
    pub override_conflicts: bool,
}

/// Query filters for listing bookings
#[derive(Debug, Clone, Deserialize, ToSchema, IntoParams)]
pub struct BookingFilter {
    pub unit_id: Option<Uuid>,
    pub status: Option<BookingStatus>,
    pub guest_email: Option<String>,
    /// Only bookings departing after this date
    pub from: Option<NaiveDate>,
    /// Only bookings arriving before this date
    pub to: Option<NaiveDate>,
    #[serde(default = "default_limit")]
    pub limit: usize,
    #[serde(default)]
    pub offset: usize,
}

fn default_limit() -> usize {
    50
}

impl Default for BookingFilter {
    fn default() -> Self {
        Self {
            unit_id: None,
            status: None,
            guest_email: None,
            from: None,
            to: None,
            limit: default_limit(),
            offset: 0,
        }
    }
}

impl Booking {
    /// Create a new booking from CreateBooking with the quoted total
    pub fn new(input: CreateBooking, total_price: Money) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            unit_id: input.unit_id,
            guest_name: input.guest_name,
            guest_email: input.guest_email,
            check_in: input.check_in,
            check_out: input.check_out,
            guests: input.guests,
            total_price,
            status: BookingStatus::Pending,
            notes: input.notes,
            created_at: now,
            updated_at: now,
        }
    }

    /// Number of nights, the quote multiplier
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    /// Apply updates from UpdateBooking DTO
    pub fn apply_update(&mut self, update: UpdateBooking) {
        if let Some(check_in) = update.check_in {
            self.check_in = check_in;
        }
        if let Some(check_out) = update.check_out {
            self.check_out = check_out;
        }
        if let Some(guests) = update.guests {
            self.guests = guests;
        }
        if let Some(status) = update.status {
            self.status = status;
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
    use domain_properties::Currency;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn sample_input() -> CreateBooking {
        CreateBooking {
            unit_id: Uuid::now_v7(),
            guest_name: "Ada Lovelace".to_string(),
            guest_email: "ada@example.com".to_string(),
            check_in: d("2026-07-01"),
            check_out: d("2026-07-05"),
            guests: 2,
            notes: None,
            override_conflicts: false,
        }
    }

    #[test]
    fn test_nights_counts_half_open_days() {
        let booking = Booking::new(sample_input(), Money::new(40_000, Currency::Usd));
        assert_eq!(booking.nights(), 4);
    }

    #[test]
    fn test_new_booking_starts_pending() {
        let booking = Booking::new(sample_input(), Money::new(40_000, Currency::Usd));
        assert_eq!(booking.status, BookingStatus::Pending);
    }

    #[test]
    fn test_cancelled_is_not_a_conflict_source() {
        assert!(!BookingStatus::Cancelled.is_conflict_source());
        assert!(BookingStatus::Pending.is_conflict_source());
        assert!(BookingStatus::Confirmed.is_conflict_source());
        assert!(BookingStatus::CheckedOut.is_conflict_source());
    }

    #[test]
    fn test_wire_types_export_to_typescript() {
        assert!(Booking::decl().contains("total_price"));
        assert!(CreateBooking::decl().contains("override_conflicts"));
    }

    #[test]
    fn test_validation_rejects_bad_email() {
        let mut input = sample_input();
        input.guest_email = "not-an-email".to_string();
        assert!(input.validate().is_err());
    }
}
