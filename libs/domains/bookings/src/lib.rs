//! Bookings Domain
//!
//! Guest reservations on units over `[check_in, check_out)`. Creating or
//! re-dating a booking scans two conflict sources: other non-cancelled
//! bookings on the unit and availability windows with a non-available
//! status. The total is quoted as nights times the unit base price.
//!
//! The properties and availability domains are reached through the
//! `UnitSource` and `AvailabilityConflictSource` seams so the service can
//! be tested with mocks.

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{BookingError, BookingResult};
pub use models::{Booking, BookingFilter, BookingStatus, CreateBooking, UpdateBooking};
pub use postgres::PgBookingRepository;
pub use repository::{AvailabilityConflictSource, BookingRepository, UnitSource};
pub use service::BookingService;
