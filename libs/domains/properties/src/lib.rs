//! Properties Domain
//!
//! Properties are physical locations (a building, a villa, a guesthouse) that
//! own one or more bookable units. Units carry the nightly base price and
//! capacity limits consulted by the booking flow.
//!
//! The module follows the handlers -> service -> repository -> models layering,
//! with the repository expressed as a trait so services can be tested against
//! mocks and wired to Postgres in production.

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{PropertyError, PropertyResult};
pub use models::{
    CreateProperty, CreateUnit, Currency, Money, Property, PropertyFilter, PropertyStatus, Unit,
    UnitFilter, UnitStatus, UnitType, UpdateProperty, UpdateUnit,
};
pub use postgres::PgPropertyRepository;
pub use repository::PropertyRepository;
pub use service::PropertyService;
