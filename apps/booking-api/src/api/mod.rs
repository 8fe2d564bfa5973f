use axum::Router;
use std::sync::Arc;

use domain_availability::{AvailabilityService, PgAvailabilityRepository};
use domain_bookings::{BookingService, PgBookingRepository};
use domain_properties::{PgPropertyRepository, PropertyService};

pub mod health;

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix is added by the `create_router` helper.
///
/// Returns a stateless Router; each domain router has its state applied
/// already, so only Arc pointer clones remain.
pub fn routes(state: &crate::state::AppState) -> Router {
    let property_service = Arc::new(PropertyService::new(PgPropertyRepository::new(
        state.db.clone(),
    )));

    let availability_service =
        AvailabilityService::new(PgAvailabilityRepository::new(state.db.clone()));

    let booking_service = BookingService::new(
        PgBookingRepository::new(state.db.clone()),
        PgPropertyRepository::new(state.db.clone()),
        PgAvailabilityRepository::new(state.db.clone()),
    );

    Router::new()
        .nest(
            "/properties",
            domain_properties::handlers::properties_router(property_service.clone()),
        )
        .nest(
            "/units",
            domain_properties::handlers::units_router(property_service),
        )
        .nest(
            "/availability",
            domain_availability::handlers::router(availability_service),
        )
        .nest("/bookings", domain_bookings::handlers::router(booking_service))
}

/// Creates a router with the /ready endpoint that performs actual health
/// checks against the database.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
