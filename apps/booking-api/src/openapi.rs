use utoipa::OpenApi;

/// Combined OpenAPI document for the booking platform.
///
/// Domain docs are nested under the same paths the routers mount at.
#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "Booking API",
        version = "0.1.0",
        description = "Property, unit, availability and booking management with conflict detection"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = "/properties", api = domain_properties::handlers::PropertiesApiDoc),
        (path = "/units", api = domain_properties::handlers::UnitsApiDoc),
        (path = "/availability", api = domain_availability::handlers::ApiDoc),
        (path = "/bookings", api = domain_bookings::handlers::ApiDoc)
    )
)]
pub struct ApiDoc;
