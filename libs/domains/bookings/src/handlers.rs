use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use axum_helpers::{
    UuidPath, ValidatedJson,
    errors::responses::{
        BadRequestUuidResponse, BadRequestValidationResponse, ConflictResponse,
        InternalServerErrorResponse, NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::BookingResult;
use crate::models::{Booking, BookingFilter, CreateBooking, UpdateBooking};
use crate::repository::{AvailabilityConflictSource, BookingRepository, UnitSource};
use crate::service::BookingService;

const TAG: &str = "bookings";

/// OpenAPI documentation for the Bookings API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_bookings,
        create_booking,
        get_booking,
        update_booking,
        cancel_booking,
        delete_booking,
    ),
    components(
        schemas(Booking, CreateBooking, UpdateBooking, BookingFilter),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            ConflictResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Guest booking endpoints")
    )
)]
pub struct ApiDoc;

/// Create the booking router with all HTTP endpoints
pub fn router<R, U, A>(service: BookingService<R, U, A>) -> Router
where
    R: BookingRepository + 'static,
    U: UnitSource + 'static,
    A: AvailabilityConflictSource + 'static,
{
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_bookings).post(create_booking))
        .route(
            "/{id}",
            get(get_booking).put(update_booking).delete(delete_booking),
        )
        .route("/{id}/cancel", post(cancel_booking))
        .with_state(shared_service)
}

/// List bookings with optional filters
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    params(BookingFilter),
    responses(
        (status = 200, description = "List of bookings", body = Vec<Booking>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_bookings<R, U, A>(
    State(service): State<Arc<BookingService<R, U, A>>>,
    Query(filter): Query<BookingFilter>,
) -> BookingResult<Json<Vec<Booking>>>
where
    R: BookingRepository,
    U: UnitSource,
    A: AvailabilityConflictSource,
{
    let bookings = service.list(filter).await?;
    Ok(Json(bookings))
}

/// Create a booking
///
/// The total is quoted as nights times the unit base price. Ranges that
/// overlap active bookings or blocked windows are rejected with 409 unless
/// `override_conflicts` is set.
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateBooking,
    responses(
        (status = 201, description = "Booking created", body = Booking),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_booking<R, U, A>(
    State(service): State<Arc<BookingService<R, U, A>>>,
    ValidatedJson(input): ValidatedJson<CreateBooking>,
) -> BookingResult<impl IntoResponse>
where
    R: BookingRepository,
    U: UnitSource,
    A: AvailabilityConflictSource,
{
    let booking = service.create(input).await?;
    Ok((StatusCode::CREATED, Json(booking)))
}

/// Get a booking by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Booking found", body = Booking),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_booking<R, U, A>(
    State(service): State<Arc<BookingService<R, U, A>>>,
    UuidPath(id): UuidPath,
) -> BookingResult<Json<Booking>>
where
    R: BookingRepository,
    U: UnitSource,
    A: AvailabilityConflictSource,
{
    let booking = service.get(id).await?;
    Ok(Json(booking))
}

/// Update a booking
///
/// Date changes re-run conflict detection and re-quote the total.
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Booking ID")
    ),
    request_body = UpdateBooking,
    responses(
        (status = 200, description = "Booking updated", body = Booking),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_booking<R, U, A>(
    State(service): State<Arc<BookingService<R, U, A>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateBooking>,
) -> BookingResult<Json<Booking>>
where
    R: BookingRepository,
    U: UnitSource,
    A: AvailabilityConflictSource,
{
    let booking = service.update(id, input).await?;
    Ok(Json(booking))
}

/// Cancel a booking, freeing its dates
#[utoipa::path(
    post,
    path = "/{id}/cancel",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Booking cancelled", body = Booking),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn cancel_booking<R, U, A>(
    State(service): State<Arc<BookingService<R, U, A>>>,
    UuidPath(id): UuidPath,
) -> BookingResult<Json<Booking>>
where
    R: BookingRepository,
    U: UnitSource,
    A: AvailabilityConflictSource,
{
    let booking = service.cancel(id).await?;
    Ok(Json(booking))
}

/// Delete a booking
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Booking ID")
    ),
    responses(
        (status = 204, description = "Booking deleted"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_booking<R, U, A>(
    State(service): State<Arc<BookingService<R, U, A>>>,
    UuidPath(id): UuidPath,
) -> BookingResult<impl IntoResponse>
where
    R: BookingRepository,
    U: UnitSource,
    A: AvailabilityConflictSource,
{
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
