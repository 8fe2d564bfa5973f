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

use crate::error::AvailabilityResult;
use crate::models::{
    AvailabilityFilter, AvailabilityRecord, BulkUpdateAvailability, ConflictDescriptor,
    ConflictQuery, CreateAvailability, UpdateAvailability,
};
use crate::repository::AvailabilityRepository;
use crate::service::AvailabilityService;

const TAG: &str = "availability";

/// OpenAPI documentation for the Availability API
#[derive(OpenApi)]
#[openapi(
    paths(
        check_conflicts,
        list_availability,
        create_availability,
        bulk_update_availability,
        get_availability,
        update_availability,
        delete_availability,
    ),
    components(
        schemas(
            AvailabilityRecord,
            CreateAvailability,
            UpdateAvailability,
            BulkUpdateAvailability,
            AvailabilityFilter,
            ConflictDescriptor
        ),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            ConflictResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Availability windows and conflict detection")
    )
)]
pub struct ApiDoc;

/// Create the availability router with all HTTP endpoints
pub fn router<R: AvailabilityRepository + 'static>(service: AvailabilityService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_availability).post(create_availability))
        .route("/conflicts", get(check_conflicts))
        .route("/bulk", post(bulk_update_availability))
        .route(
            "/{id}",
            get(get_availability)
                .put(update_availability)
                .delete(delete_availability),
        )
        .with_state(shared_service)
}

/// Check a date range against existing records without writing anything
#[utoipa::path(
    get,
    path = "/conflicts",
    tag = TAG,
    params(ConflictQuery),
    responses(
        (status = 200, description = "Overlapping records, empty when the range is free", body = Vec<ConflictDescriptor>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn check_conflicts<R: AvailabilityRepository>(
    State(service): State<Arc<AvailabilityService<R>>>,
    Query(query): Query<ConflictQuery>,
) -> AvailabilityResult<Json<Vec<ConflictDescriptor>>> {
    let conflicts = service.check_conflicts(query).await?;
    Ok(Json(conflicts))
}

/// List availability records with optional filters
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    params(AvailabilityFilter),
    responses(
        (status = 200, description = "List of availability records", body = Vec<AvailabilityRecord>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_availability<R: AvailabilityRepository>(
    State(service): State<Arc<AvailabilityService<R>>>,
    Query(filter): Query<AvailabilityFilter>,
) -> AvailabilityResult<Json<Vec<AvailabilityRecord>>> {
    let records = service.list(filter).await?;
    Ok(Json(records))
}

/// Create an availability record
///
/// Overlapping ranges are rejected with 409 unless `override_conflicts` is
/// set, in which case the record is written with `overridden = true`.
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateAvailability,
    responses(
        (status = 201, description = "Availability record created", body = AvailabilityRecord),
        (status = 400, response = BadRequestValidationResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_availability<R: AvailabilityRepository>(
    State(service): State<Arc<AvailabilityService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateAvailability>,
) -> AvailabilityResult<impl IntoResponse> {
    let record = service.create(input).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// Write the same window across several units atomically
///
/// Conflicts are collected across all targeted units first; any conflict
/// without the override flag aborts the whole batch.
#[utoipa::path(
    post,
    path = "/bulk",
    tag = TAG,
    request_body = BulkUpdateAvailability,
    responses(
        (status = 201, description = "One record created per unit", body = Vec<AvailabilityRecord>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn bulk_update_availability<R: AvailabilityRepository>(
    State(service): State<Arc<AvailabilityService<R>>>,
    ValidatedJson(input): ValidatedJson<BulkUpdateAvailability>,
) -> AvailabilityResult<impl IntoResponse> {
    let records = service.bulk_update(input).await?;
    Ok((StatusCode::CREATED, Json(records)))
}

/// Get an availability record by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Availability record ID")
    ),
    responses(
        (status = 200, description = "Availability record found", body = AvailabilityRecord),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_availability<R: AvailabilityRepository>(
    State(service): State<Arc<AvailabilityService<R>>>,
    UuidPath(id): UuidPath,
) -> AvailabilityResult<Json<AvailabilityRecord>> {
    let record = service.get(id).await?;
    Ok(Json(record))
}

/// Update an availability record
///
/// Date changes re-run conflict detection against the new range, excluding
/// the record itself.
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Availability record ID")
    ),
    request_body = UpdateAvailability,
    responses(
        (status = 200, description = "Availability record updated", body = AvailabilityRecord),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_availability<R: AvailabilityRepository>(
    State(service): State<Arc<AvailabilityService<R>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateAvailability>,
) -> AvailabilityResult<Json<AvailabilityRecord>> {
    let record = service.update(id, input).await?;
    Ok(Json(record))
}

/// Delete an availability record
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Availability record ID")
    ),
    responses(
        (status = 204, description = "Availability record deleted"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_availability<R: AvailabilityRepository>(
    State(service): State<Arc<AvailabilityService<R>>>,
    UuidPath(id): UuidPath,
) -> AvailabilityResult<impl IntoResponse> {
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
