use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    UuidPath, ValidatedJson,
    errors::responses::{
        BadRequestUuidResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::PropertyResult;
use crate::models::{
    CreateProperty, CreateUnit, Property, PropertyFilter, Unit, UnitFilter, UpdateProperty,
    UpdateUnit,
};
use crate::repository::PropertyRepository;
use crate::service::PropertyService;

const PROPERTIES_TAG: &str = "properties";
const UNITS_TAG: &str = "units";

/// OpenAPI documentation for the Properties API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_properties,
        create_property,
        get_property,
        update_property,
        delete_property,
        list_property_units,
    ),
    components(
        schemas(Property, CreateProperty, UpdateProperty, PropertyFilter),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = PROPERTIES_TAG, description = "Property management endpoints")
    )
)]
pub struct PropertiesApiDoc;

/// OpenAPI documentation for the Units API
#[derive(OpenApi)]
#[openapi(
    paths(list_units, create_unit, get_unit, update_unit, delete_unit),
    components(
        schemas(Unit, CreateUnit, UpdateUnit, UnitFilter),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = UNITS_TAG, description = "Unit management endpoints")
    )
)]
pub struct UnitsApiDoc;

/// Create the property router with all HTTP endpoints
pub fn properties_router<R: PropertyRepository + 'static>(
    service: Arc<PropertyService<R>>,
) -> Router {
    Router::new()
        .route("/", get(list_properties).post(create_property))
        .route(
            "/{id}",
            get(get_property)
                .put(update_property)
                .delete(delete_property),
        )
        .route("/{id}/units", get(list_property_units))
        .with_state(service)
}

/// Create the unit router with all HTTP endpoints
pub fn units_router<R: PropertyRepository + 'static>(service: Arc<PropertyService<R>>) -> Router {
    Router::new()
        .route("/", get(list_units).post(create_unit))
        .route(
            "/{id}",
            get(get_unit).put(update_unit).delete(delete_unit),
        )
        .with_state(service)
}

/// List properties with optional filters
#[utoipa::path(
    get,
    path = "",
    tag = PROPERTIES_TAG,
    params(PropertyFilter),
    responses(
        (status = 200, description = "List of properties", body = Vec<Property>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_properties<R: PropertyRepository>(
    State(service): State<Arc<PropertyService<R>>>,
    Query(filter): Query<PropertyFilter>,
) -> PropertyResult<Json<Vec<Property>>> {
    let properties = service.list_properties(filter).await?;
    Ok(Json(properties))
}

/// Create a new property
#[utoipa::path(
    post,
    path = "",
    tag = PROPERTIES_TAG,
    request_body = CreateProperty,
    responses(
        (status = 201, description = "Property created successfully", body = Property),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_property<R: PropertyRepository>(
    State(service): State<Arc<PropertyService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateProperty>,
) -> PropertyResult<impl IntoResponse> {
    let property = service.create_property(input).await?;
    Ok((StatusCode::CREATED, Json(property)))
}

/// Get a property by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = PROPERTIES_TAG,
    params(
        ("id" = Uuid, Path, description = "Property ID")
    ),
    responses(
        (status = 200, description = "Property found", body = Property),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_property<R: PropertyRepository>(
    State(service): State<Arc<PropertyService<R>>>,
    UuidPath(id): UuidPath,
) -> PropertyResult<Json<Property>> {
    let property = service.get_property(id).await?;
    Ok(Json(property))
}

/// Update a property
#[utoipa::path(
    put,
    path = "/{id}",
    tag = PROPERTIES_TAG,
    params(
        ("id" = Uuid, Path, description = "Property ID")
    ),
    request_body = UpdateProperty,
    responses(
        (status = 200, description = "Property updated successfully", body = Property),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_property<R: PropertyRepository>(
    State(service): State<Arc<PropertyService<R>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateProperty>,
) -> PropertyResult<Json<Property>> {
    let property = service.update_property(id, input).await?;
    Ok(Json(property))
}

/// Delete a property
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = PROPERTIES_TAG,
    params(
        ("id" = Uuid, Path, description = "Property ID")
    ),
    responses(
        (status = 204, description = "Property deleted successfully"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_property<R: PropertyRepository>(
    State(service): State<Arc<PropertyService<R>>>,
    UuidPath(id): UuidPath,
) -> PropertyResult<impl IntoResponse> {
    service.delete_property(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List the units belonging to a property
#[utoipa::path(
    get,
    path = "/{id}/units",
    tag = PROPERTIES_TAG,
    params(
        ("id" = Uuid, Path, description = "Property ID")
    ),
    responses(
        (status = 200, description = "Units of the property", body = Vec<Unit>),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_property_units<R: PropertyRepository>(
    State(service): State<Arc<PropertyService<R>>>,
    UuidPath(id): UuidPath,
) -> PropertyResult<Json<Vec<Unit>>> {
    // 404 for an unknown property rather than an empty list
    service.get_property(id).await?;

    let units = service
        .list_units(UnitFilter {
            property_id: Some(id),
            ..Default::default()
        })
        .await?;

    Ok(Json(units))
}

/// List units with optional filters
#[utoipa::path(
    get,
    path = "",
    tag = UNITS_TAG,
    params(UnitFilter),
    responses(
        (status = 200, description = "List of units", body = Vec<Unit>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_units<R: PropertyRepository>(
    State(service): State<Arc<PropertyService<R>>>,
    Query(filter): Query<UnitFilter>,
) -> PropertyResult<Json<Vec<Unit>>> {
    let units = service.list_units(filter).await?;
    Ok(Json(units))
}

/// Create a new unit under an existing property
#[utoipa::path(
    post,
    path = "",
    tag = UNITS_TAG,
    request_body = CreateUnit,
    responses(
        (status = 201, description = "Unit created successfully", body = Unit),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_unit<R: PropertyRepository>(
    State(service): State<Arc<PropertyService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateUnit>,
) -> PropertyResult<impl IntoResponse> {
    let unit = service.create_unit(input).await?;
    Ok((StatusCode::CREATED, Json(unit)))
}

/// Get a unit by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = UNITS_TAG,
    params(
        ("id" = Uuid, Path, description = "Unit ID")
    ),
    responses(
        (status = 200, description = "Unit found", body = Unit),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_unit<R: PropertyRepository>(
    State(service): State<Arc<PropertyService<R>>>,
    UuidPath(id): UuidPath,
) -> PropertyResult<Json<Unit>> {
    let unit = service.get_unit(id).await?;
    Ok(Json(unit))
}

/// Update a unit
#[utoipa::path(
    put,
    path = "/{id}",
    tag = UNITS_TAG,
    params(
        ("id" = Uuid, Path, description = "Unit ID")
    ),
    request_body = UpdateUnit,
    responses(
        (status = 200, description = "Unit updated successfully", body = Unit),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_unit<R: PropertyRepository>(
    State(service): State<Arc<PropertyService<R>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateUnit>,
) -> PropertyResult<Json<Unit>> {
    let unit = service.update_unit(id, input).await?;
    Ok(Json(unit))
}

/// Delete a unit
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = UNITS_TAG,
    params(
        ("id" = Uuid, Path, description = "Unit ID")
    ),
    responses(
        (status = 204, description = "Unit deleted successfully"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_unit<R: PropertyRepository>(
    State(service): State<Arc<PropertyService<R>>>,
    UuidPath(id): UuidPath,
) -> PropertyResult<impl IntoResponse> {
    service.delete_unit(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
