//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

/// Standard error messages for consistent API responses
pub mod messages {
    pub const INTERNAL_ERROR: &str = "An internal server error occurred";
    pub const VALIDATION_FAILED: &str = "Request validation failed";
    pub const INVALID_UUID: &str = "Invalid UUID format";
    pub const NOT_FOUND_RESOURCE: &str = "Resource not found";
    pub const CONFLICTING_RECORDS: &str = "Date range overlaps existing records";

    // Error codes for client parsing
    pub const CODE_INTERNAL: &str = "INTERNAL_ERROR";
    pub const CODE_VALIDATION: &str = "VALIDATION_ERROR";
    pub const CODE_UUID: &str = "INVALID_UUID";
    pub const CODE_NOT_FOUND: &str = "NOT_FOUND";
    pub const CODE_CONFLICT: &str = "CONFLICT";
}

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "code": 1005,
        "error": "INTERNAL_ERROR",
        "message": "An internal server error occurred",
        "details": null
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Validation Error",
    content_type = "application/json",
    example = json!({
        "code": 1001,
        "error": "VALIDATION_ERROR",
        "message": "Request validation failed",
        "details": {
            "end_date": [{
                "code": "date_order",
                "message": "end_date must be after start_date",
                "params": {}
            }]
        }
    })
)]
pub struct BadRequestValidationResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Invalid UUID",
    content_type = "application/json",
    example = json!({
        "code": 1002,
        "error": "INVALID_UUID",
        "message": "Invalid UUID format",
        "details": null
    })
)]
pub struct BadRequestUuidResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "code": 1004,
        "error": "NOT_FOUND",
        "message": "Resource not found",
        "details": null
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Conflict - date range overlaps existing records",
    content_type = "application/json",
    example = json!({
        "code": 1008,
        "error": "CONFLICT",
        "message": "Date range overlaps existing records",
        "details": {
            "conflicts": [{
                "record_id": "01890a5d-ac96-774b-bcce-b302099a8057",
                "unit_id": "01890a5d-ac96-774b-bcce-b302099a8058",
                "kind": "availability",
                "status": "blocked",
                "start_date": "2025-07-01",
                "end_date": "2025-07-05",
                "reason": "owner stay"
            }]
        }
    })
)]
pub struct ConflictResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Service Unavailable",
    content_type = "application/json",
    example = json!({
        "code": 1011,
        "error": "SERVICE_UNAVAILABLE",
        "message": "Service is temporarily unavailable",
        "details": null
    })
)]
pub struct ServiceUnavailableResponse(pub ErrorResponse);
