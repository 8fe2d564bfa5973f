use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum_helpers::{AppError, ErrorCode, ErrorResponse};
use domain_availability::ConflictDescriptor;
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum BookingError {
    #[error("Booking not found: {0}")]
    BookingNotFound(Uuid),

    #[error("Unit not found: {0}")]
    UnitNotFound(Uuid),

    #[error("Date range conflicts with {} existing record(s)", .0.len())]
    Conflict(Vec<ConflictDescriptor>),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type BookingResult<T> = Result<T, BookingError>;

impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        match self {
            // Same 409 shape as availability conflicts so callers handle
            // both with one code path
            BookingError::Conflict(conflicts) => {
                let message = format!(
                    "Date range conflicts with {} existing record(s)",
                    conflicts.len()
                );
                let body = ErrorResponse {
                    code: ErrorCode::Conflict.code(),
                    error: ErrorCode::Conflict.as_str().to_string(),
                    message,
                    details: Some(json!({ "conflicts": conflicts })),
                };
                (StatusCode::CONFLICT, Json(body)).into_response()
            }
            BookingError::BookingNotFound(id) => {
                AppError::NotFound(format!("Booking {} not found", id)).into_response()
            }
            BookingError::UnitNotFound(id) => {
                AppError::NotFound(format!("Unit {} not found", id)).into_response()
            }
            BookingError::Validation(msg) => AppError::BadRequest(msg).into_response(),
            BookingError::Internal(msg) => AppError::InternalServerError(msg).into_response(),
        }
    }
}
