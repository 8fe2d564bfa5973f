use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum PropertyError {
    #[error("Property not found: {0}")]
    PropertyNotFound(Uuid),

    #[error("Unit not found: {0}")]
    UnitNotFound(Uuid),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type PropertyResult<T> = Result<T, PropertyError>;

/// Convert PropertyError to AppError for standardized error responses
impl From<PropertyError> for AppError {
    fn from(err: PropertyError) -> Self {
        match err {
            PropertyError::PropertyNotFound(id) => {
                AppError::NotFound(format!("Property {} not found", id))
            }
            PropertyError::UnitNotFound(id) => AppError::NotFound(format!("Unit {} not found", id)),
            PropertyError::Validation(msg) => AppError::BadRequest(msg),
            PropertyError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for PropertyError {
    fn into_response(self) -> Response {
        // Convert to AppError for standardized error response format
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
