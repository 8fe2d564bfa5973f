use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum_helpers::{AppError, ErrorCode, ErrorResponse};
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

use crate::models::ConflictDescriptor;

#[derive(Debug, Error)]
pub enum AvailabilityError {
    #[error("Availability record not found: {0}")]
    NotFound(Uuid),

    #[error("Date range conflicts with {} existing record(s)", .0.len())]
    Conflict(Vec<ConflictDescriptor>),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type AvailabilityResult<T> = Result<T, AvailabilityError>;

impl IntoResponse for AvailabilityError {
    fn into_response(self) -> Response {
        match self {
            // Conflicts carry the descriptor list so callers can inspect the
            // overlapping records and resubmit with override_conflicts
            AvailabilityError::Conflict(conflicts) => {
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
            AvailabilityError::NotFound(id) => {
                AppError::NotFound(format!("Availability record {} not found", id)).into_response()
            }
            AvailabilityError::Validation(msg) => AppError::BadRequest(msg).into_response(),
            AvailabilityError::Internal(msg) => {
                AppError::InternalServerError(msg).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ConflictKind;
    use chrono::NaiveDate;

    #[test]
    fn test_conflict_error_message_counts_records() {
        let descriptor = ConflictDescriptor {
            record_id: Uuid::now_v7(),
            unit_id: Uuid::now_v7(),
            kind: ConflictKind::Availability,
            status: "blocked".to_string(),
            start_date: NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 6, 10).unwrap(),
            reason: None,
        };

        let err = AvailabilityError::Conflict(vec![descriptor]);
        assert!(err.to_string().contains("1 existing record"));
    }

    #[test]
    fn test_conflict_descriptors_serialize_into_details() {
        let descriptor = ConflictDescriptor {
            record_id: Uuid::now_v7(),
            unit_id: Uuid::now_v7(),
            kind: ConflictKind::Booking,
            status: "confirmed".to_string(),
            start_date: NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 6, 10).unwrap(),
            reason: None,
        };

        let details = json!({ "conflicts": [descriptor] });
        let conflicts = details["conflicts"].as_array().unwrap();
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0]["kind"], "booking");
        // reason is omitted when absent
        assert!(conflicts[0].get("reason").is_none());
    }
}
