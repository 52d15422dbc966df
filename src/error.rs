use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::ledger::LedgerError;

/// `detail` mirrors `error.message` for browser clients that alert on it.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
    pub error: ErrorObject,
}

#[derive(Debug, Serialize)]
pub struct ErrorObject {
    pub code: String,
    pub message: String,
}

#[derive(Debug)]
pub enum ApiError {
    BadRequest(&'static str, String),
    NotFound(&'static str, String),
    Conflict(&'static str, String),
    Internal(String),
}

impl ApiError {
    pub fn appointment_not_found() -> Self {
        ApiError::NotFound("APPOINTMENT_NOT_FOUND", "Appointment not found".into())
    }

    pub fn lock_poisoned() -> Self {
        ApiError::Internal("ledger lock poisoned".into())
    }

    /// Reschedule reports an unavailable target slot with its own wording.
    pub fn from_reschedule(err: LedgerError) -> Self {
        match err {
            LedgerError::SlotUnavailable { .. } => ApiError::Conflict(
                "SLOT_UNAVAILABLE",
                "New time slot is not available".into(),
            ),
            other => other.into(),
        }
    }

    fn to_error_response(code: &str, message: &str) -> Json<ErrorResponse> {
        Json(ErrorResponse {
            detail: message.to_string(),
            error: ErrorObject {
                code: code.to_string(),
                message: message.to_string(),
            },
        })
    }
}

impl From<LedgerError> for ApiError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::NotFound(_) => ApiError::appointment_not_found(),
            LedgerError::SlotUnavailable { .. } => {
                ApiError::Conflict("SLOT_UNAVAILABLE", "Slot not available".into())
            }
            LedgerError::InvalidState { .. } => ApiError::BadRequest(
                "INVALID_STATE",
                "Only booked appointments can be rescheduled".into(),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(code, msg) => {
                (StatusCode::BAD_REQUEST, ApiError::to_error_response(code, &msg)).into_response()
            }
            ApiError::NotFound(code, msg) => {
                (StatusCode::NOT_FOUND, ApiError::to_error_response(code, &msg)).into_response()
            }
            ApiError::Conflict(code, msg) => {
                (StatusCode::CONFLICT, ApiError::to_error_response(code, &msg)).into_response()
            }
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError::to_error_response("INTERNAL", &msg),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AppointmentStatus;

    fn status_of(err: ApiError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn ledger_errors_map_to_status_codes() {
        assert_eq!(status_of(LedgerError::NotFound(7).into()), StatusCode::NOT_FOUND);
        assert_eq!(
            status_of(
                LedgerError::SlotUnavailable {
                    date: "2026-01-20".into(),
                    time: "10:00".into()
                }
                .into()
            ),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(
                LedgerError::InvalidState {
                    id: 1,
                    status: AppointmentStatus::Cancelled
                }
                .into()
            ),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(status_of(ApiError::lock_poisoned()), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn reschedule_conflict_uses_new_slot_wording() {
        let err = ApiError::from_reschedule(LedgerError::SlotUnavailable {
            date: "2026-01-21".into(),
            time: "11:00".into(),
        });
        match err {
            ApiError::Conflict(code, msg) => {
                assert_eq!(code, "SLOT_UNAVAILABLE");
                assert_eq!(msg, "New time slot is not available");
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(matches!(
            ApiError::from_reschedule(LedgerError::NotFound(3)),
            ApiError::NotFound(..)
        ));
    }
}
