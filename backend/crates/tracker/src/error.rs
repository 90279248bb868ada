//! Tracker Error Types
//!
//! Tracker-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.
//!
//! Two tiers reach the client:
//! - validation failures: 400 with `{"error": ...}`
//! - lenient failures (unknown user, unparseable exercise date):
//!   200 with `{"error": ...}`

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, body::ErrorBody, kind::ErrorKind};
use thiserror::Error;

use crate::domain::value_object::{DateParseError, DescriptionError, DurationError, UsernameError};

/// Tracker-specific result type alias
pub type TrackerResult<T> = Result<T, TrackerError>;

#[derive(Debug, Error)]
pub enum TrackerError {
    /// Missing or malformed required field
    #[error("{0}")]
    Validation(String),

    /// Request body could not be decoded
    #[error("{0}")]
    MalformedBody(String),

    /// No user with the requested id
    #[error("user not found")]
    UserNotFound,

    /// Exercise date could not be parsed
    #[error("Invalid Date")]
    InvalidDate,
}

impl TrackerError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            TrackerError::Validation(_) | TrackerError::MalformedBody(_) => {
                StatusCode::BAD_REQUEST
            }
            TrackerError::UserNotFound | TrackerError::InvalidDate => StatusCode::OK,
        }
    }

    /// Lenient errors are reported in a success-status body
    pub fn is_lenient(&self) -> bool {
        matches!(self, TrackerError::UserNotFound | TrackerError::InvalidDate)
    }

    /// Get the ErrorKind for this error
    ///
    /// Lenient variants still carry the kind they would have under a
    /// strict contract; only their status code differs.
    pub fn kind(&self) -> ErrorKind {
        match self {
            TrackerError::Validation(_)
            | TrackerError::MalformedBody(_)
            | TrackerError::InvalidDate => ErrorKind::BadRequest,
            TrackerError::UserNotFound => ErrorKind::NotFound,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let err = AppError::new(self.kind(), self.to_string());
        match self {
            TrackerError::MalformedBody(_) => err.with_action(
                "Send the body as application/json or application/x-www-form-urlencoded",
            ),
            _ => err,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            TrackerError::MalformedBody(detail) => {
                tracing::warn!(detail = %detail, "Rejected request body");
            }
            _ => {
                tracing::debug!(error = %self, "Tracker error");
            }
        }
    }
}

impl IntoResponse for TrackerError {
    fn into_response(self) -> Response {
        self.log();
        if self.is_lenient() {
            return (self.status_code(), Json(ErrorBody::new(self.to_string()))).into_response();
        }
        self.to_app_error().into_response()
    }
}

impl From<UsernameError> for TrackerError {
    fn from(err: UsernameError) -> Self {
        TrackerError::Validation(err.to_string())
    }
}

impl From<DescriptionError> for TrackerError {
    fn from(err: DescriptionError) -> Self {
        TrackerError::Validation(err.to_string())
    }
}

impl From<DurationError> for TrackerError {
    fn from(err: DurationError) -> Self {
        TrackerError::Validation(err.to_string())
    }
}

impl From<DateParseError> for TrackerError {
    fn from(_: DateParseError) -> Self {
        TrackerError::InvalidDate
    }
}
