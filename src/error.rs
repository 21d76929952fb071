//! Error ladder: engine rule errors fold into [`ServiceError`], which folds
//! into [`AppError`] and finally into an HTTP response.

use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

use crate::state::{bobs27::AttemptError, clock::ThrowError, x01::TurnError};

/// Errors that can occur in service layer operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Invalid input provided by the client.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Operation cannot be performed in the current state.
    #[error("invalid state: {0}")]
    InvalidState(String),
    /// Requested resource was not found.
    #[error("not found: {0}")]
    NotFound(String),
}

impl From<TurnError> for ServiceError {
    fn from(err: TurnError) -> Self {
        match err {
            TurnError::PointsOutOfRange { .. } => ServiceError::InvalidInput(err.to_string()),
            TurnError::NotYourTurn { .. } | TurnError::MatchOver => {
                ServiceError::InvalidState(err.to_string())
            }
        }
    }
}

impl From<AttemptError> for ServiceError {
    fn from(err: AttemptError) -> Self {
        match err {
            AttemptError::HitsOutOfRange { .. } => ServiceError::InvalidInput(err.to_string()),
            AttemptError::RunOver => ServiceError::InvalidState(err.to_string()),
        }
    }
}

impl From<ThrowError> for ServiceError {
    fn from(err: ThrowError) -> Self {
        match err {
            ThrowError::DartOutOfRange { .. } => ServiceError::InvalidInput(err.to_string()),
            ThrowError::RoundOver => ServiceError::InvalidState(err.to_string()),
        }
    }
}

/// Application-level errors that are converted to HTTP responses.
#[derive(Debug, Error)]
pub enum AppError {
    /// Bad request with invalid input.
    #[error("bad request: {0}")]
    BadRequest(String),
    /// Requested resource not found.
    #[error("not found: {0}")]
    NotFound(String),
    /// Conflict with current state.
    #[error("conflict: {0}")]
    Conflict(String),
    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidInput(message) => AppError::BadRequest(message),
            ServiceError::InvalidState(message) => AppError::Conflict(message),
            ServiceError::NotFound(message) => AppError::NotFound(message),
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(err: ValidationErrors) -> Self {
        AppError::BadRequest(format!("validation failed: {}", err))
    }
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let payload = Json(ErrorBody {
            message: self.to_string(),
        });

        (status, payload).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_errors_map_to_bad_request() {
        let service: ServiceError = TurnError::PointsOutOfRange { points: 200 }.into();
        assert!(matches!(service, ServiceError::InvalidInput(_)));
        let app: AppError = service.into();
        assert!(matches!(app, AppError::BadRequest(_)));
    }

    #[test]
    fn terminal_state_errors_map_to_conflict() {
        for service in [
            ServiceError::from(TurnError::MatchOver),
            ServiceError::from(AttemptError::RunOver),
            ServiceError::from(ThrowError::RoundOver),
        ] {
            assert!(matches!(
                AppError::from(service),
                AppError::Conflict(_)
            ));
        }
    }
}
