use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::Value;
use thiserror::Error;
use tracing::{error, warn};

use crate::catalog::CatalogError;
use crate::utils::response::error as error_response;
use crate::views::EventDetailView;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// `details` carries a renderable "not found" view for the client.
    #[error("Resource not found: {message}")]
    NotFound {
        message: String,
        details: Option<Value>,
    },

    #[error("Internal server error")]
    InternalServerError(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::NotFound { .. } => "NOT_FOUND",
            AppError::InternalServerError(_) => "INTERNAL_SERVER_ERROR",
        }
    }

    fn log(&self) {
        match self {
            // Stale links and typos are expected traffic.
            AppError::ValidationError(msg) | AppError::NotFound { message: msg, .. } => {
                warn!(code = self.code(), message = %msg, "Request rejected");
            }
            AppError::InternalServerError(msg) => {
                error!(error = ?self, message = %msg, "Application error");
            }
        }
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound(requested) => {
                let message = CatalogError::NotFound(requested.clone()).to_string();
                let details = serde_json::to_value(EventDetailView::not_found(requested)).ok();
                AppError::NotFound { message, details }
            }
            CatalogError::Validation(msg) => AppError::ValidationError(msg),
            CatalogError::Poisoned => AppError::InternalServerError(CatalogError::Poisoned.to_string()),
        }
    }
}

/// Malformed or incomplete request bodies use the same envelope as
/// every other rejection.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::ValidationError(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.code();

        self.log();

        match self {
            AppError::ValidationError(msg) => error_response(code, msg, None, status),
            AppError::NotFound { message, details } => error_response(code, message, details, status),
            // Internal details stay in the logs.
            AppError::InternalServerError(_) => {
                error_response(code, "An internal error occurred", None, status)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_carries_recovery_view() {
        let err = AppError::from(CatalogError::NotFound("42".to_string()));

        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        match err {
            AppError::NotFound { message, details } => {
                assert_eq!(message, "Event '42' was not found");
                let details = details.unwrap();
                assert_eq!(details["state"], "not_found");
                assert_eq!(details["back"]["path"], "/events");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_validation_maps_to_bad_request() {
        let err = AppError::from(CatalogError::Validation("title must not be empty".into()));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_poisoned_lock_is_internal() {
        let err = AppError::from(CatalogError::Poisoned);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
