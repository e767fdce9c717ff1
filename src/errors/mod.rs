//! Error handling module for the Skill Matrix backend.
//!
//! Provides centralized error types with mapping to HTTP status codes and response envelopes.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Error codes as constants to avoid stringly-typed errors.
pub mod codes {
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const CONFLICT: &str = "CONFLICT";
    pub const DATABASE_ERROR: &str = "DATABASE_ERROR";
    pub const BAD_REQUEST: &str = "BAD_REQUEST";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// Resource not found, including dangling member/skill references
    NotFound(String),
    /// Rejected input: blank names, out-of-range levels, failed CHECK constraints
    Validation(String),
    /// Uniqueness violation, e.g. a duplicate skill name
    Conflict(String),
    /// Database error
    Database(String),
    /// Malformed request body
    BadRequest(String),
    /// Failure outside the database, e.g. a panicked render task
    Internal(String),
}

impl AppError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => codes::NOT_FOUND,
            AppError::Validation(_) => codes::VALIDATION_ERROR,
            AppError::Conflict(_) => codes::CONFLICT,
            AppError::Database(_) => codes::DATABASE_ERROR,
            AppError::BadRequest(_) => codes::BAD_REQUEST,
            AppError::Internal(_) => codes::INTERNAL_ERROR,
        }
    }

    /// Get the error message.
    pub fn message(&self) -> &str {
        match self {
            AppError::NotFound(msg)
            | AppError::Validation(msg)
            | AppError::Conflict(msg)
            | AppError::Database(msg)
            | AppError::BadRequest(msg)
            | AppError::Internal(msg) => msg,
        }
    }

    /// Whether the caller can fix the request and try again.
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for AppError {}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                tracing::debug!("Unique constraint rejected write: {}", db_err);
                return AppError::Conflict(format!("Write rejected: {}", db_err.message()));
            }
            if db_err.is_check_violation() {
                tracing::debug!("Check constraint rejected write: {}", db_err);
                return AppError::Validation(format!("Write rejected: {}", db_err.message()));
            }
            if db_err.is_foreign_key_violation() {
                tracing::debug!("Foreign key rejected write: {}", db_err);
                return AppError::NotFound("Referenced member or skill does not exist".to_string());
            }
        }

        tracing::error!("Database error: {:?}", err);
        AppError::Database(format!("Database error: {}", err))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("Rejected request body: {}", rejection);
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        tracing::error!("Background task failed: {}", err);
        AppError::Internal("Internal server error".to_string())
    }
}

/// Error details in the response envelope.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetails {
    pub code: String,
    pub message: String,
}

/// Error response envelope.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: ErrorDetails,
}

impl ErrorResponse {
    pub fn new(error: &AppError) -> Self {
        Self {
            success: false,
            error: ErrorDetails {
                code: error.error_code().to_string(),
                message: error.message().to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if !self.is_client_error() {
            tracing::warn!("Request failed: {}", self);
        }
        (status, Json(ErrorResponse::new(&self))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::NotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Validation("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Conflict("x".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::Database("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Internal("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Internal("x".into()).error_code(),
            codes::INTERNAL_ERROR
        );
    }

    #[test]
    fn test_client_error_split() {
        assert!(AppError::Validation("level".into()).is_client_error());
        assert!(AppError::Conflict("name".into()).is_client_error());
        assert!(!AppError::Database("io".into()).is_client_error());
        assert!(AppError::BadRequest("json".into()).is_client_error());
        assert!(!AppError::Internal("render".into()).is_client_error());
    }

    #[tokio::test]
    async fn test_panicked_task_maps_to_internal() {
        let join_err = tokio::spawn(async { panic!("render failed") })
            .await
            .unwrap_err();
        let err = AppError::from(join_err);
        assert!(matches!(err, AppError::Internal(_)));

        let body = ErrorResponse::new(&err);
        assert_eq!(body.error.code, "INTERNAL_ERROR");
    }

    #[test]
    fn test_error_response_envelope() {
        let body = ErrorResponse::new(&AppError::Conflict("Skill exists".into()));
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"]["code"], "CONFLICT");
        assert_eq!(json["error"]["message"], "Skill exists");
    }
}
