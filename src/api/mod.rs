//! REST API module.
//!
//! Handlers return the JSON shapes the dashboard client consumes; failures
//! render through `AppError`.

mod assignments;
mod dashboard;
mod members;
mod skills;

pub use assignments::*;
pub use dashboard::*;
pub use members::*;
pub use skills::*;

use axum::Json;

use crate::errors::AppError;
use crate::models::{CreatedResponse, MessageResponse};

/// Response type for JSON endpoints.
pub type ApiResult<T> = Result<Json<T>, AppError>;

/// Confirm a create operation with the new row id.
pub fn created(id: i64, message: &str) -> ApiResult<CreatedResponse> {
    Ok(Json(CreatedResponse {
        id,
        message: message.to_string(),
    }))
}

/// Confirm an operation that has nothing else to return.
pub fn confirmed(message: &str) -> ApiResult<MessageResponse> {
    Ok(Json(MessageResponse {
        message: message.to_string(),
    }))
}

/// Reject blank required text fields.
fn require_text(value: &str, field: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{} is required", field)));
    }
    Ok(())
}
