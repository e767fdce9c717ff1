//! Data models for the Skill Matrix application.
//!
//! These models are the JSON wire format of the API as well as the client's mirror of it.

mod assignment;
mod member;
mod skill;

pub use assignment::*;
pub use member::*;
pub use skill::*;

use serde::{Deserialize, Serialize};

/// Response body for create operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub id: i64,
    pub message: String,
}

/// Response body for operations that only confirm.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
