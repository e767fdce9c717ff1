//! Member API endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use super::{created, require_text, ApiResult};
use crate::errors::AppError;
use crate::models::{CreateMemberRequest, CreatedResponse, Member};
use crate::AppState;

/// GET /api/members - List all members with their skills.
pub async fn list_members(State(state): State<AppState>) -> ApiResult<Vec<Member>> {
    let members = state.repo.list_members_with_skills().await?;
    Ok(Json(members))
}

/// GET /api/members/{id} - Get a single member with their skills.
pub async fn get_member(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<Member> {
    match state.repo.get_member(id).await? {
        Some(member) => Ok(Json(member)),
        None => Err(AppError::NotFound(format!("Member {} not found", id))),
    }
}

/// POST /api/members - Create a new member.
pub async fn create_member(
    State(state): State<AppState>,
    body: Result<Json<CreateMemberRequest>, JsonRejection>,
) -> ApiResult<CreatedResponse> {
    let Json(request) = body?;
    require_text(&request.name, "Member name")?;

    let member = state.repo.create_member(&request).await?;
    created(member.id, "Member added to the crew!")
}
