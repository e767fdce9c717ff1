//! Member skill assignment endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use super::{confirmed, ApiResult};
use crate::models::{AssignSkillRequest, MessageResponse, SkillLevel};
use crate::AppState;

/// POST /api/member-skills - Rate a member on a skill (insert or replace).
pub async fn assign_skill(
    State(state): State<AppState>,
    body: Result<Json<AssignSkillRequest>, JsonRejection>,
) -> ApiResult<MessageResponse> {
    let Json(request) = body?;
    let level = SkillLevel::new(request.level)?;

    state
        .repo
        .upsert_assignment(request.member_id, request.skill_id, level)
        .await?;
    confirmed("Skill level updated!")
}

/// DELETE /api/member-skills/{member_id}/{skill_id} - Remove a rating.
pub async fn remove_skill(
    State(state): State<AppState>,
    Path((member_id, skill_id)): Path<(i64, i64)>,
) -> ApiResult<MessageResponse> {
    state.repo.remove_assignment(member_id, skill_id).await?;
    confirmed("Skill removed")
}
