//! Skill API endpoints.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use super::{created, require_text, ApiResult};
use crate::errors::AppError;
use crate::models::{CreateSkillRequest, CreatedResponse, Skill};
use crate::AppState;

/// GET /api/skills - List all skills, by category then name.
pub async fn list_skills(State(state): State<AppState>) -> ApiResult<Vec<Skill>> {
    let skills = state.repo.list_skills().await?;
    Ok(Json(skills))
}

/// GET /api/skills/{id} - Get a single skill.
pub async fn get_skill(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<Skill> {
    state
        .repo
        .get_skill(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Skill {} not found", id)))
}

/// POST /api/skills - Create a new skill.
pub async fn create_skill(
    State(state): State<AppState>,
    body: Result<Json<CreateSkillRequest>, JsonRejection>,
) -> ApiResult<CreatedResponse> {
    let Json(request) = body?;
    require_text(&request.name, "Skill name")?;
    require_text(&request.category, "Skill category")?;

    let skill = state.repo.create_skill(&request).await?;
    created(skill.id, "New skill discovered!")
}
