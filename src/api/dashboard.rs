//! Server-rendered dashboard page.

use axum::{extract::State, response::Html};

use crate::client::DashboardState;
use crate::errors::AppError;
use crate::render;
use crate::AppState;

/// GET / - Render the dashboard from the current store contents.
pub async fn dashboard_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let members = state.repo.list_members_with_skills().await?;
    let skills = state.repo.list_skills().await?;

    let view = DashboardState {
        members,
        skills,
        current_member_id: None,
    };
    // The page is built from the whole store; keep it off the async workers.
    let html = tokio::task::spawn_blocking(move || render::page(&view)).await?;
    Ok(Html(html))
}
