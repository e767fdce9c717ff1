//! Skill Matrix
//!
//! Team skills tracking: a REST backend with SQLite persistence, plus the
//! dashboard client and renderer that consume it.

pub mod api;
pub mod client;
pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod render;
pub mod ui;

use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use config::Config;
use db::Repository;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
    pub config: Arc<Config>,
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API routes
    let api_routes = Router::new()
        // Members
        .route("/members", get(api::list_members).post(api::create_member))
        .route("/members/{id}", get(api::get_member))
        // Skills
        .route("/skills", get(api::list_skills).post(api::create_skill))
        .route("/skills/{id}", get(api::get_skill))
        // Assignments
        .route("/member-skills", post(api::assign_skill))
        .route(
            "/member-skills/{member_id}/{skill_id}",
            delete(api::remove_skill),
        );

    let mut router = Router::new()
        .route("/", get(api::dashboard_page))
        .route("/health", get(health_check))
        .nest("/api", api_routes);

    if let Some(dir) = &state.config.static_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
