//! Skill Matrix server.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use skill_matrix::config::Config;
use skill_matrix::db::{self, Repository};
use skill_matrix::{create_router, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Skill Matrix server");
    tracing::info!("Database path: {:?}", config.db_path);
    tracing::info!("Bind address: {}", config.bind_addr);
    if let Some(dir) = &config.static_dir {
        tracing::info!("Serving static assets from {:?}", dir);
    }

    // Initialize database
    let pool = db::init_database(&config.db_path).await?;

    if config.seed_demo {
        if db::seed_demo_data(&pool).await? {
            tracing::info!("Empty store, sample crew inserted");
        }
    } else {
        tracing::debug!("Demo seeding disabled (SKILLS_SEED_DEMO)");
    }

    let repo = Arc::new(Repository::new(pool));

    // Create application state
    let state = AppState {
        repo,
        config: Arc::new(config.clone()),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on http://{}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
