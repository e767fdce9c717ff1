//! Print a summary of a running Skill Matrix server.

use std::env;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use skill_matrix::client::{Dashboard, SkillsClient};
use skill_matrix::render;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let base_url =
        env::var("SKILLS_API_URL").unwrap_or_else(|_| "http://127.0.0.1:3000".to_string());

    let mut dashboard = Dashboard::new(SkillsClient::new(base_url));
    dashboard.init().await?;

    print!("{}", render::text_report(dashboard.state()));
    Ok(())
}
