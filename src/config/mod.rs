//! Configuration module for the Skill Matrix backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to SQLite database file
    pub db_path: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Insert the sample crew on first startup with an empty member table
    pub seed_demo: bool,
    /// Optional directory of static assets served for unknown paths
    pub static_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, AddrParseError> {
        dotenvy::dotenv().ok();

        let db_path = env::var("SKILLS_DB_PATH")
            .unwrap_or_else(|_| "./data/skills.sqlite".to_string())
            .into();

        let bind_addr = env::var("SKILLS_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:3000".to_string())
            .parse()?;

        let log_level = env::var("SKILLS_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let seed_demo = env::var("SKILLS_SEED_DEMO")
            .map(|v| parse_flag(&v))
            .unwrap_or(true);

        let static_dir = env::var("SKILLS_STATIC_DIR")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            db_path,
            bind_addr,
            log_level,
            seed_demo,
            static_dir,
        })
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    // Both cases share one test so they never race on the process environment.
    #[test]
    fn test_config_from_env() {
        env::remove_var("SKILLS_DB_PATH");
        env::remove_var("SKILLS_BIND_ADDR");
        env::remove_var("SKILLS_LOG_LEVEL");
        env::remove_var("SKILLS_SEED_DEMO");
        env::remove_var("SKILLS_STATIC_DIR");

        let config = Config::from_env().unwrap();

        assert_eq!(config.db_path, PathBuf::from("./data/skills.sqlite"));
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:3000");
        assert_eq!(config.log_level, "info");
        assert!(config.seed_demo);
        assert!(config.static_dir.is_none());

        env::set_var("SKILLS_BIND_ADDR", "not-an-address");
        assert!(Config::from_env().is_err());
        env::remove_var("SKILLS_BIND_ADDR");
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("true"));
        assert!(parse_flag("1"));
        assert!(parse_flag("yes"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag(" OFF "));
        assert!(!parse_flag("0"));
    }
}
