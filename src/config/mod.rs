//! Configuration module for the trivia backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Default page size of GET /questions.
pub const DEFAULT_QUESTIONS_PER_PAGE: u32 = 10;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to SQLite database file
    pub db_path: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Load the bundled categories and questions into an empty database
    pub seed: bool,
    /// Page size of GET /questions
    pub questions_per_page: u32,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let db_path = env::var("TRIVIA_DB_PATH")
            .unwrap_or_else(|_| "./data/trivia.sqlite".to_string())
            .into();

        let bind_addr = env::var("TRIVIA_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:5000".to_string())
            .parse()
            .map_err(|_| ConfigError::invalid("TRIVIA_BIND_ADDR"))?;

        let log_level = env::var("TRIVIA_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let seed = env::var("TRIVIA_SEED")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        let questions_per_page = match env::var("TRIVIA_QUESTIONS_PER_PAGE") {
            Ok(v) => v
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| ConfigError::invalid("TRIVIA_QUESTIONS_PER_PAGE"))?,
            Err(_) => DEFAULT_QUESTIONS_PER_PAGE,
        };

        Ok(Self {
            db_path,
            bind_addr,
            log_level,
            seed,
            questions_per_page,
        })
    }
}

/// An environment variable holds a value that cannot be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub variable: &'static str,
}

impl ConfigError {
    fn invalid(variable: &'static str) -> Self {
        Self { variable }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid {} format", self.variable)
    }
}

impl std::error::Error for ConfigError {}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
