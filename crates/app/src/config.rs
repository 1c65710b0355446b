//! Application configuration loaded from environment variables.

use std::str::FromStr;

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format: {other}")),
        }
    }
}

/// Shop configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `DATABASE_URL` — SQLite URL (default: `"sqlite::memory:"`)
/// - `DATABASE_MAX_CONNECTIONS` — pool size (default: `5`)
/// - `RUST_LOG` — tracing filter directive (default: `"info"`)
/// - `LOG_FORMAT` — `pretty` or `json` (default: `pretty`)
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`, falling back to defaults for
    /// missing or unparsable values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            max_connections: lookup("DATABASE_MAX_CONNECTIONS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_connections),
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
            log_format: lookup("LOG_FORMAT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.log_format),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: persistence::database::IN_MEMORY_URL.to_string(),
            max_connections: 5,
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}
