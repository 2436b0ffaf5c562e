use serde::Deserialize;
use std::env;
use std::time::Duration;

use crate::domain::window::{self, WindowSettings};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub log_format: LogFormat,
    /// Without a secret every request is served anonymously
    pub jwt_secret: Option<String>,
    /// Seed JSON; the built-in catalog is used when unset
    pub resources_file: Option<String>,
    // Windowing
    pub batch_size: usize,
    pub load_more_throttle_ms: u64,
    pub search_debounce_ms: u64,
    // Sessions
    pub session_idle_secs: u64,
    pub session_max_capacity: u64,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
            environment: match env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string())
                .as_str()
            {
                "production" => Environment::Production,
                _ => Environment::Development,
            },
            log_format: match env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .as_str()
            {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            jwt_secret: optional_var("JWT_SECRET"),
            resources_file: optional_var("RESOURCES_FILE"),
            batch_size: env::var("BATCH_SIZE")
                .unwrap_or_else(|_| window::BATCH_SIZE.to_string())
                .parse()?,
            load_more_throttle_ms: env::var("LOAD_MORE_THROTTLE_MS")
                .unwrap_or_else(|_| window::LOAD_MORE_THROTTLE_MS.to_string())
                .parse()?,
            search_debounce_ms: env::var("SEARCH_DEBOUNCE_MS")
                .unwrap_or_else(|_| window::SEARCH_DEBOUNCE_MS.to_string())
                .parse()?,
            session_idle_secs: env::var("SESSION_IDLE_SECS")
                .unwrap_or_else(|_| "1800".to_string())
                .parse()?,
            session_max_capacity: env::var("SESSION_MAX_CAPACITY")
                .unwrap_or_else(|_| "10000".to_string())
                .parse()?,
        };

        if config.batch_size == 0 {
            return Err("BATCH_SIZE must be at least 1".into());
        }

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }

    pub fn window_settings(&self) -> WindowSettings {
        WindowSettings {
            batch_size: self.batch_size,
            load_more_throttle: Duration::from_millis(self.load_more_throttle_ms),
            search_debounce: Duration::from_millis(self.search_debounce_ms),
        }
    }

    pub fn session_idle(&self) -> Duration {
        Duration::from_secs(self.session_idle_secs)
    }
}

// Unset and blank are the same thing
fn optional_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}
