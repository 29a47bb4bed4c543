use std::time::Duration;

use anyhow::{Context, Result};

/// Credentials for the Custom Search API. Both halves are needed for a call.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchCredentials {
    pub api_key: String,
    pub engine_id: String,
}

/// Application configuration loaded from environment variables once at startup.
/// Fails only when `SHARED_PASSWORD` is missing; the upstream API credentials are
/// checked by the endpoints that need them.
#[derive(Debug, Clone)]
pub struct Config {
    pub shared_password: String,
    pub openai_api_key: Option<String>,
    pub google_api_key: Option<String>,
    pub search_engine_id: Option<String>,
    pub app_env: String,
    pub upstream_timeout: Duration,
    pub static_dir: String,
    pub port: u16,
    /// Fallback filter level, used only when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let upstream_timeout_secs = optional_env("UPSTREAM_TIMEOUT_SECS")
            .unwrap_or_else(|| "30".to_string())
            .parse::<u64>()
            .context("UPSTREAM_TIMEOUT_SECS must be a whole number of seconds")?;

        Ok(Config {
            shared_password: require_env("SHARED_PASSWORD")?,
            openai_api_key: optional_env("OPENAI_API_KEY"),
            google_api_key: optional_env("GOOGLE_API_KEY"),
            search_engine_id: optional_env("SEARCH_ENGINE_ID"),
            app_env: optional_env("APP_ENV").unwrap_or_else(|| "development".to_string()),
            upstream_timeout: Duration::from_secs(upstream_timeout_secs),
            static_dir: optional_env("STATIC_DIR").unwrap_or_else(|| "static".to_string()),
            port: optional_env("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            log_level: optional_env("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        })
    }

    /// `EnvFilter` directive used when `RUST_LOG` is unset: this crate at `LOG_LEVEL`.
    pub fn fallback_log_directive(&self) -> String {
        format!(
            "{}={}",
            env!("CARGO_PKG_NAME").replace('-', "_"),
            self.log_level
        )
    }

    /// Whether cookies should carry the `Secure` attribute.
    pub fn is_production(&self) -> bool {
        self.app_env.eq_ignore_ascii_case("production")
    }

    /// Returns the search credentials only when both the key and the engine id are set.
    pub fn search_credentials(&self) -> Option<SearchCredentials> {
        match (&self.google_api_key, &self.search_engine_id) {
            (Some(api_key), Some(engine_id)) => Some(SearchCredentials {
                api_key: api_key.clone(),
                engine_id: engine_id.clone(),
            }),
            _ => None,
        }
    }
}

fn require_env(key: &str) -> Result<String> {
    optional_env(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Reads a variable, treating an empty value the same as an unset one.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
pub(crate) fn test_config() -> Config {
    Config {
        shared_password: "hunter2".to_string(),
        openai_api_key: Some("sk-test".to_string()),
        google_api_key: Some("google-test".to_string()),
        search_engine_id: Some("cx-test".to_string()),
        app_env: "development".to_string(),
        upstream_timeout: Duration::from_secs(5),
        static_dir: "static".to_string(),
        port: 8080,
        log_level: "debug".to_string(),
    }
}
