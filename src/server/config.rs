use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";

pub struct Config {
    pub database_url: String,
    /// Base URL of the panel, without a trailing slash.
    pub app_url: String,
    pub bind_address: SocketAddr,

    pub application_webhook_url: Option<String>,
    pub appeal_webhook_url: Option<String>,
    pub report_webhook_url: Option<String>,

    pub plugin_sync_url: Option<String>,
    pub plugin_secret_key: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let bind_address = optional_var("BIND_ADDRESS")
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: "BIND_ADDRESS".to_string(),
                reason: e.to_string(),
            })?;

        let plugin_sync_url = optional_var("PLUGIN_SYNC_URL");
        let plugin_secret_key = optional_var("PLUGIN_SECRET_KEY").unwrap_or_default();
        if plugin_sync_url.is_some() && plugin_secret_key.is_empty() {
            return Err(ConfigError::MissingEnvVar("PLUGIN_SECRET_KEY".to_string()).into());
        }

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            app_url: std::env::var("APP_URL")
                .map_err(|_| ConfigError::MissingEnvVar("APP_URL".to_string()))?
                .trim_end_matches('/')
                .to_string(),
            bind_address,
            application_webhook_url: optional_var("DISCORD_APPLICATION_WEBHOOK_URL"),
            appeal_webhook_url: optional_var("DISCORD_APPEAL_WEBHOOK_URL"),
            report_webhook_url: optional_var("DISCORD_REPORT_WEBHOOK_URL"),
            plugin_sync_url,
            plugin_secret_key,
        })
    }
}

/// Reads an environment variable, treating blank values as unset.
fn optional_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
