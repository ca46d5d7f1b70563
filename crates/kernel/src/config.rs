//! Configuration loaded from environment variables.

use std::env;

use anyhow::{Context, Result, bail};
use url::Url;

/// Application configuration.
///
/// Constructed once at process start and read-only afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port (default: 3000).
    pub port: u16,

    /// Public application base URL, absolute, with no trailing slash.
    pub app_url: String,

    /// CORS allowed origins (comma-separated, default: "*").
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `APP_URL` is required; a missing, empty, or malformed value is a
    /// fatal startup error.
    pub fn from_env() -> Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .context("PORT must be a valid u16")?;

        let app_url =
            env::var("APP_URL").context("APP_URL environment variable is required")?;
        let app_url = normalize_app_url(&app_url)?;

        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .map(|v| v.split(',').map(|s| s.trim().to_string()).collect())
            .unwrap_or_else(|_| vec!["*".to_string()]);

        Ok(Self {
            port,
            app_url,
            cors_allowed_origins,
        })
    }
}

/// Validate and normalize the public application base URL.
///
/// Accepts absolute http(s) URLs only. Trailing slashes are stripped so
/// derived URLs can append a path directly.
pub fn normalize_app_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        bail!("APP_URL must not be empty");
    }

    let parsed = Url::parse(trimmed).context("APP_URL must be an absolute URL")?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        bail!("APP_URL must be an http or https URL");
    }

    Ok(trimmed.trim_end_matches('/').to_string())
}
