//! # Client Configuration
//!
//! Base URL, timeout and default content type, read once from the environment.
//!
//! | Variable | Default |
//! |---|---|
//! | `ADMIN_API_URL` | `/api/admin` |
//! | `ADMIN_API_ORIGIN` | `http://localhost:3000` |
//! | `ADMIN_API_TIMEOUT_SECS` | `30` |
//!
//! A relative base URL is resolved against the origin.

use std::time::Duration;

use crate::core::AppError;

pub const DEFAULT_BASE_URL: &str = "/api/admin";
pub const DEFAULT_ORIGIN: &str = "http://localhost:3000";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_CONTENT_TYPE: &str = "application/json;charset=utf-8";

/// Static configuration of an [`ApiClient`](super::ApiClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix for every relative request path. May itself be relative.
    pub base_url: String,
    /// Scheme and host a relative `base_url` is resolved against.
    pub origin: String,
    /// Per-request timeout unless a call overrides it.
    pub timeout: Duration,
    /// `Content-Type` sent unless a call overrides it.
    pub content_type: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            origin: DEFAULT_ORIGIN.to_string(),
            timeout: DEFAULT_TIMEOUT,
            content_type: DEFAULT_CONTENT_TYPE.to_string(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables (and `.env`, if present).
    pub fn from_env() -> Result<Self, AppError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "Loaded .env");
        }

        let timeout = match std::env::var("ADMIN_API_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|e| AppError::Config(format!("ADMIN_API_TIMEOUT_SECS={raw}: {e}")))?,
            Err(_) => DEFAULT_TIMEOUT,
        };

        Ok(Self {
            base_url: std::env::var("ADMIN_API_URL")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            origin: std::env::var("ADMIN_API_ORIGIN")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_ORIGIN.to_string()),
            timeout,
            content_type: DEFAULT_CONTENT_TYPE.to_string(),
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Absolute URL for `path`.
    ///
    /// Absolute paths are returned untouched; anything else is appended to the
    /// base URL with exactly one `/` between them.
    pub fn resolve_url(&self, path: &str) -> String {
        if is_absolute(path) {
            return path.to_string();
        }

        let base = if is_absolute(&self.base_url) {
            self.base_url.clone()
        } else {
            join(&self.origin, &self.base_url)
        };

        if path.is_empty() {
            base
        } else {
            join(&base, path)
        }
    }
}

fn is_absolute(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

fn join(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
