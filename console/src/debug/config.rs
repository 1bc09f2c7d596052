//! Logging configuration from environment variables

use std::path::PathBuf;

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Log level filter (e.g., "admin_console=debug,info")
    pub log_level: String,
    /// Directory for rotated log files
    pub log_dir: PathBuf,
    /// Write log files as JSON lines instead of plain text
    pub json: bool,
    /// Mirror logs to stderr
    pub stderr: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_level: "admin_console=info,warn".to_string(),
            log_dir: PathBuf::from("logs"),
            json: false,
            stderr: true,
        }
    }
}

impl LogConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            log_level: std::env::var("RUST_LOG").unwrap_or(defaults.log_level),
            log_dir: std::env::var("ADMIN_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
            json: std::env::var("ADMIN_LOG_JSON")
                .map(|v| v == "1")
                .unwrap_or(defaults.json),
            stderr: std::env::var("ADMIN_LOG_STDERR")
                .map(|v| v != "0")
                .unwrap_or(defaults.stderr),
        }
    }

    /// Check if debug logging is enabled
    pub fn is_debug_enabled(&self) -> bool {
        self.log_level.contains("debug") || self.log_level.contains("trace")
    }
}
