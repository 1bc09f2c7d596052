//! # Logging Infrastructure
//!
//! Structured logging for the admin console via `tracing`.
//!
//! Every API call runs inside an `api_request` span carrying a request id,
//! the method and the path; its events record the resolved URL, status,
//! envelope code and duration.
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (default `admin_console=info,warn`)
//! - `ADMIN_LOG_DIR`: Directory for daily-rotated log files (default `logs`)
//! - `ADMIN_LOG_JSON`: Write JSON lines (1=on, 0=off)
//! - `ADMIN_LOG_STDERR`: Mirror to stderr (1=on, 0=off, default on)

pub mod config;
pub mod logger;

pub use config::LogConfig;
pub use logger::init as init_logger;
