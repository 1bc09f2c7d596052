//! # Common Error Types
//!
//! Consolidated error handling for the admin console.
//!
//! Every failed API call resolves to one [`ApiError`]. Whatever the failure
//! channel (logical envelope failure, HTTP status, no response at all), its
//! `Display` output is exactly the user-facing message, so callers that only
//! want text can use `err.to_string()` and callers that need the category can
//! match on the variant.
//!
//! ## Error Categories
//!
//! - **Rejected**: the server answered with an envelope whose `code` is not 2xx
//! - **Status**: the server answered with a non-2xx HTTP status (timeouts are folded in as 408)
//! - **Network**: no response arrived
//! - **Encode** / **Decode**: the request could not be built, or a success payload
//!   did not fit the caller's type
//!
//! Application-level failures outside a request (configuration, startup) use [`AppError`].

use thiserror::Error;

/// A failed API call. `Display` yields the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Transport succeeded but the envelope `code` signals failure.
    ///
    /// `code` is `None` when the body had no integer `code` at all.
    #[error("{message}")]
    Rejected { code: Option<i64>, message: String },

    /// The server answered with a non-2xx HTTP status, or the request timed out (408).
    #[error("{message}")]
    Status { status: u16, message: String },

    /// No response at all (connection refused, DNS failure, reset).
    #[error("{message}")]
    Network { message: String },

    /// The request could not be built (bad header value, unserializable body).
    #[error("{message}")]
    Encode { message: String, detail: String },

    /// The success payload could not be deserialized into the requested type.
    #[error("{message}")]
    Decode { message: String, detail: String },
}

impl ApiError {
    /// The user-facing message.
    pub fn message(&self) -> &str {
        match self {
            ApiError::Rejected { message, .. }
            | ApiError::Status { message, .. }
            | ApiError::Network { message }
            | ApiError::Encode { message, .. }
            | ApiError::Decode { message, .. } => message,
        }
    }

    /// HTTP status for transport-level failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Envelope code for logical failures.
    pub fn code(&self) -> Option<i64> {
        match self {
            ApiError::Rejected { code, .. } => *code,
            _ => None,
        }
    }

    /// True for a 401 signalled either by the HTTP status or by the envelope code.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401) || self.code() == Some(401)
    }

    /// True when no response arrived.
    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network { .. })
    }
}

/// Convenience type alias for `Result<T, ApiError>`.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Startup and configuration failures of the console itself.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid or missing configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// An API call failed.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Local I/O failed (reading an upload, creating the log directory).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
