//! # Admin Console - Library Root
//!
//! Client side of the back-office: a single chokepoint for every call to the
//! admin REST API, plus thin typed endpoint functions on top of it.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              admin-console (this crate)                │
//! ├────────────────────────────────────────────────────────┤
//! │  Tokio         - Async runtime                         │
//! │  Reqwest       - HTTP transport                        │
//! │  tracing       - Structured logs                       │
//! └────────────────────────────────────────────────────────┘
//!          │ HTTP/JSON  {code, data, message}
//!          ▼
//! ┌─────────────────┐
//! │  Admin API      │
//! │  /api/admin/*   │
//! └─────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **core**: [`ApiError`]/[`AppError`] and the injection seams
//!   ([`SessionStore`](core::SessionStore), [`NotificationSink`](core::NotificationSink),
//!   [`HttpTransport`](core::HttpTransport))
//! - **services**: the API client, its interceptor pipeline, the session store
//!   and the notifier
//! - **debug**: logging setup
//!
//! ## Request Lifecycle
//!
//! 1. The endpoint function builds an [`ApiRequest`](services::api::ApiRequest)
//! 2. Client defaults fill in content type and timeout
//! 3. Request stages run (bearer token)
//! 4. The transport sends it
//! 5. Response stages run: envelope unwrap, status classification,
//!    session invalidation on 401, notification on failure
//! 6. The payload is decoded into the caller's type
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use admin_console::services::api::{banner, ApiClient, ClientConfig};
//! use admin_console::services::session::MemorySessionStore;
//!
//! # async fn run() -> Result<(), admin_console::AppError> {
//! let session = Arc::new(MemorySessionStore::new());
//! let client = ApiClient::new(ClientConfig::from_env()?, session)?;
//! let banners = banner::list_banners(&client).await?;
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod debug;
pub mod services;

// Re-export commonly used types for convenience
pub use core::{ApiError, AppError, Result};
pub use services::api::{ApiClient, ApiRequest, ClientConfig};
