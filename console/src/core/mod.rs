//! # Core Abstractions
//!
//! Core traits and error types for dependency injection and better testability.
//!
//! - **[`error`]**: [`ApiError`] (one user-facing message per failed call), [`AppError`]
//! - **[`service`]**: [`SessionStore`], [`NotificationSink`] and [`HttpTransport`] seams
//!
//! ## Dependency Injection
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use admin_console::core::SessionStore;
//! use admin_console::services::api::{ApiClient, ClientConfig};
//! use admin_console::services::session::MemorySessionStore;
//!
//! let session: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::new());
//! let client = ApiClient::builder(ClientConfig::default())
//!     .session(session)
//!     .build()
//!     .expect("client");
//! ```

pub mod error;
pub mod service;

pub use error::{ApiError, AppError, Result};
pub use service::{HttpTransport, NotificationSink, SessionStore};
