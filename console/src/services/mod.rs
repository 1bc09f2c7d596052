//! # Services Module
//!
//! Clients and state the admin console uses to talk to the back-office API.
//!
//! ```text
//! services/
//! ├── api/         - Back-office HTTP client and its interceptor pipeline
//! ├── session.rs   - In-memory session (token + profile)
//! └── notifier.rs  - Process-wide notification slot and sinks
//! ```
//!
//! ## Service Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                   admin console                           │
//! │                                                           │
//! │  endpoint fns ──▶ ApiClient ──▶ Pipeline ──▶ Transport ───┼──▶ /api/admin/*
//! │                      │             │                      │
//! │                      │             ├─ SessionStore (token, logout)
//! │                      │             └─ NotificationSink (error text)
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Error Handling
//!
//! Every call returns `Result<T, ApiError>`. By the time an error reaches the
//! caller it has already been shown to the user and, for a 401, the session
//! has already been cleared. Callers decide only whether to retry or ignore.
//!
//! ## Thread Safety
//!
//! - **ApiClient**: `Send + Sync`, share it behind an `Arc`
//! - **MemorySessionStore**: `parking_lot::RwLock` inside, share it behind an `Arc`
//! - **Notifier**: set once, read lock-free afterwards

pub mod api;
pub mod notifier;
pub mod session;
