//! # Service Traits
//!
//! Seams for dependency injection: the API client talks to its session store,
//! its notification sink and its HTTP transport only through these traits, so
//! tests can swap in fakes.

use async_trait::async_trait;
use shared::UserInfo;

use crate::services::api::request::ApiRequest;
use crate::services::api::transport::{RawResponse, TransportError};
use crate::services::notifier::Notification;

/// Process-wide authenticated session.
///
/// The API client only ever calls [`token`](SessionStore::token) and
/// [`logout`](SessionStore::logout); `set_session` belongs to the login flow.
pub trait SessionStore: Send + Sync {
    /// Current bearer token, if signed in.
    fn token(&self) -> Option<String>;

    /// Clear token and profile. Clearing an already-cleared session is a no-op.
    fn logout(&self);

    /// Store a fresh token and profile after a successful login.
    fn set_session(&self, token: String, profile: UserInfo);

    /// Whether a token is present.
    fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }
}

/// Receiver of user-facing messages (toasts in a GUI, log lines in the CLI).
pub trait NotificationSink: Send + Sync {
    /// Surface one notification.
    fn show(&self, notification: Notification);

    /// Surface an error message.
    fn error(&self, message: &str) {
        self.show(Notification::error(message));
    }
}

/// Sends one prepared request and returns whatever the server answered.
///
/// Any HTTP status counts as an answer. `Err` means no response arrived.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, url: String, request: ApiRequest) -> Result<RawResponse, TransportError>;
}
