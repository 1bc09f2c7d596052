//! # Session State
//!
//! In-memory session: bearer token plus the signed-in user's profile.

use parking_lot::RwLock;
use shared::UserInfo;

use crate::core::SessionStore;

/// Authenticated user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub profile: UserInfo,
}

/// [`SessionStore`] backed by a `parking_lot::RwLock`.
///
/// Shared across tasks behind an `Arc`. Locks are held only for the duration
/// of a clone or an assignment.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    inner: RwLock<Option<Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current session.
    pub fn current(&self) -> Option<Session> {
        self.inner.read().clone()
    }

    /// Profile of the signed-in user.
    pub fn profile(&self) -> Option<UserInfo> {
        self.inner.read().as_ref().map(|s| s.profile.clone())
    }

    /// Whether the signed-in user holds `permission`. Always false when signed out.
    pub fn has_permission(&self, permission: &str) -> bool {
        self.inner
            .read()
            .as_ref()
            .is_some_and(|s| s.profile.has_permission(permission))
    }
}

impl SessionStore for MemorySessionStore {
    fn token(&self) -> Option<String> {
        self.inner.read().as_ref().map(|s| s.token.clone())
    }

    fn logout(&self) {
        if self.inner.write().take().is_some() {
            tracing::info!("Session cleared");
        }
    }

    fn set_session(&self, token: String, profile: UserInfo) {
        tracing::info!(username = %profile.username, "Session established");
        *self.inner.write() = Some(Session { token, profile });
    }
}
