//! Session state
//!
//! Authentication state lives in a [`SessionHandle`], a cheap clonable handle
//! over shared state. The HTTP adapter holds one clone and reads the token
//! per request; the application holds another and mutates it on login and
//! logout. [`SessionStore`] mirrors the same state to disk so a restart
//! resumes the session.

use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};

mod store;

pub use store::{SessionSnapshot, SessionStore};

/// The authenticated user's display record
///
/// Only the display name is read by the client; everything else the backend
/// sends is carried opaquely so persisting and restoring a session does not
/// drop fields this build does not know about.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUser {
    /// Display name shown in the header
    #[serde(rename = "nombre")]
    pub name: String,
    /// Remaining fields, kept as-is
    #[serde(flatten)]
    pub extra: serde_json::Value,
}

/// An authenticated session: the bearer token and the user it belongs to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionData {
    /// Opaque bearer token
    pub token: String,
    /// User display record
    pub user: SessionUser,
}

/// Shared handle over the current session
///
/// Clones share the same underlying state, so a login through one handle is
/// visible to every other clone immediately.
///
/// # Example
///
/// ```rust
/// use inventory_api::session::{SessionData, SessionHandle, SessionUser};
///
/// let handle = SessionHandle::default();
/// assert!(!handle.is_authenticated());
///
/// handle.set(SessionData {
///     token: "abc123".to_string(),
///     user: SessionUser { name: "Ana".to_string(), extra: serde_json::Value::Null },
/// });
/// assert_eq!(handle.token().as_deref(), Some("abc123"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SessionHandle {
    inner: Arc<RwLock<Option<SessionData>>>,
}

impl SessionHandle {
    /// Create an unauthenticated handle
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current session
    pub fn set(&self, session: SessionData) {
        let mut guard = self.inner.write().unwrap();
        *guard = Some(session);
    }

    /// Drop the current session
    pub fn clear(&self) {
        let mut guard = self.inner.write().unwrap();
        *guard = None;
    }

    /// A clone of the current session, if any
    pub fn current(&self) -> Option<SessionData> {
        self.inner.read().unwrap().clone()
    }

    /// The current bearer token, if any
    pub fn token(&self) -> Option<String> {
        self.inner.read().unwrap().as_ref().map(|s| s.token.clone())
    }

    /// The current user, if any
    pub fn user(&self) -> Option<SessionUser> {
        self.inner.read().unwrap().as_ref().map(|s| s.user.clone())
    }

    /// Whether a session is present
    pub fn is_authenticated(&self) -> bool {
        self.inner.read().unwrap().is_some()
    }
}
