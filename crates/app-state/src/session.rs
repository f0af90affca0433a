//! Session lifecycle
//!
//! Login, logout, and restore-on-startup. The in-memory handle and the
//! persisted store are always updated together: a successful login writes
//! both, a failed login touches neither, and logout clears both even when
//! the store write fails.

use thiserror::Error;

use inventory_api::http::ApiError;
use inventory_api::session::{SessionHandle, SessionStore, SessionUser};
use inventory_api::types::LoginRequest;
use inventory_api::InventoryBackend;
use storage::PersistenceError;

use crate::guard::RouteGuard;

/// Errors from session lifecycle operations
#[derive(Debug, Error)]
pub enum SessionError {
    /// The session file could not be read or written
    #[error("session store error: {0}")]
    Store(#[from] PersistenceError),

    /// The backend rejected the request
    #[error("backend error: {0}")]
    Api(#[from] ApiError),

    /// Input was rejected before any request was made
    #[error("{0}")]
    Validation(String),
}

/// The session lifecycle: restore, login, logout
pub struct SessionState {
    handle: SessionHandle,
    store: SessionStore,
}

impl SessionState {
    /// Open the session file at `path` and restore any persisted session
    /// into `handle`
    pub async fn init(
        handle: SessionHandle,
        path: impl AsRef<std::path::Path>,
    ) -> Result<Self, SessionError> {
        let store = SessionStore::open(path).await?;
        store.restore(&handle).await?;
        Ok(Self { handle, store })
    }

    /// Authenticate against the backend
    ///
    /// Empty email or password is rejected locally without a request. On
    /// success the token and user are stored in memory and on disk together;
    /// on failure nothing changes and the backend's message is carried in
    /// the error.
    pub async fn login(
        &self,
        backend: &dyn InventoryBackend,
        email: &str,
        password: &str,
    ) -> Result<SessionUser, SessionError> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(SessionError::Validation(
                "email y contraseña son requeridos".to_string(),
            ));
        }

        let request = LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        };

        let response = backend.login(&request).await?;
        let session = inventory_api::session::SessionData {
            token: response.token,
            user: response.user,
        };

        self.store.save(&session).await?;
        self.handle.set(session.clone());
        tracing::info!(user = %session.user.name, "session started");

        Ok(session.user)
    }

    /// End the session, clearing memory and disk
    ///
    /// The in-memory session is always dropped, even if wiping the file
    /// fails.
    pub async fn logout(&self) -> Result<(), SessionError> {
        self.handle.clear();
        let result = self.store.clear().await;
        tracing::info!("session ended");
        result.map_err(SessionError::from)
    }

    /// The currently authenticated user, if any
    pub fn current_user(&self) -> Option<SessionUser> {
        self.handle.user()
    }

    /// A clone of the underlying session handle
    pub fn handle(&self) -> SessionHandle {
        self.handle.clone()
    }

    /// A route guard over this session
    pub fn guard(&self) -> RouteGuard {
        RouteGuard::new(self.handle.clone())
    }
}
