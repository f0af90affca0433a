//! Session persistence
//!
//! Mirrors the in-memory session to a state file so a restart picks up
//! where the last run left off. The token and the user record are always
//! written together; a snapshot never holds one without the other.

use std::path::Path;

use storage::{PersistedState, PersistenceConfig, PersistenceError};

use super::{SessionData, SessionHandle, SessionUser};

/// Schema version of the session file
const SESSION_FILE_VERSION: u32 = 1;

/// On-disk form of the session
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct SessionSnapshot {
    /// Bearer token, if a session was active
    pub token: Option<String>,
    /// User record, if a session was active
    pub user: Option<SessionUser>,
}

impl SessionSnapshot {
    fn into_session(self) -> Option<SessionData> {
        match (self.token, self.user) {
            (Some(token), Some(user)) => Some(SessionData { token, user }),
            _ => None,
        }
    }
}

/// Durable store for the session
pub struct SessionStore {
    state: PersistedState<SessionSnapshot>,
}

impl SessionStore {
    /// Open (or create) the session file at `path`
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, PersistenceError> {
        let config = PersistenceConfig::new(path.as_ref()).version(SESSION_FILE_VERSION);
        let state = PersistedState::new(config);
        state.init().await?;
        Ok(Self { state })
    }

    /// Push the persisted session (if any) into `handle`
    pub async fn restore(&self, handle: &SessionHandle) -> Result<(), PersistenceError> {
        let snapshot = self.state.get().await?;
        if let Some(session) = snapshot.into_session() {
            tracing::debug!(user = %session.user.name, "restored persisted session");
            handle.set(session);
        }
        Ok(())
    }

    /// Persist a session, token and user together
    pub async fn save(&self, session: &SessionData) -> Result<(), PersistenceError> {
        self.state
            .set(SessionSnapshot {
                token: Some(session.token.clone()),
                user: Some(session.user.clone()),
            })
            .await
    }

    /// Wipe the persisted session
    pub async fn clear(&self) -> Result<(), PersistenceError> {
        self.state.clear().await
    }
}
