//! Durable state files
//!
//! This module persists a single serializable value to a JSON file with a
//! version number and a checksum, writing atomically so a crash mid-write
//! never leaves a half-written state file behind.

use serde::{de::DeserializeOwned, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::RwLock;

/// Errors that can occur while loading or saving a state file
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The state was accessed before `init` ran
    #[error("State not initialized")]
    NotInitialized,

    /// The on-disk checksum does not match the payload
    #[error("Corrupt state file: {0}")]
    Corruption(String),

    /// The on-disk schema version is not the expected one
    #[error("Version mismatch: expected {expected}, found {found}")]
    VersionMismatch {
        /// Version this build expects
        expected: u32,
        /// Version found on disk
        found: u32,
    },
}

/// Result type for persistence operations
pub type Result<T> = std::result::Result<T, PersistenceError>;

/// On-disk envelope around the persisted value
#[derive(Debug, Serialize, serde::Deserialize)]
struct Envelope<T> {
    version: u32,
    checksum: String,
    data: T,
}

impl<T: Serialize> Envelope<T> {
    fn seal(version: u32, data: T) -> Result<Self> {
        let payload = serde_json::to_string(&data)?;
        let checksum = format!("{:x}", md5::compute(&payload));
        Ok(Self { version, checksum, data })
    }

    fn verify(&self) -> Result<()> {
        let payload = serde_json::to_string(&self.data)?;
        let computed = format!("{:x}", md5::compute(&payload));
        if computed != self.checksum {
            return Err(PersistenceError::Corruption(format!(
                "checksum mismatch: expected {}, got {}",
                self.checksum, computed
            )));
        }
        Ok(())
    }
}

/// Configuration for a state file
#[derive(Debug, Clone)]
pub struct PersistenceConfig {
    /// Path to the state file
    pub path: PathBuf,
    /// Schema version written into the envelope
    pub version: u32,
    /// Write through a temp file + rename
    pub atomic_writes: bool,
}

impl PersistenceConfig {
    /// Create a configuration for the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), version: 1, atomic_writes: true }
    }

    /// Set the schema version
    pub fn version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    /// Enable or disable atomic writes
    pub fn atomic_writes(mut self, enabled: bool) -> Self {
        self.atomic_writes = enabled;
        self
    }
}

/// A value mirrored between memory and a JSON state file
///
/// Reads are served from the in-memory copy; every mutation is written back
/// to disk before the call returns.
///
/// # Example
///
/// ```rust,no_run
/// use storage::{PersistedState, PersistenceConfig};
///
/// #[derive(Clone, Default, serde::Serialize, serde::Deserialize)]
/// struct Settings {
///     theme: String,
/// }
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let state: PersistedState<Settings> =
///     PersistedState::new(PersistenceConfig::new("settings.json"));
/// state.init().await?;
/// state.update(|s| s.theme = "dark".to_string()).await?;
/// # Ok(())
/// # }
/// ```
pub struct PersistedState<T> {
    config: PersistenceConfig,
    state: Arc<RwLock<Option<T>>>,
}

impl<T> PersistedState<T>
where
    T: Serialize + DeserializeOwned + Clone + Default,
{
    /// Create a new state-file handle (call `init` before use)
    pub fn new(config: PersistenceConfig) -> Self {
        Self { config, state: Arc::new(RwLock::new(None)) }
    }

    /// Load the value from disk, falling back to `T::default()` when the
    /// file does not exist yet
    pub async fn init(&self) -> Result<()> {
        let loaded = match self.read_file().await {
            Ok(data) => data,
            Err(PersistenceError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.config.path.display(), "no state file, starting empty");
                T::default()
            }
            Err(e) => return Err(e),
        };

        let mut state = self.state.write().await;
        *state = Some(loaded);
        Ok(())
    }

    /// Get a clone of the current value
    pub async fn get(&self) -> Result<T> {
        let state = self.state.read().await;
        state.clone().ok_or(PersistenceError::NotInitialized)
    }

    /// Replace the value and persist it
    pub async fn set(&self, value: T) -> Result<()> {
        let mut state = self.state.write().await;
        self.write_file(&value).await?;
        *state = Some(value);
        Ok(())
    }

    /// Mutate the value in place and persist the result
    pub async fn update<F>(&self, f: F) -> Result<()>
    where
        F: FnOnce(&mut T),
    {
        let mut state = self.state.write().await;
        let current = state.as_mut().ok_or(PersistenceError::NotInitialized)?;
        f(current);
        self.write_file(current).await
    }

    /// Reset to the default value and remove the file
    pub async fn clear(&self) -> Result<()> {
        let mut state = self.state.write().await;
        *state = Some(T::default());

        match fs::remove_file(&self.config.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    async fn read_file(&self) -> Result<T> {
        let contents = fs::read_to_string(&self.config.path).await?;
        let envelope: Envelope<T> = serde_json::from_str(&contents)?;

        envelope.verify()?;

        if envelope.version != self.config.version {
            return Err(PersistenceError::VersionMismatch {
                expected: self.config.version,
                found: envelope.version,
            });
        }

        Ok(envelope.data)
    }

    async fn write_file(&self, value: &T) -> Result<()> {
        let envelope = Envelope::seal(self.config.version, value.clone())?;
        let json = serde_json::to_string_pretty(&envelope)?;

        if self.config.atomic_writes {
            let temp = self.config.path.with_extension("tmp");
            let mut file = fs::File::create(&temp).await?;
            file.write_all(json.as_bytes()).await?;
            file.sync_all().await?;
            drop(file);
            fs::rename(&temp, &self.config.path).await?;
        } else {
            fs::write(&self.config.path, json).await?;
        }

        Ok(())
    }
}
