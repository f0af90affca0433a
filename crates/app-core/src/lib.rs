//! Screen logic for the inventory console
//!
//! One module per screen. Each screen owns its data, loads it with an
//! all-or-nothing fan-out tied to a [`app_state::ScreenScope`], validates
//! its form input locally before any request goes out, and reloads from the
//! backend after every successful mutation rather than patching local state.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod assets;
pub mod categories;
pub mod dashboard;
pub mod movements;
pub mod reports;
pub mod warehouses;

#[cfg(test)]
mod test_support;

use thiserror::Error;

use app_state::LoadError;
use inventory_api::http::ApiError;

/// Error surfaced to the user by a screen
#[derive(Debug, Error)]
pub enum ScreenError {
    /// A screen load failed or was cancelled
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Form input was rejected before any request was made
    #[error("{0}")]
    Validation(String),

    /// A mutation failed; `message` is what the user sees
    #[error("{message}")]
    Action {
        /// User-facing message
        message: String,
    },
}

impl ScreenError {
    /// Build an action error, preferring the server's own message
    pub fn action(err: ApiError, fallback: &str) -> Self {
        let message = err
            .server_message()
            .map(str::to_string)
            .unwrap_or_else(|| fallback.to_string());
        ScreenError::Action { message }
    }
}

/// Where a screen is in its load cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenStatus {
    /// Initial load (or a reload) is in flight
    #[default]
    Loading,
    /// Data is loaded and current
    Ready,
    /// The last load failed; the screen shows an error instead of data
    Failed,
}
