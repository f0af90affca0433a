//! Storage layer for the inventory console
//!
//! This crate provides durable state files for the small amount of
//! process-wide state the client keeps between runs (the session token
//! and the user display record).

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod persistence;

pub use persistence::{PersistedState, PersistenceConfig, PersistenceError};
