//! Inventory REST client library
//!
//! This crate provides the typed client for the inventory backend: the HTTP
//! adapter that attaches the bearer token, the wire DTOs the backend serves,
//! and the session types persisted between runs.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod http;
pub mod session;
pub mod types;

pub use client::{InventoryBackend, InventoryClient};
pub use http::{ApiClient, ApiClientConfig, ApiError};
pub use session::{SessionData, SessionHandle, SessionStore, SessionUser};
