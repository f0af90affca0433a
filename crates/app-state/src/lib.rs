//! Application state for the inventory console
//!
//! This crate owns the pieces of state that outlive any single screen: the
//! authenticated session (with its persistence and lifecycle), the route
//! guard that keeps protected screens behind a login, and the screen scope
//! that cancels in-flight loads when a screen goes away.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod guard;
pub mod screen;
pub mod session;

pub use guard::{GuardState, RouteDecision, RouteGuard};
pub use screen::{LoadError, ScreenScope};
pub use session::{SessionError, SessionState};
