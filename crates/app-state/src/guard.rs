//! Route guard
//!
//! Protected screens ask the guard before rendering. The decision is a pure
//! function of whether a token is present; token validity is only learned
//! from the backend rejecting a later request.

use inventory_api::session::SessionHandle;

/// Coarse authentication state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    /// A session token is present
    Authenticated,
    /// No session token
    Unauthenticated,
}

/// What the caller should do with a navigation attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Render the requested screen
    Render,
    /// Send the user to the login screen instead
    RedirectToLogin,
}

/// Guards protected routes behind the presence of a session
#[derive(Debug, Clone)]
pub struct RouteGuard {
    session: SessionHandle,
}

impl RouteGuard {
    /// Create a guard over the given session
    pub fn new(session: SessionHandle) -> Self {
        Self { session }
    }

    /// Current authentication state
    pub fn state(&self) -> GuardState {
        if self.session.is_authenticated() {
            GuardState::Authenticated
        } else {
            GuardState::Unauthenticated
        }
    }

    /// Decide whether a protected screen may render
    pub fn check_protected(&self) -> RouteDecision {
        match self.state() {
            GuardState::Authenticated => RouteDecision::Render,
            GuardState::Unauthenticated => {
                tracing::debug!("unauthenticated access to protected route");
                RouteDecision::RedirectToLogin
            }
        }
    }
}
