//! Screen load scope
//!
//! A screen load fans out several requests and either all of them land or
//! the screen shows one error. [`ScreenScope`] ties those requests to the
//! screen's lifetime: dropping the scope (the screen went away) cancels
//! whatever is still in flight, and a cancelled load never touches screen
//! state.

use std::future::Future;

use thiserror::Error;
use tokio_util::sync::CancellationToken;

use inventory_api::http::ApiError;

/// Error from a scoped screen load
#[derive(Debug, Error)]
pub enum LoadError {
    /// The screen went away before the load finished
    #[error("load cancelled")]
    Cancelled,

    /// One of the named sub-requests failed
    #[error("failed to load {resource}: {source}")]
    Resource {
        /// Which resource failed, for the error message
        resource: &'static str,
        /// The underlying failure
        source: ApiError,
    },
}

impl LoadError {
    /// The server-supplied message of the underlying failure, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            LoadError::Resource { source, .. } => source.server_message(),
            LoadError::Cancelled => None,
        }
    }
}

/// Tag a sub-request with the resource name it loads
pub async fn named<T>(
    resource: &'static str,
    fut: impl Future<Output = Result<T, ApiError>>,
) -> Result<T, LoadError> {
    fut.await.map_err(|source| LoadError::Resource { resource, source })
}

/// Cancellation scope for one mounted screen
///
/// Dropping the scope cancels any load still running under it.
#[derive(Debug)]
pub struct ScreenScope {
    token: CancellationToken,
}

impl Default for ScreenScope {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenScope {
    /// Create a fresh scope
    pub fn new() -> Self {
        Self { token: CancellationToken::new() }
    }

    /// Whether this scope has been cancelled
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Cancel the scope explicitly
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Run a load under this scope
    ///
    /// Returns [`LoadError::Cancelled`] if the scope is cancelled before
    /// the load completes.
    pub async fn run<T>(
        &self,
        fut: impl Future<Output = Result<T, LoadError>>,
    ) -> Result<T, LoadError> {
        tokio::select! {
            _ = self.token.cancelled() => Err(LoadError::Cancelled),
            result = fut => result,
        }
    }
}

impl Drop for ScreenScope {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_run_passes_through_success() {
        let scope = ScreenScope::new();
        let result = scope.run(async { Ok::<_, LoadError>(42) }).await;
        assert_eq!(result.unwrap(), 42);
    }

    #[tokio::test]
    async fn test_named_tags_failures() {
        let result = named("activos", async {
            Err::<Vec<u8>, _>(ApiError::Server { status: 500, message: None })
        })
        .await;

        match result.unwrap_err() {
            LoadError::Resource { resource, source } => {
                assert_eq!(resource, "activos");
                assert_eq!(source.status(), Some(500));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_cancel_interrupts_pending_load() {
        let scope = ScreenScope::new();
        scope.cancel();

        let result = scope
            .run(async {
                tokio::time::sleep(Duration::from_secs(60)).await;
                Ok::<_, LoadError>(())
            })
            .await;

        assert!(matches!(result, Err(LoadError::Cancelled)));
    }

    #[tokio::test]
    async fn test_cancel_during_flight() {
        let scope = ScreenScope::new();

        let load = scope.run(async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok::<_, LoadError>(())
        });

        let canceller = async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            scope.cancel();
        };

        let (result, ()) = tokio::join!(load, canceller);
        assert!(matches!(result, Err(LoadError::Cancelled)));
    }

    #[test]
    fn test_cancelled_load_message() {
        assert!(LoadError::Cancelled.server_message().is_none());
    }
}
