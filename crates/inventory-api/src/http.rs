//! HTTP client adapter
//!
//! This module wraps outbound requests to the inventory backend. Every call
//! is made against a configured base URL and carries an `Authorization:
//! Bearer` header whenever the injected session holds a token. The token is
//! read at call time, so a login or logout takes effect on the next request
//! without rebuilding the client.

use reqwest::{Client as ReqwestClient, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::session::SessionHandle;

/// Environment variable that overrides the default base URL
pub const BASE_URL_ENV: &str = "INVENTORY_API_URL";

/// Base URL used when neither explicit config nor the environment supply one
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";

// =============================================================================
// Error Types
// =============================================================================

/// Error returned by the HTTP adapter
///
/// Distinguishes transport failures from server-reported failures so screens
/// can surface the server's own message when one exists.
///
/// # Examples
/// ```
/// use inventory_api::http::ApiError;
///
/// let err = ApiError::Server { status: 400, message: Some("nombre requerido".to_string()) };
/// assert_eq!(err.status(), Some(400));
/// assert_eq!(err.server_message(), Some("nombre requerido"));
/// assert!(!err.is_auth_error());
/// ```
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status
    #[error("server error ({status}): {}", message.as_deref().unwrap_or("no detail"))]
    Server {
        /// HTTP status code
        status: u16,
        /// Error message supplied by the server, if it sent one
        message: Option<String>,
    },

    /// The response body could not be decoded
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status code, when the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The server-supplied error message, verbatim
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Server { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Whether this failure means the session is missing or rejected
    pub fn is_auth_error(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }
}

/// Error body shape the backend uses (`{ "error": "..." }`)
#[derive(Debug, Deserialize)]
struct ServerErrorBody {
    error: Option<String>,
    message: Option<String>,
}

// =============================================================================
// Client Configuration
// =============================================================================

/// Configuration for the HTTP adapter
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Base URL all relative paths are appended to
    pub base_url: String,
    /// Request timeout; `None` leaves timeouts to the transport
    pub timeout: Option<Duration>,
    /// User agent string
    pub user_agent: String,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self {
            base_url: resolve_base_url(None),
            timeout: None,
            user_agent: format!("inventory-console/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ApiClientConfig {
    /// Create a config with an explicit base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), ..Default::default() }
    }

    /// Set a request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Resolve the base URL with explicit > environment > default precedence
///
/// # Examples
/// ```
/// use inventory_api::http::resolve_base_url;
///
/// let url = resolve_base_url(Some("https://inventario.example.com/api"));
/// assert_eq!(url, "https://inventario.example.com/api");
/// ```
pub fn resolve_base_url(explicit: Option<&str>) -> String {
    if let Some(url) = explicit {
        return url.to_string();
    }
    if let Ok(url) = std::env::var(BASE_URL_ENV) {
        if !url.trim().is_empty() {
            return url;
        }
    }
    DEFAULT_BASE_URL.to_string()
}

// =============================================================================
// Client
// =============================================================================

/// HTTP adapter over the inventory backend
///
/// Holds a reqwest client, the resolved configuration, and the session
/// handle that supplies the bearer token.
///
/// # Examples
/// ```
/// use inventory_api::http::{ApiClient, ApiClientConfig};
/// use inventory_api::session::SessionHandle;
///
/// let session = SessionHandle::default();
/// let client = ApiClient::new(ApiClientConfig::new("http://localhost:3000/api"), session);
/// assert_eq!(client.base_url(), "http://localhost:3000/api");
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: ReqwestClient,
    config: ApiClientConfig,
    session: SessionHandle,
}

impl ApiClient {
    /// Create a new adapter with the given configuration and session
    pub fn new(config: ApiClientConfig, session: SessionHandle) -> Self {
        let mut builder = ReqwestClient::builder().user_agent(&config.user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().expect("failed to build HTTP client");

        Self { http, config, session }
    }

    /// The configured base URL
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// The session handle this adapter reads tokens from
    pub fn session(&self) -> &SessionHandle {
        &self.session
    }

    /// GET a JSON resource
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(self.request(reqwest::Method::GET, path)).await?;
        Self::decode_json(response).await
    }

    /// POST a JSON body and decode the JSON response
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self.request(reqwest::Method::POST, path).json(body);
        let response = self.send(request).await?;
        Self::decode_json(response).await
    }

    /// POST a JSON body, ignoring the response beyond success/failure
    pub async fn post_unit<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let request = self.request(reqwest::Method::POST, path).json(body);
        self.send(request).await?;
        Ok(())
    }

    /// DELETE a resource, ignoring the response beyond success/failure
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(self.request(reqwest::Method::DELETE, path)).await?;
        Ok(())
    }

    /// GET a binary resource as raw bytes
    pub async fn get_bytes(&self, path: &str) -> Result<Vec<u8>, ApiError> {
        let response = self.send(self.request(reqwest::Method::GET, path)).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::Network(format!("failed to read body: {e}")))?;
        Ok(bytes.to_vec())
    }

    /// Build a request for `path`, attaching the bearer token if present
    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.config.base_url, path);
        let mut request = self.http.request(method, &url);

        // Token is read per call so login/logout apply immediately
        if let Some(token) = self.session.token() {
            request = request.bearer_auth(token);
        }

        request
    }

    /// Execute a request, mapping transport failures and non-2xx responses
    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Response, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), "backend response");

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ServerErrorBody>(&body)
            .ok()
            .and_then(|b| b.error.or(b.message));

        Err(ApiError::Server { status: status.as_u16(), message })
    }

    async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(format!("failed to read body: {e}")))?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

// =============================================================================
// Tests
// =============================================================================
