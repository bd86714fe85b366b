// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the notification backend.
//!
//! The [`ApiClient`] is a thin wrapper over `reqwest` holding the base URL
//! and an optional bearer token. It owns no retry, caching, or auth-refresh
//! behavior; callers see every failure as an [`ApiError`].

pub mod notifications;

use crate::config::ServerConfig;
use std::fmt;
use std::time::Duration;

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors that can occur while talking to the backend.
///
/// Transport problems, non-success HTTP statuses, and malformed response
/// bodies all collapse into "the operation failed" — callers do not branch
/// on the variant, it exists for diagnostics only.
#[derive(Debug, Clone)]
pub enum ApiError {
    /// The client itself could not be constructed.
    BuildFailed(String),
    /// The request never completed (DNS, connect, timeout, ...).
    Transport(String),
    /// The server answered with a non-success status code.
    Status(u16),
    /// The response body could not be decoded.
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BuildFailed(msg) => write!(f, "failed to build HTTP client: {msg}"),
            ApiError::Transport(msg) => write!(f, "request failed: {msg}"),
            ApiError::Status(code) => write!(f, "server returned HTTP status {code}"),
            ApiError::Decode(msg) => write!(f, "failed to decode response: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Client for the notification backend API.
///
/// Cheap to clone: the underlying `reqwest::Client` is an `Arc` internally,
/// so update handlers clone the whole thing into async tasks.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Builds a client from the `[server]` section of the config.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(config: &ServerConfig) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(concat!("IcedInbox/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ApiError::BuildFailed(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    /// Returns the configured base URL (no trailing slash).
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins a path onto the base URL.
    #[must_use]
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Starts a request, attaching the bearer token when configured.
    pub(crate) fn request(
        &self,
        method: reqwest::Method,
        path: &str,
    ) -> reqwest::RequestBuilder {
        let builder = self.http.request(method, self.endpoint(path));
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server_config(base_url: &str) -> ServerConfig {
        ServerConfig {
            base_url: base_url.to_string(),
            token: None,
            timeout_secs: 5,
        }
    }

    #[test]
    fn new_strips_trailing_slash_from_base_url() {
        let client = ApiClient::new(&server_config("https://example.org/")).unwrap();
        assert_eq!(client.base_url(), "https://example.org");
    }

    #[test]
    fn endpoint_joins_base_and_path() {
        let client = ApiClient::new(&server_config("https://example.org")).unwrap();
        assert_eq!(
            client.endpoint("/api/notifications"),
            "https://example.org/api/notifications"
        );
        assert_eq!(
            client.endpoint("api/notifications"),
            "https://example.org/api/notifications"
        );
    }

    #[test]
    fn api_error_display() {
        assert_eq!(
            ApiError::Status(500).to_string(),
            "server returned HTTP status 500"
        );
        assert!(ApiError::Transport("timed out".into())
            .to_string()
            .contains("timed out"));
    }
}
