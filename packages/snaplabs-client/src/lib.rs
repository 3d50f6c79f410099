//! Pure SnapLabs REST API client.
//!
//! A session-aware client for the SnapLabs project-sharing platform. Covers
//! everything the web front-end talks to the backend about: the community
//! listing, project metadata and engagement counters, the comment tree,
//! thumbnail upload, sharing, remixing, and the signed-in user's inbox.
//!
//! Authentication is injected rather than ambient. Every operation resolves
//! the current bearer token through a [`SessionProvider`] at call time, so a
//! call always reflects the auth state at the moment it is issued and there
//! is no token caching across calls. Operations that require a signed-in
//! user fail fast with [`ApiError::Unauthenticated`] before any network I/O.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use snaplabs_client::{AuthStateHub, SnapLabsClient};
//!
//! let hub = AuthStateHub::new();
//! let client = SnapLabsClient::from_env(Arc::new(hub.clone()))?;
//!
//! // Anonymous browsing needs no session.
//! let featured = client.projects().await?;
//!
//! // Once the identity integration signs in, mutations go through.
//! hub.sign_in(firebase_id_token);
//! client.love_project(featured[0].id, "alice").await?;
//! ```

pub mod error;
pub mod session;
pub mod types;

mod comments;
mod projects;
mod users;

pub use error::{ApiError, ErrorKind, Result};
pub use session::{AuthState, AuthStateHub, SessionProvider, SessionToken, StaticSession};
pub use types::{
    Comment, CreatedProject, Project, ProjectAuthor, ProjectMetaUpdate, ProjectStats,
    UploadResult, UserMessage, Visibility,
};

use std::sync::Arc;
use std::time::Duration;

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use tracing::warn;

/// Default API host. Overridable via `SNAPLABS_API_URL` or
/// [`SnapLabsClient::with_base_url`].
const BASE_URL: &str = "https://sl-api-v1.onrender.com";

/// Environment variable consulted by [`SnapLabsClient::from_env`].
const BASE_URL_ENV: &str = "SNAPLABS_API_URL";

/// Per-request ceiling; a hung backend surfaces as a transport error.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// SnapLabs API client.
///
/// Cheap to clone; clones share the connection pool and session provider.
#[derive(Clone)]
pub struct SnapLabsClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<dyn SessionProvider>,
}

impl SnapLabsClient {
    /// Create a client against the default SnapLabs host.
    pub fn new(session: Arc<dyn SessionProvider>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: BASE_URL.to_string(),
            session,
        })
    }

    /// Create a client, honouring the `SNAPLABS_API_URL` override when set.
    pub fn from_env(session: Arc<dyn SessionProvider>) -> Result<Self> {
        let client = Self::new(session)?;
        match std::env::var(BASE_URL_ENV) {
            Ok(url) if !url.is_empty() => Ok(client.with_base_url(url)),
            _ => Ok(client),
        }
    }

    /// Override the base URL (staging, a local mock).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// The origin every request path is joined to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ========================================================================
    // Request facade
    // ========================================================================
    //
    // Every operation funnels through `execute`: one place attaches the
    // bearer token, one place normalizes non-2xx responses.

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Resolve the current session token without requiring one.
    pub(crate) async fn session_token(&self) -> Option<SessionToken> {
        self.session.current_token().await
    }

    /// Resolve the current session token, rejecting the call when `operation`
    /// requires a signed-in user. Nothing is sent on rejection.
    pub(crate) async fn require_session(&self, operation: &'static str) -> Result<SessionToken> {
        match self.session.current_token().await {
            Some(token) => Ok(token),
            None => {
                warn!(operation, "rejected unauthenticated call");
                Err(ApiError::Unauthenticated { operation })
            }
        }
    }

    /// Send a request, attaching `Authorization: Bearer <token>` when a token
    /// is present, and normalize non-2xx responses into [`ApiError::Http`].
    pub(crate) async fn execute(
        &self,
        request: RequestBuilder,
        token: Option<SessionToken>,
    ) -> Result<reqwest::Response> {
        let request = match &token {
            Some(token) => request.bearer_auth(token.expose()),
            None => request,
        };

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "SnapLabs API returned an error");
            return Err(ApiError::from_status_body(status.as_u16(), &body));
        }

        Ok(response)
    }

    /// Send a request and hand back the 2xx body parsed as JSON, unchanged.
    pub(crate) async fn execute_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        token: Option<SessionToken>,
    ) -> Result<T> {
        let response = self.execute(request, token).await?;
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_base_url_trims_trailing_slash() {
        let client = SnapLabsClient::new(Arc::new(StaticSession::anonymous()))
            .unwrap()
            .with_base_url("http://localhost:9999/");
        assert_eq!(client.base_url(), "http://localhost:9999");
        assert_eq!(client.url("/api/projects"), "http://localhost:9999/api/projects");
    }

    #[test]
    fn default_base_url_is_production() {
        let client = SnapLabsClient::new(Arc::new(StaticSession::anonymous())).unwrap();
        assert_eq!(client.base_url(), "https://sl-api-v1.onrender.com");
    }
}
