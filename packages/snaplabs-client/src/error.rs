//! Error types for the SnapLabs client.

use serde::Deserialize;
use thiserror::Error;

/// Result type for SnapLabs client operations.
pub type Result<T> = std::result::Result<T, ApiError>;

/// SnapLabs client errors.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Configuration error (bad base URL, HTTP client construction failed)
    #[error("Configuration error: {0}")]
    Config(String),

    /// The operation requires a signed-in user and no session token was
    /// available. Raised before any network I/O happens.
    #[error("{operation} requires a signed-in user")]
    Unauthenticated { operation: &'static str },

    /// Non-2xx response. The message is the server's own `message` (or
    /// `error`) field when the body carries one, otherwise `HTTP <status>`.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// Request never produced a usable response: connection failure, timeout,
    /// or a 2xx body that could not be read or decoded.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Coarse failure classification, independent of the display message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Config,
    Unauthenticated,
    Http,
    Transport,
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Config(_) => ErrorKind::Config,
            ApiError::Unauthenticated { .. } => ErrorKind::Unauthenticated,
            ApiError::Http { .. } => ErrorKind::Http,
            ApiError::Transport(_) => ErrorKind::Transport,
        }
    }

    /// HTTP status code, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, ApiError::Unauthenticated { .. })
    }

    /// Build an [`ApiError::Http`] from a non-2xx response body.
    ///
    /// The backend usually answers `{"message": "..."}` but some routes use
    /// `{"error": "..."}` and a few return HTML or nothing; anything without
    /// a usable field falls back to `HTTP <status>`.
    pub(crate) fn from_status_body(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(ErrorBody::into_message)
            .unwrap_or_else(|| format!("HTTP {status}"));
        ApiError::Http { status, message }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

impl ErrorBody {
    fn into_message(self) -> Option<String> {
        match self.message {
            Some(m) if !m.is_empty() => Some(m),
            _ => self.error.filter(|e| !e.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_uses_server_message() {
        let err = ApiError::from_status_body(403, r#"{"message":"Not the author"}"#);
        assert_eq!(err.to_string(), "Not the author");
        assert_eq!(err.status(), Some(403));
    }

    #[test]
    fn http_error_accepts_error_field() {
        let err = ApiError::from_status_body(409, r#"{"error":"already loved"}"#);
        assert_eq!(err.to_string(), "already loved");
    }

    #[test]
    fn http_error_falls_back_on_empty_body() {
        let err = ApiError::from_status_body(500, "");
        assert_eq!(err.to_string(), "HTTP 500");
    }

    #[test]
    fn http_error_falls_back_on_non_json_body() {
        let err = ApiError::from_status_body(502, "<html>Bad Gateway</html>");
        assert_eq!(err.to_string(), "HTTP 502");
    }

    #[test]
    fn http_error_falls_back_on_blank_message() {
        let err = ApiError::from_status_body(404, r#"{"message":""}"#);
        assert_eq!(err.to_string(), "HTTP 404");
    }

    #[test]
    fn json_body_without_known_fields_falls_back() {
        let err = ApiError::from_status_body(418, r#"{"detail":"teapot"}"#);
        assert_eq!(err.to_string(), "HTTP 418");
    }

    #[test]
    fn kinds_classify_variants() {
        let unauth = ApiError::Unauthenticated {
            operation: "post_comment",
        };
        assert_eq!(unauth.kind(), ErrorKind::Unauthenticated);
        assert!(unauth.is_unauthenticated());
        assert_eq!(unauth.status(), None);
        assert_eq!(
            unauth.to_string(),
            "post_comment requires a signed-in user"
        );

        let http = ApiError::from_status_body(404, "{}");
        assert_eq!(http.kind(), ErrorKind::Http);
        assert!(!http.is_unauthenticated());

        let config = ApiError::Config("bad url".into());
        assert_eq!(config.kind(), ErrorKind::Config);
    }
}
