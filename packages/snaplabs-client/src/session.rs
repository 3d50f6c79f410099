//! Session resolution for authenticated API calls.
//!
//! The client never reads ambient global state. Every operation asks an
//! injected [`SessionProvider`] for the current bearer token at call time,
//! so a call always reflects the auth state at the moment it is issued and
//! sign-out takes effect immediately.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretBox};
use tokio::sync::watch;

/// The signed-in user's bearer credential.
///
/// ID tokens routinely end up in tracing fields and error chains, so the
/// raw string lives in a `secrecy::SecretBox` and both `Debug` and
/// `Display` render `[REDACTED]`. The one legitimate read is
/// [`expose`](SessionToken::expose), at the point the Authorization header
/// is built.
pub struct SessionToken(SecretBox<str>);

impl SessionToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(SecretBox::new(value.into().into_boxed_str()))
    }

    /// The raw token, for header construction.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

// SecretBox is deliberately not Clone; re-wrap the raw value instead.
impl Clone for SessionToken {
    fn clone(&self) -> Self {
        Self::new(self.expose())
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl From<String> for SessionToken {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for SessionToken {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Current authentication state as published by the identity integration.
#[derive(Clone, Debug, Default)]
pub enum AuthState {
    /// No signed-in user; operations run anonymously.
    #[default]
    SignedOut,
    /// A signed-in user and their bearer token.
    SignedIn(SessionToken),
}

impl AuthState {
    pub fn is_signed_in(&self) -> bool {
        matches!(self, AuthState::SignedIn(_))
    }

    /// The bearer token, if signed in.
    pub fn token(&self) -> Option<SessionToken> {
        match self {
            AuthState::SignedIn(token) => Some(token.clone()),
            AuthState::SignedOut => None,
        }
    }
}

/// Source of the session token for the request about to be issued.
///
/// Resolution must never fail: an anonymous session resolves to `None`, and
/// callers decide whether that is acceptable for the operation at hand.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// Resolve the current token. Called once per operation; the result is
    /// never cached across calls.
    async fn current_token(&self) -> Option<SessionToken>;
}

/// Auth-state stream bridging an identity provider to the client.
///
/// Whatever owns sign-in (the Firebase bridge in production, a test harness
/// locally) drives [`sign_in`](AuthStateHub::sign_in) and
/// [`sign_out`](AuthStateHub::sign_out). Each token resolution subscribes,
/// takes the current emission, and drops the subscription, so no resolution
/// ever waits on a future state change.
#[derive(Clone)]
pub struct AuthStateHub {
    tx: Arc<watch::Sender<AuthState>>,
}

impl AuthStateHub {
    /// Create a hub with no signed-in user.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(AuthState::SignedOut);
        Self { tx: Arc::new(tx) }
    }

    /// Publish a signed-in state carrying `token`.
    pub fn sign_in(&self, token: impl Into<SessionToken>) {
        self.tx.send_replace(AuthState::SignedIn(token.into()));
    }

    /// Publish a signed-out state.
    pub fn sign_out(&self) {
        self.tx.send_replace(AuthState::SignedOut);
    }

    /// Subscribe to auth-state transitions. A new subscriber observes the
    /// current state immediately.
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.tx.subscribe()
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> AuthState {
        self.tx.borrow().clone()
    }
}

impl Default for AuthStateHub {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionProvider for AuthStateHub {
    async fn current_token(&self) -> Option<SessionToken> {
        // One subscription per resolution: read the current emission, then
        // drop the receiver.
        let rx = self.subscribe();
        let state = rx.borrow().clone();
        state.token()
    }
}

/// Fixed-session provider for CLIs and tests.
pub struct StaticSession {
    token: Option<SessionToken>,
}

impl StaticSession {
    /// Provider that always resolves to `token`.
    pub fn token(token: impl Into<SessionToken>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    /// Provider that always resolves anonymously.
    pub fn anonymous() -> Self {
        Self { token: None }
    }
}

#[async_trait]
impl SessionProvider for StaticSession {
    async fn current_token(&self) -> Option<SessionToken> {
        self.token.clone()
    }
}
