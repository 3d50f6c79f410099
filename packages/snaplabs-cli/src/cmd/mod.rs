//! Subcommand implementations.

pub mod comments;
pub mod messages;
pub mod projects;

use std::sync::Arc;

use anyhow::Result;
use snaplabs_client::{SessionProvider, SnapLabsClient, StaticSession};

/// Build the API client, signed in when a token was supplied via `--token`
/// or the `SNAPLABS_TOKEN` environment variable.
pub fn build_client(token: Option<String>) -> Result<SnapLabsClient> {
    let token = token.or_else(|| {
        std::env::var("SNAPLABS_TOKEN")
            .ok()
            .filter(|t| !t.is_empty())
    });

    let session: Arc<dyn SessionProvider> = match token {
        Some(token) => Arc::new(StaticSession::token(token)),
        None => Arc::new(StaticSession::anonymous()),
    };

    Ok(SnapLabsClient::from_env(session)?)
}
