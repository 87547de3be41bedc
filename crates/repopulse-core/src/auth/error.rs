//! Error types for token storage.

use thiserror::Error;

/// Errors surfaced by a [`TokenStore`](crate::auth::TokenStore).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("keychain access failed: {0}")]
    Keychain(#[from] keyring::Error),

    #[error("token serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
