//! Authentication module for GitHub OAuth tokens.
//!
//! This module provides:
//! - `OAuthToken`: The token model returned by GitHub's token endpoint
//! - `ScopeSet`: Scope parsing and the required-scope check
//! - `TokenManager`: Validation, persistence, and invalidation
//! - `TokenStore`: Storage seam with keychain and in-memory backends
//!
//! Tokens missing a required scope are never kept; the empty token is
//! stored in their place and reads back as signed out.

pub mod error;
pub mod manager;
pub mod scope;
pub mod store;
pub mod token;

pub use error::StoreError;
pub use manager::TokenManager;
pub use scope::{ScopeSet, OAUTH_SCOPES};
pub use store::{KeyringStore, MemoryStore, TokenStore};
pub use token::OAuthToken;
