//! Core library for repopulse - session state, OAuth token handling,
//! and preference storage.
//!
//! repopulse is a dashboard for GitHub repository statistics. This
//! crate backs its signed-in session: the OAuth token lifecycle
//! (scope validation, keychain persistence, invalidation), the
//! observable profile properties the UI binds to, and the key-value
//! preference store behind them. The UI and the GitHub API client
//! live in the application crates.

pub mod auth;
pub mod prefs;
pub mod session;

pub use auth::{
    KeyringStore, MemoryStore, OAuthToken, ScopeSet, StoreError, TokenManager, TokenStore,
    OAUTH_SCOPES,
};
pub use prefs::{JsonPreferences, MemoryPreferences, Preferences};
pub use session::SessionProperties;
