//! Session state for the signed-in user.
//!
//! This module provides `SessionProperties`, the observable profile
//! fields (alias, name, avatar URL) and display settings the UI binds
//! to. Each property persists through preferences and publishes a
//! change notification on every set.

pub mod properties;

pub use properties::SessionProperties;
