//! Observable session properties for the signed-in user.
//!
//! Each property is backed by a [`Preferences`] key and a broadcast
//! channel. Setting a property persists it, updates the in-memory
//! value, and publishes exactly one change notification carrying the
//! new value. Subscribers that fall behind or drop their receiver do
//! not block the setter.

use tokio::sync::broadcast;
use tracing::debug;

use crate::prefs::Preferences;

/// Buffered notifications per property before a slow subscriber
/// starts lagging.
const CHANNEL_CAPACITY: usize = 16;

const KEY_ALIAS: &str = "alias";
const KEY_NAME: &str = "name";
const KEY_AVATAR_URL: &str = "avatar_url";
const KEY_INCLUDE_ORGS: &str = "should_include_organizations";

/// A value paired with its change-notification channel.
struct Property<T> {
    value: T,
    tx: broadcast::Sender<T>,
}

impl<T: Clone> Property<T> {
    fn new(value: T) -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { value, tx }
    }

    fn get(&self) -> &T {
        &self.value
    }

    fn set(&mut self, value: T) {
        self.value = value.clone();
        if self.tx.send(value).is_err() {
            debug!("Property changed with no subscribers");
        }
    }

    fn subscribe(&self) -> broadcast::Receiver<T> {
        self.tx.subscribe()
    }
}

/// The signed-in user's profile fields and display settings.
///
/// Values load from preferences on construction and default to empty
/// strings (`false` for the organizations flag) when no stored value
/// exists. Every setter notifies, including a set to the current
/// value: subscribers see each write, not each distinct value.
pub struct SessionProperties<P> {
    prefs: P,
    alias: Property<String>,
    name: Property<String>,
    avatar_url: Property<String>,
    should_include_organizations: Property<bool>,
}

impl<P: Preferences> SessionProperties<P> {
    pub fn new(prefs: P) -> Self {
        let alias = prefs.get(KEY_ALIAS).unwrap_or_default();
        let name = prefs.get(KEY_NAME).unwrap_or_default();
        let avatar_url = prefs.get(KEY_AVATAR_URL).unwrap_or_default();
        let include_orgs = prefs
            .get(KEY_INCLUDE_ORGS)
            .map(|v| v == "true")
            .unwrap_or(false);

        Self {
            prefs,
            alias: Property::new(alias),
            name: Property::new(name),
            avatar_url: Property::new(avatar_url),
            should_include_organizations: Property::new(include_orgs),
        }
    }

    // ===== Alias =====

    /// The user's GitHub login.
    pub fn alias(&self) -> &str {
        self.alias.get()
    }

    pub fn set_alias(&mut self, alias: impl Into<String>) {
        let alias = alias.into();
        self.prefs.set(KEY_ALIAS, &alias);
        self.alias.set(alias);
    }

    pub fn subscribe_alias(&self) -> broadcast::Receiver<String> {
        self.alias.subscribe()
    }

    // ===== Name =====

    /// The user's display name.
    pub fn name(&self) -> &str {
        self.name.get()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.prefs.set(KEY_NAME, &name);
        self.name.set(name);
    }

    pub fn subscribe_name(&self) -> broadcast::Receiver<String> {
        self.name.subscribe()
    }

    // ===== Avatar URL =====

    pub fn avatar_url(&self) -> &str {
        self.avatar_url.get()
    }

    pub fn set_avatar_url(&mut self, url: impl Into<String>) {
        let url = url.into();
        self.prefs.set(KEY_AVATAR_URL, &url);
        self.avatar_url.set(url);
    }

    pub fn subscribe_avatar_url(&self) -> broadcast::Receiver<String> {
        self.avatar_url.subscribe()
    }

    // ===== Organizations =====

    /// Whether dashboards include repositories from the user's
    /// organizations.
    pub fn should_include_organizations(&self) -> bool {
        *self.should_include_organizations.get()
    }

    pub fn set_should_include_organizations(&mut self, include: bool) {
        self.prefs
            .set(KEY_INCLUDE_ORGS, if include { "true" } else { "false" });
        self.should_include_organizations.set(include);
    }

    pub fn subscribe_should_include_organizations(&self) -> broadcast::Receiver<bool> {
        self.should_include_organizations.subscribe()
    }

    /// Restore every property to its default through the normal set
    /// path, so stored values are cleared and subscribers are
    /// notified. Sign-out calls this.
    pub fn reset(&mut self) {
        self.set_alias("");
        self.set_name("");
        self.set_avatar_url("");
        self.set_should_include_organizations(false);
    }
}
