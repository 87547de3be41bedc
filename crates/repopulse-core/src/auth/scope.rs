//! OAuth scope parsing and the required-scope check.

use std::collections::BTreeSet;

use tracing::debug;

/// Scopes repopulse requests from GitHub.
///
/// - `public_repo`: traffic and star statistics for the user's repositories
/// - `read:user`: the signed-in user's profile (alias, name, avatar)
/// - `read:org`: repositories owned by the user's organizations
pub const OAUTH_SCOPES: [&str; 3] = ["public_repo", "read:user", "read:org"];

/// A set of OAuth scope names.
///
/// GitHub reports granted scopes as a single delimiter-separated
/// string, URL-encoded by the OAuth flow. Parsing normalizes that into
/// an explicit set so acceptance is one superset comparison instead of
/// ad hoc substring matching. Comparison is case-sensitive and
/// order-independent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScopeSet(BTreeSet<String>);

impl ScopeSet {
    /// Parse a raw scope string from the token endpoint.
    ///
    /// The string is form-decoded first (a literal `+` or `%20` is a
    /// space separator, `%3A` is the `:` inside scopes like
    /// `read:org`), then tokenized on whitespace and commas. Both the
    /// space- and comma-separated forms the issuer produces are
    /// accepted.
    pub fn parse(raw: &str) -> Self {
        let decoded = decode_form(raw);
        let scopes = decoded
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
            .collect();
        Self(scopes)
    }

    /// The scope set repopulse requires before trusting a token.
    pub fn required() -> Self {
        Self(OAUTH_SCOPES.iter().map(|s| s.to_string()).collect())
    }

    /// True when `scope` was granted.
    pub fn contains(&self, scope: &str) -> bool {
        self.0.contains(scope)
    }

    /// True when every scope in `required` was granted. Extra granted
    /// scopes never cause a mismatch.
    pub fn is_superset(&self, required: &ScopeSet) -> bool {
        self.0.is_superset(&required.0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The percent-encoded, space-joined form for the authorize URL's
    /// `scope` query parameter.
    pub fn query_value(&self) -> String {
        let joined = self
            .0
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ");
        urlencoding::encode(&joined).into_owned()
    }
}

/// Form-decode a scope string: `+` means space, then percent-unescape.
fn decode_form(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(e) => {
            debug!(error = %e, "Scope string did not decode cleanly, using it verbatim");
            spaced
        }
    }
}
