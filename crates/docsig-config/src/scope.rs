//! Scope resolution settings for documented declarations.

use serde::{Deserialize, Serialize};

const fn default_strict() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScopeConfig {
    /// Scope keyword applied when a doc block declares none (e.g. `"proto"`).
    ///
    /// Left as a raw keyword here; the parser validates it against the
    /// scopes allowed for the matched doc type.
    #[serde(default)]
    pub default_scope: Option<String>,

    /// Reject scope hints a doc type does not allow. When `false`, a
    /// disallowed hint falls back to `default_scope` instead.
    #[serde(default = "default_strict")]
    pub strict: bool,
}

impl Default for ScopeConfig {
    fn default() -> Self {
        Self {
            default_scope: None,
            strict: default_strict(),
        }
    }
}

impl ScopeConfig {
    /// The configured default scope keyword, ignoring blank values.
    pub fn default_keyword(&self) -> Option<&str> {
        self.default_scope
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}
