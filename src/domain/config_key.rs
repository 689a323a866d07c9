// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration key newtype for type-safe key handling.
//!
//! This module provides the `ConfigKey` type, the logical name a schema entry is
//! declared and looked up under, and the rule deriving its environment variable.

use std::borrow::Borrow;
use std::fmt;

/// A logical configuration key as declared in a schema.
///
/// `ConfigKey` wraps a `String` so logical keys are not confused with
/// environment variable names, which are derived from them.
///
/// # Examples
///
/// ```
/// use envschema::domain::config_key::ConfigKey;
///
/// let key = ConfigKey::from("database_url");
/// assert_eq!(key.as_str(), "database_url");
/// assert_eq!(key.env_var_name("APP"), "APP_DATABASE_URL");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConfigKey(String);

impl ConfigKey {
    /// Creates a new `ConfigKey` from a `String`.
    pub fn new(key: String) -> Self {
        ConfigKey(key)
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the `ConfigKey` into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Derives the default environment variable name, `{PREFIX}_{KEY}` uppercased.
    ///
    /// # Examples
    ///
    /// ```
    /// use envschema::domain::config_key::ConfigKey;
    ///
    /// assert_eq!(ConfigKey::from("port").env_var_name("foo"), "FOO_PORT");
    /// ```
    pub fn env_var_name(&self, prefix: &str) -> String {
        format!("{}_{}", prefix, self.0).to_uppercase()
    }
}

impl From<String> for ConfigKey {
    fn from(s: String) -> Self {
        ConfigKey(s)
    }
}

impl From<&str> for ConfigKey {
    fn from(s: &str) -> Self {
        ConfigKey(s.to_string())
    }
}

impl From<ConfigKey> for String {
    fn from(key: ConfigKey) -> Self {
        key.0
    }
}

impl AsRef<str> for ConfigKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ConfigKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
