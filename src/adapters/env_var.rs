// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment variable source adapter.
//!
//! This module provides an adapter that snapshots the process environment so a
//! build reads one consistent set of values.

use crate::ports::EnvSource;
use std::collections::HashMap;
use std::env;

/// Maximum length for environment variable keys (prevents DoS)
const MAX_ENV_KEY_LEN: usize = 512;

/// Maximum length for environment variable values (prevents DoS)
const MAX_ENV_VALUE_LEN: usize = 1048576; // 1MB

/// Environment source backed by a snapshot of variables.
///
/// [`EnvVarAdapter::new`] captures the process environment at construction;
/// later changes to the process environment are not seen. Variables whose name
/// or value is not valid UTF-8, or is oversized, are skipped.
///
/// # Examples
///
/// ```rust
/// use envschema::adapters::EnvVarAdapter;
/// use envschema::ports::EnvSource;
///
/// // Snapshot the process environment
/// let adapter = EnvVarAdapter::new();
///
/// // Or provide values directly
/// let adapter = EnvVarAdapter::from_pairs([("APP_PORT", "8080")]);
/// assert_eq!(adapter.var("APP_PORT").as_deref(), Some("8080"));
/// ```
#[derive(Debug, Clone)]
pub struct EnvVarAdapter {
    vars: HashMap<String, String>,
}

impl EnvVarAdapter {
    /// Snapshots the current process environment.
    pub fn new() -> Self {
        let mut vars = HashMap::new();
        let mut skipped = 0usize;

        for (key, value) in env::vars_os() {
            let (Some(key), Some(value)) = (key.to_str(), value.to_str()) else {
                skipped += 1;
                continue;
            };

            // Validate input sizes to prevent DoS
            if key.len() > MAX_ENV_KEY_LEN || value.len() > MAX_ENV_VALUE_LEN {
                tracing::debug!(
                    "Skipping oversized environment variable: key_len={}, value_len={} (max key={}, max value={})",
                    key.len(),
                    value.len(),
                    MAX_ENV_KEY_LEN,
                    MAX_ENV_VALUE_LEN
                );
                skipped += 1;
                continue;
            }

            vars.insert(key.to_string(), value.to_string());
        }

        tracing::debug!(
            "Captured {} environment variables ({} skipped)",
            vars.len(),
            skipped
        );

        Self { vars }
    }

    /// Creates an adapter over the given values instead of the process environment.
    ///
    /// This is the way to build configuration deterministically in tests,
    /// without touching process-wide state.
    pub fn with_values(values: HashMap<String, String>) -> Self {
        Self { vars: values }
    }

    /// Creates an adapter from name/value pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Returns the number of captured variables.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Returns `true` if no variables were captured.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl Default for EnvVarAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvSource for EnvVarAdapter {
    fn name(&self) -> &str {
        "env"
    }

    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Helper to set and clean up environment variables
    struct EnvGuard {
        keys: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { keys: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.keys.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for key in &self.keys {
                env::remove_var(key);
            }
        }
    }

    #[test]
    fn test_env_adapter_name() {
        let adapter = EnvVarAdapter::from_pairs([("A", "1")]);
        assert_eq!(adapter.name(), "env");
    }

    #[test]
    fn test_env_adapter_reads_process_env() {
        let mut guard = EnvGuard::new();
        guard.set("ENVSCHEMA_ADAPTER_TEST_VAR", "test_value");

        let adapter = EnvVarAdapter::new();
        assert_eq!(
            adapter.var("ENVSCHEMA_ADAPTER_TEST_VAR").as_deref(),
            Some("test_value")
        );
    }

    #[test]
    fn test_env_adapter_is_a_snapshot() {
        let mut guard = EnvGuard::new();
        guard.set("ENVSCHEMA_SNAPSHOT_VAR", "initial");

        let adapter = EnvVarAdapter::new();
        guard.set("ENVSCHEMA_SNAPSHOT_VAR", "updated");

        assert_eq!(
            adapter.var("ENVSCHEMA_SNAPSHOT_VAR").as_deref(),
            Some("initial")
        );
    }

    #[test]
    fn test_env_adapter_get_nonexistent() {
        let adapter = EnvVarAdapter::new();
        assert!(adapter.var("ENVSCHEMA_NONEXISTENT_VAR_12345").is_none());
    }

    #[test]
    fn test_env_adapter_names_are_case_sensitive() {
        let adapter = EnvVarAdapter::from_pairs([("APP_FOO", "x")]);
        assert!(adapter.var("app_foo").is_none());
    }

    #[test]
    fn test_env_adapter_with_values() {
        let mut values = HashMap::new();
        values.insert("APP_STR".to_string(), "hello".to_string());
        values.insert("APP_EMPTY".to_string(), String::new());

        let adapter = EnvVarAdapter::with_values(values);
        assert_eq!(adapter.len(), 2);
        assert_eq!(adapter.var("APP_STR").as_deref(), Some("hello"));
        assert_eq!(adapter.var("APP_EMPTY").as_deref(), Some(""));
    }

    #[test]
    fn test_env_adapter_skips_oversized_values() {
        let mut guard = EnvGuard::new();
        guard.set("ENVSCHEMA_OVERSIZED_VAR", &"x".repeat(MAX_ENV_VALUE_LEN + 1));

        let adapter = EnvVarAdapter::new();
        assert!(adapter.var("ENVSCHEMA_OVERSIZED_VAR").is_none());
    }
}
