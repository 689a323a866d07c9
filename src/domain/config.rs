// SPDX-License-Identifier: MIT OR Apache-2.0

//! The immutable configuration object produced by a build.

use crate::domain::config_key::ConfigKey;
use crate::domain::config_value::ConfigValue;
use crate::domain::duration::Duration;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

/// A frozen mapping from logical key to parsed value.
///
/// A `Config` is only ever produced by a successful build and has no mutating
/// API: every key the schema declared is present and nothing can be added or
/// overwritten afterwards. It is `Send + Sync`, so a shared reference can be
/// read from any thread.
///
/// ```compile_fail
/// use envschema::domain::{Config, ConfigValue};
///
/// fn overwrite(config: &mut Config) {
///     config.insert("CANT_SET_ME", ConfigValue::Integer(123));
/// }
/// ```
///
/// # Examples
///
/// ```
/// use envschema::adapters::EnvVarAdapter;
/// use envschema::domain::Schema;
/// use envschema::service::ConfigBuilder;
///
/// let schema = Schema::new().with("port", "integer");
/// let env = EnvVarAdapter::from_pairs([("APP_PORT", "8080")]);
/// let config = ConfigBuilder::new(&schema).build(&env).unwrap();
///
/// assert_eq!(config.get_i64("port"), Some(8080));
/// assert!(config.get("host").is_none());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    order: Vec<ConfigKey>,
    values: HashMap<ConfigKey, ConfigValue>,
}

impl Config {
    /// Freezes parsed entries, keeping their order.
    pub(crate) fn from_entries(entries: Vec<(ConfigKey, ConfigValue)>) -> Self {
        let mut order = Vec::with_capacity(entries.len());
        let mut values = HashMap::with_capacity(entries.len());
        for (key, value) in entries {
            if values.insert(key.clone(), value).is_none() {
                order.push(key);
            }
        }
        Self { order, values }
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.values.get(key)
    }

    /// Returns a `string` or `enum` value.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(ConfigValue::as_str)
    }

    /// Returns a `boolean` value.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(ConfigValue::as_bool)
    }

    /// Returns an `integer` value.
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(ConfigValue::as_i64)
    }

    /// Returns a `number` value.
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(ConfigValue::as_f64)
    }

    /// Returns a `duration` value.
    pub fn get_duration(&self, key: &str) -> Option<Duration> {
        self.get(key).and_then(ConfigValue::as_duration)
    }

    /// Returns `true` if `key` was declared.
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Returns the number of keys.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the schema declared no keys.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterates keys in schema order.
    pub fn keys(&self) -> impl Iterator<Item = &ConfigKey> {
        self.order.iter()
    }

    /// Iterates entries in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&ConfigKey, &ConfigValue)> {
        self.order
            .iter()
            .filter_map(move |key| self.values.get(key).map(|value| (key, value)))
    }
}

impl Serialize for Config {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key.as_str(), value)?;
        }
        map.end()
    }
}
