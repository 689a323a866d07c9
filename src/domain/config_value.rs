// SPDX-License-Identifier: MIT OR Apache-2.0

//! Parsed configuration values.
//!
//! This module provides the `ConfigValue` type, the typed result of coercing one
//! raw environment value according to its declaration.

use crate::domain::duration::Duration;
use serde::Serialize;
use std::fmt;

/// A typed configuration value.
///
/// Serializes untagged, so a dump of a [`Config`](crate::domain::Config) reads
/// like the values themselves; durations serialize as milliseconds.
///
/// # Examples
///
/// ```
/// use envschema::domain::ConfigValue;
///
/// let value = ConfigValue::Integer(42);
/// assert_eq!(value.as_i64(), Some(42));
/// assert_eq!(value.as_bool(), None);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// A `string` value.
    String(String),
    /// A `boolean` value.
    Boolean(bool),
    /// An `integer` value.
    Integer(i64),
    /// A `number` value.
    Number(f64),
    /// An `enum` value; always one of the declared values.
    Enum(String),
    /// A `duration` value.
    Duration(Duration),
}

impl ConfigValue {
    /// Returns the string for `string` and `enum` values.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::String(s) | ConfigValue::Enum(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the flag for `boolean` values.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer for `integer` values.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ConfigValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the float for `number` values.
    ///
    /// Integers are not widened; an `integer` key yields `None` here.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ConfigValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the span for `duration` values.
    pub fn as_duration(&self) -> Option<Duration> {
        match self {
            ConfigValue::Duration(d) => Some(*d),
            _ => None,
        }
    }

    /// Returns the schema type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            ConfigValue::String(_) => "string",
            ConfigValue::Boolean(_) => "boolean",
            ConfigValue::Integer(_) => "integer",
            ConfigValue::Number(_) => "number",
            ConfigValue::Enum(_) => "enum",
            ConfigValue::Duration(_) => "duration",
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::String(s) | ConfigValue::Enum(s) => write!(f, "{}", s),
            ConfigValue::Boolean(b) => write!(f, "{}", b),
            ConfigValue::Integer(n) => write!(f, "{}", n),
            ConfigValue::Number(n) => write!(f, "{}", n),
            ConfigValue::Duration(d) => write!(f, "{}", d),
        }
    }
}
