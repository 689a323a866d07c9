// SPDX-License-Identifier: MIT OR Apache-2.0

//! Schema-driven configuration builder.
//!
//! This module turns a [`Schema`] and an [`EnvSource`] into a frozen [`Config`].
//! Entries are processed in schema order and the first failure aborts the whole
//! build; there is never a partially built configuration.

use crate::domain::{
    Config, ConfigError, ConfigKey, ConfigValue, Duration, DurationError, ParseFailure,
    ResolvedDecl, Result, Schema, ValueType,
};
use crate::ports::EnvSource;
use once_cell::sync::Lazy;
use regex::Regex;

/// The prefix used when none is configured.
pub const DEFAULT_PREFIX: &str = "APP";

static INTEGER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?[0-9]+$").expect("integer regex is valid"));

static NUMBER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?[0-9]+(\.[0-9]*)?$").expect("number regex is valid"));

/// Builds a [`Config`] from a schema and environment values.
///
/// # Examples
///
/// ```rust
/// use envschema::adapters::EnvVarAdapter;
/// use envschema::domain::Schema;
/// use envschema::service::ConfigBuilder;
///
/// # fn main() -> envschema::domain::Result<()> {
/// let schema = Schema::new()
///     .with("debug", "boolean")
///     .with("timeout", "duration");
/// let env = EnvVarAdapter::from_pairs([("SVC_DEBUG", "yes"), ("SVC_TIMEOUT", "30s")]);
///
/// let config = ConfigBuilder::new(&schema).prefix("SVC").build(&env)?;
/// assert_eq!(config.get_bool("debug"), Some(true));
/// assert_eq!(config.get_duration("timeout").map(|d| d.as_seconds()), Some(30));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ConfigBuilder<'a> {
    schema: &'a Schema,
    prefix: String,
}

impl<'a> ConfigBuilder<'a> {
    /// Creates a builder for `schema` using the default `APP` prefix.
    pub fn new(schema: &'a Schema) -> Self {
        Self {
            schema,
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }

    /// Sets the prefix used to derive environment variable names.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Reads, validates and parses every schema entry from `env`.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::Missing`] if a variable is absent or empty
    /// - [`ConfigError::Parse`] if a validator rejects a value or it cannot be coerced
    pub fn build<E: EnvSource + ?Sized>(&self, env: &E) -> Result<Config> {
        match self.build_entries(env) {
            Ok(entries) => {
                tracing::info!(
                    "Built configuration with {} keys (prefix={}, source={})",
                    entries.len(),
                    self.prefix,
                    env.name()
                );
                Ok(Config::from_entries(entries))
            }
            Err(e) => {
                tracing::warn!("Configuration build failed: {}", log_summary(&e));
                Err(e)
            }
        }
    }

    fn build_entries<E: EnvSource + ?Sized>(
        &self,
        env: &E,
    ) -> Result<Vec<(ConfigKey, ConfigValue)>> {
        let mut entries = Vec::with_capacity(self.schema.len());

        for (key, decl) in self.schema.iter() {
            let resolved = decl.resolve(key, &self.prefix);
            let value = resolve_entry(&resolved, env)?;

            tracing::debug!(
                "Resolved key '{}' from {} as {}",
                key,
                resolved.env_key,
                value.type_name()
            );
            entries.push((key.clone(), value));
        }

        Ok(entries)
    }
}

/// Describes a build failure without the raw value some reasons carry.
fn log_summary(error: &ConfigError) -> String {
    match error {
        ConfigError::Parse {
            env_key,
            reason: ParseFailure::Duration(_),
        } => format!("{} could not be converted to a duration", env_key),
        other => other.to_string(),
    }
}

/// Builds a [`Config`] in one call.
///
/// Equivalent to `ConfigBuilder::new(schema).prefix(prefix).build(env)`.
pub fn build<E: EnvSource + ?Sized>(schema: &Schema, env: &E, prefix: &str) -> Result<Config> {
    ConfigBuilder::new(schema).prefix(prefix).build(env)
}

fn resolve_entry<E: EnvSource + ?Sized>(decl: &ResolvedDecl<'_>, env: &E) -> Result<ConfigValue> {
    let raw = env
        .var(&decl.env_key)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| ConfigError::Missing {
            env_key: decl.env_key.clone(),
        })?;

    parse_raw(decl, &raw).map_err(|reason| ConfigError::Parse {
        env_key: decl.env_key.clone(),
        reason,
    })
}

/// Validates and coerces one raw value.
fn parse_raw(decl: &ResolvedDecl<'_>, raw: &str) -> std::result::Result<ConfigValue, ParseFailure> {
    if let Some(validator) = decl.validator {
        if !validator.check(raw) {
            return Err(ParseFailure::ValidatorRejected);
        }
    }

    match decl.value_type {
        ValueType::String => Ok(ConfigValue::String(raw.to_string())),
        ValueType::Boolean => parse_boolean(raw).map(ConfigValue::Boolean),
        ValueType::Integer => parse_integer(raw).map(ConfigValue::Integer),
        ValueType::Number => parse_number(raw).map(ConfigValue::Number),
        ValueType::Enum => {
            let values = decl.values.ok_or(ParseFailure::MissingEnumValues)?;
            if values.iter().any(|v| v == raw) {
                Ok(ConfigValue::Enum(raw.to_string()))
            } else {
                Err(ParseFailure::NotInEnum)
            }
        }
        ValueType::Duration => Ok(ConfigValue::Duration(parse_duration(raw)?)),
        ValueType::Unrecognized(_) => Err(ParseFailure::InvalidType),
    }
}

fn parse_boolean(raw: &str) -> std::result::Result<bool, ParseFailure> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => Ok(true),
        "false" | "no" | "n" | "0" => Ok(false),
        _ => Err(ParseFailure::NotBoolean),
    }
}

fn parse_integer(raw: &str) -> std::result::Result<i64, ParseFailure> {
    if !INTEGER_REGEX.is_match(raw) {
        return Err(ParseFailure::NotInteger);
    }
    raw.parse().map_err(|_| ParseFailure::NotInteger)
}

fn parse_number(raw: &str) -> std::result::Result<f64, ParseFailure> {
    if !NUMBER_REGEX.is_match(raw) {
        return Err(ParseFailure::NotNumber);
    }
    raw.parse().map_err(|_| ParseFailure::NotNumber)
}

/// Integers are milliseconds; anything else goes through the unit parser.
fn parse_duration(raw: &str) -> std::result::Result<Duration, DurationError> {
    if INTEGER_REGEX.is_match(raw) {
        let millis: i64 = raw
            .parse()
            .map_err(|_| DurationError::OutOfRange(raw.to_string()))?;
        return Duration::from_milliseconds(millis);
    }
    Duration::from_string(raw)
}
