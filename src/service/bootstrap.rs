// SPDX-License-Identifier: MIT OR Apache-2.0

//! Process start-up: loader settings and the process-wide configuration.
//!
//! The schema location and the variable prefix are themselves read from two
//! environment variables, once, before the build:
//!
//! - `ENVSCHEMA_PATH`: schema location, default `./config`
//! - `ENVSCHEMA_PREFIX`: prefix for derived variable names, default `APP`

use crate::domain::{Config, ConfigError, Result};
use crate::ports::{EnvSource, SchemaLoader};
use crate::service::builder::{ConfigBuilder, DEFAULT_PREFIX};
use once_cell::sync::OnceCell;
use std::path::PathBuf;

/// Variable naming the schema location.
pub const PATH_VAR: &str = "ENVSCHEMA_PATH";

/// Variable holding the prefix.
pub const PREFIX_VAR: &str = "ENVSCHEMA_PREFIX";

/// Schema location used when [`PATH_VAR`] is unset or empty.
pub const DEFAULT_SCHEMA_PATH: &str = "./config";

static CONFIG: OnceCell<Config> = OnceCell::new();

/// Settings for locating the schema and naming variables.
///
/// # Examples
///
/// ```rust
/// use envschema::adapters::EnvVarAdapter;
/// use envschema::service::Settings;
/// use std::path::Path;
///
/// let env = EnvVarAdapter::from_pairs([("ENVSCHEMA_PREFIX", "FOO")]);
/// let settings = Settings::from_env(&env);
/// assert_eq!(settings.prefix, "FOO");
/// assert_eq!(settings.schema_path, Path::new("./config"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Where the schema is loaded from.
    pub schema_path: PathBuf,
    /// Prefix for derived environment variable names.
    pub prefix: String,
}

impl Settings {
    /// Reads [`PATH_VAR`] and [`PREFIX_VAR`], falling back to the defaults.
    pub fn from_env<E: EnvSource + ?Sized>(env: &E) -> Self {
        let non_empty = |name: &str| env.var(name).filter(|value| !value.is_empty());

        Self {
            schema_path: non_empty(PATH_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SCHEMA_PATH)),
            prefix: non_empty(PREFIX_VAR).unwrap_or_else(|| DEFAULT_PREFIX.to_string()),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_path: PathBuf::from(DEFAULT_SCHEMA_PATH),
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

/// Loads the schema named by `settings` and builds a configuration from `env`.
///
/// Nothing is stored; see [`init_with`] for the process-wide value.
pub fn load<L, E>(settings: &Settings, loader: &L, env: &E) -> Result<Config>
where
    L: SchemaLoader + ?Sized,
    E: EnvSource + ?Sized,
{
    let schema = loader.load(&settings.schema_path)?;
    tracing::debug!(
        "Loaded schema with {} keys from {}",
        schema.len(),
        settings.schema_path.display()
    );
    ConfigBuilder::new(&schema)
        .prefix(settings.prefix.as_str())
        .build(env)
}

/// Builds the process-wide configuration from explicit inputs.
///
/// # Errors
///
/// Returns [`ConfigError::AlreadyInitialized`] if a configuration was already
/// stored, otherwise any error from [`load`].
pub fn init_with<L, E>(settings: &Settings, loader: &L, env: &E) -> Result<&'static Config>
where
    L: SchemaLoader + ?Sized,
    E: EnvSource + ?Sized,
{
    if CONFIG.get().is_some() {
        return Err(ConfigError::AlreadyInitialized);
    }
    let config = load(settings, loader, env)?;
    CONFIG
        .try_insert(config)
        .map_err(|_| ConfigError::AlreadyInitialized)
}

/// Builds the process-wide configuration from the process environment.
///
/// Reads [`Settings`] from the environment, loads the YAML schema they name and
/// builds against a snapshot of the same environment.
#[cfg(all(feature = "env", feature = "yaml"))]
pub fn init() -> Result<&'static Config> {
    let env = crate::adapters::EnvVarAdapter::new();
    let settings = Settings::from_env(&env);
    init_with(&settings, &crate::adapters::YamlSchemaLoader::new(), &env)
}

/// Returns the process-wide configuration, if it has been built.
pub fn config() -> Option<&'static Config> {
    CONFIG.get()
}
