// SPDX-License-Identifier: MIT OR Apache-2.0

//! Schema-driven configuration from environment variables.
//!
//! A service declares the configuration it expects as a schema: logical keys
//! mapped to a type (`string`, `boolean`, `integer`, `number`, `duration`), a
//! list of allowed values, or a structured declaration with an environment
//! variable override and a validator. At start-up the schema is resolved
//! against the environment and produces an immutable [`Config`], or an error
//! naming the first offending variable.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types (`Schema`, `Config`, `ConfigValue`, `Duration`, errors)
//! - **Ports**: Trait definitions for the seams (`EnvSource`, `SchemaLoader`)
//! - **Adapters**: Process environment snapshot and YAML schema files
//! - **Service**: The build loop and process start-up
//!
//! # Variable Names
//!
//! A key `port` is read from `{PREFIX}_PORT`. The prefix defaults to `APP` and is
//! itself read from `ENVSCHEMA_PREFIX`; the schema file location defaults to
//! `./config` (`.yaml`/`.yml`) and is read from `ENVSCHEMA_PATH`.
//!
//! # Feature Flags
//!
//! - `yaml`: Enable YAML schema files (default)
//! - `env`: Enable the process environment adapter (default)
//!
//! # Quick Start
//!
//! ```rust
//! use envschema::prelude::*;
//!
//! # fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//! let schema = Schema::new()
//!     .with("host", "string")
//!     .with("port", "integer")
//!     .with("mode", ["dev", "prod"])
//!     .with("timeout", "duration");
//!
//! let env = EnvVarAdapter::from_pairs([
//!     ("APP_HOST", "localhost"),
//!     ("APP_PORT", "8080"),
//!     ("APP_MODE", "prod"),
//!     ("APP_TIMEOUT", "2m"),
//! ]);
//!
//! let config = ConfigBuilder::new(&schema).build(&env)?;
//! assert_eq!(config.get_i64("port"), Some(8080));
//! assert_eq!(config.get_duration("timeout").map(|d| d.as_seconds()), Some(120));
//! # Ok(())
//! # }
//! ```
//!
//! In a binary, build once at start-up and read the stored value anywhere:
//!
//! ```rust,no_run
//! fn main() -> envschema::domain::Result<()> {
//!     let config = envschema::init()?;
//!     let _port = config.get_i64("port");
//!     Ok(())
//! }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use domain::{Config, ConfigError, Result};
#[cfg(all(feature = "env", feature = "yaml"))]
pub use service::init;
pub use service::{config, init_with};

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::domain::{
        Config, ConfigError, ConfigKey, ConfigValue, Duration, KeyDecl, Result, Schema, TypeDecl,
        Validator, ValueType,
    };
    pub use crate::ports::{EnvSource, SchemaLoader};
    pub use crate::service::{ConfigBuilder, Settings};

    // Re-export adapters based on feature flags
    #[cfg(feature = "env")]
    pub use crate::adapters::EnvVarAdapter;
    #[cfg(feature = "yaml")]
    pub use crate::adapters::YamlSchemaLoader;
}
