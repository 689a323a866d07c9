// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core business logic and types.
//!
//! This module contains the schema, value and error types of the crate. It is
//! independent of where schemas and environment values come from.

pub mod config;
pub mod config_key;
pub mod config_value;
pub mod duration;
pub mod errors;
pub mod schema;

// Re-export commonly used types
pub use config::Config;
pub use config_key::ConfigKey;
pub use config_value::ConfigValue;
pub use duration::Duration;
pub use errors::{ConfigError, DurationError, ParseFailure, Result};
pub use schema::{KeyDecl, ResolvedDecl, Schema, TypeDecl, Validator, ValueType};
