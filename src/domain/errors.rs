// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the configuration crate.
//!
//! Every failure surfaced by a build names the offending environment variable.
//! All errors use `thiserror` for proper error handling and conversion.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for configuration operations.
///
/// It is marked as `#[non_exhaustive]` to allow for future additions without
/// breaking backwards compatibility.
///
/// # Examples
///
/// ```
/// use envschema::domain::errors::ConfigError;
///
/// let error = ConfigError::Missing {
///     env_key: "APP_PORT".to_string(),
/// };
/// assert_eq!(error.to_string(), "CONFIG: Environment variable APP_PORT is missing");
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The environment variable for a declared key is absent or empty.
    #[error("CONFIG: Environment variable {env_key} is missing")]
    Missing {
        /// The environment variable that was looked up
        env_key: String,
    },

    /// The raw value of a declared key could not be turned into its typed value.
    #[error("CONFIG: Error parsing environment variable {env_key}: {reason}")]
    Parse {
        /// The environment variable the raw value came from
        env_key: String,
        /// Why the value was rejected
        #[source]
        reason: ParseFailure,
    },

    /// The schema could not be located or read.
    #[error("CONFIG: Can't access config definition at {}: {message}", .path.display())]
    SchemaLoad {
        /// The path the schema was expected at
        path: PathBuf,
        /// What went wrong
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The process-wide configuration was already built.
    #[error("CONFIG: Configuration has already been initialized")]
    AlreadyInitialized,
}

/// The reason a single raw value was rejected during a build.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseFailure {
    /// Not one of the recognised boolean spellings.
    #[error("Cannot convert to a boolean")]
    NotBoolean,

    /// Not a base-10 integer, or out of range for `i64`.
    #[error("Cannot convert to an integer")]
    NotInteger,

    /// Not a decimal number.
    #[error("Cannot convert to a number")]
    NotNumber,

    /// Not a member of the declared enumeration.
    #[error("Value not found in enumeration values")]
    NotInEnum,

    /// The declared validator returned `false`.
    #[error("Value did not pass validator function")]
    ValidatorRejected,

    /// The declared type name is not recognised.
    #[error("Invalid type")]
    InvalidType,

    /// An `enum` was declared without any values.
    #[error("Enumeration declares no values")]
    MissingEnumValues,

    /// The value could not be resolved to a duration.
    #[error(transparent)]
    Duration(#[from] DurationError),
}

/// Errors raised while constructing a [`Duration`](crate::domain::Duration).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DurationError {
    /// The input was empty or only whitespace.
    #[error("Cannot convert to duration: empty input")]
    Empty,

    /// The input did not have the shape `<number>[ ]<unit>`.
    #[error("Cannot convert to duration: invalid magnitude in '{0}'")]
    InvalidMagnitude(String),

    /// The unit suffix is not recognised.
    #[error("Cannot convert to duration: unknown unit '{0}'")]
    UnknownUnit(String),

    /// The input resolved to zero milliseconds.
    #[error("Cannot convert to duration: resolves to zero milliseconds")]
    Zero,

    /// The resolved millisecond count does not fit in an `i64`.
    #[error("Cannot convert to duration: '{0}' is out of range")]
    OutOfRange(String),
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
