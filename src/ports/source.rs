// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment source trait definition.
//!
//! This module defines the `EnvSource` trait, the port through which a build
//! reads raw environment values. The process environment is one implementation;
//! tests use an in-memory map.

use std::collections::HashMap;

/// A trait for sources of raw environment variable values.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow for use in multi-threaded contexts.
///
/// # Examples
///
/// ```rust
/// use envschema::ports::EnvSource;
///
/// struct Fixed;
///
/// impl EnvSource for Fixed {
///     fn name(&self) -> &str {
///         "fixed"
///     }
///
///     fn var(&self, name: &str) -> Option<String> {
///         (name == "APP_PORT").then(|| "8080".to_string())
///     }
/// }
///
/// assert_eq!(Fixed.var("APP_PORT").as_deref(), Some("8080"));
/// assert_eq!(Fixed.var("APP_HOST"), None);
/// ```
pub trait EnvSource: Send + Sync {
    /// Returns the name of this source, used in log output.
    fn name(&self) -> &str;

    /// Looks up a variable by its exact name.
    ///
    /// Returns `None` when the variable is not set. Empty values are returned
    /// as-is; deciding that empty means missing is up to the caller.
    fn var(&self, name: &str) -> Option<String>;
}

impl EnvSource for HashMap<String, String> {
    fn name(&self) -> &str {
        "map"
    }

    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn var(&self, name: &str) -> Option<String> {
        (**self).var(name)
    }
}
