// SPDX-License-Identifier: MIT OR Apache-2.0

//! Schema loader trait definition.
//!
//! This module defines the `SchemaLoader` trait, which provides an interface for
//! obtaining a [`Schema`] from a file or any other source.

use crate::domain::{Result, Schema};
use std::path::Path;

/// A trait for loading schemas.
///
/// Failures are reported as [`ConfigError::SchemaLoad`](crate::domain::ConfigError::SchemaLoad).
///
/// # Examples
///
/// ```rust
/// use envschema::domain::{Result, Schema};
/// use envschema::ports::SchemaLoader;
/// use std::path::Path;
///
/// struct InMemory(Schema);
///
/// impl SchemaLoader for InMemory {
///     fn load(&self, _path: &Path) -> Result<Schema> {
///         Ok(self.0.clone())
///     }
/// }
///
/// let loader = InMemory(Schema::new().with("port", "integer"));
/// assert_eq!(loader.load(Path::new("./config")).unwrap().len(), 1);
/// ```
pub trait SchemaLoader {
    /// Loads the schema found at `path`.
    ///
    /// Loaders that do not read from disk may ignore `path`.
    fn load(&self, path: &Path) -> Result<Schema>;
}

impl SchemaLoader for Schema {
    fn load(&self, _path: &Path) -> Result<Schema> {
        Ok(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ConfigError;
    use std::path::PathBuf;

    struct FailingLoader;

    impl SchemaLoader for FailingLoader {
        fn load(&self, path: &Path) -> Result<Schema> {
            Err(ConfigError::SchemaLoad {
                path: path.to_path_buf(),
                message: "unavailable".to_string(),
                source: None,
            })
        }
    }

    #[test]
    fn test_schema_is_its_own_loader() {
        let schema = Schema::new().with("a", "string").with("b", "boolean");
        let loaded = schema.load(Path::new("ignored")).unwrap();
        assert_eq!(loaded.len(), 2);
    }

    #[test]
    fn test_failing_loader_reports_path() {
        let err = FailingLoader.load(&PathBuf::from("/etc/app/config")).unwrap_err();
        assert!(matches!(err, ConfigError::SchemaLoad { .. }));
        assert!(err.to_string().contains("/etc/app/config"));
    }
}
