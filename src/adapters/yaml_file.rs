// SPDX-License-Identifier: MIT OR Apache-2.0

//! YAML schema loader adapter.
//!
//! This module provides a loader that reads a [`Schema`] from a YAML file. The
//! file is a mapping from logical key to declaration:
//!
//! ```yaml
//! STR: string
//! PORT: integer
//! MODE: [dev, staging, prod]
//! DATABASE:
//!   type: string
//!   env: DATABASE_URL
//!   pattern: "^postgres://"
//! ```
//!
//! Key order in the file is the build order.

use crate::domain::{ConfigError, KeyDecl, Result, Schema, TypeDecl, Validator, ValueType};
use crate::ports::SchemaLoader;
use crate::service::bootstrap::PATH_VAR;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Maximum allowed file size for YAML schema files (10MB)
/// This prevents denial of service attacks via extremely large files
const MAX_YAML_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Extensions tried, in order, when the configured path is not a file itself.
const SCHEMA_EXTENSIONS: [&str; 2] = ["yaml", "yml"];

/// One declaration as written in the file.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawDecl {
    Name(String),
    Values(Vec<String>),
    Structured(RawKeyDecl),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawKeyDecl {
    #[serde(rename = "type")]
    value_type: String,
    #[serde(default)]
    env: Option<String>,
    #[serde(default)]
    values: Option<Vec<String>>,
    #[serde(default)]
    pattern: Option<String>,
}

fn schema_error(
    path: &Path,
    message: impl Into<String>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
) -> ConfigError {
    ConfigError::SchemaLoad {
        path: path.to_path_buf(),
        message: message.into(),
        source,
    }
}

/// Loads schemas from YAML files.
///
/// The configured path is used as-is when it names a file; otherwise
/// `<path>.yaml` and then `<path>.yml` are tried. Relative paths resolve
/// against the current working directory.
///
/// # Examples
///
/// ```rust
/// use envschema::adapters::YamlSchemaLoader;
/// use std::path::Path;
///
/// let schema = YamlSchemaLoader::new()
///     .parse("PORT: integer\nMODE: [dev, prod]\n", Path::new("inline"))
///     .unwrap();
/// assert_eq!(schema.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct YamlSchemaLoader;

impl YamlSchemaLoader {
    /// Creates a new YAML schema loader.
    pub fn new() -> Self {
        YamlSchemaLoader
    }

    /// Finds the schema file for `path`, trying the known extensions.
    pub fn resolve_path(path: &Path) -> Option<PathBuf> {
        if path.is_file() {
            return Some(path.to_path_buf());
        }
        SCHEMA_EXTENSIONS.iter().find_map(|ext| {
            let mut candidate = path.as_os_str().to_owned();
            candidate.push(".");
            candidate.push(ext);
            let candidate = PathBuf::from(candidate);
            candidate.is_file().then_some(candidate)
        })
    }

    /// Parses schema text. `origin` is only used in error messages.
    pub fn parse(&self, content: &str, origin: &Path) -> Result<Schema> {
        let mapping: serde_yaml::Mapping = serde_yaml::from_str(content).map_err(|e| {
            schema_error(
                origin,
                format!("Failed to parse YAML: {}", e),
                Some(Box::new(e)),
            )
        })?;

        let mut schema = Schema::new();
        for (key, value) in mapping {
            let key = key
                .as_str()
                .ok_or_else(|| schema_error(origin, "schema keys must be strings", None))?
                .to_string();
            let raw: RawDecl = serde_yaml::from_value(value).map_err(|e| {
                schema_error(
                    origin,
                    format!("invalid declaration for key '{}': {}", key, e),
                    Some(Box::new(e)),
                )
            })?;
            let decl = Self::convert(&key, raw, origin)?;
            schema.insert(key, decl);
        }

        tracing::debug!("Parsed schema with {} keys from {}", schema.len(), origin.display());
        Ok(schema)
    }

    fn convert(key: &str, raw: RawDecl, origin: &Path) -> Result<TypeDecl> {
        let decl = match raw {
            RawDecl::Name(name) => TypeDecl::Primitive(ValueType::from_name(&name)),
            RawDecl::Values(values) => TypeDecl::Enum(values),
            RawDecl::Structured(raw) => {
                let mut decl = KeyDecl::new(ValueType::from_name(&raw.value_type));
                if let Some(env) = raw.env {
                    decl = decl.env(env);
                }
                if let Some(values) = raw.values {
                    decl = decl.values(values);
                }
                if let Some(pattern) = raw.pattern {
                    let validator = Validator::pattern(&pattern).map_err(|e| {
                        schema_error(
                            origin,
                            format!("invalid pattern for key '{}': {}", key, e),
                            Some(Box::new(e)),
                        )
                    })?;
                    decl = decl.validator(validator);
                }
                TypeDecl::Structured(decl)
            }
        };
        Ok(decl)
    }
}

impl SchemaLoader for YamlSchemaLoader {
    fn load(&self, path: &Path) -> Result<Schema> {
        let file_path = Self::resolve_path(path).ok_or_else(|| {
            schema_error(
                path,
                format!(
                    "Expecting a schema file at this path (or with a .{} extension), \
                     or an explicit location via {}",
                    SCHEMA_EXTENSIONS.join("/."),
                    PATH_VAR
                ),
                None,
            )
        })?;

        // Canonicalize path to prevent directory traversal attacks
        let canonical_path = file_path
            .canonicalize()
            .map_err(|e| schema_error(&file_path, "Invalid or inaccessible path", Some(Box::new(e))))?;

        // Check file size before reading to prevent DoS via large files
        let metadata = fs::metadata(&canonical_path).map_err(|e| {
            schema_error(&canonical_path, "Failed to read file metadata", Some(Box::new(e)))
        })?;

        if metadata.len() > MAX_YAML_FILE_SIZE {
            return Err(schema_error(
                &canonical_path,
                format!(
                    "Schema file too large: {} bytes (max {} bytes)",
                    metadata.len(),
                    MAX_YAML_FILE_SIZE
                ),
                None,
            ));
        }

        let content = fs::read_to_string(&canonical_path).map_err(|e| {
            schema_error(&canonical_path, "Failed to read schema file", Some(Box::new(e)))
        })?;

        self.parse(&content, &canonical_path)
    }
}
