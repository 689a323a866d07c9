// SPDX-License-Identifier: MIT OR Apache-2.0

//! Declarative schema types.
//!
//! A [`Schema`] maps logical keys to [`TypeDecl`]s. A declaration is either a
//! bare type name, a bare list of allowed values (an enumeration), or a
//! structured [`KeyDecl`] carrying an environment variable override, enum values
//! and a validator.

use crate::domain::config_key::ConfigKey;
use regex::Regex;
use std::fmt;
use std::sync::Arc;

static ENUM_TYPE: ValueType = ValueType::Enum;

/// The type a raw environment value is coerced into.
///
/// Type names that are not recognised are kept as [`ValueType::Unrecognized`]
/// so the build can report them against the variable they were declared for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValueType {
    /// The raw string, unchanged.
    String,
    /// `true|yes|y|1` or `false|no|n|0`, case-insensitive.
    Boolean,
    /// A signed base-10 integer.
    Integer,
    /// A signed decimal number.
    Number,
    /// A span of time, see [`Duration`](crate::domain::Duration).
    Duration,
    /// One of a declared list of strings.
    Enum,
    /// A type name nothing knows how to parse.
    Unrecognized(String),
}

impl ValueType {
    /// Maps a type name from a schema to a `ValueType`.
    ///
    /// # Examples
    ///
    /// ```
    /// use envschema::domain::ValueType;
    ///
    /// assert_eq!(ValueType::from_name("integer"), ValueType::Integer);
    /// assert_eq!(
    ///     ValueType::from_name("uuid"),
    ///     ValueType::Unrecognized("uuid".to_string())
    /// );
    /// ```
    pub fn from_name(name: &str) -> Self {
        match name {
            "string" => ValueType::String,
            "boolean" => ValueType::Boolean,
            "integer" => ValueType::Integer,
            "number" => ValueType::Number,
            "duration" => ValueType::Duration,
            "enum" => ValueType::Enum,
            other => ValueType::Unrecognized(other.to_string()),
        }
    }

    /// Returns the schema name of this type.
    pub fn name(&self) -> &str {
        match self {
            ValueType::String => "string",
            ValueType::Boolean => "boolean",
            ValueType::Integer => "integer",
            ValueType::Number => "number",
            ValueType::Duration => "duration",
            ValueType::Enum => "enum",
            ValueType::Unrecognized(name) => name,
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A predicate over the raw string value of a key.
///
/// # Examples
///
/// ```
/// use envschema::domain::Validator;
///
/// let even = Validator::new(|raw| raw.parse::<i64>().map(|n| n % 2 == 0).unwrap_or(false));
/// assert!(even.check("4"));
/// assert!(!even.check("5"));
///
/// let host = Validator::pattern("^[a-z.]+$").unwrap();
/// assert!(host.check("example.com"));
/// ```
#[derive(Clone)]
pub struct Validator(Arc<dyn Fn(&str) -> bool + Send + Sync>);

impl Validator {
    /// Wraps a closure as a validator.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Validator(Arc::new(f))
    }

    /// Builds a validator that accepts values matching a regular expression.
    pub fn pattern(pattern: &str) -> Result<Self, regex::Error> {
        let regex = Regex::new(pattern)?;
        Ok(Self::new(move |raw| regex.is_match(raw)))
    }

    /// Runs the predicate.
    pub fn check(&self, raw: &str) -> bool {
        (self.0)(raw)
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Validator(..)")
    }
}

/// A structured declaration for one key.
///
/// # Examples
///
/// ```
/// use envschema::domain::{KeyDecl, ValueType};
///
/// let decl = KeyDecl::new(ValueType::Enum)
///     .env("LOG_LEVEL")
///     .values(["debug", "info", "warn"]);
/// assert_eq!(decl.env_override(), Some("LOG_LEVEL"));
/// ```
#[derive(Clone, Debug)]
pub struct KeyDecl {
    value_type: ValueType,
    env: Option<String>,
    values: Option<Vec<String>>,
    validator: Option<Validator>,
}

impl KeyDecl {
    /// Creates a declaration of the given type with no overrides.
    pub fn new(value_type: ValueType) -> Self {
        Self {
            value_type,
            env: None,
            values: None,
            validator: None,
        }
    }

    /// Reads the key from `name` instead of the derived variable name.
    ///
    /// An empty `name` keeps the derived name.
    pub fn env(mut self, name: impl Into<String>) -> Self {
        self.env = Some(name.into());
        self
    }

    /// Sets the allowed values of an `enum` declaration.
    pub fn values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Attaches a validator run against the raw value before parsing.
    pub fn validator(mut self, validator: Validator) -> Self {
        self.validator = Some(validator);
        self
    }

    /// Returns the declared type.
    pub fn value_type(&self) -> &ValueType {
        &self.value_type
    }

    /// Returns the environment variable override, if any.
    pub fn env_override(&self) -> Option<&str> {
        self.env.as_deref()
    }
}

/// The declaration of a single schema entry.
#[derive(Clone, Debug)]
pub enum TypeDecl {
    /// A bare type name.
    Primitive(ValueType),
    /// A bare list of allowed values.
    Enum(Vec<String>),
    /// A structured declaration.
    Structured(KeyDecl),
}

/// A declaration normalized against a key and prefix.
#[derive(Clone, Debug)]
pub struct ResolvedDecl<'a> {
    /// The type to coerce into.
    pub value_type: &'a ValueType,
    /// The environment variable to read.
    pub env_key: String,
    /// Allowed values for enumerations.
    pub values: Option<&'a [String]>,
    /// Validator to run before parsing.
    pub validator: Option<&'a Validator>,
}

impl TypeDecl {
    /// Normalizes this declaration into the variable name and rules for `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use envschema::domain::{ConfigKey, TypeDecl};
    ///
    /// let decl = TypeDecl::from(["a", "b"]);
    /// let resolved = decl.resolve(&ConfigKey::from("mode"), "APP");
    /// assert_eq!(resolved.env_key, "APP_MODE");
    /// assert_eq!(resolved.values.unwrap().len(), 2);
    /// ```
    pub fn resolve(&self, key: &ConfigKey, prefix: &str) -> ResolvedDecl<'_> {
        match self {
            TypeDecl::Primitive(value_type) => ResolvedDecl {
                value_type,
                env_key: key.env_var_name(prefix),
                values: None,
                validator: None,
            },
            TypeDecl::Enum(values) => ResolvedDecl {
                value_type: &ENUM_TYPE,
                env_key: key.env_var_name(prefix),
                values: Some(values.as_slice()),
                validator: None,
            },
            TypeDecl::Structured(decl) => ResolvedDecl {
                value_type: &decl.value_type,
                env_key: decl
                    .env
                    .clone()
                    .filter(|env| !env.is_empty())
                    .unwrap_or_else(|| key.env_var_name(prefix)),
                values: decl.values.as_deref(),
                validator: decl.validator.as_ref(),
            },
        }
    }
}

impl From<ValueType> for TypeDecl {
    fn from(value_type: ValueType) -> Self {
        TypeDecl::Primitive(value_type)
    }
}

impl From<&str> for TypeDecl {
    fn from(name: &str) -> Self {
        TypeDecl::Primitive(ValueType::from_name(name))
    }
}

impl From<Vec<String>> for TypeDecl {
    fn from(values: Vec<String>) -> Self {
        TypeDecl::Enum(values)
    }
}

impl<const N: usize> From<[&str; N]> for TypeDecl {
    fn from(values: [&str; N]) -> Self {
        TypeDecl::Enum(values.iter().map(|v| v.to_string()).collect())
    }
}

impl From<KeyDecl> for TypeDecl {
    fn from(decl: KeyDecl) -> Self {
        TypeDecl::Structured(decl)
    }
}

/// An ordered mapping from logical key to declaration.
///
/// Entries keep their declaration order; that order is the build order.
///
/// # Examples
///
/// ```
/// use envschema::domain::Schema;
///
/// let schema = Schema::new()
///     .with("STR", "string")
///     .with("ENM", ["a", "b", "c"]);
/// assert_eq!(schema.len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Schema {
    entries: Vec<(ConfigKey, TypeDecl)>,
}

impl Schema {
    /// Creates an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry, builder style.
    pub fn with(mut self, key: impl Into<ConfigKey>, decl: impl Into<TypeDecl>) -> Self {
        self.insert(key, decl);
        self
    }

    /// Adds an entry. Redeclaring a key replaces it in place.
    pub fn insert(&mut self, key: impl Into<ConfigKey>, decl: impl Into<TypeDecl>) {
        let key = key.into();
        let decl = decl.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = decl,
            None => self.entries.push((key, decl)),
        }
    }

    /// Returns the declaration for `key`.
    pub fn get(&self, key: &str) -> Option<&TypeDecl> {
        self.entries
            .iter()
            .find(|(k, _)| k.as_str() == key)
            .map(|(_, decl)| decl)
    }

    /// Iterates entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&ConfigKey, &TypeDecl)> {
        self.entries.iter().map(|(k, d)| (k, d))
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the schema declares nothing.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
