// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for building configuration end to end.
//!
//! These tests load schemas from YAML files and build against in-memory
//! environments, covering the common start-up scenarios.

mod common;

use common::{init_tracing, write_schema, RecordingEnv, EXAMPLE_SCHEMA};
use envschema::adapters::{EnvVarAdapter, YamlSchemaLoader};
use envschema::domain::{ConfigError, ConfigValue, KeyDecl, Schema, Validator, ValueType};
use envschema::ports::SchemaLoader;
use envschema::service::{load, ConfigBuilder, Settings};

fn example_settings(prefix: &str) -> (tempfile::TempDir, Settings) {
    let (dir, _) = write_schema("config.yaml", EXAMPLE_SCHEMA);
    let settings = Settings {
        schema_path: dir.path().join("config"),
        prefix: prefix.to_string(),
    };
    (dir, settings)
}

#[test]
fn test_example_scenario_default_prefix() {
    init_tracing();
    let (_dir, settings) = example_settings("APP");
    let env = RecordingEnv::new(&[
        ("APP_STR", "hello"),
        ("APP_BOOL", "false"),
        ("APP_INT", "1234"),
        ("APP_NUM", "3.14"),
        ("APP_ENM", "b"),
    ]);

    let config = load(&settings, &YamlSchemaLoader::new(), &env).unwrap();

    assert_eq!(config.get("STR"), Some(&ConfigValue::String("hello".to_string())));
    assert_eq!(config.get("BOOL"), Some(&ConfigValue::Boolean(false)));
    assert_eq!(config.get("INT"), Some(&ConfigValue::Integer(1234)));
    assert_eq!(config.get("NUM"), Some(&ConfigValue::Number(3.14)));
    assert_eq!(config.get("ENM"), Some(&ConfigValue::Enum("b".to_string())));
    assert_eq!(
        env.reads(),
        vec!["APP_STR", "APP_BOOL", "APP_INT", "APP_NUM", "APP_ENM"]
    );
}

#[test]
fn test_custom_prefix_produces_identical_config() {
    let (_dir, default_settings) = example_settings("APP");
    let default_env = EnvVarAdapter::from_pairs([
        ("APP_STR", "hello"),
        ("APP_BOOL", "false"),
        ("APP_INT", "1234"),
        ("APP_NUM", "3.14"),
        ("APP_ENM", "b"),
    ]);
    let expected = load(&default_settings, &YamlSchemaLoader::new(), &default_env).unwrap();

    let env = EnvVarAdapter::from_pairs([
        ("ENVSCHEMA_PATH", default_settings.schema_path.to_str().unwrap()),
        ("ENVSCHEMA_PREFIX", "FOO"),
        ("FOO_STR", "hello"),
        ("FOO_BOOL", "false"),
        ("FOO_INT", "1234"),
        ("FOO_NUM", "3.14"),
        ("FOO_ENM", "b"),
    ]);
    let settings = Settings::from_env(&env);
    assert_eq!(settings.prefix, "FOO");

    let config = load(&settings, &YamlSchemaLoader::new(), &env).unwrap();
    assert_eq!(config, expected);
}

#[test]
fn test_default_prefix_ignored_when_overridden() {
    let (_dir, settings) = example_settings("FOO");
    let env = EnvVarAdapter::from_pairs([
        ("APP_STR", "hello"),
        ("APP_BOOL", "false"),
        ("APP_INT", "1234"),
        ("APP_NUM", "3.14"),
        ("APP_ENM", "b"),
    ]);

    let err = load(&settings, &YamlSchemaLoader::new(), &env).unwrap_err();
    assert_eq!(err.to_string(), "CONFIG: Environment variable FOO_STR is missing");
}

#[test]
fn test_missing_schema_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let settings = Settings {
        schema_path: dir.path().join("config"),
        ..Settings::default()
    };

    let err = load(&settings, &YamlSchemaLoader::new(), &RecordingEnv::new(&[])).unwrap_err();
    assert!(matches!(err, ConfigError::SchemaLoad { .. }));
    assert!(err.to_string().contains("via ENVSCHEMA_PATH"));
}

#[test]
fn test_build_stops_at_first_failure() {
    let schema = Schema::new()
        .with("A", "string")
        .with("B", "integer")
        .with("C", "string");
    let env = RecordingEnv::new(&[("APP_A", "x"), ("APP_B", "nope"), ("APP_C", "y")]);

    let err = ConfigBuilder::new(&schema).build(&env).unwrap_err();
    assert_eq!(
        err.to_string(),
        "CONFIG: Error parsing environment variable APP_B: Cannot convert to an integer"
    );
    assert_eq!(env.reads(), vec!["APP_A", "APP_B"]);
}

#[test]
fn test_yaml_env_override_and_pattern() {
    let yaml = r#"
DATABASE:
  type: string
  env: DATABASE_URL
  pattern: "^postgres://"
WORKERS:
  type: integer
  pattern: "^[1-9][0-9]*$"
"#;
    let (_dir, path) = write_schema("schema.yml", yaml);
    let schema = YamlSchemaLoader::new().load(&path).unwrap();

    let env = EnvVarAdapter::from_pairs([
        ("DATABASE_URL", "postgres://db/app"),
        ("APP_WORKERS", "4"),
    ]);
    let config = ConfigBuilder::new(&schema).build(&env).unwrap();
    assert_eq!(config.get_str("DATABASE"), Some("postgres://db/app"));
    assert_eq!(config.get_i64("WORKERS"), Some(4));

    let env = EnvVarAdapter::from_pairs([
        ("DATABASE_URL", "postgres://db/app"),
        ("APP_WORKERS", "0"),
    ]);
    let err = ConfigBuilder::new(&schema).build(&env).unwrap_err();
    assert_eq!(
        err.to_string(),
        "CONFIG: Error parsing environment variable APP_WORKERS: Value did not pass validator function"
    );
}

#[test]
fn test_structured_enum_with_validator_and_override() {
    let schema = Schema::new().with(
        "level",
        KeyDecl::new(ValueType::Enum)
            .env("LOG_LEVEL")
            .values(["debug", "info", "warn", "error"])
            .validator(Validator::new(|raw| raw != "debug")),
    );

    let config = ConfigBuilder::new(&schema)
        .build(&EnvVarAdapter::from_pairs([("LOG_LEVEL", "warn")]))
        .unwrap();
    assert_eq!(config.get_str("level"), Some("warn"));

    let err = ConfigBuilder::new(&schema)
        .build(&EnvVarAdapter::from_pairs([("LOG_LEVEL", "debug")]))
        .unwrap_err();
    assert!(err.to_string().ends_with("Value did not pass validator function"));

    let err = ConfigBuilder::new(&schema)
        .build(&EnvVarAdapter::from_pairs([("LOG_LEVEL", "trace")]))
        .unwrap_err();
    assert!(err.to_string().ends_with("Value not found in enumeration values"));
}

#[test]
fn test_duration_keys() {
    let (_dir, path) = write_schema("config.yaml", "TTL: duration\nRETENTION: duration\n");
    let schema = YamlSchemaLoader::new().load(&path).unwrap();
    let env = EnvVarAdapter::from_pairs([("APP_TTL", "172800000"), ("APP_RETENTION", "2y")]);

    let config = ConfigBuilder::new(&schema).build(&env).unwrap();

    let ttl = config.get_duration("TTL").unwrap();
    assert_eq!(ttl.as_milliseconds(), 172_800_000);
    assert_eq!(ttl.as_seconds(), 172_800);
    assert_eq!(ttl.as_minutes(), 2880);
    assert_eq!(ttl.as_hours(), 48);

    let retention = config.get_duration("RETENTION").unwrap();
    assert_eq!(retention.as_days(), 731);
    assert_eq!(retention.as_years(), 2);
}

#[test]
fn test_zero_duration_rejected() {
    let schema = Schema::new().with("TTL", "duration");
    let err = ConfigBuilder::new(&schema)
        .build(&EnvVarAdapter::from_pairs([("APP_TTL", "0")]))
        .unwrap_err();
    assert!(err
        .to_string()
        .starts_with("CONFIG: Error parsing environment variable APP_TTL: Cannot convert to duration"));
}

#[test]
fn test_config_serializes_in_schema_order() {
    let (_dir, path) = write_schema("config.yaml", EXAMPLE_SCHEMA);
    let schema = YamlSchemaLoader::new().load(&path).unwrap();
    let env = EnvVarAdapter::from_pairs([
        ("APP_STR", "hello"),
        ("APP_BOOL", "y"),
        ("APP_INT", "-7"),
        ("APP_NUM", "0.5"),
        ("APP_ENM", "c"),
    ]);
    let config = ConfigBuilder::new(&schema).build(&env).unwrap();

    let dumped = serde_yaml::to_string(&config).unwrap();
    assert_eq!(dumped, "STR: hello\nBOOL: true\nINT: -7\nNUM: 0.5\nENM: c\n");
}

#[test]
fn test_process_environment_adapter() {
    std::env::set_var("ENVSCHEMA_IT_GREETING", "hi");
    let schema = Schema::new().with(
        "greeting",
        KeyDecl::new(ValueType::String).env("ENVSCHEMA_IT_GREETING"),
    );

    let config = ConfigBuilder::new(&schema).build(&EnvVarAdapter::new()).unwrap();
    std::env::remove_var("ENVSCHEMA_IT_GREETING");

    assert_eq!(config.get_str("greeting"), Some("hi"));
}
