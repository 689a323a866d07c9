// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared fixtures for integration tests.

use envschema::ports::EnvSource;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tempfile::TempDir;

/// An in-memory environment that records which variables were read.
#[derive(Debug, Default)]
pub struct RecordingEnv {
    values: HashMap<String, String>,
    reads: Mutex<Vec<String>>,
}

impl RecordingEnv {
    /// Creates an environment from name/value pairs.
    pub fn new(pairs: &[(&str, &str)]) -> Self {
        Self {
            values: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            reads: Mutex::new(Vec::new()),
        }
    }

    /// Returns the variable names looked up so far, in order.
    #[allow(dead_code)]
    pub fn reads(&self) -> Vec<String> {
        self.reads.lock().unwrap().clone()
    }
}

impl EnvSource for RecordingEnv {
    fn name(&self) -> &str {
        "recording"
    }

    fn var(&self, name: &str) -> Option<String> {
        self.reads.lock().unwrap().push(name.to_string());
        self.values.get(name).cloned()
    }
}

/// The schema used by the end-to-end scenarios.
#[allow(dead_code)]
pub const EXAMPLE_SCHEMA: &str = "\
STR: string
BOOL: boolean
INT: integer
NUM: number
ENM: [a, b, c]
";

/// Writes `content` to `<dir>/<name>` and returns the directory guard and path.
#[allow(dead_code)]
pub fn write_schema(name: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    (dir, path)
}

/// Installs a test-friendly tracing subscriber once per test binary.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}
