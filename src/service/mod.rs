// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer that builds configuration from a schema.
//!
//! This module provides the build loop and the process start-up helpers.

pub mod bootstrap;
pub mod builder;

pub use bootstrap::{config, init_with, load, Settings};
#[cfg(all(feature = "env", feature = "yaml"))]
pub use bootstrap::init;
pub use builder::{build, ConfigBuilder, DEFAULT_PREFIX};
