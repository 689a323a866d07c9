// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the trait definitions (ports) the build depends on. These
//! traits are implemented by adapters in the adapters layer.

pub mod loader;
pub mod source;

// Re-export commonly used types
pub use loader::SchemaLoader;
pub use source::EnvSource;
