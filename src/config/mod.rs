//! Configuration module - repository layout and run options
//!
//! This module provides functionality for:
//! - Loading configuration from `shmap.json`
//! - Default values for all settings
//! - Type definitions for config structures
//!
//! # Module Structure
//!
//! - `defaults` - All default constant values
//! - `types` - The `Config` struct and its accessors
//! - `loader` - File system loading and parsing

mod defaults;
mod loader;
mod types;

pub use types::Config;

pub use loader::{default_config_path, load_config};

#[cfg(test)]
pub use defaults::{
    DEFAULT_APPS_INDEX_PATH, DEFAULT_INTERMEDIATE_PATTERN, DEFAULT_OUTPUT_DIR, DEFAULT_SOURCES_DIR,
};

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
