//! Configuration type definitions

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults::*;
use crate::appdata::OutputLayout;

/// Repository layout and run options.
///
/// Every field is optional in the file; accessors fall back to defaults.
/// Paths may start with `~`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apps_index_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources_dir: Option<String>,
    /// Glob relative to `sources_dir`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intermediate_pattern: Option<String>,
    /// Drop numpad interpretations of tokens that don't say "numpad"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explicit_numpad_keys: Option<bool>,
    /// Optional JSONL log file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<String>,
}

impl Config {
    /// Returns the dataset output directory, or DEFAULT_OUTPUT_DIR if not configured
    pub fn get_output_dir(&self) -> PathBuf {
        expand(self.output_dir.as_deref().unwrap_or(DEFAULT_OUTPUT_DIR))
    }

    /// Returns the site index path, or DEFAULT_APPS_INDEX_PATH if not configured
    pub fn get_apps_index_path(&self) -> PathBuf {
        expand(
            self.apps_index_path
                .as_deref()
                .unwrap_or(DEFAULT_APPS_INDEX_PATH),
        )
    }

    pub fn get_sources_dir(&self) -> PathBuf {
        expand(self.sources_dir.as_deref().unwrap_or(DEFAULT_SOURCES_DIR))
    }

    pub fn get_intermediate_pattern(&self) -> &str {
        self.intermediate_pattern
            .as_deref()
            .unwrap_or(DEFAULT_INTERMEDIATE_PATTERN)
    }

    /// Full glob for every intermediate document under the sources dir
    pub fn intermediate_glob(&self) -> String {
        self.get_sources_dir()
            .join(self.get_intermediate_pattern())
            .to_string_lossy()
            .to_string()
    }

    pub fn get_explicit_numpad_keys(&self) -> bool {
        self.explicit_numpad_keys
            .unwrap_or(DEFAULT_EXPLICIT_NUMPAD_KEYS)
    }

    pub fn get_log_file(&self) -> Option<PathBuf> {
        self.log_file.as_deref().map(expand)
    }

    pub fn output_layout(&self) -> OutputLayout {
        OutputLayout::new(self.get_output_dir(), self.get_apps_index_path())
    }
}

fn expand(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}
