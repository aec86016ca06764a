//! Canonical per-platform application datasets.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::PathBuf;

use tracing::{info, instrument};

use super::index::regenerate_index;
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::error::{MapperError, Result};
use crate::shortcuts::{Modifier, Platform, ShortcutContext};

/// Where datasets and the site index are written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputLayout {
    pub output_dir: PathBuf,
    pub index_path: PathBuf,
}

impl OutputLayout {
    pub fn new(output_dir: impl Into<PathBuf>, index_path: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            index_path: index_path.into(),
        }
    }
}

/// All canonical shortcuts of one application version on one platform.
#[derive(Clone, Debug)]
pub struct ApplicationDataset {
    pub name: String,
    pub version: String,
    pub os: Platform,
    pub default_context: String,
    contexts: BTreeMap<String, ShortcutContext>,
}

impl ApplicationDataset {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        os: Platform,
        default_context: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            os,
            default_context: default_context.into(),
            contexts: BTreeMap::new(),
        }
    }

    /// Get a context by name, creating it if missing.
    pub fn context_mut(&mut self, name: &str) -> &mut ShortcutContext {
        self.contexts
            .entry(name.to_string())
            .or_insert_with(|| ShortcutContext::new(name))
    }

    pub fn context(&self, name: &str) -> Option<&ShortcutContext> {
        self.contexts.get(name)
    }

    /// Contexts sorted by name.
    pub fn contexts(&self) -> impl Iterator<Item = &ShortcutContext> {
        self.contexts.values()
    }

    /// Every modifier used by any shortcut, sorted.
    pub fn mods_used(&self) -> BTreeSet<Modifier> {
        self.contexts
            .values()
            .flat_map(|context| context.shortcuts())
            .flat_map(|shortcut| shortcut.mods.iter().copied())
            .collect()
    }

    /// True when no context holds a shortcut.
    pub fn is_empty(&self) -> bool {
        self.contexts.values().all(ShortcutContext::is_empty)
    }

    /// `<app>_<version>_<os>.json`, lowercased, spaces in the app name
    /// replaced by dashes.
    pub fn file_name(&self) -> String {
        format!(
            "{}_{}_{}.json",
            self.name.to_lowercase().replace(' ', "-"),
            self.version,
            self.os
        )
        .to_lowercase()
    }

    /// Serialize into `layout.output_dir` and regenerate the site index.
    ///
    /// Returns `Ok(None)` without touching the filesystem when the dataset is
    /// empty.
    #[instrument(skip_all, fields(app = %self.name, version = %self.version, os = %self.os))]
    pub fn write(
        &self,
        layout: &OutputLayout,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<Option<PathBuf>> {
        if !layout.output_dir.is_dir() {
            return Err(MapperError::NotADirectory(
                layout.output_dir.display().to_string(),
            ));
        }
        if self.version.trim().is_empty() {
            return Err(MapperError::MissingVersion(self.name.clone()));
        }
        if self.is_empty() {
            sink.report(Diagnostic::EmptyDataset {
                app: self.name.clone(),
                platform: self.os.to_string(),
            });
            return Ok(None);
        }

        let path = layout.output_dir.join(self.file_name());
        info!(path = %path.display(), "Writing application dataset");
        fs::write(&path, self.to_json()).map_err(|e| MapperError::write(&path, e))?;

        regenerate_index(layout)?;
        Ok(Some(path))
    }
}

#[cfg(test)]
#[path = "dataset_tests.rs"]
mod tests;
