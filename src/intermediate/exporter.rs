//! Conversion of intermediate data into per-platform datasets.

use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use super::types::IntermediateDataset;
use crate::appdata::{ApplicationDataset, OutputLayout};
use crate::diagnostics::DiagnosticSink;
use crate::error::Result;
use crate::shortcuts::{parse_combo_with, ShortcutDraft};

/// Builds one [`ApplicationDataset`] per supported platform.
#[derive(Debug)]
pub struct IntermediateExporter {
    data: IntermediateDataset,
    explicit_numpad: bool,
}

impl IntermediateExporter {
    pub fn new(data: IntermediateDataset, explicit_numpad: bool) -> Self {
        Self {
            data,
            explicit_numpad,
        }
    }

    pub fn from_file(path: &Path, explicit_numpad: bool) -> Result<Self> {
        Ok(Self::new(IntermediateDataset::load(path)?, explicit_numpad))
    }

    pub fn data(&self) -> &IntermediateDataset {
        &self.data
    }

    /// Parse every shortcut for every supported platform.
    ///
    /// Duplicate combos within a context are rejected in document order, so
    /// the earlier shortcut keeps the binding.
    pub fn build(&self, sink: &mut dyn DiagnosticSink) -> Vec<ApplicationDataset> {
        let data = &self.data;
        data.supported_platforms
            .iter()
            .map(|&platform| {
                info!(app = %data.app_name, %platform, "Parsing intermediate data");
                let mut dataset = ApplicationDataset::new(
                    data.app_name.as_str(),
                    data.version.as_str(),
                    platform,
                    data.default_context.as_str(),
                );
                for context in data.contexts() {
                    let target = dataset.context_mut(context.name());
                    for shortcut in context.shortcuts() {
                        let raw = shortcut.keys_for(platform);
                        for candidate in parse_combo_with(&shortcut.name, raw, sink) {
                            let draft = ShortcutDraft::new(shortcut.name.as_str(), candidate.key)
                                .with_mods(candidate.mods);
                            target.add_draft(&draft, true, self.explicit_numpad, sink);
                        }
                    }
                }
                dataset
            })
            .collect()
    }

    /// Build and write every dataset. Returns the paths written; empty
    /// datasets are skipped.
    #[instrument(skip_all, fields(app = %self.data.app_name))]
    pub fn export(
        &self,
        layout: &OutputLayout,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<Vec<PathBuf>> {
        let mut written = Vec::new();
        for dataset in self.build(sink) {
            if let Some(path) = dataset.write(layout, sink)? {
                written.push(path);
            }
        }
        Ok(written)
    }
}

#[cfg(test)]
#[path = "exporter_tests.rs"]
mod tests;
