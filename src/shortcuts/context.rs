//! Per-context shortcut storage with duplicate combo detection.
//!
//! Uses Vec for insertion order and HashMap for O(1) combo lookup.

use std::collections::HashMap;

use tracing::debug;

use super::types::{Shortcut, ShortcutDraft};
use crate::diagnostics::{Diagnostic, DiagnosticSink};

/// A named group of shortcuts active in the same application state
/// ("Global", "Edit Mode", ...).
#[derive(Clone, Debug, Default)]
pub struct ShortcutContext {
    name: String,
    shortcuts: Vec<Shortcut>,
    /// combo key -> signature of the shortcut that claimed it
    combo_lookup: HashMap<String, String>,
    signatures: Vec<String>,
}

impl ShortcutContext {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add a canonical shortcut. Returns whether it was accepted.
    ///
    /// With `dedupe`, a shortcut whose combo is already claimed in this
    /// context is rejected and reported; the first writer wins.
    pub fn add(&mut self, shortcut: Shortcut, dedupe: bool, sink: &mut dyn DiagnosticSink) -> bool {
        let combo = shortcut.combo_key();
        if dedupe {
            if let Some(existing) = self.combo_lookup.get(&combo) {
                sink.report(Diagnostic::DuplicateCombo {
                    context: self.name.clone(),
                    combo,
                    existing: existing.clone(),
                    rejected: shortcut.name.clone(),
                });
                return false;
            }
        }

        let signature = shortcut.signature();
        debug!(context = %self.name, combo = %combo, name = %shortcut.name, "Adding shortcut");
        self.combo_lookup.entry(combo).or_insert_with(|| signature.clone());
        self.signatures.push(signature);
        self.shortcuts.push(shortcut);
        true
    }

    /// Expand a draft and add every resulting shortcut. Returns how many
    /// were accepted.
    pub fn add_draft(
        &mut self,
        draft: &ShortcutDraft,
        dedupe: bool,
        numpad_explicit: bool,
        sink: &mut dyn DiagnosticSink,
    ) -> usize {
        let mut added = 0;
        for shortcut in draft.expand(numpad_explicit, sink) {
            if self.add(shortcut, dedupe, sink) {
                added += 1;
            }
        }
        added
    }

    /// Signature of the shortcut holding `combo_key`, if any.
    pub fn claimed_by(&self, combo_key: &str) -> Option<&str> {
        self.combo_lookup.get(combo_key).map(String::as_str)
    }

    /// Human-readable signatures in insertion order.
    pub fn signatures(&self) -> &[String] {
        &self.signatures
    }

    pub fn shortcuts(&self) -> &[Shortcut] {
        &self.shortcuts
    }

    pub fn len(&self) -> usize {
        self.shortcuts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shortcuts.is_empty()
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
