//! Turning authored drafts into canonical shortcuts.

use std::collections::BTreeSet;

use tracing::trace;

use super::types::{Modifier, Shortcut, ShortcutDraft};
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::keynames::{resolve, KeyName};

impl ShortcutDraft {
    /// Canonicalize this draft.
    ///
    /// A token that resolves to several key names yields one shortcut per
    /// name (`+` → `PLUS` and `NUMPAD_PLUS`). Modifiers must resolve to
    /// exactly one modifier-class name; anything else drops the whole draft
    /// and reports why. With `any_mod`, each modifier gets its own shortcut.
    pub fn expand(&self, numpad_explicit: bool, sink: &mut dyn DiagnosticSink) -> Vec<Shortcut> {
        let Some(mods) = self.resolve_mods(sink) else {
            return Vec::new();
        };

        let keys = resolve(&self.key, numpad_explicit);
        if keys.is_empty() {
            sink.report(Diagnostic::UnknownKey {
                shortcut: self.name.clone(),
                token: self.key.clone(),
            });
            return Vec::new();
        }

        let shortcuts: Vec<Shortcut> = if self.any_mod && !mods.is_empty() {
            keys.iter()
                .flat_map(|&key| {
                    mods.iter()
                        .map(move |&modifier| Shortcut::new(self.name.as_str(), key, [modifier]))
                })
                .collect()
        } else {
            keys.iter()
                .map(|&key| Shortcut::new(self.name.as_str(), key, mods.iter().copied()))
                .collect()
        };

        trace!(
            name = %self.name,
            key = %self.key,
            count = shortcuts.len(),
            "Expanded shortcut draft"
        );
        shortcuts
    }

    fn resolve_mods(&self, sink: &mut dyn DiagnosticSink) -> Option<BTreeSet<Modifier>> {
        let mut mods = BTreeSet::new();
        for token in &self.mods {
            // Modifier tokens never mean a numpad key, so filtering is irrelevant here
            let names = resolve(token, false);
            let name = match names.as_slice() {
                [] => {
                    sink.report(Diagnostic::UnknownModifier {
                        shortcut: self.name.clone(),
                        token: token.clone(),
                    });
                    return None;
                }
                [name] => *name,
                _ => {
                    sink.report(Diagnostic::AmbiguousModifier {
                        shortcut: self.name.clone(),
                        token: token.clone(),
                        candidates: names.iter().map(|n| n.as_str().to_string()).collect(),
                    });
                    return None;
                }
            };
            mods.insert(as_modifier(&self.name, token, name, sink)?);
        }
        Some(mods)
    }
}

fn as_modifier(
    shortcut: &str,
    token: &str,
    name: KeyName,
    sink: &mut dyn DiagnosticSink,
) -> Option<Modifier> {
    let modifier = Modifier::from_key_name(name);
    if modifier.is_none() {
        sink.report(Diagnostic::NotAModifier {
            shortcut: shortcut.to_string(),
            token: token.to_string(),
            resolved: name.to_string(),
        });
    }
    modifier
}
