//! Hand-editable shortcut records as scraped, before canonicalization.

use std::collections::{BTreeSet, HashMap};

use tracing::debug;

use crate::shortcuts::Platform;

/// One action with its raw Windows and Mac key text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IntermediateShortcut {
    pub name: String,
    pub win_keys: String,
    pub mac_keys: String,
}

impl IntermediateShortcut {
    pub fn new(
        name: impl Into<String>,
        win_keys: impl Into<String>,
        mac_keys: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            win_keys: win_keys.into(),
            mac_keys: mac_keys.into(),
        }
    }

    /// Raw key text for `platform`. Linux shares the Windows bindings.
    pub fn keys_for(&self, platform: Platform) -> &str {
        match platform {
            Platform::Mac => &self.mac_keys,
            Platform::Windows | Platform::Linux => &self.win_keys,
        }
    }
}

/// Ordered shortcuts of one context, indexed by name.
#[derive(Clone, Debug, Default)]
pub struct IntermediateContext {
    name: String,
    shortcuts: Vec<IntermediateShortcut>,
    name_to_index: HashMap<String, usize>,
}

impl IntermediateContext {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add a shortcut, or fold new key text into an existing one.
    ///
    /// When `name` already exists, non-empty key text not yet contained in
    /// the stored field is appended as a `" / "` alternative.
    pub fn add_shortcut(&mut self, name: &str, win_keys: &str, mac_keys: &str) {
        if let Some(existing) = self.get_mut(name) {
            append_alternative(&mut existing.win_keys, win_keys);
            append_alternative(&mut existing.mac_keys, mac_keys);
            return;
        }
        self.insert(IntermediateShortcut::new(name, win_keys, mac_keys));
    }

    /// Append `shortcut` as-is. The caller guarantees the name is new.
    pub(super) fn insert(&mut self, shortcut: IntermediateShortcut) {
        self.name_to_index
            .insert(shortcut.name.clone(), self.shortcuts.len());
        self.shortcuts.push(shortcut);
    }

    pub fn get(&self, name: &str) -> Option<&IntermediateShortcut> {
        self.name_to_index.get(name).map(|&i| &self.shortcuts[i])
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut IntermediateShortcut> {
        let index = *self.name_to_index.get(name)?;
        self.shortcuts.get_mut(index)
    }

    pub fn shortcuts(&self) -> &[IntermediateShortcut] {
        &self.shortcuts
    }

    pub fn len(&self) -> usize {
        self.shortcuts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shortcuts.is_empty()
    }
}

fn append_alternative(field: &mut String, keys: &str) {
    if keys.is_empty() || field.contains(keys) {
        return;
    }
    if field.is_empty() {
        field.push_str(keys);
    } else {
        field.push_str(" / ");
        field.push_str(keys);
    }
}

/// Everything known about one application version, as raw text.
#[derive(Clone, Debug, Default)]
pub struct IntermediateDataset {
    pub app_name: String,
    pub version: String,
    pub default_context: String,
    pub supported_platforms: BTreeSet<Platform>,
    contexts: Vec<IntermediateContext>,
    context_to_index: HashMap<String, usize>,
}

impl IntermediateDataset {
    /// A dataset targeting every platform.
    pub fn new(
        app_name: impl Into<String>,
        version: impl Into<String>,
        default_context: impl Into<String>,
    ) -> Self {
        Self {
            app_name: app_name.into(),
            version: version.into(),
            default_context: default_context.into(),
            supported_platforms: Platform::ALL.into_iter().collect(),
            ..Default::default()
        }
    }

    pub fn with_platforms(mut self, platforms: impl IntoIterator<Item = Platform>) -> Self {
        self.supported_platforms = platforms.into_iter().collect();
        self
    }

    /// Scraper entry point. See [`IntermediateContext::add_shortcut`].
    pub fn add_shortcut(&mut self, context: &str, name: &str, win_keys: &str, mac_keys: &str) {
        self.context_mut(context).add_shortcut(name, win_keys, mac_keys);
    }

    /// Get a context by name, creating it at the end if missing.
    pub fn context_mut(&mut self, name: &str) -> &mut IntermediateContext {
        let index = match self.context_to_index.get(name) {
            Some(&index) => index,
            None => {
                debug!(context = name, "Adding context");
                let index = self.contexts.len();
                self.contexts.push(IntermediateContext::new(name));
                self.context_to_index.insert(name.to_string(), index);
                index
            }
        };
        &mut self.contexts[index]
    }

    pub fn context(&self, name: &str) -> Option<&IntermediateContext> {
        self.context_to_index.get(name).map(|&i| &self.contexts[i])
    }

    /// Contexts in insertion order.
    pub fn contexts(&self) -> &[IntermediateContext] {
        &self.contexts
    }

    pub fn shortcut_count(&self) -> usize {
        self.contexts.iter().map(IntermediateContext::len).sum()
    }

    pub fn supports(&self, platform: Platform) -> bool {
        self.supported_platforms.contains(&platform)
    }
}
