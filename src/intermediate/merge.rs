//! Merging intermediate data from several sources.

use tracing::debug;

use super::types::IntermediateDataset;

impl IntermediateDataset {
    /// Fold `source` into `self`.
    ///
    /// Shortcuts missing from `self` are copied verbatim. For shortcuts both
    /// sides know, only empty key fields are filled; populated fields are
    /// never overwritten, so the first source has priority. Empty metadata is
    /// taken from `source` and supported platforms are unioned.
    pub fn extend(&mut self, source: &IntermediateDataset) {
        fill_if_empty(&mut self.app_name, &source.app_name);
        fill_if_empty(&mut self.version, &source.version);
        fill_if_empty(&mut self.default_context, &source.default_context);
        self.supported_platforms
            .extend(source.supported_platforms.iter().copied());

        let mut added = 0usize;
        let mut filled = 0usize;
        for source_context in source.contexts() {
            let target = self.context_mut(source_context.name());
            for shortcut in source_context.shortcuts() {
                match target.get_mut(&shortcut.name) {
                    Some(existing) => {
                        let win = fill_if_empty(&mut existing.win_keys, &shortcut.win_keys);
                        let mac = fill_if_empty(&mut existing.mac_keys, &shortcut.mac_keys);
                        if win || mac {
                            filled += 1;
                        }
                    }
                    None => {
                        target.insert(shortcut.clone());
                        added += 1;
                    }
                }
            }
        }

        debug!(
            app = %self.app_name,
            added,
            filled,
            "Merged intermediate data"
        );
    }
}

/// Returns whether `field` was filled.
fn fill_if_empty(field: &mut String, value: &str) -> bool {
    if field.is_empty() && !value.is_empty() {
        *field = value.to_string();
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shortcuts::Platform;

    #[test]
    fn empty_fields_are_filled_populated_fields_kept() {
        let mut target = IntermediateDataset::new("Blender", "2.79", "Global");
        target.add_shortcut("Global", "Save", "Ctrl + S", "");
        target.add_shortcut("Global", "Open", "Ctrl + O", "Cmd + O");

        let mut source = IntermediateDataset::new("Blender", "2.79", "Global");
        source.add_shortcut("Global", "Save", "Ctrl + Shift + S", "Cmd + S");
        source.add_shortcut("Global", "Open", "F1", "Cmd + F1");

        target.extend(&source);

        let global = target.context("Global").unwrap();
        let save = global.get("Save").unwrap();
        assert_eq!(save.win_keys, "Ctrl + S");
        assert_eq!(save.mac_keys, "Cmd + S");
        let open = global.get("Open").unwrap();
        assert_eq!(open.win_keys, "Ctrl + O");
        assert_eq!(open.mac_keys, "Cmd + O");
    }

    #[test]
    fn missing_shortcuts_and_contexts_are_appended() {
        let mut target = IntermediateDataset::new("App", "1", "Global");
        target.add_shortcut("Global", "Save", "Ctrl + S", "Cmd + S");

        let mut source = IntermediateDataset::new("App", "1", "Global");
        source.add_shortcut("Global", "Quit", "Alt + F4", "Cmd + Q");
        source.add_shortcut("Editor", "Indent", "Tab", "Tab");

        target.extend(&source);

        let names: Vec<&str> = target
            .context("Global")
            .unwrap()
            .shortcuts()
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(names, vec!["Save", "Quit"]);
        assert_eq!(target.context("Editor").unwrap().len(), 1);
        assert_eq!(target.contexts().len(), 2);
    }

    #[test]
    fn metadata_and_platforms_are_merged() {
        let mut target = IntermediateDataset::default().with_platforms([Platform::Windows]);
        let source = IntermediateDataset::new("Krita", "4.0", "Canvas").with_platforms([Platform::Mac]);

        target.extend(&source);

        assert_eq!(target.app_name, "Krita");
        assert_eq!(target.version, "4.0");
        assert_eq!(target.default_context, "Canvas");
        assert!(target.supports(Platform::Windows));
        assert!(target.supports(Platform::Mac));
        assert!(!target.supports(Platform::Linux));
    }

    #[test]
    fn merge_does_not_join_alternatives() {
        let mut target = IntermediateDataset::new("App", "1", "Global");
        target.add_shortcut("Global", "Undo", "Ctrl + Z", "Cmd + Z");
        let mut source = IntermediateDataset::new("App", "1", "Global");
        source.add_shortcut("Global", "Undo", "Alt + Backspace", "Cmd + Z");

        target.extend(&source);
        assert_eq!(target.context("Global").unwrap().get("Undo").unwrap().win_keys, "Ctrl + Z");
    }
}
