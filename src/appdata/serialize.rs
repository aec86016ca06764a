//! Deterministic dataset JSON.
//!
//! The layout is fixed so regenerated files diff cleanly: contexts sorted by
//! name, keys sorted, one shortcut entry per line with entries sorted by
//! their serialized form. Insertion order never shows in the output.

use std::collections::BTreeMap;

use serde_json::{json, Value};

use super::dataset::ApplicationDataset;
use crate::keynames::KeyName;
use crate::shortcuts::{Modifier, ShortcutContext};

impl ApplicationDataset {
    /// Render the dataset file contents.
    pub fn to_json(&self) -> String {
        let mods_used: Vec<&str> = self.mods_used().iter().map(Modifier::as_str).collect();

        let mut out = String::from("{\n");
        out.push_str(&format!("    \"name\": {},\n", quote(&self.name)));
        out.push_str(&format!("    \"version\": {},\n", quote(&self.version)));
        out.push_str(&format!("    \"os\": {},\n", quote(self.os.as_str())));
        out.push_str(&format!("    \"mods_used\": {},\n", Value::from(mods_used)));
        out.push_str(&format!(
            "    \"default_context\": {},\n",
            quote(&self.default_context)
        ));

        let contexts: Vec<String> = self
            .contexts()
            .filter(|context| !context.is_empty())
            .map(render_context)
            .collect();
        if contexts.is_empty() {
            out.push_str("    \"contexts\": {}\n");
        } else {
            out.push_str("    \"contexts\": {\n");
            out.push_str(&contexts.join(",\n"));
            out.push_str("\n    }\n");
        }
        out.push_str("}\n");
        out
    }
}

fn render_context(context: &ShortcutContext) -> String {
    let mut by_key: BTreeMap<KeyName, Vec<String>> = BTreeMap::new();
    for shortcut in context.shortcuts() {
        let mods: Vec<&str> = shortcut.mods.iter().map(Modifier::as_str).collect();
        by_key
            .entry(shortcut.key)
            .or_default()
            .push(json!({ "name": shortcut.name, "mods": mods }).to_string());
    }

    let keys: Vec<String> = by_key
        .into_iter()
        .map(|(key, mut entries)| {
            entries.sort();
            format!(
                "            {}: [\n                {}\n            ]",
                quote(key.as_str()),
                entries.join(",\n                ")
            )
        })
        .collect();

    format!(
        "        {}: {{\n{}\n        }}",
        quote(context.name()),
        keys.join(",\n")
    )
}

fn quote(text: &str) -> String {
    Value::from(text).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::CollectingSink;
    use crate::shortcuts::{Platform, ShortcutDraft};

    fn dataset(drafts: &[(&str, &str, &str, &[&str])]) -> ApplicationDataset {
        let mut sink = CollectingSink::new();
        let mut dataset = ApplicationDataset::new("Blender", "2.79", Platform::Windows, "Global");
        for (context, name, key, mods) in drafts {
            let draft = ShortcutDraft::new(*name, *key).with_mods(mods.iter().copied());
            dataset
                .context_mut(context)
                .add_draft(&draft, true, true, &mut sink);
        }
        dataset
    }

    #[test]
    fn layout_is_fixed() {
        let data = dataset(&[
            ("Global", "Save", "S", &["ctrl"]),
            ("Global", "Save As", "S", &["ctrl", "shift"]),
            ("Edit Mode", "Extrude", "E", &[]),
        ]);
        let expected = r#"{
    "name": "Blender",
    "version": "2.79",
    "os": "windows",
    "mods_used": ["CONTROL","SHIFT"],
    "default_context": "Global",
    "contexts": {
        "Edit Mode": {
            "E": [
                {"name":"Extrude","mods":[]}
            ]
        },
        "Global": {
            "S": [
                {"name":"Save As","mods":["CONTROL","SHIFT"]},
                {"name":"Save","mods":["CONTROL"]}
            ]
        }
    }
}
"#;
        assert_eq!(data.to_json(), expected);
    }

    #[test]
    fn output_ignores_insertion_order() {
        let forward = dataset(&[
            ("Global", "Copy", "C", &["ctrl"]),
            ("Global", "Paste", "V", &["ctrl"]),
            ("View", "Zoom", "+", &[]),
            ("Global", "Cut", "X", &["ctrl"]),
        ]);
        let backward = dataset(&[
            ("Global", "Cut", "X", &["ctrl"]),
            ("View", "Zoom", "+", &[]),
            ("Global", "Paste", "V", &["ctrl"]),
            ("Global", "Copy", "C", &["ctrl"]),
        ]);
        assert_eq!(forward.to_json(), backward.to_json());
    }

    #[test]
    fn empty_contexts_are_omitted() {
        let mut data = dataset(&[("Global", "Save", "S", &["ctrl"])]);
        data.context_mut("Unused");
        let json = data.to_json();
        assert!(!json.contains("Unused"));
        let parsed: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["contexts"].as_object().unwrap().len(), 1);
    }

    #[test]
    fn output_is_valid_json_with_escaping() {
        let data = dataset(&[("Global", "Say \"hi\"", "\\", &["alt"])]);
        let parsed: Value = serde_json::from_str(&data.to_json()).unwrap();
        assert_eq!(
            parsed["contexts"]["Global"]["BACKSLASH"][0]["name"],
            "Say \"hi\""
        );
        assert_eq!(parsed["mods_used"], json!(["ALT"]));
    }
}
