//! Loading and saving intermediate JSON documents.
//!
//! Format:
//! ```text
//! {
//!     "name": "Blender",
//!     "version": "2.79",
//!     "default_context": "Global",
//!     "os": ["windows", "mac"],
//!     "contexts": {
//!         "Global": {
//!             "Undo": ["Ctrl + Z", "Cmd + Z"]
//!         }
//!     }
//! }
//! ```
//!
//! Loading keeps document order. Saving sorts contexts by name and keeps the
//! shortcut order, one shortcut per line, so hand edits diff cleanly.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{info, instrument};

use super::types::{IntermediateContext, IntermediateDataset};
use crate::error::{MapperError, Result};
use crate::shortcuts::Platform;

#[derive(Debug, Deserialize)]
struct IntermediateDocument {
    name: String,
    version: String,
    default_context: String,
    os: Vec<String>,
    contexts: Map<String, Value>,
}

impl IntermediateDataset {
    /// Load an intermediate document.
    #[instrument(name = "load_intermediate")]
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| MapperError::read(path, e))?;
        let dataset = Self::from_json(path, &content)?;
        info!(
            app = %dataset.app_name,
            contexts = dataset.contexts().len(),
            shortcuts = dataset.shortcut_count(),
            "Loaded intermediate data"
        );
        Ok(dataset)
    }

    /// Parse document text. `path` is only used in error messages.
    pub fn from_json(path: &Path, content: &str) -> Result<Self> {
        let document: IntermediateDocument =
            serde_json::from_str(content).map_err(|e| MapperError::json(path, e))?;

        if document.os.is_empty() {
            return Err(MapperError::invalid(path, "\"os\" must list at least one platform"));
        }
        let platforms = document
            .os
            .iter()
            .map(|name| {
                name.parse::<Platform>()
                    .map_err(|e| MapperError::invalid(path, e.to_string()))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut dataset =
            IntermediateDataset::new(document.name, document.version, document.default_context)
                .with_platforms(platforms);

        for (context_name, shortcuts) in &document.contexts {
            let Some(shortcuts) = shortcuts.as_object() else {
                return Err(MapperError::invalid(
                    path,
                    format!("context \"{context_name}\" is not an object"),
                ));
            };
            let context = dataset.context_mut(context_name);
            for (name, keys) in shortcuts {
                let (win_keys, mac_keys) = key_pair(keys).ok_or_else(|| {
                    MapperError::invalid(
                        path,
                        format!(
                            "shortcut \"{name}\" in context \"{context_name}\" must be a [windows, mac] pair of strings"
                        ),
                    )
                })?;
                context.add_shortcut(name, win_keys, mac_keys);
            }
        }
        Ok(dataset)
    }

    /// Save as a hand-editable document, creating parent directories.
    #[instrument(name = "save_intermediate", skip(self), fields(app = %self.app_name))]
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| MapperError::write(parent, e))?;
        }
        fs::write(path, self.to_json()).map_err(|e| MapperError::write(path, e))?;
        info!(path = %path.display(), "Saved intermediate data");
        Ok(())
    }

    /// Render the document text written by [`save`](Self::save).
    pub fn to_json(&self) -> String {
        let platforms: Vec<String> = self
            .supported_platforms
            .iter()
            .map(|p| quote(p.as_str()))
            .collect();

        let mut out = String::from("{\n");
        out.push_str(&format!("    \"name\": {},\n", quote(&self.app_name)));
        out.push_str(&format!("    \"version\": {},\n", quote(&self.version)));
        out.push_str(&format!(
            "    \"default_context\": {},\n",
            quote(&self.default_context)
        ));
        out.push_str(&format!("    \"os\": [{}],\n", platforms.join(", ")));

        let mut contexts: Vec<&IntermediateContext> = self.contexts().iter().collect();
        contexts.sort_by(|a, b| a.name().cmp(b.name()));

        let rendered: Vec<String> = contexts.into_iter().map(render_context).collect();
        if rendered.is_empty() {
            out.push_str("    \"contexts\": {}\n");
        } else {
            out.push_str("    \"contexts\": {\n");
            out.push_str(&rendered.join(",\n"));
            out.push_str("\n    }\n");
        }
        out.push_str("}\n");
        out
    }
}

fn render_context(context: &IntermediateContext) -> String {
    if context.is_empty() {
        return format!("        {}: {{}}", quote(context.name()));
    }
    let lines: Vec<String> = context
        .shortcuts()
        .iter()
        .map(|s| {
            format!(
                "            {}: [{}, {}]",
                quote(&s.name),
                quote(&s.win_keys),
                quote(&s.mac_keys)
            )
        })
        .collect();
    format!(
        "        {}: {{\n{}\n        }}",
        quote(context.name()),
        lines.join(",\n")
    )
}

fn key_pair(value: &Value) -> Option<(&str, &str)> {
    match value.as_array()?.as_slice() {
        [win, mac] => Some((win.as_str()?, mac.as_str()?)),
        _ => None,
    }
}

fn quote(text: &str) -> String {
    Value::from(text).to_string()
}

#[cfg(test)]
#[path = "persistence_tests.rs"]
mod tests;
