//! Validation of keyboard layout templates.
//!
//! The web site renders keyboards from HTML templates whose buttons carry a
//! `data-key="..."` attribute. Every such name must be in the canonical
//! vocabulary, otherwise shortcuts bound to it can never light up.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, instrument};

use super::resolver::is_valid_key_name;
use crate::error::{MapperError, Result, ResultExt};

static DATA_KEY_PATTERN: OnceLock<Regex> = OnceLock::new();

fn data_key_pattern() -> &'static Regex {
    DATA_KEY_PATTERN.get_or_init(|| {
        Regex::new(r#"button[^>]*\bdata-key="([^"]*)""#).expect("data-key pattern is valid")
    })
}

/// A `data-key` value that is not a canonical key name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLayoutKey {
    pub template: PathBuf,
    pub line: usize,
    pub key: String,
}

/// Names used by `data-key` attributes in `contents` that are not canonical.
pub fn unknown_keys_in(contents: &str) -> Vec<(usize, String)> {
    contents
        .lines()
        .enumerate()
        .flat_map(|(index, line)| {
            data_key_pattern()
                .captures_iter(line)
                .filter_map(|caps| caps.get(1))
                .map(|m| m.as_str())
                .filter(|key| !is_valid_key_name(key))
                .map(move |key| (index + 1, key.to_string()))
        })
        .collect()
}

/// Check every `*.html` template in `dir`. Unreadable templates are logged
/// and skipped.
#[instrument(name = "lint_layout_templates")]
pub fn lint_layout_templates(dir: &Path) -> Result<Vec<UnknownLayoutKey>> {
    let escaped = glob::Pattern::escape(&dir.to_string_lossy());
    let pattern = Path::new(&escaped).join("*.html").to_string_lossy().to_string();
    let paths = glob::glob(&pattern).map_err(|source| MapperError::Pattern {
        pattern: pattern.clone(),
        source,
    })?;

    let mut unknown = Vec::new();
    for path in paths.flatten() {
        debug!(template = %path.display(), "Checking layout template");
        let Some(contents) = fs::read_to_string(&path)
            .map_err(|e| MapperError::read(&path, e))
            .log_err()
        else {
            continue;
        };
        unknown.extend(
            unknown_keys_in(&contents)
                .into_iter()
                .map(|(line, key)| UnknownLayoutKey {
                    template: path.clone(),
                    line,
                    key,
                }),
        );
    }
    Ok(unknown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn finds_unknown_data_keys() {
        let html = r#"<div class="row">
  <button data-key="ESCAPE">Esc</button>
  <button class="wide" data-key="LEFT_CMD">Cmd</button>
</div>"#;
        assert_eq!(unknown_keys_in(html), vec![(3, "LEFT_CMD".to_string())]);
    }

    #[test]
    fn ignores_non_button_attributes() {
        let html = r#"<span data-key="WHATEVER"></span>"#;
        assert!(unknown_keys_in(html).is_empty());
    }

    #[test]
    fn lint_scans_html_templates_only() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("us.html"),
            "<button data-key=\"A\"></button>\n<button data-key=\"NOPE\"></button>\n",
        )
        .unwrap();
        fs::write(dir.path().join("notes.txt"), "<button data-key=\"ALSO_NOPE\">").unwrap();

        let unknown = lint_layout_templates(dir.path()).unwrap();
        assert_eq!(unknown.len(), 1);
        assert_eq!(unknown[0].key, "NOPE");
        assert_eq!(unknown[0].line, 2);
        assert!(unknown[0].template.ends_with("us.html"));
    }

    #[test]
    fn lint_handles_glob_characters_in_dir() {
        let root = tempdir().unwrap();
        let dir = root.path().join("layouts [old]");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("de.html"), "<button data-key=\"NOPE\"></button>\n").unwrap();

        let unknown = lint_layout_templates(&dir).unwrap();
        assert_eq!(unknown.len(), 1);
        assert_eq!(unknown[0].key, "NOPE");
    }

    #[test]
    fn unreadable_template_is_skipped() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("broken.html")).unwrap();
        fs::write(
            dir.path().join("us.html"),
            "<button data-key=\"NOPE\"></button>\n",
        )
        .unwrap();

        let unknown = lint_layout_templates(dir.path()).unwrap();
        assert_eq!(unknown.len(), 1);
        assert!(unknown[0].template.ends_with("us.html"));
    }
}
