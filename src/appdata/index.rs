//! The site index listing every generated dataset.
//!
//! The web site loads `apps.js` to learn which applications, versions and
//! platforms exist. It is rebuilt from scratch from the dataset files on
//! disk, never patched.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, instrument};

use super::dataset::OutputLayout;
use crate::error::{MapperError, Result, ResultExt};

const HEADER: &str = "\
// DO NOT EDIT THIS FILE
// This file is automatically generated whenever an application dataset is written
// regenerate it with `shmap index`

";

/// The part of a dataset file the index needs.
#[derive(Debug, Deserialize)]
struct DatasetHeader {
    name: String,
    version: String,
    os: String,
}

/// app name -> version -> os -> file name
type SiteApps = BTreeMap<String, BTreeMap<String, BTreeMap<String, String>>>;

/// Rebuild the index from every `*.json` in the output directory. Returns the
/// number of datasets listed; unreadable files are skipped with a warning.
#[instrument(skip_all, fields(index = %layout.index_path.display()))]
pub fn regenerate_index(layout: &OutputLayout) -> Result<usize> {
    let dir = glob::Pattern::escape(&layout.output_dir.to_string_lossy());
    let pattern = Path::new(&dir).join("*.json").to_string_lossy().to_string();
    let paths = glob::glob(&pattern).map_err(|source| MapperError::Pattern {
        pattern: pattern.clone(),
        source,
    })?;

    let mut apps = SiteApps::new();
    let mut count = 0;
    for path in paths.flatten() {
        let Some(header) = read_header(&path).warn_on_err() else {
            continue;
        };
        let Some(file_name) = path.file_name().map(|n| n.to_string_lossy().to_string()) else {
            continue;
        };
        debug!(file = %file_name, "Adding dataset to index");
        apps.entry(header.name)
            .or_default()
            .entry(header.version)
            .or_default()
            .entry(header.os)
            .or_insert(file_name);
        count += 1;
    }

    if let Some(parent) = layout
        .index_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
    {
        fs::create_dir_all(parent).map_err(|e| MapperError::write(parent, e))?;
    }
    let contents = format!("{HEADER}var sitedata_apps = {};\n", render(&apps));
    fs::write(&layout.index_path, contents)
        .map_err(|e| MapperError::write(&layout.index_path, e))?;

    info!(datasets = count, "Regenerated site index");
    Ok(count)
}

fn read_header(path: &Path) -> Result<DatasetHeader> {
    let content = fs::read_to_string(path).map_err(|e| MapperError::read(path, e))?;
    serde_json::from_str(&content).map_err(|e| MapperError::json(path, e))
}

/// Apps sorted by name, versions newest first, platforms sorted.
fn render(apps: &SiteApps) -> String {
    if apps.is_empty() {
        return "[]".to_string();
    }

    let entries: Vec<String> = apps
        .iter()
        .map(|(name, versions)| {
            let versions: Vec<String> = versions
                .iter()
                .rev()
                .map(|(version, platforms)| {
                    let platforms: Vec<String> = platforms
                        .iter()
                        .map(|(os, file)| format!("                {}: {}", quote(os), quote(file)))
                        .collect();
                    format!(
                        "            {}: {{\n{}\n            }}",
                        quote(version),
                        platforms.join(",\n")
                    )
                })
                .collect();
            format!(
                "    {{\n        \"name\": {},\n        \"data\": {{\n{}\n        }}\n    }}",
                quote(name),
                versions.join(",\n")
            )
        })
        .collect();

    format!("[\n{}\n]", entries.join(",\n"))
}

fn quote(text: &str) -> String {
    Value::from(text).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_dataset(dir: &Path, file: &str, name: &str, version: &str, os: &str) {
        let json = format!(
            r#"{{"name": "{name}", "version": "{version}", "os": "{os}", "mods_used": [], "default_context": "Global", "contexts": {{}}}}"#
        );
        fs::write(dir.join(file), json).unwrap();
    }

    #[test]
    fn lists_every_dataset_newest_version_first() {
        let dir = tempdir().unwrap();
        let layout = OutputLayout::new(dir.path(), dir.path().join("js").join("apps.js"));
        write_dataset(dir.path(), "blender_2.78_windows.json", "Blender", "2.78", "windows");
        write_dataset(dir.path(), "blender_2.79_windows.json", "Blender", "2.79", "windows");
        write_dataset(dir.path(), "blender_2.79_mac.json", "Blender", "2.79", "mac");
        write_dataset(dir.path(), "gimp_2.10_linux.json", "GIMP", "2.10", "linux");

        assert_eq!(regenerate_index(&layout).unwrap(), 4);

        let contents = fs::read_to_string(&layout.index_path).unwrap();
        let expected = r#"var sitedata_apps = [
    {
        "name": "Blender",
        "data": {
            "2.79": {
                "mac": "blender_2.79_mac.json",
                "windows": "blender_2.79_windows.json"
            },
            "2.78": {
                "windows": "blender_2.78_windows.json"
            }
        }
    },
    {
        "name": "GIMP",
        "data": {
            "2.10": {
                "linux": "gimp_2.10_linux.json"
            }
        }
    }
];
"#;
        assert!(contents.starts_with("// DO NOT EDIT THIS FILE\n"));
        assert!(contents.ends_with(expected));
    }

    #[test]
    fn broken_files_are_skipped() {
        let dir = tempdir().unwrap();
        let layout = OutputLayout::new(dir.path(), dir.path().join("apps.js"));
        write_dataset(dir.path(), "krita_4.0_mac.json", "Krita", "4.0", "mac");
        fs::write(dir.path().join("broken.json"), "{ not json").unwrap();
        fs::write(dir.path().join("partial.json"), r#"{"name": "X"}"#).unwrap();

        assert_eq!(regenerate_index(&layout).unwrap(), 1);
        let contents = fs::read_to_string(&layout.index_path).unwrap();
        assert!(contents.contains("krita_4.0_mac.json"));
        assert!(!contents.contains("broken"));
    }

    #[test]
    fn output_dir_with_glob_characters_is_scanned() {
        let root = tempdir().unwrap();
        let dir = root.path().join("gen [v2]");
        fs::create_dir(&dir).unwrap();
        let layout = OutputLayout::new(&dir, root.path().join("apps.js"));
        write_dataset(&dir, "krita_4.0_mac.json", "Krita", "4.0", "mac");

        assert_eq!(regenerate_index(&layout).unwrap(), 1);
        let contents = fs::read_to_string(&layout.index_path).unwrap();
        assert!(contents.contains("krita_4.0_mac.json"));
    }

    #[test]
    fn empty_output_dir_gives_empty_list() {
        let dir = tempdir().unwrap();
        let layout = OutputLayout::new(dir.path(), dir.path().join("apps.js"));
        assert_eq!(regenerate_index(&layout).unwrap(), 0);
        let contents = fs::read_to_string(&layout.index_path).unwrap();
        assert!(contents.ends_with("var sitedata_apps = [];\n"));
    }
}
