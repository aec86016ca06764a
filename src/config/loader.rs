//! Configuration loading from file system

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use super::defaults::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use super::types::Config;

/// Config file to use when none is given on the command line:
/// `./shmap.json` if present, otherwise `<config dir>/shortcut-mapper/shmap.json`.
pub fn default_config_path() -> PathBuf {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return local;
    }
    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
        .unwrap_or(local)
}

/// Load configuration from `path`.
///
/// Returns Config::default() if the file is missing or unreadable.
#[instrument(name = "load_config")]
pub fn load_config(path: &Path) -> Config {
    if !path.exists() {
        info!(path = %path.display(), "Config file not found, using defaults");
        return Config::default();
    }

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to read config, using defaults");
            return Config::default();
        }
    };

    match serde_json::from_str::<Config>(&content) {
        Ok(config) => {
            info!(path = %path.display(), "Successfully loaded config");
            config
        }
        Err(e) => {
            warn!(
                path = %path.display(),
                error = %e,
                "Failed to parse config JSON, using defaults"
            );
            Config::default()
        }
    }
}
