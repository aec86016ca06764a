//! Default configuration values
//!
//! All constants used throughout the config module are defined here.

/// Where per-platform dataset files are written
pub const DEFAULT_OUTPUT_DIR: &str = "content/generated";

/// The site index regenerated after every dataset write
pub const DEFAULT_APPS_INDEX_PATH: &str = "content/javascripts/apps.js";

/// Root of the per-application source folders
pub const DEFAULT_SOURCES_DIR: &str = "sources";

/// Intermediate documents below `sourcesDir` picked up by `export --all`
pub const DEFAULT_INTERMEDIATE_PATTERN: &str = "*/intermediate/*.json";

pub const DEFAULT_EXPLICIT_NUMPAD_KEYS: bool = false;

/// Config file name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "shmap.json";

/// Directory below the platform config dir holding the user config
pub const CONFIG_DIR_NAME: &str = "shortcut-mapper";
