//! Human-readable stderr logging with an optional structured JSONL file.
//!
//! This module provides dual-output logging:
//! - **Compact to stderr** - what a person running `shmap` reads
//! - **JSONL to file** (when configured) - one JSON object per event, for
//!   diffing runs and grepping diagnostics by `kind`
//!
//! # Usage
//!
//! ```rust,ignore
//! use shortcut_mapper::logging::{self, LogOptions};
//!
//! // Keep the guard alive until the end of main
//! let _guard = logging::init(&LogOptions::default());
//! tracing::info!(app = "Blender", "Exporting");
//! ```
//!
//! # JSONL Output Format
//!
//! ```json
//! {"timestamp":"2026-03-01T10:30:45.123Z","level":"WARN","target":"shortcut_mapper::diagnostics","fields":{"message":"...","kind":"duplicate_combo"}}
//! ```

use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use time::format_description::well_known::Rfc3339;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Logging switches collected from the CLI and config.
#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    /// Default to `debug` instead of `info` (RUST_LOG still wins)
    pub verbose: bool,
    /// Append structured JSONL events to this file
    pub log_file: Option<PathBuf>,
}

/// Guard that must be kept alive for the duration of the program.
/// Dropping it flushes and closes the log file.
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Default filter directive for the given verbosity.
fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "info"
    }
}

/// Initialize the global subscriber.
///
/// Returns a guard that MUST be kept alive for the duration of the program.
pub fn init(options: &LogOptions) -> LoggingGuard {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(options.verbose)));

    let (json_layer, file_guard) = match options.log_file.as_deref().and_then(open_log_file) {
        Some(file) => {
            let (writer, guard) = tracing_appender::non_blocking(file);
            let layer = fmt::layer()
                .json()
                .with_writer(writer)
                .with_timer(UtcTime::new(Rfc3339))
                .with_target(true)
                .with_level(true)
                .with_thread_ids(false)
                .with_thread_names(false)
                .with_file(false)
                .with_line_number(false)
                .with_span_events(FmtSpan::NONE);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let pretty_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false)
        .with_level(true)
        .with_thread_ids(false)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(pretty_layer)
        .init();

    if let Some(path) = &options.log_file {
        tracing::debug!(log_path = %path.display(), "JSONL logging enabled");
    }

    LoggingGuard {
        _file_guard: file_guard,
    }
}

fn open_log_file(path: &std::path::Path) -> Option<fs::File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if let Err(e) = fs::create_dir_all(parent) {
            eprintln!("[LOGGING] Failed to create log directory: {}", e);
            return None;
        }
    }
    match OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => Some(file),
        Err(e) => {
            eprintln!("[LOGGING] Failed to open log file {}: {}", path.display(), e);
            None
        }
    }
}
