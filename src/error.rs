use thiserror::Error;
use tracing::{error, warn};

/// Fatal errors for a single document or run.
///
/// Recoverable data problems (unknown keys, duplicate combos, ...) are not
/// errors; they are reported through [`crate::diagnostics::DiagnosticSink`].
#[derive(Error, Debug)]
pub enum MapperError {
    #[error("failed to read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in '{path}': {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid intermediate document '{path}': {reason}")]
    InvalidDocument { path: String, reason: String },

    #[error("unknown platform '{0}' (expected windows, mac or linux)")]
    UnknownPlatform(String),

    #[error("application '{0}' has no version")]
    MissingVersion(String),

    #[error("output path '{0}' is not a directory")]
    NotADirectory(String),

    #[error("invalid glob pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}

impl MapperError {
    pub(crate) fn read(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Read {
            path: path.display().to_string(),
            source,
        }
    }

    pub(crate) fn write(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Write {
            path: path.display().to_string(),
            source,
        }
    }

    pub(crate) fn json(path: &std::path::Path, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.display().to_string(),
            source,
        }
    }

    pub(crate) fn invalid(path: &std::path::Path, reason: impl Into<String>) -> Self {
        Self::InvalidDocument {
            path: path.display().to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MapperError>;

/// Extension trait for logging recoverable failures with the caller location.
///
/// ```ignore
/// use shortcut_mapper::error::ResultExt;
///
/// // Skip a broken file but keep scanning the rest
/// let Some(header) = read_header(&path).warn_on_err() else { continue };
/// ```
pub trait ResultExt<T> {
    /// Log as error with caller location and return None.
    fn log_err(self) -> Option<T>;
    /// Log as warning with caller location and return None.
    fn warn_on_err(self) -> Option<T>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for std::result::Result<T, E> {
    #[track_caller]
    fn log_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                let caller = std::panic::Location::caller();
                error!(
                    error = %error,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation failed"
                );
                None
            }
        }
    }

    #[track_caller]
    fn warn_on_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                let caller = std::panic::Location::caller();
                warn!(
                    error = %error,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation had warning"
                );
                None
            }
        }
    }
}
