//! Reporting channel for non-fatal canonicalization problems.
//!
//! The engine never aborts on bad data. Unknown keys, ambiguous modifiers and
//! duplicate key combinations are handed to a [`DiagnosticSink`] supplied by
//! the caller:
//! - [`TracingSink`] forwards to `tracing` and counts what it saw (CLI)
//! - [`CollectingSink`] keeps everything in memory (tests, library users)

use thiserror::Error;
use tracing::{error, warn};

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Data coverage gap: one alternative or one shortcut was dropped.
    Warning,
    /// Dropping was forced to avoid guessing; the input needs fixing.
    Error,
}

/// A single non-fatal event raised while canonicalizing shortcuts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    #[error("skipping \"{shortcut}\": unknown key name '{token}'")]
    UnknownKey { shortcut: String, token: String },

    #[error("skipping \"{shortcut}\": unknown modifier key name '{token}'")]
    UnknownModifier { shortcut: String, token: String },

    #[error("skipping \"{shortcut}\": '{token}' resolves to {resolved}, which is not a modifier")]
    NotAModifier {
        shortcut: String,
        token: String,
        resolved: String,
    },

    #[error("skipping \"{shortcut}\": modifier '{token}' is ambiguous ({})", candidates.join(", "))]
    AmbiguousModifier {
        shortcut: String,
        token: String,
        candidates: Vec<String>,
    },

    #[error("skipping \"{shortcut}\": no main key in combo '{text}'")]
    MissingKey { shortcut: String, text: String },

    #[error(
        "keycombo {combo} already exists in context '{context}': existing shortcut is {existing}, skipping \"{rejected}\""
    )]
    DuplicateCombo {
        context: String,
        combo: String,
        existing: String,
        rejected: String,
    },

    #[error("not exporting {app} ({platform}): dataset is empty")]
    EmptyDataset { app: String, platform: String },
}

impl Diagnostic {
    pub fn severity(&self) -> Severity {
        match self {
            Self::AmbiguousModifier { .. } => Severity::Error,
            Self::UnknownKey { .. }
            | Self::UnknownModifier { .. }
            | Self::NotAModifier { .. }
            | Self::MissingKey { .. }
            | Self::DuplicateCombo { .. }
            | Self::EmptyDataset { .. } => Severity::Warning,
        }
    }

    /// Short machine-friendly name, used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnknownKey { .. } => "unknown_key",
            Self::UnknownModifier { .. } => "unknown_modifier",
            Self::NotAModifier { .. } => "not_a_modifier",
            Self::AmbiguousModifier { .. } => "ambiguous_modifier",
            Self::MissingKey { .. } => "missing_key",
            Self::DuplicateCombo { .. } => "duplicate_combo",
            Self::EmptyDataset { .. } => "empty_dataset",
        }
    }
}

/// Receives diagnostics from the engine.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn report(&mut self, diagnostic: Diagnostic) {
        (**self).report(diagnostic);
    }
}

/// Logs every diagnostic through `tracing` and keeps per-severity counts.
#[derive(Debug, Default)]
pub struct TracingSink {
    warnings: usize,
    errors: usize,
}

impl TracingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warnings(&self) -> usize {
        self.warnings
    }

    pub fn errors(&self) -> usize {
        self.errors
    }
}

impl DiagnosticSink for TracingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        match diagnostic.severity() {
            Severity::Warning => {
                self.warnings += 1;
                warn!(kind = diagnostic.kind(), "{}", diagnostic);
            }
            Severity::Error => {
                self.errors += 1;
                error!(kind = diagnostic.kind(), "{}", diagnostic);
            }
        }
    }
}

/// Stores diagnostics in report order.
#[derive(Debug, Default, Clone)]
pub struct CollectingSink {
    diagnostics: Vec<Diagnostic>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity() == severity)
            .count()
    }

    pub fn into_inner(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}
