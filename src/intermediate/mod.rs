//! Intermediate shortcut data.
//!
//! Scrapers and hand edits produce raw `[windows, mac]` key text per action.
//! This module provides:
//! - The ordered, name-indexed intermediate records
//! - Field-level merging of several sources (`extend`)
//! - The hand-editable JSON document format
//! - Export into canonical per-platform datasets

mod exporter;
mod merge;
mod persistence;
mod types;

pub use exporter::IntermediateExporter;
pub use types::{IntermediateContext, IntermediateDataset, IntermediateShortcut};
