//! Canonical keyboard shortcuts.
//!
//! This module provides:
//! - Free-text combo parsing (`"Ctrl + 0 - 8"`, `"Space / Z"`)
//! - Draft to canonical shortcut expansion, including any-mod fan-out
//! - Per-context aggregation with duplicate combo detection
//!
//! # Pipeline
//!
//! Raw text goes through [`parse_combo`], each candidate becomes a
//! [`ShortcutDraft`], [`ShortcutDraft::expand`] resolves its tokens and
//! [`ShortcutContext::add`] stores the results, keeping the first shortcut
//! that claims a key combination.
//!
//! # Example
//!
//! ```
//! use shortcut_mapper::diagnostics::CollectingSink;
//! use shortcut_mapper::shortcuts::{parse_combo, ShortcutContext, ShortcutDraft};
//!
//! let mut sink = CollectingSink::new();
//! let mut context = ShortcutContext::new("Global");
//! for candidate in parse_combo("Ctrl + Shift + Z / Ctrl + Y") {
//!     let draft = ShortcutDraft::new("Redo", candidate.key).with_mods(candidate.mods);
//!     context.add_draft(&draft, true, false, &mut sink);
//! }
//! assert_eq!(context.len(), 2);
//! assert!(sink.is_empty());
//! ```

mod combo;
mod context;
mod expand;
mod types;

pub use combo::{parse_combo, parse_combo_with, ComboCandidate};
pub use context::ShortcutContext;
pub use types::{Modifier, Platform, Shortcut, ShortcutDraft};
