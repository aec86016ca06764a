//! Canonical key names.
//!
//! This module provides:
//! - The closed vocabulary of canonical key names (`SHIFT`, `NUMPAD_PLUS`, `F12`, ...)
//! - The alias table mapping symbols, words and locale keycaps onto it
//! - `resolve` - raw token to canonical names, with explicit-numpad filtering
//! - Keyboard layout template validation
//!
//! # Example
//!
//! ```
//! use shortcut_mapper::keynames::resolve;
//!
//! let names: Vec<_> = resolve("+", false).iter().map(|n| n.as_str()).collect();
//! assert_eq!(names, ["PLUS", "NUMPAD_PLUS"]);
//! assert_eq!(resolve("+", true).len(), 1);
//! ```

mod aliases;
mod layouts;
mod resolver;

pub use layouts::{lint_layout_templates, unknown_keys_in, UnknownLayoutKey};
pub use resolver::{all_key_names, is_valid_key_name, resolve, KeyName};
