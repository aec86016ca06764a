//! Raw token → canonical key name resolution.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::OnceLock;

use serde::{Serialize, Serializer};

use super::aliases::{KEY_ALIASES, PLAIN_KEY_NAMES};

static ALIAS_LOOKUP: OnceLock<HashMap<&'static str, &'static [&'static str]>> = OnceLock::new();
static VOCABULARY: OnceLock<HashSet<&'static str>> = OnceLock::new();

fn alias_lookup() -> &'static HashMap<&'static str, &'static [&'static str]> {
    ALIAS_LOOKUP.get_or_init(|| KEY_ALIASES.iter().copied().collect())
}

fn vocabulary() -> &'static HashSet<&'static str> {
    VOCABULARY.get_or_init(|| {
        KEY_ALIASES
            .iter()
            .flat_map(|(_, names)| names.iter().copied())
            .chain(PLAIN_KEY_NAMES.iter().copied())
            .collect()
    })
}

/// A member of the closed canonical key vocabulary (`SHIFT`, `NUMPAD_PLUS`, `F12`, ...).
///
/// Only obtainable through [`KeyName::new`] or [`resolve`], so holding one
/// proves the name is valid.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyName(&'static str);

impl KeyName {
    /// Look up an exact canonical name.
    pub fn new(name: &str) -> Option<Self> {
        vocabulary().get(name).map(|&name| KeyName(name))
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    pub fn is_numpad(&self) -> bool {
        self.0.contains("NUMPAD")
    }
}

impl fmt::Debug for KeyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl fmt::Display for KeyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl Serialize for KeyName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0)
    }
}

/// Resolve a raw token into zero, one or many canonical key names.
///
/// An empty result means the token is unrecognized; callers drop that
/// alternative and report it. With `numpad_explicit`, tokens that do not
/// themselves say "numpad" lose their `NUMPAD_*` alternatives (bare `0` is
/// then only `ZERO`). The filter runs on the resolved names, so class
/// aliases such as `number keys` are filtered name by name.
pub fn resolve(token: &str, numpad_explicit: bool) -> Vec<KeyName> {
    let lower = token.to_lowercase();
    let mut names: Vec<KeyName> = match KeyName::new(&token.to_uppercase()) {
        Some(name) => vec![name],
        None => {
            // Capital keycaps (É, Ñ, ...) are keyed as written; lowering them would
            // collapse onto the small letter.
            let aliases = alias_lookup();
            aliases
                .get(token)
                .or_else(|| aliases.get(lower.as_str()))
                .map(|names| names.iter().map(|&name| KeyName(name)).collect())
                .unwrap_or_default()
        }
    };

    if numpad_explicit && !lower.contains("numpad") {
        names.retain(|name| !name.is_numpad());
    }

    names
}

/// Check if `name` is a canonical key name.
pub fn is_valid_key_name(name: &str) -> bool {
    vocabulary().contains(name)
}

/// Every canonical key name, sorted.
pub fn all_key_names() -> Vec<KeyName> {
    let mut names: Vec<KeyName> = vocabulary().iter().map(|&name| KeyName(name)).collect();
    names.sort();
    names
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
