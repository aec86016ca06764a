//! Core shortcut types.
//!
//! This module provides:
//! - `Modifier` - the modifier-class subset of the key vocabulary
//! - `Shortcut` - a canonical shortcut (name + key + modifier set)
//! - `ShortcutDraft` - an authored shortcut before canonicalization
//! - `Platform` - the operating systems a dataset can target

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MapperError;
use crate::keynames::KeyName;

/// Modifier keys.
///
/// Variants are declared alphabetically so the derived ordering matches the
/// ordering of their canonical names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Modifier {
    Alt,
    Command,
    Control,
    Oskey,
    Shift,
}

impl Modifier {
    pub const ALL: [Modifier; 5] = [
        Modifier::Alt,
        Modifier::Command,
        Modifier::Control,
        Modifier::Oskey,
        Modifier::Shift,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Alt => "ALT",
            Self::Command => "COMMAND",
            Self::Control => "CONTROL",
            Self::Oskey => "OSKEY",
            Self::Shift => "SHIFT",
        }
    }

    /// The modifier a canonical key name denotes, if it is modifier-class.
    pub fn from_key_name(name: KeyName) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|modifier| modifier.as_str() == name.as_str())
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A canonical keyboard shortcut.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Shortcut {
    pub name: String,
    pub key: KeyName,
    pub mods: BTreeSet<Modifier>,
}

impl Shortcut {
    pub fn new(name: impl Into<String>, key: KeyName, mods: impl IntoIterator<Item = Modifier>) -> Self {
        Self {
            name: name.into(),
            key,
            mods: mods.into_iter().collect(),
        }
    }

    /// Identity used for duplicate detection: sorted modifiers then key,
    /// joined with `+` (`CONTROL+SHIFT+Z`). The name plays no part.
    pub fn combo_key(&self) -> String {
        let mut parts: Vec<&str> = self.mods.iter().map(Modifier::as_str).collect();
        parts.push(self.key.as_str());
        parts.join("+")
    }

    /// Human-readable form for logs: quoted name padded to a column, then the combo.
    pub fn signature(&self) -> String {
        format!("{:<45}{}", format!("\"{}\"", self.name), self.combo_key())
    }
}

impl fmt::Display for Shortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" {}", self.name, self.combo_key())
    }
}

/// A shortcut as authored by a source, before its tokens are resolved.
///
/// `any_mod` means the binding fires with any one of `mods`; expansion turns
/// it into one shortcut per modifier.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShortcutDraft {
    pub name: String,
    pub key: String,
    pub mods: Vec<String>,
    pub any_mod: bool,
}

impl ShortcutDraft {
    pub fn new(name: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key: key.into(),
            ..Default::default()
        }
    }

    pub fn with_mods<I, S>(mut self, mods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.mods = mods.into_iter().map(Into::into).collect();
        self
    }

    pub fn any_mod(mut self) -> Self {
        self.any_mod = true;
        self
    }
}

/// Operating system a dataset targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Windows,
    Mac,
    Linux,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Windows, Platform::Mac, Platform::Linux];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Windows => "windows",
            Self::Mac => "mac",
            Self::Linux => "linux",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = MapperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "windows" => Ok(Self::Windows),
            "mac" => Ok(Self::Mac),
            "linux" => Ok(Self::Linux),
            _ => Err(MapperError::UnknownPlatform(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(name: &str) -> KeyName {
        KeyName::new(name).unwrap()
    }

    #[test]
    fn modifier_order_matches_name_order() {
        let mut by_enum = Modifier::ALL.to_vec();
        by_enum.sort();
        let mut by_name = Modifier::ALL.to_vec();
        by_name.sort_by_key(|m| m.as_str());
        assert_eq!(by_enum, by_name);
    }

    #[test]
    fn modifier_from_key_name() {
        assert_eq!(Modifier::from_key_name(key("OSKEY")), Some(Modifier::Oskey));
        assert_eq!(Modifier::from_key_name(key("A")), None);
    }

    #[test]
    fn combo_key_sorts_modifiers() {
        let shortcut = Shortcut::new("Redo", key("Z"), [Modifier::Shift, Modifier::Control]);
        assert_eq!(shortcut.combo_key(), "CONTROL+SHIFT+Z");
    }

    #[test]
    fn duplicate_modifiers_collapse() {
        let shortcut = Shortcut::new("Save", key("S"), [Modifier::Control, Modifier::Control]);
        assert_eq!(shortcut.mods.len(), 1);
    }

    #[test]
    fn signature_pads_name_column() {
        let shortcut = Shortcut::new("Copy", key("C"), [Modifier::Control]);
        let signature = shortcut.signature();
        assert!(signature.starts_with("\"Copy\" "));
        assert!(signature.ends_with("CONTROL+C"));
        assert_eq!(signature.len(), 45 + "CONTROL+C".len());
    }

    #[test]
    fn platform_parse_and_display() {
        assert_eq!("Mac".parse::<Platform>().unwrap(), Platform::Mac);
        assert_eq!(Platform::Linux.to_string(), "linux");
        assert!("beos".parse::<Platform>().is_err());
    }

    #[test]
    fn modifier_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&Modifier::Oskey).unwrap(), "\"OSKEY\"");
    }
}
