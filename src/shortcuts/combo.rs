//! Free-text key combo parsing.
//!
//! Handles the formats found in scraped documentation:
//! - `"T"`, `"Ctrl + T"`, `"Control+T"`
//! - `"Alt + +"`, `"Ctrl + /"` (literal `+` and `/` keys)
//! - `"Ctrl + 0 - 8"`, `"Numpad 1-9"` (digit ranges)
//! - `"Shift + ] / Shift + ["`, `"Spacebar or Z"` (alternatives)
//!
//! Output tokens are still raw text; resolution happens in [`super::expand`].

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::diagnostics::{Diagnostic, DiagnosticSink, TracingSink};

const TEMP_PLUS: &str = "TEMP_PLUS";
const TEMP_SLASH: &str = "TEMP_SLASH";

/// One alternative of a parsed combo: a main key token plus modifier tokens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComboCandidate {
    pub key: String,
    pub mods: Vec<String>,
}

impl ComboCandidate {
    pub fn new<S: Into<String>>(key: impl Into<String>, mods: impl IntoIterator<Item = S>) -> Self {
        Self {
            key: key.into(),
            mods: mods.into_iter().map(Into::into).collect(),
        }
    }
}

struct Patterns {
    numpad_plus: Regex,
    numpad_slash: Regex,
    modifier_typo: Regex,
    digit_range: Regex,
    number_word: Regex,
}

static PATTERNS: OnceLock<Patterns> = OnceLock::new();

fn patterns() -> &'static Patterns {
    PATTERNS.get_or_init(|| Patterns {
        numpad_plus: Regex::new(r"(?i)numpad \+").expect("valid regex"),
        numpad_slash: Regex::new(r"(?i)numpad /").expect("valid regex"),
        // "Shift -" is a documentation typo for "Shift + -", only when the
        // dash ends the alternative
        modifier_typo: Regex::new(
            r"(?i)\b(shift|ctrl|control|alt|opt|option|cmd|command)\s+([-=])(\s*$|\s+/|\s+or\s)",
        )
        .expect("valid regex"),
        digit_range: Regex::new(
            r"(?i)^(numpad\s*)?([0-9])\s*[-–]\s*(numpad\s*)?([0-9])$",
        )
        .expect("valid regex"),
        number_word: Regex::new(r"(?i)^(numpad\s+)?numbers?(\s+keys)?$").expect("valid regex"),
    })
}

/// Parse one platform's raw shortcut text, reporting dropped alternatives to
/// the tracing sink under the text itself.
pub fn parse_combo(raw: &str) -> Vec<ComboCandidate> {
    parse_combo_with(raw, raw, &mut TracingSink::new())
}

/// Parse the raw key text of the shortcut named `shortcut` into its
/// alternatives.
///
/// Never fails: malformed alternatives are dropped and reported, pointer
/// bindings (click/drag) and empty alternatives left by trailing separators
/// are dropped silently.
pub fn parse_combo_with(
    shortcut: &str,
    raw: &str,
    sink: &mut dyn DiagnosticSink,
) -> Vec<ComboCandidate> {
    let text = normalize(raw);
    if text.is_empty() {
        return Vec::new();
    }

    let mut candidates = Vec::new();
    for alternative in text.split(" or ").flat_map(|part| part.split('/')) {
        if alternative.trim().is_empty() {
            continue;
        }
        let lowered = alternative.to_lowercase();
        if lowered.contains("click") || lowered.contains("drag") {
            debug!(combo = alternative, "Skipping pointer binding");
            continue;
        }

        let Some((key, mods)) = split_combo(alternative) else {
            sink.report(Diagnostic::MissingKey {
                shortcut: shortcut.to_string(),
                text: alternative.trim().to_string(),
            });
            continue;
        };

        match expand_digit_range(&key) {
            Some(keys) => candidates.extend(
                keys.into_iter()
                    .map(|key| ComboCandidate { key, mods: mods.clone() }),
            ),
            None => candidates.push(ComboCandidate { key, mods }),
        }
    }
    candidates
}

/// Protect literal `+` / `/` keys from being read as separators and fix
/// known upstream typos.
fn normalize(raw: &str) -> String {
    let patterns = patterns();
    let text = raw.trim();
    if text.is_empty() {
        return String::new();
    }
    if text == "+" {
        return TEMP_PLUS.to_string();
    }
    if text == "/" {
        return TEMP_SLASH.to_string();
    }

    let text = patterns.numpad_plus.replace_all(text, "NUMPAD_PLUS");
    let text = patterns.numpad_slash.replace_all(&text, "NUMPAD_SLASH");
    let text = patterns.modifier_typo.replace_all(&text, "$1 + $2$3");

    let mut text = text
        .replace(" or +", " or TEMP_PLUS")
        .replace(" or /", " or TEMP_SLASH")
        .replace(" + +", " + TEMP_PLUS")
        .replace(" + /", " + TEMP_SLASH")
        .replace("++", "+TEMP_PLUS")
        .replace("+/", "+TEMP_SLASH");

    if let Some(rest) = text.strip_prefix("+ ") {
        text = format!("{TEMP_PLUS} {rest}");
    } else if let Some(rest) = text.strip_prefix("/ ") {
        text = format!("{TEMP_SLASH} {rest}");
    }
    text.trim().to_string()
}

/// Split one alternative into (main key, modifiers). `None` when there is no
/// main key.
fn split_combo(alternative: &str) -> Option<(String, Vec<String>)> {
    let trimmed = alternative.trim();
    if trimmed == "+" {
        return Some(("+".to_string(), Vec::new()));
    }

    let mut parts: Vec<&str> = trimmed.split('+').collect();
    let key = match parts.pop()?.trim() {
        TEMP_PLUS => "+",
        TEMP_SLASH => "/",
        key => key,
    };
    if key.is_empty() {
        return None;
    }

    let mods = parts.iter().map(|m| m.trim().to_string()).collect();
    Some((key.to_string(), mods))
}

/// `"0-8"`, `"Numpad 1 - 3"`, `"Numpad 1 - Numpad 9"`, `"numbers"` → one key
/// token per digit. The whole token must be the range; `"F10-12"` is not one.
fn expand_digit_range(key: &str) -> Option<Vec<String>> {
    let patterns = patterns();
    let key = key.trim();

    let (digits, numpad): (Vec<u32>, bool) = if patterns.number_word.is_match(key) {
        ((0..=9).collect(), key.to_lowercase().contains("numpad"))
    } else {
        let caps = patterns.digit_range.captures(key)?;
        let numpad = caps.get(1).is_some() || caps.get(3).is_some();
        let start = caps[2].parse::<u32>().ok()?;
        let end = caps[4].parse::<u32>().ok()?;
        let digits: Vec<u32> = if start <= end {
            (start..=end).collect()
        } else {
            // "1-0" follows the keyboard row: 1..9 then 0
            (start..=9).chain(0..=end).collect()
        };
        (digits, numpad)
    };

    Some(
        digits
            .into_iter()
            .map(|digit| {
                if numpad {
                    format!("Numpad {digit}")
                } else {
                    digit.to_string()
                }
            })
            .collect(),
    )
}

#[cfg(test)]
#[path = "combo_tests.rs"]
mod tests;
