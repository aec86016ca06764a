use super::*;
use crate::diagnostics::CollectingSink;

fn candidate(key: &str, mods: &[&str]) -> ComboCandidate {
    ComboCandidate::new(key, mods.iter().copied())
}

fn keys(candidates: &[ComboCandidate]) -> Vec<&str> {
    candidates.iter().map(|c| c.key.as_str()).collect()
}

#[test]
fn test_empty_input_yields_nothing() {
    assert!(parse_combo("").is_empty());
    assert!(parse_combo("   ").is_empty());
}

#[test]
fn test_single_key_is_unchanged() {
    assert_eq!(parse_combo("A"), vec![candidate("A", &[])]);
}

#[test]
fn test_modifiers_are_trimmed() {
    assert_eq!(
        parse_combo("Ctrl + Shift + T"),
        vec![candidate("T", &["Ctrl", "Shift"])]
    );
    assert_eq!(parse_combo("Cmd+Option+I"), vec![candidate("I", &["Cmd", "Option"])]);
}

#[test]
fn test_digit_range_expands_per_key() {
    let parsed = parse_combo("Ctrl + 0-3");
    assert_eq!(keys(&parsed), vec!["0", "1", "2", "3"]);
    assert!(parsed.iter().all(|c| c.mods == vec!["Ctrl".to_string()]));
}

#[test]
fn test_spaced_digit_range() {
    assert_eq!(keys(&parse_combo("Ctrl + 0 - 8")).len(), 9);
}

#[test]
fn test_numpad_range_keeps_qualification() {
    assert_eq!(
        keys(&parse_combo("Alt + Numpad 1-3")),
        vec!["Numpad 1", "Numpad 2", "Numpad 3"]
    );
}

#[test]
fn test_reversed_range_follows_keyboard_row() {
    let parsed = parse_combo("Shift + 1-0");
    assert_eq!(parsed.len(), 10);
    assert_eq!(parsed.first().unwrap().key, "1");
    assert_eq!(parsed.last().unwrap().key, "0");
}

#[test]
fn test_number_word_expands_to_all_digits() {
    let parsed = parse_combo("Ctrl + Numbers");
    assert_eq!(keys(&parsed), vec!["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"]);
    assert_eq!(keys(&parse_combo("Numpad number keys"))[0], "Numpad 0");
}

#[test]
fn test_slash_alternatives() {
    assert_eq!(
        parse_combo("Space / Z"),
        vec![candidate("Space", &[]), candidate("Z", &[])]
    );
    assert_eq!(
        parse_combo("Shift + ] / Shift + ["),
        vec![candidate("]", &["Shift"]), candidate("[", &["Shift"])]
    );
}

#[test]
fn test_or_alternatives() {
    assert_eq!(
        parse_combo("Spacebar or Z"),
        vec![candidate("Spacebar", &[]), candidate("Z", &[])]
    );
}

#[test]
fn test_or_and_slash_cross_product() {
    assert_eq!(
        keys(&parse_combo("Up Arrow / Down Arrow or + / -")),
        vec!["Up Arrow", "Down Arrow", "+", "-"]
    );
    let parsed = parse_combo("Shift + Up Arrow / Shift + Down Arrow or Shift + + / Shift + -");
    assert_eq!(keys(&parsed), vec!["Up Arrow", "Down Arrow", "+", "-"]);
    assert!(parsed.iter().all(|c| c.mods == vec!["Shift".to_string()]));
}

#[test]
fn test_literal_plus_and_slash_keys() {
    assert_eq!(parse_combo("+"), vec![candidate("+", &[])]);
    assert_eq!(parse_combo("/"), vec![candidate("/", &[])]);
    assert_eq!(parse_combo("Alt + +"), vec![candidate("+", &["Alt"])]);
    assert_eq!(parse_combo("Ctrl + /"), vec![candidate("/", &["Ctrl"])]);
    assert_eq!(parse_combo("Ctrl++"), vec![candidate("+", &["Ctrl"])]);
    assert_eq!(parse_combo("Ctrl+/"), vec![candidate("/", &["Ctrl"])]);
    assert_eq!(
        parse_combo("- / +"),
        vec![candidate("-", &[]), candidate("+", &[])]
    );
    assert_eq!(
        parse_combo("+ / -"),
        vec![candidate("+", &[]), candidate("-", &[])]
    );
}

#[test]
fn test_numpad_symbols_are_protected() {
    assert_eq!(
        parse_combo("Ctrl + Numpad +"),
        vec![candidate("NUMPAD_PLUS", &["Ctrl"])]
    );
    assert_eq!(parse_combo("numpad /"), vec![candidate("NUMPAD_SLASH", &[])]);
}

#[test]
fn test_modifier_dash_typo_is_fixed() {
    assert_eq!(parse_combo("Shift -"), vec![candidate("-", &["Shift"])]);
    assert_eq!(
        parse_combo("Ctrl = / Ctrl -"),
        vec![candidate("=", &["Ctrl"]), candidate("-", &["Ctrl"])]
    );
    assert_eq!(
        parse_combo("Shift - or Z"),
        vec![candidate("-", &["Shift"]), candidate("Z", &[])]
    );
}

#[test]
fn test_modifier_dash_before_a_key_is_left_alone() {
    assert_eq!(parse_combo("Shift - 8"), vec![candidate("Shift - 8", &[])]);
}

#[test]
fn test_pointer_bindings_are_dropped_silently() {
    let mut sink = CollectingSink::new();
    assert!(parse_combo_with("Select", "Double-click slider", &mut sink).is_empty());
    assert!(parse_combo_with("Select", "Alt + Drag", &mut sink).is_empty());
    assert!(sink.is_empty());
}

#[test]
fn test_pointer_alternative_does_not_drop_keyboard_one() {
    assert_eq!(
        parse_combo("Shift + click or Shift + F"),
        vec![candidate("F", &["Shift"])]
    );
}

#[test]
fn test_missing_main_key_is_reported() {
    let mut sink = CollectingSink::new();
    let parsed = parse_combo_with("Redo", "Ctrl + Shift + ", &mut sink);
    assert!(parsed.is_empty());
    assert_eq!(
        sink.diagnostics(),
        &[Diagnostic::MissingKey {
            shortcut: "Redo".to_string(),
            text: "Ctrl + Shift +".to_string()
        }]
    );
    assert_eq!(
        sink.diagnostics()[0].to_string(),
        "skipping \"Redo\": no main key in combo 'Ctrl + Shift +'"
    );
}

#[test]
fn test_trailing_separator_is_not_reported() {
    let mut sink = CollectingSink::new();
    assert_eq!(
        parse_combo_with("Undo", "Ctrl + Z /", &mut sink),
        vec![candidate("Z", &["Ctrl"])]
    );
    assert_eq!(
        parse_combo_with("Undo", "Ctrl + Z / ", &mut sink),
        vec![candidate("Z", &["Ctrl"])]
    );
    assert!(sink.is_empty());
}

#[test]
fn test_range_must_span_whole_key() {
    let mut sink = CollectingSink::new();
    assert_eq!(
        parse_combo_with("Switch", "Alt + F1-F4", &mut sink),
        vec![candidate("F1-F4", &["Alt"])]
    );
    assert_eq!(
        parse_combo_with("Switch", "Ctrl + F10-12", &mut sink),
        vec![candidate("F10-12", &["Ctrl"])]
    );
    assert_eq!(keys(&parse_combo("Tab 1-3")), vec!["Tab 1-3"]);
}

#[test]
fn test_numpad_on_both_range_ends() {
    assert_eq!(
        keys(&parse_combo("Ctrl + Numpad 1 - Numpad 3")),
        vec!["Numpad 1", "Numpad 2", "Numpad 3"]
    );
    assert_eq!(
        keys(&parse_combo("1 - numpad 2")),
        vec!["Numpad 1", "Numpad 2"]
    );
}
