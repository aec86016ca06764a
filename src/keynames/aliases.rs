//! Static key name data.
//!
//! `KEY_ALIASES` maps lowercase human/locale spellings and symbols to one or
//! more canonical key names. Entries with two names are physically ambiguous
//! symbols (the main row and the numpad both carry them); entries with many
//! names describe a whole class of keys.
//!
//! Append-only. Keep canonical names UPPER_SNAKE_CASE.

const DIGITS_AND_NUMPAD: &[&str] = &[
    "ONE",
    "NUMPAD_ONE",
    "TWO",
    "NUMPAD_TWO",
    "THREE",
    "NUMPAD_THREE",
    "FOUR",
    "NUMPAD_FOUR",
    "FIVE",
    "NUMPAD_FIVE",
    "SIX",
    "NUMPAD_SIX",
    "SEVEN",
    "NUMPAD_SEVEN",
    "EIGHT",
    "NUMPAD_EIGHT",
    "NINE",
    "NUMPAD_NINE",
    "ZERO",
    "NUMPAD_ZERO",
];

const ARROWS: &[&str] = &["UP_ARROW", "DOWN_ARROW", "LEFT_ARROW", "RIGHT_ARROW"];

pub(super) const KEY_ALIASES: &[(&str, &[&str])] = &[
    // ASCII and Latin-1 punctuation
    ("§", &["SECTION"]),
    ("!", &["EXCLAMATION"]),
    ("@", &["AT"]),
    ("£", &["POUND"]),
    ("$", &["DOLLAR"]),
    ("%", &["PERCENT"]),
    ("^", &["CARET"]),
    ("&", &["AMPERSAND"]),
    ("(", &["LEFT_PARENTHESIS"]),
    (")", &["RIGHT_PARENTHESIS"]),
    ("_", &["UNDERSCORE"]),
    ("[", &["LEFT_BRACKET"]),
    ("]", &["RIGHT_BRACKET"]),
    ("{", &["LEFT_BRACE"]),
    ("}", &["RIGHT_BRACE"]),
    (";", &["SEMICOLON"]),
    (":", &["COLON"]),
    ("'", &["SINGLE_QUOTE"]),
    ("‘", &["SINGLE_QUOTE"]),
    ("\"", &["DOUBLE_QUOTE"]),
    ("\\", &["BACKSLASH"]),
    ("|", &["VERTICAL_BAR"]),
    ("?", &["QUESTION_MARK"]),
    ("<", &["LESSTHAN"]),
    (">", &["MORETHAN"]),
    (",", &["COMMA"]),
    ("`", &["ACCENT_GRAVE"]),
    ("~", &["TILDE"]),
    ("#", &["HASH"]),
    ("±", &["PLUSMINUS"]),
    // Numbers and maths, ambiguous between main row and numpad
    ("number", DIGITS_AND_NUMPAD),
    ("number keys", DIGITS_AND_NUMPAD),
    ("1", &["ONE", "NUMPAD_ONE"]),
    ("2", &["TWO", "NUMPAD_TWO"]),
    ("3", &["THREE", "NUMPAD_THREE"]),
    ("4", &["FOUR", "NUMPAD_FOUR"]),
    ("5", &["FIVE", "NUMPAD_FIVE"]),
    ("6", &["SIX", "NUMPAD_SIX"]),
    ("7", &["SEVEN", "NUMPAD_SEVEN"]),
    ("8", &["EIGHT", "NUMPAD_EIGHT"]),
    ("9", &["NINE", "NUMPAD_NINE"]),
    ("0", &["ZERO", "NUMPAD_ZERO"]),
    ("-", &["MINUS", "NUMPAD_MINUS"]),
    ("–", &["MINUS", "NUMPAD_MINUS"]),
    ("+", &["PLUS", "NUMPAD_PLUS"]),
    ("=", &["EQUAL", "NUMPAD_EQUAL"]),
    ("*", &["ASTERISK", "NUMPAD_ASTERISK"]),
    ("/", &["SLASH", "NUMPAD_SLASH"]),
    (".", &["PERIOD", "NUMPAD_PERIOD"]),
    // Numpad qualified
    ("numpad_0", &["NUMPAD_ZERO"]),
    ("numpad_1", &["NUMPAD_ONE"]),
    ("numpad_2", &["NUMPAD_TWO"]),
    ("numpad_3", &["NUMPAD_THREE"]),
    ("numpad_4", &["NUMPAD_FOUR"]),
    ("numpad_5", &["NUMPAD_FIVE"]),
    ("numpad_6", &["NUMPAD_SIX"]),
    ("numpad_7", &["NUMPAD_SEVEN"]),
    ("numpad_8", &["NUMPAD_EIGHT"]),
    ("numpad_9", &["NUMPAD_NINE"]),
    ("numpad 0", &["NUMPAD_ZERO"]),
    ("numpad 1", &["NUMPAD_ONE"]),
    ("numpad 2", &["NUMPAD_TWO"]),
    ("numpad 3", &["NUMPAD_THREE"]),
    ("numpad 4", &["NUMPAD_FOUR"]),
    ("numpad 5", &["NUMPAD_FIVE"]),
    ("numpad 6", &["NUMPAD_SIX"]),
    ("numpad 7", &["NUMPAD_SEVEN"]),
    ("numpad 8", &["NUMPAD_EIGHT"]),
    ("numpad 9", &["NUMPAD_NINE"]),
    ("numpad -", &["NUMPAD_MINUS"]),
    ("numpad +", &["NUMPAD_PLUS"]),
    ("numpad =", &["NUMPAD_EQUAL"]),
    ("numpad *", &["NUMPAD_ASTERISK"]),
    ("numpad /", &["NUMPAD_SLASH"]),
    ("numpad .", &["NUMPAD_PERIOD"]),
    ("numpad enter", &["NUMPAD_ENTER"]),
    ("numpad return", &["NUMPAD_ENTER"]),
    // Locale keycaps (Latin-1 supplement)
    ("¡", &["INVERTED_EXCLAMATION"]),
    ("¢", &["CENT"]),
    ("¤", &["CURRENCY"]),
    ("¥", &["YEN"]),
    ("¦", &["BROKEN_VBAR"]),
    ("¨", &["UMLAUT"]),
    ("©", &["COPYRIGHT"]),
    ("ª", &["FEMININ_ORDINAL"]),
    ("«", &["LEFT_DOUBLE_ANGLE_QUOTES"]),
    ("¬", &["NOT_SIGN"]),
    ("®", &["TRADEMARK"]),
    ("¯", &["OVERLINE"]),
    ("°", &["DEGREE_SIGN"]),
    ("²", &["SQUARED_SIGN"]),
    ("³", &["CUBED_SIGN"]),
    ("´", &["ACCENT_ACUTE"]),
    ("µ", &["MICRO_SIGN"]),
    ("¶", &["PARAGRAPH_SIGN"]),
    ("·", &["GEORGIAN_COMMA"]),
    ("¸", &["CEDILLA_SIGN"]),
    ("¹", &["SUPERSCRIPT_ONE"]),
    ("º", &["MASCULIN_ORDINAL_SIGN"]),
    ("»", &["RIGHT_DOUBLE_ANGLE_QUOTES"]),
    ("¼", &["ONE_QUARTER_SIGN"]),
    ("½", &["ONE_HALF_SIGN"]),
    ("¾", &["THREE_QUARTERS_SIGN"]),
    ("¿", &["INVERTED_QUESTION_MARK"]),
    ("À", &["CAP_A_GRAVE"]),
    ("Á", &["CAP_A_ACUTE"]),
    ("Â", &["CAP_A_CIRC"]),
    ("Ã", &["CAP_A_TILDE"]),
    ("Ä", &["CAP_A_UML"]),
    ("Å", &["CAP_A_RING"]),
    ("Æ", &["CAP_AE"]),
    ("Ç", &["CAP_C_CEDIL"]),
    ("È", &["CAP_E_GRAVE"]),
    ("É", &["CAP_E_ACUTE"]),
    ("Ê", &["CAP_E_CIRC"]),
    ("Ë", &["CAP_E_UML"]),
    ("Ì", &["CAP_I_GRAVE"]),
    ("Í", &["CAP_I_ACUTE"]),
    ("Î", &["CAP_I_CIRC"]),
    ("Ï", &["CAP_I_UML"]),
    ("Ð", &["CAP_ETH"]),
    ("Ñ", &["CAP_N_TILDE"]),
    ("Ò", &["CAP_O_GRAVE"]),
    ("Ó", &["CAP_O_ACUTE"]),
    ("Ô", &["CAP_O_CIRC"]),
    ("Õ", &["CAP_O_TILDE"]),
    ("Ö", &["CAP_O_UML"]),
    ("×", &["TIMES"]),
    ("Ø", &["CAP_O_SLASH"]),
    ("Ù", &["CAP_U_GRAVE"]),
    ("Ú", &["CAP_U_ACUTE"]),
    ("Û", &["CAP_U_CIRC"]),
    ("Ü", &["CAP_U_UML"]),
    ("Ý", &["CAP_Y_ACUTE"]),
    ("Þ", &["CAP_THORN"]),
    ("ß", &["SZLIG"]),
    ("à", &["A_GRAVE"]),
    ("á", &["A_ACUTE"]),
    ("â", &["A_CIRC"]),
    ("ã", &["A_TILDE"]),
    ("ä", &["A_UML"]),
    ("å", &["A_RING"]),
    ("æ", &["AE"]),
    ("ç", &["C_CEDIL"]),
    ("è", &["E_GRAVE"]),
    ("é", &["E_ACUTE"]),
    ("ê", &["E_CIRC"]),
    ("ë", &["E_UML"]),
    ("ì", &["I_GRAVE"]),
    ("í", &["I_ACUTE"]),
    ("î", &["I_CIRC"]),
    ("ï", &["I_UML"]),
    ("ð", &["ETH"]),
    ("ñ", &["N_TILDE"]),
    ("ò", &["O_GRAVE"]),
    ("ó", &["O_ACUTE"]),
    ("ô", &["O_CIRC"]),
    ("õ", &["O_TILDE"]),
    ("ö", &["O_UML"]),
    ("÷", &["DIVIDE"]),
    ("ø", &["O_SLASH"]),
    ("ù", &["U_GRAVE"]),
    ("ú", &["U_ACUTE"]),
    ("û", &["U_CIRC"]),
    ("ü", &["U_UML"]),
    ("ý", &["Y_ACUTE"]),
    ("þ", &["THORN"]),
    ("ÿ", &["Y_UML"]),
    // Latin extended and typographic symbols
    ("Œ", &["CAP_OE"]),
    ("œ", &["OE"]),
    ("Š", &["CAP_S_CARON"]),
    ("š", &["S_CARON"]),
    ("Ÿ", &["CAP_Y_UML"]),
    ("ƒ", &["FUNCTION"]),
    ("—", &["MINUS"]),
    ("’", &["SINGLE_QUOTE_RIGHT"]),
    ("“", &["DOUBLE_QUOTE"]),
    ("”", &["DOUBLE_QUOTE_RIGHT"]),
    ("„", &["DOUBLE_QUOTE_LOW"]),
    ("†", &["DAGGER"]),
    ("‡", &["DOUBLE_DAGGER"]),
    ("•", &["BULLET"]),
    ("…", &["ELLIPSIS"]),
    ("‰", &["PER_THOUSAND"]),
    ("€", &["EURO"]),
    ("™", &["TRADEMARK"]),
    // Modifiers. Left/right forms collapse onto the unqualified modifier.
    ("left_shift", &["SHIFT"]),
    ("right_shift", &["SHIFT"]),
    ("left shift", &["SHIFT"]),
    ("right shift", &["SHIFT"]),
    ("ctrl", &["CONTROL"]),
    ("left_ctrl", &["CONTROL"]),
    ("right_ctrl", &["CONTROL"]),
    ("left ctrl", &["CONTROL"]),
    ("right ctrl", &["CONTROL"]),
    ("left_alt", &["ALT"]),
    ("right_alt", &["ALT"]),
    ("left alt", &["ALT"]),
    ("right alt", &["ALT"]),
    ("option", &["ALT"]),
    ("opt", &["ALT"]),
    ("left_opt", &["ALT"]),
    ("right_opt", &["ALT"]),
    ("cmd", &["COMMAND"]),
    ("left_cmd", &["COMMAND"]),
    ("right_cmd", &["COMMAND"]),
    ("left cmd", &["COMMAND"]),
    ("right cmd", &["COMMAND"]),
    ("win", &["OSKEY"]),
    ("windows", &["OSKEY"]),
    ("super", &["OSKEY"]),
    // Named non-printable keys
    ("esc", &["ESCAPE"]),
    ("caps lock", &["CAPSLOCK"]),
    ("space", &["SPACE"]),
    ("spacebar", &["SPACE"]),
    ("back_space", &["BACKSPACE"]),
    ("back space", &["BACKSPACE"]),
    ("return", &["ENTER"]),
    ("ret", &["ENTER"]),
    ("del", &["DELETE"]),
    ("ins", &["INSERT"]),
    ("hom", &["HOME"]),
    ("pgup", &["PAGE_UP"]),
    ("pgdn", &["PAGE_DOWN"]),
    ("pageup", &["PAGE_UP"]),
    ("pagedown", &["PAGE_DOWN"]),
    ("pagedn", &["PAGE_DOWN"]),
    ("page up", &["PAGE_UP"]),
    ("page down", &["PAGE_DOWN"]),
    // Arrows
    ("arrow keys", ARROWS),
    ("arrows", ARROWS),
    ("up", &["UP_ARROW"]),
    ("up arrow", &["UP_ARROW"]),
    ("uparrow", &["UP_ARROW"]),
    ("up arrow key", &["UP_ARROW"]),
    ("↑", &["UP_ARROW"]),
    ("down", &["DOWN_ARROW"]),
    ("down arrow", &["DOWN_ARROW"]),
    ("downarrow", &["DOWN_ARROW"]),
    ("down arrow key", &["DOWN_ARROW"]),
    ("↓", &["DOWN_ARROW"]),
    ("left", &["LEFT_ARROW"]),
    ("left arrow", &["LEFT_ARROW"]),
    ("leftarrow", &["LEFT_ARROW"]),
    ("left arrow key", &["LEFT_ARROW"]),
    ("←", &["LEFT_ARROW"]),
    ("right", &["RIGHT_ARROW"]),
    ("right arrow", &["RIGHT_ARROW"]),
    ("rightarrow", &["RIGHT_ARROW"]),
    ("right arrow key", &["RIGHT_ARROW"]),
    ("→", &["RIGHT_ARROW"]),
    // System and media
    ("prtscr", &["PRINT_SCREEN"]),
    ("break", &["PAUSE_BREAK"]),
    ("pause", &["PAUSE_BREAK"]),
    ("media_first", &["MEDIA_PREVIOUS"]),
    ("media_last", &["MEDIA_NEXT"]),
];

/// Canonical names with no alias and no ambiguity risk.
pub(super) const PLAIN_KEY_NAMES: &[&str] = &[
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q", "R", "S",
    "T", "U", "V", "W", "X", "Y", "Z", "F1", "F2", "F3", "F4", "F5", "F6", "F7", "F8", "F9", "F10",
    "F11", "F12", "F13", "F14", "F15", "F16", "F17", "F18", "F19", "SHIFT", "ALT", "TAB", "END",
    "NUMLOCK", "EJECT", "FN_KEY", "CLEAR", "MEDIA_PLAY", "MEDIA_STOP", "SCROLL_LOCK", "CAPSLOCK",
    "NUMPAD_ENTER",
];
