use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::style::Color;

use super::types::KeyChord;

/// Canonical color names accepted in `refdeck.conf`.
pub(crate) const COLOR_KEYS: [&str; 18] = [
    "base", "mantle", "crust", "surface1", "surface2", "overlay1", "overlay2", "text",
    "subtext0", "subtext1", "sapphire", "mauve", "green", "yellow", "red", "lavender", "peach",
    "blue",
];

/// What: Parse a single key identifier (e.g., "F5", "Esc", "?", "r") into a [`KeyCode`].
///
/// Inputs:
/// - `s`: Raw key token from a configuration string.
///
/// Output:
/// - `Some(KeyCode)` on success; `None` when the token is unsupported.
///
/// Details:
/// - Character keys are normalized to lowercase.
pub(crate) fn parse_key_identifier(s: &str) -> Option<KeyCode> {
    let t = s.trim();
    if let Some(num) = t
        .strip_prefix(['F', 'f'])
        .and_then(|x| x.parse::<u8>().ok())
    {
        return Some(KeyCode::F(num));
    }
    let named = match t.to_ascii_uppercase().as_str() {
        "ESC" | "ESCAPE" => KeyCode::Esc,
        "ENTER" | "RETURN" => KeyCode::Enter,
        "TAB" => KeyCode::Tab,
        "BACKTAB" => KeyCode::BackTab,
        "BACKSPACE" => KeyCode::Backspace,
        "HOME" => KeyCode::Home,
        "END" => KeyCode::End,
        "PAGEUP" | "PGUP" => KeyCode::PageUp,
        "PAGEDOWN" | "PGDN" => KeyCode::PageDown,
        "UP" => KeyCode::Up,
        "DOWN" => KeyCode::Down,
        "LEFT" => KeyCode::Left,
        "RIGHT" => KeyCode::Right,
        "SPACE" => KeyCode::Char(' '),
        _ => {
            let mut chars = t.chars();
            return match (chars.next(), chars.next()) {
                (Some(ch), None) => Some(KeyCode::Char(ch.to_ascii_lowercase())),
                _ => None,
            };
        }
    };
    Some(named)
}

/// What: Parse a chord such as "Ctrl+R", "Alt+Left" or "Shift+Tab" into a [`KeyChord`].
///
/// Inputs:
/// - `spec`: Modifiers and a key joined with `+`.
///
/// Output:
/// - `Some(KeyChord)` when the key token is valid.
///
/// Details:
/// - `Shift+Tab` becomes `BackTab` without modifiers.
/// - A lone `+` is read as the plus key.
pub(crate) fn parse_key_chord(spec: &str) -> Option<KeyChord> {
    let spec = spec.trim();
    if spec == "+" {
        return Some(KeyChord::plain(KeyCode::Char('+')));
    }
    let mut mods = KeyModifiers::empty();
    let mut key: Option<&str> = None;
    for part in spec.split('+').map(str::trim).filter(|p| !p.is_empty()) {
        match part.to_ascii_uppercase().as_str() {
            "CTRL" | "CONTROL" => mods |= KeyModifiers::CONTROL,
            "ALT" => mods |= KeyModifiers::ALT,
            "SHIFT" => mods |= KeyModifiers::SHIFT,
            _ => key = Some(part),
        }
    }
    let code = parse_key_identifier(key?)?;
    if code == KeyCode::Tab && mods.contains(KeyModifiers::SHIFT) {
        return Some(KeyChord::plain(KeyCode::BackTab));
    }
    Some(KeyChord { code, mods })
}

/// What: Parse a color literal into a [`Color`].
///
/// Inputs:
/// - `s`: `#RRGGBB`, `RRGGBB`, or `R,G,B` (0-255), optionally followed by a comment.
///
/// Output:
/// - `Some(Color::Rgb)` when valid; `None` otherwise.
pub(crate) fn parse_color_value(s: &str) -> Option<Color> {
    let t = strip_inline_comment(s);
    if t.is_empty() {
        return None;
    }
    let hex = t.strip_prefix('#').unwrap_or(t);
    if hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        return Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?));
    }
    let parts: Vec<u8> = t
        .split(',')
        .map(|p| p.trim().parse::<u8>())
        .collect::<Result<_, _>>()
        .ok()?;
    match parts.as_slice() {
        [r, g, b] => Some(Color::Rgb(*r, *g, *b)),
        _ => None,
    }
}

/// What: Map a normalized color key to its canonical palette name.
///
/// Inputs:
/// - `norm`: Lowercase key with `.`/`-`/space replaced by `_`
///
/// Output:
/// - Canonical name, or `None` for unknown keys.
///
/// Details:
/// - Accepts both palette names and role aliases such as `text_primary` or `semantic_error`.
pub(crate) fn canonical_for_key(norm: &str) -> Option<&'static str> {
    let key = norm.strip_prefix("color_").unwrap_or(norm);
    let canon = match key {
        "base" | "background" | "background_base" => "base",
        "mantle" | "background_mantle" => "mantle",
        "crust" | "background_crust" => "crust",
        "surface1" | "surface_level1" => "surface1",
        "surface2" | "surface_level2" => "surface2",
        "overlay1" | "overlay_primary" | "border_primary" => "overlay1",
        "overlay2" | "overlay_secondary" | "border_secondary" => "overlay2",
        "text" | "text_primary" => "text",
        "subtext0" | "text_secondary" => "subtext0",
        "subtext1" | "text_tertiary" => "subtext1",
        "sapphire" | "accent_highlight" => "sapphire",
        "mauve" | "accent_heading" => "mauve",
        "green" | "semantic_success" | "code_string" => "green",
        "yellow" | "semantic_warning" | "code_type" => "yellow",
        "red" | "semantic_error" => "red",
        "lavender" | "accent_border" => "lavender",
        "peach" | "code_number" => "peach",
        "blue" | "code_method" => "blue",
        _ => return None,
    };
    Some(canon)
}

/// What: Suggest the canonical color key closest to a misspelled input.
///
/// Output:
/// - Best match within edit distance 3, if any.
pub(crate) fn nearest_key(input: &str) -> Option<&'static str> {
    COLOR_KEYS
        .iter()
        .map(|k| (*k, levenshtein(input, k)))
        .min_by_key(|(_, d)| *d)
        .filter(|(_, d)| *d <= 3)
        .map(|(k, _)| k)
}

/// Levenshtein edit distance with a single rolling row.
pub(crate) fn levenshtein(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();
    for (i, ca) in a.chars().enumerate() {
        let mut diag = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let above = row[j + 1];
            let cost = usize::from(ca != *cb);
            row[j + 1] = (above + 1).min(row[j] + 1).min(diag + cost);
            diag = above;
        }
    }
    row[b.len()]
}

/// What: Remove an inline comment from a value.
///
/// Inputs:
/// - `s`: Raw value text
///
/// Output:
/// - Trimmed text before any `//`, or before a `#` that is not the first character.
///
/// Details:
/// - A leading `#` survives so `#RRGGBB` colors parse.
pub(crate) fn strip_inline_comment(s: &str) -> &str {
    let mut t = s.trim();
    if let Some(i) = t.find("//") {
        t = &t[..i];
    }
    let search_from = usize::from(t.starts_with('#'));
    if let Some(i) = t[search_from..].find('#') {
        t = &t[..search_from + i];
    }
    t.trim()
}

/// Parse `true/false`, `yes/no`, `on/off`, `1/0`.
pub(crate) fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

/// Split a comma-separated list into trimmed, lowercased, non-empty words.
pub(crate) fn parse_word_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(|w| w.trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}

/// Normalize a config key: lowercase with `.`, `-` and spaces mapped to `_`.
pub(crate) fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase().replace(['.', '-', ' '], "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Key identifiers and chords parse into crossterm codes and modifiers.
    ///
    /// Inputs:
    /// - `F5`, `?`, `Backspace`, `Ctrl+R`, `Shift+Tab`, `Alt+Left`, `+`.
    ///
    /// Output:
    /// - Matching codes with the expected modifier flags.
    fn key_identifier_and_chord() {
        assert_eq!(parse_key_identifier("F5"), Some(KeyCode::F(5)));
        assert_eq!(parse_key_identifier("?"), Some(KeyCode::Char('?')));
        assert_eq!(parse_key_identifier("Backspace"), Some(KeyCode::Backspace));
        assert_eq!(parse_key_identifier("nope"), None);
        let kc = parse_key_chord("Ctrl+R").expect("valid chord");
        assert_eq!(kc.code, KeyCode::Char('r'));
        assert!(kc.mods.contains(KeyModifiers::CONTROL));
        let bt = parse_key_chord("Shift+Tab").expect("valid chord");
        assert_eq!(bt.code, KeyCode::BackTab);
        assert!(bt.mods.is_empty());
        let back = parse_key_chord("alt + left").expect("valid chord");
        assert_eq!(back.code, KeyCode::Left);
        assert_eq!(back.mods, KeyModifiers::ALT);
        assert_eq!(parse_key_chord("+").map(|c| c.code), Some(KeyCode::Char('+')));
        assert!(parse_key_chord("Ctrl+").is_none());
    }

    #[test]
    /// What: Colors parse from hex and triplets; keys resolve through aliases.
    ///
    /// Inputs:
    /// - Hex, triplet, out-of-range triplet, aliases, a typo.
    ///
    /// Output:
    /// - `Color::Rgb` for valid input, canonical names, a close suggestion.
    fn colors_and_canonical_keys() {
        assert_eq!(parse_color_value("#ff0000"), Some(Color::Rgb(255, 0, 0)));
        assert_eq!(parse_color_value("255,0,10 # red"), Some(Color::Rgb(255, 0, 10)));
        assert!(parse_color_value("256,0,0").is_none());
        assert!(parse_color_value("").is_none());
        assert_eq!(canonical_for_key("background_base"), Some("base"));
        assert_eq!(canonical_for_key("color_code_number"), Some("peach"));
        assert_eq!(nearest_key("lavendr"), Some("lavender"));
        assert_eq!(nearest_key("completely_unrelated"), None);
    }

    #[test]
    /// What: Inline comments are stripped without eating hex colors.
    ///
    /// Inputs:
    /// - Values with `//` and `#` comments.
    ///
    /// Output:
    /// - Comment-free values; leading `#` preserved.
    fn strip_inline_comment_variants() {
        assert_eq!(strip_inline_comment("#ff00ff # tail"), "#ff00ff");
        assert_eq!(strip_inline_comment("abc // hi"), "abc");
        assert_eq!(strip_inline_comment("20 # items"), "20");
    }

    #[test]
    /// What: Booleans and word lists accept the usual spellings.
    ///
    /// Inputs:
    /// - `on`, `No`, `maybe`; " a, B ,,c".
    ///
    /// Output:
    /// - true, false, None; ["a", "b", "c"].
    fn bools_and_lists() {
        assert_eq!(parse_bool("on"), Some(true));
        assert_eq!(parse_bool("No"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
        assert_eq!(parse_word_list(" a, B ,,c"), vec!["a", "b", "c"]);
        assert_eq!(normalize_key(" Page-Size "), "page_size");
    }
}
