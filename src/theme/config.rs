//! Parsing of `refdeck.conf`.
//!
//! One `key = value` file carries colors, settings and key bindings. Parsing
//! is forgiving: invalid lines produce a diagnostic and keep the default.

use std::fs;
use std::path::Path;

use super::parsing::{
    canonical_for_key, nearest_key, normalize_key, parse_bool, parse_color_value,
    parse_key_chord, parse_word_list, strip_inline_comment,
};
use super::types::{KeyChord, KeyMap, Settings, Theme};

/// Content written when no configuration file exists yet.
pub const CONFIG_SKELETON: &str = "# refdeck configuration\n\
#\n\
# Format: key = value; lines starting with # are comments.\n\
# Colors accept #RRGGBB or R,G,B (0-255 each).\n\
#\n\
# ---------- Colors (Catppuccin Mocha) ----------\n\
background_base = #1e1e2e\n\
background_mantle = #181825\n\
background_crust = #11111b\n\
surface_level1 = #45475a\n\
surface_level2 = #585b70\n\
overlay_primary = #7f849c\n\
overlay_secondary = #9399b2\n\
text_primary = #cdd6f4\n\
text_secondary = #a6adc8\n\
text_tertiary = #bac2de\n\
accent_highlight = #74c7ec\n\
accent_heading = #cba6f7\n\
accent_border = #b4befe\n\
semantic_success = #a6e3a1\n\
semantic_warning = #f9e2af\n\
semantic_error = #f38ba8\n\
code_number = #fab387\n\
code_method = #89b4fa\n\
\n\
# ---------- Browsing ----------\n\
# Cards revealed per load (minimum 1)\n\
page_size = 20\n\
# Load more when the cursor is this many cards from the end\n\
prefetch_margin = 3\n\
sidebar_width = 24\n\
show_keybinds_footer = true\n\
# Comma-separated words never emphasized in descriptions\n\
highlight_exclude_words =\n\
\n\
# ---------- Key bindings ----------\n\
keybind_help = F1\n\
keybind_exit = Ctrl+C\n\
keybind_reload_config = Ctrl+R\n\
keybind_focus_next = Tab\n\
keybind_focus_prev = Shift+Tab\n\
keybind_move_up = Up\n\
keybind_move_down = Down\n\
keybind_page_up = PgUp\n\
keybind_page_down = PgDn\n\
keybind_activate = Enter\n\
keybind_search = /\n\
keybind_back = Alt+Left\n\
keybind_toggle_sidebar = Ctrl+B\n\
keybind_clear_filters = Ctrl+L\n";

/// Result of parsing one configuration document.
#[derive(Clone, Debug, Default)]
pub struct ParsedConfig {
    /// Palette with overrides applied on top of the default.
    pub theme: Theme,
    /// Settings with overrides applied on top of the default.
    pub settings: Settings,
    /// Human-readable problems, one per rejected line.
    pub diagnostics: Vec<String>,
}

/// What: Look up the key binding slot a `keybind_*` key refers to.
///
/// Inputs:
/// - `keymap`: Keymap being filled
/// - `action`: Key with the `keybind_` prefix removed
///
/// Output:
/// - Mutable slot, or `None` for unknown actions.
fn keybind_slot<'a>(keymap: &'a mut KeyMap, action: &str) -> Option<&'a mut Vec<KeyChord>> {
    let slot = match action {
        "help" | "help_overlay" => &mut keymap.help,
        "exit" | "quit" => &mut keymap.exit,
        "reload_config" | "reload" => &mut keymap.reload_config,
        "focus_next" => &mut keymap.focus_next,
        "focus_prev" => &mut keymap.focus_prev,
        "move_up" => &mut keymap.move_up,
        "move_down" => &mut keymap.move_down,
        "page_up" => &mut keymap.page_up,
        "page_down" => &mut keymap.page_down,
        "activate" | "toggle" => &mut keymap.activate,
        "search" => &mut keymap.search,
        "back" => &mut keymap.back,
        "toggle_sidebar" | "sidebar" => &mut keymap.toggle_sidebar,
        "clear_filters" => &mut keymap.clear_filters,
        _ => return None,
    };
    Some(slot)
}

/// What: Apply one settings key.
///
/// Inputs:
/// - `settings`: Target
/// - `key`: Normalized key
/// - `val`: Value with comments stripped
///
/// Output:
/// - `None` when the key is not a settings key; `Some(Err(msg))` for an invalid value.
fn apply_setting(settings: &mut Settings, key: &str, val: &str) -> Option<Result<(), String>> {
    let invalid = |what: &str| Err(format!("invalid {what} '{val}' for '{key}'"));
    let outcome = match key {
        "page_size" | "items_per_load" => match val.parse::<usize>() {
            Ok(n) if n >= 1 => {
                settings.page_size = n;
                Ok(())
            }
            _ => invalid("positive integer"),
        },
        "prefetch_margin" => val
            .parse::<usize>()
            .map(|n| settings.prefetch_margin = n)
            .or_else(|_| invalid("integer")),
        "sidebar_width" => match val.parse::<u16>() {
            Ok(n) if (10..=80).contains(&n) => {
                settings.sidebar_width = n;
                Ok(())
            }
            _ => invalid("width (10-80)"),
        },
        "show_keybinds_footer" => match parse_bool(val) {
            Some(b) => {
                settings.show_keybinds_footer = b;
                Ok(())
            }
            None => invalid("boolean"),
        },
        "highlight_exclude_words" | "exclude_words" => {
            settings.highlight_exclude_words = parse_word_list(val);
            Ok(())
        }
        _ => {
            let action = key.strip_prefix("keybind_")?;
            let Some(slot) = keybind_slot(&mut settings.keymap, action) else {
                return Some(Err(format!("unknown key binding '{key}'")));
            };
            match parse_key_chord(val) {
                Some(chord) => {
                    *slot = vec![chord];
                    Ok(())
                }
                None => invalid("key chord"),
            }
        }
    };
    Some(outcome)
}

/// What: Parse configuration text.
///
/// Inputs:
/// - `content`: Full file content
///
/// Output:
/// - [`ParsedConfig`] with every valid line applied and diagnostics for the rest.
///
/// Details:
/// - Settings and `keybind_*` keys are tried first; any other key must be a color.
/// - Later lines override earlier ones.
#[must_use]
pub fn parse_config(content: &str) -> ParsedConfig {
    let mut out = ParsedConfig::default();
    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
            continue;
        }
        let Some((raw_key, raw_val)) = trimmed.split_once('=') else {
            out.diagnostics.push(format!("line {line_no}: missing '='"));
            continue;
        };
        let key = normalize_key(raw_key);
        if key.is_empty() {
            out.diagnostics.push(format!("line {line_no}: missing key before '='"));
            continue;
        }
        let val = strip_inline_comment(raw_val);
        if let Some(result) = apply_setting(&mut out.settings, &key, val) {
            if let Err(msg) = result {
                out.diagnostics.push(format!("line {line_no}: {msg}"));
            }
            continue;
        }
        let Some(canon) = canonical_for_key(&key) else {
            let hint = nearest_key(&key)
                .map(|s| format!(" (did you mean '{s}'?)"))
                .unwrap_or_default();
            out.diagnostics
                .push(format!("line {line_no}: unknown key '{}'{hint}", raw_key.trim()));
            continue;
        };
        match parse_color_value(val) {
            Some(color) => {
                out.theme.set(canon, color);
            }
            None => out.diagnostics.push(format!(
                "line {line_no}: invalid color for '{}' (use #RRGGBB or R,G,B)",
                raw_key.trim()
            )),
        }
    }
    out
}

/// What: Read and parse a configuration file.
///
/// Inputs:
/// - `path`: File to read
///
/// Output:
/// - Parsed config, or defaults when the file cannot be read.
#[must_use]
pub fn load_config(path: &Path) -> ParsedConfig {
    match fs::read_to_string(path) {
        Ok(content) => {
            let parsed = parse_config(&content);
            for d in &parsed.diagnostics {
                tracing::warn!(path = %path.display(), "{d}");
            }
            tracing::info!(
                path = %path.display(),
                problems = parsed.diagnostics.len(),
                "loaded configuration"
            );
            parsed
        }
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "no readable configuration, using defaults");
            ParsedConfig::default()
        }
    }
}

/// What: Write the skeleton when the file is missing or empty.
///
/// Inputs:
/// - `path`: Config file location
///
/// Output:
/// - `true` when the skeleton was written.
pub fn ensure_config_file(path: &Path) -> bool {
    let needs = fs::metadata(path).map_or(true, |m| m.len() == 0);
    if !needs {
        return false;
    }
    if let Some(dir) = path.parent() {
        let _ = fs::create_dir_all(dir);
    }
    match fs::write(path, CONFIG_SKELETON) {
        Ok(()) => {
            tracing::info!(path = %path.display(), "wrote default configuration");
            true
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to write default configuration");
            false
        }
    }
}
