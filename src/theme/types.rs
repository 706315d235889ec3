use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Color;

use crate::logic::filter::DEFAULT_PAGE_SIZE;

/// Application theme palette used by rendering code.
///
/// Names follow the Catppuccin scheme; every field can be overridden from
/// `refdeck.conf`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Slightly lighter background layer used behind panels.
    pub mantle: Color,
    /// Darkest background shade.
    pub crust: Color,
    /// Surface for selected rows and pills (level 1).
    pub surface1: Color,
    /// Surface for active pills (level 2).
    pub surface2: Color,
    /// Borders and comments.
    pub overlay1: Color,
    /// Secondary borders.
    pub overlay2: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text.
    pub subtext0: Color,
    /// Captions and low-emphasis content.
    pub subtext1: Color,
    /// Accent for highlighted prose and primitive types.
    pub sapphire: Color,
    /// Headings, control-flow keywords.
    pub mauve: Color,
    /// Strings and success messages.
    pub green: Color,
    /// Type-system keywords and warnings.
    pub yellow: Color,
    /// Errors and declaration keywords.
    pub red: Color,
    /// Well-known globals and focused borders.
    pub lavender: Color,
    /// Numbers and booleans.
    pub peach: Color,
    /// Method names after a dot.
    pub blue: Color,
}

impl Default for Theme {
    /// Catppuccin Mocha.
    fn default() -> Self {
        Self {
            base: Color::Rgb(0x1e, 0x1e, 0x2e),
            mantle: Color::Rgb(0x18, 0x18, 0x25),
            crust: Color::Rgb(0x11, 0x11, 0x1b),
            surface1: Color::Rgb(0x45, 0x47, 0x5a),
            surface2: Color::Rgb(0x58, 0x5b, 0x70),
            overlay1: Color::Rgb(0x7f, 0x84, 0x9c),
            overlay2: Color::Rgb(0x93, 0x99, 0xb2),
            text: Color::Rgb(0xcd, 0xd6, 0xf4),
            subtext0: Color::Rgb(0xa6, 0xad, 0xc8),
            subtext1: Color::Rgb(0xba, 0xc2, 0xde),
            sapphire: Color::Rgb(0x74, 0xc7, 0xec),
            mauve: Color::Rgb(0xcb, 0xa6, 0xf7),
            green: Color::Rgb(0xa6, 0xe3, 0xa1),
            yellow: Color::Rgb(0xf9, 0xe2, 0xaf),
            red: Color::Rgb(0xf3, 0x8b, 0xa8),
            lavender: Color::Rgb(0xb4, 0xbe, 0xfe),
            peach: Color::Rgb(0xfa, 0xb3, 0x87),
            blue: Color::Rgb(0x89, 0xb4, 0xfa),
        }
    }
}

impl Theme {
    /// What: Set one color by canonical key.
    ///
    /// Inputs:
    /// - `canon`: Canonical name from [`super::parsing::canonical_for_key`]
    /// - `color`: New value
    ///
    /// Output:
    /// - `false` when `canon` names no field.
    pub fn set(&mut self, canon: &str, color: Color) -> bool {
        let slot = match canon {
            "base" => &mut self.base,
            "mantle" => &mut self.mantle,
            "crust" => &mut self.crust,
            "surface1" => &mut self.surface1,
            "surface2" => &mut self.surface2,
            "overlay1" => &mut self.overlay1,
            "overlay2" => &mut self.overlay2,
            "text" => &mut self.text,
            "subtext0" => &mut self.subtext0,
            "subtext1" => &mut self.subtext1,
            "sapphire" => &mut self.sapphire,
            "mauve" => &mut self.mauve,
            "green" => &mut self.green,
            "yellow" => &mut self.yellow,
            "red" => &mut self.red,
            "lavender" => &mut self.lavender,
            "peach" => &mut self.peach,
            "blue" => &mut self.blue,
            _ => return false,
        };
        *slot = color;
        true
    }
}

/// User-configurable application settings parsed from `refdeck.conf`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Items added per `load_more` (minimum 1).
    pub page_size: usize,
    /// Load more when the card cursor is this close to the last loaded card.
    pub prefetch_margin: usize,
    /// Sidebar width in columns when expanded.
    pub sidebar_width: u16,
    /// Words never highlighted in prose, lowercased.
    pub highlight_exclude_words: Vec<String>,
    /// Whether the footer with key hints is drawn.
    pub show_keybinds_footer: bool,
    /// Key bindings.
    pub keymap: KeyMap,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            prefetch_margin: 3,
            sidebar_width: 24,
            highlight_exclude_words: Vec::new(),
            show_keybinds_footer: true,
            keymap: KeyMap::default(),
        }
    }
}

/// A single keyboard chord (modifiers + key).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyChord {
    /// Key code.
    pub code: KeyCode,
    /// Required modifiers.
    pub mods: KeyModifiers,
}

impl KeyChord {
    /// Chord without modifiers.
    #[must_use]
    pub const fn plain(code: KeyCode) -> Self {
        Self {
            code,
            mods: KeyModifiers::NONE,
        }
    }

    /// Chord with `Ctrl`.
    #[must_use]
    pub const fn ctrl(ch: char) -> Self {
        Self {
            code: KeyCode::Char(ch),
            mods: KeyModifiers::CONTROL,
        }
    }

    /// What: Whether a key event triggers this chord.
    ///
    /// Details:
    /// - Character keys compare case-insensitively and ignore `Shift`, since terminals
    ///   report `?` as `Shift+?` on some layouts.
    #[must_use]
    pub fn matches(&self, ke: &KeyEvent) -> bool {
        match (self.code, ke.code) {
            (KeyCode::Char(a), KeyCode::Char(b)) => {
                a.eq_ignore_ascii_case(&b)
                    && ke.modifiers.difference(KeyModifiers::SHIFT)
                        == self.mods.difference(KeyModifiers::SHIFT)
            }
            (KeyCode::BackTab, KeyCode::BackTab) => true,
            (a, b) => a == b && ke.modifiers == self.mods,
        }
    }

    /// Short display label such as "Ctrl+R", "F1", "Esc", "?".
    #[must_use]
    pub fn label(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if self.mods.contains(KeyModifiers::CONTROL) {
            parts.push("Ctrl".into());
        }
        if self.mods.contains(KeyModifiers::ALT) {
            parts.push("Alt".into());
        }
        if self.mods.contains(KeyModifiers::SHIFT) {
            parts.push("Shift".into());
        }
        let key = match self.code {
            KeyCode::Char(' ') => "Space".to_string(),
            KeyCode::Char(ch) => ch.to_ascii_uppercase().to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Backspace => "Backspace".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::BackTab => "Shift+Tab".to_string(),
            KeyCode::Home => "Home".to_string(),
            KeyCode::End => "End".to_string(),
            KeyCode::PageUp => "PgUp".to_string(),
            KeyCode::PageDown => "PgDn".to_string(),
            KeyCode::Up => "↑".to_string(),
            KeyCode::Down => "↓".to_string(),
            KeyCode::Left => "←".to_string(),
            KeyCode::Right => "→".to_string(),
            KeyCode::F(n) => format!("F{n}"),
            _ => "?".to_string(),
        };
        parts.push(key);
        parts.join("+")
    }
}

/// Application key bindings. Each action can have multiple chords.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyMap {
    /// Open the help overlay.
    pub help: Vec<KeyChord>,
    /// Quit.
    pub exit: Vec<KeyChord>,
    /// Reload theme and settings from disk.
    pub reload_config: Vec<KeyChord>,
    /// Cycle focus forward (sidebar, pills, search, cards).
    pub focus_next: Vec<KeyChord>,
    /// Cycle focus backward.
    pub focus_prev: Vec<KeyChord>,
    /// Move up in the focused list.
    pub move_up: Vec<KeyChord>,
    /// Move down in the focused list.
    pub move_down: Vec<KeyChord>,
    /// Move up by a screen.
    pub page_up: Vec<KeyChord>,
    /// Move down by a screen.
    pub page_down: Vec<KeyChord>,
    /// Activate the focused entry (open link, toggle pill, expand card).
    pub activate: Vec<KeyChord>,
    /// Jump to the search input.
    pub search: Vec<KeyChord>,
    /// Return to the previous page.
    pub back: Vec<KeyChord>,
    /// Collapse or expand the sidebar.
    pub toggle_sidebar: Vec<KeyChord>,
    /// Clear category filters and query on the current page.
    pub clear_filters: Vec<KeyChord>,
}

impl Default for KeyMap {
    fn default() -> Self {
        use KeyCode::{BackTab, Char, Down, Enter, F, Left, PageDown, PageUp, Tab, Up};
        Self {
            help: vec![KeyChord::plain(F(1)), KeyChord::plain(Char('?'))],
            exit: vec![KeyChord::ctrl('c'), KeyChord::ctrl('q')],
            reload_config: vec![KeyChord::ctrl('r')],
            focus_next: vec![KeyChord::plain(Tab)],
            focus_prev: vec![KeyChord::plain(BackTab)],
            move_up: vec![KeyChord::plain(Up), KeyChord::plain(Char('k'))],
            move_down: vec![KeyChord::plain(Down), KeyChord::plain(Char('j'))],
            page_up: vec![KeyChord::plain(PageUp)],
            page_down: vec![KeyChord::plain(PageDown)],
            activate: vec![KeyChord::plain(Enter), KeyChord::plain(Char(' '))],
            search: vec![KeyChord::plain(Char('/'))],
            back: vec![
                KeyChord {
                    code: Left,
                    mods: KeyModifiers::ALT,
                },
                KeyChord::plain(Char('b')),
            ],
            toggle_sidebar: vec![KeyChord::ctrl('b')],
            clear_filters: vec![KeyChord::ctrl('l')],
        }
    }
}

/// Whether any chord in `chords` matches `ke`.
#[must_use]
pub fn any_matches(chords: &[KeyChord], ke: &KeyEvent) -> bool {
    chords.iter().any(|c| c.matches(ke))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Character chords match regardless of case and Shift; others match exactly.
    ///
    /// Inputs:
    /// - `?` reported with Shift, `Ctrl+R` vs `R`, `Tab` vs `Shift+Tab`.
    ///
    /// Output:
    /// - Matches where expected, rejects modifier mismatches.
    fn chord_matching() {
        let help = KeyChord::plain(KeyCode::Char('?'));
        assert!(help.matches(&KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT)));
        let reload = KeyChord::ctrl('r');
        assert!(reload.matches(&KeyEvent::new(KeyCode::Char('R'), KeyModifiers::CONTROL)));
        assert!(!reload.matches(&KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE)));
        let tab = KeyChord::plain(KeyCode::Tab);
        assert!(!tab.matches(&KeyEvent::new(KeyCode::Tab, KeyModifiers::SHIFT)));
        assert_eq!(reload.label(), "Ctrl+R");
        assert_eq!(KeyChord::plain(KeyCode::Char(' ')).label(), "Space");
    }

    #[test]
    /// What: Theme colors can be replaced by canonical name only.
    ///
    /// Inputs:
    /// - `peach` and an unknown key.
    ///
    /// Output:
    /// - Known key updates the field, unknown key reports `false`.
    fn theme_set_by_name() {
        let mut th = Theme::default();
        assert!(th.set("peach", Color::Rgb(1, 2, 3)));
        assert_eq!(th.peach, Color::Rgb(1, 2, 3));
        assert!(!th.set("nope", Color::Reset));
    }
}
