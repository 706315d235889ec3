use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::AppState;
use crate::theme::{KeyChord, KeyMap, Theme, theme};

/// Label of the first chord bound to an action, or "-" when unbound.
#[must_use]
pub fn first_label(chords: &[KeyChord]) -> String {
    chords.first().map_or_else(|| "-".to_string(), KeyChord::label)
}

/// What: Key hint pairs for the footer.
///
/// Output:
/// - `(keys, action)` pairs in display order.
#[must_use]
pub fn footer_hints(km: &KeyMap) -> Vec<(String, &'static str)> {
    vec![
        (first_label(&km.help), "help"),
        (first_label(&km.focus_next), "focus"),
        (first_label(&km.search), "search"),
        (first_label(&km.activate), "open"),
        (first_label(&km.back), "back"),
        (first_label(&km.toggle_sidebar), "sidebar"),
        (first_label(&km.exit), "quit"),
    ]
}

/// What: Render the footer with key hints and the status message.
///
/// Details:
/// - The status message, when set, replaces nothing and is appended after the hints.
pub fn render_footer(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let line = footer_line(app, &th);
    f.render_widget(
        Paragraph::new(line).style(Style::default().bg(th.mantle)),
        area,
    );
}

/// Footer content as one line.
#[must_use]
pub fn footer_line(app: &AppState, th: &Theme) -> Line<'static> {
    let key_style = Style::default().fg(th.sapphire).add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(th.subtext0);
    let mut spans = Vec::new();
    if app.show_keybinds_footer {
        for (keys, action) in footer_hints(&app.keymap) {
            spans.push(Span::styled(format!(" {keys}"), key_style));
            spans.push(Span::styled(format!(" {action} "), text_style));
        }
    }
    if let Some(status) = &app.status {
        spans.push(Span::styled(
            format!("  {status}"),
            Style::default().fg(th.yellow),
        ));
    }
    Line::from(spans)
}
