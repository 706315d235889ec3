use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::content::Library;
use crate::state::{AppState, Focus};
use crate::theme::{KeyMap, Theme, theme};

use super::footer::first_label;
use super::helpers::{panel, wrap_lines};

/// What: Lines of the landing page.
///
/// Inputs:
/// - `library`: Loaded catalogs, summarized by size
/// - `keymap`: Bindings quoted in the hints
/// - `th`: Theme palette
///
/// Output:
/// - Greeting, one summary line per page, and navigation hints.
#[must_use]
pub fn home_lines(library: &Library, keymap: &KeyMap, th: &Theme) -> Vec<Line<'static>> {
    let accent = Style::default().fg(th.sapphire).add_modifier(Modifier::BOLD);
    let dim = Style::default().fg(th.subtext0);
    let summary = |label: &str, items: usize, groups: usize| {
        Line::from(vec![
            Span::styled("  • ", Style::default().fg(th.overlay1)),
            Span::styled(label.to_string(), accent),
            Span::styled(format!(": {items} entries in {groups} categories"), dim),
        ])
    };
    vec![
        Line::from(Span::styled(
            "Reference Deck",
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "A keyboard-driven reference for JavaScript and TypeScript.",
            Style::default().fg(th.text),
        )),
        Line::default(),
        summary(
            "JavaScript Guide",
            library.topics.map().item_count(),
            library.topics.map().len(),
        ),
        summary(
            "JavaScript API",
            library.methods.map().item_count(),
            library.methods.map().len(),
        ),
        summary(
            "TypeScript Utility Types",
            library.utility_types.map().item_count(),
            library.utility_types.map().len(),
        ),
        Line::default(),
        Line::from(Span::styled(
            format!(
                "Press {} to move to the sidebar, {} to open a page, {} for help.",
                first_label(&keymap.focus_prev),
                first_label(&keymap.activate),
                first_label(&keymap.help),
            ),
            dim,
        )),
    ]
}

/// Render the landing page.
pub fn render_home(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let block = panel(" Home ", app.focus == Focus::Content, &th);
    let inner = block.inner(area);
    let lines = wrap_lines(
        &home_lines(&app.library, &app.keymap, &th),
        usize::from(inner.width),
    );
    f.render_widget(
        Paragraph::new(lines).block(block).scroll((app.topic_scroll, 0)),
        area,
    );
}
