use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState},
};

use crate::logic::{GuideRow, guide_rows};
use crate::state::{AppState, Focus};
use crate::theme::theme;

use super::helpers::panel;

/// What: Render the guide table of contents.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state (topic catalog, guide filters and expansion)
/// - `area`: Content rectangle
///
/// Details:
/// - Clamps the guide cursor to the current row count before drawing.
pub fn render_guide(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let focused = app.focus == Focus::Content;
    let rows = guide_rows(&app.library.topics, &app.guide);
    if app.guide.cursor >= rows.len() {
        app.guide.cursor = rows.len().saturating_sub(1);
    }
    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| match row {
            GuideRow::Group {
                label,
                count,
                expanded,
                ..
            } => ListItem::new(Line::from(vec![
                Span::styled(
                    if *expanded { "▾ " } else { "▸ " },
                    Style::default().fg(th.overlay1),
                ),
                Span::styled(
                    label.clone(),
                    Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("  {count}"), Style::default().fg(th.overlay1)),
            ])),
            GuideRow::Topic { number, topic } => ListItem::new(Line::from(vec![
                Span::styled(format!("    {number}. "), Style::default().fg(th.overlay2)),
                Span::styled(topic.title.clone(), Style::default().fg(th.text)),
            ])),
        })
        .collect();
    let mut state = ListState::default();
    if !rows.is_empty() {
        state.select(Some(app.guide.cursor));
    }
    let highlight = if focused {
        Style::default().fg(th.crust).bg(th.lavender)
    } else {
        Style::default().fg(th.lavender)
    };
    let list = List::new(items)
        .block(panel(" Topics ", focused, &th))
        .highlight_style(highlight);
    f.render_stateful_widget(list, area, &mut state);
}
