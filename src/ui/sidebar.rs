use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState},
};

use crate::nav::{nav_items, sidebar_rows};
use crate::state::{AppState, Focus};
use crate::theme::theme;

use super::helpers::{panel, truncate_to_width};

/// What: Render the navigation tree.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state (sidebar expansion, cursor, current route)
/// - `area`: Sidebar rectangle
///
/// Details:
/// - A collapsed sidebar draws a narrow strip with only the expand hint.
/// - The row whose route equals the current page is drawn in the accent color.
pub fn render_sidebar(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let focused = app.focus == Focus::Sidebar;
    if app.sidebar.collapsed {
        let strip = panel("", focused, &th);
        f.render_widget(strip, area);
        return;
    }
    let rows = sidebar_rows(&nav_items(), app.sidebar.expanded);
    if app.sidebar.cursor >= rows.len() {
        app.sidebar.cursor = rows.len().saturating_sub(1);
    }
    let inner_w = usize::from(area.width.saturating_sub(4));
    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| {
            let marker = match (row.group.is_some(), row.expanded) {
                (true, true) => "▾ ",
                (true, false) => "▸ ",
                (false, _) => "  ",
            };
            let indent = "  ".repeat(usize::from(row.depth));
            let current = row.route.as_ref() == Some(&app.route);
            let style = if current {
                Style::default().fg(th.sapphire).add_modifier(Modifier::BOLD)
            } else if row.group.is_some() {
                Style::default().fg(th.subtext1).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(th.subtext0)
            };
            let label = truncate_to_width(
                row.label,
                inner_w.saturating_sub(indent.len() + 2),
            );
            ListItem::new(Line::from(vec![
                Span::raw(indent),
                Span::styled(marker, Style::default().fg(th.overlay1)),
                Span::styled(label, style),
            ]))
        })
        .collect();
    let mut list_state = ListState::default();
    if focused {
        list_state.select(Some(app.sidebar.cursor));
    }
    let list = List::new(items)
        .block(panel(" Navigation ", focused, &th))
        .highlight_style(Style::default().fg(th.crust).bg(th.lavender));
    f.render_stateful_widget(list, area, &mut list_state);
}
