use ratatui::{
    Frame,
    prelude::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::nav::Route;
use crate::state::{AppState, Focus};
use crate::theme::{Theme, theme};

use super::helpers::panel;

/// What: Page title for the header.
///
/// Output:
/// - The topic's own title on topic pages, otherwise the route title.
#[must_use]
pub fn page_title(app: &AppState) -> String {
    match &app.route {
        Route::Topic(value) => app
            .find_topic(value)
            .map_or_else(|| value.clone(), |(_, t)| t.title.clone()),
        other => other.title().to_string(),
    }
}

/// Render the one-line page header.
pub fn render_title(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let mut spans = vec![Span::styled(
        page_title(app),
        Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
    )];
    if let Some(page) = app.page()
        && !page.filter.active_categories().is_empty()
    {
        spans.push(Span::styled(
            format!("  ({} filters)", page.filter.active_categories().len()),
            Style::default().fg(th.overlay1),
        ));
    }
    f.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(th.base)),
        area,
    );
}

/// What: Build the pill bar as one styled line.
///
/// Inputs:
/// - `app`: Application state (pills of the current page, active filters, pill cursor)
/// - `th`: Theme palette
///
/// Output:
/// - Pills separated by spaces; active pills filled, the cursor pill underlined when focused.
#[must_use]
pub fn pill_line(app: &AppState, th: &Theme) -> Line<'static> {
    let active = app.active_categories();
    let cursor = pill_cursor(app);
    let focused = app.focus == Focus::Pills;
    let mut spans = Vec::new();
    for (i, pill) in app.pills().into_iter().enumerate() {
        let on = active.contains(&pill.value);
        let mut style = if on {
            Style::default()
                .fg(th.crust)
                .bg(th.sapphire)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(th.subtext0).bg(th.surface1)
        };
        if focused && i == cursor {
            style = style.add_modifier(Modifier::UNDERLINED | Modifier::REVERSED);
        }
        spans.push(Span::styled(format!(" {} ", pill.label), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

/// Highlighted pill index of the current page.
#[must_use]
pub fn pill_cursor(app: &AppState) -> usize {
    match app.route {
        Route::Guide => app.guide.pill_cursor,
        _ => app.page().map_or(0, |p| p.pill_cursor),
    }
}

/// Render the category pill bar.
pub fn render_pills(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let focused = app.focus == Focus::Pills;
    let para = Paragraph::new(pill_line(app, &th))
        .wrap(Wrap { trim: false })
        .block(panel(" Categories ", focused, &th));
    f.render_widget(para, area);
}

/// What: Render the search input of a card page.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state
/// - `area`: Input rectangle
/// - `total`: Number of matching entries, shown in the title
///
/// Details:
/// - Places the terminal cursor after the query when the input has focus.
pub fn render_search(f: &mut Frame, app: &AppState, area: Rect, total: usize) {
    let th = theme();
    let focused = app.focus == Focus::Search;
    let query = app.page().map_or("", |p| p.filter.search_query());
    let line = Line::from(vec![
        Span::styled(
            "> ",
            Style::default().fg(if focused { th.sapphire } else { th.overlay1 }),
        ),
        Span::styled(
            query.to_string(),
            Style::default().fg(if focused { th.text } else { th.subtext0 }),
        ),
    ]);
    let title = format!(" Search ({total} matches) ");
    f.render_widget(
        Paragraph::new(line).block(panel(title, focused, &th)),
        area,
    );
    if focused {
        let right = area.x + area.width.saturating_sub(2);
        let offset = u16::try_from(query.width()).unwrap_or(u16::MAX);
        let x = (area.x + 3).saturating_add(offset).min(right);
        f.set_cursor_position(Position::new(x, area.y + 1));
    }
}
