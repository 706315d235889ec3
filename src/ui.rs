//! Frame rendering: sidebar, header, page body, footer, and modal overlays.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
};

use crate::logic::compute_view;
use crate::nav::Route;
use crate::state::{AppState, Focus};
use crate::theme::theme;

pub mod cards;
mod footer;
mod guide;
mod header;
pub mod helpers;
mod home;
mod modals;
mod sidebar;
mod topic;

/// Width of the sidebar strip when collapsed.
const COLLAPSED_SIDEBAR_W: u16 = 3;

/// Number of entries matching the current card page's filters.
fn current_total(app: &AppState) -> usize {
    match app.route {
        Route::Methods => compute_view(app.library.methods.map(), &app.methods.filter).total_count,
        Route::UtilityTypes => {
            compute_view(app.library.utility_types.map(), &app.utility_types.filter).total_count
        }
        _ => 0,
    }
}

/// What: Render one frame of the browser.
///
/// Inputs:
/// - `f`: Frame to draw into
/// - `app`: Application state; scroll offsets and cursors are clamped while drawing
///
/// Details:
/// - Layout: sidebar on the left; header, optional pill bar, optional search, content,
///   and footer stacked on the right; modals drawn last over everything.
/// - Records the content height in `app.content_height` for page-wise movement.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(th.base)), area);

    let sidebar_w = if app.sidebar.collapsed {
        COLLAPSED_SIDEBAR_W
    } else {
        app.sidebar_width.min(area.width / 2)
    };
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(sidebar_w), Constraint::Min(10)])
        .split(area);
    sidebar::render_sidebar(f, app, columns[0]);

    let main = columns[1];
    let pills_h = if app.has_pills() {
        let inner_w = usize::from(main.width.saturating_sub(2));
        let rows = helpers::wrap_line(&header::pill_line(app, &th), inner_w).len();
        u16::try_from(rows.clamp(1, 3)).unwrap_or(3) + 2
    } else {
        0
    };
    let search_h = if app.has_search() { 3 } else { 0 };
    let footer_h = u16::from(app.show_keybinds_footer || app.status.is_some());
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(pills_h),
            Constraint::Length(search_h),
            Constraint::Min(3),
            Constraint::Length(footer_h),
        ])
        .split(main);

    header::render_title(f, app, rows[0]);
    if pills_h > 0 {
        header::render_pills(f, app, rows[1]);
    }
    if search_h > 0 {
        header::render_search(f, app, rows[2], current_total(app));
    }

    let content = rows[3];
    app.content_height = content.height.saturating_sub(2);
    let focused = app.focus == Focus::Content;
    match app.route.clone() {
        Route::Home => home::render_home(f, app, content),
        Route::Guide => guide::render_guide(f, app, content),
        Route::Topic(value) => topic::render_topic(f, app, content, &value),
        Route::Methods => cards::render_cards(
            f,
            content,
            &app.library.methods,
            &mut app.methods,
            &app.exclude,
            &th,
            focused,
        ),
        Route::UtilityTypes => cards::render_cards(
            f,
            content,
            &app.library.utility_types,
            &mut app.utility_types,
            &app.exclude,
            &th,
            focused,
        ),
    }

    if footer_h > 0 {
        footer::render_footer(f, app, rows[4]);
    }
    modals::render_modals(f, app, area);
}
