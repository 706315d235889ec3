use crossterm::event::{KeyCode, KeyEvent};

use crate::logic::step_index;
use crate::nav::{nav_items, sidebar_rows};
use crate::state::{AppState, Focus};
use crate::theme::any_matches;

/// What: Handle a key while the sidebar has focus.
///
/// Inputs:
/// - `ke`: Key event
/// - `app`: Application state
///
/// Details:
/// - Activate on a group header toggles it (only one group is open at a time);
///   on a link it navigates and hands focus to the content.
/// - Right opens the highlighted group, Left closes it; Esc returns to the content.
pub fn handle_sidebar_key(ke: &KeyEvent, app: &mut AppState) {
    let rows = sidebar_rows(&nav_items(), app.sidebar.expanded);
    if rows.is_empty() || app.sidebar.collapsed {
        app.focus = Focus::Content;
        return;
    }
    let km = &app.keymap;
    if any_matches(&km.move_up, ke) {
        app.sidebar.cursor = step_index(app.sidebar.cursor, -1, rows.len());
    } else if any_matches(&km.move_down, ke) {
        app.sidebar.cursor = step_index(app.sidebar.cursor, 1, rows.len());
    } else if any_matches(&km.activate, ke) {
        let Some(row) = rows.get(app.sidebar.cursor) else {
            return;
        };
        if let Some(group) = row.group {
            app.sidebar.toggle_group(group);
        } else if let Some(route) = row.route.clone() {
            app.navigate(route);
        }
    } else if ke.code == KeyCode::Right {
        if let Some(group) = rows.get(app.sidebar.cursor).and_then(|r| r.group) {
            app.sidebar.expanded = Some(group);
        }
    } else if ke.code == KeyCode::Left {
        if let Some(group) = rows.get(app.sidebar.cursor).and_then(|r| r.group)
            && app.sidebar.expanded == Some(group)
        {
            app.sidebar.expanded = None;
        }
    } else if ke.code == KeyCode::Esc {
        app.focus = Focus::Content;
    }
}
