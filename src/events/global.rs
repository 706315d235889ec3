//! Shortcuts that work regardless of focus.

use crossterm::event::KeyEvent;

use crate::logic::clamp_card_cursor;
use crate::nav::{Route, find_parent_for_route, nav_items, sidebar_rows};
use crate::state::{AppState, Focus, Modal};
use crate::theme::{any_matches, reload_config, settings};

/// What: Handle a global shortcut.
///
/// Inputs:
/// - `ke`: Key event
/// - `app`: Application state
///
/// Output:
/// - `Some(exit)` when the key was consumed, `None` to fall through to the focused region.
pub fn handle_global_key(ke: &KeyEvent, app: &mut AppState) -> Option<bool> {
    let km = &app.keymap;
    if any_matches(&km.exit, ke) {
        return Some(true);
    }
    if any_matches(&km.help, ke) {
        app.modal = Modal::Help;
    } else if any_matches(&km.reload_config, ke) {
        apply_reloaded_config(app);
    } else if any_matches(&km.focus_next, ke) {
        app.focus = app.focus.cycle(app.has_pills(), app.has_search(), true);
    } else if any_matches(&km.focus_prev, ke) {
        app.focus = app.focus.cycle(app.has_pills(), app.has_search(), false);
    } else if any_matches(&km.toggle_sidebar, ke) {
        toggle_sidebar(app);
    } else if any_matches(&km.clear_filters, ke) {
        clear_filters(app);
    } else if any_matches(&km.search, ke) && app.has_search() {
        app.focus = Focus::Search;
    } else if any_matches(&km.back, ke) {
        if app.back() {
            sync_sidebar(app);
        }
    } else {
        return None;
    }
    Some(false)
}

/// What: Re-read the config file and apply it to the running state.
///
/// Details:
/// - Store errors are shown in an alert; ignored lines are reported in the footer.
pub fn apply_reloaded_config(app: &mut AppState) {
    match reload_config() {
        Ok(problems) => {
            app.apply_settings(&settings());
            clamp_card_cursor(app.library.methods.map(), &mut app.methods);
            clamp_card_cursor(app.library.utility_types.map(), &mut app.utility_types);
            if problems == 0 {
                app.set_status("Configuration reloaded");
            } else {
                app.set_status(format!(
                    "Configuration reloaded ({problems} lines ignored, see log)"
                ));
            }
        }
        Err(message) => {
            tracing::warn!(%message, "config reload failed");
            app.modal = Modal::Alert { message };
        }
    }
}

/// Collapse or expand the sidebar; focus leaves a collapsed sidebar.
fn toggle_sidebar(app: &mut AppState) {
    app.sidebar.collapsed = !app.sidebar.collapsed;
    if app.sidebar.collapsed && app.focus == Focus::Sidebar {
        app.focus = Focus::Content;
    }
}

/// What: Clear category filters and the query on the current page.
///
/// Details:
/// - Card pages reset pagination and cursor; the guide clears its pill filters.
fn clear_filters(app: &mut AppState) {
    if app.route == Route::Guide {
        app.guide.active.clear();
        app.guide.cursor = 0;
    } else if let Some(page) = app.page_mut() {
        page.filter.set_active_categories(Vec::new());
        page.filter.reset_search();
        page.reset_cursor();
    }
}

/// What: Expand the sidebar group that owns the current route and move the cursor to it.
pub fn sync_sidebar(app: &mut AppState) {
    let items = nav_items();
    if let Some(group) = find_parent_for_route(&items, &app.route) {
        app.sidebar.expanded = Some(group);
    }
    let target = match &app.route {
        Route::Topic(_) => Route::Guide,
        other => other.clone(),
    };
    if let Some(idx) = sidebar_rows(&items, app.sidebar.expanded)
        .iter()
        .position(|r| r.route.as_ref() == Some(&target))
    {
        app.sidebar.cursor = idx;
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers};

    use super::*;
    use crate::content::Category;
    use crate::events::handle_event;
    use crate::events::test_support::{app, ch, key};

    #[test]
    /// What: Focus cycles through the regions the page has.
    ///
    /// Inputs:
    /// - Tab presses on Methods, then on Home.
    ///
    /// Output:
    /// - Methods: Content → Sidebar → Pills → Search → Content; Home skips pills and search.
    fn tab_cycles_focus_per_page() {
        let mut app = app();
        app.navigate(Route::Methods);
        let tab = key(KeyCode::Tab, KeyModifiers::NONE);
        let mut seen = Vec::new();
        for _ in 0..4 {
            handle_event(&tab, &mut app);
            seen.push(app.focus);
        }
        assert_eq!(
            seen,
            vec![Focus::Sidebar, Focus::Pills, Focus::Search, Focus::Content]
        );
        app.navigate(Route::Home);
        handle_event(&tab, &mut app);
        handle_event(&tab, &mut app);
        assert_eq!(app.focus, Focus::Content);
    }

    #[test]
    /// What: Clearing filters resets category, query, and pagination.
    ///
    /// Inputs:
    /// - Methods with a pill, a query, and an extra page loaded; then Ctrl+L.
    ///
    /// Output:
    /// - No active categories, empty query, loaded count back to page size.
    fn clear_filters_resets_page() {
        let mut app = app();
        app.navigate(Route::Methods);
        app.toggle_pill(&Category::new("ARRAY"));
        app.methods.filter.set_search_query("ma");
        app.methods.filter.load_more();
        handle_event(&key(KeyCode::Char('l'), KeyModifiers::CONTROL), &mut app);
        assert!(app.methods.filter.active_categories().is_empty());
        assert_eq!(app.methods.filter.search_query(), "");
        assert_eq!(app.methods.filter.loaded_count(), app.methods.filter.page_size());
    }

    #[test]
    /// What: Back returns to the previous page and syncs the sidebar.
    ///
    /// Inputs:
    /// - Home → Utility Types → Methods, then `b`.
    ///
    /// Output:
    /// - Route Utility Types, `typescript` group expanded.
    fn back_syncs_sidebar() {
        let mut app = app();
        app.navigate(Route::UtilityTypes);
        app.navigate(Route::Methods);
        handle_event(&ch('b'), &mut app);
        assert_eq!(app.route, Route::UtilityTypes);
        assert_eq!(app.sidebar.expanded, Some("typescript"));
    }

    #[test]
    /// What: `/` jumps to search only on pages that have one; the sidebar toggles.
    ///
    /// Inputs:
    /// - `/` on Home and Methods; Ctrl+B with sidebar focus.
    ///
    /// Output:
    /// - Home: falls through (focus unchanged); Methods: Search; collapsed sidebar loses focus.
    fn search_jump_and_sidebar_toggle() {
        let mut app = app();
        handle_event(&ch('/'), &mut app);
        assert_eq!(app.focus, Focus::Content);
        app.navigate(Route::Methods);
        handle_event(&ch('/'), &mut app);
        assert_eq!(app.focus, Focus::Search);
        app.focus = Focus::Sidebar;
        handle_event(&key(KeyCode::Char('b'), KeyModifiers::CONTROL), &mut app);
        assert!(app.sidebar.collapsed);
        assert_eq!(app.focus, Focus::Content);
    }
}
