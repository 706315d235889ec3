use crossterm::event::{KeyCode, KeyEvent};

use crate::logic::step_index;
use crate::nav::Route;
use crate::state::{AppState, Focus};
use crate::theme::any_matches;

/// Mutable pill cursor of the current page.
fn pill_cursor_mut(app: &mut AppState) -> Option<&mut usize> {
    if app.route == Route::Guide {
        return Some(&mut app.guide.pill_cursor);
    }
    app.page_mut().map(|p| &mut p.pill_cursor)
}

/// What: Handle a key while the pill bar has focus.
///
/// Inputs:
/// - `ke`: Key event
/// - `app`: Application state
///
/// Details:
/// - Left/Right (and the up/down chords) move between pills.
/// - Activate toggles the highlighted pill, which resets the page's pagination.
/// - Esc returns focus to the content.
pub fn handle_pills_key(ke: &KeyEvent, app: &mut AppState) {
    let pills = app.pills();
    if pills.is_empty() {
        app.focus = Focus::Content;
        return;
    }
    let km = &app.keymap;
    let delta: isize = if ke.code == KeyCode::Left || any_matches(&km.move_up, ke) {
        -1
    } else if ke.code == KeyCode::Right || any_matches(&km.move_down, ke) {
        1
    } else {
        0
    };
    let activate = any_matches(&km.activate, ke);
    if ke.code == KeyCode::Esc {
        app.focus = Focus::Content;
        return;
    }
    let Some(cursor) = pill_cursor_mut(app) else {
        return;
    };
    *cursor = step_index(*cursor, delta, pills.len());
    let current = *cursor;
    if activate && let Some(pill) = pills.get(current) {
        app.toggle_pill(&pill.value);
        tracing::debug!(pill = %pill.value.as_str(), route = %app.route, "toggled pill");
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use crate::events::handle_event;
    use crate::events::test_support::{app, key};
    use crate::logic::compute_view;
    use crate::nav::Route;
    use crate::state::Focus;

    use super::*;

    #[test]
    /// What: Activating a pill filters the page and resets pagination.
    ///
    /// Inputs:
    /// - Methods with extra pages loaded; Right once, Enter.
    ///
    /// Output:
    /// - The second pill is active; only its category is visible; loaded count is one page.
    fn activate_toggles_pill() {
        let mut app = app();
        app.navigate(Route::Methods);
        app.focus = Focus::Pills;
        app.methods.filter.load_more();
        handle_event(&key(KeyCode::Right, KeyModifiers::NONE), &mut app);
        handle_event(&key(KeyCode::Enter, KeyModifiers::NONE), &mut app);
        let second = app.pills()[1].value.clone();
        assert_eq!(app.methods.filter.active_categories(), &[second.clone()]);
        assert_eq!(app.methods.filter.loaded_count(), 20);
        let view = compute_view(app.library.methods.map(), &app.methods.filter);
        assert!(view.items.iter().all(|(c, _)| *c == second));

        handle_event(&key(KeyCode::Enter, KeyModifiers::NONE), &mut app);
        assert!(app.methods.filter.active_categories().is_empty());
    }

    #[test]
    /// What: Guide pills filter topic groups.
    ///
    /// Inputs:
    /// - Guide page, pill bar focused, Enter on the first pill.
    ///
    /// Output:
    /// - First topic category active in the guide state.
    fn guide_pills_filter_groups() {
        let mut app = app();
        app.navigate(Route::Guide);
        app.focus = Focus::Pills;
        handle_event(&key(KeyCode::Enter, KeyModifiers::NONE), &mut app);
        assert_eq!(app.guide.active.len(), 1);
        assert_eq!(app.guide.active[0], app.pills()[0].value);
    }
}
