//! Keyboard handling for the browser.
//!
//! [`handle_event`] resolves modals and global shortcuts first, then hands the
//! key to the handler of the focused region.

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::state::{AppState, Focus, Modal};

mod content;
mod global;
mod pills;
mod search;
mod sidebar;

/// What: Whether a key event is plain text input (a character without Ctrl/Alt).
///
/// Details:
/// - While the search input has focus such keys are typed, never treated as shortcuts.
#[must_use]
pub fn is_text_input(ke: &KeyEvent) -> bool {
    matches!(ke.code, KeyCode::Char(_))
        && !ke
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

/// What: Dispatch a single terminal event and mutate the [`AppState`].
///
/// Inputs:
/// - `ev`: Terminal event
/// - `app`: Application state
///
/// Output:
/// - `true` to signal the application should exit; otherwise `false`.
///
/// Details:
/// - Only key presses are handled; repeats and releases are ignored.
/// - An open modal captures every key.
pub fn handle_event(ev: &CEvent, app: &mut AppState) -> bool {
    let CEvent::Key(ke) = ev else {
        return false;
    };
    if ke.kind != KeyEventKind::Press {
        return false;
    }
    if app.modal.is_open() {
        handle_modal_key(ke, app);
        return false;
    }
    let typing = app.focus == Focus::Search && is_text_input(ke);
    if !typing && let Some(exit) = global::handle_global_key(ke, app) {
        return exit;
    }
    match app.focus {
        Focus::Sidebar => sidebar::handle_sidebar_key(ke, app),
        Focus::Pills => pills::handle_pills_key(ke, app),
        Focus::Search => search::handle_search_key(ke, app),
        Focus::Content => content::handle_content_key(ke, app),
    }
    false
}

/// Close the modal on Esc or Enter; the help chord also closes help.
fn handle_modal_key(ke: &KeyEvent, app: &mut AppState) {
    let close = match &app.modal {
        Modal::Help => {
            matches!(ke.code, KeyCode::Esc | KeyCode::Enter)
                || crate::theme::any_matches(&app.keymap.help, ke)
        }
        Modal::Alert { .. } => matches!(ke.code, KeyCode::Esc | KeyCode::Enter),
        Modal::None => false,
    };
    if close {
        app.modal = Modal::None;
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::{app, ch, key};
    use super::*;
    use crate::nav::Route;

    #[test]
    /// What: Typing in search never triggers character shortcuts.
    ///
    /// Inputs:
    /// - Search focused on Methods; type "b?j/".
    ///
    /// Output:
    /// - Query equals "b?j/", route and modal unchanged.
    fn search_swallows_shortcut_chars() {
        let mut app = app();
        app.navigate(Route::Methods);
        app.focus = Focus::Search;
        for c in ['b', '?', 'j', '/'] {
            assert!(!handle_event(&ch(c), &mut app));
        }
        assert_eq!(app.methods.filter.search_query(), "b?j/");
        assert_eq!(app.route, Route::Methods);
        assert_eq!(app.modal, Modal::None);
    }

    #[test]
    /// What: Modals capture keys and close on Esc.
    ///
    /// Inputs:
    /// - Open help with F1, press `j`, then Esc.
    ///
    /// Output:
    /// - Help open after F1; `j` ignored; closed after Esc.
    fn modal_captures_keys() {
        let mut app = app();
        app.navigate(Route::Methods);
        handle_event(&key(KeyCode::F(1), KeyModifiers::NONE), &mut app);
        assert_eq!(app.modal, Modal::Help);
        handle_event(&ch('j'), &mut app);
        assert_eq!(app.methods.cursor, 0);
        handle_event(&key(KeyCode::Esc, KeyModifiers::NONE), &mut app);
        assert_eq!(app.modal, Modal::None);
    }

    #[test]
    /// What: Exit chords end the loop, even from the search input.
    ///
    /// Inputs:
    /// - Ctrl+C with search focused.
    ///
    /// Output:
    /// - `true`.
    fn ctrl_c_exits() {
        let mut app = app();
        app.navigate(Route::Methods);
        app.focus = Focus::Search;
        assert!(handle_event(
            &key(KeyCode::Char('c'), KeyModifiers::CONTROL),
            &mut app
        ));
    }

    #[test]
    /// What: Key releases are ignored.
    ///
    /// Inputs:
    /// - A release event for `j` on the Methods page.
    ///
    /// Output:
    /// - Cursor unchanged.
    fn releases_are_ignored() {
        let mut app = app();
        app.navigate(Route::Methods);
        let mut ke = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE);
        ke.kind = KeyEventKind::Release;
        handle_event(&CEvent::Key(ke), &mut app);
        assert_eq!(app.methods.cursor, 0);
    }
}
