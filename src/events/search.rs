use crossterm::event::{KeyCode, KeyEvent};

use crate::state::{AppState, Focus};
use crate::theme::any_matches;

/// What: Handle a key while the search input has focus.
///
/// Inputs:
/// - `ke`: Key event
/// - `app`: Application state
///
/// Details:
/// - Characters append to the query and backspace removes one; both reset pagination.
/// - Esc clears a non-empty query, otherwise returns focus to the cards.
/// - Enter and the move-down chords hand focus to the cards.
pub fn handle_search_key(ke: &KeyEvent, app: &mut AppState) {
    let to_cards = ke.code == KeyCode::Enter || any_matches(&app.keymap.move_down, ke);
    let Some(page) = app.page_mut() else {
        app.focus = Focus::Content;
        return;
    };
    match ke.code {
        KeyCode::Char(c) if super::is_text_input(ke) => {
            page.filter.push_search_char(c);
            page.reset_cursor();
        }
        KeyCode::Backspace => {
            if page.filter.pop_search_char() {
                page.reset_cursor();
            }
        }
        KeyCode::Esc => {
            if page.filter.search_query().is_empty() {
                app.focus = Focus::Content;
            } else {
                page.filter.reset_search();
                page.reset_cursor();
            }
        }
        _ if to_cards => app.focus = Focus::Content,
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use crate::events::handle_event;
    use crate::events::test_support::{app, ch, key};
    use crate::nav::Route;
    use crate::state::Focus;

    use super::*;

    #[test]
    /// What: Editing the query resets pagination; deleting from empty does not.
    ///
    /// Inputs:
    /// - Methods with two pages loaded; type "sh", backspace twice, backspace on empty.
    ///
    /// Output:
    /// - Loaded count back to one page after each effective edit.
    fn editing_resets_pagination() {
        let mut app = app();
        app.navigate(Route::Methods);
        app.focus = Focus::Search;
        app.methods.filter.load_more();
        handle_event(&ch('s'), &mut app);
        handle_event(&ch('h'), &mut app);
        assert_eq!(app.methods.filter.search_query(), "sh");
        assert_eq!(app.methods.filter.loaded_count(), 20);
        let bs = key(KeyCode::Backspace, KeyModifiers::NONE);
        handle_event(&bs, &mut app);
        handle_event(&bs, &mut app);
        assert_eq!(app.methods.filter.search_query(), "");
        app.methods.filter.load_more();
        handle_event(&bs, &mut app);
        assert_eq!(app.methods.filter.loaded_count(), 40);
    }

    #[test]
    /// What: Esc clears the query first, then leaves the input.
    ///
    /// Inputs:
    /// - Query "map", Esc twice.
    ///
    /// Output:
    /// - Query empty and focus still Search after the first; focus Content after the second.
    fn esc_clears_then_leaves() {
        let mut app = app();
        app.navigate(Route::Methods);
        app.focus = Focus::Search;
        app.methods.filter.set_search_query("map");
        let esc = key(KeyCode::Esc, KeyModifiers::NONE);
        handle_event(&esc, &mut app);
        assert_eq!(app.methods.filter.search_query(), "");
        assert_eq!(app.focus, Focus::Search);
        handle_event(&esc, &mut app);
        assert_eq!(app.focus, Focus::Content);
    }
}
