//! Integration tests driving the browser with key events and rendering via `TestBackend`.
//!
//! These exercise the public event handler and renderer together without a real terminal.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};

use refdeck::content::Library;
use refdeck::events::handle_event;
use refdeck::nav::Route;
use refdeck::state::{AppState, Focus, Modal};
use refdeck::theme::Settings;
use refdeck::ui::ui;

fn app_on(route: Route) -> AppState {
    let lib = Library::bundled().expect("bundled content");
    let mut app = AppState::new(lib, &Settings::default());
    app.open_start_page(route);
    app
}

fn press(app: &mut AppState, code: KeyCode) -> bool {
    handle_event(
        &Event::Key(KeyEvent::new(code, KeyModifiers::NONE)),
        app,
    )
}

fn screen(app: &mut AppState) -> String {
    let backend = TestBackend::new(100, 40);
    let mut terminal = Terminal::new(backend).expect("terminal");
    terminal.draw(|f| ui(f, app)).expect("draw");
    let buf = terminal.backend().buffer().clone();
    let mut out = String::new();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            out.push_str(buf[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

#[test]
/// What: Typing into the search box narrows the rendered cards.
///
/// - Input: Methods page, search focused, "padStart" typed
/// - Output: the match count shows one result and the card title is drawn
fn typing_narrows_cards() {
    let mut app = app_on(Route::Methods);
    app.focus = Focus::Search;
    for c in "padStart".chars() {
        press(&mut app, KeyCode::Char(c));
    }
    assert_eq!(app.methods.filter.search_query(), "padStart");
    let text = screen(&mut app);
    assert!(text.contains("(1 matches)"), "{text}");
    assert!(text.contains("padStart"));
}

#[test]
/// What: A query without matches shows the empty state.
///
/// - Input: Utility Types page with query "zzzz"
/// - Output: the empty-state message is drawn
fn no_matches_shows_empty_state() {
    let mut app = app_on(Route::UtilityTypes);
    app.utility_types.filter.set_search_query("zzzz");
    let text = screen(&mut app);
    assert!(text.contains("No entries match this query"));
}

#[test]
/// What: The help overlay opens and closes.
///
/// - Input: `?` then Esc from the content pane
/// - Output: help modal open, then closed
fn help_overlay_round_trip() {
    let mut app = app_on(Route::Home);
    press(&mut app, KeyCode::Char('?'));
    assert!(matches!(app.modal, Modal::Help));
    let _ = screen(&mut app);
    press(&mut app, KeyCode::Esc);
    assert!(matches!(app.modal, Modal::None));
}
