//! Keys for the main content region: cards, guide rows, topic text, home.

use crossterm::event::KeyEvent;

use crate::logic::{GuideRow, guide_rows, move_card_cursor, step_index, toggle_card_at_cursor};
use crate::nav::Route;
use crate::state::AppState;
use crate::theme::any_matches;

/// Movement requested by a key, in rows.
fn movement(ke: &KeyEvent, app: &AppState, page_rows: isize) -> Option<isize> {
    let km = &app.keymap;
    if any_matches(&km.move_up, ke) {
        Some(-1)
    } else if any_matches(&km.move_down, ke) {
        Some(1)
    } else if any_matches(&km.page_up, ke) {
        Some(-page_rows)
    } else if any_matches(&km.page_down, ke) {
        Some(page_rows)
    } else {
        None
    }
}

/// What: Handle a key while the content region has focus.
///
/// Inputs:
/// - `ke`: Key event
/// - `app`: Application state
///
/// Details:
/// - Card pages move the card cursor (loading more near the end) and expand cards.
/// - The guide moves between rows, toggles groups, and opens topics.
/// - Topic pages move between sections and toggle the highlighted section's examples.
/// - The home page scrolls; activate opens the guide.
pub fn handle_content_key(ke: &KeyEvent, app: &mut AppState) {
    let screen = isize::try_from(app.content_height.max(1)).unwrap_or(isize::MAX);
    match app.route.clone() {
        Route::Methods | Route::UtilityTypes => {
            // Cards are several rows tall; a page moves a third of a screen of cards.
            let step = (screen / 3).max(1);
            if let Some(delta) = movement(ke, app, step) {
                move_cards(app, delta);
            } else if any_matches(&app.keymap.activate, ke) {
                toggle_card(app);
            }
        }
        Route::Guide => handle_guide_key(ke, app, screen),
        Route::Topic(value) => handle_topic_key(ke, app, &value, screen),
        Route::Home => {
            if let Some(delta) = movement(ke, app, screen) {
                scroll_by(app, delta);
            } else if any_matches(&app.keymap.activate, ke) {
                app.navigate(Route::Guide);
            }
        }
    }
}

/// Scroll the topic reader or home page by `delta` rows.
fn scroll_by(app: &mut AppState, delta: isize) {
    app.topic_scroll = u16::try_from(
        isize::try_from(app.topic_scroll).unwrap_or(isize::MAX)
            .saturating_add(delta)
            .max(0),
    )
    .unwrap_or(u16::MAX);
}

/// What: Topic reader keys.
///
/// Details:
/// - Up/down move the section cursor and bring that section into view.
/// - Page keys scroll freely.
/// - Activate shows or hides the highlighted section's examples.
fn handle_topic_key(ke: &KeyEvent, app: &mut AppState, value: &str, screen: isize) {
    let km = &app.keymap;
    let step = if any_matches(&km.move_up, ke) {
        Some(-1)
    } else if any_matches(&km.move_down, ke) {
        Some(1)
    } else {
        None
    };
    if let Some(delta) = step {
        let sections = app.find_topic(value).map_or(0, |(_, t)| t.sections.len());
        app.topic.section = step_index(app.topic.section, delta, sections);
        app.topic.follow = true;
    } else if let Some(delta) = movement(ke, app, screen) {
        scroll_by(app, delta);
    } else if any_matches(&app.keymap.activate, ke) {
        let shown = app.topic.toggle_examples();
        tracing::trace!(topic = %value, section = app.topic.section, shown, "toggle examples");
    }
}

/// Move the card cursor of the current page by `delta`.
fn move_cards(app: &mut AppState, delta: isize) {
    let margin = app.prefetch_margin;
    match app.route {
        Route::Methods => {
            move_card_cursor(app.library.methods.map(), &mut app.methods, delta, margin);
        }
        Route::UtilityTypes => {
            move_card_cursor(
                app.library.utility_types.map(),
                &mut app.utility_types,
                delta,
                margin,
            );
        }
        _ => {}
    }
}

/// Expand or collapse the card under the cursor.
fn toggle_card(app: &mut AppState) {
    let toggled = match app.route {
        Route::Methods => toggle_card_at_cursor(app.library.methods.map(), &mut app.methods),
        Route::UtilityTypes => {
            toggle_card_at_cursor(app.library.utility_types.map(), &mut app.utility_types)
        }
        _ => None,
    };
    tracing::trace!(?toggled, route = %app.route, "toggle card");
}

/// What: Guide navigation.
///
/// Details:
/// - Activate on a group header expands or collapses it (several may be open);
///   on a topic it opens the topic page.
fn handle_guide_key(ke: &KeyEvent, app: &mut AppState, screen: isize) {
    let rows = guide_rows(&app.library.topics, &app.guide);
    if let Some(delta) = movement(ke, app, screen) {
        app.guide.cursor = step_index(app.guide.cursor, delta, rows.len());
        return;
    }
    if !any_matches(&app.keymap.activate, ke) {
        return;
    }
    let target = match rows.get(app.guide.cursor) {
        Some(GuideRow::Group { key, .. }) => Err(key.clone()),
        Some(GuideRow::Topic { topic, .. }) => Ok(Route::Topic(topic.value.clone())),
        None => return,
    };
    match target {
        Ok(route) => app.navigate(route),
        Err(group) => app.guide.toggle_group(&group),
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers};

    use crate::events::handle_event;
    use crate::events::test_support::{app, ch, key};
    use crate::nav::Route;

    #[test]
    /// What: Moving down through the cards loads the next page once.
    ///
    /// Inputs:
    /// - Methods page; press `j` until the cursor reaches the prefetch margin.
    ///
    /// Output:
    /// - Loaded count grows by exactly one page when the threshold is crossed.
    fn moving_down_loads_more() {
        let mut app = app();
        app.navigate(Route::Methods);
        let page = app.methods.filter.page_size();
        let margin = app.prefetch_margin;
        let threshold = page - margin - 1;
        for _ in 0..threshold - 1 {
            handle_event(&ch('j'), &mut app);
        }
        assert_eq!(app.methods.filter.loaded_count(), page);
        handle_event(&ch('j'), &mut app);
        assert_eq!(app.methods.cursor, threshold);
        assert_eq!(app.methods.filter.loaded_count(), page * 2);
        handle_event(&ch('j'), &mut app);
        assert_eq!(app.methods.filter.loaded_count(), page * 2);
    }

    #[test]
    /// What: Enter expands the card under the cursor.
    ///
    /// Inputs:
    /// - Methods page, Enter twice.
    ///
    /// Output:
    /// - One expanded card, then none.
    fn enter_toggles_card() {
        let mut app = app();
        app.navigate(Route::Methods);
        let enter = key(KeyCode::Enter, KeyModifiers::NONE);
        handle_event(&enter, &mut app);
        assert_eq!(app.methods.expanded.len(), 1);
        handle_event(&enter, &mut app);
        assert!(app.methods.expanded.is_empty());
    }

    #[test]
    /// What: The guide opens groups and topics.
    ///
    /// Inputs:
    /// - Guide page: Enter on the first group, `j`, Enter.
    ///
    /// Output:
    /// - First group expanded; route is the first topic of that group.
    fn guide_opens_topic() {
        let mut app = app();
        app.navigate(Route::Guide);
        let enter = key(KeyCode::Enter, KeyModifiers::NONE);
        handle_event(&enter, &mut app);
        assert_eq!(app.guide.expanded_groups.len(), 1);
        handle_event(&ch('j'), &mut app);
        handle_event(&enter, &mut app);
        assert_eq!(app.route, Route::Topic("introduction".into()));
        assert!(!app.topic.examples_shown(0));
        handle_event(&enter, &mut app);
        assert!(app.topic.examples_shown(0));
    }

    #[test]
    /// What: Section movement picks which examples Enter toggles.
    ///
    /// Inputs:
    /// - Topic "data-types": `j`, Enter, `k`, Enter, Enter.
    ///
    /// Output:
    /// - Section 1 shown on its own; section 0 toggles on and off without touching it.
    fn topic_sections_toggle_independently() {
        let mut app = app();
        app.navigate(Route::Topic("data-types".into()));
        let enter = key(KeyCode::Enter, KeyModifiers::NONE);
        handle_event(&ch('j'), &mut app);
        assert_eq!(app.topic.section, 1);
        assert!(app.topic.follow);
        handle_event(&enter, &mut app);
        assert!(app.topic.examples_shown(1));
        assert!(!app.topic.examples_shown(0));
        handle_event(&ch('k'), &mut app);
        handle_event(&enter, &mut app);
        assert!(app.topic.examples_shown(0));
        handle_event(&enter, &mut app);
        assert!(!app.topic.examples_shown(0));
        assert!(app.topic.examples_shown(1));
    }
}
