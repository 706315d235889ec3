//! Cursor movement for cards, guide rows, pills, and the sidebar.

use crate::content::{ContentMap, Named};
use crate::state::PageState;

use super::filter::compute_view;

/// What: Clamp `current + delta` into `0..len`.
///
/// Output:
/// - New index; `0` when `len` is zero.
#[must_use]
pub fn step_index(current: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    current.saturating_add_signed(delta).min(len - 1)
}

/// What: Whether the cursor is close enough to the end to load more.
///
/// Inputs:
/// - `cursor`: Highlighted card index
/// - `visible_len`: Cards currently loaded
/// - `has_more`: Whether more matches exist
/// - `margin`: Distance from the last card that still triggers
///
/// Output:
/// - `true` when `has_more` and `cursor` is within `margin` cards of the last loaded card.
#[must_use]
pub const fn near_end(cursor: usize, visible_len: usize, has_more: bool, margin: usize) -> bool {
    has_more && visible_len > 0 && cursor.saturating_add(margin) + 1 >= visible_len
}

/// What: Move the card cursor and load more when it nears the end.
///
/// Inputs:
/// - `map`: Content of the page
/// - `page`: Page state to update
/// - `delta`: Signed movement
/// - `margin`: Prefetch margin in cards
///
/// Output:
/// - `true` when `load_more` was triggered by this move.
///
/// Details:
/// - One trigger advances by exactly one page; the next trigger needs the cursor to
///   approach the new end again.
pub fn move_card_cursor<T: Named>(
    map: &ContentMap<T>,
    page: &mut PageState,
    delta: isize,
    margin: usize,
) -> bool {
    let view = compute_view(map, &page.filter);
    let len = view.visible_len();
    page.cursor = step_index(page.cursor, delta, len);
    if near_end(page.cursor, len, view.has_more, margin) {
        page.filter.load_more();
        tracing::debug!(
            cursor = page.cursor,
            visible = len,
            loaded = page.filter.loaded_count(),
            "near end of list, loading more"
        );
        return true;
    }
    false
}

/// What: Ensure the card cursor points at a visible card.
///
/// Details:
/// - Used after filters change; the cursor is clamped, never moved forward.
pub fn clamp_card_cursor<T: Named>(map: &ContentMap<T>, page: &mut PageState) {
    let len = compute_view(map, &page.filter).visible_len();
    page.cursor = step_index(page.cursor, 0, len);
}

/// What: Expand or collapse the card under the cursor.
///
/// Output:
/// - `Some(true)` when the card is now expanded, `Some(false)` when collapsed,
///   `None` when no card is visible.
pub fn toggle_card_at_cursor<T: Named>(map: &ContentMap<T>, page: &mut PageState) -> Option<bool> {
    let view = compute_view(map, &page.filter);
    let (category, item) = view.get(page.cursor)?;
    let category = category.clone();
    Some(page.toggle_expanded(&category, item.name()))
}
