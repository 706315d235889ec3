//! Core non-UI logic: filtering and pagination, pills, guide rows, cursors.

pub mod filter;
pub mod guide;
pub mod pills;
pub mod selection;

pub use filter::{
    DEFAULT_PAGE_SIZE, FilterState, FilteredView, categories_to_show, compute_view,
    filtered_items, has_more, matches_query, total_match_count, visible_slice,
};
pub use guide::{GuideRow, guide_rows};
pub use pills::{PillItem, pill_items, toggle_pill};
pub use selection::{
    clamp_card_cursor, move_card_cursor, near_end, step_index, toggle_card_at_cursor,
};
