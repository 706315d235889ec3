//! Filter/pagination engine over a [`ContentMap`].
//!
//! Everything here is a pure function of the content map and the current
//! [`FilterState`]: which categories are visible, which items pass the text
//! filter, the greedy prefix-fill truncation to `loaded_count`, and whether
//! more items remain.

use crate::content::{Category, ContentMap, Named};

/// Number of items added per `load_more` when no setting overrides it.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Page-local filter, search and pagination state.
///
/// Any change to the filter predicate (categories or query) resets the
/// pagination cursor to one page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterState {
    active_categories: Vec<Category>,
    search_query: String,
    loaded_count: usize,
    page_size: usize,
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl FilterState {
    /// What: Create an unfiltered state showing one page.
    ///
    /// Inputs:
    /// - `page_size`: Pagination increment; `0` is treated as `1`
    ///
    /// Output:
    /// - State with no active categories, empty query, and `loaded_count == page_size`.
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            active_categories: Vec::new(),
            search_query: String::new(),
            loaded_count: page_size,
            page_size,
        }
    }

    /// Active category filters in the order they were selected.
    #[must_use]
    pub fn active_categories(&self) -> &[Category] {
        &self.active_categories
    }

    /// Current free-text query.
    #[must_use]
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Current pagination cursor.
    #[must_use]
    pub const fn loaded_count(&self) -> usize {
        self.loaded_count
    }

    /// Pagination increment.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Whether `category` is among the active filters.
    #[must_use]
    pub fn is_active(&self, category: &Category) -> bool {
        self.active_categories.contains(category)
    }

    /// What: Replace the active category filters.
    ///
    /// Inputs:
    /// - `categories`: New filter list; later duplicates are dropped
    ///
    /// Output:
    /// - None (resets `loaded_count` to one page).
    pub fn set_active_categories(&mut self, categories: Vec<Category>) {
        let mut deduped: Vec<Category> = Vec::with_capacity(categories.len());
        for c in categories {
            if !deduped.contains(&c) {
                deduped.push(c);
            }
        }
        self.active_categories = deduped;
        self.reset_pagination();
    }

    /// What: Toggle one category pill on or off.
    ///
    /// Inputs:
    /// - `category`: Pill value
    ///
    /// Output:
    /// - None (appends or removes, then resets `loaded_count`).
    pub fn toggle_category(&mut self, category: &Category) {
        let next = super::pills::toggle_pill(&self.active_categories, category);
        self.set_active_categories(next);
    }

    /// Replace the search query and reset pagination.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        self.reset_pagination();
    }

    /// Append one typed character to the query.
    pub fn push_search_char(&mut self, ch: char) {
        self.search_query.push(ch);
        self.reset_pagination();
    }

    /// What: Remove the last character of the query.
    ///
    /// Output:
    /// - `true` when a character was removed; an empty query is left untouched and the
    ///   pagination cursor is kept.
    pub fn pop_search_char(&mut self) -> bool {
        if self.search_query.pop().is_some() {
            self.reset_pagination();
            true
        } else {
            false
        }
    }

    /// Clear the query and reset pagination.
    pub fn reset_search(&mut self) {
        self.set_search_query(String::new());
    }

    /// Advance the cursor by one page. There is no upper clamp.
    pub const fn load_more(&mut self) {
        self.loaded_count = self.loaded_count.saturating_add(self.page_size);
    }

    /// Change the increment (clamped to at least 1) and reset the cursor.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.reset_pagination();
    }

    /// Set the pagination cursor back to one page.
    pub const fn reset_pagination(&mut self) {
        self.loaded_count = self.page_size;
    }
}

/// What: Case-insensitive substring test used for every search.
///
/// Inputs:
/// - `name`: Item name
/// - `query_lower`: Query already lowercased
///
/// Output:
/// - `true` when `query_lower` occurs anywhere in the lowercased name (empty matches all).
///
/// Details:
/// - Unicode lowercasing only; no normalization, tokenization, or diacritic folding.
#[must_use]
pub fn matches_query(name: &str, query_lower: &str) -> bool {
    query_lower.is_empty() || name.to_lowercase().contains(query_lower)
}

/// What: Resolve which categories are visible.
///
/// Inputs:
/// - `map`: Content map
/// - `active`: Active filters (may be empty)
///
/// Output:
/// - `active` unchanged when non-empty; otherwise every key of `map` in map order.
#[must_use]
pub fn categories_to_show<T>(map: &ContentMap<T>, active: &[Category]) -> Vec<Category> {
    if active.is_empty() {
        map.keys().cloned().collect()
    } else {
        active.to_vec()
    }
}

/// What: Items of one category passing the text filter, in authored order.
///
/// Inputs:
/// - `map`: Content map
/// - `category`: Category to read; unknown categories yield no items
/// - `query`: Raw query (lowercased here)
///
/// Output:
/// - Borrowed matching items, never re-sorted.
#[must_use]
pub fn filtered_items<'a, T: Named>(
    map: &'a ContentMap<T>,
    category: &Category,
    query: &str,
) -> Vec<&'a T> {
    let query_lower = query.to_lowercase();
    map.get(category)
        .unwrap_or_default()
        .iter()
        .filter(|item| matches_query(item.name(), &query_lower))
        .collect()
}

/// What: Count matching items across all visible categories.
///
/// Inputs:
/// - `map`, `active`, `query`: As for [`visible_slice`]
///
/// Output:
/// - Sum of per-category filtered lengths; `0` iff nothing visible matches.
#[must_use]
pub fn total_match_count<T: Named>(map: &ContentMap<T>, active: &[Category], query: &str) -> usize {
    categories_to_show(map, active)
        .iter()
        .map(|c| filtered_items(map, c, query).len())
        .sum()
}

/// What: Compute the visible slice with greedy prefix-fill.
///
/// Inputs:
/// - `map`: Content map
/// - `active`: Active filters
/// - `query`: Free-text query
/// - `loaded_count`: Total item budget across categories
///
/// Output:
/// - `(category, items)` pairs in display order, at most `loaded_count` items in total.
///
/// Details:
/// - Earlier categories are exhausted before later ones receive anything.
/// - Categories that would contribute zero items are omitted instead of kept empty.
/// - Stops as soon as the budget is used up.
#[must_use]
pub fn visible_slice<'a, T: Named>(
    map: &'a ContentMap<T>,
    active: &[Category],
    query: &str,
    loaded_count: usize,
) -> Vec<(Category, Vec<&'a T>)> {
    let mut taken = 0usize;
    let mut out = Vec::new();
    for category in categories_to_show(map, active) {
        if taken >= loaded_count {
            break;
        }
        let mut items = filtered_items(map, &category, query);
        let remaining = loaded_count - taken;
        items.truncate(remaining);
        if !items.is_empty() {
            taken += items.len();
            out.push((category, items));
        }
    }
    out
}

/// Whether more matching items exist beyond the cursor.
#[must_use]
pub const fn has_more(loaded_count: usize, total_count: usize) -> bool {
    loaded_count < total_count
}

/// Everything a page needs to render for one filter state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilteredView<'a, T> {
    /// Categories considered, in display order.
    pub categories: Vec<Category>,
    /// Number of matching items ignoring pagination.
    pub total_count: usize,
    /// Visible slice, see [`visible_slice`].
    pub items: Vec<(Category, Vec<&'a T>)>,
    /// Whether `load_more` would reveal more items.
    pub has_more: bool,
}

impl<'a, T> FilteredView<'a, T> {
    /// Number of visible items summed across categories.
    #[must_use]
    pub fn visible_len(&self) -> usize {
        self.items.iter().map(|(_, v)| v.len()).sum()
    }

    /// Whether nothing is visible (renders the empty state).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Visible items flattened in display order, each with its category.
    pub fn flat(&self) -> impl Iterator<Item = (&Category, &'a T)> + '_ {
        self.items
            .iter()
            .flat_map(|(c, items)| items.iter().map(move |it| (c, *it)))
    }

    /// Item at flat position `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<(&Category, &'a T)> {
        self.flat().nth(index)
    }
}

/// What: Compute the full view for a page.
///
/// Inputs:
/// - `map`: Content map
/// - `filter`: Current filter state
///
/// Output:
/// - [`FilteredView`] with categories, total, visible slice, and `has_more`.
#[must_use]
pub fn compute_view<'a, T: Named>(map: &'a ContentMap<T>, filter: &FilterState) -> FilteredView<'a, T> {
    let categories = categories_to_show(map, filter.active_categories());
    let total_count = total_match_count(map, filter.active_categories(), filter.search_query());
    let items = visible_slice(
        map,
        filter.active_categories(),
        filter.search_query(),
        filter.loaded_count(),
    );
    let view = FilteredView {
        categories,
        total_count,
        items,
        has_more: has_more(filter.loaded_count(), total_count),
    };
    tracing::trace!(
        query = %filter.search_query(),
        active = filter.active_categories().len(),
        loaded = filter.loaded_count(),
        total = view.total_count,
        visible = view.visible_len(),
        has_more = view.has_more,
        "computed filtered view"
    );
    view
}
