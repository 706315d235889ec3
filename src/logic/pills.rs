//! Category pill bar: pill list derivation and toggle semantics.

use crate::content::{Catalog, Category};

/// One selectable pill in the filter bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PillItem {
    /// Category the pill filters on.
    pub value: Category,
    /// Human-readable label.
    pub label: String,
}

/// What: Derive the pill list for a page from its catalog.
///
/// Inputs:
/// - `catalog`: Page catalog
///
/// Output:
/// - One pill per category in map order, labelled via [`Catalog::label`].
#[must_use]
pub fn pill_items<T>(catalog: &Catalog<T>) -> Vec<PillItem> {
    catalog
        .map()
        .keys()
        .map(|k| PillItem {
            value: k.clone(),
            label: catalog.label(k),
        })
        .collect()
}

/// What: Toggle `value` within the active list.
///
/// Inputs:
/// - `active`: Current active filters
/// - `value`: Pill that was activated
///
/// Output:
/// - New list with `value` removed when present, otherwise appended at the end.
#[must_use]
pub fn toggle_pill(active: &[Category], value: &Category) -> Vec<Category> {
    if active.contains(value) {
        active.iter().filter(|c| *c != value).cloned().collect()
    } else {
        let mut next = active.to_vec();
        next.push(value.clone());
        next
    }
}
