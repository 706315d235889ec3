//! Row model of the guide table of contents.

use crate::content::{Catalog, Category, Topic};
use crate::state::GuideState;

/// One selectable line of the guide page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuideRow<'a> {
    /// Collapsible group header.
    Group {
        /// Group key.
        key: Category,
        /// Display label.
        label: String,
        /// Number of topics in the group.
        count: usize,
        /// Whether the group is open.
        expanded: bool,
    },
    /// Topic link inside an open group.
    Topic {
        /// 1-based position inside the group.
        number: usize,
        /// Topic record.
        topic: &'a Topic,
    },
}

/// What: Build the visible guide rows.
///
/// Inputs:
/// - `catalog`: Topic catalog
/// - `guide`: Filters and expanded groups
///
/// Output:
/// - A header per shown group, followed by its topics when expanded.
///
/// Details:
/// - Groups follow the active filters when present, otherwise catalog order.
/// - Empty groups are still listed (with a count of 0) so they stay discoverable.
#[must_use]
pub fn guide_rows<'a>(catalog: &'a Catalog<Topic>, guide: &GuideState) -> Vec<GuideRow<'a>> {
    let keys = super::filter::categories_to_show(catalog.map(), &guide.active);
    let mut rows = Vec::new();
    for key in keys {
        let topics = catalog.map().get(&key).unwrap_or_default();
        let expanded = guide.expanded_groups.contains(&key);
        rows.push(GuideRow::Group {
            label: catalog.label(&key),
            count: topics.len(),
            expanded,
            key,
        });
        if expanded {
            rows.extend(
                topics
                    .iter()
                    .enumerate()
                    .map(|(i, topic)| GuideRow::Topic {
                        number: i + 1,
                        topic,
                    }),
            );
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Library;

    #[test]
    /// What: Expanded groups list their topics; filters restrict groups.
    ///
    /// Inputs:
    /// - Bundled topics with BASIC expanded, then a filter on PROMISE.
    ///
    /// Output:
    /// - BASIC header followed by numbered topics; filter leaves one empty group.
    fn rows_follow_expansion_and_filters() {
        let lib = Library::bundled().expect("bundled content");
        let mut g = GuideState::default();
        g.toggle_group(&"BASIC".into());
        let rows = guide_rows(&lib.topics, &g);
        match &rows[0] {
            GuideRow::Group { key, expanded, count, .. } => {
                assert_eq!(key.as_str(), "BASIC");
                assert!(*expanded);
                assert!(*count > 0);
            }
            GuideRow::Topic { .. } => panic!("first row is a header"),
        }
        assert!(matches!(rows[1], GuideRow::Topic { number: 1, .. }));

        g.active = vec!["PROMISE".into()];
        let rows = guide_rows(&lib.topics, &g);
        assert_eq!(rows.len(), 1);
        assert!(matches!(rows[0], GuideRow::Group { count: 0, .. }));
    }
}
