use std::collections::HashSet;

use crate::content::Category;
use crate::logic::filter::FilterState;

/// Which region currently has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Navigation tree on the left.
    Sidebar,
    /// Category pill bar.
    Pills,
    /// Search input.
    Search,
    /// Main content (cards, guide rows, or topic text).
    Content,
}

impl Focus {
    /// What: Next focus stop for the current page layout.
    ///
    /// Inputs:
    /// - `has_pills`: Page shows a pill bar
    /// - `has_search`: Page shows a search input
    /// - `forward`: Direction of travel
    ///
    /// Output:
    /// - Following focus, skipping regions the page does not have.
    #[must_use]
    pub fn cycle(self, has_pills: bool, has_search: bool, forward: bool) -> Self {
        let mut order = vec![Self::Sidebar];
        if has_pills {
            order.push(Self::Pills);
        }
        if has_search {
            order.push(Self::Search);
        }
        order.push(Self::Content);
        let len = order.len();
        let idx = order.iter().position(|f| *f == self).unwrap_or(len - 1);
        let next = if forward {
            (idx + 1) % len
        } else {
            (idx + len - 1) % len
        };
        order[next]
    }
}

/// Identity of a card for expansion tracking.
pub type CardKey = (Category, String);

/// UI state of one card page (methods or utility types).
#[derive(Debug, Clone, Default)]
pub struct PageState {
    /// Category filters, query, and pagination cursor.
    pub filter: FilterState,
    /// Highlighted card as a flat index into the visible slice.
    pub cursor: usize,
    /// Highlighted pill.
    pub pill_cursor: usize,
    /// Expanded cards.
    pub expanded: HashSet<CardKey>,
    /// First rendered line of the card list.
    pub scroll: u16,
}

impl PageState {
    /// Fresh page state with the given pagination increment.
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            filter: FilterState::new(page_size),
            ..Self::default()
        }
    }

    /// Whether the card identified by `key` is expanded.
    #[must_use]
    pub fn is_expanded(&self, category: &Category, name: &str) -> bool {
        self.expanded.contains(&(category.clone(), name.to_string()))
    }

    /// What: Flip one card between collapsed and expanded.
    ///
    /// Output:
    /// - `true` when the card is now expanded.
    pub fn toggle_expanded(&mut self, category: &Category, name: &str) -> bool {
        let key = (category.clone(), name.to_string());
        if self.expanded.remove(&key) {
            false
        } else {
            self.expanded.insert(key);
            true
        }
    }

    /// Move the cursor and scroll to the top after the filter predicate changed.
    pub const fn reset_cursor(&mut self) {
        self.cursor = 0;
        self.scroll = 0;
    }
}

/// UI state of the guide table of contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuideState {
    /// Category filters from the pill bar.
    pub active: Vec<Category>,
    /// Groups currently expanded (several may be open).
    pub expanded_groups: Vec<Category>,
    /// Highlighted row across group headers and topic rows.
    pub cursor: usize,
    /// Highlighted pill.
    pub pill_cursor: usize,
}

impl GuideState {
    /// What: Expand or collapse one topic group.
    ///
    /// Details:
    /// - Opening appends the group; other groups stay as they are.
    pub fn toggle_group(&mut self, key: &Category) {
        if let Some(pos) = self.expanded_groups.iter().position(|k| k == key) {
            self.expanded_groups.remove(pos);
        } else {
            self.expanded_groups.push(key.clone());
        }
    }
}

/// UI state of the navigation sidebar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SidebarState {
    /// The single expanded group, if any.
    pub expanded: Option<&'static str>,
    /// Whether the sidebar is collapsed to a narrow strip.
    pub collapsed: bool,
    /// Highlighted row.
    pub cursor: usize,
}

impl SidebarState {
    /// Open `id`, or close it when it is already open.
    pub fn toggle_group(&mut self, id: &'static str) {
        self.expanded = if self.expanded == Some(id) {
            None
        } else {
            Some(id)
        };
    }
}

/// UI state of the topic reader.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicState {
    /// Highlighted section index.
    pub section: usize,
    /// Sections whose examples are shown; every example starts hidden.
    pub shown_examples: HashSet<usize>,
    /// Set by section movement so the next render scrolls the section into view.
    pub follow: bool,
}

impl TopicState {
    /// Show or hide the examples of the highlighted section; returns whether they are shown.
    pub fn toggle_examples(&mut self) -> bool {
        if self.shown_examples.remove(&self.section) {
            false
        } else {
            self.shown_examples.insert(self.section);
            true
        }
    }

    /// Whether section `index` has its examples shown.
    #[must_use]
    pub fn examples_shown(&self, index: usize) -> bool {
        self.shown_examples.contains(&index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Focus cycling skips regions missing from the page.
    ///
    /// Inputs:
    /// - Card page (pills + search) and a topic page (neither).
    ///
    /// Output:
    /// - Full ring on card pages; Sidebar/Content toggle otherwise.
    fn focus_cycle_skips_missing_regions() {
        assert_eq!(Focus::Sidebar.cycle(true, true, true), Focus::Pills);
        assert_eq!(Focus::Content.cycle(true, true, true), Focus::Sidebar);
        assert_eq!(Focus::Sidebar.cycle(true, true, false), Focus::Content);
        assert_eq!(Focus::Sidebar.cycle(false, false, true), Focus::Content);
        assert_eq!(Focus::Search.cycle(false, false, true), Focus::Sidebar);
        assert_eq!(Focus::Pills.cycle(true, false, true), Focus::Content);
    }

    #[test]
    /// What: Sidebar keeps one group open; guide allows several.
    ///
    /// Inputs:
    /// - Sidebar toggles on two ids; guide toggles on two groups.
    ///
    /// Output:
    /// - Sidebar switches groups; guide keeps both until toggled again.
    fn group_toggles() {
        let mut sb = SidebarState::default();
        sb.toggle_group("javascript");
        sb.toggle_group("typescript");
        assert_eq!(sb.expanded, Some("typescript"));
        sb.toggle_group("typescript");
        assert_eq!(sb.expanded, None);

        let mut g = GuideState::default();
        g.toggle_group(&"BASIC".into());
        g.toggle_group(&"OBJECT".into());
        assert_eq!(g.expanded_groups.len(), 2);
        g.toggle_group(&"BASIC".into());
        assert_eq!(g.expanded_groups, vec![Category::new("OBJECT")]);
    }

    #[test]
    /// What: Card expansion is keyed by category and name.
    ///
    /// Inputs:
    /// - Toggle `ARRAY/pop()` twice.
    ///
    /// Output:
    /// - Expanded, then collapsed.
    fn card_expansion_toggles() {
        let mut p = PageState::new(20);
        let cat = Category::new("ARRAY");
        assert!(p.toggle_expanded(&cat, "pop()"));
        assert!(p.is_expanded(&cat, "pop()"));
        assert!(!p.is_expanded(&Category::new("STRING"), "pop()"));
        assert!(!p.toggle_expanded(&cat, "pop()"));
    }
}
