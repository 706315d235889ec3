//! Routes and the sidebar navigation tree.

use std::fmt;

/// A page the browser can show.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    /// Landing page.
    Home,
    /// JavaScript guide table of contents.
    Guide,
    /// JavaScript API method reference.
    Methods,
    /// TypeScript utility type reference.
    UtilityTypes,
    /// A single guide topic, identified by its `value`.
    Topic(String),
}

impl Route {
    /// Title shown in the page header.
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Home => "Reference Deck",
            Self::Guide => "JavaScript Guide",
            Self::Methods => "JavaScript API",
            Self::UtilityTypes => "TypeScript Utility Types",
            Self::Topic(value) => value,
        }
    }

    /// What: Whether the route shows a filterable card list.
    ///
    /// Output:
    /// - `true` for the method and utility type pages.
    #[must_use]
    pub const fn has_cards(&self) -> bool {
        matches!(self, Self::Methods | Self::UtilityTypes)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Topic(v) => write!(f, "topic/{v}"),
            other => f.write_str(other.title()),
        }
    }
}

/// One node of the sidebar tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavItem {
    /// Text shown in the sidebar.
    pub label: &'static str,
    /// Target page; `None` for pure group headers.
    pub route: Option<Route>,
    /// Group identifier used for expand/collapse; `None` for leaves.
    pub id: Option<&'static str>,
    /// Child links.
    pub children: Vec<NavItem>,
}

impl NavItem {
    fn leaf(label: &'static str, route: Route) -> Self {
        Self {
            label,
            route: Some(route),
            id: None,
            children: Vec::new(),
        }
    }

    fn group(label: &'static str, id: &'static str, children: Vec<Self>) -> Self {
        Self {
            label,
            route: None,
            id: Some(id),
            children,
        }
    }

    /// Whether the item expands into children.
    #[must_use]
    pub const fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// What: Build the sidebar tree.
///
/// Output:
/// - Home, then the JavaScript group (Guide, API) and the TypeScript group (Utility Types).
#[must_use]
pub fn nav_items() -> Vec<NavItem> {
    vec![
        NavItem::leaf("Home", Route::Home),
        NavItem::group(
            "JavaScript",
            "javascript",
            vec![
                NavItem::leaf("Guide", Route::Guide),
                NavItem::leaf("API", Route::Methods),
            ],
        ),
        NavItem::group(
            "TypeScript",
            "typescript",
            vec![NavItem::leaf("Utility Types", Route::UtilityTypes)],
        ),
    ]
}

/// What: Find the group that owns a route.
///
/// Inputs:
/// - `items`: Sidebar tree
/// - `route`: Current route
///
/// Output:
/// - Id of the top-level item matching `route` directly or through a child; `None` otherwise.
///
/// Details:
/// - Topic pages belong to the guide, so they resolve like [`Route::Guide`].
#[must_use]
pub fn find_parent_for_route(items: &[NavItem], route: &Route) -> Option<&'static str> {
    let route = match route {
        Route::Topic(_) => &Route::Guide,
        other => other,
    };
    for item in items {
        if item.route.as_ref() == Some(route) {
            return item.id;
        }
        if item.children.iter().any(|c| c.route.as_ref() == Some(route)) {
            return item.id;
        }
    }
    None
}

/// One visible sidebar line after expansion is applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarRow {
    /// Nesting depth (0 for top level).
    pub depth: u8,
    /// Text shown.
    pub label: &'static str,
    /// Link target for leaves.
    pub route: Option<Route>,
    /// Group id for headers.
    pub group: Option<&'static str>,
    /// Whether the header is expanded.
    pub expanded: bool,
}

/// What: Flatten the tree into the rows the sidebar renders.
///
/// Inputs:
/// - `items`: Sidebar tree
/// - `expanded`: The single expanded group id, if any
///
/// Output:
/// - Top-level rows with children of the expanded group inserted after their header.
#[must_use]
pub fn sidebar_rows(items: &[NavItem], expanded: Option<&str>) -> Vec<SidebarRow> {
    let mut rows = Vec::new();
    for item in items {
        let is_open = item.has_children() && item.id.is_some() && item.id == expanded;
        rows.push(SidebarRow {
            depth: 0,
            label: item.label,
            route: item.route.clone(),
            group: item.id,
            expanded: is_open,
        });
        if is_open {
            rows.extend(item.children.iter().map(|c| SidebarRow {
                depth: 1,
                label: c.label,
                route: c.route.clone(),
                group: None,
                expanded: false,
            }));
        }
    }
    rows
}
