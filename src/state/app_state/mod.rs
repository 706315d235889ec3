//! Central `AppState` container.

use std::time::{Duration, Instant};

use crate::content::{Category, Library, Topic};
use crate::logic::pills::{PillItem, pill_items};
use crate::nav::{Route, find_parent_for_route, nav_items};
use crate::state::modal::Modal;
use crate::state::types::{Focus, GuideState, PageState, SidebarState, TopicState};
use crate::text::ExcludeSet;
use crate::theme::{KeyMap, Settings};


/// Maximum number of routes kept for `back`.
pub const HISTORY_CAPACITY: usize = 50;

/// Global application state shared by the event and UI layers.
///
/// Each card page owns its own [`PageState`]; nothing is shared between pages
/// and nothing is persisted across runs.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Content shown by all pages.
    pub library: Library,
    /// Page currently shown.
    pub route: Route,
    /// Previously visited routes, most recent last.
    pub history: Vec<Route>,
    /// Region with keyboard focus.
    pub focus: Focus,
    /// Active overlay.
    pub modal: Modal,
    /// Navigation tree state.
    pub sidebar: SidebarState,
    /// JavaScript API page.
    pub methods: PageState,
    /// TypeScript utility types page.
    pub utility_types: PageState,
    /// Guide table of contents.
    pub guide: GuideState,
    /// Vertical scroll of the topic reader (and home page).
    pub topic_scroll: u16,
    /// Section cursor and shown examples of the topic reader.
    pub topic: TopicState,
    /// Words never emphasized in prose.
    pub exclude: ExcludeSet,
    /// Active key bindings.
    pub keymap: KeyMap,
    /// Cards from the end that trigger loading more.
    pub prefetch_margin: usize,
    /// Sidebar width when expanded.
    pub sidebar_width: u16,
    /// Whether the key hint footer is drawn.
    pub show_keybinds_footer: bool,
    /// One-line status message shown in the footer.
    pub status: Option<String>,
    /// When the status message was set; used to expire it.
    pub status_since: Option<Instant>,
    /// Height of the content area at the last draw, used for paging.
    pub content_height: u16,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Library::default(), &Settings::default())
    }
}

impl AppState {
    /// What: Build state for a library with the given settings.
    ///
    /// Inputs:
    /// - `library`: Catalogs to browse
    /// - `settings`: Page size, margins, exclusions, keymap
    ///
    /// Output:
    /// - State on the home page with content focus and fresh page states.
    #[must_use]
    pub fn new(library: Library, settings: &Settings) -> Self {
        Self {
            library,
            route: Route::Home,
            history: Vec::new(),
            focus: Focus::Content,
            modal: Modal::None,
            sidebar: SidebarState::default(),
            methods: PageState::new(settings.page_size),
            utility_types: PageState::new(settings.page_size),
            guide: GuideState::default(),
            topic_scroll: 0,
            topic: TopicState::default(),
            exclude: ExcludeSet::new(&settings.highlight_exclude_words),
            keymap: settings.keymap.clone(),
            prefetch_margin: settings.prefetch_margin,
            sidebar_width: settings.sidebar_width,
            show_keybinds_footer: settings.show_keybinds_footer,
            status: None,
            status_since: None,
            content_height: 0,
        }
    }

    /// What: Apply reloaded settings.
    ///
    /// Details:
    /// - A changed page size resets both card pages' pagination.
    pub fn apply_settings(&mut self, settings: &Settings) {
        for page in [&mut self.methods, &mut self.utility_types] {
            if page.filter.page_size() != settings.page_size.max(1) {
                page.filter.set_page_size(settings.page_size);
                page.reset_cursor();
            }
        }
        self.exclude = ExcludeSet::new(&settings.highlight_exclude_words);
        self.keymap = settings.keymap.clone();
        self.prefetch_margin = settings.prefetch_margin;
        self.sidebar_width = settings.sidebar_width;
        self.show_keybinds_footer = settings.show_keybinds_footer;
    }

    /// What: Open the first page without recording history.
    ///
    /// Details:
    /// - Expands the sidebar group that owns `route`.
    pub fn open_start_page(&mut self, route: Route) {
        self.sidebar.expanded = find_parent_for_route(&nav_items(), &route);
        self.route = route;
        self.focus = Focus::Content;
    }

    /// What: Navigate to `route`, remembering the current page.
    ///
    /// Inputs:
    /// - `route`: Target page
    ///
    /// Output:
    /// - None. Navigating to the current route is a no-op.
    pub fn navigate(&mut self, route: Route) {
        if route == self.route {
            return;
        }
        tracing::debug!(from = %self.route, to = %route, "navigate");
        let previous = std::mem::replace(&mut self.route, route);
        self.history.push(previous);
        if self.history.len() > HISTORY_CAPACITY {
            self.history.remove(0);
        }
        self.topic_scroll = 0;
        self.topic = TopicState::default();
        self.focus = Focus::Content;
    }

    /// What: Return to the previous page.
    ///
    /// Output:
    /// - `false` when there is no history.
    pub fn back(&mut self) -> bool {
        let Some(prev) = self.history.pop() else {
            return false;
        };
        tracing::debug!(from = %self.route, to = %prev, "back");
        self.route = prev;
        self.topic_scroll = 0;
        self.topic = TopicState::default();
        self.focus = Focus::Content;
        true
    }

    /// State of the current card page, if the route has one.
    #[must_use]
    pub const fn page(&self) -> Option<&PageState> {
        match self.route {
            Route::Methods => Some(&self.methods),
            Route::UtilityTypes => Some(&self.utility_types),
            _ => None,
        }
    }

    /// Mutable state of the current card page, if the route has one.
    pub fn page_mut(&mut self) -> Option<&mut PageState> {
        match self.route {
            Route::Methods => Some(&mut self.methods),
            Route::UtilityTypes => Some(&mut self.utility_types),
            _ => None,
        }
    }

    /// Whether the current page shows a pill bar.
    #[must_use]
    pub const fn has_pills(&self) -> bool {
        matches!(self.route, Route::Methods | Route::UtilityTypes | Route::Guide)
    }

    /// Whether the current page shows a search input.
    #[must_use]
    pub const fn has_search(&self) -> bool {
        self.route.has_cards()
    }

    /// Pills of the current page (empty when it has none).
    #[must_use]
    pub fn pills(&self) -> Vec<PillItem> {
        match self.route {
            Route::Methods => pill_items(&self.library.methods),
            Route::UtilityTypes => pill_items(&self.library.utility_types),
            Route::Guide => pill_items(&self.library.topics),
            _ => Vec::new(),
        }
    }

    /// Active category filters of the current page.
    #[must_use]
    pub fn active_categories(&self) -> &[Category] {
        match self.route {
            Route::Guide => &self.guide.active,
            _ => self
                .page()
                .map_or(&[][..], |p| p.filter.active_categories()),
        }
    }

    /// What: Toggle a pill on the current page.
    ///
    /// Details:
    /// - Card pages reset pagination and the card cursor; the guide resets its row cursor.
    pub fn toggle_pill(&mut self, category: &Category) {
        if self.route == Route::Guide {
            self.guide.active = crate::logic::pills::toggle_pill(&self.guide.active, category);
            self.guide.cursor = 0;
        } else if let Some(page) = self.page_mut() {
            page.filter.toggle_category(category);
            page.reset_cursor();
        }
    }

    /// What: Look up a guide topic by its `value`.
    ///
    /// Output:
    /// - The owning category and the topic, if any group contains it.
    #[must_use]
    pub fn find_topic(&self, value: &str) -> Option<(&Category, &Topic)> {
        self.library
            .topics
            .map()
            .iter()
            .find_map(|g| g.items.iter().find(|t| t.value == value).map(|t| (&g.key, t)))
    }

    /// Set the footer status message.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status = Some(msg.into());
        self.status_since = Some(Instant::now());
    }

    /// What: Drop the status message once it is older than `ttl`.
    ///
    /// Output:
    /// - `true` when a message was cleared.
    pub fn expire_status(&mut self, ttl: Duration) -> bool {
        match self.status_since {
            Some(since) if since.elapsed() >= ttl => {
                self.status = None;
                self.status_since = None;
                true
            }
            _ => false,
        }
    }
}
