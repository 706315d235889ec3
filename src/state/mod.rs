//! Application state: routing, focus, per-page filter state, and overlays.

pub mod app_state;
pub mod modal;
pub mod types;

pub use app_state::AppState;
pub use modal::Modal;
pub use types::{CardKey, Focus, GuideState, PageState, SidebarState, TopicState};
