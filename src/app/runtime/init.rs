use std::path::Path;

use crate::content::{Library, Method, load_catalog};
use crate::state::{AppState, Modal};
use crate::theme::settings;

use super::RunOptions;

/// What: Load the catalogs the browser shows.
///
/// Inputs:
/// - `content`: Optional external pack replacing the method catalog
///
/// Output:
/// - The library plus human-readable problems to show in an alert.
///
/// Details:
/// - Broken bundled content yields an empty library instead of aborting.
/// - A broken external pack keeps the bundled methods.
#[must_use]
pub fn load_library(content: Option<&Path>) -> (Library, Vec<String>) {
    let mut problems = Vec::new();
    let mut library = match Library::bundled() {
        Ok(lib) => lib,
        Err(e) => {
            tracing::error!(error = %e, "bundled content failed to parse");
            problems.push(format!("Bundled content could not be loaded: {e}"));
            Library::default()
        }
    };
    if let Some(path) = content {
        match load_catalog::<Method>(path) {
            Ok(methods) => {
                tracing::info!(
                    path = %path.display(),
                    categories = methods.map().len(),
                    items = methods.map().item_count(),
                    "loaded content pack"
                );
                library.methods = methods;
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "content pack rejected");
                problems.push(e.to_string());
            }
        }
    }
    (library, problems)
}

/// What: Build the initial application state.
///
/// Inputs:
/// - `opts`: Start page, content pack, initial query
///
/// Output:
/// - State on the start page with settings applied; load problems open an alert.
#[must_use]
pub fn initialize_app_state(opts: RunOptions) -> AppState {
    let RunOptions {
        start,
        content,
        search,
    } = opts;
    let prefs = settings();
    let (library, problems) = load_library(content.as_deref());
    let mut app = AppState::new(library, &prefs);
    app.open_start_page(start);
    if let Some(query) = search
        && let Some(page) = app.page_mut()
    {
        page.filter.set_search_query(query);
    }
    if !problems.is_empty() {
        app.modal = Modal::Alert {
            message: problems.join("\n"),
        };
    }
    tracing::info!(
        start = %app.route,
        page_size = prefs.page_size,
        methods = app.library.methods.map().item_count(),
        utility_types = app.library.utility_types.map().item_count(),
        topics = app.library.topics.map().item_count(),
        "initialized application state"
    );
    app
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    /// What: A valid pack replaces the methods; an invalid one keeps the bundle and reports.
    ///
    /// Inputs:
    /// - A one-method JSON pack, then a file with an unsupported extension.
    ///
    /// Output:
    /// - Methods from the pack; then bundled methods plus one problem.
    fn content_pack_replaces_methods() {
        let dir = tempfile::tempdir().expect("tempdir");
        let pack = dir.path().join("pack.json");
        let mut f = std::fs::File::create(&pack).expect("create pack");
        write!(
            f,
            r#"{{"categories":[{{"key":"CUSTOM","items":[{{"name":"hello","syntax":"hello()","description":"Says hi","example":"hello()"}}]}}]}}"#
        )
        .expect("write pack");
        let (lib, problems) = load_library(Some(&pack));
        assert!(problems.is_empty());
        assert_eq!(lib.methods.map().item_count(), 1);

        let bad = dir.path().join("pack.yaml");
        std::fs::write(&bad, "x").expect("write");
        let (lib, problems) = load_library(Some(&bad));
        assert_eq!(problems.len(), 1);
        assert!(lib.methods.map().item_count() > 1);
    }
}
