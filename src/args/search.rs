//! Command-line search over the card pages.

use std::fmt::Write as _;
use std::path::Path;

use crate::app::load_library;
use crate::content::{Catalog, Library, Named};
use crate::logic::{categories_to_show, filtered_items};

/// Append one page's matches to `out`; returns the number of matches.
fn write_page<T: Named>(out: &mut String, title: &str, catalog: &Catalog<T>, query: &str) -> usize {
    let mut count = 0;
    let mut body = String::new();
    for category in categories_to_show(catalog.map(), &[]) {
        let items = filtered_items(catalog.map(), &category, query);
        if items.is_empty() {
            continue;
        }
        let _ = writeln!(body, "  {}", catalog.label(&category));
        for item in items {
            let _ = writeln!(body, "    {}", item.name());
            count += 1;
        }
    }
    if count > 0 {
        let _ = writeln!(out, "{title} ({count})");
        out.push_str(&body);
    }
    count
}

/// What: Render search results for the method and utility type catalogs.
///
/// Inputs:
/// - `library`: Catalogs to search
/// - `query`: Case-insensitive substring
///
/// Output:
/// - Report text: per page a heading with the match count, then category labels and names in
///   display order, without pagination; a single notice when nothing matches.
#[must_use]
pub fn search_report(library: &Library, query: &str) -> String {
    let mut out = String::new();
    let total = write_page(&mut out, "JavaScript API", &library.methods, query)
        + write_page(
            &mut out,
            "TypeScript Utility Types",
            &library.utility_types,
            query,
        );
    if total == 0 {
        let _ = writeln!(out, "No entries match \"{query}\"");
    }
    out
}

/// What: Handle command-line search mode.
///
/// Inputs:
/// - `query`: The search pattern
/// - `content`: Optional content pack replacing the methods
///
/// Output:
/// - Prints the report and exits with 0 when something matched, 1 otherwise.
pub fn handle_search(query: &str, content: Option<&Path>) -> ! {
    tracing::info!(query = %query, "search mode requested from CLI");
    let (library, problems) = load_library(content);
    for p in &problems {
        eprintln!("{p}");
    }
    let report = search_report(&library, query);
    print!("{report}");
    let matched = !report.starts_with("No entries match");
    std::process::exit(i32::from(!matched));
}
