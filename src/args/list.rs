//! Command-line listing of category filters.

use std::fmt::Write as _;
use std::path::Path;

use crate::app::load_library;
use crate::content::{Catalog, Library};

/// Append one page's category keys and labels.
fn write_categories<T>(out: &mut String, title: &str, catalog: &Catalog<T>) {
    let _ = writeln!(out, "{title}");
    for group in catalog.map().iter() {
        let _ = writeln!(
            out,
            "  {:<16} {} ({})",
            group.key.as_str(),
            catalog.label(&group.key),
            group.items.len()
        );
    }
}

/// What: Render the category filters of every page.
///
/// Inputs:
/// - `library`: Loaded catalogs
///
/// Output:
/// - One block per page listing key, label, and item count in display order.
#[must_use]
pub fn categories_report(library: &Library) -> String {
    let mut out = String::new();
    write_categories(&mut out, "JavaScript API", &library.methods);
    write_categories(&mut out, "TypeScript Utility Types", &library.utility_types);
    write_categories(&mut out, "JavaScript Guide", &library.topics);
    out
}

/// What: Handle `--list-categories`.
///
/// Inputs:
/// - `content`: Optional content pack replacing the methods
///
/// Output:
/// - Prints the report and exits with 0.
pub fn handle_list_categories(content: Option<&Path>) -> ! {
    let (library, problems) = load_library(content);
    for p in &problems {
        eprintln!("{p}");
    }
    print!("{}", categories_report(&library));
    std::process::exit(0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Every page appears with its first category.
    ///
    /// Inputs:
    /// - Bundled library.
    ///
    /// Output:
    /// - Three headings; the first method category is listed under the API heading.
    fn lists_all_pages() {
        let lib = Library::bundled().expect("bundled content");
        let report = categories_report(&lib);
        assert!(report.starts_with("JavaScript API\n"));
        assert!(report.contains("TypeScript Utility Types\n"));
        assert!(report.contains("JavaScript Guide\n"));
        let first = lib.methods.map().keys().next().expect("a category");
        assert!(report.contains(first.as_str()));
    }
}
