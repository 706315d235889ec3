//! Reference content: typed records, ordered catalogs, and pack loading.
//!
//! The three pages of the browser each own one [`Catalog`]. The bundled
//! catalogs are compiled into the binary; the method catalog may be replaced
//! by an external pack at startup.

mod catalog;
mod error;
mod loader;
mod types;

pub use catalog::{Catalog, CatalogDocument, CategoryDocument, CategoryGroup, ContentMap};
pub use error::{ContentError, Result};
pub use loader::{PackFormat, load_catalog, parse_json, parse_toml};
pub use types::{
    Category, Method, Named, Parameter, SyntaxBreakdownItem, Topic, TopicSection, UtilityType,
};

/// Bundled JavaScript method catalog.
const METHODS_JSON: &str = include_str!("../../assets/methods.json");
/// Bundled TypeScript utility type catalog.
const UTILITY_TYPES_JSON: &str = include_str!("../../assets/utility_types.json");
/// Bundled guide topics.
const TOPICS_JSON: &str = include_str!("../../assets/topics.json");

/// All catalogs the browser shows.
#[derive(Clone, Debug, Default)]
pub struct Library {
    /// JavaScript API methods grouped by built-in object.
    pub methods: Catalog<Method>,
    /// TypeScript utility types grouped by kind.
    pub utility_types: Catalog<UtilityType>,
    /// Guide topics grouped by theme.
    pub topics: Catalog<Topic>,
}

impl Library {
    /// What: Parse the catalogs compiled into the binary.
    ///
    /// Output:
    /// - The bundled library, or the first parse error.
    ///
    /// # Errors
    /// - Any [`ContentError`] from the embedded documents (indicates a broken build asset).
    pub fn bundled() -> Result<Self> {
        Ok(Self {
            methods: parse_json(METHODS_JSON)?,
            utility_types: parse_json(UTILITY_TYPES_JSON)?,
            topics: parse_json(TOPICS_JSON)?,
        })
    }
}
