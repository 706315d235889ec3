//! Reading catalogs from JSON or TOML content packs.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use super::catalog::{Catalog, CatalogDocument};
use super::error::{ContentError, Result};

/// Supported on-disk formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PackFormat {
    /// `*.json`
    Json,
    /// `*.toml`
    Toml,
}

impl PackFormat {
    /// What: Pick the format from a file extension.
    ///
    /// Inputs:
    /// - `path`: Pack location
    ///
    /// Output:
    /// - `Some(PackFormat)` for `.json`/`.toml` (case-insensitive), otherwise `None`.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}

/// Parse a catalog from JSON text.
///
/// # Errors
/// - `ContentError::Json` on malformed input
/// - `ContentError::DuplicateCategory` when a key repeats
pub fn parse_json<T: DeserializeOwned>(text: &str) -> Result<Catalog<T>> {
    let doc: CatalogDocument<T> = serde_json::from_str(text)?;
    Catalog::from_document(doc)
}

/// Parse a catalog from TOML text.
///
/// # Errors
/// - `ContentError::Toml` on malformed input
/// - `ContentError::DuplicateCategory` when a key repeats
pub fn parse_toml<T: DeserializeOwned>(text: &str) -> Result<Catalog<T>> {
    let doc: CatalogDocument<T> = toml::from_str(text)?;
    Catalog::from_document(doc)
}

/// What: Load a catalog from a content pack on disk.
///
/// Inputs:
/// - `path`: `.json` or `.toml` file in the catalog document shape
///
/// Output:
/// - Parsed catalog in document order.
///
/// # Errors
/// - `UnsupportedFormat` for other extensions (checked before reading)
/// - `Io` when the file cannot be read
/// - parse and duplicate-key errors from [`parse_json`]/[`parse_toml`]
pub fn load_catalog<T: DeserializeOwned>(path: &Path) -> Result<Catalog<T>> {
    let format =
        PackFormat::from_path(path).ok_or_else(|| ContentError::UnsupportedFormat(path.into()))?;
    let text = fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.into(),
        source,
    })?;
    let catalog = match format {
        PackFormat::Json => parse_json(&text)?,
        PackFormat::Toml => parse_toml(&text)?,
    };
    tracing::info!(
        path = %path.display(),
        categories = catalog.map().len(),
        items = catalog.map().item_count(),
        "loaded content pack"
    );
    Ok(catalog)
}
