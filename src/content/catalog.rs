//! Ordered category → items mapping and the label resolver that goes with it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::error::ContentError;
use super::types::Category;

/// Items of one category in authored order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryGroup<T> {
    /// Category key.
    pub key: Category,
    /// Items in authored order.
    pub items: Vec<T>,
}

/// Mapping from [`Category`] to its items that keeps insertion order.
///
/// Key order is significant: with no active filters, categories are shown in
/// exactly this order. Lookup is linear, which is fine for the handful of
/// categories a page carries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentMap<T> {
    groups: Vec<CategoryGroup<T>>,
}

impl<T> Default for ContentMap<T> {
    fn default() -> Self {
        Self { groups: Vec::new() }
    }
}

impl<T> ContentMap<T> {
    /// Empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// What: Insert or replace the items of `key`.
    ///
    /// Inputs:
    /// - `key`: Category to set
    /// - `items`: Items in authored order
    ///
    /// Output:
    /// - Previous items when `key` was already present.
    ///
    /// Details:
    /// - A new key is appended at the end; replacing keeps the key's position.
    pub fn insert(&mut self, key: Category, items: Vec<T>) -> Option<Vec<T>> {
        if let Some(group) = self.groups.iter_mut().find(|g| g.key == key) {
            return Some(std::mem::replace(&mut group.items, items));
        }
        self.groups.push(CategoryGroup { key, items });
        None
    }

    /// Items of `key`, if the category exists.
    #[must_use]
    pub fn get(&self, key: &Category) -> Option<&[T]> {
        self.groups
            .iter()
            .find(|g| &g.key == key)
            .map(|g| g.items.as_slice())
    }

    /// Whether `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &Category) -> bool {
        self.groups.iter().any(|g| &g.key == key)
    }

    /// Category keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &Category> {
        self.groups.iter().map(|g| &g.key)
    }

    /// Groups in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CategoryGroup<T>> {
        self.groups.iter()
    }

    /// Number of categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether there are no categories at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of items across all categories.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.groups.iter().map(|g| g.items.len()).sum()
    }
}

impl<T> FromIterator<(Category, Vec<T>)> for ContentMap<T> {
    fn from_iter<I: IntoIterator<Item = (Category, Vec<T>)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, items) in iter {
            map.insert(key, items);
        }
        map
    }
}

/// Content of one page together with its category labels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog<T> {
    map: ContentMap<T>,
    labels: HashMap<Category, String>,
}

impl<T> Default for Catalog<T> {
    fn default() -> Self {
        Self {
            map: ContentMap::new(),
            labels: HashMap::new(),
        }
    }
}

impl<T> Catalog<T> {
    /// Build a catalog from a map and explicit labels.
    #[must_use]
    pub const fn new(map: ContentMap<T>, labels: HashMap<Category, String>) -> Self {
        Self { map, labels }
    }

    /// What: Build a catalog from a parsed document.
    ///
    /// Inputs:
    /// - `doc`: Deserialized catalog document
    ///
    /// Output:
    /// - `Ok(Catalog)` preserving document order, or `ContentError::DuplicateCategory`.
    ///
    /// Details:
    /// - Categories without a label resolve to their raw key.
    pub fn from_document(doc: CatalogDocument<T>) -> Result<Self, ContentError> {
        let mut map = ContentMap::new();
        let mut labels = HashMap::new();
        for cat in doc.categories {
            let key = Category::new(cat.key);
            if map.contains_key(&key) {
                return Err(ContentError::DuplicateCategory(key.to_string()));
            }
            if let Some(label) = cat.label {
                labels.insert(key.clone(), label);
            }
            map.insert(key, cat.items);
        }
        Ok(Self { map, labels })
    }

    /// Underlying content map.
    #[must_use]
    pub const fn map(&self) -> &ContentMap<T> {
        &self.map
    }

    /// Display label for `category`, falling back to the raw key.
    #[must_use]
    pub fn label(&self, category: &Category) -> String {
        self.labels
            .get(category)
            .cloned()
            .unwrap_or_else(|| category.to_string())
    }

    /// Look up a category by its label or key, ignoring case.
    #[must_use]
    pub fn find_category(&self, needle: &str) -> Option<Category> {
        let needle = needle.trim().to_lowercase();
        self.map
            .keys()
            .find(|k| k.as_str().to_lowercase() == needle || self.label(k).to_lowercase() == needle)
            .cloned()
    }
}

/// Serialized form of a catalog (JSON or TOML).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CatalogDocument<T> {
    /// Categories in display order.
    pub categories: Vec<CategoryDocument<T>>,
}

/// Serialized form of one category.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CategoryDocument<T> {
    /// Category key.
    pub key: String,
    /// Human-readable label; defaults to the key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Items in authored order.
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Insert keeps first-insertion order and replaces in place.
    ///
    /// Inputs:
    /// - Keys B, A inserted, then B replaced.
    ///
    /// Output:
    /// - Key order stays B, A; replaced items are returned.
    fn content_map_preserves_insertion_order() {
        let mut map: ContentMap<u32> = ContentMap::new();
        map.insert("B".into(), vec![1]);
        map.insert("A".into(), vec![2, 3]);
        let old = map.insert("B".into(), vec![4]);
        assert_eq!(old, Some(vec![1]));
        let keys: Vec<&str> = map.keys().map(Category::as_str).collect();
        assert_eq!(keys, vec!["B", "A"]);
        assert_eq!(map.get(&"B".into()), Some(&[4][..]));
        assert_eq!(map.item_count(), 3);
    }

    #[test]
    /// What: Documents with repeated keys are rejected.
    ///
    /// Inputs:
    /// - Document with two `ARRAY` categories.
    ///
    /// Output:
    /// - `ContentError::DuplicateCategory("ARRAY")`.
    fn from_document_rejects_duplicates() {
        let doc = CatalogDocument::<u32> {
            categories: vec![
                CategoryDocument {
                    key: "ARRAY".into(),
                    label: None,
                    items: vec![],
                },
                CategoryDocument {
                    key: "ARRAY".into(),
                    label: None,
                    items: vec![1],
                },
            ],
        };
        match Catalog::from_document(doc) {
            Err(ContentError::DuplicateCategory(k)) => assert_eq!(k, "ARRAY"),
            other => panic!("expected duplicate error, got {other:?}"),
        }
    }

    #[test]
    /// What: Labels fall back to the raw key and lookup accepts either form.
    ///
    /// Inputs:
    /// - One labelled and one unlabelled category.
    ///
    /// Output:
    /// - `label` and `find_category` resolve both.
    fn labels_and_lookup() {
        let doc = CatalogDocument::<u32> {
            categories: vec![
                CategoryDocument {
                    key: "WEAK_MAP".into(),
                    label: Some("WeakMap".into()),
                    items: vec![],
                },
                CategoryDocument {
                    key: "UTIL".into(),
                    label: None,
                    items: vec![],
                },
            ],
        };
        let cat = Catalog::from_document(doc).expect("valid document");
        assert_eq!(cat.label(&"WEAK_MAP".into()), "WeakMap");
        assert_eq!(cat.label(&"UTIL".into()), "UTIL");
        assert_eq!(cat.find_category("weakmap"), Some("WEAK_MAP".into()));
        assert_eq!(cat.find_category("util"), Some("UTIL".into()));
        assert_eq!(cat.find_category("nope"), None);
    }
}
