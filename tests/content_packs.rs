//! Integration tests for loading external content packs.

use refdeck::content::{Category, ContentError, Method, UtilityType, load_catalog};

#[test]
/// What: A TOML pack loads with labels and optional fields.
///
/// - Input: two categories, one with a label, one method carrying parameters
/// - Output: categories in file order, label resolved, parameters parsed
fn toml_pack_loads() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("pack.toml");
    std::fs::write(
        &path,
        r#"
[[categories]]
key = "STRING"
label = "String methods"

[[categories.items]]
name = "at()"
syntax = "str.at(index)"
description = "Returns the character at index."
example = "'abc'.at(-1) // 'c'"

[[categories.items.parameters]]
name = "index"
description = "Position; negative counts from the end."

[[categories]]
key = "MATH"
items = []
"#,
    )
    .expect("write pack");

    let catalog = load_catalog::<Method>(&path).expect("valid pack");
    let keys: Vec<&str> = catalog.map().keys().map(Category::as_str).collect();
    assert_eq!(keys, vec!["STRING", "MATH"]);
    assert_eq!(catalog.label(&Category::new("STRING")), "String methods");
    let items = catalog
        .map()
        .get(&Category::new("STRING"))
        .expect("string category");
    assert_eq!(items[0].parameters.len(), 1);
    assert!(items[0].errors.is_none());
}

#[test]
/// What: A JSON pack for utility types loads.
///
/// - Input: one category holding `Readonly<T>`
/// - Output: one item with the given signature
fn json_pack_loads_utility_types() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("types.json");
    std::fs::write(
        &path,
        r#"{"categories":[{"key":"MODIFIERS","items":[{"name":"Readonly<T>","description":"All properties readonly.","signature":"type Readonly<T> = { readonly [P in keyof T]: T[P] }","example":"const p: Readonly<Point> = { x: 1 };"}]}]}"#,
    )
    .expect("write pack");
    let catalog = load_catalog::<UtilityType>(&path).expect("valid pack");
    assert_eq!(catalog.map().item_count(), 1);
}

#[test]
/// What: Broken packs are rejected with a typed error.
///
/// - Input: a duplicate category key, malformed JSON, an unknown extension, a missing file
/// - Output: the matching `ContentError` variant for each
fn broken_packs_are_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");

    let dup = dir.path().join("dup.json");
    std::fs::write(
        &dup,
        r#"{"categories":[{"key":"A","items":[]},{"key":"A","items":[]}]}"#,
    )
    .expect("write");
    assert!(matches!(
        load_catalog::<Method>(&dup),
        Err(ContentError::DuplicateCategory(k)) if k == "A"
    ));

    let bad = dir.path().join("bad.json");
    std::fs::write(&bad, "{").expect("write");
    assert!(matches!(
        load_catalog::<Method>(&bad),
        Err(ContentError::Json(_))
    ));

    let yaml = dir.path().join("pack.yaml");
    std::fs::write(&yaml, "categories: []").expect("write");
    assert!(matches!(
        load_catalog::<Method>(&yaml),
        Err(ContentError::UnsupportedFormat(_))
    ));

    assert!(matches!(
        load_catalog::<Method>(&dir.path().join("missing.toml")),
        Err(ContentError::Io { .. })
    ));
}
