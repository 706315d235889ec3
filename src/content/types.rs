//! Typed content records shown as cards.
//!
//! Records are deserialized once at startup and never mutated afterwards.
//! Optional fields are modelled with `Option`/empty `Vec` and serde defaults so
//! hand-authored content may omit them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque grouping key for content items (e.g. `ARRAY`, `object`, `BASIC`).
///
/// Categories are fixed at authoring time and only ever compared and
/// displayed; their label comes from the owning [`crate::content::Catalog`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    /// Create a category from its raw key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Raw key as authored.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Anything the filter engine can match against a search query.
pub trait Named {
    /// Display name used for case-insensitive substring matching.
    fn name(&self) -> &str;
}

/// Single named parameter of a method signature.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter as written in the syntax line (e.g. `...items`).
    pub name: String,
    /// Short explanation of the parameter.
    pub description: String,
}

/// API method entry (e.g. `Array.prototype.push`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Method {
    /// Card title, e.g. `push()`.
    pub name: String,
    /// Call syntax, e.g. `arr.push(...items)`.
    pub syntax: String,
    /// Prose description; rendered through the prose highlighter.
    pub description: String,
    /// Code example; rendered through the code classifier.
    #[serde(default)]
    pub example: String,
    /// Documented parameters; empty when the method takes none.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
    /// Link to the language specification section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specification: Option<String>,
    /// Errors the method may throw, as prose.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<String>,
}

impl Named for Method {
    fn name(&self) -> &str {
        &self.name
    }
}

/// One row of a utility type's syntax breakdown table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntaxBreakdownItem {
    /// Code fragment being explained.
    pub code: String,
    /// Explanation of the fragment.
    pub description: String,
}

/// TypeScript utility type entry (e.g. `Partial<T>`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtilityType {
    /// Card title, e.g. `Partial<T>`.
    pub name: String,
    /// Prose description.
    pub description: String,
    /// Type-level definition.
    pub signature: String,
    /// Code example.
    #[serde(default)]
    pub example: String,
    /// Explanations of the signature's parts.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub syntax_breakdown: Vec<SyntaxBreakdownItem>,
}

impl Named for UtilityType {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Section of a guide topic.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicSection {
    /// Section heading.
    pub title: String,
    /// Main prose.
    pub content: String,
    /// Supplementary prose shown below the main text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addition: Option<String>,
    /// Code examples for the section.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub examples: Option<String>,
}

/// Guide topic opened as a full page from the guide's table of contents.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    /// Stable slug used as the navigation target.
    pub value: String,
    /// Topic title.
    pub title: String,
    /// Introductory prose.
    pub introduction: String,
    /// Ordered sections.
    #[serde(default)]
    pub sections: Vec<TopicSection>,
}

impl Named for Topic {
    fn name(&self) -> &str {
        &self.title
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Optional method fields default when omitted from JSON.
    ///
    /// Inputs:
    /// - Method JSON with only the mandatory fields.
    ///
    /// Output:
    /// - Empty parameters, no specification, no errors, empty example.
    fn method_optional_fields_default() {
        let json = r#"{"name":"pop()","syntax":"arr.pop()","description":"Removes the last element."}"#;
        let m: Method = serde_json::from_str(json).expect("valid method json");
        assert_eq!(m.name(), "pop()");
        assert!(m.parameters.is_empty());
        assert!(m.specification.is_none());
        assert!(m.errors.is_none());
        assert!(m.example.is_empty());
    }

    #[test]
    /// What: Topics are matched by their title.
    ///
    /// Inputs:
    /// - Topic with distinct value and title.
    ///
    /// Output:
    /// - `Named::name` returns the title.
    fn topic_name_is_title() {
        let t = Topic {
            value: "types".into(),
            title: "Data types".into(),
            introduction: String::new(),
            sections: Vec::new(),
        };
        assert_eq!(t.name(), "Data types");
    }

    #[test]
    /// What: Category serializes as a bare string.
    ///
    /// Inputs:
    /// - `Category::new("WEAK_MAP")`.
    ///
    /// Output:
    /// - JSON `"WEAK_MAP"`, display equals the key.
    fn category_is_transparent() {
        let c = Category::new("WEAK_MAP");
        assert_eq!(
            serde_json::to_string(&c).expect("serialize category"),
            "\"WEAK_MAP\""
        );
        assert_eq!(c.to_string(), "WEAK_MAP");
    }
}
