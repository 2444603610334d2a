//! Frontmatter types and data structures.

use serde::Serialize;
use serde_yaml::Value;
use std::collections::HashMap;

/// Key holding the publication id.
pub const ID_KEY: &str = "mdpubs";

/// Key holding the privacy flag.
pub const PRIVATE_KEY: &str = "mdpubs-is-private";

/// Keys whose values are collected as tags.
pub const TAG_KEYS: [&str; 2] = ["tags", "mdpubs-tags"];

/// Flat key/value view of a frontmatter block.
///
/// Values are one of `Value::Number`, `Value::Bool`, `Value::Null` or
/// `Value::String`; the line dialect has no nested structures.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Frontmatter {
    /// Fields as key-value pairs.
    #[serde(flatten)]
    pub fields: HashMap<String, Value>,
}

impl Frontmatter {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Result of a generic frontmatter parse.
#[derive(Debug, Clone)]
pub struct ParsedDocument {
    /// Parsed fields. Empty when the document has no (terminated) block.
    pub frontmatter: Frontmatter,
    /// The markdown body (everything after frontmatter).
    pub body: String,
}

/// Raw split of a document at its frontmatter delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontmatterSplit<'a> {
    /// Text between the opening and closing delimiter lines.
    pub block: Option<&'a str>,
    /// Text after the closing delimiter, or the whole document without a block.
    pub body: &'a str,
}

impl FrontmatterSplit<'_> {
    pub fn has_frontmatter(&self) -> bool {
        self.block.is_some()
    }
}

/// Metadata fields the publish workflow cares about besides the id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtraFields {
    /// Tags from `tags` and `mdpubs-tags`, in document order.
    pub tags: Vec<String>,
    /// Value of `mdpubs-is-private`, when it is a recognizable boolean.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_private: Option<bool>,
}

/// Result of extracting the publication fields from a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicationFields<'a> {
    /// Parsed publication id.
    pub id: Option<u64>,
    /// Whether an `mdpubs` key exists, even without a usable value.
    pub has_id_field: bool,
    /// Document body after the frontmatter block.
    pub body: &'a str,
    pub extra: ExtraFields,
}

impl<'a> PublicationFields<'a> {
    pub(crate) fn absent(content: &'a str) -> Self {
        Self { id: None, has_id_field: false, body: content, extra: ExtraFields::default() }
    }
}
