//! Frontmatter parsing and in-place modification.
//!
//! This module provides functionality to:
//! - Split a markdown document at its `---` delimited frontmatter block
//! - Parse the block into a flat typed field map
//! - Extract the publication id, privacy flag and tags
//! - Set or add the publication id without re-serializing the block

pub mod modifier;
pub mod parser;
pub mod types;

pub use modifier::{add_publication_id, set_publication_id};
pub use parser::{extract_publication_id, parse_generic, split_frontmatter};
pub use types::{
    ExtraFields, Frontmatter, FrontmatterSplit, ID_KEY, PRIVATE_KEY, ParsedDocument,
    PublicationFields, TAG_KEYS,
};
