//! Frontmatter modification operations.
//!
//! Mutations are textual: a single line is replaced or inserted and every
//! other byte of the document is carried over as-is.

use super::parser::{CLOSING, OPENING, split_frontmatter};
use super::types::ID_KEY;
use regex::Regex;
use std::sync::LazyLock;

/// First `mdpubs:` line of a block, quoted or not, with whatever follows it.
static ID_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^[ \t]*(?:"mdpubs"|'mdpubs'|mdpubs)[ \t]*:.*$"#)
        .expect("publication id pattern is valid")
});

/// Set the publication id inside an existing frontmatter block.
///
/// The first `mdpubs` line, which is also the one
/// [`extract_publication_id`](super::extract_publication_id) reads, is
/// rewritten to `mdpubs: <id>`; without one, that line is inserted before all
/// other block lines. Content without a
/// terminated block is returned unchanged; use [`add_publication_id`] there.
pub fn set_publication_id(content: &str, id: u64) -> String {
    let split = split_frontmatter(content);
    let Some(block) = split.block else {
        return content.to_string();
    };

    let id_line = format!("{ID_KEY}: {id}");
    let block = match ID_LINE.find(block) {
        Some(m) => {
            let mut updated = String::with_capacity(block.len() + id_line.len());
            updated.push_str(&block[..m.start()]);
            updated.push_str(&id_line);
            updated.push_str(&block[m.end()..]);
            updated
        }
        None => format!("{id_line}\n{block}"),
    };

    format!("{OPENING}{block}{CLOSING}{}", split.body)
}

/// Prepend a fresh frontmatter block holding only the publication id.
///
/// Meant for documents known to have no frontmatter; the content itself is
/// not inspected.
pub fn add_publication_id(content: &str, id: u64) -> String {
    format!("{OPENING}{ID_KEY}: {id}{CLOSING}{content}")
}
