//! Note workflows built on the frontmatter codec.
//!
//! These are the document-open and publish-result steps: reading a note's
//! publication fields, writing back the id handed out by the service, and
//! surveying the watched folders.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::Serialize;
use thiserror::Error;
use walkdir::WalkDir;

use crate::files::{FileAccess, FileAccessError};
use crate::frontmatter::parser::OPENING;
use crate::frontmatter::{
    add_publication_id, extract_publication_id, set_publication_id, split_frontmatter,
};

#[derive(Debug, Error)]
pub enum NoteError {
    #[error("note is not readable: {0}")]
    NotReadable(PathBuf),

    #[error("frontmatter in {0} is unterminated or uses CRLF line breaks; refusing to modify it")]
    MalformedFrontmatter(PathBuf),

    #[error(transparent)]
    Files(#[from] FileAccessError),
}

/// Publication state of a note on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteInfo {
    pub path: PathBuf,
    pub id: Option<u64>,
    pub has_id_field: bool,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_private: Option<bool>,
    pub modified: DateTime<Local>,
    /// Length in bytes of the text after the frontmatter.
    pub body_len: usize,
}

impl NoteInfo {
    pub fn is_published(&self) -> bool {
        self.id.is_some()
    }
}

/// How [`apply_publication_id`] changed a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdUpdate {
    /// The block already carried exactly this id line.
    Unchanged,
    /// The id line in an existing block was replaced or inserted.
    Set,
    /// A new block was prepended.
    Added,
}

/// Read a note and extract its publication fields.
pub fn open_note<F: FileAccess + ?Sized>(files: &F, path: &Path) -> Result<NoteInfo, NoteError> {
    if !files.is_readable(path) {
        return Err(NoteError::NotReadable(path.to_path_buf()));
    }

    let content = files.read_to_string(path)?;
    let modified = files.modified(path)?;
    let fields = extract_publication_id(&content);

    tracing::debug!(
        path = %path.display(),
        id = ?fields.id,
        has_id_field = fields.has_id_field,
        tags = fields.extra.tags.len(),
        "opened note"
    );

    Ok(NoteInfo {
        path: path.to_path_buf(),
        id: fields.id,
        has_id_field: fields.has_id_field,
        tags: fields.extra.tags,
        is_private: fields.extra.is_private,
        modified,
        body_len: fields.body.len(),
    })
}

/// Write a publication id into document text.
///
/// Returns `None` when the first line is `---` but no block can be read from
/// it: the block is never closed, or the document uses `\r\n` line breaks.
/// Such content is left for the user to fix; [`record_publication`] reports
/// it as [`NoteError::MalformedFrontmatter`].
pub fn apply_publication_id(content: &str, id: u64) -> Option<(String, IdUpdate)> {
    if split_frontmatter(content).has_frontmatter() {
        let updated = set_publication_id(content, id);
        let change = if updated == content { IdUpdate::Unchanged } else { IdUpdate::Set };
        Some((updated, change))
    } else if opens_block(content) {
        None
    } else {
        Some((add_publication_id(content, id), IdUpdate::Added))
    }
}

/// Whether the first line is a `---` delimiter, whatever its line break.
fn opens_block(content: &str) -> bool {
    content.starts_with(OPENING)
        || content.strip_prefix("---").is_some_and(|rest| rest.starts_with("\r\n"))
}

/// Store the id returned by the publishing service in the note on disk.
///
/// The file is only rewritten when its text actually changes.
pub fn record_publication<F: FileAccess + ?Sized>(
    files: &F,
    path: &Path,
    id: u64,
) -> Result<IdUpdate, NoteError> {
    let content = files.read_to_string(path)?;
    let Some((updated, change)) = apply_publication_id(&content, id) else {
        tracing::warn!(path = %path.display(), "unreadable frontmatter, id not recorded");
        return Err(NoteError::MalformedFrontmatter(path.to_path_buf()));
    };

    if change != IdUpdate::Unchanged {
        files.write(path, &updated)?;
    }
    tracing::debug!(path = %path.display(), id, ?change, "recorded publication id");
    Ok(change)
}

/// Collect every markdown note below the watched folders.
///
/// Hidden files and directories are skipped. Folders that do not exist and
/// notes that cannot be read are logged and left out. Results are sorted by
/// path, and a note reachable through two overlapping folders is listed once.
pub fn scan_watched<F: FileAccess + ?Sized>(files: &F, watched: &[PathBuf]) -> Vec<NoteInfo> {
    let mut notes = BTreeMap::new();

    for folder in watched {
        if !folder.is_dir() {
            tracing::warn!("watched folder does not exist: {}", folder.display());
            continue;
        }

        let walker = WalkDir::new(folder)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !e.file_name().to_string_lossy().starts_with('.'));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("failed to walk {}: {}", folder.display(), e);
                    continue;
                }
            };

            let path = entry.path();
            if !entry.file_type().is_file() || !is_markdown_file(path) {
                continue;
            }
            if notes.contains_key(path) {
                continue;
            }

            match open_note(files, path) {
                Ok(info) => {
                    notes.insert(path.to_path_buf(), info);
                }
                Err(e) => tracing::warn!("skipping {}: {}", path.display(), e),
            }
        }
    }

    notes.into_values().collect()
}

fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("md") || ext.eq_ignore_ascii_case("markdown"))
}
