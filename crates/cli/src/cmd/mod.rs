use std::path::{Path, PathBuf};

use mdpubs_core::files::{FileAccess, LocalFiles};

pub mod doctor;
pub mod error_message;
pub mod fields;
pub mod inspect;
pub mod sanitize;
pub mod set_id;
pub mod status;

/// Expand `~` and variables in a note argument and make it absolute.
pub(crate) fn resolve_note_path(arg: &Path) -> PathBuf {
    let expanded = match LocalFiles.expand_path(&arg.to_string_lossy()) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    std::path::absolute(&expanded).unwrap_or(expanded)
}
