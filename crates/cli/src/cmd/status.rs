//! Status command implementation.

use std::path::Path;

use mdpubs_core::config::ConfigLoader;
use mdpubs_core::files::LocalFiles;
use mdpubs_core::note::{NoteInfo, scan_watched};

use super::inspect::describe_id;
use crate::StatusArgs;

pub fn run(config: Option<&Path>, profile: Option<&str>, args: &StatusArgs) {
    let rc = match ConfigLoader::load(config, profile) {
        Ok(rc) => rc,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            std::process::exit(1);
        }
    };

    if rc.watched_folders.is_empty() {
        eprintln!("No watched folders configured in profile '{}'.", rc.active_profile);
        std::process::exit(1);
    }

    let notes = scan_watched(&LocalFiles, &rc.watched_folders);

    if args.json {
        match serde_json::to_string_pretty(&notes) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error serializing notes: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    print_notes_table(&notes);
}

/// Print notes as a table.
fn print_notes_table(notes: &[NoteInfo]) {
    if notes.is_empty() {
        println!("(no notes found)");
        return;
    }

    let ids: Vec<String> = notes.iter().map(describe_id).collect();
    let id_width = ids.iter().map(String::len).max().unwrap_or(2).max(2);

    println!("{:<id_width$}  {:<7}  PATH", "ID", "PRIVATE");
    for (note, id) in notes.iter().zip(&ids) {
        let private = match note.is_private {
            Some(true) => "yes",
            Some(false) => "no",
            None => "-",
        };
        println!("{id:<id_width$}  {private:<7}  {}", note.path.display());
    }

    let published = notes.iter().filter(|n| n.is_published()).count();
    println!();
    println!("{} notes, {} published", notes.len(), published);
}
