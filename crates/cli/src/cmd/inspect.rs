//! Inspect command implementation.

use mdpubs_core::config::ResolvedConfig;
use mdpubs_core::files::LocalFiles;
use mdpubs_core::note::{NoteInfo, open_note};
use mdpubs_core::util::is_in_watched_folder;

use super::resolve_note_path;
use crate::InspectArgs;

pub fn run(rc: &ResolvedConfig, args: &InspectArgs) {
    let path = resolve_note_path(&args.path);
    let info = match open_note(&LocalFiles, &path) {
        Ok(info) => info,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if args.json {
        match serde_json::to_string_pretty(&info) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error serializing note: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    print_info(&info, is_in_watched_folder(&path, &rc.watched_folders));
}

fn print_info(info: &NoteInfo, watched: bool) {
    println!("path: {}", info.path.display());
    println!("id: {}", describe_id(info));
    println!(
        "private: {}",
        info.is_private.map_or_else(|| "(unset)".to_string(), |p| p.to_string())
    );
    if info.tags.is_empty() {
        println!("tags: (none)");
    } else {
        println!("tags: {}", info.tags.join(", "));
    }
    println!("watched: {}", if watched { "yes" } else { "no" });
    println!("modified: {}", info.modified.format("%Y-%m-%d %H:%M"));
}

pub(crate) fn describe_id(info: &NoteInfo) -> String {
    match (info.id, info.has_id_field) {
        (Some(id), _) => id.to_string(),
        (None, true) => "(unset)".to_string(),
        (None, false) => "(unpublished)".to_string(),
    }
}
