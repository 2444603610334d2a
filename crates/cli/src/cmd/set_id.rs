//! Set-id command implementation.

use mdpubs_core::config::ResolvedConfig;
use mdpubs_core::files::LocalFiles;
use mdpubs_core::note::{IdUpdate, record_publication};
use mdpubs_core::notify::{Notifier, TracingNotifier};
use mdpubs_core::util::is_in_watched_folder;

use super::resolve_note_path;
use crate::SetIdArgs;

pub fn run(rc: &ResolvedConfig, args: &SetIdArgs) {
    let notifier = TracingNotifier::from_config(rc);

    let path = resolve_note_path(&args.path);
    if !rc.watched_folders.is_empty() && !is_in_watched_folder(&path, &rc.watched_folders) {
        notifier.warn(&format!("{} is outside the watched folders", path.display()));
    }

    let change = match record_publication(&LocalFiles, &path, args.id) {
        Ok(change) => change,
        Err(e) => {
            notifier.error(&e.to_string());
            println!("FAIL mdpubs set-id");
            std::process::exit(1);
        }
    };

    let frontmatter = match change {
        IdUpdate::Unchanged => "unchanged",
        IdUpdate::Set => "updated",
        IdUpdate::Added => "added",
    };

    println!("OK   mdpubs set-id");
    println!("path: {}", path.display());
    println!("id: {}", args.id);
    println!("frontmatter: {frontmatter}");

    notifier.info(&format!("publication id {} recorded in {}", args.id, path.display()));
}
