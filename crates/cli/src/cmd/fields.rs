//! Fields command implementation.

use std::collections::BTreeMap;

use mdpubs_core::files::{FileAccess, LocalFiles};
use mdpubs_core::frontmatter::parse_generic;

use super::resolve_note_path;
use crate::FieldsArgs;

pub fn run(args: &FieldsArgs) {
    let content = match LocalFiles.read_to_string(&resolve_note_path(&args.path)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let doc = parse_generic(&content);
    let sorted: BTreeMap<_, _> = doc.frontmatter.fields.iter().collect();

    match serde_json::to_string_pretty(&sorted) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error serializing fields: {e}");
            std::process::exit(1);
        }
    }
}
