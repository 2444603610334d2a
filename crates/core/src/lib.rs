//! Core library for mdpubs.
//!
//! The heart of the crate is [`frontmatter`], a line-oriented reader and
//! surgical writer for the small frontmatter dialect used by published notes.
//! The remaining modules are the glue around it: configuration, file access,
//! notifications and the note workflows.

#![deny(clippy::all)]

pub mod config;
pub mod files;
pub mod frontmatter;
pub mod note;
pub mod notify;
pub mod util;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
