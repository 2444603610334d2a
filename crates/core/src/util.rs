//! Small helpers shared by the note workflows and the CLI.

use std::path::{Component, Path, PathBuf};

use serde_json::Value;

const UNTITLED: &str = "untitled";

/// Turn a note title into something safe to use as a file name.
///
/// Path separators, characters reserved on common filesystems and control
/// characters become `-`, whitespace runs collapse to one space, and leading
/// or trailing dots and spaces are dropped.
///
/// # Examples
/// ```
/// use mdpubs_core::util::sanitize_filename;
///
/// assert_eq!(sanitize_filename("Notes: 2024/05"), "Notes- 2024-05");
/// assert_eq!(sanitize_filename("  many   spaces  "), "many spaces");
/// assert_eq!(sanitize_filename("..."), "untitled");
/// ```
pub fn sanitize_filename(name: &str) -> String {
    let replaced: String = name
        .chars()
        .map(|c| {
            if c.is_control() || matches!(c, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|')
            {
                '-'
            } else {
                c
            }
        })
        .collect();

    let collapsed = replaced.split_whitespace().collect::<Vec<_>>().join(" ");
    let trimmed = collapsed.trim_matches(|c: char| c == '.' || c.is_whitespace());

    if trimmed.is_empty() { UNTITLED.to_string() } else { trimmed.to_string() }
}

/// Whether `path` lies inside any of the watched folders.
///
/// Matching is per path component, so `/notes/public-drafts` is not inside
/// `/notes/public`. `.` and `..` are resolved lexically on both sides first.
/// An empty watch list matches nothing.
pub fn is_in_watched_folder(path: &Path, watched: &[PathBuf]) -> bool {
    let path = normalize_lexically(path);
    watched.iter().any(|folder| path.starts_with(normalize_lexically(folder)))
}

/// Resolve `.` and `..` components without touching the filesystem.
///
/// `..` at the root stays at the root.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }
    out
}

/// Pull a human readable message out of an error response body.
///
/// JSON bodies are searched for `error` (a string or an object with a
/// `message`), then `message`, `detail` and the first entry of `errors`.
/// Anything else falls back to the trimmed body text.
pub fn extract_error_message(payload: &str) -> String {
    let trimmed = payload.trim();
    if trimmed.is_empty() {
        return "unknown error".to_string();
    }

    match serde_json::from_str::<Value>(trimmed) {
        Ok(json) => message_from_json(&json).unwrap_or_else(|| trimmed.to_string()),
        Err(_) => trimmed.to_string(),
    }
}

fn message_from_json(json: &Value) -> Option<String> {
    if let Some(message) = json.as_str() {
        return non_empty(message);
    }

    let object = json.as_object()?;
    if let Some(message) = object.get("error").and_then(message_field) {
        return Some(message);
    }
    for key in ["message", "detail"] {
        if let Some(message) = object.get(key).and_then(Value::as_str).and_then(non_empty) {
            return Some(message);
        }
    }
    object
        .get("errors")
        .and_then(Value::as_array)
        .and_then(|errors| errors.first())
        .and_then(message_field)
}

/// A string value, or the `message` string of an object value.
fn message_field(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => non_empty(s),
        Value::Object(map) => map.get("message").and_then(Value::as_str).and_then(non_empty),
        _ => None,
    }
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}
