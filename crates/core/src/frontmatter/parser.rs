//! Frontmatter parsing from markdown documents.
//!
//! The block dialect is line oriented: one `key: value` pair per line, `#`
//! comments, and tag lists written either inline or as `- item` lines. It is
//! read with explicit rules instead of a YAML engine so that malformed or
//! partial blocks degrade to "absent" instead of failing.

use super::types::{
    ExtraFields, Frontmatter, FrontmatterSplit, ID_KEY, PRIVATE_KEY, ParsedDocument,
    PublicationFields, TAG_KEYS,
};
use serde_yaml::{Number, Value};

pub(crate) const OPENING: &str = "---\n";
pub(crate) const CLOSING: &str = "\n---\n";

/// Split a document into its frontmatter block and body.
///
/// Frontmatter must open with `---\n` at byte 0 and close with a `\n---\n`
/// found at or after byte 4:
/// ```markdown
/// ---
/// key: value
/// ---
/// # Document content
/// ```
/// An unterminated block is reported as no block at all.
pub fn split_frontmatter(content: &str) -> FrontmatterSplit<'_> {
    let absent = FrontmatterSplit { block: None, body: content };

    if !content.starts_with(OPENING) {
        return absent;
    }

    let start = OPENING.len();
    match content[start..].find(CLOSING) {
        Some(pos) => {
            let end = start + pos;
            FrontmatterSplit {
                block: Some(&content[start..end]),
                body: &content[end + CLOSING.len()..],
            }
        }
        None => absent,
    }
}

/// Best-effort flat parse of the frontmatter block.
///
/// Every `key: value` line becomes a field; later keys overwrite earlier ones.
/// Documents without a terminated block yield no fields and the original
/// content as body.
pub fn parse_generic(content: &str) -> ParsedDocument {
    let split = split_frontmatter(content);
    let Some(block) = split.block else {
        return ParsedDocument { frontmatter: Frontmatter::default(), body: content.to_string() };
    };

    let mut frontmatter = Frontmatter::default();
    for line in block.split('\n') {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if let Some((key, raw)) = split_key_value(trimmed) {
            frontmatter.fields.insert(key.to_string(), coerce_value(raw));
        }
    }

    ParsedDocument { frontmatter, body: split.body.to_string() }
}

/// Where the line walk of [`extract_publication_id`] currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Each line is read as a potential `key: value` pair.
    Keys,
    /// `- item` lines following an empty `tags:` key are collected.
    Tags,
}

/// Extract the publication id and the publish-relevant extra fields.
pub fn extract_publication_id(content: &str) -> PublicationFields<'_> {
    let split = split_frontmatter(content);
    let Some(block) = split.block else {
        return PublicationFields::absent(content);
    };

    let mut id = None;
    let mut has_id_field = false;
    let mut extra = ExtraFields::default();
    let mut state = ScanState::Keys;

    for line in block.split('\n') {
        let trimmed = line.trim();
        if trimmed.starts_with('#') {
            continue;
        }

        if state == ScanState::Tags {
            if let Some(item) = trimmed.strip_prefix('-') {
                let tag = unquote(item.trim());
                if !tag.is_empty() {
                    extra.tags.push(tag.to_string());
                }
                continue;
            }
            state = ScanState::Keys;
        }

        let Some((key, value)) = split_key_value(trimmed) else {
            continue;
        };
        let value = unquote(value);

        if key == ID_KEY {
            // The first id line is the one `set_publication_id` rewrites.
            if has_id_field {
                continue;
            }
            has_id_field = true;
            id = value.parse::<u64>().ok();
        } else if key == PRIVATE_KEY {
            extra.is_private = parse_bool(value).or(extra.is_private);
        } else if TAG_KEYS.contains(&key) {
            if value.is_empty() || value == "[]" {
                state = ScanState::Tags;
            } else {
                extra.tags.extend(split_inline_list(value));
            }
        }
    }

    PublicationFields { id, has_id_field, body: split.body, extra }
}

/// Split a trimmed line on its first colon into an unquoted key and a
/// trimmed (still quoted) value.
fn split_key_value(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once(':')?;
    Some((unquote(key.trim()), value.trim()))
}

/// Remove one pair of matching surrounding quotes.
fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .or_else(|| value.strip_prefix('\'').and_then(|s| s.strip_suffix('\'')))
        .unwrap_or(value)
}

/// Type a raw value: number, boolean, null, or string.
fn coerce_value(raw: &str) -> Value {
    let value = unquote(raw);
    if value.is_empty() || value == "null" {
        return Value::Null;
    }
    if let Some(b) = parse_bool(value) {
        return Value::Bool(b);
    }
    if let Some(n) = parse_number(value) {
        return Value::Number(n);
    }
    Value::String(value.to_string())
}

fn parse_bool(value: &str) -> Option<bool> {
    if value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

fn parse_number(value: &str) -> Option<Number> {
    if let Ok(i) = value.parse::<i64>() {
        return Some(i.into());
    }
    if let Ok(u) = value.parse::<u64>() {
        return Some(u.into());
    }
    if let Some(hex) = value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        return i64::from_str_radix(hex, 16).ok().map(Number::from);
    }

    // f64::from_str also accepts "inf" and "NaN"; those stay strings.
    let looks_decimal = value
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'-' | b'+' | b'e' | b'E'));
    if !looks_decimal {
        return None;
    }
    value.parse::<f64>().ok().filter(|f| f.is_finite()).map(Number::from)
}

/// Split an inline list such as `a, b` or `[a, "b"]` into its items.
fn split_inline_list(value: &str) -> impl Iterator<Item = String> + '_ {
    let inner = value
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .unwrap_or(value);
    inner
        .split(',')
        .map(|piece| unquote(piece.trim()))
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn split_no_frontmatter() {
        let content = "# Hello\n\nSome content";
        let split = split_frontmatter(content);
        assert!(split.block.is_none());
        assert_eq!(split.body, content);
    }

    #[test]
    fn split_simple_frontmatter() {
        let split = split_frontmatter("---\ntitle: Hello\n---\n# Content");
        assert_eq!(split.block, Some("title: Hello"));
        assert_eq!(split.body, "# Content");
    }

    #[test]
    fn split_blank_block() {
        let split = split_frontmatter("---\n\n---\nBody");
        assert_eq!(split.block, Some(""));
        assert_eq!(split.body, "Body");
    }

    #[test]
    fn split_requires_newline_after_closing() {
        let content = "---\ntitle: Test\n---";
        assert!(split_frontmatter(content).block.is_none());
    }

    #[test]
    fn split_requires_newline_after_opening() {
        let content = "--- \ntitle: Test\n---\nBody";
        assert!(split_frontmatter(content).block.is_none());
    }

    #[test]
    fn split_keeps_later_rules_in_body() {
        let split = split_frontmatter("---\na: 1\n---\n\n---\n\nmore");
        assert_eq!(split.block, Some("a: 1"));
        assert_eq!(split.body, "\n---\n\nmore");
    }

    #[test]
    fn generic_without_frontmatter() {
        let doc = parse_generic("plain text");
        assert!(doc.frontmatter.is_empty());
        assert_eq!(doc.body, "plain text");
    }

    #[test]
    fn generic_unterminated_is_absent() {
        let content = "---\ntitle: Test\n\nno closing";
        let doc = parse_generic(content);
        assert!(doc.frontmatter.is_empty());
        assert_eq!(doc.body, content);
    }

    #[test]
    fn generic_skips_comments_blank_and_colonless_lines() {
        let doc = parse_generic("---\n# note: ignored\n\njust words\n- item\ntitle: Kept\n---\nBody");
        assert_eq!(doc.frontmatter.fields.len(), 1);
        assert_eq!(doc.frontmatter.get("title").and_then(Value::as_str), Some("Kept"));
        assert_eq!(doc.body, "Body");
    }

    #[test]
    fn generic_last_duplicate_wins() {
        let doc = parse_generic("---\ntitle: First\ntitle: Second\n---\n");
        assert_eq!(doc.frontmatter.get("title").and_then(Value::as_str), Some("Second"));
    }

    #[test]
    fn generic_splits_on_first_colon_and_unquotes_key() {
        let doc = parse_generic("---\n'url': https://example.com:8080/x\n---\n");
        assert_eq!(
            doc.frontmatter.get("url").and_then(Value::as_str),
            Some("https://example.com:8080/x")
        );
    }

    #[rstest]
    #[case("3", Value::Number(3.into()))]
    #[case("-12", Value::Number((-12).into()))]
    #[case("2.5", Value::Number(2.5.into()))]
    #[case("0x10", Value::Number(16.into()))]
    #[case("\"7\"", Value::Number(7.into()))]
    #[case("TRUE", Value::Bool(true))]
    #[case("False", Value::Bool(false))]
    #[case("null", Value::Null)]
    #[case("", Value::Null)]
    #[case("''", Value::Null)]
    #[case("inf", Value::String("inf".into()))]
    #[case("1.2.3", Value::String("1.2.3".into()))]
    #[case("'quoted text'", Value::String("quoted text".into()))]
    #[case("\"mismatched'", Value::String("\"mismatched'".into()))]
    fn generic_value_coercion(#[case] raw: &str, #[case] expected: Value) {
        let doc = parse_generic(&format!("---\nfield: {raw}\n---\n"));
        assert_eq!(doc.frontmatter.get("field"), Some(&expected));
    }

    #[test]
    fn extract_without_frontmatter() {
        let content = "# Title\n\nBody";
        let fields = extract_publication_id(content);
        assert_eq!(fields, PublicationFields::absent(content));
    }

    #[test]
    fn extract_unterminated_is_absent() {
        let content = "---\nmdpubs: 5\nBody";
        let fields = extract_publication_id(content);
        assert_eq!(fields.id, None);
        assert!(!fields.has_id_field);
        assert_eq!(fields.body, content);
    }

    #[rstest]
    #[case("mdpubs: 42", Some(42), true)]
    #[case("\"mdpubs\": 42", Some(42), true)]
    #[case("'mdpubs': '42'", Some(42), true)]
    #[case("  mdpubs:42  ", Some(42), true)]
    #[case("mdpubs:", None, true)]
    #[case("mdpubs: abc", None, true)]
    #[case("mdpubs: 3.0", None, true)]
    #[case("mdpubs: -4", None, true)]
    #[case("# mdpubs: 42", None, false)]
    #[case("mdpubs-tags: x", None, false)]
    fn extract_id_values(
        #[case] line: &str,
        #[case] id: Option<u64>,
        #[case] has_id_field: bool,
    ) {
        let content = format!("---\ntitle: T\n{line}\n---\nBody");
        let fields = extract_publication_id(&content);
        assert_eq!(fields.id, id);
        assert_eq!(fields.has_id_field, has_id_field);
        assert_eq!(fields.body, "Body");
    }

    #[rstest]
    #[case("TRUE", Some(true))]
    #[case("false", Some(false))]
    #[case("'True'", Some(true))]
    #[case("yes", None)]
    #[case("", None)]
    fn extract_privacy_flag(#[case] raw: &str, #[case] expected: Option<bool>) {
        let content = format!("---\nmdpubs-is-private: {raw}\n---\n");
        assert_eq!(extract_publication_id(&content).extra.is_private, expected);
    }

    #[test]
    fn extract_keeps_privacy_flag_over_unrecognized_value() {
        let content = "---\nmdpubs-is-private: true\nmdpubs-is-private: maybe\n---\n";
        assert_eq!(extract_publication_id(content).extra.is_private, Some(true));
    }

    #[test]
    fn extract_reads_first_id_line() {
        let fields = extract_publication_id("---\nmdpubs: 1\nmdpubs: 2\n---\n");
        assert_eq!(fields.id, Some(1));

        let fields = extract_publication_id("---\nmdpubs:\nmdpubs: 2\n---\n");
        assert_eq!(fields.id, None);
        assert!(fields.has_id_field);
    }

    #[rstest]
    #[case("tags: a, b, c", &["a", "b", "c"])]
    #[case("tags: [a, b]", &["a", "b"])]
    #[case("tags: [\"a b\", 'c']", &["a b", "c"])]
    #[case("tags: a,, ,b", &["a", "b"])]
    #[case("mdpubs-tags: solo", &["solo"])]
    #[case("tags: []", &[])]
    fn extract_inline_tags(#[case] line: &str, #[case] expected: &[&str]) {
        let content = format!("---\n{line}\n---\n");
        assert_eq!(extract_publication_id(&content).extra.tags, expected);
    }

    #[test]
    fn extract_block_tags() {
        let content = "---\ntags:\n- alpha\n- \"beta\"\n---\nBody";
        let fields = extract_publication_id(content);
        assert_eq!(fields.extra.tags, vec!["alpha", "beta"]);
    }

    #[test]
    fn extract_block_tags_after_empty_brackets() {
        let content = "---\ntags: []\n  - one\n  - 'two'\n---\n";
        assert_eq!(extract_publication_id(content).extra.tags, vec!["one", "two"]);
    }

    #[test]
    fn extract_block_tags_tolerate_comments() {
        let content = "---\ntags:\n- one\n# disabled\n- two\n---\n";
        assert_eq!(extract_publication_id(content).extra.tags, vec!["one", "two"]);
    }

    #[test]
    fn extract_block_tags_stop_at_next_key() {
        let content = "---\ntags:\n- one\nmdpubs: 9\n- stray\n---\n";
        let fields = extract_publication_id(content);
        assert_eq!(fields.extra.tags, vec!["one"]);
        assert_eq!(fields.id, Some(9));
    }

    #[test]
    fn extract_block_tags_stop_at_blank_line() {
        let content = "---\ntags:\n- one\n\n- two\n---\n";
        assert_eq!(extract_publication_id(content).extra.tags, vec!["one"]);
    }

    #[test]
    fn extract_tags_from_both_keys_accumulate() {
        let content = "---\ntags: a\nmdpubs-tags:\n- b\n---\n";
        assert_eq!(extract_publication_id(content).extra.tags, vec!["a", "b"]);
    }

    #[test]
    fn extract_list_items_outside_tags_are_ignored() {
        let content = "---\naliases:\n- other\nmdpubs: 1\n---\n";
        let fields = extract_publication_id(content);
        assert!(fields.extra.tags.is_empty());
        assert_eq!(fields.id, Some(1));
    }

    #[test]
    fn unquote_only_strips_matching_pairs() {
        assert_eq!(unquote("\"a\""), "a");
        assert_eq!(unquote("'a'"), "a");
        assert_eq!(unquote("\"a'"), "\"a'");
        assert_eq!(unquote("\""), "\"");
        assert_eq!(unquote("plain"), "plain");
    }
}
