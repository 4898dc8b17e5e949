//! Dot-path grammar shared by headers, keys and document lookups.
//!
//! A path is a `.`-separated list of segments. A segment is either plain
//! (`[A-Za-z0-9_]+`) or a double-quoted literal that may hold dots, spaces or
//! any other reserved character verbatim: `servers."eu.west".host`.

use once_cell::sync::Lazy;
use regex::Regex;

static PLAIN_SEGMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_]+$").unwrap());
static QUOTED_SEGMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r#"^"[^"]+"$"#).unwrap());

/// Splits on dots outside quotes. Segments keep their quotes; empty segments are kept.
pub(crate) fn split_raw(path: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in path.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                current.push(ch);
            }
            '.' if !in_quotes => parts.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    parts.push(current);
    parts
}

/// Splits a path into unquoted segments, skipping empty ones.
///
/// An empty path yields no segments and addresses the root.
pub fn split_path(path: &str) -> Vec<String> {
    split_raw(path)
        .into_iter()
        .filter(|seg| !seg.is_empty())
        .map(|seg| unquote(&seg).to_string())
        .collect()
}

pub fn unquote(segment: &str) -> &str {
    if segment.len() >= 2 && segment.starts_with('"') && segment.ends_with('"') {
        &segment[1..segment.len() - 1]
    } else {
        segment
    }
}

pub fn is_plain_segment(segment: &str) -> bool {
    PLAIN_SEGMENT.is_match(segment)
}

pub fn is_quoted_segment(segment: &str) -> bool {
    QUOTED_SEGMENT.is_match(segment)
}

/// True when every segment is plain or quoted. Used to accept header paths.
pub fn is_valid_path(path: &str) -> bool {
    split_raw(path)
        .iter()
        .all(|seg| is_plain_segment(seg) || is_quoted_segment(seg))
}

/// Quotes a segment unless it is plain.
pub fn quote_segment(segment: &str) -> String {
    if is_plain_segment(segment) {
        segment.to_string()
    } else {
        format!("\"{}\"", segment)
    }
}

pub fn join_segments<S: AsRef<str>>(segments: &[S]) -> String {
    segments
        .iter()
        .map(|s| quote_segment(s.as_ref()))
        .collect::<Vec<_>>()
        .join(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_path_plain_and_quoted() {
        assert_eq!(split_path("a.b.c"), vec!["a", "b", "c"]);
        assert_eq!(split_path(r#"servers."eu.west".host"#), vec!["servers", "eu.west", "host"]);
        assert_eq!(split_path(r#""Some Key".sub"#), vec!["Some Key", "sub"]);
        assert!(split_path("").is_empty());
    }

    #[test]
    fn test_split_path_skips_empty_segments() {
        assert_eq!(split_path("a..b."), vec!["a", "b"]);
    }

    #[test]
    fn test_is_valid_path() {
        assert!(is_valid_path("person.address"));
        assert!(is_valid_path(r#"person."home address""#));
        assert!(is_valid_path(r#""a.b".c"#));
        assert!(!is_valid_path("my comment"));
        assert!(!is_valid_path("a..b"));
        assert!(!is_valid_path(r#""""#));
        assert!(!is_valid_path("host-name"));
    }

    #[test]
    fn test_join_segments_quotes_non_plain() {
        let segs = vec!["servers".to_string(), "eu.west".to_string(), "host".to_string()];
        let joined = join_segments(&segs);
        assert_eq!(joined, r#"servers."eu.west".host"#);
        assert_eq!(split_path(&joined), segs);
    }
}
