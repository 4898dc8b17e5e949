/// Number of consecutive `"` at the start of `s`.
pub(super) fn count_leading_quotes(s: &str) -> usize {
    s.bytes().take_while(|&b| b == b'"').count()
}

/// True when the last `count` characters of `s` are all `"`.
pub(super) fn ends_with_quotes(s: &str, count: usize) -> bool {
    count > 0 && s.len() >= count && s.as_bytes()[s.len() - count..].iter().all(|&b| b == b'"')
}

/// Splits a trailing `(...)` constraint off a value.
///
/// The constraint is the balanced parenthesised group that closes the trimmed
/// text. An empty group is not a constraint and stays part of the value.
pub(super) fn split_constraint(s: &str) -> (String, Option<String>) {
    let trimmed = s.trim();
    if let Some(open) = trailing_group_start(trimmed) {
        let inner = trimmed[open + 1..trimmed.len() - 1].trim();
        if !inner.is_empty() {
            return (trimmed[..open].trim_end().to_string(), Some(inner.to_string()));
        }
    }
    (trimmed.to_string(), None)
}

/// Locates a closing run of `count` quotes at the end of `s`, optionally
/// followed by a `(constraint)`.
///
/// Returns the byte offset where the closing run starts and the constraint.
pub(super) fn find_closing_run(s: &str, count: usize) -> Option<(usize, Option<String>)> {
    if ends_with_quotes(s, count) {
        return Some((s.len() - count, None));
    }

    let tail = s.trim_end();
    let open = trailing_group_start(tail)?;
    let inner = tail[open + 1..tail.len() - 1].trim();
    let head = tail[..open].trim_end();
    if inner.is_empty() || !ends_with_quotes(head, count) {
        return None;
    }
    Some((head.len() - count, Some(inner.to_string())))
}

/// Byte offset of the `(` matching a trailing `)`.
fn trailing_group_start(s: &str) -> Option<usize> {
    if !s.ends_with(')') {
        return None;
    }
    let mut depth = 0usize;
    for (i, b) in s.bytes().enumerate().rev() {
        match b {
            b')' => depth += 1,
            b'(' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}
