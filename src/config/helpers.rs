use std::path::{Path, PathBuf};

use crate::error::{AdfError, AdfResult};
use crate::lexer::{Lexer, TokenKind};
use crate::path::split_path;

/// Expands a leading `~/` to the home directory. Other paths pass through unchanged.
pub(super) fn resolve_path(raw_path: &Path) -> AdfResult<PathBuf> {
    let Some(rest) = raw_path.to_str().and_then(|s| s.strip_prefix("~/")) else {
        return Ok(raw_path.to_path_buf());
    };

    let home = dirs::home_dir().ok_or_else(|| AdfError::FileError {
        message: "Could not determine home directory for ~ expansion".into(),
        path: raw_path.to_string_lossy().to_string(),
        hint: Some("Set HOME or use an absolute path".into()),
        code: Some(300),
    })?;
    Ok(home.join(rest))
}

/// Re-lexes `raw_content`, tracking the current absolute section, and returns
/// the line that defines `path` in the absolute tree.
///
/// Repeated sections override earlier ones, so the last definition wins.
/// Lines under relative headers never match.
pub(super) fn find_source_line(path: &str, raw_content: &str) -> Option<(usize, String)> {
    let target = split_path(path);
    if target.is_empty() {
        return None;
    }

    // `None` while inside a relative section.
    let mut section: Option<Vec<String>> = Some(Vec::new());
    let mut found = None;
    for token in Lexer::new().tokenize(raw_content) {
        match token.kind {
            TokenKind::AbsoluteHeader => {
                section = Some(split_path(token.path.as_deref().unwrap_or_default()));
            }
            TokenKind::RelativeHeader => section = None,
            TokenKind::KeyValue | TokenKind::MultilineStart => {
                let Some(prefix) = &section else { continue };
                let mut full = prefix.clone();
                full.extend(split_path(token.key.as_deref().unwrap_or_default()));
                if full == target {
                    found = Some((token.line_number, token.raw_line.trim().to_string()));
                }
            }
            _ => {}
        }
    }
    found
}
