use super::*;
use crate::ast::Value;
use crate::lexer::TokenKind;
use crate::path::split_path;

/// The structure inferred for the lines under one header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionShape {
    /// Only blank lines.
    Empty,
    /// Bare lines, no key/value pairs.
    ScalarArray,
    /// Key/value groups separated by blank lines.
    ObjectArray,
    Object,
}

impl SectionShape {
    pub fn classify(tokens: &[Token]) -> Self {
        let mut content = tokens.iter().filter(|t| t.kind != TokenKind::Blank).peekable();
        if content.peek().is_none() {
            return SectionShape::Empty;
        }
        if !content.any(|t| t.kind.is_key_value()) {
            return SectionShape::ScalarArray;
        }
        if has_blank_line_separators(tokens) {
            SectionShape::ObjectArray
        } else {
            SectionShape::Object
        }
    }
}

/// True when a blank line follows a key/value run and another key/value comes after it.
fn has_blank_line_separators(tokens: &[Token]) -> bool {
    let mut seen_separator = false;
    let mut in_run = false;

    for token in tokens {
        if token.kind == TokenKind::Blank {
            if in_run {
                seen_separator = true;
                in_run = false;
            }
        } else if token.kind.is_key_value() {
            if seen_separator {
                return true;
            }
            in_run = true;
        }
    }
    false
}

struct SectionHeader {
    segments: Vec<String>,
    is_absolute: bool,
}

impl SectionHeader {
    fn root() -> Self {
        SectionHeader {
            segments: Vec::new(),
            is_absolute: true,
        }
    }

    fn from_token(token: &Token) -> Self {
        SectionHeader {
            segments: split_path(token.path.as_deref().unwrap_or_default()),
            is_absolute: token.is_absolute,
        }
    }
}

pub(super) fn parse_sections(parser: &Parser, tokens: &[Token], doc: &mut Document) {
    let mut header = SectionHeader::root();
    let mut start = 0;

    for (i, token) in tokens.iter().enumerate() {
        if token.kind.is_header() {
            if i > start {
                process_section(parser, &tokens[start..i], &header, doc);
            }
            header = SectionHeader::from_token(token);
            start = i + 1;
        }
    }

    if start < tokens.len() {
        process_section(parser, &tokens[start..], &header, doc);
    }
}

fn process_section(parser: &Parser, tokens: &[Token], header: &SectionHeader, doc: &mut Document) {
    let shape = SectionShape::classify(tokens);
    tracing::debug!(
        path = %header.segments.join("."),
        absolute = header.is_absolute,
        ?shape,
        first_line = ?tokens.first().map(|t| t.line_number),
        "processing section"
    );

    match shape {
        SectionShape::Empty => {}
        SectionShape::ScalarArray => {
            let items = tokens
                .iter()
                .filter(|t| t.kind == TokenKind::ScalarValue)
                .map(|t| value::infer_scalar(parser, t.value.as_deref().unwrap_or_default()))
                .collect();
            write_section(doc, header, Value::Array(items));
        }
        SectionShape::ObjectArray => {
            let items = value::build_object_array(parser, tokens);
            write_section(doc, header, Value::Array(items));
        }
        SectionShape::Object => {
            let object = value::build_object(parser, tokens);
            if header.is_absolute {
                // Per-key merge: repeated headers augment earlier sections field by field.
                for (key, item) in object {
                    let mut target = header.segments.clone();
                    target.push(key);
                    doc.merge_at_segments(&target, item);
                }
            } else {
                doc.add_relative_segments(&header.segments, Value::Object(object));
            }
        }
    }
}

fn write_section(doc: &mut Document, header: &SectionHeader, value: Value) {
    if header.is_absolute {
        doc.set_segments(&header.segments, value);
    } else {
        doc.add_relative_segments(&header.segments, value);
    }
}
