use super::*;
use crate::ast::{Object, Value};
use crate::document::insert_at;
use crate::lexer::TokenKind;
use crate::path::split_path;

/// Type inference for a bare scalar: boolean, then integer, then float, else string.
pub(super) fn infer_scalar(parser: &Parser, text: &str) -> Value {
    if !parser.options.infer_types {
        return Value::String(text.to_string());
    }

    match text.to_lowercase().as_str() {
        "true" => return Value::Boolean(true),
        "false" => return Value::Boolean(false),
        _ => {}
    }

    if let Ok(i) = text.parse::<i64>() {
        return Value::Integer(i);
    }
    if let Ok(f) = text.parse::<f64>() {
        return Value::Float(f);
    }
    Value::String(text.to_string())
}

/// Value of a `KeyValue` token. Quotes are stripped by the lexer; the text
/// inside them is inferred like any other scalar.
fn key_value(parser: &Parser, token: &Token) -> Value {
    infer_scalar(parser, token.value.as_deref().unwrap_or_default())
}

/// Joins a multiline block starting at `start` (a `MultilineStart` token).
///
/// Returns the text and the index of the closing token, or of the last token
/// when the block is never closed.
pub(super) fn collect_multiline(tokens: &[Token], start: usize) -> (String, usize) {
    let mut parts: Vec<&str> = Vec::new();

    if let Some(first) = tokens[start].value.as_deref().filter(|v| !v.is_empty()) {
        parts.push(first);
    }

    let mut end = tokens.len().saturating_sub(1);
    for (i, token) in tokens.iter().enumerate().skip(start + 1) {
        match token.kind {
            TokenKind::MultilineContent => parts.push(token.value.as_deref().unwrap_or_default()),
            TokenKind::MultilineEnd => {
                if let Some(last) = token.value.as_deref().filter(|v| !v.is_empty()) {
                    parts.push(last);
                }
                end = i;
                break;
            }
            _ => {}
        }
    }

    (parts.join("\n"), end)
}

/// Inserts under a possibly dotted key: `host.primary = x` nests `host: {primary: x}`.
fn set_nested(object: &mut Object, key: &str, item: Value) {
    let segments = split_path(key);
    if segments.is_empty() {
        tracing::debug!("skipping key/value line with an empty key");
        return;
    }
    insert_at(object, &segments, item);
}

/// Walks key/value and multiline tokens, handing each finished pair to `sink`.
/// Blank lines are reported as `None`.
fn walk_pairs<F>(parser: &Parser, tokens: &[Token], mut sink: F)
where
    F: FnMut(Option<(&str, Value)>),
{
    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        match token.kind {
            TokenKind::Blank => sink(None),
            TokenKind::KeyValue => {
                sink(Some((token.key.as_deref().unwrap_or_default(), key_value(parser, token))));
            }
            TokenKind::MultilineStart => {
                let (text, end) = collect_multiline(tokens, i);
                sink(Some((token.key.as_deref().unwrap_or_default(), Value::String(text))));
                i = end;
            }
            _ => {}
        }
        i += 1;
    }
}

pub(super) fn build_object(parser: &Parser, tokens: &[Token]) -> Object {
    let mut object = Object::new();
    walk_pairs(parser, tokens, |pair| {
        if let Some((key, item)) = pair {
            set_nested(&mut object, key, item);
        }
    });
    object
}

/// One object per blank-line separated group, in source order.
pub(super) fn build_object_array(parser: &Parser, tokens: &[Token]) -> Vec<Value> {
    let mut objects = Vec::new();
    let mut current = Object::new();
    walk_pairs(parser, tokens, |pair| match pair {
        Some((key, item)) => set_nested(&mut current, key, item),
        None => {
            if !current.is_empty() {
                objects.push(Value::Object(std::mem::take(&mut current)));
            }
        }
    });
    if !current.is_empty() {
        objects.push(Value::Object(current));
    }
    objects
}
