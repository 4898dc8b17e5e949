// Author: Dustin Pilgrim
// License: MIT

use crate::ast::{Object, Value};
use crate::document::Document;
use crate::path::{join_segments, quote_segment};

const MULTILINE_DELIMITER: &str = "\"\"\"";

/// Renders a [`Document`] back into ADF text.
///
/// Output is rebuilt from the shape of the tree alone. Constraints, original
/// quoting and section boundaries are not preserved; repeated sections come
/// out as one merged section per path.
#[derive(Debug, Default)]
pub struct Serializer {
    lines: Vec<String>,
}

impl Serializer {
    pub fn new() -> Self {
        Serializer::default()
    }

    pub fn serialize(mut self, doc: &Document) -> String {
        let mut path = Vec::new();
        self.write_tree(doc.root(), &mut path, true);

        if doc.has_relative_sections() {
            if !self.lines.is_empty() {
                self.lines.push(String::new());
            }
            self.write_tree(doc.relative(), &mut path, false);
        }

        tracing::trace!(lines = self.lines.len(), "serialized document");
        self.lines.join("\n")
    }

    fn write_tree(&mut self, object: &Object, path: &mut Vec<String>, absolute: bool) {
        for (key, value) in object {
            path.push(key.clone());
            match value {
                Value::Object(child) if is_simple(child) => {
                    self.write_header(path, absolute);
                    self.write_pairs(child);
                    self.lines.push(String::new());
                }
                Value::Object(child) => self.write_tree(child, path, absolute),
                Value::Array(items) => {
                    self.write_header(path, absolute);
                    self.write_array(items);
                    self.lines.push(String::new());
                }
                scalar => {
                    // Under the parent header so a re-parse lands on the same path.
                    self.write_header(&path[..path.len() - 1], absolute);
                    self.write_pair(key, scalar);
                    self.lines.push(String::new());
                }
            }
            path.pop();
        }
    }

    fn write_header(&mut self, path: &[String], absolute: bool) {
        let joined = join_segments(path);
        let header = match (absolute, joined.is_empty()) {
            (true, true) => "#:".to_string(),
            (true, false) => format!("# {}:", joined),
            (false, _) => format!("{}:", joined),
        };
        self.lines.push(header);
    }

    /// A one-element object array comes out as a plain section and re-parses
    /// as an object: the text has no blank-line separator to mark it.
    fn write_array(&mut self, items: &[Value]) {
        if items.iter().all(|item| !item.is_object()) {
            self.lines.extend(items.iter().map(|item| item.to_string()));
            return;
        }

        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.lines.push(String::new());
            }
            match item {
                Value::Object(entry) => self.write_pairs(entry),
                other => self.lines.push(other.to_string()),
            }
        }
    }

    fn write_pairs(&mut self, object: &Object) {
        for (key, value) in object {
            self.write_pair(key, value);
        }
    }

    fn write_pair(&mut self, key: &str, value: &Value) {
        let key = quote_segment(key);
        match value {
            Value::String(s) if s.contains('\n') => {
                self.lines.push(format!("{} = {}", key, MULTILINE_DELIMITER));
                self.lines.push(s.clone());
                self.lines.push(MULTILINE_DELIMITER.to_string());
            }
            other => self.lines.push(format!("{} = {}", key, format_value(other))),
        }
    }
}

/// An object whose values are all scalars, rendered as one section.
fn is_simple(object: &Object) -> bool {
    object.values().all(|value| !value.is_container())
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) if needs_quoting(s) => format!("\"{}\"", s),
        other => other.to_string(),
    }
}

/// Strings that would otherwise re-parse as something else.
fn needs_quoting(s: &str) -> bool {
    if s.is_empty() {
        return true;
    }
    if s.eq_ignore_ascii_case("true") || s.eq_ignore_ascii_case("false") {
        return true;
    }
    if s.trim().parse::<f64>().is_ok() {
        return true;
    }
    s.contains(['=', '#', ':', '(', ')'])
}

/// Serialize a document with a fresh [`Serializer`].
pub fn serialize(doc: &Document) -> String {
    Serializer::new().serialize(doc)
}

impl Document {
    /// Canonical ADF text for this document. See [`Serializer`].
    pub fn serialize(&self) -> String {
        serialize(self)
    }
}
