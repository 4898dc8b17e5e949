// Author: Dustin Pilgrim
// License: MIT

use crate::ast::{Object, Value};
use crate::path::split_path;

mod merge;

pub use merge::{deep_merge, deep_merge_objects};
pub(crate) use merge::insert_at;

/// A parsed ADF document.
///
/// Holds two independent trees: the absolute tree anchored at the document
/// root, and the relative forest of fragments declared with headers lacking
/// `#`. Every accessor returns an owned copy, so callers can mutate results
/// freely without touching the document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    root: Object,
    relative: Object,
}

impl Document {
    pub fn new() -> Self {
        Document {
            root: Object::new(),
            relative: Object::new(),
        }
    }

    /// Value at a dot path in the absolute tree. An empty path returns the whole tree.
    ///
    /// # Examples
    /// ```ignore
    /// let doc = adf_cfg::parse("# person:\nname = Matthew")?;
    /// assert_eq!(doc.get("person.name"), Some(Value::from("Matthew")));
    /// ```
    pub fn get(&self, path: &str) -> Option<Value> {
        self.get_segments(&split_path(path))
    }

    /// Like [`Document::get`], falling back to `default` when any segment is
    /// missing or a non-object is indexed.
    pub fn get_or(&self, path: &str, default: Value) -> Value {
        self.get(path).unwrap_or(default)
    }

    pub fn contains(&self, path: &str) -> bool {
        let segments = split_path(path);
        segments.is_empty() || merge::lookup(&self.root, &segments).is_some()
    }

    /// Keys of the object at `path`, in order. `None` when the path is missing or not an object.
    pub fn keys(&self, path: &str) -> Option<Vec<String>> {
        let segments = split_path(path);
        let obj = if segments.is_empty() {
            &self.root
        } else {
            merge::lookup(&self.root, &segments)?.as_object()?
        };
        Some(obj.keys().cloned().collect())
    }

    /// Writes `value` at `path`, creating intermediate objects and overwriting
    /// any non-object in the way.
    ///
    /// An empty path replaces the whole absolute tree when `value` is an
    /// object; any other root value is ignored.
    pub fn set(&mut self, path: &str, value: Value) {
        self.set_segments(&split_path(path), value);
    }

    /// Deep-merges another document's absolute tree into this one.
    pub fn merge(&mut self, other: &Document) {
        self.root = deep_merge_objects(&self.root, &other.root);
    }

    /// Deep-merges `value` into the node at `path` when both are objects,
    /// otherwise overwrites it.
    pub fn merge_at_path(&mut self, path: &str, value: Value) {
        self.merge_at_segments(&split_path(path), value);
    }

    /// Same merge-or-overwrite policy as [`Document::merge_at_path`], applied
    /// to the relative forest.
    pub fn add_relative_section(&mut self, path: &str, value: Value) {
        self.add_relative_segments(&split_path(path), value);
    }

    pub fn get_relative(&self, path: &str) -> Option<Value> {
        let segments = split_path(path);
        if segments.is_empty() {
            return Some(Value::Object(self.relative.clone()));
        }
        merge::lookup(&self.relative, &segments).cloned()
    }

    /// Deep copy of the absolute tree.
    pub fn to_structured_copy(&self) -> Value {
        Value::Object(self.root.clone())
    }

    /// Deep copy of the relative forest.
    pub fn relative_sections_copy(&self) -> Value {
        Value::Object(self.relative.clone())
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty() && self.relative.is_empty()
    }

    /// Number of top-level keys in the absolute tree.
    pub fn len(&self) -> usize {
        self.root.len()
    }

    pub fn has_relative_sections(&self) -> bool {
        !self.relative.is_empty()
    }

    pub(crate) fn root(&self) -> &Object {
        &self.root
    }

    pub(crate) fn relative(&self) -> &Object {
        &self.relative
    }

    pub(crate) fn get_segments(&self, segments: &[String]) -> Option<Value> {
        if segments.is_empty() {
            return Some(Value::Object(self.root.clone()));
        }
        merge::lookup(&self.root, segments).cloned()
    }

    pub(crate) fn set_segments(&mut self, segments: &[String], value: Value) {
        if segments.is_empty() {
            match value {
                Value::Object(obj) => self.root = obj,
                other => tracing::debug!(kind = other.type_name(), "ignoring non-object value written to the document root"),
            }
            return;
        }
        merge::insert_at(&mut self.root, segments, value);
    }

    pub(crate) fn merge_at_segments(&mut self, segments: &[String], value: Value) {
        if segments.is_empty() {
            match value {
                Value::Object(obj) => self.root = deep_merge_objects(&self.root, &obj),
                other => tracing::debug!(kind = other.type_name(), "ignoring non-object value merged into the document root"),
            }
            return;
        }
        merge::merge_at(&mut self.root, segments, value);
    }

    pub(crate) fn add_relative_segments(&mut self, segments: &[String], value: Value) {
        if segments.is_empty() {
            match value {
                Value::Object(obj) => self.relative = deep_merge_objects(&self.relative, &obj),
                other => tracing::debug!(kind = other.type_name(), "ignoring relative section without a path"),
            }
            return;
        }
        merge::merge_at(&mut self.relative, segments, value);
    }
}
