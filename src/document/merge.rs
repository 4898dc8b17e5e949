use crate::ast::{Object, Value};

/// Deep merge producing a new value; neither input is modified.
///
/// Object vs object merges key by key, recursing where both sides hold an
/// object. Anything else is replaced by the overlay; arrays are never
/// concatenated.
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    match (base, overlay) {
        (Value::Object(b), Value::Object(o)) => Value::Object(deep_merge_objects(b, o)),
        _ => overlay.clone(),
    }
}

pub fn deep_merge_objects(base: &Object, overlay: &Object) -> Object {
    let mut result = base.clone();
    for (key, overlay_val) in overlay {
        let merged = match result.get(key) {
            Some(base_val) => deep_merge(base_val, overlay_val),
            None => overlay_val.clone(),
        };
        result.insert(key.clone(), merged);
    }
    result
}

pub(super) fn lookup<'a>(root: &'a Object, segments: &[String]) -> Option<&'a Value> {
    let (first, rest) = segments.split_first()?;
    let mut current = root.get(first)?;
    for segment in rest {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}

/// Writes `value` at `segments`, creating intermediate objects and replacing
/// any non-object standing in the way. `segments` must not be empty.
pub(crate) fn insert_at(root: &mut Object, segments: &[String], value: Value) {
    let Some((last, parents)) = segments.split_last() else {
        return;
    };

    let mut current = root;
    for segment in parents {
        let entry = current
            .entry(segment.clone())
            .or_insert_with(Value::empty_object);
        if !entry.is_object() {
            *entry = Value::empty_object();
        }
        let Value::Object(next) = entry else {
            unreachable!("entry was just made an object");
        };
        current = next;
    }
    current.insert(last.clone(), value);
}

/// Merge-or-overwrite at a path: when both the existing node and `value` are
/// objects they are deep-merged, otherwise `value` replaces the node.
pub(super) fn merge_at(root: &mut Object, segments: &[String], value: Value) {
    let merged = match lookup(root, segments) {
        Some(existing) if existing.is_object() && value.is_object() => deep_merge(existing, &value),
        _ => value,
    };
    insert_at(root, segments, merged);
}
