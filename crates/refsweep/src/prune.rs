use std::collections::BTreeSet;

use serde_json::{Map, Value};

use crate::ident::Identifier;

/// Python-style truthiness over JSON values: empty containers, `0`, `false`,
/// `null` and the empty string are falsy, everything else is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Rewrite `tree`, removing every object that holds one of `for_values`
/// under one of `on_keys`.
///
/// Returns `None` when `tree` itself is such an object (the caller omits
/// it). Subtrees whose dot-joined path matches an entry in `ignore_paths`
/// are returned unchanged without further inspection. Falsy entries and
/// elements are kept verbatim: an empty container or a zero/false/null/empty
/// scalar is treated as intentional data, not as a removable reference
/// holder. Entries and elements whose pruned result becomes empty are
/// dropped, so surviving objects are only empty if they were empty in the
/// input.
pub fn prune(
    tree: &Value,
    on_keys: &[String],
    for_values: &BTreeSet<Identifier>,
    ignore_paths: &BTreeSet<String>,
) -> Option<Value> {
    let mut path = Vec::new();
    prune_at(tree, on_keys, for_values, ignore_paths, &mut path)
}

fn prune_at(
    node: &Value,
    on_keys: &[String],
    for_values: &BTreeSet<Identifier>,
    ignore_paths: &BTreeSet<String>,
    path: &mut Vec<String>,
) -> Option<Value> {
    if !path.is_empty() && ignore_paths.contains(&path.join(".")) {
        // Hard stop: the subtree under an ignored path is preserved verbatim.
        return Some(node.clone());
    }
    match node {
        Value::Object(map) => prune_object(map, on_keys, for_values, ignore_paths, path),
        Value::Array(items) => prune_array(items, on_keys, for_values, ignore_paths, path),
        scalar => Some(scalar.clone()),
    }
}

fn prune_object(
    map: &Map<String, Value>,
    on_keys: &[String],
    for_values: &BTreeSet<Identifier>,
    ignore_paths: &BTreeSet<String>,
    path: &mut Vec<String>,
) -> Option<Value> {
    let mut pruned = Map::new();
    for (key, value) in map {
        if on_keys.iter().any(|k| k == key) && is_candidate_match(value, for_values) {
            // The enclosing object is the orphaned item: discard it whole.
            return None;
        }
        if is_truthy(value) {
            path.push(key.clone());
            let child = prune_at(value, on_keys, for_values, ignore_paths, path);
            path.pop();
            if let Some(child) = child {
                if is_truthy(&child) {
                    pruned.insert(key.clone(), child);
                }
            }
        } else {
            pruned.insert(key.clone(), value.clone());
        }
    }
    Some(Value::Object(pruned))
}

fn prune_array(
    items: &[Value],
    on_keys: &[String],
    for_values: &BTreeSet<Identifier>,
    ignore_paths: &BTreeSet<String>,
    path: &mut Vec<String>,
) -> Option<Value> {
    let mut pruned = Vec::with_capacity(items.len());
    // Array elements inherit their parent's path; indices are not segments.
    for element in items {
        if is_truthy(element) {
            if let Some(element) = prune_at(element, on_keys, for_values, ignore_paths, path) {
                if is_truthy(&element) {
                    pruned.push(element);
                }
            }
        } else {
            pruned.push(element.clone());
        }
    }
    Some(Value::Array(pruned))
}

fn is_candidate_match(value: &Value, for_values: &BTreeSet<Identifier>) -> bool {
    Identifier::from_scalar(value).is_some_and(|id| for_values.contains(&id))
}
