//! Helpers for reading and writing nested event attributes using the dotted
//! `parent.child.attribute` path notation.

use crate::Event;
use serde_json::Value;

const SEPARATOR: char = '.';

fn is_nested(path: &str) -> bool {
    path.find(SEPARATOR).is_some_and(|pos| pos > 0)
}

pub(crate) fn join(parent: Option<&str>, name: &str) -> String {
    match parent {
        Some(parent) => format!("{parent}{SEPARATOR}{name}"),
        None => name.to_string(),
    }
}

/// Returns the value at the given dotted path.
///
/// A key that itself contains dots is matched literally before the path is
/// treated as nested.
pub fn get_in<'a>(map: &'a Event, path: &str) -> Option<&'a Value> {
    if let Some(value) = map.get(path) {
        return Some(value);
    }
    if !is_nested(path) {
        return None;
    }

    let mut segments = path.split(SEPARATOR);
    let mut current = map.get(segments.next()?)?;
    for segment in segments {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}

/// Puts a value at the given dotted path, creating intermediate objects as
/// needed. Intermediate values that are not objects are replaced.
pub fn put_in(map: &mut Event, path: &str, value: Value) {
    if !is_nested(path) {
        map.insert(path.to_string(), value);
        return;
    }

    let mut segments: Vec<&str> = path.split(SEPARATOR).collect();
    let last = segments.pop().unwrap_or_default();

    let mut current = map;
    for segment in segments {
        let entry = current
            .entry(segment)
            .or_insert_with(|| Value::Object(Event::new()));
        if !entry.is_object() {
            *entry = Value::Object(Event::new());
        }
        let Value::Object(next) = entry else {
            unreachable!("intermediate value at `{segment}` was just made an object");
        };
        current = next;
    }
    current.insert(last.to_string(), value);
}

/// Whether the last segment of the path already appears earlier in it (e.g.
/// `process.parent_process.parent_process`). Recursive object definitions
/// produce such paths, and traversal stops at them.
pub fn is_path_looped(path: &str) -> bool {
    let mut segments = path.rsplit(SEPARATOR);
    match segments.next() {
        Some(last) => segments.any(|segment| segment == last),
        None => false,
    }
}

/// The text form of a scalar: strings without their JSON quotes, everything
/// else as JSON.
pub fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
