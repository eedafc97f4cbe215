//! Functions computing the derived attributes of an OCSF event.

use crate::dictionary;
use crate::json_path;
use crate::Event;
use serde_json::Value;

/// Returns the event `type_uid` for the given `class_uid` and `activity_id`:
///
/// ```text
/// type_uid = class_uid * 100 + activity_id
/// ```
///
/// A negative `activity_id` is treated as `Other` (99). Out of range ids wrap
/// around in two's complement rather than failing.
pub fn type_uid(class_uid: i64, activity_id: i64) -> i64 {
    let activity_id =
        if activity_id >= 0 {
            activity_id
        } else {
            dictionary::OTHER_ID
        };
    class_uid.wrapping_mul(100).wrapping_add(activity_id)
}

/// Reads an integer attribute of the event, if present and integral.
pub fn int_attribute(event: &Event, name: &str) -> Option<i64> {
    event.get(name).and_then(Value::as_i64)
}

/// Sets the event's `type_uid` from its `class_uid` and `activity_id` values.
/// Missing (or non-integer) values count as `Unknown` (0).
///
/// Returns the computed `type_uid`.
pub fn add_type_uid(event: &mut Event) -> i64 {
    let class_uid = int_attribute(event, dictionary::CLASS_UID)
        .unwrap_or(dictionary::UNKNOWN_ID);
    let activity_id = int_attribute(event, dictionary::ACTIVITY_ID)
        .unwrap_or(dictionary::UNKNOWN_ID);

    let uid = type_uid(class_uid, activity_id);
    event.insert(dictionary::TYPE_UID.to_string(), Value::from(uid));
    uid
}

/// Generates a random (v4) UUID string.
pub fn new_uuid() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Sets `metadata.uid` to a newly generated UUID, creating the `metadata`
/// object if needed.
pub fn add_uuid(event: &mut Event) {
    let path = format!("{}.{}", dictionary::METADATA, dictionary::UID);
    json_path::put_in(event, path.as_str(), Value::String(new_uuid()));
}
