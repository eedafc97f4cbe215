//! Typed view of an exported OCSF schema document.
//!
//! Only the properties used for enrichment are modeled; everything else in
//! the export is ignored while deserializing.

mod attribute_def;
mod enum_value;
mod event_class;
mod object_def;
mod schema_document;
mod type_def;

pub use attribute_def::AttributeDef;
pub use enum_value::EnumValue;
pub use event_class::EventClass;
pub use object_def::ObjectDef;
pub use schema_document::SchemaDocument;
pub use type_def::TypeDef;

/// Interpret a raw `observable` annotation as an observable `type_id`.
///
/// Older schema exports are not strict about this property, so a malformed
/// annotation is reported as `Err` with the raw value rather than failing the
/// whole document.
pub(crate) fn observable_type_id(
    raw: Option<&serde_json::Value>,
) -> Result<Option<i64>, &serde_json::Value> {
    match raw {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(value) => value.as_i64().map(Some).ok_or(value),
    }
}

/// Deserializes an explicit `null` as the type's default, the same as a
/// missing property.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + serde::Deserialize<'de>,
{
    use serde::Deserialize;
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
