use crate::dictionary;
use crate::model::EnumValue;
use indexmap::IndexMap;

/// The definition of an attribute on an [`EventClass`](crate::model::EventClass)
/// or [`ObjectDef`](crate::model::ObjectDef). Dictionary attributes use the
/// same shape.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct AttributeDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) caption: Option<String>,

    #[serde(default, rename = "enum", skip_serializing_if = "Option::is_none")]
    pub(crate) enum_values: Option<IndexMap<String, EnumValue>>,

    #[serde(default, deserialize_with = "crate::model::null_as_default")]
    pub(crate) is_array: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) object_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) observable: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) requirement: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) sibling: Option<String>,

    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub(crate) type_name: Option<String>,
}
impl AttributeDef {
    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    /// The enumerated values of this attribute, keyed by the string form of
    /// each value.
    pub fn enum_values(&self) -> Option<&IndexMap<String, EnumValue>> {
        self.enum_values.as_ref()
    }

    pub fn is_array(&self) -> bool {
        self.is_array
    }

    /// Whether this attribute is of the `json_t` type, which may hold any
    /// JSON value and so is never traversed.
    pub fn is_json(&self) -> bool {
        self.type_name.as_deref() == Some(dictionary::JSON_TYPE)
    }

    /// The name of the [`ObjectDef`](crate::model::ObjectDef) this attribute
    /// holds (or holds an array of).
    pub fn object_type(&self) -> Option<&str> {
        self.object_type.as_deref()
    }

    /// The raw `observable` annotation, as found in the schema.
    pub fn observable(&self) -> Option<&serde_json::Value> {
        self.observable.as_ref()
    }

    pub fn requirement(&self) -> Option<&str> {
        self.requirement.as_deref()
    }

    /// The explicitly named sibling of an enum attribute, if any.
    pub fn sibling(&self) -> Option<&str> {
        self.sibling.as_deref()
    }

    /// The name of this attribute's [`TypeDef`](crate::model::TypeDef).
    pub fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }
}
