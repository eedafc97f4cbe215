use crate::model::AttributeDef;
use indexmap::IndexMap;

/// An OCSF event class definition (e.g. `File System Activity`).
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct EventClass {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) associations: Option<IndexMap<String, Vec<String>>>,

    #[serde(default, deserialize_with = "crate::model::null_as_default")]
    pub(crate) attributes: IndexMap<String, AttributeDef>,

    #[serde(default, deserialize_with = "crate::model::null_as_default")]
    pub(crate) caption: String,

    #[serde(default, deserialize_with = "crate::model::null_as_default")]
    pub(crate) name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) observables: Option<IndexMap<String, serde_json::Value>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) uid: Option<i64>,
}
impl EventClass {
    /// Attribute name -> names of the attributes associated with it.
    pub fn associations(&self) -> Option<&IndexMap<String, Vec<String>>> {
        self.associations.as_ref()
    }

    pub fn attributes(&self) -> &IndexMap<String, AttributeDef> {
        &self.attributes
    }

    pub fn caption(&self) -> &str {
        self.caption.as_str()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Class-specific observables: dotted attribute path -> raw observable
    /// `type_id` annotation.
    pub fn path_observables(&self) -> Option<&IndexMap<String, serde_json::Value>> {
        self.observables.as_ref()
    }

    /// The `class_uid` of this class. Classes exported without one are never
    /// indexed by a [`Schema`](crate::Schema).
    pub fn uid(&self) -> Option<i64> {
        self.uid
    }
}
