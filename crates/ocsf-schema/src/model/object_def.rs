use crate::model::AttributeDef;
use indexmap::IndexMap;

/// An OCSF object definition (e.g. `device`, `process`).
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ObjectDef {
    #[serde(default, deserialize_with = "crate::model::null_as_default")]
    pub(crate) attributes: IndexMap<String, AttributeDef>,

    #[serde(default, deserialize_with = "crate::model::null_as_default")]
    pub(crate) caption: String,

    #[serde(default, deserialize_with = "crate::model::null_as_default")]
    pub(crate) name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) observable: Option<serde_json::Value>,
}
impl ObjectDef {
    pub fn attributes(&self) -> &IndexMap<String, AttributeDef> {
        &self.attributes
    }

    pub fn caption(&self) -> &str {
        self.caption.as_str()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The raw `observable` annotation. When present, every occurrence of
    /// this object in an event is itself an observable.
    pub fn observable(&self) -> Option<&serde_json::Value> {
        self.observable.as_ref()
    }
}
