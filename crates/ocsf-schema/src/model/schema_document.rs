use crate::model::AttributeDef;
use crate::model::EventClass;
use crate::model::ObjectDef;
use crate::model::TypeDef;
use indexmap::IndexMap;

/// The top level of an exported OCSF schema JSON document.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SchemaDocument {
    #[serde(default)]
    pub classes: IndexMap<String, EventClass>,

    /// Absent from schemas exported by older OCSF servers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dictionary_attributes: Option<IndexMap<String, AttributeDef>>,

    #[serde(default)]
    pub objects: IndexMap<String, ObjectDef>,

    #[serde(default)]
    pub types: IndexMap<String, TypeDef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}
