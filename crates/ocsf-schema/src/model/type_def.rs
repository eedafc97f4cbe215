/// A scalar type definition (e.g. `ip_t`, `hostname_t`).
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct TypeDef {
    #[serde(default, deserialize_with = "crate::model::null_as_default")]
    pub(crate) caption: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) observable: Option<serde_json::Value>,

    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub(crate) base_type: Option<String>,
}
impl TypeDef {
    /// The underlying primitive type this type is refined from, if any.
    pub fn base_type(&self) -> Option<&str> {
        self.base_type.as_deref()
    }

    pub fn caption(&self) -> &str {
        self.caption.as_str()
    }

    pub fn observable(&self) -> Option<&serde_json::Value> {
        self.observable.as_ref()
    }
}
