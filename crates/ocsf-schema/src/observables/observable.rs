use crate::dictionary;
use crate::Event;
use serde_json::Value;

/// A single entry of an event's `observables` array.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Observable {
    pub(crate) name: String,

    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub(crate) type_name: Option<String>,

    pub(crate) type_id: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) value: Option<String>,
}
impl Observable {
    pub fn new(
        name: impl Into<String>,
        type_id: impl Into<i64>,
        type_name: Option<String>,
        value: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            type_name,
            type_id: type_id.into(),
            value,
        }
    }

    /// The dotted path of the attribute this observable was found at.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The caption of the observable type. Only set when the observable was
    /// generated with enum siblings enabled.
    pub fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }

    pub fn type_id(&self) -> i64 {
        self.type_id
    }

    /// The text value of the attribute. Observables of objects have no value.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// This observable as an event object, ready to be put in an event's
    /// `observables` array.
    pub fn to_event(&self) -> Event {
        let mut map = Event::with_capacity(4);
        map.insert(dictionary::NAME.to_string(), Value::String(self.name.clone()));
        if let Some(type_name) = &self.type_name {
            map.insert(dictionary::TYPE.to_string(), Value::String(type_name.clone()));
        }
        map.insert(dictionary::TYPE_ID.to_string(), Value::from(self.type_id));
        if let Some(value) = &self.value {
            map.insert(dictionary::VALUE.to_string(), Value::String(value.clone()));
        }
        map
    }
}
