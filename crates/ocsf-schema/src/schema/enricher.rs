use crate::dictionary;
use crate::json_path;
use crate::model::AttributeDef;
use crate::model::EnumValue;
use crate::model::EventClass;
use crate::observables::Observable;
use crate::schema::schema::annotated_type_id;
use crate::schema::EnrichOptions;
use crate::Event;
use crate::Schema;
use indexmap::IndexMap;
use serde_json::Value;

/// Walks one event against its class definition, adding enum siblings and
/// collecting observables along the way.
pub(super) struct Enricher<'schema> {
    add_enum_siblings: bool,
    add_observables: bool,
    class: &'schema EventClass,
    observables: Vec<Observable>,
    schema: &'schema Schema,
}
impl<'schema> Enricher<'schema> {
    pub(super) fn new(
        schema: &'schema Schema,
        class: &'schema EventClass,
        options: EnrichOptions,
    ) -> Self {
        Self {
            add_enum_siblings: options.add_enum_siblings,
            add_observables: options.add_observables,
            class,
            observables: vec![],
            schema,
        }
    }

    pub(super) fn enrich_event(mut self, event: Event) -> Event {
        let class = self.class;
        let mut enriched = self.enrich_fields(None, event, &class.attributes);

        if self.add_observables && !self.observables.is_empty() {
            let observables = self.observables.iter()
                .map(|observable| Value::Object(observable.to_event()))
                .collect();
            enriched.insert(dictionary::OBSERVABLES.to_string(), Value::Array(observables));
        }

        enriched
    }

    /// Enriches an event, or an object embedded in one, whose definition has
    /// the given attributes.
    fn enrich_fields(
        &mut self,
        parent_path: Option<&str>,
        data: Event,
        attributes: &'schema IndexMap<String, AttributeDef>,
    ) -> Event {
        let mut enriched = Event::with_capacity(data.len());

        for (attribute_name, value) in data {
            let value = match attributes.get(attribute_name.as_str()) {
                // json_t may hold anything, including objects and arrays that
                // have no schema definition to follow.
                Some(attribute) if !attribute.is_json() => {
                    let attribute_path = json_path::join(parent_path, &attribute_name);
                    self.enrich_attribute(
                        &attribute_name,
                        &attribute_path,
                        attribute,
                        value,
                        &mut enriched,
                    )
                },
                _ => value,
            };

            enriched.insert(attribute_name, value);
        }

        enriched
    }

    fn enrich_attribute(
        &mut self,
        attribute_name: &str,
        attribute_path: &str,
        attribute: &'schema AttributeDef,
        value: Value,
        enriched: &mut Event,
    ) -> Value {
        if let Some(enum_values) = attribute.enum_values() {
            if self.add_enum_siblings {
                update_enum_sibling(
                    enriched,
                    enum_values,
                    sibling_name(attribute_name, attribute),
                    &value,
                );
            }
            return value;
        }

        match value {
            Value::Object(object) => self.enrich_embedded_object(
                attribute_path,
                attribute.object_type(),
                object,
            ),

            Value::Array(array) if attribute.is_array() => self.enrich_embedded_array(
                attribute_name,
                attribute_path,
                attribute,
                array,
            ),

            Value::Array(array) => {
                log::debug!(
                    "SCHEMA: Attribute {attribute_name:?} is not an array in the schema"
                );
                Value::Array(array)
            },

            value => {
                if self.add_observables
                    && let Some(type_id) = self.observable_type_id(
                        attribute_name,
                        attribute,
                        attribute_path,
                    ) {
                    self.add_value_observable(type_id, attribute_path, &value);
                }
                value
            },
        }
    }

    fn enrich_embedded_object(
        &mut self,
        attribute_path: &str,
        object_type: Option<&str>,
        value: Event,
    ) -> Value {
        let Some(object_type) = object_type else {
            log::debug!(
                "SCHEMA: Attribute {attribute_path:?} is not an object in the schema"
            );
            return Value::Object(value);
        };

        let schema = self.schema;
        let Some(object) = schema.objects.get(object_type) else {
            log::debug!(
                "SCHEMA: Attribute {attribute_path:?} has invalid object type: \
                {object_type:?}"
            );
            return Value::Object(value);
        };

        log::trace!(
            "Embedded object - attribute path: {attribute_path:?}, object type: \
            {object_type:?}"
        );

        if self.add_observables
            && let Some(type_id) = annotated_type_id(object.observable(), object_type) {
            self.add_object_observable(type_id, attribute_path);
        }

        Value::Object(self.enrich_fields(Some(attribute_path), value, &object.attributes))
    }

    fn enrich_embedded_array(
        &mut self,
        attribute_name: &str,
        attribute_path: &str,
        attribute: &'schema AttributeDef,
        array: Vec<Value>,
    ) -> Value {
        if matches!(array.first(), Some(Value::Object(_))) {
            let Some(object_type) = attribute.object_type() else {
                log::debug!(
                    "SCHEMA: Array {attribute_path:?} type is not an object in the schema"
                );
                return Value::Array(array);
            };

            let schema = self.schema;
            let Some(object) = schema.objects.get(object_type) else {
                log::debug!(
                    "SCHEMA: Attribute {attribute_path:?} has invalid object type: \
                    {object_type:?}"
                );
                return Value::Array(array);
            };

            log::trace!(
                "Embedded array - attribute path: {attribute_path:?}, object type: \
                {object_type:?}"
            );

            // Every element shares the array's path.
            return Value::Array(
                array.into_iter()
                    .map(|item| match item {
                        Value::Object(item) => Value::Object(self.enrich_fields(
                            Some(attribute_path),
                            item,
                            &object.attributes,
                        )),
                        other => other,
                    })
                    .collect()
            );
        }

        if self.add_observables
            && let Some(type_id) = self.observable_type_id(
                attribute_name,
                attribute,
                attribute_path,
            ) {
            for value in &array {
                self.add_value_observable(type_id, attribute_path, value);
            }
        }

        Value::Array(array)
    }

    /// Resolves the observable `type_id` of a scalar attribute, looking at (in
    /// order) its type, its dictionary definition, its own annotation, and
    /// the class-specific path observables.
    fn observable_type_id(
        &self,
        attribute_name: &str,
        attribute: &AttributeDef,
        attribute_path: &str,
    ) -> Option<i64> {
        let schema = self.schema;

        match attribute.type_name() {
            Some(type_name) => match schema.types.get(type_name) {
                Some(type_def) => {
                    if let Some(type_id) = annotated_type_id(type_def.observable(), type_name) {
                        log::trace!(
                            "Observable by attribute type {type_name:?} for \
                            {attribute_path:?}: {type_id}"
                        );
                        return Some(type_id);
                    }
                },
                None => log::debug!(
                    "SCHEMA: Attribute {attribute_name:?} has an invalid type: {type_name}"
                ),
            },
            None => log::debug!("SCHEMA: Attribute {attribute_name:?} does not have type"),
        }

        let dictionary_type_id = schema.dictionary_attributes.get(attribute_name)
            .and_then(|dictionary_attribute| annotated_type_id(
                dictionary_attribute.observable(),
                attribute_name,
            ));
        if let Some(type_id) = dictionary_type_id {
            log::trace!(
                "Observable by dictionary attribute {attribute_name:?}: {type_id}"
            );
            return Some(type_id);
        }

        if let Some(type_id) = annotated_type_id(attribute.observable(), attribute_name) {
            log::trace!("Observable by attribute {attribute_path:?}: {type_id}");
            return Some(type_id);
        }

        let path_type_id = self.class.path_observables()
            .and_then(|path_observables| annotated_type_id(
                path_observables.get(attribute_path),
                attribute_path,
            ));
        if let Some(type_id) = path_type_id {
            log::trace!("Class-specific observable for {attribute_path:?}: {type_id}");
        }
        path_type_id
    }

    fn add_object_observable(&mut self, type_id: i64, attribute_path: &str) {
        let observable = self.schema.new_observable(
            type_id,
            attribute_path,
            None,
            self.add_enum_siblings,
        );
        self.observables.push(observable);
    }

    fn add_value_observable(&mut self, type_id: i64, attribute_path: &str, value: &Value) {
        if value.is_null() {
            return;
        }
        let observable = self.schema.new_observable(
            type_id,
            attribute_path,
            Some(json_path::value_to_string(value)),
            self.add_enum_siblings,
        );
        self.observables.push(observable);
    }
}

/// The name of the attribute holding the text of an enum attribute: the
/// schema-declared sibling, or the attribute name up to its first `_id`.
fn sibling_name<'a>(attribute_name: &'a str, attribute: &'a AttributeDef) -> Option<&'a str> {
    if let Some(sibling) = attribute.sibling() {
        return Some(sibling);
    }

    match attribute_name.find(dictionary::ENUM_SUFFIX) {
        Some(pos) if pos > 0 => Some(&attribute_name[..pos]),
        _ => None,
    }
}

/// Sets the enum's sibling, unless the event already has one.
fn update_enum_sibling(
    enriched: &mut Event,
    enum_values: &IndexMap<String, EnumValue>,
    sibling: Option<&str>,
    value: &Value,
) {
    let Some(sibling) = sibling else {
        return;
    };
    if enriched.contains_key(sibling) {
        return;
    }

    let caption = enum_values.get(json_path::value_to_string(value).as_str())
        .and_then(|enum_value| enum_value.caption());
    if let Some(caption) = caption {
        enriched.insert(sibling.to_string(), Value::String(caption.to_string()));
    }
}
