use crate::dictionary;
use crate::event_utils;
use crate::file_reader;
use crate::model;
use crate::model::AttributeDef;
use crate::model::EventClass;
use crate::model::ObjectDef;
use crate::model::SchemaDocument;
use crate::model::TypeDef;
use crate::observables;
use crate::observables::Observable;
use crate::schema::enricher::Enricher;
use crate::schema::EnrichOptions;
use crate::schema::SchemaLoadError;
use crate::Associations;
use crate::Event;
use indexmap::IndexMap;
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;
use std::path::PathBuf;
use std::sync::OnceLock;

type Result<T> = std::result::Result<T, SchemaLoadError>;

/// The object whose `type_id` enum names the observable types.
const OBSERVABLE_OBJECT: &str = "observable";

/// An exported OCSF schema, loaded in memory and indexed for enriching
/// events.
///
/// Enrichment adds:
///  * the `type_uid` attribute, computed as `class_uid * 100 + activity_id`;
///  * optionally, the text values (aka siblings) of the enum attributes;
///  * optionally, the `observables` found in the event.
///
/// The whole schema is kept in memory, so load it once and share it: a
/// `Schema` is immutable after loading and can be used from many threads.
#[derive(Debug)]
pub struct Schema {
    // class_uid -> class definition
    pub(super) classes: HashMap<i64, EventClass>,

    // class_uid -> every observable statically reachable from the class.
    // Built on first use since it costs about as much as loading the schema.
    pub(super) class_observables: OnceLock<HashMap<i64, Vec<Observable>>>,

    pub(super) dictionary_attributes: IndexMap<String, AttributeDef>,
    pub(super) loaded: bool,
    pub(super) objects: IndexMap<String, ObjectDef>,

    // observable type_id -> caption
    pub(super) observable_types: HashMap<i64, String>,

    pub(super) options: EnrichOptions,
    pub(super) types: IndexMap<String, TypeDef>,
    pub(super) version: Option<String>,
}
impl Schema {
    /// Loads the schema JSON file at the given path.
    ///
    /// Passing no path, or a path to something that is not a file, yields an
    /// unloaded schema which leaves events untouched. Failing to read or parse
    /// an existing file is an error.
    pub fn load<P: AsRef<Path>>(
        path: Option<P>,
        options: EnrichOptions,
    ) -> Result<Self> {
        let Some(path) = path else {
            log::info!("No schema file");
            return Ok(Self::unloaded(options));
        };
        let path = path.as_ref();

        log::info!(
            "Using schema file: {path:?}, addEnumSiblings: {}, addObservables: {}",
            options.add_enum_siblings,
            options.add_observables,
        );

        if !path.is_file() {
            log::warn!("Schema file not found: {path:?}");
            return Ok(Self::unloaded(options));
        }

        let content = file_reader::read_content(path)
            .map_err(|err| SchemaLoadError::SchemaFileReadError(Box::new(err)))?;

        Self::load_str(Some(path.to_path_buf()), content.as_str(), options)
    }

    pub fn load_file(
        path: impl AsRef<Path>,
        options: EnrichOptions,
    ) -> Result<Self> {
        Self::load(Some(path), options)
    }

    /// Loads a schema from its JSON text. `file_path` is only used to report
    /// errors.
    pub fn load_str(
        file_path: Option<PathBuf>,
        content: &str,
        options: EnrichOptions,
    ) -> Result<Self> {
        let document: SchemaDocument = serde_json::from_str(content)
            .map_err(|err| SchemaLoadError::ParseError {
                file: file_path.unwrap_or_else(|| PathBuf::from("str://0")),
                err: err.to_string(),
            })?;

        Ok(Self::from_document(document, options))
    }

    pub fn from_document(
        document: SchemaDocument,
        options: EnrichOptions,
    ) -> Self {
        let SchemaDocument {
            classes,
            dictionary_attributes,
            objects,
            types,
            version,
        } = document;

        let observable_types =
            index_observable_types(objects.get(OBSERVABLE_OBJECT));

        Self {
            classes: index_classes(classes),
            class_observables: OnceLock::new(),
            dictionary_attributes: dictionary_attributes.unwrap_or_default(),
            loaded: true,
            objects,
            observable_types,
            options,
            types,
            version,
        }
    }

    /// A schema with no definitions. Enriching with it returns events as-is.
    pub fn unloaded(options: EnrichOptions) -> Self {
        Self {
            classes: HashMap::new(),
            class_observables: OnceLock::new(),
            dictionary_attributes: IndexMap::new(),
            loaded: false,
            objects: IndexMap::new(),
            observable_types: HashMap::new(),
            options,
            types: IndexMap::new(),
            version: None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// The default [`EnrichOptions`] used by [`Schema::enrich`].
    pub fn options(&self) -> EnrichOptions {
        self.options
    }

    /// The OCSF version of the loaded schema, when the export states it.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Enriches the event using the schema's default [`EnrichOptions`].
    pub fn enrich(&self, event: Event) -> Event {
        self.enrich_with(event, self.options)
    }

    /// Enriches the event.
    ///
    /// Events are only enriched when their `class_uid` names a class of the
    /// schema; any other event is returned unchanged.
    pub fn enrich_with(&self, mut event: Event, options: EnrichOptions) -> Event {
        if !self.loaded {
            return event;
        }

        let Some(class) = self.event_class(&event) else {
            return event;
        };

        event_utils::add_type_uid(&mut event);

        if !options.traverses_event() {
            return event;
        }

        Enricher::new(self, class, options).enrich_event(event)
    }

    /// Returns the class definition for the given `class_uid`.
    pub fn get_class(&self, class_uid: i64) -> Option<&EventClass> {
        self.classes.get(&class_uid)
    }

    /// All indexed classes, in no particular order.
    pub fn classes(&self) -> impl Iterator<Item = &EventClass> {
        self.classes.values()
    }

    /// Returns the object definition with the given name.
    pub fn get_object(&self, name: &str) -> Option<&ObjectDef> {
        self.objects.get(name)
    }

    pub fn get_type(&self, name: &str) -> Option<&TypeDef> {
        self.types.get(name)
    }

    pub fn get_dictionary_attribute(&self, name: &str) -> Option<&AttributeDef> {
        self.dictionary_attributes.get(name)
    }

    /// Returns the attribute associations of the given class, if it defines
    /// any.
    pub fn get_associations(&self, class_uid: i64) -> Option<Associations<'_>> {
        self.classes.get(&class_uid)
            .and_then(|class| class.associations())
            .filter(|associations| !associations.is_empty())
            .map(Associations::new)
    }

    /// Returns every observable that an event of the given class may carry,
    /// as found by walking the class definition. Array attributes are not
    /// walked.
    pub fn get_observables(&self, class_uid: i64) -> Option<&[Observable]> {
        self.class_observables()
            .get(&class_uid)
            .map(|observables| observables.as_slice())
    }

    /// Like [`Schema::get_observables`], limited to one observable type and
    /// keyed by attribute path.
    pub fn get_observables_of_type(
        &self,
        class_uid: i64,
        type_id: impl Into<i64>,
    ) -> Option<IndexMap<String, Observable>> {
        observables::filter(self.get_observables(class_uid)?, type_id)
    }

    /// The caption of the given observable type, as named by the schema.
    pub fn observable_type_caption(&self, type_id: i64) -> Option<&str> {
        self.observable_types.get(&type_id).map(|caption| caption.as_str())
    }

    pub(super) fn new_observable(
        &self,
        type_id: i64,
        path: &str,
        value: Option<String>,
        with_type_name: bool,
    ) -> Observable {
        let type_name = with_type_name.then(|| {
            self.observable_type_caption(type_id)
                .unwrap_or(dictionary::OTHER)
                .to_string()
        });
        Observable::new(path, type_id, type_name, value)
    }

    fn event_class(&self, event: &Event) -> Option<&EventClass> {
        let class_uid = event.get(dictionary::CLASS_UID);
        let class = class_uid
            .and_then(Value::as_i64)
            .and_then(|uid| self.classes.get(&uid));

        match class {
            Some(class) => log::debug!(
                "Enriching event of class ID {}: {:?}",
                class.uid().unwrap_or_default(),
                class.caption(),
            ),
            None => log::debug!("Event class ID not found: {class_uid:?}"),
        }

        class
    }
}

/// Reads an `observable` annotation, reporting malformed ones.
pub(super) fn annotated_type_id(
    raw: Option<&Value>,
    owner: &str,
) -> Option<i64> {
    match model::observable_type_id(raw) {
        Ok(type_id) => type_id,
        Err(raw) => {
            log::debug!("SCHEMA: {owner} has an invalid \"observable\": {raw}");
            None
        },
    }
}

fn index_classes(classes: IndexMap<String, EventClass>) -> HashMap<i64, EventClass> {
    let mut indexed = HashMap::with_capacity(classes.len());
    for (name, class) in classes {
        match class.uid() {
            Some(uid) => {
                indexed.insert(uid, class);
            },
            None => log::warn!("Class {name:?} does not have uid"),
        }
    }
    indexed
}

fn index_observable_types(observable: Option<&ObjectDef>) -> HashMap<i64, String> {
    let enum_values = observable
        .and_then(|object| object.attributes().get(dictionary::TYPE_ID))
        .and_then(|attribute| attribute.enum_values());

    let Some(enum_values) = enum_values else {
        log::warn!("SCHEMA: The `observable` object does not enumerate its type_id values");
        return HashMap::new();
    };

    enum_values.iter()
        .filter_map(|(type_id, value)| {
            match (type_id.parse::<i64>(), value.caption()) {
                (Ok(type_id), Some(caption)) => Some((type_id, caption.to_string())),
                _ => {
                    log::debug!("SCHEMA: Skipping observable type_id {type_id:?}");
                    None
                },
            }
        })
        .collect()
}
