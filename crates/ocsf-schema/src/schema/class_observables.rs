use crate::json_path;
use crate::model::AttributeDef;
use crate::observables::Observable;
use crate::schema::schema::annotated_type_id;
use crate::Schema;
use indexmap::IndexMap;
use std::collections::HashMap;

impl Schema {
    pub(super) fn class_observables(&self) -> &HashMap<i64, Vec<Observable>> {
        self.class_observables.get_or_init(|| {
            log::debug!("Lazily creating class to observables map");
            self.classes.iter()
                .map(|(class_uid, class)| {
                    let mut observables = vec![];
                    self.collect_observables(
                        None,
                        class.caption(),
                        class.attributes(),
                        &mut observables,
                    );
                    (*class_uid, observables)
                })
                .collect()
        })
    }

    fn collect_observables(
        &self,
        parent_path: Option<&str>,
        caption: &str,
        attributes: &IndexMap<String, AttributeDef>,
        observables: &mut Vec<Observable>,
    ) {
        let with_type_name = self.options.add_enum_siblings;

        for (name, attribute) in attributes {
            let path = json_path::join(parent_path, name);

            if attribute.is_array() {
                log::debug!("Array {path} of {:?}", attribute.object_type());
                continue;
            }

            if let Some(object_type) = attribute.object_type() {
                let Some(object) = self.objects.get(object_type) else {
                    log::warn!(
                        "SCHEMA: Attribute {path:?} has invalid object type: {object_type:?}"
                    );
                    continue;
                };

                if json_path::is_path_looped(&path) {
                    log::debug!("Looped object path {path:?}, object name: {}", object.name());
                    continue;
                }

                log::trace!("Embedded object, name: {path:?}, type: {object_type:?}");
                if let Some(type_id) = annotated_type_id(object.observable(), object_type) {
                    observables.push(self.new_observable(type_id, &path, None, with_type_name));
                }
                self.collect_observables(
                    Some(&path),
                    object.caption(),
                    object.attributes(),
                    observables,
                );
            } else if let Some(type_name) = attribute.type_name() {
                match self.types.get(type_name) {
                    Some(type_def) => {
                        if let Some(type_id) = annotated_type_id(type_def.observable(), type_name) {
                            observables.push(
                                self.new_observable(type_id, &path, None, with_type_name),
                            );
                        }
                    },
                    None => log::warn!(
                        "SCHEMA: Attribute {name:?} in {caption:?} has an invalid type: \
                        {type_name}"
                    ),
                }
            } else {
                log::warn!("SCHEMA: Attribute {name:?} in {caption:?} does not have type");
            }
        }
    }
}
