use crate::dictionary;
use crate::observables::Observable;
use crate::Event;
use indexmap::IndexMap;
use serde_json::Value;

fn is_type(observable: &Event, type_id: i64) -> bool {
    observable.get(dictionary::TYPE_ID).and_then(Value::as_i64) == Some(type_id)
}

fn by_name<'a>(
    observables: impl Iterator<Item = &'a Event>,
) -> IndexMap<&'a str, &'a Event> {
    observables
        .filter_map(|observable| {
            observable.get(dictionary::NAME)
                .and_then(Value::as_str)
                .map(|name| (name, observable))
        })
        .collect()
}

/// Returns the observables of the given event, or `None` if the event has no
/// (or an empty) `observables` array.
pub fn observables(event: &Event) -> Option<&Vec<Value>> {
    event.get(dictionary::OBSERVABLES)
        .and_then(Value::as_array)
        .filter(|observables| !observables.is_empty())
}

/// Returns the observables of the given event keyed by their `name`.
/// Observables without a name are left out.
pub fn observables_by_name(event: &Event) -> Option<IndexMap<&str, &Event>> {
    observables(event)
        .map(|observables| by_name(observables.iter().filter_map(Value::as_object)))
}

/// Returns the observables of the given event having the given `type_id`, or
/// `None` if there are none.
pub fn observables_of_type(
    event: &Event,
    type_id: impl Into<i64>,
) -> Option<Vec<&Event>> {
    let type_id = type_id.into();
    let matching: Vec<&Event> =
        observables(event)?
            .iter()
            .filter_map(Value::as_object)
            .filter(|observable| is_type(observable, type_id))
            .collect();

    (!matching.is_empty()).then_some(matching)
}

/// Like [`observables_of_type`], but keyed by observable `name`.
pub fn observables_of_type_by_name(
    event: &Event,
    type_id: impl Into<i64>,
) -> Option<IndexMap<&str, &Event>> {
    let matching = by_name(observables_of_type(event, type_id)?.into_iter());
    (!matching.is_empty()).then_some(matching)
}

/// Filters observables by `type_id`, keyed by observable `name`. Returns
/// `None` when nothing matches.
pub fn filter(
    observables: &[Observable],
    type_id: impl Into<i64>,
) -> Option<IndexMap<String, Observable>> {
    let type_id = type_id.into();
    let matching: IndexMap<String, Observable> =
        observables.iter()
            .filter(|observable| observable.type_id == type_id)
            .map(|observable| (observable.name.clone(), observable.clone()))
            .collect();

    (!matching.is_empty()).then_some(matching)
}
