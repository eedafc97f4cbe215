use crate::schema::tests::test_utils;
use crate::schema::tests::test_utils::FILE_SYSTEM_ACTIVITY;
use crate::schema::tests::test_utils::PROCESS_ACTIVITY;
use crate::EnrichOptions;
use crate::ObservableTypeId;

#[test]
fn get_class_by_uid() {
    let schema = test_utils::load_schema(EnrichOptions::default());

    let class = schema.get_class(FILE_SYSTEM_ACTIVITY)
        .expect("File System Activity should be defined");
    assert_eq!(class.name(), "file_activity");
    assert_eq!(class.caption(), "File System Activity");
    assert_eq!(class.uid(), Some(FILE_SYSTEM_ACTIVITY));
    assert!(class.attributes().contains_key("activity_id"));
    assert_eq!(
        class.path_observables().and_then(|observables| observables.get("file.path")),
        Some(&serde_json::json!(7)),
    );

    assert!(schema.get_class(42).is_none());
}

#[test]
fn get_object_and_type_by_name() {
    let schema = test_utils::load_schema(EnrichOptions::default());

    let device = schema.get_object("device").expect("device should be defined");
    assert_eq!(device.caption(), "Device");
    assert_eq!(device.observable(), Some(&serde_json::json!(20)));
    assert!(device.attributes()["network_interfaces"].is_array());

    let ip = schema.get_type("ip_t").expect("ip_t should be defined");
    assert_eq!(ip.base_type(), Some("string_t"));

    assert!(schema.get_object("ghost").is_none());
    assert!(schema.get_dictionary_attribute("email_addr").is_some());
}

#[test]
fn observable_type_captions() {
    let schema = test_utils::load_schema(EnrichOptions::default());

    assert_eq!(schema.observable_type_caption(2), Some("IP Address"));
    assert_eq!(schema.observable_type_caption(25), Some("Process"));
    assert_eq!(schema.observable_type_caption(1234), None);
}

#[test]
fn get_associations() {
    let schema = test_utils::load_schema(EnrichOptions::default());

    let associations = schema.get_associations(FILE_SYSTEM_ACTIVITY)
        .expect("File System Activity has associations");
    assert_eq!(associations.len(), 2);
    assert_eq!(associations.first("device"), Some("actor.user"));
    assert_eq!(
        associations.get("actor.user"),
        Some(["device".to_string(), "file".to_string()].as_slice()),
    );
    assert_eq!(associations.first("file"), None);

    // Defined but empty.
    assert!(schema.get_associations(PROCESS_ACTIVITY).is_none());
    assert!(schema.get_associations(42).is_none());
}

#[test]
fn get_class_observables() {
    let schema = test_utils::load_schema(EnrichOptions::default());

    let observables = schema.get_observables(FILE_SYSTEM_ACTIVITY)
        .expect("File System Activity has observables");
    let find = |name: &str| observables.iter().find(|observable| observable.name() == name);

    assert_eq!(find("device").map(|o| o.type_id()), Some(20));
    assert_eq!(find("device.hostname").map(|o| o.type_id()), Some(1));
    assert_eq!(find("device.owner").map(|o| o.type_id()), Some(21));
    assert_eq!(find("actor.user").map(|o| o.type_id()), Some(21));
    assert_eq!(find("file").map(|o| o.type_id()), Some(24));
    assert_eq!(find("file.name").map(|o| o.type_id()), Some(7));

    // Arrays are not walked.
    assert!(find("device.network_interfaces").is_none());
    assert!(observables.iter().all(|o| !o.name().starts_with("device.network_interfaces")));

    // Static observables carry neither values nor (without enum siblings)
    // type names.
    assert!(observables.iter().all(|o| o.value().is_none() && o.type_name().is_none()));

    assert!(schema.get_observables(42).is_none());
}

#[test]
fn get_class_observables_stops_at_looped_paths() {
    let schema = test_utils::load_schema(EnrichOptions::all());

    let processes = schema.get_observables_of_type(PROCESS_ACTIVITY, ObservableTypeId::Process)
        .expect("Process Activity has process observables");

    assert!(processes.contains_key("process"));
    assert!(processes.contains_key("process.parent_process"));
    assert!(processes.contains_key("actor.process"));
    assert!(processes.contains_key("actor.process.parent_process"));
    assert!(!processes.contains_key("process.parent_process.parent_process"));
    assert!(!processes.contains_key("actor.process.parent_process.parent_process"));

    assert!(processes.values().all(|o| o.type_name() == Some("Process")));
}

#[test]
fn get_class_observables_of_missing_type() {
    let schema = test_utils::load_schema(EnrichOptions::default());

    assert!(
        schema.get_observables_of_type(FILE_SYSTEM_ACTIVITY, ObservableTypeId::Container)
            .is_none()
    );
}
