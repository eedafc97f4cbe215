use crate::schema::tests::test_utils;
use crate::EnrichOptions;
use crate::Schema;
use crate::SchemaLoadError;
use serde_json::json;
use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, SchemaLoadError>;

#[test]
fn load_without_path_is_unloaded() -> Result<()> {
    let schema = Schema::load(None::<&Path>, EnrichOptions::all())?;

    assert!(!schema.is_loaded());
    assert!(schema.get_class(test_utils::FILE_SYSTEM_ACTIVITY).is_none());

    let event = test_utils::event(json!({
        "class_uid": test_utils::FILE_SYSTEM_ACTIVITY,
        "activity_id": 1,
    }));
    assert_eq!(schema.enrich(event.clone()), event);

    Ok(())
}

#[test]
fn load_missing_file_is_unloaded() -> Result<()> {
    let schema = Schema::load_file(
        "/this/path/does/not/exist/schema.json",
        EnrichOptions::default(),
    )?;

    assert!(!schema.is_loaded());
    assert!(schema.get_observables(test_utils::FILE_SYSTEM_ACTIVITY).is_none());

    Ok(())
}

#[test]
fn load_directory_is_unloaded() -> Result<()> {
    let schema = Schema::load_file(std::env::temp_dir(), EnrichOptions::default())?;

    assert!(!schema.is_loaded());

    Ok(())
}

#[test]
fn load_file_from_disk() -> Result<()> {
    let file_path = std::env::temp_dir().join(format!(
        "ocsf-schema-load-test-{}.json",
        std::process::id(),
    ));
    std::fs::write(&file_path, test_utils::MINI_SCHEMA).unwrap();

    let result = Schema::load_file(&file_path, EnrichOptions::default());
    std::fs::remove_file(&file_path).unwrap();
    let schema = result?;

    assert!(schema.is_loaded());
    assert_eq!(schema.version(), Some("1.1.0"));
    assert_eq!(schema.options(), EnrichOptions::default());

    Ok(())
}

#[test]
fn load_invalid_json_str() {
    let result = Schema::load_str(None, "{ \"classes\": [", EnrichOptions::default());

    match result {
        Err(SchemaLoadError::ParseError { file, .. }) => {
            assert_eq!(file, PathBuf::from("str://0"));
        },
        other => panic!("expected a parse error, got: {other:?}"),
    }
}

#[test]
fn load_invalid_json_file_names_the_file() {
    let file_path = std::env::temp_dir().join(format!(
        "ocsf-schema-invalid-test-{}.json",
        std::process::id(),
    ));
    std::fs::write(&file_path, "not json").unwrap();

    let result = Schema::load_file(&file_path, EnrichOptions::default());
    std::fs::remove_file(&file_path).unwrap();

    match result {
        Err(SchemaLoadError::ParseError { file, .. }) => assert_eq!(file, file_path),
        other => panic!("expected a parse error, got: {other:?}"),
    }
}

#[test]
fn load_skips_classes_without_uid() {
    let schema = test_utils::load_schema(EnrichOptions::default());

    assert_eq!(schema.classes().count(), 2);
    assert!(schema.classes().all(|class| class.name() != "orphan_class"));
}

#[test]
fn load_schema_without_dictionary_attributes() -> Result<()> {
    let schema = Schema::load_str(None, &json!({
        "objects": {},
        "types": {
            "string_t": { "caption": "String" },
        },
        "classes": {
            "base_event": {
                "name": "base_event",
                "caption": "Base Event",
                "uid": 0,
                "attributes": {
                    "email_addr": { "type": "string_t" },
                },
            },
        },
    }).to_string(), EnrichOptions::all())?;

    assert!(schema.is_loaded());
    assert!(schema.get_dictionary_attribute("email_addr").is_none());
    assert!(schema.observable_type_caption(1).is_none());

    let enriched = schema.enrich(test_utils::event(json!({
        "class_uid": 0,
        "email_addr": "someone@example.com",
    })));
    assert_eq!(enriched.get("type_uid"), Some(&json!(0)));
    assert!(!enriched.contains_key("observables"));

    Ok(())
}

#[test]
fn load_tolerates_non_integer_class_observables() -> Result<()> {
    let schema = Schema::load_str(None, &json!({
        "objects": {
            "user": {
                "name": "user",
                "caption": "User",
                "attributes": {
                    "name": { "type": "string_t" },
                },
            },
        },
        "types": {
            "string_t": { "caption": "String" },
        },
        "classes": {
            "authentication": {
                "name": "authentication",
                "caption": "Authentication",
                "uid": 3002,
                "attributes": {
                    "user": { "type": "object_t", "object_type": "user" },
                },
                "observables": {
                    "user.name": "4",
                },
            },
        },
    }).to_string(), EnrichOptions::all())?;

    assert!(schema.is_loaded());

    let enriched = schema.enrich(test_utils::event(json!({
        "class_uid": 3002,
        "user": { "name": "alice" },
    })));
    assert_eq!(enriched.get("type_uid"), Some(&json!(300200)));
    assert!(!enriched.contains_key("observables"));

    Ok(())
}

#[test]
fn load_treats_null_captions_and_names_as_missing() -> Result<()> {
    let schema = Schema::load_str(None, &json!({
        "objects": {
            "device": {
                "name": null,
                "caption": null,
                "attributes": null,
            },
        },
        "types": {
            "string_t": { "caption": null },
        },
        "classes": {
            "base_event": {
                "name": null,
                "caption": null,
                "uid": 0,
                "attributes": {
                    "message": { "type": "string_t", "is_array": null },
                },
            },
        },
    }).to_string(), EnrichOptions::default())?;

    let class = schema.get_class(0).expect("the class should be indexed");
    assert_eq!(class.caption(), "");
    assert_eq!(class.name(), "");
    assert!(!class.attributes()["message"].is_array());

    let device = schema.get_object("device").expect("device should be defined");
    assert!(device.attributes().is_empty());
    assert_eq!(schema.get_type("string_t").map(|t| t.caption()), Some(""));

    Ok(())
}
