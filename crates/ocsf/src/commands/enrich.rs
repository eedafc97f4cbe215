use crate::commands::schema_args::SchemaArgs;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use ocsf_schema::event_utils;
use ocsf_schema::EnrichOptions;
use ocsf_schema::Event;
use ocsf_schema::Schema;
use serde_json::Value;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct EnrichCmd {
    #[command(flatten)]
    schema_args: SchemaArgs,

    #[arg(
        help="Add a generated `metadata.uid` to every event before enriching \
             it.",
        long,
    )]
    add_uid: bool,

    #[arg(
        help="Add the text value (sibling) of every enum attribute.",
        long,
    )]
    enum_siblings: bool,

    #[arg(
        default_values_t=["json".to_string()],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    json_file_exts: Vec<String>,

    #[arg(
        help="Replace the `observables` of every event with the observables \
             found in it.",
        long,
    )]
    observables: bool,

    #[arg(
        help="Pretty-print the enriched events.",
        long,
    )]
    pretty: bool,

    #[arg(
        help="Paths to one or more JSON files or directories containing JSON \
             files. Each file holds one event object or an array of them.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

#[inherent::inherent]
impl RunnableCommand for EnrichCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let options = EnrichOptions::type_uid_only()
            .with_enum_siblings(self.enum_siblings)
            .with_observables(self.observables);
        let schema = match self.schema_args.load(options) {
            Ok(schema) => Arc::new(schema),
            Err(e) => return e.into(),
        };

        let mut errors: Vec<anyhow::Error> = vec![];
        let file_paths = find_json_files(
            &self.file_or_dir_paths,
            &self.json_file_exts,
            &mut errors,
        );
        log::debug!("Found {} JSON files to be enriched.", file_paths.len());

        let mut num_events = 0;
        let mut output = vec![];
        for result in enrich_files(schema, file_paths, self.add_uid).await {
            let events = match result {
                Ok(events) => events,
                Err(e) => {
                    errors.push(e);
                    continue
                },
            };

            for event in events {
                num_events += 1;
                match self.serialize(event) {
                    Ok(json) => output.push(json),
                    Err(e) => errors.push(e),
                }
            }
        }
        log::info!("Enriched {num_events} events.");

        let stdout = (!output.is_empty()).then(|| output.join("\n"));
        if errors.is_empty() {
            return CommandResult {
                exit_code: ExitCode::SUCCESS,
                stderr: None,
                stdout,
            };
        }

        CommandResult {
            exit_code: ExitCode::FAILURE,
            stderr: Some(format!(
                "{} {} errors while enriching events:\n{}",
                output_utils::RED_X,
                errors.len(),
                errors.iter()
                    .map(|e| format!("  * {e:#}"))
                    .collect::<Vec<_>>()
                    .join("\n"),
            )),
            stdout,
        }
    }
}

impl EnrichCmd {
    fn serialize(&self, event: Event) -> anyhow::Result<String> {
        let event = Value::Object(event);
        let json =
            if self.pretty {
                serde_json::to_string_pretty(&event)?
            } else {
                serde_json::to_string(&event)?
            };
        Ok(json)
    }
}

/// Finds every JSON file at or under each path passed as an arg.
fn find_json_files(
    file_or_dir_paths: &[PathBuf],
    json_file_exts: &[String],
    errors: &mut Vec<anyhow::Error>,
) -> Vec<PathBuf> {
    let json_file_exts: HashSet<&str> =
        json_file_exts.iter()
            .map(|ext| ext.trim_start_matches('.'))
            .collect();

    log::debug!(
        "Scanning {} input paths...",
        file_or_dir_paths.len(),
    );
    let mut file_paths = vec![];
    for path in file_or_dir_paths {
        for entry in WalkDir::new(path.as_path()).follow_links(true) {
            match entry {
                Ok(entry) => {
                    let path = entry.path();
                    if !entry.file_type().is_file() {
                        log::trace!("Skipping non-file: {path:#?}.");
                        continue;
                    }

                    log::trace!("Found file at {path:#?}.");
                    if let Some(ext) = path.extension().and_then(|ext| ext.to_str())
                        && json_file_exts.contains(ext) {
                        file_paths.push(path.to_path_buf());
                    }
                },

                Err(e) => {
                    log::trace!(
                        "Encountered an error while iterating recursive \
                        filesystem entities at/under {path:#?}."
                    );
                    errors.push(e.into());
                },
            }
        }
    }

    // A single file passed explicitly is enriched whatever its extension.
    if file_paths.is_empty()
        && file_or_dir_paths.len() == 1
        && let Some(first_arg_path) = file_or_dir_paths.first()
        && first_arg_path.is_file() {
        log::warn!(
            "Proceeding to enrich {first_arg_path:#?} even though it \
            doesn't match any of the --json-file-exts ({}).",
            json_file_exts.iter()
                .map(|ext| format!("`{ext}`"))
                .collect::<Vec<_>>()
                .join(", "),
        );
        file_paths.push(first_arg_path.to_owned());
    }

    file_paths
}

/// Enriches the given files concurrently, yielding one result per file in
/// the order the files were given.
async fn enrich_files(
    schema: Arc<Schema>,
    file_paths: Vec<PathBuf>,
    add_uid: bool,
) -> Vec<anyhow::Result<Vec<Event>>> {
    let tasks: Vec<_> =
        file_paths.into_iter()
            .map(|path| {
                let schema = Arc::clone(&schema);
                tokio::task::spawn_blocking(move || {
                    enrich_file(&schema, &path, add_uid)
                })
            })
            .collect();

    let mut results = Vec::with_capacity(tasks.len());
    for task in tasks {
        results.push(match task.await {
            Ok(result) => result,
            Err(e) => Err(e.into()),
        });
    }
    results
}

/// Reads the events stored in the given file and enriches them.
fn enrich_file(schema: &Schema, path: &Path, add_uid: bool) -> anyhow::Result<Vec<Event>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {path:?}"))?;
    let events = parse_events(&content)
        .with_context(|| format!("Invalid events in {path:?}"))?;

    log::debug!("Enriching {} events from {path:?}.", events.len());
    Ok(
        events.into_iter()
            .map(|mut event| {
                if add_uid {
                    event_utils::add_uuid(&mut event);
                }
                schema.enrich(event)
            })
            .collect()
    )
}

fn parse_events(content: &str) -> anyhow::Result<Vec<Event>> {
    match serde_json::from_str::<Value>(content)? {
        Value::Object(event) => Ok(vec![event]),
        Value::Array(items) =>
            items.into_iter()
                .enumerate()
                .map(|(index, item)| match item {
                    Value::Object(event) => Ok(event),
                    other => Err(anyhow::anyhow!(
                        "Item {index} is not an event object: {other}"
                    )),
                })
                .collect(),
        other => anyhow::bail!("Expected an event object or an array of events, found: {other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::enrich_file;
    use super::enrich_files;
    use super::find_json_files;
    use super::parse_events;
    use ocsf_schema::json_path;
    use ocsf_schema::EnrichOptions;
    use ocsf_schema::Schema;
    use serde_json::json;
    use serde_json::Value;
    use std::path::Path;
    use std::path::PathBuf;
    use std::sync::Arc;

    const FILE_SYSTEM_ACTIVITY: i64 = 1001;
    const MINI_SCHEMA: &str = include_str!(
        "../../../ocsf-schema/src/schema/tests/fixtures/mini_schema.json"
    );

    fn load_schema() -> Schema {
        Schema::load_str(None, MINI_SCHEMA, EnrichOptions::default())
            .expect("the fixture schema should load")
    }

    fn write_json(path: &Path, value: &Value) {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, value.to_string()).unwrap();
    }

    fn event_json(index: usize) -> Value {
        json!({
            "class_uid": FILE_SYSTEM_ACTIVITY,
            "activity_id": 1,
            "message": format!("event {index}"),
        })
    }

    fn exts(exts: &[&str]) -> Vec<String> {
        exts.iter().map(|ext| ext.to_string()).collect()
    }

    fn sorted(mut paths: Vec<PathBuf>) -> Vec<PathBuf> {
        paths.sort();
        paths
    }

    #[test]
    fn parse_single_event() -> anyhow::Result<()> {
        let events = parse_events(r#"{"class_uid": 1001, "activity_id": 1}"#)?;

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].get("class_uid"), Some(&json!(1001)));
        Ok(())
    }

    #[test]
    fn parse_event_array() -> anyhow::Result<()> {
        let events = parse_events(r#"[{"class_uid": 1001}, {"class_uid": 1007}]"#)?;

        assert_eq!(events.len(), 2);
        assert_eq!(events[1].get("class_uid"), Some(&json!(1007)));
        Ok(())
    }

    #[test]
    fn parse_rejects_non_events() {
        assert!(parse_events("42").is_err());
        assert!(parse_events(r#"[{"class_uid": 1001}, "oops"]"#).is_err());
        assert!(parse_events("{").is_err());
    }

    #[test]
    fn directory_walk_filters_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.json");
        let c = dir.path().join("nested").join("c.ocsf");
        write_json(&a, &event_json(0));
        write_json(&dir.path().join("b.txt"), &event_json(1));
        write_json(&c, &event_json(2));

        let mut errors = vec![];
        let inputs = vec![dir.path().to_path_buf()];

        let found = find_json_files(&inputs, &exts(&["json"]), &mut errors);
        assert_eq!(found, vec![a.clone()]);

        let found = find_json_files(&inputs, &exts(&[".json", "ocsf"]), &mut errors);
        assert_eq!(sorted(found), sorted(vec![a, c]));
        assert!(errors.is_empty());
    }

    #[test]
    fn single_named_file_ignores_extension() {
        let dir = tempfile::tempdir().unwrap();
        let events = dir.path().join("events.log");
        write_json(&events, &event_json(0));

        let mut errors = vec![];
        let found = find_json_files(&[events.clone()], &exts(&["json"]), &mut errors);
        assert_eq!(found, vec![events.clone()]);

        // Only when it is the sole input.
        let other_dir = tempfile::tempdir().unwrap();
        let found = find_json_files(
            &[events, other_dir.path().to_path_buf()],
            &exts(&["json"]),
            &mut errors,
        );
        assert!(found.is_empty());
        assert!(errors.is_empty());
    }

    #[test]
    fn missing_input_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let mut errors = vec![];

        let found = find_json_files(
            &[dir.path().join("does-not-exist")],
            &exts(&["json"]),
            &mut errors,
        );

        assert!(found.is_empty());
        assert_eq!(errors.len(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn enriched_files_keep_input_order() {
        let dir = tempfile::tempdir().unwrap();
        let file_paths: Vec<PathBuf> =
            (0..32)
                .map(|index| {
                    let path = dir.path().join(format!("{index:02}.json"));
                    write_json(&path, &json!([event_json(index), event_json(index)]));
                    path
                })
                .collect();

        let mut inputs = file_paths.clone();
        inputs.insert(5, dir.path().join("missing.json"));

        let results = enrich_files(Arc::new(load_schema()), inputs, false).await;
        assert_eq!(results.len(), 33);
        assert!(results[5].is_err());

        let messages: Vec<String> =
            results.into_iter()
                .filter_map(Result::ok)
                .map(|events| {
                    assert_eq!(events.len(), 2);
                    assert_eq!(events[0].get("type_uid"), Some(&json!(100101)));
                    events[0].get("message")
                        .and_then(Value::as_str)
                        .unwrap()
                        .to_string()
                })
                .collect();
        let expected: Vec<String> = (0..32).map(|index| format!("event {index}")).collect();
        assert_eq!(messages, expected);
    }

    #[test]
    fn add_uid_sets_metadata_uid() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("event.json");
        write_json(&path, &json!([
            event_json(0),
            { "class_uid": FILE_SYSTEM_ACTIVITY, "metadata": { "version": "1.1.0" } },
        ]));
        let schema = load_schema();

        let events = enrich_file(&schema, &path, true)?;
        let uids: Vec<&str> =
            events.iter()
                .map(|event| {
                    json_path::get_in(event, "metadata.uid")
                        .and_then(Value::as_str)
                        .unwrap()
                })
                .collect();
        assert_eq!(uids.len(), 2);
        assert!(uids.iter().all(|uid| uid.len() == 36));
        assert_ne!(uids[0], uids[1]);
        assert_eq!(json_path::get_in(&events[1], "metadata.version"), Some(&json!("1.1.0")));
        assert_eq!(events[1].get("type_uid"), Some(&json!(100100)));

        let events = enrich_file(&schema, &path, false)?;
        assert!(!events[0].contains_key("metadata"));
        assert_eq!(events[0].get("type_uid"), Some(&json!(100101)));

        Ok(())
    }
}
