use crate::commands::schema_args::SchemaArgs;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use ocsf_schema::EnrichOptions;
use ocsf_schema::Observable;
use serde_json::Value;

#[derive(Debug, clap::Args)]
pub(crate) struct ObservablesCmd {
    #[command(flatten)]
    schema_args: SchemaArgs,

    #[arg(
        help="The `class_uid` of the event class.",
        long,
    )]
    class_uid: i64,

    #[arg(
        help="Print the observables as a JSON array.",
        long,
    )]
    json: bool,

    #[arg(
        help="Only print observables of this `type_id`.",
        long,
    )]
    type_id: Option<i64>,
}

#[inherent::inherent]
impl RunnableCommand for ObservablesCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let schema = match self.schema_args.load(
            EnrichOptions::type_uid_only().with_enum_siblings(true),
        ) {
            Ok(schema) => schema,
            Err(e) => return e.into(),
        };

        let Some(class) = schema.get_class(self.class_uid) else {
            return CommandResult::stderr(format_args!(
                "{} No event class with class_uid {}.",
                output_utils::RED_X,
                self.class_uid,
            ));
        };

        let observables: Vec<Observable> =
            match self.type_id {
                Some(type_id) =>
                    schema.get_observables_of_type(self.class_uid, type_id)
                        .map(|by_name| by_name.into_values().collect())
                        .unwrap_or_default(),
                None =>
                    schema.get_observables(self.class_uid)
                        .map(|observables| observables.to_vec())
                        .unwrap_or_default(),
            };

        if self.json {
            let observables = Value::Array(
                observables.iter()
                    .map(|observable| Value::Object(observable.to_event()))
                    .collect()
            );
            return match serde_json::to_string_pretty(&observables) {
                Ok(json) => CommandResult::stdout(format_args!("{json}")),
                Err(e) => anyhow::Error::from(e).into(),
            };
        }

        CommandResult::stdout(format_args!(
            "{} {} observables in {:?} ({}):\n{}",
            output_utils::GREEN_CHECK,
            observables.len(),
            class.caption(),
            self.class_uid,
            observables.iter()
                .map(|observable| format!(
                    "  * {} ({}: {})",
                    observable.name(),
                    observable.type_id(),
                    observable.type_name().unwrap_or_default(),
                ))
                .collect::<Vec<_>>()
                .join("\n"),
        ))
    }
}
