use crate::commands::schema_args::SchemaArgs;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use ocsf_schema::EnrichOptions;

#[derive(Debug, clap::Args)]
pub(crate) struct ClassCmd {
    #[command(flatten)]
    schema_args: SchemaArgs,

    #[arg(
        help="The `class_uid` of the event class.",
        long,
    )]
    class_uid: i64,
}

#[inherent::inherent]
impl RunnableCommand for ClassCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let schema = match self.schema_args.load(EnrichOptions::type_uid_only()) {
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

        let num_observables = schema.get_observables(self.class_uid)
            .map_or(0, |observables| observables.len());
        let associations = match schema.get_associations(self.class_uid) {
            Some(associations) =>
                associations.iter()
                    .map(|(name, associated)| {
                        format!("      {name} -> {}", associated.join(", "))
                    })
                    .collect::<Vec<_>>()
                    .join("\n"),
            None => "      (none)".to_string(),
        };

        CommandResult::stdout(format_args!(
            concat!(
                "{} {:?} ({}), class_uid {}:\n",
                "  * {} attributes.\n",
                "  * {} observables.\n",
                "  * Associations:\n",
                "{}",
            ),
            output_utils::GREEN_CHECK,
            class.caption(),
            class.name(),
            self.class_uid,
            class.attributes().len(),
            num_observables,
            associations,
        ))
    }
}
