mod class;
mod enrich;
mod observables;
mod schema_args;

use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use class::ClassCmd;
use enrich::EnrichCmd;
use observables::ObservablesCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "ocsf")]
pub(crate) enum CommandEnum {
    /// Prints a summary of an event class.
    Class(Box<ClassCmd>),

    /// Enriches OCSF events read from JSON files.
    Enrich(Box<EnrichCmd>),

    /// Prints the observables an event of a class may carry.
    Observables(Box<ObservablesCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Class(cmd) => cmd.run(cli).await,
            Self::Enrich(cmd) => cmd.run(cli).await,
            Self::Observables(cmd) => cmd.run(cli).await,
        }
    }
}
