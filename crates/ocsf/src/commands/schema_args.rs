use anyhow::Context;
use ocsf_schema::EnrichOptions;
use ocsf_schema::Schema;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct SchemaArgs {
    #[arg(
        help="Path to an exported OCSF schema JSON file.",
        long,
        value_name="SCHEMA_FILE",
    )]
    schema: PathBuf,
}
impl SchemaArgs {
    /// Loads the schema, failing when there is no schema file at the given
    /// path.
    pub(crate) fn load(&self, options: EnrichOptions) -> anyhow::Result<Schema> {
        let schema = Schema::load_file(&self.schema, options)
            .with_context(|| format!("Failed to load the schema at {:?}", self.schema))?;

        if !schema.is_loaded() {
            anyhow::bail!("No schema file found at {:?}", self.schema);
        }

        log::debug!(
            "Loaded OCSF schema {} with {} classes.",
            schema.version().unwrap_or("(unversioned)"),
            schema.classes().count(),
        );
        Ok(schema)
    }
}
