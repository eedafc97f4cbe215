mod class_observables;
mod enrich_options;
mod enricher;
mod schema;
mod schema_load_error;

pub use enrich_options::EnrichOptions;
pub use schema::Schema;
pub use schema_load_error::SchemaLoadError;

#[cfg(test)]
mod tests;
