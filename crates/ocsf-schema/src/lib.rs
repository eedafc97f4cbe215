//! Load an exported [OCSF](https://schema.ocsf.io) schema into memory and use
//! it to enrich OCSF events.
//!
//! Enrichment always computes the event's `type_uid`. It can optionally add
//! the textual siblings of enumerated attributes (e.g. `activity_name` for
//! `activity_id`) and generate the event's `observables`.

mod associations;
pub mod dictionary;
pub mod event_utils;
mod file_reader;
pub mod json_path;
pub mod model;
pub mod observables;
pub mod schema;

pub use associations::Associations;
pub use file_reader::ReadContentError;
pub use observables::Observable;
pub use observables::ObservableTypeId;
pub use schema::EnrichOptions;
pub use schema::Schema;
pub use schema::SchemaLoadError;

/// An OCSF event, or any object embedded within one.
pub type Event = serde_json::Map<String, serde_json::Value>;
