use crate::ReadContentError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SchemaLoadError {
    #[error("Unable to parse the schema loaded from `{}`: {err}", file.display())]
    ParseError {
        file: PathBuf,
        err: String,
    },

    #[error("Unable to load the schema file: {0}")]
    SchemaFileReadError(Box<ReadContentError>),
}
