//! Message catalog error types

use std::path::PathBuf;
use thiserror::Error;

/// Failures while loading or checking a message catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Missing catalog entry: {key}")]
    MissingKey { key: String },
}

pub type CatalogResult<T> = Result<T, CatalogError>;
