//! Error types for pipeline setup.
//!
//! Translating a payload never fails; only loading the message catalog and
//! configuration can.

mod types;


// Re-export all error types and utilities
pub use types::{CatalogError, CatalogResult};

use sufra_shared::ConfigError;
use thiserror::Error;

/// Core setup errors
#[derive(Error, Debug)]
pub enum CoreError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type CoreResult<T> = Result<T, CoreError>;
