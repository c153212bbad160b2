//! Shared types and configuration for the Sufra error localization pipeline
//!
//! This crate provides the pieces used by both the pipeline and its hosts:
//! - Configuration types
//! - Translation result types
//! - Error types

pub mod config;
pub mod errors;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{Environment, LogFormat, LoggingConfig, TranslatorConfig};
pub use errors::{ConfigError, ConfigResult};
pub use types::{Domain, DomainErrorResult, FieldMessages, RenderStyle};
