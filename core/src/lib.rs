//! # Sufra Core
//!
//! Normalization and Arabic localization of backend error payloads.
//! A payload is classified into one of a few known shapes, its raw English
//! messages are mapped through per-domain rule tables onto catalog texts,
//! and the result is either kept per field or rendered into one string.
//!
//! The free functions below use a process-wide translator over the embedded
//! catalog. Build a [`Translator`] directly to apply catalog overrides.

pub mod catalog;
pub mod classifier;
pub mod errors;
pub mod mapper;
pub mod renderer;
pub mod rules;
pub mod translator;

use once_cell::sync::Lazy;
use serde_json::Value;

pub use catalog::{format_message, Catalog};
pub use classifier::{classify, parse_payload, CodedError, ErrorShape, ErrorShapeKind};
pub use errors::*;
pub use renderer::{render, RenderOptions};
pub use translator::{required_keys, Translator, GENERAL_FIELD};

pub use sufra_shared::{Domain, DomainErrorResult, FieldMessages, RenderStyle};

static DEFAULT_TRANSLATOR: Lazy<Translator> = Lazy::new(|| match Catalog::embedded() {
    Ok(catalog) => Translator::new(catalog),
    Err(err) => {
        tracing::error!(error = %err, "Embedded catalog failed to load");
        Translator::new(Catalog::default())
    }
});

/// Translator over the embedded catalog
pub fn default_translator() -> &'static Translator {
    &DEFAULT_TRANSLATOR
}

pub fn translate_auth_error(payload: Option<&Value>) -> String {
    DEFAULT_TRANSLATOR.translate_auth_error(payload)
}

pub fn translate_admin_user_error(payload: Option<&Value>) -> DomainErrorResult {
    DEFAULT_TRANSLATOR.translate_admin_user_error(payload)
}

pub fn translate_admin_branch_error(payload: Option<&Value>) -> DomainErrorResult {
    DEFAULT_TRANSLATOR.translate_admin_branch_error(payload)
}

pub fn translate_delivery_area_error(payload: Option<&Value>, style: RenderStyle) -> String {
    DEFAULT_TRANSLATOR.translate_delivery_area_error(payload, style)
}

/// Translate the raw messages of one field of `domain`
pub fn map_field<S: AsRef<str>>(domain: Domain, field: &str, raw: &[S]) -> Vec<String> {
    DEFAULT_TRANSLATOR.map_field(domain, field, raw)
}
