//! Localized message catalog
//!
//! Texts live in `i18n/messages.toml`, embedded at compile time. An optional
//! override file can replace individual entries without redeploying.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::errors::{CatalogError, CatalogResult};

const EMBEDDED_MESSAGES: &str = include_str!("../i18n/messages.toml");

/// Localized texts grouped by section, addressed as `section.key`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    sections: HashMap<String, HashMap<String, String>>,
}

impl Catalog {
    /// Catalog built from the embedded Arabic messages
    pub fn embedded() -> CatalogResult<Self> {
        Self::from_toml_str(EMBEDDED_MESSAGES)
    }

    pub fn from_toml_str(content: &str) -> CatalogResult<Self> {
        let sections: HashMap<String, HashMap<String, String>> = toml::from_str(content)?;
        Ok(Self { sections })
    }

    /// Embedded catalog with the entries of `override_path` applied on top
    pub fn load(override_path: Option<&Path>) -> CatalogResult<Self> {
        let mut catalog = Self::embedded()?;

        if let Some(path) = override_path {
            let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            let overrides = Self::from_toml_str(&content)?;
            tracing::debug!(
                path = %path.display(),
                entries = overrides.len(),
                "Applying catalog overrides"
            );
            catalog.merge(overrides);
        }

        Ok(catalog)
    }

    /// Apply `other` on top of this catalog, entry by entry
    pub fn merge(&mut self, other: Catalog) {
        for (section, entries) in other.sections {
            self.sections.entry(section).or_default().extend(entries);
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        let (section, name) = key.split_once('.')?;
        self.sections
            .get(section)
            .and_then(|entries| entries.get(name))
            .map(String::as_str)
    }

    /// Text for `key`, or the key itself when the entry is missing
    pub fn text<'a>(&'a self, key: &'a str) -> &'a str {
        match self.get(key) {
            Some(text) => text,
            None => {
                tracing::warn!(key, "Missing catalog entry");
                key
            }
        }
    }

    /// Fail on the first key that has no entry
    pub fn ensure_keys<'k>(&self, keys: impl IntoIterator<Item = &'k str>) -> CatalogResult<()> {
        match keys.into_iter().find(|key| self.get(key).is_none()) {
            Some(key) => Err(CatalogError::MissingKey {
                key: key.to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Number of entries across all sections
    pub fn len(&self) -> usize {
        self.sections.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Fill `{name}` placeholders in `template`
pub fn format_message(template: &str, params: &[(&str, &str)]) -> String {
    let mut result = template.to_string();
    for (key, value) in params {
        let placeholder = format!("{{{}}}", key);
        result = result.replace(&placeholder, value);
    }
    result
}
