//! Translation result types

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Separator used when several messages are squeezed into one toast line
pub const ARABIC_LIST_SEPARATOR: &str = "، ";

/// Localized messages keyed by form field, in insertion order
///
/// The empty field name holds general (non-field) errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMessages {
    entries: Vec<(String, Vec<String>)>,
}

impl FieldMessages {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the messages of `field`, keeping its original position
    pub fn insert(&mut self, field: impl Into<String>, messages: Vec<String>) {
        let field = field.into();
        match self.entries.iter_mut().find(|(name, _)| *name == field) {
            Some((_, existing)) => *existing = messages,
            None => self.entries.push((field, messages)),
        }
    }

    /// Append one message to `field`, creating the entry if needed
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        let field = field.into();
        let message = message.into();
        match self.entries.iter_mut().find(|(name, _)| *name == field) {
            Some((_, existing)) => existing.push(message),
            None => self.entries.push((field, vec![message])),
        }
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, messages)| messages.as_slice())
    }

    pub fn contains_field(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, messages)| (name.as_str(), messages.as_slice()))
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// All messages, field order first, then message order within a field
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .flat_map(|(_, messages)| messages.iter().map(String::as_str))
    }

    pub fn message_count(&self) -> usize {
        self.entries.iter().map(|(_, messages)| messages.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<(String, Vec<String>)>> for FieldMessages {
    fn from(entries: Vec<(String, Vec<String>)>) -> Self {
        let mut fields = FieldMessages::new();
        for (field, messages) in entries {
            fields.insert(field, messages);
        }
        fields
    }
}

impl Serialize for FieldMessages {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (field, messages) in &self.entries {
            map.serialize_entry(field, messages)?;
        }
        map.end()
    }
}

/// Outcome of a domain translation
///
/// Admin screens need per-field annotations, so those domains return the
/// field map instead of a pre-rendered string.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum DomainErrorResult {
    /// One message for the whole failure
    Single(String),
    /// Messages addressed to individual form fields
    Fields(FieldMessages),
}

impl DomainErrorResult {
    pub fn is_single(&self) -> bool {
        matches!(self, DomainErrorResult::Single(_))
    }

    pub fn as_single(&self) -> Option<&str> {
        match self {
            DomainErrorResult::Single(message) => Some(message),
            DomainErrorResult::Fields(_) => None,
        }
    }

    pub fn as_fields(&self) -> Option<&FieldMessages> {
        match self {
            DomainErrorResult::Single(_) => None,
            DomainErrorResult::Fields(fields) => Some(fields),
        }
    }

    /// Every message in display order
    pub fn flatten(&self) -> Vec<&str> {
        match self {
            DomainErrorResult::Single(message) => vec![message.as_str()],
            DomainErrorResult::Fields(fields) => fields.messages().collect(),
        }
    }

    pub fn message_count(&self) -> usize {
        match self {
            DomainErrorResult::Single(_) => 1,
            DomainErrorResult::Fields(fields) => fields.message_count(),
        }
    }

    /// Compact one-line form for small screens: the first `limit` messages
    pub fn summary(&self, limit: usize, separator: &str) -> String {
        self.flatten()
            .into_iter()
            .take(limit)
            .collect::<Vec<_>>()
            .join(separator)
    }
}

impl From<FieldMessages> for DomainErrorResult {
    fn from(fields: FieldMessages) -> Self {
        DomainErrorResult::Fields(fields)
    }
}
