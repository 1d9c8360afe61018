//! Error types: validation payloads and caller usage errors

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Validation errors keyed by field name
///
/// This is the payload a failed submission reports and the mapping the page
/// state exposes after a navigation cycle. The hook never mutates one; it
/// forwards dispatch failures verbatim and reads page-level snapshots
/// passively.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    /// An empty error mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, field: impl Into<String>, message: impl Into<String>) -> Self {
        self.0.insert(field.into(), message.into());
        self
    }

    /// The message for one field, if it failed validation
    pub fn get(&self, field: &str) -> Option<&String> {
        self.0.get(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate `(field, message)` pairs in field order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.0.iter()
    }
}

impl FromIterator<(String, String)> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Call-site mistakes the hook reports through the diagnostic log
///
/// These never propagate as panics or results from the submission operations;
/// the operation aborts with no state change and the message lands on the
/// `tracing` warn channel.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    #[error("no form handle was supplied and none is remembered from an earlier submission")]
    NoForm,
    #[error("the remembered form has been unmounted")]
    FormGone,
}
