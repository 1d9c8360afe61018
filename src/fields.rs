//! Flat field mappings collected from a form at submit time

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A flat `name -> value` mapping of form fields
///
/// Produced from a form's raw entry list with standard form-encoding
/// semantics: the entries arrive in document order and the last value wins
/// for repeated names. Controls that contribute nothing when serialized
/// (unchecked checkboxes, unchecked radios) are already absent from the raw
/// entry list, so they never appear here.
///
/// The same type doubles as the default-value mapping reapplied after a form
/// reset, built with [`FormFields::with`].
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormFields(BTreeMap<String, String>);

impl FormFields {
    /// An empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Flatten a raw entry list, last value winning for repeated names
    pub fn from_entries(entries: impl IntoIterator<Item = (String, String)>) -> Self {
        Self(entries.into_iter().collect())
    }

    /// Builder-style insert, for assembling default-value mappings
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    /// Look up a field's value
    pub fn get(&self, name: &str) -> Option<&String> {
        self.0.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate fields in name order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.0.iter()
    }
}

impl FromIterator<(String, String)> for FormFields {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self::from_entries(iter)
    }
}

impl IntoIterator for FormFields {
    type Item = (String, String);
    type IntoIter = std::collections::btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
