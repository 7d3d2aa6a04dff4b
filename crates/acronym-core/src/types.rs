//! Core type definitions for the acronym store

use serde::{Deserialize, Deserializer, Serialize};
use serde_yaml::Value;
use std::collections::BTreeMap;

/// Mapping of acronym to definition.
///
/// Serializes as the store document: a single `acronyms` field holding a
/// string-to-string mapping. Keys are case-sensitive and unique by
/// construction. Key order carries no meaning; the ordered map only keeps
/// the written file stable between saves.
///
/// Scalar definitions are read as text: numbers and booleans as written,
/// null as the empty string. A sequence or mapping in place of a
/// definition is rejected.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcronymTable {
    #[serde(deserialize_with = "definitions")]
    acronyms: BTreeMap<String, String>,
}

fn definitions<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<BTreeMap<String, Value>> = Option::deserialize(deserializer)?;

    raw.unwrap_or_default()
        .into_iter()
        .map(|(acronym, value)| {
            let definition = match value {
                Value::String(s) => s,
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                Value::Null => String::new(),
                other => {
                    return Err(<D::Error as serde::de::Error>::custom(format!(
                        "definition of {acronym:?} must be a scalar, found {other:?}"
                    )))
                }
            };
            Ok((acronym, definition))
        })
        .collect()
}

impl AcronymTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Exact, case-sensitive lookup
    pub fn lookup(&self, acronym: &str) -> Option<&str> {
        self.acronyms.get(acronym).map(String::as_str)
    }

    /// Insert the acronym, or overwrite its definition if already present.
    ///
    /// Returns the definition that was replaced, if any.
    pub fn upsert(
        &mut self,
        acronym: impl Into<String>,
        definition: impl Into<String>,
    ) -> Option<String> {
        self.acronyms.insert(acronym.into(), definition.into())
    }

    pub fn len(&self) -> usize {
        self.acronyms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.acronyms.is_empty()
    }

    /// Iterate over `(acronym, definition)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.acronyms
            .iter()
            .map(|(acronym, definition)| (acronym.as_str(), definition.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for AcronymTable
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            acronyms: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
