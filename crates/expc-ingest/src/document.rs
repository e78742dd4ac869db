//! Splitting a YAML stream into map-shaped documents and reading typed fields.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_yaml::{Mapping, Value};

use crate::error::{IngestError, Result};

/// Load every map-shaped record in a YAML stream.
///
/// Each `---` separated document contributes itself when it is a map, or each
/// of its map items when it is a sequence. Anything else is skipped.
pub fn load_records(content: &str) -> Result<Vec<Mapping>> {
    let mut records = Vec::new();
    for document in serde_yaml::Deserializer::from_str(content) {
        let value = Value::deserialize(document).map_err(|source| IngestError::Yaml { source })?;
        match value {
            Value::Mapping(map) => records.push(map),
            Value::Sequence(items) => {
                records.extend(items.into_iter().filter_map(|item| match item {
                    Value::Mapping(map) => Some(map),
                    _ => None,
                }));
            }
            _ => {}
        }
    }
    Ok(records)
}

/// Textual form of a YAML scalar; `None` for null and non-scalars.
pub fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Typed field access on one record, tagged with its position for errors.
pub(crate) struct RecordReader<'a> {
    index: usize,
    map: &'a Mapping,
}

impl<'a> RecordReader<'a> {
    pub(crate) fn new(index: usize, map: &'a Mapping) -> Self {
        Self { index, map }
    }

    fn get(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key).filter(|value| !value.is_null())
    }

    pub(crate) fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    fn invalid(&self, field: &str, expected: &'static str) -> IngestError {
        IngestError::InvalidField {
            document: self.index,
            field: field.to_string(),
            expected,
        }
    }

    /// Missing reads as empty; the validator reports it.
    pub(crate) fn string(&self, key: &str) -> Result<String> {
        match self.get(key) {
            None => Ok(String::new()),
            Some(value) => scalar_to_string(value).ok_or_else(|| self.invalid(key, "a scalar")),
        }
    }

    pub(crate) fn boolean(&self, key: &str) -> Result<bool> {
        match self.get(key) {
            None => Ok(false),
            Some(Value::Bool(b)) => Ok(*b),
            Some(_) => Err(self.invalid(key, "a boolean")),
        }
    }

    pub(crate) fn string_list(&self, key: &str) -> Result<Vec<String>> {
        let Some(value) = self.get(key) else {
            return Ok(Vec::new());
        };
        let Value::Sequence(items) = value else {
            return Err(self.invalid(key, "a list of strings"));
        };
        items
            .iter()
            .map(|item| scalar_to_string(item).ok_or_else(|| self.invalid(key, "a list of strings")))
            .collect()
    }

    pub(crate) fn string_map(&self, key: &str) -> Result<BTreeMap<String, String>> {
        let Some(value) = self.get(key) else {
            return Ok(BTreeMap::new());
        };
        let Value::Mapping(map) = value else {
            return Err(self.invalid(key, "a map of strings"));
        };
        let mut out = BTreeMap::new();
        for (k, v) in map {
            let (Some(k), Some(v)) = (scalar_to_string(k), scalar_to_string(v)) else {
                return Err(self.invalid(key, "a map of strings"));
            };
            out.insert(k, v);
        }
        Ok(out)
    }
}
