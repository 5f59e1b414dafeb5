//! The [`json`](self) module reads expectation tables from JSON, e.g. from
//! fixture files.
//!
//! - an array is an ordered table; its entries are arrays of positional
//!   values, objects with named fields (digit keys are positions), or a
//!   bare method name
//! - an object is a name-keyed table; array and object values are full
//!   specifications, every other value is a call-count policy

use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::literal::{Field, NamedBatch, NamedSpec, Raw, RawBatch, RawEntry, RawItem};

impl RawBatch {
    /// Read a table from a JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedEntry`] if the value is not a table or an
    /// entry uses an unknown key.
    pub fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::Array(items) => items
                .iter()
                .map(|item| RawEntry::from_json(item).map(RawItem::Entry))
                .collect::<Result<Vec<_>>>()
                .map(RawBatch::Ordered),
            Value::Object(map) => {
                let mut named = NamedBatch::new();
                for (method, spec) in map {
                    let spec = match spec {
                        Value::Array(_) | Value::Object(_) => {
                            NamedSpec::Structured(RawEntry::from_json(spec)?)
                        }
                        x => NamedSpec::Shorthand(Raw::Value(x.clone())),
                    };

                    named.push(method.clone(), spec);
                }

                Ok(RawBatch::Named(named))
            }
            x => Err(Error::malformed(format!(
                "expectation table must be an array or an object, got {x}"
            ))),
        }
    }

    /// Parse a table from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedEntry`] if the text is not valid JSON or
    /// not a valid table.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(s)
            .map_err(|err| Error::malformed(format!("invalid JSON: {err}")))?;

        Self::from_json(&value)
    }
}

impl RawEntry {
    /// Read one entry from a JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedEntry`] for unknown keys and values that are
    /// neither arrays, objects nor method names.
    pub fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::Array(values) => Ok(values.iter().cloned().map(Raw::Value).collect()),
            Value::Object(map) => entry_from_map(map),
            Value::String(method) => Ok(RawEntry::new().arg(method.as_str())),
            x => Err(Error::malformed(format!(
                "expectation entry must be an array, an object or a method name, got {x}"
            ))),
        }
    }
}

fn entry_from_map(map: &Map<String, Value>) -> Result<RawEntry> {
    let mut entry = RawEntry::new();
    let mut positional = Vec::new();

    for (key, value) in map {
        if let Some(field) = Field::from_name(key) {
            entry.set(field, value.clone());
        } else if let Ok(index) = key.parse::<usize>() {
            positional.push((index, value.clone()));
        } else {
            return Err(Error::malformed(format!(
                "unknown key '{key}' in expectation entry"
            )));
        }
    }

    positional.sort_by_key(|(index, _)| *index);
    for (_, value) in positional {
        entry.push(value);
    }

    Ok(entry)
}
