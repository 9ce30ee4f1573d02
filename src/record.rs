//! The record abstraction rendered by the engine.
//!
//! A [`Record`] is one structured item to be displayed: a struct-like
//! aggregate or a key-value mapping of unknown shape. Both normalize to an
//! order-preserving JSON object through serde, which doubles as the
//! canonical encoder: a type's own `Serialize` impl carries its field
//! renaming and enum representation rules, so the engine never has to
//! second-guess how a value wants to appear as JSON.

use serde::Serialize;
use serde_json::Value;

use crate::error::{OutputError, Result};

/// A single structured item to be displayed.
///
/// The engine treats every record generically: it never interprets field
/// semantics, only reads the shape. Records are read-only for the duration
/// of a render call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Record(Value);

impl Record {
    /// Wraps an already-built JSON value.
    pub fn new(value: Value) -> Self {
        Record(value)
    }

    /// Converts any serializable value into a record via its canonical
    /// JSON encoding.
    ///
    /// # Errors
    /// Returns [`OutputError::Encoding`] if the value's `Serialize` impl
    /// fails (e.g. a map with non-string keys).
    pub fn from_serialize<T: Serialize>(value: &T) -> Result<Self> {
        let v = serde_json::to_value(value).map_err(OutputError::Encoding)?;
        Ok(Record(v))
    }

    /// Borrows the underlying JSON value.
    pub fn value(&self) -> &Value {
        &self.0
    }

    /// Top-level field names in declaration order, or an empty list for
    /// scalar records (which expose no fields).
    pub fn field_names(&self) -> Vec<&str> {
        match &self.0 {
            Value::Object(map) => map.keys().map(String::as_str).collect(),
            _ => Vec::new(),
        }
    }

    /// Resolves a dot-separated field path against this record.
    ///
    /// Each segment is walked independently; a missing key or a non-object
    /// intermediate yields `None`. Paths are case-sensitive and must match
    /// actual key names.
    pub fn lookup(&self, path: &str) -> Option<&Value> {
        let mut current = &self.0;
        for segment in path.split('.') {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }
}

impl From<Value> for Record {
    fn from(value: Value) -> Self {
        Record(value)
    }
}
