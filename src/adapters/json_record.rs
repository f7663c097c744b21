//! Record adapter over a JSON field map.
//!
//! The shipped [`GridRecord`] implementation: an id, an entity name,
//! and a bag of `serde_json` fields. Dataset files deserialize
//! straight into these, and display formatting lives here so hosts
//! stay byte-oriented.

use chrono::DateTime;
use serde_json::{Map, Value};

use crate::models::RecordRef;
use crate::traits::GridRecord;

/// A record backed by a JSON object.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonRecord {
    id: String,
    entity: String,
    fields: Map<String, Value>,
}

impl JsonRecord {
    /// Builds a record from any JSON value; non-object values become
    /// an empty field map.
    pub fn new(id: impl Into<String>, entity: impl Into<String>, fields: Value) -> Self {
        let fields = match fields {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        JsonRecord {
            id: id.into(),
            entity: entity.into(),
            fields,
        }
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn entity(&self) -> &str {
        &self.entity
    }
}

impl GridRecord for JsonRecord {
    fn record_id(&self) -> &str {
        &self.id
    }

    fn formatted_value(&self, column: &str) -> Option<String> {
        format_value(self.fields.get(column)?)
    }

    fn raw_value(&self, column: &str) -> Option<Value> {
        match self.fields.get(column) {
            None | Some(Value::Null) => None,
            Some(value) => Some(value.clone()),
        }
    }

    fn reference(&self) -> RecordRef {
        RecordRef {
            entity: self.entity.clone(),
            id: self.id.clone(),
            name: self
                .fields
                .get("name")
                .and_then(Value::as_str)
                .map(str::to_string),
        }
    }
}

/// Display formatting per JSON type. `Null` formats as no value at
/// all, matching the missing-data semantics of the filter.
fn format_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(format_string(s)),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(true) => Some("Yes".to_string()),
        Value::Bool(false) => Some("No".to_string()),
        other => Some(other.to_string()),
    }
}

/// RFC 3339 timestamps display as plain dates; anything else passes
/// through untouched.
fn format_string(s: &str) -> String {
    match DateTime::parse_from_rfc3339(s) {
        Ok(dt) => dt.format("%Y-%m-%d").to_string(),
        Err(_) => s.to_string(),
    }
}
