use chrono::{SecondsFormat, Utc};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use serde_json::{json, Map, Value};

use crate::model::Destination;
use crate::prelude::{ValidationError, ValidationResult};

/// Detection record ingested by the sorting server.
///
/// Fields are held as loose JSON values: construction accepts anything and
/// only applies defaults, `validate` rejects wrong-typed fields afterwards.
/// A field falls back to its default when the key is missing or explicitly
/// null, so an explicit `count: 0` survives construction unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectionRecord {
    pub count: Value,
    pub objects: Value,
    pub destination: Value,
    pub timestamp: Value,
    pub confidence: Value,
}

impl DetectionRecord {
    /// Builds a record from a loosely typed input bag, defaulting absent
    /// fields. Non-object input yields an all-defaults record. The clock is
    /// read only when `timestamp` is absent.
    pub fn from_value(input: &Value) -> Self {
        Self {
            count: field_or(input, "count", || json!(0)),
            objects: field_or(input, "objects", || json!([])),
            destination: field_or(input, "destination", || json!("none")),
            timestamp: field_or(input, "timestamp", || json!(now_iso())),
            confidence: field_or(input, "confidence", || Value::Null),
        }
    }

    /// Checks `count`, `objects`, then `destination`, failing on the first
    /// violation. Re-checks from scratch on every call; `timestamp` and
    /// `confidence` are never validated.
    pub fn validate(&self) -> ValidationResult<()> {
        if !self.count.is_number() {
            return Err(ValidationError::InvalidCount);
        }
        if !self.objects.is_array() {
            return Err(ValidationError::ObjectsNotArray);
        }
        self.parse_destination()?;
        Ok(())
    }

    /// Typed view of the destination field for consumers past the
    /// validation boundary.
    pub fn parse_destination(&self) -> ValidationResult<Destination> {
        match &self.destination {
            Value::String(name) => name.parse(),
            other => Err(ValidationError::InvalidDestination(other.to_string())),
        }
    }

    /// Wire projection: `count`, `objects`, `destination`, `timestamp`, in
    /// that key order. `confidence` is stored but never serialized. No
    /// validation happens here; an invalid record still projects.
    pub fn to_json(&self) -> Value {
        let mut map = Map::with_capacity(4);
        map.insert("count".to_string(), self.count.clone());
        map.insert("objects".to_string(), self.objects.clone());
        map.insert("destination".to_string(), self.destination.clone());
        map.insert("timestamp".to_string(), self.timestamp.clone());
        Value::Object(map)
    }
}

impl Serialize for DetectionRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("DetectionRecord", 4)?;
        state.serialize_field("count", &self.count)?;
        state.serialize_field("objects", &self.objects)?;
        state.serialize_field("destination", &self.destination)?;
        state.serialize_field("timestamp", &self.timestamp)?;
        state.end()
    }
}

fn field_or(input: &Value, key: &str, default: impl FnOnce() -> Value) -> Value {
    match input.get(key) {
        Some(Value::Null) | None => default(),
        Some(value) => value.clone(),
    }
}

fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
