//! Untyped argument bags and per-field type checks.

use crate::error::ValidationError;
use serde_json::{Map, Value};

/// How a single key in an [`ArgBag`] type-checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot<T> {
    Absent,
    Mistyped,
    Present(T),
}

impl<T> Slot<T> {
    pub fn ok(self) -> Option<T> {
        match self {
            Slot::Present(v) => Some(v),
            _ => None,
        }
    }
}

/// Caller-supplied key/value pairs for one operation. JSON `null` counts as absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArgBag(Map<String, Value>);

impl ArgBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder helper: inserts `value` under `key` when it is `Some`.
    pub fn with<T: Into<Value>>(mut self, key: &str, value: Option<T>) -> Self {
        if let Some(v) = value {
            self.0.insert(key.to_string(), v.into());
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|v| !v.is_null())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn string(&self, key: &str) -> Slot<String> {
        match self.get(key) {
            None => Slot::Absent,
            Some(Value::String(s)) => Slot::Present(s.clone()),
            Some(_) => Slot::Mistyped,
        }
    }

    /// Integers only: `3.0`, `"3"` and `true` are all mistyped.
    pub fn int(&self, key: &str) -> Slot<i64> {
        match self.get(key) {
            None => Slot::Absent,
            Some(Value::Number(n)) => n.as_i64().map_or(Slot::Mistyped, Slot::Present),
            Some(_) => Slot::Mistyped,
        }
    }

    pub fn require_string(&self, key: &'static str) -> Result<String, ValidationError> {
        self.string(key)
            .ok()
            .ok_or(ValidationError::NotAString(key))
    }

    pub fn require_int(&self, key: &'static str) -> Result<i64, ValidationError> {
        self.int(key).ok().ok_or(ValidationError::NotAnInt(key))
    }

    /// Absent is fine; present with the wrong type is not.
    pub fn optional_string(&self, key: &'static str) -> Result<Option<String>, ValidationError> {
        match self.string(key) {
            Slot::Absent => Ok(None),
            Slot::Present(v) => Ok(Some(v)),
            Slot::Mistyped => Err(ValidationError::NotAString(key)),
        }
    }

    /// Absent is fine; present with the wrong type is not.
    pub fn optional_int(&self, key: &'static str) -> Result<Option<i64>, ValidationError> {
        match self.int(key) {
            Slot::Absent => Ok(None),
            Slot::Present(v) => Ok(Some(v)),
            Slot::Mistyped => Err(ValidationError::NotAnInt(key)),
        }
    }
}

impl From<Map<String, Value>> for ArgBag {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for ArgBag {
    type Error = ValidationError;

    /// Only JSON objects (and `null`, read as an empty bag) are argument bags.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            Value::Null => Ok(Self::default()),
            _ => Err(ValidationError::InvalidParams),
        }
    }
}
