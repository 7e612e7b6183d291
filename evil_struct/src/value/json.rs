//! Interop with [`serde_json::Value`].
//!
//! JSON objects become mappings with string keys; constructors symbolize
//! them, so a JSON document can be fed straight into a definition.

use serde_json::Value as Json;

use super::{Key, Mapping, Value};

/// JSON numbers map to [`Value::Integer`] when they fit in an `i64` and to
/// [`Value::Float`] otherwise. Integers above `i64::MAX` therefore become
/// floats and keep only the precision an `f64` has; callers that need them
/// exactly should send them as strings.
impl From<Json> for Value {
    fn from(json: Json) -> Self {
        match json {
            Json::Null => Self::Null,
            Json::Bool(b) => Self::Bool(b),
            Json::Number(number) => number
                .as_i64()
                .map(Self::Integer)
                .or_else(|| number.as_f64().map(Self::Float))
                .unwrap_or(Self::Null),
            Json::String(s) => Self::String(s),
            Json::Array(items) => Self::Sequence(items.into_iter().map(Self::from).collect()),
            Json::Object(map) => Self::Mapping(
                map.into_iter()
                    .map(|(key, value)| (Key::String(key), Self::from(value)))
                    .collect::<Mapping>(),
            ),
        }
    }
}

impl Value {
    /// Serialise the hashified form of this value as JSON.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] when the tree holds an opaque object
    /// without any conversion capability.
    pub fn to_json(&self) -> serde_json::Result<Json> {
        serde_json::to_value(self)
    }
}
