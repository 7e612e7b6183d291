//! `serde` serialisation of hashified trees.
//!
//! Records serialise as their hashified mapping; opaque objects serialise as
//! whatever hashification turns them into. Symbols and symbolic keys lose
//! their symbolic marker and serialise as plain strings.

use serde::ser::{Error as _, Serialize, SerializeMap, SerializeSeq, Serializer};

use super::{Mapping, Value};
use crate::Record;
use crate::convert::hashify;

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Integer(i) => serializer.serialize_i64(*i),
            Self::Float(x) => serializer.serialize_f64(*x),
            Self::String(s) => serializer.serialize_str(s),
            Self::Symbol(s) => serializer.serialize_str(s.as_str()),
            Self::Sequence(items) => serialize_sequence(items, serializer),
            Self::Mapping(mapping) => serialize_mapping(mapping, serializer),
            Self::Record(record) => record.serialize(serializer),
            Self::Object(object) => match hashify(self) {
                Self::Object(_) => Err(S::Error::custom(format_args!(
                    "object {object:?} exposes no conversion capability"
                ))),
                converted => converted.serialize(serializer),
            },
        }
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_mapping(&self.to_h(), serializer)
    }
}

fn serialize_sequence<S: Serializer>(items: &[Value], serializer: S) -> Result<S::Ok, S::Error> {
    let mut seq = serializer.serialize_seq(Some(items.len()))?;
    for item in items {
        seq.serialize_element(item)?;
    }
    seq.end()
}

fn serialize_mapping<S: Serializer>(mapping: &Mapping, serializer: S) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(mapping.len()))?;
    for (key, value) in mapping {
        map.serialize_entry(key.as_str(), value)?;
    }
    map.end()
}
