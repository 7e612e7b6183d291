//! Capability probes and recursive hashification.
//!
//! Every probe runs in a fixed order and returns `None` when the value lacks
//! the capability, so callers decide how to treat "not convertible".
//! [`Value::Null`] never converts, even though it is trivially empty.

use std::borrow::Cow;

use crate::value::{Convertible, Key, Mapping, Value};

/// Mapping form of `value`, with keys left as given.
///
/// Probe order: a mapping is returned as-is; a record yields its
/// hashified mapping; an object yields [`Convertible::to_mapping`], then
/// [`Convertible::to_hash`]. Sequences, scalars and null have no mapping
/// form.
#[must_use]
pub fn mapping_form(value: &Value) -> Option<Cow<'_, Mapping>> {
    match value {
        Value::Mapping(mapping) => Some(Cow::Borrowed(mapping)),
        Value::Record(record) => Some(Cow::Owned(record.to_h())),
        Value::Object(object) => object_mapping(object.capabilities()).map(Cow::Owned),
        _ => None,
    }
}

/// Sequence form of `value`.
///
/// A sequence is returned as-is and an object yields
/// [`Convertible::to_sequence`]. Mappings, records, scalars and null have no
/// sequence form.
#[must_use]
pub fn sequence_form(value: &Value) -> Option<Cow<'_, [Value]>> {
    match value {
        Value::Sequence(items) => Some(Cow::Borrowed(items.as_slice())),
        Value::Object(object) => object.capabilities().to_sequence().map(Cow::Owned),
        _ => None,
    }
}

/// Mapping form of `value` with every key collapsed onto its symbolic form.
///
/// This is the normalisation merges apply to their right-hand side.
#[must_use]
pub fn symbolized_mapping(value: &Value) -> Option<Mapping> {
    mapping_form(value).map(|mapping| symbolize_keys(mapping.into_owned()))
}

/// Rewrite every key of `mapping` to its symbolic form.
///
/// When a string key and a symbolic key collide, the later entry's value
/// wins and the earlier entry's position is kept.
#[must_use]
pub fn symbolize_keys(mapping: Mapping) -> Mapping {
    let mut out = Mapping::with_capacity(mapping.len());
    for (key, value) in mapping {
        out.insert(Key::Symbol(key.into_symbol()), value);
    }
    out
}

/// Recursively convert `value` into a plain tree of mappings, sequences and
/// scalars.
///
/// - A record becomes the mapping of its assigned attributes, in
///   declaration order; unassigned attributes are omitted.
/// - Mappings keep their keys and hashify their values.
/// - Sequences hashify every element.
/// - Objects are probed for [`Convertible::to_sequence`], then
///   [`Convertible::to_mapping`], then [`Convertible::to_hash`], then
///   [`Convertible::elements`]; the first capability found is hashified.
/// - Everything else, including null and objects without capabilities, is
///   returned unchanged.
///
/// Cyclic object graphs do not terminate.
///
/// ```rust
/// use evil_struct::convert::hashify;
/// use evil_struct::{Value, mapping, sym};
///
/// let tree = Value::from(mapping! { sym("list") => vec![Value::Null, Value::from(1)] });
/// assert_eq!(hashify(&tree), tree);
/// ```
#[must_use]
pub fn hashify(value: &Value) -> Value {
    match value {
        Value::Record(record) => Value::Mapping(record.to_h()),
        Value::Mapping(mapping) => Value::Mapping(hashify_mapping(mapping)),
        Value::Sequence(items) => Value::Sequence(hashify_sequence(items)),
        Value::Object(object) => {
            hashify_object(object.capabilities()).unwrap_or_else(|| value.clone())
        }
        Value::Null
        | Value::Bool(_)
        | Value::Integer(_)
        | Value::Float(_)
        | Value::String(_)
        | Value::Symbol(_) => value.clone(),
    }
}

pub(crate) fn hashify_mapping(mapping: &Mapping) -> Mapping {
    mapping
        .iter()
        .map(|(key, value)| (key.clone(), hashify(value)))
        .collect()
}

fn hashify_sequence(items: &[Value]) -> Vec<Value> {
    items.iter().map(hashify).collect()
}

fn hashify_object(object: &dyn Convertible) -> Option<Value> {
    if let Some(items) = object.to_sequence() {
        return Some(Value::Sequence(hashify_sequence(&items)));
    }
    if let Some(mapping) = object_mapping(object) {
        return Some(Value::Mapping(hashify_mapping(&mapping)));
    }
    object
        .elements()
        .map(|items| Value::Sequence(hashify_sequence(&items)))
}

fn object_mapping(object: &dyn Convertible) -> Option<Mapping> {
    object.to_mapping().or_else(|| object.to_hash())
}
