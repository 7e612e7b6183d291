//! Shallow and deep overlay of mappings.
//!
//! Both functions are pure: they take their inputs by value or reference and
//! return a new mapping. [`crate::Record::merge`] and
//! [`crate::Record::merge_deeply`] rebuild the result through the record's
//! definition.

use crate::convert::symbolized_mapping;
use crate::value::{Mapping, Value};

/// Overlay `overlay` onto `source` one level deep.
///
/// Keys in `overlay` replace identical keys in `source`, keeping the
/// source's position; keys unique to `overlay` are appended.
///
/// # Examples
///
/// ```rust
/// use evil_struct::merge::merge;
/// use evil_struct::{mapping, sym};
///
/// let base = mapping! { sym("a") => 1, sym("b") => mapping! { sym("x") => 1 } };
/// let merged = merge(base, mapping! { sym("b") => 2, sym("c") => 3 });
/// assert_eq!(merged, mapping! { sym("a") => 1, sym("b") => 2, sym("c") => 3 });
/// ```
#[must_use]
pub fn merge(mut source: Mapping, overlay: Mapping) -> Mapping {
    source.extend(overlay);
    source
}

/// Recursively overlay `target` onto `source`.
///
/// Behaviour:
/// - When either side has no mapping form (see
///   [`crate::convert::mapping_form`]), the result is `target` unchanged.
/// - Otherwise both sides are symbolized and merged key by key. Keys only in
///   `source` keep their value; keys in `target` take
///   `merge_deeply(source[key], target[key])`.
/// - Sequences are never merged element-wise; a sequence on either side stops
///   the recursion and `target` wins.
///
/// # Examples
///
/// ```rust
/// use evil_struct::merge::merge_deeply;
/// use evil_struct::{Value, mapping, sym};
///
/// let source = Value::from(mapping! {
///     sym("bar") => mapping! { sym("baz") => "FOO", sym("qux") => "QUX" },
/// });
/// let target = Value::from(mapping! { sym("bar") => mapping! { "qux" => "FOO" } });
/// let merged = merge_deeply(&source, &target);
/// assert_eq!(
///     merged,
///     Value::from(mapping! {
///         sym("bar") => mapping! { sym("baz") => "FOO", sym("qux") => "FOO" },
///     })
/// );
///
/// // Sequences replace wholesale.
/// let source = Value::from(mapping! { sym("b") => vec![mapping! { sym("c") => 1 }] });
/// let target = Value::from(mapping! { sym("b") => vec![mapping! { sym("c") => 2 }] });
/// assert_eq!(merge_deeply(&source, &target), target);
/// ```
#[must_use]
pub fn merge_deeply(source: &Value, target: &Value) -> Value {
    let (Some(mut merged), Some(overlay)) = (symbolized_mapping(source), symbolized_mapping(target))
    else {
        return target.clone();
    };
    for (key, value) in overlay {
        let combined = match merged.get(&key) {
            Some(existing) => merge_deeply(existing, &value),
            None => value,
        };
        merged.insert(key, combined);
    }
    Value::Mapping(merged)
}
