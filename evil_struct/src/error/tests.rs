//! Unit tests for error messages and conversions.

use std::error::Error as _;
use std::sync::Arc;

use rstest::rstest;

use super::StructError;
use crate::coerce::CoercionError;
use crate::{Value, sym};

#[rstest]
#[case::missing(
    StructError::missing_attribute(sym("foo")),
    "missing required attribute 'foo'"
)]
#[case::coercion(
    StructError::type_coercion(
        sym("foo"),
        Value::from(1),
        CoercionError::mismatch("strict string", &Value::from(1)),
    ),
    "attribute 'foo' rejected 1: expected strict string, found integer"
)]
#[case::unsupported(
    StructError::unsupported_input(&Value::from(true), "not a mapping"),
    "cannot build a record from bool: not a mapping"
)]
fn errors_render_readable_messages(#[case] err: StructError, #[case] expected: &str) {
    assert_eq!(err.to_string(), expected);
}

#[test]
fn coercion_source_is_preserved() {
    let source = CoercionError::mismatch("strict string", &Value::from(1));
    let err = StructError::type_coercion(sym("foo"), Value::from(1), source);
    let described = err.source().map(ToString::to_string);
    assert_eq!(
        described.as_deref(),
        Some("expected strict string, found integer")
    );
}

#[test]
fn nested_struct_errors_become_coercion_sources() {
    let nested = Arc::new(StructError::missing_attribute(sym("inner")));
    let err = CoercionError::from(Arc::clone(&nested));
    assert_eq!(err.expected(), "record");
    let source = err.source().map(ToString::to_string);
    assert_eq!(source.as_deref(), Some("missing required attribute 'inner'"));
}

#[test]
fn attribute_names_are_exposed() {
    let err = StructError::missing_attribute(sym("foo"));
    assert_eq!(err.attribute(), Some(&sym("foo")));
    let err = StructError::unsupported_input(&Value::Null, "no");
    assert!(err.attribute().is_none());
}
