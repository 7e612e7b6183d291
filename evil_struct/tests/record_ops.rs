//! Record operations: access, hashification, equality, and merges.

use anyhow::{Result, anyhow, ensure};
use evil_struct::{AttributeOptions, Record, StructDef, StructError, Value, mapping, sym};
use rstest::{fixture, rstest};
use test_helpers::doubles::Double;

#[fixture]
fn foo_bar() -> StructDef {
    let mut def = StructDef::new("Foo");
    def.attribute("foo", AttributeOptions::new())
        .attribute("bar", AttributeOptions::new().optional());
    def
}

#[fixture]
fn merge_target(foo_bar: StructDef) -> Result<Record> {
    Ok(foo_bar.build(mapping! { sym("foo") => sym("FOO"), sym("bar") => sym("BAR") })?)
}

#[test]
fn attributes_are_read_by_storage_name() -> Result<()> {
    let mut def = StructDef::new("Foo");
    def.attribute("some argument", AttributeOptions::new().store_as("qux"));
    let record = def.build(mapping! { sym("some argument") => "bar" })?;
    ensure!(record.get(sym("qux")) == Some(&Value::from("bar")));
    ensure!(record.get("qux") == Some(&Value::from("bar")));
    ensure!(record.extract::<String>("qux")? == "bar");
    ensure!(record.get("some argument").is_none());
    Ok(())
}

#[rstest]
fn hashification_hides_unassigned_values(foo_bar: StructDef) -> Result<()> {
    let full = foo_bar.of(mapping! { "foo" => "bar", "bar" => "baz" })?;
    ensure!(full.to_h() == mapping! { sym("foo") => "bar", sym("bar") => "baz" });

    let partial = foo_bar.of(mapping! { "foo" => "bar" })?;
    let expected = mapping! { sym("foo") => "bar" };
    ensure!(partial.to_h() == expected);
    ensure!(partial.to_hash() == expected);
    ensure!(partial.dump() == expected);
    Ok(())
}

#[rstest]
fn hashification_is_applied_deeply(foo_bar: StructDef) -> Result<()> {
    let inner = Double::new("inner").with_to_hash(mapping! { sym("qux") => Value::Null });
    let outer = Double::new("outer").with_to_h(mapping! { sym("baz") => vec![inner.to_value()] });
    let record = foo_bar.of(mapping! { sym("foo") => outer.to_value() })?;
    let expected = mapping! {
        sym("foo") => mapping! { sym("baz") => vec![mapping! { sym("qux") => Value::Null }] },
    };
    ensure!(record.to_h() == expected, "got {:?}", record.to_h());
    Ok(())
}

#[rstest]
fn nested_records_are_hashified(foo_bar: StructDef) -> Result<()> {
    let child = foo_bar.build(mapping! { "foo" => 1 })?;
    let parent = foo_bar.build(mapping! { "foo" => child, "bar" => vec![Value::Null] })?;
    let expected = mapping! {
        sym("foo") => mapping! { sym("foo") => 1 },
        sym("bar") => vec![Value::Null],
    };
    ensure!(parent.to_h() == expected, "got {:?}", parent.to_h());
    Ok(())
}

#[rstest]
fn records_equal_mapping_like_values(foo_bar: StructDef) -> Result<()> {
    let record = foo_bar.build(mapping! { "foo" => "bar" })?;
    ensure!(record == mapping! { sym("foo") => "bar" });
    ensure!(record.equals(&Double::new("to_h").with_to_h(mapping! { sym("foo") => "bar" }).to_value()));
    ensure!(record.equals(&Double::new("to_hash").with_to_hash(mapping! { sym("foo") => "bar" }).to_value()));
    ensure!(Value::from(record.clone()) == Value::from(mapping! { sym("foo") => "bar" }));
    ensure!(record != mapping! { "foo" => "bar" }, "string keys differ from symbolic ones");
    Ok(())
}

#[test]
fn records_never_equal_null() -> Result<()> {
    let mut def = StructDef::new("Foo");
    def.attribute("foo", AttributeOptions::new().optional());
    let record = def.build(())?;
    ensure!(record == mapping! {});
    ensure!(!record.equals(&Value::Null));
    ensure!(Value::from(record) != Value::Null);
    Ok(())
}

#[rstest]
#[case::symbol_keys(Value::from(mapping! { sym("bar") => sym("BAZ"), sym("baz") => sym("QUX") }))]
#[case::string_keys(Value::from(mapping! { "bar" => sym("BAZ"), "baz" => sym("QUX") }))]
#[case::to_h(Double::new("to_h").with_to_h(mapping! { sym("bar") => sym("BAZ"), sym("baz") => sym("QUX") }).to_value())]
#[case::to_hash(Double::new("to_hash").with_to_hash(mapping! { sym("bar") => sym("BAZ"), sym("baz") => sym("QUX") }).to_value())]
fn shallow_merge_returns_a_new_record(
    merge_target: Result<Record>,
    #[case] other: Value,
) -> Result<()> {
    let record = merge_target?;
    let before = record.to_h();
    let result = record.merge(other)?;
    ensure!(record.to_h() == before, "receiver mutated");
    ensure!(result.is_instance_of(record.definition()));
    ensure!(result == mapping! { sym("foo") => sym("FOO"), sym("bar") => sym("BAZ") });
    Ok(())
}

#[rstest]
fn shallow_merge_rejects_unconvertible_values(merge_target: Result<Record>) -> Result<()> {
    let record = merge_target?;
    let err = record
        .merge(vec![1, 2])
        .err()
        .ok_or_else(|| anyhow!("expected merge to fail"))?;
    ensure!(matches!(&*err, StructError::UnsupportedInput { .. }));
    Ok(())
}

#[test]
fn deep_merge_descends_into_mappings_only() -> Result<()> {
    let mut def = StructDef::new("Foo");
    def.attribute("foo", AttributeOptions::new())
        .attribute("bar", AttributeOptions::new());
    let record = def.build(mapping! {
        sym("foo") => mapping! { sym("bar") => vec![mapping! { sym("foo") => sym("FOO") }] },
        sym("bar") => mapping! { sym("baz") => sym("FOO"), sym("qux") => sym("QUX") },
    })?;
    let before = record.to_h();

    let result = record.merge_deeply(mapping! {
        sym("foo") => mapping! { sym("bar") => vec![mapping! { sym("qux") => sym("QUX") }] },
        sym("bar") => mapping! { "qux" => sym("FOO") },
    })?;

    ensure!(record.to_h() == before, "receiver mutated");
    ensure!(result.is_instance_of(&def));
    let expected = mapping! {
        sym("foo") => mapping! { sym("bar") => vec![mapping! { sym("qux") => sym("QUX") }] },
        sym("bar") => mapping! { sym("baz") => sym("FOO"), sym("qux") => sym("FOO") },
    };
    ensure!(result == expected, "got {:?}", result.to_h());
    Ok(())
}

#[rstest]
fn deep_merge_with_a_sequence_replaces_everything(foo_bar: StructDef) -> Result<()> {
    let record = foo_bar.build(mapping! { "foo" => 1 })?;
    let err = record
        .merge_deeply(vec![1])
        .err()
        .ok_or_else(|| anyhow!("a sequence replaces the whole mapping and cannot build"))?;
    ensure!(matches!(&*err, StructError::UnsupportedInput { .. }));
    Ok(())
}

#[rstest]
fn typed_extraction_reports_unassigned_slots(foo_bar: StructDef) -> Result<()> {
    let record = foo_bar.build(mapping! { "foo" => 1 })?;
    ensure!(record.slot("bar").is_some_and(evil_struct::Slot::is_unassigned));
    ensure!(record.slot("baz").is_none());
    ensure!(record.extract::<Option<i64>>("bar")?.is_none());
    ensure!(record.extract::<i64>("foo")? == 1);
    let err = record
        .extract::<i64>("bar")
        .err()
        .ok_or_else(|| anyhow!("expected missing attribute"))?;
    ensure!(matches!(&*err, StructError::MissingAttribute { .. }));
    let err = record
        .extract::<String>("foo")
        .err()
        .ok_or_else(|| anyhow!("expected coercion failure"))?;
    ensure!(matches!(&*err, StructError::TypeCoercion { .. }));
    Ok(())
}
