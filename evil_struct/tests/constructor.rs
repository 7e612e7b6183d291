//! Construction: accepted input forms, aliases, defaults, and required keys.

use anyhow::{Result, anyhow, ensure};
use evil_struct::{AttributeOptions, Record, StructDef, StructError, Value, mapping, sym};
use rstest::{fixture, rstest};
use test_helpers::counter::CallCounter;
use test_helpers::doubles::Double;

#[fixture]
fn defaulted() -> StructDef {
    let mut def = StructDef::new("Foo");
    def.attribute("foo", AttributeOptions::new().with_default(|| Value::from("qux")));
    def
}

#[fixture]
fn aliased() -> StructDef {
    let mut def = StructDef::new("Foo");
    def.attribute("foo", AttributeOptions::new())
        .attribute("baz", AttributeOptions::new().with_default(|| Value::from("qux")));
    def
}

#[rstest]
#[case::symbolic_keys(mapping! { sym("foo") => "bar" }, "bar")]
#[case::string_keys(mapping! { "foo" => "bar" }, "bar")]
#[case::empty(mapping! {}, "qux")]
fn accepts_mappings(
    defaulted: StructDef,
    #[case] input: evil_struct::Mapping,
    #[case] expected: &str,
) -> Result<()> {
    let record = defaulted.build(input)?;
    ensure!(record == mapping! { sym("foo") => expected }, "got {record:?}");
    Ok(())
}

#[rstest]
fn accepts_null_and_no_arguments(defaulted: StructDef) -> Result<()> {
    let from_null = defaulted.build(Value::Null)?;
    let from_unit = defaulted.build(())?;
    let from_none = defaulted.build(Option::<Value>::None)?;
    for record in [from_null, from_unit, from_none] {
        ensure!(record == mapping! { sym("foo") => "qux" }, "got {record:?}");
    }
    Ok(())
}

#[rstest]
fn accepts_objects_with_mapping_capabilities(defaulted: StructDef) -> Result<()> {
    let via_to_h = Double::new("to_h").with_to_h(mapping! { "foo" => "bar" });
    let via_to_hash = Double::new("to_hash").with_to_hash(mapping! { sym("foo") => "baz" });
    ensure!(defaulted.build(via_to_h.to_value())? == mapping! { sym("foo") => "bar" });
    ensure!(defaulted.build(via_to_hash.to_value())? == mapping! { sym("foo") => "baz" });
    ensure!(via_to_hash.calls() == ["to_mapping", "to_hash"], "probe order: {:?}", via_to_hash.calls());
    Ok(())
}

#[rstest]
fn accepts_records_of_other_definitions(defaulted: StructDef) -> Result<()> {
    let mut other = StructDef::new("Other");
    other.attribute("foo", AttributeOptions::new());
    let source = other.build(mapping! { "foo" => "bar" })?;
    let record = defaulted.build(source)?;
    ensure!(record.is_instance_of(&defaulted));
    ensure!(record == mapping! { sym("foo") => "bar" });
    Ok(())
}

#[rstest]
#[case::integer(Value::from(1))]
#[case::opaque_object(Double::new("opaque").to_value())]
#[case::sequence_only_object(Double::new("list").with_to_a(vec![1]).to_value())]
fn rejects_unconvertible_input(defaulted: StructDef, #[case] input: Value) {
    let err = defaulted.build(input).err();
    assert!(matches!(err.as_deref(), Some(StructError::UnsupportedInput { .. })));
}

#[rstest]
fn aliases_behave_identically(aliased: StructDef) -> Result<()> {
    let input = mapping! { sym("foo") => "bar" };
    let expected = mapping! { sym("foo") => "bar", sym("baz") => "qux" };
    let built: [Record; 5] = [
        aliased.build(input.clone())?,
        aliased.call(input.clone())?,
        aliased.of(input.clone())?,
        aliased.load(input.clone())?,
        Record::new(&aliased, input)?,
    ];
    for record in built {
        ensure!(record == expected, "got {record:?}");
        ensure!(record.is_instance_of(&aliased));
    }
    Ok(())
}

#[test]
fn missing_required_attribute_fails() -> Result<()> {
    let mut def = StructDef::new("Foo");
    def.attribute("foo", AttributeOptions::new());
    let err = def
        .build(mapping! {})
        .err()
        .ok_or_else(|| anyhow!("expected construction to fail"))?;
    ensure!(matches!(&*err, StructError::MissingAttribute { name } if *name == sym("foo")));
    ensure!(err.to_string() == "missing required attribute 'foo'");
    Ok(())
}

#[test]
fn defaults_are_invoked_lazily_and_once() -> Result<()> {
    let counter = CallCounter::new();
    let mut def = StructDef::new("Foo");
    def.attribute("foo", AttributeOptions::new().with_default(counter.producer("qux")));

    def.build(mapping! { "foo" => "given" })?;
    ensure!(counter.count() == 0, "default invoked for a present key");

    let record = def.build(mapping! {})?;
    ensure!(counter.count() == 1, "default invoked {} times", counter.count());
    ensure!(record.get("foo") == Some(&Value::from("qux")));
    Ok(())
}

#[rstest]
#[case::null_is_kept(AttributeOptions::new().optional(), Some(Value::Null))]
#[case::null_is_absent(AttributeOptions::new().optional().null_as_absent(), None)]
#[case::null_takes_the_default(
    AttributeOptions::new().null_as_absent().with_default(|| Value::from("qux")),
    Some(Value::from("qux"))
)]
fn explicit_null_is_a_value_unless_declared_absent(
    #[case] options: AttributeOptions,
    #[case] expected: Option<Value>,
) -> Result<()> {
    let mut def = StructDef::new("Foo");
    def.attribute("foo", options);
    let record = def.build(mapping! { "foo" => Value::Null })?;
    ensure!(record.get("foo") == expected.as_ref(), "got {record:?}");
    Ok(())
}

#[test]
fn unknown_keys_are_ignored() -> Result<()> {
    let mut def = StructDef::new("Foo");
    def.attribute("foo", AttributeOptions::new());
    let record = def.build(mapping! { "foo" => 1, "baz" => 2 })?;
    ensure!(record.to_h() == mapping! { sym("foo") => 1 });
    ensure!(record.get("baz").is_none());
    Ok(())
}

#[test]
fn key_forms_build_equal_records() -> Result<()> {
    let mut def = StructDef::new("Foo");
    def.attribute("foo", AttributeOptions::new());
    let from_string = def.build(mapping! { "foo" => 1 })?;
    let from_symbol = def.build(mapping! { sym("foo") => 1 })?;
    ensure!(from_string == from_symbol);
    Ok(())
}

#[test]
fn construction_round_trips_through_hashification() -> Result<()> {
    let mut def = StructDef::new("Foo");
    def.attribute("foo", AttributeOptions::new())
        .attribute("bar", AttributeOptions::new().optional())
        .attribute("baz", AttributeOptions::new().with_default(|| Value::from(vec![1, 2])));
    let once = def.build(mapping! { "foo" => mapping! { "nested" => true } })?;
    let twice = def.build(once.to_h())?;
    ensure!(once.to_h() == twice.to_h(), "{once:?} != {twice:?}");
    Ok(())
}
