//! Record construction: input normalization, defaults, and coercion.

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::convert::{mapping_form, symbolize_keys};
use crate::definition::{AttributeDef, StructDef};
use crate::record::{Record, Slot};
use crate::result_ext::{CoercionResultExt, StructResultExt};
use crate::value::{Key, Mapping, Value};
use crate::{StructError, StructResult};

impl StructDef {
    /// Build a record from `value`.
    ///
    /// Accepted input, in probe order: null (an empty mapping), a mapping, a
    /// record, an object exposing a mapping form, or a sequence of
    /// `[key, value]` pairs. String and symbolic keys are interchangeable.
    /// Keys that match no declared input name are ignored.
    ///
    /// # Errors
    ///
    /// - [`StructError::UnsupportedInput`] when `value` has none of the forms
    ///   above.
    /// - [`StructError::MissingAttribute`] when a required attribute without
    ///   a default is absent.
    /// - [`StructError::TypeCoercion`] when a coercion rejects a present
    ///   value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use evil_struct::{AttributeOptions, StructDef, StructError, Value, mapping, sym};
    ///
    /// let mut def = StructDef::new("Foo");
    /// def.attribute("foo", AttributeOptions::new().with_default(|| Value::from("qux")));
    ///
    /// assert_eq!(def.build(Value::Null)?.to_h(), mapping! { sym("foo") => "qux" });
    /// assert_eq!(def.build(mapping! { "foo" => "bar" })?, def.build(mapping! { sym("foo") => "bar" })?);
    ///
    /// let err = def.build(42).unwrap_err();
    /// assert!(matches!(&*err, StructError::UnsupportedInput { .. }));
    /// # Ok::<_, std::sync::Arc<StructError>>(())
    /// ```
    pub fn build(&self, value: impl Into<Value>) -> StructResult<Record> {
        let input = normalize_input(&value.into())?;
        let mut slots = IndexMap::with_capacity(self.declarations().len());
        for declaration in self.declarations() {
            let slot = resolve(declaration, &input)?;
            slots.insert(declaration.storage().clone(), slot);
        }
        trace_unknown_keys(self, &input);
        debug!(
            definition = %self.name(),
            attributes = slots.len(),
            "constructed record"
        );
        Ok(Record::from_slots(self.clone(), slots))
    }

    /// Alias of [`StructDef::build`].
    ///
    /// # Errors
    ///
    /// See [`StructDef::build`].
    pub fn call(&self, value: impl Into<Value>) -> StructResult<Record> {
        self.build(value)
    }

    /// Alias of [`StructDef::build`], the subscript spelling.
    ///
    /// # Errors
    ///
    /// See [`StructDef::build`].
    pub fn of(&self, value: impl Into<Value>) -> StructResult<Record> {
        self.build(value)
    }

    /// Alias of [`StructDef::build`].
    ///
    /// # Errors
    ///
    /// See [`StructDef::build`].
    pub fn load(&self, value: impl Into<Value>) -> StructResult<Record> {
        self.build(value)
    }
}

fn normalize_input(value: &Value) -> StructResult<Mapping> {
    let raw = match value {
        Value::Null => Mapping::new(),
        Value::Sequence(items) => pairs_to_mapping(value, items).into_struct()?,
        other => mapping_form(other)
            .map(std::borrow::Cow::into_owned)
            .ok_or_else(|| {
                StructError::unsupported_input_arc(other, "expected a mapping-like value")
            })?,
    };
    Ok(symbolize_keys(raw))
}

fn pairs_to_mapping(input: &Value, items: &[Value]) -> Result<Mapping, StructError> {
    items
        .iter()
        .map(|item| match item.as_sequence() {
            Some([key, value]) => pair_key(key)
                .map(|normalized| (normalized, value.clone()))
                .ok_or_else(|| {
                    StructError::unsupported_input(input, "pair keys must be strings or symbols")
                }),
            _ => Err(StructError::unsupported_input(
                input,
                "sequence elements must be [key, value] pairs",
            )),
        })
        .collect()
}

fn pair_key(key: &Value) -> Option<Key> {
    match key {
        Value::String(name) => Some(Key::String(name.clone())),
        Value::Symbol(name) => Some(Key::Symbol(name.clone())),
        _ => None,
    }
}

fn resolve(declaration: &AttributeDef, input: &Mapping) -> StructResult<Slot> {
    let name = declaration.name();
    let Some(raw) = input
        .get(&Key::Symbol(name.clone()))
        .filter(|raw| !(raw.is_null() && declaration.treats_null_as_absent()))
    else {
        return absent(declaration);
    };
    let value = match declaration.coercion() {
        Some(coercion) => coercion.apply(raw.clone()).for_attribute(name, raw)?,
        None => raw.clone(),
    };
    Ok(Slot::Assigned(value))
}

fn absent(declaration: &AttributeDef) -> StructResult<Slot> {
    if let Some(producer) = declaration.default_producer() {
        trace!(attribute = %declaration.name(), "invoking default producer");
        return Ok(Slot::Assigned(producer()));
    }
    if declaration.is_optional() {
        return Ok(Slot::Unassigned);
    }
    Err(StructError::missing_attribute(declaration.name().clone()).into())
}

fn trace_unknown_keys(definition: &StructDef, input: &Mapping) {
    for key in input.keys() {
        let known = definition
            .declarations()
            .iter()
            .any(|declaration| declaration.name().as_str() == key.as_str());
        if !known {
            trace!(definition = %definition.name(), key = %key, "ignoring unknown input key");
        }
    }
}
