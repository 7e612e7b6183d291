//! Constructed records and the operations they support.

use std::fmt;

use indexmap::IndexMap;

use crate::coerce::FromValue;
use crate::convert::{hashify, mapping_form, symbolized_mapping};
use crate::definition::StructDef;
use crate::merge;
use crate::result_ext::CoercionResultExt;
use crate::value::{Key, Mapping, Symbol, Value};
use crate::{StructError, StructResult};

/// Storage state of one attribute.
#[derive(Clone, Debug, PartialEq)]
pub enum Slot {
    /// The attribute holds a value, possibly null.
    Assigned(Value),
    /// Optional attribute without input or default.
    Unassigned,
}

impl Slot {
    /// `Some(value)` becomes assigned, `None` unassigned.
    #[must_use]
    pub fn from_option<T: Into<Value>>(value: Option<T>) -> Self {
        value.map_or(Self::Unassigned, |value| Self::Assigned(value.into()))
    }

    /// Borrow the assigned value.
    #[must_use]
    pub const fn value(&self) -> Option<&Value> {
        match self {
            Self::Assigned(value) => Some(value),
            Self::Unassigned => None,
        }
    }

    /// Returns `true` for [`Slot::Unassigned`].
    #[must_use]
    pub const fn is_unassigned(&self) -> bool {
        matches!(self, Self::Unassigned)
    }
}

/// An immutable instance of a [`StructDef`].
///
/// Attribute values are read by storage name with [`Record::get`]; string
/// and symbolic spellings of a name resolve to the same slot. Merges return
/// new records and leave the receiver untouched.
///
/// ```rust
/// use evil_struct::{AttributeOptions, StructDef, Value, mapping, sym};
///
/// let mut def = StructDef::new("Foo");
/// def.attribute("foo", AttributeOptions::new())
///     .attribute("bar", AttributeOptions::new().optional());
///
/// let record = def.build(mapping! { "foo" => "bar" })?;
/// assert_eq!(record.get("foo"), Some(&Value::from("bar")));
/// assert_eq!(record.get(sym("foo")), Some(&Value::from("bar")));
/// assert_eq!(record.to_h(), mapping! { sym("foo") => "bar" });
///
/// let merged = record.merge(mapping! { "bar" => 1 })?;
/// assert_eq!(merged.get("bar"), Some(&Value::from(1)));
/// assert!(record.get("bar").is_none());
/// # Ok::<_, std::sync::Arc<evil_struct::StructError>>(())
/// ```
#[derive(Clone)]
pub struct Record {
    definition: StructDef,
    slots: IndexMap<Symbol, Slot>,
}

impl Record {
    /// Build a record of `definition` from `value`.
    ///
    /// Equivalent to [`StructDef::build`].
    ///
    /// # Errors
    ///
    /// See [`StructDef::build`].
    pub fn new(definition: &StructDef, value: impl Into<Value>) -> StructResult<Self> {
        definition.build(value)
    }

    pub(crate) const fn from_slots(definition: StructDef, slots: IndexMap<Symbol, Slot>) -> Self {
        Self { definition, slots }
    }

    /// Assemble a record from already validated slots.
    ///
    /// Used by code the `EvilStruct` derive generates, whose fields are typed
    /// and therefore already coerced. Slots missing from `values` are left
    /// unassigned.
    #[doc(hidden)]
    #[must_use]
    pub fn from_parts(definition: StructDef, values: Vec<(Symbol, Slot)>) -> Self {
        let mut slots: IndexMap<Symbol, Slot> = definition
            .list_of_attributes()
            .iter()
            .map(|storage| (storage.clone(), Slot::Unassigned))
            .collect();
        for (storage, slot) in values {
            if let Some(existing) = slots.get_mut(&storage) {
                *existing = slot;
            }
        }
        Self { definition, slots }
    }

    /// The definition this record was built from.
    #[must_use]
    pub const fn definition(&self) -> &StructDef {
        &self.definition
    }

    /// Returns `true` when the record was built from `definition`'s
    /// snapshot.
    #[must_use]
    pub fn is_instance_of(&self, definition: &StructDef) -> bool {
        self.definition.same_as(definition)
    }

    /// Slot stored under `key`, accepting string or symbolic spellings.
    #[must_use]
    pub fn slot(&self, key: impl AsRef<str>) -> Option<&Slot> {
        self.slots.get(key.as_ref())
    }

    /// Value stored under `key`; `None` for unknown or unassigned
    /// attributes.
    #[must_use]
    pub fn get(&self, key: impl AsRef<str>) -> Option<&Value> {
        self.slot(key).and_then(Slot::value)
    }

    /// Typed value stored under `storage`.
    ///
    /// # Errors
    ///
    /// Returns [`StructError::MissingAttribute`] when the attribute is
    /// unknown, or unassigned and `T` cannot represent that, and
    /// [`StructError::TypeCoercion`] when the stored value does not convert.
    pub fn extract<T: FromValue>(&self, storage: impl AsRef<str>) -> StructResult<T> {
        let key = storage.as_ref();
        match self.slot(key) {
            Some(Slot::Assigned(value)) => T::from_value(value).for_attribute(&Symbol::new(key), value),
            Some(Slot::Unassigned) => T::from_unassigned()
                .ok_or_else(|| StructError::missing_attribute(Symbol::new(key)).into()),
            None => Err(StructError::missing_attribute(Symbol::new(key)).into()),
        }
    }

    /// Assigned attributes in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&Symbol, &Value)> {
        self.definition
            .list_of_attributes()
            .iter()
            .filter_map(|storage| {
                let value = self.slots.get(storage)?.value()?;
                Some((storage, value))
            })
    }

    /// Hashify the record: a mapping of its assigned attributes, with nested
    /// values hashified too.
    #[must_use]
    pub fn to_h(&self) -> Mapping {
        self.iter()
            .map(|(storage, value)| (Key::Symbol(storage.clone()), hashify(value)))
            .collect()
    }

    /// Alias of [`Record::to_h`].
    #[must_use]
    pub fn to_hash(&self) -> Mapping {
        self.to_h()
    }

    /// Alias of [`Record::to_h`].
    #[must_use]
    pub fn dump(&self) -> Mapping {
        self.to_h()
    }

    /// Structural equality with anything that has a mapping form.
    ///
    /// Null, scalars, sequences and objects without a mapping capability are
    /// never equal to a record.
    #[must_use]
    pub fn equals(&self, other: &Value) -> bool {
        mapping_form(other).is_some_and(|mapping| self.to_h() == *mapping)
    }

    /// Shallow merge: `other`'s symbolized mapping overlaid on this record's
    /// hashified mapping, rebuilt through the same definition.
    ///
    /// # Errors
    ///
    /// Returns [`StructError::UnsupportedInput`] when `other` has no mapping
    /// form, and any construction error the merged mapping produces.
    pub fn merge(&self, other: impl Into<Value>) -> StructResult<Self> {
        let value = other.into();
        let overlay = symbolized_mapping(&value).ok_or_else(|| {
            StructError::unsupported_input_arc(&value, "merge requires a mapping-like value")
        })?;
        self.definition.build(merge::merge(self.to_h(), overlay))
    }

    /// Deep merge: see [`crate::merge::merge_deeply`]. The result is rebuilt
    /// through the same definition.
    ///
    /// # Errors
    ///
    /// Returns any construction error the merged value produces.
    pub fn merge_deeply(&self, other: impl Into<Value>) -> StructResult<Self> {
        let source = Value::Mapping(self.to_h());
        let merged = merge::merge_deeply(&source, &other.into());
        self.definition.build(merged)
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_struct(self.definition.name());
        for storage in self.definition.list_of_attributes() {
            match self.slots.get(storage) {
                Some(Slot::Assigned(value)) => out.field(storage.as_str(), value),
                _ => out.field(storage.as_str(), &format_args!("<unassigned>")),
            };
        }
        out.finish()
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.to_h() == other.to_h()
    }
}

impl PartialEq<Mapping> for Record {
    fn eq(&self, other: &Mapping) -> bool {
        self.to_h() == *other
    }
}

impl PartialEq<Value> for Record {
    fn eq(&self, other: &Value) -> bool {
        self.equals(other)
    }
}
