//! Statically-declared schema for record types and map keys.

use std::borrow::Cow;

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::case;
use crate::decoder::JsonDecoder;
use crate::encoder::JsonEncoder;
use crate::error::JsonError;
use crate::options::CasePolicy;

/// Declarative schema entry for one record field.
///
/// `#[derive(JsonRecord)]` emits one table per record type, in field
/// declaration order. A `rename` is the literal JSON key; `skip` removes
/// the field from both encode and decode.
#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor {
    /// Field identifier as written in the source.
    pub name: &'static str,
    /// Literal key override from `#[json(rename = "...")]`.
    pub rename: Option<&'static str>,
    /// Set by `#[json(skip)]`.
    pub skip: bool,
}

impl FieldDescriptor {
    /// Resolves the JSON key for this field under `policy`.
    ///
    /// An explicit rename always wins over policy-derived naming.
    pub fn json_name(&self, policy: CasePolicy) -> Cow<'static, str> {
        match self.rename {
            Some(name) => Cow::Borrowed(name),
            None => Cow::Owned(case::convert(self.name, policy)),
        }
    }
}

/// Record types with a derived field table.
///
/// `Default` supplies the zero-initialized instance the decoder fills in.
/// The indexed methods are the per-field accessors the codec dispatches
/// through; indices refer to positions in [`JsonRecord::FIELDS`].
pub trait JsonRecord: Default {
    /// Field table in declaration order, including skipped fields.
    const FIELDS: &'static [FieldDescriptor];

    /// Encodes field `index` of `self` onto the encoder.
    fn encode_field(&self, index: usize, encoder: &mut JsonEncoder) -> Result<(), JsonError>;

    /// Whether field `index` currently holds null.
    fn field_is_null(&self, index: usize) -> bool;

    /// Decodes field `index` in place from the decoder.
    fn decode_field(&mut self, index: usize, decoder: &mut JsonDecoder) -> Result<(), JsonError>;
}

/// Looks up the field whose resolved JSON key equals `key`.
///
/// Skipped fields never match; an unknown key resolves to `None`.
pub fn resolve_field<T: JsonRecord>(key: &str, policy: CasePolicy) -> Option<usize> {
    T::FIELDS
        .iter()
        .enumerate()
        .find_map(|(index, field)| (!field.skip && field.json_name(policy) == key).then_some(index))
}

/// Map key types.
///
/// Keys are emitted as JSON property names and read back from the
/// property-name text. `to_property_name` is fallible so that custom key
/// types can reject keys with no usable string form
/// ([`JsonError::KeyStringification`]); the built-in implementations are
/// total.
pub trait JsonKey: Sized {
    fn to_property_name(&self) -> Result<String, JsonError>;

    fn from_property_name(text: &str) -> Result<Self, JsonError>;
}

impl JsonKey for String {
    fn to_property_name(&self) -> Result<String, JsonError> {
        Ok(self.clone())
    }

    fn from_property_name(text: &str) -> Result<Self, JsonError> {
        Ok(text.to_string())
    }
}

macro_rules! impl_json_key {
    ($($ty:ty => $kind:literal),* $(,)?) => {$(
        impl JsonKey for $ty {
            fn to_property_name(&self) -> Result<String, JsonError> {
                Ok(self.to_string())
            }

            fn from_property_name(text: &str) -> Result<Self, JsonError> {
                text.parse().map_err(|_| JsonError::PrimitiveParse {
                    kind: $kind,
                    text: text.to_string(),
                })
            }
        }
    )*};
}

impl_json_key! {
    bool => "bool",
    i8 => "i8",
    i16 => "i16",
    i32 => "i32",
    i64 => "i64",
    i128 => "i128",
    isize => "isize",
    u8 => "u8",
    u16 => "u16",
    u32 => "u32",
    u64 => "u64",
    u128 => "u128",
    usize => "usize",
    Decimal => "decimal",
    Uuid => "uuid",
}
