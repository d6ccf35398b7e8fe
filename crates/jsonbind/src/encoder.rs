//! Shape-dispatched JSON encoder.

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use indexmap::IndexMap;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::JsonError;
use crate::options::JsonOptions;
use crate::schema::{JsonKey, JsonRecord};
use crate::writer::JsonWriter;
use crate::NAIVE_DATETIME_FORMAT;

/// Values with a JSON form.
///
/// The shape of a value — primitive, record, sequence or mapping — is fixed
/// by the implementing type, never probed at runtime.
pub trait JsonEncode {
    fn encode(&self, encoder: &mut JsonEncoder) -> Result<(), JsonError>;

    /// Whether this value is JSON `null`. Only the `Option` wrapper is
    /// nullable; everything else reports `false`.
    fn is_null(&self) -> bool {
        false
    }
}

/// Drives a [`JsonWriter`] over a value graph.
pub struct JsonEncoder {
    pub writer: JsonWriter,
    options: JsonOptions,
}

impl JsonEncoder {
    pub fn new(options: JsonOptions) -> Self {
        Self {
            writer: JsonWriter::new(options),
            options,
        }
    }

    pub fn options(&self) -> JsonOptions {
        self.options
    }

    /// Encodes `value` and returns the JSON text.
    pub fn encode<T: JsonEncode + ?Sized>(&mut self, value: &T) -> Result<String, JsonError> {
        self.writer.reset();
        value.encode(self)?;
        Ok(self.writer.flush())
    }

    /// Encodes a record through its field table, in declaration order.
    ///
    /// Skipped fields are dropped; null-valued fields are dropped entirely
    /// when `ignore_null_values` is set.
    pub fn encode_record<T: JsonRecord>(&mut self, value: &T) -> Result<(), JsonError> {
        self.writer.start_object();
        let mut first = true;
        for (index, field) in T::FIELDS.iter().enumerate() {
            if field.skip {
                continue;
            }
            if self.options.ignore_null_values && value.field_is_null(index) {
                continue;
            }
            if !first {
                self.writer.comma();
            }
            let name = field.json_name(self.options.case_policy);
            self.writer.property_name(&name);
            value.encode_field(index, self)?;
            first = false;
        }
        self.writer.end_object();
        Ok(())
    }
}

impl<T: JsonEncode> JsonEncode for Option<T> {
    fn encode(&self, encoder: &mut JsonEncoder) -> Result<(), JsonError> {
        match self {
            Some(value) => value.encode(encoder),
            None => {
                encoder.writer.null();
                Ok(())
            }
        }
    }

    fn is_null(&self) -> bool {
        self.is_none()
    }
}

impl JsonEncode for str {
    fn encode(&self, encoder: &mut JsonEncoder) -> Result<(), JsonError> {
        encoder.writer.quoted(self);
        Ok(())
    }
}

impl JsonEncode for String {
    fn encode(&self, encoder: &mut JsonEncoder) -> Result<(), JsonError> {
        encoder.writer.quoted(self);
        Ok(())
    }
}

macro_rules! impl_encode_raw {
    ($($ty:ty),* $(,)?) => {$(
        impl JsonEncode for $ty {
            fn encode(&self, encoder: &mut JsonEncoder) -> Result<(), JsonError> {
                encoder.writer.raw(self);
                Ok(())
            }
        }
    )*};
}

impl_encode_raw! {
    bool,
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    Decimal, Uuid,
}

macro_rules! impl_encode_float {
    ($($ty:ty),* $(,)?) => {$(
        impl JsonEncode for $ty {
            fn encode(&self, encoder: &mut JsonEncoder) -> Result<(), JsonError> {
                if !self.is_finite() {
                    // JSON has no NaN or infinity literal.
                    return Err(JsonError::UnsupportedType("non-finite float"));
                }
                encoder.writer.raw(self);
                Ok(())
            }
        }
    )*};
}

impl_encode_float!(f32, f64);

impl JsonEncode for NaiveDateTime {
    fn encode(&self, encoder: &mut JsonEncoder) -> Result<(), JsonError> {
        encoder.writer.quoted(self.format(NAIVE_DATETIME_FORMAT));
        Ok(())
    }
}

impl JsonEncode for DateTime<FixedOffset> {
    fn encode(&self, encoder: &mut JsonEncoder) -> Result<(), JsonError> {
        encoder.writer.quoted(self.to_rfc3339());
        Ok(())
    }
}

impl<T: JsonEncode> JsonEncode for [T] {
    fn encode(&self, encoder: &mut JsonEncoder) -> Result<(), JsonError> {
        encoder.writer.start_array();
        let mut first = true;
        for item in self {
            if !first {
                encoder.writer.comma();
            }
            item.encode(encoder)?;
            first = false;
        }
        encoder.writer.end_array();
        Ok(())
    }
}

impl<T: JsonEncode> JsonEncode for Vec<T> {
    fn encode(&self, encoder: &mut JsonEncoder) -> Result<(), JsonError> {
        self.as_slice().encode(encoder)
    }
}

impl<K: JsonKey, V: JsonEncode> JsonEncode for IndexMap<K, V> {
    fn encode(&self, encoder: &mut JsonEncoder) -> Result<(), JsonError> {
        encoder.writer.start_object();
        let mut first = true;
        for (key, value) in self {
            // Stringify before emitting the separator so a bad key fails
            // without leaving a dangling comma.
            let name = key.to_property_name()?;
            if !first {
                encoder.writer.comma();
            }
            encoder.writer.property_name(&name);
            value.encode(encoder)?;
            first = false;
        }
        encoder.writer.end_object();
        Ok(())
    }
}
