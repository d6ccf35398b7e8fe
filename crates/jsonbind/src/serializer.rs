//! Top-level entry points.

use crate::decoder::{JsonDecode, JsonDecoder};
use crate::encoder::{JsonEncode, JsonEncoder};
use crate::error::JsonError;
use crate::options::JsonOptions;

/// Serializes `value` to JSON text under `options`.
pub fn serialize<T: JsonEncode + ?Sized>(
    value: &T,
    options: JsonOptions,
) -> Result<String, JsonError> {
    let mut encoder = JsonEncoder::new(options);
    encoder.encode(value)
}

/// Deserializes a `T` from JSON text under `options`.
///
/// Fails if the document's top-level shape does not match `T`. Tokens
/// trailing the first complete value are ignored.
pub fn deserialize<T: JsonDecode>(text: &str, options: JsonOptions) -> Result<T, JsonError> {
    let mut decoder = JsonDecoder::new(text, options)?;
    T::decode(&mut decoder)
}
