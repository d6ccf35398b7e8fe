//! Type-directed JSON decoder.

use std::hash::Hash;

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use indexmap::IndexMap;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::JsonError;
use crate::options::JsonOptions;
use crate::schema::{self, JsonKey, JsonRecord};
use crate::token::{JsonToken, TokenKind};
use crate::tokenizer::tokenize;
use crate::NAIVE_DATETIME_FORMAT;

/// Types that can be rebuilt from a token sequence.
pub trait JsonDecode: Sized {
    fn decode(decoder: &mut JsonDecoder) -> Result<Self, JsonError>;
}

/// Token-sequence reader.
///
/// Holds the materialized token sequence and a single cursor; there is no
/// backtracking. Decode methods leave the cursor ON the last token of the
/// value they consumed — the enclosing loop advances past it.
pub struct JsonDecoder {
    tokens: Vec<JsonToken>,
    position: usize,
    options: JsonOptions,
}

impl JsonDecoder {
    /// Tokenizes `text` eagerly and positions the cursor at the start.
    pub fn new(text: &str, options: JsonOptions) -> Result<Self, JsonError> {
        Ok(Self {
            tokens: tokenize(text)?,
            position: 0,
            options,
        })
    }

    pub fn options(&self) -> JsonOptions {
        self.options
    }

    /// Current token; running past the end of the sequence is a hard error.
    pub fn current(&self) -> Result<&JsonToken, JsonError> {
        self.tokens
            .get(self.position)
            .ok_or(JsonError::OutOfBounds(self.position))
    }

    pub fn advance(&mut self) {
        self.position += 1;
    }

    /// Fails with a shape mismatch unless the current token has `kind`.
    pub fn expect(&self, kind: TokenKind, expected: &'static str) -> Result<(), JsonError> {
        let found = self.current()?.kind;
        if found != kind {
            return Err(JsonError::ShapeMismatch { expected, found });
        }
        Ok(())
    }

    /// Literal text of the current token (`Value` or `PropertyName`).
    pub fn literal(&self, expected: &'static str) -> Result<&str, JsonError> {
        let token = self.current()?;
        match token.kind {
            TokenKind::Value | TokenKind::PropertyName => Ok(&token.text),
            found => Err(JsonError::ShapeMismatch { expected, found }),
        }
    }

    /// Literal text of the current token, rejecting the `null` literal.
    pub fn primitive(&self, target: &'static str) -> Result<&str, JsonError> {
        let text = self.literal(target)?;
        if text == "null" {
            return Err(JsonError::UnexpectedNull(target));
        }
        Ok(text)
    }

    /// Advances past one complete value without interpreting it, leaving
    /// the cursor on the value's last token.
    pub fn skip_value(&mut self) -> Result<(), JsonError> {
        let mut depth = 0usize;
        loop {
            let kind = self.current()?.kind;
            match kind {
                TokenKind::StartObject | TokenKind::StartArray => depth += 1,
                TokenKind::EndObject | TokenKind::EndArray => {
                    if depth <= 1 {
                        // A closing bracket where a value should begin.
                        if depth == 0 {
                            return Err(JsonError::ShapeMismatch {
                                expected: "value",
                                found: kind,
                            });
                        }
                        return Ok(());
                    }
                    depth -= 1;
                }
                TokenKind::PropertyName | TokenKind::Value => {
                    if depth == 0 {
                        return Ok(());
                    }
                }
            }
            self.advance();
        }
    }

    /// Decodes a record body through its field table.
    ///
    /// Starts from a zero-initialized instance; unknown keys are skipped
    /// without error, and skipped fields are treated as unknown.
    pub fn decode_record<T: JsonRecord>(&mut self) -> Result<T, JsonError> {
        self.expect(TokenKind::StartObject, "object")?;
        let mut record = T::default();
        self.advance();
        loop {
            let token = self.current()?;
            if token.kind == TokenKind::EndObject {
                break;
            }
            let key = token.text.clone();
            self.advance();
            match schema::resolve_field::<T>(&key, self.options.case_policy) {
                Some(index) => record.decode_field(index, self)?,
                None => self.skip_value()?,
            }
            self.advance();
        }
        Ok(record)
    }
}

impl<T: JsonDecode> JsonDecode for Option<T> {
    fn decode(decoder: &mut JsonDecoder) -> Result<Self, JsonError> {
        let token = decoder.current()?;
        let is_literal = matches!(token.kind, TokenKind::Value | TokenKind::PropertyName);
        if is_literal && token.text == "null" {
            return Ok(None);
        }
        T::decode(decoder).map(Some)
    }
}

impl JsonDecode for String {
    fn decode(decoder: &mut JsonDecoder) -> Result<Self, JsonError> {
        let text = decoder.primitive("string")?;
        Ok(text.trim_matches('"').to_string())
    }
}

macro_rules! impl_decode_from_str {
    ($($ty:ty => $kind:literal),* $(,)?) => {$(
        impl JsonDecode for $ty {
            fn decode(decoder: &mut JsonDecoder) -> Result<Self, JsonError> {
                let text = decoder.primitive($kind)?;
                text.parse().map_err(|_| JsonError::PrimitiveParse {
                    kind: $kind,
                    text: text.to_string(),
                })
            }
        }
    )*};
}

impl_decode_from_str! {
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
    f32 => "f32",
    f64 => "f64",
    Decimal => "decimal",
    Uuid => "uuid",
}

impl JsonDecode for NaiveDateTime {
    fn decode(decoder: &mut JsonDecoder) -> Result<Self, JsonError> {
        let text = decoder.primitive("datetime")?;
        NaiveDateTime::parse_from_str(text, NAIVE_DATETIME_FORMAT).map_err(|_| {
            JsonError::PrimitiveParse {
                kind: "datetime",
                text: text.to_string(),
            }
        })
    }
}

impl JsonDecode for DateTime<FixedOffset> {
    fn decode(decoder: &mut JsonDecoder) -> Result<Self, JsonError> {
        let text = decoder.primitive("datetime with offset")?;
        DateTime::parse_from_rfc3339(text).map_err(|_| JsonError::PrimitiveParse {
            kind: "datetime with offset",
            text: text.to_string(),
        })
    }
}

impl<T: JsonDecode> JsonDecode for Vec<T> {
    fn decode(decoder: &mut JsonDecoder) -> Result<Self, JsonError> {
        decoder.expect(TokenKind::StartArray, "array")?;
        decoder.advance();
        let mut items = Vec::new();
        while decoder.current()?.kind != TokenKind::EndArray {
            items.push(T::decode(decoder)?);
            decoder.advance();
        }
        Ok(items)
    }
}

impl<K, V> JsonDecode for IndexMap<K, V>
where
    K: JsonKey + Hash + Eq,
    V: JsonDecode,
{
    fn decode(decoder: &mut JsonDecoder) -> Result<Self, JsonError> {
        decoder.expect(TokenKind::StartObject, "object")?;
        decoder.advance();
        let mut map = IndexMap::new();
        while decoder.current()?.kind != TokenKind::EndObject {
            let key_text = decoder.literal("map key")?.to_string();
            let key = K::from_property_name(&key_text)?;
            decoder.advance();
            let value = V::decode(decoder)?;
            decoder.advance();
            map.insert(key, value);
        }
        Ok(map)
    }
}
