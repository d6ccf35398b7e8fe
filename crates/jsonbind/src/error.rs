//! Codec error type.

use thiserror::Error;

use crate::token::TokenKind;

/// Errors raised while encoding or decoding JSON.
///
/// Every failure aborts the whole `serialize`/`deserialize` call; there is
/// no recovery, retry or partial result.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JsonError {
    /// A token's structural kind does not match the target shape.
    #[error("expected {expected}, found {found:?} token")]
    ShapeMismatch {
        expected: &'static str,
        found: TokenKind,
    },
    /// A `null` literal was decoded into a type that cannot hold null.
    #[error("cannot decode null into non-nullable {0}")]
    UnexpectedNull(&'static str),
    /// The value has no JSON representation.
    #[error("unsupported primitive value: {0}")]
    UnsupportedType(&'static str),
    /// A literal failed the parsing rule of its target kind.
    #[error("invalid {kind} literal `{text}`")]
    PrimitiveParse { kind: &'static str, text: String },
    /// A map key did not render to a usable property name.
    #[error("map key does not stringify to a property name")]
    KeyStringification,
    /// The cursor ran past the end of the token sequence, or the tokenizer
    /// ran off the end of the input inside a quoted string.
    #[error("unexpected end of input at {0}")]
    OutOfBounds(usize),
}
