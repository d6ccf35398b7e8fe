//! Runtime-configurable JSON codec without per-type mapping code.
//!
//! Record types register their field tables once through
//! `#[derive(JsonRecord)]`; everything else about the mapping — naming
//! policy, pretty-printing, null handling — is decided per call through
//! [`JsonOptions`]. Field attributes `#[json(rename = "...")]` and
//! `#[json(skip)]` override or remove individual fields.
//!
//! ```
//! use jsonbind::{JsonOptions, JsonRecord};
//!
//! #[derive(Debug, Default, PartialEq, JsonRecord)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! let options = JsonOptions::default();
//! let text = jsonbind::serialize(&Point { x: 1, y: 2 }, options)?;
//! assert_eq!(text, r#"{"x":1,"y":2}"#);
//!
//! let back: Point = jsonbind::deserialize(&text, options)?;
//! assert_eq!(back, Point { x: 1, y: 2 });
//! # Ok::<(), jsonbind::JsonError>(())
//! ```

pub mod case;

mod decoder;
mod encoder;
mod error;
mod options;
mod schema;
mod serializer;
mod token;
mod tokenizer;
mod writer;

pub use decoder::{JsonDecode, JsonDecoder};
pub use encoder::{JsonEncode, JsonEncoder};
pub use error::JsonError;
pub use options::{CasePolicy, JsonOptions};
pub use schema::{resolve_field, FieldDescriptor, JsonKey, JsonRecord};
pub use serializer::{deserialize, serialize};
pub use token::{JsonToken, TokenKind};
pub use tokenizer::tokenize;
pub use writer::JsonWriter;

/// Derive macro generating the [`JsonRecord`] field table plus the
/// [`JsonEncode`]/[`JsonDecode`] impls for a named-field struct.
pub use jsonbind_derive::JsonRecord;

// Timestamps use one fixed, locale-invariant pattern on both sides.
pub(crate) const NAIVE_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
