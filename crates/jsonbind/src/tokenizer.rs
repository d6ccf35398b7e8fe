//! Hand-written JSON tokenizer.

use crate::error::JsonError;
use crate::token::{JsonToken, TokenKind};

/// Splits raw JSON text into a flat token sequence.
///
/// Single left-to-right scan with one character of lookbehind for quote
/// escapes (`\"` does not terminate a string). Only space and newline act as
/// separators. A pending literal flushes as a [`TokenKind::Value`] on a
/// separator, comma or closing bracket, and as a
/// [`TokenKind::PropertyName`] on `:`.
///
/// Bracket balance is not checked here; an unbalanced document surfaces as a
/// decode error. Number, boolean and `null` literals are not validated
/// either — they stay opaque until a target type interprets them.
pub fn tokenize(json: &str) -> Result<Vec<JsonToken>, JsonError> {
    let chars: Vec<char> = json.chars().collect();
    let mut tokens = Vec::new();
    let mut value = String::new();
    let mut pos = 0;
    while pos < chars.len() {
        match chars[pos] {
            ' ' | '\n' => flush_value(&mut value, &mut tokens),
            '"' => {
                pos += 1;
                loop {
                    if pos >= chars.len() {
                        // Unterminated string.
                        return Err(JsonError::OutOfBounds(pos));
                    }
                    if chars[pos] == '"' && chars[pos - 1] != '\\' {
                        break;
                    }
                    value.push(chars[pos]);
                    pos += 1;
                }
            }
            ':' => {
                tokens.push(JsonToken::new(
                    TokenKind::PropertyName,
                    value.trim_matches('"'),
                ));
                value.clear();
            }
            '{' => tokens.push(JsonToken::new(TokenKind::StartObject, "{")),
            '}' => {
                flush_value(&mut value, &mut tokens);
                tokens.push(JsonToken::new(TokenKind::EndObject, "}"));
            }
            '[' => tokens.push(JsonToken::new(TokenKind::StartArray, "[")),
            ']' => {
                flush_value(&mut value, &mut tokens);
                tokens.push(JsonToken::new(TokenKind::EndArray, "]"));
            }
            ',' => flush_value(&mut value, &mut tokens),
            other => value.push(other),
        }
        pos += 1;
    }
    if !value.is_empty() {
        tokens.push(JsonToken::new(TokenKind::Value, value));
    }
    Ok(tokens)
}

fn flush_value(value: &mut String, tokens: &mut Vec<JsonToken>) {
    if !value.is_empty() {
        tokens.push(JsonToken::new(TokenKind::Value, value.trim_matches('"')));
        value.clear();
    }
}
