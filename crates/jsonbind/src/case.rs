//! Identifier-to-JSON-key case conversion.

use crate::options::CasePolicy;

/// Converts a source identifier into a JSON key under `policy`.
pub fn convert(original: &str, policy: CasePolicy) -> String {
    match policy {
        CasePolicy::CamelCase => camel_case(original),
        CasePolicy::SnakeCase => snake_case(original),
    }
}

// Assumes the identifier is already PascalCase; only the first character
// changes.
fn camel_case(original: &str) -> String {
    let mut chars = original.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharKind {
    Upper,
    Lower,
    Digit,
    Separator,
}

fn snake_case(original: &str) -> String {
    let chars: Vec<char> = original.chars().collect();
    let mut out = String::with_capacity(original.len() + 2);
    let mut prev: Option<CharKind> = None;
    for (index, &current) in chars.iter().enumerate() {
        if current == '_' {
            // Existing underscores are hard segment boundaries.
            out.push('_');
            prev = None;
            continue;
        }
        let kind = if current.is_uppercase() {
            CharKind::Upper
        } else if current.is_lowercase() {
            CharKind::Lower
        } else if current.is_ascii_digit() {
            CharKind::Digit
        } else {
            // Anything else acts as a soft separator and is dropped.
            if prev.is_some() {
                prev = Some(CharKind::Separator);
            }
            continue;
        };
        match kind {
            CharKind::Upper => {
                let starts_word = prev != Some(CharKind::Digit)
                    && prev.is_some()
                    && index + 1 < chars.len()
                    && chars[index + 1].is_lowercase();
                if prev == Some(CharKind::Separator) || prev == Some(CharKind::Lower) || starts_word
                {
                    out.push('_');
                }
                out.extend(current.to_lowercase());
            }
            CharKind::Lower | CharKind::Digit => {
                if prev == Some(CharKind::Separator) {
                    out.push('_');
                }
                out.push(current);
            }
            CharKind::Separator => unreachable!(),
        }
        prev = Some(kind);
    }
    out
}
