//! Low-level JSON text emission.

use std::fmt::{Display, Write as _};

use crate::options::JsonOptions;

/// Append-only JSON text buffer with indentation state.
///
/// The writer knows nothing about shapes or field tables; the encoder
/// drives it through the structural methods below. In compact mode no
/// whitespace is emitted at all; in pretty mode brackets open a new
/// indented line and property names are padded with
/// `indent_size × level` spaces. Array elements are never padded.
#[derive(Debug)]
pub struct JsonWriter {
    options: JsonOptions,
    out: String,
    indent_level: usize,
}

impl JsonWriter {
    pub fn new(options: JsonOptions) -> Self {
        Self {
            options,
            out: String::new(),
            indent_level: 0,
        }
    }

    /// Appends a primitive rendered through its invariant `Display` form,
    /// without quotes.
    pub fn raw(&mut self, value: impl Display) {
        let _ = write!(self.out, "{value}");
    }

    /// Appends a double-quoted value.
    pub fn quoted(&mut self, value: impl Display) {
        let _ = write!(self.out, "\"{value}\"");
    }

    pub fn null(&mut self) {
        self.out.push_str("null");
    }

    pub fn comma(&mut self) {
        self.out.push(',');
        if self.options.pretty_print {
            self.out.push('\n');
        }
    }

    pub fn property_name(&mut self, name: &str) {
        if self.options.pretty_print {
            self.pad();
            let _ = write!(self.out, "\"{name}\": ");
        } else {
            let _ = write!(self.out, "\"{name}\":");
        }
    }

    pub fn start_object(&mut self) {
        self.open('{');
    }

    pub fn end_object(&mut self) {
        self.close('}');
    }

    pub fn start_array(&mut self) {
        self.open('[');
    }

    pub fn end_array(&mut self) {
        self.close(']');
    }

    /// Returns the accumulated text, leaving the buffer empty.
    pub fn flush(&mut self) -> String {
        std::mem::take(&mut self.out)
    }

    pub fn reset(&mut self) {
        self.out.clear();
        self.indent_level = 0;
    }

    fn open(&mut self, bracket: char) {
        self.out.push(bracket);
        if self.options.pretty_print {
            self.out.push('\n');
            self.indent_level += 1;
        }
    }

    fn close(&mut self, bracket: char) {
        if self.options.pretty_print {
            self.indent_level -= 1;
            self.out.push('\n');
            self.pad();
        }
        self.out.push(bracket);
    }

    fn pad(&mut self) {
        for _ in 0..self.options.indent_size * self.indent_level {
            self.out.push(' ');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_object() {
        let mut writer = JsonWriter::new(JsonOptions::default());
        writer.start_object();
        writer.property_name("a");
        writer.raw(5);
        writer.comma();
        writer.property_name("b");
        writer.quoted("x");
        writer.end_object();
        assert_eq!(writer.flush(), r#"{"a":5,"b":"x"}"#);
    }

    #[test]
    fn pretty_object_indents_property_names() {
        let options = JsonOptions::default().with_pretty_print(true);
        let mut writer = JsonWriter::new(options);
        writer.start_object();
        writer.property_name("a");
        writer.raw(5);
        writer.end_object();
        assert_eq!(writer.flush(), "{\n    \"a\": 5\n}");
    }

    #[test]
    fn pretty_array_elements_are_not_padded() {
        let options = JsonOptions::default().with_pretty_print(true);
        let mut writer = JsonWriter::new(options);
        writer.start_array();
        writer.raw(1);
        writer.comma();
        writer.raw(2);
        writer.end_array();
        assert_eq!(writer.flush(), "[\n1,\n2\n]");
    }

    #[test]
    fn indent_size_is_configurable() {
        let options = JsonOptions::default()
            .with_pretty_print(true)
            .with_indent_size(2);
        let mut writer = JsonWriter::new(options);
        writer.start_object();
        writer.property_name("k");
        writer.null();
        writer.end_object();
        assert_eq!(writer.flush(), "{\n  \"k\": null\n}");
    }

    #[test]
    fn flush_empties_the_buffer() {
        let mut writer = JsonWriter::new(JsonOptions::default());
        writer.null();
        assert_eq!(writer.flush(), "null");
        assert_eq!(writer.flush(), "");
    }
}
