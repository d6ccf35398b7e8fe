//! Codec configuration.

/// Naming convention applied to field names that carry no explicit rename.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CasePolicy {
    #[default]
    CamelCase,
    SnakeCase,
}

/// Immutable configuration consumed by the encoder, decoder and writer.
///
/// Cheap to copy; sharing a value across calls is always safe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonOptions {
    pub case_policy: CasePolicy,
    pub pretty_print: bool,
    pub indent_size: usize,
    pub ignore_null_values: bool,
}

impl Default for JsonOptions {
    fn default() -> Self {
        Self {
            case_policy: CasePolicy::CamelCase,
            pretty_print: false,
            indent_size: 4,
            ignore_null_values: false,
        }
    }
}

impl JsonOptions {
    pub fn with_case_policy(mut self, case_policy: CasePolicy) -> Self {
        self.case_policy = case_policy;
        self
    }

    pub fn with_pretty_print(mut self, pretty_print: bool) -> Self {
        self.pretty_print = pretty_print;
        self
    }

    pub fn with_indent_size(mut self, indent_size: usize) -> Self {
        self.indent_size = indent_size;
        self
    }

    pub fn with_ignore_null_values(mut self, ignore_null_values: bool) -> Self {
        self.ignore_null_values = ignore_null_values;
        self
    }
}
