//! Pluggable field-option vocabularies
//!
//! Which bracketed field options exist (beyond `default` and the
//! parenthesized custom form) and which values they accept is not fixed by
//! the grammar. The parser is handed an ordered list of [`OptionProvider`]s
//! at construction and unions their answers, so deployments can extend the
//! vocabulary without touching the grammar.

use smol_str::SmolStr;

/// A source of recognized field-option names and their allowed values
pub trait OptionProvider {
    /// Allowed values for option `name`; empty when unknown to this provider
    fn valid_values(&self, name: &str) -> Vec<SmolStr>;

    /// Option names this provider recognizes
    fn recognized_names(&self) -> Vec<SmolStr>;

    /// Whether option `name` accepts a comma-separated list of values
    fn allows_multiple(&self, name: &str) -> bool {
        let _ = name;
        false
    }
}

const BOOLEAN_OPTIONS: &[&str] = &["weak", "deprecated", "lazy", "packed"];
const BOOLEAN_VALUES: &[&str] = &["true", "false"];
const CTYPE_VALUES: &[&str] = &["STRING", "CORD", "Cord", "STRING_PIECE", "proto2"];

/// The built-in option vocabulary: the boolean annotations and `ctype`
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultOptionProvider;

impl OptionProvider for DefaultOptionProvider {
    fn valid_values(&self, name: &str) -> Vec<SmolStr> {
        if BOOLEAN_OPTIONS.contains(&name) {
            BOOLEAN_VALUES.iter().map(|v| SmolStr::new(v)).collect()
        } else if name == "ctype" {
            CTYPE_VALUES.iter().map(|v| SmolStr::new(v)).collect()
        } else {
            Vec::new()
        }
    }

    fn recognized_names(&self) -> Vec<SmolStr> {
        BOOLEAN_OPTIONS
            .iter()
            .chain(std::iter::once(&"ctype"))
            .map(|v| SmolStr::new(v))
            .collect()
    }
}
