//! Symbol tables threaded through a single file parse
//!
//! The proto grammar cannot classify a field's type token on syntax alone:
//! `optional Foo bar = 1;` is an enum field if `Foo` names an enum already
//! parsed, and a message reference otherwise. The parser therefore carries
//! one [`SymbolTable`] per file and registers every message and enum as soon
//! as its definition has been parsed. Lookups see only definitions that
//! textually precede the lookup site.
//!
//! Names are keyed fully qualified with dots (`Outer.Inner.Color`), matching
//! the source form of qualified references, which the lexer keeps as single
//! tokens.

use rustc_hash::{FxHashMap, FxHashSet};
use smol_str::SmolStr;

/// Build a dotted fully-qualified name from an enclosing scope and a local name
pub(crate) fn to_fq_name(outer: &str, name: &str) -> SmolStr {
    if outer.is_empty() {
        SmolStr::new(name)
    } else {
        SmolStr::new(format!("{outer}.{name}"))
    }
}

/// Per-file registry of parsed message and enum names
///
/// Created once per parse and passed by `&mut` into every nested
/// message/enum/group parse call. Never shared across files.
#[derive(Debug, Default)]
pub(crate) struct SymbolTable {
    message_names: FxHashSet<SmolStr>,
    enums: FxHashMap<SmolStr, FxHashSet<SmolStr>>,
}

impl SymbolTable {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Register a parsed message name, qualified by its enclosing scope.
    ///
    /// The name may be empty when the message header failed to parse; it is
    /// registered anyway so lookups and registration stay in lockstep with
    /// what the definition parser returned.
    pub(crate) fn register_message(&mut self, name: SmolStr) {
        tracing::trace!("[SYMBOLS] register message '{}'", name);
        self.message_names.insert(name);
    }

    /// Register a parsed enum with its constant names
    pub(crate) fn register_enum(&mut self, name: SmolStr, constants: FxHashSet<SmolStr>) {
        tracing::trace!(
            "[SYMBOLS] register enum '{}' with {} constants",
            name,
            constants.len()
        );
        self.enums.insert(name, constants);
    }

    /// Check if `name` resolves to an enum from inside `current` (the
    /// enclosing message's qualified name) within `namespace` (the file or
    /// outer-message scope).
    ///
    /// Tries the bare name, the current-message-qualified name, and the
    /// namespace-qualified name.
    pub(crate) fn is_enum_type(&self, current: &str, namespace: &str, name: &str) -> bool {
        self.enums.contains_key(name)
            || self.enums.contains_key(&to_fq_name(current, name))
            || self.enums.contains_key(&to_fq_name(namespace, name))
    }

    /// Look up the constant set for an enum type reference.
    ///
    /// Resolution prefers the current-message-qualified name, then the
    /// namespace-qualified name, then the bare name.
    pub(crate) fn enum_constants(
        &self,
        current: &str,
        namespace: &str,
        name: &str,
    ) -> Option<&FxHashSet<SmolStr>> {
        self.enums
            .get(&to_fq_name(current, name))
            .or_else(|| self.enums.get(&to_fq_name(namespace, name)))
            .or_else(|| self.enums.get(name))
    }

    /// Check if `name` resolves to a message already parsed, from inside
    /// `current` within `namespace`
    pub(crate) fn is_known_message(&self, current: &str, namespace: &str, name: &str) -> bool {
        self.message_names.contains(name)
            || self.message_names.contains(&to_fq_name(current, name))
            || self.message_names.contains(&to_fq_name(namespace, name))
    }
}
