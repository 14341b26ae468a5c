//! Contextual keyword tables for the protobuf IDL
//!
//! proto1/proto2 keywords are not reserved: any keyword may also appear as
//! an identifier (`optional string string = 1;`). The lexer therefore emits
//! keywords as plain `IDENT` tokens and the parser matches them by text
//! using the tables below.

/// Every keyword the grammar recognizes somewhere
pub const KEYWORDS: &[&str] = &[
    "service",
    "option",
    "enum",
    "rpc",
    "returns",
    "message",
    "required",
    "optional",
    "repeated",
    "default",
    "group",
    "bool",
    "boolean",
    "int32",
    "int64",
    "uint32",
    "uint64",
    "fixed32",
    "fixed64",
    "sfixed32",
    "sint32",
    "sint64",
    "sfixed64",
    "float",
    "bytes",
    "string",
    "double",
    "true",
    "false",
    "parsed",
    "package",
    "class",
    "syntax",
    "import",
    "extend",
    "python",
    "c++header",
    "java",
    "extensions",
    "to",
    "max",
    "deprecated",
    "packed",
    "ctype",
    "jtype",
    "weak",
    "dplopts",
    "lazy",
];

/// Keywords naming primitive field types
pub const TYPE_KEYWORDS: &[&str] = &[
    "bool", "boolean", "int32", "int64", "uint32", "uint64", "fixed32", "fixed64", "sfixed32",
    "sfixed64", "bytes", "string", "float", "double", "sint32", "sint64",
];

/// Field modifiers, mandatory on every proto1/proto2 field
pub const MODIFIER_KEYWORDS: &[&str] = &["required", "optional", "repeated"];

/// Check if text is any recognized keyword
pub fn is_keyword(text: &str) -> bool {
    KEYWORDS.contains(&text)
}

/// Check if text names a primitive field type
pub fn is_type_keyword(text: &str) -> bool {
    TYPE_KEYWORDS.contains(&text)
}

/// Check if text is a field modifier
pub fn is_modifier(text: &str) -> bool {
    MODIFIER_KEYWORDS.contains(&text)
}

/// Check if text is a boolean literal keyword
pub fn is_boolean_literal(text: &str) -> bool {
    text == "true" || text == "false"
}
