//! Error code definitions for parser diagnostics
//!
//! Error codes follow a naming convention: E{category}{number}
//! - E01xx: Lexical errors (invalid tokens)
//! - E02xx: Structural errors (braces, semicolons, delimiters)
//! - E03xx: Declaration errors (definitions, fields, rpcs)
//! - E04xx: Option and value errors
//! - E09xx: Generic/fallback errors

use std::fmt;

/// Error codes for parser diagnostics
///
/// Each error code represents a specific category of parse error,
/// enabling filtering, documentation, and IDE integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // E01xx: Lexical errors (invalid tokens)
    // =========================================================================
    /// Invalid or unexpected character in source
    E0101,
    /// Unterminated string literal
    E0102,
    /// Unterminated block comment
    E0103,

    // =========================================================================
    // E02xx: Structural errors (braces, semicolons, delimiters)
    // =========================================================================
    /// Missing semicolon
    E0201,
    /// Unclosed brace (expected `}`)
    E0202,
    /// Missing opening brace (expected `{`)
    E0203,
    /// Missing parenthesis
    E0204,
    /// Missing bracket
    E0205,
    /// Missing `=`
    E0206,
    /// Missing angle bracket in `message<Type>`
    E0207,
    /// Missing separator (`,` or terminating `;`)
    E0208,

    // =========================================================================
    // E03xx: Declaration errors (definitions, fields, rpcs)
    // =========================================================================
    /// Missing name for a definition, field, or constant
    E0301,
    /// Missing field modifier (`required`, `optional`, `repeated`)
    E0302,
    /// Missing or wrong keyword
    E0303,
    /// Unexpected token in a definition body
    E0304,
    /// Missing type in a field or rpc signature
    E0305,
    /// Missing property ID number
    E0306,
    /// Missing body (neither `{` nor `;`)
    E0307,
    /// Malformed rpc signature
    E0308,
    /// Invalid extensions bound
    E0309,

    // =========================================================================
    // E04xx: Option and value errors
    // =========================================================================
    /// Invalid option name
    E0401,
    /// Invalid option value
    E0402,
    /// Invalid default value
    E0403,
    /// Default value on a repeated field
    E0404,
    /// Unknown field option
    E0405,
    /// Invalid or missing literal value
    E0406,

    // =========================================================================
    // E09xx: Generic/fallback errors
    // =========================================================================
    /// Unexpected token in current context
    E0901,
    /// Expected a specific token
    E0902,
    /// Internal parser error
    E0999,
}

impl ErrorCode {
    /// Get the string representation of the error code (e.g., "E0201")
    pub fn as_str(&self) -> &'static str {
        match self {
            // Lexical
            Self::E0101 => "E0101",
            Self::E0102 => "E0102",
            Self::E0103 => "E0103",
            // Structural
            Self::E0201 => "E0201",
            Self::E0202 => "E0202",
            Self::E0203 => "E0203",
            Self::E0204 => "E0204",
            Self::E0205 => "E0205",
            Self::E0206 => "E0206",
            Self::E0207 => "E0207",
            Self::E0208 => "E0208",
            // Declaration
            Self::E0301 => "E0301",
            Self::E0302 => "E0302",
            Self::E0303 => "E0303",
            Self::E0304 => "E0304",
            Self::E0305 => "E0305",
            Self::E0306 => "E0306",
            Self::E0307 => "E0307",
            Self::E0308 => "E0308",
            Self::E0309 => "E0309",
            // Options/values
            Self::E0401 => "E0401",
            Self::E0402 => "E0402",
            Self::E0403 => "E0403",
            Self::E0404 => "E0404",
            Self::E0405 => "E0405",
            Self::E0406 => "E0406",
            // Generic
            Self::E0901 => "E0901",
            Self::E0902 => "E0902",
            Self::E0999 => "E0999",
        }
    }

    /// Get a short description of the error category
    pub fn category_description(&self) -> &'static str {
        match self {
            Self::E0101 | Self::E0102 | Self::E0103 => "lexical error",
            Self::E0201
            | Self::E0202
            | Self::E0203
            | Self::E0204
            | Self::E0205
            | Self::E0206
            | Self::E0207
            | Self::E0208 => "structural error",
            Self::E0301
            | Self::E0302
            | Self::E0303
            | Self::E0304
            | Self::E0305
            | Self::E0306
            | Self::E0307
            | Self::E0308
            | Self::E0309 => "declaration error",
            Self::E0401 | Self::E0402 | Self::E0403 | Self::E0404 | Self::E0405 | Self::E0406 => {
                "option error"
            }
            Self::E0901 | Self::E0902 | Self::E0999 => "syntax error",
        }
    }

    /// Get the default message template for this error code
    pub fn default_message(&self) -> &'static str {
        match self {
            // Lexical
            Self::E0101 => "invalid character",
            Self::E0102 => "unterminated string literal",
            Self::E0103 => "unterminated block comment",
            // Structural
            Self::E0201 => "expected ';'",
            Self::E0202 => "expected '}'",
            Self::E0203 => "expected '{'",
            Self::E0204 => "missing parenthesis",
            Self::E0205 => "missing bracket",
            Self::E0206 => "expected '='",
            Self::E0207 => "missing angle bracket",
            Self::E0208 => "expected ',' or ';'",
            // Declaration
            Self::E0301 => "missing name",
            Self::E0302 => "missing 'required', 'optional', or 'repeated'",
            Self::E0303 => "missing keyword",
            Self::E0304 => "unexpected token in definition body",
            Self::E0305 => "missing type",
            Self::E0306 => "expected property ID number",
            Self::E0307 => "missing body",
            Self::E0308 => "Malformed rpc statement",
            Self::E0309 => "invalid extensions bound",
            // Options/values
            Self::E0401 => "expected valid option name",
            Self::E0402 => "expected valid option value",
            Self::E0403 => "invalid default value",
            Self::E0404 => "repeated fields can't have defaults.",
            Self::E0405 => "Unknown field option",
            Self::E0406 => "invalid literal value",
            // Generic
            Self::E0901 => "unexpected token",
            Self::E0902 => "expected token",
            Self::E0999 => "internal parser error",
        }
    }

    /// Check if this is a structural error (delimiter-related)
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::E0201
                | Self::E0202
                | Self::E0203
                | Self::E0204
                | Self::E0205
                | Self::E0206
                | Self::E0207
                | Self::E0208
        )
    }

    /// Check if this is a recoverable error (parsing can continue)
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::E0999)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
