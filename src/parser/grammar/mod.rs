//! Grammar modules for the proto1/proto2 IDL
//!
//! Parsing logic organized by declaration family:
//! - `file` - top-level dispatch plus package/syntax/import statements
//! - `messages` - message, class, extend, group, and field declarations
//! - `enums` - enum definitions and their constants
//! - `options` - option statements, field options, default values
//! - `services` - service definitions and rpc declarations
//!
//! Shared low-level pieces (keyword elements, literals, statement
//! recovery) live here; everything drives the tree builder in `parser`.

pub(crate) mod enums;
pub(crate) mod file;
pub(crate) mod messages;
pub(crate) mod options;
pub(crate) mod services;

use super::errors::ErrorCode;
use super::keywords;
use super::parser::Parser;
use super::syntax_kind::SyntaxKind;

/// Tokens a broken statement resynchronizes on
pub(crate) const STATEMENT_RECOVERY: &[SyntaxKind] = &[
    SyntaxKind::L_BRACE,
    SyntaxKind::R_BRACE,
    SyntaxKind::SEMICOLON,
];

/// Consume the current token as a KEYWORD element
///
/// Any token whose text is in the keyword table qualifies; keywords are
/// contextual, so this is a text check, not a kind check. Returns the
/// keyword text, or `None` (with an error) if the token is not a keyword.
pub(crate) fn parse_next_token_as_keyword<'a>(p: &mut Parser<'a>) -> Option<&'a str> {
    let text = p.current_text();
    if keywords::is_keyword(text) {
        let m = p.mark();
        p.bump();
        m.complete(p, SyntaxKind::KEYWORD);
        Some(text)
    } else {
        p.error("Expected Keyword", ErrorCode::E0303);
        None
    }
}

/// Consume a specific keyword, or record `expected '<KEYWORD>'`
pub(crate) fn parse_keyword(p: &mut Parser<'_>, keyword: &str) -> bool {
    if !p.at_keyword(keyword) {
        p.error(
            format!("expected '{}'", keyword.to_ascii_uppercase()),
            ErrorCode::E0303,
        );
        return false;
    }
    parse_next_token_as_keyword(p);
    true
}

/// Consume a keyword if present; no error otherwise
pub(crate) fn parse_optional_keyword(p: &mut Parser<'_>, keyword: &str) -> bool {
    if p.at_keyword(keyword) {
        parse_next_token_as_keyword(p);
        return true;
    }
    false
}

/// Wrap the current token in a NAME element
///
/// Callers check the token kind first; this consumes unconditionally.
pub(crate) fn parse_name(p: &mut Parser<'_>) {
    let m = p.mark();
    p.bump();
    m.complete(p, SyntaxKind::NAME);
}

/// Consume the current token as `element` if it has kind `token`
///
/// Records `message` with `code` and consumes nothing otherwise.
pub(crate) fn parse_token_as_element(
    p: &mut Parser<'_>,
    token: SyntaxKind,
    element: SyntaxKind,
    message: &str,
    code: ErrorCode,
) -> bool {
    if p.at(token) {
        let m = p.mark();
        p.bump();
        m.complete(p, element);
        true
    } else {
        p.error(message, code);
        false
    }
}

/// True when the current token can start a literal value
///
/// Identifiers count only when they spell `true` or `false`.
pub(crate) fn at_literal(p: &Parser<'_>) -> bool {
    matches!(
        p.current_kind(),
        SyntaxKind::FLOAT_NUMBER
            | SyntaxKind::INT_NUMBER
            | SyntaxKind::HEX_NUMBER
            | SyntaxKind::STRING
    ) || p.at_keyword("true")
        || p.at_keyword("false")
}

/// Consume the current token as a literal node
///
/// `true`/`false` become BOOLEAN_LITERAL wrapping a KEYWORD element; the
/// numeric and string kinds get their matching literal node. Anything
/// else records an error and consumes nothing.
pub(crate) fn parse_literal(p: &mut Parser<'_>) -> bool {
    if p.at_keyword("true") || p.at_keyword("false") {
        let m = p.mark();
        parse_next_token_as_keyword(p);
        m.complete(p, SyntaxKind::BOOLEAN_LITERAL);
        return true;
    }
    let kind = match p.current_kind() {
        SyntaxKind::INT_NUMBER => SyntaxKind::INTEGER_LITERAL,
        SyntaxKind::HEX_NUMBER => SyntaxKind::HEX_LITERAL,
        SyntaxKind::FLOAT_NUMBER => SyntaxKind::FLOAT_LITERAL,
        SyntaxKind::STRING => SyntaxKind::STRING_LITERAL,
        _ => {
            p.error("invalid literal value", ErrorCode::E0406);
            return false;
        }
    };
    let m = p.mark();
    p.bump();
    m.complete(p, kind);
    true
}

/// Consume a terminating `;`, or sweep forward looking for one
///
/// With `required` the missing semicolon is an error (`expected ';'`)
/// and nothing is consumed. Without it, tokens up to the next `;` or `}`
/// are skipped into an error node and a trailing `;` is eaten.
pub(crate) fn parse_up_to_semicolon(p: &mut Parser<'_>, required: bool) -> bool {
    if p.at(SyntaxKind::SEMICOLON) {
        p.bump();
        return true;
    }
    if required {
        p.error("expected ';'", ErrorCode::E0201);
        return false;
    }
    p.skip_until(&[SyntaxKind::SEMICOLON, SyntaxKind::R_BRACE]);
    p.eat(SyntaxKind::SEMICOLON);
    true
}
