//! Enum definitions
//!
//! `enum ::= "enum" identifier "{" ( option | enumField | ";" )* "}"`
//! `enumField ::= identifier "=" (intLit | hexLit) fieldOptionList? (";" | ",")`
//!
//! Parsing hands the enum's qualified name and constant-name set back to
//! the caller, which registers them for later field-type disambiguation.
//! A `None` result means the name itself was unparseable and nothing may
//! be registered.

use rustc_hash::FxHashSet;
use smol_str::SmolStr;

use super::super::errors::ErrorCode;
use super::super::parser::Parser;
use super::super::symbols::to_fq_name;
use super::super::syntax_kind::SyntaxKind;
use super::{STATEMENT_RECOVERY, options, parse_keyword, parse_literal, parse_name};

/// Parse one `enum` definition appearing under `namespace`
pub(crate) fn parse_enum(
    p: &mut Parser<'_>,
    namespace: &str,
) -> Option<(SmolStr, FxHashSet<SmolStr>)> {
    let m = p.mark();
    parse_keyword(p, "enum");

    let mut constants: FxHashSet<SmolStr> = FxHashSet::default();
    let mut enum_name: Option<SmolStr> = None;

    if !p.at(SyntaxKind::IDENT) {
        p.error("expected enum name", ErrorCode::E0301);
        p.skip_until(STATEMENT_RECOVERY);
    } else {
        enum_name = Some(to_fq_name(namespace, p.current_text()));
        parse_name(p);
    }

    let open_brace = p.at(SyntaxKind::L_BRACE).then(|| p.current_range());
    p.expect(SyntaxKind::L_BRACE, "{");

    let body = p.mark();
    loop {
        if p.at_eof() {
            p.error_unclosed(open_brace);
            break;
        }
        if p.at(SyntaxKind::R_BRACE) {
            p.bump();
            p.eat(SyntaxKind::SEMICOLON);
            break;
        }
        if p.at(SyntaxKind::SEMICOLON) {
            p.bump();
            continue;
        }
        if p.at_keyword("option") {
            if !options::parse_option(p, SyntaxKind::OPTION) {
                break;
            }
            continue;
        }
        match parse_enum_constant(p) {
            Some(name) => {
                constants.insert(name);
            }
            None => break,
        }
    }
    body.complete(p, SyntaxKind::ENUM_BODY);
    m.complete(p, SyntaxKind::ENUM_DEFINITION);

    let name = enum_name?;
    tracing::trace!("[ENUMS] '{}' declares {} constants", name, constants.len());
    Some((name, constants))
}

/// `enumField ::= identifier "=" constant fieldOptionList? (";" | ",")`
///
/// Returns the constant's name, or `None` when the constant is broken
/// badly enough that the enclosing body loop must stop.
fn parse_enum_constant(p: &mut Parser<'_>) -> Option<SmolStr> {
    let m = p.mark();

    if !p.at(SyntaxKind::IDENT) {
        p.error("expected enum constant name", ErrorCode::E0301);
        m.abandon();
        return None;
    }
    let name = SmolStr::new(p.current_text());
    parse_name(p);

    if !p.expect(SyntaxKind::EQ, "=") {
        p.error("Expected '='", ErrorCode::E0206);
    }

    if !p.at(SyntaxKind::INT_NUMBER) && !p.at(SyntaxKind::HEX_NUMBER) {
        p.error("expected integer or hex constant", ErrorCode::E0406);
        m.abandon();
        return None;
    }
    let value = p.mark();
    parse_literal(p);
    value.complete(p, SyntaxKind::ENUM_VALUE);

    if p.at(SyntaxKind::L_BRACKET) {
        options::parse_field_options(p, "", None);
    }

    if !p.at(SyntaxKind::SEMICOLON) && !p.at(SyntaxKind::COMMA) {
        p.error("expected ';' or ','", ErrorCode::E0208);
    } else {
        p.bump();
    }
    m.complete(p, SyntaxKind::ENUM_CONSTANT);
    Some(name)
}
