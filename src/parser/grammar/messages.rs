//! Message, extend and group definitions
//!
//! The recursive heart of the grammar. Bodies nest messages, enums,
//! groups and extends inside each another, and a field's type is a bare
//! identifier resolved against the symbol tables accumulated so far:
//! primitive keyword first, then declared enum, then the optimistic
//! message-reference fallback. Only declarations parsed before the field
//! are visible, so resolution is declaration-order sensitive.
//!
//! Namespaces thread through every nested call as plain parameters:
//! `namespace` is the scope the current definition appears in, `current`
//! the qualified name of the body being parsed. A nested declaration
//! therefore registers under `Outer.Inner`.

use rustc_hash::FxHashSet;
use smol_str::SmolStr;

use super::super::errors::ErrorCode;
use super::super::keywords;
use super::super::parser::Parser;
use super::super::symbols::{SymbolTable, to_fq_name};
use super::super::syntax_kind::SyntaxKind;
use super::{
    STATEMENT_RECOVERY, enums, options, parse_keyword, parse_literal, parse_name,
    parse_next_token_as_keyword, parse_optional_keyword, parse_up_to_semicolon,
};

/// Tokens a broken group header resynchronizes on
const GROUP_RECOVERY: &[SyntaxKind] = &[
    SyntaxKind::R_BRACE,
    SyntaxKind::SEMICOLON,
    SyntaxKind::L_BRACE,
    SyntaxKind::L_BRACKET,
];

/// Parse a `("parsed")? ("message"|"class") identifier body` definition
///
/// Returns the message's qualified name, empty when the header was too
/// broken to name it. The caller registers the name either way.
pub(crate) fn parse_message_definition(
    p: &mut Parser<'_>,
    symbols: &mut SymbolTable,
    namespace: &str,
) -> SmolStr {
    let m = p.mark();
    let mut msg_name = SmolStr::default();

    parse_optional_keyword(p, "parsed");
    let mut broken = false;
    if !p.at_keyword("message") && !p.at_keyword("class") {
        p.error("expected 'MESSAGE' or 'CLASS' or ' keyword", ErrorCode::E0303);
        broken = true;
    } else {
        parse_next_token_as_keyword(p);
    }

    if !broken {
        if !p.at(SyntaxKind::IDENT) {
            p.error("expected message name", ErrorCode::E0301);
            broken = true;
        } else {
            msg_name = to_fq_name(namespace, p.current_text());
            parse_name(p);
        }
    }

    if broken {
        p.skip_until(STATEMENT_RECOVERY);
    }

    if p.at(SyntaxKind::L_BRACE) {
        parse_definition_body(p, symbols, namespace, &msg_name);
        p.eat(SyntaxKind::SEMICOLON);
    } else if p.at(SyntaxKind::SEMICOLON) {
        p.bump();
    } else if !broken {
        p.error("expected '{'", ErrorCode::E0203);
    }

    m.complete(p, SyntaxKind::MESSAGE_DEFINITION);
    msg_name
}

/// Parse `"extend" identifier body`
///
/// The extend target is accepted like any field type reference; the body
/// reuses the enclosing scope's namespaces, so fields added to a foreign
/// message still resolve against what is visible here.
pub(crate) fn parse_extend_definition(
    p: &mut Parser<'_>,
    symbols: &mut SymbolTable,
    namespace: &str,
    current: &str,
) {
    let m = p.mark();

    parse_next_token_as_keyword(p);

    if !at_user_defined_type(p, symbols, namespace, current) {
        p.error("expected message name", ErrorCode::E0301);
        p.skip_until(STATEMENT_RECOVERY);
    } else {
        parse_user_defined_type(p);
    }

    if p.at(SyntaxKind::L_BRACE) {
        parse_definition_body(p, symbols, namespace, current);
        p.eat(SyntaxKind::SEMICOLON);
        m.complete(p, SyntaxKind::EXTEND_DEFINITION);
    } else {
        p.error("expected '{'", ErrorCode::E0203);
        m.abandon();
    }
}

/// `messagebody ::= "{" (field | enum | message | extend | extensions
///                       | group | option | ";")* "}"`
fn parse_definition_body(
    p: &mut Parser<'_>,
    symbols: &mut SymbolTable,
    namespace: &str,
    current: &str,
) {
    let open_brace = p.at(SyntaxKind::L_BRACE).then(|| p.current_range());
    p.expect(SyntaxKind::L_BRACE, "{");
    let body = p.mark();
    while !p.at_eof() && !p.at(SyntaxKind::R_BRACE) {
        if p.at(SyntaxKind::SEMICOLON) {
            p.bump();
            continue;
        }
        if p.at_keyword("enum") {
            if let Some((name, constants)) = enums::parse_enum(p, current) {
                symbols.register_enum(name, constants);
            }
        } else if p.at_keyword("message") {
            let name = parse_message_definition(p, symbols, current);
            symbols.register_message(name);
        } else if p.at_keyword("extend") {
            parse_extend_definition(p, symbols, namespace, current);
        } else if p.at_keyword("option") {
            options::parse_option(p, SyntaxKind::MESSAGE_OPTION);
        } else if p.at_keyword("extensions") {
            parse_extensions(p);
        } else if at_property_modifier(p) {
            // One token of lookahead past the modifier decides between
            // the three field shapes.
            let snapshot = p.snapshot();
            p.skip_token();
            let group_next = p.at_keyword("group");
            let message_next = p.at_keyword("message");
            p.restore(snapshot);
            if group_next {
                parse_group(p, symbols, namespace, current);
            } else if message_next {
                parse_message_property(p);
            } else {
                parse_simple_or_enum_property(p, symbols, namespace, current);
            }
        } else if p.at(SyntaxKind::IDENT) && keywords::is_type_keyword(p.current_text()) {
            // A field missing its modifier still parses as a field; the
            // modifier error is recorded inside.
            parse_simple_or_enum_property(p, symbols, namespace, current);
        } else {
            p.error(
                "Message body should contain a <modifier fieldname>|<enum>|<message>|<extends>|<extensions>|<group>|<option>|\":\".",
                ErrorCode::E0307,
            );
            p.bump();
        }
    }
    if p.at_eof() {
        p.error_unclosed(open_brace);
    } else {
        p.bump();
    }
    body.complete(p, SyntaxKind::DEFINITION_BODY);
}

/// `extensions ::= "extensions" intLit "to" (intLit | "max") ";"`
///
/// A bad bound aborts just this statement; its marker is dropped and the
/// body loop carries on at the offending token.
fn parse_extensions(p: &mut Parser<'_>) {
    let m = p.mark();
    parse_keyword(p, "extensions");
    if !parse_extensions_lower_bound(p)
        || !parse_keyword(p, "to")
        || !parse_extensions_upper_bound(p)
    {
        m.abandon();
        return;
    }
    p.expect(SyntaxKind::SEMICOLON, ";");
    m.complete(p, SyntaxKind::EXTENSIONS_STATEMENT);
}

fn parse_extensions_lower_bound(p: &mut Parser<'_>) -> bool {
    if !p.at(SyntaxKind::INT_NUMBER) {
        p.error("expected integer, lower bound for extensions", ErrorCode::E0309);
        return false;
    }
    let m = p.mark();
    parse_literal(p);
    m.complete(p, SyntaxKind::EXTENSIONS_LOWER_BOUND);
    true
}

fn parse_extensions_upper_bound(p: &mut Parser<'_>) -> bool {
    if p.at_keyword("max") {
        let m = p.mark();
        parse_keyword(p, "max");
        m.complete(p, SyntaxKind::EXTENSIONS_UPPER_BOUND);
    } else if p.at(SyntaxKind::INT_NUMBER) {
        let m = p.mark();
        parse_literal(p);
        m.complete(p, SyntaxKind::EXTENSIONS_UPPER_BOUND);
    } else {
        p.error("expected integer, upper bound for extensions", ErrorCode::E0309);
        return false;
    }
    true
}

/// `group ::= modifier "group" identifier "=" intLit fieldOptionList? body`
///
/// A group is a field and an inline nested message at once. Without a
/// body it is no group at all: the marker is dropped and the pieces
/// stay behind as loose content.
fn parse_group(p: &mut Parser<'_>, symbols: &mut SymbolTable, namespace: &str, current: &str) {
    let m = p.mark();

    let modifier = parse_property_modifier(p).unwrap_or("");
    parse_keyword(p, "group");

    if !parse_name_and_number(p) {
        p.skip_until(GROUP_RECOVERY);
    }

    if p.at(SyntaxKind::L_BRACKET) {
        options::parse_field_options(p, modifier, None);
    }

    if !p.at(SyntaxKind::L_BRACE) {
        p.error("expected '{'", ErrorCode::E0203);
        m.abandon();
    } else {
        parse_definition_body(p, symbols, namespace, current);
        p.eat(SyntaxKind::SEMICOLON);
        m.complete(p, SyntaxKind::GROUP_DEFINITION);
    }
}

/// Legacy proto1 message-typed field: `modifier message<Type> name = id;`
fn parse_message_property(p: &mut Parser<'_>) {
    let m = p.mark();
    let modifier = parse_property_modifier(p).unwrap_or("");
    parse_keyword(p, "message");

    if !p.at(SyntaxKind::LT) {
        p.error("expected '<'", ErrorCode::E0207);
    }
    p.bump();
    if !p.at(SyntaxKind::IDENT) {
        p.error("expected message type", ErrorCode::E0305);
    } else {
        let reference = p.mark();
        p.bump();
        reference.complete(p, SyntaxKind::MESSAGE_TYPE_REFERENCE);
    }
    if !p.at(SyntaxKind::GT) {
        p.error("expected '>'", ErrorCode::E0207);
    }
    p.bump();
    parse_name_and_number(p);

    if p.at(SyntaxKind::L_BRACKET) {
        options::parse_field_options(p, modifier, None);
    }
    parse_up_to_semicolon(p, true);
    m.complete(p, SyntaxKind::MESSAGE_PROPERTY);
}

/// Parse a field whose type is a primitive keyword, a declared enum, or
/// an arbitrary identifier taken on faith as a message reference
fn parse_simple_or_enum_property(
    p: &mut Parser<'_>,
    symbols: &mut SymbolTable,
    namespace: &str,
    current: &str,
) {
    let m = p.mark();
    let modifier = parse_property_modifier(p).unwrap_or("");

    let mut enum_constants: Option<&FxHashSet<SmolStr>> = None;
    let mut property_kind = SyntaxKind::SIMPLE_PROPERTY;

    if p.at(SyntaxKind::IDENT) {
        let type_text = p.current_text();
        if keywords::is_type_keyword(type_text) {
            let t = p.mark();
            parse_next_token_as_keyword(p);
            t.complete(p, SyntaxKind::PROPERTY_TYPE);
        } else if symbols.is_enum_type(current, namespace, type_text) {
            enum_constants = symbols.enum_constants(current, namespace, type_text);
            let t = p.mark();
            p.bump();
            t.complete(p, SyntaxKind::ENUM_PROPERTY_TYPE);
            property_kind = SyntaxKind::ENUM_PROPERTY;
        } else {
            // Any other identifier stands for a message type, declared
            // later or in an imported file.
            let t = p.mark();
            parse_user_defined_type(p);
            t.complete(p, SyntaxKind::USER_DEFINED_PROPERTY_TYPE);
            property_kind = SyntaxKind::USER_DEFINED_PROPERTY;
        }
        tracing::trace!("[MESSAGES] field type '{}' -> {:?}", type_text, property_kind);
    } else {
        p.error("expected property name", ErrorCode::E0301);
        m.abandon();
        return;
    }

    if !parse_name_and_number(p) {
        p.error("Expected identifier", ErrorCode::E0301);
        m.abandon();
        return;
    }
    if p.at(SyntaxKind::L_BRACKET) {
        options::parse_field_options(p, modifier, enum_constants);
    }
    p.expect(SyntaxKind::SEMICOLON, ";");
    m.complete(p, property_kind);
}

fn at_property_modifier(p: &Parser<'_>) -> bool {
    p.at(SyntaxKind::IDENT) && keywords::is_modifier(p.current_text())
}

/// Wrap `required`/`optional`/`repeated` in a PROPERTY_MODIFIER node
///
/// Absence is recorded but not fatal; the field parse continues and the
/// caller gets `None`.
fn parse_property_modifier<'a>(p: &mut Parser<'a>) -> Option<&'a str> {
    if at_property_modifier(p) {
        let m = p.mark();
        let modifier = parse_next_token_as_keyword(p);
        m.complete(p, SyntaxKind::PROPERTY_MODIFIER);
        modifier
    } else {
        p.error(
            "missing 'required', 'optional', or 'repeated'",
            ErrorCode::E0302,
        );
        None
    }
}

/// `identifier "=" intLit`, the ID wrapped in a NUMERIC_ID node
fn parse_name_and_number(p: &mut Parser<'_>) -> bool {
    if !p.at(SyntaxKind::IDENT) {
        p.error("expected property name", ErrorCode::E0301);
        return false;
    }
    parse_name(p);

    if !p.at(SyntaxKind::EQ) {
        p.error("expected '='", ErrorCode::E0206);
        return false;
    }
    p.bump();

    if !p.at(SyntaxKind::INT_NUMBER) {
        p.error("expected property ID number", ErrorCode::E0306);
        return false;
    }
    let id = p.mark();
    parse_literal(p);
    id.complete(p, SyntaxKind::NUMERIC_ID);
    true
}

/// Whether the current token can stand for a message type
///
/// Known names match first, but any identifier passes: unknown names are
/// accepted as forward or imported message types rather than rejected.
fn at_user_defined_type(
    p: &Parser<'_>,
    symbols: &SymbolTable,
    namespace: &str,
    current: &str,
) -> bool {
    if symbols.is_known_message(current, namespace, p.current_text()) {
        return true;
    }
    p.at(SyntaxKind::IDENT)
}

fn parse_user_defined_type(p: &mut Parser<'_>) {
    if !p.at(SyntaxKind::IDENT) {
        p.error("Type name expected", ErrorCode::E0305);
    } else {
        p.bump();
    }
}
