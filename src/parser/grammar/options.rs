//! Option statements and bracketed field-option lists
//!
//! `option ::= "option" optionname "=" constant ";"`
//! `fieldOptionList ::= "[" fieldOption ("," fieldOption)* "]"`
//!
//! The same option statement grammar serves file, message, enum, service
//! and rpc scope; the caller picks the node kind. Which field options
//! exist beyond `default` and the parenthesized custom form, and which
//! values they accept, comes from the parser's provider chain.

use rustc_hash::FxHashSet;
use smol_str::SmolStr;

use super::super::errors::ErrorCode;
use super::super::parser::Parser;
use super::super::syntax_kind::SyntaxKind;
use super::{
    STATEMENT_RECOVERY, at_literal, parse_keyword, parse_literal, parse_name,
    parse_next_token_as_keyword, parse_token_as_element,
};

/// Parse an `option name = value;` statement into a node of kind `outer`
///
/// Message-scope options require the parenthesized name form. A missing
/// `option` keyword is an error but does not stop the statement, so a
/// stray `name = value;` still becomes an option node.
pub(crate) fn parse_option(p: &mut Parser<'_>, outer: SyntaxKind) -> bool {
    let m = p.mark();
    parse_keyword(p, "option");

    if !parse_option_name(p, outer == SyntaxKind::MESSAGE_OPTION) {
        p.error("expected valid option name", ErrorCode::E0401);
        m.abandon();
        return false;
    }

    if !p.expect(SyntaxKind::EQ, "=") {
        p.error("expected '='", ErrorCode::E0206);
        m.abandon();
        return false;
    }

    if at_literal(p) {
        let value = p.mark();
        parse_literal(p);
        value.complete(p, SyntaxKind::OPTION_VALUE);
    } else if p.at(SyntaxKind::IDENT) {
        let value = p.mark();
        p.bump();
        value.complete(p, SyntaxKind::OPTION_VALUE);
    } else {
        p.error("expected valid option value", ErrorCode::E0402);
    }

    if !p.expect(SyntaxKind::SEMICOLON, ";") {
        m.complete(p, outer);
        return false;
    }
    m.complete(p, outer);
    true
}

/// `optionname ::= "("? identifier ")"?` (dotted parts lex as one token)
fn parse_option_name(p: &mut Parser<'_>, starts_with_parens: bool) -> bool {
    let has_parens = if starts_with_parens {
        if !p.expect(SyntaxKind::L_PAREN, "(") {
            return false;
        }
        true
    } else {
        p.eat(SyntaxKind::L_PAREN)
    };

    if !parse_token_as_element(
        p,
        SyntaxKind::IDENT,
        SyntaxKind::NAME,
        "expected option name",
        ErrorCode::E0401,
    ) {
        return false;
    }

    if has_parens && !p.expect(SyntaxKind::R_PAREN, ")") {
        return false;
    }
    true
}

/// Parse a bracketed `[opt, opt, ...]` list after a field or enum constant
///
/// `modifier` is the field's modifier text (empty when absent) and
/// `enum_constants` the allowed `default` values when the field's type
/// resolved to a declared enum. Option names and values are matched
/// against the provider chain; every recognized option in the list is
/// parsed, and junk between commas is consumed with an error so the
/// list always makes progress.
pub(crate) fn parse_field_options(
    p: &mut Parser<'_>,
    modifier: &str,
    enum_constants: Option<&FxHashSet<SmolStr>>,
) -> bool {
    p.expect(SyntaxKind::L_BRACKET, "[");

    let candidates = field_option_candidates(p);
    tracing::trace!("[OPTIONS] field options, {} candidate names", candidates.len());

    if !parse_field_option_item(p, modifier, enum_constants, &candidates) {
        p.error(
            "expected default, deprecated, packed or custom option",
            ErrorCode::E0405,
        );
        return false;
    }

    while !p.at_eof() && !p.at(SyntaxKind::R_BRACKET) && !p.at_any(STATEMENT_RECOVERY) {
        if !p.expect(SyntaxKind::COMMA, ",") {
            p.error("Expected ','", ErrorCode::E0208);
            p.bump();
        } else if !parse_field_option_item(p, modifier, enum_constants, &candidates) {
            p.error(
                "expected default, deprecated, packed or custom option",
                ErrorCode::E0405,
            );
        }
    }

    if !p.expect(SyntaxKind::R_BRACKET, "]") {
        p.error("Expected ',' or ']'", ErrorCode::E0205);
        return false;
    }
    true
}

/// Every option name the provider chain recognizes, plus the two
/// forms the grammar itself owns
fn field_option_candidates(p: &Parser<'_>) -> Vec<SmolStr> {
    let mut candidates: Vec<SmolStr> = Vec::new();
    for provider in p.providers() {
        candidates.extend(provider.recognized_names());
    }
    candidates.push(SmolStr::new("default"));
    candidates.push(SmolStr::new("("));
    candidates
}

/// Does the current token open the option named `option`?
fn option_matches(p: &Parser<'_>, option: &str) -> bool {
    (p.at(SyntaxKind::IDENT) && p.current_text() == option)
        || (p.at(SyntaxKind::L_PAREN) && option == "(")
}

fn parse_field_option_item(
    p: &mut Parser<'_>,
    modifier: &str,
    enum_constants: Option<&FxHashSet<SmolStr>>,
    candidates: &[SmolStr],
) -> bool {
    for candidate in candidates {
        if option_matches(p, candidate) {
            return parse_named_field_option(p, candidate, modifier, enum_constants);
        }
    }
    false
}

fn parse_named_field_option(
    p: &mut Parser<'_>,
    option: &str,
    modifier: &str,
    enum_constants: Option<&FxHashSet<SmolStr>>,
) -> bool {
    if option == "default" {
        return parse_default_value(p, modifier, enum_constants);
    }
    if option == "(" {
        return parse_custom_option(p);
    }
    if !parse_string_option(p, option) {
        p.error("Unknown field option", ErrorCode::E0405);
        return false;
    }
    true
}

/// `default = <literal-or-enum-constant>`
///
/// Repeated fields cannot carry a default: one error, the offending
/// value is consumed bare and no DEFAULT_VALUE node is built. For enum
/// fields the value must be one of the declared constants; for
/// everything else a bare identifier is accepted unchecked, since the
/// enum may live in an imported file or later in the same body.
fn parse_default_value(
    p: &mut Parser<'_>,
    modifier: &str,
    enum_constants: Option<&FxHashSet<SmolStr>>,
) -> bool {
    parse_next_token_as_keyword(p);
    if !p.expect(SyntaxKind::EQ, "=") {
        return false;
    }

    if modifier == "repeated" {
        p.error("repeated fields can't have defaults.", ErrorCode::E0404);
        if at_literal(p) || p.at(SyntaxKind::IDENT) {
            p.bump();
        }
        return true;
    }

    match enum_constants {
        None => {
            if at_literal(p) {
                let value = p.mark();
                parse_literal(p);
                value.complete(p, SyntaxKind::DEFAULT_VALUE);
            } else if p.at(SyntaxKind::IDENT) {
                let value = p.mark();
                p.bump();
                value.complete(p, SyntaxKind::DEFAULT_VALUE);
            } else {
                p.error("expected default value", ErrorCode::E0403);
                return false;
            }
        }
        Some(constants) => {
            if !constants.contains(p.current_text()) {
                p.error("invalid default value", ErrorCode::E0403);
                return false;
            }
            let value = p.mark();
            parse_name(p);
            value.complete(p, SyntaxKind::DEFAULT_VALUE);
        }
    }
    true
}

/// `"(" identifier ")" "=" <literal>`
fn parse_custom_option(p: &mut Parser<'_>) -> bool {
    p.expect(SyntaxKind::L_PAREN, "(");
    if !parse_token_as_element(
        p,
        SyntaxKind::IDENT,
        SyntaxKind::CUSTOM_OPTION_NAME,
        "expected option name",
        ErrorCode::E0401,
    ) {
        return false;
    }
    if !p.expect(SyntaxKind::R_PAREN, ")") || !p.expect(SyntaxKind::EQ, "=") {
        return false;
    }
    if !at_literal(p) {
        p.error("expected custom option value", ErrorCode::E0402);
        return false;
    }
    let value = p.mark();
    parse_literal(p);
    value.complete(p, SyntaxKind::CUSTOM_OPTION_VALUE);
    true
}

/// An option whose value must come from the provider chain's list for
/// that name (`deprecated = true`, `ctype = CORD`, ...)
///
/// Called with the cursor on the already-matched option name. When some
/// provider allows multiple values, a comma-separated tail is collected
/// as long as each token after a comma is another valid value; the
/// lookahead backs off over the comma otherwise, leaving it for the
/// enclosing option list.
fn parse_string_option(p: &mut Parser<'_>, name: &str) -> bool {
    parse_next_token_as_keyword(p);
    if !p.expect(SyntaxKind::EQ, "=") {
        return false;
    }

    let mut expected_values: Vec<SmolStr> = Vec::new();
    for provider in p.providers() {
        expected_values.extend(provider.valid_values(name));
    }

    if p.at(SyntaxKind::IDENT) && expected_values.iter().any(|v| v.as_str() == p.current_text()) {
        p.bump();
    } else {
        let rendered = expected_values
            .iter()
            .map(|v| v.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        p.error(format!("Expected one of [{rendered}]"), ErrorCode::E0402);
        return false;
    }

    let multiple = p.providers().iter().any(|provider| provider.allows_multiple(name));
    if multiple {
        while !p.at_eof() && !p.at(SyntaxKind::R_BRACKET) && !p.at(SyntaxKind::SEMICOLON) {
            if !p.at(SyntaxKind::COMMA) {
                break;
            }
            let snapshot = p.snapshot();
            p.skip_token();
            let continues = p.at(SyntaxKind::IDENT)
                && expected_values.iter().any(|v| v.as_str() == p.current_text());
            p.restore(snapshot);
            if !continues {
                break;
            }
            p.bump();
            p.bump();
        }
    }
    true
}
