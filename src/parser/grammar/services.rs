//! Service and rpc definitions
//!
//! Input and return types are recorded as bare message-type references;
//! nothing here resolves them against declared messages. A malformed rpc
//! header resynchronizes on the statement boundary set and still closes
//! its node, so one bad rpc never takes the rest of the service with it.

use rowan::TextRange;

use super::super::errors::ErrorCode;
use super::super::parser::Parser;
use super::super::syntax_kind::SyntaxKind;
use super::{STATEMENT_RECOVERY, options, parse_keyword, parse_name};

/// `service ::= "service" identifier "{" (option | rpc | ";")* "}"`
///
/// Unparseable body content stops the loop without being consumed; the
/// service node closes over what was read and the offending token is
/// left for the file-level dispatcher.
pub(crate) fn parse_service_definition(p: &mut Parser<'_>) {
    let m = p.mark();
    parse_keyword(p, "service");

    if !p.at(SyntaxKind::IDENT) {
        p.error("expected service name", ErrorCode::E0301);
        p.skip_until(STATEMENT_RECOVERY);
    } else {
        parse_name(p);
    }
    let open_brace = p.at(SyntaxKind::L_BRACE).then(|| p.current_range());
    p.expect(SyntaxKind::L_BRACE, "{");

    let body = p.mark();
    let mut error_occurred = false;
    while !error_occurred && !p.at_eof() && !p.at(SyntaxKind::R_BRACE) {
        if p.at(SyntaxKind::SEMICOLON) {
            p.bump();
        } else if p.at_keyword("option") {
            options::parse_option(p, SyntaxKind::OPTION);
        } else if p.at_keyword("rpc") {
            parse_rpc(p);
        } else {
            p.error("Expected option | rpc | semicolon", ErrorCode::E0307);
            error_occurred = true;
        }
    }

    if p.at_eof() {
        p.error_unclosed(open_brace);
        body.complete(p, SyntaxKind::SERVICE_BODY);
    } else {
        p.expect(SyntaxKind::R_BRACE, "}");
        body.complete(p, SyntaxKind::SERVICE_BODY);
        p.eat(SyntaxKind::SEMICOLON);
    }

    m.complete(p, SyntaxKind::SERVICE_DEFINITION);
}

/// `rpc ::= "rpc" identifier "(" identifier ")" "returns" "(" identifier ")"
///          (";" | rpcbody)`
fn parse_rpc(p: &mut Parser<'_>) {
    let m = p.mark();
    parse_keyword(p, "rpc");

    let mut error_occurred = false;
    if !p.at(SyntaxKind::IDENT) {
        p.error("expected rpc name", ErrorCode::E0301);
        error_occurred = true;
    } else {
        parse_name(p);
    }
    if !error_occurred
        && !read_parenthesized_type_reference(p, SyntaxKind::RPC_INPUT_TYPE)
    {
        error_occurred = true;
    }
    if !error_occurred && !parse_keyword(p, "returns") {
        error_occurred = true;
    }
    if !error_occurred
        && !read_parenthesized_type_reference(p, SyntaxKind::RPC_RETURN_TYPE)
    {
        error_occurred = true;
    }

    if error_occurred {
        p.error("Malformed rpc statement", ErrorCode::E0308);
        p.skip_until(STATEMENT_RECOVERY);
    }

    if p.at(SyntaxKind::L_BRACE) {
        let open_brace = p.current_range();
        p.bump();
        parse_rpc_body(p, open_brace);
        p.eat(SyntaxKind::SEMICOLON);
    } else if p.at(SyntaxKind::SEMICOLON) {
        p.bump();
    } else {
        p.error("expected '{' or ';'", ErrorCode::E0203);
    }

    m.complete(p, SyntaxKind::RPC_DEFINITION);
}

/// `rpcbody ::= "{" (option | ";")* "}" (";")?`
///
/// Called with the opening brace already consumed. Anything that is not
/// a semicolon is handed to the option parser; when that fails the
/// offending token is consumed so the loop always advances.
fn parse_rpc_body(p: &mut Parser<'_>, open_brace: TextRange) {
    // A stray `rpc` keyword right after the brace is swallowed.
    if p.at_keyword("rpc") {
        p.bump();
    }
    let body = p.mark();
    while !p.at_eof() && !p.at(SyntaxKind::R_BRACE) {
        if p.at(SyntaxKind::SEMICOLON) || !options::parse_option(p, SyntaxKind::OPTION) {
            p.bump();
        }
    }
    if p.at_eof() {
        p.error_unclosed(Some(open_brace));
    } else {
        p.bump();
    }
    p.eat(SyntaxKind::SEMICOLON);
    body.complete(p, SyntaxKind::RPC_BODY);
}

/// `parameter ::= "(" identifier ")"`, the identifier wrapped in a
/// MESSAGE_TYPE_REFERENCE inside the given element kind
fn read_parenthesized_type_reference(p: &mut Parser<'_>, element: SyntaxKind) -> bool {
    if !p.at(SyntaxKind::L_PAREN) {
        p.error("expected '('", ErrorCode::E0204);
        return false;
    }
    p.bump();

    if !p.at(SyntaxKind::IDENT) {
        p.error("expected input parameter type", ErrorCode::E0305);
        return false;
    }
    let outer = p.mark();
    let reference = p.mark();
    p.bump();
    reference.complete(p, SyntaxKind::MESSAGE_TYPE_REFERENCE);
    outer.complete(p, element);

    if !p.at(SyntaxKind::R_PAREN) {
        p.error("expected ')'", ErrorCode::E0204);
        return false;
    }
    p.bump();
    true
}
