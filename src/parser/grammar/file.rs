//! Top-level dispatch: one source file of proto declarations
//!
//! `proto ::= message | extend | enum | import | package | option
//!          | syntax | service`
//!
//! The loop never gives up: an unrecognized token gets an error and is
//! consumed, so every parse reaches end of input with a full tree.

use super::super::errors::ErrorCode;
use super::super::parser::Parser;
use super::super::symbols::SymbolTable;
use super::super::syntax_kind::SyntaxKind;
use super::{enums, messages, options, services};
use super::{parse_keyword, parse_next_token_as_keyword, parse_token_as_element};

/// Parse a whole file into a SOURCE_FILE node
pub(crate) fn parse_source_file(p: &mut Parser<'_>) {
    let mut symbols = SymbolTable::new();
    p.start_node(SyntaxKind::SOURCE_FILE);

    while !p.at_eof() {
        let before = p.snapshot();
        tracing::trace!("[FILE] top level at '{}'", p.current_text());

        if p.at(SyntaxKind::LANGUAGE_LITERAL) {
            parse_language_statement(p);
        } else if p.at_keyword("service") {
            services::parse_service_definition(p);
        } else if p.at_keyword("package") {
            parse_package_statement(p);
        } else if p.at_keyword("syntax") {
            parse_syntax_statement(p);
        } else if p.at_keyword("import") {
            parse_import_statement(p);
        } else if p.at_keyword("option") {
            options::parse_option(p, SyntaxKind::FILE_OPTION_STATEMENT);
        } else if p.at_keyword("extend") {
            messages::parse_extend_definition(p, &mut symbols, "", "");
        } else if p.at_keyword("enum") {
            if let Some((name, constants)) = enums::parse_enum(p, "") {
                symbols.register_enum(name, constants);
            }
        } else if p.at_keyword("message") || p.at_keyword("parsed") {
            let name = messages::parse_message_definition(p, &mut symbols, "");
            symbols.register_message(name);
        } else {
            p.error("Expected keyword", ErrorCode::E0901);
            p.bump();
        }

        // Safety: if we didn't make progress, force-skip a token
        if p.snapshot() == before && !p.at_eof() {
            p.error(
                format!("stuck on token: {:?}", p.current_kind()),
                ErrorCode::E0999,
            );
            p.bump();
        }
    }

    p.flush_trivia();
    p.finish_node();
}

/// `c++header "path"`-style statement: a language literal plus a keyword
///
/// A non-keyword follower turns the whole statement into an error element.
fn parse_language_statement(p: &mut Parser<'_>) {
    let m = p.mark();
    p.bump(); // the language literal token
    if parse_next_token_as_keyword(p).is_none() {
        p.error("Expected keyword", ErrorCode::E0901);
        m.complete(p, SyntaxKind::ERROR);
        return;
    }
    m.complete(p, SyntaxKind::LANGUAGE_STATEMENT);
}

/// `package foo.bar;`
fn parse_package_statement(p: &mut Parser<'_>) {
    let m = p.mark();
    if !parse_keyword(p, "package")
        || !parse_token_as_element(
            p,
            SyntaxKind::IDENT,
            SyntaxKind::PACKAGE_NAME,
            "expected package name",
            ErrorCode::E0301,
        )
    {
        m.abandon();
        return;
    }
    p.expect(SyntaxKind::SEMICOLON, ";");
    m.complete(p, SyntaxKind::PACKAGE_STATEMENT);
}

/// `syntax = "proto2";`
fn parse_syntax_statement(p: &mut Parser<'_>) {
    let m = p.mark();
    parse_keyword(p, "syntax");
    if !p.expect(SyntaxKind::EQ, "=")
        || !parse_token_as_element(
            p,
            SyntaxKind::STRING,
            SyntaxKind::SYNTAX_VALUE,
            "expected syntax value",
            ErrorCode::E0406,
        )
    {
        m.abandon();
        return;
    }
    p.expect(SyntaxKind::SEMICOLON, ";");
    m.complete(p, SyntaxKind::SYNTAX_STATEMENT);
}

/// `import "net/proto/file.proto";`
fn parse_import_statement(p: &mut Parser<'_>) {
    let m = p.mark();
    if !parse_keyword(p, "import")
        || !parse_token_as_element(
            p,
            SyntaxKind::STRING,
            SyntaxKind::IMPORT_VALUE,
            "expected import value",
            ErrorCode::E0406,
        )
    {
        m.abandon();
        return;
    }
    p.expect(SyntaxKind::SEMICOLON, ";");
    m.complete(p, SyntaxKind::IMPORT_STATEMENT);
}
