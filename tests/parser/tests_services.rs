//! Service and rpc definition tests.
//!
//! Rpc input and return types are recorded as bare message-type
//! references; nothing checks them against declared messages here.

use protolens::parser::{AstNode, ServiceDefinition, SourceFile};
use protolens::{Parse, parse};

use crate::helpers::source_fixtures::{address_book, error_messages, parse_clean};

fn only_service(parsed: &Parse) -> ServiceDefinition {
    let file = SourceFile::cast(parsed.syntax()).expect("source file");
    let mut services = file.services();
    let first = services.next().expect("a service definition");
    assert!(services.next().is_none(), "expected exactly one service");
    first
}

// ============================================================================
// Well-formed services
// ============================================================================

#[test]
fn test_service_with_single_rpc() {
    let file = parse_clean("service S { rpc M (In) returns (Out); }");

    let service = file.services().next().expect("service");
    assert_eq!(service.name().map(|n| n.text()), Some("S".to_string()));

    let rpc = service.rpcs().next().expect("rpc");
    assert_eq!(rpc.name().map(|n| n.text()), Some("M".to_string()));
    assert_eq!(
        rpc.input_type().and_then(|t| t.reference()).map(|r| r.text()),
        Some("In".to_string())
    );
    assert_eq!(
        rpc.return_type().and_then(|t| t.reference()).map(|r| r.text()),
        Some("Out".to_string())
    );
    assert!(rpc.body().is_none());
}

#[test]
fn test_empty_service() {
    let file = parse_clean("service Watcher {}");

    let service = file.services().next().expect("service");
    assert_eq!(service.rpcs().count(), 0);
}

#[test]
fn test_several_rpcs() {
    let file = parse_clean(
        "service SearchService {\n\
           rpc Search (SearchRequest) returns (SearchResponse);\n\
           rpc Suggest (SuggestRequest) returns (SuggestResponse);\n\
         }",
    );

    let service = file.services().next().expect("service");
    let names: Vec<_> = service
        .rpcs()
        .filter_map(|r| r.name().map(|n| n.text()))
        .collect();
    assert_eq!(names, vec!["Search", "Suggest"]);
}

#[test]
fn test_service_level_option() {
    let file = parse_clean("service S {\n  option failure_detection = true;\n}");

    let service = file.services().next().expect("service");
    let option = service.body().expect("body").options().next().expect("option");
    assert_eq!(
        option.name().map(|n| n.text()),
        Some("failure_detection".to_string())
    );
}

#[test]
fn test_rpc_body_with_options() {
    let file = parse_clean(
        "service S {\n\
           rpc M (In) returns (Out) {\n\
             option deadline = 30;\n\
             option duplicate_suppression = true;\n\
           };\n\
         }",
    );

    let rpc = file.services().next().expect("service").rpcs().next().expect("rpc");
    let body = rpc.body().expect("rpc body");
    let names: Vec<_> = body
        .options()
        .filter_map(|o| o.name().map(|n| n.text()))
        .collect();
    assert_eq!(names, vec!["deadline", "duplicate_suppression"]);
}

#[test]
fn test_dotted_rpc_types() {
    let file = parse_clean("service S { rpc M (foo.bar.In) returns (foo.bar.Out); }");

    let rpc = file.services().next().expect("service").rpcs().next().expect("rpc");
    assert_eq!(
        rpc.input_type().and_then(|t| t.reference()).map(|r| r.text()),
        Some("foo.bar.In".to_string())
    );
}

// ============================================================================
// Broken services
// ============================================================================

#[test]
fn test_service_missing_name() {
    let parsed = parse("service { rpc M (In) returns (Out); }");

    assert_eq!(error_messages(&parsed), vec!["expected service name"]);
    // The rpc after the recovered header still parses.
    let service = only_service(&parsed);
    assert!(service.name().is_none());
    assert_eq!(service.rpcs().count(), 1);
}

#[test]
fn test_rpc_missing_returns() {
    let parsed = parse("service S { rpc M (In) (Out); }");

    let messages = error_messages(&parsed);
    assert_eq!(messages[0], "expected 'RETURNS'");
    assert_eq!(messages[1], "Malformed rpc statement");
    // The rpc node still closes with the pieces parsed so far.
    let rpc = only_service(&parsed).rpcs().next().expect("rpc");
    assert!(rpc.input_type().is_some());
    assert!(rpc.return_type().is_none());
}

#[test]
fn test_rpc_missing_input_paren() {
    let parsed = parse("service S { rpc M In) returns (Out); rpc N (A) returns (B); }");

    assert_eq!(error_messages(&parsed)[0], "expected '('");
    // Recovery resynchronizes at the statement boundary; the second rpc
    // is unaffected.
    let rpcs: Vec<_> = only_service(&parsed).rpcs().collect();
    assert_eq!(rpcs.len(), 2);
    assert!(rpcs[1].return_type().is_some());
}

#[test]
fn test_rpc_without_semicolon_or_body() {
    let parsed = parse("service S { rpc M (In) returns (Out) }");

    assert_eq!(error_messages(&parsed), vec!["expected '{' or ';'"]);
    assert_eq!(only_service(&parsed).rpcs().count(), 1);
}

#[test]
fn test_unclosed_service_body() {
    let parsed = parse("service S { rpc M (In) returns (Out);");

    assert_eq!(error_messages(&parsed), vec!["expected '}'"]);
    assert_eq!(only_service(&parsed).rpcs().count(), 1);
}

#[test]
fn test_bare_assignment_in_rpc_body() {
    // `Bar = 1;` is handed to the option parser: the missing keyword is
    // an error anchored inside the option node, the rpc itself is clean.
    let parsed = parse("service S { rpc M (In) returns (Out) { Bar = 1; } }");

    assert_eq!(error_messages(&parsed), vec!["expected 'OPTION'"]);
    let rpc = only_service(&parsed).rpcs().next().expect("rpc");
    assert_eq!(rpc.body().expect("body").options().count(), 1);
}

// ============================================================================
// Fixture
// ============================================================================

#[test]
fn test_address_book_service() {
    let parsed = address_book();
    let file = SourceFile::cast(parsed.syntax()).expect("source file");

    let service = file.services().next().expect("service");
    assert_eq!(
        service.name().map(|n| n.text()),
        Some("AddressBookSearch".to_string())
    );
    assert_eq!(service.body().expect("body").options().count(), 1);

    let rpcs: Vec<_> = service.rpcs().collect();
    assert_eq!(rpcs.len(), 2);
    assert!(rpcs[0].body().is_none());
    assert_eq!(rpcs[1].body().expect("body").options().count(), 1);
}
