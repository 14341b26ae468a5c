//! Totality and recovery properties.
//!
//! Whatever the input, parsing terminates, the root is a SOURCE_FILE
//! node, and the tree reproduces the source byte for byte. These suites
//! throw garbage and truncations at the parser and check only those
//! invariants, not specific tree shapes.

use rstest::rstest;

use protolens::{SyntaxKind, TextSize, parse};

use crate::helpers::source_fixtures::{ADDRESS_BOOK_PROTO, error_messages};

fn assert_total(input: &str) {
    let parsed = parse(input);
    let root = parsed.syntax();
    assert_eq!(root.kind(), SyntaxKind::SOURCE_FILE, "input: {input:?}");
    assert_eq!(root.text().to_string(), input, "tree must cover all of {input:?}");
    for error in &parsed.errors {
        assert!(
            error.range.end() <= TextSize::of(input),
            "error {error:?} anchored past the end of {input:?}"
        );
    }
}

// ============================================================================
// Garbage in, tree out
// ============================================================================

#[rstest]
#[case("")]
#[case(";;;")]
#[case("}")]
#[case("{{{")]
#[case("= = =")]
#[case("$ % ^ & !")]
#[case("message")]
#[case("enum enum enum")]
#[case("message M { required required required }")]
#[case("service service service")]
#[case("option option option")]
#[case("message M { [ ] < > }")]
fn test_totality(#[case] input: &str) {
    assert_total(input);
}

#[test]
fn test_garbage_reports_but_never_aborts() {
    let parsed = parse("42 message Foo {} 43 enum E { A = 1; } 44");

    // Each junk token is one consumed error; the definitions in between
    // are unaffected.
    let messages = error_messages(&parsed);
    assert_eq!(messages, vec!["Expected keyword"; 3]);

    let kinds: Vec<_> = parsed.syntax().children().map(|n| n.kind()).collect();
    assert!(kinds.contains(&SyntaxKind::MESSAGE_DEFINITION));
    assert!(kinds.contains(&SyntaxKind::ENUM_DEFINITION));
}

#[test]
fn test_skipped_tokens_land_in_error_nodes() {
    let parsed = parse("enum < > { A = 1; }");

    assert_eq!(error_messages(&parsed)[0], "expected enum name");
    let error_node = parsed
        .syntax()
        .descendants()
        .find(|n| n.kind() == SyntaxKind::ERROR)
        .expect("skipped tokens wrapped in an error node");
    assert_eq!(error_node.text().to_string(), "< >");
}

#[test]
fn test_unclosed_body_error_points_at_opening_brace() {
    let input = "message M { optional int32 x = 1;";
    let parsed = parse(input);

    let error = &parsed.errors[0];
    assert_eq!(error.message, "expected '}'");
    assert!(!error.related.is_empty());
    assert_eq!(error.related[0].message, "opened here");
    let brace = error.related[0].range;
    assert_eq!(
        &input[usize::from(brace.start())..usize::from(brace.end())],
        "{"
    );
}

// ============================================================================
// Truncation
// ============================================================================

#[test]
fn test_every_prefix_of_the_fixture_parses() {
    // The fixture is ASCII, so every byte offset is a char boundary.
    for end in 0..=ADDRESS_BOOK_PROTO.len() {
        assert_total(&ADDRESS_BOOK_PROTO[..end]);
    }
}

#[test]
fn test_truncated_message_header() {
    let parsed = parse("message Foo");

    assert_eq!(error_messages(&parsed), vec!["expected '{'"]);
    assert!(
        parsed
            .syntax()
            .children()
            .any(|n| n.kind() == SyntaxKind::MESSAGE_DEFINITION)
    );
}

#[test]
fn test_truncated_field() {
    let parsed = parse("message Foo { optional int32 x = ");

    // The field loses its ID and the body its brace; both are reported,
    // and the message node still closes.
    let messages = error_messages(&parsed);
    assert!(messages.contains(&"expected property ID number".to_string()));
    assert!(messages.contains(&"expected '}'".to_string()));
    assert!(
        parsed
            .syntax()
            .descendants()
            .any(|n| n.kind() == SyntaxKind::DEFINITION_BODY)
    );
}

// ============================================================================
// Nesting depth
// ============================================================================

#[test]
fn test_deeply_nested_messages() {
    let depth = 64;
    let mut input = String::new();
    for i in 0..depth {
        input.push_str(&format!("message M{i} {{ "));
    }
    input.push_str("optional int32 x = 1; ");
    for _ in 0..depth {
        input.push_str("} ");
    }

    let parsed = parse(&input);
    assert!(parsed.ok(), "errors: {:?}", parsed.errors);

    let innermost = parsed
        .syntax()
        .descendants()
        .filter(|n| n.kind() == SyntaxKind::MESSAGE_DEFINITION)
        .count();
    assert_eq!(innermost, depth);
}

#[test]
fn test_deeply_nested_unclosed_messages() {
    let depth = 32;
    let input = "message M { ".repeat(depth);

    assert_total(&input);
    let parsed = parse(&input);
    // One missing brace per body.
    assert_eq!(
        error_messages(&parsed),
        vec!["expected '}'".to_string(); depth]
    );
}
