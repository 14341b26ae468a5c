//! Message definition tests: fields, type disambiguation, groups,
//! extensions and extend blocks.
//!
//! Field types resolve in declaration order: primitive keyword first,
//! then any enum already parsed, then an unchecked message reference.
//! Several tests below pin that ordering down.

use protolens::parser::{AstNode, MessageDefinition, Property, SourceFile};
use protolens::{Parse, parse};

use crate::helpers::source_fixtures::{error_messages, parse_clean};

fn message_named(parsed: &Parse, name: &str) -> MessageDefinition {
    let file = SourceFile::cast(parsed.syntax()).expect("source file");
    file.messages()
        .find(|m| m.name().map(|n| n.text()).as_deref() == Some(name))
        .unwrap_or_else(|| panic!("no message named {name}"))
}

fn only_property(message: &MessageDefinition) -> Property {
    let mut properties = message.properties();
    let first = properties.next().expect("a property");
    assert!(properties.next().is_none(), "expected exactly one property");
    first
}

// ============================================================================
// Plain fields
// ============================================================================

#[test]
fn test_simple_property() {
    let parsed = parse("package foo;\nmessage Foo {\n  required int64 Bar = 1;\n}");
    assert!(parsed.ok(), "errors: {:?}", parsed.errors);

    let prop = only_property(&message_named(&parsed, "Foo"));
    assert_eq!(prop.modifier().map(|m| m.text()), Some("required".to_string()));
    assert_eq!(prop.type_text(), Some("int64".to_string()));
    assert_eq!(prop.name().map(|n| n.text()), Some("Bar".to_string()));
    assert!(matches!(prop, Property::Simple(_)));
}

#[test]
fn test_parsed_keyword_before_message() {
    let parsed = parse("package foo;\nparsed message Foo {\n  required int64 Bar = 1;\n}");
    assert!(parsed.ok(), "errors: {:?}", parsed.errors);

    let prop = only_property(&message_named(&parsed, "Foo"));
    assert_eq!(prop.name().map(|n| n.text()), Some("Bar".to_string()));
}

#[test]
fn test_misspelled_message_keyword() {
    let parsed = parse("package foo;\nparsed messag Foo {\n  int64 Bar = 1;\n}");

    assert_eq!(
        error_messages(&parsed)[0],
        "expected 'MESSAGE' or 'CLASS' or ' keyword"
    );
    // The definition survives without a name, and its body still parses.
    let file = SourceFile::cast(parsed.syntax()).expect("source file");
    let message = file.messages().next().expect("message definition");
    assert!(message.name().is_none());
    assert!(message.body().is_some());
}

#[test]
fn test_field_without_modifier_is_one_error() {
    let parsed = parse("message Foo {\n  int64 Bar = 1;\n}");

    assert_eq!(
        error_messages(&parsed),
        vec!["missing 'required', 'optional', or 'repeated'"]
    );
    let prop = only_property(&message_named(&parsed, "Foo"));
    assert!(prop.modifier().is_none());
    assert_eq!(prop.type_text(), Some("int64".to_string()));
    assert_eq!(prop.name().map(|n| n.text()), Some("Bar".to_string()));
}

// ============================================================================
// Enum fields and defaults
// ============================================================================

#[test]
fn test_field_type_resolves_to_declared_enum() {
    let parsed = parse(
        "message Foo {\n\
           enum Response { YES = 0; NO = 1; }\n\
           required Response answer = 1;\n\
         }",
    );
    assert!(parsed.ok(), "errors: {:?}", parsed.errors);

    let prop = only_property(&message_named(&parsed, "Foo"));
    match &prop {
        Property::Enum(field) => {
            assert_eq!(
                field.property_type().map(|t| t.text()),
                Some("Response".to_string())
            );
            assert_eq!(field.name().map(|n| n.text()), Some("answer".to_string()));
        }
        other => panic!("expected an enum field, got {other:?}"),
    }
}

#[test]
fn test_enum_field_missing_name() {
    let parsed = parse(
        "message Foo {\n\
           enum Response { YES = 0; NO = 1; }\n\
           required Response = 1;\n\
         }",
    );

    assert_eq!(error_messages(&parsed)[0], "expected property name");
}

#[test]
fn test_enum_field_default_from_constant_set() {
    let parsed = parse(
        "message Foo {\n\
           enum Response { YES = 0; NO = 1; }\n\
           optional Response answer = 1 [default = YES];\n\
         }",
    );
    assert!(parsed.ok(), "errors: {:?}", parsed.errors);

    let prop = only_property(&message_named(&parsed, "Foo"));
    let default = prop.default_value().expect("default value");
    assert_eq!(default.name().map(|n| n.text()), Some("YES".to_string()));
}

#[test]
fn test_enum_field_default_outside_constant_set() {
    let parsed = parse(
        "message Foo {\n\
           enum Response { YES = 0; NO = 1; }\n\
           optional Response answer = 1 [default = MAYBE];\n\
         }",
    );

    assert_eq!(error_messages(&parsed)[0], "invalid default value");
}

#[test]
fn test_default_against_top_level_enum() {
    let parsed = parse(
        "enum Response { YES = 0; NO = 1; }\n\
         message Foo {\n\
           optional Response answer = 1 [default = YES];\n\
         }",
    );
    assert!(parsed.ok(), "errors: {:?}", parsed.errors);
}

#[test]
fn test_unresolved_type_accepts_any_default() {
    // `Response` is declared nowhere, so the field falls through to a
    // message reference and the default goes unchecked.
    let parsed = parse("message Foo {\n  optional Response answer = 1 [default = MAYBE];\n}");
    assert!(parsed.ok(), "errors: {:?}", parsed.errors);

    let prop = only_property(&message_named(&parsed, "Foo"));
    assert!(matches!(prop, Property::UserDefined(_)));
    assert!(prop.default_value().is_some());
}

#[test]
fn test_required_field_takes_default() {
    let parsed = parse(
        "message Foo {\n\
           enum Response { YES = 0; NO = 1; }\n\
           required Response answer = 1 [default = NO];\n\
         }",
    );
    assert!(parsed.ok(), "errors: {:?}", parsed.errors);
}

#[test]
fn test_repeated_field_rejects_default() {
    let parsed = parse(
        "message Foo {\n\
           enum Response { YES = 0; NO = 1; }\n\
           repeated Response answer = 1 [default = NO];\n\
         }",
    );

    assert_eq!(
        error_messages(&parsed),
        vec!["repeated fields can't have defaults."]
    );
    let prop = only_property(&message_named(&parsed, "Foo"));
    assert!(prop.default_value().is_none());
}

// ============================================================================
// Declaration-order sensitivity
// ============================================================================

#[test]
fn test_type_resolution_is_declaration_ordered() {
    let parsed = parse(
        "message M {\n\
           enum Color { RED = 0; }\n\
           optional Color before = 1;\n\
           optional Shape after = 2;\n\
         }\n\
         enum Shape { SQUARE = 0; }",
    );
    assert!(parsed.ok(), "errors: {:?}", parsed.errors);

    let props: Vec<_> = message_named(&parsed, "M").properties().collect();
    assert!(matches!(props[0], Property::Enum(_)));
    // Shape is declared after the field, so it reads as a message reference.
    assert!(matches!(props[1], Property::UserDefined(_)));
}

#[test]
fn test_forward_enum_reference_reads_as_message() {
    let parsed = parse(
        "message M {\n\
           optional Color c = 1;\n\
           enum Color { RED = 0; }\n\
         }",
    );
    assert!(parsed.ok(), "errors: {:?}", parsed.errors);

    let prop = only_property(&message_named(&parsed, "M"));
    assert!(matches!(prop, Property::UserDefined(_)));
}

#[test]
fn test_qualified_reference_to_nested_enum() {
    let parsed = parse(
        "message Outer {\n\
           message Inner { enum Color { RED = 0; } }\n\
           optional Inner.Color c = 1 [default = RED];\n\
         }",
    );
    assert!(parsed.ok(), "errors: {:?}", parsed.errors);

    let prop = only_property(&message_named(&parsed, "Outer"));
    assert!(matches!(prop, Property::Enum(_)));
}

// ============================================================================
// Nested messages
// ============================================================================

#[test]
fn test_enum_inside_nested_message() {
    let parsed = parse(
        "message SearchResponse {\n\
           message Result {\n\
             enum Response { PEAR = 1; }\n\
             optional Response Bar = 1 [default = PEAR];\n\
           }\n\
           repeated Result result = 1;\n\
         }",
    );
    assert!(parsed.ok(), "errors: {:?}", parsed.errors);

    let outer = message_named(&parsed, "SearchResponse");
    let body = outer.body().expect("body");
    let nested: Vec<_> = body.messages().collect();
    assert_eq!(nested.len(), 1);
    assert_eq!(nested[0].name().map(|n| n.text()), Some("Result".to_string()));
    assert_eq!(nested[0].body().expect("body").enums().count(), 1);
}

#[test]
fn test_sibling_nested_messages() {
    let parsed = parse(
        "syntax = \"proto2\";\n\
         package foo;\n\
         message SearchResponse {\n\
           message Result {\n\
             required string Bar = 1;\n\
           }\n\
           repeated Result result = 1;\n\
           message WrappedResult {\n\
             optional Result Foo = 1;\n\
           }\n\
         }\n\
         message SomeOtherMessage {\n\
           optional SearchResponse.Result result = 1;\n\
         }",
    );
    assert!(parsed.ok(), "errors: {:?}", parsed.errors);

    let outer = message_named(&parsed, "SearchResponse");
    let names: Vec<_> = outer
        .body()
        .expect("body")
        .messages()
        .filter_map(|m| m.name().map(|n| n.text()))
        .collect();
    assert_eq!(names, vec!["Result", "WrappedResult"]);

    let other = message_named(&parsed, "SomeOtherMessage");
    let prop = only_property(&other);
    assert_eq!(prop.type_text(), Some("SearchResponse.Result".to_string()));
}

// ============================================================================
// message<T> fields
// ============================================================================

#[test]
fn test_message_type_parameter_field() {
    let parsed = parse(
        "package foo;\n\
         message Foo {\n\
           required string Bar = 1;\n\
         }\n\
         message Acme {\n\
           required message<Foo> foo = 1;\n\
         }",
    );
    assert!(parsed.ok(), "errors: {:?}", parsed.errors);

    let prop = only_property(&message_named(&parsed, "Acme"));
    match &prop {
        Property::Message(field) => {
            let reference = field.type_reference().expect("type reference");
            assert_eq!(reference.text(), "Foo");
        }
        other => panic!("expected a message<T> field, got {other:?}"),
    }
}

// ============================================================================
// Groups
// ============================================================================

#[test]
fn test_group_field() {
    let parsed = parse(
        "message SearchRequest {\n\
           repeated group Result = 1 {\n\
             required string url = 2;\n\
           }\n\
         }",
    );
    assert!(parsed.ok(), "errors: {:?}", parsed.errors);

    let body = message_named(&parsed, "SearchRequest").body().expect("body");
    let groups: Vec<_> = body.groups().collect();
    assert_eq!(groups.len(), 1);
    let group = &groups[0];
    assert!(group.modifier().map(|m| m.is_repeated()).unwrap_or(false));
    assert_eq!(group.name().map(|n| n.text()), Some("Result".to_string()));
    assert_eq!(group.id().and_then(|id| id.value()), Some(1));
    assert_eq!(group.body().expect("group body").properties().count(), 1);
}

// ============================================================================
// Extensions
// ============================================================================

#[test]
fn test_extensions_range() {
    let parsed = parse("message Foo {\n  extensions 100 to 199;\n}");
    assert!(parsed.ok(), "errors: {:?}", parsed.errors);

    let body = message_named(&parsed, "Foo").body().expect("body");
    let statement = body.extensions().next().expect("extensions statement");
    assert_eq!(
        statement.lower_bound().and_then(|b| b.value()),
        Some(100)
    );
    let upper = statement.upper_bound().expect("upper bound");
    assert!(!upper.is_max());
    assert_eq!(upper.value(), Some(199));
}

#[test]
fn test_extensions_to_max() {
    let parsed = parse("message Foo {\n  extensions 100 to max;\n}");
    assert!(parsed.ok(), "errors: {:?}", parsed.errors);

    let body = message_named(&parsed, "Foo").body().expect("body");
    let statement = body.extensions().next().expect("extensions statement");
    assert!(statement.upper_bound().expect("upper bound").is_max());
}

#[test]
fn test_extensions_missing_to() {
    let parsed = parse("message Foo {\n  extensions 100 max;\n}");
    assert_eq!(error_messages(&parsed)[0], "expected 'TO'");
}

#[test]
fn test_extensions_missing_upper_bound() {
    let parsed = parse("message Foo {\n  extensions 100 to;\n}");
    assert_eq!(
        error_messages(&parsed)[0],
        "expected integer, upper bound for extensions"
    );
}

#[test]
fn test_extensions_non_integer_lower_bound() {
    let parsed = parse("message Foo {\n  extensions max to 100;\n}");
    assert_eq!(
        error_messages(&parsed)[0],
        "expected integer, lower bound for extensions"
    );
}

#[test]
fn test_extensions_missing_semicolon() {
    let parsed = parse("message Foo {\n  extensions 100 to 199\n}");

    assert_eq!(error_messages(&parsed), vec!["expected ';', but got '}'"]);
    // The statement itself survives.
    let body = message_named(&parsed, "Foo").body().expect("body");
    assert_eq!(body.extensions().count(), 1);
}

// ============================================================================
// Extend
// ============================================================================

#[test]
fn test_top_level_extend() {
    let parsed = parse(
        "message MyExt {\n\
           optional int32 bar = 1;\n\
           optional string baz = 2;\n\
           optional float qux = 3;\n\
         }\n\
         extend Foo {\n\
           optional MyExt my_ext = 123;\n\
         }",
    );
    assert!(parsed.ok(), "errors: {:?}", parsed.errors);

    let file = SourceFile::cast(parsed.syntax()).expect("source file");
    let extend = file
        .definitions()
        .find_map(|d| match d {
            protolens::parser::Definition::Extend(e) => Some(e),
            _ => None,
        })
        .expect("extend definition");
    assert_eq!(extend.target(), Some("Foo".to_string()));
    assert_eq!(extend.body().expect("body").properties().count(), 1);
}

#[test]
fn test_extend_nested_in_message() {
    let parsed = parse(
        "message Baz {\n\
           extend Foo {\n\
             optional int32 bar = 126;\n\
           }\n\
         }",
    );
    assert!(parsed.ok(), "errors: {:?}", parsed.errors);

    let body = message_named(&parsed, "Baz").body().expect("body");
    assert_eq!(body.extends().count(), 1);
}

// ============================================================================
// Truncated headers
// ============================================================================

#[test]
fn test_message_keyword_alone() {
    let parsed = parse("message ");

    assert_eq!(error_messages(&parsed), vec!["expected message name"]);
    let file = SourceFile::cast(parsed.syntax()).expect("source file");
    let messages: Vec<_> = file.messages().collect();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].name().is_none());
}

#[test]
fn test_message_header_without_body() {
    let parsed = parse("message Foo");

    assert_eq!(error_messages(&parsed), vec!["expected '{'"]);
    let message = message_named(&parsed, "Foo");
    assert!(message.body().is_none());
}
