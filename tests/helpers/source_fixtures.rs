//! Shared source fixtures for the integration suites.

use once_cell::sync::Lazy;
use protolens::{AstNode, Parse, SourceFile, parse};

/// Address-book flavored proto2 source touching most of the grammar:
/// file statements, nested messages, a nested enum, a group, extensions,
/// an extend block and a service with rpc bodies.
pub const ADDRESS_BOOK_PROTO: &str = r#"// Address book sample.

syntax = "proto2";

package net.proto2.tutorial;

import "net/proto2/proto/descriptor.proto";

option java_package = "com.example.tutorial";
option java_outer_classname = "AddressBookProtos";
option optimize_for = SPEED;

message Person {
  required string name = 1;
  required int32 id = 2;
  optional string email = 3;

  enum PhoneType {
    MOBILE = 0;
    HOME = 1;
    WORK = 2;
  }

  message PhoneNumber {
    required string number = 1;
    optional PhoneType type = 2 [default = HOME];
  }

  repeated PhoneNumber phone = 4;

  repeated group Alias = 5 {
    required string nickname = 1;
  }

  extensions 500 to max;
}

message AddressBook {
  repeated Person person = 1;
}

extend Person {
  optional int32 age = 500;
}

service AddressBookSearch {
  option deprecated = true;
  rpc Lookup (LookupRequest) returns (Person);
  rpc Update (Person) returns (AddressBook) {
    option deprecated = true;
  };
}
"#;

/// Parsed once for every suite that only reads from it. Green trees are
/// immutable, so each test builds its own red tree with `syntax()`.
static ADDRESS_BOOK: Lazy<Parse> = Lazy::new(|| parse(ADDRESS_BOOK_PROTO));

pub fn address_book() -> &'static Parse {
    &ADDRESS_BOOK
}

/// Parse `input` and cast the root, panicking on any recorded error.
pub fn parse_clean(input: &str) -> SourceFile {
    let parsed = parse(input);
    assert!(
        parsed.errors.is_empty(),
        "expected a clean parse of {input:?}, got {:?}",
        parsed.errors
    );
    SourceFile::cast(parsed.syntax()).expect("root is always a source file")
}

/// All recorded error messages, in parse order.
pub fn error_messages(parsed: &Parse) -> Vec<String> {
    parsed.errors.iter().map(|e| e.message.clone()).collect()
}
