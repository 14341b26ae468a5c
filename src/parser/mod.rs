//! Rowan-based error-tolerant parser for protocol buffer definitions
//!
//! This module provides a lossless parser using:
//! - **logos** for fast lexing
//! - **rowan** for the CST (Concrete Syntax Tree)
//!
//! This is the rust-analyzer approach: we build a lossless CST that preserves
//! all whitespace and comments, then extract an AST layer on top.
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos) → Tokens with SyntaxKind
//!     ↓
//! Parser → GreenNode tree (immutable, cheap to clone)
//!     ↓
//! SyntaxNode (rowan) → CST with parent pointers
//!     ↓
//! AST layer → Typed wrappers over SyntaxNode
//! ```
//!
//! Parsing never fails: malformed input yields a complete tree covering
//! every byte of the source plus a list of range-anchored errors. Syntax
//! errors are recovered at statement boundaries, so one bad definition
//! does not take the rest of the file with it.

#[allow(clippy::module_inception)]
mod parser;

pub mod ast;
pub mod errors;
pub mod keywords;
pub mod providers;

mod grammar;
mod lexer;
mod symbols;
mod syntax_kind;

pub use ast::*;
pub use errors::{ErrorCode, Severity, SyntaxError};
pub use lexer::{Lexer, Token, tokenize};
pub use parser::{Parse, parse, parse_with};
pub use providers::{DefaultOptionProvider, OptionProvider};
pub use syntax_kind::{ProtoLanguage, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};

/// Re-export rowan types for convenience
pub use rowan::{GreenNode, TextRange, TextSize};
