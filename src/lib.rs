//! # protolens-base
//!
//! Core library for parsing proto1/proto2 interface definitions into a
//! lossless, error-tolerant concrete syntax tree.
//!
//! Parsing is total: any input, well-formed or not, produces a complete
//! tree covering every byte of the source plus range-anchored
//! diagnostics. The tree is a rowan green tree; a typed AST layer on top
//! gives shape-checked accessors for downstream tooling.

/// Parser: Logos lexer, recursive-descent grammar over a rowan CST, typed AST
pub mod parser;

// Re-export commonly needed items
pub use parser::keywords;
pub use parser::{
    AstNode, DefaultOptionProvider, ErrorCode, OptionProvider, Parse, Severity, SourceFile,
    SyntaxError, SyntaxKind, SyntaxNode, TextRange, TextSize, parse, parse_with,
};
