//! Parser error handling module
//!
//! This module provides enhanced error handling for the proto parser:
//! - Categorized error codes for filtering and documentation
//! - Severity levels and suggestions/hints for common mistakes
//! - Related span tracking (e.g., "opened here" for unclosed braces)

mod codes;
mod error;

pub use codes::ErrorCode;
pub use error::{RelatedInfo, Severity, SyntaxError, SyntaxErrorBuilder};
