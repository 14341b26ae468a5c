//! Syntax kinds for the Rowan-based CST
//!
//! This enum defines all possible node and token kinds in the syntax tree.
//! It covers the proto1 and proto2 dialects of the protobuf IDL, including
//! the legacy constructs (groups, `message<T>` properties, language blocks).

/// All syntax kinds (tokens and nodes) in the protobuf IDL
///
/// Tokens are leaf nodes (identifiers, literals, punctuation).
/// Nodes are composite (definitions, bodies, properties, options).
///
/// Keywords have no token kinds of their own: every keyword is contextual
/// in proto1/proto2 (`optional string string = 1;` is legal), so keywords
/// reach the parser as `IDENT` and are matched by text. Where the grammar
/// treats one as a keyword, the token is wrapped in a `KEYWORD` node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA (whitespace and comments - preserved but not semantically meaningful)
    // =========================================================================
    WHITESPACE = 0,
    LINE_COMMENT,
    BLOCK_COMMENT,

    // =========================================================================
    // TOKENS
    // =========================================================================
    IDENT,              // identifier, possibly dotted: foo.bar.Baz
    INT_NUMBER,         // 42, -7
    HEX_NUMBER,         // 0xFF
    FLOAT_NUMBER,       // 3.14, -0.5
    STRING,             // "hello" or 'hello'
    LANGUAGE_LITERAL,   // c++header

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    L_BRACE,            // {
    R_BRACE,            // }
    L_BRACKET,          // [
    R_BRACKET,          // ]
    L_PAREN,            // (
    R_PAREN,            // )
    LT,                 // <
    GT,                 // >
    EQ,                 // =
    SEMICOLON,          // ;
    COMMA,              // ,

    // =========================================================================
    // COMPOSITE NODES (non-terminals in the grammar)
    // =========================================================================
    // Root
    SOURCE_FILE,

    // Top-level statements
    PACKAGE_STATEMENT,
    PACKAGE_NAME,
    SYNTAX_STATEMENT,
    SYNTAX_VALUE,
    IMPORT_STATEMENT,
    IMPORT_VALUE,
    LANGUAGE_STATEMENT,

    // Options
    OPTION,                 // option statement in file/enum/service/rpc scope
    FILE_OPTION_STATEMENT,
    MESSAGE_OPTION,
    OPTION_VALUE,
    CUSTOM_OPTION_NAME,
    CUSTOM_OPTION_VALUE,
    DEFAULT_VALUE,

    // Messages
    MESSAGE_DEFINITION,
    DEFINITION_BODY,
    EXTEND_DEFINITION,
    EXTENSIONS_STATEMENT,
    EXTENSIONS_LOWER_BOUND,
    EXTENSIONS_UPPER_BOUND,
    GROUP_DEFINITION,

    // Properties (fields) and their type wrappers
    SIMPLE_PROPERTY,
    ENUM_PROPERTY,
    USER_DEFINED_PROPERTY,
    MESSAGE_PROPERTY,           // legacy proto1: modifier message<Type> name = id;
    PROPERTY_MODIFIER,
    PROPERTY_TYPE,
    ENUM_PROPERTY_TYPE,
    USER_DEFINED_PROPERTY_TYPE,

    // Enums
    ENUM_DEFINITION,
    ENUM_BODY,
    ENUM_CONSTANT,
    ENUM_VALUE,

    // Services
    SERVICE_DEFINITION,
    SERVICE_BODY,
    RPC_DEFINITION,
    RPC_INPUT_TYPE,
    RPC_RETURN_TYPE,
    RPC_BODY,

    // Shared elements
    MESSAGE_TYPE_REFERENCE,
    NAME,
    NUMERIC_ID,
    KEYWORD,

    // Literal wrappers
    BOOLEAN_LITERAL,
    INTEGER_LITERAL,
    HEX_LITERAL,
    FLOAT_LITERAL,
    STRING_LITERAL,

    // Special
    ERROR,
    TOMBSTONE,  // For incremental reparsing

    #[doc(hidden)]
    __LAST,
}

impl SyntaxKind {
    /// Check if this is a trivia token (whitespace or comment)
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::WHITESPACE | Self::LINE_COMMENT | Self::BLOCK_COMMENT)
    }

    /// Check if this is a punctuation token
    pub fn is_punct(self) -> bool {
        (self as u16) >= (Self::L_BRACE as u16) && (self as u16) <= (Self::COMMA as u16)
    }

    /// Check if this is a literal-valued token
    pub fn is_literal_token(self) -> bool {
        matches!(
            self,
            Self::INT_NUMBER | Self::HEX_NUMBER | Self::FLOAT_NUMBER | Self::STRING
        )
    }

    /// Check if this is one of the literal wrapper nodes
    pub fn is_literal_node(self) -> bool {
        (self as u16) >= (Self::BOOLEAN_LITERAL as u16)
            && (self as u16) <= (Self::STRING_LITERAL as u16)
    }

    /// Check if this node kind declares a named definition
    pub fn is_definition(self) -> bool {
        matches!(
            self,
            Self::MESSAGE_DEFINITION
                | Self::ENUM_DEFINITION
                | Self::SERVICE_DEFINITION
                | Self::EXTEND_DEFINITION
                | Self::GROUP_DEFINITION
        )
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

impl From<rowan::SyntaxKind> for SyntaxKind {
    fn from(raw: rowan::SyntaxKind) -> Self {
        assert!(raw.0 < SyntaxKind::__LAST as u16);
        // Safety: we control all syntax kinds and check bounds above
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }
}

/// Language definition for Rowan
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProtoLanguage {}

impl rowan::Language for ProtoLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        raw.into()
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for convenience
pub type SyntaxNode = rowan::SyntaxNode<ProtoLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<ProtoLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<ProtoLanguage>;
