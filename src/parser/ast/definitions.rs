use super::*;

// ============================================================================
// Root
// ============================================================================

ast_node!(SourceFile, SOURCE_FILE);

impl SourceFile {
    children_method!(definitions, Definition);
    children_method!(imports, ImportStatement);
    children_method!(file_options, FileOptionStatement);
    first_child_method!(package, PackageStatement);
    first_child_method!(syntax_statement, SyntaxStatement);

    children_method!(messages, MessageDefinition);
    children_method!(enums, EnumDefinition);
    children_method!(services, ServiceDefinition);
}

/// Any top-level definition
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Definition {
    Message(MessageDefinition),
    Enum(EnumDefinition),
    Service(ServiceDefinition),
    Extend(ExtendDefinition),
}

impl AstNode for Definition {
    fn can_cast(kind: SyntaxKind) -> bool {
        matches!(
            kind,
            SyntaxKind::MESSAGE_DEFINITION
                | SyntaxKind::ENUM_DEFINITION
                | SyntaxKind::SERVICE_DEFINITION
                | SyntaxKind::EXTEND_DEFINITION
        )
    }

    fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::MESSAGE_DEFINITION => Some(Self::Message(MessageDefinition(node))),
            SyntaxKind::ENUM_DEFINITION => Some(Self::Enum(EnumDefinition(node))),
            SyntaxKind::SERVICE_DEFINITION => Some(Self::Service(ServiceDefinition(node))),
            SyntaxKind::EXTEND_DEFINITION => Some(Self::Extend(ExtendDefinition(node))),
            _ => None,
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        match self {
            Self::Message(n) => n.syntax(),
            Self::Enum(n) => n.syntax(),
            Self::Service(n) => n.syntax(),
            Self::Extend(n) => n.syntax(),
        }
    }
}

// ============================================================================
// File-level statements
// ============================================================================

ast_node!(PackageStatement, PACKAGE_STATEMENT);

impl PackageStatement {
    first_child_method!(name, PackageName);
}

ast_node!(PackageName, PACKAGE_NAME);

impl PackageName {
    /// The dotted package path, e.g. `net.proto2.tutorial`
    pub fn text(&self) -> String {
        self.0.text().to_string()
    }
}

ast_node!(SyntaxStatement, SYNTAX_STATEMENT);

impl SyntaxStatement {
    first_child_method!(value, SyntaxValue);
}

ast_node!(SyntaxValue, SYNTAX_VALUE);

impl SyntaxValue {
    /// The declared syntax level with quotes stripped, e.g. `proto2`
    pub fn level(&self) -> Option<String> {
        let token = first_token(&self.0, SyntaxKind::STRING)?;
        Some(strip_quotes(token.text()).to_string())
    }
}

ast_node!(ImportStatement, IMPORT_STATEMENT);

impl ImportStatement {
    first_child_method!(value, ImportValue);

    /// The imported path with quotes stripped
    pub fn path(&self) -> Option<String> {
        self.value()?.path()
    }
}

ast_node!(ImportValue, IMPORT_VALUE);

impl ImportValue {
    pub fn path(&self) -> Option<String> {
        let token = first_token(&self.0, SyntaxKind::STRING)?;
        Some(strip_quotes(token.text()).to_string())
    }
}

ast_node!(LanguageStatement, LANGUAGE_STATEMENT);

impl LanguageStatement {
    /// The language literal, e.g. `c++header`
    pub fn language(&self) -> Option<SyntaxToken> {
        first_token(&self.0, SyntaxKind::LANGUAGE_LITERAL)
    }
}

// ============================================================================
// Messages
// ============================================================================

ast_node!(MessageDefinition, MESSAGE_DEFINITION);

impl MessageDefinition {
    first_child_method!(name, Name);
    first_child_method!(body, DefinitionBody);

    /// Fields declared directly in this message's body
    pub fn properties(&self) -> impl Iterator<Item = Property> + '_ {
        self.body()
            .into_iter()
            .flat_map(|body| body.properties().collect::<Vec<_>>())
    }
}

ast_node!(DefinitionBody, DEFINITION_BODY);

impl DefinitionBody {
    children_method!(properties, Property);
    children_method!(messages, MessageDefinition);
    children_method!(enums, EnumDefinition);
    children_method!(groups, GroupDefinition);
    children_method!(extends, ExtendDefinition);
    children_method!(extensions, ExtensionsStatement);
    children_method!(options, MessageOption);
}

ast_node!(ExtendDefinition, EXTEND_DEFINITION);

impl ExtendDefinition {
    first_child_method!(body, DefinitionBody);

    /// The extended message's name; a bare token, not a name node
    pub fn target(&self) -> Option<String> {
        first_token(&self.0, SyntaxKind::IDENT).map(|t| t.text().to_string())
    }
}

ast_node!(GroupDefinition, GROUP_DEFINITION);

impl GroupDefinition {
    first_child_method!(modifier, PropertyModifier);
    first_child_method!(name, Name);
    first_child_method!(id, NumericId);
    first_child_method!(body, DefinitionBody);
}

ast_node!(ExtensionsStatement, EXTENSIONS_STATEMENT);

impl ExtensionsStatement {
    first_child_method!(lower_bound, ExtensionsLowerBound);
    first_child_method!(upper_bound, ExtensionsUpperBound);
}

ast_node!(ExtensionsLowerBound, EXTENSIONS_LOWER_BOUND);

impl ExtensionsLowerBound {
    pub fn value(&self) -> Option<i64> {
        parse_int(&self.0.text().to_string())
    }
}

ast_node!(ExtensionsUpperBound, EXTENSIONS_UPPER_BOUND);

impl ExtensionsUpperBound {
    /// True for the open-ended `to max` form
    pub fn is_max(&self) -> bool {
        self.0.text() == "max"
    }

    pub fn value(&self) -> Option<i64> {
        parse_int(&self.0.text().to_string())
    }
}

// ============================================================================
// Enums
// ============================================================================

ast_node!(EnumDefinition, ENUM_DEFINITION);

impl EnumDefinition {
    first_child_method!(name, Name);
    first_child_method!(body, EnumBody);

    pub fn constants(&self) -> impl Iterator<Item = EnumConstant> + '_ {
        self.body()
            .into_iter()
            .flat_map(|body| body.constants().collect::<Vec<_>>())
    }
}

ast_node!(EnumBody, ENUM_BODY);

impl EnumBody {
    children_method!(constants, EnumConstant);
    children_method!(options, OptionStatement);
}

ast_node!(EnumConstant, ENUM_CONSTANT);

impl EnumConstant {
    first_child_method!(name, Name);
    first_child_method!(value, EnumValue);
}

ast_node!(EnumValue, ENUM_VALUE);

impl EnumValue {
    first_child_method!(literal, Literal);

    /// The constant's numeric value, decimal or hex
    pub fn value(&self) -> Option<i64> {
        parse_int(&self.0.text().to_string())
    }
}

// ============================================================================
// Services
// ============================================================================

ast_node!(ServiceDefinition, SERVICE_DEFINITION);

impl ServiceDefinition {
    first_child_method!(name, Name);
    first_child_method!(body, ServiceBody);

    pub fn rpcs(&self) -> impl Iterator<Item = RpcDefinition> + '_ {
        self.body()
            .into_iter()
            .flat_map(|body| body.rpcs().collect::<Vec<_>>())
    }
}

ast_node!(ServiceBody, SERVICE_BODY);

impl ServiceBody {
    children_method!(rpcs, RpcDefinition);
    children_method!(options, OptionStatement);
}

ast_node!(RpcDefinition, RPC_DEFINITION);

impl RpcDefinition {
    first_child_method!(name, Name);
    first_child_method!(input_type, RpcInputType);
    first_child_method!(return_type, RpcReturnType);
    first_child_method!(body, RpcBody);
}

ast_node!(RpcInputType, RPC_INPUT_TYPE);

impl RpcInputType {
    first_child_method!(reference, MessageTypeReference);
}

ast_node!(RpcReturnType, RPC_RETURN_TYPE);

impl RpcReturnType {
    first_child_method!(reference, MessageTypeReference);
}

ast_node!(RpcBody, RPC_BODY);

impl RpcBody {
    children_method!(options, OptionStatement);
}
