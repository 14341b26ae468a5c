use super::*;

// ============================================================================
// Properties (message fields)
// ============================================================================

/// Any field of a message body, whichever way its type resolved
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Property {
    Simple(SimpleProperty),
    Enum(EnumProperty),
    UserDefined(UserDefinedProperty),
    Message(MessageProperty),
}

impl AstNode for Property {
    fn can_cast(kind: SyntaxKind) -> bool {
        matches!(
            kind,
            SyntaxKind::SIMPLE_PROPERTY
                | SyntaxKind::ENUM_PROPERTY
                | SyntaxKind::USER_DEFINED_PROPERTY
                | SyntaxKind::MESSAGE_PROPERTY
        )
    }

    fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::SIMPLE_PROPERTY => Some(Self::Simple(SimpleProperty(node))),
            SyntaxKind::ENUM_PROPERTY => Some(Self::Enum(EnumProperty(node))),
            SyntaxKind::USER_DEFINED_PROPERTY => {
                Some(Self::UserDefined(UserDefinedProperty(node)))
            }
            SyntaxKind::MESSAGE_PROPERTY => Some(Self::Message(MessageProperty(node))),
            _ => None,
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        match self {
            Self::Simple(n) => n.syntax(),
            Self::Enum(n) => n.syntax(),
            Self::UserDefined(n) => n.syntax(),
            Self::Message(n) => n.syntax(),
        }
    }
}

impl Property {
    pub fn modifier(&self) -> Option<PropertyModifier> {
        self.syntax().children().find_map(PropertyModifier::cast)
    }

    pub fn name(&self) -> Option<Name> {
        self.syntax().children().find_map(Name::cast)
    }

    pub fn id(&self) -> Option<NumericId> {
        self.syntax().children().find_map(NumericId::cast)
    }

    pub fn default_value(&self) -> Option<DefaultValue> {
        self.syntax().children().find_map(DefaultValue::cast)
    }

    /// The declared type as written in source
    pub fn type_text(&self) -> Option<String> {
        match self {
            Self::Simple(n) => n.property_type().map(|t| t.text()),
            Self::Enum(n) => n.property_type().map(|t| t.text()),
            Self::UserDefined(n) => n.property_type().map(|t| t.text()),
            Self::Message(n) => n.type_reference().map(|t| t.text()),
        }
    }
}

ast_node!(SimpleProperty, SIMPLE_PROPERTY);

impl SimpleProperty {
    first_child_method!(modifier, PropertyModifier);
    first_child_method!(property_type, PropertyType);
    first_child_method!(name, Name);
    first_child_method!(id, NumericId);
    first_child_method!(default_value, DefaultValue);
}

ast_node!(EnumProperty, ENUM_PROPERTY);

impl EnumProperty {
    first_child_method!(modifier, PropertyModifier);
    first_child_method!(property_type, EnumPropertyType);
    first_child_method!(name, Name);
    first_child_method!(id, NumericId);
    first_child_method!(default_value, DefaultValue);
}

ast_node!(UserDefinedProperty, USER_DEFINED_PROPERTY);

impl UserDefinedProperty {
    first_child_method!(modifier, PropertyModifier);
    first_child_method!(property_type, UserDefinedPropertyType);
    first_child_method!(name, Name);
    first_child_method!(id, NumericId);
}

ast_node!(MessageProperty, MESSAGE_PROPERTY);

impl MessageProperty {
    first_child_method!(modifier, PropertyModifier);
    first_child_method!(type_reference, MessageTypeReference);
    first_child_method!(name, Name);
    first_child_method!(id, NumericId);
}

ast_node!(PropertyModifier, PROPERTY_MODIFIER);

impl PropertyModifier {
    pub fn text(&self) -> String {
        self.0.text().to_string()
    }

    pub fn is_repeated(&self) -> bool {
        self.0.text() == "repeated"
    }
}

ast_node!(PropertyType, PROPERTY_TYPE);

impl PropertyType {
    pub fn text(&self) -> String {
        self.0.text().to_string()
    }
}

ast_node!(EnumPropertyType, ENUM_PROPERTY_TYPE);

impl EnumPropertyType {
    pub fn text(&self) -> String {
        self.0.text().to_string()
    }
}

ast_node!(UserDefinedPropertyType, USER_DEFINED_PROPERTY_TYPE);

impl UserDefinedPropertyType {
    pub fn text(&self) -> String {
        self.0.text().to_string()
    }
}

// ============================================================================
// Common leaves
// ============================================================================

ast_node!(Name, NAME);

impl Name {
    /// The identifier text, possibly dotted
    pub fn text(&self) -> String {
        self.0.text().to_string()
    }
}

ast_node!(NumericId, NUMERIC_ID);

impl NumericId {
    pub fn value(&self) -> Option<i64> {
        parse_int(&self.0.text().to_string())
    }
}

ast_node!(Keyword, KEYWORD);

impl Keyword {
    pub fn text(&self) -> String {
        self.0.text().to_string()
    }
}

ast_node!(MessageTypeReference, MESSAGE_TYPE_REFERENCE);

impl MessageTypeReference {
    pub fn text(&self) -> String {
        self.0.text().to_string()
    }
}

// ============================================================================
// Literals
// ============================================================================

ast_node!(BooleanLiteral, BOOLEAN_LITERAL);

impl BooleanLiteral {
    pub fn value(&self) -> bool {
        self.0.text() == "true"
    }
}

ast_node!(IntegerLiteral, INTEGER_LITERAL);

impl IntegerLiteral {
    pub fn value(&self) -> Option<i64> {
        parse_int(&self.0.text().to_string())
    }
}

ast_node!(HexLiteral, HEX_LITERAL);

impl HexLiteral {
    pub fn value(&self) -> Option<i64> {
        parse_int(&self.0.text().to_string())
    }
}

ast_node!(FloatLiteral, FLOAT_LITERAL);

impl FloatLiteral {
    pub fn value(&self) -> Option<f64> {
        self.0.text().to_string().parse().ok()
    }
}

ast_node!(StringLiteral, STRING_LITERAL);

impl StringLiteral {
    /// The string contents with quotes stripped
    pub fn value(&self) -> String {
        strip_quotes(&self.0.text().to_string()).to_string()
    }
}

/// Any literal value node
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Literal {
    Boolean(BooleanLiteral),
    Integer(IntegerLiteral),
    Hex(HexLiteral),
    Float(FloatLiteral),
    Str(StringLiteral),
}

impl AstNode for Literal {
    fn can_cast(kind: SyntaxKind) -> bool {
        matches!(
            kind,
            SyntaxKind::BOOLEAN_LITERAL
                | SyntaxKind::INTEGER_LITERAL
                | SyntaxKind::HEX_LITERAL
                | SyntaxKind::FLOAT_LITERAL
                | SyntaxKind::STRING_LITERAL
        )
    }

    fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::BOOLEAN_LITERAL => Some(Self::Boolean(BooleanLiteral(node))),
            SyntaxKind::INTEGER_LITERAL => Some(Self::Integer(IntegerLiteral(node))),
            SyntaxKind::HEX_LITERAL => Some(Self::Hex(HexLiteral(node))),
            SyntaxKind::FLOAT_LITERAL => Some(Self::Float(FloatLiteral(node))),
            SyntaxKind::STRING_LITERAL => Some(Self::Str(StringLiteral(node))),
            _ => None,
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        match self {
            Self::Boolean(n) => n.syntax(),
            Self::Integer(n) => n.syntax(),
            Self::Hex(n) => n.syntax(),
            Self::Float(n) => n.syntax(),
            Self::Str(n) => n.syntax(),
        }
    }
}

// ============================================================================
// Options
// ============================================================================

ast_node!(OptionStatement, OPTION);

impl OptionStatement {
    first_child_method!(name, Name);
    first_child_method!(value, OptionValue);
}

ast_node!(FileOptionStatement, FILE_OPTION_STATEMENT);

impl FileOptionStatement {
    first_child_method!(name, Name);
    first_child_method!(value, OptionValue);
}

ast_node!(MessageOption, MESSAGE_OPTION);

impl MessageOption {
    first_child_method!(name, Name);
    first_child_method!(value, OptionValue);
}

ast_node!(OptionValue, OPTION_VALUE);

impl OptionValue {
    first_child_method!(literal, Literal);

    pub fn text(&self) -> String {
        self.0.text().to_string()
    }
}

ast_node!(DefaultValue, DEFAULT_VALUE);

impl DefaultValue {
    first_child_method!(literal, Literal);
    first_child_method!(name, Name);

    pub fn text(&self) -> String {
        self.0.text().to_string()
    }
}

ast_node!(CustomOptionName, CUSTOM_OPTION_NAME);

impl CustomOptionName {
    pub fn text(&self) -> String {
        self.0.text().to_string()
    }
}

ast_node!(CustomOptionValue, CUSTOM_OPTION_VALUE);

impl CustomOptionValue {
    first_child_method!(literal, Literal);
}
