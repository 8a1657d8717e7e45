//! Specifier and template-parameter nodes.

use crate::node_id::{
    AttributeSpecifierRange, BaseSpecifierRange, DeclarationId, DeclarationRange, EnumeratorRange,
    ExpressionId, NestedNameSpecifierId, RequiresClauseId, SpecifierId, SpecifierRange,
    TemplateParameterRange, TypeConstraintId, TypeIdNodeId, UnqualifiedNameId,
};
use crate::{Name, TokenKind};

/// A declaration specifier: storage class, cv, function specifiers and the
/// whole type-specifier family.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Specifier {
    TypedefSpecifier,
    FriendSpecifier,
    ConstevalSpecifier,
    ConstinitSpecifier,
    ConstexprSpecifier,
    InlineSpecifier,
    StaticSpecifier,
    ExternSpecifier,
    ThreadLocalSpecifier,
    ThreadSpecifier,
    MutableSpecifier,
    VirtualSpecifier,
    ExplicitSpecifier {
        expression: Option<ExpressionId>,
    },
    AutoTypeSpecifier,
    VoidTypeSpecifier,
    SizeTypeSpecifier {
        /// `short` or `long`.
        specifier: TokenKind,
    },
    SignTypeSpecifier {
        /// `signed` or `unsigned`.
        specifier: TokenKind,
    },
    VaListTypeSpecifier {
        specifier: TokenKind,
    },
    IntegralTypeSpecifier {
        /// `char`, `int`, `bool`, one of the `charN_t` kinds, ...
        specifier: TokenKind,
    },
    FloatingPointTypeSpecifier {
        specifier: TokenKind,
    },
    ComplexTypeSpecifier,
    NamedTypeSpecifier {
        is_template_introduced: bool,
        nested_name_specifier: Option<NestedNameSpecifierId>,
        unqualified_id: Option<UnqualifiedNameId>,
    },
    AtomicTypeSpecifier {
        type_id: Option<TypeIdNodeId>,
    },
    UnderlyingTypeSpecifier {
        type_id: Option<TypeIdNodeId>,
    },
    ElaboratedTypeSpecifier {
        /// `class`, `struct`, `union` or `enum`.
        class_key: TokenKind,
        is_template_introduced: bool,
        attribute_list: AttributeSpecifierRange,
        nested_name_specifier: Option<NestedNameSpecifierId>,
        unqualified_id: Option<UnqualifiedNameId>,
    },
    DecltypeAutoSpecifier,
    DecltypeSpecifier {
        expression: Option<ExpressionId>,
    },
    PlaceholderTypeSpecifier {
        type_constraint: Option<TypeConstraintId>,
        specifier: Option<SpecifierId>,
    },
    ConstQualifier,
    VolatileQualifier,
    RestrictQualifier,
    EnumSpecifier {
        attribute_list: AttributeSpecifierRange,
        nested_name_specifier: Option<NestedNameSpecifierId>,
        unqualified_id: Option<UnqualifiedNameId>,
        type_specifier_list: SpecifierRange,
        enumerator_list: EnumeratorRange,
    },
    ClassSpecifier {
        class_key: TokenKind,
        is_final: bool,
        attribute_list: AttributeSpecifierRange,
        nested_name_specifier: Option<NestedNameSpecifierId>,
        unqualified_id: Option<UnqualifiedNameId>,
        base_specifier_list: BaseSpecifierRange,
        declaration_list: DeclarationRange,
    },
    TypenameSpecifier {
        nested_name_specifier: Option<NestedNameSpecifierId>,
        unqualified_id: Option<UnqualifiedNameId>,
    },
}

impl Specifier {
    /// Kebab-case node name used by the dumper.
    pub fn name(&self) -> &'static str {
        match self {
            Specifier::TypedefSpecifier => "typedef-specifier",
            Specifier::FriendSpecifier => "friend-specifier",
            Specifier::ConstevalSpecifier => "consteval-specifier",
            Specifier::ConstinitSpecifier => "constinit-specifier",
            Specifier::ConstexprSpecifier => "constexpr-specifier",
            Specifier::InlineSpecifier => "inline-specifier",
            Specifier::StaticSpecifier => "static-specifier",
            Specifier::ExternSpecifier => "extern-specifier",
            Specifier::ThreadLocalSpecifier => "thread-local-specifier",
            Specifier::ThreadSpecifier => "thread-specifier",
            Specifier::MutableSpecifier => "mutable-specifier",
            Specifier::VirtualSpecifier => "virtual-specifier",
            Specifier::ExplicitSpecifier { .. } => "explicit-specifier",
            Specifier::AutoTypeSpecifier => "auto-type-specifier",
            Specifier::VoidTypeSpecifier => "void-type-specifier",
            Specifier::SizeTypeSpecifier { .. } => "size-type-specifier",
            Specifier::SignTypeSpecifier { .. } => "sign-type-specifier",
            Specifier::VaListTypeSpecifier { .. } => "va-list-type-specifier",
            Specifier::IntegralTypeSpecifier { .. } => "integral-type-specifier",
            Specifier::FloatingPointTypeSpecifier { .. } => "floating-point-type-specifier",
            Specifier::ComplexTypeSpecifier => "complex-type-specifier",
            Specifier::NamedTypeSpecifier { .. } => "named-type-specifier",
            Specifier::AtomicTypeSpecifier { .. } => "atomic-type-specifier",
            Specifier::UnderlyingTypeSpecifier { .. } => "underlying-type-specifier",
            Specifier::ElaboratedTypeSpecifier { .. } => "elaborated-type-specifier",
            Specifier::DecltypeAutoSpecifier => "decltype-auto-specifier",
            Specifier::DecltypeSpecifier { .. } => "decltype-specifier",
            Specifier::PlaceholderTypeSpecifier { .. } => "placeholder-type-specifier",
            Specifier::ConstQualifier => "const-qualifier",
            Specifier::VolatileQualifier => "volatile-qualifier",
            Specifier::RestrictQualifier => "restrict-qualifier",
            Specifier::EnumSpecifier { .. } => "enum-specifier",
            Specifier::ClassSpecifier { .. } => "class-specifier",
            Specifier::TypenameSpecifier { .. } => "typename-specifier",
        }
    }
}

/// A template parameter.
///
/// `depth` and `index` identify the parameter position within the enclosing
/// template parameter scopes; both render unconditionally.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TemplateParameter {
    TemplateTypeParameter {
        depth: u32,
        index: u32,
        identifier: Option<Name>,
        is_pack: bool,
        template_parameter_list: TemplateParameterRange,
        requires_clause: Option<RequiresClauseId>,
        /// Default argument, an id-expression.
        id_expression: Option<ExpressionId>,
    },
    NonTypeTemplateParameter {
        depth: u32,
        index: u32,
        /// Always a parameter-declaration when present.
        declaration: Option<DeclarationId>,
    },
    TypenameTypeParameter {
        depth: u32,
        index: u32,
        identifier: Option<Name>,
        is_pack: bool,
        type_id: Option<TypeIdNodeId>,
    },
    ConstraintTypeParameter {
        depth: u32,
        index: u32,
        identifier: Option<Name>,
        type_constraint: Option<TypeConstraintId>,
        type_id: Option<TypeIdNodeId>,
    },
}

impl TemplateParameter {
    /// Kebab-case node name used by the dumper.
    pub fn name(&self) -> &'static str {
        match self {
            TemplateParameter::TemplateTypeParameter { .. } => "template-type-parameter",
            TemplateParameter::NonTypeTemplateParameter { .. } => "non-type-template-parameter",
            TemplateParameter::TypenameTypeParameter { .. } => "typename-type-parameter",
            TemplateParameter::ConstraintTypeParameter { .. } => "constraint-type-parameter",
        }
    }
}
