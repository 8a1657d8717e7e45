//! Single-variant fragment nodes.
//!
//! These have no union of their own: a reference to one is always a direct
//! id, and a list of them has no discriminator vector on the wire.

use crate::node_id::{
    AttributeArgumentClauseId, AttributeSpecifierRange, AttributeTokenId, CoreDeclaratorId,
    DeclarationRange, DeclaratorChunkRange, DeclaratorId, ExceptionDeclarationId, ExpressionId,
    ExpressionRange, ModuleNameId, ModulePartitionId, ModuleQualifierId, NestedNameSpecifierId,
    PtrOperatorRange, RequiresClauseId, SpecifierRange, StatementId, TemplateArgumentRange,
    TypeIdNodeId, UnqualifiedNameId,
};
use crate::{Name, TokenKind};

/// `module;` prologue of a module unit.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct GlobalModuleFragment {
    pub declaration_list: DeclarationRange,
}

/// `module :private;` epilogue of a module unit.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct PrivateModuleFragment {
    pub declaration_list: DeclarationRange,
}

/// `export module a.b:part [[attrs]];`
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct ModuleDeclaration {
    pub module_name: Option<ModuleNameId>,
    pub module_partition: Option<ModulePartitionId>,
    pub attribute_list: AttributeSpecifierRange,
}

/// Dotted module name; the qualifier is the part before the last dot.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct ModuleName {
    pub identifier: Option<Name>,
    pub module_qualifier: Option<ModuleQualifierId>,
}

/// One `ident.` step of a module name qualifier chain.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct ModuleQualifier {
    pub identifier: Option<Name>,
    pub module_qualifier: Option<ModuleQualifierId>,
}

/// `:partition` suffix of a module name.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct ModulePartition {
    pub module_name: Option<ModuleNameId>,
}

/// The operand of an import declaration.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct ImportName {
    pub module_partition: Option<ModulePartitionId>,
    pub module_name: Option<ModuleNameId>,
}

/// A declarator together with its optional initializer.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct InitDeclarator {
    pub declarator: Option<DeclaratorId>,
    pub requires_clause: Option<RequiresClauseId>,
    pub initializer: Option<ExpressionId>,
}

/// Pointer operators, a core, then function/array chunks, in source order.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Declarator {
    pub ptr_op_list: PtrOperatorRange,
    pub core_declarator: Option<CoreDeclaratorId>,
    pub declarator_chunk_list: DeclaratorChunkRange,
}

/// One declarator of a using-declaration.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct UsingDeclarator {
    pub is_pack: bool,
    pub nested_name_specifier: Option<NestedNameSpecifierId>,
    pub unqualified_id: Option<UnqualifiedNameId>,
}

/// One enumerator of an enum-specifier.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Enumerator {
    pub identifier: Option<Name>,
    pub attribute_list: AttributeSpecifierRange,
    pub expression: Option<ExpressionId>,
}

/// A type-id: type specifiers plus an abstract declarator.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct TypeIdNode {
    pub type_specifier_list: SpecifierRange,
    pub declarator: Option<DeclaratorId>,
}

/// A catch handler.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Handler {
    pub exception_declaration: Option<ExceptionDeclarationId>,
    pub statement: Option<StatementId>,
}

/// One base class of a class-specifier.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct BaseSpecifier {
    pub is_template_introduced: bool,
    pub is_virtual: bool,
    /// `public`, `protected` or `private`; `EofSymbol` when unspecified.
    pub access_specifier: TokenKind,
    pub attribute_list: AttributeSpecifierRange,
    pub nested_name_specifier: Option<NestedNameSpecifierId>,
    pub unqualified_id: Option<UnqualifiedNameId>,
}

impl Default for BaseSpecifier {
    fn default() -> Self {
        BaseSpecifier {
            is_template_introduced: false,
            is_virtual: false,
            access_specifier: TokenKind::EofSymbol,
            attribute_list: AttributeSpecifierRange::EMPTY,
            nested_name_specifier: None,
            unqualified_id: None,
        }
    }
}

/// `requires <constraint-expression>`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct RequiresClause {
    pub expression: Option<ExpressionId>,
}

/// The parenthesised parameter list of a function declarator.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct ParameterDeclarationClause {
    pub is_variadic: bool,
    /// Parameter-declaration elements.
    pub parameter_declaration_list: DeclarationRange,
}

/// `-> type-id` on a function declarator or lambda.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct TrailingReturnType {
    pub type_id: Option<TypeIdNodeId>,
}

/// A lambda specifier (`mutable`, `constexpr`, `consteval`, `static`).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct LambdaSpecifier {
    pub specifier: TokenKind,
}

impl Default for LambdaSpecifier {
    fn default() -> Self {
        LambdaSpecifier {
            specifier: TokenKind::EofSymbol,
        }
    }
}

/// A concept name with optional template arguments, constraining a
/// placeholder or template parameter.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct TypeConstraint {
    pub identifier: Option<Name>,
    pub nested_name_specifier: Option<NestedNameSpecifierId>,
    pub template_argument_list: TemplateArgumentRange,
}

/// The `(...)` argument blob of an attribute; token soup, not modelled.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct AttributeArgumentClause;

/// A single attribute inside `[[ ... ]]`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Attribute {
    pub attribute_token: Option<AttributeTokenId>,
    pub attribute_argument_clause: Option<AttributeArgumentClauseId>,
}

/// `using ns:` prefix inside `[[ ... ]]`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct AttributeUsingPrefix;

/// The placement arguments of a new-expression.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct NewPlacement {
    pub expression_list: ExpressionRange,
}

/// One `inline ns` step of a nested namespace definition name.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct NestedNamespaceSpecifier {
    pub identifier: Option<Name>,
    pub is_inline: bool,
}
