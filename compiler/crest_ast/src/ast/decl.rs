//! Declaration nodes.
//!
//! One closed enum covering everything that can appear at declaration
//! position, from namespace bodies down to the inline-assembly operand
//! fragments. Children are arena ids; lists are arena ranges in source
//! order.

use crate::node_id::{
    AttributeSpecifierRange, DeclarationId, DeclarationRange, DeclaratorId, ExpressionId,
    ImportNameId, InitDeclaratorRange, NestedNameSpecifierId, NestedNamespaceSpecifierRange,
    ParameterDeclarationClauseId, RequiresClauseId, SpecifierId, SpecifierRange,
    TemplateParameterRange, TypeIdNodeId, UnqualifiedNameId, UnqualifiedNameRange,
};
use crate::node_id::{
    FunctionBodyId, GlobalModuleFragmentId, ModuleDeclarationId, PrivateModuleFragmentId,
    StatementId,
};
use crate::{LiteralId, Name, TokenKind};

/// A declaration.
///
/// The `Asm*` variants are only ever referenced from the dedicated lists of
/// [`Declaration::AsmDeclaration`]; they live in this category because the
/// grammar treats them as declarations.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Declaration {
    SimpleDeclaration {
        attribute_list: AttributeSpecifierRange,
        decl_specifier_list: SpecifierRange,
        init_declarator_list: InitDeclaratorRange,
        requires_clause: Option<RequiresClauseId>,
    },
    AsmDeclaration {
        /// The assembly string.
        literal: Option<LiteralId>,
        attribute_list: AttributeSpecifierRange,
        asm_qualifier_list: DeclarationRange,
        output_operand_list: DeclarationRange,
        input_operand_list: DeclarationRange,
        clobber_list: DeclarationRange,
        goto_label_list: DeclarationRange,
    },
    NamespaceAliasDefinition {
        identifier: Option<Name>,
        nested_name_specifier: Option<NestedNameSpecifierId>,
        unqualified_id: Option<UnqualifiedNameId>,
    },
    UsingDeclaration {
        using_declarator_list: crate::node_id::UsingDeclaratorRange,
    },
    UsingEnumDeclaration {
        /// Always an elaborated-type-specifier when present.
        enum_type_specifier: Option<SpecifierId>,
    },
    UsingDirective {
        attribute_list: AttributeSpecifierRange,
        nested_name_specifier: Option<NestedNameSpecifierId>,
        unqualified_id: Option<UnqualifiedNameId>,
    },
    StaticAssertDeclaration {
        /// The message string, if the assertion has one.
        literal: Option<LiteralId>,
        expression: Option<ExpressionId>,
    },
    AliasDeclaration {
        identifier: Option<Name>,
        attribute_list: AttributeSpecifierRange,
        type_id: Option<TypeIdNodeId>,
    },
    OpaqueEnumDeclaration {
        attribute_list: AttributeSpecifierRange,
        nested_name_specifier: Option<NestedNameSpecifierId>,
        unqualified_id: Option<UnqualifiedNameId>,
        type_specifier_list: SpecifierRange,
    },
    FunctionDefinition {
        attribute_list: AttributeSpecifierRange,
        decl_specifier_list: SpecifierRange,
        declarator: Option<DeclaratorId>,
        requires_clause: Option<RequiresClauseId>,
        function_body: Option<FunctionBodyId>,
    },
    TemplateDeclaration {
        template_parameter_list: TemplateParameterRange,
        requires_clause: Option<RequiresClauseId>,
        declaration: Option<DeclarationId>,
    },
    ConceptDefinition {
        identifier: Option<Name>,
        expression: Option<ExpressionId>,
    },
    DeductionGuide {
        identifier: Option<Name>,
        explicit_specifier: Option<SpecifierId>,
        parameter_declaration_clause: Option<ParameterDeclarationClauseId>,
        /// Always a simple-template-id when present.
        template_id: Option<UnqualifiedNameId>,
    },
    ExplicitInstantiation {
        declaration: Option<DeclarationId>,
    },
    ExportDeclaration {
        declaration: Option<DeclarationId>,
    },
    ExportCompoundDeclaration {
        declaration_list: DeclarationRange,
    },
    LinkageSpecification {
        string_literal: Option<LiteralId>,
        declaration_list: DeclarationRange,
    },
    NamespaceDefinition {
        identifier: Option<Name>,
        is_inline: bool,
        attribute_list: AttributeSpecifierRange,
        nested_namespace_specifier_list: NestedNamespaceSpecifierRange,
        extra_attribute_list: AttributeSpecifierRange,
        declaration_list: DeclarationRange,
    },
    EmptyDeclaration,
    AttributeDeclaration {
        attribute_list: AttributeSpecifierRange,
    },
    ModuleImportDeclaration {
        import_name: Option<ImportNameId>,
        attribute_list: AttributeSpecifierRange,
    },
    ParameterDeclaration {
        identifier: Option<Name>,
        is_this_introduced: bool,
        is_pack: bool,
        attribute_list: AttributeSpecifierRange,
        type_specifier_list: SpecifierRange,
        declarator: Option<DeclaratorId>,
        expression: Option<ExpressionId>,
    },
    AccessDeclaration {
        /// `public`, `protected` or `private`; `EofSymbol` when absent.
        access_specifier: TokenKind,
    },
    ForRangeDeclaration,
    StructuredBindingDeclaration {
        attribute_list: AttributeSpecifierRange,
        decl_specifier_list: SpecifierRange,
        /// Name-id elements.
        binding_list: UnqualifiedNameRange,
        initializer: Option<ExpressionId>,
    },
    AsmOperand {
        symbolic_name: Option<Name>,
        constraint_literal: Option<LiteralId>,
        expression: Option<ExpressionId>,
    },
    AsmQualifier {
        /// `volatile`, `inline` or `goto`; `EofSymbol` when absent.
        qualifier: TokenKind,
    },
    AsmClobber {
        literal: Option<LiteralId>,
    },
    AsmGotoLabel {
        identifier: Option<Name>,
    },
}

impl Declaration {
    /// Kebab-case node name used by the dumper.
    pub fn name(&self) -> &'static str {
        match self {
            Declaration::SimpleDeclaration { .. } => "simple-declaration",
            Declaration::AsmDeclaration { .. } => "asm-declaration",
            Declaration::NamespaceAliasDefinition { .. } => "namespace-alias-definition",
            Declaration::UsingDeclaration { .. } => "using-declaration",
            Declaration::UsingEnumDeclaration { .. } => "using-enum-declaration",
            Declaration::UsingDirective { .. } => "using-directive",
            Declaration::StaticAssertDeclaration { .. } => "static-assert-declaration",
            Declaration::AliasDeclaration { .. } => "alias-declaration",
            Declaration::OpaqueEnumDeclaration { .. } => "opaque-enum-declaration",
            Declaration::FunctionDefinition { .. } => "function-definition",
            Declaration::TemplateDeclaration { .. } => "template-declaration",
            Declaration::ConceptDefinition { .. } => "concept-definition",
            Declaration::DeductionGuide { .. } => "deduction-guide",
            Declaration::ExplicitInstantiation { .. } => "explicit-instantiation",
            Declaration::ExportDeclaration { .. } => "export-declaration",
            Declaration::ExportCompoundDeclaration { .. } => "export-compound-declaration",
            Declaration::LinkageSpecification { .. } => "linkage-specification",
            Declaration::NamespaceDefinition { .. } => "namespace-definition",
            Declaration::EmptyDeclaration => "empty-declaration",
            Declaration::AttributeDeclaration { .. } => "attribute-declaration",
            Declaration::ModuleImportDeclaration { .. } => "module-import-declaration",
            Declaration::ParameterDeclaration { .. } => "parameter-declaration",
            Declaration::AccessDeclaration { .. } => "access-declaration",
            Declaration::ForRangeDeclaration => "for-range-declaration",
            Declaration::StructuredBindingDeclaration { .. } => "structured-binding-declaration",
            Declaration::AsmOperand { .. } => "asm-operand",
            Declaration::AsmQualifier { .. } => "asm-qualifier",
            Declaration::AsmClobber { .. } => "asm-clobber",
            Declaration::AsmGotoLabel { .. } => "asm-goto-label",
        }
    }
}

/// The root of a translation unit.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Unit {
    TranslationUnit {
        declaration_list: DeclarationRange,
    },
    ModuleUnit {
        global_module_fragment: Option<GlobalModuleFragmentId>,
        module_declaration: Option<ModuleDeclarationId>,
        declaration_list: DeclarationRange,
        private_module_fragment: Option<PrivateModuleFragmentId>,
    },
}

impl Unit {
    /// Kebab-case node name used by the dumper.
    pub fn name(&self) -> &'static str {
        match self {
            Unit::TranslationUnit { .. } => "translation-unit",
            Unit::ModuleUnit { .. } => "module-unit",
        }
    }
}

/// A statement.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Statement {
    LabeledStatement {
        identifier: Option<Name>,
    },
    CaseStatement {
        expression: Option<ExpressionId>,
    },
    DefaultStatement,
    ExpressionStatement {
        expression: Option<ExpressionId>,
    },
    CompoundStatement {
        statement_list: crate::node_id::StatementRange,
    },
    IfStatement {
        initializer: Option<StatementId>,
        condition: Option<ExpressionId>,
        statement: Option<StatementId>,
        else_statement: Option<StatementId>,
    },
    ConstevalIfStatement {
        is_not: bool,
        statement: Option<StatementId>,
        else_statement: Option<StatementId>,
    },
    SwitchStatement {
        initializer: Option<StatementId>,
        condition: Option<ExpressionId>,
        statement: Option<StatementId>,
    },
    WhileStatement {
        condition: Option<ExpressionId>,
        statement: Option<StatementId>,
    },
    DoStatement {
        statement: Option<StatementId>,
        expression: Option<ExpressionId>,
    },
    ForRangeStatement {
        initializer: Option<StatementId>,
        range_declaration: Option<DeclarationId>,
        range_initializer: Option<ExpressionId>,
        statement: Option<StatementId>,
    },
    ForStatement {
        initializer: Option<StatementId>,
        condition: Option<ExpressionId>,
        expression: Option<ExpressionId>,
        statement: Option<StatementId>,
    },
    BreakStatement,
    ContinueStatement,
    ReturnStatement {
        expression: Option<ExpressionId>,
    },
    CoroutineReturnStatement {
        expression: Option<ExpressionId>,
    },
    GotoStatement {
        identifier: Option<Name>,
    },
    DeclarationStatement {
        declaration: Option<DeclarationId>,
    },
    TryBlockStatement {
        statement: Option<StatementId>,
        handler_list: crate::node_id::HandlerRange,
    },
}

impl Statement {
    /// Kebab-case node name used by the dumper.
    pub fn name(&self) -> &'static str {
        match self {
            Statement::LabeledStatement { .. } => "labeled-statement",
            Statement::CaseStatement { .. } => "case-statement",
            Statement::DefaultStatement => "default-statement",
            Statement::ExpressionStatement { .. } => "expression-statement",
            Statement::CompoundStatement { .. } => "compound-statement",
            Statement::IfStatement { .. } => "if-statement",
            Statement::ConstevalIfStatement { .. } => "consteval-if-statement",
            Statement::SwitchStatement { .. } => "switch-statement",
            Statement::WhileStatement { .. } => "while-statement",
            Statement::DoStatement { .. } => "do-statement",
            Statement::ForRangeStatement { .. } => "for-range-statement",
            Statement::ForStatement { .. } => "for-statement",
            Statement::BreakStatement => "break-statement",
            Statement::ContinueStatement => "continue-statement",
            Statement::ReturnStatement { .. } => "return-statement",
            Statement::CoroutineReturnStatement { .. } => "coroutine-return-statement",
            Statement::GotoStatement { .. } => "goto-statement",
            Statement::DeclarationStatement { .. } => "declaration-statement",
            Statement::TryBlockStatement { .. } => "try-block-statement",
        }
    }
}
