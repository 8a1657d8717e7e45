//! Binary AST encoder.
//!
//! Encodes a translation unit's AST into the wire envelope. The sweep is
//! post-order: children are encoded (and assigned table indices) before the
//! parent record that references them is written, so every reference in the
//! output points backwards.
//!
//! Output is deterministic: table and string pool indices are assigned in
//! traversal order, which is a function of the AST alone. Re-encoding a
//! decoded unit reproduces the byte stream exactly.

use rustc_hash::FxHashMap;

use crest_ast::ast::*;
use crest_ast::{
    AstArena, Control, LiteralId, Name, TranslationUnit,
};
use crest_ast::{
    AttributeRange, AttributeSpecifierId, AttributeSpecifierRange, AttributeTokenId,
    BaseSpecifierRange, CoreDeclaratorId, DeclarationId, DeclarationRange, DeclaratorChunkId,
    DeclaratorChunkRange, DeclaratorId, EnumeratorRange, ExceptionDeclarationId,
    ExceptionSpecifierId, ExpressionId, ExpressionRange, FunctionBodyId, GlobalModuleFragmentId,
    HandlerRange, ImportNameId, InitDeclaratorRange, LambdaCaptureId, LambdaCaptureRange,
    LambdaSpecifierRange, MemInitializerId, MemInitializerRange, ModuleDeclarationId,
    ModuleNameId, ModulePartitionId, ModuleQualifierId, NestedNameSpecifierId,
    NestedNamespaceSpecifierRange, NewInitializerId, NewPlacementId,
    ParameterDeclarationClauseId, PrivateModuleFragmentId, PtrOperatorId, PtrOperatorRange,
    RequirementId, RequirementRange, RequiresClauseId, SpecifierId, SpecifierRange, StatementId,
    StatementRange, TemplateArgumentId, TemplateArgumentRange, TemplateParameterId,
    TemplateParameterRange, TrailingReturnTypeId, TypeConstraintId, TypeIdNodeId,
    TypeIdNodeRange, UnitId, UnqualifiedNameId, UnqualifiedNameRange, UsingDeclaratorRange,
};

use crate::wire::{self, put_u16, put_u32, put_u8, TAG_NULL};

/// Encode a translation unit. Units without a root encode an empty envelope
/// with a null root reference.
pub fn encode(unit: &TranslationUnit) -> Vec<u8> {
    let mut encoder = AstEncoder::new(unit.arena(), unit.control());

    let file_name = if unit.file_name().is_empty() {
        0
    } else {
        encoder.intern_str(unit.file_name())
    };

    let (root_tag, root_index) = encoder.unit_ref(unit.root());
    encoder.finish(file_name, root_tag, root_index)
}

struct AstEncoder<'a> {
    arena: &'a AstArena,
    control: &'a Control,
    tables: Vec<Vec<Vec<u8>>>,
    pool: Vec<&'a str>,
    pool_index: FxHashMap<&'a str, u32>,
}

impl<'a> AstEncoder<'a> {
    fn new(arena: &'a AstArena, control: &'a Control) -> Self {
        AstEncoder {
            arena,
            control,
            tables: vec![Vec::new(); wire::TABLE_COUNT],
            pool: Vec::new(),
            pool_index: FxHashMap::default(),
        }
    }

    /// Assemble the envelope once the sweep is complete.
    fn finish(self, file_name: u32, root_tag: u8, root_index: u32) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&wire::MAGIC);
        put_u32(&mut out, wire::VERSION);

        put_u32(&mut out, self.pool.len() as u32);
        for entry in &self.pool {
            put_u32(&mut out, entry.len() as u32);
            out.extend_from_slice(entry.as_bytes());
        }

        put_u32(&mut out, file_name);

        let mut records = 0usize;
        for table in &self.tables {
            put_u32(&mut out, table.len() as u32);
            records += table.len();
            for record in table {
                put_u32(&mut out, record.len() as u32);
                out.extend_from_slice(record);
            }
        }

        put_u8(&mut out, root_tag);
        put_u32(&mut out, root_index);

        tracing::debug!(
            records,
            strings = self.pool.len(),
            bytes = out.len(),
            "encoded translation unit"
        );
        out
    }

    fn push_record(&mut self, table: usize, record: Vec<u8>) -> u32 {
        let index = self.tables[table].len() as u32;
        self.tables[table].push(record);
        index
    }

    /// Get-or-add a string pool entry; references are 1-based.
    fn intern_str(&mut self, s: &'a str) -> u32 {
        if let Some(&index) = self.pool_index.get(s) {
            return index;
        }
        self.pool.push(s);
        let index = self.pool.len() as u32;
        self.pool_index.insert(s, index);
        index
    }

    fn put_ident(&mut self, out: &mut Vec<u8>, name: Option<Name>) {
        let reference = match name {
            Some(name) => {
                let control = self.control;
                self.intern_str(control.idents().lookup(name))
            }
            None => 0,
        };
        put_u32(out, reference);
    }

    fn put_literal(&mut self, out: &mut Vec<u8>, literal: Option<LiteralId>) {
        let reference = match literal {
            Some(literal) => {
                let control = self.control;
                self.intern_str(control.literals().get(literal).value())
            }
            None => 0,
        };
        put_u32(out, reference);
    }

    fn put_child(out: &mut Vec<u8>, reference: (u8, u32)) {
        put_u8(out, reference.0);
        put_u32(out, reference.1);
    }
}

/// Generates a tagged-list writer: entry vector then discriminator vector.
macro_rules! tagged_list {
    ($writer:ident, $list_get:ident, $range:ty, $child_ref:ident, $id:ty) => {
        impl<'a> AstEncoder<'a> {
            fn $writer(&mut self, out: &mut Vec<u8>, range: $range) {
                let ids: Vec<$id> = self.arena.$list_get(range).to_vec();
                let refs: Vec<(u8, u32)> =
                    ids.into_iter().map(|id| self.$child_ref(Some(id))).collect();
                put_u32(out, refs.len() as u32);
                for &(_, index) in &refs {
                    put_u32(out, index);
                }
                put_u32(out, refs.len() as u32);
                for &(tag, _) in &refs {
                    put_u8(out, tag);
                }
            }
        }
    };
}

/// Generates a fragment-list writer: entry vector only, 1-based refs.
macro_rules! fragment_list {
    ($writer:ident, $list_get:ident, $range:ty, $child_ref:ident, $id:ty) => {
        impl<'a> AstEncoder<'a> {
            fn $writer(&mut self, out: &mut Vec<u8>, range: $range) {
                let ids: Vec<$id> = self.arena.$list_get(range).to_vec();
                let refs: Vec<u32> = ids.into_iter().map(|id| self.$child_ref(Some(id))).collect();
                put_u32(out, refs.len() as u32);
                for &reference in &refs {
                    put_u32(out, reference);
                }
            }
        }
    };
}

tagged_list!(w_decl_list, declaration_list, DeclarationRange, declaration_ref, DeclarationId);
tagged_list!(w_stmt_list, statement_list, StatementRange, statement_ref, StatementId);
tagged_list!(w_expr_list, expression_list, ExpressionRange, expression_ref, ExpressionId);
tagged_list!(w_spec_list, specifier_list, SpecifierRange, specifier_ref, SpecifierId);
tagged_list!(
    w_templ_param_list,
    template_parameter_list,
    TemplateParameterRange,
    template_parameter_ref,
    TemplateParameterId
);
tagged_list!(
    w_templ_arg_list,
    template_argument_list,
    TemplateArgumentRange,
    template_argument_ref,
    TemplateArgumentId
);
tagged_list!(w_ptr_op_list, ptr_operator_list, PtrOperatorRange, ptr_operator_ref, PtrOperatorId);
tagged_list!(
    w_chunk_list,
    declarator_chunk_list,
    DeclaratorChunkRange,
    declarator_chunk_ref,
    DeclaratorChunkId
);
tagged_list!(
    w_unqual_list,
    unqualified_name_list,
    UnqualifiedNameRange,
    unqualified_name_ref,
    UnqualifiedNameId
);
tagged_list!(
    w_requirement_list,
    requirement_list,
    RequirementRange,
    requirement_ref,
    RequirementId
);
tagged_list!(
    w_mem_init_list,
    mem_initializer_list,
    MemInitializerRange,
    mem_initializer_ref,
    MemInitializerId
);
tagged_list!(
    w_capture_list,
    lambda_capture_list,
    LambdaCaptureRange,
    lambda_capture_ref,
    LambdaCaptureId
);
tagged_list!(
    w_attr_spec_list,
    attribute_specifier_list,
    AttributeSpecifierRange,
    attribute_specifier_ref,
    AttributeSpecifierId
);

fragment_list!(
    w_init_declarator_list,
    init_declarator_list,
    InitDeclaratorRange,
    init_declarator_ref,
    crest_ast::InitDeclaratorId
);
fragment_list!(
    w_using_declarator_list,
    using_declarator_list,
    UsingDeclaratorRange,
    using_declarator_ref,
    crest_ast::UsingDeclaratorId
);
fragment_list!(
    w_enumerator_list,
    enumerator_list,
    EnumeratorRange,
    enumerator_ref,
    crest_ast::EnumeratorId
);
fragment_list!(
    w_base_spec_list,
    base_specifier_list,
    BaseSpecifierRange,
    base_specifier_ref,
    crest_ast::BaseSpecifierId
);
fragment_list!(
    w_handler_list,
    handler_list,
    HandlerRange,
    handler_ref,
    crest_ast::HandlerId
);
fragment_list!(
    w_lambda_spec_list,
    lambda_specifier_list,
    LambdaSpecifierRange,
    lambda_specifier_ref,
    crest_ast::LambdaSpecifierId
);
fragment_list!(
    w_type_id_list,
    type_id_list,
    TypeIdNodeRange,
    type_id_ref,
    TypeIdNodeId
);
fragment_list!(
    w_attribute_list,
    attribute_list,
    AttributeRange,
    attribute_ref,
    crest_ast::AttributeId
);
fragment_list!(
    w_nested_ns_list,
    nested_namespace_specifier_list,
    NestedNamespaceSpecifierRange,
    nested_namespace_specifier_ref,
    crest_ast::NestedNamespaceSpecifierId
);

impl<'a> AstEncoder<'a> {
    fn unit_ref(&mut self, id: Option<UnitId>) -> (u8, u32) {
        let Some(id) = id else { return (TAG_NULL, 0) };
        let node = *self.arena.unit(id);
        let mut out = Vec::new();
        let tag = match node {
            Unit::TranslationUnit { declaration_list } => {
                self.w_decl_list(&mut out, declaration_list);
                wire::unit_tag::TRANSLATION_UNIT
            }
            Unit::ModuleUnit {
                global_module_fragment,
                module_declaration,
                declaration_list,
                private_module_fragment,
            } => {
                let gmf = self.global_module_fragment_ref(global_module_fragment);
                put_u32(&mut out, gmf);
                let decl = self.module_declaration_ref(module_declaration);
                put_u32(&mut out, decl);
                self.w_decl_list(&mut out, declaration_list);
                let pmf = self.private_module_fragment_ref(private_module_fragment);
                put_u32(&mut out, pmf);
                wire::unit_tag::MODULE_UNIT
            }
        };
        let index = self.push_record(wire::TABLE_UNIT, out);
        (tag, index)
    }

    fn declaration_ref(&mut self, id: Option<DeclarationId>) -> (u8, u32) {
        let Some(id) = id else { return (TAG_NULL, 0) };
        let node = *self.arena.declaration(id);
        let mut out = Vec::new();
        let tag = match node {
            Declaration::SimpleDeclaration {
                attribute_list,
                decl_specifier_list,
                init_declarator_list,
                requires_clause,
            } => {
                self.w_attr_spec_list(&mut out, attribute_list);
                self.w_spec_list(&mut out, decl_specifier_list);
                self.w_init_declarator_list(&mut out, init_declarator_list);
                let clause = self.requires_clause_ref(requires_clause);
                put_u32(&mut out, clause);
                wire::decl_tag::SIMPLE_DECLARATION
            }
            Declaration::AsmDeclaration {
                literal,
                attribute_list,
                asm_qualifier_list,
                output_operand_list,
                input_operand_list,
                clobber_list,
                goto_label_list,
            } => {
                self.put_literal(&mut out, literal);
                self.w_attr_spec_list(&mut out, attribute_list);
                self.w_decl_list(&mut out, asm_qualifier_list);
                self.w_decl_list(&mut out, output_operand_list);
                self.w_decl_list(&mut out, input_operand_list);
                self.w_decl_list(&mut out, clobber_list);
                self.w_decl_list(&mut out, goto_label_list);
                wire::decl_tag::ASM_DECLARATION
            }
            Declaration::NamespaceAliasDefinition {
                identifier,
                nested_name_specifier,
                unqualified_id,
            } => {
                self.put_ident(&mut out, identifier);
                let nns = self.nested_name_specifier_ref(nested_name_specifier);
                Self::put_child(&mut out, nns);
                let name = self.unqualified_name_ref(unqualified_id);
                Self::put_child(&mut out, name);
                wire::decl_tag::NAMESPACE_ALIAS_DEFINITION
            }
            Declaration::UsingDeclaration { using_declarator_list } => {
                self.w_using_declarator_list(&mut out, using_declarator_list);
                wire::decl_tag::USING_DECLARATION
            }
            Declaration::UsingEnumDeclaration { enum_type_specifier } => {
                let spec = self.specifier_ref(enum_type_specifier);
                Self::put_child(&mut out, spec);
                wire::decl_tag::USING_ENUM_DECLARATION
            }
            Declaration::UsingDirective {
                attribute_list,
                nested_name_specifier,
                unqualified_id,
            } => {
                self.w_attr_spec_list(&mut out, attribute_list);
                let nns = self.nested_name_specifier_ref(nested_name_specifier);
                Self::put_child(&mut out, nns);
                let name = self.unqualified_name_ref(unqualified_id);
                Self::put_child(&mut out, name);
                wire::decl_tag::USING_DIRECTIVE
            }
            Declaration::StaticAssertDeclaration { literal, expression } => {
                self.put_literal(&mut out, literal);
                let expr = self.expression_ref(expression);
                Self::put_child(&mut out, expr);
                wire::decl_tag::STATIC_ASSERT_DECLARATION
            }
            Declaration::AliasDeclaration {
                identifier,
                attribute_list,
                type_id,
            } => {
                self.put_ident(&mut out, identifier);
                self.w_attr_spec_list(&mut out, attribute_list);
                let ty = self.type_id_ref(type_id);
                put_u32(&mut out, ty);
                wire::decl_tag::ALIAS_DECLARATION
            }
            Declaration::OpaqueEnumDeclaration {
                attribute_list,
                nested_name_specifier,
                unqualified_id,
                type_specifier_list,
            } => {
                self.w_attr_spec_list(&mut out, attribute_list);
                let nns = self.nested_name_specifier_ref(nested_name_specifier);
                Self::put_child(&mut out, nns);
                let name = self.unqualified_name_ref(unqualified_id);
                Self::put_child(&mut out, name);
                self.w_spec_list(&mut out, type_specifier_list);
                wire::decl_tag::OPAQUE_ENUM_DECLARATION
            }
            Declaration::FunctionDefinition {
                attribute_list,
                decl_specifier_list,
                declarator,
                requires_clause,
                function_body,
            } => {
                self.w_attr_spec_list(&mut out, attribute_list);
                self.w_spec_list(&mut out, decl_specifier_list);
                let decl = self.declarator_ref(declarator);
                put_u32(&mut out, decl);
                let clause = self.requires_clause_ref(requires_clause);
                put_u32(&mut out, clause);
                let body = self.function_body_ref(function_body);
                Self::put_child(&mut out, body);
                wire::decl_tag::FUNCTION_DEFINITION
            }
            Declaration::TemplateDeclaration {
                template_parameter_list,
                requires_clause,
                declaration,
            } => {
                self.w_templ_param_list(&mut out, template_parameter_list);
                let clause = self.requires_clause_ref(requires_clause);
                put_u32(&mut out, clause);
                let decl = self.declaration_ref(declaration);
                Self::put_child(&mut out, decl);
                wire::decl_tag::TEMPLATE_DECLARATION
            }
            Declaration::ConceptDefinition { identifier, expression } => {
                self.put_ident(&mut out, identifier);
                let expr = self.expression_ref(expression);
                Self::put_child(&mut out, expr);
                wire::decl_tag::CONCEPT_DEFINITION
            }
            Declaration::DeductionGuide {
                identifier,
                explicit_specifier,
                parameter_declaration_clause,
                template_id,
            } => {
                self.put_ident(&mut out, identifier);
                let spec = self.specifier_ref(explicit_specifier);
                Self::put_child(&mut out, spec);
                let clause = self.parameter_declaration_clause_ref(parameter_declaration_clause);
                put_u32(&mut out, clause);
                let name = self.unqualified_name_ref(template_id);
                Self::put_child(&mut out, name);
                wire::decl_tag::DEDUCTION_GUIDE
            }
            Declaration::ExplicitInstantiation { declaration } => {
                let decl = self.declaration_ref(declaration);
                Self::put_child(&mut out, decl);
                wire::decl_tag::EXPLICIT_INSTANTIATION
            }
            Declaration::ExportDeclaration { declaration } => {
                let decl = self.declaration_ref(declaration);
                Self::put_child(&mut out, decl);
                wire::decl_tag::EXPORT_DECLARATION
            }
            Declaration::ExportCompoundDeclaration { declaration_list } => {
                self.w_decl_list(&mut out, declaration_list);
                wire::decl_tag::EXPORT_COMPOUND_DECLARATION
            }
            Declaration::LinkageSpecification {
                string_literal,
                declaration_list,
            } => {
                self.put_literal(&mut out, string_literal);
                self.w_decl_list(&mut out, declaration_list);
                wire::decl_tag::LINKAGE_SPECIFICATION
            }
            Declaration::NamespaceDefinition {
                identifier,
                is_inline,
                attribute_list,
                nested_namespace_specifier_list,
                extra_attribute_list,
                declaration_list,
            } => {
                self.put_ident(&mut out, identifier);
                put_u8(&mut out, is_inline as u8);
                self.w_attr_spec_list(&mut out, attribute_list);
                self.w_nested_ns_list(&mut out, nested_namespace_specifier_list);
                self.w_attr_spec_list(&mut out, extra_attribute_list);
                self.w_decl_list(&mut out, declaration_list);
                wire::decl_tag::NAMESPACE_DEFINITION
            }
            Declaration::EmptyDeclaration => wire::decl_tag::EMPTY_DECLARATION,
            Declaration::AttributeDeclaration { attribute_list } => {
                self.w_attr_spec_list(&mut out, attribute_list);
                wire::decl_tag::ATTRIBUTE_DECLARATION
            }
            Declaration::ModuleImportDeclaration {
                import_name,
                attribute_list,
            } => {
                let name = self.import_name_ref(import_name);
                put_u32(&mut out, name);
                self.w_attr_spec_list(&mut out, attribute_list);
                wire::decl_tag::MODULE_IMPORT_DECLARATION
            }
            Declaration::ParameterDeclaration {
                identifier,
                is_this_introduced,
                is_pack,
                attribute_list,
                type_specifier_list,
                declarator,
                expression,
            } => {
                self.put_ident(&mut out, identifier);
                put_u8(&mut out, is_this_introduced as u8);
                put_u8(&mut out, is_pack as u8);
                self.w_attr_spec_list(&mut out, attribute_list);
                self.w_spec_list(&mut out, type_specifier_list);
                let decl = self.declarator_ref(declarator);
                put_u32(&mut out, decl);
                let expr = self.expression_ref(expression);
                Self::put_child(&mut out, expr);
                wire::decl_tag::PARAMETER_DECLARATION
            }
            Declaration::AccessDeclaration { access_specifier } => {
                put_u8(&mut out, access_specifier.raw());
                wire::decl_tag::ACCESS_DECLARATION
            }
            Declaration::ForRangeDeclaration => wire::decl_tag::FOR_RANGE_DECLARATION,
            Declaration::StructuredBindingDeclaration {
                attribute_list,
                decl_specifier_list,
                binding_list,
                initializer,
            } => {
                self.w_attr_spec_list(&mut out, attribute_list);
                self.w_spec_list(&mut out, decl_specifier_list);
                self.w_unqual_list(&mut out, binding_list);
                let init = self.expression_ref(initializer);
                Self::put_child(&mut out, init);
                wire::decl_tag::STRUCTURED_BINDING_DECLARATION
            }
            Declaration::AsmOperand {
                symbolic_name,
                constraint_literal,
                expression,
            } => {
                self.put_ident(&mut out, symbolic_name);
                self.put_literal(&mut out, constraint_literal);
                let expr = self.expression_ref(expression);
                Self::put_child(&mut out, expr);
                wire::decl_tag::ASM_OPERAND
            }
            Declaration::AsmQualifier { qualifier } => {
                put_u8(&mut out, qualifier.raw());
                wire::decl_tag::ASM_QUALIFIER
            }
            Declaration::AsmClobber { literal } => {
                self.put_literal(&mut out, literal);
                wire::decl_tag::ASM_CLOBBER
            }
            Declaration::AsmGotoLabel { identifier } => {
                self.put_ident(&mut out, identifier);
                wire::decl_tag::ASM_GOTO_LABEL
            }
        };
        let index = self.push_record(wire::TABLE_DECLARATION, out);
        (tag, index)
    }

    fn statement_ref(&mut self, id: Option<StatementId>) -> (u8, u32) {
        let Some(id) = id else { return (TAG_NULL, 0) };
        let node = *self.arena.statement(id);
        let mut out = Vec::new();
        let tag = match node {
            Statement::LabeledStatement { identifier } => {
                self.put_ident(&mut out, identifier);
                wire::stmt_tag::LABELED_STATEMENT
            }
            Statement::CaseStatement { expression } => {
                let expr = self.expression_ref(expression);
                Self::put_child(&mut out, expr);
                wire::stmt_tag::CASE_STATEMENT
            }
            Statement::DefaultStatement => wire::stmt_tag::DEFAULT_STATEMENT,
            Statement::ExpressionStatement { expression } => {
                let expr = self.expression_ref(expression);
                Self::put_child(&mut out, expr);
                wire::stmt_tag::EXPRESSION_STATEMENT
            }
            Statement::CompoundStatement { statement_list } => {
                self.w_stmt_list(&mut out, statement_list);
                wire::stmt_tag::COMPOUND_STATEMENT
            }
            Statement::IfStatement {
                initializer,
                condition,
                statement,
                else_statement,
            } => {
                let init = self.statement_ref(initializer);
                Self::put_child(&mut out, init);
                let cond = self.expression_ref(condition);
                Self::put_child(&mut out, cond);
                let stmt = self.statement_ref(statement);
                Self::put_child(&mut out, stmt);
                let other = self.statement_ref(else_statement);
                Self::put_child(&mut out, other);
                wire::stmt_tag::IF_STATEMENT
            }
            Statement::ConstevalIfStatement {
                is_not,
                statement,
                else_statement,
            } => {
                put_u8(&mut out, is_not as u8);
                let stmt = self.statement_ref(statement);
                Self::put_child(&mut out, stmt);
                let other = self.statement_ref(else_statement);
                Self::put_child(&mut out, other);
                wire::stmt_tag::CONSTEVAL_IF_STATEMENT
            }
            Statement::SwitchStatement {
                initializer,
                condition,
                statement,
            } => {
                let init = self.statement_ref(initializer);
                Self::put_child(&mut out, init);
                let cond = self.expression_ref(condition);
                Self::put_child(&mut out, cond);
                let stmt = self.statement_ref(statement);
                Self::put_child(&mut out, stmt);
                wire::stmt_tag::SWITCH_STATEMENT
            }
            Statement::WhileStatement { condition, statement } => {
                let cond = self.expression_ref(condition);
                Self::put_child(&mut out, cond);
                let stmt = self.statement_ref(statement);
                Self::put_child(&mut out, stmt);
                wire::stmt_tag::WHILE_STATEMENT
            }
            Statement::DoStatement { statement, expression } => {
                let stmt = self.statement_ref(statement);
                Self::put_child(&mut out, stmt);
                let expr = self.expression_ref(expression);
                Self::put_child(&mut out, expr);
                wire::stmt_tag::DO_STATEMENT
            }
            Statement::ForRangeStatement {
                initializer,
                range_declaration,
                range_initializer,
                statement,
            } => {
                let init = self.statement_ref(initializer);
                Self::put_child(&mut out, init);
                let decl = self.declaration_ref(range_declaration);
                Self::put_child(&mut out, decl);
                let range = self.expression_ref(range_initializer);
                Self::put_child(&mut out, range);
                let stmt = self.statement_ref(statement);
                Self::put_child(&mut out, stmt);
                wire::stmt_tag::FOR_RANGE_STATEMENT
            }
            Statement::ForStatement {
                initializer,
                condition,
                expression,
                statement,
            } => {
                let init = self.statement_ref(initializer);
                Self::put_child(&mut out, init);
                let cond = self.expression_ref(condition);
                Self::put_child(&mut out, cond);
                let expr = self.expression_ref(expression);
                Self::put_child(&mut out, expr);
                let stmt = self.statement_ref(statement);
                Self::put_child(&mut out, stmt);
                wire::stmt_tag::FOR_STATEMENT
            }
            Statement::BreakStatement => wire::stmt_tag::BREAK_STATEMENT,
            Statement::ContinueStatement => wire::stmt_tag::CONTINUE_STATEMENT,
            Statement::ReturnStatement { expression } => {
                let expr = self.expression_ref(expression);
                Self::put_child(&mut out, expr);
                wire::stmt_tag::RETURN_STATEMENT
            }
            Statement::CoroutineReturnStatement { expression } => {
                let expr = self.expression_ref(expression);
                Self::put_child(&mut out, expr);
                wire::stmt_tag::COROUTINE_RETURN_STATEMENT
            }
            Statement::GotoStatement { identifier } => {
                self.put_ident(&mut out, identifier);
                wire::stmt_tag::GOTO_STATEMENT
            }
            Statement::DeclarationStatement { declaration } => {
                let decl = self.declaration_ref(declaration);
                Self::put_child(&mut out, decl);
                wire::stmt_tag::DECLARATION_STATEMENT
            }
            Statement::TryBlockStatement {
                statement,
                handler_list,
            } => {
                let stmt = self.statement_ref(statement);
                Self::put_child(&mut out, stmt);
                self.w_handler_list(&mut out, handler_list);
                wire::stmt_tag::TRY_BLOCK_STATEMENT
            }
        };
        let index = self.push_record(wire::TABLE_STATEMENT, out);
        (tag, index)
    }

    fn expression_ref(&mut self, id: Option<ExpressionId>) -> (u8, u32) {
        let Some(id) = id else { return (TAG_NULL, 0) };
        let node = *self.arena.expression(id);
        let mut out = Vec::new();
        let tag = match node {
            Expression::CharLiteralExpression { literal } => {
                self.put_literal(&mut out, literal);
                wire::expr_tag::CHAR_LITERAL_EXPRESSION
            }
            Expression::BoolLiteralExpression { is_true } => {
                put_u8(&mut out, is_true as u8);
                wire::expr_tag::BOOL_LITERAL_EXPRESSION
            }
            Expression::IntLiteralExpression { literal } => {
                self.put_literal(&mut out, literal);
                wire::expr_tag::INT_LITERAL_EXPRESSION
            }
            Expression::FloatLiteralExpression { literal } => {
                self.put_literal(&mut out, literal);
                wire::expr_tag::FLOAT_LITERAL_EXPRESSION
            }
            Expression::NullptrLiteralExpression { literal } => {
                put_u8(&mut out, literal.raw());
                wire::expr_tag::NULLPTR_LITERAL_EXPRESSION
            }
            Expression::StringLiteralExpression { literal } => {
                self.put_literal(&mut out, literal);
                wire::expr_tag::STRING_LITERAL_EXPRESSION
            }
            Expression::UserDefinedStringLiteralExpression { literal } => {
                self.put_literal(&mut out, literal);
                wire::expr_tag::USER_DEFINED_STRING_LITERAL_EXPRESSION
            }
            Expression::ThisExpression => wire::expr_tag::THIS_EXPRESSION,
            Expression::NestedExpression { expression } => {
                let expr = self.expression_ref(expression);
                Self::put_child(&mut out, expr);
                wire::expr_tag::NESTED_EXPRESSION
            }
            Expression::IdExpression {
                is_template_introduced,
                nested_name_specifier,
                unqualified_id,
            } => {
                put_u8(&mut out, is_template_introduced as u8);
                let nns = self.nested_name_specifier_ref(nested_name_specifier);
                Self::put_child(&mut out, nns);
                let name = self.unqualified_name_ref(unqualified_id);
                Self::put_child(&mut out, name);
                wire::expr_tag::ID_EXPRESSION
            }
            Expression::LambdaExpression {
                capture_default,
                capture_list,
                template_parameter_list,
                template_requires_clause,
                parameter_declaration_clause,
                lambda_specifier_list,
                exception_specifier,
                attribute_list,
                trailing_return_type,
                requires_clause,
                statement,
            } => {
                put_u8(&mut out, capture_default.raw());
                self.w_capture_list(&mut out, capture_list);
                self.w_templ_param_list(&mut out, template_parameter_list);
                let templ_clause = self.requires_clause_ref(template_requires_clause);
                put_u32(&mut out, templ_clause);
                let params = self.parameter_declaration_clause_ref(parameter_declaration_clause);
                put_u32(&mut out, params);
                self.w_lambda_spec_list(&mut out, lambda_specifier_list);
                let except = self.exception_specifier_ref(exception_specifier);
                Self::put_child(&mut out, except);
                self.w_attr_spec_list(&mut out, attribute_list);
                let trailing = self.trailing_return_type_ref(trailing_return_type);
                put_u32(&mut out, trailing);
                let clause = self.requires_clause_ref(requires_clause);
                put_u32(&mut out, clause);
                let stmt = self.statement_ref(statement);
                Self::put_child(&mut out, stmt);
                wire::expr_tag::LAMBDA_EXPRESSION
            }
            Expression::FoldExpression {
                op,
                fold_op,
                left_expression,
                right_expression,
            } => {
                put_u8(&mut out, op.raw());
                put_u8(&mut out, fold_op.raw());
                let left = self.expression_ref(left_expression);
                Self::put_child(&mut out, left);
                let right = self.expression_ref(right_expression);
                Self::put_child(&mut out, right);
                wire::expr_tag::FOLD_EXPRESSION
            }
            Expression::RightFoldExpression { op, expression } => {
                put_u8(&mut out, op.raw());
                let expr = self.expression_ref(expression);
                Self::put_child(&mut out, expr);
                wire::expr_tag::RIGHT_FOLD_EXPRESSION
            }
            Expression::LeftFoldExpression { op, expression } => {
                put_u8(&mut out, op.raw());
                let expr = self.expression_ref(expression);
                Self::put_child(&mut out, expr);
                wire::expr_tag::LEFT_FOLD_EXPRESSION
            }
            Expression::RequiresExpression {
                parameter_declaration_clause,
                requirement_list,
            } => {
                let params = self.parameter_declaration_clause_ref(parameter_declaration_clause);
                put_u32(&mut out, params);
                self.w_requirement_list(&mut out, requirement_list);
                wire::expr_tag::REQUIRES_EXPRESSION
            }
            Expression::SubscriptExpression {
                base_expression,
                index_expression,
            } => {
                let base = self.expression_ref(base_expression);
                Self::put_child(&mut out, base);
                let index = self.expression_ref(index_expression);
                Self::put_child(&mut out, index);
                wire::expr_tag::SUBSCRIPT_EXPRESSION
            }
            Expression::CallExpression {
                base_expression,
                expression_list,
            } => {
                let base = self.expression_ref(base_expression);
                Self::put_child(&mut out, base);
                self.w_expr_list(&mut out, expression_list);
                wire::expr_tag::CALL_EXPRESSION
            }
            Expression::TypeConstruction {
                type_specifier,
                expression_list,
            } => {
                let spec = self.specifier_ref(type_specifier);
                Self::put_child(&mut out, spec);
                self.w_expr_list(&mut out, expression_list);
                wire::expr_tag::TYPE_CONSTRUCTION
            }
            Expression::BracedTypeConstruction {
                type_specifier,
                braced_init_list,
            } => {
                let spec = self.specifier_ref(type_specifier);
                Self::put_child(&mut out, spec);
                let init = self.expression_ref(braced_init_list);
                Self::put_child(&mut out, init);
                wire::expr_tag::BRACED_TYPE_CONSTRUCTION
            }
            Expression::MemberExpression {
                access_op,
                base_expression,
                member_id,
            } => {
                put_u8(&mut out, access_op.raw());
                let base = self.expression_ref(base_expression);
                Self::put_child(&mut out, base);
                let member = self.unqualified_name_ref(member_id);
                Self::put_child(&mut out, member);
                wire::expr_tag::MEMBER_EXPRESSION
            }
            Expression::PostIncrExpression { op, base_expression } => {
                put_u8(&mut out, op.raw());
                let base = self.expression_ref(base_expression);
                Self::put_child(&mut out, base);
                wire::expr_tag::POST_INCR_EXPRESSION
            }
            Expression::CppCastExpression { type_id, expression } => {
                let ty = self.type_id_ref(type_id);
                put_u32(&mut out, ty);
                let expr = self.expression_ref(expression);
                Self::put_child(&mut out, expr);
                wire::expr_tag::CPP_CAST_EXPRESSION
            }
            Expression::BuiltinBitCastExpression { type_id, expression } => {
                let ty = self.type_id_ref(type_id);
                put_u32(&mut out, ty);
                let expr = self.expression_ref(expression);
                Self::put_child(&mut out, expr);
                wire::expr_tag::BUILTIN_BIT_CAST_EXPRESSION
            }
            Expression::TypeidExpression { expression } => {
                let expr = self.expression_ref(expression);
                Self::put_child(&mut out, expr);
                wire::expr_tag::TYPEID_EXPRESSION
            }
            Expression::TypeidOfTypeExpression { type_id } => {
                let ty = self.type_id_ref(type_id);
                put_u32(&mut out, ty);
                wire::expr_tag::TYPEID_OF_TYPE_EXPRESSION
            }
            Expression::UnaryExpression { op, expression } => {
                put_u8(&mut out, op.raw());
                let expr = self.expression_ref(expression);
                Self::put_child(&mut out, expr);
                wire::expr_tag::UNARY_EXPRESSION
            }
            Expression::AwaitExpression { expression } => {
                let expr = self.expression_ref(expression);
                Self::put_child(&mut out, expr);
                wire::expr_tag::AWAIT_EXPRESSION
            }
            Expression::SizeofExpression { expression } => {
                let expr = self.expression_ref(expression);
                Self::put_child(&mut out, expr);
                wire::expr_tag::SIZEOF_EXPRESSION
            }
            Expression::SizeofTypeExpression { type_id } => {
                let ty = self.type_id_ref(type_id);
                put_u32(&mut out, ty);
                wire::expr_tag::SIZEOF_TYPE_EXPRESSION
            }
            Expression::SizeofPackExpression { identifier } => {
                self.put_ident(&mut out, identifier);
                wire::expr_tag::SIZEOF_PACK_EXPRESSION
            }
            Expression::AlignofTypeExpression { type_id } => {
                let ty = self.type_id_ref(type_id);
                put_u32(&mut out, ty);
                wire::expr_tag::ALIGNOF_TYPE_EXPRESSION
            }
            Expression::AlignofExpression { expression } => {
                let expr = self.expression_ref(expression);
                Self::put_child(&mut out, expr);
                wire::expr_tag::ALIGNOF_EXPRESSION
            }
            Expression::NoexceptExpression { expression } => {
                let expr = self.expression_ref(expression);
                Self::put_child(&mut out, expr);
                wire::expr_tag::NOEXCEPT_EXPRESSION
            }
            Expression::NewExpression {
                new_placement,
                type_specifier_list,
                declarator,
                new_initializer,
            } => {
                let placement = self.new_placement_ref(new_placement);
                put_u32(&mut out, placement);
                self.w_spec_list(&mut out, type_specifier_list);
                let decl = self.declarator_ref(declarator);
                put_u32(&mut out, decl);
                let init = self.new_initializer_ref(new_initializer);
                Self::put_child(&mut out, init);
                wire::expr_tag::NEW_EXPRESSION
            }
            Expression::DeleteExpression { expression } => {
                let expr = self.expression_ref(expression);
                Self::put_child(&mut out, expr);
                wire::expr_tag::DELETE_EXPRESSION
            }
            Expression::CastExpression { type_id, expression } => {
                let ty = self.type_id_ref(type_id);
                put_u32(&mut out, ty);
                let expr = self.expression_ref(expression);
                Self::put_child(&mut out, expr);
                wire::expr_tag::CAST_EXPRESSION
            }
            Expression::ImplicitCastExpression { expression } => {
                let expr = self.expression_ref(expression);
                Self::put_child(&mut out, expr);
                wire::expr_tag::IMPLICIT_CAST_EXPRESSION
            }
            Expression::BinaryExpression {
                op,
                left_expression,
                right_expression,
            } => {
                put_u8(&mut out, op.raw());
                let left = self.expression_ref(left_expression);
                Self::put_child(&mut out, left);
                let right = self.expression_ref(right_expression);
                Self::put_child(&mut out, right);
                wire::expr_tag::BINARY_EXPRESSION
            }
            Expression::ConditionalExpression {
                condition,
                iftrue_expression,
                iffalse_expression,
            } => {
                let cond = self.expression_ref(condition);
                Self::put_child(&mut out, cond);
                let iftrue = self.expression_ref(iftrue_expression);
                Self::put_child(&mut out, iftrue);
                let iffalse = self.expression_ref(iffalse_expression);
                Self::put_child(&mut out, iffalse);
                wire::expr_tag::CONDITIONAL_EXPRESSION
            }
            Expression::YieldExpression { expression } => {
                let expr = self.expression_ref(expression);
                Self::put_child(&mut out, expr);
                wire::expr_tag::YIELD_EXPRESSION
            }
            Expression::ThrowExpression { expression } => {
                let expr = self.expression_ref(expression);
                Self::put_child(&mut out, expr);
                wire::expr_tag::THROW_EXPRESSION
            }
            Expression::AssignmentExpression {
                op,
                left_expression,
                right_expression,
            } => {
                put_u8(&mut out, op.raw());
                let left = self.expression_ref(left_expression);
                Self::put_child(&mut out, left);
                let right = self.expression_ref(right_expression);
                Self::put_child(&mut out, right);
                wire::expr_tag::ASSIGNMENT_EXPRESSION
            }
            Expression::PackExpansionExpression { expression } => {
                let expr = self.expression_ref(expression);
                Self::put_child(&mut out, expr);
                wire::expr_tag::PACK_EXPANSION_EXPRESSION
            }
            Expression::DesignatedInitializerClause {
                identifier,
                initializer,
            } => {
                self.put_ident(&mut out, identifier);
                let init = self.expression_ref(initializer);
                Self::put_child(&mut out, init);
                wire::expr_tag::DESIGNATED_INITIALIZER_CLAUSE
            }
            Expression::TypeTraitsExpression {
                type_trait,
                type_id_list,
            } => {
                put_u16(&mut out, type_trait.raw());
                self.w_type_id_list(&mut out, type_id_list);
                wire::expr_tag::TYPE_TRAITS_EXPRESSION
            }
            Expression::ConditionExpression {
                attribute_list,
                decl_specifier_list,
                declarator,
                initializer,
            } => {
                self.w_attr_spec_list(&mut out, attribute_list);
                self.w_spec_list(&mut out, decl_specifier_list);
                let decl = self.declarator_ref(declarator);
                put_u32(&mut out, decl);
                let init = self.expression_ref(initializer);
                Self::put_child(&mut out, init);
                wire::expr_tag::CONDITION_EXPRESSION
            }
            Expression::EqualInitializer { expression } => {
                let expr = self.expression_ref(expression);
                Self::put_child(&mut out, expr);
                wire::expr_tag::EQUAL_INITIALIZER
            }
            Expression::BracedInitList { expression_list } => {
                self.w_expr_list(&mut out, expression_list);
                wire::expr_tag::BRACED_INIT_LIST
            }
            Expression::ParenInitializer { expression_list } => {
                self.w_expr_list(&mut out, expression_list);
                wire::expr_tag::PAREN_INITIALIZER
            }
        };
        let index = self.push_record(wire::TABLE_EXPRESSION, out);
        (tag, index)
    }

    fn specifier_ref(&mut self, id: Option<SpecifierId>) -> (u8, u32) {
        let Some(id) = id else { return (TAG_NULL, 0) };
        let node = *self.arena.specifier(id);
        let mut out = Vec::new();
        let tag = match node {
            Specifier::TypedefSpecifier => wire::spec_tag::TYPEDEF_SPECIFIER,
            Specifier::FriendSpecifier => wire::spec_tag::FRIEND_SPECIFIER,
            Specifier::ConstevalSpecifier => wire::spec_tag::CONSTEVAL_SPECIFIER,
            Specifier::ConstinitSpecifier => wire::spec_tag::CONSTINIT_SPECIFIER,
            Specifier::ConstexprSpecifier => wire::spec_tag::CONSTEXPR_SPECIFIER,
            Specifier::InlineSpecifier => wire::spec_tag::INLINE_SPECIFIER,
            Specifier::StaticSpecifier => wire::spec_tag::STATIC_SPECIFIER,
            Specifier::ExternSpecifier => wire::spec_tag::EXTERN_SPECIFIER,
            Specifier::ThreadLocalSpecifier => wire::spec_tag::THREAD_LOCAL_SPECIFIER,
            Specifier::ThreadSpecifier => wire::spec_tag::THREAD_SPECIFIER,
            Specifier::MutableSpecifier => wire::spec_tag::MUTABLE_SPECIFIER,
            Specifier::VirtualSpecifier => wire::spec_tag::VIRTUAL_SPECIFIER,
            Specifier::ExplicitSpecifier { expression } => {
                let expr = self.expression_ref(expression);
                Self::put_child(&mut out, expr);
                wire::spec_tag::EXPLICIT_SPECIFIER
            }
            Specifier::AutoTypeSpecifier => wire::spec_tag::AUTO_TYPE_SPECIFIER,
            Specifier::VoidTypeSpecifier => wire::spec_tag::VOID_TYPE_SPECIFIER,
            Specifier::SizeTypeSpecifier { specifier } => {
                put_u8(&mut out, specifier.raw());
                wire::spec_tag::SIZE_TYPE_SPECIFIER
            }
            Specifier::SignTypeSpecifier { specifier } => {
                put_u8(&mut out, specifier.raw());
                wire::spec_tag::SIGN_TYPE_SPECIFIER
            }
            Specifier::VaListTypeSpecifier { specifier } => {
                put_u8(&mut out, specifier.raw());
                wire::spec_tag::VA_LIST_TYPE_SPECIFIER
            }
            Specifier::IntegralTypeSpecifier { specifier } => {
                put_u8(&mut out, specifier.raw());
                wire::spec_tag::INTEGRAL_TYPE_SPECIFIER
            }
            Specifier::FloatingPointTypeSpecifier { specifier } => {
                put_u8(&mut out, specifier.raw());
                wire::spec_tag::FLOATING_POINT_TYPE_SPECIFIER
            }
            Specifier::ComplexTypeSpecifier => wire::spec_tag::COMPLEX_TYPE_SPECIFIER,
            Specifier::NamedTypeSpecifier {
                is_template_introduced,
                nested_name_specifier,
                unqualified_id,
            } => {
                put_u8(&mut out, is_template_introduced as u8);
                let nns = self.nested_name_specifier_ref(nested_name_specifier);
                Self::put_child(&mut out, nns);
                let name = self.unqualified_name_ref(unqualified_id);
                Self::put_child(&mut out, name);
                wire::spec_tag::NAMED_TYPE_SPECIFIER
            }
            Specifier::AtomicTypeSpecifier { type_id } => {
                let ty = self.type_id_ref(type_id);
                put_u32(&mut out, ty);
                wire::spec_tag::ATOMIC_TYPE_SPECIFIER
            }
            Specifier::UnderlyingTypeSpecifier { type_id } => {
                let ty = self.type_id_ref(type_id);
                put_u32(&mut out, ty);
                wire::spec_tag::UNDERLYING_TYPE_SPECIFIER
            }
            Specifier::ElaboratedTypeSpecifier {
                class_key,
                is_template_introduced,
                attribute_list,
                nested_name_specifier,
                unqualified_id,
            } => {
                put_u8(&mut out, class_key.raw());
                put_u8(&mut out, is_template_introduced as u8);
                self.w_attr_spec_list(&mut out, attribute_list);
                let nns = self.nested_name_specifier_ref(nested_name_specifier);
                Self::put_child(&mut out, nns);
                let name = self.unqualified_name_ref(unqualified_id);
                Self::put_child(&mut out, name);
                wire::spec_tag::ELABORATED_TYPE_SPECIFIER
            }
            Specifier::DecltypeAutoSpecifier => wire::spec_tag::DECLTYPE_AUTO_SPECIFIER,
            Specifier::DecltypeSpecifier { expression } => {
                let expr = self.expression_ref(expression);
                Self::put_child(&mut out, expr);
                wire::spec_tag::DECLTYPE_SPECIFIER
            }
            Specifier::PlaceholderTypeSpecifier {
                type_constraint,
                specifier,
            } => {
                let constraint = self.type_constraint_ref(type_constraint);
                put_u32(&mut out, constraint);
                let spec = self.specifier_ref(specifier);
                Self::put_child(&mut out, spec);
                wire::spec_tag::PLACEHOLDER_TYPE_SPECIFIER
            }
            Specifier::ConstQualifier => wire::spec_tag::CONST_QUALIFIER,
            Specifier::VolatileQualifier => wire::spec_tag::VOLATILE_QUALIFIER,
            Specifier::RestrictQualifier => wire::spec_tag::RESTRICT_QUALIFIER,
            Specifier::EnumSpecifier {
                attribute_list,
                nested_name_specifier,
                unqualified_id,
                type_specifier_list,
                enumerator_list,
            } => {
                self.w_attr_spec_list(&mut out, attribute_list);
                let nns = self.nested_name_specifier_ref(nested_name_specifier);
                Self::put_child(&mut out, nns);
                let name = self.unqualified_name_ref(unqualified_id);
                Self::put_child(&mut out, name);
                self.w_spec_list(&mut out, type_specifier_list);
                self.w_enumerator_list(&mut out, enumerator_list);
                wire::spec_tag::ENUM_SPECIFIER
            }
            Specifier::ClassSpecifier {
                class_key,
                is_final,
                attribute_list,
                nested_name_specifier,
                unqualified_id,
                base_specifier_list,
                declaration_list,
            } => {
                put_u8(&mut out, class_key.raw());
                put_u8(&mut out, is_final as u8);
                self.w_attr_spec_list(&mut out, attribute_list);
                let nns = self.nested_name_specifier_ref(nested_name_specifier);
                Self::put_child(&mut out, nns);
                let name = self.unqualified_name_ref(unqualified_id);
                Self::put_child(&mut out, name);
                self.w_base_spec_list(&mut out, base_specifier_list);
                self.w_decl_list(&mut out, declaration_list);
                wire::spec_tag::CLASS_SPECIFIER
            }
            Specifier::TypenameSpecifier {
                nested_name_specifier,
                unqualified_id,
            } => {
                let nns = self.nested_name_specifier_ref(nested_name_specifier);
                Self::put_child(&mut out, nns);
                let name = self.unqualified_name_ref(unqualified_id);
                Self::put_child(&mut out, name);
                wire::spec_tag::TYPENAME_SPECIFIER
            }
        };
        let index = self.push_record(wire::TABLE_SPECIFIER, out);
        (tag, index)
    }

    fn template_parameter_ref(&mut self, id: Option<TemplateParameterId>) -> (u8, u32) {
        let Some(id) = id else { return (TAG_NULL, 0) };
        let node = *self.arena.template_parameter(id);
        let mut out = Vec::new();
        let tag = match node {
            TemplateParameter::TemplateTypeParameter {
                depth,
                index,
                identifier,
                is_pack,
                template_parameter_list,
                requires_clause,
                id_expression,
            } => {
                put_u32(&mut out, depth);
                put_u32(&mut out, index);
                self.put_ident(&mut out, identifier);
                put_u8(&mut out, is_pack as u8);
                self.w_templ_param_list(&mut out, template_parameter_list);
                let clause = self.requires_clause_ref(requires_clause);
                put_u32(&mut out, clause);
                let expr = self.expression_ref(id_expression);
                Self::put_child(&mut out, expr);
                wire::templ_param_tag::TEMPLATE_TYPE_PARAMETER
            }
            TemplateParameter::NonTypeTemplateParameter {
                depth,
                index,
                declaration,
            } => {
                put_u32(&mut out, depth);
                put_u32(&mut out, index);
                let decl = self.declaration_ref(declaration);
                Self::put_child(&mut out, decl);
                wire::templ_param_tag::NON_TYPE_TEMPLATE_PARAMETER
            }
            TemplateParameter::TypenameTypeParameter {
                depth,
                index,
                identifier,
                is_pack,
                type_id,
            } => {
                put_u32(&mut out, depth);
                put_u32(&mut out, index);
                self.put_ident(&mut out, identifier);
                put_u8(&mut out, is_pack as u8);
                let ty = self.type_id_ref(type_id);
                put_u32(&mut out, ty);
                wire::templ_param_tag::TYPENAME_TYPE_PARAMETER
            }
            TemplateParameter::ConstraintTypeParameter {
                depth,
                index,
                identifier,
                type_constraint,
                type_id,
            } => {
                put_u32(&mut out, depth);
                put_u32(&mut out, index);
                self.put_ident(&mut out, identifier);
                let constraint = self.type_constraint_ref(type_constraint);
                put_u32(&mut out, constraint);
                let ty = self.type_id_ref(type_id);
                put_u32(&mut out, ty);
                wire::templ_param_tag::CONSTRAINT_TYPE_PARAMETER
            }
        };
        let index = self.push_record(wire::TABLE_TEMPLATE_PARAMETER, out);
        (tag, index)
    }

    fn ptr_operator_ref(&mut self, id: Option<PtrOperatorId>) -> (u8, u32) {
        let Some(id) = id else { return (TAG_NULL, 0) };
        let node = *self.arena.ptr_operator(id);
        let mut out = Vec::new();
        let tag = match node {
            PtrOperator::PointerOperator {
                attribute_list,
                cv_qualifier_list,
            } => {
                self.w_attr_spec_list(&mut out, attribute_list);
                self.w_spec_list(&mut out, cv_qualifier_list);
                wire::ptr_op_tag::POINTER_OPERATOR
            }
            PtrOperator::ReferenceOperator {
                ref_op,
                attribute_list,
            } => {
                put_u8(&mut out, ref_op.raw());
                self.w_attr_spec_list(&mut out, attribute_list);
                wire::ptr_op_tag::REFERENCE_OPERATOR
            }
            PtrOperator::PtrToMemberOperator {
                nested_name_specifier,
                attribute_list,
                cv_qualifier_list,
            } => {
                let nns = self.nested_name_specifier_ref(nested_name_specifier);
                Self::put_child(&mut out, nns);
                self.w_attr_spec_list(&mut out, attribute_list);
                self.w_spec_list(&mut out, cv_qualifier_list);
                wire::ptr_op_tag::PTR_TO_MEMBER_OPERATOR
            }
        };
        let index = self.push_record(wire::TABLE_PTR_OPERATOR, out);
        (tag, index)
    }

    fn core_declarator_ref(&mut self, id: Option<CoreDeclaratorId>) -> (u8, u32) {
        let Some(id) = id else { return (TAG_NULL, 0) };
        let node = *self.arena.core_declarator(id);
        let mut out = Vec::new();
        let tag = match node {
            CoreDeclarator::BitfieldDeclarator {
                unqualified_id,
                size_expression,
            } => {
                let name = self.unqualified_name_ref(unqualified_id);
                Self::put_child(&mut out, name);
                let size = self.expression_ref(size_expression);
                Self::put_child(&mut out, size);
                wire::core_decl_tag::BITFIELD_DECLARATOR
            }
            CoreDeclarator::ParameterPack { core_declarator } => {
                let core = self.core_declarator_ref(core_declarator);
                Self::put_child(&mut out, core);
                wire::core_decl_tag::PARAMETER_PACK
            }
            CoreDeclarator::IdDeclarator {
                is_template_introduced,
                nested_name_specifier,
                unqualified_id,
                attribute_list,
            } => {
                put_u8(&mut out, is_template_introduced as u8);
                let nns = self.nested_name_specifier_ref(nested_name_specifier);
                Self::put_child(&mut out, nns);
                let name = self.unqualified_name_ref(unqualified_id);
                Self::put_child(&mut out, name);
                self.w_attr_spec_list(&mut out, attribute_list);
                wire::core_decl_tag::ID_DECLARATOR
            }
            CoreDeclarator::NestedDeclarator { declarator } => {
                let decl = self.declarator_ref(declarator);
                put_u32(&mut out, decl);
                wire::core_decl_tag::NESTED_DECLARATOR
            }
        };
        let index = self.push_record(wire::TABLE_CORE_DECLARATOR, out);
        (tag, index)
    }

    fn declarator_chunk_ref(&mut self, id: Option<DeclaratorChunkId>) -> (u8, u32) {
        let Some(id) = id else { return (TAG_NULL, 0) };
        let node = *self.arena.declarator_chunk(id);
        let mut out = Vec::new();
        let tag = match node {
            DeclaratorChunk::FunctionDeclaratorChunk {
                is_final,
                is_override,
                is_pure,
                parameter_declaration_clause,
                cv_qualifier_list,
                exception_specifier,
                attribute_list,
                trailing_return_type,
            } => {
                put_u8(&mut out, is_final as u8);
                put_u8(&mut out, is_override as u8);
                put_u8(&mut out, is_pure as u8);
                let params = self.parameter_declaration_clause_ref(parameter_declaration_clause);
                put_u32(&mut out, params);
                self.w_spec_list(&mut out, cv_qualifier_list);
                let except = self.exception_specifier_ref(exception_specifier);
                Self::put_child(&mut out, except);
                self.w_attr_spec_list(&mut out, attribute_list);
                let trailing = self.trailing_return_type_ref(trailing_return_type);
                put_u32(&mut out, trailing);
                wire::chunk_tag::FUNCTION_DECLARATOR_CHUNK
            }
            DeclaratorChunk::ArrayDeclaratorChunk {
                expression,
                attribute_list,
            } => {
                let expr = self.expression_ref(expression);
                Self::put_child(&mut out, expr);
                self.w_attr_spec_list(&mut out, attribute_list);
                wire::chunk_tag::ARRAY_DECLARATOR_CHUNK
            }
        };
        let index = self.push_record(wire::TABLE_DECLARATOR_CHUNK, out);
        (tag, index)
    }

    fn unqualified_name_ref(&mut self, id: Option<UnqualifiedNameId>) -> (u8, u32) {
        let Some(id) = id else { return (TAG_NULL, 0) };
        let node = *self.arena.unqualified_name(id);
        let mut out = Vec::new();
        let tag = match node {
            UnqualifiedName::NameId { identifier } => {
                self.put_ident(&mut out, identifier);
                wire::unqual_tag::NAME_ID
            }
            UnqualifiedName::DestructorId { id: inner } => {
                let name = self.unqualified_name_ref(inner);
                Self::put_child(&mut out, name);
                wire::unqual_tag::DESTRUCTOR_ID
            }
            UnqualifiedName::DecltypeId { decltype_specifier } => {
                let spec = self.specifier_ref(decltype_specifier);
                Self::put_child(&mut out, spec);
                wire::unqual_tag::DECLTYPE_ID
            }
            UnqualifiedName::OperatorFunctionId { op } => {
                put_u8(&mut out, op.raw());
                wire::unqual_tag::OPERATOR_FUNCTION_ID
            }
            UnqualifiedName::LiteralOperatorId {
                literal,
                identifier,
            } => {
                self.put_literal(&mut out, literal);
                self.put_ident(&mut out, identifier);
                wire::unqual_tag::LITERAL_OPERATOR_ID
            }
            UnqualifiedName::ConversionFunctionId { type_id } => {
                let ty = self.type_id_ref(type_id);
                put_u32(&mut out, ty);
                wire::unqual_tag::CONVERSION_FUNCTION_ID
            }
            UnqualifiedName::SimpleTemplateId {
                identifier,
                template_argument_list,
            } => {
                self.put_ident(&mut out, identifier);
                self.w_templ_arg_list(&mut out, template_argument_list);
                wire::unqual_tag::SIMPLE_TEMPLATE_ID
            }
            UnqualifiedName::LiteralOperatorTemplateId {
                literal_operator_id,
                template_argument_list,
            } => {
                let name = self.unqualified_name_ref(literal_operator_id);
                Self::put_child(&mut out, name);
                self.w_templ_arg_list(&mut out, template_argument_list);
                wire::unqual_tag::LITERAL_OPERATOR_TEMPLATE_ID
            }
            UnqualifiedName::OperatorFunctionTemplateId {
                operator_function_id,
                template_argument_list,
            } => {
                let name = self.unqualified_name_ref(operator_function_id);
                Self::put_child(&mut out, name);
                self.w_templ_arg_list(&mut out, template_argument_list);
                wire::unqual_tag::OPERATOR_FUNCTION_TEMPLATE_ID
            }
        };
        let index = self.push_record(wire::TABLE_UNQUALIFIED_NAME, out);
        (tag, index)
    }

    fn nested_name_specifier_ref(&mut self, id: Option<NestedNameSpecifierId>) -> (u8, u32) {
        let Some(id) = id else { return (TAG_NULL, 0) };
        let node = *self.arena.nested_name_specifier(id);
        let mut out = Vec::new();
        let tag = match node {
            NestedNameSpecifier::GlobalNestedNameSpecifier => {
                wire::nns_tag::GLOBAL_NESTED_NAME_SPECIFIER
            }
            NestedNameSpecifier::SimpleNestedNameSpecifier {
                identifier,
                nested_name_specifier,
            } => {
                self.put_ident(&mut out, identifier);
                let nns = self.nested_name_specifier_ref(nested_name_specifier);
                Self::put_child(&mut out, nns);
                wire::nns_tag::SIMPLE_NESTED_NAME_SPECIFIER
            }
            NestedNameSpecifier::DecltypeNestedNameSpecifier {
                nested_name_specifier,
                decltype_specifier,
            } => {
                let nns = self.nested_name_specifier_ref(nested_name_specifier);
                Self::put_child(&mut out, nns);
                let spec = self.specifier_ref(decltype_specifier);
                Self::put_child(&mut out, spec);
                wire::nns_tag::DECLTYPE_NESTED_NAME_SPECIFIER
            }
            NestedNameSpecifier::TemplateNestedNameSpecifier {
                is_template_introduced,
                nested_name_specifier,
                template_id,
            } => {
                put_u8(&mut out, is_template_introduced as u8);
                let nns = self.nested_name_specifier_ref(nested_name_specifier);
                Self::put_child(&mut out, nns);
                let name = self.unqualified_name_ref(template_id);
                Self::put_child(&mut out, name);
                wire::nns_tag::TEMPLATE_NESTED_NAME_SPECIFIER
            }
        };
        let index = self.push_record(wire::TABLE_NESTED_NAME_SPECIFIER, out);
        (tag, index)
    }

    fn function_body_ref(&mut self, id: Option<FunctionBodyId>) -> (u8, u32) {
        let Some(id) = id else { return (TAG_NULL, 0) };
        let node = *self.arena.function_body(id);
        let mut out = Vec::new();
        let tag = match node {
            FunctionBody::DefaultFunctionBody => wire::body_tag::DEFAULT_FUNCTION_BODY,
            FunctionBody::CompoundStatementFunctionBody {
                mem_initializer_list,
                statement,
            } => {
                self.w_mem_init_list(&mut out, mem_initializer_list);
                let stmt = self.statement_ref(statement);
                Self::put_child(&mut out, stmt);
                wire::body_tag::COMPOUND_STATEMENT_FUNCTION_BODY
            }
            FunctionBody::TryStatementFunctionBody {
                mem_initializer_list,
                statement,
                handler_list,
            } => {
                self.w_mem_init_list(&mut out, mem_initializer_list);
                let stmt = self.statement_ref(statement);
                Self::put_child(&mut out, stmt);
                self.w_handler_list(&mut out, handler_list);
                wire::body_tag::TRY_STATEMENT_FUNCTION_BODY
            }
            FunctionBody::DeleteFunctionBody => wire::body_tag::DELETE_FUNCTION_BODY,
        };
        let index = self.push_record(wire::TABLE_FUNCTION_BODY, out);
        (tag, index)
    }

    fn template_argument_ref(&mut self, id: Option<TemplateArgumentId>) -> (u8, u32) {
        let Some(id) = id else { return (TAG_NULL, 0) };
        let node = *self.arena.template_argument(id);
        let mut out = Vec::new();
        let tag = match node {
            TemplateArgument::TypeTemplateArgument { type_id } => {
                let ty = self.type_id_ref(type_id);
                put_u32(&mut out, ty);
                wire::templ_arg_tag::TYPE_TEMPLATE_ARGUMENT
            }
            TemplateArgument::ExpressionTemplateArgument { expression } => {
                let expr = self.expression_ref(expression);
                Self::put_child(&mut out, expr);
                wire::templ_arg_tag::EXPRESSION_TEMPLATE_ARGUMENT
            }
        };
        let index = self.push_record(wire::TABLE_TEMPLATE_ARGUMENT, out);
        (tag, index)
    }

    fn exception_specifier_ref(&mut self, id: Option<ExceptionSpecifierId>) -> (u8, u32) {
        let Some(id) = id else { return (TAG_NULL, 0) };
        let node = *self.arena.exception_specifier(id);
        let mut out = Vec::new();
        let tag = match node {
            ExceptionSpecifier::ThrowExceptionSpecifier => {
                wire::except_spec_tag::THROW_EXCEPTION_SPECIFIER
            }
            ExceptionSpecifier::NoexceptSpecifier { expression } => {
                let expr = self.expression_ref(expression);
                Self::put_child(&mut out, expr);
                wire::except_spec_tag::NOEXCEPT_SPECIFIER
            }
        };
        let index = self.push_record(wire::TABLE_EXCEPTION_SPECIFIER, out);
        (tag, index)
    }

    fn requirement_ref(&mut self, id: Option<RequirementId>) -> (u8, u32) {
        let Some(id) = id else { return (TAG_NULL, 0) };
        let node = *self.arena.requirement(id);
        let mut out = Vec::new();
        let tag = match node {
            Requirement::SimpleRequirement { expression } => {
                let expr = self.expression_ref(expression);
                Self::put_child(&mut out, expr);
                wire::requirement_tag::SIMPLE_REQUIREMENT
            }
            Requirement::CompoundRequirement {
                expression,
                type_constraint,
            } => {
                let expr = self.expression_ref(expression);
                Self::put_child(&mut out, expr);
                let constraint = self.type_constraint_ref(type_constraint);
                put_u32(&mut out, constraint);
                wire::requirement_tag::COMPOUND_REQUIREMENT
            }
            Requirement::TypeRequirement {
                nested_name_specifier,
                unqualified_id,
            } => {
                let nns = self.nested_name_specifier_ref(nested_name_specifier);
                Self::put_child(&mut out, nns);
                let name = self.unqualified_name_ref(unqualified_id);
                Self::put_child(&mut out, name);
                wire::requirement_tag::TYPE_REQUIREMENT
            }
            Requirement::NestedRequirement { expression } => {
                let expr = self.expression_ref(expression);
                Self::put_child(&mut out, expr);
                wire::requirement_tag::NESTED_REQUIREMENT
            }
        };
        let index = self.push_record(wire::TABLE_REQUIREMENT, out);
        (tag, index)
    }

    fn new_initializer_ref(&mut self, id: Option<NewInitializerId>) -> (u8, u32) {
        let Some(id) = id else { return (TAG_NULL, 0) };
        let node = *self.arena.new_initializer(id);
        let mut out = Vec::new();
        let tag = match node {
            NewInitializer::NewParenInitializer { expression_list } => {
                self.w_expr_list(&mut out, expression_list);
                wire::new_init_tag::NEW_PAREN_INITIALIZER
            }
            NewInitializer::NewBracedInitializer { braced_init_list } => {
                let init = self.expression_ref(braced_init_list);
                Self::put_child(&mut out, init);
                wire::new_init_tag::NEW_BRACED_INITIALIZER
            }
        };
        let index = self.push_record(wire::TABLE_NEW_INITIALIZER, out);
        (tag, index)
    }

    fn mem_initializer_ref(&mut self, id: Option<MemInitializerId>) -> (u8, u32) {
        let Some(id) = id else { return (TAG_NULL, 0) };
        let node = *self.arena.mem_initializer(id);
        let mut out = Vec::new();
        let tag = match node {
            MemInitializer::ParenMemInitializer {
                nested_name_specifier,
                unqualified_id,
                expression_list,
            } => {
                let nns = self.nested_name_specifier_ref(nested_name_specifier);
                Self::put_child(&mut out, nns);
                let name = self.unqualified_name_ref(unqualified_id);
                Self::put_child(&mut out, name);
                self.w_expr_list(&mut out, expression_list);
                wire::mem_init_tag::PAREN_MEM_INITIALIZER
            }
            MemInitializer::BracedMemInitializer {
                nested_name_specifier,
                unqualified_id,
                braced_init_list,
            } => {
                let nns = self.nested_name_specifier_ref(nested_name_specifier);
                Self::put_child(&mut out, nns);
                let name = self.unqualified_name_ref(unqualified_id);
                Self::put_child(&mut out, name);
                let init = self.expression_ref(braced_init_list);
                Self::put_child(&mut out, init);
                wire::mem_init_tag::BRACED_MEM_INITIALIZER
            }
        };
        let index = self.push_record(wire::TABLE_MEM_INITIALIZER, out);
        (tag, index)
    }

    fn lambda_capture_ref(&mut self, id: Option<LambdaCaptureId>) -> (u8, u32) {
        let Some(id) = id else { return (TAG_NULL, 0) };
        let node = *self.arena.lambda_capture(id);
        let mut out = Vec::new();
        let tag = match node {
            LambdaCapture::ThisLambdaCapture => wire::capture_tag::THIS_LAMBDA_CAPTURE,
            LambdaCapture::DerefThisLambdaCapture => wire::capture_tag::DEREF_THIS_LAMBDA_CAPTURE,
            LambdaCapture::SimpleLambdaCapture { identifier } => {
                self.put_ident(&mut out, identifier);
                wire::capture_tag::SIMPLE_LAMBDA_CAPTURE
            }
            LambdaCapture::RefLambdaCapture { identifier } => {
                self.put_ident(&mut out, identifier);
                wire::capture_tag::REF_LAMBDA_CAPTURE
            }
            LambdaCapture::RefInitLambdaCapture {
                identifier,
                initializer,
            } => {
                self.put_ident(&mut out, identifier);
                let init = self.expression_ref(initializer);
                Self::put_child(&mut out, init);
                wire::capture_tag::REF_INIT_LAMBDA_CAPTURE
            }
            LambdaCapture::InitLambdaCapture {
                identifier,
                initializer,
            } => {
                self.put_ident(&mut out, identifier);
                let init = self.expression_ref(initializer);
                Self::put_child(&mut out, init);
                wire::capture_tag::INIT_LAMBDA_CAPTURE
            }
        };
        let index = self.push_record(wire::TABLE_LAMBDA_CAPTURE, out);
        (tag, index)
    }

    fn exception_declaration_ref(&mut self, id: Option<ExceptionDeclarationId>) -> (u8, u32) {
        let Some(id) = id else { return (TAG_NULL, 0) };
        let node = *self.arena.exception_declaration(id);
        let mut out = Vec::new();
        let tag = match node {
            ExceptionDeclaration::EllipsisExceptionDeclaration => {
                wire::except_decl_tag::ELLIPSIS_EXCEPTION_DECLARATION
            }
            ExceptionDeclaration::TypeExceptionDeclaration {
                attribute_list,
                type_specifier_list,
                declarator,
            } => {
                self.w_attr_spec_list(&mut out, attribute_list);
                self.w_spec_list(&mut out, type_specifier_list);
                let decl = self.declarator_ref(declarator);
                put_u32(&mut out, decl);
                wire::except_decl_tag::TYPE_EXCEPTION_DECLARATION
            }
        };
        let index = self.push_record(wire::TABLE_EXCEPTION_DECLARATION, out);
        (tag, index)
    }

    fn attribute_specifier_ref(&mut self, id: Option<AttributeSpecifierId>) -> (u8, u32) {
        let Some(id) = id else { return (TAG_NULL, 0) };
        let node = *self.arena.attribute_specifier(id);
        let mut out = Vec::new();
        let tag = match node {
            AttributeSpecifier::CxxAttribute {
                attribute_using_prefix,
                attribute_list,
            } => {
                let prefix = self.attribute_using_prefix_ref(attribute_using_prefix);
                put_u32(&mut out, prefix);
                self.w_attribute_list(&mut out, attribute_list);
                wire::attr_spec_tag::CXX_ATTRIBUTE
            }
            AttributeSpecifier::GccAttribute => wire::attr_spec_tag::GCC_ATTRIBUTE,
            AttributeSpecifier::AlignasAttribute { is_pack, expression } => {
                put_u8(&mut out, is_pack as u8);
                let expr = self.expression_ref(expression);
                Self::put_child(&mut out, expr);
                wire::attr_spec_tag::ALIGNAS_ATTRIBUTE
            }
            AttributeSpecifier::AlignasTypeAttribute { is_pack, type_id } => {
                put_u8(&mut out, is_pack as u8);
                let ty = self.type_id_ref(type_id);
                put_u32(&mut out, ty);
                wire::attr_spec_tag::ALIGNAS_TYPE_ATTRIBUTE
            }
            AttributeSpecifier::AsmAttribute { literal } => {
                self.put_literal(&mut out, literal);
                wire::attr_spec_tag::ASM_ATTRIBUTE
            }
        };
        let index = self.push_record(wire::TABLE_ATTRIBUTE_SPECIFIER, out);
        (tag, index)
    }

    fn attribute_token_ref(&mut self, id: Option<AttributeTokenId>) -> (u8, u32) {
        let Some(id) = id else { return (TAG_NULL, 0) };
        let node = *self.arena.attribute_token(id);
        let mut out = Vec::new();
        let tag = match node {
            AttributeToken::ScopedAttributeToken {
                attribute_namespace,
                identifier,
            } => {
                self.put_ident(&mut out, attribute_namespace);
                self.put_ident(&mut out, identifier);
                wire::attr_token_tag::SCOPED_ATTRIBUTE_TOKEN
            }
            AttributeToken::SimpleAttributeToken { identifier } => {
                self.put_ident(&mut out, identifier);
                wire::attr_token_tag::SIMPLE_ATTRIBUTE_TOKEN
            }
        };
        let index = self.push_record(wire::TABLE_ATTRIBUTE_TOKEN, out);
        (tag, index)
    }

    // --- fragments: 1-based references, 0 = null ---

    fn global_module_fragment_ref(&mut self, id: Option<GlobalModuleFragmentId>) -> u32 {
        let Some(id) = id else { return 0 };
        let node = *self.arena.global_module_fragment(id);
        let mut out = Vec::new();
        self.w_decl_list(&mut out, node.declaration_list);
        self.push_record(wire::TABLE_GLOBAL_MODULE_FRAGMENT, out) + 1
    }

    fn private_module_fragment_ref(&mut self, id: Option<PrivateModuleFragmentId>) -> u32 {
        let Some(id) = id else { return 0 };
        let node = *self.arena.private_module_fragment(id);
        let mut out = Vec::new();
        self.w_decl_list(&mut out, node.declaration_list);
        self.push_record(wire::TABLE_PRIVATE_MODULE_FRAGMENT, out) + 1
    }

    fn module_declaration_ref(&mut self, id: Option<ModuleDeclarationId>) -> u32 {
        let Some(id) = id else { return 0 };
        let node = *self.arena.module_declaration(id);
        let mut out = Vec::new();
        let name = self.module_name_ref(node.module_name);
        put_u32(&mut out, name);
        let partition = self.module_partition_ref(node.module_partition);
        put_u32(&mut out, partition);
        self.w_attr_spec_list(&mut out, node.attribute_list);
        self.push_record(wire::TABLE_MODULE_DECLARATION, out) + 1
    }

    fn module_name_ref(&mut self, id: Option<ModuleNameId>) -> u32 {
        let Some(id) = id else { return 0 };
        let node = *self.arena.module_name(id);
        let mut out = Vec::new();
        self.put_ident(&mut out, node.identifier);
        let qualifier = self.module_qualifier_ref(node.module_qualifier);
        put_u32(&mut out, qualifier);
        self.push_record(wire::TABLE_MODULE_NAME, out) + 1
    }

    fn module_qualifier_ref(&mut self, id: Option<ModuleQualifierId>) -> u32 {
        let Some(id) = id else { return 0 };
        let node = *self.arena.module_qualifier(id);
        let mut out = Vec::new();
        self.put_ident(&mut out, node.identifier);
        let qualifier = self.module_qualifier_ref(node.module_qualifier);
        put_u32(&mut out, qualifier);
        self.push_record(wire::TABLE_MODULE_QUALIFIER, out) + 1
    }

    fn module_partition_ref(&mut self, id: Option<ModulePartitionId>) -> u32 {
        let Some(id) = id else { return 0 };
        let node = *self.arena.module_partition(id);
        let mut out = Vec::new();
        let name = self.module_name_ref(node.module_name);
        put_u32(&mut out, name);
        self.push_record(wire::TABLE_MODULE_PARTITION, out) + 1
    }

    fn import_name_ref(&mut self, id: Option<ImportNameId>) -> u32 {
        let Some(id) = id else { return 0 };
        let node = *self.arena.import_name(id);
        let mut out = Vec::new();
        let partition = self.module_partition_ref(node.module_partition);
        put_u32(&mut out, partition);
        let name = self.module_name_ref(node.module_name);
        put_u32(&mut out, name);
        self.push_record(wire::TABLE_IMPORT_NAME, out) + 1
    }

    fn init_declarator_ref(&mut self, id: Option<crest_ast::InitDeclaratorId>) -> u32 {
        let Some(id) = id else { return 0 };
        let node = *self.arena.init_declarator(id);
        let mut out = Vec::new();
        let decl = self.declarator_ref(node.declarator);
        put_u32(&mut out, decl);
        let clause = self.requires_clause_ref(node.requires_clause);
        put_u32(&mut out, clause);
        let init = self.expression_ref(node.initializer);
        Self::put_child(&mut out, init);
        self.push_record(wire::TABLE_INIT_DECLARATOR, out) + 1
    }

    fn declarator_ref(&mut self, id: Option<DeclaratorId>) -> u32 {
        let Some(id) = id else { return 0 };
        let node = *self.arena.declarator(id);
        let mut out = Vec::new();
        self.w_ptr_op_list(&mut out, node.ptr_op_list);
        let core = self.core_declarator_ref(node.core_declarator);
        Self::put_child(&mut out, core);
        self.w_chunk_list(&mut out, node.declarator_chunk_list);
        self.push_record(wire::TABLE_DECLARATOR, out) + 1
    }

    fn using_declarator_ref(&mut self, id: Option<crest_ast::UsingDeclaratorId>) -> u32 {
        let Some(id) = id else { return 0 };
        let node = *self.arena.using_declarator(id);
        let mut out = Vec::new();
        put_u8(&mut out, node.is_pack as u8);
        let nns = self.nested_name_specifier_ref(node.nested_name_specifier);
        Self::put_child(&mut out, nns);
        let name = self.unqualified_name_ref(node.unqualified_id);
        Self::put_child(&mut out, name);
        self.push_record(wire::TABLE_USING_DECLARATOR, out) + 1
    }

    fn enumerator_ref(&mut self, id: Option<crest_ast::EnumeratorId>) -> u32 {
        let Some(id) = id else { return 0 };
        let node = *self.arena.enumerator(id);
        let mut out = Vec::new();
        self.put_ident(&mut out, node.identifier);
        self.w_attr_spec_list(&mut out, node.attribute_list);
        let expr = self.expression_ref(node.expression);
        Self::put_child(&mut out, expr);
        self.push_record(wire::TABLE_ENUMERATOR, out) + 1
    }

    fn type_id_ref(&mut self, id: Option<TypeIdNodeId>) -> u32 {
        let Some(id) = id else { return 0 };
        let node = *self.arena.type_id(id);
        let mut out = Vec::new();
        self.w_spec_list(&mut out, node.type_specifier_list);
        let decl = self.declarator_ref(node.declarator);
        put_u32(&mut out, decl);
        self.push_record(wire::TABLE_TYPE_ID, out) + 1
    }

    fn handler_ref(&mut self, id: Option<crest_ast::HandlerId>) -> u32 {
        let Some(id) = id else { return 0 };
        let node = *self.arena.handler(id);
        let mut out = Vec::new();
        let decl = self.exception_declaration_ref(node.exception_declaration);
        Self::put_child(&mut out, decl);
        let stmt = self.statement_ref(node.statement);
        Self::put_child(&mut out, stmt);
        self.push_record(wire::TABLE_HANDLER, out) + 1
    }

    fn base_specifier_ref(&mut self, id: Option<crest_ast::BaseSpecifierId>) -> u32 {
        let Some(id) = id else { return 0 };
        let node = *self.arena.base_specifier(id);
        let mut out = Vec::new();
        put_u8(&mut out, node.is_template_introduced as u8);
        put_u8(&mut out, node.is_virtual as u8);
        put_u8(&mut out, node.access_specifier.raw());
        self.w_attr_spec_list(&mut out, node.attribute_list);
        let nns = self.nested_name_specifier_ref(node.nested_name_specifier);
        Self::put_child(&mut out, nns);
        let name = self.unqualified_name_ref(node.unqualified_id);
        Self::put_child(&mut out, name);
        self.push_record(wire::TABLE_BASE_SPECIFIER, out) + 1
    }

    fn requires_clause_ref(&mut self, id: Option<RequiresClauseId>) -> u32 {
        let Some(id) = id else { return 0 };
        let node = *self.arena.requires_clause(id);
        let mut out = Vec::new();
        let expr = self.expression_ref(node.expression);
        Self::put_child(&mut out, expr);
        self.push_record(wire::TABLE_REQUIRES_CLAUSE, out) + 1
    }

    fn parameter_declaration_clause_ref(
        &mut self,
        id: Option<ParameterDeclarationClauseId>,
    ) -> u32 {
        let Some(id) = id else { return 0 };
        let node = *self.arena.parameter_declaration_clause(id);
        let mut out = Vec::new();
        put_u8(&mut out, node.is_variadic as u8);
        self.w_decl_list(&mut out, node.parameter_declaration_list);
        self.push_record(wire::TABLE_PARAMETER_DECLARATION_CLAUSE, out) + 1
    }

    fn trailing_return_type_ref(&mut self, id: Option<TrailingReturnTypeId>) -> u32 {
        let Some(id) = id else { return 0 };
        let node = *self.arena.trailing_return_type(id);
        let mut out = Vec::new();
        let ty = self.type_id_ref(node.type_id);
        put_u32(&mut out, ty);
        self.push_record(wire::TABLE_TRAILING_RETURN_TYPE, out) + 1
    }

    fn lambda_specifier_ref(&mut self, id: Option<crest_ast::LambdaSpecifierId>) -> u32 {
        let Some(id) = id else { return 0 };
        let node = *self.arena.lambda_specifier(id);
        let mut out = Vec::new();
        put_u8(&mut out, node.specifier.raw());
        self.push_record(wire::TABLE_LAMBDA_SPECIFIER, out) + 1
    }

    fn type_constraint_ref(&mut self, id: Option<TypeConstraintId>) -> u32 {
        let Some(id) = id else { return 0 };
        let node = *self.arena.type_constraint(id);
        let mut out = Vec::new();
        self.put_ident(&mut out, node.identifier);
        let nns = self.nested_name_specifier_ref(node.nested_name_specifier);
        Self::put_child(&mut out, nns);
        self.w_templ_arg_list(&mut out, node.template_argument_list);
        self.push_record(wire::TABLE_TYPE_CONSTRAINT, out) + 1
    }

    fn attribute_argument_clause_ref(
        &mut self,
        id: Option<crest_ast::AttributeArgumentClauseId>,
    ) -> u32 {
        let Some(_id) = id else { return 0 };
        self.push_record(wire::TABLE_ATTRIBUTE_ARGUMENT_CLAUSE, Vec::new()) + 1
    }

    fn attribute_ref(&mut self, id: Option<crest_ast::AttributeId>) -> u32 {
        let Some(id) = id else { return 0 };
        let node = *self.arena.attribute(id);
        let mut out = Vec::new();
        let token = self.attribute_token_ref(node.attribute_token);
        Self::put_child(&mut out, token);
        let clause = self.attribute_argument_clause_ref(node.attribute_argument_clause);
        put_u32(&mut out, clause);
        self.push_record(wire::TABLE_ATTRIBUTE, out) + 1
    }

    fn attribute_using_prefix_ref(&mut self, id: Option<crest_ast::AttributeUsingPrefixId>) -> u32 {
        let Some(_id) = id else { return 0 };
        self.push_record(wire::TABLE_ATTRIBUTE_USING_PREFIX, Vec::new()) + 1
    }

    fn new_placement_ref(&mut self, id: Option<NewPlacementId>) -> u32 {
        let Some(id) = id else { return 0 };
        let node = *self.arena.new_placement(id);
        let mut out = Vec::new();
        self.w_expr_list(&mut out, node.expression_list);
        self.push_record(wire::TABLE_NEW_PLACEMENT, out) + 1
    }

    fn nested_namespace_specifier_ref(
        &mut self,
        id: Option<crest_ast::NestedNamespaceSpecifierId>,
    ) -> u32 {
        let Some(id) = id else { return 0 };
        let node = *self.arena.nested_namespace_specifier(id);
        let mut out = Vec::new();
        self.put_ident(&mut out, node.identifier);
        put_u8(&mut out, node.is_inline as u8);
        self.push_record(wire::TABLE_NESTED_NAMESPACE_SPECIFIER, out) + 1
    }
}
