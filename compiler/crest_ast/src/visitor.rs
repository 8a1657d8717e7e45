//! AST traversal.
//!
//! One `visit_*` method per node category or fragment; the defaults forward
//! to the matching `walk_*` function, which dispatches on the variant and
//! visits the children. Override only what you need.
//!
//! Walk functions visit children in declared field order, which is also the
//! dumper's order. That order is a public contract; do not reorder child
//! visits.

use crate::arena::AstArena;
use crate::ast::*;
use crate::node_id::*;

/// AST visitor.
///
/// The visitor may mutate its own state; the AST stays immutable during a
/// traversal.
pub trait Visit<'ast> {
    fn visit_unit(&mut self, id: UnitId, arena: &'ast AstArena) {
        walk_unit(self, id, arena);
    }

    fn visit_declaration(&mut self, id: DeclarationId, arena: &'ast AstArena) {
        walk_declaration(self, id, arena);
    }

    fn visit_statement(&mut self, id: StatementId, arena: &'ast AstArena) {
        walk_statement(self, id, arena);
    }

    fn visit_expression(&mut self, id: ExpressionId, arena: &'ast AstArena) {
        walk_expression(self, id, arena);
    }

    fn visit_specifier(&mut self, id: SpecifierId, arena: &'ast AstArena) {
        walk_specifier(self, id, arena);
    }

    fn visit_template_parameter(&mut self, id: TemplateParameterId, arena: &'ast AstArena) {
        walk_template_parameter(self, id, arena);
    }

    fn visit_ptr_operator(&mut self, id: PtrOperatorId, arena: &'ast AstArena) {
        walk_ptr_operator(self, id, arena);
    }

    fn visit_core_declarator(&mut self, id: CoreDeclaratorId, arena: &'ast AstArena) {
        walk_core_declarator(self, id, arena);
    }

    fn visit_declarator_chunk(&mut self, id: DeclaratorChunkId, arena: &'ast AstArena) {
        walk_declarator_chunk(self, id, arena);
    }

    fn visit_unqualified_name(&mut self, id: UnqualifiedNameId, arena: &'ast AstArena) {
        walk_unqualified_name(self, id, arena);
    }

    fn visit_nested_name_specifier(&mut self, id: NestedNameSpecifierId, arena: &'ast AstArena) {
        walk_nested_name_specifier(self, id, arena);
    }

    fn visit_function_body(&mut self, id: FunctionBodyId, arena: &'ast AstArena) {
        walk_function_body(self, id, arena);
    }

    fn visit_template_argument(&mut self, id: TemplateArgumentId, arena: &'ast AstArena) {
        walk_template_argument(self, id, arena);
    }

    fn visit_exception_specifier(&mut self, id: ExceptionSpecifierId, arena: &'ast AstArena) {
        walk_exception_specifier(self, id, arena);
    }

    fn visit_requirement(&mut self, id: RequirementId, arena: &'ast AstArena) {
        walk_requirement(self, id, arena);
    }

    fn visit_new_initializer(&mut self, id: NewInitializerId, arena: &'ast AstArena) {
        walk_new_initializer(self, id, arena);
    }

    fn visit_mem_initializer(&mut self, id: MemInitializerId, arena: &'ast AstArena) {
        walk_mem_initializer(self, id, arena);
    }

    fn visit_lambda_capture(&mut self, id: LambdaCaptureId, arena: &'ast AstArena) {
        walk_lambda_capture(self, id, arena);
    }

    fn visit_exception_declaration(&mut self, id: ExceptionDeclarationId, arena: &'ast AstArena) {
        walk_exception_declaration(self, id, arena);
    }

    fn visit_attribute_specifier(&mut self, id: AttributeSpecifierId, arena: &'ast AstArena) {
        walk_attribute_specifier(self, id, arena);
    }

    fn visit_attribute_token(&mut self, id: AttributeTokenId, arena: &'ast AstArena) {
        let _ = (id, arena);
    }

    // Fragments.

    fn visit_global_module_fragment(&mut self, id: GlobalModuleFragmentId, arena: &'ast AstArena) {
        walk_global_module_fragment(self, id, arena);
    }

    fn visit_private_module_fragment(
        &mut self,
        id: PrivateModuleFragmentId,
        arena: &'ast AstArena,
    ) {
        walk_private_module_fragment(self, id, arena);
    }

    fn visit_module_declaration(&mut self, id: ModuleDeclarationId, arena: &'ast AstArena) {
        walk_module_declaration(self, id, arena);
    }

    fn visit_module_name(&mut self, id: ModuleNameId, arena: &'ast AstArena) {
        walk_module_name(self, id, arena);
    }

    fn visit_module_qualifier(&mut self, id: ModuleQualifierId, arena: &'ast AstArena) {
        walk_module_qualifier(self, id, arena);
    }

    fn visit_module_partition(&mut self, id: ModulePartitionId, arena: &'ast AstArena) {
        walk_module_partition(self, id, arena);
    }

    fn visit_import_name(&mut self, id: ImportNameId, arena: &'ast AstArena) {
        walk_import_name(self, id, arena);
    }

    fn visit_init_declarator(&mut self, id: InitDeclaratorId, arena: &'ast AstArena) {
        walk_init_declarator(self, id, arena);
    }

    fn visit_declarator(&mut self, id: DeclaratorId, arena: &'ast AstArena) {
        walk_declarator(self, id, arena);
    }

    fn visit_using_declarator(&mut self, id: UsingDeclaratorId, arena: &'ast AstArena) {
        walk_using_declarator(self, id, arena);
    }

    fn visit_enumerator(&mut self, id: EnumeratorId, arena: &'ast AstArena) {
        walk_enumerator(self, id, arena);
    }

    fn visit_type_id(&mut self, id: TypeIdNodeId, arena: &'ast AstArena) {
        walk_type_id(self, id, arena);
    }

    fn visit_handler(&mut self, id: HandlerId, arena: &'ast AstArena) {
        walk_handler(self, id, arena);
    }

    fn visit_base_specifier(&mut self, id: BaseSpecifierId, arena: &'ast AstArena) {
        walk_base_specifier(self, id, arena);
    }

    fn visit_requires_clause(&mut self, id: RequiresClauseId, arena: &'ast AstArena) {
        walk_requires_clause(self, id, arena);
    }

    fn visit_parameter_declaration_clause(
        &mut self,
        id: ParameterDeclarationClauseId,
        arena: &'ast AstArena,
    ) {
        walk_parameter_declaration_clause(self, id, arena);
    }

    fn visit_trailing_return_type(&mut self, id: TrailingReturnTypeId, arena: &'ast AstArena) {
        walk_trailing_return_type(self, id, arena);
    }

    fn visit_lambda_specifier(&mut self, id: LambdaSpecifierId, arena: &'ast AstArena) {
        let _ = (id, arena);
    }

    fn visit_type_constraint(&mut self, id: TypeConstraintId, arena: &'ast AstArena) {
        walk_type_constraint(self, id, arena);
    }

    fn visit_attribute_argument_clause(
        &mut self,
        id: AttributeArgumentClauseId,
        arena: &'ast AstArena,
    ) {
        let _ = (id, arena);
    }

    fn visit_attribute(&mut self, id: AttributeId, arena: &'ast AstArena) {
        walk_attribute(self, id, arena);
    }

    fn visit_attribute_using_prefix(&mut self, id: AttributeUsingPrefixId, arena: &'ast AstArena) {
        let _ = (id, arena);
    }

    fn visit_new_placement(&mut self, id: NewPlacementId, arena: &'ast AstArena) {
        walk_new_placement(self, id, arena);
    }

    fn visit_nested_namespace_specifier(
        &mut self,
        id: NestedNamespaceSpecifierId,
        arena: &'ast AstArena,
    ) {
        let _ = (id, arena);
    }
}

macro_rules! visit_opt {
    ($visitor:ident, $method:ident, $child:expr, $arena:ident) => {
        if let Some(child) = $child {
            $visitor.$method(child, $arena);
        }
    };
}

macro_rules! visit_list {
    ($visitor:ident, $method:ident, $list:ident, $range:expr, $arena:ident) => {
        for &child in $arena.$list($range) {
            $visitor.$method(child, $arena);
        }
    };
}

pub fn walk_unit<'ast, V: Visit<'ast> + ?Sized>(v: &mut V, id: UnitId, arena: &'ast AstArena) {
    match *arena.unit(id) {
        Unit::TranslationUnit { declaration_list } => {
            visit_list!(v, visit_declaration, declaration_list, declaration_list, arena);
        }
        Unit::ModuleUnit {
            global_module_fragment,
            module_declaration,
            declaration_list,
            private_module_fragment,
        } => {
            visit_opt!(v, visit_global_module_fragment, global_module_fragment, arena);
            visit_opt!(v, visit_module_declaration, module_declaration, arena);
            visit_list!(v, visit_declaration, declaration_list, declaration_list, arena);
            visit_opt!(v, visit_private_module_fragment, private_module_fragment, arena);
        }
    }
}

pub fn walk_declaration<'ast, V: Visit<'ast> + ?Sized>(
    v: &mut V,
    id: DeclarationId,
    arena: &'ast AstArena,
) {
    match *arena.declaration(id) {
        Declaration::SimpleDeclaration {
            attribute_list,
            decl_specifier_list,
            init_declarator_list,
            requires_clause,
        } => {
            visit_list!(v, visit_attribute_specifier, attribute_specifier_list, attribute_list, arena);
            visit_list!(v, visit_specifier, specifier_list, decl_specifier_list, arena);
            visit_list!(v, visit_init_declarator, init_declarator_list, init_declarator_list, arena);
            visit_opt!(v, visit_requires_clause, requires_clause, arena);
        }
        Declaration::AsmDeclaration {
            literal: _,
            attribute_list,
            asm_qualifier_list,
            output_operand_list,
            input_operand_list,
            clobber_list,
            goto_label_list,
        } => {
            visit_list!(v, visit_attribute_specifier, attribute_specifier_list, attribute_list, arena);
            visit_list!(v, visit_declaration, declaration_list, asm_qualifier_list, arena);
            visit_list!(v, visit_declaration, declaration_list, output_operand_list, arena);
            visit_list!(v, visit_declaration, declaration_list, input_operand_list, arena);
            visit_list!(v, visit_declaration, declaration_list, clobber_list, arena);
            visit_list!(v, visit_declaration, declaration_list, goto_label_list, arena);
        }
        Declaration::NamespaceAliasDefinition {
            identifier: _,
            nested_name_specifier,
            unqualified_id,
        } => {
            visit_opt!(v, visit_nested_name_specifier, nested_name_specifier, arena);
            visit_opt!(v, visit_unqualified_name, unqualified_id, arena);
        }
        Declaration::UsingDeclaration { using_declarator_list } => {
            visit_list!(v, visit_using_declarator, using_declarator_list, using_declarator_list, arena);
        }
        Declaration::UsingEnumDeclaration { enum_type_specifier } => {
            visit_opt!(v, visit_specifier, enum_type_specifier, arena);
        }
        Declaration::UsingDirective {
            attribute_list,
            nested_name_specifier,
            unqualified_id,
        } => {
            visit_list!(v, visit_attribute_specifier, attribute_specifier_list, attribute_list, arena);
            visit_opt!(v, visit_nested_name_specifier, nested_name_specifier, arena);
            visit_opt!(v, visit_unqualified_name, unqualified_id, arena);
        }
        Declaration::StaticAssertDeclaration { literal: _, expression } => {
            visit_opt!(v, visit_expression, expression, arena);
        }
        Declaration::AliasDeclaration {
            identifier: _,
            attribute_list,
            type_id,
        } => {
            visit_list!(v, visit_attribute_specifier, attribute_specifier_list, attribute_list, arena);
            visit_opt!(v, visit_type_id, type_id, arena);
        }
        Declaration::OpaqueEnumDeclaration {
            attribute_list,
            nested_name_specifier,
            unqualified_id,
            type_specifier_list,
        } => {
            visit_list!(v, visit_attribute_specifier, attribute_specifier_list, attribute_list, arena);
            visit_opt!(v, visit_nested_name_specifier, nested_name_specifier, arena);
            visit_opt!(v, visit_unqualified_name, unqualified_id, arena);
            visit_list!(v, visit_specifier, specifier_list, type_specifier_list, arena);
        }
        Declaration::FunctionDefinition {
            attribute_list,
            decl_specifier_list,
            declarator,
            requires_clause,
            function_body,
        } => {
            visit_list!(v, visit_attribute_specifier, attribute_specifier_list, attribute_list, arena);
            visit_list!(v, visit_specifier, specifier_list, decl_specifier_list, arena);
            visit_opt!(v, visit_declarator, declarator, arena);
            visit_opt!(v, visit_requires_clause, requires_clause, arena);
            visit_opt!(v, visit_function_body, function_body, arena);
        }
        Declaration::TemplateDeclaration {
            template_parameter_list,
            requires_clause,
            declaration,
        } => {
            visit_list!(
                v,
                visit_template_parameter,
                template_parameter_list,
                template_parameter_list,
                arena
            );
            visit_opt!(v, visit_requires_clause, requires_clause, arena);
            visit_opt!(v, visit_declaration, declaration, arena);
        }
        Declaration::ConceptDefinition { identifier: _, expression } => {
            visit_opt!(v, visit_expression, expression, arena);
        }
        Declaration::DeductionGuide {
            identifier: _,
            explicit_specifier,
            parameter_declaration_clause,
            template_id,
        } => {
            visit_opt!(v, visit_specifier, explicit_specifier, arena);
            visit_opt!(v, visit_parameter_declaration_clause, parameter_declaration_clause, arena);
            visit_opt!(v, visit_unqualified_name, template_id, arena);
        }
        Declaration::ExplicitInstantiation { declaration }
        | Declaration::ExportDeclaration { declaration } => {
            visit_opt!(v, visit_declaration, declaration, arena);
        }
        Declaration::ExportCompoundDeclaration { declaration_list } => {
            visit_list!(v, visit_declaration, declaration_list, declaration_list, arena);
        }
        Declaration::LinkageSpecification {
            string_literal: _,
            declaration_list,
        } => {
            visit_list!(v, visit_declaration, declaration_list, declaration_list, arena);
        }
        Declaration::NamespaceDefinition {
            identifier: _,
            is_inline: _,
            attribute_list,
            nested_namespace_specifier_list,
            extra_attribute_list,
            declaration_list,
        } => {
            visit_list!(v, visit_attribute_specifier, attribute_specifier_list, attribute_list, arena);
            visit_list!(
                v,
                visit_nested_namespace_specifier,
                nested_namespace_specifier_list,
                nested_namespace_specifier_list,
                arena
            );
            visit_list!(
                v,
                visit_attribute_specifier,
                attribute_specifier_list,
                extra_attribute_list,
                arena
            );
            visit_list!(v, visit_declaration, declaration_list, declaration_list, arena);
        }
        Declaration::EmptyDeclaration | Declaration::ForRangeDeclaration => {}
        Declaration::AttributeDeclaration { attribute_list } => {
            visit_list!(v, visit_attribute_specifier, attribute_specifier_list, attribute_list, arena);
        }
        Declaration::ModuleImportDeclaration {
            import_name,
            attribute_list,
        } => {
            visit_opt!(v, visit_import_name, import_name, arena);
            visit_list!(v, visit_attribute_specifier, attribute_specifier_list, attribute_list, arena);
        }
        Declaration::ParameterDeclaration {
            identifier: _,
            is_this_introduced: _,
            is_pack: _,
            attribute_list,
            type_specifier_list,
            declarator,
            expression,
        } => {
            visit_list!(v, visit_attribute_specifier, attribute_specifier_list, attribute_list, arena);
            visit_list!(v, visit_specifier, specifier_list, type_specifier_list, arena);
            visit_opt!(v, visit_declarator, declarator, arena);
            visit_opt!(v, visit_expression, expression, arena);
        }
        Declaration::AccessDeclaration { .. }
        | Declaration::AsmQualifier { .. }
        | Declaration::AsmClobber { .. }
        | Declaration::AsmGotoLabel { .. } => {}
        Declaration::StructuredBindingDeclaration {
            attribute_list,
            decl_specifier_list,
            binding_list,
            initializer,
        } => {
            visit_list!(v, visit_attribute_specifier, attribute_specifier_list, attribute_list, arena);
            visit_list!(v, visit_specifier, specifier_list, decl_specifier_list, arena);
            visit_list!(v, visit_unqualified_name, unqualified_name_list, binding_list, arena);
            visit_opt!(v, visit_expression, initializer, arena);
        }
        Declaration::AsmOperand {
            symbolic_name: _,
            constraint_literal: _,
            expression,
        } => {
            visit_opt!(v, visit_expression, expression, arena);
        }
    }
}

pub fn walk_statement<'ast, V: Visit<'ast> + ?Sized>(
    v: &mut V,
    id: StatementId,
    arena: &'ast AstArena,
) {
    match *arena.statement(id) {
        Statement::LabeledStatement { .. }
        | Statement::DefaultStatement
        | Statement::BreakStatement
        | Statement::ContinueStatement
        | Statement::GotoStatement { .. } => {}
        Statement::CaseStatement { expression }
        | Statement::ExpressionStatement { expression }
        | Statement::ReturnStatement { expression }
        | Statement::CoroutineReturnStatement { expression } => {
            visit_opt!(v, visit_expression, expression, arena);
        }
        Statement::CompoundStatement { statement_list } => {
            visit_list!(v, visit_statement, statement_list, statement_list, arena);
        }
        Statement::IfStatement {
            initializer,
            condition,
            statement,
            else_statement,
        } => {
            visit_opt!(v, visit_statement, initializer, arena);
            visit_opt!(v, visit_expression, condition, arena);
            visit_opt!(v, visit_statement, statement, arena);
            visit_opt!(v, visit_statement, else_statement, arena);
        }
        Statement::ConstevalIfStatement {
            is_not: _,
            statement,
            else_statement,
        } => {
            visit_opt!(v, visit_statement, statement, arena);
            visit_opt!(v, visit_statement, else_statement, arena);
        }
        Statement::SwitchStatement {
            initializer,
            condition,
            statement,
        } => {
            visit_opt!(v, visit_statement, initializer, arena);
            visit_opt!(v, visit_expression, condition, arena);
            visit_opt!(v, visit_statement, statement, arena);
        }
        Statement::WhileStatement { condition, statement } => {
            visit_opt!(v, visit_expression, condition, arena);
            visit_opt!(v, visit_statement, statement, arena);
        }
        Statement::DoStatement { statement, expression } => {
            visit_opt!(v, visit_statement, statement, arena);
            visit_opt!(v, visit_expression, expression, arena);
        }
        Statement::ForRangeStatement {
            initializer,
            range_declaration,
            range_initializer,
            statement,
        } => {
            visit_opt!(v, visit_statement, initializer, arena);
            visit_opt!(v, visit_declaration, range_declaration, arena);
            visit_opt!(v, visit_expression, range_initializer, arena);
            visit_opt!(v, visit_statement, statement, arena);
        }
        Statement::ForStatement {
            initializer,
            condition,
            expression,
            statement,
        } => {
            visit_opt!(v, visit_statement, initializer, arena);
            visit_opt!(v, visit_expression, condition, arena);
            visit_opt!(v, visit_expression, expression, arena);
            visit_opt!(v, visit_statement, statement, arena);
        }
        Statement::DeclarationStatement { declaration } => {
            visit_opt!(v, visit_declaration, declaration, arena);
        }
        Statement::TryBlockStatement {
            statement,
            handler_list,
        } => {
            visit_opt!(v, visit_statement, statement, arena);
            visit_list!(v, visit_handler, handler_list, handler_list, arena);
        }
    }
}

pub fn walk_expression<'ast, V: Visit<'ast> + ?Sized>(
    v: &mut V,
    id: ExpressionId,
    arena: &'ast AstArena,
) {
    match *arena.expression(id) {
        Expression::CharLiteralExpression { .. }
        | Expression::BoolLiteralExpression { .. }
        | Expression::IntLiteralExpression { .. }
        | Expression::FloatLiteralExpression { .. }
        | Expression::NullptrLiteralExpression { .. }
        | Expression::StringLiteralExpression { .. }
        | Expression::UserDefinedStringLiteralExpression { .. }
        | Expression::ThisExpression
        | Expression::SizeofPackExpression { .. } => {}
        Expression::NestedExpression { expression }
        | Expression::TypeidExpression { expression }
        | Expression::AwaitExpression { expression }
        | Expression::SizeofExpression { expression }
        | Expression::AlignofExpression { expression }
        | Expression::NoexceptExpression { expression }
        | Expression::DeleteExpression { expression }
        | Expression::ImplicitCastExpression { expression }
        | Expression::YieldExpression { expression }
        | Expression::ThrowExpression { expression }
        | Expression::PackExpansionExpression { expression }
        | Expression::EqualInitializer { expression } => {
            visit_opt!(v, visit_expression, expression, arena);
        }
        Expression::IdExpression {
            is_template_introduced: _,
            nested_name_specifier,
            unqualified_id,
        } => {
            visit_opt!(v, visit_nested_name_specifier, nested_name_specifier, arena);
            visit_opt!(v, visit_unqualified_name, unqualified_id, arena);
        }
        Expression::LambdaExpression {
            capture_default: _,
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
            visit_list!(v, visit_lambda_capture, lambda_capture_list, capture_list, arena);
            visit_list!(
                v,
                visit_template_parameter,
                template_parameter_list,
                template_parameter_list,
                arena
            );
            visit_opt!(v, visit_requires_clause, template_requires_clause, arena);
            visit_opt!(v, visit_parameter_declaration_clause, parameter_declaration_clause, arena);
            visit_list!(
                v,
                visit_lambda_specifier,
                lambda_specifier_list,
                lambda_specifier_list,
                arena
            );
            visit_opt!(v, visit_exception_specifier, exception_specifier, arena);
            visit_list!(v, visit_attribute_specifier, attribute_specifier_list, attribute_list, arena);
            visit_opt!(v, visit_trailing_return_type, trailing_return_type, arena);
            visit_opt!(v, visit_requires_clause, requires_clause, arena);
            visit_opt!(v, visit_statement, statement, arena);
        }
        Expression::FoldExpression {
            op: _,
            fold_op: _,
            left_expression,
            right_expression,
        } => {
            visit_opt!(v, visit_expression, left_expression, arena);
            visit_opt!(v, visit_expression, right_expression, arena);
        }
        Expression::RightFoldExpression { op: _, expression }
        | Expression::LeftFoldExpression { op: _, expression }
        | Expression::UnaryExpression { op: _, expression } => {
            visit_opt!(v, visit_expression, expression, arena);
        }
        Expression::RequiresExpression {
            parameter_declaration_clause,
            requirement_list,
        } => {
            visit_opt!(v, visit_parameter_declaration_clause, parameter_declaration_clause, arena);
            visit_list!(v, visit_requirement, requirement_list, requirement_list, arena);
        }
        Expression::SubscriptExpression {
            base_expression,
            index_expression,
        } => {
            visit_opt!(v, visit_expression, base_expression, arena);
            visit_opt!(v, visit_expression, index_expression, arena);
        }
        Expression::CallExpression {
            base_expression,
            expression_list,
        } => {
            visit_opt!(v, visit_expression, base_expression, arena);
            visit_list!(v, visit_expression, expression_list, expression_list, arena);
        }
        Expression::TypeConstruction {
            type_specifier,
            expression_list,
        } => {
            visit_opt!(v, visit_specifier, type_specifier, arena);
            visit_list!(v, visit_expression, expression_list, expression_list, arena);
        }
        Expression::BracedTypeConstruction {
            type_specifier,
            braced_init_list,
        } => {
            visit_opt!(v, visit_specifier, type_specifier, arena);
            visit_opt!(v, visit_expression, braced_init_list, arena);
        }
        Expression::MemberExpression {
            access_op: _,
            base_expression,
            member_id,
        } => {
            visit_opt!(v, visit_expression, base_expression, arena);
            visit_opt!(v, visit_unqualified_name, member_id, arena);
        }
        Expression::PostIncrExpression { op: _, base_expression } => {
            visit_opt!(v, visit_expression, base_expression, arena);
        }
        Expression::CppCastExpression { type_id, expression }
        | Expression::BuiltinBitCastExpression { type_id, expression }
        | Expression::CastExpression { type_id, expression } => {
            visit_opt!(v, visit_type_id, type_id, arena);
            visit_opt!(v, visit_expression, expression, arena);
        }
        Expression::TypeidOfTypeExpression { type_id }
        | Expression::SizeofTypeExpression { type_id }
        | Expression::AlignofTypeExpression { type_id } => {
            visit_opt!(v, visit_type_id, type_id, arena);
        }
        Expression::NewExpression {
            new_placement,
            type_specifier_list,
            declarator,
            new_initializer,
        } => {
            visit_opt!(v, visit_new_placement, new_placement, arena);
            visit_list!(v, visit_specifier, specifier_list, type_specifier_list, arena);
            visit_opt!(v, visit_declarator, declarator, arena);
            visit_opt!(v, visit_new_initializer, new_initializer, arena);
        }
        Expression::BinaryExpression {
            op: _,
            left_expression,
            right_expression,
        }
        | Expression::AssignmentExpression {
            op: _,
            left_expression,
            right_expression,
        } => {
            visit_opt!(v, visit_expression, left_expression, arena);
            visit_opt!(v, visit_expression, right_expression, arena);
        }
        Expression::ConditionalExpression {
            condition,
            iftrue_expression,
            iffalse_expression,
        } => {
            visit_opt!(v, visit_expression, condition, arena);
            visit_opt!(v, visit_expression, iftrue_expression, arena);
            visit_opt!(v, visit_expression, iffalse_expression, arena);
        }
        Expression::DesignatedInitializerClause {
            identifier: _,
            initializer,
        } => {
            visit_opt!(v, visit_expression, initializer, arena);
        }
        Expression::TypeTraitsExpression {
            type_trait: _,
            type_id_list,
        } => {
            visit_list!(v, visit_type_id, type_id_list, type_id_list, arena);
        }
        Expression::ConditionExpression {
            attribute_list,
            decl_specifier_list,
            declarator,
            initializer,
        } => {
            visit_list!(v, visit_attribute_specifier, attribute_specifier_list, attribute_list, arena);
            visit_list!(v, visit_specifier, specifier_list, decl_specifier_list, arena);
            visit_opt!(v, visit_declarator, declarator, arena);
            visit_opt!(v, visit_expression, initializer, arena);
        }
        Expression::BracedInitList { expression_list }
        | Expression::ParenInitializer { expression_list } => {
            visit_list!(v, visit_expression, expression_list, expression_list, arena);
        }
    }
}

pub fn walk_specifier<'ast, V: Visit<'ast> + ?Sized>(
    v: &mut V,
    id: SpecifierId,
    arena: &'ast AstArena,
) {
    match *arena.specifier(id) {
        Specifier::TypedefSpecifier
        | Specifier::FriendSpecifier
        | Specifier::ConstevalSpecifier
        | Specifier::ConstinitSpecifier
        | Specifier::ConstexprSpecifier
        | Specifier::InlineSpecifier
        | Specifier::StaticSpecifier
        | Specifier::ExternSpecifier
        | Specifier::ThreadLocalSpecifier
        | Specifier::ThreadSpecifier
        | Specifier::MutableSpecifier
        | Specifier::VirtualSpecifier
        | Specifier::AutoTypeSpecifier
        | Specifier::VoidTypeSpecifier
        | Specifier::SizeTypeSpecifier { .. }
        | Specifier::SignTypeSpecifier { .. }
        | Specifier::VaListTypeSpecifier { .. }
        | Specifier::IntegralTypeSpecifier { .. }
        | Specifier::FloatingPointTypeSpecifier { .. }
        | Specifier::ComplexTypeSpecifier
        | Specifier::DecltypeAutoSpecifier
        | Specifier::ConstQualifier
        | Specifier::VolatileQualifier
        | Specifier::RestrictQualifier => {}
        Specifier::ExplicitSpecifier { expression }
        | Specifier::DecltypeSpecifier { expression } => {
            visit_opt!(v, visit_expression, expression, arena);
        }
        Specifier::NamedTypeSpecifier {
            is_template_introduced: _,
            nested_name_specifier,
            unqualified_id,
        }
        | Specifier::TypenameSpecifier {
            nested_name_specifier,
            unqualified_id,
        } => {
            visit_opt!(v, visit_nested_name_specifier, nested_name_specifier, arena);
            visit_opt!(v, visit_unqualified_name, unqualified_id, arena);
        }
        Specifier::AtomicTypeSpecifier { type_id }
        | Specifier::UnderlyingTypeSpecifier { type_id } => {
            visit_opt!(v, visit_type_id, type_id, arena);
        }
        Specifier::ElaboratedTypeSpecifier {
            class_key: _,
            is_template_introduced: _,
            attribute_list,
            nested_name_specifier,
            unqualified_id,
        } => {
            visit_list!(v, visit_attribute_specifier, attribute_specifier_list, attribute_list, arena);
            visit_opt!(v, visit_nested_name_specifier, nested_name_specifier, arena);
            visit_opt!(v, visit_unqualified_name, unqualified_id, arena);
        }
        Specifier::PlaceholderTypeSpecifier {
            type_constraint,
            specifier,
        } => {
            visit_opt!(v, visit_type_constraint, type_constraint, arena);
            visit_opt!(v, visit_specifier, specifier, arena);
        }
        Specifier::EnumSpecifier {
            attribute_list,
            nested_name_specifier,
            unqualified_id,
            type_specifier_list,
            enumerator_list,
        } => {
            visit_list!(v, visit_attribute_specifier, attribute_specifier_list, attribute_list, arena);
            visit_opt!(v, visit_nested_name_specifier, nested_name_specifier, arena);
            visit_opt!(v, visit_unqualified_name, unqualified_id, arena);
            visit_list!(v, visit_specifier, specifier_list, type_specifier_list, arena);
            visit_list!(v, visit_enumerator, enumerator_list, enumerator_list, arena);
        }
        Specifier::ClassSpecifier {
            class_key: _,
            is_final: _,
            attribute_list,
            nested_name_specifier,
            unqualified_id,
            base_specifier_list,
            declaration_list,
        } => {
            visit_list!(v, visit_attribute_specifier, attribute_specifier_list, attribute_list, arena);
            visit_opt!(v, visit_nested_name_specifier, nested_name_specifier, arena);
            visit_opt!(v, visit_unqualified_name, unqualified_id, arena);
            visit_list!(v, visit_base_specifier, base_specifier_list, base_specifier_list, arena);
            visit_list!(v, visit_declaration, declaration_list, declaration_list, arena);
        }
    }
}

pub fn walk_template_parameter<'ast, V: Visit<'ast> + ?Sized>(
    v: &mut V,
    id: TemplateParameterId,
    arena: &'ast AstArena,
) {
    match *arena.template_parameter(id) {
        TemplateParameter::TemplateTypeParameter {
            depth: _,
            index: _,
            identifier: _,
            is_pack: _,
            template_parameter_list,
            requires_clause,
            id_expression,
        } => {
            visit_list!(
                v,
                visit_template_parameter,
                template_parameter_list,
                template_parameter_list,
                arena
            );
            visit_opt!(v, visit_requires_clause, requires_clause, arena);
            visit_opt!(v, visit_expression, id_expression, arena);
        }
        TemplateParameter::NonTypeTemplateParameter {
            depth: _,
            index: _,
            declaration,
        } => {
            visit_opt!(v, visit_declaration, declaration, arena);
        }
        TemplateParameter::TypenameTypeParameter {
            depth: _,
            index: _,
            identifier: _,
            is_pack: _,
            type_id,
        } => {
            visit_opt!(v, visit_type_id, type_id, arena);
        }
        TemplateParameter::ConstraintTypeParameter {
            depth: _,
            index: _,
            identifier: _,
            type_constraint,
            type_id,
        } => {
            visit_opt!(v, visit_type_constraint, type_constraint, arena);
            visit_opt!(v, visit_type_id, type_id, arena);
        }
    }
}

pub fn walk_ptr_operator<'ast, V: Visit<'ast> + ?Sized>(
    v: &mut V,
    id: PtrOperatorId,
    arena: &'ast AstArena,
) {
    match *arena.ptr_operator(id) {
        PtrOperator::PointerOperator {
            attribute_list,
            cv_qualifier_list,
        } => {
            visit_list!(v, visit_attribute_specifier, attribute_specifier_list, attribute_list, arena);
            visit_list!(v, visit_specifier, specifier_list, cv_qualifier_list, arena);
        }
        PtrOperator::ReferenceOperator {
            ref_op: _,
            attribute_list,
        } => {
            visit_list!(v, visit_attribute_specifier, attribute_specifier_list, attribute_list, arena);
        }
        PtrOperator::PtrToMemberOperator {
            nested_name_specifier,
            attribute_list,
            cv_qualifier_list,
        } => {
            visit_opt!(v, visit_nested_name_specifier, nested_name_specifier, arena);
            visit_list!(v, visit_attribute_specifier, attribute_specifier_list, attribute_list, arena);
            visit_list!(v, visit_specifier, specifier_list, cv_qualifier_list, arena);
        }
    }
}

pub fn walk_core_declarator<'ast, V: Visit<'ast> + ?Sized>(
    v: &mut V,
    id: CoreDeclaratorId,
    arena: &'ast AstArena,
) {
    match *arena.core_declarator(id) {
        CoreDeclarator::BitfieldDeclarator {
            unqualified_id,
            size_expression,
        } => {
            visit_opt!(v, visit_unqualified_name, unqualified_id, arena);
            visit_opt!(v, visit_expression, size_expression, arena);
        }
        CoreDeclarator::ParameterPack { core_declarator } => {
            visit_opt!(v, visit_core_declarator, core_declarator, arena);
        }
        CoreDeclarator::IdDeclarator {
            is_template_introduced: _,
            nested_name_specifier,
            unqualified_id,
            attribute_list,
        } => {
            visit_opt!(v, visit_nested_name_specifier, nested_name_specifier, arena);
            visit_opt!(v, visit_unqualified_name, unqualified_id, arena);
            visit_list!(v, visit_attribute_specifier, attribute_specifier_list, attribute_list, arena);
        }
        CoreDeclarator::NestedDeclarator { declarator } => {
            visit_opt!(v, visit_declarator, declarator, arena);
        }
    }
}

pub fn walk_declarator_chunk<'ast, V: Visit<'ast> + ?Sized>(
    v: &mut V,
    id: DeclaratorChunkId,
    arena: &'ast AstArena,
) {
    match *arena.declarator_chunk(id) {
        DeclaratorChunk::FunctionDeclaratorChunk {
            is_final: _,
            is_override: _,
            is_pure: _,
            parameter_declaration_clause,
            cv_qualifier_list,
            exception_specifier,
            attribute_list,
            trailing_return_type,
        } => {
            visit_opt!(v, visit_parameter_declaration_clause, parameter_declaration_clause, arena);
            visit_list!(v, visit_specifier, specifier_list, cv_qualifier_list, arena);
            visit_opt!(v, visit_exception_specifier, exception_specifier, arena);
            visit_list!(v, visit_attribute_specifier, attribute_specifier_list, attribute_list, arena);
            visit_opt!(v, visit_trailing_return_type, trailing_return_type, arena);
        }
        DeclaratorChunk::ArrayDeclaratorChunk {
            expression,
            attribute_list,
        } => {
            visit_opt!(v, visit_expression, expression, arena);
            visit_list!(v, visit_attribute_specifier, attribute_specifier_list, attribute_list, arena);
        }
    }
}

pub fn walk_unqualified_name<'ast, V: Visit<'ast> + ?Sized>(
    v: &mut V,
    id: UnqualifiedNameId,
    arena: &'ast AstArena,
) {
    match *arena.unqualified_name(id) {
        UnqualifiedName::NameId { .. }
        | UnqualifiedName::OperatorFunctionId { .. }
        | UnqualifiedName::LiteralOperatorId { .. } => {}
        UnqualifiedName::DestructorId { id: inner } => {
            visit_opt!(v, visit_unqualified_name, inner, arena);
        }
        UnqualifiedName::DecltypeId { decltype_specifier } => {
            visit_opt!(v, visit_specifier, decltype_specifier, arena);
        }
        UnqualifiedName::ConversionFunctionId { type_id } => {
            visit_opt!(v, visit_type_id, type_id, arena);
        }
        UnqualifiedName::SimpleTemplateId {
            identifier: _,
            template_argument_list,
        } => {
            visit_list!(
                v,
                visit_template_argument,
                template_argument_list,
                template_argument_list,
                arena
            );
        }
        UnqualifiedName::LiteralOperatorTemplateId {
            literal_operator_id,
            template_argument_list,
        } => {
            visit_opt!(v, visit_unqualified_name, literal_operator_id, arena);
            visit_list!(
                v,
                visit_template_argument,
                template_argument_list,
                template_argument_list,
                arena
            );
        }
        UnqualifiedName::OperatorFunctionTemplateId {
            operator_function_id,
            template_argument_list,
        } => {
            visit_opt!(v, visit_unqualified_name, operator_function_id, arena);
            visit_list!(
                v,
                visit_template_argument,
                template_argument_list,
                template_argument_list,
                arena
            );
        }
    }
}

pub fn walk_nested_name_specifier<'ast, V: Visit<'ast> + ?Sized>(
    v: &mut V,
    id: NestedNameSpecifierId,
    arena: &'ast AstArena,
) {
    match *arena.nested_name_specifier(id) {
        NestedNameSpecifier::GlobalNestedNameSpecifier => {}
        NestedNameSpecifier::SimpleNestedNameSpecifier {
            identifier: _,
            nested_name_specifier,
        } => {
            visit_opt!(v, visit_nested_name_specifier, nested_name_specifier, arena);
        }
        NestedNameSpecifier::DecltypeNestedNameSpecifier {
            nested_name_specifier,
            decltype_specifier,
        } => {
            visit_opt!(v, visit_nested_name_specifier, nested_name_specifier, arena);
            visit_opt!(v, visit_specifier, decltype_specifier, arena);
        }
        NestedNameSpecifier::TemplateNestedNameSpecifier {
            is_template_introduced: _,
            nested_name_specifier,
            template_id,
        } => {
            visit_opt!(v, visit_nested_name_specifier, nested_name_specifier, arena);
            visit_opt!(v, visit_unqualified_name, template_id, arena);
        }
    }
}

pub fn walk_function_body<'ast, V: Visit<'ast> + ?Sized>(
    v: &mut V,
    id: FunctionBodyId,
    arena: &'ast AstArena,
) {
    match *arena.function_body(id) {
        FunctionBody::DefaultFunctionBody | FunctionBody::DeleteFunctionBody => {}
        FunctionBody::CompoundStatementFunctionBody {
            mem_initializer_list,
            statement,
        } => {
            visit_list!(v, visit_mem_initializer, mem_initializer_list, mem_initializer_list, arena);
            visit_opt!(v, visit_statement, statement, arena);
        }
        FunctionBody::TryStatementFunctionBody {
            mem_initializer_list,
            statement,
            handler_list,
        } => {
            visit_list!(v, visit_mem_initializer, mem_initializer_list, mem_initializer_list, arena);
            visit_opt!(v, visit_statement, statement, arena);
            visit_list!(v, visit_handler, handler_list, handler_list, arena);
        }
    }
}

pub fn walk_template_argument<'ast, V: Visit<'ast> + ?Sized>(
    v: &mut V,
    id: TemplateArgumentId,
    arena: &'ast AstArena,
) {
    match *arena.template_argument(id) {
        TemplateArgument::TypeTemplateArgument { type_id } => {
            visit_opt!(v, visit_type_id, type_id, arena);
        }
        TemplateArgument::ExpressionTemplateArgument { expression } => {
            visit_opt!(v, visit_expression, expression, arena);
        }
    }
}

pub fn walk_exception_specifier<'ast, V: Visit<'ast> + ?Sized>(
    v: &mut V,
    id: ExceptionSpecifierId,
    arena: &'ast AstArena,
) {
    match *arena.exception_specifier(id) {
        ExceptionSpecifier::ThrowExceptionSpecifier => {}
        ExceptionSpecifier::NoexceptSpecifier { expression } => {
            visit_opt!(v, visit_expression, expression, arena);
        }
    }
}

pub fn walk_requirement<'ast, V: Visit<'ast> + ?Sized>(
    v: &mut V,
    id: RequirementId,
    arena: &'ast AstArena,
) {
    match *arena.requirement(id) {
        Requirement::SimpleRequirement { expression }
        | Requirement::NestedRequirement { expression } => {
            visit_opt!(v, visit_expression, expression, arena);
        }
        Requirement::CompoundRequirement {
            expression,
            type_constraint,
        } => {
            visit_opt!(v, visit_expression, expression, arena);
            visit_opt!(v, visit_type_constraint, type_constraint, arena);
        }
        Requirement::TypeRequirement {
            nested_name_specifier,
            unqualified_id,
        } => {
            visit_opt!(v, visit_nested_name_specifier, nested_name_specifier, arena);
            visit_opt!(v, visit_unqualified_name, unqualified_id, arena);
        }
    }
}

pub fn walk_new_initializer<'ast, V: Visit<'ast> + ?Sized>(
    v: &mut V,
    id: NewInitializerId,
    arena: &'ast AstArena,
) {
    match *arena.new_initializer(id) {
        NewInitializer::NewParenInitializer { expression_list } => {
            visit_list!(v, visit_expression, expression_list, expression_list, arena);
        }
        NewInitializer::NewBracedInitializer { braced_init_list } => {
            visit_opt!(v, visit_expression, braced_init_list, arena);
        }
    }
}

pub fn walk_mem_initializer<'ast, V: Visit<'ast> + ?Sized>(
    v: &mut V,
    id: MemInitializerId,
    arena: &'ast AstArena,
) {
    match *arena.mem_initializer(id) {
        MemInitializer::ParenMemInitializer {
            nested_name_specifier,
            unqualified_id,
            expression_list,
        } => {
            visit_opt!(v, visit_nested_name_specifier, nested_name_specifier, arena);
            visit_opt!(v, visit_unqualified_name, unqualified_id, arena);
            visit_list!(v, visit_expression, expression_list, expression_list, arena);
        }
        MemInitializer::BracedMemInitializer {
            nested_name_specifier,
            unqualified_id,
            braced_init_list,
        } => {
            visit_opt!(v, visit_nested_name_specifier, nested_name_specifier, arena);
            visit_opt!(v, visit_unqualified_name, unqualified_id, arena);
            visit_opt!(v, visit_expression, braced_init_list, arena);
        }
    }
}

pub fn walk_lambda_capture<'ast, V: Visit<'ast> + ?Sized>(
    v: &mut V,
    id: LambdaCaptureId,
    arena: &'ast AstArena,
) {
    match *arena.lambda_capture(id) {
        LambdaCapture::ThisLambdaCapture
        | LambdaCapture::DerefThisLambdaCapture
        | LambdaCapture::SimpleLambdaCapture { .. }
        | LambdaCapture::RefLambdaCapture { .. } => {}
        LambdaCapture::RefInitLambdaCapture {
            identifier: _,
            initializer,
        }
        | LambdaCapture::InitLambdaCapture {
            identifier: _,
            initializer,
        } => {
            visit_opt!(v, visit_expression, initializer, arena);
        }
    }
}

pub fn walk_exception_declaration<'ast, V: Visit<'ast> + ?Sized>(
    v: &mut V,
    id: ExceptionDeclarationId,
    arena: &'ast AstArena,
) {
    match *arena.exception_declaration(id) {
        ExceptionDeclaration::EllipsisExceptionDeclaration => {}
        ExceptionDeclaration::TypeExceptionDeclaration {
            attribute_list,
            type_specifier_list,
            declarator,
        } => {
            visit_list!(v, visit_attribute_specifier, attribute_specifier_list, attribute_list, arena);
            visit_list!(v, visit_specifier, specifier_list, type_specifier_list, arena);
            visit_opt!(v, visit_declarator, declarator, arena);
        }
    }
}

pub fn walk_attribute_specifier<'ast, V: Visit<'ast> + ?Sized>(
    v: &mut V,
    id: AttributeSpecifierId,
    arena: &'ast AstArena,
) {
    match *arena.attribute_specifier(id) {
        AttributeSpecifier::CxxAttribute {
            attribute_using_prefix,
            attribute_list,
        } => {
            visit_opt!(v, visit_attribute_using_prefix, attribute_using_prefix, arena);
            visit_list!(v, visit_attribute, attribute_list, attribute_list, arena);
        }
        AttributeSpecifier::GccAttribute => {}
        AttributeSpecifier::AlignasAttribute {
            is_pack: _,
            expression,
        } => {
            visit_opt!(v, visit_expression, expression, arena);
        }
        AttributeSpecifier::AlignasTypeAttribute { is_pack: _, type_id } => {
            visit_opt!(v, visit_type_id, type_id, arena);
        }
        AttributeSpecifier::AsmAttribute { .. } => {}
    }
}

pub fn walk_global_module_fragment<'ast, V: Visit<'ast> + ?Sized>(
    v: &mut V,
    id: GlobalModuleFragmentId,
    arena: &'ast AstArena,
) {
    let node = *arena.global_module_fragment(id);
    visit_list!(v, visit_declaration, declaration_list, node.declaration_list, arena);
}

pub fn walk_private_module_fragment<'ast, V: Visit<'ast> + ?Sized>(
    v: &mut V,
    id: PrivateModuleFragmentId,
    arena: &'ast AstArena,
) {
    let node = *arena.private_module_fragment(id);
    visit_list!(v, visit_declaration, declaration_list, node.declaration_list, arena);
}

pub fn walk_module_declaration<'ast, V: Visit<'ast> + ?Sized>(
    v: &mut V,
    id: ModuleDeclarationId,
    arena: &'ast AstArena,
) {
    let node = *arena.module_declaration(id);
    visit_opt!(v, visit_module_name, node.module_name, arena);
    visit_opt!(v, visit_module_partition, node.module_partition, arena);
    visit_list!(v, visit_attribute_specifier, attribute_specifier_list, node.attribute_list, arena);
}

pub fn walk_module_name<'ast, V: Visit<'ast> + ?Sized>(
    v: &mut V,
    id: ModuleNameId,
    arena: &'ast AstArena,
) {
    let node = *arena.module_name(id);
    visit_opt!(v, visit_module_qualifier, node.module_qualifier, arena);
}

pub fn walk_module_qualifier<'ast, V: Visit<'ast> + ?Sized>(
    v: &mut V,
    id: ModuleQualifierId,
    arena: &'ast AstArena,
) {
    let node = *arena.module_qualifier(id);
    visit_opt!(v, visit_module_qualifier, node.module_qualifier, arena);
}

pub fn walk_module_partition<'ast, V: Visit<'ast> + ?Sized>(
    v: &mut V,
    id: ModulePartitionId,
    arena: &'ast AstArena,
) {
    let node = *arena.module_partition(id);
    visit_opt!(v, visit_module_name, node.module_name, arena);
}

pub fn walk_import_name<'ast, V: Visit<'ast> + ?Sized>(
    v: &mut V,
    id: ImportNameId,
    arena: &'ast AstArena,
) {
    let node = *arena.import_name(id);
    visit_opt!(v, visit_module_partition, node.module_partition, arena);
    visit_opt!(v, visit_module_name, node.module_name, arena);
}

pub fn walk_init_declarator<'ast, V: Visit<'ast> + ?Sized>(
    v: &mut V,
    id: InitDeclaratorId,
    arena: &'ast AstArena,
) {
    let node = *arena.init_declarator(id);
    visit_opt!(v, visit_declarator, node.declarator, arena);
    visit_opt!(v, visit_requires_clause, node.requires_clause, arena);
    visit_opt!(v, visit_expression, node.initializer, arena);
}

pub fn walk_declarator<'ast, V: Visit<'ast> + ?Sized>(
    v: &mut V,
    id: DeclaratorId,
    arena: &'ast AstArena,
) {
    let node = *arena.declarator(id);
    visit_list!(v, visit_ptr_operator, ptr_operator_list, node.ptr_op_list, arena);
    visit_opt!(v, visit_core_declarator, node.core_declarator, arena);
    visit_list!(v, visit_declarator_chunk, declarator_chunk_list, node.declarator_chunk_list, arena);
}

pub fn walk_using_declarator<'ast, V: Visit<'ast> + ?Sized>(
    v: &mut V,
    id: UsingDeclaratorId,
    arena: &'ast AstArena,
) {
    let node = *arena.using_declarator(id);
    visit_opt!(v, visit_nested_name_specifier, node.nested_name_specifier, arena);
    visit_opt!(v, visit_unqualified_name, node.unqualified_id, arena);
}

pub fn walk_enumerator<'ast, V: Visit<'ast> + ?Sized>(
    v: &mut V,
    id: EnumeratorId,
    arena: &'ast AstArena,
) {
    let node = *arena.enumerator(id);
    visit_list!(v, visit_attribute_specifier, attribute_specifier_list, node.attribute_list, arena);
    visit_opt!(v, visit_expression, node.expression, arena);
}

pub fn walk_type_id<'ast, V: Visit<'ast> + ?Sized>(
    v: &mut V,
    id: TypeIdNodeId,
    arena: &'ast AstArena,
) {
    let node = *arena.type_id(id);
    visit_list!(v, visit_specifier, specifier_list, node.type_specifier_list, arena);
    visit_opt!(v, visit_declarator, node.declarator, arena);
}

pub fn walk_handler<'ast, V: Visit<'ast> + ?Sized>(
    v: &mut V,
    id: HandlerId,
    arena: &'ast AstArena,
) {
    let node = *arena.handler(id);
    visit_opt!(v, visit_exception_declaration, node.exception_declaration, arena);
    visit_opt!(v, visit_statement, node.statement, arena);
}

pub fn walk_base_specifier<'ast, V: Visit<'ast> + ?Sized>(
    v: &mut V,
    id: BaseSpecifierId,
    arena: &'ast AstArena,
) {
    let node = *arena.base_specifier(id);
    visit_list!(v, visit_attribute_specifier, attribute_specifier_list, node.attribute_list, arena);
    visit_opt!(v, visit_nested_name_specifier, node.nested_name_specifier, arena);
    visit_opt!(v, visit_unqualified_name, node.unqualified_id, arena);
}

pub fn walk_requires_clause<'ast, V: Visit<'ast> + ?Sized>(
    v: &mut V,
    id: RequiresClauseId,
    arena: &'ast AstArena,
) {
    let node = *arena.requires_clause(id);
    visit_opt!(v, visit_expression, node.expression, arena);
}

pub fn walk_parameter_declaration_clause<'ast, V: Visit<'ast> + ?Sized>(
    v: &mut V,
    id: ParameterDeclarationClauseId,
    arena: &'ast AstArena,
) {
    let node = *arena.parameter_declaration_clause(id);
    visit_list!(v, visit_declaration, declaration_list, node.parameter_declaration_list, arena);
}

pub fn walk_trailing_return_type<'ast, V: Visit<'ast> + ?Sized>(
    v: &mut V,
    id: TrailingReturnTypeId,
    arena: &'ast AstArena,
) {
    let node = *arena.trailing_return_type(id);
    visit_opt!(v, visit_type_id, node.type_id, arena);
}

pub fn walk_type_constraint<'ast, V: Visit<'ast> + ?Sized>(
    v: &mut V,
    id: TypeConstraintId,
    arena: &'ast AstArena,
) {
    let node = *arena.type_constraint(id);
    visit_opt!(v, visit_nested_name_specifier, node.nested_name_specifier, arena);
    visit_list!(
        v,
        visit_template_argument,
        template_argument_list,
        node.template_argument_list,
        arena
    );
}

pub fn walk_attribute<'ast, V: Visit<'ast> + ?Sized>(
    v: &mut V,
    id: AttributeId,
    arena: &'ast AstArena,
) {
    let node = *arena.attribute(id);
    visit_opt!(v, visit_attribute_token, node.attribute_token, arena);
    visit_opt!(v, visit_attribute_argument_clause, node.attribute_argument_clause, arena);
}

pub fn walk_new_placement<'ast, V: Visit<'ast> + ?Sized>(
    v: &mut V,
    id: NewPlacementId,
    arena: &'ast AstArena,
) {
    let node = *arena.new_placement(id);
    visit_list!(v, visit_expression, expression_list, node.expression_list, arena);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TokenKind;

    /// Counts expressions, the classic traversal smoke test.
    struct ExprCounter {
        count: usize,
    }

    impl<'ast> Visit<'ast> for ExprCounter {
        fn visit_expression(&mut self, id: ExpressionId, arena: &'ast AstArena) {
            self.count += 1;
            walk_expression(self, id, arena);
        }
    }

    #[test]
    fn counts_nested_expressions() {
        let mut arena = AstArena::new();
        let left = arena.alloc_expression(Expression::BoolLiteralExpression { is_true: true });
        let right = arena.alloc_expression(Expression::ThisExpression);
        let binary = arena.alloc_expression(Expression::BinaryExpression {
            op: TokenKind::Plus,
            left_expression: Some(left),
            right_expression: Some(right),
        });

        let mut counter = ExprCounter { count: 0 };
        counter.visit_expression(binary, &arena);
        assert_eq!(counter.count, 3);
    }

    #[test]
    fn absent_children_are_skipped() {
        let mut arena = AstArena::new();
        let cond = arena.alloc_expression(Expression::BoolLiteralExpression { is_true: true });
        let then_stmt = arena.alloc_statement(Statement::BreakStatement);
        let if_stmt = arena.alloc_statement(Statement::IfStatement {
            initializer: None,
            condition: Some(cond),
            statement: Some(then_stmt),
            else_statement: None,
        });

        let mut counter = ExprCounter { count: 0 };
        counter.visit_statement(if_stmt, &arena);
        assert_eq!(counter.count, 1);
    }

    #[test]
    fn list_children_visit_in_source_order() {
        struct Collector {
            seen: Vec<ExpressionId>,
        }
        impl<'ast> Visit<'ast> for Collector {
            fn visit_expression(&mut self, id: ExpressionId, arena: &'ast AstArena) {
                self.seen.push(id);
                walk_expression(self, id, arena);
            }
        }

        let mut arena = AstArena::new();
        let a = arena.alloc_expression(Expression::ThisExpression);
        let b = arena.alloc_expression(Expression::ThisExpression);
        let list = arena.alloc_expression_list([a, b]);
        let call = arena.alloc_expression(Expression::CallExpression {
            base_expression: None,
            expression_list: list,
        });

        let mut collector = Collector { seen: Vec::new() };
        collector.visit_expression(call, &arena);
        assert_eq!(collector.seen, vec![call, a, b]);
    }

    #[test]
    fn unit_traversal_reaches_declarations() {
        struct DeclCounter {
            count: usize,
        }
        impl<'ast> Visit<'ast> for DeclCounter {
            fn visit_declaration(&mut self, id: DeclarationId, arena: &'ast AstArena) {
                self.count += 1;
                walk_declaration(self, id, arena);
            }
        }

        let mut arena = AstArena::new();
        let a = arena.alloc_declaration(Declaration::EmptyDeclaration);
        let b = arena.alloc_declaration(Declaration::EmptyDeclaration);
        let list = arena.alloc_declaration_list([a, b]);
        let unit = arena.alloc_unit(Unit::TranslationUnit {
            declaration_list: list,
        });

        let mut counter = DeclCounter { count: 0 };
        counter.visit_unit(unit, &arena);
        assert_eq!(counter.count, 2);
    }
}
