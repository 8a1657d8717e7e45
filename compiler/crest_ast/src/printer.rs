//! Deterministic AST dump.
//!
//! The dump is line oriented, ASCII-only, two spaces per nesting level, and
//! a pure function of the AST: the test harness compares it byte for byte
//! against golden files.
//!
//! Formatting rules:
//! - a node renders as one line: indent, optional `<field>: ` prefix when it
//!   was reached through a named field, its kebab-case name;
//! - a child list renders a `<list-name>` header one level below the node
//!   and its elements one level below the header;
//! - token payloads render through their canonical spelling and are
//!   suppressed at `EofSymbol`; booleans render only when true; `depth` and
//!   `index` of template parameters render unconditionally;
//! - identifier payloads render the raw interned string, literal payloads
//!   the raw spelling;
//! - absent children render nothing.

use std::fmt::Write as _;

use crate::arena::AstArena;
use crate::ast::*;
use crate::control::Control;
use crate::node_id::*;
use crate::unit::TranslationUnit;
use crate::{BuiltinKind, LiteralId, Name, TokenKind};

/// Renders an AST subtree into its canonical textual form.
pub struct AstPrinter<'a> {
    arena: &'a AstArena,
    control: &'a Control,
    out: String,
    depth: usize,
}

/// Dump a whole translation unit from its root.
///
/// Units without a root render as the empty string.
pub fn print_unit(unit: &TranslationUnit) -> String {
    match unit.root() {
        Some(root) => AstPrinter::new(unit.arena(), unit.control()).print(root),
        None => String::new(),
    }
}

impl<'a> AstPrinter<'a> {
    pub fn new(arena: &'a AstArena, control: &'a Control) -> Self {
        AstPrinter {
            arena,
            control,
            out: String::new(),
            depth: 0,
        }
    }

    /// Render the tree under `root`.
    pub fn print(mut self, root: UnitId) -> String {
        self.unit_node(root);
        self.out
    }

    // --- low-level emission ---

    fn indent_at(&mut self, depth: usize) {
        for _ in 0..depth {
            self.out.push_str("  ");
        }
    }

    fn node_line(&mut self, field: Option<&str>, name: &str) {
        self.indent_at(self.depth);
        if let Some(field) = field {
            let _ = write!(self.out, "{field}: ");
        }
        self.out.push_str(name);
        self.out.push('\n');
    }

    fn scalar_line(&mut self, label: &str, value: &str) {
        self.indent_at(self.depth + 1);
        let _ = write!(self.out, "{label}: {value}\n");
    }

    fn field_token(&mut self, label: &str, token: TokenKind) {
        if token != TokenKind::EofSymbol {
            self.scalar_line(label, token.spell());
        }
    }

    fn field_builtin(&mut self, label: &str, builtin: BuiltinKind) {
        if builtin != BuiltinKind::Identifier {
            self.scalar_line(label, builtin.spell());
        }
    }

    fn field_bool(&mut self, label: &str, value: bool) {
        if value {
            self.scalar_line(label, "true");
        }
    }

    fn field_u32(&mut self, label: &str, value: u32) {
        self.indent_at(self.depth + 1);
        let _ = write!(self.out, "{label}: {value}\n");
    }

    fn field_ident(&mut self, label: &str, name: Option<Name>) {
        if let Some(name) = name {
            let text = self.control.idents().lookup(name).to_owned();
            self.scalar_line(label, &text);
        }
    }

    fn field_literal(&mut self, label: &str, literal: Option<LiteralId>) {
        if let Some(literal) = literal {
            let text = self.control.literals().get(literal).value().to_owned();
            self.scalar_line(label, &text);
        }
    }

    fn list_header(&mut self, label: &str) {
        self.indent_at(self.depth + 1);
        self.out.push_str(label);
        self.out.push('\n');
    }

    // --- list emission ---
    //
    // One helper per list storage; the header label varies by field, so it
    // is always passed in.

    fn decl_list(&mut self, range: DeclarationRange, label: &str) {
        if range.is_empty() {
            return;
        }
        self.list_header(label);
        let arena = self.arena;
        self.depth += 1;
        for &id in arena.declaration_list(range) {
            self.declaration(Some(id), None);
        }
        self.depth -= 1;
    }

    fn stmt_list(&mut self, range: StatementRange, label: &str) {
        if range.is_empty() {
            return;
        }
        self.list_header(label);
        let arena = self.arena;
        self.depth += 1;
        for &id in arena.statement_list(range) {
            self.statement(Some(id), None);
        }
        self.depth -= 1;
    }

    fn expr_list(&mut self, range: ExpressionRange, label: &str) {
        if range.is_empty() {
            return;
        }
        self.list_header(label);
        let arena = self.arena;
        self.depth += 1;
        for &id in arena.expression_list(range) {
            self.expression(Some(id), None);
        }
        self.depth -= 1;
    }

    fn spec_list(&mut self, range: SpecifierRange, label: &str) {
        if range.is_empty() {
            return;
        }
        self.list_header(label);
        let arena = self.arena;
        self.depth += 1;
        for &id in arena.specifier_list(range) {
            self.specifier(Some(id), None);
        }
        self.depth -= 1;
    }

    fn template_param_list(&mut self, range: TemplateParameterRange, label: &str) {
        if range.is_empty() {
            return;
        }
        self.list_header(label);
        let arena = self.arena;
        self.depth += 1;
        for &id in arena.template_parameter_list(range) {
            self.template_parameter(Some(id), None);
        }
        self.depth -= 1;
    }

    fn template_arg_list(&mut self, range: TemplateArgumentRange, label: &str) {
        if range.is_empty() {
            return;
        }
        self.list_header(label);
        let arena = self.arena;
        self.depth += 1;
        for &id in arena.template_argument_list(range) {
            self.template_argument(Some(id), None);
        }
        self.depth -= 1;
    }

    fn ptr_op_list(&mut self, range: PtrOperatorRange, label: &str) {
        if range.is_empty() {
            return;
        }
        self.list_header(label);
        let arena = self.arena;
        self.depth += 1;
        for &id in arena.ptr_operator_list(range) {
            self.ptr_operator(Some(id), None);
        }
        self.depth -= 1;
    }

    fn chunk_list(&mut self, range: DeclaratorChunkRange, label: &str) {
        if range.is_empty() {
            return;
        }
        self.list_header(label);
        let arena = self.arena;
        self.depth += 1;
        for &id in arena.declarator_chunk_list(range) {
            self.declarator_chunk(Some(id), None);
        }
        self.depth -= 1;
    }

    fn unqual_list(&mut self, range: UnqualifiedNameRange, label: &str) {
        if range.is_empty() {
            return;
        }
        self.list_header(label);
        let arena = self.arena;
        self.depth += 1;
        for &id in arena.unqualified_name_list(range) {
            self.unqualified_name(Some(id), None);
        }
        self.depth -= 1;
    }

    fn requirement_list(&mut self, range: RequirementRange, label: &str) {
        if range.is_empty() {
            return;
        }
        self.list_header(label);
        let arena = self.arena;
        self.depth += 1;
        for &id in arena.requirement_list(range) {
            self.requirement(Some(id), None);
        }
        self.depth -= 1;
    }

    fn mem_init_list(&mut self, range: MemInitializerRange, label: &str) {
        if range.is_empty() {
            return;
        }
        self.list_header(label);
        let arena = self.arena;
        self.depth += 1;
        for &id in arena.mem_initializer_list(range) {
            self.mem_initializer(Some(id), None);
        }
        self.depth -= 1;
    }

    fn capture_list(&mut self, range: LambdaCaptureRange, label: &str) {
        if range.is_empty() {
            return;
        }
        self.list_header(label);
        let arena = self.arena;
        self.depth += 1;
        for &id in arena.lambda_capture_list(range) {
            self.lambda_capture(Some(id), None);
        }
        self.depth -= 1;
    }

    fn attr_spec_list(&mut self, range: AttributeSpecifierRange, label: &str) {
        if range.is_empty() {
            return;
        }
        self.list_header(label);
        let arena = self.arena;
        self.depth += 1;
        for &id in arena.attribute_specifier_list(range) {
            self.attribute_specifier(Some(id), None);
        }
        self.depth -= 1;
    }

    fn init_declarator_list(&mut self, range: InitDeclaratorRange, label: &str) {
        if range.is_empty() {
            return;
        }
        self.list_header(label);
        let arena = self.arena;
        self.depth += 1;
        for &id in arena.init_declarator_list(range) {
            self.init_declarator(Some(id), None);
        }
        self.depth -= 1;
    }

    fn using_declarator_list(&mut self, range: UsingDeclaratorRange, label: &str) {
        if range.is_empty() {
            return;
        }
        self.list_header(label);
        let arena = self.arena;
        self.depth += 1;
        for &id in arena.using_declarator_list(range) {
            self.using_declarator(Some(id), None);
        }
        self.depth -= 1;
    }

    fn enumerator_list(&mut self, range: EnumeratorRange, label: &str) {
        if range.is_empty() {
            return;
        }
        self.list_header(label);
        let arena = self.arena;
        self.depth += 1;
        for &id in arena.enumerator_list(range) {
            self.enumerator(Some(id), None);
        }
        self.depth -= 1;
    }

    fn base_spec_list(&mut self, range: BaseSpecifierRange, label: &str) {
        if range.is_empty() {
            return;
        }
        self.list_header(label);
        let arena = self.arena;
        self.depth += 1;
        for &id in arena.base_specifier_list(range) {
            self.base_specifier(Some(id), None);
        }
        self.depth -= 1;
    }

    fn handler_list(&mut self, range: HandlerRange, label: &str) {
        if range.is_empty() {
            return;
        }
        self.list_header(label);
        let arena = self.arena;
        self.depth += 1;
        for &id in arena.handler_list(range) {
            self.handler(Some(id), None);
        }
        self.depth -= 1;
    }

    fn lambda_spec_list(&mut self, range: LambdaSpecifierRange, label: &str) {
        if range.is_empty() {
            return;
        }
        self.list_header(label);
        let arena = self.arena;
        self.depth += 1;
        for &id in arena.lambda_specifier_list(range) {
            self.lambda_specifier(Some(id), None);
        }
        self.depth -= 1;
    }

    fn type_id_list(&mut self, range: TypeIdNodeRange, label: &str) {
        if range.is_empty() {
            return;
        }
        self.list_header(label);
        let arena = self.arena;
        self.depth += 1;
        for &id in arena.type_id_list(range) {
            self.type_id(Some(id), None);
        }
        self.depth -= 1;
    }

    fn attribute_list(&mut self, range: AttributeRange, label: &str) {
        if range.is_empty() {
            return;
        }
        self.list_header(label);
        let arena = self.arena;
        self.depth += 1;
        for &id in arena.attribute_list(range) {
            self.attribute(Some(id), None);
        }
        self.depth -= 1;
    }

    fn nested_ns_list(&mut self, range: NestedNamespaceSpecifierRange, label: &str) {
        if range.is_empty() {
            return;
        }
        self.list_header(label);
        let arena = self.arena;
        self.depth += 1;
        for &id in arena.nested_namespace_specifier_list(range) {
            self.nested_namespace_specifier(Some(id), None);
        }
        self.depth -= 1;
    }

    // --- categories ---

    /// Render the root unit at the current depth.
    fn unit_node(&mut self, id: UnitId) {
        match *self.arena.unit(id) {
            Unit::TranslationUnit { declaration_list } => {
                self.node_line(None, "translation-unit");
                self.decl_list(declaration_list, "declaration-list");
            }
            Unit::ModuleUnit {
                global_module_fragment,
                module_declaration,
                declaration_list,
                private_module_fragment,
            } => {
                self.node_line(None, "module-unit");
                self.global_module_fragment(global_module_fragment, Some("global-module-fragment"));
                self.module_declaration(module_declaration, Some("module-declaration"));
                self.decl_list(declaration_list, "declaration-list");
                self.private_module_fragment(
                    private_module_fragment,
                    Some("private-module-fragment"),
                );
            }
        }
    }

    fn declaration(&mut self, id: Option<DeclarationId>, field: Option<&str>) {
        let Some(id) = id else { return };
        self.depth += 1;
        let node = *self.arena.declaration(id);
        self.node_line(field, node.name());
        match node {
            Declaration::SimpleDeclaration {
                attribute_list,
                decl_specifier_list,
                init_declarator_list,
                requires_clause,
            } => {
                self.attr_spec_list(attribute_list, "attribute-list");
                self.spec_list(decl_specifier_list, "decl-specifier-list");
                self.init_declarator_list(init_declarator_list, "init-declarator-list");
                self.requires_clause(requires_clause, Some("requires-clause"));
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
                self.field_literal("literal", literal);
                self.attr_spec_list(attribute_list, "attribute-list");
                self.decl_list(asm_qualifier_list, "asm-qualifier-list");
                self.decl_list(output_operand_list, "output-operand-list");
                self.decl_list(input_operand_list, "input-operand-list");
                self.decl_list(clobber_list, "clobber-list");
                self.decl_list(goto_label_list, "goto-label-list");
            }
            Declaration::NamespaceAliasDefinition {
                identifier,
                nested_name_specifier,
                unqualified_id,
            } => {
                self.field_ident("identifier", identifier);
                self.nested_name_specifier(nested_name_specifier, Some("nested-name-specifier"));
                self.unqualified_name(unqualified_id, Some("unqualified-id"));
            }
            Declaration::UsingDeclaration { using_declarator_list } => {
                self.using_declarator_list(using_declarator_list, "using-declarator-list");
            }
            Declaration::UsingEnumDeclaration { enum_type_specifier } => {
                self.specifier(enum_type_specifier, Some("enum-type-specifier"));
            }
            Declaration::UsingDirective {
                attribute_list,
                nested_name_specifier,
                unqualified_id,
            } => {
                self.attr_spec_list(attribute_list, "attribute-list");
                self.nested_name_specifier(nested_name_specifier, Some("nested-name-specifier"));
                self.unqualified_name(unqualified_id, Some("unqualified-id"));
            }
            Declaration::StaticAssertDeclaration { literal, expression } => {
                self.field_literal("literal", literal);
                self.expression(expression, Some("expression"));
            }
            Declaration::AliasDeclaration {
                identifier,
                attribute_list,
                type_id,
            } => {
                self.field_ident("identifier", identifier);
                self.attr_spec_list(attribute_list, "attribute-list");
                self.type_id(type_id, Some("type-id"));
            }
            Declaration::OpaqueEnumDeclaration {
                attribute_list,
                nested_name_specifier,
                unqualified_id,
                type_specifier_list,
            } => {
                self.attr_spec_list(attribute_list, "attribute-list");
                self.nested_name_specifier(nested_name_specifier, Some("nested-name-specifier"));
                self.unqualified_name(unqualified_id, Some("unqualified-id"));
                self.spec_list(type_specifier_list, "type-specifier-list");
            }
            Declaration::FunctionDefinition {
                attribute_list,
                decl_specifier_list,
                declarator,
                requires_clause,
                function_body,
            } => {
                self.attr_spec_list(attribute_list, "attribute-list");
                self.spec_list(decl_specifier_list, "decl-specifier-list");
                self.declarator(declarator, Some("declarator"));
                self.requires_clause(requires_clause, Some("requires-clause"));
                self.function_body(function_body, Some("function-body"));
            }
            Declaration::TemplateDeclaration {
                template_parameter_list,
                requires_clause,
                declaration,
            } => {
                self.template_param_list(template_parameter_list, "template-parameter-list");
                self.requires_clause(requires_clause, Some("requires-clause"));
                self.declaration(declaration, Some("declaration"));
            }
            Declaration::ConceptDefinition { identifier, expression } => {
                self.field_ident("identifier", identifier);
                self.expression(expression, Some("expression"));
            }
            Declaration::DeductionGuide {
                identifier,
                explicit_specifier,
                parameter_declaration_clause,
                template_id,
            } => {
                self.field_ident("identifier", identifier);
                self.specifier(explicit_specifier, Some("explicit-specifier"));
                self.parameter_declaration_clause(
                    parameter_declaration_clause,
                    Some("parameter-declaration-clause"),
                );
                self.unqualified_name(template_id, Some("template-id"));
            }
            Declaration::ExplicitInstantiation { declaration }
            | Declaration::ExportDeclaration { declaration } => {
                self.declaration(declaration, Some("declaration"));
            }
            Declaration::ExportCompoundDeclaration { declaration_list } => {
                self.decl_list(declaration_list, "declaration-list");
            }
            Declaration::LinkageSpecification {
                string_literal,
                declaration_list,
            } => {
                self.field_literal("string-literal", string_literal);
                self.decl_list(declaration_list, "declaration-list");
            }
            Declaration::NamespaceDefinition {
                identifier,
                is_inline,
                attribute_list,
                nested_namespace_specifier_list,
                extra_attribute_list,
                declaration_list,
            } => {
                self.field_ident("identifier", identifier);
                self.field_bool("is-inline", is_inline);
                self.attr_spec_list(attribute_list, "attribute-list");
                self.nested_ns_list(
                    nested_namespace_specifier_list,
                    "nested-namespace-specifier-list",
                );
                self.attr_spec_list(extra_attribute_list, "extra-attribute-list");
                self.decl_list(declaration_list, "declaration-list");
            }
            Declaration::EmptyDeclaration | Declaration::ForRangeDeclaration => {}
            Declaration::AttributeDeclaration { attribute_list } => {
                self.attr_spec_list(attribute_list, "attribute-list");
            }
            Declaration::ModuleImportDeclaration {
                import_name,
                attribute_list,
            } => {
                self.import_name(import_name, Some("import-name"));
                self.attr_spec_list(attribute_list, "attribute-list");
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
                self.field_ident("identifier", identifier);
                self.field_bool("is-this-introduced", is_this_introduced);
                self.field_bool("is-pack", is_pack);
                self.attr_spec_list(attribute_list, "attribute-list");
                self.spec_list(type_specifier_list, "type-specifier-list");
                self.declarator(declarator, Some("declarator"));
                self.expression(expression, Some("expression"));
            }
            Declaration::AccessDeclaration { access_specifier } => {
                self.field_token("access-specifier", access_specifier);
            }
            Declaration::StructuredBindingDeclaration {
                attribute_list,
                decl_specifier_list,
                binding_list,
                initializer,
            } => {
                self.attr_spec_list(attribute_list, "attribute-list");
                self.spec_list(decl_specifier_list, "decl-specifier-list");
                self.unqual_list(binding_list, "binding-list");
                self.expression(initializer, Some("initializer"));
            }
            Declaration::AsmOperand {
                symbolic_name,
                constraint_literal,
                expression,
            } => {
                self.field_ident("symbolic-name", symbolic_name);
                self.field_literal("constraint-literal", constraint_literal);
                self.expression(expression, Some("expression"));
            }
            Declaration::AsmQualifier { qualifier } => {
                self.field_token("qualifier", qualifier);
            }
            Declaration::AsmClobber { literal } => {
                self.field_literal("literal", literal);
            }
            Declaration::AsmGotoLabel { identifier } => {
                self.field_ident("identifier", identifier);
            }
        }
        self.depth -= 1;
    }

    fn statement(&mut self, id: Option<StatementId>, field: Option<&str>) {
        let Some(id) = id else { return };
        self.depth += 1;
        let node = *self.arena.statement(id);
        self.node_line(field, node.name());
        match node {
            Statement::LabeledStatement { identifier } => {
                self.field_ident("identifier", identifier);
            }
            Statement::CaseStatement { expression }
            | Statement::ExpressionStatement { expression }
            | Statement::ReturnStatement { expression }
            | Statement::CoroutineReturnStatement { expression } => {
                self.expression(expression, Some("expression"));
            }
            Statement::DefaultStatement
            | Statement::BreakStatement
            | Statement::ContinueStatement => {}
            Statement::CompoundStatement { statement_list } => {
                self.stmt_list(statement_list, "statement-list");
            }
            Statement::IfStatement {
                initializer,
                condition,
                statement,
                else_statement,
            } => {
                self.statement(initializer, Some("initializer"));
                self.expression(condition, Some("condition"));
                self.statement(statement, Some("statement"));
                self.statement(else_statement, Some("else-statement"));
            }
            Statement::ConstevalIfStatement {
                is_not,
                statement,
                else_statement,
            } => {
                self.field_bool("is-not", is_not);
                self.statement(statement, Some("statement"));
                self.statement(else_statement, Some("else-statement"));
            }
            Statement::SwitchStatement {
                initializer,
                condition,
                statement,
            } => {
                self.statement(initializer, Some("initializer"));
                self.expression(condition, Some("condition"));
                self.statement(statement, Some("statement"));
            }
            Statement::WhileStatement { condition, statement } => {
                self.expression(condition, Some("condition"));
                self.statement(statement, Some("statement"));
            }
            Statement::DoStatement { statement, expression } => {
                self.statement(statement, Some("statement"));
                self.expression(expression, Some("expression"));
            }
            Statement::ForRangeStatement {
                initializer,
                range_declaration,
                range_initializer,
                statement,
            } => {
                self.statement(initializer, Some("initializer"));
                self.declaration(range_declaration, Some("range-declaration"));
                self.expression(range_initializer, Some("range-initializer"));
                self.statement(statement, Some("statement"));
            }
            Statement::ForStatement {
                initializer,
                condition,
                expression,
                statement,
            } => {
                self.statement(initializer, Some("initializer"));
                self.expression(condition, Some("condition"));
                self.expression(expression, Some("expression"));
                self.statement(statement, Some("statement"));
            }
            Statement::GotoStatement { identifier } => {
                self.field_ident("identifier", identifier);
            }
            Statement::DeclarationStatement { declaration } => {
                self.declaration(declaration, Some("declaration"));
            }
            Statement::TryBlockStatement {
                statement,
                handler_list,
            } => {
                self.statement(statement, Some("statement"));
                self.handler_list(handler_list, "handler-list");
            }
        }
        self.depth -= 1;
    }

    fn expression(&mut self, id: Option<ExpressionId>, field: Option<&str>) {
        let Some(id) = id else { return };
        self.depth += 1;
        let node = *self.arena.expression(id);
        self.node_line(field, node.name());
        match node {
            Expression::CharLiteralExpression { literal }
            | Expression::IntLiteralExpression { literal }
            | Expression::FloatLiteralExpression { literal }
            | Expression::StringLiteralExpression { literal }
            | Expression::UserDefinedStringLiteralExpression { literal } => {
                self.field_literal("literal", literal);
            }
            Expression::BoolLiteralExpression { is_true } => {
                self.field_bool("is-true", is_true);
            }
            Expression::NullptrLiteralExpression { literal } => {
                self.field_token("literal", literal);
            }
            Expression::ThisExpression => {}
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
                self.expression(expression, Some("expression"));
            }
            Expression::IdExpression {
                is_template_introduced,
                nested_name_specifier,
                unqualified_id,
            } => {
                self.field_bool("is-template-introduced", is_template_introduced);
                self.nested_name_specifier(nested_name_specifier, Some("nested-name-specifier"));
                self.unqualified_name(unqualified_id, Some("unqualified-id"));
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
                self.field_token("capture-default", capture_default);
                self.capture_list(capture_list, "capture-list");
                self.template_param_list(template_parameter_list, "template-parameter-list");
                self.requires_clause(template_requires_clause, Some("template-requires-clause"));
                self.parameter_declaration_clause(
                    parameter_declaration_clause,
                    Some("parameter-declaration-clause"),
                );
                self.lambda_spec_list(lambda_specifier_list, "lambda-specifier-list");
                self.exception_specifier(exception_specifier, Some("exception-specifier"));
                self.attr_spec_list(attribute_list, "attribute-list");
                self.trailing_return_type(trailing_return_type, Some("trailing-return-type"));
                self.requires_clause(requires_clause, Some("requires-clause"));
                self.statement(statement, Some("statement"));
            }
            Expression::FoldExpression {
                op,
                fold_op,
                left_expression,
                right_expression,
            } => {
                self.field_token("op", op);
                self.field_token("fold-op", fold_op);
                self.expression(left_expression, Some("left-expression"));
                self.expression(right_expression, Some("right-expression"));
            }
            Expression::RightFoldExpression { op, expression }
            | Expression::LeftFoldExpression { op, expression }
            | Expression::UnaryExpression { op, expression } => {
                self.field_token("op", op);
                self.expression(expression, Some("expression"));
            }
            Expression::RequiresExpression {
                parameter_declaration_clause,
                requirement_list,
            } => {
                self.parameter_declaration_clause(
                    parameter_declaration_clause,
                    Some("parameter-declaration-clause"),
                );
                self.requirement_list(requirement_list, "requirement-list");
            }
            Expression::SubscriptExpression {
                base_expression,
                index_expression,
            } => {
                self.expression(base_expression, Some("base-expression"));
                self.expression(index_expression, Some("index-expression"));
            }
            Expression::CallExpression {
                base_expression,
                expression_list,
            } => {
                self.expression(base_expression, Some("base-expression"));
                self.expr_list(expression_list, "expression-list");
            }
            Expression::TypeConstruction {
                type_specifier,
                expression_list,
            } => {
                self.specifier(type_specifier, Some("type-specifier"));
                self.expr_list(expression_list, "expression-list");
            }
            Expression::BracedTypeConstruction {
                type_specifier,
                braced_init_list,
            } => {
                self.specifier(type_specifier, Some("type-specifier"));
                self.expression(braced_init_list, Some("braced-init-list"));
            }
            Expression::MemberExpression {
                access_op,
                base_expression,
                member_id,
            } => {
                self.field_token("access-op", access_op);
                self.expression(base_expression, Some("base-expression"));
                self.unqualified_name(member_id, Some("member-id"));
            }
            Expression::PostIncrExpression { op, base_expression } => {
                self.field_token("op", op);
                self.expression(base_expression, Some("base-expression"));
            }
            Expression::CppCastExpression { type_id, expression }
            | Expression::BuiltinBitCastExpression { type_id, expression }
            | Expression::CastExpression { type_id, expression } => {
                self.type_id(type_id, Some("type-id"));
                self.expression(expression, Some("expression"));
            }
            Expression::TypeidOfTypeExpression { type_id }
            | Expression::SizeofTypeExpression { type_id }
            | Expression::AlignofTypeExpression { type_id } => {
                self.type_id(type_id, Some("type-id"));
            }
            Expression::SizeofPackExpression { identifier } => {
                self.field_ident("identifier", identifier);
            }
            Expression::NewExpression {
                new_placement,
                type_specifier_list,
                declarator,
                new_initializer,
            } => {
                self.new_placement(new_placement, Some("new-placement"));
                self.spec_list(type_specifier_list, "type-specifier-list");
                self.declarator(declarator, Some("declarator"));
                self.new_initializer(new_initializer, Some("new-initializer"));
            }
            Expression::BinaryExpression {
                op,
                left_expression,
                right_expression,
            }
            | Expression::AssignmentExpression {
                op,
                left_expression,
                right_expression,
            } => {
                self.field_token("op", op);
                self.expression(left_expression, Some("left-expression"));
                self.expression(right_expression, Some("right-expression"));
            }
            Expression::ConditionalExpression {
                condition,
                iftrue_expression,
                iffalse_expression,
            } => {
                self.expression(condition, Some("condition"));
                self.expression(iftrue_expression, Some("iftrue-expression"));
                self.expression(iffalse_expression, Some("iffalse-expression"));
            }
            Expression::DesignatedInitializerClause {
                identifier,
                initializer,
            } => {
                self.field_ident("identifier", identifier);
                self.expression(initializer, Some("initializer"));
            }
            Expression::TypeTraitsExpression {
                type_trait,
                type_id_list,
            } => {
                self.field_builtin("type-trait", type_trait);
                self.type_id_list(type_id_list, "type-id-list");
            }
            Expression::ConditionExpression {
                attribute_list,
                decl_specifier_list,
                declarator,
                initializer,
            } => {
                self.attr_spec_list(attribute_list, "attribute-list");
                self.spec_list(decl_specifier_list, "decl-specifier-list");
                self.declarator(declarator, Some("declarator"));
                self.expression(initializer, Some("initializer"));
            }
            Expression::BracedInitList { expression_list }
            | Expression::ParenInitializer { expression_list } => {
                self.expr_list(expression_list, "expression-list");
            }
        }
        self.depth -= 1;
    }

    fn specifier(&mut self, id: Option<SpecifierId>, field: Option<&str>) {
        let Some(id) = id else { return };
        self.depth += 1;
        let node = *self.arena.specifier(id);
        self.node_line(field, node.name());
        match node {
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
            | Specifier::ComplexTypeSpecifier
            | Specifier::DecltypeAutoSpecifier
            | Specifier::ConstQualifier
            | Specifier::VolatileQualifier
            | Specifier::RestrictQualifier => {}
            Specifier::ExplicitSpecifier { expression }
            | Specifier::DecltypeSpecifier { expression } => {
                self.expression(expression, Some("expression"));
            }
            Specifier::SizeTypeSpecifier { specifier }
            | Specifier::SignTypeSpecifier { specifier }
            | Specifier::VaListTypeSpecifier { specifier }
            | Specifier::IntegralTypeSpecifier { specifier }
            | Specifier::FloatingPointTypeSpecifier { specifier } => {
                self.field_token("specifier", specifier);
            }
            Specifier::NamedTypeSpecifier {
                is_template_introduced,
                nested_name_specifier,
                unqualified_id,
            } => {
                self.field_bool("is-template-introduced", is_template_introduced);
                self.nested_name_specifier(nested_name_specifier, Some("nested-name-specifier"));
                self.unqualified_name(unqualified_id, Some("unqualified-id"));
            }
            Specifier::AtomicTypeSpecifier { type_id }
            | Specifier::UnderlyingTypeSpecifier { type_id } => {
                self.type_id(type_id, Some("type-id"));
            }
            Specifier::ElaboratedTypeSpecifier {
                class_key,
                is_template_introduced,
                attribute_list,
                nested_name_specifier,
                unqualified_id,
            } => {
                self.field_token("class-key", class_key);
                self.field_bool("is-template-introduced", is_template_introduced);
                self.attr_spec_list(attribute_list, "attribute-list");
                self.nested_name_specifier(nested_name_specifier, Some("nested-name-specifier"));
                self.unqualified_name(unqualified_id, Some("unqualified-id"));
            }
            Specifier::PlaceholderTypeSpecifier {
                type_constraint,
                specifier,
            } => {
                self.type_constraint(type_constraint, Some("type-constraint"));
                self.specifier(specifier, Some("specifier"));
            }
            Specifier::EnumSpecifier {
                attribute_list,
                nested_name_specifier,
                unqualified_id,
                type_specifier_list,
                enumerator_list,
            } => {
                self.attr_spec_list(attribute_list, "attribute-list");
                self.nested_name_specifier(nested_name_specifier, Some("nested-name-specifier"));
                self.unqualified_name(unqualified_id, Some("unqualified-id"));
                self.spec_list(type_specifier_list, "type-specifier-list");
                self.enumerator_list(enumerator_list, "enumerator-list");
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
                self.field_token("class-key", class_key);
                self.field_bool("is-final", is_final);
                self.attr_spec_list(attribute_list, "attribute-list");
                self.nested_name_specifier(nested_name_specifier, Some("nested-name-specifier"));
                self.unqualified_name(unqualified_id, Some("unqualified-id"));
                self.base_spec_list(base_specifier_list, "base-specifier-list");
                self.decl_list(declaration_list, "declaration-list");
            }
            Specifier::TypenameSpecifier {
                nested_name_specifier,
                unqualified_id,
            } => {
                self.nested_name_specifier(nested_name_specifier, Some("nested-name-specifier"));
                self.unqualified_name(unqualified_id, Some("unqualified-id"));
            }
        }
        self.depth -= 1;
    }

    fn template_parameter(&mut self, id: Option<TemplateParameterId>, field: Option<&str>) {
        let Some(id) = id else { return };
        self.depth += 1;
        let node = *self.arena.template_parameter(id);
        self.node_line(field, node.name());
        match node {
            TemplateParameter::TemplateTypeParameter {
                depth,
                index,
                identifier,
                is_pack,
                template_parameter_list,
                requires_clause,
                id_expression,
            } => {
                self.field_u32("depth", depth);
                self.field_u32("index", index);
                self.field_ident("identifier", identifier);
                self.field_bool("is-pack", is_pack);
                self.template_param_list(template_parameter_list, "template-parameter-list");
                self.requires_clause(requires_clause, Some("requires-clause"));
                self.expression(id_expression, Some("id-expression"));
            }
            TemplateParameter::NonTypeTemplateParameter {
                depth,
                index,
                declaration,
            } => {
                self.field_u32("depth", depth);
                self.field_u32("index", index);
                self.declaration(declaration, Some("declaration"));
            }
            TemplateParameter::TypenameTypeParameter {
                depth,
                index,
                identifier,
                is_pack,
                type_id,
            } => {
                self.field_u32("depth", depth);
                self.field_u32("index", index);
                self.field_ident("identifier", identifier);
                self.field_bool("is-pack", is_pack);
                self.type_id(type_id, Some("type-id"));
            }
            TemplateParameter::ConstraintTypeParameter {
                depth,
                index,
                identifier,
                type_constraint,
                type_id,
            } => {
                self.field_u32("depth", depth);
                self.field_u32("index", index);
                self.field_ident("identifier", identifier);
                self.type_constraint(type_constraint, Some("type-constraint"));
                self.type_id(type_id, Some("type-id"));
            }
        }
        self.depth -= 1;
    }

    fn ptr_operator(&mut self, id: Option<PtrOperatorId>, field: Option<&str>) {
        let Some(id) = id else { return };
        self.depth += 1;
        let node = *self.arena.ptr_operator(id);
        self.node_line(field, node.name());
        match node {
            PtrOperator::PointerOperator {
                attribute_list,
                cv_qualifier_list,
            } => {
                self.attr_spec_list(attribute_list, "attribute-list");
                self.spec_list(cv_qualifier_list, "cv-qualifier-list");
            }
            PtrOperator::ReferenceOperator {
                ref_op,
                attribute_list,
            } => {
                self.field_token("ref-op", ref_op);
                self.attr_spec_list(attribute_list, "attribute-list");
            }
            PtrOperator::PtrToMemberOperator {
                nested_name_specifier,
                attribute_list,
                cv_qualifier_list,
            } => {
                self.nested_name_specifier(nested_name_specifier, Some("nested-name-specifier"));
                self.attr_spec_list(attribute_list, "attribute-list");
                self.spec_list(cv_qualifier_list, "cv-qualifier-list");
            }
        }
        self.depth -= 1;
    }

    fn core_declarator(&mut self, id: Option<CoreDeclaratorId>, field: Option<&str>) {
        let Some(id) = id else { return };
        self.depth += 1;
        let node = *self.arena.core_declarator(id);
        self.node_line(field, node.name());
        match node {
            CoreDeclarator::BitfieldDeclarator {
                unqualified_id,
                size_expression,
            } => {
                self.unqualified_name(unqualified_id, Some("unqualified-id"));
                self.expression(size_expression, Some("size-expression"));
            }
            CoreDeclarator::ParameterPack { core_declarator } => {
                self.core_declarator(core_declarator, Some("core-declarator"));
            }
            CoreDeclarator::IdDeclarator {
                is_template_introduced,
                nested_name_specifier,
                unqualified_id,
                attribute_list,
            } => {
                self.field_bool("is-template-introduced", is_template_introduced);
                self.nested_name_specifier(nested_name_specifier, Some("nested-name-specifier"));
                self.unqualified_name(unqualified_id, Some("unqualified-id"));
                self.attr_spec_list(attribute_list, "attribute-list");
            }
            CoreDeclarator::NestedDeclarator { declarator } => {
                self.declarator(declarator, Some("declarator"));
            }
        }
        self.depth -= 1;
    }

    fn declarator_chunk(&mut self, id: Option<DeclaratorChunkId>, field: Option<&str>) {
        let Some(id) = id else { return };
        self.depth += 1;
        let node = *self.arena.declarator_chunk(id);
        self.node_line(field, node.name());
        match node {
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
                self.field_bool("is-final", is_final);
                self.field_bool("is-override", is_override);
                self.field_bool("is-pure", is_pure);
                self.parameter_declaration_clause(
                    parameter_declaration_clause,
                    Some("parameter-declaration-clause"),
                );
                self.spec_list(cv_qualifier_list, "cv-qualifier-list");
                self.exception_specifier(exception_specifier, Some("exception-specifier"));
                self.attr_spec_list(attribute_list, "attribute-list");
                self.trailing_return_type(trailing_return_type, Some("trailing-return-type"));
            }
            DeclaratorChunk::ArrayDeclaratorChunk {
                expression,
                attribute_list,
            } => {
                self.expression(expression, Some("expression"));
                self.attr_spec_list(attribute_list, "attribute-list");
            }
        }
        self.depth -= 1;
    }

    fn unqualified_name(&mut self, id: Option<UnqualifiedNameId>, field: Option<&str>) {
        let Some(id) = id else { return };
        self.depth += 1;
        let node = *self.arena.unqualified_name(id);
        self.node_line(field, node.name());
        match node {
            UnqualifiedName::NameId { identifier } => {
                self.field_ident("identifier", identifier);
            }
            UnqualifiedName::DestructorId { id: inner } => {
                self.unqualified_name(inner, Some("id"));
            }
            UnqualifiedName::DecltypeId { decltype_specifier } => {
                self.specifier(decltype_specifier, Some("decltype-specifier"));
            }
            UnqualifiedName::OperatorFunctionId { op } => {
                self.field_token("op", op);
            }
            UnqualifiedName::LiteralOperatorId {
                literal,
                identifier,
            } => {
                self.field_literal("literal", literal);
                self.field_ident("identifier", identifier);
            }
            UnqualifiedName::ConversionFunctionId { type_id } => {
                self.type_id(type_id, Some("type-id"));
            }
            UnqualifiedName::SimpleTemplateId {
                identifier,
                template_argument_list,
            } => {
                self.field_ident("identifier", identifier);
                self.template_arg_list(template_argument_list, "template-argument-list");
            }
            UnqualifiedName::LiteralOperatorTemplateId {
                literal_operator_id,
                template_argument_list,
            } => {
                self.unqualified_name(literal_operator_id, Some("literal-operator-id"));
                self.template_arg_list(template_argument_list, "template-argument-list");
            }
            UnqualifiedName::OperatorFunctionTemplateId {
                operator_function_id,
                template_argument_list,
            } => {
                self.unqualified_name(operator_function_id, Some("operator-function-id"));
                self.template_arg_list(template_argument_list, "template-argument-list");
            }
        }
        self.depth -= 1;
    }

    fn nested_name_specifier(&mut self, id: Option<NestedNameSpecifierId>, field: Option<&str>) {
        let Some(id) = id else { return };
        self.depth += 1;
        let node = *self.arena.nested_name_specifier(id);
        self.node_line(field, node.name());
        match node {
            NestedNameSpecifier::GlobalNestedNameSpecifier => {}
            NestedNameSpecifier::SimpleNestedNameSpecifier {
                identifier,
                nested_name_specifier,
            } => {
                self.field_ident("identifier", identifier);
                self.nested_name_specifier(nested_name_specifier, Some("nested-name-specifier"));
            }
            NestedNameSpecifier::DecltypeNestedNameSpecifier {
                nested_name_specifier,
                decltype_specifier,
            } => {
                self.nested_name_specifier(nested_name_specifier, Some("nested-name-specifier"));
                self.specifier(decltype_specifier, Some("decltype-specifier"));
            }
            NestedNameSpecifier::TemplateNestedNameSpecifier {
                is_template_introduced,
                nested_name_specifier,
                template_id,
            } => {
                self.field_bool("is-template-introduced", is_template_introduced);
                self.nested_name_specifier(nested_name_specifier, Some("nested-name-specifier"));
                self.unqualified_name(template_id, Some("template-id"));
            }
        }
        self.depth -= 1;
    }

    fn function_body(&mut self, id: Option<FunctionBodyId>, field: Option<&str>) {
        let Some(id) = id else { return };
        self.depth += 1;
        let node = *self.arena.function_body(id);
        self.node_line(field, node.name());
        match node {
            FunctionBody::DefaultFunctionBody | FunctionBody::DeleteFunctionBody => {}
            FunctionBody::CompoundStatementFunctionBody {
                mem_initializer_list,
                statement,
            } => {
                self.mem_init_list(mem_initializer_list, "mem-initializer-list");
                self.statement(statement, Some("statement"));
            }
            FunctionBody::TryStatementFunctionBody {
                mem_initializer_list,
                statement,
                handler_list,
            } => {
                self.mem_init_list(mem_initializer_list, "mem-initializer-list");
                self.statement(statement, Some("statement"));
                self.handler_list(handler_list, "handler-list");
            }
        }
        self.depth -= 1;
    }

    fn template_argument(&mut self, id: Option<TemplateArgumentId>, field: Option<&str>) {
        let Some(id) = id else { return };
        self.depth += 1;
        let node = *self.arena.template_argument(id);
        self.node_line(field, node.name());
        match node {
            TemplateArgument::TypeTemplateArgument { type_id } => {
                self.type_id(type_id, Some("type-id"));
            }
            TemplateArgument::ExpressionTemplateArgument { expression } => {
                self.expression(expression, Some("expression"));
            }
        }
        self.depth -= 1;
    }

    fn exception_specifier(&mut self, id: Option<ExceptionSpecifierId>, field: Option<&str>) {
        let Some(id) = id else { return };
        self.depth += 1;
        let node = *self.arena.exception_specifier(id);
        self.node_line(field, node.name());
        match node {
            ExceptionSpecifier::ThrowExceptionSpecifier => {}
            ExceptionSpecifier::NoexceptSpecifier { expression } => {
                self.expression(expression, Some("expression"));
            }
        }
        self.depth -= 1;
    }

    fn requirement(&mut self, id: Option<RequirementId>, field: Option<&str>) {
        let Some(id) = id else { return };
        self.depth += 1;
        let node = *self.arena.requirement(id);
        self.node_line(field, node.name());
        match node {
            Requirement::SimpleRequirement { expression }
            | Requirement::NestedRequirement { expression } => {
                self.expression(expression, Some("expression"));
            }
            Requirement::CompoundRequirement {
                expression,
                type_constraint,
            } => {
                self.expression(expression, Some("expression"));
                self.type_constraint(type_constraint, Some("type-constraint"));
            }
            Requirement::TypeRequirement {
                nested_name_specifier,
                unqualified_id,
            } => {
                self.nested_name_specifier(nested_name_specifier, Some("nested-name-specifier"));
                self.unqualified_name(unqualified_id, Some("unqualified-id"));
            }
        }
        self.depth -= 1;
    }

    fn new_initializer(&mut self, id: Option<NewInitializerId>, field: Option<&str>) {
        let Some(id) = id else { return };
        self.depth += 1;
        let node = *self.arena.new_initializer(id);
        self.node_line(field, node.name());
        match node {
            NewInitializer::NewParenInitializer { expression_list } => {
                self.expr_list(expression_list, "expression-list");
            }
            NewInitializer::NewBracedInitializer { braced_init_list } => {
                self.expression(braced_init_list, Some("braced-init-list"));
            }
        }
        self.depth -= 1;
    }

    fn mem_initializer(&mut self, id: Option<MemInitializerId>, field: Option<&str>) {
        let Some(id) = id else { return };
        self.depth += 1;
        let node = *self.arena.mem_initializer(id);
        self.node_line(field, node.name());
        match node {
            MemInitializer::ParenMemInitializer {
                nested_name_specifier,
                unqualified_id,
                expression_list,
            } => {
                self.nested_name_specifier(nested_name_specifier, Some("nested-name-specifier"));
                self.unqualified_name(unqualified_id, Some("unqualified-id"));
                self.expr_list(expression_list, "expression-list");
            }
            MemInitializer::BracedMemInitializer {
                nested_name_specifier,
                unqualified_id,
                braced_init_list,
            } => {
                self.nested_name_specifier(nested_name_specifier, Some("nested-name-specifier"));
                self.unqualified_name(unqualified_id, Some("unqualified-id"));
                self.expression(braced_init_list, Some("braced-init-list"));
            }
        }
        self.depth -= 1;
    }

    fn lambda_capture(&mut self, id: Option<LambdaCaptureId>, field: Option<&str>) {
        let Some(id) = id else { return };
        self.depth += 1;
        let node = *self.arena.lambda_capture(id);
        self.node_line(field, node.name());
        match node {
            LambdaCapture::ThisLambdaCapture | LambdaCapture::DerefThisLambdaCapture => {}
            LambdaCapture::SimpleLambdaCapture { identifier }
            | LambdaCapture::RefLambdaCapture { identifier } => {
                self.field_ident("identifier", identifier);
            }
            LambdaCapture::RefInitLambdaCapture {
                identifier,
                initializer,
            }
            | LambdaCapture::InitLambdaCapture {
                identifier,
                initializer,
            } => {
                self.field_ident("identifier", identifier);
                self.expression(initializer, Some("initializer"));
            }
        }
        self.depth -= 1;
    }

    fn exception_declaration(&mut self, id: Option<ExceptionDeclarationId>, field: Option<&str>) {
        let Some(id) = id else { return };
        self.depth += 1;
        let node = *self.arena.exception_declaration(id);
        self.node_line(field, node.name());
        match node {
            ExceptionDeclaration::EllipsisExceptionDeclaration => {}
            ExceptionDeclaration::TypeExceptionDeclaration {
                attribute_list,
                type_specifier_list,
                declarator,
            } => {
                self.attr_spec_list(attribute_list, "attribute-list");
                self.spec_list(type_specifier_list, "type-specifier-list");
                self.declarator(declarator, Some("declarator"));
            }
        }
        self.depth -= 1;
    }

    fn attribute_specifier(&mut self, id: Option<AttributeSpecifierId>, field: Option<&str>) {
        let Some(id) = id else { return };
        self.depth += 1;
        let node = *self.arena.attribute_specifier(id);
        self.node_line(field, node.name());
        match node {
            AttributeSpecifier::CxxAttribute {
                attribute_using_prefix,
                attribute_list,
            } => {
                self.attribute_using_prefix(attribute_using_prefix, Some("attribute-using-prefix"));
                self.attribute_list(attribute_list, "attribute-list");
            }
            AttributeSpecifier::GccAttribute => {}
            AttributeSpecifier::AlignasAttribute { is_pack, expression } => {
                self.field_bool("is-pack", is_pack);
                self.expression(expression, Some("expression"));
            }
            AttributeSpecifier::AlignasTypeAttribute { is_pack, type_id } => {
                self.field_bool("is-pack", is_pack);
                self.type_id(type_id, Some("type-id"));
            }
            AttributeSpecifier::AsmAttribute { literal } => {
                self.field_literal("literal", literal);
            }
        }
        self.depth -= 1;
    }

    fn attribute_token(&mut self, id: Option<AttributeTokenId>, field: Option<&str>) {
        let Some(id) = id else { return };
        self.depth += 1;
        let node = *self.arena.attribute_token(id);
        self.node_line(field, node.name());
        match node {
            AttributeToken::ScopedAttributeToken {
                attribute_namespace,
                identifier,
            } => {
                self.field_ident("attribute-namespace", attribute_namespace);
                self.field_ident("identifier", identifier);
            }
            AttributeToken::SimpleAttributeToken { identifier } => {
                self.field_ident("identifier", identifier);
            }
        }
        self.depth -= 1;
    }

    // --- fragments ---

    fn global_module_fragment(&mut self, id: Option<GlobalModuleFragmentId>, field: Option<&str>) {
        let Some(id) = id else { return };
        self.depth += 1;
        let node = *self.arena.global_module_fragment(id);
        self.node_line(field, "global-module-fragment");
        self.decl_list(node.declaration_list, "declaration-list");
        self.depth -= 1;
    }

    fn private_module_fragment(
        &mut self,
        id: Option<PrivateModuleFragmentId>,
        field: Option<&str>,
    ) {
        let Some(id) = id else { return };
        self.depth += 1;
        let node = *self.arena.private_module_fragment(id);
        self.node_line(field, "private-module-fragment");
        self.decl_list(node.declaration_list, "declaration-list");
        self.depth -= 1;
    }

    fn module_declaration(&mut self, id: Option<ModuleDeclarationId>, field: Option<&str>) {
        let Some(id) = id else { return };
        self.depth += 1;
        let node = *self.arena.module_declaration(id);
        self.node_line(field, "module-declaration");
        self.module_name(node.module_name, Some("module-name"));
        self.module_partition(node.module_partition, Some("module-partition"));
        self.attr_spec_list(node.attribute_list, "attribute-list");
        self.depth -= 1;
    }

    fn module_name(&mut self, id: Option<ModuleNameId>, field: Option<&str>) {
        let Some(id) = id else { return };
        self.depth += 1;
        let node = *self.arena.module_name(id);
        self.node_line(field, "module-name");
        self.field_ident("identifier", node.identifier);
        self.module_qualifier(node.module_qualifier, Some("module-qualifier"));
        self.depth -= 1;
    }

    fn module_qualifier(&mut self, id: Option<ModuleQualifierId>, field: Option<&str>) {
        let Some(id) = id else { return };
        self.depth += 1;
        let node = *self.arena.module_qualifier(id);
        self.node_line(field, "module-qualifier");
        self.field_ident("identifier", node.identifier);
        self.module_qualifier(node.module_qualifier, Some("module-qualifier"));
        self.depth -= 1;
    }

    fn module_partition(&mut self, id: Option<ModulePartitionId>, field: Option<&str>) {
        let Some(id) = id else { return };
        self.depth += 1;
        let node = *self.arena.module_partition(id);
        self.node_line(field, "module-partition");
        self.module_name(node.module_name, Some("module-name"));
        self.depth -= 1;
    }

    fn import_name(&mut self, id: Option<ImportNameId>, field: Option<&str>) {
        let Some(id) = id else { return };
        self.depth += 1;
        let node = *self.arena.import_name(id);
        self.node_line(field, "import-name");
        self.module_partition(node.module_partition, Some("module-partition"));
        self.module_name(node.module_name, Some("module-name"));
        self.depth -= 1;
    }

    fn init_declarator(&mut self, id: Option<InitDeclaratorId>, field: Option<&str>) {
        let Some(id) = id else { return };
        self.depth += 1;
        let node = *self.arena.init_declarator(id);
        self.node_line(field, "init-declarator");
        self.declarator(node.declarator, Some("declarator"));
        self.requires_clause(node.requires_clause, Some("requires-clause"));
        self.expression(node.initializer, Some("initializer"));
        self.depth -= 1;
    }

    fn declarator(&mut self, id: Option<DeclaratorId>, field: Option<&str>) {
        let Some(id) = id else { return };
        self.depth += 1;
        let node = *self.arena.declarator(id);
        self.node_line(field, "declarator");
        self.ptr_op_list(node.ptr_op_list, "ptr-op-list");
        self.core_declarator(node.core_declarator, Some("core-declarator"));
        self.chunk_list(node.declarator_chunk_list, "declarator-chunk-list");
        self.depth -= 1;
    }

    fn using_declarator(&mut self, id: Option<UsingDeclaratorId>, field: Option<&str>) {
        let Some(id) = id else { return };
        self.depth += 1;
        let node = *self.arena.using_declarator(id);
        self.node_line(field, "using-declarator");
        self.field_bool("is-pack", node.is_pack);
        self.nested_name_specifier(node.nested_name_specifier, Some("nested-name-specifier"));
        self.unqualified_name(node.unqualified_id, Some("unqualified-id"));
        self.depth -= 1;
    }

    fn enumerator(&mut self, id: Option<EnumeratorId>, field: Option<&str>) {
        let Some(id) = id else { return };
        self.depth += 1;
        let node = *self.arena.enumerator(id);
        self.node_line(field, "enumerator");
        self.field_ident("identifier", node.identifier);
        self.attr_spec_list(node.attribute_list, "attribute-list");
        self.expression(node.expression, Some("expression"));
        self.depth -= 1;
    }

    fn type_id(&mut self, id: Option<TypeIdNodeId>, field: Option<&str>) {
        let Some(id) = id else { return };
        self.depth += 1;
        let node = *self.arena.type_id(id);
        self.node_line(field, "type-id");
        self.spec_list(node.type_specifier_list, "type-specifier-list");
        self.declarator(node.declarator, Some("declarator"));
        self.depth -= 1;
    }

    fn handler(&mut self, id: Option<HandlerId>, field: Option<&str>) {
        let Some(id) = id else { return };
        self.depth += 1;
        let node = *self.arena.handler(id);
        self.node_line(field, "handler");
        self.exception_declaration(node.exception_declaration, Some("exception-declaration"));
        self.statement(node.statement, Some("statement"));
        self.depth -= 1;
    }

    fn base_specifier(&mut self, id: Option<BaseSpecifierId>, field: Option<&str>) {
        let Some(id) = id else { return };
        self.depth += 1;
        let node = *self.arena.base_specifier(id);
        self.node_line(field, "base-specifier");
        self.field_bool("is-template-introduced", node.is_template_introduced);
        self.field_bool("is-virtual", node.is_virtual);
        self.field_token("access-specifier", node.access_specifier);
        self.attr_spec_list(node.attribute_list, "attribute-list");
        self.nested_name_specifier(node.nested_name_specifier, Some("nested-name-specifier"));
        self.unqualified_name(node.unqualified_id, Some("unqualified-id"));
        self.depth -= 1;
    }

    fn requires_clause(&mut self, id: Option<RequiresClauseId>, field: Option<&str>) {
        let Some(id) = id else { return };
        self.depth += 1;
        let node = *self.arena.requires_clause(id);
        self.node_line(field, "requires-clause");
        self.expression(node.expression, Some("expression"));
        self.depth -= 1;
    }

    fn parameter_declaration_clause(
        &mut self,
        id: Option<ParameterDeclarationClauseId>,
        field: Option<&str>,
    ) {
        let Some(id) = id else { return };
        self.depth += 1;
        let node = *self.arena.parameter_declaration_clause(id);
        self.node_line(field, "parameter-declaration-clause");
        self.field_bool("is-variadic", node.is_variadic);
        self.decl_list(node.parameter_declaration_list, "parameter-declaration-list");
        self.depth -= 1;
    }

    fn trailing_return_type(&mut self, id: Option<TrailingReturnTypeId>, field: Option<&str>) {
        let Some(id) = id else { return };
        self.depth += 1;
        let node = *self.arena.trailing_return_type(id);
        self.node_line(field, "trailing-return-type");
        self.type_id(node.type_id, Some("type-id"));
        self.depth -= 1;
    }

    fn lambda_specifier(&mut self, id: Option<LambdaSpecifierId>, field: Option<&str>) {
        let Some(id) = id else { return };
        self.depth += 1;
        let node = *self.arena.lambda_specifier(id);
        self.node_line(field, "lambda-specifier");
        self.field_token("specifier", node.specifier);
        self.depth -= 1;
    }

    fn type_constraint(&mut self, id: Option<TypeConstraintId>, field: Option<&str>) {
        let Some(id) = id else { return };
        self.depth += 1;
        let node = *self.arena.type_constraint(id);
        self.node_line(field, "type-constraint");
        self.field_ident("identifier", node.identifier);
        self.nested_name_specifier(node.nested_name_specifier, Some("nested-name-specifier"));
        self.template_arg_list(node.template_argument_list, "template-argument-list");
        self.depth -= 1;
    }

    fn attribute_argument_clause(
        &mut self,
        id: Option<AttributeArgumentClauseId>,
        field: Option<&str>,
    ) {
        let Some(_id) = id else { return };
        self.depth += 1;
        self.node_line(field, "attribute-argument-clause");
        self.depth -= 1;
    }

    fn attribute(&mut self, id: Option<AttributeId>, field: Option<&str>) {
        let Some(id) = id else { return };
        self.depth += 1;
        let node = *self.arena.attribute(id);
        self.node_line(field, "attribute");
        self.attribute_token(node.attribute_token, Some("attribute-token"));
        self.attribute_argument_clause(
            node.attribute_argument_clause,
            Some("attribute-argument-clause"),
        );
        self.depth -= 1;
    }

    fn attribute_using_prefix(&mut self, id: Option<AttributeUsingPrefixId>, field: Option<&str>) {
        let Some(_id) = id else { return };
        self.depth += 1;
        self.node_line(field, "attribute-using-prefix");
        self.depth -= 1;
    }

    fn new_placement(&mut self, id: Option<NewPlacementId>, field: Option<&str>) {
        let Some(id) = id else { return };
        self.depth += 1;
        let node = *self.arena.new_placement(id);
        self.node_line(field, "new-placement");
        self.expr_list(node.expression_list, "expression-list");
        self.depth -= 1;
    }

    fn nested_namespace_specifier(
        &mut self,
        id: Option<NestedNamespaceSpecifierId>,
        field: Option<&str>,
    ) {
        let Some(id) = id else { return };
        self.depth += 1;
        let node = *self.arena.nested_namespace_specifier(id);
        self.node_line(field, "nested-namespace-specifier");
        self.field_ident("identifier", node.identifier);
        self.field_bool("is-inline", node.is_inline);
        self.depth -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_with_decls(decls: &[Declaration]) -> TranslationUnit {
        let mut unit = TranslationUnit::new();
        let ids: Vec<_> = decls
            .iter()
            .map(|&decl| unit.arena_mut().alloc_declaration(decl))
            .collect();
        let list = unit.arena_mut().alloc_declaration_list(ids);
        let root = unit.arena_mut().alloc_unit(Unit::TranslationUnit {
            declaration_list: list,
        });
        unit.set_root(root);
        unit
    }

    #[test]
    fn empty_translation_unit() {
        let unit = unit_with_decls(&[]);
        assert_eq!(print_unit(&unit), "translation-unit\n");
    }

    #[test]
    fn namespace_definition() {
        let mut unit = TranslationUnit::new();
        let name = unit.control_mut().get_identifier("N");
        let ns = unit
            .arena_mut()
            .alloc_declaration(Declaration::NamespaceDefinition {
                identifier: Some(name),
                is_inline: false,
                attribute_list: AttributeSpecifierRange::EMPTY,
                nested_namespace_specifier_list: NestedNamespaceSpecifierRange::EMPTY,
                extra_attribute_list: AttributeSpecifierRange::EMPTY,
                declaration_list: DeclarationRange::EMPTY,
            });
        let list = unit.arena_mut().alloc_declaration_list([ns]);
        let root = unit.arena_mut().alloc_unit(Unit::TranslationUnit {
            declaration_list: list,
        });
        unit.set_root(root);

        assert_eq!(
            print_unit(&unit),
            "translation-unit\n  declaration-list\n    namespace-definition\n      identifier: N\n"
        );
    }

    #[test]
    fn static_assert_with_bool_literal() {
        let mut unit = TranslationUnit::new();
        let expr = unit
            .arena_mut()
            .alloc_expression(Expression::BoolLiteralExpression { is_true: true });
        let decl = unit
            .arena_mut()
            .alloc_declaration(Declaration::StaticAssertDeclaration {
                literal: None,
                expression: Some(expr),
            });
        let list = unit.arena_mut().alloc_declaration_list([decl]);
        let root = unit.arena_mut().alloc_unit(Unit::TranslationUnit {
            declaration_list: list,
        });
        unit.set_root(root);

        assert_eq!(
            print_unit(&unit),
            "translation-unit\n  declaration-list\n    static-assert-declaration\n      \
             expression: bool-literal-expression\n        is-true: true\n"
        );
    }

    #[test]
    fn access_declaration_spells_the_token() {
        let unit = unit_with_decls(&[Declaration::AccessDeclaration {
            access_specifier: TokenKind::Public,
        }]);
        let output = print_unit(&unit);
        assert!(output.contains("access-declaration\n      access-specifier: public\n"));
    }

    #[test]
    fn false_flags_and_absent_tokens_are_suppressed() {
        let unit = unit_with_decls(&[Declaration::AccessDeclaration {
            access_specifier: TokenKind::EofSymbol,
        }]);
        let output = print_unit(&unit);
        assert!(output.contains("access-declaration\n"));
        assert!(!output.contains("access-specifier"));

        let mut unit = TranslationUnit::new();
        let expr = unit
            .arena_mut()
            .alloc_expression(Expression::BoolLiteralExpression { is_true: false });
        let decl = unit
            .arena_mut()
            .alloc_declaration(Declaration::StaticAssertDeclaration {
                literal: None,
                expression: Some(expr),
            });
        let list = unit.arena_mut().alloc_declaration_list([decl]);
        let root = unit.arena_mut().alloc_unit(Unit::TranslationUnit {
            declaration_list: list,
        });
        unit.set_root(root);
        assert!(!print_unit(&unit).contains("is-true"));
    }

    #[test]
    fn deep_declarator_nesting_prints_without_issue() {
        let mut unit = TranslationUnit::new();

        // A declarator wrapped in 64 nested-declarator cores.
        let mut declarator = unit.arena_mut().alloc_declarator(Declarator::default());
        for _ in 0..64 {
            let core = unit
                .arena_mut()
                .alloc_core_declarator(CoreDeclarator::NestedDeclarator {
                    declarator: Some(declarator),
                });
            declarator = unit.arena_mut().alloc_declarator(Declarator {
                ptr_op_list: PtrOperatorRange::EMPTY,
                core_declarator: Some(core),
                declarator_chunk_list: DeclaratorChunkRange::EMPTY,
            });
        }

        let init = unit.arena_mut().alloc_init_declarator(InitDeclarator {
            declarator: Some(declarator),
            requires_clause: None,
            initializer: None,
        });
        let inits = unit.arena_mut().alloc_init_declarator_list([init]);
        let decl = unit
            .arena_mut()
            .alloc_declaration(Declaration::SimpleDeclaration {
                attribute_list: AttributeSpecifierRange::EMPTY,
                decl_specifier_list: SpecifierRange::EMPTY,
                init_declarator_list: inits,
                requires_clause: None,
            });
        let list = unit.arena_mut().alloc_declaration_list([decl]);
        let root = unit.arena_mut().alloc_unit(Unit::TranslationUnit {
            declaration_list: list,
        });
        unit.set_root(root);

        let output = print_unit(&unit);
        assert_eq!(output.matches("nested-declarator\n").count(), 64);
        // The outermost declarator plus one per wrapper.
        assert_eq!(output.matches("declarator: declarator\n").count(), 65);
    }

    #[test]
    fn template_parameters_always_print_depth_and_index() {
        let mut unit = TranslationUnit::new();
        let param = unit
            .arena_mut()
            .alloc_template_parameter(TemplateParameter::TypenameTypeParameter {
                depth: 0,
                index: 0,
                identifier: None,
                is_pack: false,
                type_id: None,
            });
        let params = unit.arena_mut().alloc_template_parameter_list([param]);
        let decl = unit
            .arena_mut()
            .alloc_declaration(Declaration::TemplateDeclaration {
                template_parameter_list: params,
                requires_clause: None,
                declaration: None,
            });
        let list = unit.arena_mut().alloc_declaration_list([decl]);
        let root = unit.arena_mut().alloc_unit(Unit::TranslationUnit {
            declaration_list: list,
        });
        unit.set_root(root);

        let output = print_unit(&unit);
        assert!(
            output.contains("typename-type-parameter\n          depth: 0\n          index: 0\n")
        );
    }
}
