//! Arena storage for the AST of one translation unit.
//!
//! All nodes live in per-category contiguous vectors; child references are
//! 32-bit typed ids and child lists are `(start, len)` ranges into
//! per-category flattened id vectors. Everything is freed at once when the
//! arena is dropped; node types carry no destructors.
//!
//! # Capacity limits
//! - nodes per category: 4 billion (`u32::MAX`)
//! - elements per list: 65,535 (`u16::MAX`)
//!
//! Exceeding either is fatal and panics with the offending table's name.

use crate::ast::*;
use crate::node_id::*;

/// Panic helper for capacity overflow (cold path, never inlined).
#[cold]
#[inline(never)]
fn panic_capacity_exceeded(value: usize, table: &str) -> ! {
    panic!("arena capacity exceeded: {table} has {value} entries (0x{value:X})")
}

/// Convert usize to u32, panicking with the table name on overflow.
#[inline]
fn to_u32(value: usize, table: &str) -> u32 {
    u32::try_from(value).unwrap_or_else(|_| panic_capacity_exceeded(value, table))
}

/// Convert usize to u16, panicking with the table name on overflow.
#[inline]
fn to_u16(value: usize, table: &str) -> u16 {
    u16::try_from(value).unwrap_or_else(|_| panic_capacity_exceeded(value, table))
}

/// Generates the `alloc_*` / getter pair for one node table.
macro_rules! node_table {
    ($field:ident, $node:ty, $id:ty, $alloc:ident, $get:ident) => {
        impl AstArena {
            /// Allocate a node, returning its id.
            #[inline]
            pub fn $alloc(&mut self, node: $node) -> $id {
                let id = <$id>::new(to_u32(self.$field.len(), stringify!($field)));
                self.$field.push(node);
                id
            }

            /// Get a node by id.
            ///
            /// # Panics
            /// Panics if `id` is out of bounds.
            #[inline]
            #[track_caller]
            pub fn $get(&self, id: $id) -> &$node {
                &self.$field[id.index()]
            }
        }
    };
}

/// Generates the `alloc_*_list` / getter pair for one list table.
macro_rules! list_table {
    ($field:ident, $id:ty, $range:ty, $alloc:ident, $get:ident) => {
        impl AstArena {
            /// Allocate a child list, returning its range. Order is
            /// preserved; the list is immutable once built.
            pub fn $alloc(&mut self, items: impl IntoIterator<Item = $id>) -> $range {
                let start = to_u32(self.$field.len(), stringify!($field));
                self.$field.extend(items);
                let len = to_u16(self.$field.len() - start as usize, stringify!($field));
                <$range>::new(start, len)
            }

            /// Get a child list by range.
            #[inline]
            pub fn $get(&self, range: $range) -> &[$id] {
                let start = range.start as usize;
                &self.$field[start..start + range.len as usize]
            }
        }
    };
}

/// Contiguous storage for every AST node of a translation unit.
#[derive(Default)]
pub struct AstArena {
    // Category tables.
    units: Vec<Unit>,
    decls: Vec<Declaration>,
    stmts: Vec<Statement>,
    exprs: Vec<Expression>,
    specs: Vec<Specifier>,
    template_params: Vec<TemplateParameter>,
    ptr_ops: Vec<PtrOperator>,
    core_decls: Vec<CoreDeclarator>,
    decl_chunks: Vec<DeclaratorChunk>,
    unqual_names: Vec<UnqualifiedName>,
    nested_names: Vec<NestedNameSpecifier>,
    function_bodies: Vec<FunctionBody>,
    template_args: Vec<TemplateArgument>,
    exception_specs: Vec<ExceptionSpecifier>,
    requirements: Vec<Requirement>,
    new_inits: Vec<NewInitializer>,
    mem_inits: Vec<MemInitializer>,
    lambda_captures: Vec<LambdaCapture>,
    exception_decls: Vec<ExceptionDeclaration>,
    attribute_specs: Vec<AttributeSpecifier>,
    attribute_tokens: Vec<AttributeToken>,

    // Fragment tables.
    global_module_fragments: Vec<GlobalModuleFragment>,
    private_module_fragments: Vec<PrivateModuleFragment>,
    module_declarations: Vec<ModuleDeclaration>,
    module_names: Vec<ModuleName>,
    module_qualifiers: Vec<ModuleQualifier>,
    module_partitions: Vec<ModulePartition>,
    import_names: Vec<ImportName>,
    init_declarators: Vec<InitDeclarator>,
    declarators: Vec<Declarator>,
    using_declarators: Vec<UsingDeclarator>,
    enumerators: Vec<Enumerator>,
    type_ids: Vec<TypeIdNode>,
    handlers: Vec<Handler>,
    base_specifiers: Vec<BaseSpecifier>,
    requires_clauses: Vec<RequiresClause>,
    parameter_declaration_clauses: Vec<ParameterDeclarationClause>,
    trailing_return_types: Vec<TrailingReturnType>,
    lambda_specifiers: Vec<LambdaSpecifier>,
    type_constraints: Vec<TypeConstraint>,
    attribute_argument_clauses: Vec<AttributeArgumentClause>,
    attributes: Vec<Attribute>,
    attribute_using_prefixes: Vec<AttributeUsingPrefix>,
    new_placements: Vec<NewPlacement>,
    nested_namespace_specifiers: Vec<NestedNamespaceSpecifier>,

    // Flattened list storage.
    decl_lists: Vec<DeclarationId>,
    stmt_lists: Vec<StatementId>,
    expr_lists: Vec<ExpressionId>,
    spec_lists: Vec<SpecifierId>,
    template_param_lists: Vec<TemplateParameterId>,
    template_arg_lists: Vec<TemplateArgumentId>,
    ptr_op_lists: Vec<PtrOperatorId>,
    decl_chunk_lists: Vec<DeclaratorChunkId>,
    unqual_name_lists: Vec<UnqualifiedNameId>,
    requirement_lists: Vec<RequirementId>,
    mem_init_lists: Vec<MemInitializerId>,
    lambda_capture_lists: Vec<LambdaCaptureId>,
    attribute_spec_lists: Vec<AttributeSpecifierId>,
    init_declarator_lists: Vec<InitDeclaratorId>,
    using_declarator_lists: Vec<UsingDeclaratorId>,
    enumerator_lists: Vec<EnumeratorId>,
    base_specifier_lists: Vec<BaseSpecifierId>,
    handler_lists: Vec<HandlerId>,
    lambda_specifier_lists: Vec<LambdaSpecifierId>,
    type_id_lists: Vec<TypeIdNodeId>,
    attribute_lists: Vec<AttributeId>,
    nested_namespace_specifier_lists: Vec<NestedNamespaceSpecifierId>,
}

impl AstArena {
    /// Create a new empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with capacity estimated from source size.
    /// Heuristic: roughly one node per 12 bytes of source, most of them
    /// expressions and specifiers.
    pub fn with_capacity(source_len: usize) -> Self {
        let estimated = source_len / 12;
        AstArena {
            decls: Vec::with_capacity(estimated / 8),
            stmts: Vec::with_capacity(estimated / 4),
            exprs: Vec::with_capacity(estimated / 2),
            specs: Vec::with_capacity(estimated / 4),
            decl_lists: Vec::with_capacity(estimated / 8),
            expr_lists: Vec::with_capacity(estimated / 4),
            spec_lists: Vec::with_capacity(estimated / 4),
            ..Self::default()
        }
    }

    /// Total number of nodes across the category tables, used by codec
    /// statistics.
    pub fn node_count(&self) -> usize {
        self.units.len()
            + self.decls.len()
            + self.stmts.len()
            + self.exprs.len()
            + self.specs.len()
            + self.template_params.len()
            + self.ptr_ops.len()
            + self.core_decls.len()
            + self.decl_chunks.len()
            + self.unqual_names.len()
            + self.nested_names.len()
            + self.function_bodies.len()
            + self.template_args.len()
            + self.exception_specs.len()
            + self.requirements.len()
            + self.new_inits.len()
            + self.mem_inits.len()
            + self.lambda_captures.len()
            + self.exception_decls.len()
            + self.attribute_specs.len()
            + self.attribute_tokens.len()
    }

    /// True if nothing has been allocated.
    pub fn is_empty(&self) -> bool {
        self.node_count() == 0
    }
}

node_table!(units, Unit, UnitId, alloc_unit, unit);
node_table!(decls, Declaration, DeclarationId, alloc_declaration, declaration);
node_table!(stmts, Statement, StatementId, alloc_statement, statement);
node_table!(exprs, Expression, ExpressionId, alloc_expression, expression);
node_table!(specs, Specifier, SpecifierId, alloc_specifier, specifier);
node_table!(
    template_params,
    TemplateParameter,
    TemplateParameterId,
    alloc_template_parameter,
    template_parameter
);
node_table!(ptr_ops, PtrOperator, PtrOperatorId, alloc_ptr_operator, ptr_operator);
node_table!(
    core_decls,
    CoreDeclarator,
    CoreDeclaratorId,
    alloc_core_declarator,
    core_declarator
);
node_table!(
    decl_chunks,
    DeclaratorChunk,
    DeclaratorChunkId,
    alloc_declarator_chunk,
    declarator_chunk
);
node_table!(
    unqual_names,
    UnqualifiedName,
    UnqualifiedNameId,
    alloc_unqualified_name,
    unqualified_name
);
node_table!(
    nested_names,
    NestedNameSpecifier,
    NestedNameSpecifierId,
    alloc_nested_name_specifier,
    nested_name_specifier
);
node_table!(
    function_bodies,
    FunctionBody,
    FunctionBodyId,
    alloc_function_body,
    function_body
);
node_table!(
    template_args,
    TemplateArgument,
    TemplateArgumentId,
    alloc_template_argument,
    template_argument
);
node_table!(
    exception_specs,
    ExceptionSpecifier,
    ExceptionSpecifierId,
    alloc_exception_specifier,
    exception_specifier
);
node_table!(requirements, Requirement, RequirementId, alloc_requirement, requirement);
node_table!(
    new_inits,
    NewInitializer,
    NewInitializerId,
    alloc_new_initializer,
    new_initializer
);
node_table!(
    mem_inits,
    MemInitializer,
    MemInitializerId,
    alloc_mem_initializer,
    mem_initializer
);
node_table!(
    lambda_captures,
    LambdaCapture,
    LambdaCaptureId,
    alloc_lambda_capture,
    lambda_capture
);
node_table!(
    exception_decls,
    ExceptionDeclaration,
    ExceptionDeclarationId,
    alloc_exception_declaration,
    exception_declaration
);
node_table!(
    attribute_specs,
    AttributeSpecifier,
    AttributeSpecifierId,
    alloc_attribute_specifier,
    attribute_specifier
);
node_table!(
    attribute_tokens,
    AttributeToken,
    AttributeTokenId,
    alloc_attribute_token,
    attribute_token
);

node_table!(
    global_module_fragments,
    GlobalModuleFragment,
    GlobalModuleFragmentId,
    alloc_global_module_fragment,
    global_module_fragment
);
node_table!(
    private_module_fragments,
    PrivateModuleFragment,
    PrivateModuleFragmentId,
    alloc_private_module_fragment,
    private_module_fragment
);
node_table!(
    module_declarations,
    ModuleDeclaration,
    ModuleDeclarationId,
    alloc_module_declaration,
    module_declaration
);
node_table!(module_names, ModuleName, ModuleNameId, alloc_module_name, module_name);
node_table!(
    module_qualifiers,
    ModuleQualifier,
    ModuleQualifierId,
    alloc_module_qualifier,
    module_qualifier
);
node_table!(
    module_partitions,
    ModulePartition,
    ModulePartitionId,
    alloc_module_partition,
    module_partition
);
node_table!(import_names, ImportName, ImportNameId, alloc_import_name, import_name);
node_table!(
    init_declarators,
    InitDeclarator,
    InitDeclaratorId,
    alloc_init_declarator,
    init_declarator
);
node_table!(declarators, Declarator, DeclaratorId, alloc_declarator, declarator);
node_table!(
    using_declarators,
    UsingDeclarator,
    UsingDeclaratorId,
    alloc_using_declarator,
    using_declarator
);
node_table!(enumerators, Enumerator, EnumeratorId, alloc_enumerator, enumerator);
node_table!(type_ids, TypeIdNode, TypeIdNodeId, alloc_type_id, type_id);
node_table!(handlers, Handler, HandlerId, alloc_handler, handler);
node_table!(
    base_specifiers,
    BaseSpecifier,
    BaseSpecifierId,
    alloc_base_specifier,
    base_specifier
);
node_table!(
    requires_clauses,
    RequiresClause,
    RequiresClauseId,
    alloc_requires_clause,
    requires_clause
);
node_table!(
    parameter_declaration_clauses,
    ParameterDeclarationClause,
    ParameterDeclarationClauseId,
    alloc_parameter_declaration_clause,
    parameter_declaration_clause
);
node_table!(
    trailing_return_types,
    TrailingReturnType,
    TrailingReturnTypeId,
    alloc_trailing_return_type,
    trailing_return_type
);
node_table!(
    lambda_specifiers,
    LambdaSpecifier,
    LambdaSpecifierId,
    alloc_lambda_specifier,
    lambda_specifier
);
node_table!(
    type_constraints,
    TypeConstraint,
    TypeConstraintId,
    alloc_type_constraint,
    type_constraint
);
node_table!(
    attribute_argument_clauses,
    AttributeArgumentClause,
    AttributeArgumentClauseId,
    alloc_attribute_argument_clause,
    attribute_argument_clause
);
node_table!(attributes, Attribute, AttributeId, alloc_attribute, attribute);
node_table!(
    attribute_using_prefixes,
    AttributeUsingPrefix,
    AttributeUsingPrefixId,
    alloc_attribute_using_prefix,
    attribute_using_prefix
);
node_table!(
    new_placements,
    NewPlacement,
    NewPlacementId,
    alloc_new_placement,
    new_placement
);
node_table!(
    nested_namespace_specifiers,
    NestedNamespaceSpecifier,
    NestedNamespaceSpecifierId,
    alloc_nested_namespace_specifier,
    nested_namespace_specifier
);

list_table!(
    decl_lists,
    DeclarationId,
    DeclarationRange,
    alloc_declaration_list,
    declaration_list
);
list_table!(stmt_lists, StatementId, StatementRange, alloc_statement_list, statement_list);
list_table!(expr_lists, ExpressionId, ExpressionRange, alloc_expression_list, expression_list);
list_table!(spec_lists, SpecifierId, SpecifierRange, alloc_specifier_list, specifier_list);
list_table!(
    template_param_lists,
    TemplateParameterId,
    TemplateParameterRange,
    alloc_template_parameter_list,
    template_parameter_list
);
list_table!(
    template_arg_lists,
    TemplateArgumentId,
    TemplateArgumentRange,
    alloc_template_argument_list,
    template_argument_list
);
list_table!(
    ptr_op_lists,
    PtrOperatorId,
    PtrOperatorRange,
    alloc_ptr_operator_list,
    ptr_operator_list
);
list_table!(
    decl_chunk_lists,
    DeclaratorChunkId,
    DeclaratorChunkRange,
    alloc_declarator_chunk_list,
    declarator_chunk_list
);
list_table!(
    unqual_name_lists,
    UnqualifiedNameId,
    UnqualifiedNameRange,
    alloc_unqualified_name_list,
    unqualified_name_list
);
list_table!(
    requirement_lists,
    RequirementId,
    RequirementRange,
    alloc_requirement_list,
    requirement_list
);
list_table!(
    mem_init_lists,
    MemInitializerId,
    MemInitializerRange,
    alloc_mem_initializer_list,
    mem_initializer_list
);
list_table!(
    lambda_capture_lists,
    LambdaCaptureId,
    LambdaCaptureRange,
    alloc_lambda_capture_list,
    lambda_capture_list
);
list_table!(
    attribute_spec_lists,
    AttributeSpecifierId,
    AttributeSpecifierRange,
    alloc_attribute_specifier_list,
    attribute_specifier_list
);
list_table!(
    init_declarator_lists,
    InitDeclaratorId,
    InitDeclaratorRange,
    alloc_init_declarator_list,
    init_declarator_list
);
list_table!(
    using_declarator_lists,
    UsingDeclaratorId,
    UsingDeclaratorRange,
    alloc_using_declarator_list,
    using_declarator_list
);
list_table!(
    enumerator_lists,
    EnumeratorId,
    EnumeratorRange,
    alloc_enumerator_list,
    enumerator_list
);
list_table!(
    base_specifier_lists,
    BaseSpecifierId,
    BaseSpecifierRange,
    alloc_base_specifier_list,
    base_specifier_list
);
list_table!(handler_lists, HandlerId, HandlerRange, alloc_handler_list, handler_list);
list_table!(
    lambda_specifier_lists,
    LambdaSpecifierId,
    LambdaSpecifierRange,
    alloc_lambda_specifier_list,
    lambda_specifier_list
);
list_table!(
    type_id_lists,
    TypeIdNodeId,
    TypeIdNodeRange,
    alloc_type_id_list,
    type_id_list
);
list_table!(attribute_lists, AttributeId, AttributeRange, alloc_attribute_list, attribute_list);
list_table!(
    nested_namespace_specifier_lists,
    NestedNamespaceSpecifierId,
    NestedNamespaceSpecifierRange,
    alloc_nested_namespace_specifier_list,
    nested_namespace_specifier_list
);

impl std::fmt::Debug for AstArena {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "AstArena {{ {} decls, {} stmts, {} exprs, {} specs }}",
            self.decls.len(),
            self.stmts.len(),
            self.exprs.len(),
            self.specs.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TokenKind;

    #[test]
    fn alloc_and_get() {
        let mut arena = AstArena::new();
        let id1 = arena.alloc_expression(Expression::ThisExpression);
        let id2 = arena.alloc_expression(Expression::BoolLiteralExpression { is_true: true });

        assert_eq!(id1.index(), 0);
        assert_eq!(id2.index(), 1);
        assert!(matches!(arena.expression(id1), Expression::ThisExpression));
        assert!(matches!(
            arena.expression(id2),
            Expression::BoolLiteralExpression { is_true: true }
        ));
    }

    #[test]
    fn lists_preserve_order() {
        let mut arena = AstArena::new();
        let a = arena.alloc_declaration(Declaration::EmptyDeclaration);
        let b = arena.alloc_declaration(Declaration::AccessDeclaration {
            access_specifier: TokenKind::Public,
        });
        let c = arena.alloc_declaration(Declaration::EmptyDeclaration);

        let range = arena.alloc_declaration_list([a, b, c]);
        assert_eq!(range.len(), 3);
        assert_eq!(arena.declaration_list(range), &[a, b, c]);
    }

    #[test]
    fn empty_list_is_empty_range() {
        let mut arena = AstArena::new();
        let range = arena.alloc_expression_list([]);
        assert!(range.is_empty());
        assert_eq!(arena.expression_list(range), &[] as &[ExpressionId]);
    }

    #[test]
    fn fragments_are_addressable() {
        let mut arena = AstArena::new();
        let declarator = arena.alloc_declarator(Declarator::default());
        let init = arena.alloc_init_declarator(InitDeclarator {
            declarator: Some(declarator),
            requires_clause: None,
            initializer: None,
        });
        assert_eq!(arena.init_declarator(init).declarator, Some(declarator));
    }

    #[test]
    fn node_count_spans_categories() {
        let mut arena = AstArena::new();
        assert!(arena.is_empty());
        arena.alloc_statement(Statement::BreakStatement);
        arena.alloc_unit(Unit::TranslationUnit {
            declaration_list: DeclarationRange::EMPTY,
        });
        assert_eq!(arena.node_count(), 2);
    }
}
