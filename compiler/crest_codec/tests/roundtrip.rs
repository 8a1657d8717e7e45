//! Codec round-trip coverage.
//!
//! The central law: decode(encode(u)) is structurally equal to u, checked
//! through the canonical dump (which covers every child position and scalar
//! payload) and through byte-identical re-encoding.

use crest_ast::ast::*;
use crest_ast::{
    print_unit, AttributeSpecifierRange, BuiltinKind, DeclarationRange, DeclarationId,
    DeclaratorChunkRange, ExpressionRange, LambdaCaptureRange, LambdaSpecifierRange,
    NestedNamespaceSpecifierRange, PtrOperatorRange, SpecifierRange, StatementRange,
    TemplateParameterRange, TokenKind, TranslationUnit, TypeIdNodeRange,
};
use crest_codec::{encode, AstDecoder, DecodeError, DecoderState};

/// Encode, decode into a fresh unit, and check both laws.
fn assert_round_trip(unit: &TranslationUnit) -> TranslationUnit {
    let bytes = encode(unit);

    let mut decoded = TranslationUnit::new();
    let mut decoder = AstDecoder::new();
    decoder
        .decode(&mut decoded, &bytes)
        .expect("decode of a freshly encoded unit");
    assert_eq!(decoder.state(), DecoderState::Done);

    // print . decode . encode == print
    assert_eq!(print_unit(&decoded), print_unit(unit));

    // Re-encoding reproduces the byte stream exactly.
    assert_eq!(encode(&decoded), bytes);

    decoded
}

fn unit_with_decls(decls: Vec<DeclarationId>, unit: &mut TranslationUnit) {
    let list = unit.arena_mut().alloc_declaration_list(decls);
    let root = unit.arena_mut().alloc_unit(Unit::TranslationUnit {
        declaration_list: list,
    });
    unit.set_root(root);
}

#[test]
fn empty_translation_unit() {
    let mut unit = TranslationUnit::new();
    unit_with_decls(Vec::new(), &mut unit);

    let decoded = assert_round_trip(&unit);
    assert_eq!(print_unit(&decoded), "translation-unit\n");
}

#[test]
fn file_name_survives_the_trip() {
    let mut unit = TranslationUnit::new();
    unit.set_source(String::new(), "templ.001.cc".into());
    unit_with_decls(Vec::new(), &mut unit);

    let decoded = assert_round_trip(&unit);
    assert_eq!(decoded.file_name(), "templ.001.cc");
}

#[test]
fn namespace_with_static_assert() {
    let mut unit = TranslationUnit::new();

    let ident = unit.control_mut().get_identifier("N");
    let expr = unit
        .arena_mut()
        .alloc_expression(Expression::BoolLiteralExpression { is_true: true });
    let assert_decl = unit
        .arena_mut()
        .alloc_declaration(Declaration::StaticAssertDeclaration {
            literal: None,
            expression: Some(expr),
        });
    let inner = unit.arena_mut().alloc_declaration_list([assert_decl]);
    let ns = unit
        .arena_mut()
        .alloc_declaration(Declaration::NamespaceDefinition {
            identifier: Some(ident),
            is_inline: false,
            attribute_list: AttributeSpecifierRange::EMPTY,
            nested_namespace_specifier_list: NestedNamespaceSpecifierRange::EMPTY,
            extra_attribute_list: AttributeSpecifierRange::EMPTY,
            declaration_list: inner,
        });
    unit_with_decls(vec![ns], &mut unit);

    let decoded = assert_round_trip(&unit);
    let output = print_unit(&decoded);
    assert!(output.contains("identifier: N"));
    assert!(output.contains("is-true: true"));
}

#[test]
fn interned_strings_reintern_into_the_receiver() {
    let mut unit = TranslationUnit::new();
    let spelling = unit.control_mut().get_identifier("value");
    let a = unit.arena_mut().alloc_declaration(Declaration::ConceptDefinition {
        identifier: Some(spelling),
        expression: None,
    });
    let b = unit.arena_mut().alloc_declaration(Declaration::ConceptDefinition {
        identifier: Some(spelling),
        expression: None,
    });
    unit_with_decls(vec![a, b], &mut unit);

    let decoded = assert_round_trip(&unit);

    // Both occurrences resolve to one interned identifier in the receiver.
    let names_before = decoded.control().idents().len();
    let mut receiver = decoded;
    let again = receiver.control_mut().get_identifier("value");
    assert_eq!(receiver.control().idents().len(), names_before);
    assert_eq!(receiver.control().idents().lookup(again), "value");
}

#[test]
fn literal_payloads_round_trip_by_spelling() {
    let mut unit = TranslationUnit::new();
    let literal = unit.control_mut().integer_literal("0x2A");
    let expr = unit
        .arena_mut()
        .alloc_expression(Expression::IntLiteralExpression {
            literal: Some(literal),
        });
    let decl = unit
        .arena_mut()
        .alloc_declaration(Declaration::StaticAssertDeclaration {
            literal: None,
            expression: Some(expr),
        });
    unit_with_decls(vec![decl], &mut unit);

    let decoded = assert_round_trip(&unit);
    assert!(print_unit(&decoded).contains("literal: 0x2A"));

    // Normalisation re-ran on the receiving side.
    let receiver_literal = decoded.control().literals();
    assert_eq!(receiver_literal.len(), 1);
}

#[test]
fn token_payloads_round_trip() {
    let mut unit = TranslationUnit::new();
    let access = unit
        .arena_mut()
        .alloc_declaration(Declaration::AccessDeclaration {
            access_specifier: TokenKind::Protected,
        });
    let left = unit.arena_mut().alloc_expression(Expression::ThisExpression);
    let right = unit.arena_mut().alloc_expression(Expression::ThisExpression);
    let binary = unit.arena_mut().alloc_expression(Expression::BinaryExpression {
        op: TokenKind::LessEqualGreater,
        left_expression: Some(left),
        right_expression: Some(right),
    });
    let assert_decl = unit
        .arena_mut()
        .alloc_declaration(Declaration::StaticAssertDeclaration {
            literal: None,
            expression: Some(binary),
        });
    unit_with_decls(vec![access, assert_decl], &mut unit);

    let decoded = assert_round_trip(&unit);
    let output = print_unit(&decoded);
    assert!(output.contains("access-specifier: protected"));
    assert!(output.contains("op: <=>"));
}

#[test]
fn template_struct_with_enum_round_trips() {
    // template <typename T> struct is_void { enum { value = __is_void(T) }; };
    let mut unit = TranslationUnit::new();

    let ident_t = unit.control_mut().get_identifier("T");
    let ident_is_void = unit.control_mut().get_identifier("is_void");
    let ident_value = unit.control_mut().get_identifier("value");

    // __is_void(T)
    let named_t = unit
        .arena_mut()
        .alloc_unqualified_name(UnqualifiedName::NameId {
            identifier: Some(ident_t),
        });
    let t_spec = unit.arena_mut().alloc_specifier(Specifier::NamedTypeSpecifier {
        is_template_introduced: false,
        nested_name_specifier: None,
        unqualified_id: Some(named_t),
    });
    let t_specs = unit.arena_mut().alloc_specifier_list([t_spec]);
    let t_type_id = unit.arena_mut().alloc_type_id(TypeIdNode {
        type_specifier_list: t_specs,
        declarator: None,
    });
    let trait_args = unit.arena_mut().alloc_type_id_list([t_type_id]);
    let trait_expr = unit
        .arena_mut()
        .alloc_expression(Expression::TypeTraitsExpression {
            type_trait: BuiltinKind::IsVoid,
            type_id_list: trait_args,
        });

    // enum { value = __is_void(T) }
    let enumerator = unit.arena_mut().alloc_enumerator(Enumerator {
        identifier: Some(ident_value),
        attribute_list: AttributeSpecifierRange::EMPTY,
        expression: Some(trait_expr),
    });
    let enumerators = unit.arena_mut().alloc_enumerator_list([enumerator]);
    let enum_spec = unit.arena_mut().alloc_specifier(Specifier::EnumSpecifier {
        attribute_list: AttributeSpecifierRange::EMPTY,
        nested_name_specifier: None,
        unqualified_id: None,
        type_specifier_list: SpecifierRange::EMPTY,
        enumerator_list: enumerators,
    });
    let enum_specs = unit.arena_mut().alloc_specifier_list([enum_spec]);
    let member = unit
        .arena_mut()
        .alloc_declaration(Declaration::SimpleDeclaration {
            attribute_list: AttributeSpecifierRange::EMPTY,
            decl_specifier_list: enum_specs,
            init_declarator_list: crest_ast::InitDeclaratorRange::EMPTY,
            requires_clause: None,
        });
    let members = unit.arena_mut().alloc_declaration_list([member]);

    // struct is_void { ... };
    let struct_name = unit
        .arena_mut()
        .alloc_unqualified_name(UnqualifiedName::NameId {
            identifier: Some(ident_is_void),
        });
    let class_spec = unit.arena_mut().alloc_specifier(Specifier::ClassSpecifier {
        class_key: TokenKind::Struct,
        is_final: false,
        attribute_list: AttributeSpecifierRange::EMPTY,
        nested_name_specifier: None,
        unqualified_id: Some(struct_name),
        base_specifier_list: crest_ast::BaseSpecifierRange::EMPTY,
        declaration_list: members,
    });
    let class_specs = unit.arena_mut().alloc_specifier_list([class_spec]);
    let struct_decl = unit
        .arena_mut()
        .alloc_declaration(Declaration::SimpleDeclaration {
            attribute_list: AttributeSpecifierRange::EMPTY,
            decl_specifier_list: class_specs,
            init_declarator_list: crest_ast::InitDeclaratorRange::EMPTY,
            requires_clause: None,
        });

    // template <typename T> ...
    let param = unit
        .arena_mut()
        .alloc_template_parameter(TemplateParameter::TypenameTypeParameter {
            depth: 0,
            index: 0,
            identifier: Some(ident_t),
            is_pack: false,
            type_id: None,
        });
    let params = unit.arena_mut().alloc_template_parameter_list([param]);
    let template = unit
        .arena_mut()
        .alloc_declaration(Declaration::TemplateDeclaration {
            template_parameter_list: params,
            requires_clause: None,
            declaration: Some(struct_decl),
        });
    unit_with_decls(vec![template], &mut unit);

    let decoded = assert_round_trip(&unit);
    let output = print_unit(&decoded);
    assert!(output.contains("template-declaration"));
    assert!(output.contains("class-key: struct"));
    assert!(output.contains("identifier: is_void"));
    assert!(output.contains("enumerator"));
    assert!(output.contains("identifier: value"));
    assert!(output.contains("type-trait: __is_void"));
}

#[test]
fn lambda_with_captures_round_trips() {
    let mut unit = TranslationUnit::new();

    let ident = unit.control_mut().get_identifier("x");
    let capture = unit
        .arena_mut()
        .alloc_lambda_capture(LambdaCapture::RefLambdaCapture {
            identifier: Some(ident),
        });
    let captures = unit.arena_mut().alloc_lambda_capture_list([capture]);
    let body = unit.arena_mut().alloc_statement(Statement::CompoundStatement {
        statement_list: StatementRange::EMPTY,
    });
    let lambda = unit.arena_mut().alloc_expression(Expression::LambdaExpression {
        capture_default: TokenKind::Equal,
        capture_list: captures,
        template_parameter_list: TemplateParameterRange::EMPTY,
        template_requires_clause: None,
        parameter_declaration_clause: None,
        lambda_specifier_list: LambdaSpecifierRange::EMPTY,
        exception_specifier: None,
        attribute_list: AttributeSpecifierRange::EMPTY,
        trailing_return_type: None,
        requires_clause: None,
        statement: Some(body),
    });
    let stmt = unit.arena_mut().alloc_statement(Statement::ExpressionStatement {
        expression: Some(lambda),
    });
    let stmts = unit.arena_mut().alloc_statement_list([stmt]);
    let compound = unit.arena_mut().alloc_statement(Statement::CompoundStatement {
        statement_list: stmts,
    });
    let fn_body = unit
        .arena_mut()
        .alloc_function_body(FunctionBody::CompoundStatementFunctionBody {
            mem_initializer_list: crest_ast::MemInitializerRange::EMPTY,
            statement: Some(compound),
        });
    let declarator = unit.arena_mut().alloc_declarator(Declarator {
        ptr_op_list: PtrOperatorRange::EMPTY,
        core_declarator: None,
        declarator_chunk_list: DeclaratorChunkRange::EMPTY,
    });
    let def = unit
        .arena_mut()
        .alloc_declaration(Declaration::FunctionDefinition {
            attribute_list: AttributeSpecifierRange::EMPTY,
            decl_specifier_list: SpecifierRange::EMPTY,
            declarator: Some(declarator),
            requires_clause: None,
            function_body: Some(fn_body),
        });
    unit_with_decls(vec![def], &mut unit);

    let decoded = assert_round_trip(&unit);
    let output = print_unit(&decoded);
    assert!(output.contains("lambda-expression"));
    assert!(output.contains("capture-default: ="));
    assert!(output.contains("ref-lambda-capture"));
}

#[test]
fn module_unit_round_trips() {
    let mut unit = TranslationUnit::new();

    let ident = unit.control_mut().get_identifier("app");
    let module_name = unit.arena_mut().alloc_module_name(ModuleName {
        identifier: Some(ident),
        module_qualifier: None,
    });
    let module_decl = unit.arena_mut().alloc_module_declaration(ModuleDeclaration {
        module_name: Some(module_name),
        module_partition: None,
        attribute_list: AttributeSpecifierRange::EMPTY,
    });
    let global = unit
        .arena_mut()
        .alloc_global_module_fragment(GlobalModuleFragment {
            declaration_list: DeclarationRange::EMPTY,
        });
    let root = unit.arena_mut().alloc_unit(Unit::ModuleUnit {
        global_module_fragment: Some(global),
        module_declaration: Some(module_decl),
        declaration_list: DeclarationRange::EMPTY,
        private_module_fragment: None,
    });
    unit.set_root(root);

    let decoded = assert_round_trip(&unit);
    let output = print_unit(&decoded);
    assert!(output.starts_with("module-unit\n"));
    assert!(output.contains("module-name"));
    assert!(output.contains("identifier: app"));
}

#[test]
fn minimal_nodes_of_every_statement_kind_round_trip() {
    let mut unit = TranslationUnit::new();
    let label = unit.control_mut().get_identifier("out");

    let statements = vec![
        Statement::LabeledStatement {
            identifier: Some(label),
        },
        Statement::CaseStatement { expression: None },
        Statement::DefaultStatement,
        Statement::ExpressionStatement { expression: None },
        Statement::CompoundStatement {
            statement_list: StatementRange::EMPTY,
        },
        Statement::IfStatement {
            initializer: None,
            condition: None,
            statement: None,
            else_statement: None,
        },
        Statement::ConstevalIfStatement {
            is_not: true,
            statement: None,
            else_statement: None,
        },
        Statement::SwitchStatement {
            initializer: None,
            condition: None,
            statement: None,
        },
        Statement::WhileStatement {
            condition: None,
            statement: None,
        },
        Statement::DoStatement {
            statement: None,
            expression: None,
        },
        Statement::ForRangeStatement {
            initializer: None,
            range_declaration: None,
            range_initializer: None,
            statement: None,
        },
        Statement::ForStatement {
            initializer: None,
            condition: None,
            expression: None,
            statement: None,
        },
        Statement::BreakStatement,
        Statement::ContinueStatement,
        Statement::ReturnStatement { expression: None },
        Statement::CoroutineReturnStatement { expression: None },
        Statement::GotoStatement {
            identifier: Some(label),
        },
        Statement::DeclarationStatement { declaration: None },
        Statement::TryBlockStatement {
            statement: None,
            handler_list: crest_ast::HandlerRange::EMPTY,
        },
    ];

    let ids: Vec<_> = statements
        .into_iter()
        .map(|stmt| unit.arena_mut().alloc_statement(stmt))
        .collect();
    let list = unit.arena_mut().alloc_statement_list(ids);
    let compound = unit.arena_mut().alloc_statement(Statement::CompoundStatement {
        statement_list: list,
    });
    let body = unit
        .arena_mut()
        .alloc_function_body(FunctionBody::CompoundStatementFunctionBody {
            mem_initializer_list: crest_ast::MemInitializerRange::EMPTY,
            statement: Some(compound),
        });
    let def = unit
        .arena_mut()
        .alloc_declaration(Declaration::FunctionDefinition {
            attribute_list: AttributeSpecifierRange::EMPTY,
            decl_specifier_list: SpecifierRange::EMPTY,
            declarator: None,
            requires_clause: None,
            function_body: Some(body),
        });
    unit_with_decls(vec![def], &mut unit);

    assert_round_trip(&unit);
}

#[test]
fn minimal_nodes_of_every_expression_kind_round_trip() {
    let mut unit = TranslationUnit::new();
    let ident = unit.control_mut().get_identifier("pack");
    let int_literal = unit.control_mut().integer_literal("1");
    let char_literal = unit.control_mut().char_literal("'c'");
    let float_literal = unit.control_mut().float_literal("1.5");
    let string_literal = unit.control_mut().string_literal("\"s\"");

    let expressions = vec![
        Expression::CharLiteralExpression {
            literal: Some(char_literal),
        },
        Expression::BoolLiteralExpression { is_true: false },
        Expression::IntLiteralExpression {
            literal: Some(int_literal),
        },
        Expression::FloatLiteralExpression {
            literal: Some(float_literal),
        },
        Expression::NullptrLiteralExpression {
            literal: TokenKind::Nullptr,
        },
        Expression::StringLiteralExpression {
            literal: Some(string_literal),
        },
        Expression::UserDefinedStringLiteralExpression {
            literal: Some(string_literal),
        },
        Expression::ThisExpression,
        Expression::NestedExpression { expression: None },
        Expression::IdExpression {
            is_template_introduced: false,
            nested_name_specifier: None,
            unqualified_id: None,
        },
        Expression::LambdaExpression {
            capture_default: TokenKind::EofSymbol,
            capture_list: LambdaCaptureRange::EMPTY,
            template_parameter_list: TemplateParameterRange::EMPTY,
            template_requires_clause: None,
            parameter_declaration_clause: None,
            lambda_specifier_list: LambdaSpecifierRange::EMPTY,
            exception_specifier: None,
            attribute_list: AttributeSpecifierRange::EMPTY,
            trailing_return_type: None,
            requires_clause: None,
            statement: None,
        },
        Expression::FoldExpression {
            op: TokenKind::Plus,
            fold_op: TokenKind::Plus,
            left_expression: None,
            right_expression: None,
        },
        Expression::RightFoldExpression {
            op: TokenKind::Plus,
            expression: None,
        },
        Expression::LeftFoldExpression {
            op: TokenKind::Minus,
            expression: None,
        },
        Expression::RequiresExpression {
            parameter_declaration_clause: None,
            requirement_list: crest_ast::RequirementRange::EMPTY,
        },
        Expression::SubscriptExpression {
            base_expression: None,
            index_expression: None,
        },
        Expression::CallExpression {
            base_expression: None,
            expression_list: ExpressionRange::EMPTY,
        },
        Expression::TypeConstruction {
            type_specifier: None,
            expression_list: ExpressionRange::EMPTY,
        },
        Expression::BracedTypeConstruction {
            type_specifier: None,
            braced_init_list: None,
        },
        Expression::MemberExpression {
            access_op: TokenKind::Dot,
            base_expression: None,
            member_id: None,
        },
        Expression::PostIncrExpression {
            op: TokenKind::PlusPlus,
            base_expression: None,
        },
        Expression::CppCastExpression {
            type_id: None,
            expression: None,
        },
        Expression::BuiltinBitCastExpression {
            type_id: None,
            expression: None,
        },
        Expression::TypeidExpression { expression: None },
        Expression::TypeidOfTypeExpression { type_id: None },
        Expression::UnaryExpression {
            op: TokenKind::Exclaim,
            expression: None,
        },
        Expression::AwaitExpression { expression: None },
        Expression::SizeofExpression { expression: None },
        Expression::SizeofTypeExpression { type_id: None },
        Expression::SizeofPackExpression {
            identifier: Some(ident),
        },
        Expression::AlignofTypeExpression { type_id: None },
        Expression::AlignofExpression { expression: None },
        Expression::NoexceptExpression { expression: None },
        Expression::NewExpression {
            new_placement: None,
            type_specifier_list: SpecifierRange::EMPTY,
            declarator: None,
            new_initializer: None,
        },
        Expression::DeleteExpression { expression: None },
        Expression::CastExpression {
            type_id: None,
            expression: None,
        },
        Expression::ImplicitCastExpression { expression: None },
        Expression::BinaryExpression {
            op: TokenKind::Plus,
            left_expression: None,
            right_expression: None,
        },
        Expression::ConditionalExpression {
            condition: None,
            iftrue_expression: None,
            iffalse_expression: None,
        },
        Expression::YieldExpression { expression: None },
        Expression::ThrowExpression { expression: None },
        Expression::AssignmentExpression {
            op: TokenKind::Equal,
            left_expression: None,
            right_expression: None,
        },
        Expression::PackExpansionExpression { expression: None },
        Expression::DesignatedInitializerClause {
            identifier: Some(ident),
            initializer: None,
        },
        Expression::TypeTraitsExpression {
            type_trait: BuiltinKind::IsEnum,
            type_id_list: TypeIdNodeRange::EMPTY,
        },
        Expression::ConditionExpression {
            attribute_list: AttributeSpecifierRange::EMPTY,
            decl_specifier_list: SpecifierRange::EMPTY,
            declarator: None,
            initializer: None,
        },
        Expression::EqualInitializer { expression: None },
        Expression::BracedInitList {
            expression_list: ExpressionRange::EMPTY,
        },
        Expression::ParenInitializer {
            expression_list: ExpressionRange::EMPTY,
        },
    ];

    let ids: Vec<_> = expressions
        .into_iter()
        .map(|expr| unit.arena_mut().alloc_expression(expr))
        .collect();
    let list = unit.arena_mut().alloc_expression_list(ids);
    let call = unit.arena_mut().alloc_expression(Expression::CallExpression {
        base_expression: None,
        expression_list: list,
    });
    let decl = unit
        .arena_mut()
        .alloc_declaration(Declaration::StaticAssertDeclaration {
            literal: None,
            expression: Some(call),
        });
    unit_with_decls(vec![decl], &mut unit);

    assert_round_trip(&unit);
}

#[test]
fn truncated_input_is_a_decode_error() {
    let mut unit = TranslationUnit::new();
    unit_with_decls(Vec::new(), &mut unit);
    let bytes = encode(&unit);

    for len in [0, 3, 8, bytes.len() - 1] {
        let mut decoder = AstDecoder::new();
        let mut receiver = TranslationUnit::new();
        let result = decoder.decode(&mut receiver, &bytes[..len]);
        assert!(result.is_err(), "truncation at {len} must fail");
        assert_eq!(decoder.state(), DecoderState::Failed);
    }
}

#[test]
fn bad_magic_is_rejected() {
    let mut unit = TranslationUnit::new();
    unit_with_decls(Vec::new(), &mut unit);
    let mut bytes = encode(&unit);
    bytes[0] = b'X';

    let mut decoder = AstDecoder::new();
    let mut receiver = TranslationUnit::new();
    assert_eq!(
        decoder.decode(&mut receiver, &bytes),
        Err(DecodeError::BadMagic)
    );
}

#[test]
fn unsupported_version_is_rejected() {
    let mut unit = TranslationUnit::new();
    unit_with_decls(Vec::new(), &mut unit);
    let mut bytes = encode(&unit);
    bytes[4] = 0xfe;

    let mut decoder = AstDecoder::new();
    let mut receiver = TranslationUnit::new();
    assert!(matches!(
        decoder.decode(&mut receiver, &bytes),
        Err(DecodeError::UnsupportedVersion(_))
    ));
}

#[test]
fn unknown_root_discriminator_decodes_to_no_root() {
    let mut unit = TranslationUnit::new();
    unit_with_decls(Vec::new(), &mut unit);
    let mut bytes = encode(&unit);

    // The root tag is the fifth byte from the end.
    let tag_offset = bytes.len() - 5;
    bytes[tag_offset] = 0x7f;

    let mut decoder = AstDecoder::new();
    let mut receiver = TranslationUnit::new();
    decoder
        .decode(&mut receiver, &bytes)
        .expect("unknown discriminators are tolerated");
    assert_eq!(decoder.state(), DecoderState::Done);
    assert!(receiver.root().is_none());
}

#[test]
fn dangling_root_reference_is_rejected() {
    let mut unit = TranslationUnit::new();
    unit_with_decls(Vec::new(), &mut unit);
    let mut bytes = encode(&unit);

    // Point the root index past the unit table.
    let index_offset = bytes.len() - 4;
    bytes[index_offset..].copy_from_slice(&999u32.to_le_bytes());

    let mut decoder = AstDecoder::new();
    let mut receiver = TranslationUnit::new();
    assert!(matches!(
        decoder.decode(&mut receiver, &bytes),
        Err(DecodeError::DanglingReference { .. })
    ));
}

#[test]
fn decoder_states_progress_in_order() {
    let decoder = AstDecoder::new();
    assert_eq!(decoder.state(), DecoderState::Idle);

    let mut unit = TranslationUnit::new();
    unit_with_decls(Vec::new(), &mut unit);
    let bytes = encode(&unit);

    let mut decoder = AstDecoder::new();
    let mut receiver = TranslationUnit::new();
    decoder.decode(&mut receiver, &bytes).unwrap();
    assert_eq!(decoder.state(), DecoderState::Done);
}

#[test]
fn minimal_nodes_of_every_declaration_kind_round_trip() {
    let mut unit = TranslationUnit::new();
    let ident = unit.control_mut().get_identifier("n");
    let asm_text = unit.control_mut().string_literal("\"nop\"");

    let declarations = vec![
        Declaration::SimpleDeclaration {
            attribute_list: AttributeSpecifierRange::EMPTY,
            decl_specifier_list: SpecifierRange::EMPTY,
            init_declarator_list: crest_ast::InitDeclaratorRange::EMPTY,
            requires_clause: None,
        },
        Declaration::AsmDeclaration {
            literal: Some(asm_text),
            attribute_list: AttributeSpecifierRange::EMPTY,
            asm_qualifier_list: DeclarationRange::EMPTY,
            output_operand_list: DeclarationRange::EMPTY,
            input_operand_list: DeclarationRange::EMPTY,
            clobber_list: DeclarationRange::EMPTY,
            goto_label_list: DeclarationRange::EMPTY,
        },
        Declaration::NamespaceAliasDefinition {
            identifier: Some(ident),
            nested_name_specifier: None,
            unqualified_id: None,
        },
        Declaration::UsingDeclaration {
            using_declarator_list: crest_ast::UsingDeclaratorRange::EMPTY,
        },
        Declaration::UsingEnumDeclaration {
            enum_type_specifier: None,
        },
        Declaration::UsingDirective {
            attribute_list: AttributeSpecifierRange::EMPTY,
            nested_name_specifier: None,
            unqualified_id: None,
        },
        Declaration::StaticAssertDeclaration {
            literal: None,
            expression: None,
        },
        Declaration::AliasDeclaration {
            identifier: Some(ident),
            attribute_list: AttributeSpecifierRange::EMPTY,
            type_id: None,
        },
        Declaration::OpaqueEnumDeclaration {
            attribute_list: AttributeSpecifierRange::EMPTY,
            nested_name_specifier: None,
            unqualified_id: None,
            type_specifier_list: SpecifierRange::EMPTY,
        },
        Declaration::FunctionDefinition {
            attribute_list: AttributeSpecifierRange::EMPTY,
            decl_specifier_list: SpecifierRange::EMPTY,
            declarator: None,
            requires_clause: None,
            function_body: None,
        },
        Declaration::TemplateDeclaration {
            template_parameter_list: TemplateParameterRange::EMPTY,
            requires_clause: None,
            declaration: None,
        },
        Declaration::ConceptDefinition {
            identifier: Some(ident),
            expression: None,
        },
        Declaration::DeductionGuide {
            identifier: Some(ident),
            explicit_specifier: None,
            parameter_declaration_clause: None,
            template_id: None,
        },
        Declaration::ExplicitInstantiation { declaration: None },
        Declaration::ExportDeclaration { declaration: None },
        Declaration::ExportCompoundDeclaration {
            declaration_list: DeclarationRange::EMPTY,
        },
        Declaration::LinkageSpecification {
            string_literal: None,
            declaration_list: DeclarationRange::EMPTY,
        },
        Declaration::NamespaceDefinition {
            identifier: None,
            is_inline: true,
            attribute_list: AttributeSpecifierRange::EMPTY,
            nested_namespace_specifier_list: NestedNamespaceSpecifierRange::EMPTY,
            extra_attribute_list: AttributeSpecifierRange::EMPTY,
            declaration_list: DeclarationRange::EMPTY,
        },
        Declaration::EmptyDeclaration,
        Declaration::AttributeDeclaration {
            attribute_list: AttributeSpecifierRange::EMPTY,
        },
        Declaration::ModuleImportDeclaration {
            import_name: None,
            attribute_list: AttributeSpecifierRange::EMPTY,
        },
        Declaration::ParameterDeclaration {
            identifier: Some(ident),
            is_this_introduced: false,
            is_pack: true,
            attribute_list: AttributeSpecifierRange::EMPTY,
            type_specifier_list: SpecifierRange::EMPTY,
            declarator: None,
            expression: None,
        },
        Declaration::AccessDeclaration {
            access_specifier: TokenKind::Private,
        },
        Declaration::ForRangeDeclaration,
        Declaration::StructuredBindingDeclaration {
            attribute_list: AttributeSpecifierRange::EMPTY,
            decl_specifier_list: SpecifierRange::EMPTY,
            binding_list: crest_ast::UnqualifiedNameRange::EMPTY,
            initializer: None,
        },
        Declaration::AsmOperand {
            symbolic_name: Some(ident),
            constraint_literal: None,
            expression: None,
        },
        Declaration::AsmQualifier {
            qualifier: TokenKind::Volatile,
        },
        Declaration::AsmClobber {
            literal: Some(asm_text),
        },
        Declaration::AsmGotoLabel {
            identifier: Some(ident),
        },
    ];

    let ids: Vec<_> = declarations
        .into_iter()
        .map(|decl| unit.arena_mut().alloc_declaration(decl))
        .collect();
    unit_with_decls(ids, &mut unit);

    assert_round_trip(&unit);
}

#[test]
fn minimal_nodes_of_every_specifier_kind_round_trip() {
    let mut unit = TranslationUnit::new();

    let specifiers = vec![
        Specifier::TypedefSpecifier,
        Specifier::FriendSpecifier,
        Specifier::ConstevalSpecifier,
        Specifier::ConstinitSpecifier,
        Specifier::ConstexprSpecifier,
        Specifier::InlineSpecifier,
        Specifier::StaticSpecifier,
        Specifier::ExternSpecifier,
        Specifier::ThreadLocalSpecifier,
        Specifier::ThreadSpecifier,
        Specifier::MutableSpecifier,
        Specifier::VirtualSpecifier,
        Specifier::ExplicitSpecifier { expression: None },
        Specifier::AutoTypeSpecifier,
        Specifier::VoidTypeSpecifier,
        Specifier::SizeTypeSpecifier {
            specifier: TokenKind::Long,
        },
        Specifier::SignTypeSpecifier {
            specifier: TokenKind::Unsigned,
        },
        Specifier::VaListTypeSpecifier {
            specifier: TokenKind::BuiltinVaList,
        },
        Specifier::IntegralTypeSpecifier {
            specifier: TokenKind::Int,
        },
        Specifier::FloatingPointTypeSpecifier {
            specifier: TokenKind::Double,
        },
        Specifier::ComplexTypeSpecifier,
        Specifier::NamedTypeSpecifier {
            is_template_introduced: false,
            nested_name_specifier: None,
            unqualified_id: None,
        },
        Specifier::AtomicTypeSpecifier { type_id: None },
        Specifier::UnderlyingTypeSpecifier { type_id: None },
        Specifier::ElaboratedTypeSpecifier {
            class_key: TokenKind::Class,
            is_template_introduced: false,
            attribute_list: AttributeSpecifierRange::EMPTY,
            nested_name_specifier: None,
            unqualified_id: None,
        },
        Specifier::DecltypeAutoSpecifier,
        Specifier::DecltypeSpecifier { expression: None },
        Specifier::PlaceholderTypeSpecifier {
            type_constraint: None,
            specifier: None,
        },
        Specifier::ConstQualifier,
        Specifier::VolatileQualifier,
        Specifier::RestrictQualifier,
        Specifier::EnumSpecifier {
            attribute_list: AttributeSpecifierRange::EMPTY,
            nested_name_specifier: None,
            unqualified_id: None,
            type_specifier_list: SpecifierRange::EMPTY,
            enumerator_list: crest_ast::EnumeratorRange::EMPTY,
        },
        Specifier::ClassSpecifier {
            class_key: TokenKind::Union,
            is_final: true,
            attribute_list: AttributeSpecifierRange::EMPTY,
            nested_name_specifier: None,
            unqualified_id: None,
            base_specifier_list: crest_ast::BaseSpecifierRange::EMPTY,
            declaration_list: DeclarationRange::EMPTY,
        },
        Specifier::TypenameSpecifier {
            nested_name_specifier: None,
            unqualified_id: None,
        },
    ];

    let ids: Vec<_> = specifiers
        .into_iter()
        .map(|spec| unit.arena_mut().alloc_specifier(spec))
        .collect();
    let specs = unit.arena_mut().alloc_specifier_list(ids);
    let decl = unit
        .arena_mut()
        .alloc_declaration(Declaration::SimpleDeclaration {
            attribute_list: AttributeSpecifierRange::EMPTY,
            decl_specifier_list: specs,
            init_declarator_list: crest_ast::InitDeclaratorRange::EMPTY,
            requires_clause: None,
        });
    unit_with_decls(vec![decl], &mut unit);

    assert_round_trip(&unit);
}

#[test]
fn declarator_structure_round_trips() {
    // int (*p[3])(int, ...) noexcept -> the whole chunk/core/ptr-op family.
    let mut unit = TranslationUnit::new();
    let ident = unit.control_mut().get_identifier("p");
    let size = unit.control_mut().integer_literal("3");

    let name = unit
        .arena_mut()
        .alloc_unqualified_name(UnqualifiedName::NameId {
            identifier: Some(ident),
        });
    let core = unit.arena_mut().alloc_core_declarator(CoreDeclarator::IdDeclarator {
        is_template_introduced: false,
        nested_name_specifier: None,
        unqualified_id: Some(name),
        attribute_list: AttributeSpecifierRange::EMPTY,
    });
    let size_expr = unit
        .arena_mut()
        .alloc_expression(Expression::IntLiteralExpression {
            literal: Some(size),
        });
    let array_chunk = unit
        .arena_mut()
        .alloc_declarator_chunk(DeclaratorChunk::ArrayDeclaratorChunk {
            expression: Some(size_expr),
            attribute_list: AttributeSpecifierRange::EMPTY,
        });
    let noexcept_spec = unit
        .arena_mut()
        .alloc_exception_specifier(ExceptionSpecifier::NoexceptSpecifier { expression: None });
    let param_clause = unit
        .arena_mut()
        .alloc_parameter_declaration_clause(ParameterDeclarationClause {
            is_variadic: true,
            parameter_declaration_list: DeclarationRange::EMPTY,
        });
    let fn_chunk = unit
        .arena_mut()
        .alloc_declarator_chunk(DeclaratorChunk::FunctionDeclaratorChunk {
            is_final: false,
            is_override: false,
            is_pure: false,
            parameter_declaration_clause: Some(param_clause),
            cv_qualifier_list: SpecifierRange::EMPTY,
            exception_specifier: Some(noexcept_spec),
            attribute_list: AttributeSpecifierRange::EMPTY,
            trailing_return_type: None,
        });
    let ptr = unit.arena_mut().alloc_ptr_operator(PtrOperator::PointerOperator {
        attribute_list: AttributeSpecifierRange::EMPTY,
        cv_qualifier_list: SpecifierRange::EMPTY,
    });
    let ptr_ops = unit.arena_mut().alloc_ptr_operator_list([ptr]);
    let chunks = unit
        .arena_mut()
        .alloc_declarator_chunk_list([array_chunk, fn_chunk]);
    let inner = unit.arena_mut().alloc_declarator(Declarator {
        ptr_op_list: ptr_ops,
        core_declarator: Some(core),
        declarator_chunk_list: chunks,
    });
    let nested = unit
        .arena_mut()
        .alloc_core_declarator(CoreDeclarator::NestedDeclarator {
            declarator: Some(inner),
        });
    let outer = unit.arena_mut().alloc_declarator(Declarator {
        ptr_op_list: PtrOperatorRange::EMPTY,
        core_declarator: Some(nested),
        declarator_chunk_list: DeclaratorChunkRange::EMPTY,
    });
    let init = unit.arena_mut().alloc_init_declarator(InitDeclarator {
        declarator: Some(outer),
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
    unit_with_decls(vec![decl], &mut unit);

    let decoded = assert_round_trip(&unit);
    let output = print_unit(&decoded);
    assert!(output.contains("pointer-operator"));
    assert!(output.contains("array-declarator-chunk"));
    assert!(output.contains("function-declarator-chunk"));
    assert!(output.contains("is-variadic: true"));
    assert!(output.contains("noexcept-specifier"));
    assert!(output.contains("nested-declarator"));
}

#[test]
fn attributes_and_qualified_names_round_trip() {
    let mut unit = TranslationUnit::new();
    let ns_ident = unit.control_mut().get_identifier("std");
    let attr_ns = unit.control_mut().get_identifier("gnu");
    let attr_name = unit.control_mut().get_identifier("unused");

    let token = unit
        .arena_mut()
        .alloc_attribute_token(AttributeToken::ScopedAttributeToken {
            attribute_namespace: Some(attr_ns),
            identifier: Some(attr_name),
        });
    let attribute = unit.arena_mut().alloc_attribute(Attribute {
        attribute_token: Some(token),
        attribute_argument_clause: None,
    });
    let attributes = unit.arena_mut().alloc_attribute_list([attribute]);
    let cxx_attr = unit
        .arena_mut()
        .alloc_attribute_specifier(AttributeSpecifier::CxxAttribute {
            attribute_using_prefix: None,
            attribute_list: attributes,
        });
    let attrs = unit.arena_mut().alloc_attribute_specifier_list([cxx_attr]);

    let global = unit
        .arena_mut()
        .alloc_nested_name_specifier(NestedNameSpecifier::GlobalNestedNameSpecifier);
    let qualified = unit
        .arena_mut()
        .alloc_nested_name_specifier(NestedNameSpecifier::SimpleNestedNameSpecifier {
            identifier: Some(ns_ident),
            nested_name_specifier: Some(global),
        });
    let directive = unit
        .arena_mut()
        .alloc_declaration(Declaration::UsingDirective {
            attribute_list: attrs,
            nested_name_specifier: Some(qualified),
            unqualified_id: None,
        });
    unit_with_decls(vec![directive], &mut unit);

    let decoded = assert_round_trip(&unit);
    let output = print_unit(&decoded);
    assert!(output.contains("cxx-attribute"));
    assert!(output.contains("scoped-attribute-token"));
    assert!(output.contains("attribute-namespace: gnu"));
    assert!(output.contains("global-nested-name-specifier"));
    assert!(output.contains("identifier: std"));
}
