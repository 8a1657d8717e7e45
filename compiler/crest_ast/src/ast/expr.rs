//! Expression nodes.
//!
//! The largest category: literals, names, lambdas, folds, casts, the
//! allocation expressions and the initializer clauses. Field order is
//! traversal order, which the dumper and the codec both rely on.

use crate::node_id::{
    AttributeSpecifierRange, DeclaratorId, ExceptionSpecifierId, ExpressionId, ExpressionRange,
    LambdaCaptureRange, LambdaSpecifierRange, NestedNameSpecifierId, NewInitializerId,
    NewPlacementId, ParameterDeclarationClauseId, RequirementRange, RequiresClauseId,
    SpecifierId, SpecifierRange, StatementId, TemplateParameterRange, TrailingReturnTypeId,
    TypeIdNodeId, TypeIdNodeRange, UnqualifiedNameId,
};
use crate::{BuiltinKind, LiteralId, Name, TokenKind};

/// An expression.
///
/// The initializer clauses (`EqualInitializer`, `BracedInitList`,
/// `ParenInitializer`) are expressions so that every initializer position is
/// a single child slot.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Expression {
    CharLiteralExpression {
        literal: Option<LiteralId>,
    },
    BoolLiteralExpression {
        is_true: bool,
    },
    IntLiteralExpression {
        literal: Option<LiteralId>,
    },
    FloatLiteralExpression {
        literal: Option<LiteralId>,
    },
    NullptrLiteralExpression {
        /// The `nullptr` keyword kind; `EofSymbol` when absent.
        literal: TokenKind,
    },
    StringLiteralExpression {
        literal: Option<LiteralId>,
    },
    UserDefinedStringLiteralExpression {
        literal: Option<LiteralId>,
    },
    ThisExpression,
    NestedExpression {
        expression: Option<ExpressionId>,
    },
    IdExpression {
        is_template_introduced: bool,
        nested_name_specifier: Option<NestedNameSpecifierId>,
        unqualified_id: Option<UnqualifiedNameId>,
    },
    LambdaExpression {
        /// `=` or `&`; `EofSymbol` when there is no capture default.
        capture_default: TokenKind,
        capture_list: LambdaCaptureRange,
        template_parameter_list: TemplateParameterRange,
        template_requires_clause: Option<RequiresClauseId>,
        parameter_declaration_clause: Option<ParameterDeclarationClauseId>,
        lambda_specifier_list: LambdaSpecifierRange,
        exception_specifier: Option<ExceptionSpecifierId>,
        attribute_list: AttributeSpecifierRange,
        trailing_return_type: Option<TrailingReturnTypeId>,
        requires_clause: Option<RequiresClauseId>,
        statement: Option<StatementId>,
    },
    FoldExpression {
        op: TokenKind,
        fold_op: TokenKind,
        left_expression: Option<ExpressionId>,
        right_expression: Option<ExpressionId>,
    },
    RightFoldExpression {
        op: TokenKind,
        expression: Option<ExpressionId>,
    },
    LeftFoldExpression {
        op: TokenKind,
        expression: Option<ExpressionId>,
    },
    RequiresExpression {
        parameter_declaration_clause: Option<ParameterDeclarationClauseId>,
        requirement_list: RequirementRange,
    },
    SubscriptExpression {
        base_expression: Option<ExpressionId>,
        index_expression: Option<ExpressionId>,
    },
    CallExpression {
        base_expression: Option<ExpressionId>,
        expression_list: ExpressionRange,
    },
    TypeConstruction {
        type_specifier: Option<SpecifierId>,
        expression_list: ExpressionRange,
    },
    BracedTypeConstruction {
        type_specifier: Option<SpecifierId>,
        /// Always a braced-init-list when present.
        braced_init_list: Option<ExpressionId>,
    },
    MemberExpression {
        /// `.` or `->`; `EofSymbol` when absent.
        access_op: TokenKind,
        base_expression: Option<ExpressionId>,
        member_id: Option<UnqualifiedNameId>,
    },
    PostIncrExpression {
        /// `++` or `--`.
        op: TokenKind,
        base_expression: Option<ExpressionId>,
    },
    CppCastExpression {
        type_id: Option<TypeIdNodeId>,
        expression: Option<ExpressionId>,
    },
    BuiltinBitCastExpression {
        type_id: Option<TypeIdNodeId>,
        expression: Option<ExpressionId>,
    },
    TypeidExpression {
        expression: Option<ExpressionId>,
    },
    TypeidOfTypeExpression {
        type_id: Option<TypeIdNodeId>,
    },
    UnaryExpression {
        op: TokenKind,
        expression: Option<ExpressionId>,
    },
    AwaitExpression {
        expression: Option<ExpressionId>,
    },
    SizeofExpression {
        expression: Option<ExpressionId>,
    },
    SizeofTypeExpression {
        type_id: Option<TypeIdNodeId>,
    },
    SizeofPackExpression {
        identifier: Option<Name>,
    },
    AlignofTypeExpression {
        type_id: Option<TypeIdNodeId>,
    },
    AlignofExpression {
        expression: Option<ExpressionId>,
    },
    NoexceptExpression {
        expression: Option<ExpressionId>,
    },
    NewExpression {
        new_placement: Option<NewPlacementId>,
        type_specifier_list: SpecifierRange,
        declarator: Option<DeclaratorId>,
        new_initializer: Option<NewInitializerId>,
    },
    DeleteExpression {
        expression: Option<ExpressionId>,
    },
    CastExpression {
        type_id: Option<TypeIdNodeId>,
        expression: Option<ExpressionId>,
    },
    ImplicitCastExpression {
        expression: Option<ExpressionId>,
    },
    BinaryExpression {
        op: TokenKind,
        left_expression: Option<ExpressionId>,
        right_expression: Option<ExpressionId>,
    },
    ConditionalExpression {
        condition: Option<ExpressionId>,
        iftrue_expression: Option<ExpressionId>,
        iffalse_expression: Option<ExpressionId>,
    },
    YieldExpression {
        expression: Option<ExpressionId>,
    },
    ThrowExpression {
        expression: Option<ExpressionId>,
    },
    AssignmentExpression {
        op: TokenKind,
        left_expression: Option<ExpressionId>,
        right_expression: Option<ExpressionId>,
    },
    PackExpansionExpression {
        expression: Option<ExpressionId>,
    },
    DesignatedInitializerClause {
        identifier: Option<Name>,
        initializer: Option<ExpressionId>,
    },
    TypeTraitsExpression {
        /// The probed trait; `BuiltinKind::Identifier` when absent.
        type_trait: BuiltinKind,
        type_id_list: TypeIdNodeRange,
    },
    ConditionExpression {
        attribute_list: AttributeSpecifierRange,
        decl_specifier_list: SpecifierRange,
        declarator: Option<DeclaratorId>,
        initializer: Option<ExpressionId>,
    },
    EqualInitializer {
        expression: Option<ExpressionId>,
    },
    BracedInitList {
        expression_list: ExpressionRange,
    },
    ParenInitializer {
        expression_list: ExpressionRange,
    },
}

impl Expression {
    /// Kebab-case node name used by the dumper.
    pub fn name(&self) -> &'static str {
        match self {
            Expression::CharLiteralExpression { .. } => "char-literal-expression",
            Expression::BoolLiteralExpression { .. } => "bool-literal-expression",
            Expression::IntLiteralExpression { .. } => "int-literal-expression",
            Expression::FloatLiteralExpression { .. } => "float-literal-expression",
            Expression::NullptrLiteralExpression { .. } => "nullptr-literal-expression",
            Expression::StringLiteralExpression { .. } => "string-literal-expression",
            Expression::UserDefinedStringLiteralExpression { .. } => {
                "user-defined-string-literal-expression"
            }
            Expression::ThisExpression => "this-expression",
            Expression::NestedExpression { .. } => "nested-expression",
            Expression::IdExpression { .. } => "id-expression",
            Expression::LambdaExpression { .. } => "lambda-expression",
            Expression::FoldExpression { .. } => "fold-expression",
            Expression::RightFoldExpression { .. } => "right-fold-expression",
            Expression::LeftFoldExpression { .. } => "left-fold-expression",
            Expression::RequiresExpression { .. } => "requires-expression",
            Expression::SubscriptExpression { .. } => "subscript-expression",
            Expression::CallExpression { .. } => "call-expression",
            Expression::TypeConstruction { .. } => "type-construction",
            Expression::BracedTypeConstruction { .. } => "braced-type-construction",
            Expression::MemberExpression { .. } => "member-expression",
            Expression::PostIncrExpression { .. } => "post-incr-expression",
            Expression::CppCastExpression { .. } => "cpp-cast-expression",
            Expression::BuiltinBitCastExpression { .. } => "builtin-bit-cast-expression",
            Expression::TypeidExpression { .. } => "typeid-expression",
            Expression::TypeidOfTypeExpression { .. } => "typeid-of-type-expression",
            Expression::UnaryExpression { .. } => "unary-expression",
            Expression::AwaitExpression { .. } => "await-expression",
            Expression::SizeofExpression { .. } => "sizeof-expression",
            Expression::SizeofTypeExpression { .. } => "sizeof-type-expression",
            Expression::SizeofPackExpression { .. } => "sizeof-pack-expression",
            Expression::AlignofTypeExpression { .. } => "alignof-type-expression",
            Expression::AlignofExpression { .. } => "alignof-expression",
            Expression::NoexceptExpression { .. } => "noexcept-expression",
            Expression::NewExpression { .. } => "new-expression",
            Expression::DeleteExpression { .. } => "delete-expression",
            Expression::CastExpression { .. } => "cast-expression",
            Expression::ImplicitCastExpression { .. } => "implicit-cast-expression",
            Expression::BinaryExpression { .. } => "binary-expression",
            Expression::ConditionalExpression { .. } => "conditional-expression",
            Expression::YieldExpression { .. } => "yield-expression",
            Expression::ThrowExpression { .. } => "throw-expression",
            Expression::AssignmentExpression { .. } => "assignment-expression",
            Expression::PackExpansionExpression { .. } => "pack-expansion-expression",
            Expression::DesignatedInitializerClause { .. } => "designated-initializer-clause",
            Expression::TypeTraitsExpression { .. } => "type-traits-expression",
            Expression::ConditionExpression { .. } => "condition-expression",
            Expression::EqualInitializer { .. } => "equal-initializer",
            Expression::BracedInitList { .. } => "braced-init-list",
            Expression::ParenInitializer { .. } => "paren-initializer",
        }
    }
}
