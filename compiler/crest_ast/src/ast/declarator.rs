//! Declarator structure: pointer operators, core declarators and the
//! function/array chunks that wrap them.

use crate::node_id::{
    AttributeSpecifierRange, CoreDeclaratorId, DeclaratorId, ExceptionSpecifierId, ExpressionId,
    NestedNameSpecifierId, ParameterDeclarationClauseId, SpecifierRange, TrailingReturnTypeId,
    UnqualifiedNameId,
};
use crate::TokenKind;

/// A pointer operator (`*`, `&`/`&&`, `C::*`).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum PtrOperator {
    PointerOperator {
        attribute_list: AttributeSpecifierRange,
        cv_qualifier_list: SpecifierRange,
    },
    ReferenceOperator {
        /// `&` or `&&`.
        ref_op: TokenKind,
        attribute_list: AttributeSpecifierRange,
    },
    PtrToMemberOperator {
        nested_name_specifier: Option<NestedNameSpecifierId>,
        attribute_list: AttributeSpecifierRange,
        cv_qualifier_list: SpecifierRange,
    },
}

impl PtrOperator {
    /// Kebab-case node name used by the dumper.
    pub fn name(&self) -> &'static str {
        match self {
            PtrOperator::PointerOperator { .. } => "pointer-operator",
            PtrOperator::ReferenceOperator { .. } => "reference-operator",
            PtrOperator::PtrToMemberOperator { .. } => "ptr-to-member-operator",
        }
    }
}

/// The core of a declarator: the declared name, a bitfield, a nested
/// declarator or a parameter pack.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum CoreDeclarator {
    BitfieldDeclarator {
        unqualified_id: Option<UnqualifiedNameId>,
        size_expression: Option<ExpressionId>,
    },
    ParameterPack {
        core_declarator: Option<CoreDeclaratorId>,
    },
    IdDeclarator {
        is_template_introduced: bool,
        nested_name_specifier: Option<NestedNameSpecifierId>,
        unqualified_id: Option<UnqualifiedNameId>,
        attribute_list: AttributeSpecifierRange,
    },
    NestedDeclarator {
        declarator: Option<DeclaratorId>,
    },
}

impl CoreDeclarator {
    /// Kebab-case node name used by the dumper.
    pub fn name(&self) -> &'static str {
        match self {
            CoreDeclarator::BitfieldDeclarator { .. } => "bitfield-declarator",
            CoreDeclarator::ParameterPack { .. } => "parameter-pack",
            CoreDeclarator::IdDeclarator { .. } => "id-declarator",
            CoreDeclarator::NestedDeclarator { .. } => "nested-declarator",
        }
    }
}

/// A declarator suffix: a function parameter clause or an array extent.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum DeclaratorChunk {
    FunctionDeclaratorChunk {
        is_final: bool,
        is_override: bool,
        is_pure: bool,
        parameter_declaration_clause: Option<ParameterDeclarationClauseId>,
        cv_qualifier_list: SpecifierRange,
        exception_specifier: Option<ExceptionSpecifierId>,
        attribute_list: AttributeSpecifierRange,
        trailing_return_type: Option<TrailingReturnTypeId>,
    },
    ArrayDeclaratorChunk {
        expression: Option<ExpressionId>,
        attribute_list: AttributeSpecifierRange,
    },
}

impl DeclaratorChunk {
    /// Kebab-case node name used by the dumper.
    pub fn name(&self) -> &'static str {
        match self {
            DeclaratorChunk::FunctionDeclaratorChunk { .. } => "function-declarator-chunk",
            DeclaratorChunk::ArrayDeclaratorChunk { .. } => "array-declarator-chunk",
        }
    }
}
