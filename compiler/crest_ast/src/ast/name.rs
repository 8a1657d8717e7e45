//! Name syntax: unqualified ids and nested-name-specifier chains.

use crate::node_id::{
    NestedNameSpecifierId, SpecifierId, TemplateArgumentRange, TypeIdNodeId, UnqualifiedNameId,
};
use crate::{LiteralId, Name, TokenKind};

/// An unqualified id: the terminal part of a (possibly qualified) name.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnqualifiedName {
    NameId {
        identifier: Option<Name>,
    },
    DestructorId {
        id: Option<UnqualifiedNameId>,
    },
    DecltypeId {
        /// Always a decltype-specifier when present.
        decltype_specifier: Option<SpecifierId>,
    },
    OperatorFunctionId {
        /// The spelled operator (`+`, `()`, `new[]`, ...).
        op: TokenKind,
    },
    LiteralOperatorId {
        literal: Option<LiteralId>,
        identifier: Option<Name>,
    },
    ConversionFunctionId {
        type_id: Option<TypeIdNodeId>,
    },
    SimpleTemplateId {
        identifier: Option<Name>,
        template_argument_list: TemplateArgumentRange,
    },
    LiteralOperatorTemplateId {
        /// Always a literal-operator-id when present.
        literal_operator_id: Option<UnqualifiedNameId>,
        template_argument_list: TemplateArgumentRange,
    },
    OperatorFunctionTemplateId {
        /// Always an operator-function-id when present.
        operator_function_id: Option<UnqualifiedNameId>,
        template_argument_list: TemplateArgumentRange,
    },
}

impl UnqualifiedName {
    /// Kebab-case node name used by the dumper.
    pub fn name(&self) -> &'static str {
        match self {
            UnqualifiedName::NameId { .. } => "name-id",
            UnqualifiedName::DestructorId { .. } => "destructor-id",
            UnqualifiedName::DecltypeId { .. } => "decltype-id",
            UnqualifiedName::OperatorFunctionId { .. } => "operator-function-id",
            UnqualifiedName::LiteralOperatorId { .. } => "literal-operator-id",
            UnqualifiedName::ConversionFunctionId { .. } => "conversion-function-id",
            UnqualifiedName::SimpleTemplateId { .. } => "simple-template-id",
            UnqualifiedName::LiteralOperatorTemplateId { .. } => "literal-operator-template-id",
            UnqualifiedName::OperatorFunctionTemplateId { .. } => "operator-function-template-id",
        }
    }
}

/// A qualified-name prefix (`::`, `A::`, `decltype(e)::`, `T<int>::`).
///
/// The chain grows leftwards: each variant's `nested_name_specifier` is the
/// prefix before it.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum NestedNameSpecifier {
    GlobalNestedNameSpecifier,
    SimpleNestedNameSpecifier {
        identifier: Option<Name>,
        nested_name_specifier: Option<NestedNameSpecifierId>,
    },
    DecltypeNestedNameSpecifier {
        nested_name_specifier: Option<NestedNameSpecifierId>,
        decltype_specifier: Option<SpecifierId>,
    },
    TemplateNestedNameSpecifier {
        is_template_introduced: bool,
        nested_name_specifier: Option<NestedNameSpecifierId>,
        /// Always a simple-template-id when present.
        template_id: Option<UnqualifiedNameId>,
    },
}

impl NestedNameSpecifier {
    /// Kebab-case node name used by the dumper.
    pub fn name(&self) -> &'static str {
        match self {
            NestedNameSpecifier::GlobalNestedNameSpecifier => "global-nested-name-specifier",
            NestedNameSpecifier::SimpleNestedNameSpecifier { .. } => "simple-nested-name-specifier",
            NestedNameSpecifier::DecltypeNestedNameSpecifier { .. } => {
                "decltype-nested-name-specifier"
            }
            NestedNameSpecifier::TemplateNestedNameSpecifier { .. } => {
                "template-nested-name-specifier"
            }
        }
    }
}
