//! The smaller closed categories: function bodies, template arguments,
//! exception machinery, initializers, lambda captures and attributes.

use crate::node_id::{
    AttributeRange, AttributeSpecifierRange, AttributeUsingPrefixId, DeclaratorId, ExpressionId,
    HandlerRange, MemInitializerRange, NestedNameSpecifierId, SpecifierRange, StatementId,
    TypeConstraintId, TypeIdNodeId, UnqualifiedNameId,
};
use crate::{LiteralId, Name};

/// The body of a function definition.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum FunctionBody {
    DefaultFunctionBody,
    CompoundStatementFunctionBody {
        mem_initializer_list: MemInitializerRange,
        statement: Option<StatementId>,
    },
    TryStatementFunctionBody {
        mem_initializer_list: MemInitializerRange,
        statement: Option<StatementId>,
        handler_list: HandlerRange,
    },
    DeleteFunctionBody,
}

impl FunctionBody {
    /// Kebab-case node name used by the dumper.
    pub fn name(&self) -> &'static str {
        match self {
            FunctionBody::DefaultFunctionBody => "default-function-body",
            FunctionBody::CompoundStatementFunctionBody { .. } => {
                "compound-statement-function-body"
            }
            FunctionBody::TryStatementFunctionBody { .. } => "try-statement-function-body",
            FunctionBody::DeleteFunctionBody => "delete-function-body",
        }
    }
}

/// A syntactic template argument.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TemplateArgument {
    TypeTemplateArgument {
        type_id: Option<TypeIdNodeId>,
    },
    ExpressionTemplateArgument {
        expression: Option<ExpressionId>,
    },
}

impl TemplateArgument {
    /// Kebab-case node name used by the dumper.
    pub fn name(&self) -> &'static str {
        match self {
            TemplateArgument::TypeTemplateArgument { .. } => "type-template-argument",
            TemplateArgument::ExpressionTemplateArgument { .. } => "expression-template-argument",
        }
    }
}

/// An exception specification on a function declarator.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExceptionSpecifier {
    ThrowExceptionSpecifier,
    NoexceptSpecifier {
        expression: Option<ExpressionId>,
    },
}

impl ExceptionSpecifier {
    /// Kebab-case node name used by the dumper.
    pub fn name(&self) -> &'static str {
        match self {
            ExceptionSpecifier::ThrowExceptionSpecifier => "throw-exception-specifier",
            ExceptionSpecifier::NoexceptSpecifier { .. } => "noexcept-specifier",
        }
    }
}

/// A requirement inside a requires-expression body.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Requirement {
    SimpleRequirement {
        expression: Option<ExpressionId>,
    },
    CompoundRequirement {
        expression: Option<ExpressionId>,
        type_constraint: Option<TypeConstraintId>,
    },
    TypeRequirement {
        nested_name_specifier: Option<NestedNameSpecifierId>,
        unqualified_id: Option<UnqualifiedNameId>,
    },
    NestedRequirement {
        expression: Option<ExpressionId>,
    },
}

impl Requirement {
    /// Kebab-case node name used by the dumper.
    pub fn name(&self) -> &'static str {
        match self {
            Requirement::SimpleRequirement { .. } => "simple-requirement",
            Requirement::CompoundRequirement { .. } => "compound-requirement",
            Requirement::TypeRequirement { .. } => "type-requirement",
            Requirement::NestedRequirement { .. } => "nested-requirement",
        }
    }
}

/// The initializer of a new-expression.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum NewInitializer {
    NewParenInitializer {
        expression_list: crate::node_id::ExpressionRange,
    },
    NewBracedInitializer {
        /// Always a braced-init-list when present.
        braced_init_list: Option<ExpressionId>,
    },
}

impl NewInitializer {
    /// Kebab-case node name used by the dumper.
    pub fn name(&self) -> &'static str {
        match self {
            NewInitializer::NewParenInitializer { .. } => "new-paren-initializer",
            NewInitializer::NewBracedInitializer { .. } => "new-braced-initializer",
        }
    }
}

/// A member initializer in a constructor's ctor-initializer.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum MemInitializer {
    ParenMemInitializer {
        nested_name_specifier: Option<NestedNameSpecifierId>,
        unqualified_id: Option<UnqualifiedNameId>,
        expression_list: crate::node_id::ExpressionRange,
    },
    BracedMemInitializer {
        nested_name_specifier: Option<NestedNameSpecifierId>,
        unqualified_id: Option<UnqualifiedNameId>,
        /// Always a braced-init-list when present.
        braced_init_list: Option<ExpressionId>,
    },
}

impl MemInitializer {
    /// Kebab-case node name used by the dumper.
    pub fn name(&self) -> &'static str {
        match self {
            MemInitializer::ParenMemInitializer { .. } => "paren-mem-initializer",
            MemInitializer::BracedMemInitializer { .. } => "braced-mem-initializer",
        }
    }
}

/// A lambda capture.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LambdaCapture {
    ThisLambdaCapture,
    DerefThisLambdaCapture,
    SimpleLambdaCapture {
        identifier: Option<Name>,
    },
    RefLambdaCapture {
        identifier: Option<Name>,
    },
    RefInitLambdaCapture {
        identifier: Option<Name>,
        initializer: Option<ExpressionId>,
    },
    InitLambdaCapture {
        identifier: Option<Name>,
        initializer: Option<ExpressionId>,
    },
}

impl LambdaCapture {
    /// Kebab-case node name used by the dumper.
    pub fn name(&self) -> &'static str {
        match self {
            LambdaCapture::ThisLambdaCapture => "this-lambda-capture",
            LambdaCapture::DerefThisLambdaCapture => "deref-this-lambda-capture",
            LambdaCapture::SimpleLambdaCapture { .. } => "simple-lambda-capture",
            LambdaCapture::RefLambdaCapture { .. } => "ref-lambda-capture",
            LambdaCapture::RefInitLambdaCapture { .. } => "ref-init-lambda-capture",
            LambdaCapture::InitLambdaCapture { .. } => "init-lambda-capture",
        }
    }
}

/// The declaration of a catch-handler's exception object.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExceptionDeclaration {
    EllipsisExceptionDeclaration,
    TypeExceptionDeclaration {
        attribute_list: AttributeSpecifierRange,
        type_specifier_list: SpecifierRange,
        declarator: Option<DeclaratorId>,
    },
}

impl ExceptionDeclaration {
    /// Kebab-case node name used by the dumper.
    pub fn name(&self) -> &'static str {
        match self {
            ExceptionDeclaration::EllipsisExceptionDeclaration => "ellipsis-exception-declaration",
            ExceptionDeclaration::TypeExceptionDeclaration { .. } => "type-exception-declaration",
        }
    }
}

/// An attribute specifier: `[[...]]`, GCC attributes, `alignas`, `asm`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum AttributeSpecifier {
    CxxAttribute {
        attribute_using_prefix: Option<AttributeUsingPrefixId>,
        attribute_list: AttributeRange,
    },
    GccAttribute,
    AlignasAttribute {
        is_pack: bool,
        expression: Option<ExpressionId>,
    },
    AlignasTypeAttribute {
        is_pack: bool,
        type_id: Option<TypeIdNodeId>,
    },
    AsmAttribute {
        literal: Option<LiteralId>,
    },
}

impl AttributeSpecifier {
    /// Kebab-case node name used by the dumper.
    pub fn name(&self) -> &'static str {
        match self {
            AttributeSpecifier::CxxAttribute { .. } => "cxx-attribute",
            AttributeSpecifier::GccAttribute => "gcc-attribute",
            AttributeSpecifier::AlignasAttribute { .. } => "alignas-attribute",
            AttributeSpecifier::AlignasTypeAttribute { .. } => "alignas-type-attribute",
            AttributeSpecifier::AsmAttribute { .. } => "asm-attribute",
        }
    }
}

/// The name part of a single attribute.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum AttributeToken {
    ScopedAttributeToken {
        attribute_namespace: Option<Name>,
        identifier: Option<Name>,
    },
    SimpleAttributeToken {
        identifier: Option<Name>,
    },
}

impl AttributeToken {
    /// Kebab-case node name used by the dumper.
    pub fn name(&self) -> &'static str {
        match self {
            AttributeToken::ScopedAttributeToken { .. } => "scoped-attribute-token",
            AttributeToken::SimpleAttributeToken { .. } => "simple-attribute-token",
        }
    }
}
