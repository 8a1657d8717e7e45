//! The AST node family.
//!
//! Nodes fall into two groups:
//!
//! - **categories** — closed enums (declarations, statements, expressions,
//!   specifiers, ...) whose variants are the node kinds. A child slot of a
//!   category type can hold any variant of that category; on the wire it is
//!   a tagged reference.
//! - **fragments** — single-variant structs (declarator, type-id, handler,
//!   ...) referenced directly by id.
//!
//! Field declaration order is traversal order; the dumper, the visitor walk
//! functions and the codec all follow it.

mod decl;
mod declarator;
mod expr;
mod fragment;
mod misc;
mod name;
mod spec;

pub use decl::{Declaration, Statement, Unit};
pub use declarator::{CoreDeclarator, DeclaratorChunk, PtrOperator};
pub use expr::Expression;
pub use fragment::{
    Attribute, AttributeArgumentClause, AttributeUsingPrefix, BaseSpecifier, Declarator,
    Enumerator, GlobalModuleFragment, Handler, ImportName, InitDeclarator, LambdaSpecifier,
    ModuleDeclaration, ModuleName, ModulePartition, ModuleQualifier, NestedNamespaceSpecifier,
    NewPlacement, ParameterDeclarationClause, PrivateModuleFragment, RequiresClause,
    TrailingReturnType, TypeConstraint, TypeIdNode, UsingDeclarator,
};
pub use misc::{
    AttributeSpecifier, AttributeToken, ExceptionDeclaration, ExceptionSpecifier, FunctionBody,
    LambdaCapture, MemInitializer, NewInitializer, Requirement, TemplateArgument,
};
pub use name::{NestedNameSpecifier, UnqualifiedName};
pub use spec::{Specifier, TemplateParameter};

// Keep the handle types from growing: child slots and lists are the bulk of
// every node's footprint.
mod size_asserts {
    use crate::node_id::{ExpressionId, ExpressionRange};
    crate::static_assert_size!(ExpressionId, 4);
    crate::static_assert_size!(ExpressionRange, 8);
    crate::static_assert_size!(crate::TokenKind, 1);
}
