//! Typed node ids and list ranges for the flat AST.
//!
//! Every node category gets its own 32-bit index type and a compact
//! `(start: u32, len: u16)` range type for flattened child lists. Ids are
//! 4 bytes, equality is an integer compare, and list order is source order.

use std::fmt;

/// Declares an id type and its companion range type for one node category.
macro_rules! define_node_id {
    ($(#[$meta:meta])* $id:ident, $range:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
        #[repr(transparent)]
        pub struct $id(u32);

        impl $id {
            /// Sentinel for "no node".
            pub const INVALID: $id = $id(u32::MAX);

            #[inline]
            pub const fn new(index: u32) -> Self {
                $id(index)
            }

            #[inline]
            pub const fn index(self) -> usize {
                self.0 as usize
            }

            #[inline]
            pub const fn raw(self) -> u32 {
                self.0
            }

            #[inline]
            pub const fn is_valid(self) -> bool {
                self.0 != u32::MAX
            }
        }

        impl fmt::Debug for $id {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.is_valid() {
                    write!(f, concat!(stringify!($id), "({})"), self.0)
                } else {
                    write!(f, concat!(stringify!($id), "::INVALID"))
                }
            }
        }

        impl Default for $id {
            fn default() -> Self {
                Self::INVALID
            }
        }

        /// Range into the flattened list storage for this category.
        #[derive(Copy, Clone, Eq, PartialEq, Hash)]
        #[repr(C)]
        pub struct $range {
            pub start: u32,
            pub len: u16,
        }

        impl $range {
            /// The empty list.
            pub const EMPTY: $range = $range { start: 0, len: 0 };

            #[inline]
            pub const fn new(start: u32, len: u16) -> Self {
                $range { start, len }
            }

            #[inline]
            pub const fn is_empty(&self) -> bool {
                self.len == 0
            }

            #[inline]
            pub const fn len(&self) -> usize {
                self.len as usize
            }
        }

        impl fmt::Debug for $range {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(
                    f,
                    concat!(stringify!($range), "({}..+{})"),
                    self.start, self.len
                )
            }
        }

        impl Default for $range {
            fn default() -> Self {
                Self::EMPTY
            }
        }
    };
}

// Polymorphic categories.
define_node_id!(
    /// Index of a [`crate::ast::Unit`] in the arena.
    UnitId, UnitRange
);
define_node_id!(
    /// Index of a [`crate::ast::Declaration`] in the arena.
    DeclarationId, DeclarationRange
);
define_node_id!(
    /// Index of a [`crate::ast::Statement`] in the arena.
    StatementId, StatementRange
);
define_node_id!(
    /// Index of an [`crate::ast::Expression`] in the arena.
    ExpressionId, ExpressionRange
);
define_node_id!(
    /// Index of a [`crate::ast::Specifier`] in the arena.
    SpecifierId, SpecifierRange
);
define_node_id!(
    /// Index of a [`crate::ast::TemplateParameter`] in the arena.
    TemplateParameterId, TemplateParameterRange
);
define_node_id!(
    /// Index of a [`crate::ast::PtrOperator`] in the arena.
    PtrOperatorId, PtrOperatorRange
);
define_node_id!(
    /// Index of a [`crate::ast::CoreDeclarator`] in the arena.
    CoreDeclaratorId, CoreDeclaratorRange
);
define_node_id!(
    /// Index of a [`crate::ast::DeclaratorChunk`] in the arena.
    DeclaratorChunkId, DeclaratorChunkRange
);
define_node_id!(
    /// Index of an [`crate::ast::UnqualifiedName`] in the arena.
    UnqualifiedNameId, UnqualifiedNameRange
);
define_node_id!(
    /// Index of a [`crate::ast::NestedNameSpecifier`] in the arena.
    NestedNameSpecifierId, NestedNameSpecifierRange
);
define_node_id!(
    /// Index of a [`crate::ast::FunctionBody`] in the arena.
    FunctionBodyId, FunctionBodyRange
);
define_node_id!(
    /// Index of a [`crate::ast::TemplateArgument`] in the arena.
    TemplateArgumentId, TemplateArgumentRange
);
define_node_id!(
    /// Index of an [`crate::ast::ExceptionSpecifier`] in the arena.
    ExceptionSpecifierId, ExceptionSpecifierRange
);
define_node_id!(
    /// Index of a [`crate::ast::Requirement`] in the arena.
    RequirementId, RequirementRange
);
define_node_id!(
    /// Index of a [`crate::ast::NewInitializer`] in the arena.
    NewInitializerId, NewInitializerRange
);
define_node_id!(
    /// Index of a [`crate::ast::MemInitializer`] in the arena.
    MemInitializerId, MemInitializerRange
);
define_node_id!(
    /// Index of a [`crate::ast::LambdaCapture`] in the arena.
    LambdaCaptureId, LambdaCaptureRange
);
define_node_id!(
    /// Index of an [`crate::ast::ExceptionDeclaration`] in the arena.
    ExceptionDeclarationId, ExceptionDeclarationRange
);
define_node_id!(
    /// Index of an [`crate::ast::AttributeSpecifier`] in the arena.
    AttributeSpecifierId, AttributeSpecifierRange
);
define_node_id!(
    /// Index of an [`crate::ast::AttributeToken`] in the arena.
    AttributeTokenId, AttributeTokenRange
);

// Single-variant fragments.
define_node_id!(GlobalModuleFragmentId, GlobalModuleFragmentRange);
define_node_id!(PrivateModuleFragmentId, PrivateModuleFragmentRange);
define_node_id!(ModuleDeclarationId, ModuleDeclarationRange);
define_node_id!(ModuleNameId, ModuleNameRange);
define_node_id!(ModuleQualifierId, ModuleQualifierRange);
define_node_id!(ModulePartitionId, ModulePartitionRange);
define_node_id!(ImportNameId, ImportNameRange);
define_node_id!(InitDeclaratorId, InitDeclaratorRange);
define_node_id!(DeclaratorId, DeclaratorRange);
define_node_id!(UsingDeclaratorId, UsingDeclaratorRange);
define_node_id!(EnumeratorId, EnumeratorRange);
define_node_id!(TypeIdNodeId, TypeIdNodeRange);
define_node_id!(HandlerId, HandlerRange);
define_node_id!(BaseSpecifierId, BaseSpecifierRange);
define_node_id!(RequiresClauseId, RequiresClauseRange);
define_node_id!(ParameterDeclarationClauseId, ParameterDeclarationClauseRange);
define_node_id!(TrailingReturnTypeId, TrailingReturnTypeRange);
define_node_id!(LambdaSpecifierId, LambdaSpecifierRange);
define_node_id!(TypeConstraintId, TypeConstraintRange);
define_node_id!(AttributeArgumentClauseId, AttributeArgumentClauseRange);
define_node_id!(AttributeId, AttributeRange);
define_node_id!(AttributeUsingPrefixId, AttributeUsingPrefixRange);
define_node_id!(NewPlacementId, NewPlacementRange);
define_node_id!(NestedNamespaceSpecifierId, NestedNamespaceSpecifierRange);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_basics() {
        let id = ExpressionId::new(7);
        assert!(id.is_valid());
        assert_eq!(id.index(), 7);
        assert_eq!(id.raw(), 7);
        assert!(!ExpressionId::INVALID.is_valid());
        assert_eq!(ExpressionId::default(), ExpressionId::INVALID);
    }

    #[test]
    fn range_basics() {
        let range = DeclarationRange::new(3, 2);
        assert_eq!(range.len(), 2);
        assert!(!range.is_empty());
        assert!(DeclarationRange::EMPTY.is_empty());
    }

    #[test]
    fn ids_hash_by_value() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(StatementId::new(1));
        set.insert(StatementId::new(1));
        set.insert(StatementId::new(2));
        assert_eq!(set.len(), 2);
    }
}
