//! The type table.
//!
//! All types live in one pool and are referenced by [`TyId`]. Primitives are
//! pre-interned at fixed indices, compound types dedupe on their structural
//! key, and record-like types (class, union, namespace, enum, scoped enum)
//! are identity-typed: every `new_*` call mints a fresh entry that carries a
//! back-reference to its symbol.

use rustc_hash::FxHashMap;
use std::fmt;

use crate::node_id::{ExpressionId, NestedNameSpecifierId, TypeIdNodeId, UnqualifiedNameId};
use crate::symbols::SymbolId;

/// Interned type handle.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct TyId(u32);

impl TyId {
    // Primitive types sit at fixed indices, in pool insertion order.
    pub const VOID: TyId = TyId(0);
    pub const NULLPTR: TyId = TyId(1);
    pub const DECLTYPE_AUTO: TyId = TyId(2);
    pub const AUTO: TyId = TyId(3);
    pub const BOOL: TyId = TyId(4);
    pub const SIGNED_CHAR: TyId = TyId(5);
    pub const SHORT_INT: TyId = TyId(6);
    pub const INT: TyId = TyId(7);
    pub const LONG_INT: TyId = TyId(8);
    pub const LONG_LONG_INT: TyId = TyId(9);
    pub const UNSIGNED_CHAR: TyId = TyId(10);
    pub const UNSIGNED_SHORT_INT: TyId = TyId(11);
    pub const UNSIGNED_INT: TyId = TyId(12);
    pub const UNSIGNED_LONG_INT: TyId = TyId(13);
    pub const UNSIGNED_LONG_LONG_INT: TyId = TyId(14);
    pub const CHAR: TyId = TyId(15);
    pub const CHAR8: TyId = TyId(16);
    pub const CHAR16: TyId = TyId(17);
    pub const CHAR32: TyId = TyId(18);
    pub const WIDE_CHAR: TyId = TyId(19);
    pub const FLOAT: TyId = TyId(20);
    pub const DOUBLE: TyId = TyId(21);
    pub const LONG_DOUBLE: TyId = TyId(22);
    pub const CLASS_DESCRIPTION: TyId = TyId(23);

    /// First index minted for non-primitive types.
    const FIRST_DYNAMIC: u32 = 24;

    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        TyId(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for TyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TyId({})", self.0)
    }
}

/// cv-qualifier bits.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct CvQualifiers {
    pub is_const: bool,
    pub is_volatile: bool,
}

impl CvQualifiers {
    pub const NONE: CvQualifiers = CvQualifiers {
        is_const: false,
        is_volatile: false,
    };
    pub const CONST: CvQualifiers = CvQualifiers {
        is_const: true,
        is_volatile: false,
    };
    pub const VOLATILE: CvQualifiers = CvQualifiers {
        is_const: false,
        is_volatile: true,
    };
    pub const CONST_VOLATILE: CvQualifiers = CvQualifiers {
        is_const: true,
        is_volatile: true,
    };
}

/// Function ref-qualifier.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum RefQualifier {
    #[default]
    None,
    Lvalue,
    Rvalue,
}

/// A type term.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Ty {
    // Primitives (singletons at fixed indices).
    Void,
    Nullptr,
    DecltypeAuto,
    Auto,
    Bool,
    SignedChar,
    ShortInt,
    Int,
    LongInt,
    LongLongInt,
    UnsignedChar,
    UnsignedShortInt,
    UnsignedInt,
    UnsignedLongInt,
    UnsignedLongLongInt,
    Char,
    Char8,
    Char16,
    Char32,
    WideChar,
    Float,
    Double,
    LongDouble,
    ClassDescription,

    // Compound, interned by structural key.
    Qual {
        element: TyId,
        cv: CvQualifiers,
    },
    BoundedArray {
        element: TyId,
        size: u64,
    },
    UnboundedArray {
        element: TyId,
    },
    Pointer {
        element: TyId,
    },
    LvalueReference {
        element: TyId,
    },
    RvalueReference {
        element: TyId,
    },
    Function {
        returns: TyId,
        parameters: Vec<TyId>,
        is_variadic: bool,
        cv: CvQualifiers,
        ref_qualifier: RefQualifier,
        is_noexcept: bool,
    },
    MemberObjectPointer {
        class: TyId,
        element: TyId,
    },
    MemberFunctionPointer {
        class: TyId,
        function: TyId,
    },
    /// A name the parser could not resolve yet; keyed on the AST nodes.
    UnresolvedName {
        nested_name_specifier: Option<NestedNameSpecifierId>,
        unqualified_id: Option<UnqualifiedNameId>,
    },
    /// An array whose extent is a dependent expression.
    UnresolvedBoundedArray {
        element: TyId,
        size_expression: Option<ExpressionId>,
    },
    /// `__underlying_type(T)` before the enum is known.
    UnresolvedUnderlying {
        type_id: Option<TypeIdNodeId>,
    },

    // Record-like, identity-typed (never interned).
    Class {
        symbol: SymbolId,
    },
    Union {
        symbol: SymbolId,
    },
    Namespace {
        symbol: SymbolId,
    },
    Enum {
        symbol: SymbolId,
    },
    ScopedEnum {
        symbol: SymbolId,
    },
}

impl Ty {
    /// The symbol of a record-like type.
    pub fn symbol(&self) -> Option<SymbolId> {
        match *self {
            Ty::Class { symbol }
            | Ty::Union { symbol }
            | Ty::Namespace { symbol }
            | Ty::Enum { symbol }
            | Ty::ScopedEnum { symbol } => Some(symbol),
            _ => None,
        }
    }
}

/// The pool of all types of one translation unit.
pub struct TypePool {
    items: Vec<Ty>,
    /// Structural key to handle, for the interned subset only.
    dedup: FxHashMap<Ty, TyId>,
}

impl TypePool {
    /// Create a pool with the primitives pre-interned at their fixed
    /// indices.
    pub fn new() -> Self {
        let mut pool = TypePool {
            items: Vec::with_capacity(64),
            dedup: FxHashMap::default(),
        };

        // Primitive insertion order must match the TyId constants.
        let primitives = [
            Ty::Void,
            Ty::Nullptr,
            Ty::DecltypeAuto,
            Ty::Auto,
            Ty::Bool,
            Ty::SignedChar,
            Ty::ShortInt,
            Ty::Int,
            Ty::LongInt,
            Ty::LongLongInt,
            Ty::UnsignedChar,
            Ty::UnsignedShortInt,
            Ty::UnsignedInt,
            Ty::UnsignedLongInt,
            Ty::UnsignedLongLongInt,
            Ty::Char,
            Ty::Char8,
            Ty::Char16,
            Ty::Char32,
            Ty::WideChar,
            Ty::Float,
            Ty::Double,
            Ty::LongDouble,
            Ty::ClassDescription,
        ];
        for ty in primitives {
            let id = TyId(pool.items.len() as u32);
            pool.dedup.insert(ty.clone(), id);
            pool.items.push(ty);
        }
        debug_assert_eq!(pool.items.len() as u32, TyId::FIRST_DYNAMIC);

        pool
    }

    /// Get-or-create an interned type from its structural key.
    ///
    /// Record-like terms must go through the `new_*` constructors instead;
    /// interning them would merge distinct record types.
    pub fn intern(&mut self, ty: Ty) -> TyId {
        debug_assert!(ty.symbol().is_none(), "record types are identity-typed");
        if let Some(&id) = self.dedup.get(&ty) {
            return id;
        }
        let id = self.mint(ty.clone());
        self.dedup.insert(ty, id);
        id
    }

    /// Mint a fresh identity-typed entry (record-like types).
    pub fn mint(&mut self, ty: Ty) -> TyId {
        let id = TyId(
            u32::try_from(self.items.len()).unwrap_or_else(|_| overflow(self.items.len())),
        );
        self.items.push(ty);
        id
    }

    /// Look up a type term.
    ///
    /// # Panics
    /// Panics if `id` was not issued by this pool.
    #[inline]
    #[track_caller]
    pub fn get(&self, id: TyId) -> &Ty {
        &self.items[id.0 as usize]
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when only the primitives are present.
    pub fn is_empty(&self) -> bool {
        self.items.len() as u32 <= TyId::FIRST_DYNAMIC
    }
}

#[cold]
#[inline(never)]
fn overflow(count: usize) -> ! {
    panic!("type pool exceeded capacity: {count} types")
}

impl Default for TypePool {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitives_sit_at_fixed_indices() {
        let pool = TypePool::new();
        assert!(matches!(pool.get(TyId::VOID), Ty::Void));
        assert!(matches!(pool.get(TyId::INT), Ty::Int));
        assert!(matches!(pool.get(TyId::WIDE_CHAR), Ty::WideChar));
        assert!(matches!(pool.get(TyId::CLASS_DESCRIPTION), Ty::ClassDescription));
    }

    #[test]
    fn compound_types_dedupe_structurally() {
        let mut pool = TypePool::new();
        let p1 = pool.intern(Ty::Pointer { element: TyId::INT });
        let p2 = pool.intern(Ty::Pointer { element: TyId::INT });
        let p3 = pool.intern(Ty::Pointer { element: TyId::BOOL });
        assert_eq!(p1, p2);
        assert_ne!(p1, p3);
    }

    #[test]
    fn function_type_key_includes_everything() {
        let mut pool = TypePool::new();
        let base = Ty::Function {
            returns: TyId::VOID,
            parameters: vec![TyId::INT],
            is_variadic: false,
            cv: CvQualifiers::NONE,
            ref_qualifier: RefQualifier::None,
            is_noexcept: false,
        };
        let a = pool.intern(base.clone());
        let b = pool.intern(base);
        assert_eq!(a, b);

        let noexcept = Ty::Function {
            returns: TyId::VOID,
            parameters: vec![TyId::INT],
            is_variadic: false,
            cv: CvQualifiers::NONE,
            ref_qualifier: RefQualifier::None,
            is_noexcept: true,
        };
        assert_ne!(a, pool.intern(noexcept));

        let variadic = Ty::Function {
            returns: TyId::VOID,
            parameters: vec![TyId::INT],
            is_variadic: true,
            cv: CvQualifiers::NONE,
            ref_qualifier: RefQualifier::None,
            is_noexcept: false,
        };
        assert_ne!(a, pool.intern(variadic));
    }

    #[test]
    fn minted_types_are_identity_typed() {
        let mut pool = TypePool::new();
        let a = pool.mint(Ty::Class {
            symbol: SymbolId::from_raw(0),
        });
        let b = pool.mint(Ty::Class {
            symbol: SymbolId::from_raw(0),
        });
        assert_ne!(a, b);
    }

    #[test]
    fn qualifier_bits_are_part_of_the_key() {
        let mut pool = TypePool::new();
        let const_int = pool.intern(Ty::Qual {
            element: TyId::INT,
            cv: CvQualifiers::CONST,
        });
        let cv_int = pool.intern(Ty::Qual {
            element: TyId::INT,
            cv: CvQualifiers::CONST_VOLATILE,
        });
        assert_ne!(const_int, cv_int);
    }
}
