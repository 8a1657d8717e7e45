//! Crest front-end core: the AST and everything that gives it identity.
//!
//! This crate owns the data model every front-end phase consumes:
//!
//! - [`TokenKind`]/[`BuiltinKind`] — the token vocabulary and canonical
//!   spellings (AST scalar payloads);
//! - [`AstArena`] — flat per-category node storage with typed 32-bit ids;
//! - [`ast`] — the closed node family (21 categories, 24 fragments);
//! - [`StringInterner`], [`LiteralStore`], [`NamePool`], [`TypePool`],
//!   [`SymbolTable`] — the interning tables, owned by one [`Control`] per
//!   translation unit;
//! - [`visitor`] — declared-order traversal;
//! - [`AstPrinter`]/[`print_unit`] — the canonical indented dump used by
//!   the golden tests.
//!
//! # Identity model
//!
//! Everything interned compares by 32-bit handle: equal spellings, equal
//! structural keys, equal handles. Record-like types are the exception by
//! design; each is a fresh object wired to its symbol.
//!
//! # Concurrency
//!
//! One translation unit, one thread. The arena and control are mutated by
//! their owner only; nothing here locks, and handles never cross units.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in bulk-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod arena;
pub mod ast;
mod control;
mod interner;
mod literals;
mod names;
mod node_id;
mod printer;
mod symbols;
mod token;
mod types;
mod unit;
pub mod visitor;

pub use arena::AstArena;
pub use control::Control;
pub use interner::{Name, StringInterner};
pub use literals::{Literal, LiteralId, LiteralKind, LiteralStore, LiteralValue};
pub use names::{NameId, NameItem, NamePool, TemplateArg};
pub use node_id::*;
pub use printer::{print_unit, AstPrinter};
pub use symbols::{Scope, ScopeId, Symbol, SymbolId, SymbolKind, SymbolTable};
pub use token::{BuiltinKind, TokenKind};
pub use types::{CvQualifiers, RefQualifier, Ty, TyId, TypePool};
pub use unit::TranslationUnit;
