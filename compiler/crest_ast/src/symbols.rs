//! Symbols and scopes.
//!
//! Every symbol belongs to exactly one enclosing scope; scope-owning symbols
//! (namespaces, records, functions, lambdas, blocks, parameter scopes) carry
//! a scope of their own. Record-like symbols are created together with their
//! record type; symbol and type reference each other and both live until the
//! translation unit is dropped.

use std::fmt;
use std::fmt::Write as _;

use crate::interner::StringInterner;
use crate::types::TyId;
use crate::Name;

/// Symbol handle.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct SymbolId(u32);

impl SymbolId {
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        SymbolId(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SymbolId({})", self.0)
    }
}

/// Scope handle.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct ScopeId(u32);

impl ScopeId {
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        ScopeId(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScopeId({})", self.0)
    }
}

/// The symbol kinds of the front-end.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum SymbolKind {
    Namespace,
    Concept,
    Class,
    Union,
    Enum,
    ScopedEnum,
    Function,
    Lambda,
    FunctionParameters,
    TemplateParameters,
    Block,
    TypeAlias,
    Variable,
    Field,
    Parameter,
    TypeParameter,
    NonTypeParameter,
    TemplateTypeParameter,
    ConstraintTypeParameter,
    Enumerator,
}

impl SymbolKind {
    /// Label used by the symbol dumper. Classes dump under their class key.
    fn dump_label(self) -> &'static str {
        match self {
            SymbolKind::Namespace => "namespace",
            SymbolKind::Concept => "concept",
            SymbolKind::Class => "struct",
            SymbolKind::Union => "union",
            SymbolKind::Enum => "enum",
            SymbolKind::ScopedEnum => "enum class",
            SymbolKind::Function => "function",
            SymbolKind::Lambda => "lambda",
            SymbolKind::FunctionParameters => "parameters",
            SymbolKind::TemplateParameters => "template",
            SymbolKind::Block => "block",
            SymbolKind::TypeAlias => "typealias",
            SymbolKind::Variable => "variable",
            SymbolKind::Field => "field",
            SymbolKind::Parameter => "parameter",
            SymbolKind::TypeParameter => "parameter:type",
            SymbolKind::NonTypeParameter => "parameter:value",
            SymbolKind::TemplateTypeParameter => "parameter:template",
            SymbolKind::ConstraintTypeParameter => "parameter:constraint",
            SymbolKind::Enumerator => "enumerator",
        }
    }

    /// True for the kinds created together with a record type.
    pub fn is_record_like(self) -> bool {
        matches!(
            self,
            SymbolKind::Namespace
                | SymbolKind::Class
                | SymbolKind::Union
                | SymbolKind::Enum
                | SymbolKind::ScopedEnum
        )
    }
}

/// A declared entity.
#[derive(Debug)]
pub struct Symbol {
    pub kind: SymbolKind,
    /// Interned identifier; anonymous entities get a minted `$name`.
    pub name: Option<Name>,
    pub ty: Option<TyId>,
    pub enclosing_scope: Option<ScopeId>,
    /// Scope introduced by this symbol, if it is scope-owning.
    pub scope: Option<ScopeId>,
}

/// A lexical scope: its owner and the symbols declared in it, in
/// declaration order.
#[derive(Debug, Default)]
pub struct Scope {
    pub owner: Option<SymbolId>,
    pub members: Vec<SymbolId>,
}

/// All symbols and scopes of one translation unit.
///
/// Storage is append-only; handles stay valid for the table's lifetime.
#[derive(Default)]
pub struct SymbolTable {
    symbols: Vec<Symbol>,
    scopes: Vec<Scope>,
}

impl SymbolTable {
    /// Create a table with a global scope at index zero.
    pub fn new() -> Self {
        let mut table = SymbolTable::default();
        table.scopes.push(Scope::default());
        table
    }

    /// The global scope.
    pub fn global_scope(&self) -> ScopeId {
        ScopeId(0)
    }

    /// Allocate a symbol in `enclosing_scope`.
    pub fn new_symbol(&mut self, kind: SymbolKind, enclosing_scope: ScopeId) -> SymbolId {
        let id = SymbolId(
            u32::try_from(self.symbols.len()).unwrap_or_else(|_| overflow(self.symbols.len())),
        );
        self.symbols.push(Symbol {
            kind,
            name: None,
            ty: None,
            enclosing_scope: Some(enclosing_scope),
            scope: None,
        });
        self.scopes[enclosing_scope.0 as usize].members.push(id);
        id
    }

    /// Attach a fresh scope to `owner`; a symbol owns at most one scope.
    pub fn new_scope(&mut self, owner: SymbolId) -> ScopeId {
        assert!(
            self.symbols[owner.0 as usize].scope.is_none(),
            "symbol already owns a scope"
        );
        let id = ScopeId(
            u32::try_from(self.scopes.len()).unwrap_or_else(|_| overflow(self.scopes.len())),
        );
        self.scopes.push(Scope {
            owner: Some(owner),
            members: Vec::new(),
        });
        self.symbols[owner.0 as usize].scope = Some(id);
        id
    }

    #[inline]
    #[track_caller]
    pub fn symbol(&self, id: SymbolId) -> &Symbol {
        &self.symbols[id.0 as usize]
    }

    #[inline]
    #[track_caller]
    pub fn symbol_mut(&mut self, id: SymbolId) -> &mut Symbol {
        &mut self.symbols[id.0 as usize]
    }

    #[inline]
    #[track_caller]
    pub fn scope(&self, id: ScopeId) -> &Scope {
        &self.scopes[id.0 as usize]
    }

    pub fn symbol_count(&self) -> usize {
        self.symbols.len()
    }

    /// Render the symbol tree under `scope` in the golden dump format:
    /// one `- kind: name` line per symbol, nested two spaces per level.
    pub fn dump(&self, scope: ScopeId, idents: &StringInterner) -> String {
        let mut out = String::new();
        self.dump_scope(scope, idents, 0, &mut out);
        out
    }

    fn dump_scope(&self, scope: ScopeId, idents: &StringInterner, depth: usize, out: &mut String) {
        for &member in &self.scopes[scope.0 as usize].members {
            let symbol = self.symbol(member);
            for _ in 0..depth {
                out.push_str("  ");
            }
            let _ = write!(out, "- {}:", symbol.kind.dump_label());
            if let Some(name) = symbol.name {
                let text = idents.lookup(name);
                // Minted anonymous names are placeholders, not source names.
                if !text.is_empty() && !text.starts_with('$') {
                    let _ = write!(out, " {text}");
                }
            }
            out.push('\n');
            if let Some(inner) = symbol.scope {
                self.dump_scope(inner, idents, depth + 1, out);
            }
        }
    }
}

#[cold]
#[inline(never)]
fn overflow(count: usize) -> ! {
    panic!("symbol table exceeded capacity: {count} entries")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_join_their_scope_in_order() {
        let mut table = SymbolTable::new();
        let global = table.global_scope();
        let a = table.new_symbol(SymbolKind::Variable, global);
        let b = table.new_symbol(SymbolKind::Function, global);
        assert_eq!(table.scope(global).members, vec![a, b]);
        assert_eq!(table.symbol(a).enclosing_scope, Some(global));
    }

    #[test]
    fn scope_owning_symbols() {
        let mut table = SymbolTable::new();
        let global = table.global_scope();
        let ns = table.new_symbol(SymbolKind::Namespace, global);
        let ns_scope = table.new_scope(ns);
        assert_eq!(table.symbol(ns).scope, Some(ns_scope));
        assert_eq!(table.scope(ns_scope).owner, Some(ns));

        let member = table.new_symbol(SymbolKind::Class, ns_scope);
        assert_eq!(table.scope(ns_scope).members, vec![member]);
    }

    #[test]
    fn dump_of_a_templated_struct_with_an_enum() {
        // The symbol stream for:
        //   template <typename T> struct is_void { enum { value = ... }; };
        let mut idents = StringInterner::new();
        let mut table = SymbolTable::new();
        let global = table.global_scope();

        let ns = table.new_symbol(SymbolKind::Namespace, global);
        let ns_scope = table.new_scope(ns);

        let template = table.new_symbol(SymbolKind::TemplateParameters, ns_scope);
        let template_scope = table.new_scope(template);

        let class = table.new_symbol(SymbolKind::Class, template_scope);
        table.symbol_mut(class).name = Some(idents.intern("is_void"));
        let class_scope = table.new_scope(class);

        let anon_enum = table.new_symbol(SymbolKind::Enum, class_scope);
        table.symbol_mut(anon_enum).name = Some(idents.intern("$enum1"));
        let enum_scope = table.new_scope(anon_enum);

        let enumerator = table.new_symbol(SymbolKind::Enumerator, enum_scope);
        table.symbol_mut(enumerator).name = Some(idents.intern("value"));

        let dump = table.dump(global, &idents);
        assert_eq!(
            dump,
            "- namespace:\n\
             \x20 - template:\n\
             \x20   - struct: is_void\n\
             \x20     - enum:\n\
             \x20       - enumerator: value\n"
        );
    }

    #[test]
    fn dump_renders_nested_symbols() {
        let mut idents = StringInterner::new();
        let mut table = SymbolTable::new();
        let global = table.global_scope();

        let ns = table.new_symbol(SymbolKind::Namespace, global);
        let ns_scope = table.new_scope(ns);

        let class = table.new_symbol(SymbolKind::Class, ns_scope);
        table.symbol_mut(class).name = Some(idents.intern("is_void"));
        let class_scope = table.new_scope(class);

        let field = table.new_symbol(SymbolKind::Enumerator, class_scope);
        table.symbol_mut(field).name = Some(idents.intern("value"));

        let dump = table.dump(global, &idents);
        assert_eq!(dump, "- namespace:\n  - struct: is_void\n    - enumerator: value\n");
    }
}
