//! The control: one façade over the interning tables of a translation unit.
//!
//! `get_*` factories are uniqued (same key, same handle); `new_*` factories
//! always mint a fresh object. Non-record handles returned from here stay
//! valid for the control's lifetime, and a control never hands out a handle
//! it cannot resolve.
//!
//! One control serves one translation unit on one thread; there is no
//! internal locking.

use crate::interner::StringInterner;
use crate::literals::{LiteralId, LiteralKind, LiteralStore};
use crate::names::{NameId, NameItem, NamePool, TemplateArg};
use crate::node_id::{ExpressionId, NestedNameSpecifierId, TypeIdNodeId, UnqualifiedNameId};
use crate::symbols::{ScopeId, SymbolId, SymbolKind, SymbolTable};
use crate::types::{CvQualifiers, RefQualifier, Ty, TyId, TypePool};
use crate::{Name, TokenKind};

/// Owns the interners, the type table and the symbol table of one
/// translation unit.
pub struct Control {
    idents: StringInterner,
    literals: LiteralStore,
    names: NamePool,
    types: TypePool,
    symbols: SymbolTable,
    anonymous_id_count: u32,
}

impl Control {
    pub fn new() -> Self {
        Control {
            idents: StringInterner::new(),
            literals: LiteralStore::new(),
            names: NamePool::new(),
            types: TypePool::new(),
            symbols: SymbolTable::new(),
            anonymous_id_count: 0,
        }
    }

    // --- identifiers ---

    /// Intern an identifier.
    pub fn get_identifier(&mut self, spelling: &str) -> Name {
        self.idents.intern(spelling)
    }

    /// Mint a unique anonymous identifier of shape `$<base><n>`.
    ///
    /// The counter is TU-local and monotone; the minted names are unique
    /// within this control but not stable across runs.
    pub fn new_anonymous_id(&mut self, base: &str) -> Name {
        self.anonymous_id_count += 1;
        let spelling = format!("${}{}", base, self.anonymous_id_count);
        tracing::trace!(name = %spelling, "minted anonymous identifier");
        self.idents.intern(&spelling)
    }

    pub fn idents(&self) -> &StringInterner {
        &self.idents
    }

    // --- literals ---

    pub fn integer_literal(&mut self, spelling: &str) -> LiteralId {
        self.literals.intern(LiteralKind::Integer, spelling)
    }

    pub fn float_literal(&mut self, spelling: &str) -> LiteralId {
        self.literals.intern(LiteralKind::Float, spelling)
    }

    pub fn char_literal(&mut self, spelling: &str) -> LiteralId {
        self.literals.intern(LiteralKind::Char, spelling)
    }

    pub fn string_literal(&mut self, spelling: &str) -> LiteralId {
        self.literals.intern(LiteralKind::String, spelling)
    }

    pub fn wide_string_literal(&mut self, spelling: &str) -> LiteralId {
        self.literals.intern(LiteralKind::WideString, spelling)
    }

    pub fn utf8_string_literal(&mut self, spelling: &str) -> LiteralId {
        self.literals.intern(LiteralKind::Utf8String, spelling)
    }

    pub fn utf16_string_literal(&mut self, spelling: &str) -> LiteralId {
        self.literals.intern(LiteralKind::Utf16String, spelling)
    }

    pub fn utf32_string_literal(&mut self, spelling: &str) -> LiteralId {
        self.literals.intern(LiteralKind::Utf32String, spelling)
    }

    pub fn comment_literal(&mut self, spelling: &str) -> LiteralId {
        self.literals.intern(LiteralKind::Comment, spelling)
    }

    pub fn literals(&self) -> &LiteralStore {
        &self.literals
    }

    // --- compound names ---

    /// Promote an identifier into the compound-name space.
    pub fn get_name(&mut self, identifier: Name) -> NameId {
        self.names.intern(NameItem::Identifier(identifier))
    }

    pub fn get_operator_id(&mut self, op: TokenKind) -> NameId {
        self.names.intern(NameItem::OperatorId(op))
    }

    pub fn get_destructor_id(&mut self, name: NameId) -> NameId {
        self.names.intern(NameItem::DestructorId(name))
    }

    pub fn get_literal_operator_id(&mut self, suffix: &str) -> NameId {
        let identifier = self.idents.intern(suffix);
        self.names.intern(NameItem::LiteralOperatorId(identifier))
    }

    pub fn get_conversion_function_id(&mut self, target: TyId) -> NameId {
        self.names.intern(NameItem::ConversionFunctionId(target))
    }

    pub fn get_template_id(&mut self, base: NameId, arguments: Vec<TemplateArg>) -> NameId {
        self.names.intern(NameItem::TemplateId(base, arguments))
    }

    pub fn names(&self) -> &NamePool {
        &self.names
    }

    // --- types ---

    pub fn get_qual_type(&mut self, element: TyId, cv: CvQualifiers) -> TyId {
        self.types.intern(Ty::Qual { element, cv })
    }

    pub fn get_const_type(&mut self, element: TyId) -> TyId {
        self.get_qual_type(element, CvQualifiers::CONST)
    }

    pub fn get_volatile_type(&mut self, element: TyId) -> TyId {
        self.get_qual_type(element, CvQualifiers::VOLATILE)
    }

    pub fn get_const_volatile_type(&mut self, element: TyId) -> TyId {
        self.get_qual_type(element, CvQualifiers::CONST_VOLATILE)
    }

    pub fn get_bounded_array_type(&mut self, element: TyId, size: u64) -> TyId {
        self.types.intern(Ty::BoundedArray { element, size })
    }

    pub fn get_unbounded_array_type(&mut self, element: TyId) -> TyId {
        self.types.intern(Ty::UnboundedArray { element })
    }

    pub fn get_pointer_type(&mut self, element: TyId) -> TyId {
        self.types.intern(Ty::Pointer { element })
    }

    pub fn get_lvalue_reference_type(&mut self, element: TyId) -> TyId {
        self.types.intern(Ty::LvalueReference { element })
    }

    pub fn get_rvalue_reference_type(&mut self, element: TyId) -> TyId {
        self.types.intern(Ty::RvalueReference { element })
    }

    #[allow(clippy::too_many_arguments)]
    pub fn get_function_type(
        &mut self,
        returns: TyId,
        parameters: Vec<TyId>,
        is_variadic: bool,
        cv: CvQualifiers,
        ref_qualifier: RefQualifier,
        is_noexcept: bool,
    ) -> TyId {
        self.types.intern(Ty::Function {
            returns,
            parameters,
            is_variadic,
            cv,
            ref_qualifier,
            is_noexcept,
        })
    }

    pub fn get_member_object_pointer_type(&mut self, class: TyId, element: TyId) -> TyId {
        self.types.intern(Ty::MemberObjectPointer { class, element })
    }

    pub fn get_member_function_pointer_type(&mut self, class: TyId, function: TyId) -> TyId {
        self.types.intern(Ty::MemberFunctionPointer { class, function })
    }

    pub fn get_unresolved_name_type(
        &mut self,
        nested_name_specifier: Option<NestedNameSpecifierId>,
        unqualified_id: Option<UnqualifiedNameId>,
    ) -> TyId {
        self.types.intern(Ty::UnresolvedName {
            nested_name_specifier,
            unqualified_id,
        })
    }

    pub fn get_unresolved_bounded_array_type(
        &mut self,
        element: TyId,
        size_expression: Option<ExpressionId>,
    ) -> TyId {
        self.types.intern(Ty::UnresolvedBoundedArray {
            element,
            size_expression,
        })
    }

    pub fn get_unresolved_underlying_type(&mut self, type_id: Option<TypeIdNodeId>) -> TyId {
        self.types.intern(Ty::UnresolvedUnderlying { type_id })
    }

    pub fn types(&self) -> &TypePool {
        &self.types
    }

    // --- symbols ---

    /// Allocate a symbol of a non-record kind.
    pub fn new_symbol(&mut self, kind: SymbolKind, scope: ScopeId) -> SymbolId {
        debug_assert!(!kind.is_record_like(), "record symbols get their type wired");
        self.symbols.new_symbol(kind, scope)
    }

    fn new_record_symbol(
        &mut self,
        kind: SymbolKind,
        scope: ScopeId,
        make_ty: fn(SymbolId) -> Ty,
    ) -> SymbolId {
        let symbol = self.symbols.new_symbol(kind, scope);
        let ty = self.types.mint(make_ty(symbol));
        self.symbols.symbol_mut(symbol).ty = Some(ty);
        symbol
    }

    pub fn new_namespace_symbol(&mut self, scope: ScopeId) -> SymbolId {
        self.new_record_symbol(SymbolKind::Namespace, scope, |symbol| Ty::Namespace { symbol })
    }

    pub fn new_class_symbol(&mut self, scope: ScopeId) -> SymbolId {
        self.new_record_symbol(SymbolKind::Class, scope, |symbol| Ty::Class { symbol })
    }

    pub fn new_union_symbol(&mut self, scope: ScopeId) -> SymbolId {
        self.new_record_symbol(SymbolKind::Union, scope, |symbol| Ty::Union { symbol })
    }

    pub fn new_enum_symbol(&mut self, scope: ScopeId) -> SymbolId {
        self.new_record_symbol(SymbolKind::Enum, scope, |symbol| Ty::Enum { symbol })
    }

    pub fn new_scoped_enum_symbol(&mut self, scope: ScopeId) -> SymbolId {
        self.new_record_symbol(SymbolKind::ScopedEnum, scope, |symbol| Ty::ScopedEnum { symbol })
    }

    pub fn new_concept_symbol(&mut self, scope: ScopeId) -> SymbolId {
        self.new_symbol(SymbolKind::Concept, scope)
    }

    pub fn new_function_symbol(&mut self, scope: ScopeId) -> SymbolId {
        self.new_symbol(SymbolKind::Function, scope)
    }

    pub fn new_lambda_symbol(&mut self, scope: ScopeId) -> SymbolId {
        self.new_symbol(SymbolKind::Lambda, scope)
    }

    pub fn new_function_parameters_symbol(&mut self, scope: ScopeId) -> SymbolId {
        self.new_symbol(SymbolKind::FunctionParameters, scope)
    }

    pub fn new_template_parameters_symbol(&mut self, scope: ScopeId) -> SymbolId {
        self.new_symbol(SymbolKind::TemplateParameters, scope)
    }

    pub fn new_block_symbol(&mut self, scope: ScopeId) -> SymbolId {
        self.new_symbol(SymbolKind::Block, scope)
    }

    pub fn new_type_alias_symbol(&mut self, scope: ScopeId) -> SymbolId {
        self.new_symbol(SymbolKind::TypeAlias, scope)
    }

    pub fn new_variable_symbol(&mut self, scope: ScopeId) -> SymbolId {
        self.new_symbol(SymbolKind::Variable, scope)
    }

    pub fn new_field_symbol(&mut self, scope: ScopeId) -> SymbolId {
        self.new_symbol(SymbolKind::Field, scope)
    }

    pub fn new_parameter_symbol(&mut self, scope: ScopeId) -> SymbolId {
        self.new_symbol(SymbolKind::Parameter, scope)
    }

    pub fn new_type_parameter_symbol(&mut self, scope: ScopeId) -> SymbolId {
        self.new_symbol(SymbolKind::TypeParameter, scope)
    }

    pub fn new_non_type_parameter_symbol(&mut self, scope: ScopeId) -> SymbolId {
        self.new_symbol(SymbolKind::NonTypeParameter, scope)
    }

    pub fn new_template_type_parameter_symbol(&mut self, scope: ScopeId) -> SymbolId {
        self.new_symbol(SymbolKind::TemplateTypeParameter, scope)
    }

    pub fn new_constraint_type_parameter_symbol(&mut self, scope: ScopeId) -> SymbolId {
        self.new_symbol(SymbolKind::ConstraintTypeParameter, scope)
    }

    pub fn new_enumerator_symbol(&mut self, scope: ScopeId) -> SymbolId {
        self.new_symbol(SymbolKind::Enumerator, scope)
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn symbols_mut(&mut self) -> &mut SymbolTable {
        &mut self.symbols
    }
}

impl Default for Control {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_are_uniqued() {
        let mut control = Control::new();
        assert_eq!(control.get_identifier("x"), control.get_identifier("x"));
        assert_ne!(control.get_identifier("x"), control.get_identifier("y"));
    }

    #[test]
    fn anonymous_ids_are_distinct_and_well_formed() {
        let mut control = Control::new();
        let a = control.new_anonymous_id("enum");
        let b = control.new_anonymous_id("enum");
        assert_ne!(a, b);
        assert_eq!(control.idents().lookup(a), "$enum1");
        assert_eq!(control.idents().lookup(b), "$enum2");
    }

    #[test]
    fn literal_factories_unique_by_spelling() {
        let mut control = Control::new();
        let a = control.integer_literal("42");
        let b = control.integer_literal("42");
        assert_eq!(a, b);
        assert_eq!(control.literals().get(a).integer_value(), Some(42));
    }

    #[test]
    fn compound_type_factories_are_uniqued() {
        let mut control = Control::new();
        let p1 = control.get_pointer_type(TyId::INT);
        let p2 = control.get_pointer_type(TyId::INT);
        assert_eq!(p1, p2);

        let c1 = control.get_const_type(TyId::INT);
        let c2 = control.get_qual_type(TyId::INT, CvQualifiers::CONST);
        assert_eq!(c1, c2);
    }

    #[test]
    fn record_symbols_are_wired_to_their_types() {
        let mut control = Control::new();
        let global = control.symbols().global_scope();
        for symbol in [
            control.new_namespace_symbol(global),
            control.new_class_symbol(global),
            control.new_union_symbol(global),
            control.new_enum_symbol(global),
            control.new_scoped_enum_symbol(global),
        ] {
            let ty = control.symbols().symbol(symbol).ty.expect("record symbol has a type");
            assert_eq!(control.types().get(ty).symbol(), Some(symbol));
        }
    }

    #[test]
    fn template_ids_are_uniqued_by_key() {
        let mut control = Control::new();
        let ident = control.get_identifier("vec");
        let base = control.get_name(ident);
        let a = control.get_template_id(base, vec![TemplateArg::Type(TyId::INT)]);
        let b = control.get_template_id(base, vec![TemplateArg::Type(TyId::INT)]);
        let c = control.get_template_id(base, vec![TemplateArg::Type(TyId::BOOL)]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn conversion_function_ids_unique_by_target_type() {
        let mut control = Control::new();
        let ptr = control.get_pointer_type(TyId::INT);
        let a = control.get_conversion_function_id(ptr);
        let b = control.get_conversion_function_id(ptr);
        assert_eq!(a, b);
    }
}
