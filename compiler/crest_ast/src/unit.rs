//! The translation unit: root container for one parsed source file.

use crate::arena::AstArena;
use crate::control::Control;
use crate::node_id::UnitId;

/// Owns the arena, the control and the source map of one parse.
///
/// The arena outlives every node id it issued, the control outlives every
/// interned handle; both are dropped together with the unit. Units never
/// share handles: ids and interned handles are meaningless outside the unit
/// that produced them.
pub struct TranslationUnit {
    arena: AstArena,
    control: Control,
    file_name: String,
    source: String,
    root: Option<UnitId>,
}

impl TranslationUnit {
    pub fn new() -> Self {
        TranslationUnit {
            arena: AstArena::new(),
            control: Control::new(),
            file_name: String::new(),
            source: String::new(),
            root: None,
        }
    }

    /// Create a unit whose arena is presized for a source of `source_len`
    /// bytes. Parsers that know the input size up front start here.
    pub fn with_capacity(source_len: usize) -> Self {
        TranslationUnit {
            arena: AstArena::with_capacity(source_len),
            ..Self::new()
        }
    }

    /// Install the source map. The text is kept for diagnostics only;
    /// the arena and any nodes already allocated in it are untouched.
    pub fn set_source(&mut self, source: String, file_name: String) {
        self.source = source;
        self.file_name = file_name;
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn arena(&self) -> &AstArena {
        &self.arena
    }

    pub fn arena_mut(&mut self) -> &mut AstArena {
        &mut self.arena
    }

    pub fn control(&self) -> &Control {
        &self.control
    }

    pub fn control_mut(&mut self) -> &mut Control {
        &mut self.control
    }

    /// The root node, once the parser (or the decoder) installed one.
    pub fn root(&self) -> Option<UnitId> {
        self.root
    }

    pub fn set_root(&mut self, root: UnitId) {
        self.root = Some(root);
    }

    /// Split borrow for producers that allocate nodes and intern payloads in
    /// the same breath.
    pub fn parts_mut(&mut self) -> (&mut AstArena, &mut Control) {
        (&mut self.arena, &mut self.control)
    }
}

impl Default for TranslationUnit {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TranslationUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "TranslationUnit {{ file: {:?}, {} nodes }}",
            self.file_name,
            self.arena.node_count()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Unit;
    use crate::node_id::DeclarationRange;

    #[test]
    fn root_installation() {
        let mut unit = TranslationUnit::new();
        assert!(unit.root().is_none());

        let root = unit.arena_mut().alloc_unit(Unit::TranslationUnit {
            declaration_list: DeclarationRange::EMPTY,
        });
        unit.set_root(root);
        assert_eq!(unit.root(), Some(root));
    }

    #[test]
    fn source_map() {
        let mut unit = TranslationUnit::new();
        unit.set_source("int x;".into(), "x.cc".into());
        assert_eq!(unit.file_name(), "x.cc");
        assert_eq!(unit.source(), "int x;");
    }

    #[test]
    fn set_source_preserves_allocated_nodes() {
        let mut unit = TranslationUnit::with_capacity(64);
        let root = unit.arena_mut().alloc_unit(Unit::TranslationUnit {
            declaration_list: DeclarationRange::EMPTY,
        });
        unit.set_root(root);

        unit.set_source("namespace n {}".into(), "n.cc".into());

        assert_eq!(unit.root(), Some(root));
        assert!(matches!(
            unit.arena().unit(root),
            Unit::TranslationUnit { .. }
        ));
        assert_eq!(unit.file_name(), "n.cc");
    }
}
