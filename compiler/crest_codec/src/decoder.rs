//! Binary AST decoder.
//!
//! Reconstructs an AST from the wire envelope into a receiving translation
//! unit: nodes are allocated in the unit's arena and every interned payload
//! (identifiers, literal spellings, the file name) is re-interned through
//! the unit's control.
//!
//! The decoder is tolerant of unknown discriminators — a tag above the ones
//! it knows yields a null slot, so newer producers can add variants without
//! breaking older consumers. Structural damage (truncation, parallel-vector
//! arity mismatches, dangling or cyclic references, bad magic) fails the
//! whole decode; the partially-built unit must be discarded by the caller.
//!
//! Progress follows a small state machine: `Idle` → `HeaderRead` →
//! `RootDecoded` → `Done`, with any error parking the decoder in `Failed`.
//! There is no resume.

use crest_ast::ast::*;
use crest_ast::{
    AttributeRange, AttributeSpecifierRange, BaseSpecifierRange, DeclarationId, DeclarationRange,
    DeclaratorChunkRange, DeclaratorId, EnumeratorRange, ExpressionId, ExpressionRange,
    HandlerRange, InitDeclaratorRange, LambdaCaptureRange, LambdaSpecifierRange,
    MemInitializerRange, NestedNamespaceSpecifierRange, PtrOperatorRange, RequirementRange,
    SpecifierRange, StatementId, StatementRange, TemplateArgumentRange, TemplateParameterRange,
    TokenKind, TranslationUnit, TypeIdNodeRange, UnitId, UnqualifiedNameRange,
    UsingDeclaratorRange,
};
use crest_ast::{BuiltinKind, Name};

use crate::wire::{self, ByteReader, DecodeError, DecoderState, TAG_NULL};

/// Pseudo table index used for string pool references in errors.
const POOL_TABLE: usize = wire::TABLE_COUNT;

/// Decodes one envelope into one translation unit.
#[derive(Default)]
pub struct AstDecoder {
    state: DecoderState,
}

impl AstDecoder {
    pub fn new() -> Self {
        AstDecoder {
            state: DecoderState::Idle,
        }
    }

    /// Decoder progress; `Failed` is terminal.
    pub fn state(&self) -> DecoderState {
        self.state
    }

    /// Decode `bytes` into `unit`. On error the unit holds whatever was
    /// decoded before the failure and is not usable.
    pub fn decode(
        &mut self,
        unit: &mut TranslationUnit,
        bytes: &[u8],
    ) -> Result<(), DecodeError> {
        match self.run(unit, bytes) {
            Ok(()) => {
                self.state = DecoderState::Done;
                Ok(())
            }
            Err(error) => {
                self.state = DecoderState::Failed;
                Err(error)
            }
        }
    }

    fn run(&mut self, unit: &mut TranslationUnit, bytes: &[u8]) -> Result<(), DecodeError> {
        let mut reader = ByteReader::new(bytes);

        if reader.read_bytes(4)? != &wire::MAGIC[..] {
            return Err(DecodeError::BadMagic);
        }
        let version = reader.read_u32()?;
        if version != wire::VERSION {
            return Err(DecodeError::UnsupportedVersion(version));
        }

        let pool_len = reader.read_u32()?;
        let mut pool = Vec::new();
        for _ in 0..pool_len {
            let len = reader.read_u32()? as usize;
            let bytes = reader.read_bytes(len)?;
            let text = std::str::from_utf8(bytes).map_err(|_| DecodeError::MalformedString)?;
            pool.push(text);
        }

        let file_name = reader.read_u32()?;
        if file_name != 0 {
            let index = (file_name - 1) as usize;
            let name = *pool.get(index).ok_or(DecodeError::DanglingReference {
                table: POOL_TABLE,
                index: file_name,
            })?;
            unit.set_source(String::new(), name.to_owned());
        }

        let mut tables = Vec::with_capacity(wire::TABLE_COUNT);
        for _ in 0..wire::TABLE_COUNT {
            let count = reader.read_u32()?;
            let mut records = Vec::new();
            for _ in 0..count {
                let len = reader.read_u32()? as usize;
                records.push(reader.read_bytes(len)?);
            }
            tables.push(records);
        }
        self.state = DecoderState::HeaderRead;

        let root_tag = reader.read_u8()?;
        let root_index = reader.read_u32()?;

        let memo = tables.iter().map(|t| vec![Slot::Unvisited; t.len()]).collect();
        let mut ctx = DecodeCtx {
            pool,
            tables,
            memo,
            unit,
        };

        let root = ctx.decode_unit(root_tag, root_index)?;
        self.state = DecoderState::RootDecoded;

        if let Some(root) = root {
            ctx.unit.set_root(root);
        }
        Ok(())
    }
}

/// Per-entry decode memo. `InProgress` re-entry means the input encodes a
/// cycle, which a post-order encoder can never produce.
#[derive(Copy, Clone)]
enum Slot {
    Unvisited,
    InProgress,
    Done(Option<u32>),
}

struct DecodeCtx<'a, 'u> {
    pool: Vec<&'a str>,
    tables: Vec<Vec<&'a [u8]>>,
    memo: Vec<Vec<Slot>>,
    unit: &'u mut TranslationUnit,
}

/// Begin decoding `table[index]`: resolve memo hits, detect cycles, and
/// bounds-check the reference. Evaluates to the record bytes.
macro_rules! begin_entry {
    ($self:ident, $table:expr, $index:expr, $id:ty) => {{
        let table: usize = $table;
        let index: u32 = $index;
        match $self
            .memo
            .get(table)
            .and_then(|memo| memo.get(index as usize))
        {
            Some(Slot::Done(cached)) => {
                return Ok(cached.map(<$id>::new));
            }
            Some(Slot::InProgress) => {
                return Err(DecodeError::CyclicReference { table, index });
            }
            Some(Slot::Unvisited) => {}
            None => {
                return Err(DecodeError::DanglingReference { table, index });
            }
        }
        $self.memo[table][index as usize] = Slot::InProgress;
        $self.tables[table][index as usize]
    }};
}

impl<'a, 'u> DecodeCtx<'a, 'u> {
    fn finish_entry(&mut self, table: usize, index: u32, raw: u32) {
        self.memo[table][index as usize] = Slot::Done(Some(raw));
    }

    // --- scalar readers ---

    fn read_str(&self, reader: &mut ByteReader<'a>) -> Result<Option<&'a str>, DecodeError> {
        let reference = reader.read_u32()?;
        if reference == 0 {
            return Ok(None);
        }
        self.pool
            .get((reference - 1) as usize)
            .copied()
            .map(Some)
            .ok_or(DecodeError::DanglingReference {
                table: POOL_TABLE,
                index: reference,
            })
    }

    fn read_ident(&mut self, reader: &mut ByteReader<'a>) -> Result<Option<Name>, DecodeError> {
        Ok(self
            .read_str(reader)?
            .map(|text| self.unit.control_mut().get_identifier(text)))
    }

    fn read_token(reader: &mut ByteReader<'a>) -> Result<TokenKind, DecodeError> {
        Ok(TokenKind::from_raw(reader.read_u8()?))
    }

    fn read_builtin(reader: &mut ByteReader<'a>) -> Result<BuiltinKind, DecodeError> {
        Ok(BuiltinKind::from_raw(reader.read_u16()?))
    }

    fn read_bool(reader: &mut ByteReader<'a>) -> Result<bool, DecodeError> {
        Ok(reader.read_u8()? != 0)
    }

    fn read_child(reader: &mut ByteReader<'a>) -> Result<(u8, u32), DecodeError> {
        let tag = reader.read_u8()?;
        let index = reader.read_u32()?;
        Ok((tag, index))
    }

    /// Read a tagged list's parallel vectors, checking their arity.
    fn read_tagged_list(
        reader: &mut ByteReader<'a>,
    ) -> Result<Vec<(u8, u32)>, DecodeError> {
        let entry_count = reader.read_u32()?;
        let mut entries = Vec::with_capacity(entry_count.min(1024) as usize);
        for _ in 0..entry_count {
            entries.push(reader.read_u32()?);
        }
        let tag_count = reader.read_u32()?;
        if tag_count != entry_count {
            return Err(DecodeError::ListArityMismatch {
                entries: entry_count,
                tags: tag_count,
            });
        }
        let mut refs = Vec::with_capacity(entries.len());
        for entry in entries {
            refs.push((reader.read_u8()?, entry));
        }
        Ok(refs)
    }

    /// Read a fragment list's entry vector.
    fn read_fragment_list(reader: &mut ByteReader<'a>) -> Result<Vec<u32>, DecodeError> {
        let count = reader.read_u32()?;
        let mut entries = Vec::with_capacity(count.min(1024) as usize);
        for _ in 0..count {
            entries.push(reader.read_u32()?);
        }
        Ok(entries)
    }
}

/// Generates a tagged-list decoder: unknown-tag elements drop out of the
/// rebuilt list, everything else keeps its source order.
macro_rules! tagged_list_reader {
    ($reader_fn:ident, $decode:ident, $alloc:ident, $range:ty) => {
        impl<'a, 'u> DecodeCtx<'a, 'u> {
            fn $reader_fn(&mut self, reader: &mut ByteReader<'a>) -> Result<$range, DecodeError> {
                let refs = Self::read_tagged_list(reader)?;
                let mut ids = Vec::with_capacity(refs.len());
                for (tag, index) in refs {
                    if let Some(id) = self.$decode(tag, index)? {
                        ids.push(id);
                    }
                }
                Ok(self.unit.arena_mut().$alloc(ids))
            }
        }
    };
}

/// Generates a fragment-list decoder.
macro_rules! fragment_list_reader {
    ($reader_fn:ident, $decode:ident, $alloc:ident, $range:ty) => {
        impl<'a, 'u> DecodeCtx<'a, 'u> {
            fn $reader_fn(&mut self, reader: &mut ByteReader<'a>) -> Result<$range, DecodeError> {
                let refs = Self::read_fragment_list(reader)?;
                let mut ids = Vec::with_capacity(refs.len());
                for reference in refs {
                    if let Some(id) = self.$decode(reference)? {
                        ids.push(id);
                    }
                }
                Ok(self.unit.arena_mut().$alloc(ids))
            }
        }
    };
}

tagged_list_reader!(r_decl_list, decode_declaration, alloc_declaration_list, DeclarationRange);
tagged_list_reader!(r_stmt_list, decode_statement, alloc_statement_list, StatementRange);
tagged_list_reader!(r_expr_list, decode_expression, alloc_expression_list, ExpressionRange);
tagged_list_reader!(r_spec_list, decode_specifier, alloc_specifier_list, SpecifierRange);
tagged_list_reader!(
    r_templ_param_list,
    decode_template_parameter,
    alloc_template_parameter_list,
    TemplateParameterRange
);
tagged_list_reader!(
    r_templ_arg_list,
    decode_template_argument,
    alloc_template_argument_list,
    TemplateArgumentRange
);
tagged_list_reader!(r_ptr_op_list, decode_ptr_operator, alloc_ptr_operator_list, PtrOperatorRange);
tagged_list_reader!(
    r_chunk_list,
    decode_declarator_chunk,
    alloc_declarator_chunk_list,
    DeclaratorChunkRange
);
tagged_list_reader!(
    r_unqual_list,
    decode_unqualified_name,
    alloc_unqualified_name_list,
    UnqualifiedNameRange
);
tagged_list_reader!(
    r_requirement_list,
    decode_requirement,
    alloc_requirement_list,
    RequirementRange
);
tagged_list_reader!(
    r_mem_init_list,
    decode_mem_initializer,
    alloc_mem_initializer_list,
    MemInitializerRange
);
tagged_list_reader!(
    r_capture_list,
    decode_lambda_capture,
    alloc_lambda_capture_list,
    LambdaCaptureRange
);
tagged_list_reader!(
    r_attr_spec_list,
    decode_attribute_specifier,
    alloc_attribute_specifier_list,
    AttributeSpecifierRange
);

fragment_list_reader!(
    r_init_declarator_list,
    decode_init_declarator,
    alloc_init_declarator_list,
    InitDeclaratorRange
);
fragment_list_reader!(
    r_using_declarator_list,
    decode_using_declarator,
    alloc_using_declarator_list,
    UsingDeclaratorRange
);
fragment_list_reader!(
    r_enumerator_list,
    decode_enumerator,
    alloc_enumerator_list,
    EnumeratorRange
);
fragment_list_reader!(
    r_base_spec_list,
    decode_base_specifier,
    alloc_base_specifier_list,
    BaseSpecifierRange
);
fragment_list_reader!(r_handler_list, decode_handler, alloc_handler_list, HandlerRange);
fragment_list_reader!(
    r_lambda_spec_list,
    decode_lambda_specifier,
    alloc_lambda_specifier_list,
    LambdaSpecifierRange
);
fragment_list_reader!(r_type_id_list, decode_type_id, alloc_type_id_list, TypeIdNodeRange);
fragment_list_reader!(r_attribute_list, decode_attribute, alloc_attribute_list, AttributeRange);
fragment_list_reader!(
    r_nested_ns_list,
    decode_nested_namespace_specifier,
    alloc_nested_namespace_specifier_list,
    NestedNamespaceSpecifierRange
);

impl<'a, 'u> DecodeCtx<'a, 'u> {
    fn decode_unit(&mut self, tag: u8, index: u32) -> Result<Option<UnitId>, DecodeError> {
        if tag == TAG_NULL {
            return Ok(None);
        }
        if tag > wire::unit_tag::MODULE_UNIT {
            tracing::debug!(tag, "unknown unit discriminator, yielding null");
            return Ok(None);
        }
        let record = begin_entry!(self, wire::TABLE_UNIT, index, UnitId);
        let mut r = ByteReader::new(record);
        let node = match tag {
            wire::unit_tag::TRANSLATION_UNIT => Unit::TranslationUnit {
                declaration_list: self.r_decl_list(&mut r)?,
            },
            _ => {
                let global = r.read_u32()?;
                let global_module_fragment = self.decode_global_module_fragment(global)?;
                let decl = r.read_u32()?;
                let module_declaration = self.decode_module_declaration(decl)?;
                let declaration_list = self.r_decl_list(&mut r)?;
                let private = r.read_u32()?;
                let private_module_fragment = self.decode_private_module_fragment(private)?;
                Unit::ModuleUnit {
                    global_module_fragment,
                    module_declaration,
                    declaration_list,
                    private_module_fragment,
                }
            }
        };
        let id = self.unit.arena_mut().alloc_unit(node);
        self.finish_entry(wire::TABLE_UNIT, index, id.raw());
        Ok(Some(id))
    }

    fn decode_declaration(
        &mut self,
        tag: u8,
        index: u32,
    ) -> Result<Option<DeclarationId>, DecodeError> {
        use crate::wire::decl_tag as t;
        if tag == TAG_NULL {
            return Ok(None);
        }
        if tag > t::ASM_GOTO_LABEL {
            tracing::debug!(tag, "unknown declaration discriminator, yielding null");
            return Ok(None);
        }
        let record = begin_entry!(self, wire::TABLE_DECLARATION, index, DeclarationId);
        let mut r = ByteReader::new(record);
        let node = match tag {
            t::SIMPLE_DECLARATION => {
                let attribute_list = self.r_attr_spec_list(&mut r)?;
                let decl_specifier_list = self.r_spec_list(&mut r)?;
                let init_declarator_list = self.r_init_declarator_list(&mut r)?;
                let clause = r.read_u32()?;
                let requires_clause = self.decode_requires_clause(clause)?;
                Declaration::SimpleDeclaration {
                    attribute_list,
                    decl_specifier_list,
                    init_declarator_list,
                    requires_clause,
                }
            }
            t::ASM_DECLARATION => {
                let literal = self.read_str(&mut r)?;
                let literal = literal.map(|text| self.unit.control_mut().string_literal(text));
                let attribute_list = self.r_attr_spec_list(&mut r)?;
                let asm_qualifier_list = self.r_decl_list(&mut r)?;
                let output_operand_list = self.r_decl_list(&mut r)?;
                let input_operand_list = self.r_decl_list(&mut r)?;
                let clobber_list = self.r_decl_list(&mut r)?;
                let goto_label_list = self.r_decl_list(&mut r)?;
                Declaration::AsmDeclaration {
                    literal,
                    attribute_list,
                    asm_qualifier_list,
                    output_operand_list,
                    input_operand_list,
                    clobber_list,
                    goto_label_list,
                }
            }
            t::NAMESPACE_ALIAS_DEFINITION => {
                let identifier = self.read_ident(&mut r)?;
                let (nns_tag, nns_index) = Self::read_child(&mut r)?;
                let nested_name_specifier = self.decode_nested_name_specifier(nns_tag, nns_index)?;
                let (name_tag, name_index) = Self::read_child(&mut r)?;
                let unqualified_id = self.decode_unqualified_name(name_tag, name_index)?;
                Declaration::NamespaceAliasDefinition {
                    identifier,
                    nested_name_specifier,
                    unqualified_id,
                }
            }
            t::USING_DECLARATION => Declaration::UsingDeclaration {
                using_declarator_list: self.r_using_declarator_list(&mut r)?,
            },
            t::USING_ENUM_DECLARATION => {
                let (spec_tag, spec_index) = Self::read_child(&mut r)?;
                Declaration::UsingEnumDeclaration {
                    enum_type_specifier: self.decode_specifier(spec_tag, spec_index)?,
                }
            }
            t::USING_DIRECTIVE => {
                let attribute_list = self.r_attr_spec_list(&mut r)?;
                let (nns_tag, nns_index) = Self::read_child(&mut r)?;
                let nested_name_specifier = self.decode_nested_name_specifier(nns_tag, nns_index)?;
                let (name_tag, name_index) = Self::read_child(&mut r)?;
                let unqualified_id = self.decode_unqualified_name(name_tag, name_index)?;
                Declaration::UsingDirective {
                    attribute_list,
                    nested_name_specifier,
                    unqualified_id,
                }
            }
            t::STATIC_ASSERT_DECLARATION => {
                let literal = self.read_str(&mut r)?;
                let literal = literal.map(|text| self.unit.control_mut().string_literal(text));
                let (expr_tag, expr_index) = Self::read_child(&mut r)?;
                Declaration::StaticAssertDeclaration {
                    literal,
                    expression: self.decode_expression(expr_tag, expr_index)?,
                }
            }
            t::ALIAS_DECLARATION => {
                let identifier = self.read_ident(&mut r)?;
                let attribute_list = self.r_attr_spec_list(&mut r)?;
                let ty = r.read_u32()?;
                Declaration::AliasDeclaration {
                    identifier,
                    attribute_list,
                    type_id: self.decode_type_id(ty)?,
                }
            }
            t::OPAQUE_ENUM_DECLARATION => {
                let attribute_list = self.r_attr_spec_list(&mut r)?;
                let (nns_tag, nns_index) = Self::read_child(&mut r)?;
                let nested_name_specifier = self.decode_nested_name_specifier(nns_tag, nns_index)?;
                let (name_tag, name_index) = Self::read_child(&mut r)?;
                let unqualified_id = self.decode_unqualified_name(name_tag, name_index)?;
                let type_specifier_list = self.r_spec_list(&mut r)?;
                Declaration::OpaqueEnumDeclaration {
                    attribute_list,
                    nested_name_specifier,
                    unqualified_id,
                    type_specifier_list,
                }
            }
            t::FUNCTION_DEFINITION => {
                let attribute_list = self.r_attr_spec_list(&mut r)?;
                let decl_specifier_list = self.r_spec_list(&mut r)?;
                let decl = r.read_u32()?;
                let declarator = self.decode_declarator(decl)?;
                let clause = r.read_u32()?;
                let requires_clause = self.decode_requires_clause(clause)?;
                let (body_tag, body_index) = Self::read_child(&mut r)?;
                let function_body = self.decode_function_body(body_tag, body_index)?;
                Declaration::FunctionDefinition {
                    attribute_list,
                    decl_specifier_list,
                    declarator,
                    requires_clause,
                    function_body,
                }
            }
            t::TEMPLATE_DECLARATION => {
                let template_parameter_list = self.r_templ_param_list(&mut r)?;
                let clause = r.read_u32()?;
                let requires_clause = self.decode_requires_clause(clause)?;
                let (decl_tag, decl_index) = Self::read_child(&mut r)?;
                let declaration = self.decode_declaration(decl_tag, decl_index)?;
                Declaration::TemplateDeclaration {
                    template_parameter_list,
                    requires_clause,
                    declaration,
                }
            }
            t::CONCEPT_DEFINITION => {
                let identifier = self.read_ident(&mut r)?;
                let (expr_tag, expr_index) = Self::read_child(&mut r)?;
                Declaration::ConceptDefinition {
                    identifier,
                    expression: self.decode_expression(expr_tag, expr_index)?,
                }
            }
            t::DEDUCTION_GUIDE => {
                let identifier = self.read_ident(&mut r)?;
                let (spec_tag, spec_index) = Self::read_child(&mut r)?;
                let explicit_specifier = self.decode_specifier(spec_tag, spec_index)?;
                let clause = r.read_u32()?;
                let parameter_declaration_clause =
                    self.decode_parameter_declaration_clause(clause)?;
                let (name_tag, name_index) = Self::read_child(&mut r)?;
                let template_id = self.decode_unqualified_name(name_tag, name_index)?;
                Declaration::DeductionGuide {
                    identifier,
                    explicit_specifier,
                    parameter_declaration_clause,
                    template_id,
                }
            }
            t::EXPLICIT_INSTANTIATION => {
                let (decl_tag, decl_index) = Self::read_child(&mut r)?;
                Declaration::ExplicitInstantiation {
                    declaration: self.decode_declaration(decl_tag, decl_index)?,
                }
            }
            t::EXPORT_DECLARATION => {
                let (decl_tag, decl_index) = Self::read_child(&mut r)?;
                Declaration::ExportDeclaration {
                    declaration: self.decode_declaration(decl_tag, decl_index)?,
                }
            }
            t::EXPORT_COMPOUND_DECLARATION => Declaration::ExportCompoundDeclaration {
                declaration_list: self.r_decl_list(&mut r)?,
            },
            t::LINKAGE_SPECIFICATION => {
                let string_literal = self.read_str(&mut r)?;
                let string_literal =
                    string_literal.map(|text| self.unit.control_mut().string_literal(text));
                Declaration::LinkageSpecification {
                    string_literal,
                    declaration_list: self.r_decl_list(&mut r)?,
                }
            }
            t::NAMESPACE_DEFINITION => {
                let identifier = self.read_ident(&mut r)?;
                let is_inline = Self::read_bool(&mut r)?;
                let attribute_list = self.r_attr_spec_list(&mut r)?;
                let nested_namespace_specifier_list = self.r_nested_ns_list(&mut r)?;
                let extra_attribute_list = self.r_attr_spec_list(&mut r)?;
                let declaration_list = self.r_decl_list(&mut r)?;
                Declaration::NamespaceDefinition {
                    identifier,
                    is_inline,
                    attribute_list,
                    nested_namespace_specifier_list,
                    extra_attribute_list,
                    declaration_list,
                }
            }
            t::EMPTY_DECLARATION => Declaration::EmptyDeclaration,
            t::ATTRIBUTE_DECLARATION => Declaration::AttributeDeclaration {
                attribute_list: self.r_attr_spec_list(&mut r)?,
            },
            t::MODULE_IMPORT_DECLARATION => {
                let name = r.read_u32()?;
                let import_name = self.decode_import_name(name)?;
                let attribute_list = self.r_attr_spec_list(&mut r)?;
                Declaration::ModuleImportDeclaration {
                    import_name,
                    attribute_list,
                }
            }
            t::PARAMETER_DECLARATION => {
                let identifier = self.read_ident(&mut r)?;
                let is_this_introduced = Self::read_bool(&mut r)?;
                let is_pack = Self::read_bool(&mut r)?;
                let attribute_list = self.r_attr_spec_list(&mut r)?;
                let type_specifier_list = self.r_spec_list(&mut r)?;
                let decl = r.read_u32()?;
                let declarator = self.decode_declarator(decl)?;
                let (expr_tag, expr_index) = Self::read_child(&mut r)?;
                let expression = self.decode_expression(expr_tag, expr_index)?;
                Declaration::ParameterDeclaration {
                    identifier,
                    is_this_introduced,
                    is_pack,
                    attribute_list,
                    type_specifier_list,
                    declarator,
                    expression,
                }
            }
            t::ACCESS_DECLARATION => Declaration::AccessDeclaration {
                access_specifier: Self::read_token(&mut r)?,
            },
            t::FOR_RANGE_DECLARATION => Declaration::ForRangeDeclaration,
            t::STRUCTURED_BINDING_DECLARATION => {
                let attribute_list = self.r_attr_spec_list(&mut r)?;
                let decl_specifier_list = self.r_spec_list(&mut r)?;
                let binding_list = self.r_unqual_list(&mut r)?;
                let (init_tag, init_index) = Self::read_child(&mut r)?;
                let initializer = self.decode_expression(init_tag, init_index)?;
                Declaration::StructuredBindingDeclaration {
                    attribute_list,
                    decl_specifier_list,
                    binding_list,
                    initializer,
                }
            }
            t::ASM_OPERAND => {
                let symbolic_name = self.read_ident(&mut r)?;
                let constraint = self.read_str(&mut r)?;
                let constraint_literal =
                    constraint.map(|text| self.unit.control_mut().string_literal(text));
                let (expr_tag, expr_index) = Self::read_child(&mut r)?;
                Declaration::AsmOperand {
                    symbolic_name,
                    constraint_literal,
                    expression: self.decode_expression(expr_tag, expr_index)?,
                }
            }
            t::ASM_QUALIFIER => Declaration::AsmQualifier {
                qualifier: Self::read_token(&mut r)?,
            },
            t::ASM_CLOBBER => {
                let literal = self.read_str(&mut r)?;
                Declaration::AsmClobber {
                    literal: literal.map(|text| self.unit.control_mut().string_literal(text)),
                }
            }
            _ => Declaration::AsmGotoLabel {
                identifier: self.read_ident(&mut r)?,
            },
        };
        let id = self.unit.arena_mut().alloc_declaration(node);
        self.finish_entry(wire::TABLE_DECLARATION, index, id.raw());
        Ok(Some(id))
    }

    fn decode_statement(
        &mut self,
        tag: u8,
        index: u32,
    ) -> Result<Option<StatementId>, DecodeError> {
        use crate::wire::stmt_tag as t;
        if tag == TAG_NULL {
            return Ok(None);
        }
        if tag > t::TRY_BLOCK_STATEMENT {
            tracing::debug!(tag, "unknown statement discriminator, yielding null");
            return Ok(None);
        }
        let record = begin_entry!(self, wire::TABLE_STATEMENT, index, StatementId);
        let mut r = ByteReader::new(record);
        let node = match tag {
            t::LABELED_STATEMENT => Statement::LabeledStatement {
                identifier: self.read_ident(&mut r)?,
            },
            t::CASE_STATEMENT => {
                let (expr_tag, expr_index) = Self::read_child(&mut r)?;
                Statement::CaseStatement {
                    expression: self.decode_expression(expr_tag, expr_index)?,
                }
            }
            t::DEFAULT_STATEMENT => Statement::DefaultStatement,
            t::EXPRESSION_STATEMENT => {
                let (expr_tag, expr_index) = Self::read_child(&mut r)?;
                Statement::ExpressionStatement {
                    expression: self.decode_expression(expr_tag, expr_index)?,
                }
            }
            t::COMPOUND_STATEMENT => Statement::CompoundStatement {
                statement_list: self.r_stmt_list(&mut r)?,
            },
            t::IF_STATEMENT => {
                let (init_tag, init_index) = Self::read_child(&mut r)?;
                let initializer = self.decode_statement(init_tag, init_index)?;
                let (cond_tag, cond_index) = Self::read_child(&mut r)?;
                let condition = self.decode_expression(cond_tag, cond_index)?;
                let (stmt_tag, stmt_index) = Self::read_child(&mut r)?;
                let statement = self.decode_statement(stmt_tag, stmt_index)?;
                let (else_tag, else_index) = Self::read_child(&mut r)?;
                let else_statement = self.decode_statement(else_tag, else_index)?;
                Statement::IfStatement {
                    initializer,
                    condition,
                    statement,
                    else_statement,
                }
            }
            t::CONSTEVAL_IF_STATEMENT => {
                let is_not = Self::read_bool(&mut r)?;
                let (stmt_tag, stmt_index) = Self::read_child(&mut r)?;
                let statement = self.decode_statement(stmt_tag, stmt_index)?;
                let (else_tag, else_index) = Self::read_child(&mut r)?;
                let else_statement = self.decode_statement(else_tag, else_index)?;
                Statement::ConstevalIfStatement {
                    is_not,
                    statement,
                    else_statement,
                }
            }
            t::SWITCH_STATEMENT => {
                let (init_tag, init_index) = Self::read_child(&mut r)?;
                let initializer = self.decode_statement(init_tag, init_index)?;
                let (cond_tag, cond_index) = Self::read_child(&mut r)?;
                let condition = self.decode_expression(cond_tag, cond_index)?;
                let (stmt_tag, stmt_index) = Self::read_child(&mut r)?;
                let statement = self.decode_statement(stmt_tag, stmt_index)?;
                Statement::SwitchStatement {
                    initializer,
                    condition,
                    statement,
                }
            }
            t::WHILE_STATEMENT => {
                let (cond_tag, cond_index) = Self::read_child(&mut r)?;
                let condition = self.decode_expression(cond_tag, cond_index)?;
                let (stmt_tag, stmt_index) = Self::read_child(&mut r)?;
                let statement = self.decode_statement(stmt_tag, stmt_index)?;
                Statement::WhileStatement {
                    condition,
                    statement,
                }
            }
            t::DO_STATEMENT => {
                let (stmt_tag, stmt_index) = Self::read_child(&mut r)?;
                let statement = self.decode_statement(stmt_tag, stmt_index)?;
                let (expr_tag, expr_index) = Self::read_child(&mut r)?;
                let expression = self.decode_expression(expr_tag, expr_index)?;
                Statement::DoStatement {
                    statement,
                    expression,
                }
            }
            t::FOR_RANGE_STATEMENT => {
                let (init_tag, init_index) = Self::read_child(&mut r)?;
                let initializer = self.decode_statement(init_tag, init_index)?;
                let (decl_tag, decl_index) = Self::read_child(&mut r)?;
                let range_declaration = self.decode_declaration(decl_tag, decl_index)?;
                let (range_tag, range_index) = Self::read_child(&mut r)?;
                let range_initializer = self.decode_expression(range_tag, range_index)?;
                let (stmt_tag, stmt_index) = Self::read_child(&mut r)?;
                let statement = self.decode_statement(stmt_tag, stmt_index)?;
                Statement::ForRangeStatement {
                    initializer,
                    range_declaration,
                    range_initializer,
                    statement,
                }
            }
            t::FOR_STATEMENT => {
                let (init_tag, init_index) = Self::read_child(&mut r)?;
                let initializer = self.decode_statement(init_tag, init_index)?;
                let (cond_tag, cond_index) = Self::read_child(&mut r)?;
                let condition = self.decode_expression(cond_tag, cond_index)?;
                let (expr_tag, expr_index) = Self::read_child(&mut r)?;
                let expression = self.decode_expression(expr_tag, expr_index)?;
                let (stmt_tag, stmt_index) = Self::read_child(&mut r)?;
                let statement = self.decode_statement(stmt_tag, stmt_index)?;
                Statement::ForStatement {
                    initializer,
                    condition,
                    expression,
                    statement,
                }
            }
            t::BREAK_STATEMENT => Statement::BreakStatement,
            t::CONTINUE_STATEMENT => Statement::ContinueStatement,
            t::RETURN_STATEMENT => {
                let (expr_tag, expr_index) = Self::read_child(&mut r)?;
                Statement::ReturnStatement {
                    expression: self.decode_expression(expr_tag, expr_index)?,
                }
            }
            t::COROUTINE_RETURN_STATEMENT => {
                let (expr_tag, expr_index) = Self::read_child(&mut r)?;
                Statement::CoroutineReturnStatement {
                    expression: self.decode_expression(expr_tag, expr_index)?,
                }
            }
            t::GOTO_STATEMENT => Statement::GotoStatement {
                identifier: self.read_ident(&mut r)?,
            },
            t::DECLARATION_STATEMENT => {
                let (decl_tag, decl_index) = Self::read_child(&mut r)?;
                Statement::DeclarationStatement {
                    declaration: self.decode_declaration(decl_tag, decl_index)?,
                }
            }
            _ => {
                let (stmt_tag, stmt_index) = Self::read_child(&mut r)?;
                let statement = self.decode_statement(stmt_tag, stmt_index)?;
                let handler_list = self.r_handler_list(&mut r)?;
                Statement::TryBlockStatement {
                    statement,
                    handler_list,
                }
            }
        };
        let id = self.unit.arena_mut().alloc_statement(node);
        self.finish_entry(wire::TABLE_STATEMENT, index, id.raw());
        Ok(Some(id))
    }

    fn decode_expression(
        &mut self,
        tag: u8,
        index: u32,
    ) -> Result<Option<ExpressionId>, DecodeError> {
        use crate::wire::expr_tag as t;
        if tag == TAG_NULL {
            return Ok(None);
        }
        if tag > t::PAREN_INITIALIZER {
            tracing::debug!(tag, "unknown expression discriminator, yielding null");
            return Ok(None);
        }
        let record = begin_entry!(self, wire::TABLE_EXPRESSION, index, ExpressionId);
        let mut r = ByteReader::new(record);
        let node = match tag {
            t::CHAR_LITERAL_EXPRESSION => {
                let literal = self.read_str(&mut r)?;
                Expression::CharLiteralExpression {
                    literal: literal.map(|text| self.unit.control_mut().char_literal(text)),
                }
            }
            t::BOOL_LITERAL_EXPRESSION => Expression::BoolLiteralExpression {
                is_true: Self::read_bool(&mut r)?,
            },
            t::INT_LITERAL_EXPRESSION => {
                let literal = self.read_str(&mut r)?;
                Expression::IntLiteralExpression {
                    literal: literal.map(|text| self.unit.control_mut().integer_literal(text)),
                }
            }
            t::FLOAT_LITERAL_EXPRESSION => {
                let literal = self.read_str(&mut r)?;
                Expression::FloatLiteralExpression {
                    literal: literal.map(|text| self.unit.control_mut().float_literal(text)),
                }
            }
            t::NULLPTR_LITERAL_EXPRESSION => Expression::NullptrLiteralExpression {
                literal: Self::read_token(&mut r)?,
            },
            t::STRING_LITERAL_EXPRESSION => {
                let literal = self.read_str(&mut r)?;
                Expression::StringLiteralExpression {
                    literal: literal.map(|text| self.unit.control_mut().string_literal(text)),
                }
            }
            t::USER_DEFINED_STRING_LITERAL_EXPRESSION => {
                let literal = self.read_str(&mut r)?;
                Expression::UserDefinedStringLiteralExpression {
                    literal: literal.map(|text| self.unit.control_mut().string_literal(text)),
                }
            }
            t::THIS_EXPRESSION => Expression::ThisExpression,
            t::NESTED_EXPRESSION => {
                let (expr_tag, expr_index) = Self::read_child(&mut r)?;
                Expression::NestedExpression {
                    expression: self.decode_expression(expr_tag, expr_index)?,
                }
            }
            t::ID_EXPRESSION => {
                let is_template_introduced = Self::read_bool(&mut r)?;
                let (nns_tag, nns_index) = Self::read_child(&mut r)?;
                let nested_name_specifier = self.decode_nested_name_specifier(nns_tag, nns_index)?;
                let (name_tag, name_index) = Self::read_child(&mut r)?;
                let unqualified_id = self.decode_unqualified_name(name_tag, name_index)?;
                Expression::IdExpression {
                    is_template_introduced,
                    nested_name_specifier,
                    unqualified_id,
                }
            }
            t::LAMBDA_EXPRESSION => {
                let capture_default = Self::read_token(&mut r)?;
                let capture_list = self.r_capture_list(&mut r)?;
                let template_parameter_list = self.r_templ_param_list(&mut r)?;
                let clause = r.read_u32()?;
                let template_requires_clause = self.decode_requires_clause(clause)?;
                let params = r.read_u32()?;
                let parameter_declaration_clause =
                    self.decode_parameter_declaration_clause(params)?;
                let lambda_specifier_list = self.r_lambda_spec_list(&mut r)?;
                let (except_tag, except_index) = Self::read_child(&mut r)?;
                let exception_specifier =
                    self.decode_exception_specifier(except_tag, except_index)?;
                let attribute_list = self.r_attr_spec_list(&mut r)?;
                let trailing = r.read_u32()?;
                let trailing_return_type = self.decode_trailing_return_type(trailing)?;
                let clause = r.read_u32()?;
                let requires_clause = self.decode_requires_clause(clause)?;
                let (stmt_tag, stmt_index) = Self::read_child(&mut r)?;
                let statement = self.decode_statement(stmt_tag, stmt_index)?;
                Expression::LambdaExpression {
                    capture_default,
                    capture_list,
                    template_parameter_list,
                    template_requires_clause,
                    parameter_declaration_clause,
                    lambda_specifier_list,
                    exception_specifier,
                    attribute_list,
                    trailing_return_type,
                    requires_clause,
                    statement,
                }
            }
            t::FOLD_EXPRESSION => {
                let op = Self::read_token(&mut r)?;
                let fold_op = Self::read_token(&mut r)?;
                let (left_tag, left_index) = Self::read_child(&mut r)?;
                let left_expression = self.decode_expression(left_tag, left_index)?;
                let (right_tag, right_index) = Self::read_child(&mut r)?;
                let right_expression = self.decode_expression(right_tag, right_index)?;
                Expression::FoldExpression {
                    op,
                    fold_op,
                    left_expression,
                    right_expression,
                }
            }
            t::RIGHT_FOLD_EXPRESSION => {
                let op = Self::read_token(&mut r)?;
                let (expr_tag, expr_index) = Self::read_child(&mut r)?;
                Expression::RightFoldExpression {
                    op,
                    expression: self.decode_expression(expr_tag, expr_index)?,
                }
            }
            t::LEFT_FOLD_EXPRESSION => {
                let op = Self::read_token(&mut r)?;
                let (expr_tag, expr_index) = Self::read_child(&mut r)?;
                Expression::LeftFoldExpression {
                    op,
                    expression: self.decode_expression(expr_tag, expr_index)?,
                }
            }
            t::REQUIRES_EXPRESSION => {
                let params = r.read_u32()?;
                let parameter_declaration_clause =
                    self.decode_parameter_declaration_clause(params)?;
                let requirement_list = self.r_requirement_list(&mut r)?;
                Expression::RequiresExpression {
                    parameter_declaration_clause,
                    requirement_list,
                }
            }
            t::SUBSCRIPT_EXPRESSION => {
                let (base_tag, base_index) = Self::read_child(&mut r)?;
                let base_expression = self.decode_expression(base_tag, base_index)?;
                let (index_tag, index_index) = Self::read_child(&mut r)?;
                let index_expression = self.decode_expression(index_tag, index_index)?;
                Expression::SubscriptExpression {
                    base_expression,
                    index_expression,
                }
            }
            t::CALL_EXPRESSION => {
                let (base_tag, base_index) = Self::read_child(&mut r)?;
                let base_expression = self.decode_expression(base_tag, base_index)?;
                let expression_list = self.r_expr_list(&mut r)?;
                Expression::CallExpression {
                    base_expression,
                    expression_list,
                }
            }
            t::TYPE_CONSTRUCTION => {
                let (spec_tag, spec_index) = Self::read_child(&mut r)?;
                let type_specifier = self.decode_specifier(spec_tag, spec_index)?;
                let expression_list = self.r_expr_list(&mut r)?;
                Expression::TypeConstruction {
                    type_specifier,
                    expression_list,
                }
            }
            t::BRACED_TYPE_CONSTRUCTION => {
                let (spec_tag, spec_index) = Self::read_child(&mut r)?;
                let type_specifier = self.decode_specifier(spec_tag, spec_index)?;
                let (init_tag, init_index) = Self::read_child(&mut r)?;
                let braced_init_list = self.decode_expression(init_tag, init_index)?;
                Expression::BracedTypeConstruction {
                    type_specifier,
                    braced_init_list,
                }
            }
            t::MEMBER_EXPRESSION => {
                let access_op = Self::read_token(&mut r)?;
                let (base_tag, base_index) = Self::read_child(&mut r)?;
                let base_expression = self.decode_expression(base_tag, base_index)?;
                let (member_tag, member_index) = Self::read_child(&mut r)?;
                let member_id = self.decode_unqualified_name(member_tag, member_index)?;
                Expression::MemberExpression {
                    access_op,
                    base_expression,
                    member_id,
                }
            }
            t::POST_INCR_EXPRESSION => {
                let op = Self::read_token(&mut r)?;
                let (base_tag, base_index) = Self::read_child(&mut r)?;
                Expression::PostIncrExpression {
                    op,
                    base_expression: self.decode_expression(base_tag, base_index)?,
                }
            }
            t::CPP_CAST_EXPRESSION => {
                let ty = r.read_u32()?;
                let type_id = self.decode_type_id(ty)?;
                let (expr_tag, expr_index) = Self::read_child(&mut r)?;
                Expression::CppCastExpression {
                    type_id,
                    expression: self.decode_expression(expr_tag, expr_index)?,
                }
            }
            t::BUILTIN_BIT_CAST_EXPRESSION => {
                let ty = r.read_u32()?;
                let type_id = self.decode_type_id(ty)?;
                let (expr_tag, expr_index) = Self::read_child(&mut r)?;
                Expression::BuiltinBitCastExpression {
                    type_id,
                    expression: self.decode_expression(expr_tag, expr_index)?,
                }
            }
            t::TYPEID_EXPRESSION => {
                let (expr_tag, expr_index) = Self::read_child(&mut r)?;
                Expression::TypeidExpression {
                    expression: self.decode_expression(expr_tag, expr_index)?,
                }
            }
            t::TYPEID_OF_TYPE_EXPRESSION => {
                let ty = r.read_u32()?;
                Expression::TypeidOfTypeExpression {
                    type_id: self.decode_type_id(ty)?,
                }
            }
            t::UNARY_EXPRESSION => {
                let op = Self::read_token(&mut r)?;
                let (expr_tag, expr_index) = Self::read_child(&mut r)?;
                Expression::UnaryExpression {
                    op,
                    expression: self.decode_expression(expr_tag, expr_index)?,
                }
            }
            t::AWAIT_EXPRESSION => {
                let (expr_tag, expr_index) = Self::read_child(&mut r)?;
                Expression::AwaitExpression {
                    expression: self.decode_expression(expr_tag, expr_index)?,
                }
            }
            t::SIZEOF_EXPRESSION => {
                let (expr_tag, expr_index) = Self::read_child(&mut r)?;
                Expression::SizeofExpression {
                    expression: self.decode_expression(expr_tag, expr_index)?,
                }
            }
            t::SIZEOF_TYPE_EXPRESSION => {
                let ty = r.read_u32()?;
                Expression::SizeofTypeExpression {
                    type_id: self.decode_type_id(ty)?,
                }
            }
            t::SIZEOF_PACK_EXPRESSION => Expression::SizeofPackExpression {
                identifier: self.read_ident(&mut r)?,
            },
            t::ALIGNOF_TYPE_EXPRESSION => {
                let ty = r.read_u32()?;
                Expression::AlignofTypeExpression {
                    type_id: self.decode_type_id(ty)?,
                }
            }
            t::ALIGNOF_EXPRESSION => {
                let (expr_tag, expr_index) = Self::read_child(&mut r)?;
                Expression::AlignofExpression {
                    expression: self.decode_expression(expr_tag, expr_index)?,
                }
            }
            t::NOEXCEPT_EXPRESSION => {
                let (expr_tag, expr_index) = Self::read_child(&mut r)?;
                Expression::NoexceptExpression {
                    expression: self.decode_expression(expr_tag, expr_index)?,
                }
            }
            t::NEW_EXPRESSION => {
                let placement = r.read_u32()?;
                let new_placement = self.decode_new_placement(placement)?;
                let type_specifier_list = self.r_spec_list(&mut r)?;
                let decl = r.read_u32()?;
                let declarator = self.decode_declarator(decl)?;
                let (init_tag, init_index) = Self::read_child(&mut r)?;
                let new_initializer = self.decode_new_initializer(init_tag, init_index)?;
                Expression::NewExpression {
                    new_placement,
                    type_specifier_list,
                    declarator,
                    new_initializer,
                }
            }
            t::DELETE_EXPRESSION => {
                let (expr_tag, expr_index) = Self::read_child(&mut r)?;
                Expression::DeleteExpression {
                    expression: self.decode_expression(expr_tag, expr_index)?,
                }
            }
            t::CAST_EXPRESSION => {
                let ty = r.read_u32()?;
                let type_id = self.decode_type_id(ty)?;
                let (expr_tag, expr_index) = Self::read_child(&mut r)?;
                Expression::CastExpression {
                    type_id,
                    expression: self.decode_expression(expr_tag, expr_index)?,
                }
            }
            t::IMPLICIT_CAST_EXPRESSION => {
                let (expr_tag, expr_index) = Self::read_child(&mut r)?;
                Expression::ImplicitCastExpression {
                    expression: self.decode_expression(expr_tag, expr_index)?,
                }
            }
            t::BINARY_EXPRESSION => {
                let op = Self::read_token(&mut r)?;
                let (left_tag, left_index) = Self::read_child(&mut r)?;
                let left_expression = self.decode_expression(left_tag, left_index)?;
                let (right_tag, right_index) = Self::read_child(&mut r)?;
                let right_expression = self.decode_expression(right_tag, right_index)?;
                Expression::BinaryExpression {
                    op,
                    left_expression,
                    right_expression,
                }
            }
            t::CONDITIONAL_EXPRESSION => {
                let (cond_tag, cond_index) = Self::read_child(&mut r)?;
                let condition = self.decode_expression(cond_tag, cond_index)?;
                let (true_tag, true_index) = Self::read_child(&mut r)?;
                let iftrue_expression = self.decode_expression(true_tag, true_index)?;
                let (false_tag, false_index) = Self::read_child(&mut r)?;
                let iffalse_expression = self.decode_expression(false_tag, false_index)?;
                Expression::ConditionalExpression {
                    condition,
                    iftrue_expression,
                    iffalse_expression,
                }
            }
            t::YIELD_EXPRESSION => {
                let (expr_tag, expr_index) = Self::read_child(&mut r)?;
                Expression::YieldExpression {
                    expression: self.decode_expression(expr_tag, expr_index)?,
                }
            }
            t::THROW_EXPRESSION => {
                let (expr_tag, expr_index) = Self::read_child(&mut r)?;
                Expression::ThrowExpression {
                    expression: self.decode_expression(expr_tag, expr_index)?,
                }
            }
            t::ASSIGNMENT_EXPRESSION => {
                let op = Self::read_token(&mut r)?;
                let (left_tag, left_index) = Self::read_child(&mut r)?;
                let left_expression = self.decode_expression(left_tag, left_index)?;
                let (right_tag, right_index) = Self::read_child(&mut r)?;
                let right_expression = self.decode_expression(right_tag, right_index)?;
                Expression::AssignmentExpression {
                    op,
                    left_expression,
                    right_expression,
                }
            }
            t::PACK_EXPANSION_EXPRESSION => {
                let (expr_tag, expr_index) = Self::read_child(&mut r)?;
                Expression::PackExpansionExpression {
                    expression: self.decode_expression(expr_tag, expr_index)?,
                }
            }
            t::DESIGNATED_INITIALIZER_CLAUSE => {
                let identifier = self.read_ident(&mut r)?;
                let (init_tag, init_index) = Self::read_child(&mut r)?;
                Expression::DesignatedInitializerClause {
                    identifier,
                    initializer: self.decode_expression(init_tag, init_index)?,
                }
            }
            t::TYPE_TRAITS_EXPRESSION => {
                let type_trait = Self::read_builtin(&mut r)?;
                let type_id_list = self.r_type_id_list(&mut r)?;
                Expression::TypeTraitsExpression {
                    type_trait,
                    type_id_list,
                }
            }
            t::CONDITION_EXPRESSION => {
                let attribute_list = self.r_attr_spec_list(&mut r)?;
                let decl_specifier_list = self.r_spec_list(&mut r)?;
                let decl = r.read_u32()?;
                let declarator = self.decode_declarator(decl)?;
                let (init_tag, init_index) = Self::read_child(&mut r)?;
                let initializer = self.decode_expression(init_tag, init_index)?;
                Expression::ConditionExpression {
                    attribute_list,
                    decl_specifier_list,
                    declarator,
                    initializer,
                }
            }
            t::EQUAL_INITIALIZER => {
                let (expr_tag, expr_index) = Self::read_child(&mut r)?;
                Expression::EqualInitializer {
                    expression: self.decode_expression(expr_tag, expr_index)?,
                }
            }
            t::BRACED_INIT_LIST => Expression::BracedInitList {
                expression_list: self.r_expr_list(&mut r)?,
            },
            _ => Expression::ParenInitializer {
                expression_list: self.r_expr_list(&mut r)?,
            },
        };
        let id = self.unit.arena_mut().alloc_expression(node);
        self.finish_entry(wire::TABLE_EXPRESSION, index, id.raw());
        Ok(Some(id))
    }

    fn decode_specifier(
        &mut self,
        tag: u8,
        index: u32,
    ) -> Result<Option<crest_ast::SpecifierId>, DecodeError> {
        use crate::wire::spec_tag as t;
        if tag == TAG_NULL {
            return Ok(None);
        }
        if tag > t::TYPENAME_SPECIFIER {
            tracing::debug!(tag, "unknown specifier discriminator, yielding null");
            return Ok(None);
        }
        let record = begin_entry!(self, wire::TABLE_SPECIFIER, index, crest_ast::SpecifierId);
        let mut r = ByteReader::new(record);
        let node = match tag {
            t::TYPEDEF_SPECIFIER => Specifier::TypedefSpecifier,
            t::FRIEND_SPECIFIER => Specifier::FriendSpecifier,
            t::CONSTEVAL_SPECIFIER => Specifier::ConstevalSpecifier,
            t::CONSTINIT_SPECIFIER => Specifier::ConstinitSpecifier,
            t::CONSTEXPR_SPECIFIER => Specifier::ConstexprSpecifier,
            t::INLINE_SPECIFIER => Specifier::InlineSpecifier,
            t::STATIC_SPECIFIER => Specifier::StaticSpecifier,
            t::EXTERN_SPECIFIER => Specifier::ExternSpecifier,
            t::THREAD_LOCAL_SPECIFIER => Specifier::ThreadLocalSpecifier,
            t::THREAD_SPECIFIER => Specifier::ThreadSpecifier,
            t::MUTABLE_SPECIFIER => Specifier::MutableSpecifier,
            t::VIRTUAL_SPECIFIER => Specifier::VirtualSpecifier,
            t::EXPLICIT_SPECIFIER => {
                let (expr_tag, expr_index) = Self::read_child(&mut r)?;
                Specifier::ExplicitSpecifier {
                    expression: self.decode_expression(expr_tag, expr_index)?,
                }
            }
            t::AUTO_TYPE_SPECIFIER => Specifier::AutoTypeSpecifier,
            t::VOID_TYPE_SPECIFIER => Specifier::VoidTypeSpecifier,
            t::SIZE_TYPE_SPECIFIER => Specifier::SizeTypeSpecifier {
                specifier: Self::read_token(&mut r)?,
            },
            t::SIGN_TYPE_SPECIFIER => Specifier::SignTypeSpecifier {
                specifier: Self::read_token(&mut r)?,
            },
            t::VA_LIST_TYPE_SPECIFIER => Specifier::VaListTypeSpecifier {
                specifier: Self::read_token(&mut r)?,
            },
            t::INTEGRAL_TYPE_SPECIFIER => Specifier::IntegralTypeSpecifier {
                specifier: Self::read_token(&mut r)?,
            },
            t::FLOATING_POINT_TYPE_SPECIFIER => Specifier::FloatingPointTypeSpecifier {
                specifier: Self::read_token(&mut r)?,
            },
            t::COMPLEX_TYPE_SPECIFIER => Specifier::ComplexTypeSpecifier,
            t::NAMED_TYPE_SPECIFIER => {
                let is_template_introduced = Self::read_bool(&mut r)?;
                let (nns_tag, nns_index) = Self::read_child(&mut r)?;
                let nested_name_specifier = self.decode_nested_name_specifier(nns_tag, nns_index)?;
                let (name_tag, name_index) = Self::read_child(&mut r)?;
                let unqualified_id = self.decode_unqualified_name(name_tag, name_index)?;
                Specifier::NamedTypeSpecifier {
                    is_template_introduced,
                    nested_name_specifier,
                    unqualified_id,
                }
            }
            t::ATOMIC_TYPE_SPECIFIER => {
                let ty = r.read_u32()?;
                Specifier::AtomicTypeSpecifier {
                    type_id: self.decode_type_id(ty)?,
                }
            }
            t::UNDERLYING_TYPE_SPECIFIER => {
                let ty = r.read_u32()?;
                Specifier::UnderlyingTypeSpecifier {
                    type_id: self.decode_type_id(ty)?,
                }
            }
            t::ELABORATED_TYPE_SPECIFIER => {
                let class_key = Self::read_token(&mut r)?;
                let is_template_introduced = Self::read_bool(&mut r)?;
                let attribute_list = self.r_attr_spec_list(&mut r)?;
                let (nns_tag, nns_index) = Self::read_child(&mut r)?;
                let nested_name_specifier = self.decode_nested_name_specifier(nns_tag, nns_index)?;
                let (name_tag, name_index) = Self::read_child(&mut r)?;
                let unqualified_id = self.decode_unqualified_name(name_tag, name_index)?;
                Specifier::ElaboratedTypeSpecifier {
                    class_key,
                    is_template_introduced,
                    attribute_list,
                    nested_name_specifier,
                    unqualified_id,
                }
            }
            t::DECLTYPE_AUTO_SPECIFIER => Specifier::DecltypeAutoSpecifier,
            t::DECLTYPE_SPECIFIER => {
                let (expr_tag, expr_index) = Self::read_child(&mut r)?;
                Specifier::DecltypeSpecifier {
                    expression: self.decode_expression(expr_tag, expr_index)?,
                }
            }
            t::PLACEHOLDER_TYPE_SPECIFIER => {
                let constraint = r.read_u32()?;
                let type_constraint = self.decode_type_constraint(constraint)?;
                let (spec_tag, spec_index) = Self::read_child(&mut r)?;
                let specifier = self.decode_specifier(spec_tag, spec_index)?;
                Specifier::PlaceholderTypeSpecifier {
                    type_constraint,
                    specifier,
                }
            }
            t::CONST_QUALIFIER => Specifier::ConstQualifier,
            t::VOLATILE_QUALIFIER => Specifier::VolatileQualifier,
            t::RESTRICT_QUALIFIER => Specifier::RestrictQualifier,
            t::ENUM_SPECIFIER => {
                let attribute_list = self.r_attr_spec_list(&mut r)?;
                let (nns_tag, nns_index) = Self::read_child(&mut r)?;
                let nested_name_specifier = self.decode_nested_name_specifier(nns_tag, nns_index)?;
                let (name_tag, name_index) = Self::read_child(&mut r)?;
                let unqualified_id = self.decode_unqualified_name(name_tag, name_index)?;
                let type_specifier_list = self.r_spec_list(&mut r)?;
                let enumerator_list = self.r_enumerator_list(&mut r)?;
                Specifier::EnumSpecifier {
                    attribute_list,
                    nested_name_specifier,
                    unqualified_id,
                    type_specifier_list,
                    enumerator_list,
                }
            }
            t::CLASS_SPECIFIER => {
                let class_key = Self::read_token(&mut r)?;
                let is_final = Self::read_bool(&mut r)?;
                let attribute_list = self.r_attr_spec_list(&mut r)?;
                let (nns_tag, nns_index) = Self::read_child(&mut r)?;
                let nested_name_specifier = self.decode_nested_name_specifier(nns_tag, nns_index)?;
                let (name_tag, name_index) = Self::read_child(&mut r)?;
                let unqualified_id = self.decode_unqualified_name(name_tag, name_index)?;
                let base_specifier_list = self.r_base_spec_list(&mut r)?;
                let declaration_list = self.r_decl_list(&mut r)?;
                Specifier::ClassSpecifier {
                    class_key,
                    is_final,
                    attribute_list,
                    nested_name_specifier,
                    unqualified_id,
                    base_specifier_list,
                    declaration_list,
                }
            }
            _ => {
                let (nns_tag, nns_index) = Self::read_child(&mut r)?;
                let nested_name_specifier = self.decode_nested_name_specifier(nns_tag, nns_index)?;
                let (name_tag, name_index) = Self::read_child(&mut r)?;
                let unqualified_id = self.decode_unqualified_name(name_tag, name_index)?;
                Specifier::TypenameSpecifier {
                    nested_name_specifier,
                    unqualified_id,
                }
            }
        };
        let id = self.unit.arena_mut().alloc_specifier(node);
        self.finish_entry(wire::TABLE_SPECIFIER, index, id.raw());
        Ok(Some(id))
    }

    fn decode_template_parameter(
        &mut self,
        tag: u8,
        index: u32,
    ) -> Result<Option<crest_ast::TemplateParameterId>, DecodeError> {
        use crate::wire::templ_param_tag as t;
        if tag == TAG_NULL {
            return Ok(None);
        }
        if tag > t::CONSTRAINT_TYPE_PARAMETER {
            tracing::debug!(tag, "unknown template-parameter discriminator, yielding null");
            return Ok(None);
        }
        let record = begin_entry!(
            self,
            wire::TABLE_TEMPLATE_PARAMETER,
            index,
            crest_ast::TemplateParameterId
        );
        let mut r = ByteReader::new(record);
        let node = match tag {
            t::TEMPLATE_TYPE_PARAMETER => {
                let depth = r.read_u32()?;
                let param_index = r.read_u32()?;
                let identifier = self.read_ident(&mut r)?;
                let is_pack = Self::read_bool(&mut r)?;
                let template_parameter_list = self.r_templ_param_list(&mut r)?;
                let clause = r.read_u32()?;
                let requires_clause = self.decode_requires_clause(clause)?;
                let (expr_tag, expr_index) = Self::read_child(&mut r)?;
                let id_expression = self.decode_expression(expr_tag, expr_index)?;
                TemplateParameter::TemplateTypeParameter {
                    depth,
                    index: param_index,
                    identifier,
                    is_pack,
                    template_parameter_list,
                    requires_clause,
                    id_expression,
                }
            }
            t::NON_TYPE_TEMPLATE_PARAMETER => {
                let depth = r.read_u32()?;
                let param_index = r.read_u32()?;
                let (decl_tag, decl_index) = Self::read_child(&mut r)?;
                let declaration = self.decode_declaration(decl_tag, decl_index)?;
                TemplateParameter::NonTypeTemplateParameter {
                    depth,
                    index: param_index,
                    declaration,
                }
            }
            t::TYPENAME_TYPE_PARAMETER => {
                let depth = r.read_u32()?;
                let param_index = r.read_u32()?;
                let identifier = self.read_ident(&mut r)?;
                let is_pack = Self::read_bool(&mut r)?;
                let ty = r.read_u32()?;
                let type_id = self.decode_type_id(ty)?;
                TemplateParameter::TypenameTypeParameter {
                    depth,
                    index: param_index,
                    identifier,
                    is_pack,
                    type_id,
                }
            }
            _ => {
                let depth = r.read_u32()?;
                let param_index = r.read_u32()?;
                let identifier = self.read_ident(&mut r)?;
                let constraint = r.read_u32()?;
                let type_constraint = self.decode_type_constraint(constraint)?;
                let ty = r.read_u32()?;
                let type_id = self.decode_type_id(ty)?;
                TemplateParameter::ConstraintTypeParameter {
                    depth,
                    index: param_index,
                    identifier,
                    type_constraint,
                    type_id,
                }
            }
        };
        let id = self.unit.arena_mut().alloc_template_parameter(node);
        self.finish_entry(wire::TABLE_TEMPLATE_PARAMETER, index, id.raw());
        Ok(Some(id))
    }

    fn decode_ptr_operator(
        &mut self,
        tag: u8,
        index: u32,
    ) -> Result<Option<crest_ast::PtrOperatorId>, DecodeError> {
        use crate::wire::ptr_op_tag as t;
        if tag == TAG_NULL {
            return Ok(None);
        }
        if tag > t::PTR_TO_MEMBER_OPERATOR {
            tracing::debug!(tag, "unknown ptr-operator discriminator, yielding null");
            return Ok(None);
        }
        let record = begin_entry!(self, wire::TABLE_PTR_OPERATOR, index, crest_ast::PtrOperatorId);
        let mut r = ByteReader::new(record);
        let node = match tag {
            t::POINTER_OPERATOR => {
                let attribute_list = self.r_attr_spec_list(&mut r)?;
                let cv_qualifier_list = self.r_spec_list(&mut r)?;
                PtrOperator::PointerOperator {
                    attribute_list,
                    cv_qualifier_list,
                }
            }
            t::REFERENCE_OPERATOR => {
                let ref_op = Self::read_token(&mut r)?;
                let attribute_list = self.r_attr_spec_list(&mut r)?;
                PtrOperator::ReferenceOperator {
                    ref_op,
                    attribute_list,
                }
            }
            _ => {
                let (nns_tag, nns_index) = Self::read_child(&mut r)?;
                let nested_name_specifier = self.decode_nested_name_specifier(nns_tag, nns_index)?;
                let attribute_list = self.r_attr_spec_list(&mut r)?;
                let cv_qualifier_list = self.r_spec_list(&mut r)?;
                PtrOperator::PtrToMemberOperator {
                    nested_name_specifier,
                    attribute_list,
                    cv_qualifier_list,
                }
            }
        };
        let id = self.unit.arena_mut().alloc_ptr_operator(node);
        self.finish_entry(wire::TABLE_PTR_OPERATOR, index, id.raw());
        Ok(Some(id))
    }

    fn decode_core_declarator(
        &mut self,
        tag: u8,
        index: u32,
    ) -> Result<Option<crest_ast::CoreDeclaratorId>, DecodeError> {
        use crate::wire::core_decl_tag as t;
        if tag == TAG_NULL {
            return Ok(None);
        }
        if tag > t::NESTED_DECLARATOR {
            tracing::debug!(tag, "unknown core-declarator discriminator, yielding null");
            return Ok(None);
        }
        let record = begin_entry!(
            self,
            wire::TABLE_CORE_DECLARATOR,
            index,
            crest_ast::CoreDeclaratorId
        );
        let mut r = ByteReader::new(record);
        let node = match tag {
            t::BITFIELD_DECLARATOR => {
                let (name_tag, name_index) = Self::read_child(&mut r)?;
                let unqualified_id = self.decode_unqualified_name(name_tag, name_index)?;
                let (size_tag, size_index) = Self::read_child(&mut r)?;
                let size_expression = self.decode_expression(size_tag, size_index)?;
                CoreDeclarator::BitfieldDeclarator {
                    unqualified_id,
                    size_expression,
                }
            }
            t::PARAMETER_PACK => {
                let (core_tag, core_index) = Self::read_child(&mut r)?;
                CoreDeclarator::ParameterPack {
                    core_declarator: self.decode_core_declarator(core_tag, core_index)?,
                }
            }
            t::ID_DECLARATOR => {
                let is_template_introduced = Self::read_bool(&mut r)?;
                let (nns_tag, nns_index) = Self::read_child(&mut r)?;
                let nested_name_specifier = self.decode_nested_name_specifier(nns_tag, nns_index)?;
                let (name_tag, name_index) = Self::read_child(&mut r)?;
                let unqualified_id = self.decode_unqualified_name(name_tag, name_index)?;
                let attribute_list = self.r_attr_spec_list(&mut r)?;
                CoreDeclarator::IdDeclarator {
                    is_template_introduced,
                    nested_name_specifier,
                    unqualified_id,
                    attribute_list,
                }
            }
            _ => {
                let decl = r.read_u32()?;
                CoreDeclarator::NestedDeclarator {
                    declarator: self.decode_declarator(decl)?,
                }
            }
        };
        let id = self.unit.arena_mut().alloc_core_declarator(node);
        self.finish_entry(wire::TABLE_CORE_DECLARATOR, index, id.raw());
        Ok(Some(id))
    }

    fn decode_declarator_chunk(
        &mut self,
        tag: u8,
        index: u32,
    ) -> Result<Option<crest_ast::DeclaratorChunkId>, DecodeError> {
        use crate::wire::chunk_tag as t;
        if tag == TAG_NULL {
            return Ok(None);
        }
        if tag > t::ARRAY_DECLARATOR_CHUNK {
            tracing::debug!(tag, "unknown declarator-chunk discriminator, yielding null");
            return Ok(None);
        }
        let record = begin_entry!(
            self,
            wire::TABLE_DECLARATOR_CHUNK,
            index,
            crest_ast::DeclaratorChunkId
        );
        let mut r = ByteReader::new(record);
        let node = match tag {
            t::FUNCTION_DECLARATOR_CHUNK => {
                let is_final = Self::read_bool(&mut r)?;
                let is_override = Self::read_bool(&mut r)?;
                let is_pure = Self::read_bool(&mut r)?;
                let params = r.read_u32()?;
                let parameter_declaration_clause =
                    self.decode_parameter_declaration_clause(params)?;
                let cv_qualifier_list = self.r_spec_list(&mut r)?;
                let (except_tag, except_index) = Self::read_child(&mut r)?;
                let exception_specifier =
                    self.decode_exception_specifier(except_tag, except_index)?;
                let attribute_list = self.r_attr_spec_list(&mut r)?;
                let trailing = r.read_u32()?;
                let trailing_return_type = self.decode_trailing_return_type(trailing)?;
                DeclaratorChunk::FunctionDeclaratorChunk {
                    is_final,
                    is_override,
                    is_pure,
                    parameter_declaration_clause,
                    cv_qualifier_list,
                    exception_specifier,
                    attribute_list,
                    trailing_return_type,
                }
            }
            _ => {
                let (expr_tag, expr_index) = Self::read_child(&mut r)?;
                let expression = self.decode_expression(expr_tag, expr_index)?;
                let attribute_list = self.r_attr_spec_list(&mut r)?;
                DeclaratorChunk::ArrayDeclaratorChunk {
                    expression,
                    attribute_list,
                }
            }
        };
        let id = self.unit.arena_mut().alloc_declarator_chunk(node);
        self.finish_entry(wire::TABLE_DECLARATOR_CHUNK, index, id.raw());
        Ok(Some(id))
    }

    fn decode_unqualified_name(
        &mut self,
        tag: u8,
        index: u32,
    ) -> Result<Option<crest_ast::UnqualifiedNameId>, DecodeError> {
        use crate::wire::unqual_tag as t;
        if tag == TAG_NULL {
            return Ok(None);
        }
        if tag > t::OPERATOR_FUNCTION_TEMPLATE_ID {
            tracing::debug!(tag, "unknown unqualified-id discriminator, yielding null");
            return Ok(None);
        }
        let record = begin_entry!(
            self,
            wire::TABLE_UNQUALIFIED_NAME,
            index,
            crest_ast::UnqualifiedNameId
        );
        let mut r = ByteReader::new(record);
        let node = match tag {
            t::NAME_ID => UnqualifiedName::NameId {
                identifier: self.read_ident(&mut r)?,
            },
            t::DESTRUCTOR_ID => {
                let (name_tag, name_index) = Self::read_child(&mut r)?;
                UnqualifiedName::DestructorId {
                    id: self.decode_unqualified_name(name_tag, name_index)?,
                }
            }
            t::DECLTYPE_ID => {
                let (spec_tag, spec_index) = Self::read_child(&mut r)?;
                UnqualifiedName::DecltypeId {
                    decltype_specifier: self.decode_specifier(spec_tag, spec_index)?,
                }
            }
            t::OPERATOR_FUNCTION_ID => UnqualifiedName::OperatorFunctionId {
                op: Self::read_token(&mut r)?,
            },
            t::LITERAL_OPERATOR_ID => {
                let literal = self.read_str(&mut r)?;
                let literal = literal.map(|text| self.unit.control_mut().string_literal(text));
                let identifier = self.read_ident(&mut r)?;
                UnqualifiedName::LiteralOperatorId {
                    literal,
                    identifier,
                }
            }
            t::CONVERSION_FUNCTION_ID => {
                let ty = r.read_u32()?;
                UnqualifiedName::ConversionFunctionId {
                    type_id: self.decode_type_id(ty)?,
                }
            }
            t::SIMPLE_TEMPLATE_ID => {
                let identifier = self.read_ident(&mut r)?;
                let template_argument_list = self.r_templ_arg_list(&mut r)?;
                UnqualifiedName::SimpleTemplateId {
                    identifier,
                    template_argument_list,
                }
            }
            t::LITERAL_OPERATOR_TEMPLATE_ID => {
                let (name_tag, name_index) = Self::read_child(&mut r)?;
                let literal_operator_id = self.decode_unqualified_name(name_tag, name_index)?;
                let template_argument_list = self.r_templ_arg_list(&mut r)?;
                UnqualifiedName::LiteralOperatorTemplateId {
                    literal_operator_id,
                    template_argument_list,
                }
            }
            _ => {
                let (name_tag, name_index) = Self::read_child(&mut r)?;
                let operator_function_id = self.decode_unqualified_name(name_tag, name_index)?;
                let template_argument_list = self.r_templ_arg_list(&mut r)?;
                UnqualifiedName::OperatorFunctionTemplateId {
                    operator_function_id,
                    template_argument_list,
                }
            }
        };
        let id = self.unit.arena_mut().alloc_unqualified_name(node);
        self.finish_entry(wire::TABLE_UNQUALIFIED_NAME, index, id.raw());
        Ok(Some(id))
    }

    fn decode_nested_name_specifier(
        &mut self,
        tag: u8,
        index: u32,
    ) -> Result<Option<crest_ast::NestedNameSpecifierId>, DecodeError> {
        use crate::wire::nns_tag as t;
        if tag == TAG_NULL {
            return Ok(None);
        }
        if tag > t::TEMPLATE_NESTED_NAME_SPECIFIER {
            tracing::debug!(tag, "unknown nested-name-specifier discriminator, yielding null");
            return Ok(None);
        }
        let record = begin_entry!(
            self,
            wire::TABLE_NESTED_NAME_SPECIFIER,
            index,
            crest_ast::NestedNameSpecifierId
        );
        let mut r = ByteReader::new(record);
        let node = match tag {
            t::GLOBAL_NESTED_NAME_SPECIFIER => NestedNameSpecifier::GlobalNestedNameSpecifier,
            t::SIMPLE_NESTED_NAME_SPECIFIER => {
                let identifier = self.read_ident(&mut r)?;
                let (nns_tag, nns_index) = Self::read_child(&mut r)?;
                let nested_name_specifier = self.decode_nested_name_specifier(nns_tag, nns_index)?;
                NestedNameSpecifier::SimpleNestedNameSpecifier {
                    identifier,
                    nested_name_specifier,
                }
            }
            t::DECLTYPE_NESTED_NAME_SPECIFIER => {
                let (nns_tag, nns_index) = Self::read_child(&mut r)?;
                let nested_name_specifier = self.decode_nested_name_specifier(nns_tag, nns_index)?;
                let (spec_tag, spec_index) = Self::read_child(&mut r)?;
                let decltype_specifier = self.decode_specifier(spec_tag, spec_index)?;
                NestedNameSpecifier::DecltypeNestedNameSpecifier {
                    nested_name_specifier,
                    decltype_specifier,
                }
            }
            _ => {
                let is_template_introduced = Self::read_bool(&mut r)?;
                let (nns_tag, nns_index) = Self::read_child(&mut r)?;
                let nested_name_specifier = self.decode_nested_name_specifier(nns_tag, nns_index)?;
                let (name_tag, name_index) = Self::read_child(&mut r)?;
                let template_id = self.decode_unqualified_name(name_tag, name_index)?;
                NestedNameSpecifier::TemplateNestedNameSpecifier {
                    is_template_introduced,
                    nested_name_specifier,
                    template_id,
                }
            }
        };
        let id = self.unit.arena_mut().alloc_nested_name_specifier(node);
        self.finish_entry(wire::TABLE_NESTED_NAME_SPECIFIER, index, id.raw());
        Ok(Some(id))
    }

    fn decode_function_body(
        &mut self,
        tag: u8,
        index: u32,
    ) -> Result<Option<crest_ast::FunctionBodyId>, DecodeError> {
        use crate::wire::body_tag as t;
        if tag == TAG_NULL {
            return Ok(None);
        }
        if tag > t::DELETE_FUNCTION_BODY {
            tracing::debug!(tag, "unknown function-body discriminator, yielding null");
            return Ok(None);
        }
        let record = begin_entry!(self, wire::TABLE_FUNCTION_BODY, index, crest_ast::FunctionBodyId);
        let mut r = ByteReader::new(record);
        let node = match tag {
            t::DEFAULT_FUNCTION_BODY => FunctionBody::DefaultFunctionBody,
            t::COMPOUND_STATEMENT_FUNCTION_BODY => {
                let mem_initializer_list = self.r_mem_init_list(&mut r)?;
                let (stmt_tag, stmt_index) = Self::read_child(&mut r)?;
                let statement = self.decode_statement(stmt_tag, stmt_index)?;
                FunctionBody::CompoundStatementFunctionBody {
                    mem_initializer_list,
                    statement,
                }
            }
            t::TRY_STATEMENT_FUNCTION_BODY => {
                let mem_initializer_list = self.r_mem_init_list(&mut r)?;
                let (stmt_tag, stmt_index) = Self::read_child(&mut r)?;
                let statement = self.decode_statement(stmt_tag, stmt_index)?;
                let handler_list = self.r_handler_list(&mut r)?;
                FunctionBody::TryStatementFunctionBody {
                    mem_initializer_list,
                    statement,
                    handler_list,
                }
            }
            _ => FunctionBody::DeleteFunctionBody,
        };
        let id = self.unit.arena_mut().alloc_function_body(node);
        self.finish_entry(wire::TABLE_FUNCTION_BODY, index, id.raw());
        Ok(Some(id))
    }

    fn decode_template_argument(
        &mut self,
        tag: u8,
        index: u32,
    ) -> Result<Option<crest_ast::TemplateArgumentId>, DecodeError> {
        use crate::wire::templ_arg_tag as t;
        if tag == TAG_NULL {
            return Ok(None);
        }
        if tag > t::EXPRESSION_TEMPLATE_ARGUMENT {
            tracing::debug!(tag, "unknown template-argument discriminator, yielding null");
            return Ok(None);
        }
        let record = begin_entry!(
            self,
            wire::TABLE_TEMPLATE_ARGUMENT,
            index,
            crest_ast::TemplateArgumentId
        );
        let mut r = ByteReader::new(record);
        let node = match tag {
            t::TYPE_TEMPLATE_ARGUMENT => {
                let ty = r.read_u32()?;
                TemplateArgument::TypeTemplateArgument {
                    type_id: self.decode_type_id(ty)?,
                }
            }
            _ => {
                let (expr_tag, expr_index) = Self::read_child(&mut r)?;
                TemplateArgument::ExpressionTemplateArgument {
                    expression: self.decode_expression(expr_tag, expr_index)?,
                }
            }
        };
        let id = self.unit.arena_mut().alloc_template_argument(node);
        self.finish_entry(wire::TABLE_TEMPLATE_ARGUMENT, index, id.raw());
        Ok(Some(id))
    }

    fn decode_exception_specifier(
        &mut self,
        tag: u8,
        index: u32,
    ) -> Result<Option<crest_ast::ExceptionSpecifierId>, DecodeError> {
        use crate::wire::except_spec_tag as t;
        if tag == TAG_NULL {
            return Ok(None);
        }
        if tag > t::NOEXCEPT_SPECIFIER {
            tracing::debug!(tag, "unknown exception-specifier discriminator, yielding null");
            return Ok(None);
        }
        let record = begin_entry!(
            self,
            wire::TABLE_EXCEPTION_SPECIFIER,
            index,
            crest_ast::ExceptionSpecifierId
        );
        let mut r = ByteReader::new(record);
        let node = match tag {
            t::THROW_EXCEPTION_SPECIFIER => ExceptionSpecifier::ThrowExceptionSpecifier,
            _ => {
                let (expr_tag, expr_index) = Self::read_child(&mut r)?;
                ExceptionSpecifier::NoexceptSpecifier {
                    expression: self.decode_expression(expr_tag, expr_index)?,
                }
            }
        };
        let id = self.unit.arena_mut().alloc_exception_specifier(node);
        self.finish_entry(wire::TABLE_EXCEPTION_SPECIFIER, index, id.raw());
        Ok(Some(id))
    }

    fn decode_requirement(
        &mut self,
        tag: u8,
        index: u32,
    ) -> Result<Option<crest_ast::RequirementId>, DecodeError> {
        use crate::wire::requirement_tag as t;
        if tag == TAG_NULL {
            return Ok(None);
        }
        if tag > t::NESTED_REQUIREMENT {
            tracing::debug!(tag, "unknown requirement discriminator, yielding null");
            return Ok(None);
        }
        let record = begin_entry!(self, wire::TABLE_REQUIREMENT, index, crest_ast::RequirementId);
        let mut r = ByteReader::new(record);
        let node = match tag {
            t::SIMPLE_REQUIREMENT => {
                let (expr_tag, expr_index) = Self::read_child(&mut r)?;
                Requirement::SimpleRequirement {
                    expression: self.decode_expression(expr_tag, expr_index)?,
                }
            }
            t::COMPOUND_REQUIREMENT => {
                let (expr_tag, expr_index) = Self::read_child(&mut r)?;
                let expression = self.decode_expression(expr_tag, expr_index)?;
                let constraint = r.read_u32()?;
                let type_constraint = self.decode_type_constraint(constraint)?;
                Requirement::CompoundRequirement {
                    expression,
                    type_constraint,
                }
            }
            t::TYPE_REQUIREMENT => {
                let (nns_tag, nns_index) = Self::read_child(&mut r)?;
                let nested_name_specifier = self.decode_nested_name_specifier(nns_tag, nns_index)?;
                let (name_tag, name_index) = Self::read_child(&mut r)?;
                let unqualified_id = self.decode_unqualified_name(name_tag, name_index)?;
                Requirement::TypeRequirement {
                    nested_name_specifier,
                    unqualified_id,
                }
            }
            _ => {
                let (expr_tag, expr_index) = Self::read_child(&mut r)?;
                Requirement::NestedRequirement {
                    expression: self.decode_expression(expr_tag, expr_index)?,
                }
            }
        };
        let id = self.unit.arena_mut().alloc_requirement(node);
        self.finish_entry(wire::TABLE_REQUIREMENT, index, id.raw());
        Ok(Some(id))
    }

    fn decode_new_initializer(
        &mut self,
        tag: u8,
        index: u32,
    ) -> Result<Option<crest_ast::NewInitializerId>, DecodeError> {
        use crate::wire::new_init_tag as t;
        if tag == TAG_NULL {
            return Ok(None);
        }
        if tag > t::NEW_BRACED_INITIALIZER {
            tracing::debug!(tag, "unknown new-initializer discriminator, yielding null");
            return Ok(None);
        }
        let record = begin_entry!(
            self,
            wire::TABLE_NEW_INITIALIZER,
            index,
            crest_ast::NewInitializerId
        );
        let mut r = ByteReader::new(record);
        let node = match tag {
            t::NEW_PAREN_INITIALIZER => NewInitializer::NewParenInitializer {
                expression_list: self.r_expr_list(&mut r)?,
            },
            _ => {
                let (init_tag, init_index) = Self::read_child(&mut r)?;
                NewInitializer::NewBracedInitializer {
                    braced_init_list: self.decode_expression(init_tag, init_index)?,
                }
            }
        };
        let id = self.unit.arena_mut().alloc_new_initializer(node);
        self.finish_entry(wire::TABLE_NEW_INITIALIZER, index, id.raw());
        Ok(Some(id))
    }

    fn decode_mem_initializer(
        &mut self,
        tag: u8,
        index: u32,
    ) -> Result<Option<crest_ast::MemInitializerId>, DecodeError> {
        use crate::wire::mem_init_tag as t;
        if tag == TAG_NULL {
            return Ok(None);
        }
        if tag > t::BRACED_MEM_INITIALIZER {
            tracing::debug!(tag, "unknown mem-initializer discriminator, yielding null");
            return Ok(None);
        }
        let record = begin_entry!(
            self,
            wire::TABLE_MEM_INITIALIZER,
            index,
            crest_ast::MemInitializerId
        );
        let mut r = ByteReader::new(record);
        let node = match tag {
            t::PAREN_MEM_INITIALIZER => {
                let (nns_tag, nns_index) = Self::read_child(&mut r)?;
                let nested_name_specifier = self.decode_nested_name_specifier(nns_tag, nns_index)?;
                let (name_tag, name_index) = Self::read_child(&mut r)?;
                let unqualified_id = self.decode_unqualified_name(name_tag, name_index)?;
                let expression_list = self.r_expr_list(&mut r)?;
                MemInitializer::ParenMemInitializer {
                    nested_name_specifier,
                    unqualified_id,
                    expression_list,
                }
            }
            _ => {
                let (nns_tag, nns_index) = Self::read_child(&mut r)?;
                let nested_name_specifier = self.decode_nested_name_specifier(nns_tag, nns_index)?;
                let (name_tag, name_index) = Self::read_child(&mut r)?;
                let unqualified_id = self.decode_unqualified_name(name_tag, name_index)?;
                let (init_tag, init_index) = Self::read_child(&mut r)?;
                let braced_init_list = self.decode_expression(init_tag, init_index)?;
                MemInitializer::BracedMemInitializer {
                    nested_name_specifier,
                    unqualified_id,
                    braced_init_list,
                }
            }
        };
        let id = self.unit.arena_mut().alloc_mem_initializer(node);
        self.finish_entry(wire::TABLE_MEM_INITIALIZER, index, id.raw());
        Ok(Some(id))
    }

    fn decode_lambda_capture(
        &mut self,
        tag: u8,
        index: u32,
    ) -> Result<Option<crest_ast::LambdaCaptureId>, DecodeError> {
        use crate::wire::capture_tag as t;
        if tag == TAG_NULL {
            return Ok(None);
        }
        if tag > t::INIT_LAMBDA_CAPTURE {
            tracing::debug!(tag, "unknown lambda-capture discriminator, yielding null");
            return Ok(None);
        }
        let record = begin_entry!(
            self,
            wire::TABLE_LAMBDA_CAPTURE,
            index,
            crest_ast::LambdaCaptureId
        );
        let mut r = ByteReader::new(record);
        let node = match tag {
            t::THIS_LAMBDA_CAPTURE => LambdaCapture::ThisLambdaCapture,
            t::DEREF_THIS_LAMBDA_CAPTURE => LambdaCapture::DerefThisLambdaCapture,
            t::SIMPLE_LAMBDA_CAPTURE => LambdaCapture::SimpleLambdaCapture {
                identifier: self.read_ident(&mut r)?,
            },
            t::REF_LAMBDA_CAPTURE => LambdaCapture::RefLambdaCapture {
                identifier: self.read_ident(&mut r)?,
            },
            t::REF_INIT_LAMBDA_CAPTURE => {
                let identifier = self.read_ident(&mut r)?;
                let (init_tag, init_index) = Self::read_child(&mut r)?;
                LambdaCapture::RefInitLambdaCapture {
                    identifier,
                    initializer: self.decode_expression(init_tag, init_index)?,
                }
            }
            _ => {
                let identifier = self.read_ident(&mut r)?;
                let (init_tag, init_index) = Self::read_child(&mut r)?;
                LambdaCapture::InitLambdaCapture {
                    identifier,
                    initializer: self.decode_expression(init_tag, init_index)?,
                }
            }
        };
        let id = self.unit.arena_mut().alloc_lambda_capture(node);
        self.finish_entry(wire::TABLE_LAMBDA_CAPTURE, index, id.raw());
        Ok(Some(id))
    }

    fn decode_exception_declaration(
        &mut self,
        tag: u8,
        index: u32,
    ) -> Result<Option<crest_ast::ExceptionDeclarationId>, DecodeError> {
        use crate::wire::except_decl_tag as t;
        if tag == TAG_NULL {
            return Ok(None);
        }
        if tag > t::TYPE_EXCEPTION_DECLARATION {
            tracing::debug!(tag, "unknown exception-declaration discriminator, yielding null");
            return Ok(None);
        }
        let record = begin_entry!(
            self,
            wire::TABLE_EXCEPTION_DECLARATION,
            index,
            crest_ast::ExceptionDeclarationId
        );
        let mut r = ByteReader::new(record);
        let node = match tag {
            t::ELLIPSIS_EXCEPTION_DECLARATION => {
                ExceptionDeclaration::EllipsisExceptionDeclaration
            }
            _ => {
                let attribute_list = self.r_attr_spec_list(&mut r)?;
                let type_specifier_list = self.r_spec_list(&mut r)?;
                let decl = r.read_u32()?;
                let declarator = self.decode_declarator(decl)?;
                ExceptionDeclaration::TypeExceptionDeclaration {
                    attribute_list,
                    type_specifier_list,
                    declarator,
                }
            }
        };
        let id = self.unit.arena_mut().alloc_exception_declaration(node);
        self.finish_entry(wire::TABLE_EXCEPTION_DECLARATION, index, id.raw());
        Ok(Some(id))
    }

    fn decode_attribute_specifier(
        &mut self,
        tag: u8,
        index: u32,
    ) -> Result<Option<crest_ast::AttributeSpecifierId>, DecodeError> {
        use crate::wire::attr_spec_tag as t;
        if tag == TAG_NULL {
            return Ok(None);
        }
        if tag > t::ASM_ATTRIBUTE {
            tracing::debug!(tag, "unknown attribute-specifier discriminator, yielding null");
            return Ok(None);
        }
        let record = begin_entry!(
            self,
            wire::TABLE_ATTRIBUTE_SPECIFIER,
            index,
            crest_ast::AttributeSpecifierId
        );
        let mut r = ByteReader::new(record);
        let node = match tag {
            t::CXX_ATTRIBUTE => {
                let prefix = r.read_u32()?;
                let attribute_using_prefix = self.decode_attribute_using_prefix(prefix)?;
                let attribute_list = self.r_attribute_list(&mut r)?;
                AttributeSpecifier::CxxAttribute {
                    attribute_using_prefix,
                    attribute_list,
                }
            }
            t::GCC_ATTRIBUTE => AttributeSpecifier::GccAttribute,
            t::ALIGNAS_ATTRIBUTE => {
                let is_pack = Self::read_bool(&mut r)?;
                let (expr_tag, expr_index) = Self::read_child(&mut r)?;
                AttributeSpecifier::AlignasAttribute {
                    is_pack,
                    expression: self.decode_expression(expr_tag, expr_index)?,
                }
            }
            t::ALIGNAS_TYPE_ATTRIBUTE => {
                let is_pack = Self::read_bool(&mut r)?;
                let ty = r.read_u32()?;
                AttributeSpecifier::AlignasTypeAttribute {
                    is_pack,
                    type_id: self.decode_type_id(ty)?,
                }
            }
            _ => {
                let literal = self.read_str(&mut r)?;
                AttributeSpecifier::AsmAttribute {
                    literal: literal.map(|text| self.unit.control_mut().string_literal(text)),
                }
            }
        };
        let id = self.unit.arena_mut().alloc_attribute_specifier(node);
        self.finish_entry(wire::TABLE_ATTRIBUTE_SPECIFIER, index, id.raw());
        Ok(Some(id))
    }

    fn decode_attribute_token(
        &mut self,
        tag: u8,
        index: u32,
    ) -> Result<Option<crest_ast::AttributeTokenId>, DecodeError> {
        use crate::wire::attr_token_tag as t;
        if tag == TAG_NULL {
            return Ok(None);
        }
        if tag > t::SIMPLE_ATTRIBUTE_TOKEN {
            tracing::debug!(tag, "unknown attribute-token discriminator, yielding null");
            return Ok(None);
        }
        let record = begin_entry!(
            self,
            wire::TABLE_ATTRIBUTE_TOKEN,
            index,
            crest_ast::AttributeTokenId
        );
        let mut r = ByteReader::new(record);
        let node = match tag {
            t::SCOPED_ATTRIBUTE_TOKEN => {
                let attribute_namespace = self.read_ident(&mut r)?;
                let identifier = self.read_ident(&mut r)?;
                AttributeToken::ScopedAttributeToken {
                    attribute_namespace,
                    identifier,
                }
            }
            _ => AttributeToken::SimpleAttributeToken {
                identifier: self.read_ident(&mut r)?,
            },
        };
        let id = self.unit.arena_mut().alloc_attribute_token(node);
        self.finish_entry(wire::TABLE_ATTRIBUTE_TOKEN, index, id.raw());
        Ok(Some(id))
    }

    // --- fragments: 1-based references, 0 = null ---

    fn decode_global_module_fragment(
        &mut self,
        reference: u32,
    ) -> Result<Option<crest_ast::GlobalModuleFragmentId>, DecodeError> {
        if reference == 0 {
            return Ok(None);
        }
        let index = reference - 1;
        let record = begin_entry!(
            self,
            wire::TABLE_GLOBAL_MODULE_FRAGMENT,
            index,
            crest_ast::GlobalModuleFragmentId
        );
        let mut r = ByteReader::new(record);
        let declaration_list = self.r_decl_list(&mut r)?;
        let id = self
            .unit
            .arena_mut()
            .alloc_global_module_fragment(GlobalModuleFragment { declaration_list });
        self.finish_entry(wire::TABLE_GLOBAL_MODULE_FRAGMENT, index, id.raw());
        Ok(Some(id))
    }

    fn decode_private_module_fragment(
        &mut self,
        reference: u32,
    ) -> Result<Option<crest_ast::PrivateModuleFragmentId>, DecodeError> {
        if reference == 0 {
            return Ok(None);
        }
        let index = reference - 1;
        let record = begin_entry!(
            self,
            wire::TABLE_PRIVATE_MODULE_FRAGMENT,
            index,
            crest_ast::PrivateModuleFragmentId
        );
        let mut r = ByteReader::new(record);
        let declaration_list = self.r_decl_list(&mut r)?;
        let id = self
            .unit
            .arena_mut()
            .alloc_private_module_fragment(PrivateModuleFragment { declaration_list });
        self.finish_entry(wire::TABLE_PRIVATE_MODULE_FRAGMENT, index, id.raw());
        Ok(Some(id))
    }

    fn decode_module_declaration(
        &mut self,
        reference: u32,
    ) -> Result<Option<crest_ast::ModuleDeclarationId>, DecodeError> {
        if reference == 0 {
            return Ok(None);
        }
        let index = reference - 1;
        let record = begin_entry!(
            self,
            wire::TABLE_MODULE_DECLARATION,
            index,
            crest_ast::ModuleDeclarationId
        );
        let mut r = ByteReader::new(record);
        let name = r.read_u32()?;
        let module_name = self.decode_module_name(name)?;
        let partition = r.read_u32()?;
        let module_partition = self.decode_module_partition(partition)?;
        let attribute_list = self.r_attr_spec_list(&mut r)?;
        let id = self.unit.arena_mut().alloc_module_declaration(ModuleDeclaration {
            module_name,
            module_partition,
            attribute_list,
        });
        self.finish_entry(wire::TABLE_MODULE_DECLARATION, index, id.raw());
        Ok(Some(id))
    }

    fn decode_module_name(
        &mut self,
        reference: u32,
    ) -> Result<Option<crest_ast::ModuleNameId>, DecodeError> {
        if reference == 0 {
            return Ok(None);
        }
        let index = reference - 1;
        let record = begin_entry!(self, wire::TABLE_MODULE_NAME, index, crest_ast::ModuleNameId);
        let mut r = ByteReader::new(record);
        let identifier = self.read_ident(&mut r)?;
        let qualifier = r.read_u32()?;
        let module_qualifier = self.decode_module_qualifier(qualifier)?;
        let id = self.unit.arena_mut().alloc_module_name(ModuleName {
            identifier,
            module_qualifier,
        });
        self.finish_entry(wire::TABLE_MODULE_NAME, index, id.raw());
        Ok(Some(id))
    }

    fn decode_module_qualifier(
        &mut self,
        reference: u32,
    ) -> Result<Option<crest_ast::ModuleQualifierId>, DecodeError> {
        if reference == 0 {
            return Ok(None);
        }
        let index = reference - 1;
        let record = begin_entry!(
            self,
            wire::TABLE_MODULE_QUALIFIER,
            index,
            crest_ast::ModuleQualifierId
        );
        let mut r = ByteReader::new(record);
        let identifier = self.read_ident(&mut r)?;
        let qualifier = r.read_u32()?;
        let module_qualifier = self.decode_module_qualifier(qualifier)?;
        let id = self.unit.arena_mut().alloc_module_qualifier(ModuleQualifier {
            identifier,
            module_qualifier,
        });
        self.finish_entry(wire::TABLE_MODULE_QUALIFIER, index, id.raw());
        Ok(Some(id))
    }

    fn decode_module_partition(
        &mut self,
        reference: u32,
    ) -> Result<Option<crest_ast::ModulePartitionId>, DecodeError> {
        if reference == 0 {
            return Ok(None);
        }
        let index = reference - 1;
        let record = begin_entry!(
            self,
            wire::TABLE_MODULE_PARTITION,
            index,
            crest_ast::ModulePartitionId
        );
        let mut r = ByteReader::new(record);
        let name = r.read_u32()?;
        let module_name = self.decode_module_name(name)?;
        let id = self
            .unit
            .arena_mut()
            .alloc_module_partition(ModulePartition { module_name });
        self.finish_entry(wire::TABLE_MODULE_PARTITION, index, id.raw());
        Ok(Some(id))
    }

    fn decode_import_name(
        &mut self,
        reference: u32,
    ) -> Result<Option<crest_ast::ImportNameId>, DecodeError> {
        if reference == 0 {
            return Ok(None);
        }
        let index = reference - 1;
        let record = begin_entry!(self, wire::TABLE_IMPORT_NAME, index, crest_ast::ImportNameId);
        let mut r = ByteReader::new(record);
        let partition = r.read_u32()?;
        let module_partition = self.decode_module_partition(partition)?;
        let name = r.read_u32()?;
        let module_name = self.decode_module_name(name)?;
        let id = self.unit.arena_mut().alloc_import_name(ImportName {
            module_partition,
            module_name,
        });
        self.finish_entry(wire::TABLE_IMPORT_NAME, index, id.raw());
        Ok(Some(id))
    }

    fn decode_init_declarator(
        &mut self,
        reference: u32,
    ) -> Result<Option<crest_ast::InitDeclaratorId>, DecodeError> {
        if reference == 0 {
            return Ok(None);
        }
        let index = reference - 1;
        let record = begin_entry!(
            self,
            wire::TABLE_INIT_DECLARATOR,
            index,
            crest_ast::InitDeclaratorId
        );
        let mut r = ByteReader::new(record);
        let decl = r.read_u32()?;
        let declarator = self.decode_declarator(decl)?;
        let clause = r.read_u32()?;
        let requires_clause = self.decode_requires_clause(clause)?;
        let (init_tag, init_index) = Self::read_child(&mut r)?;
        let initializer = self.decode_expression(init_tag, init_index)?;
        let id = self.unit.arena_mut().alloc_init_declarator(InitDeclarator {
            declarator,
            requires_clause,
            initializer,
        });
        self.finish_entry(wire::TABLE_INIT_DECLARATOR, index, id.raw());
        Ok(Some(id))
    }

    fn decode_declarator(
        &mut self,
        reference: u32,
    ) -> Result<Option<DeclaratorId>, DecodeError> {
        if reference == 0 {
            return Ok(None);
        }
        let index = reference - 1;
        let record = begin_entry!(self, wire::TABLE_DECLARATOR, index, DeclaratorId);
        let mut r = ByteReader::new(record);
        let ptr_op_list = self.r_ptr_op_list(&mut r)?;
        let (core_tag, core_index) = Self::read_child(&mut r)?;
        let core_declarator = self.decode_core_declarator(core_tag, core_index)?;
        let declarator_chunk_list = self.r_chunk_list(&mut r)?;
        let id = self.unit.arena_mut().alloc_declarator(Declarator {
            ptr_op_list,
            core_declarator,
            declarator_chunk_list,
        });
        self.finish_entry(wire::TABLE_DECLARATOR, index, id.raw());
        Ok(Some(id))
    }

    fn decode_using_declarator(
        &mut self,
        reference: u32,
    ) -> Result<Option<crest_ast::UsingDeclaratorId>, DecodeError> {
        if reference == 0 {
            return Ok(None);
        }
        let index = reference - 1;
        let record = begin_entry!(
            self,
            wire::TABLE_USING_DECLARATOR,
            index,
            crest_ast::UsingDeclaratorId
        );
        let mut r = ByteReader::new(record);
        let is_pack = Self::read_bool(&mut r)?;
        let (nns_tag, nns_index) = Self::read_child(&mut r)?;
        let nested_name_specifier = self.decode_nested_name_specifier(nns_tag, nns_index)?;
        let (name_tag, name_index) = Self::read_child(&mut r)?;
        let unqualified_id = self.decode_unqualified_name(name_tag, name_index)?;
        let id = self.unit.arena_mut().alloc_using_declarator(UsingDeclarator {
            is_pack,
            nested_name_specifier,
            unqualified_id,
        });
        self.finish_entry(wire::TABLE_USING_DECLARATOR, index, id.raw());
        Ok(Some(id))
    }

    fn decode_enumerator(
        &mut self,
        reference: u32,
    ) -> Result<Option<crest_ast::EnumeratorId>, DecodeError> {
        if reference == 0 {
            return Ok(None);
        }
        let index = reference - 1;
        let record = begin_entry!(self, wire::TABLE_ENUMERATOR, index, crest_ast::EnumeratorId);
        let mut r = ByteReader::new(record);
        let identifier = self.read_ident(&mut r)?;
        let attribute_list = self.r_attr_spec_list(&mut r)?;
        let (expr_tag, expr_index) = Self::read_child(&mut r)?;
        let expression = self.decode_expression(expr_tag, expr_index)?;
        let id = self.unit.arena_mut().alloc_enumerator(Enumerator {
            identifier,
            attribute_list,
            expression,
        });
        self.finish_entry(wire::TABLE_ENUMERATOR, index, id.raw());
        Ok(Some(id))
    }

    fn decode_type_id(
        &mut self,
        reference: u32,
    ) -> Result<Option<crest_ast::TypeIdNodeId>, DecodeError> {
        if reference == 0 {
            return Ok(None);
        }
        let index = reference - 1;
        let record = begin_entry!(self, wire::TABLE_TYPE_ID, index, crest_ast::TypeIdNodeId);
        let mut r = ByteReader::new(record);
        let type_specifier_list = self.r_spec_list(&mut r)?;
        let decl = r.read_u32()?;
        let declarator = self.decode_declarator(decl)?;
        let id = self.unit.arena_mut().alloc_type_id(TypeIdNode {
            type_specifier_list,
            declarator,
        });
        self.finish_entry(wire::TABLE_TYPE_ID, index, id.raw());
        Ok(Some(id))
    }

    fn decode_handler(
        &mut self,
        reference: u32,
    ) -> Result<Option<crest_ast::HandlerId>, DecodeError> {
        if reference == 0 {
            return Ok(None);
        }
        let index = reference - 1;
        let record = begin_entry!(self, wire::TABLE_HANDLER, index, crest_ast::HandlerId);
        let mut r = ByteReader::new(record);
        let (decl_tag, decl_index) = Self::read_child(&mut r)?;
        let exception_declaration = self.decode_exception_declaration(decl_tag, decl_index)?;
        let (stmt_tag, stmt_index) = Self::read_child(&mut r)?;
        let statement = self.decode_statement(stmt_tag, stmt_index)?;
        let id = self.unit.arena_mut().alloc_handler(Handler {
            exception_declaration,
            statement,
        });
        self.finish_entry(wire::TABLE_HANDLER, index, id.raw());
        Ok(Some(id))
    }

    fn decode_base_specifier(
        &mut self,
        reference: u32,
    ) -> Result<Option<crest_ast::BaseSpecifierId>, DecodeError> {
        if reference == 0 {
            return Ok(None);
        }
        let index = reference - 1;
        let record = begin_entry!(
            self,
            wire::TABLE_BASE_SPECIFIER,
            index,
            crest_ast::BaseSpecifierId
        );
        let mut r = ByteReader::new(record);
        let is_template_introduced = Self::read_bool(&mut r)?;
        let is_virtual = Self::read_bool(&mut r)?;
        let access_specifier = Self::read_token(&mut r)?;
        let attribute_list = self.r_attr_spec_list(&mut r)?;
        let (nns_tag, nns_index) = Self::read_child(&mut r)?;
        let nested_name_specifier = self.decode_nested_name_specifier(nns_tag, nns_index)?;
        let (name_tag, name_index) = Self::read_child(&mut r)?;
        let unqualified_id = self.decode_unqualified_name(name_tag, name_index)?;
        let id = self.unit.arena_mut().alloc_base_specifier(BaseSpecifier {
            is_template_introduced,
            is_virtual,
            access_specifier,
            attribute_list,
            nested_name_specifier,
            unqualified_id,
        });
        self.finish_entry(wire::TABLE_BASE_SPECIFIER, index, id.raw());
        Ok(Some(id))
    }

    fn decode_requires_clause(
        &mut self,
        reference: u32,
    ) -> Result<Option<crest_ast::RequiresClauseId>, DecodeError> {
        if reference == 0 {
            return Ok(None);
        }
        let index = reference - 1;
        let record = begin_entry!(
            self,
            wire::TABLE_REQUIRES_CLAUSE,
            index,
            crest_ast::RequiresClauseId
        );
        let mut r = ByteReader::new(record);
        let (expr_tag, expr_index) = Self::read_child(&mut r)?;
        let expression = self.decode_expression(expr_tag, expr_index)?;
        let id = self
            .unit
            .arena_mut()
            .alloc_requires_clause(RequiresClause { expression });
        self.finish_entry(wire::TABLE_REQUIRES_CLAUSE, index, id.raw());
        Ok(Some(id))
    }

    fn decode_parameter_declaration_clause(
        &mut self,
        reference: u32,
    ) -> Result<Option<crest_ast::ParameterDeclarationClauseId>, DecodeError> {
        if reference == 0 {
            return Ok(None);
        }
        let index = reference - 1;
        let record = begin_entry!(
            self,
            wire::TABLE_PARAMETER_DECLARATION_CLAUSE,
            index,
            crest_ast::ParameterDeclarationClauseId
        );
        let mut r = ByteReader::new(record);
        let is_variadic = Self::read_bool(&mut r)?;
        let parameter_declaration_list = self.r_decl_list(&mut r)?;
        let id = self
            .unit
            .arena_mut()
            .alloc_parameter_declaration_clause(ParameterDeclarationClause {
                is_variadic,
                parameter_declaration_list,
            });
        self.finish_entry(wire::TABLE_PARAMETER_DECLARATION_CLAUSE, index, id.raw());
        Ok(Some(id))
    }

    fn decode_trailing_return_type(
        &mut self,
        reference: u32,
    ) -> Result<Option<crest_ast::TrailingReturnTypeId>, DecodeError> {
        if reference == 0 {
            return Ok(None);
        }
        let index = reference - 1;
        let record = begin_entry!(
            self,
            wire::TABLE_TRAILING_RETURN_TYPE,
            index,
            crest_ast::TrailingReturnTypeId
        );
        let mut r = ByteReader::new(record);
        let ty = r.read_u32()?;
        let type_id = self.decode_type_id(ty)?;
        let id = self
            .unit
            .arena_mut()
            .alloc_trailing_return_type(TrailingReturnType { type_id });
        self.finish_entry(wire::TABLE_TRAILING_RETURN_TYPE, index, id.raw());
        Ok(Some(id))
    }

    fn decode_lambda_specifier(
        &mut self,
        reference: u32,
    ) -> Result<Option<crest_ast::LambdaSpecifierId>, DecodeError> {
        if reference == 0 {
            return Ok(None);
        }
        let index = reference - 1;
        let record = begin_entry!(
            self,
            wire::TABLE_LAMBDA_SPECIFIER,
            index,
            crest_ast::LambdaSpecifierId
        );
        let mut r = ByteReader::new(record);
        let specifier = Self::read_token(&mut r)?;
        let id = self
            .unit
            .arena_mut()
            .alloc_lambda_specifier(LambdaSpecifier { specifier });
        self.finish_entry(wire::TABLE_LAMBDA_SPECIFIER, index, id.raw());
        Ok(Some(id))
    }

    fn decode_type_constraint(
        &mut self,
        reference: u32,
    ) -> Result<Option<crest_ast::TypeConstraintId>, DecodeError> {
        if reference == 0 {
            return Ok(None);
        }
        let index = reference - 1;
        let record = begin_entry!(
            self,
            wire::TABLE_TYPE_CONSTRAINT,
            index,
            crest_ast::TypeConstraintId
        );
        let mut r = ByteReader::new(record);
        let identifier = self.read_ident(&mut r)?;
        let (nns_tag, nns_index) = Self::read_child(&mut r)?;
        let nested_name_specifier = self.decode_nested_name_specifier(nns_tag, nns_index)?;
        let template_argument_list = self.r_templ_arg_list(&mut r)?;
        let id = self.unit.arena_mut().alloc_type_constraint(TypeConstraint {
            identifier,
            nested_name_specifier,
            template_argument_list,
        });
        self.finish_entry(wire::TABLE_TYPE_CONSTRAINT, index, id.raw());
        Ok(Some(id))
    }

    fn decode_attribute_argument_clause(
        &mut self,
        reference: u32,
    ) -> Result<Option<crest_ast::AttributeArgumentClauseId>, DecodeError> {
        if reference == 0 {
            return Ok(None);
        }
        let index = reference - 1;
        let _record = begin_entry!(
            self,
            wire::TABLE_ATTRIBUTE_ARGUMENT_CLAUSE,
            index,
            crest_ast::AttributeArgumentClauseId
        );
        let id = self
            .unit
            .arena_mut()
            .alloc_attribute_argument_clause(AttributeArgumentClause);
        self.finish_entry(wire::TABLE_ATTRIBUTE_ARGUMENT_CLAUSE, index, id.raw());
        Ok(Some(id))
    }

    fn decode_attribute(
        &mut self,
        reference: u32,
    ) -> Result<Option<crest_ast::AttributeId>, DecodeError> {
        if reference == 0 {
            return Ok(None);
        }
        let index = reference - 1;
        let record = begin_entry!(self, wire::TABLE_ATTRIBUTE, index, crest_ast::AttributeId);
        let mut r = ByteReader::new(record);
        let (token_tag, token_index) = Self::read_child(&mut r)?;
        let attribute_token = self.decode_attribute_token(token_tag, token_index)?;
        let clause = r.read_u32()?;
        let attribute_argument_clause = self.decode_attribute_argument_clause(clause)?;
        let id = self.unit.arena_mut().alloc_attribute(Attribute {
            attribute_token,
            attribute_argument_clause,
        });
        self.finish_entry(wire::TABLE_ATTRIBUTE, index, id.raw());
        Ok(Some(id))
    }

    fn decode_attribute_using_prefix(
        &mut self,
        reference: u32,
    ) -> Result<Option<crest_ast::AttributeUsingPrefixId>, DecodeError> {
        if reference == 0 {
            return Ok(None);
        }
        let index = reference - 1;
        let _record = begin_entry!(
            self,
            wire::TABLE_ATTRIBUTE_USING_PREFIX,
            index,
            crest_ast::AttributeUsingPrefixId
        );
        let id = self
            .unit
            .arena_mut()
            .alloc_attribute_using_prefix(AttributeUsingPrefix);
        self.finish_entry(wire::TABLE_ATTRIBUTE_USING_PREFIX, index, id.raw());
        Ok(Some(id))
    }

    fn decode_new_placement(
        &mut self,
        reference: u32,
    ) -> Result<Option<crest_ast::NewPlacementId>, DecodeError> {
        if reference == 0 {
            return Ok(None);
        }
        let index = reference - 1;
        let record = begin_entry!(self, wire::TABLE_NEW_PLACEMENT, index, crest_ast::NewPlacementId);
        let mut r = ByteReader::new(record);
        let expression_list = self.r_expr_list(&mut r)?;
        let id = self
            .unit
            .arena_mut()
            .alloc_new_placement(NewPlacement { expression_list });
        self.finish_entry(wire::TABLE_NEW_PLACEMENT, index, id.raw());
        Ok(Some(id))
    }

    fn decode_nested_namespace_specifier(
        &mut self,
        reference: u32,
    ) -> Result<Option<crest_ast::NestedNamespaceSpecifierId>, DecodeError> {
        if reference == 0 {
            return Ok(None);
        }
        let index = reference - 1;
        let record = begin_entry!(
            self,
            wire::TABLE_NESTED_NAMESPACE_SPECIFIER,
            index,
            crest_ast::NestedNamespaceSpecifierId
        );
        let mut r = ByteReader::new(record);
        let identifier = self.read_ident(&mut r)?;
        let is_inline = Self::read_bool(&mut r)?;
        let id = self
            .unit
            .arena_mut()
            .alloc_nested_namespace_specifier(NestedNamespaceSpecifier {
                identifier,
                is_inline,
            });
        self.finish_entry(wire::TABLE_NESTED_NAMESPACE_SPECIFIER, index, id.raw());
        Ok(Some(id))
    }
}
