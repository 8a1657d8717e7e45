//! The wire schema.
//!
//! Everything both halves of the codec must agree on lives here: the
//! envelope layout, the per-category discriminator tables, and the
//! bounds-checked byte reader the decoder is built on.
//!
//! # Envelope
//!
//! ```text
//! magic "CRST" | version u32
//! string pool: count u32, then count x (len u32, bytes)
//! file name: pool ref u32 (0 = absent)
//! one table per category, in TABLE_* order:
//!     count u32, then count x (record len u32, record bytes)
//! root: tag u8, index u32
//! ```
//!
//! All integers are little endian.
//!
//! # Records
//!
//! A record's fields are serialised in the node's declared field order:
//!
//! - tagged child reference: tag u8 + index u32 (tag 0 = null);
//! - fragment child reference: u32, 1-based (0 = null);
//! - polymorphic list: entry vector (count u32 + count x u32) followed by
//!   discriminator vector (count u32 + count x u8); the two counts must
//!   match;
//! - fragment list: entry vector only;
//! - interned string: pool ref u32 (0 = absent);
//! - token kind u8, builtin kind u16, bool u8, counters u32.
//!
//! Discriminators are 1-based positions in the category's declaration
//! order. A decoder seeing a tag above the ones it knows yields null for
//! that slot; only structural damage fails a decode.

use std::fmt;

/// Envelope magic.
pub const MAGIC: [u8; 4] = *b"CRST";

/// Format version; bumped on any record layout change.
pub const VERSION: u32 = 1;

/// Number of per-category tables in the envelope, in `TABLE_*` order.
pub const TABLE_COUNT: usize = 45;

// Table indices. Categories first, fragments after, both in the fixed
// declaration order of the AST crate.
pub const TABLE_UNIT: usize = 0;
pub const TABLE_DECLARATION: usize = 1;
pub const TABLE_STATEMENT: usize = 2;
pub const TABLE_EXPRESSION: usize = 3;
pub const TABLE_SPECIFIER: usize = 4;
pub const TABLE_TEMPLATE_PARAMETER: usize = 5;
pub const TABLE_PTR_OPERATOR: usize = 6;
pub const TABLE_CORE_DECLARATOR: usize = 7;
pub const TABLE_DECLARATOR_CHUNK: usize = 8;
pub const TABLE_UNQUALIFIED_NAME: usize = 9;
pub const TABLE_NESTED_NAME_SPECIFIER: usize = 10;
pub const TABLE_FUNCTION_BODY: usize = 11;
pub const TABLE_TEMPLATE_ARGUMENT: usize = 12;
pub const TABLE_EXCEPTION_SPECIFIER: usize = 13;
pub const TABLE_REQUIREMENT: usize = 14;
pub const TABLE_NEW_INITIALIZER: usize = 15;
pub const TABLE_MEM_INITIALIZER: usize = 16;
pub const TABLE_LAMBDA_CAPTURE: usize = 17;
pub const TABLE_EXCEPTION_DECLARATION: usize = 18;
pub const TABLE_ATTRIBUTE_SPECIFIER: usize = 19;
pub const TABLE_ATTRIBUTE_TOKEN: usize = 20;
pub const TABLE_GLOBAL_MODULE_FRAGMENT: usize = 21;
pub const TABLE_PRIVATE_MODULE_FRAGMENT: usize = 22;
pub const TABLE_MODULE_DECLARATION: usize = 23;
pub const TABLE_MODULE_NAME: usize = 24;
pub const TABLE_MODULE_QUALIFIER: usize = 25;
pub const TABLE_MODULE_PARTITION: usize = 26;
pub const TABLE_IMPORT_NAME: usize = 27;
pub const TABLE_INIT_DECLARATOR: usize = 28;
pub const TABLE_DECLARATOR: usize = 29;
pub const TABLE_USING_DECLARATOR: usize = 30;
pub const TABLE_ENUMERATOR: usize = 31;
pub const TABLE_TYPE_ID: usize = 32;
pub const TABLE_HANDLER: usize = 33;
pub const TABLE_BASE_SPECIFIER: usize = 34;
pub const TABLE_REQUIRES_CLAUSE: usize = 35;
pub const TABLE_PARAMETER_DECLARATION_CLAUSE: usize = 36;
pub const TABLE_TRAILING_RETURN_TYPE: usize = 37;
pub const TABLE_LAMBDA_SPECIFIER: usize = 38;
pub const TABLE_TYPE_CONSTRAINT: usize = 39;
pub const TABLE_ATTRIBUTE_ARGUMENT_CLAUSE: usize = 40;
pub const TABLE_ATTRIBUTE: usize = 41;
pub const TABLE_ATTRIBUTE_USING_PREFIX: usize = 42;
pub const TABLE_NEW_PLACEMENT: usize = 43;
pub const TABLE_NESTED_NAMESPACE_SPECIFIER: usize = 44;

/// The null discriminator: an absent tagged child.
pub const TAG_NULL: u8 = 0;

/// Unit discriminators.
pub mod unit_tag {
    pub const TRANSLATION_UNIT: u8 = 1;
    pub const MODULE_UNIT: u8 = 2;
}

/// Declaration discriminators.
pub mod decl_tag {
    pub const SIMPLE_DECLARATION: u8 = 1;
    pub const ASM_DECLARATION: u8 = 2;
    pub const NAMESPACE_ALIAS_DEFINITION: u8 = 3;
    pub const USING_DECLARATION: u8 = 4;
    pub const USING_ENUM_DECLARATION: u8 = 5;
    pub const USING_DIRECTIVE: u8 = 6;
    pub const STATIC_ASSERT_DECLARATION: u8 = 7;
    pub const ALIAS_DECLARATION: u8 = 8;
    pub const OPAQUE_ENUM_DECLARATION: u8 = 9;
    pub const FUNCTION_DEFINITION: u8 = 10;
    pub const TEMPLATE_DECLARATION: u8 = 11;
    pub const CONCEPT_DEFINITION: u8 = 12;
    pub const DEDUCTION_GUIDE: u8 = 13;
    pub const EXPLICIT_INSTANTIATION: u8 = 14;
    pub const EXPORT_DECLARATION: u8 = 15;
    pub const EXPORT_COMPOUND_DECLARATION: u8 = 16;
    pub const LINKAGE_SPECIFICATION: u8 = 17;
    pub const NAMESPACE_DEFINITION: u8 = 18;
    pub const EMPTY_DECLARATION: u8 = 19;
    pub const ATTRIBUTE_DECLARATION: u8 = 20;
    pub const MODULE_IMPORT_DECLARATION: u8 = 21;
    pub const PARAMETER_DECLARATION: u8 = 22;
    pub const ACCESS_DECLARATION: u8 = 23;
    pub const FOR_RANGE_DECLARATION: u8 = 24;
    pub const STRUCTURED_BINDING_DECLARATION: u8 = 25;
    pub const ASM_OPERAND: u8 = 26;
    pub const ASM_QUALIFIER: u8 = 27;
    pub const ASM_CLOBBER: u8 = 28;
    pub const ASM_GOTO_LABEL: u8 = 29;
}

/// Statement discriminators.
pub mod stmt_tag {
    pub const LABELED_STATEMENT: u8 = 1;
    pub const CASE_STATEMENT: u8 = 2;
    pub const DEFAULT_STATEMENT: u8 = 3;
    pub const EXPRESSION_STATEMENT: u8 = 4;
    pub const COMPOUND_STATEMENT: u8 = 5;
    pub const IF_STATEMENT: u8 = 6;
    pub const CONSTEVAL_IF_STATEMENT: u8 = 7;
    pub const SWITCH_STATEMENT: u8 = 8;
    pub const WHILE_STATEMENT: u8 = 9;
    pub const DO_STATEMENT: u8 = 10;
    pub const FOR_RANGE_STATEMENT: u8 = 11;
    pub const FOR_STATEMENT: u8 = 12;
    pub const BREAK_STATEMENT: u8 = 13;
    pub const CONTINUE_STATEMENT: u8 = 14;
    pub const RETURN_STATEMENT: u8 = 15;
    pub const COROUTINE_RETURN_STATEMENT: u8 = 16;
    pub const GOTO_STATEMENT: u8 = 17;
    pub const DECLARATION_STATEMENT: u8 = 18;
    pub const TRY_BLOCK_STATEMENT: u8 = 19;
}

/// Expression discriminators.
pub mod expr_tag {
    pub const CHAR_LITERAL_EXPRESSION: u8 = 1;
    pub const BOOL_LITERAL_EXPRESSION: u8 = 2;
    pub const INT_LITERAL_EXPRESSION: u8 = 3;
    pub const FLOAT_LITERAL_EXPRESSION: u8 = 4;
    pub const NULLPTR_LITERAL_EXPRESSION: u8 = 5;
    pub const STRING_LITERAL_EXPRESSION: u8 = 6;
    pub const USER_DEFINED_STRING_LITERAL_EXPRESSION: u8 = 7;
    pub const THIS_EXPRESSION: u8 = 8;
    pub const NESTED_EXPRESSION: u8 = 9;
    pub const ID_EXPRESSION: u8 = 10;
    pub const LAMBDA_EXPRESSION: u8 = 11;
    pub const FOLD_EXPRESSION: u8 = 12;
    pub const RIGHT_FOLD_EXPRESSION: u8 = 13;
    pub const LEFT_FOLD_EXPRESSION: u8 = 14;
    pub const REQUIRES_EXPRESSION: u8 = 15;
    pub const SUBSCRIPT_EXPRESSION: u8 = 16;
    pub const CALL_EXPRESSION: u8 = 17;
    pub const TYPE_CONSTRUCTION: u8 = 18;
    pub const BRACED_TYPE_CONSTRUCTION: u8 = 19;
    pub const MEMBER_EXPRESSION: u8 = 20;
    pub const POST_INCR_EXPRESSION: u8 = 21;
    pub const CPP_CAST_EXPRESSION: u8 = 22;
    pub const BUILTIN_BIT_CAST_EXPRESSION: u8 = 23;
    pub const TYPEID_EXPRESSION: u8 = 24;
    pub const TYPEID_OF_TYPE_EXPRESSION: u8 = 25;
    pub const UNARY_EXPRESSION: u8 = 26;
    pub const AWAIT_EXPRESSION: u8 = 27;
    pub const SIZEOF_EXPRESSION: u8 = 28;
    pub const SIZEOF_TYPE_EXPRESSION: u8 = 29;
    pub const SIZEOF_PACK_EXPRESSION: u8 = 30;
    pub const ALIGNOF_TYPE_EXPRESSION: u8 = 31;
    pub const ALIGNOF_EXPRESSION: u8 = 32;
    pub const NOEXCEPT_EXPRESSION: u8 = 33;
    pub const NEW_EXPRESSION: u8 = 34;
    pub const DELETE_EXPRESSION: u8 = 35;
    pub const CAST_EXPRESSION: u8 = 36;
    pub const IMPLICIT_CAST_EXPRESSION: u8 = 37;
    pub const BINARY_EXPRESSION: u8 = 38;
    pub const CONDITIONAL_EXPRESSION: u8 = 39;
    pub const YIELD_EXPRESSION: u8 = 40;
    pub const THROW_EXPRESSION: u8 = 41;
    pub const ASSIGNMENT_EXPRESSION: u8 = 42;
    pub const PACK_EXPANSION_EXPRESSION: u8 = 43;
    pub const DESIGNATED_INITIALIZER_CLAUSE: u8 = 44;
    pub const TYPE_TRAITS_EXPRESSION: u8 = 45;
    pub const CONDITION_EXPRESSION: u8 = 46;
    pub const EQUAL_INITIALIZER: u8 = 47;
    pub const BRACED_INIT_LIST: u8 = 48;
    pub const PAREN_INITIALIZER: u8 = 49;
}

/// Specifier discriminators.
pub mod spec_tag {
    pub const TYPEDEF_SPECIFIER: u8 = 1;
    pub const FRIEND_SPECIFIER: u8 = 2;
    pub const CONSTEVAL_SPECIFIER: u8 = 3;
    pub const CONSTINIT_SPECIFIER: u8 = 4;
    pub const CONSTEXPR_SPECIFIER: u8 = 5;
    pub const INLINE_SPECIFIER: u8 = 6;
    pub const STATIC_SPECIFIER: u8 = 7;
    pub const EXTERN_SPECIFIER: u8 = 8;
    pub const THREAD_LOCAL_SPECIFIER: u8 = 9;
    pub const THREAD_SPECIFIER: u8 = 10;
    pub const MUTABLE_SPECIFIER: u8 = 11;
    pub const VIRTUAL_SPECIFIER: u8 = 12;
    pub const EXPLICIT_SPECIFIER: u8 = 13;
    pub const AUTO_TYPE_SPECIFIER: u8 = 14;
    pub const VOID_TYPE_SPECIFIER: u8 = 15;
    pub const SIZE_TYPE_SPECIFIER: u8 = 16;
    pub const SIGN_TYPE_SPECIFIER: u8 = 17;
    pub const VA_LIST_TYPE_SPECIFIER: u8 = 18;
    pub const INTEGRAL_TYPE_SPECIFIER: u8 = 19;
    pub const FLOATING_POINT_TYPE_SPECIFIER: u8 = 20;
    pub const COMPLEX_TYPE_SPECIFIER: u8 = 21;
    pub const NAMED_TYPE_SPECIFIER: u8 = 22;
    pub const ATOMIC_TYPE_SPECIFIER: u8 = 23;
    pub const UNDERLYING_TYPE_SPECIFIER: u8 = 24;
    pub const ELABORATED_TYPE_SPECIFIER: u8 = 25;
    pub const DECLTYPE_AUTO_SPECIFIER: u8 = 26;
    pub const DECLTYPE_SPECIFIER: u8 = 27;
    pub const PLACEHOLDER_TYPE_SPECIFIER: u8 = 28;
    pub const CONST_QUALIFIER: u8 = 29;
    pub const VOLATILE_QUALIFIER: u8 = 30;
    pub const RESTRICT_QUALIFIER: u8 = 31;
    pub const ENUM_SPECIFIER: u8 = 32;
    pub const CLASS_SPECIFIER: u8 = 33;
    pub const TYPENAME_SPECIFIER: u8 = 34;
}

/// Template parameter discriminators.
pub mod templ_param_tag {
    pub const TEMPLATE_TYPE_PARAMETER: u8 = 1;
    pub const NON_TYPE_TEMPLATE_PARAMETER: u8 = 2;
    pub const TYPENAME_TYPE_PARAMETER: u8 = 3;
    pub const CONSTRAINT_TYPE_PARAMETER: u8 = 4;
}

/// Pointer operator discriminators.
pub mod ptr_op_tag {
    pub const POINTER_OPERATOR: u8 = 1;
    pub const REFERENCE_OPERATOR: u8 = 2;
    pub const PTR_TO_MEMBER_OPERATOR: u8 = 3;
}

/// Core declarator discriminators.
pub mod core_decl_tag {
    pub const BITFIELD_DECLARATOR: u8 = 1;
    pub const PARAMETER_PACK: u8 = 2;
    pub const ID_DECLARATOR: u8 = 3;
    pub const NESTED_DECLARATOR: u8 = 4;
}

/// Declarator chunk discriminators.
pub mod chunk_tag {
    pub const FUNCTION_DECLARATOR_CHUNK: u8 = 1;
    pub const ARRAY_DECLARATOR_CHUNK: u8 = 2;
}

/// Unqualified id discriminators.
pub mod unqual_tag {
    pub const NAME_ID: u8 = 1;
    pub const DESTRUCTOR_ID: u8 = 2;
    pub const DECLTYPE_ID: u8 = 3;
    pub const OPERATOR_FUNCTION_ID: u8 = 4;
    pub const LITERAL_OPERATOR_ID: u8 = 5;
    pub const CONVERSION_FUNCTION_ID: u8 = 6;
    pub const SIMPLE_TEMPLATE_ID: u8 = 7;
    pub const LITERAL_OPERATOR_TEMPLATE_ID: u8 = 8;
    pub const OPERATOR_FUNCTION_TEMPLATE_ID: u8 = 9;
}

/// Nested name specifier discriminators.
pub mod nns_tag {
    pub const GLOBAL_NESTED_NAME_SPECIFIER: u8 = 1;
    pub const SIMPLE_NESTED_NAME_SPECIFIER: u8 = 2;
    pub const DECLTYPE_NESTED_NAME_SPECIFIER: u8 = 3;
    pub const TEMPLATE_NESTED_NAME_SPECIFIER: u8 = 4;
}

/// Function body discriminators.
pub mod body_tag {
    pub const DEFAULT_FUNCTION_BODY: u8 = 1;
    pub const COMPOUND_STATEMENT_FUNCTION_BODY: u8 = 2;
    pub const TRY_STATEMENT_FUNCTION_BODY: u8 = 3;
    pub const DELETE_FUNCTION_BODY: u8 = 4;
}

/// Template argument discriminators.
pub mod templ_arg_tag {
    pub const TYPE_TEMPLATE_ARGUMENT: u8 = 1;
    pub const EXPRESSION_TEMPLATE_ARGUMENT: u8 = 2;
}

/// Exception specifier discriminators.
pub mod except_spec_tag {
    pub const THROW_EXCEPTION_SPECIFIER: u8 = 1;
    pub const NOEXCEPT_SPECIFIER: u8 = 2;
}

/// Requirement discriminators.
pub mod requirement_tag {
    pub const SIMPLE_REQUIREMENT: u8 = 1;
    pub const COMPOUND_REQUIREMENT: u8 = 2;
    pub const TYPE_REQUIREMENT: u8 = 3;
    pub const NESTED_REQUIREMENT: u8 = 4;
}

/// New initializer discriminators.
pub mod new_init_tag {
    pub const NEW_PAREN_INITIALIZER: u8 = 1;
    pub const NEW_BRACED_INITIALIZER: u8 = 2;
}

/// Mem initializer discriminators.
pub mod mem_init_tag {
    pub const PAREN_MEM_INITIALIZER: u8 = 1;
    pub const BRACED_MEM_INITIALIZER: u8 = 2;
}

/// Lambda capture discriminators.
pub mod capture_tag {
    pub const THIS_LAMBDA_CAPTURE: u8 = 1;
    pub const DEREF_THIS_LAMBDA_CAPTURE: u8 = 2;
    pub const SIMPLE_LAMBDA_CAPTURE: u8 = 3;
    pub const REF_LAMBDA_CAPTURE: u8 = 4;
    pub const REF_INIT_LAMBDA_CAPTURE: u8 = 5;
    pub const INIT_LAMBDA_CAPTURE: u8 = 6;
}

/// Exception declaration discriminators.
pub mod except_decl_tag {
    pub const ELLIPSIS_EXCEPTION_DECLARATION: u8 = 1;
    pub const TYPE_EXCEPTION_DECLARATION: u8 = 2;
}

/// Attribute specifier discriminators.
pub mod attr_spec_tag {
    pub const CXX_ATTRIBUTE: u8 = 1;
    pub const GCC_ATTRIBUTE: u8 = 2;
    pub const ALIGNAS_ATTRIBUTE: u8 = 3;
    pub const ALIGNAS_TYPE_ATTRIBUTE: u8 = 4;
    pub const ASM_ATTRIBUTE: u8 = 5;
}

/// Attribute token discriminators.
pub mod attr_token_tag {
    pub const SCOPED_ATTRIBUTE_TOKEN: u8 = 1;
    pub const SIMPLE_ATTRIBUTE_TOKEN: u8 = 2;
}

/// Why a decode failed. Structural damage only; unknown discriminators are
/// tolerated and never reach this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Input ended before a field could be read.
    UnexpectedEof,
    /// The envelope does not start with the expected magic.
    BadMagic,
    /// The envelope's version is not one this decoder understands.
    UnsupportedVersion(u32),
    /// A list's entry and discriminator vectors have different lengths.
    ListArityMismatch { entries: u32, tags: u32 },
    /// A reference points past the end of its table or the string pool.
    DanglingReference { table: usize, index: u32 },
    /// A record references an entry that is currently being decoded; a
    /// post-order encoder cannot produce this.
    CyclicReference { table: usize, index: u32 },
    /// A string pool entry is not valid UTF-8.
    MalformedString,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::UnexpectedEof => write!(f, "unexpected end of input"),
            DecodeError::BadMagic => write!(f, "not a serialized unit (bad magic)"),
            DecodeError::UnsupportedVersion(version) => {
                write!(f, "unsupported format version {version}")
            }
            DecodeError::ListArityMismatch { entries, tags } => write!(
                f,
                "list entry/discriminator vectors disagree: {entries} entries, {tags} tags"
            ),
            DecodeError::DanglingReference { table, index } => {
                write!(f, "dangling reference into table {table} at index {index}")
            }
            DecodeError::CyclicReference { table, index } => {
                write!(f, "cyclic reference into table {table} at index {index}")
            }
            DecodeError::MalformedString => write!(f, "string pool entry is not UTF-8"),
        }
    }
}

impl std::error::Error for DecodeError {}

/// Decoder progress. Any error is terminal.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum DecoderState {
    #[default]
    Idle,
    HeaderRead,
    RootDecoded,
    Done,
    Failed,
}

/// Bounds-checked little-endian reader over a byte slice.
pub struct ByteReader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        ByteReader { bytes, pos: 0 }
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }

    pub fn read_u8(&mut self) -> Result<u8, DecodeError> {
        let byte = *self.bytes.get(self.pos).ok_or(DecodeError::UnexpectedEof)?;
        self.pos += 1;
        Ok(byte)
    }

    pub fn read_u16(&mut self) -> Result<u16, DecodeError> {
        let bytes = self.read_bytes(2)?;
        Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
    }

    pub fn read_u32(&mut self) -> Result<u32, DecodeError> {
        let bytes = self.read_bytes(4)?;
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub fn read_u64(&mut self) -> Result<u64, DecodeError> {
        let bytes = self.read_bytes(8)?;
        let mut raw = [0u8; 8];
        raw.copy_from_slice(bytes);
        Ok(u64::from_le_bytes(raw))
    }

    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], DecodeError> {
        let end = self.pos.checked_add(len).ok_or(DecodeError::UnexpectedEof)?;
        let bytes = self.bytes.get(self.pos..end).ok_or(DecodeError::UnexpectedEof)?;
        self.pos = end;
        Ok(bytes)
    }
}

/// Little-endian append helpers for the encoder.
pub fn put_u8(out: &mut Vec<u8>, value: u8) {
    out.push(value);
}

pub fn put_u16(out: &mut Vec<u8>, value: u16) {
    out.extend_from_slice(&value.to_le_bytes());
}

pub fn put_u32(out: &mut Vec<u8>, value: u32) {
    out.extend_from_slice(&value.to_le_bytes());
}

pub fn put_u64(out: &mut Vec<u8>, value: u64) {
    out.extend_from_slice(&value.to_le_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reader_round_trips_writer() {
        let mut out = Vec::new();
        put_u8(&mut out, 7);
        put_u16(&mut out, 0x1234);
        put_u32(&mut out, 0xdead_beef);
        put_u64(&mut out, 0x0102_0304_0506_0708);

        let mut reader = ByteReader::new(&out);
        assert_eq!(reader.read_u8().unwrap(), 7);
        assert_eq!(reader.read_u16().unwrap(), 0x1234);
        assert_eq!(reader.read_u32().unwrap(), 0xdead_beef);
        assert_eq!(reader.read_u64().unwrap(), 0x0102_0304_0506_0708);
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn truncated_reads_fail() {
        let mut reader = ByteReader::new(&[1, 2]);
        assert_eq!(reader.read_u32(), Err(DecodeError::UnexpectedEof));
    }

    #[test]
    fn error_messages_name_the_problem() {
        let err = DecodeError::ListArityMismatch { entries: 3, tags: 2 };
        assert!(err.to_string().contains("3 entries"));
        assert!(DecodeError::BadMagic.to_string().contains("magic"));
    }
}
