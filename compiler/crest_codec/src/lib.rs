//! Crest binary AST codec.
//!
//! Serialises a translation unit's AST into a compact tagged-union envelope
//! and reconstructs it into a fresh unit. The two halves share the schema in
//! [`wire`]; the decoder tolerates unknown discriminators (they decode to
//! null slots) and fails only on structural damage.
//!
//! The round trip is lossless and byte-stable: for any unit `u`,
//! `decode(encode(u))` is structurally equal to `u`, and encoding the
//! decoded unit reproduces the original byte stream.
//!
//! ```
//! use crest_ast::TranslationUnit;
//! use crest_codec::{encode, AstDecoder};
//!
//! let unit = TranslationUnit::new();
//! let bytes = encode(&unit);
//!
//! let mut decoded = TranslationUnit::new();
//! AstDecoder::new().decode(&mut decoded, &bytes).unwrap();
//! ```

mod decoder;
mod encoder;
pub mod wire;

pub use decoder::AstDecoder;
pub use encoder::encode;
pub use wire::{DecodeError, DecoderState};
