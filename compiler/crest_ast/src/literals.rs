//! Literal interning and normalisation.
//!
//! Literals are unique per (kind, raw spelling). The first insertion decodes
//! the spelling into its value — integer with base prefixes, digit
//! separators and suffixes; float with suffixes; character with escapes;
//! string with escapes — and caches it on the interned instance. Later
//! insertions return the canonical handle without touching the instance
//! again.

use rustc_hash::{FxHashMap, FxHasher};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Interned literal handle.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct LiteralId(u32);

impl LiteralId {
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        LiteralId(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for LiteralId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LiteralId({})", self.0)
    }
}

/// The nine literal kinds the front-end interns.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LiteralKind {
    Integer,
    Float,
    Char,
    String,
    WideString,
    Utf8String,
    Utf16String,
    Utf32String,
    Comment,
}

/// Normalised value cached on an interned literal.
#[derive(Clone, PartialEq, Debug)]
pub enum LiteralValue {
    /// No decoding applies (comments, malformed spellings).
    None,
    Int(u64),
    Float(f64),
    Char(u32),
    /// Unescaped text of a string-like literal.
    Text(Box<str>),
}

/// An interned literal: the raw spelling plus its cached value.
#[derive(Debug)]
pub struct Literal {
    kind: LiteralKind,
    spelling: Box<str>,
    value: LiteralValue,
}

impl Literal {
    #[inline]
    pub fn kind(&self) -> LiteralKind {
        self.kind
    }

    /// The raw source spelling, exactly as written.
    #[inline]
    pub fn value(&self) -> &str {
        &self.spelling
    }

    /// The normalised value computed on first insertion.
    #[inline]
    pub fn components(&self) -> &LiteralValue {
        &self.value
    }

    /// Integer value, when this is an integer literal.
    pub fn integer_value(&self) -> Option<u64> {
        match self.value {
            LiteralValue::Int(v) => Some(v),
            _ => None,
        }
    }

    /// Float value, when this is a floating-point literal.
    pub fn float_value(&self) -> Option<f64> {
        match self.value {
            LiteralValue::Float(v) => Some(v),
            _ => None,
        }
    }

    /// Character value, when this is a character literal.
    pub fn char_value(&self) -> Option<u32> {
        match self.value {
            LiteralValue::Char(v) => Some(v),
            _ => None,
        }
    }

    /// Unescaped string value, when this is a string-like literal.
    pub fn string_value(&self) -> Option<&str> {
        match &self.value {
            LiteralValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

/// Deduplicating store for all literal kinds of one translation unit.
pub struct LiteralStore {
    literals: Vec<Literal>,
    /// (kind, spelling) hash to candidate indices.
    dedup: FxHashMap<u64, Vec<u32>>,
}

fn dedup_hash(kind: LiteralKind, spelling: &str) -> u64 {
    let mut hasher = FxHasher::default();
    kind.hash(&mut hasher);
    spelling.hash(&mut hasher);
    hasher.finish()
}

impl LiteralStore {
    pub fn new() -> Self {
        LiteralStore {
            literals: Vec::new(),
            dedup: FxHashMap::default(),
        }
    }

    /// Get-or-create the literal for (kind, spelling). Normalisation runs
    /// only on the first insertion.
    pub fn intern(&mut self, kind: LiteralKind, spelling: &str) -> LiteralId {
        let hash = dedup_hash(kind, spelling);
        if let Some(candidates) = self.dedup.get(&hash) {
            for &index in candidates {
                let literal = &self.literals[index as usize];
                if literal.kind == kind && &*literal.spelling == spelling {
                    return LiteralId(index);
                }
            }
        }

        let index = u32::try_from(self.literals.len())
            .unwrap_or_else(|_| overflow(self.literals.len()));
        self.literals.push(Literal {
            kind,
            spelling: spelling.into(),
            value: normalise(kind, spelling),
        });
        self.dedup.entry(hash).or_default().push(index);
        LiteralId(index)
    }

    /// Look up an interned literal.
    ///
    /// # Panics
    /// Panics if `id` was not issued by this store.
    #[inline]
    #[track_caller]
    pub fn get(&self, id: LiteralId) -> &Literal {
        &self.literals[id.0 as usize]
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }
}

#[cold]
#[inline(never)]
fn overflow(count: usize) -> ! {
    panic!("literal store exceeded capacity: {count} literals")
}

impl Default for LiteralStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode a spelling according to its kind. Malformed spellings normalise to
/// `LiteralValue::None`; the parser reports them, the store just keeps the
/// raw text.
fn normalise(kind: LiteralKind, spelling: &str) -> LiteralValue {
    match kind {
        LiteralKind::Integer => parse_integer(spelling).map_or(LiteralValue::None, LiteralValue::Int),
        LiteralKind::Float => parse_float(spelling).map_or(LiteralValue::None, LiteralValue::Float),
        LiteralKind::Char => parse_char(spelling).map_or(LiteralValue::None, LiteralValue::Char),
        LiteralKind::String
        | LiteralKind::WideString
        | LiteralKind::Utf8String
        | LiteralKind::Utf16String
        | LiteralKind::Utf32String => {
            parse_string(spelling).map_or(LiteralValue::None, LiteralValue::Text)
        }
        LiteralKind::Comment => LiteralValue::None,
    }
}

/// Integer literals: optional base prefix, `'` digit separators, integer
/// suffix (`u`, `l`, `ll`, `z` in any order/case).
fn parse_integer(spelling: &str) -> Option<u64> {
    let digits: String = spelling.chars().filter(|&c| c != '\'').collect();
    let digits = digits.trim_end_matches(|c: char| matches!(c, 'u' | 'U' | 'l' | 'L' | 'z' | 'Z'));
    if digits.is_empty() {
        return None;
    }

    let (radix, body) = if let Some(rest) = digits.strip_prefix("0x").or_else(|| digits.strip_prefix("0X")) {
        (16, rest)
    } else if let Some(rest) = digits.strip_prefix("0b").or_else(|| digits.strip_prefix("0B")) {
        (2, rest)
    } else if digits.len() > 1 && digits.starts_with('0') {
        (8, &digits[1..])
    } else {
        (10, digits)
    };

    u64::from_str_radix(body, radix).ok()
}

/// Float literals: strip suffix (`f`, `l`, case-insensitive) and defer to
/// the standard parser. Hex floats are left unnormalised.
fn parse_float(spelling: &str) -> Option<f64> {
    if spelling.starts_with("0x") || spelling.starts_with("0X") {
        return None;
    }
    let body = spelling.trim_end_matches(|c: char| matches!(c, 'f' | 'F' | 'l' | 'L'));
    body.parse().ok()
}

/// Character literals: optional encoding prefix, quotes, escape sequences.
/// Multi-character literals normalise to their last character, matching the
/// usual implementation-defined packing.
fn parse_char(spelling: &str) -> Option<u32> {
    let body = spelling
        .trim_start_matches(|c: char| matches!(c, 'u' | 'U' | 'L' | '8'))
        .strip_prefix('\'')?
        .strip_suffix('\'')?;

    let mut value = None;
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        value = Some(if c == '\\' {
            decode_escape(&mut chars)?
        } else {
            c as u32
        });
    }
    value
}

/// String literals: optional encoding prefix, quotes, escape sequences.
fn parse_string(spelling: &str) -> Option<Box<str>> {
    let body = spelling
        .trim_start_matches(|c: char| matches!(c, 'u' | 'U' | 'L' | '8'))
        .strip_prefix('"')?
        .strip_suffix('"')?;

    let mut text = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            let code = decode_escape(&mut chars)?;
            text.push(char::from_u32(code)?);
        } else {
            text.push(c);
        }
    }
    Some(text.into_boxed_str())
}

/// Decode one escape sequence, the backslash already consumed.
fn decode_escape(chars: &mut std::str::Chars<'_>) -> Option<u32> {
    let c = chars.next()?;
    let code = match c {
        'n' => b'\n' as u32,
        't' => b'\t' as u32,
        'r' => b'\r' as u32,
        'a' => 0x07,
        'b' => 0x08,
        'f' => 0x0c,
        'v' => 0x0b,
        '0' => 0,
        'x' => {
            let mut value = 0u32;
            let rest = chars.as_str();
            let mut digits = 0;
            for d in rest.chars() {
                match d.to_digit(16) {
                    Some(v) => {
                        value = value.wrapping_mul(16).wrapping_add(v);
                        digits += 1;
                    }
                    None => break,
                }
            }
            if digits == 0 {
                return None;
            }
            for _ in 0..digits {
                chars.next();
            }
            value
        }
        'u' | 'U' => {
            let width = if c == 'u' { 4 } else { 8 };
            let mut value = 0u32;
            for _ in 0..width {
                value = value.wrapping_mul(16).wrapping_add(chars.next()?.to_digit(16)?);
            }
            value
        }
        other => other as u32,
    };
    Some(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interning_is_idempotent() {
        let mut store = LiteralStore::new();
        let a = store.intern(LiteralKind::Integer, "42");
        let b = store.intern(LiteralKind::Integer, "42");
        let c = store.intern(LiteralKind::Integer, "43");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn kinds_do_not_alias() {
        let mut store = LiteralStore::new();
        let int = store.intern(LiteralKind::Integer, "42");
        let float = store.intern(LiteralKind::Float, "42");
        assert_ne!(int, float);
    }

    #[test]
    fn integer_normalisation() {
        let mut store = LiteralStore::new();
        let cases = [
            ("42", 42),
            ("0x2a", 42),
            ("0X2A", 42),
            ("052", 42),
            ("0b101010", 42),
            ("1'000'000", 1_000_000),
            ("42u", 42),
            ("42ull", 42),
            ("0", 0),
        ];
        for (spelling, expected) in cases {
            let id = store.intern(LiteralKind::Integer, spelling);
            assert_eq!(store.get(id).integer_value(), Some(expected), "{spelling}");
        }
    }

    #[test]
    fn float_normalisation() {
        let mut store = LiteralStore::new();
        let id = store.intern(LiteralKind::Float, "2.5f");
        assert_eq!(store.get(id).float_value(), Some(2.5));
        let id = store.intern(LiteralKind::Float, "1e3");
        assert_eq!(store.get(id).float_value(), Some(1000.0));
    }

    #[test]
    fn char_normalisation() {
        let mut store = LiteralStore::new();
        let cases = [
            ("'a'", 'a' as u32),
            ("'\\n'", b'\n' as u32),
            ("'\\x41'", 0x41),
            ("'\\u0041'", 0x41),
            ("L'a'", 'a' as u32),
        ];
        for (spelling, expected) in cases {
            let id = store.intern(LiteralKind::Char, spelling);
            assert_eq!(store.get(id).char_value(), Some(expected), "{spelling}");
        }
    }

    #[test]
    fn string_normalisation() {
        let mut store = LiteralStore::new();
        let id = store.intern(LiteralKind::String, "\"hi\\n\"");
        assert_eq!(store.get(id).string_value(), Some("hi\n"));
        let id = store.intern(LiteralKind::Utf8String, "u8\"ok\"");
        assert_eq!(store.get(id).string_value(), Some("ok"));
    }

    #[test]
    fn spelling_is_preserved_verbatim() {
        let mut store = LiteralStore::new();
        let id = store.intern(LiteralKind::Integer, "0x2A");
        assert_eq!(store.get(id).value(), "0x2A");
    }

    #[test]
    fn malformed_spellings_keep_raw_text() {
        let mut store = LiteralStore::new();
        let id = store.intern(LiteralKind::Integer, "0xZZ");
        assert_eq!(store.get(id).integer_value(), None);
        assert_eq!(store.get(id).value(), "0xZZ");
    }
}
