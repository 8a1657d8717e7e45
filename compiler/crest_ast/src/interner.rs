//! Identifier interning.
//!
//! Interning canonicalises identifier spellings so that equality is a
//! 32-bit handle compare everywhere downstream. The interner is owned by a
//! single translation unit's control and is mutated only by it; handles from
//! different units are not comparable.

use rustc_hash::{FxHashMap, FxHasher};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Interned identifier handle.
///
/// Equal handles mean equal spellings within one control; the handle indexes
/// the control's interner.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct Name(u32);

impl Name {
    /// Pre-interned empty string.
    pub const EMPTY: Name = Name(0);

    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Name(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({})", self.0)
    }
}

impl Default for Name {
    fn default() -> Self {
        Name::EMPTY
    }
}

/// Deduplicating identifier store.
///
/// Deduplication goes through a content-hash map; hash collisions fall back
/// to a full string compare, so two distinct spellings can never alias.
pub struct StringInterner {
    /// Spelling storage, indexed by `Name`.
    strings: Vec<Box<str>>,
    /// Content hash to candidate indices.
    dedup: FxHashMap<u64, Vec<u32>>,
}

fn content_hash(s: &str) -> u64 {
    let mut hasher = FxHasher::default();
    s.hash(&mut hasher);
    hasher.finish()
}

impl StringInterner {
    /// Create a new interner with the empty string pre-interned at
    /// [`Name::EMPTY`].
    pub fn new() -> Self {
        let mut interner = StringInterner {
            strings: Vec::with_capacity(256),
            dedup: FxHashMap::default(),
        };
        let empty = interner.intern("");
        debug_assert_eq!(empty, Name::EMPTY);
        interner
    }

    /// Get-or-create: returns the canonical handle for `s`.
    pub fn intern(&mut self, s: &str) -> Name {
        let hash = content_hash(s);
        if let Some(candidates) = self.dedup.get(&hash) {
            for &index in candidates {
                if &*self.strings[index as usize] == s {
                    return Name(index);
                }
            }
        }

        let index =
            u32::try_from(self.strings.len()).unwrap_or_else(|_| overflow(self.strings.len()));
        self.strings.push(s.into());
        self.dedup.entry(hash).or_default().push(index);
        Name(index)
    }

    /// Look up the spelling for a handle.
    ///
    /// # Panics
    /// Panics if `name` was not issued by this interner.
    #[inline]
    #[track_caller]
    pub fn lookup(&self, name: Name) -> &str {
        &self.strings[name.index()]
    }

    /// Number of distinct interned strings.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// True when only the pre-interned empty string is present.
    pub fn is_empty(&self) -> bool {
        self.strings.len() <= 1
    }
}

#[cold]
#[inline(never)]
fn overflow(count: usize) -> ! {
    panic!("identifier interner exceeded capacity: {count} strings")
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StringInterner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StringInterner({} strings)", self.strings.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intern_is_idempotent() {
        let mut interner = StringInterner::new();
        let a = interner.intern("hello");
        let b = interner.intern("world");
        let a2 = interner.intern("hello");

        assert_eq!(a, a2);
        assert_ne!(a, b);
        assert_eq!(interner.lookup(a), "hello");
        assert_eq!(interner.lookup(b), "world");
    }

    #[test]
    fn empty_string_is_legal_and_stable() {
        let mut interner = StringInterner::new();
        assert_eq!(interner.intern(""), Name::EMPTY);
        assert_eq!(interner.lookup(Name::EMPTY), "");
    }

    #[test]
    fn handles_are_dense() {
        let mut interner = StringInterner::new();
        let a = interner.intern("a");
        let b = interner.intern("b");
        assert_eq!(a.raw(), 1);
        assert_eq!(b.raw(), 2);
        assert_eq!(interner.len(), 3);
    }
}
