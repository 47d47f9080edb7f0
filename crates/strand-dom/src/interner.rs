//! String Interner - Deduplicate tag and attribute names
//!
//! Tag names ("div", "input", "form") and attribute names ("id", "type",
//! "form") repeat on almost every node. They are stored once and referenced
//! by a 4-byte id, which also makes attribute lookup an integer compare.

use std::borrow::Cow;
use std::collections::HashMap;

/// Interned string ID - just 4 bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct InternedString(pub u32);

impl InternedString {
    /// Empty string
    pub const EMPTY: InternedString = InternedString(0);
}

/// String interner for deduplicating names
pub struct StringInterner {
    strings: Vec<Box<str>>,
    map: HashMap<Box<str>, u32>,
}

impl StringInterner {
    /// Create a new interner with common HTML names pre-interned
    pub fn new() -> Self {
        let mut interner = Self {
            strings: Vec::with_capacity(128),
            map: HashMap::with_capacity(128),
        };

        // Index 0 is always the empty string
        interner.intern("");

        const COMMON_TAGS: &[&str] = &[
            "html", "head", "body", "title", "meta", "div", "span", "p", "a",
            "ul", "ol", "li", "form", "input", "button", "select", "option",
            "textarea", "fieldset", "object", "output", "label",
        ];

        const COMMON_ATTRS: &[&str] = &[
            "id", "class", "style", "type", "name", "value", "form", "disabled",
            "checked", "href", "src",
        ];

        for name in COMMON_TAGS.iter().chain(COMMON_ATTRS) {
            interner.intern(name);
        }

        interner
    }

    /// Intern a string, returning its ID
    ///
    /// Names are ASCII-lowercased first, matching HTML's case-insensitive
    /// tag and attribute names.
    pub fn intern(&mut self, s: &str) -> InternedString {
        let key = normalize(s);
        if let Some(&idx) = self.map.get(&*key) {
            return InternedString(idx);
        }

        let idx = self.strings.len() as u32;
        let boxed: Box<str> = key.into();
        self.strings.push(boxed.clone());
        self.map.insert(boxed, idx);
        InternedString(idx)
    }

    /// Look up a string without interning it
    ///
    /// `None` means no node in the tree can carry this name.
    pub fn lookup(&self, s: &str) -> Option<InternedString> {
        self.map.get(&*normalize(s)).map(|&idx| InternedString(idx))
    }

    /// Get the string for an interned ID
    #[inline]
    pub fn get(&self, id: InternedString) -> &str {
        self.strings.get(id.0 as usize).map(|s| &**s).unwrap_or("")
    }

    /// Number of interned strings
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StringInterner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StringInterner")
            .field("len", &self.strings.len())
            .finish()
    }
}

fn normalize(s: &str) -> Cow<'_, str> {
    if s.bytes().any(|b| b.is_ascii_uppercase()) {
        Cow::Owned(s.to_ascii_lowercase())
    } else {
        Cow::Borrowed(s)
    }
}
