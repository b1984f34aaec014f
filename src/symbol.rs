//! Interned identifier spellings.
//!
//! Role
//! - Store every distinct identifier spelling exactly once per context, so
//!   simple-id equivalence reduces to handle identity.
//! - Hand out [`Symbol`] handles that are cheap to copy, compare, and hash.
use std::cell::RefCell;
use std::collections::HashMap;

use typed_arena::Arena;

/// An interned identifier.
///
/// Equality and hashing are by the identity of the interned storage, not by
/// recomparing characters; two symbols from the same table are equal iff they
/// were interned from the same spelling.
#[derive(Clone, Copy, Debug)]
pub struct Symbol<'t>(&'t str);

impl<'t> Symbol<'t> {
    pub fn as_str(&self) -> &'t str {
        self.0
    }

    /// Stable per-context identity used for hashing.
    pub(crate) fn addr(&self) -> usize {
        self.0.as_ptr() as usize
    }
}

impl PartialEq for Symbol<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.0, other.0)
    }
}

impl Eq for Symbol<'_> {}

impl std::hash::Hash for Symbol<'_> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.addr().hash(state);
    }
}

impl std::fmt::Display for Symbol<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

/// Arena-backed symbol table.
///
/// Interning is append-only; spellings live as long as the owning context.
pub struct SymbolTable<'t> {
    storage: Arena<u8>,
    index: RefCell<HashMap<String, &'t str>>,
}

impl<'t> SymbolTable<'t> {
    pub fn new() -> Self {
        Self {
            storage: Arena::new(),
            index: RefCell::new(HashMap::new()),
        }
    }

    /// Intern `spelling`, returning the canonical symbol for it.
    pub fn intern(&'t self, spelling: &str) -> Symbol<'t> {
        let mut index = self.index.borrow_mut();
        if let Some(&stored) = index.get(spelling) {
            return Symbol(stored);
        }
        let stored: &'t str = self.storage.alloc_str(spelling);
        index.insert(spelling.to_string(), stored);
        Symbol(stored)
    }
}

impl Default for SymbolTable<'_> {
    fn default() -> Self {
        Self::new()
    }
}
