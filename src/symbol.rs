//! Case-insensitive name interning.
//!
//! Every [`KeyValues`](crate::KeyValues) node stores its name as a [`Symbol`]
//! resolved through a [`SymbolTable`]. Names that differ only in case share a
//! symbol, and the spelling used the first time a symbol was interned is the
//! one reported back by [`SymbolTable::name_of`].
//!
//! A `SymbolTable` is a cheap, clonable handle: all clones refer to the same
//! table, so every node of a tree (and any tree built from the same handle)
//! agrees on symbol numbering. Tables are single-threaded; share one across
//! threads only behind external synchronization.
//!
//! ```rust
//! use keyvalues::SymbolTable;
//!
//! let symbols = SymbolTable::new();
//! let volume = symbols.intern("Volume");
//!
//! assert_eq!(symbols.intern("VOLUME"), volume);
//! assert_eq!(&*symbols.name_of(volume).unwrap(), "Volume");
//! ```

use indexmap::IndexMap;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// An interned, case-insensitive name.
///
/// Symbols are assigned in increasing order starting at zero and are never
/// reused for the lifetime of their table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(u32);

impl Symbol {
    /// Returns the integer value of this symbol.
    #[inline]
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<Symbol> for u32 {
    fn from(symbol: Symbol) -> Self {
        symbol.0
    }
}

/// Folded spelling -> first spelling seen. The entry index is the symbol.
#[derive(Default)]
struct Interner {
    names: IndexMap<String, Rc<str>>,
}

impl Interner {
    fn intern(&mut self, name: &str) -> Symbol {
        let folded = fold_case(name);
        if let Some(index) = self.names.get_index_of(&folded) {
            return Symbol(index as u32);
        }

        let index = u32::try_from(self.names.len())
            .unwrap_or_else(|_| panic!("symbol table exceeded {} entries", u32::MAX));
        tracing::trace!(symbol = index, name, "interned new symbol");
        self.names.insert(folded, Rc::from(name));
        Symbol(index)
    }

    fn lookup(&self, name: &str) -> Option<Symbol> {
        self.names
            .get_index_of(&fold_case(name))
            .map(|index| Symbol(index as u32))
    }
}

fn fold_case(name: &str) -> String {
    name.to_lowercase()
}

/// A shared handle to a case-insensitive string interning table.
#[derive(Clone, Default)]
pub struct SymbolTable {
    inner: Rc<RefCell<Interner>>,
}

impl SymbolTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the symbol for `name`, assigning a new one on first sight.
    ///
    /// Interning is idempotent and ignores case.
    pub fn intern(&self, name: &str) -> Symbol {
        self.inner.borrow_mut().intern(name)
    }

    /// Returns the symbol for `name` without adding it to the table.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<Symbol> {
        self.inner.borrow().lookup(name)
    }

    /// Returns the canonical spelling of `symbol`: the spelling it was first interned with.
    #[must_use]
    pub fn name_of(&self, symbol: Symbol) -> Option<Rc<str>> {
        self.inner
            .borrow()
            .names
            .get_index(symbol.index())
            .map(|(_, name)| Rc::clone(name))
    }

    /// Number of distinct symbols interned so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.borrow().names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if both handles refer to the same table.
    #[must_use]
    pub fn same_table(&self, other: &SymbolTable) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl PartialEq for SymbolTable {
    fn eq(&self, other: &Self) -> bool {
        self.same_table(other)
    }
}

impl fmt::Debug for SymbolTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SymbolTable")
            .field("len", &self.len())
            .finish()
    }
}
