//! The KeyValues tree node.
//!
//! A [`KeyValues`] is a named node that either carries a scalar [`Value`] or
//! groups further child nodes. Children keep their insertion order; there is
//! no sorting. A node owns its children outright, so a child can only ever
//! belong to one parent: [`KeyValues::add_sub_key`] takes ownership of the
//! node it attaches and [`KeyValues::remove_sub_key`] hands the detached node
//! back to the caller intact.
//!
//! Names are compared case-insensitively through the tree's [`SymbolTable`].
//! Lookups accept `/`-separated paths, and an empty path names the node
//! itself.
//!
//! ```rust
//! use keyvalues::{KeyValues, SymbolTable};
//!
//! let symbols = SymbolTable::new();
//! let mut root = KeyValues::new(&symbols, "Config");
//! root.find_or_create_key("Audio/Volume").set_value(75);
//!
//! assert_eq!(root.get_int("audio/volume", 0), 75);
//! assert!(root.find_key("Video").is_none());
//! ```

use crate::symbol::{Symbol, SymbolTable};
use crate::value::{Value, ValueKind};
use std::rc::Rc;

/// A node in a KeyValues tree.
#[derive(Clone, Debug, PartialEq)]
pub struct KeyValues {
    pub(crate) name: Symbol,
    pub(crate) value: Value,
    pub(crate) children: Vec<KeyValues>,
    pub(crate) uses_escape_sequences: bool,
    pub(crate) symbols: SymbolTable,
}

impl KeyValues {
    /// Creates an empty node named `name`, interning the name in `symbols`.
    #[must_use]
    pub fn new(symbols: &SymbolTable, name: &str) -> Self {
        KeyValues {
            name: symbols.intern(name),
            value: Value::None,
            children: Vec::new(),
            uses_escape_sequences: false,
            symbols: symbols.clone(),
        }
    }

    /// Creates a node holding one string value.
    #[must_use]
    pub fn with_string(symbols: &SymbolTable, name: &str, key: &str, value: &str) -> Self {
        let mut kv = Self::new(symbols, name);
        kv.set_string(key, value);
        kv
    }

    /// Creates a node holding two string values, in order.
    #[must_use]
    pub fn with_strings(
        symbols: &SymbolTable,
        name: &str,
        first_key: &str,
        first_value: &str,
        second_key: &str,
        second_value: &str,
    ) -> Self {
        let mut kv = Self::with_string(symbols, name, first_key, first_value);
        kv.set_string(second_key, second_value);
        kv
    }

    /// Creates a node holding one integer value.
    #[must_use]
    pub fn with_int(symbols: &SymbolTable, name: &str, key: &str, value: i32) -> Self {
        let mut kv = Self::new(symbols, name);
        kv.set_int(key, value);
        kv
    }

    /// Creates a node holding two integer values, in order.
    #[must_use]
    pub fn with_ints(
        symbols: &SymbolTable,
        name: &str,
        first_key: &str,
        first_value: i32,
        second_key: &str,
        second_value: i32,
    ) -> Self {
        let mut kv = Self::with_int(symbols, name, first_key, first_value);
        kv.set_int(second_key, second_value);
        kv
    }

    /// Returns the node's name in its canonical spelling.
    ///
    /// The canonical spelling is the one the name's symbol was first
    /// interned with, which may differ in case from the spelling passed to
    /// [`KeyValues::set_name`].
    #[must_use]
    pub fn name(&self) -> Rc<str> {
        self.symbols
            .name_of(self.name)
            .unwrap_or_else(|| Rc::from(""))
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = self.symbols.intern(name);
    }

    /// Returns the name as an integer symbol.
    #[inline]
    #[must_use]
    pub fn name_symbol(&self) -> Symbol {
        self.name
    }

    /// Returns the symbol table this tree interns its names in.
    #[must_use]
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    #[inline]
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    #[inline]
    #[must_use]
    pub fn value_kind(&self) -> ValueKind {
        self.value.kind()
    }

    /// Stores a scalar on this node, replacing any previous value.
    ///
    /// A node is either a value or a group: storing a value drops the node's
    /// children.
    pub fn set_value(&mut self, value: impl Into<Value>) {
        self.value = value.into();
        self.children.clear();
    }

    #[inline]
    #[must_use]
    pub fn uses_escape_sequences(&self) -> bool {
        self.uses_escape_sequences
    }

    /// Enables or disables backslash escapes for this node and its whole subtree.
    ///
    /// The flag of the node a parse or serialization starts from governs
    /// that operation. Children created later inherit their parent's flag.
    pub fn set_uses_escape_sequences(&mut self, enabled: bool) {
        self.uses_escape_sequences = enabled;
        for child in &mut self.children {
            child.set_uses_escape_sequences(enabled);
        }
    }

    /// Finds a child by name, or a descendant by `/`-separated path.
    ///
    /// Matching ignores case. An empty path returns `self`. With duplicate
    /// names the first child in order wins.
    #[must_use]
    pub fn find_key(&self, key: &str) -> Option<&KeyValues> {
        let mut node = self;
        for segment in path_segments(key) {
            let symbol = node.symbols.lookup(segment)?;
            node = node.find_key_by_symbol(symbol)?;
        }
        Some(node)
    }

    /// Mutable counterpart of [`KeyValues::find_key`].
    #[must_use]
    pub fn find_key_mut(&mut self, key: &str) -> Option<&mut KeyValues> {
        let mut node = self;
        for segment in path_segments(key) {
            let symbol = node.symbols.lookup(segment)?;
            node = node.find_key_by_symbol_mut(symbol)?;
        }
        Some(node)
    }

    /// Finds a child or path like [`KeyValues::find_key`], creating every
    /// missing segment as an empty child appended at the end.
    pub fn find_or_create_key(&mut self, key: &str) -> &mut KeyValues {
        let mut node = self;
        for segment in path_segments(key) {
            let symbol = node.symbols.intern(segment);
            let index = match node.position_of(symbol) {
                Some(index) => index,
                None => {
                    node.create_key(segment);
                    node.children.len() - 1
                }
            };
            node = &mut node.children[index];
        }
        node
    }

    /// Finds a direct child by symbol. Never creates.
    #[must_use]
    pub fn find_key_by_symbol(&self, symbol: Symbol) -> Option<&KeyValues> {
        self.children.iter().find(|child| child.name == symbol)
    }

    #[must_use]
    pub fn find_key_by_symbol_mut(&mut self, symbol: Symbol) -> Option<&mut KeyValues> {
        self.children.iter_mut().find(|child| child.name == symbol)
    }

    fn position_of(&self, symbol: Symbol) -> Option<usize> {
        self.children.iter().position(|child| child.name == symbol)
    }

    /// Appends a new empty child named `name`, even if a child with that name exists.
    pub fn create_key(&mut self, name: &str) -> &mut KeyValues {
        let mut child = KeyValues::new(&self.symbols, name);
        child.uses_escape_sequences = self.uses_escape_sequences;
        self.push_child(child)
    }

    /// Appends a child named one higher than the highest integer-named child.
    ///
    /// Names that do not parse as integers are ignored; with no integer
    /// names the new child is named `"0"`. If the highest name has no
    /// successor, the smallest unused non-negative integer is taken instead.
    ///
    /// ```rust
    /// use keyvalues::{KeyValues, SymbolTable};
    ///
    /// let symbols = SymbolTable::new();
    /// let mut list = KeyValues::new(&symbols, "list");
    /// assert_eq!(&*list.create_new_key().name(), "0");
    ///
    /// list.create_key("7");
    /// list.create_key("label");
    /// assert_eq!(&*list.create_new_key().name(), "8");
    /// ```
    pub fn create_new_key(&mut self) -> &mut KeyValues {
        let highest = self
            .children
            .iter()
            .filter_map(|child| child.name().parse::<i128>().ok())
            .max();
        let name = match highest {
            Some(max) if max >= 0 => match max.checked_add(1) {
                Some(next) => next.to_string(),
                None => self.first_unused_index(),
            },
            _ => "0".to_string(),
        };
        self.create_key(&name)
    }

    fn first_unused_index(&self) -> String {
        let mut index: u64 = 0;
        while self.find_key(&index.to_string()).is_some() {
            index += 1;
        }
        index.to_string()
    }

    /// Appends an existing node as the last child and returns it.
    ///
    /// Ownership moves into this tree. A node built against another
    /// [`SymbolTable`] has its names re-interned into this tree's table.
    pub fn add_sub_key(&mut self, mut sub_key: KeyValues) -> &mut KeyValues {
        if !sub_key.symbols.same_table(&self.symbols) {
            tracing::trace!(
                name = %sub_key.name(),
                "rebinding subtree to the parent's symbol table"
            );
            sub_key.rebind(&self.symbols);
        }
        self.push_child(sub_key)
    }

    fn rebind(&mut self, symbols: &SymbolTable) {
        let name = self.name();
        self.name = symbols.intern(&name);
        self.symbols = symbols.clone();
        for child in &mut self.children {
            child.rebind(symbols);
        }
    }

    fn push_child(&mut self, child: KeyValues) -> &mut KeyValues {
        self.value = Value::None;
        self.children.push(child);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    /// Detaches the first direct child named `key` and returns it.
    ///
    /// The detached node keeps its value and children. Returns `None` if no
    /// child has that name.
    pub fn remove_sub_key(&mut self, key: &str) -> Option<KeyValues> {
        let symbol = self.symbols.lookup(key)?;
        self.remove_sub_key_by_symbol(symbol)
    }

    pub fn remove_sub_key_by_symbol(&mut self, symbol: Symbol) -> Option<KeyValues> {
        let index = self.position_of(symbol)?;
        Some(self.children.remove(index))
    }

    /// Detaches the child at `index` in insertion order.
    pub fn remove_sub_key_at(&mut self, index: usize) -> Option<KeyValues> {
        (index < self.children.len()).then(|| self.children.remove(index))
    }

    /// Returns `true` if the node has neither a value nor children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_none() && self.children.is_empty()
    }

    /// Returns `true` if `key` is missing or names an empty node.
    #[must_use]
    pub fn is_key_empty(&self, key: &str) -> bool {
        self.find_key(key).map_or(true, KeyValues::is_empty)
    }

    /// Returns the kind of value stored at `key`, `ValueKind::None` when absent.
    #[must_use]
    pub fn get_data_type(&self, key: &str) -> ValueKind {
        self.find_key(key)
            .map_or(ValueKind::None, KeyValues::value_kind)
    }

    /// Number of direct children.
    #[must_use]
    pub fn sub_key_count(&self) -> usize {
        self.children.len()
    }

    /// Drops the node's value and all of its children. The name is kept.
    pub fn clear(&mut self) {
        self.value = Value::None;
        self.children.clear();
    }
}

fn path_segments(key: &str) -> impl Iterator<Item = &str> {
    key.split('/').filter(|segment| !segment.is_empty())
}
