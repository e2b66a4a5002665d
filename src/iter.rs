//! Iteration over a node's children.
//!
//! Three views walk the same ordered child list:
//!
//! - [`SubKeys`]: every child, in insertion order
//! - [`TrueSubKeys`]: only groups, i.e. children without a value of their own
//! - [`Values`]: only children that carry a value
//!
//! The last two partition the first: every child appears in exactly one of
//! them, and both keep the relative order of [`SubKeys`].
//!
//! The `first_*` / `next_*` methods offer the same walks in cursor form.
//! A cursor is just a reference to a child, so the borrow checker rules out
//! mutating the list while one is alive. Each `next_*` step first locates
//! the cursor among the children, which makes a full cursor walk quadratic;
//! prefer the iterators for anything but short lists.
//!
//! ```rust
//! use keyvalues::{KeyValues, SymbolTable};
//!
//! let symbols = SymbolTable::new();
//! let mut root = KeyValues::new(&symbols, "root");
//! root.set_int("a", 1);
//! root.find_or_create_key("group/inner").set_value("x");
//! root.set_int("b", 2);
//!
//! let values: Vec<_> = root.values().map(|kv| kv.name().to_string()).collect();
//! assert_eq!(values, ["a", "b"]);
//!
//! let groups: Vec<_> = root.true_sub_keys().map(|kv| kv.name().to_string()).collect();
//! assert_eq!(groups, ["group"]);
//! ```

use crate::KeyValues;
use std::iter::FusedIterator;
use std::slice;

impl KeyValues {
    /// Returns `true` if this node groups children rather than holding a value.
    ///
    /// An empty node with no value counts as a group.
    #[inline]
    #[must_use]
    pub fn is_true_sub_key(&self) -> bool {
        self.value.is_none()
    }

    /// Iterates over all children, values and groups interleaved.
    pub fn sub_keys(&self) -> SubKeys<'_> {
        SubKeys {
            inner: self.children.iter(),
        }
    }

    pub fn sub_keys_mut(&mut self) -> slice::IterMut<'_, KeyValues> {
        self.children.iter_mut()
    }

    /// Iterates over the children that group further keys.
    pub fn true_sub_keys(&self) -> TrueSubKeys<'_> {
        TrueSubKeys {
            inner: self.children.iter(),
        }
    }

    /// Iterates over the children that carry a value.
    pub fn values(&self) -> Values<'_> {
        Values {
            inner: self.children.iter(),
        }
    }

    #[must_use]
    pub fn first_sub_key(&self) -> Option<&KeyValues> {
        self.children.first()
    }

    /// Returns the child following `current`, or `None` at the end or if
    /// `current` is not a child of this node.
    ///
    /// Runs in time linear in the number of children. Use
    /// [`KeyValues::sub_keys`] to walk every child.
    #[must_use]
    pub fn next_key(&self, current: &KeyValues) -> Option<&KeyValues> {
        let index = self.sub_key_index(current)?;
        self.children.get(index + 1)
    }

    #[must_use]
    pub fn first_true_sub_key(&self) -> Option<&KeyValues> {
        self.true_sub_keys().next()
    }

    /// Returns the next group after `current`. Linear in the number of
    /// children; [`KeyValues::true_sub_keys`] walks them all in one pass.
    #[must_use]
    pub fn next_true_sub_key(&self, current: &KeyValues) -> Option<&KeyValues> {
        let index = self.sub_key_index(current)?;
        self.children[index + 1..]
            .iter()
            .find(|child| child.is_true_sub_key())
    }

    #[must_use]
    pub fn first_value(&self) -> Option<&KeyValues> {
        self.values().next()
    }

    /// Returns the next value after `current`. Linear in the number of
    /// children; [`KeyValues::values`] walks them all in one pass.
    #[must_use]
    pub fn next_value(&self, current: &KeyValues) -> Option<&KeyValues> {
        let index = self.sub_key_index(current)?;
        self.children[index + 1..]
            .iter()
            .find(|child| !child.is_true_sub_key())
    }

    /// Returns the position of `child` among this node's children.
    ///
    /// Children are matched by address, not by name, since duplicate names
    /// are legal. Pair with [`KeyValues::remove_sub_key_at`] to detach a
    /// specific node reached through a cursor.
    #[must_use]
    pub fn sub_key_index(&self, child: &KeyValues) -> Option<usize> {
        self.children
            .iter()
            .position(|candidate| std::ptr::eq(candidate, child))
    }
}

impl<'a> IntoIterator for &'a KeyValues {
    type Item = &'a KeyValues;
    type IntoIter = SubKeys<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.sub_keys()
    }
}

/// Iterator over every child of a node. Created by [`KeyValues::sub_keys`].
#[derive(Clone, Debug)]
pub struct SubKeys<'a> {
    inner: slice::Iter<'a, KeyValues>,
}

impl<'a> Iterator for SubKeys<'a> {
    type Item = &'a KeyValues;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for SubKeys<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for SubKeys<'_> {}

impl FusedIterator for SubKeys<'_> {}

/// Iterator over the group children of a node. Created by [`KeyValues::true_sub_keys`].
#[derive(Clone, Debug)]
pub struct TrueSubKeys<'a> {
    inner: slice::Iter<'a, KeyValues>,
}

impl<'a> Iterator for TrueSubKeys<'a> {
    type Item = &'a KeyValues;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.find(|child| child.is_true_sub_key())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl FusedIterator for TrueSubKeys<'_> {}

/// Iterator over the value children of a node. Created by [`KeyValues::values`].
#[derive(Clone, Debug)]
pub struct Values<'a> {
    inner: slice::Iter<'a, KeyValues>,
}

impl<'a> Iterator for Values<'a> {
    type Item = &'a KeyValues;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.find(|child| !child.is_true_sub_key())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl FusedIterator for Values<'_> {}
