//! Value collections held under each key of a multi-valued map.
//!
//! A multi-valued map is backed by a mapping from key to a collection of
//! values. The collection type decides the multiplicity semantics:
//!
//! - `Vec<V>`: duplicates allowed, insertion order preserved per key
//! - `HashSet<V>` / `BTreeSet<V>`: a value appears at most once per key
//! - `smallvec::SmallVec<A>` (feature `smallvec`): like `Vec`, inline storage
//!
//! # Examples
//!
//! ```
//! use libmultimap::multimap::ValueCollection;
//! use std::collections::HashSet;
//!
//! let mut list: Vec<u32> = Vec::new();
//! assert!(list.add(1));
//! assert!(list.add(1));
//! assert_eq!(ValueCollection::len(&list), 2);
//!
//! let mut set: HashSet<u32> = HashSet::new();
//! assert!(set.add(1));
//! assert!(!set.add(1));
//! ```

use std::collections::{BTreeSet, HashSet};
use std::hash::{BuildHasher, Hash};

/// A collection of values stored under a single key.
///
/// `add` reports whether the collection changed, which is what
/// [`MultiValuedMap::put`](super::MultiValuedMap::put) returns to callers.
/// Owned iteration yields the values so a map can be emptied into another.
pub trait ValueCollection<V>: Default + IntoIterator<Item = V> {
    /// Adds a value. Returns `true` if the collection changed.
    fn add(&mut self, value: V) -> bool;

    /// Removes one occurrence of `value`. Returns `true` if it was present.
    fn remove(&mut self, value: &V) -> bool;

    /// Returns `true` if `value` is present.
    fn contains(&self, value: &V) -> bool;

    /// Number of values in the collection.
    fn len(&self) -> usize;

    /// Returns `true` if the collection holds no values.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates the values in the collection's own order.
    fn iter(&self) -> Box<dyn Iterator<Item = &V> + '_>;
}

impl<V> ValueCollection<V> for Vec<V>
where
    V: PartialEq,
{
    #[inline]
    fn add(&mut self, value: V) -> bool {
        self.push(value);
        true
    }

    fn remove(&mut self, value: &V) -> bool {
        match self.as_slice().iter().position(|v| v == value) {
            Some(index) => {
                Vec::remove(self, index);
                true
            }
            None => false,
        }
    }

    #[inline]
    fn contains(&self, value: &V) -> bool {
        self.as_slice().contains(value)
    }

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        Box::new(self.as_slice().iter())
    }
}

impl<V, S> ValueCollection<V> for HashSet<V, S>
where
    V: Eq + Hash,
    S: BuildHasher + Default,
{
    #[inline]
    fn add(&mut self, value: V) -> bool {
        self.insert(value)
    }

    #[inline]
    fn remove(&mut self, value: &V) -> bool {
        HashSet::remove(self, value)
    }

    #[inline]
    fn contains(&self, value: &V) -> bool {
        HashSet::contains(self, value)
    }

    #[inline]
    fn len(&self) -> usize {
        HashSet::len(self)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        Box::new(HashSet::iter(self))
    }
}

impl<V> ValueCollection<V> for BTreeSet<V>
where
    V: Ord,
{
    #[inline]
    fn add(&mut self, value: V) -> bool {
        self.insert(value)
    }

    #[inline]
    fn remove(&mut self, value: &V) -> bool {
        BTreeSet::remove(self, value)
    }

    #[inline]
    fn contains(&self, value: &V) -> bool {
        BTreeSet::contains(self, value)
    }

    #[inline]
    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        Box::new(BTreeSet::iter(self))
    }
}

#[cfg(feature = "smallvec")]
impl<A> ValueCollection<A::Item> for smallvec::SmallVec<A>
where
    A: smallvec::Array,
    A::Item: PartialEq,
{
    #[inline]
    fn add(&mut self, value: A::Item) -> bool {
        self.push(value);
        true
    }

    fn remove(&mut self, value: &A::Item) -> bool {
        match self.as_slice().iter().position(|v| v == value) {
            Some(index) => {
                smallvec::SmallVec::remove(self, index);
                true
            }
            None => false,
        }
    }

    #[inline]
    fn contains(&self, value: &A::Item) -> bool {
        self.as_slice().contains(value)
    }

    #[inline]
    fn len(&self) -> usize {
        smallvec::SmallVec::len(self)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &A::Item> + '_> {
        Box::new(self.as_slice().iter())
    }
}
