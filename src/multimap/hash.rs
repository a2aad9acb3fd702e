//! Hash-backed multi-valued maps.
//!
//! [`HashValuedMap`] stores a `HashMap<K, C>` where `C` is the
//! [`ValueCollection`] holding the values of one key. The collection type
//! fixes the multiplicity semantics, so the common variants are aliases:
//!
//! | Alias                   | Values per key     | Duplicates |
//! |-------------------------|--------------------|------------|
//! | [`ListValuedHashMap`]   | `Vec<V>`           | allowed    |
//! | [`SetValuedHashMap`]    | `HashSet<V>`       | rejected   |
//! | [`FxListValuedHashMap`] | `Vec<V>`, Fx hash  | allowed    |
//! | [`FxSetValuedHashMap`]  | `FxHashSet<V>`     | rejected   |
//!
//! Empty value collections are never observable: lookups, key iteration and
//! key counts skip them, and removing the last value of a key drops the key.

use super::value::ValueCollection;
use super::MultiValuedMap;
use crate::error::Result;
use rustc_hash::FxHasher;
use std::collections::hash_map::RandomState;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::{BuildHasher, BuildHasherDefault, Hash};

type FxBuildHasher = BuildHasherDefault<FxHasher>;

/// Multi-valued map holding a `Vec` of values per key.
pub type ListValuedHashMap<K, V> = HashValuedMap<K, Vec<V>>;

/// Multi-valued map holding a `HashSet` of values per key.
pub type SetValuedHashMap<K, V> = HashValuedMap<K, HashSet<V>>;

/// [`ListValuedHashMap`] using the rustc-hash hasher.
pub type FxListValuedHashMap<K, V> = HashValuedMap<K, Vec<V>, FxBuildHasher>;

/// [`SetValuedHashMap`] using the rustc-hash hasher for keys and values.
pub type FxSetValuedHashMap<K, V> = HashValuedMap<K, HashSet<V, FxBuildHasher>, FxBuildHasher>;

/// A multi-valued map backed by a `HashMap` from key to value collection.
///
/// # Type Parameters
///
/// - `K`: Key type
/// - `C`: Collection of values stored under each key
/// - `S`: Hasher builder for the key map
///
/// # Examples
///
/// ```
/// use libmultimap::prelude::*;
///
/// let mut map: SetValuedHashMap<&str, u32> = SetValuedHashMap::new();
/// assert!(map.put("scope", 1).unwrap());
/// assert!(!map.put("scope", 1).unwrap());
/// assert!(map.contains_mapping(&"scope", &1));
/// ```
pub struct HashValuedMap<K, C, S = RandomState> {
    map: HashMap<K, C, S>,
}

impl<K, C> HashValuedMap<K, C, RandomState> {
    /// Creates an empty map.
    #[inline]
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Creates an empty map with room for `capacity` keys.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: HashMap::with_capacity(capacity),
        }
    }
}

impl<K, C, S> HashValuedMap<K, C, S> {
    /// Creates an empty map using `hasher` for keys.
    #[inline]
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            map: HashMap::with_hasher(hasher),
        }
    }

    /// Gets a reference to the underlying key map.
    #[inline]
    pub fn as_map(&self) -> &HashMap<K, C, S> {
        &self.map
    }

    /// Unwraps the underlying key map.
    #[inline]
    pub fn into_map(self) -> HashMap<K, C, S> {
        self.map
    }
}

impl<K, C, S> Default for HashValuedMap<K, C, S>
where
    S: Default,
{
    fn default() -> Self {
        Self {
            map: HashMap::default(),
        }
    }
}

impl<K, C, S> Clone for HashValuedMap<K, C, S>
where
    K: Clone,
    C: Clone,
    S: Clone,
{
    fn clone(&self) -> Self {
        Self {
            map: self.map.clone(),
        }
    }
}

impl<K, C, S> fmt::Debug for HashValuedMap<K, C, S>
where
    K: fmt::Debug,
    C: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.map.iter()).finish()
    }
}

impl<K, V, C, S> MultiValuedMap<K, V> for HashValuedMap<K, C, S>
where
    K: Eq + Hash,
    C: ValueCollection<V>,
    S: BuildHasher,
{
    type Values = C;

    fn len(&self) -> usize {
        self.map.values().map(|values| values.len()).sum()
    }

    fn key_count(&self) -> usize {
        self.map.values().filter(|values| !values.is_empty()).count()
    }

    #[inline]
    fn contains_key(&self, key: &K) -> bool {
        self.map.get(key).is_some_and(|values| !values.is_empty())
    }

    fn contains_value(&self, value: &V) -> bool {
        self.map.values().any(|values| values.contains(value))
    }

    #[inline]
    fn contains_mapping(&self, key: &K, value: &V) -> bool {
        self.map.get(key).is_some_and(|values| values.contains(value))
    }

    #[inline]
    fn get(&self, key: &K) -> Option<&C> {
        self.map.get(key).filter(|values| !values.is_empty())
    }

    #[inline]
    fn values_mut(&mut self, key: K) -> &mut C {
        self.map.entry(key).or_default()
    }

    #[inline]
    fn put(&mut self, key: K, value: V) -> Result<bool> {
        Ok(self.map.entry(key).or_default().add(value))
    }

    fn remove(&mut self, key: &K) -> Option<C> {
        self.map.remove(key).filter(|values| !values.is_empty())
    }

    fn remove_mapping(&mut self, key: &K, value: &V) -> bool {
        let Some(values) = self.map.get_mut(key) else {
            return false;
        };

        let removed = values.remove(value);
        if values.is_empty() {
            self.map.remove(key);
        }
        removed
    }

    #[inline]
    fn clear(&mut self) {
        self.map.clear();
    }

    fn take_all(&mut self) -> Vec<(K, C)> {
        self.map
            .drain()
            .filter(|(_, values)| !values.is_empty())
            .collect()
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&K, &V)> + '_> {
        Box::new(
            self.map
                .iter()
                .flat_map(|(key, values)| values.iter().map(move |value| (key, value))),
        )
    }

    fn keys(&self) -> Box<dyn Iterator<Item = &K> + '_> {
        Box::new(
            self.map
                .iter()
                .filter(|(_, values)| !values.is_empty())
                .map(|(key, _)| key),
        )
    }

    fn values(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        Box::new(self.map.values().flat_map(|values| values.iter()))
    }
}

impl<K, V, C, S> Extend<(K, V)> for HashValuedMap<K, C, S>
where
    K: Eq + Hash,
    C: ValueCollection<V>,
    S: BuildHasher,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in iter {
            self.map.entry(key).or_default().add(value);
        }
    }
}

impl<K, V, C, S> FromIterator<(K, V)> for HashValuedMap<K, C, S>
where
    K: Eq + Hash,
    C: ValueCollection<V>,
    S: BuildHasher + Default,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut map = Self::default();
        map.extend(iter);
        map
    }
}
