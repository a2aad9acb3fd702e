//! Multi-valued maps and their decorators.
//!
//! A multi-valued map associates each key with a collection of values. This
//! module defines the [`MultiValuedMap`] trait, a hash-backed implementation
//! generic over the value collection ([`HashValuedMap`]), and the
//! [`TransformedMultiValuedMap`] decorator that rewrites keys and values on
//! the way in.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │      TransformedMultiValuedMap<M, KT, VT>                    │
//! │  ┌────────────────────────────────────────────────────────┐ │
//! │  │  decorated: M                                          │ │
//! │  │  key_transformer: Option<KT>                           │ │
//! │  │  value_transformer: Option<VT>                         │ │
//! │  └────────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────┘
//!                            │ put / put_all* (transformed)
//!                            │ everything else (forwarded)
//!                            ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │        Decorated map (ListValuedHashMap, SetValuedHashMap)  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Examples
//!
//! ```
//! use libmultimap::prelude::*;
//!
//! let mut map: ListValuedHashMap<&str, u32> = ListValuedHashMap::new();
//! map.put("a", 1).unwrap();
//! map.put("a", 2).unwrap();
//! map.put("b", 3).unwrap();
//!
//! assert_eq!(map.len(), 3);
//! assert_eq!(map.key_count(), 2);
//! assert_eq!(map.get(&"a"), Some(&vec![1, 2]));
//! ```

pub mod builder;
pub mod hash;
pub mod transformed;
pub mod value;

pub use builder::TransformedMultiValuedMapBuilder;
pub use hash::{
    FxListValuedHashMap, FxSetValuedHashMap, HashValuedMap, ListValuedHashMap, SetValuedHashMap,
};
pub use transformed::TransformedMultiValuedMap;
pub use value::ValueCollection;

use crate::error::{MultiMapError, Result};

/// An associative container mapping each key to a collection of values.
///
/// Mutating operations return [`Result`] so that decorators can relay
/// failures (a rejecting map, a failing transformer) to the caller. The plain
/// hash-backed implementations never fail.
///
/// The bulk operations have provided implementations in terms of [`put`] and
/// [`values_mut`]; decorators override them to intercept every entry point.
///
/// [`put`]: MultiValuedMap::put
/// [`values_mut`]: MultiValuedMap::values_mut
pub trait MultiValuedMap<K, V> {
    /// The collection holding the values of one key.
    type Values: ValueCollection<V>;

    /// Total number of key-value mappings.
    fn len(&self) -> usize;

    /// Returns `true` if there are no mappings.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of distinct keys with at least one value.
    fn key_count(&self) -> usize;

    /// Returns `true` if `key` has at least one value.
    fn contains_key(&self, key: &K) -> bool;

    /// Returns `true` if any key maps to `value`.
    fn contains_value(&self, value: &V) -> bool;

    /// Returns `true` if `key` maps to `value`.
    fn contains_mapping(&self, key: &K, value: &V) -> bool;

    /// Returns the values of `key`, or `None` if it has none.
    fn get(&self, key: &K) -> Option<&Self::Values>;

    /// Returns the collection for `key`, creating an empty one if needed.
    ///
    /// Values added through this view are not seen by any decorator.
    fn values_mut(&mut self, key: K) -> &mut Self::Values;

    /// Associates `value` with `key`. Returns `true` if the map changed.
    fn put(&mut self, key: K, value: V) -> Result<bool>;

    /// Associates every value of `values` with `key`.
    ///
    /// Returns `Ok(false)` without touching the map when `values` is empty;
    /// otherwise whether the collection for `key` changed.
    fn put_all_values<I>(&mut self, key: K, values: I) -> Result<bool>
    where
        I: IntoIterator<Item = V>,
    {
        let mut values = values.into_iter().peekable();
        if values.peek().is_none() {
            return Ok(false);
        }

        let collection = self.values_mut(key);
        let mut changed = false;
        for value in values {
            changed |= collection.add(value);
        }
        Ok(changed)
    }

    /// Puts every pair of an ordinary single-valued map.
    ///
    /// Returns `true` if at least one pair changed the map.
    fn put_all_map<I>(&mut self, map: I) -> Result<bool>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut changed = false;
        for (key, value) in map {
            changed |= self.put(key, value)?;
        }
        Ok(changed)
    }

    /// Puts every entry of another multi-valued map.
    ///
    /// A key that maps to several values is put once per value.
    fn put_all<M>(&mut self, other: &M) -> Result<bool>
    where
        M: MultiValuedMap<K, V>,
        K: Clone,
        V: Clone,
    {
        let mut changed = false;
        for (key, value) in other.entries() {
            changed |= self.put(key.clone(), value.clone())?;
        }
        Ok(changed)
    }

    /// Like [`put_all_values`](MultiValuedMap::put_all_values), but fails
    /// with [`MultiMapError::NullArgument`] when `values` is `None`.
    fn put_all_values_opt<I>(&mut self, key: K, values: Option<I>) -> Result<bool>
    where
        I: IntoIterator<Item = V>,
    {
        let values = values.ok_or(MultiMapError::NullArgument("values"))?;
        self.put_all_values(key, values)
    }

    /// Like [`put_all_map`](MultiValuedMap::put_all_map), but fails with
    /// [`MultiMapError::NullArgument`] when `map` is `None`.
    fn put_all_map_opt<I>(&mut self, map: Option<I>) -> Result<bool>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let map = map.ok_or(MultiMapError::NullArgument("map"))?;
        self.put_all_map(map)
    }

    /// Like [`put_all`](MultiValuedMap::put_all), but fails with
    /// [`MultiMapError::NullArgument`] when `other` is `None`.
    fn put_all_opt<M>(&mut self, other: Option<&M>) -> Result<bool>
    where
        M: MultiValuedMap<K, V>,
        K: Clone,
        V: Clone,
    {
        let other = other.ok_or(MultiMapError::NullArgument("map"))?;
        self.put_all(other)
    }

    /// Removes every value of `key` and returns them.
    fn remove(&mut self, key: &K) -> Option<Self::Values>;

    /// Removes one occurrence of the `key`-`value` mapping.
    ///
    /// Returns `true` if the mapping was present.
    fn remove_mapping(&mut self, key: &K, value: &V) -> bool;

    /// Removes all mappings.
    fn clear(&mut self);

    /// Removes all mappings and returns them grouped by key.
    fn take_all(&mut self) -> Vec<(K, Self::Values)>;

    /// Iterates every key-value pair. A key repeats once per value.
    fn entries(&self) -> Box<dyn Iterator<Item = (&K, &V)> + '_>;

    /// Iterates the distinct keys.
    fn keys(&self) -> Box<dyn Iterator<Item = &K> + '_>;

    /// Iterates every value of every key.
    fn values(&self) -> Box<dyn Iterator<Item = &V> + '_>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provided_put_all_values() {
        let mut map: ListValuedHashMap<&str, i32> = ListValuedHashMap::new();

        assert!(!map.put_all_values("a", Vec::new()).unwrap());
        assert!(!map.contains_key(&"a"));

        assert!(map.put_all_values("a", vec![1, 2, 3]).unwrap());
        assert_eq!(map.get(&"a"), Some(&vec![1, 2, 3]));
    }

    #[test]
    fn test_provided_put_all_values_into_set() {
        let mut map: SetValuedHashMap<&str, i32> = SetValuedHashMap::new();
        map.put("a", 1).unwrap();

        // Nothing new under the key
        assert!(!map.put_all_values("a", vec![1, 1]).unwrap());
        assert!(map.put_all_values("a", vec![1, 2]).unwrap());
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_null_arguments_are_rejected() {
        let mut map: ListValuedHashMap<&str, i32> = ListValuedHashMap::new();
        map.put("a", 1).unwrap();

        let result = map.put_all_values_opt("a", None::<Vec<i32>>);
        assert_eq!(result, Err(MultiMapError::NullArgument("values")));

        let result = map.put_all_map_opt(None::<Vec<(&str, i32)>>);
        assert_eq!(result, Err(MultiMapError::NullArgument("map")));

        let result = map.put_all_opt(None::<&ListValuedHashMap<&str, i32>>);
        assert_eq!(result, Err(MultiMapError::NullArgument("map")));

        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_put_all_from_multimap() {
        let mut source: ListValuedHashMap<&str, i32> = ListValuedHashMap::new();
        source.put("a", 1).unwrap();
        source.put("a", 2).unwrap();
        source.put("b", 3).unwrap();

        let mut target: SetValuedHashMap<&str, i32> = SetValuedHashMap::new();
        target.put("a", 1).unwrap();

        // (a, 1) is a duplicate in the set, the others are new
        assert!(target.put_all(&source).unwrap());
        assert_eq!(target.len(), 3);

        // Everything is already present
        assert!(!target.put_all(&source).unwrap());
    }

    #[test]
    fn test_values_iterates_every_value() {
        let map: ListValuedHashMap<&str, i32> =
            [("a", 1), ("a", 2), ("b", 3)].into_iter().collect();

        let mut values: Vec<i32> = map.values().copied().collect();
        values.sort_unstable();
        assert_eq!(values, vec![1, 2, 3]);
    }
}
