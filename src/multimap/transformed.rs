//! Decorator that transforms keys and values on their way into a map.
//!
//! [`TransformedMultiValuedMap`] wraps any [`MultiValuedMap`] and passes every
//! key and value entering through one of its mutating entry points (`put`,
//! `put_all_values`, `put_all_map`, `put_all` and their `_opt` variants)
//! through an optional key transformer and an optional value transformer.
//! Everything else (lookups, iteration, removal) is forwarded unchanged and
//! sees the stored, already transformed, content.
//!
//! # Construction policies
//!
//! - [`transformed_map`](TransformedMultiValuedMap::transformed_map) rewrites
//!   the content the wrapped map already holds, so old and new entries are
//!   all transformed.
//! - [`transforming_map`](TransformedMultiValuedMap::transforming_map) leaves
//!   existing content exactly as it was and only transforms what comes later.
//!
//! # Examples
//!
//! ```
//! use libmultimap::prelude::*;
//!
//! let mut scores: ListValuedHashMap<String, u32> = ListValuedHashMap::new();
//! scores.put("Alice".to_string(), 1).unwrap();
//!
//! let mut scores = TransformedMultiValuedMap::transformed_map(
//!     scores,
//!     Some(|name: String| name.to_lowercase()),
//!     Some(|score: u32| score * 10),
//! )
//! .unwrap();
//!
//! scores.put("ALICE".to_string(), 2).unwrap();
//!
//! // Lookups use the stored (transformed) key
//! assert_eq!(scores.get(&"alice".to_string()), Some(&vec![10, 20]));
//! assert!(!scores.contains_key(&"ALICE".to_string()));
//! ```

use super::{MultiValuedMap, ValueCollection};
use crate::error::{Result, RetransformError};
use crate::functors::Transformer;

/// A multi-valued map decorator applying transformers to inserted keys and
/// values.
///
/// An absent transformer (`None`) means no transformation: the transformer is
/// never called and the input is stored as given.
///
/// Values added through [`values_mut`](MultiValuedMap::values_mut), or
/// directly to the wrapped map, bypass transformation.
///
/// [`put_all_values`](MultiValuedMap::put_all_values) transforms its values
/// but adds them through the wrapped map's collection view, so the wrapped
/// map's own `put` is not called for them and cannot reject them. Every
/// other insertion path ends in the wrapped map's `put`.
///
/// # Type Parameters
///
/// - `M`: Decorated map type
/// - `KT`: Key transformer type
/// - `VT`: Value transformer type
#[derive(Debug, Clone)]
pub struct TransformedMultiValuedMap<M, KT, VT> {
    decorated: M,
    key_transformer: Option<KT>,
    value_transformer: Option<VT>,
}

impl<M, KT, VT> TransformedMultiValuedMap<M, KT, VT> {
    /// Decorates `map`, leaving its existing content untransformed.
    ///
    /// Only mappings added through the decorator from now on are transformed.
    ///
    /// # Examples
    ///
    /// ```
    /// use libmultimap::prelude::*;
    ///
    /// let mut map: ListValuedHashMap<&str, i32> = ListValuedHashMap::new();
    /// map.put("a", 1).unwrap();
    ///
    /// let mut map = TransformedMultiValuedMap::transforming_map(
    ///     map,
    ///     None::<NopTransformer>,
    ///     Some(|v: i32| -v),
    /// );
    /// map.put("a", 2).unwrap();
    ///
    /// assert_eq!(map.get(&"a"), Some(&vec![1, -2]));
    /// ```
    pub fn transforming_map(
        map: M,
        key_transformer: Option<KT>,
        value_transformer: Option<VT>,
    ) -> Self {
        Self {
            decorated: map,
            key_transformer,
            value_transformer,
        }
    }

    /// Decorates `map` and transforms the content it already holds.
    ///
    /// Existing mappings are taken out of the wrapped map and put back one by
    /// one through [`put`](MultiValuedMap::put), so each key and each value
    /// is transformed once per mapping and the wrapped map's own `put` sees
    /// every re-inserted mapping.
    ///
    /// # Errors
    ///
    /// Stops at the first transformer failure or rejection and returns it in
    /// a [`RetransformError`] that hands the wrapped map back. The map then
    /// holds the mappings re-inserted so far plus the remaining original
    /// ones, untransformed. The mapping that failed is dropped.
    pub fn transformed_map<K, V>(
        map: M,
        key_transformer: Option<KT>,
        value_transformer: Option<VT>,
    ) -> std::result::Result<Self, RetransformError<M>>
    where
        M: MultiValuedMap<K, V>,
        KT: Transformer<K>,
        VT: Transformer<V>,
        K: Clone,
    {
        let mut decorated = Self::transforming_map(map, key_transformer, value_transformer);
        if decorated.decorated.is_empty() {
            return Ok(decorated);
        }

        let snapshot = decorated.decorated.take_all();
        log::debug!(
            "Re-transforming {} keys of the decorated map",
            snapshot.len()
        );

        let mut groups = snapshot.into_iter();
        while let Some((key, values)) = groups.next() {
            let mut values = values.into_iter();
            while let Some(value) = values.next() {
                if let Err(error) = decorated.put(key.clone(), value) {
                    log::debug!("Re-transforming stopped: {}", error);
                    restore(&mut decorated.decorated, key, values);
                    for (key, values) in groups {
                        restore(&mut decorated.decorated, key, values);
                    }
                    return Err(RetransformError::new(error, decorated.decorated));
                }
            }
        }
        Ok(decorated)
    }

    /// Gets a reference to the decorated map.
    #[inline]
    pub fn inner(&self) -> &M {
        &self.decorated
    }

    /// Gets a mutable reference to the decorated map.
    ///
    /// Mappings added through this reference are not transformed.
    #[inline]
    pub fn inner_mut(&mut self) -> &mut M {
        &mut self.decorated
    }

    /// Unwraps the decorated map.
    #[inline]
    pub fn into_inner(self) -> M {
        self.decorated
    }

    /// Returns `true` if a key transformer is configured.
    #[inline]
    pub fn has_key_transformer(&self) -> bool {
        self.key_transformer.is_some()
    }

    /// Returns `true` if a value transformer is configured.
    #[inline]
    pub fn has_value_transformer(&self) -> bool {
        self.value_transformer.is_some()
    }

    /// Transforms a key, or returns it unchanged without a key transformer.
    #[inline]
    fn transform_key<K>(&self, key: K) -> Result<K>
    where
        KT: Transformer<K>,
    {
        apply(&self.key_transformer, key)
    }

    /// Transforms a value, or returns it unchanged without a value
    /// transformer.
    #[inline]
    fn transform_value<V>(&self, value: V) -> Result<V>
    where
        VT: Transformer<V>,
    {
        apply(&self.value_transformer, value)
    }
}

/// Puts untransformed mappings back into `map` through its collection view.
fn restore<K, V, M, I>(map: &mut M, key: K, values: I)
where
    M: MultiValuedMap<K, V>,
    I: IntoIterator<Item = V>,
{
    let mut values = values.into_iter().peekable();
    if values.peek().is_none() {
        return;
    }

    let collection = map.values_mut(key);
    for value in values {
        collection.add(value);
    }
}

#[inline]
fn apply<T, F>(transformer: &Option<F>, input: T) -> Result<T>
where
    F: Transformer<T>,
{
    match transformer {
        Some(transformer) => Ok(transformer.transform(input)?),
        None => Ok(input),
    }
}

impl<K, V, M, KT, VT> MultiValuedMap<K, V> for TransformedMultiValuedMap<M, KT, VT>
where
    M: MultiValuedMap<K, V>,
    KT: Transformer<K>,
    VT: Transformer<V>,
{
    type Values = M::Values;

    #[inline]
    fn len(&self) -> usize {
        self.decorated.len()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.decorated.is_empty()
    }

    #[inline]
    fn key_count(&self) -> usize {
        self.decorated.key_count()
    }

    #[inline]
    fn contains_key(&self, key: &K) -> bool {
        self.decorated.contains_key(key)
    }

    #[inline]
    fn contains_value(&self, value: &V) -> bool {
        self.decorated.contains_value(value)
    }

    #[inline]
    fn contains_mapping(&self, key: &K, value: &V) -> bool {
        self.decorated.contains_mapping(key, value)
    }

    #[inline]
    fn get(&self, key: &K) -> Option<&Self::Values> {
        self.decorated.get(key)
    }

    #[inline]
    fn values_mut(&mut self, key: K) -> &mut Self::Values {
        self.decorated.values_mut(key)
    }

    fn put(&mut self, key: K, value: V) -> Result<bool> {
        let key = self.transform_key(key)?;
        let value = self.transform_value(value)?;
        self.decorated.put(key, value)
    }

    fn put_all_values<I>(&mut self, key: K, values: I) -> Result<bool>
    where
        I: IntoIterator<Item = V>,
    {
        let mut values = values.into_iter();
        let Some(first) = values.next() else {
            return Ok(false);
        };

        let key = apply(&self.key_transformer, key)?;

        // The first value is transformed before the decorated map is touched,
        // so a failure does not leave an empty collection behind.
        let first = apply(&self.value_transformer, first)?;

        let value_transformer = &self.value_transformer;
        let collection = self.decorated.values_mut(key);
        let mut changed = collection.add(first);
        for value in values.map(|value| apply(value_transformer, value)) {
            changed |= collection.add(value?);
        }
        Ok(changed)
    }

    // put_all_map and put_all keep their provided implementations, which
    // route every pair through put above.

    #[inline]
    fn remove(&mut self, key: &K) -> Option<Self::Values> {
        self.decorated.remove(key)
    }

    #[inline]
    fn remove_mapping(&mut self, key: &K, value: &V) -> bool {
        self.decorated.remove_mapping(key, value)
    }

    #[inline]
    fn clear(&mut self) {
        self.decorated.clear();
    }

    #[inline]
    fn take_all(&mut self) -> Vec<(K, Self::Values)> {
        self.decorated.take_all()
    }

    #[inline]
    fn entries(&self) -> Box<dyn Iterator<Item = (&K, &V)> + '_> {
        self.decorated.entries()
    }

    #[inline]
    fn keys(&self) -> Box<dyn Iterator<Item = &K> + '_> {
        self.decorated.keys()
    }

    #[inline]
    fn values(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        self.decorated.values()
    }
}
