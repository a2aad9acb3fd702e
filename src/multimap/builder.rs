//! Builder for [`TransformedMultiValuedMap`].

use super::transformed::TransformedMultiValuedMap;
use super::MultiValuedMap;
use crate::error::{MultiMapError, Result};
use crate::functors::{NopTransformer, Transformer};

/// Builder for configuring and constructing a [`TransformedMultiValuedMap`].
///
/// Transformers left unset are absent (no transformation), not identity
/// functions. By default existing content of the wrapped map is left as it
/// is; call [`transform_existing`](Self::transform_existing) to rewrite it.
///
/// # Example
///
/// ```
/// use libmultimap::prelude::*;
///
/// let mut existing: ListValuedHashMap<String, i32> = ListValuedHashMap::new();
/// existing.put("Key".to_string(), 1).unwrap();
///
/// let map = TransformedMultiValuedMapBuilder::new()
///     .map(existing)
///     .key_transformer(|k: String| k.to_lowercase())
///     .transform_existing(true)
///     .build()
///     .unwrap();
///
/// assert!(map.contains_mapping(&"key".to_string(), &1));
/// ```
#[derive(Debug, Clone)]
pub struct TransformedMultiValuedMapBuilder<M, KT = NopTransformer, VT = NopTransformer> {
    map: Option<M>,
    key_transformer: Option<KT>,
    value_transformer: Option<VT>,
    transform_existing: bool,
}

impl<M> TransformedMultiValuedMapBuilder<M, NopTransformer, NopTransformer> {
    /// Create a new builder with no map and no transformers.
    pub fn new() -> Self {
        Self {
            map: None,
            key_transformer: None,
            value_transformer: None,
            transform_existing: false,
        }
    }
}

impl<M> Default for TransformedMultiValuedMapBuilder<M, NopTransformer, NopTransformer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M, KT, VT> TransformedMultiValuedMapBuilder<M, KT, VT> {
    /// Set the map to decorate.
    pub fn map(mut self, map: M) -> Self {
        self.map = Some(map);
        self
    }

    /// Set the transformer applied to every inserted key.
    pub fn key_transformer<T>(self, transformer: T) -> TransformedMultiValuedMapBuilder<M, T, VT> {
        TransformedMultiValuedMapBuilder {
            map: self.map,
            key_transformer: Some(transformer),
            value_transformer: self.value_transformer,
            transform_existing: self.transform_existing,
        }
    }

    /// Set the transformer applied to every inserted value.
    pub fn value_transformer<T>(
        self,
        transformer: T,
    ) -> TransformedMultiValuedMapBuilder<M, KT, T> {
        TransformedMultiValuedMapBuilder {
            map: self.map,
            key_transformer: self.key_transformer,
            value_transformer: Some(transformer),
            transform_existing: self.transform_existing,
        }
    }

    /// Choose whether content already in the map is transformed on build.
    pub fn transform_existing(mut self, transform_existing: bool) -> Self {
        self.transform_existing = transform_existing;
        self
    }

    /// Build the [`TransformedMultiValuedMap`].
    ///
    /// # Errors
    ///
    /// Returns [`MultiMapError::NullArgument`] if no map was set (use
    /// `.map()`), or the first failure while rewriting existing content. The
    /// map is dropped in that case; call
    /// [`TransformedMultiValuedMap::transformed_map`] directly to get it
    /// back.
    pub fn build<K, V>(self) -> Result<TransformedMultiValuedMap<M, KT, VT>>
    where
        M: MultiValuedMap<K, V>,
        KT: Transformer<K>,
        VT: Transformer<V>,
        K: Clone,
    {
        let map = self.map.ok_or(MultiMapError::NullArgument("map"))?;

        if self.transform_existing {
            TransformedMultiValuedMap::transformed_map(
                map,
                self.key_transformer,
                self.value_transformer,
            )
            .map_err(MultiMapError::from)
        } else {
            Ok(TransformedMultiValuedMap::transforming_map(
                map,
                self.key_transformer,
                self.value_transformer,
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::functors::{FallibleTransformer, TransformError};
    use crate::multimap::ListValuedHashMap;

    fn existing() -> ListValuedHashMap<String, i32> {
        let mut map = ListValuedHashMap::new();
        map.put("a".to_string(), 1).unwrap();
        map
    }

    #[test]
    fn test_builder_missing_map() {
        let result = TransformedMultiValuedMapBuilder::<ListValuedHashMap<String, i32>>::new()
            .key_transformer(|k: String| k.to_uppercase())
            .build();

        assert_eq!(result.err(), Some(MultiMapError::NullArgument("map")));
    }

    #[test]
    fn test_builder_without_transformers() {
        let mut map = TransformedMultiValuedMapBuilder::new()
            .map(existing())
            .build()
            .unwrap();

        assert!(!map.has_key_transformer());
        assert!(!map.has_value_transformer());
        map.put("b".to_string(), 2).unwrap();
        assert!(map.contains_mapping(&"b".to_string(), &2));
    }

    #[test]
    fn test_builder_transforming_by_default() {
        let mut map = TransformedMultiValuedMapBuilder::new()
            .map(existing())
            .value_transformer(|v: i32| v * 10)
            .build()
            .unwrap();

        assert!(map.contains_mapping(&"a".to_string(), &1));
        map.put("a".to_string(), 2).unwrap();
        assert_eq!(map.get(&"a".to_string()), Some(&vec![1, 20]));
    }

    #[test]
    fn test_builder_transform_existing() {
        let map = TransformedMultiValuedMapBuilder::new()
            .map(existing())
            .key_transformer(|k: String| k.to_uppercase())
            .value_transformer(|v: i32| v * 10)
            .transform_existing(true)
            .build()
            .unwrap();

        assert!(map.has_key_transformer());
        assert!(map.has_value_transformer());
        assert_eq!(map.get(&"A".to_string()), Some(&vec![10]));
        assert!(!map.contains_key(&"a".to_string()));
    }

    #[test]
    fn test_builder_reports_rewrite_failure() {
        let result = TransformedMultiValuedMapBuilder::new()
            .map(existing())
            .value_transformer(FallibleTransformer::new(|_: i32| {
                Err::<i32, _>(TransformError::new("no values allowed"))
            }))
            .transform_existing(true)
            .build();

        assert_eq!(
            result.err(),
            Some(MultiMapError::Transform(TransformError::new("no values allowed")))
        );
    }

    #[test]
    fn test_builder_order_independence() {
        let first = TransformedMultiValuedMapBuilder::new()
            .transform_existing(true)
            .key_transformer(|k: String| k.to_uppercase())
            .map(existing())
            .build()
            .unwrap();

        let second = TransformedMultiValuedMapBuilder::new()
            .map(existing())
            .transform_existing(true)
            .key_transformer(|k: String| k.to_uppercase())
            .build()
            .unwrap();

        assert_eq!(first.inner().as_map(), second.inner().as_map());
    }
}
