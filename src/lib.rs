//! # libmultimap
//!
//! Multi-valued maps with transforming decorators.
//!
//! This library provides a [`MultiValuedMap`](multimap::MultiValuedMap)
//! abstraction (one key, many values), hash-backed list- and set-valued
//! implementations, and [`TransformedMultiValuedMap`](multimap::TransformedMultiValuedMap),
//! a decorator that rewrites every key and value on insertion while leaving
//! reads and removals untouched. The [`functors`] module supplies the
//! predicates and transformers the decorator composes.
//!
//! ## Example
//!
//! ```rust
//! use libmultimap::prelude::*;
//!
//! let lower = |k: String| k.to_lowercase();
//! let mut map = TransformedMultiValuedMap::transforming_map(
//!     ListValuedHashMap::<String, u32>::new(),
//!     Some(lower),
//!     None::<NopTransformer>,
//! );
//!
//! map.put("Apple".to_string(), 1).unwrap();
//! map.put_all_values("APPLE".to_string(), [2, 3]).unwrap();
//!
//! assert_eq!(map.get(&"apple".to_string()), Some(&vec![1, 2, 3]));
//! assert!(!map.contains_key(&"Apple".to_string()));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod functors;
pub mod multimap;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::error::{MultiMapError, RetransformError};
    pub use crate::functors::{
        AllPredicate, AndPredicate, AnyPredicate, ChainedTransformer, ConstantTransformer,
        EqualPredicate, FallibleTransformer, FalsePredicate, IfTransformer, NopTransformer,
        NotNullPredicate, NotPredicate, NullIsFalsePredicate, NullIsTruePredicate, NullPredicate,
        OrPredicate, Predicate, TransformError, Transformer, TruePredicate,
    };
    pub use crate::multimap::{
        FxListValuedHashMap, FxSetValuedHashMap, HashValuedMap, ListValuedHashMap,
        MultiValuedMap, SetValuedHashMap, TransformedMultiValuedMap,
        TransformedMultiValuedMapBuilder, ValueCollection,
    };
}
