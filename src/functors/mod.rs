//! Functor building blocks: predicates and transformers.
//!
//! These are the single-argument function objects the rest of the library
//! composes. A [`Transformer`] rewrites a value (used by
//! [`TransformedMultiValuedMap`](crate::multimap::TransformedMultiValuedMap)
//! to rewrite keys and values), a [`Predicate`] tests one.

pub mod predicate;
pub mod transformer;

pub use predicate::{
    AllPredicate, AndPredicate, AnyPredicate, EqualPredicate, FalsePredicate, NotNullPredicate,
    NotPredicate, NullIsFalsePredicate, NullIsTruePredicate, NullPredicate, OrPredicate,
    Predicate, TruePredicate,
};
pub use transformer::{
    ChainedTransformer, ConstantTransformer, FallibleTransformer, IfTransformer, NopTransformer,
    TransformError, Transformer,
};
