//! Transformers: single-argument functions applied at interception points.
//!
//! Any `Fn(I) -> O` closure is an infallible [`Transformer`]. The concrete
//! functors here cover the cases a closure cannot express directly: failure
//! ([`FallibleTransformer`]), composition ([`ChainedTransformer`]) and
//! predicate-driven branching ([`IfTransformer`]).
//!
//! # Examples
//!
//! ```
//! use libmultimap::functors::{ChainedTransformer, Transformer};
//!
//! let trim = |s: String| s.trim().to_string();
//! let upper = |s: String| s.to_uppercase();
//! let normalize = ChainedTransformer::new(trim, upper);
//!
//! assert_eq!(normalize.transform("  key ".to_string()).unwrap(), "KEY");
//! ```

use super::predicate::Predicate;
use std::marker::PhantomData;
use thiserror::Error;

/// Failure raised by a transformer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Transformer failed: {message}")]
pub struct TransformError {
    message: String,
}

impl TransformError {
    /// Creates an error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The failure message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Converts an input of type `I` into an output of type `O`.
pub trait Transformer<I, O = I> {
    /// Transforms `input`.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError`] if the input cannot be transformed.
    fn transform(&self, input: I) -> Result<O, TransformError>;
}

impl<I, O, F> Transformer<I, O> for F
where
    F: Fn(I) -> O,
{
    #[inline]
    fn transform(&self, input: I) -> Result<O, TransformError> {
        Ok(self(input))
    }
}

/// Returns its input unchanged.
///
/// Decorators treat an absent transformer as "no transformation" and never
/// call it; this functor is for places that need a transformer value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NopTransformer;

impl<T> Transformer<T> for NopTransformer {
    #[inline]
    fn transform(&self, input: T) -> Result<T, TransformError> {
        Ok(input)
    }
}

/// Ignores its input and returns a clone of a constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantTransformer<O> {
    constant: O,
}

impl<O> ConstantTransformer<O> {
    /// Creates a transformer that always returns `constant`.
    pub fn new(constant: O) -> Self {
        Self { constant }
    }
}

impl<I, O> Transformer<I, O> for ConstantTransformer<O>
where
    O: Clone,
{
    #[inline]
    fn transform(&self, _input: I) -> Result<O, TransformError> {
        Ok(self.constant.clone())
    }
}

/// Wraps a closure that may fail.
///
/// # Examples
///
/// ```
/// use libmultimap::functors::{FallibleTransformer, TransformError, Transformer};
///
/// let parse = FallibleTransformer::new(|s: &str| {
///     s.parse::<u32>().map_err(|e| TransformError::new(e.to_string()))
/// });
///
/// assert_eq!(parse.transform("42"), Ok(42));
/// assert!(parse.transform("x").is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FallibleTransformer<F> {
    function: F,
}

impl<F> FallibleTransformer<F> {
    /// Creates a transformer from a fallible closure.
    pub fn new(function: F) -> Self {
        Self { function }
    }
}

impl<I, O, F> Transformer<I, O> for FallibleTransformer<F>
where
    F: Fn(I) -> Result<O, TransformError>,
{
    #[inline]
    fn transform(&self, input: I) -> Result<O, TransformError> {
        (self.function)(input)
    }
}

/// Applies `first`, then `second` to the result.
///
/// The intermediate type `M` is carried as a marker so that the pair can
/// implement [`Transformer<I, O>`] for a single `I -> M -> O` chain.
pub struct ChainedTransformer<A, B, M = ()> {
    first: A,
    second: B,
    _intermediate: PhantomData<fn(M) -> M>,
}

impl<A, B, M> ChainedTransformer<A, B, M> {
    /// Chains two transformers.
    pub fn new(first: A, second: B) -> Self {
        Self {
            first,
            second,
            _intermediate: PhantomData,
        }
    }
}

impl<A: Clone, B: Clone, M> Clone for ChainedTransformer<A, B, M> {
    fn clone(&self) -> Self {
        Self::new(self.first.clone(), self.second.clone())
    }
}

impl<I, M, O, A, B> Transformer<I, O> for ChainedTransformer<A, B, M>
where
    A: Transformer<I, M>,
    B: Transformer<M, O>,
{
    fn transform(&self, input: I) -> Result<O, TransformError> {
        let intermediate = self.first.transform(input)?;
        self.second.transform(intermediate)
    }
}

/// Applies `if_true` when the predicate holds for the input, `if_false`
/// otherwise.
///
/// # Examples
///
/// ```
/// use libmultimap::functors::{IfTransformer, NopTransformer, Transformer};
///
/// let clamp = IfTransformer::new(|v: &i32| *v > 100, |_: i32| 100, NopTransformer);
/// assert_eq!(clamp.transform(250), Ok(100));
/// assert_eq!(clamp.transform(7), Ok(7));
/// ```
#[derive(Debug, Clone)]
pub struct IfTransformer<P, T, F> {
    predicate: P,
    if_true: T,
    if_false: F,
}

impl<P, T, F> IfTransformer<P, T, F> {
    /// Creates a branching transformer.
    pub fn new(predicate: P, if_true: T, if_false: F) -> Self {
        Self {
            predicate,
            if_true,
            if_false,
        }
    }
}

impl<I, O, P, T, F> Transformer<I, O> for IfTransformer<P, T, F>
where
    P: Predicate<I>,
    T: Transformer<I, O>,
    F: Transformer<I, O>,
{
    fn transform(&self, input: I) -> Result<O, TransformError> {
        if self.predicate.test(&input) {
            self.if_true.transform(input)
        } else {
            self.if_false.transform(input)
        }
    }
}
