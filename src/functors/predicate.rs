//! Predicates: single-argument boolean tests.
//!
//! [`Predicate`] has one required method, [`test`](Predicate::test), and a
//! provided alias, [`evaluate`](Predicate::evaluate), that always returns the
//! same result. Closures `Fn(&T) -> bool` are predicates.
//!
//! Absent ("null") inputs are modelled as `Option<T>`: [`NullPredicate`],
//! [`NotNullPredicate`], [`NullIsTruePredicate`] and [`NullIsFalsePredicate`]
//! test `Option<T>` values.
//!
//! # Examples
//!
//! ```
//! use libmultimap::functors::{NullIsTruePredicate, Predicate};
//!
//! let small = |v: &u32| *v < 10;
//! let small_or_missing = NullIsTruePredicate::new(small);
//!
//! assert!(small_or_missing.test(&None::<u32>));
//! assert!(small_or_missing.test(&Some(3)));
//! assert!(!small_or_missing.evaluate(&Some(30)));
//! ```

/// A single-argument boolean test.
pub trait Predicate<T: ?Sized> {
    /// Tests `input`.
    fn test(&self, input: &T) -> bool;

    /// Alias of [`test`](Predicate::test), kept for callers that expect
    /// this name. Always returns the same result as `test`.
    #[inline]
    fn evaluate(&self, input: &T) -> bool {
        self.test(input)
    }

    /// Both `self` and `other` hold.
    fn and<P>(self, other: P) -> AndPredicate<Self, P>
    where
        Self: Sized,
        P: Predicate<T>,
    {
        AndPredicate::new(self, other)
    }

    /// Either `self` or `other` holds.
    fn or<P>(self, other: P) -> OrPredicate<Self, P>
    where
        Self: Sized,
        P: Predicate<T>,
    {
        OrPredicate::new(self, other)
    }

    /// `self` does not hold.
    fn negate(self) -> NotPredicate<Self>
    where
        Self: Sized,
    {
        NotPredicate::new(self)
    }
}

impl<T, F> Predicate<T> for F
where
    T: ?Sized,
    F: Fn(&T) -> bool,
{
    #[inline]
    fn test(&self, input: &T) -> bool {
        self(input)
    }
}

/// Always true.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TruePredicate;

impl<T: ?Sized> Predicate<T> for TruePredicate {
    #[inline]
    fn test(&self, _input: &T) -> bool {
        true
    }
}

/// Always false.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FalsePredicate;

impl<T: ?Sized> Predicate<T> for FalsePredicate {
    #[inline]
    fn test(&self, _input: &T) -> bool {
        false
    }
}

/// True when the input equals a stored value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EqualPredicate<T> {
    value: T,
}

impl<T> EqualPredicate<T> {
    /// Creates a predicate matching `value`.
    pub fn new(value: T) -> Self {
        Self { value }
    }
}

impl<T: PartialEq> Predicate<T> for EqualPredicate<T> {
    #[inline]
    fn test(&self, input: &T) -> bool {
        *input == self.value
    }
}

/// True for `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullPredicate;

impl<T> Predicate<Option<T>> for NullPredicate {
    #[inline]
    fn test(&self, input: &Option<T>) -> bool {
        input.is_none()
    }
}

/// True for `Some(_)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NotNullPredicate;

impl<T> Predicate<Option<T>> for NotNullPredicate {
    #[inline]
    fn test(&self, input: &Option<T>) -> bool {
        input.is_some()
    }
}

/// True for `None`; otherwise defers to the wrapped predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NullIsTruePredicate<P> {
    predicate: P,
}

impl<P> NullIsTruePredicate<P> {
    /// Wraps `predicate`.
    pub fn new(predicate: P) -> Self {
        Self { predicate }
    }
}

impl<T, P> Predicate<Option<T>> for NullIsTruePredicate<P>
where
    P: Predicate<T>,
{
    #[inline]
    fn test(&self, input: &Option<T>) -> bool {
        input.as_ref().map_or(true, |value| self.predicate.test(value))
    }
}

/// False for `None`; otherwise defers to the wrapped predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NullIsFalsePredicate<P> {
    predicate: P,
}

impl<P> NullIsFalsePredicate<P> {
    /// Wraps `predicate`.
    pub fn new(predicate: P) -> Self {
        Self { predicate }
    }
}

impl<T, P> Predicate<Option<T>> for NullIsFalsePredicate<P>
where
    P: Predicate<T>,
{
    #[inline]
    fn test(&self, input: &Option<T>) -> bool {
        input.as_ref().is_some_and(|value| self.predicate.test(value))
    }
}

/// Inverts the wrapped predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotPredicate<P> {
    predicate: P,
}

impl<P> NotPredicate<P> {
    /// Wraps `predicate`.
    pub fn new(predicate: P) -> Self {
        Self { predicate }
    }
}

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for NotPredicate<P> {
    #[inline]
    fn test(&self, input: &T) -> bool {
        !self.predicate.test(input)
    }
}

/// True when both predicates hold. `second` is not tested if `first` fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AndPredicate<A, B> {
    first: A,
    second: B,
}

impl<A, B> AndPredicate<A, B> {
    /// Combines two predicates.
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<T, A, B> Predicate<T> for AndPredicate<A, B>
where
    T: ?Sized,
    A: Predicate<T>,
    B: Predicate<T>,
{
    #[inline]
    fn test(&self, input: &T) -> bool {
        self.first.test(input) && self.second.test(input)
    }
}

/// True when either predicate holds. `second` is not tested if `first`
/// holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrPredicate<A, B> {
    first: A,
    second: B,
}

impl<A, B> OrPredicate<A, B> {
    /// Combines two predicates.
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<T, A, B> Predicate<T> for OrPredicate<A, B>
where
    T: ?Sized,
    A: Predicate<T>,
    B: Predicate<T>,
{
    #[inline]
    fn test(&self, input: &T) -> bool {
        self.first.test(input) || self.second.test(input)
    }
}

/// True when every wrapped predicate holds. An empty set is true.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllPredicate<P> {
    predicates: Vec<P>,
}

impl<P> AllPredicate<P> {
    /// Combines `predicates`.
    pub fn new(predicates: impl IntoIterator<Item = P>) -> Self {
        Self {
            predicates: predicates.into_iter().collect(),
        }
    }
}

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for AllPredicate<P> {
    fn test(&self, input: &T) -> bool {
        self.predicates.iter().all(|predicate| predicate.test(input))
    }
}

/// True when at least one wrapped predicate holds. An empty set is false.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnyPredicate<P> {
    predicates: Vec<P>,
}

impl<P> AnyPredicate<P> {
    /// Combines `predicates`.
    pub fn new(predicates: impl IntoIterator<Item = P>) -> Self {
        Self {
            predicates: predicates.into_iter().collect(),
        }
    }
}

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for AnyPredicate<P> {
    fn test(&self, input: &T) -> bool {
        self.predicates.iter().any(|predicate| predicate.test(input))
    }
}
