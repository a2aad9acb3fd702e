//! Error types for multi-valued map operations.

use crate::functors::TransformError;
use thiserror::Error;

/// Errors that can occur while mutating a multi-valued map.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MultiMapError {
    /// A required argument was absent.
    ///
    /// Raised before any mutation takes place, so the map is left as it was.
    #[error("{0} must not be null")]
    NullArgument(&'static str),

    /// A key or value transformer failed.
    ///
    /// Mappings inserted earlier in the same bulk call stay inserted.
    #[error(transparent)]
    Transform(#[from] TransformError),

    /// The decorated map refused a mapping passed to its `put`.
    ///
    /// Decorators relay it unchanged from every path that ends in the
    /// decorated map's `put`. Values added through a collection view
    /// ([`values_mut`](crate::multimap::MultiValuedMap::values_mut), which
    /// `put_all_values` uses) never reach `put` and cannot be rejected.
    #[error("Mapping rejected: {0}")]
    Rejected(String),
}

/// A specialized `Result` type for multi-valued map operations.
pub type Result<T> = std::result::Result<T, MultiMapError>;

/// Failure while rewriting the content a decorated map already holds.
///
/// Carries the map back to the caller. It holds the mappings re-inserted
/// before the failure plus the not yet processed ones as they were; only the
/// mapping that failed is gone.
#[derive(Debug, Error)]
#[error("{error}")]
pub struct RetransformError<M> {
    error: MultiMapError,
    map: M,
}

impl<M> RetransformError<M> {
    /// Creates an error handing `map` back.
    pub fn new(error: MultiMapError, map: M) -> Self {
        Self { error, map }
    }

    /// The failure that stopped the rewrite.
    pub fn error(&self) -> &MultiMapError {
        &self.error
    }

    /// The map, as left by the failed rewrite.
    pub fn map(&self) -> &M {
        &self.map
    }

    /// Recovers the map, dropping the failure.
    pub fn into_map(self) -> M {
        self.map
    }

    /// Splits into the failure and the map.
    pub fn into_parts(self) -> (MultiMapError, M) {
        (self.error, self.map)
    }
}

impl<M> From<RetransformError<M>> for MultiMapError {
    fn from(error: RetransformError<M>) -> Self {
        error.error
    }
}
