//! The default carrier failure used by nesting bridges.

use std::error::Error;
use std::fmt;

/// A type-erased, thread-safe failure value.
///
/// This is the failure type of the "erased" sibling of a throwing shape:
/// the same arity and value types, but with the statically-declared failure
/// type gone from the signature. The original failure object is still the
/// one inside the box — [`Error::downcast_ref`] recovers it with its
/// message and source chain intact.
pub type DynFailure = Box<dyn Error + Send + Sync + 'static>;

/// The fixed default carrier produced by nesting bridges.
///
/// `Nested` wraps an original failure in a new failure value that keeps the
/// original reachable forever: through [`Error::source`], through
/// [`Nested::get`], or by consuming the carrier with
/// [`Nested::into_inner`]. A nested failure is never discarded — callers
/// several layers removed can still walk back to the root cause.
///
/// # Examples
///
/// ```rust
/// use fnwrap::bridge::Nested;
/// use std::error::Error;
///
/// let original = "broken".parse::<i32>().unwrap_err();
/// let nested = Nested::new(original);
///
/// let cause = nested.source().expect("original is retained");
/// assert!(cause.is::<std::num::ParseIntError>());
/// ```
#[derive(Debug)]
pub struct Nested {
    source: DynFailure,
}

impl Nested {
    /// Wraps the given failure as the carrier's source.
    pub fn new(source: impl Into<DynFailure>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Returns the original failure.
    #[must_use]
    pub fn get(&self) -> &(dyn Error + Send + Sync + 'static) {
        self.source.as_ref()
    }

    /// Consumes the carrier and returns the original failure.
    #[must_use]
    pub fn into_inner(self) -> DynFailure {
        self.source
    }
}

impl fmt::Display for Nested {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "nested failure: {}", self.source)
    }
}

impl Error for Nested {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.source.as_ref())
    }
}
