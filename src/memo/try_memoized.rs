//! Memoized wrappers for fallible functions.
//!
//! These wrappers decorate `Fn(..) -> Result<R, E>` shapes. Only successful
//! results enter the cache: an `Err` is handed back to the caller without
//! being stored, so the next call with the same key re-attempts the
//! computation. This is a documented contract of the memoization layer, not
//! an incidental behavior — a transient failure must never be replayed
//! forever from the cache.

use std::fmt;
use std::hash::Hash;

use parking_lot::RwLock;

use super::CacheMap;

/// A memoized unary fallible function.
///
/// Wraps an `Fn(A) -> Result<R, E>` so that the underlying function runs at
/// most once per argument value *that has succeeded*. Obtained via
/// [`TryMemoize1::try_memoized`].
///
/// # Examples
///
/// ```rust
/// use fnwrap::memo::TryMemoize1;
///
/// let parse = (|text: String| text.parse::<i32>()).try_memoized();
///
/// assert_eq!(parse.call("42".to_string()), Ok(42));
/// assert!(parse.call("nope".to_string()).is_err());
/// assert_eq!(parse.cached_count(), 1); // only the success was cached
/// ```
pub struct TryMemoized1<F, A, R, E> {
    function: F,
    cache: RwLock<CacheMap<A, R>>,
    _failure: std::marker::PhantomData<fn() -> E>,
}

impl<F, A, R, E> TryMemoized1<F, A, R, E>
where
    F: Fn(A) -> Result<R, E>,
    A: Eq + Hash + Clone,
    R: Clone,
{
    pub(crate) fn new(function: F) -> Self {
        Self {
            function,
            cache: RwLock::new(CacheMap::default()),
            _failure: std::marker::PhantomData,
        }
    }

    /// Invokes the memoized function.
    ///
    /// A cached success is returned without re-invoking the function. On a
    /// miss the function runs: `Ok` is stored and returned, `Err` is
    /// returned uncached so the key stays eligible for a retry.
    ///
    /// # Errors
    ///
    /// Whatever the underlying function returns as `Err`, unchanged.
    pub fn call(&self, argument: A) -> Result<R, E> {
        {
            let cache = self.cache.read();
            if let Some(value) = cache.get(&argument) {
                return Ok(value.clone());
            }
        }

        let mut cache = self.cache.write();
        if let Some(value) = cache.get(&argument) {
            return Ok(value.clone());
        }
        match (self.function)(argument.clone()) {
            Ok(value) => {
                cache.insert(argument, value.clone());
                Ok(value)
            }
            Err(failure) => Err(failure),
        }
    }

    /// Returns `self` unchanged; a `TryMemoized1` is already memoized.
    #[inline]
    #[must_use]
    pub fn memoized(self) -> Self {
        self
    }

    /// Returns `self` unchanged; asking again must not introduce a second
    /// cache layer.
    #[inline]
    #[must_use]
    pub fn try_memoized(self) -> Self {
        self
    }

    /// Consumes the wrapper and returns the underlying function, discarding
    /// the cache.
    #[inline]
    pub fn into_inner(self) -> F {
        self.function
    }
}

impl<F, A, R, E> TryMemoized1<F, A, R, E>
where
    A: Eq + Hash,
{
    /// Returns the number of successful results currently cached.
    pub fn cached_count(&self) -> usize {
        self.cache.read().len()
    }

    /// Returns whether a successful result for the given argument is cached.
    pub fn is_cached(&self, argument: &A) -> bool {
        self.cache.read().contains_key(argument)
    }
}

impl<F, A, R, E> fmt::Debug for TryMemoized1<F, A, R, E>
where
    A: Eq + Hash,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("TryMemoized1")
            .field("cached", &self.cache.read().len())
            .finish_non_exhaustive()
    }
}

/// A memoized binary fallible function, keyed by the argument pair.
///
/// Obtained via [`TryMemoize2::try_memoized`].
pub struct TryMemoized2<F, A, B, R, E> {
    function: F,
    cache: RwLock<CacheMap<(A, B), R>>,
    _failure: std::marker::PhantomData<fn() -> E>,
}

impl<F, A, B, R, E> TryMemoized2<F, A, B, R, E>
where
    F: Fn(A, B) -> Result<R, E>,
    A: Eq + Hash + Clone,
    B: Eq + Hash + Clone,
    R: Clone,
{
    pub(crate) fn new(function: F) -> Self {
        Self {
            function,
            cache: RwLock::new(CacheMap::default()),
            _failure: std::marker::PhantomData,
        }
    }

    /// Invokes the memoized function with the given argument pair, caching
    /// successes only.
    ///
    /// # Errors
    ///
    /// Whatever the underlying function returns as `Err`, unchanged.
    pub fn call(&self, first: A, second: B) -> Result<R, E> {
        let key = (first, second);
        {
            let cache = self.cache.read();
            if let Some(value) = cache.get(&key) {
                return Ok(value.clone());
            }
        }

        let mut cache = self.cache.write();
        if let Some(value) = cache.get(&key) {
            return Ok(value.clone());
        }
        match (self.function)(key.0.clone(), key.1.clone()) {
            Ok(value) => {
                cache.insert(key, value.clone());
                Ok(value)
            }
            Err(failure) => Err(failure),
        }
    }

    /// Returns `self` unchanged; a `TryMemoized2` is already memoized.
    #[inline]
    #[must_use]
    pub fn memoized(self) -> Self {
        self
    }

    /// Returns `self` unchanged; asking again must not introduce a second
    /// cache layer.
    #[inline]
    #[must_use]
    pub fn try_memoized(self) -> Self {
        self
    }

    /// Consumes the wrapper and returns the underlying function, discarding
    /// the cache.
    #[inline]
    pub fn into_inner(self) -> F {
        self.function
    }
}

impl<F, A, B, R, E> TryMemoized2<F, A, B, R, E>
where
    A: Eq + Hash,
    B: Eq + Hash,
{
    /// Returns the number of successful results currently cached.
    pub fn cached_count(&self) -> usize {
        self.cache.read().len()
    }

    /// Returns whether a successful result for the given argument pair is
    /// cached.
    pub fn is_cached(&self, arguments: &(A, B)) -> bool {
        self.cache.read().contains_key(arguments)
    }
}

impl<F, A, B, R, E> fmt::Debug for TryMemoized2<F, A, B, R, E>
where
    A: Eq + Hash,
    B: Eq + Hash,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("TryMemoized2")
            .field("cached", &self.cache.read().len())
            .finish_non_exhaustive()
    }
}

/// A memoized ternary fallible function, keyed by the argument triple.
///
/// Obtained via [`TryMemoize3::try_memoized`].
pub struct TryMemoized3<F, A, B, C, R, E> {
    function: F,
    cache: RwLock<CacheMap<(A, B, C), R>>,
    _failure: std::marker::PhantomData<fn() -> E>,
}

impl<F, A, B, C, R, E> TryMemoized3<F, A, B, C, R, E>
where
    F: Fn(A, B, C) -> Result<R, E>,
    A: Eq + Hash + Clone,
    B: Eq + Hash + Clone,
    C: Eq + Hash + Clone,
    R: Clone,
{
    pub(crate) fn new(function: F) -> Self {
        Self {
            function,
            cache: RwLock::new(CacheMap::default()),
            _failure: std::marker::PhantomData,
        }
    }

    /// Invokes the memoized function with the given argument triple, caching
    /// successes only.
    ///
    /// # Errors
    ///
    /// Whatever the underlying function returns as `Err`, unchanged.
    pub fn call(&self, first: A, second: B, third: C) -> Result<R, E> {
        let key = (first, second, third);
        {
            let cache = self.cache.read();
            if let Some(value) = cache.get(&key) {
                return Ok(value.clone());
            }
        }

        let mut cache = self.cache.write();
        if let Some(value) = cache.get(&key) {
            return Ok(value.clone());
        }
        match (self.function)(key.0.clone(), key.1.clone(), key.2.clone()) {
            Ok(value) => {
                cache.insert(key, value.clone());
                Ok(value)
            }
            Err(failure) => Err(failure),
        }
    }

    /// Returns `self` unchanged; a `TryMemoized3` is already memoized.
    #[inline]
    #[must_use]
    pub fn memoized(self) -> Self {
        self
    }

    /// Returns `self` unchanged; asking again must not introduce a second
    /// cache layer.
    #[inline]
    #[must_use]
    pub fn try_memoized(self) -> Self {
        self
    }

    /// Consumes the wrapper and returns the underlying function, discarding
    /// the cache.
    #[inline]
    pub fn into_inner(self) -> F {
        self.function
    }
}

impl<F, A, B, C, R, E> TryMemoized3<F, A, B, C, R, E>
where
    A: Eq + Hash,
    B: Eq + Hash,
    C: Eq + Hash,
{
    /// Returns the number of successful results currently cached.
    pub fn cached_count(&self) -> usize {
        self.cache.read().len()
    }
}

impl<F, A, B, C, R, E> fmt::Debug for TryMemoized3<F, A, B, C, R, E>
where
    A: Eq + Hash,
    B: Eq + Hash,
    C: Eq + Hash,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("TryMemoized3")
            .field("cached", &self.cache.read().len())
            .finish_non_exhaustive()
    }
}

/// Extension trait providing `.try_memoized()` on unary fallible functions.
///
/// Blanket-implemented for every `Fn(A) -> Result<R, E>`.
pub trait TryMemoize1<A, R, E>: Fn(A) -> Result<R, E> + Sized {
    /// Wraps this fallible function in a thread-safe memoization layer that
    /// caches successful results only.
    fn try_memoized(self) -> TryMemoized1<Self, A, R, E>
    where
        A: Eq + Hash + Clone,
        R: Clone,
    {
        TryMemoized1::new(self)
    }
}

impl<F, A, R, E> TryMemoize1<A, R, E> for F where F: Fn(A) -> Result<R, E> {}

/// Extension trait providing `.try_memoized()` on binary fallible functions.
pub trait TryMemoize2<A, B, R, E>: Fn(A, B) -> Result<R, E> + Sized {
    /// Wraps this fallible function in a thread-safe memoization layer that
    /// caches successful results only, keyed by the argument pair.
    fn try_memoized(self) -> TryMemoized2<Self, A, B, R, E>
    where
        A: Eq + Hash + Clone,
        B: Eq + Hash + Clone,
        R: Clone,
    {
        TryMemoized2::new(self)
    }
}

impl<F, A, B, R, E> TryMemoize2<A, B, R, E> for F where F: Fn(A, B) -> Result<R, E> {}

/// Extension trait providing `.try_memoized()` on ternary fallible
/// functions.
pub trait TryMemoize3<A, B, C, R, E>: Fn(A, B, C) -> Result<R, E> + Sized {
    /// Wraps this fallible function in a thread-safe memoization layer that
    /// caches successful results only, keyed by the argument triple.
    fn try_memoized(self) -> TryMemoized3<Self, A, B, C, R, E>
    where
        A: Eq + Hash + Clone,
        B: Eq + Hash + Clone,
        C: Eq + Hash + Clone,
        R: Clone,
    {
        TryMemoized3::new(self)
    }
}

impl<F, A, B, C, R, E> TryMemoize3<A, B, C, R, E> for F where F: Fn(A, B, C) -> Result<R, E> {}

static_assertions::assert_impl_all!(
    TryMemoized1<fn(i32) -> Result<i32, std::num::ParseIntError>, i32, i32, std::num::ParseIntError>:
    Send, Sync
);
