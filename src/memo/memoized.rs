//! Memoized wrappers for plain (infallible) functions.
//!
//! A memoized wrapper owns the function it decorates together with a private
//! cache from argument key to computed result. The first call for a given
//! key invokes the function and stores the result; every later call with an
//! equal key returns the stored result without invoking the function again.
//!
//! Wrapping is idempotent by construction: the wrapper is a distinct nominal
//! type whose own `memoized()` returns `self` unchanged, so composition
//! chains that call `.memoized()` repeatedly never stack a second cache.
//!
//! If the wrapped function panics, the panic unwinds before anything is
//! stored — nothing is cached for that key and a later call re-attempts the
//! computation.

use std::fmt;
use std::hash::Hash;

use parking_lot::RwLock;

use super::CacheMap;

/// A memoized unary function.
///
/// Wraps an `Fn(A) -> R` so that the underlying function is invoked at most
/// once per distinct argument value. Obtained via
/// [`Memoize1::memoized`].
///
/// # Type Parameters
///
/// * `A` - The argument type, used as the cache key (`Eq + Hash + Clone`)
/// * `R` - The result type, cloned out of the cache on hits
///
/// # Thread Safety
///
/// `Memoized1` is `Send + Sync` whenever its function, argument, and result
/// types are, and is invoked through `&self`, so a single wrapper can be
/// shared across threads. Concurrent callers racing on the same missing key
/// observe exactly one invocation of the underlying function.
///
/// # Examples
///
/// ```rust
/// use fnwrap::memo::Memoize1;
///
/// let length = (|text: String| text.len()).memoized();
///
/// assert_eq!(length.call("hello".to_string()), 5);
/// assert_eq!(length.call("hello".to_string()), 5); // cache hit
/// assert_eq!(length.cached_count(), 1);
/// ```
pub struct Memoized1<F, A, R> {
    function: F,
    cache: RwLock<CacheMap<A, R>>,
}

impl<F, A, R> Memoized1<F, A, R>
where
    F: Fn(A) -> R,
    A: Eq + Hash + Clone,
    R: Clone,
{
    pub(crate) fn new(function: F) -> Self {
        Self {
            function,
            cache: RwLock::new(CacheMap::default()),
        }
    }

    /// Invokes the memoized function.
    ///
    /// Looks the argument up in the cache first; on a miss the underlying
    /// function runs and its result is stored before being returned. Cache
    /// hits return a clone of the stored value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnwrap::memo::Memoize1;
    ///
    /// let square = (|x: i32| x * x).memoized();
    /// assert_eq!(square.call(3), 9);
    /// ```
    pub fn call(&self, argument: A) -> R {
        {
            let cache = self.cache.read();
            if let Some(value) = cache.get(&argument) {
                return value.clone();
            }
        }

        let mut cache = self.cache.write();
        // Re-check under the write guard: another caller may have populated
        // the key while we waited for the lock.
        if let Some(value) = cache.get(&argument) {
            return value.clone();
        }
        let value = (self.function)(argument.clone());
        cache.insert(argument, value.clone());
        value
    }

    /// Returns `self` unchanged.
    ///
    /// A `Memoized1` is already memoized; asking again must not introduce a
    /// second cache layer.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnwrap::memo::Memoize1;
    ///
    /// let square = (|x: i32| x * x).memoized().memoized();
    /// assert_eq!(square.call(3), 9);
    /// ```
    #[inline]
    #[must_use]
    pub fn memoized(self) -> Self {
        self
    }

    /// Consumes the wrapper and returns the underlying function, discarding
    /// the cache.
    #[inline]
    pub fn into_inner(self) -> F {
        self.function
    }
}

impl<F, A, R> Memoized1<F, A, R>
where
    A: Eq + Hash,
{
    /// Returns the number of argument keys currently cached.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnwrap::memo::Memoize1;
    ///
    /// let square = (|x: i32| x * x).memoized();
    /// assert_eq!(square.cached_count(), 0);
    /// let _ = square.call(3);
    /// let _ = square.call(4);
    /// assert_eq!(square.cached_count(), 2);
    /// ```
    pub fn cached_count(&self) -> usize {
        self.cache.read().len()
    }

    /// Returns whether a result for the given argument is already cached.
    ///
    /// Never triggers a computation.
    pub fn is_cached(&self, argument: &A) -> bool {
        self.cache.read().contains_key(argument)
    }
}

impl<F, A, R> fmt::Debug for Memoized1<F, A, R>
where
    A: Eq + Hash,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Memoized1")
            .field("cached", &self.cache.read().len())
            .finish_non_exhaustive()
    }
}

/// A memoized binary function.
///
/// Wraps an `Fn(A, B) -> R`; the cache key is the argument pair `(A, B)`,
/// which hashes and compares structurally over both components. Obtained via
/// [`Memoize2::memoized`].
///
/// # Examples
///
/// ```rust
/// use fnwrap::memo::Memoize2;
///
/// let add = (|first: i32, second: i32| first + second).memoized();
///
/// assert_eq!(add.call(20, 22), 42);
/// assert_eq!(add.call(20, 22), 42); // cache hit on the pair
/// assert_eq!(add.cached_count(), 1);
/// ```
pub struct Memoized2<F, A, B, R> {
    function: F,
    cache: RwLock<CacheMap<(A, B), R>>,
}

impl<F, A, B, R> Memoized2<F, A, B, R>
where
    F: Fn(A, B) -> R,
    A: Eq + Hash + Clone,
    B: Eq + Hash + Clone,
    R: Clone,
{
    pub(crate) fn new(function: F) -> Self {
        Self {
            function,
            cache: RwLock::new(CacheMap::default()),
        }
    }

    /// Invokes the memoized function with the given argument pair.
    ///
    /// Equal pairs always map to the same cache entry, regardless of where
    /// the component values came from.
    pub fn call(&self, first: A, second: B) -> R {
        let key = (first, second);
        {
            let cache = self.cache.read();
            if let Some(value) = cache.get(&key) {
                return value.clone();
            }
        }

        let mut cache = self.cache.write();
        if let Some(value) = cache.get(&key) {
            return value.clone();
        }
        let value = (self.function)(key.0.clone(), key.1.clone());
        cache.insert(key, value.clone());
        value
    }

    /// Returns `self` unchanged; a `Memoized2` is already memoized.
    #[inline]
    #[must_use]
    pub fn memoized(self) -> Self {
        self
    }

    /// Consumes the wrapper and returns the underlying function, discarding
    /// the cache.
    #[inline]
    pub fn into_inner(self) -> F {
        self.function
    }
}

impl<F, A, B, R> Memoized2<F, A, B, R>
where
    A: Eq + Hash,
    B: Eq + Hash,
{
    /// Returns the number of argument pairs currently cached.
    pub fn cached_count(&self) -> usize {
        self.cache.read().len()
    }

    /// Returns whether a result for the given argument pair is already
    /// cached. Never triggers a computation.
    pub fn is_cached(&self, arguments: &(A, B)) -> bool {
        self.cache.read().contains_key(arguments)
    }
}

impl<F, A, B, R> fmt::Debug for Memoized2<F, A, B, R>
where
    A: Eq + Hash,
    B: Eq + Hash,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Memoized2")
            .field("cached", &self.cache.read().len())
            .finish_non_exhaustive()
    }
}

/// A memoized ternary function.
///
/// Wraps an `Fn(A, B, C) -> R`; the cache key is the argument triple
/// `(A, B, C)`. Obtained via [`Memoize3::memoized`].
pub struct Memoized3<F, A, B, C, R> {
    function: F,
    cache: RwLock<CacheMap<(A, B, C), R>>,
}

impl<F, A, B, C, R> Memoized3<F, A, B, C, R>
where
    F: Fn(A, B, C) -> R,
    A: Eq + Hash + Clone,
    B: Eq + Hash + Clone,
    C: Eq + Hash + Clone,
    R: Clone,
{
    pub(crate) fn new(function: F) -> Self {
        Self {
            function,
            cache: RwLock::new(CacheMap::default()),
        }
    }

    /// Invokes the memoized function with the given argument triple.
    pub fn call(&self, first: A, second: B, third: C) -> R {
        let key = (first, second, third);
        {
            let cache = self.cache.read();
            if let Some(value) = cache.get(&key) {
                return value.clone();
            }
        }

        let mut cache = self.cache.write();
        if let Some(value) = cache.get(&key) {
            return value.clone();
        }
        let value = (self.function)(key.0.clone(), key.1.clone(), key.2.clone());
        cache.insert(key, value.clone());
        value
    }

    /// Returns `self` unchanged; a `Memoized3` is already memoized.
    #[inline]
    #[must_use]
    pub fn memoized(self) -> Self {
        self
    }

    /// Consumes the wrapper and returns the underlying function, discarding
    /// the cache.
    #[inline]
    pub fn into_inner(self) -> F {
        self.function
    }
}

impl<F, A, B, C, R> Memoized3<F, A, B, C, R>
where
    A: Eq + Hash,
    B: Eq + Hash,
    C: Eq + Hash,
{
    /// Returns the number of argument triples currently cached.
    pub fn cached_count(&self) -> usize {
        self.cache.read().len()
    }
}

impl<F, A, B, C, R> fmt::Debug for Memoized3<F, A, B, C, R>
where
    A: Eq + Hash,
    B: Eq + Hash,
    C: Eq + Hash,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Memoized3")
            .field("cached", &self.cache.read().len())
            .finish_non_exhaustive()
    }
}

/// Extension trait providing `.memoized()` on unary functions.
///
/// Blanket-implemented for every `Fn(A) -> R`, so any closure or function
/// item of that shape can be memoized by method call.
///
/// # Examples
///
/// ```rust
/// use fnwrap::memo::Memoize1;
///
/// fn double(x: u64) -> u64 {
///     x * 2
/// }
///
/// let doubled = double.memoized();
/// assert_eq!(doubled.call(21), 42);
/// ```
pub trait Memoize1<A, R>: Fn(A) -> R + Sized {
    /// Wraps this function in a thread-safe memoization layer.
    ///
    /// Memoization is only correct if the function is pure — a function of
    /// its arguments with no observable side effects.
    fn memoized(self) -> Memoized1<Self, A, R>
    where
        A: Eq + Hash + Clone,
        R: Clone,
    {
        Memoized1::new(self)
    }
}

impl<F, A, R> Memoize1<A, R> for F where F: Fn(A) -> R {}

/// Extension trait providing `.memoized()` on binary functions.
pub trait Memoize2<A, B, R>: Fn(A, B) -> R + Sized {
    /// Wraps this function in a thread-safe memoization layer keyed by the
    /// argument pair.
    fn memoized(self) -> Memoized2<Self, A, B, R>
    where
        A: Eq + Hash + Clone,
        B: Eq + Hash + Clone,
        R: Clone,
    {
        Memoized2::new(self)
    }
}

impl<F, A, B, R> Memoize2<A, B, R> for F where F: Fn(A, B) -> R {}

/// Extension trait providing `.memoized()` on ternary functions.
pub trait Memoize3<A, B, C, R>: Fn(A, B, C) -> R + Sized {
    /// Wraps this function in a thread-safe memoization layer keyed by the
    /// argument triple.
    fn memoized(self) -> Memoized3<Self, A, B, C, R>
    where
        A: Eq + Hash + Clone,
        B: Eq + Hash + Clone,
        C: Eq + Hash + Clone,
        R: Clone,
    {
        Memoized3::new(self)
    }
}

impl<F, A, B, C, R> Memoize3<A, B, C, R> for F where F: Fn(A, B, C) -> R {}

static_assertions::assert_impl_all!(Memoized1<fn(i32) -> i32, i32, i32>: Send, Sync);
static_assertions::assert_impl_all!(Memoized2<fn(i32, i32) -> i32, i32, i32, i32>: Send, Sync);
static_assertions::assert_impl_all!(
    Memoized3<fn(i32, i32, i32) -> i32, i32, i32, i32, i32>: Send, Sync
);
