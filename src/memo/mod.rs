//! Result memoization for function values.
//!
//! This module turns any pure function into a thread-safe caching wrapper:
//! the wrapped function runs at most once per distinct argument key, and
//! every later call with an equal key is served from the cache.
//!
//! Two wrapper families are provided:
//!
//! - [`Memoized1`], [`Memoized2`], [`Memoized3`] for plain functions
//!   (`Fn(..) -> R`), obtained through the [`Memoize1`]/[`Memoize2`]/
//!   [`Memoize3`] extension traits as `function.memoized()`.
//! - [`TryMemoized1`], [`TryMemoized2`], [`TryMemoized3`] for fallible
//!   functions (`Fn(..) -> Result<R, E>`), obtained as
//!   `function.try_memoized()`. Only `Ok` results enter the cache; an `Err`
//!   is returned uncached, so the next call with the same key re-attempts
//!   the computation.
//!
//! Memoization is only correct for pure functions — this is a caller
//! contract, not something the wrapper can enforce. Calling `.memoized()`
//! on a fallible function is possible (the whole `Result` is then cached,
//! `Err` included); use `.try_memoized()` when failures must stay uncached.
//!
//! # Keys and retention
//!
//! For arity 1 the argument itself is the cache key; for arity 2 and 3 the
//! key is the argument tuple, which hashes and compares structurally over
//! all components. Entries are never evicted: unless the wrapper itself is
//! discarded, it retains every computed mapping forever. Wrap functions
//! whose key space is unbounded with care.
//!
//! # Concurrency
//!
//! Wrappers are invoked through `&self` and are safe to share across
//! threads. Already-cached keys are served under a read lock with no writer
//! involvement; cache population is serialized through the wrapper's write
//! lock, which is held across the re-check, the computation, and the store,
//! so each key is computed at most once even when callers race. Population
//! of *different* keys is serialized too — one coarse lock per wrapper in
//! exchange for an obviously-correct at-most-once invariant.
//!
//! # Examples
//!
//! ```rust
//! use fnwrap::memo::Memoize1;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//!
//! static CALLS: AtomicUsize = AtomicUsize::new(0);
//!
//! let square = (|x: i32| {
//!     CALLS.fetch_add(1, Ordering::SeqCst);
//!     x * x
//! })
//! .memoized();
//!
//! assert_eq!(square.call(3), 9);
//! assert_eq!(square.call(3), 9);
//! assert_eq!(CALLS.load(Ordering::SeqCst), 1);
//!
//! assert_eq!(square.call(4), 16);
//! assert_eq!(CALLS.load(Ordering::SeqCst), 2);
//! ```

mod memoized;
mod try_memoized;

pub use memoized::{Memoize1, Memoize2, Memoize3, Memoized1, Memoized2, Memoized3};
pub use try_memoized::{
    TryMemoize1, TryMemoize2, TryMemoize3, TryMemoized1, TryMemoized2, TryMemoized3,
};

/// Hasher used by the memoization caches.
///
/// Defaults to the standard library's `RandomState`; the `ahash` and
/// `fxhash` feature flags swap in the corresponding fast hashers
/// (`ahash` wins when both are enabled).
#[cfg(feature = "ahash")]
pub(crate) type CacheHasher = ahash::RandomState;

#[cfg(all(feature = "fxhash", not(feature = "ahash")))]
pub(crate) type CacheHasher = rustc_hash::FxBuildHasher;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub(crate) type CacheHasher = std::collections::hash_map::RandomState;

pub(crate) type CacheMap<K, V> = std::collections::HashMap<K, V, CacheHasher>;
