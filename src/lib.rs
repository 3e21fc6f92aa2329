//! # fnwrap
//!
//! Function adapters for Rust: thread-safe result memoization and
//! checked-failure bridging for plain function values.
//!
//! ## Overview
//!
//! The crate provides two independent families of combinators that attach to
//! ordinary `Fn` values through extension traits:
//!
//! - **Memoization** (`memo`): wrap a pure function so that its result is
//!   computed at most once per distinct argument key and served from a
//!   thread-safe cache afterwards.
//! - **Failure bridging** (`bridge`): wrap a fallible function
//!   (`Fn(..) -> Result<T, E>`) into a sibling whose declared failure type is
//!   erased, wrapped, recovered from, substituted, or suppressed — while
//!   panics always unwind untouched.
//!
//! ## Feature Flags
//!
//! - `memo`: memoization wrappers (pulls in `parking_lot`)
//! - `bridge`: failure-bridging combinators
//! - `fxhash` / `ahash`: faster hashers for the memoization cache
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use fnwrap::prelude::*;
//!
//! let square = (|x: i32| x * x).memoized();
//! assert_eq!(square.call(3), 9);
//! assert_eq!(square.call(3), 9); // served from the cache
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the wrapper types and the extension traits that provide the
/// `.memoized()` / `.transparent()` / `.or_return(..)` method families.
///
/// # Usage
///
/// ```rust
/// use fnwrap::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "memo")]
    pub use crate::memo::*;

    #[cfg(feature = "bridge")]
    pub use crate::bridge::*;
}

#[cfg(feature = "memo")]
pub mod memo;

#[cfg(feature = "bridge")]
pub mod bridge;
