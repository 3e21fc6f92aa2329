//! Failure bridging for throwing function shapes.
//!
//! A *throwing* function declares its failure type in its signature:
//! `Fn(..) -> Result<R, E>`. This module bridges such functions into
//! siblings of the same arity whose declared failure is treated by exactly
//! one policy:
//!
//! | combinator | on declared failure |
//! |---|---|
//! | [`ThrowingFn1::transparent`] | re-raise the *same* failure value through the type-erased channel |
//! | [`ThrowingFn1::nest`] / [`ThrowingFn1::nest_with`] | wrap in a carrier that keeps the original as its source |
//! | [`ThrowingFn1::recover`] | ask a failure-indexed factory for a fallback of the same shape, re-invoke it with the original arguments |
//! | [`ThrowingFn1::fallback_to`] | re-invoke a fixed fallback with the original arguments |
//! | [`ThrowingFn1::or_return`] / [`ThrowingFn1::or_return_with`] | substitute a value |
//! | [`ThrowingBinOp::or_return_left`] / [`ThrowingBinOp::or_return_right`] | substitute an operand (binary operators) |
//! | [`ThrowingConsumer1::ignore`] / [`ThrowingConsumer1::ignore_all`] | suppress (side-effecting shapes) |
//!
//! # Failure categories
//!
//! Three categories of failure exist, and every combinator treats them the
//! same way:
//!
//! - **Fatal** — a panic. Always unwinds untouched; no combinator in this
//!   module ever catches, wraps, or recovers from a panic. This is the
//!   single most important invariant of the module and holds for every
//!   operation without exception.
//! - **Declared** — the typed `Err(E)` of the wrapped shape. The only
//!   category a combinator actively transforms.
//! - **Erased** — an `Err(`[`DynFailure`]`)`: still an ordinary,
//!   recoverable failure value, but no longer statically named in the
//!   signature.
//!
//! Per invocation the bridged shape runs to one of three outcomes —
//! success, fatal failure, declared failure — and only the last one has a
//! per-combinator transition (propagate-erased, wrap, recover, substitute,
//! or suppress).
//!
//! # Examples
//!
//! ```rust
//! use fnwrap::bridge::ThrowingFn1;
//!
//! fn parse(text: &str) -> Result<i32, std::num::ParseIntError> {
//!     text.parse()
//! }
//!
//! // Erase the declared failure type; the failure object itself survives.
//! let erased = parse.transparent();
//! let failure = erased("nope").unwrap_err();
//! assert!(failure.is::<std::num::ParseIntError>());
//!
//! // Or substitute a value instead.
//! let lenient = parse.or_return(0);
//! assert_eq!(lenient("nope"), 0);
//! ```

mod binary_op;
mod consumer;
mod nested;
mod throwing_fn;

pub use binary_op::ThrowingBinOp;
pub use consumer::{ThrowingConsumer1, ThrowingConsumer2};
pub use nested::{DynFailure, Nested};
pub use throwing_fn::{ThrowingFn1, ThrowingFn2, ThrowingFn3};
