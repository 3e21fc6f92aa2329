//! Bridging combinators for throwing function shapes.
//!
//! A throwing function is an `Fn(..) -> Result<R, E>` whose `E` is the
//! statically-declared failure type. Each combinator consumes the function
//! and returns a closure of the same arity with one specific treatment of
//! the declared failure — erase it, wrap it, recover from it, or substitute
//! a value for it. Panics are fatal and unwind through every bridged
//! closure untouched; no combinator in this module intercepts them.

use std::error::Error;

use super::nested::{DynFailure, Nested};

/// Bridging combinators for unary throwing functions.
///
/// Blanket-implemented for every `Fn(A) -> Result<R, E>`, so the methods
/// attach to closures and function items alike.
///
/// # Examples
///
/// ```rust
/// use fnwrap::bridge::ThrowingFn1;
///
/// fn parse(text: &str) -> Result<i32, std::num::ParseIntError> {
///     text.parse()
/// }
///
/// let lenient = parse.or_return(-1);
/// assert_eq!(lenient("42"), 42);
/// assert_eq!(lenient("nope"), -1);
/// ```
pub trait ThrowingFn1<A, R, E>: Fn(A) -> Result<R, E> + Sized {
    /// Erases the declared failure type while re-raising the same failure
    /// value.
    ///
    /// On success the value passes through; on failure the original failure
    /// object moves into the erased channel unchanged — same type
    /// (recoverable by downcast), same message, same source chain. Only the
    /// static knowledge that this shape fails with `E` is lost.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnwrap::bridge::ThrowingFn1;
    /// use std::num::ParseIntError;
    ///
    /// let parse = |text: &str| text.parse::<i32>();
    /// let erased = parse.transparent();
    ///
    /// let failure = erased("nope").unwrap_err();
    /// assert!(failure.is::<ParseIntError>());
    /// ```
    fn transparent(self) -> impl Fn(A) -> Result<R, DynFailure>
    where
        E: Error + Send + Sync + 'static,
    {
        move |argument| -> Result<R, DynFailure> { self(argument).map_err(Into::into) }
    }

    /// Wraps a declared failure in the default [`Nested`] carrier.
    ///
    /// The original failure is never discarded: it stays reachable through
    /// the carrier's [`Error::source`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnwrap::bridge::ThrowingFn1;
    /// use std::error::Error;
    ///
    /// let parse = |text: &str| text.parse::<i32>();
    /// let nested = parse.nest();
    ///
    /// let failure = nested("nope").unwrap_err();
    /// assert!(failure.source().is_some());
    /// ```
    fn nest(self) -> impl Fn(A) -> Result<R, Nested>
    where
        E: Error + Send + Sync + 'static,
    {
        move |argument| self(argument).map_err(|failure| Nested::new(failure))
    }

    /// Wraps a declared failure in a carrier built by `mapper`.
    ///
    /// The mapper owns the original failure and is expected to retain it as
    /// the carrier's source; the default carrier form is [`ThrowingFn1::nest`].
    fn nest_with<C, M>(self, mapper: M) -> impl Fn(A) -> Result<R, C>
    where
        M: Fn(E) -> C,
    {
        move |argument| self(argument).map_err(&mapper)
    }

    /// Recovers from a declared failure through a failure-indexed fallback.
    ///
    /// On failure, `recovery` receives the failure and returns a fallback
    /// callable of the identical shape, which is then invoked with a clone
    /// of the *original argument*. The fallback's result — which may itself
    /// be a failure — is returned as-is.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnwrap::bridge::ThrowingFn1;
    ///
    /// let parse = |text: String| text.parse::<i32>();
    /// let recovered = parse.recover(|_failure| {
    ///     |text: String| Ok::<i32, String>(text.len() as i32)
    /// });
    ///
    /// assert_eq!(recovered("42".to_string()), Ok(42));
    /// assert_eq!(recovered("nope".to_string()), Ok(4));
    /// ```
    fn recover<E2, FB, RY>(self, recovery: RY) -> impl Fn(A) -> Result<R, E2>
    where
        A: Clone,
        RY: Fn(E) -> FB,
        FB: Fn(A) -> Result<R, E2>,
    {
        move |argument: A| match self(argument.clone()) {
            Ok(value) => Ok(value),
            Err(failure) => {
                let fallback = recovery(failure);
                fallback(argument)
            }
        }
    }

    /// Delegates to a fixed fallback callable on a declared failure.
    ///
    /// Same contract as [`ThrowingFn1::recover`], with the fallback fixed up
    /// front instead of chosen per failure. The fallback is invoked with a
    /// clone of the original argument.
    fn fallback_to<E2, FB>(self, fallback: FB) -> impl Fn(A) -> Result<R, E2>
    where
        A: Clone,
        FB: Fn(A) -> Result<R, E2>,
    {
        move |argument: A| match self(argument.clone()) {
            Ok(value) => Ok(value),
            Err(_) => fallback(argument),
        }
    }

    /// Substitutes a fixed value for a declared failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnwrap::bridge::ThrowingFn1;
    ///
    /// let parse = |text: &str| text.parse::<i32>();
    /// let lenient = parse.or_return(-1);
    ///
    /// assert_eq!(lenient("5"), 5);
    /// assert_eq!(lenient("-"), -1);
    /// ```
    fn or_return(self, value: R) -> impl Fn(A) -> R
    where
        R: Clone,
    {
        move |argument| self(argument).unwrap_or_else(|_| value.clone())
    }

    /// Substitutes a freshly supplied value for a declared failure.
    fn or_return_with<S>(self, supplier: S) -> impl Fn(A) -> R
    where
        S: Fn() -> R,
    {
        move |argument| self(argument).unwrap_or_else(|_| supplier())
    }
}

impl<F, A, R, E> ThrowingFn1<A, R, E> for F where F: Fn(A) -> Result<R, E> {}

/// Bridging combinators for binary throwing functions.
///
/// Blanket-implemented for every `Fn(A, B) -> Result<R, E>`. The operations
/// mirror [`ThrowingFn1`]; recovery forms re-invoke their fallback with
/// clones of both original arguments.
pub trait ThrowingFn2<A, B, R, E>: Fn(A, B) -> Result<R, E> + Sized {
    /// Erases the declared failure type while re-raising the same failure
    /// value. See [`ThrowingFn1::transparent`].
    fn transparent(self) -> impl Fn(A, B) -> Result<R, DynFailure>
    where
        E: Error + Send + Sync + 'static,
    {
        move |first, second| -> Result<R, DynFailure> { self(first, second).map_err(Into::into) }
    }

    /// Wraps a declared failure in the default [`Nested`] carrier.
    fn nest(self) -> impl Fn(A, B) -> Result<R, Nested>
    where
        E: Error + Send + Sync + 'static,
    {
        move |first, second| self(first, second).map_err(|failure| Nested::new(failure))
    }

    /// Wraps a declared failure in a carrier built by `mapper`.
    fn nest_with<C, M>(self, mapper: M) -> impl Fn(A, B) -> Result<R, C>
    where
        M: Fn(E) -> C,
    {
        move |first, second| self(first, second).map_err(&mapper)
    }

    /// Recovers from a declared failure through a failure-indexed fallback,
    /// invoked with clones of both original arguments.
    fn recover<E2, FB, RY>(self, recovery: RY) -> impl Fn(A, B) -> Result<R, E2>
    where
        A: Clone,
        B: Clone,
        RY: Fn(E) -> FB,
        FB: Fn(A, B) -> Result<R, E2>,
    {
        move |first: A, second: B| match self(first.clone(), second.clone()) {
            Ok(value) => Ok(value),
            Err(failure) => {
                let fallback = recovery(failure);
                fallback(first, second)
            }
        }
    }

    /// Delegates to a fixed fallback callable on a declared failure,
    /// invoked with clones of both original arguments.
    fn fallback_to<E2, FB>(self, fallback: FB) -> impl Fn(A, B) -> Result<R, E2>
    where
        A: Clone,
        B: Clone,
        FB: Fn(A, B) -> Result<R, E2>,
    {
        move |first: A, second: B| match self(first.clone(), second.clone()) {
            Ok(value) => Ok(value),
            Err(_) => fallback(first, second),
        }
    }

    /// Substitutes a fixed value for a declared failure.
    fn or_return(self, value: R) -> impl Fn(A, B) -> R
    where
        R: Clone,
    {
        move |first, second| self(first, second).unwrap_or_else(|_| value.clone())
    }

    /// Substitutes a freshly supplied value for a declared failure.
    fn or_return_with<S>(self, supplier: S) -> impl Fn(A, B) -> R
    where
        S: Fn() -> R,
    {
        move |first, second| self(first, second).unwrap_or_else(|_| supplier())
    }
}

impl<F, A, B, R, E> ThrowingFn2<A, B, R, E> for F where F: Fn(A, B) -> Result<R, E> {}

/// Bridging combinators for ternary throwing functions.
///
/// Blanket-implemented for every `Fn(A, B, C) -> Result<R, E>`.
pub trait ThrowingFn3<A, B, C, R, E>: Fn(A, B, C) -> Result<R, E> + Sized {
    /// Erases the declared failure type while re-raising the same failure
    /// value. See [`ThrowingFn1::transparent`].
    fn transparent(self) -> impl Fn(A, B, C) -> Result<R, DynFailure>
    where
        E: Error + Send + Sync + 'static,
    {
        move |first, second, third| -> Result<R, DynFailure> {
            self(first, second, third).map_err(Into::into)
        }
    }

    /// Wraps a declared failure in the default [`Nested`] carrier.
    fn nest(self) -> impl Fn(A, B, C) -> Result<R, Nested>
    where
        E: Error + Send + Sync + 'static,
    {
        move |first, second, third| {
            self(first, second, third).map_err(|failure| Nested::new(failure))
        }
    }

    /// Wraps a declared failure in a carrier built by `mapper`.
    fn nest_with<C2, M>(self, mapper: M) -> impl Fn(A, B, C) -> Result<R, C2>
    where
        M: Fn(E) -> C2,
    {
        move |first, second, third| self(first, second, third).map_err(&mapper)
    }

    /// Recovers from a declared failure through a failure-indexed fallback,
    /// invoked with clones of all three original arguments.
    fn recover<E2, FB, RY>(self, recovery: RY) -> impl Fn(A, B, C) -> Result<R, E2>
    where
        A: Clone,
        B: Clone,
        C: Clone,
        RY: Fn(E) -> FB,
        FB: Fn(A, B, C) -> Result<R, E2>,
    {
        move |first: A, second: B, third: C| {
            match self(first.clone(), second.clone(), third.clone()) {
                Ok(value) => Ok(value),
                Err(failure) => {
                    let fallback = recovery(failure);
                    fallback(first, second, third)
                }
            }
        }
    }

    /// Delegates to a fixed fallback callable on a declared failure,
    /// invoked with clones of all three original arguments.
    fn fallback_to<E2, FB>(self, fallback: FB) -> impl Fn(A, B, C) -> Result<R, E2>
    where
        A: Clone,
        B: Clone,
        C: Clone,
        FB: Fn(A, B, C) -> Result<R, E2>,
    {
        move |first: A, second: B, third: C| {
            match self(first.clone(), second.clone(), third.clone()) {
                Ok(value) => Ok(value),
                Err(_) => fallback(first, second, third),
            }
        }
    }

    /// Substitutes a fixed value for a declared failure.
    fn or_return(self, value: R) -> impl Fn(A, B, C) -> R
    where
        R: Clone,
    {
        move |first, second, third| self(first, second, third).unwrap_or_else(|_| value.clone())
    }

    /// Substitutes a freshly supplied value for a declared failure.
    fn or_return_with<S>(self, supplier: S) -> impl Fn(A, B, C) -> R
    where
        S: Fn() -> R,
    {
        move |first, second, third| self(first, second, third).unwrap_or_else(|_| supplier())
    }
}

impl<F, A, B, C, R, E> ThrowingFn3<A, B, C, R, E> for F where F: Fn(A, B, C) -> Result<R, E> {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::fmt;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct ParseFailure(&'static str);

    impl fmt::Display for ParseFailure {
        fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "{}", self.0)
        }
    }

    impl Error for ParseFailure {}

    fn checked_sqrt(value: i32) -> Result<i32, ParseFailure> {
        if value < 0 {
            Err(ParseFailure("bad"))
        } else {
            Ok(value * value)
        }
    }

    #[rstest]
    fn transparent_passes_success_through() {
        let erased = checked_sqrt.transparent();
        assert_eq!(erased(5).unwrap(), 25);
    }

    #[rstest]
    fn transparent_preserves_failure_identity() {
        let erased = checked_sqrt.transparent();
        let failure = erased(-5).unwrap_err();
        let original = failure
            .downcast_ref::<ParseFailure>()
            .expect("same failure object behind the erased channel");
        assert_eq!(original, &ParseFailure("bad"));
        assert_eq!(failure.to_string(), "bad");
    }

    #[rstest]
    fn nest_wraps_with_source() {
        let nested = checked_sqrt.nest();
        let carrier = nested(-1).unwrap_err();
        let source = carrier.source().expect("cause retained");
        assert_eq!(source.downcast_ref::<ParseFailure>(), Some(&ParseFailure("bad")));
    }

    #[rstest]
    fn nest_with_builds_custom_carrier() {
        let wrapped = checked_sqrt.nest_with(|failure| format!("wrapped: {failure}"));
        assert_eq!(wrapped(-1), Err("wrapped: bad".to_string()));
        assert_eq!(wrapped(3), Ok(9));
    }

    #[rstest]
    fn recover_invokes_fallback_with_original_argument() {
        let recovered = checked_sqrt.recover(|_failure| {
            |value: i32| Ok::<i32, ParseFailure>(-(value * value))
        });
        assert_eq!(recovered(4), Ok(16));
        assert_eq!(recovered(-4), Ok(-16));
    }

    #[rstest]
    fn fallback_may_itself_fail() {
        let recovered = checked_sqrt
            .recover(|failure| move |_value: i32| Err::<i32, ParseFailure>(failure.clone()));
        assert_eq!(recovered(-3), Err(ParseFailure("bad")));
    }

    #[rstest]
    fn fallback_to_uses_fixed_fallback() {
        let bridged = checked_sqrt.fallback_to(|value: i32| Ok::<i32, ParseFailure>(value.abs()));
        assert_eq!(bridged(6), Ok(36));
        assert_eq!(bridged(-6), Ok(6));
    }

    #[rstest]
    fn or_return_substitutes_on_failure_only() {
        let lenient = checked_sqrt.or_return(-1);
        assert_eq!(lenient(-5), -1);
        assert_eq!(lenient(5), 25);
    }

    #[rstest]
    fn or_return_with_calls_supplier_on_failure() {
        let lenient = checked_sqrt.or_return_with(|| 0);
        assert_eq!(lenient(-5), 0);
        assert_eq!(lenient(2), 4);
    }

    #[rstest]
    fn binary_recover_receives_both_original_arguments() {
        let checked_div = |numerator: i32, denominator: i32| {
            if denominator == 0 {
                Err(ParseFailure("bad"))
            } else {
                Ok(numerator / denominator)
            }
        };
        let recovered = checked_div.recover(|_failure| {
            |numerator: i32, denominator: i32| {
                Ok::<i32, ParseFailure>(numerator + denominator)
            }
        });
        assert_eq!(recovered(10, 2), Ok(5));
        assert_eq!(recovered(10, 0), Ok(10));
    }

    #[rstest]
    fn ternary_or_return_covers_all_arguments() {
        let checked = |first: i32, second: i32, third: i32| {
            if third == 0 {
                Err(ParseFailure("bad"))
            } else {
                Ok(first + second + third)
            }
        };
        let lenient = checked.or_return(0);
        assert_eq!(lenient(1, 2, 3), 6);
        assert_eq!(lenient(1, 2, 0), 0);
    }
}
