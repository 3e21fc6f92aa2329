//! Bridging conveniences specific to side-effecting (consumer) shapes.
//!
//! A consumer produces no value; its only outcomes are success, a declared
//! failure, or a panic. For consumers a failure can therefore be suppressed
//! outright: there is no result a caller could be waiting for. Suppression
//! never extends to panics, which unwind untouched like everywhere else in
//! this crate.

/// Bridging combinators for unary throwing consumers.
///
/// Blanket-implemented for every `Fn(A) -> Result<(), E>`.
///
/// # Examples
///
/// ```rust
/// use fnwrap::bridge::ThrowingConsumer1;
///
/// let strict = |text: &str| -> Result<(), String> {
///     if text.is_empty() {
///         return Err("empty input".to_string());
///     }
///     Ok(())
/// };
///
/// let silent = strict.ignore();
/// silent("some input");
/// silent(""); // the declared failure is suppressed, nothing happens
/// ```
pub trait ThrowingConsumer1<A, E>: Fn(A) -> Result<(), E> + Sized {
    /// Suppresses the declared failure of this consumer.
    ///
    /// On success or on a declared failure the returned consumer simply
    /// returns; a panic unwinds untouched.
    fn ignore(self) -> impl Fn(A) {
        move |argument| {
            let _ = self(argument);
        }
    }

    /// Suppresses every failure flowing through this consumer's channel.
    ///
    /// Intended for shapes whose failure type has already been erased (a
    /// `DynFailure` channel carrying arbitrary failures): everything
    /// non-fatal is suppressed. On a shape with a single declared failure
    /// type this coincides with [`ThrowingConsumer1::ignore`]; the two
    /// names exist so the call site keeps the intent visible.
    fn ignore_all(self) -> impl Fn(A) {
        self.ignore()
    }
}

impl<F, A, E> ThrowingConsumer1<A, E> for F where F: Fn(A) -> Result<(), E> {}

/// Bridging combinators for binary throwing consumers.
///
/// Blanket-implemented for every `Fn(A, B) -> Result<(), E>`.
pub trait ThrowingConsumer2<A, B, E>: Fn(A, B) -> Result<(), E> + Sized {
    /// Suppresses the declared failure of this consumer.
    fn ignore(self) -> impl Fn(A, B) {
        move |first, second| {
            let _ = self(first, second);
        }
    }

    /// Suppresses every failure flowing through this consumer's channel.
    /// See [`ThrowingConsumer1::ignore_all`].
    fn ignore_all(self) -> impl Fn(A, B) {
        self.ignore()
    }
}

impl<F, A, B, E> ThrowingConsumer2<A, B, E> for F where F: Fn(A, B) -> Result<(), E> {}
