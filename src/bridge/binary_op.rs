//! Bridging conveniences specific to binary-operator shapes.

/// Bridging combinators for throwing binary operators.
///
/// A binary operator takes two operands of one type and produces a result of
/// that same type, which makes the operands themselves valid substitute
/// results. Blanket-implemented for every `Fn(A, A) -> Result<A, E>`; the
/// general binary combinators ([`ThrowingFn2`](super::ThrowingFn2)) remain
/// available on the same values.
///
/// # Examples
///
/// ```rust
/// use fnwrap::bridge::ThrowingBinOp;
///
/// let checked_div = |numerator: i32, denominator: i32| {
///     numerator.checked_div(denominator).ok_or("division by zero")
/// };
///
/// let keep_numerator = checked_div.or_return_left();
/// assert_eq!(keep_numerator(10, 2), 5);
/// assert_eq!(keep_numerator(10, 0), 10);
/// ```
pub trait ThrowingBinOp<A, E>: Fn(A, A) -> Result<A, E> + Sized {
    /// Substitutes the first operand for a declared failure.
    fn or_return_left(self) -> impl Fn(A, A) -> A
    where
        A: Clone,
    {
        move |left: A, right: A| self(left.clone(), right).unwrap_or(left)
    }

    /// Substitutes the second operand for a declared failure.
    fn or_return_right(self) -> impl Fn(A, A) -> A
    where
        A: Clone,
    {
        move |left: A, right: A| self(left, right.clone()).unwrap_or(right)
    }
}

impl<F, A, E> ThrowingBinOp<A, E> for F where F: Fn(A, A) -> Result<A, E> {}
