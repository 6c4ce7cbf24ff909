//! `Either`: a right-biased two-channel value.
//!
//! `Either<L, R>` is either a `Left(L)` or a `Right(R)`. `Left` carries the
//! failure channel and `Right` the success channel: `map`, `ap`, `flat_map`
//! and `concat` are right-biased, and a `Left` passes through them
//! untouched.
//!
//! Failing computations enter the failure channel through [`IntoEither`],
//! [`Either::attempt`] and [`Either::try_fn`]: an `Err(e)` or a panic becomes
//! `Left(message)`, so the message is carried as data instead of unwinding.
//!
//! # Examples
//!
//! ```rust
//! use kleisli::control::Either;
//!
//! let failed = Either::attempt(|| -> i32 { panic!("boom") });
//! assert_eq!(failed, Either::Left("boom".to_string()));
//!
//! let described = Either::<String, i32>::Right(20)
//!     .map(|n| n + 1)
//!     .fold(|error| error, |n| format!("got {n}"));
//! assert_eq!(described, "got 21");
//! ```

use std::any::Any;
use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};

use super::maybe::Maybe;
use crate::typeclass::{
    Applicative, Bifunctor, Foldable, Functor, Monad, Semigroup, TypeConstructor,
};

/// A value on exactly one of two channels.
///
/// By convention `Left` is the failure or first alternative and `Right` the
/// success or second alternative.
///
/// # Examples
///
/// ```rust
/// use kleisli::control::Either;
///
/// let parsed: Either<String, i32> = Either::Right(7);
/// assert_eq!(parsed.map(|x| x * 6), Either::Right(42));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The left variant, conventionally representing failure.
    Left(L),
    /// The right variant, conventionally representing success.
    Right(R),
}

/// Conversion of a function's return value into the `Either` channel.
///
/// `Err(e)` becomes `Left(e.to_string())`, an absent value becomes
/// `Left(String::new())`, and an `Either<String, R>` is passed through
/// unchanged.
pub trait IntoEither<R> {
    /// Converts `self` into an `Either` carrying a message on the left.
    fn into_either(self) -> Either<String, R>;
}

impl<R, E: fmt::Display> IntoEither<R> for Result<R, E> {
    fn into_either(self) -> Either<String, R> {
        match self {
            Ok(value) => Either::Right(value),
            Err(error) => Either::Left(error.to_string()),
        }
    }
}

impl<R> IntoEither<R> for Either<String, R> {
    #[inline]
    fn into_either(self) -> Self {
        self
    }
}

impl<R> IntoEither<R> for Option<R> {
    fn into_either(self) -> Either<String, R> {
        Either::from_nullable(self)
    }
}

impl<R> IntoEither<R> for Maybe<R> {
    fn into_either(self) -> Either<String, R> {
        Either::from_maybe(self)
    }
}

/// Extracts the message of a captured panic payload.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "Unknown panic".to_string()
    }
}

/// Handlers for [`Either::cata`], named after the variants they handle.
#[derive(Debug, Clone, Copy)]
pub struct EitherCases<F, G> {
    /// Called with the payload of `Left`.
    pub left: F,
    /// Called with the payload of `Right`.
    pub right: G,
}

impl<L, R> Either<L, R> {
    /// Lifts a value into `Right`.
    #[inline]
    pub const fn of(value: R) -> Self {
        Self::Right(value)
    }

    /// `true` for `Left`.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// `true` for `Right`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Either;
    ///
    /// assert!(!Either::<i32, i32>::Right(1).swap().is_right());
    /// ```
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// The left payload, if any.
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// The right payload, if any.
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Borrows the right payload, if any.
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Applies `function` to the right value; a `Left` is returned unchanged.
    #[inline]
    pub fn map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Applies `function` to the left value; a `Right` is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Either;
    ///
    /// let failed: Either<i32, String> = Either::Left(404);
    /// assert_eq!(failed.map_left(|code| code + 96), Either::Left(500));
    /// ```
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies `left_function` to a `Left` or `right_function` to a `Right`.
    ///
    /// The result stays on the channel it came from.
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(left_function(value)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    /// Applies the wrapped function to `other`'s right value.
    ///
    /// A `Left` in `self` short-circuits and is propagated; otherwise the
    /// result is `other.map(function)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Either;
    ///
    /// let double: Either<String, fn(i32) -> i32> = Either::Right(|x| x * 2);
    /// assert_eq!(double.ap(Either::Right(4)), Either::Right(8));
    ///
    /// let failed: Either<String, fn(i32) -> i32> = Either::Left("no function".into());
    /// assert_eq!(failed.ap(Either::Right(4)), Either::Left("no function".into()));
    /// ```
    pub fn ap<B, C>(self, other: Either<L, B>) -> Either<L, C>
    where
        R: FnOnce(B) -> C,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(function) => other.map(function),
        }
    }

    /// Chains a computation returning another `Either`.
    #[inline]
    pub fn flat_map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        self.map(function).flatten()
    }

    /// Eliminates the `Either` with `left_function` or `right_function`.
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Dispatches to the handler named after the current variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::{Either, EitherCases};
    ///
    /// let parsed: Either<String, u16> = Either::Right(8080);
    /// let port = parsed.cata(EitherCases {
    ///     left: |_| 80,
    ///     right: |port| port,
    /// });
    /// assert_eq!(port, 8080);
    /// ```
    #[inline]
    pub fn cata<T, F, G>(self, cases: EitherCases<F, G>) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        self.fold(cases.left, cases.right)
    }

    /// Moves the payload to the opposite channel.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    /// Returns the right value, or `default` for a `Left`.
    #[inline]
    pub fn or_get(self, default: R) -> R {
        match self {
            Self::Left(_) => default,
            Self::Right(value) => value,
        }
    }

    /// Returns `self` for a `Right`, or `Right(default)` for a `Left`.
    #[inline]
    #[must_use]
    pub fn or_else(self, default: R) -> Self {
        match self {
            Self::Left(_) => Self::Right(default),
            Self::Right(_) => self,
        }
    }

    /// Combines two `Either`s, biased to the right.
    ///
    /// The first `Left` wins. Two `Right`s combine their payloads with the
    /// payload's `Semigroup`.
    #[must_use]
    pub fn concat(self, other: Self) -> Self
    where
        R: Semigroup,
    {
        match (self, other) {
            (Self::Right(left), Self::Right(right)) => Self::Right(left.combine(right)),
            (Self::Left(error), _) | (_, Self::Left(error)) => Self::Left(error),
        }
    }

    /// Converts a `Maybe`: `Some(r)` becomes `Right(r)`, `None` becomes
    /// `Left(L::default())`.
    pub fn from_maybe(maybe: Maybe<R>) -> Self
    where
        L: Default,
    {
        maybe.fold(|| Self::Left(L::default()), Self::Right)
    }

    /// Converts a nullable value: `None` becomes `Left(L::default())`.
    pub fn from_nullable(value: Option<R>) -> Self
    where
        L: Default,
    {
        value.map_or_else(|| Self::Left(L::default()), Self::Right)
    }

    /// Converts a `Result`: `Ok(r)` becomes `Right(r)`, `Err(e)` becomes
    /// `Left(e)`.
    #[inline]
    pub fn from_result(result: Result<R, L>) -> Self {
        result.into()
    }

    /// Converts into a `Result`: `Right(r)` becomes `Ok(r)`, `Left(l)`
    /// becomes `Err(l)`.
    #[inline]
    pub fn into_result(self) -> Result<R, L> {
        self.into()
    }

    /// Returns `true` if `value` is an `Either<L, R>`.
    pub fn is(value: &dyn Any) -> bool
    where
        L: 'static,
        R: 'static,
    {
        value.is::<Self>()
    }
}

impl<L, R> Either<L, Either<L, R>> {
    /// Collapses one level of nesting; an outer `Left` is returned as is.
    #[inline]
    pub fn flatten(self) -> Either<L, R> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(inner) => inner,
        }
    }
}

impl<R> Either<String, R> {
    /// Runs `function`, capturing a panic as `Left(message)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Either;
    ///
    /// assert_eq!(Either::attempt(|| 2 + 2), Either::Right(4));
    /// ```
    pub fn attempt<F>(function: F) -> Self
    where
        F: FnOnce() -> R,
    {
        match catch_unwind(AssertUnwindSafe(function)) {
            Ok(value) => Self::Right(value),
            Err(payload) => Self::Left(panic_message(payload.as_ref())),
        }
    }

    /// Wraps `function` so that each call returns an `Either`.
    ///
    /// A panic inside `function` becomes `Left(message)`; the return value
    /// is converted through [`IntoEither`], so an `Err` becomes
    /// `Left(message)` and a returned `Either` is passed through.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Either;
    ///
    /// let parse = Either::try_fn(|text: String| text.parse::<i32>());
    /// assert_eq!(parse("12".to_string()), Either::Right(12));
    /// assert!(parse("twelve".to_string()).is_left());
    /// ```
    pub fn try_fn<X, T, F>(function: F) -> impl Fn(X) -> Self
    where
        F: Fn(X) -> T,
        T: IntoEither<R>,
    {
        move |argument| match catch_unwind(AssertUnwindSafe(|| function(argument))) {
            Ok(value) => value.into_either(),
            Err(payload) => Self::Left(panic_message(payload.as_ref())),
        }
    }
}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => write!(formatter, "Left({value})"),
            Self::Right(value) => write!(formatter, "Right({value})"),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}

impl<L, R> TypeConstructor for Either<L, R> {
    type Inner = R;
    type WithType<B> = Either<L, B>;
}

impl<L: Clone, R> Functor for Either<L, R> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> B,
    {
        self.map(function)
    }

    fn fmap_ref<B, F>(&self, function: F) -> Either<L, B>
    where
        F: FnOnce(&R) -> B,
    {
        match self {
            Self::Left(value) => Either::Left(value.clone()),
            Self::Right(value) => Either::Right(function(value)),
        }
    }
}

impl<L: Clone, R> Applicative for Either<L, R> {
    #[inline]
    fn pure<B>(value: B) -> Either<L, B> {
        Either::Right(value)
    }

    fn map2<B, C, F>(self, other: Either<L, B>, function: F) -> Either<L, C>
    where
        F: FnOnce(R, B) -> C,
    {
        match (self, other) {
            (Self::Right(a), Either::Right(b)) => Either::Right(function(a, b)),
            (Self::Left(error), _) | (_, Either::Left(error)) => Either::Left(error),
        }
    }

    fn map3<B, C, D, F>(
        self,
        second: Either<L, B>,
        third: Either<L, C>,
        function: F,
    ) -> Either<L, D>
    where
        F: FnOnce(R, B, C) -> D,
    {
        match (self, second, third) {
            (Self::Right(a), Either::Right(b), Either::Right(c)) => {
                Either::Right(function(a, b, c))
            }
            (Self::Left(error), _, _) | (_, Either::Left(error), _) | (_, _, Either::Left(error)) => {
                Either::Left(error)
            }
        }
    }

    fn map4<B, C, D, E, F>(
        self,
        second: Either<L, B>,
        third: Either<L, C>,
        fourth: Either<L, D>,
        function: F,
    ) -> Either<L, E>
    where
        F: FnOnce(R, B, C, D) -> E,
    {
        self.map3(second, third, |a, b, c| (a, b, c))
            .map2(fourth, |(a, b, c), d| function(a, b, c, d))
    }

    fn map5<B, C, D, E, G, F>(
        self,
        second: Either<L, B>,
        third: Either<L, C>,
        fourth: Either<L, D>,
        fifth: Either<L, E>,
        function: F,
    ) -> Either<L, G>
    where
        F: FnOnce(R, B, C, D, E) -> G,
    {
        self.map4(second, third, fourth, |a, b, c, d| (a, b, c, d))
            .map2(fifth, |(a, b, c, d), e| function(a, b, c, d, e))
    }

    #[inline]
    fn apply<B, Output>(self, other: Either<L, B>) -> Either<L, Output>
    where
        R: FnOnce(B) -> Output,
    {
        self.ap(other)
    }
}

impl<L: Clone, R> Monad for Either<L, R> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> Either<L, B>,
    {
        Self::flat_map(self, function)
    }
}

impl<L, R> Foldable for Either<L, R> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, R) -> B,
    {
        match self {
            Self::Left(_) => init,
            Self::Right(value) => function(init, value),
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(R, B) -> B,
    {
        match self {
            Self::Left(_) => init,
            Self::Right(value) => function(value, init),
        }
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_left()
    }

    #[inline]
    fn length(&self) -> usize {
        usize::from(self.is_right())
    }
}

impl<L, R: Semigroup> Semigroup for Either<L, R> {
    fn combine(self, other: Self) -> Self {
        self.concat(other)
    }
}

impl<L, R> Bifunctor<L, R> for Either<L, R> {
    type Target<C, D> = Either<C, D>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Either<C, D>
    where
        F: FnOnce(L) -> C,
        G: FnOnce(R) -> D,
    {
        Self::bimap(self, first_function, second_function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn either_attempt_captures_panic_message() {
        let result = Either::attempt(|| -> i32 { panic!("boom") });
        assert_eq!(result, Either::Left("boom".to_string()));
    }

    #[rstest]
    fn either_attempt_captures_formatted_panic() {
        let code = 7;
        let result = Either::attempt(|| -> i32 { panic!("failed with {code}") });
        assert_eq!(result, Either::Left("failed with 7".to_string()));
    }

    #[rstest]
    fn either_try_fn_passes_either_through() {
        let checked = Either::try_fn(|n: i32| {
            if n > 0 { Either::Right(n) } else { Either::Left(format!("{n} is not positive")) }
        });
        assert_eq!(checked(3), Either::Right(3));
        assert_eq!(checked(-1), Either::Left("-1 is not positive".to_string()));
    }

    #[rstest]
    fn either_try_fn_absent_value_is_left() {
        let first = Either::try_fn(|items: Vec<i32>| items.first().copied());
        assert_eq!(first(vec![]), Either::Left(String::new()));
        assert_eq!(first(vec![5]), Either::Right(5));
    }

    #[rstest]
    fn either_left_map_is_untouched() {
        let left: Either<&str, i32> = Either::Left("e");
        let mapped: Either<&str, i32> = left.map(|_: i32| -> i32 { unreachable!("mapped over Left") });
        assert_eq!(mapped, Either::Left("e"));
    }

    #[rstest]
    fn either_bimap_does_not_cross_wrap() {
        let left: Either<i32, i32> = Either::Left(1);
        assert_eq!(left.bimap(|x| x + 1, |x| x * 10), Either::Left(2));
    }

    #[rstest]
    #[case(Either::Right(2), 2)]
    #[case(Either::Left("e"), 0)]
    fn either_or_get(#[case] either: Either<&str, i32>, #[case] expected: i32) {
        assert_eq!(either.or_get(0), expected);
    }

    #[rstest]
    fn either_concat_first_left_wins() {
        let first: Either<&str, String> = Either::Left("first");
        let second: Either<&str, String> = Either::Left("second");
        assert_eq!(first.concat(second), Either::Left("first"));
        let joined = Either::<&str, String>::Right("a".into()).concat(Either::Right("b".into()));
        assert_eq!(joined, Either::Right("ab".to_string()));
    }

    #[rstest]
    fn either_flatten_keeps_outer_left() {
        let nested: Either<&str, Either<&str, i32>> = Either::Left("outer");
        assert_eq!(nested.flatten(), Either::Left("outer"));
    }

    #[rstest]
    fn either_from_nullable_uses_default_left() {
        assert_eq!(Either::<String, i32>::from_nullable(None), Either::Left(String::new()));
    }

    #[rstest]
    fn either_result_conversion_roundtrip() {
        let ok: Result<i32, String> = Ok(42);
        assert_eq!(Either::from_result(ok).into_result(), Ok(42));
    }

    #[rstest]
    fn either_display() {
        assert_eq!(Either::<i32, i32>::Left(1).to_string(), "Left(1)");
        assert_eq!(Either::<i32, i32>::Right(2).to_string(), "Right(2)");
    }
}
