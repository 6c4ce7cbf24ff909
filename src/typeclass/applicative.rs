//! `Applicative`: lifting plain values and joining independent contexts.
//!
//! `Applicative` extends [`Functor`] with the ability to lift a plain value
//! into the context (`pure`) and to combine independent contexts (`map2`,
//! `map3`, `apply`). The free functions [`lift_a2`] and [`lift_a3`] lift an
//! n-ary function over n applicative values.
//!
//! # Laws
//!
//! ## Identity
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! ## Interchange
//!
//! ```text
//! u.apply(pure(y)) == pure(|f| f(y)).apply(u)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kleisli::typeclass::{Applicative, lift_a2};
//! use kleisli::control::Maybe;
//!
//! let sum = lift_a2(|x: i32, y: i32| x + y, Maybe::of(1), Maybe::of(2));
//! assert_eq!(sum, Maybe::of(3));
//!
//! let missing = Maybe::of(1).map2(Maybe::<i32>::none(), |x, y| x + y);
//! assert!(missing.is_none());
//! ```

use super::functor::Functor;
use super::identity::Identity;

/// A type class for functors that can lift values and combine contexts.
pub trait Applicative: Functor {
    /// Wraps `value` in the success shape of the context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Applicative;
    ///
    /// let wrapped: Option<&str> = <Option<()>>::pure("ok");
    /// assert_eq!(wrapped, Some("ok"));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Joins `self` and `other` with a binary function.
    ///
    /// If either side is in its failure/absent shape the result is too.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Joins three contexts with a ternary function.
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Joins four contexts with a quaternary function.
    fn map4<B, C, D, E, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        fourth: Self::WithType<D>,
        function: F,
    ) -> Self::WithType<E>
    where
        F: FnOnce(Self::Inner, B, C, D) -> E;

    /// Joins five contexts with a quinary function.
    fn map5<B, C, D, E, G, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        fourth: Self::WithType<D>,
        fifth: Self::WithType<E>,
        function: F,
    ) -> Self::WithType<G>
    where
        F: FnOnce(Self::Inner, B, C, D, E) -> G;

    /// Pairs the two carried values.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Evaluates both applicatives and keeps the left value.
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
    {
        self.map2(other, |a, _| a)
    }

    /// Evaluates both applicatives and keeps the right value.
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map2(other, |_, b| b)
    }

    /// Calls the carried function with the value carried by `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Applicative;
    ///
    /// let double: Option<fn(i32) -> i32> = Some(|n| n * 2);
    /// assert_eq!(double.apply(Some(21)), Some(42));
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}

/// Lifts a binary function over two applicative values.
///
/// # Examples
///
/// ```rust
/// use kleisli::typeclass::{Identity, lift_a2};
///
/// let joined = lift_a2(|a: &str, b: &str| format!("{a}{b}"), Identity::new("ab"), Identity::new("cd"));
/// assert_eq!(joined.into_inner(), "abcd");
/// ```
pub fn lift_a2<Fa, B, C, F>(function: F, first: Fa, second: Fa::WithType<B>) -> Fa::WithType<C>
where
    Fa: Applicative,
    F: FnOnce(Fa::Inner, B) -> C,
{
    first.map2(second, function)
}

/// Lifts a ternary function over three applicative values.
pub fn lift_a3<Fa, B, C, D, F>(
    function: F,
    first: Fa,
    second: Fa::WithType<B>,
    third: Fa::WithType<C>,
) -> Fa::WithType<D>
where
    Fa: Applicative,
    F: FnOnce(Fa::Inner, B, C) -> D,
{
    first.map3(second, third, function)
}

/// Lifts a quaternary function over four applicative values.
///
/// # Examples
///
/// ```rust
/// use kleisli::typeclass::lift_a4;
/// use kleisli::control::Maybe;
///
/// let total = lift_a4(|a: i32, b: i32, c: i32, d: i32| a + b + c + d, Maybe::of(1), Maybe::of(2), Maybe::of(3), Maybe::of(4));
/// assert_eq!(total, Maybe::of(10));
/// ```
pub fn lift_a4<Fa, B, C, D, E, F>(
    function: F,
    first: Fa,
    second: Fa::WithType<B>,
    third: Fa::WithType<C>,
    fourth: Fa::WithType<D>,
) -> Fa::WithType<E>
where
    Fa: Applicative,
    F: FnOnce(Fa::Inner, B, C, D) -> E,
{
    first.map4(second, third, fourth, function)
}

/// Lifts a quinary function over five applicative values.
pub fn lift_a5<Fa, B, C, D, E, G, F>(
    function: F,
    first: Fa,
    second: Fa::WithType<B>,
    third: Fa::WithType<C>,
    fourth: Fa::WithType<D>,
    fifth: Fa::WithType<E>,
) -> Fa::WithType<G>
where
    Fa: Applicative,
    F: FnOnce(Fa::Inner, B, C, D, E) -> G,
{
    first.map5(second, third, fourth, fifth, function)
}

impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Option<B>, function: F) -> Option<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Some(a), Some(b)) => Some(function(a, b)),
            _ => None,
        }
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Option<B>, third: Option<C>, function: F) -> Option<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        match (self, second, third) {
            (Some(a), Some(b), Some(c)) => Some(function(a, b, c)),
            _ => None,
        }
    }

    fn map4<B, C, D, E, F>(
        self,
        second: Option<B>,
        third: Option<C>,
        fourth: Option<D>,
        function: F,
    ) -> Option<E>
    where
        F: FnOnce(A, B, C, D) -> E,
    {
        self.map3(second, third, |a, b, c| (a, b, c))
            .map2(fourth, |(a, b, c), d| function(a, b, c, d))
    }

    fn map5<B, C, D, E, G, F>(
        self,
        second: Option<B>,
        third: Option<C>,
        fourth: Option<D>,
        fifth: Option<E>,
        function: F,
    ) -> Option<G>
    where
        F: FnOnce(A, B, C, D, E) -> G,
    {
        self.map4(second, third, fourth, |a, b, c, d| (a, b, c, d))
            .map2(fifth, |(a, b, c, d), e| function(a, b, c, d, e))
    }

    #[inline]
    fn apply<B, Output>(self, other: Option<B>) -> Option<Output>
    where
        A: FnOnce(B) -> Output,
    {
        match (self, other) {
            (Some(function), Some(b)) => Some(function(b)),
            _ => None,
        }
    }
}

impl<A> Applicative for Identity<A> {
    #[inline]
    fn pure<B>(value: B) -> Identity<B> {
        Identity::new(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Identity<B>, function: F) -> Identity<C>
    where
        F: FnOnce(A, B) -> C,
    {
        Identity::new(function(self.into_inner(), other.into_inner()))
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Identity<B>, third: Identity<C>, function: F) -> Identity<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        Identity::new(function(
            self.into_inner(),
            second.into_inner(),
            third.into_inner(),
        ))
    }

    fn map4<B, C, D, E, F>(
        self,
        second: Identity<B>,
        third: Identity<C>,
        fourth: Identity<D>,
        function: F,
    ) -> Identity<E>
    where
        F: FnOnce(A, B, C, D) -> E,
    {
        self.map3(second, third, |a, b, c| (a, b, c))
            .map2(fourth, |(a, b, c), d| function(a, b, c, d))
    }

    fn map5<B, C, D, E, G, F>(
        self,
        second: Identity<B>,
        third: Identity<C>,
        fourth: Identity<D>,
        fifth: Identity<E>,
        function: F,
    ) -> Identity<G>
    where
        F: FnOnce(A, B, C, D, E) -> G,
    {
        self.map4(second, third, fourth, |a, b, c, d| (a, b, c, d))
            .map2(fifth, |(a, b, c, d), e| function(a, b, c, d, e))
    }

    #[inline]
    fn apply<B, Output>(self, other: Identity<B>) -> Identity<Output>
    where
        A: FnOnce(B) -> Output,
    {
        Identity::new((self.into_inner())(other.into_inner()))
    }
}
