//! Maybe type - an optional value with a monadic protocol.
//!
//! `Maybe<A>` is either `Some(a)` or `None`. Unlike [`Option`], it follows
//! the protocol shared by every container in this crate (`of`, `map`, `ap`,
//! `flat_map`, `flatten`, `fold`, `concat`, `empty`) and keeps the
//! asymmetric `ap`/`concat` semantics documented on those methods.
//!
//! Absence at the boundary is an [`Option::None`]: [`Maybe::from_nullable`]
//! and [`Maybe::map_nullable`] turn it into `Maybe::None`.
//!
//! # Examples
//!
//! ```rust
//! use kleisli::control::Maybe;
//!
//! let described = Maybe::of(5)
//!     .map(|x| x * 2)
//!     .fold(|| "none".to_string(), |x| format!("val:{x}"));
//! assert_eq!(described, "val:10");
//!
//! let missing: Maybe<i32> = Maybe::from_nullable(None);
//! assert_eq!(missing.or_get(0), 0);
//! ```

use std::any::Any;
use std::fmt;

use super::either::Either;
use crate::typeclass::{
    Applicative, Foldable, Functor, Monad, Monoid, Semigroup, TypeConstructor,
};

/// An optional value: `Some(a)` when present, `None` when absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<A> {
    /// A present value.
    Some(A),
    /// The absent value.
    None,
}

/// Handlers for [`Maybe::cata`], named after the variants they handle.
#[derive(Debug, Clone, Copy)]
pub struct MaybeCases<N, S> {
    /// Called when the `Maybe` is `None`.
    pub none: N,
    /// Called with the payload of `Some`.
    pub some: S,
}

impl<A> Maybe<A> {
    /// Lifts a value into `Some`.
    #[inline]
    pub const fn of(value: A) -> Self {
        Self::Some(value)
    }

    /// Returns the absent value.
    #[inline]
    pub const fn none() -> Self {
        Self::None
    }

    /// Returns the monoid unit, `None`.
    #[inline]
    pub const fn empty() -> Self {
        Self::None
    }

    /// Builds a `Maybe` from a nullable value: `None` stays absent.
    #[inline]
    pub fn from_nullable(value: Option<A>) -> Self {
        value.map_or(Self::None, Self::Some)
    }

    /// Alias of [`Maybe::from_nullable`].
    #[inline]
    pub fn from_option(value: Option<A>) -> Self {
        Self::from_nullable(value)
    }

    /// Converts an `Either`: `Left` becomes `None`, `Right` becomes `Some`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::{Either, Maybe};
    ///
    /// assert_eq!(Maybe::from_either(Either::<String, i32>::Right(1)), Maybe::of(1));
    /// assert!(Maybe::from_either(Either::<String, i32>::Left("e".into())).is_none());
    /// ```
    pub fn from_either<L>(either: Either<L, A>) -> Self {
        either.fold(|_| Self::None, Self::Some)
    }

    /// Returns `true` if this is `Some`.
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if this is `None`.
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Converts into a standard [`Option`].
    #[inline]
    pub fn into_option(self) -> Option<A> {
        match self {
            Self::Some(value) => Option::Some(value),
            Self::None => Option::None,
        }
    }

    /// Borrows the payload.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&A> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::None => Maybe::None,
        }
    }

    /// Applies `function` to the payload of `Some`; `None` is returned
    /// without calling it.
    #[inline]
    pub fn map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Some(value) => Maybe::Some(function(value)),
            Self::None => Maybe::None,
        }
    }

    /// Like [`Maybe::map`], but re-validates the result: a mapper returning
    /// `None` demotes the value to `Maybe::None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Maybe;
    ///
    /// let parsed = Maybe::of("x1").map_nullable(|text| text.parse::<i32>().ok());
    /// assert!(parsed.is_none());
    /// ```
    pub fn map_nullable<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        self.flat_map(|value| Maybe::from_nullable(function(value)))
    }

    /// Applies the wrapped function to `other`'s payload.
    ///
    /// `Some(f).ap(m)` is `m.map(f)`. `None.ap(m)` returns `m` unchanged:
    /// the other container is propagated rather than the absent function.
    /// That asymmetry is why the wrapped function maps `B` to `B`; use
    /// [`Applicative::apply`] for the lawful, type-changing application.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Maybe;
    ///
    /// let increment = Maybe::of(|x: i32| x + 1);
    /// assert_eq!(increment.ap(Maybe::of(1)), Maybe::of(2));
    ///
    /// let absent: Maybe<fn(i32) -> i32> = Maybe::none();
    /// assert_eq!(absent.ap(Maybe::of(1)), Maybe::of(1));
    /// ```
    pub fn ap<B>(self, other: Maybe<B>) -> Maybe<B>
    where
        A: FnOnce(B) -> B,
    {
        match self {
            Self::Some(function) => other.map(function),
            Self::None => other,
        }
    }

    /// Chains a computation returning another `Maybe`.
    #[inline]
    pub fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        self.map(function).flatten()
    }

    /// Eliminates the `Maybe`: `on_none` for `None`, `on_some` for `Some`.
    #[inline]
    pub fn fold<B, N, S>(self, on_none: N, on_some: S) -> B
    where
        N: FnOnce() -> B,
        S: FnOnce(A) -> B,
    {
        match self {
            Self::Some(value) => on_some(value),
            Self::None => on_none(),
        }
    }

    /// Dispatches to the handler named after the current variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::{Maybe, MaybeCases};
    ///
    /// let describe = |maybe: Maybe<i32>| {
    ///     maybe.cata(MaybeCases {
    ///         none: || "nothing".to_string(),
    ///         some: |n| format!("got {n}"),
    ///     })
    /// };
    /// assert_eq!(describe(Maybe::of(3)), "got 3");
    /// assert_eq!(describe(Maybe::None), "nothing");
    /// ```
    #[inline]
    pub fn cata<B, N, S>(self, cases: MaybeCases<N, S>) -> B
    where
        N: FnOnce() -> B,
        S: FnOnce(A) -> B,
    {
        self.fold(cases.none, cases.some)
    }

    /// Returns the payload, or `default` when absent.
    #[inline]
    pub fn or_get(self, default: A) -> A {
        match self {
            Self::Some(value) => value,
            Self::None => default,
        }
    }

    /// Alias of [`Maybe::or_get`].
    #[inline]
    pub fn get_or_else(self, default: A) -> A {
        self.or_get(default)
    }

    /// Returns the payload, or computes a default when absent.
    #[inline]
    pub fn or_get_with<F>(self, default: F) -> A
    where
        F: FnOnce() -> A,
    {
        match self {
            Self::Some(value) => value,
            Self::None => default(),
        }
    }

    /// Returns `self` when present, or `Maybe::of(default)` when absent.
    #[inline]
    #[must_use]
    pub fn or_else(self, default: A) -> Self {
        match self {
            Self::Some(_) => self,
            Self::None => Self::of(default),
        }
    }

    /// Keeps the payload only if it satisfies `predicate`.
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&A) -> bool,
    {
        if let Self::Some(value) = self
            && predicate(&value)
        {
            return Self::Some(value);
        }
        Self::None
    }

    /// Combines two `Maybe`s.
    ///
    /// `None` is absorbed by the other side. Two `Some`s combine their
    /// payloads with the payload's own `Semigroup`; `Some(a).concat(None)`
    /// stays `Some(a)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Maybe;
    ///
    /// let joined = Maybe::of(String::from("ab")).concat(Maybe::of(String::from("cd")));
    /// assert_eq!(joined, Maybe::of(String::from("abcd")));
    /// assert_eq!(Maybe::none().concat(Maybe::of(String::from("x"))), Maybe::of(String::from("x")));
    /// ```
    #[must_use]
    pub fn concat(self, other: Self) -> Self
    where
        A: Semigroup,
    {
        match (self, other) {
            (Self::None, other) => other,
            (Self::Some(left), Self::Some(right)) => Self::Some(left.combine(right)),
            (present, Self::None) => present,
        }
    }

    /// Returns `true` if `value` is a `Maybe<A>`.
    pub fn is(value: &dyn Any) -> bool
    where
        A: 'static,
    {
        value.is::<Self>()
    }
}

impl<A> Maybe<Maybe<A>> {
    /// Collapses one level of nesting; an outer `None` is returned as is.
    #[inline]
    pub fn flatten(self) -> Maybe<A> {
        match self {
            Self::Some(inner) => inner,
            Self::None => Maybe::None,
        }
    }
}

impl<A> Default for Maybe<A> {
    fn default() -> Self {
        Self::None
    }
}

impl<A> From<Option<A>> for Maybe<A> {
    fn from(value: Option<A>) -> Self {
        Self::from_nullable(value)
    }
}

impl<A> From<Maybe<A>> for Option<A> {
    fn from(maybe: Maybe<A>) -> Self {
        maybe.into_option()
    }
}

impl<A: fmt::Display> fmt::Display for Maybe<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => write!(formatter, "Some({value})"),
            Self::None => write!(formatter, "None"),
        }
    }
}

impl<A> TypeConstructor for Maybe<A> {
    type Inner = A;
    type WithType<B> = Maybe<B>;
}

impl<A> Functor for Maybe<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

impl<A> Applicative for Maybe<A> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Some(value)
    }

    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Some(a), Maybe::Some(b)) => Maybe::Some(function(a, b)),
            _ => Maybe::None,
        }
    }

    fn map3<B, C, D, F>(self, second: Maybe<B>, third: Maybe<C>, function: F) -> Maybe<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        match (self, second, third) {
            (Self::Some(a), Maybe::Some(b), Maybe::Some(c)) => Maybe::Some(function(a, b, c)),
            _ => Maybe::None,
        }
    }

    fn map4<B, C, D, E, F>(
        self,
        second: Maybe<B>,
        third: Maybe<C>,
        fourth: Maybe<D>,
        function: F,
    ) -> Maybe<E>
    where
        F: FnOnce(A, B, C, D) -> E,
    {
        self.map3(second, third, |a, b, c| (a, b, c))
            .map2(fourth, |(a, b, c), d| function(a, b, c, d))
    }

    fn map5<B, C, D, E, G, F>(
        self,
        second: Maybe<B>,
        third: Maybe<C>,
        fourth: Maybe<D>,
        fifth: Maybe<E>,
        function: F,
    ) -> Maybe<G>
    where
        F: FnOnce(A, B, C, D, E) -> G,
    {
        self.map4(second, third, fourth, |a, b, c, d| (a, b, c, d))
            .map2(fifth, |(a, b, c, d), e| function(a, b, c, d, e))
    }

    fn apply<B, Output>(self, other: Maybe<B>) -> Maybe<Output>
    where
        A: FnOnce(B) -> Output,
    {
        self.map2(other, |function, value| function(value))
    }
}

impl<A> Monad for Maybe<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        Self::flat_map(self, function)
    }
}

impl<A> Foldable for Maybe<A> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Self::Some(value) => function(init, value),
            Self::None => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match self {
            Self::Some(value) => function(value, init),
            Self::None => init,
        }
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_none()
    }

    #[inline]
    fn length(&self) -> usize {
        usize::from(self.is_some())
    }
}

impl<A: Semigroup> Semigroup for Maybe<A> {
    fn combine(self, other: Self) -> Self {
        self.concat(other)
    }
}

impl<A: Semigroup> Monoid for Maybe<A> {
    fn empty() -> Self {
        Self::None
    }
}
