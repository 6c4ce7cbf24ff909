//! Identity wrapper type - the identity monad.
//!
//! `Identity` wraps exactly one value and adds no behavior. It is the
//! baseline implementation of the monadic protocol that every other
//! container in this crate follows, and a convenient model for checking
//! type class laws.

use std::any::Any;
use std::fmt;

use super::Semigroup;
use super::functor::Functor;
use super::higher::TypeConstructor;

/// The identity monad - wraps a value without adding any behavior.
///
/// # Examples
///
/// ```rust
/// use kleisli::typeclass::Identity;
///
/// let wrapped = Identity::of(20).map(|x| x + 1).map(|x| x * 2);
/// assert_eq!(wrapped.fold(|x| x), 42);
/// ```
///
/// The payload is reached through the accessors only:
///
/// ```compile_fail
/// use kleisli::typeclass::Identity;
///
/// let wrapped = Identity::new(1);
/// let _ = wrapped.0;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Identity<A>(A);

impl<A> Identity<A> {
    /// Boxes `value`.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Lifts a value into `Identity`.
    #[inline]
    pub const fn of(value: A) -> Self {
        Self(value)
    }

    /// Unwraps the box.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Borrows the boxed value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }

    /// Applies `function` to the payload.
    #[inline]
    pub fn map<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> B,
    {
        Identity(function(self.0))
    }

    /// Applies the wrapped function to the payload of any functor.
    ///
    /// The payload is handed to `functor`'s own `fmap`, so the result has the
    /// shape of `functor`, not of `Identity`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Identity;
    /// use kleisli::control::Maybe;
    ///
    /// let incremented = Identity::of(|x: i32| x + 1).ap(Maybe::of(41));
    /// assert_eq!(incremented, Maybe::of(42));
    ///
    /// let absent = Identity::of(|x: i32| x + 1).ap(Maybe::<i32>::none());
    /// assert!(absent.is_none());
    /// ```
    pub fn ap<G, C>(self, functor: G) -> G::WithType<C>
    where
        G: Functor,
        A: FnOnce(G::Inner) -> C + 'static,
        C: 'static,
    {
        functor.fmap(self.0)
    }

    /// Chains a computation returning another `Identity`.
    #[inline]
    pub fn flat_map<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> Identity<B>,
    {
        self.map(function).flatten()
    }

    /// Returns the payload directly, collapsing `Identity<Identity<B>>` to
    /// `Identity<B>`.
    #[inline]
    pub fn flatten(self) -> A {
        self.0
    }

    /// Eliminates the `Identity` by applying `function` to the payload.
    #[inline]
    pub fn fold<B, F>(self, function: F) -> B
    where
        F: FnOnce(A) -> B,
    {
        function(self.0)
    }

    /// Combines two identities by combining their payloads.
    #[must_use]
    pub fn concat(self, other: Self) -> Self
    where
        A: Semigroup,
    {
        Self(self.0.combine(other.0))
    }

    /// Runs an effectful function over the payload and moves the `Identity`
    /// inside the resulting applicative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Identity;
    ///
    /// let traversed = Identity::of("7").traverse(|text| text.parse::<i32>().ok());
    /// assert_eq!(traversed, Some(Identity::of(7)));
    /// ```
    pub fn traverse<G, F>(self, function: F) -> G::WithType<Identity<G::Inner>>
    where
        G: Functor,
        G::Inner: 'static,
        F: FnOnce(A) -> G,
    {
        function(self.0).fmap(Identity::of)
    }

    /// Flips an `Identity` of an applicative into an applicative of `Identity`.
    pub fn sequence(self) -> A::WithType<Identity<A::Inner>>
    where
        A: Functor,
        A::Inner: 'static,
    {
        self.0.fmap(Identity::of)
    }

    /// Returns `true` if `value` is an `Identity<A>`.
    pub fn is(value: &dyn Any) -> bool
    where
        A: 'static,
    {
        value.is::<Self>()
    }
}

impl<A> TypeConstructor for Identity<A> {
    type Inner = A;
    type WithType<B> = Identity<B>;
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

impl<A: fmt::Display> fmt::Display for Identity<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Identity({})", self.0)
    }
}
