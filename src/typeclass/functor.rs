//! `Functor`: structure-preserving mapping.
//!
//! A `Functor` can have a function applied to the value it carries while its
//! shape (present/absent, left/right) stays the same.
//!
//! # Laws
//!
//! ## Identity
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kleisli::typeclass::Functor;
//! use kleisli::control::Maybe;
//!
//! let present: Maybe<String> = Maybe::of(5).fmap(|n| n.to_string());
//! assert_eq!(present, Maybe::of("5".to_string()));
//!
//! let absent: Maybe<String> = Maybe::<i32>::none().fmap(|n| n.to_string());
//! assert!(absent.is_none());
//! ```

use super::higher::TypeConstructor;
use super::identity::Identity;

/// Containers that transform their carried value and keep their shape.
///
/// The mapping function is `FnOnce`: every implementor carries at most one
/// value, so the function is never invoked more than once.
pub trait Functor: TypeConstructor {
    /// Maps the carried value through `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::{Functor, Identity};
    ///
    /// assert_eq!(Identity::new(5).fmap(|n| n * 2), Identity::new(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B + 'static,
        B: 'static;

    /// Like [`fmap`](Functor::fmap), but borrows the carried value.
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B + 'static,
        B: 'static;

    /// Swaps the carried value for `value`.
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
        B: 'static,
    {
        self.fmap(|_| value)
    }

    /// Forgets the carried value, keeping only the shape.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Option<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

impl<A> Functor for Identity<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> B,
    {
        Identity::new(function(self.into_inner()))
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Identity<B>
    where
        F: FnOnce(&A) -> B,
    {
        Identity::new(function(self.as_inner()))
    }
}
