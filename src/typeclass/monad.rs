//! Monad type class - sequencing computations with dependency.
//!
//! `Monad` extends [`Applicative`] with `flat_map`: the next computation may
//! depend on the value produced by the previous one.
//!
//! # Laws
//!
//! ## Left identity
//!
//! ```text
//! pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right identity
//!
//! ```text
//! m.flat_map(pure) == m
//! ```
//!
//! ## Associativity
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kleisli::typeclass::Monad;
//! use kleisli::control::Either;
//!
//! fn half(n: i32) -> Either<String, i32> {
//!     if n % 2 == 0 { Either::Right(n / 2) } else { Either::Left(format!("{n} is odd")) }
//! }
//!
//! let result = Monad::flat_map(Either::<String, i32>::Right(8), half);
//! assert_eq!(result, Either::Right(4));
//! ```

use super::applicative::Applicative;
use super::identity::Identity;

/// A type class for applicatives whose computations can be chained.
pub trait Monad: Applicative {
    /// Applies a function returning a monad and flattens the result.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Same as [`flat_map`](Monad::flat_map), under the `Option`/`Result` name.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Runs `self` for its shape only, then yields `next`.
    ///
    /// A failure in `self` propagates and `next` is dropped.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

impl<A> Monad for Option<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        Self::and_then(self, function)
    }
}

impl<A> Monad for Identity<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> Identity<B>,
    {
        function(self.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn option_flat_map_some_to_none() {
        let result = Monad::flat_map(Some(5), |n: i32| if n > 10 { Some(n) } else { None });
        assert_eq!(result, None);
    }

    #[rstest]
    #[case(1)]
    #[case(21)]
    fn identity_left_identity_law(#[case] value: i32) {
        let function = |x: i32| Identity::new(x * 2);
        let left = <Identity<()>>::pure(value).flat_map(function);
        assert_eq!(left, function(value));
    }

    #[rstest]
    fn identity_associativity_law() {
        let first = |x: i32| Identity::new(x + 1);
        let second = |x: i32| Identity::new(x * 10);
        let left = Identity::new(4).flat_map(first).flat_map(second);
        let right = Identity::new(4).flat_map(move |x| first(x).flat_map(second));
        assert_eq!(left, right);
    }
}
