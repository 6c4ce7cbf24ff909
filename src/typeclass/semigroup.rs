//! `Semigroup`: an associative `combine`.
//!
//! A type `T` is a semigroup when it has an associative `combine: (T, T) -> T`.
//! The monads in this crate that define `concat` (Identity, Maybe, Either,
//! IO) implement `Semigroup` by delegating to it.
//!
//! # Laws
//!
//! ## Associativity
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kleisli::typeclass::Semigroup;
//!
//! assert_eq!(String::from("Hello, ").combine(String::from("World!")), "Hello, World!");
//! assert_eq!(vec![1, 2].combine(vec![3, 4]), vec![1, 2, 3, 4]);
//! ```

use super::identity::Identity;

/// Values that can be merged pairwise, associatively.
pub trait Semigroup {
    /// Merges `other` into `self`. Must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Borrowing variant of [`combine`](Semigroup::combine).
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Merges every item left to right; `None` for an empty iterator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::typeclass::Semigroup;
    ///
    /// let parts = vec![String::from("a"), String::from("b")];
    /// assert_eq!(String::reduce_all(parts), Some(String::from("ab")));
    /// ```
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

impl Semigroup for () {
    fn combine(self, _other: Self) -> Self {}
}

impl<T: Semigroup> Semigroup for Identity<T> {
    fn combine(self, other: Self) -> Self {
        self.concat(other)
    }
}
