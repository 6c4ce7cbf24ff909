//! `Monoid`: a semigroup plus a neutral element.
//!
//! # Laws
//!
//! ```text
//! Self::empty().combine(a) == a
//! a.combine(Self::empty()) == a
//! ```
//!
//! `Task` exposes an `empty()` that never settles. It is usable as a racing
//! identity for `concat`, but it is not a lawful `Monoid` and does not
//! implement this trait.
//!
//! # Examples
//!
//! ```rust
//! use kleisli::typeclass::{Monoid, Semigroup};
//!
//! let value = String::from("kleisli");
//! assert_eq!(String::empty().combine(value.clone()), value);
//! assert_eq!(String::combine_all(vec![String::from("a"), String::from("b")]), "ab");
//! ```

use super::semigroup::Semigroup;

/// Semigroups with a neutral element for `combine`.
pub trait Monoid: Semigroup {
    /// The neutral element: combining with it changes nothing.
    fn empty() -> Self;

    /// Folds every item into [`empty`](Monoid::empty), left to right.
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| accumulator.combine(element))
    }

    /// Returns `true` if this value equals the identity element.
    fn is_empty_value(&self) -> bool
    where
        Self: PartialEq + Sized,
    {
        *self == Self::empty()
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl Monoid for () {
    fn empty() -> Self {}
}
