//! Type classes shared by every container in the crate.
//!
//! - [`Functor`]: mapping over container values
//! - [`Applicative`]: lifting values and combining independent contexts
//! - [`Monad`]: sequencing computations with dependency
//! - [`Foldable`]: folding a structure to a summary value
//! - [`Bifunctor`]: mapping over either of two channels
//! - [`Semigroup`] / [`Monoid`]: associative combination with an identity
//!
//! ## Type constructors
//!
//! Rust has no native higher-kinded types. [`TypeConstructor`] uses Generic
//! Associated Types to name "the same container with another payload", which
//! is what lets `Functor` and friends be written once for every container.
//!
//! [`Identity`] lives here as the simplest container and the reference
//! implementation of the monadic protocol.
//!
//! # Examples
//!
//! ```rust
//! use kleisli::typeclass::{Applicative, Functor, Identity, Monad};
//!
//! let result = Identity::new(4)
//!     .fmap(|x| x + 1)
//!     .map2(Identity::new(10), |a, b| a * b);
//! assert_eq!(Monad::flat_map(result, |x| Identity::new(x - 8)), Identity::new(42));
//! ```

mod applicative;
mod bifunctor;
mod foldable;
mod functor;
mod higher;
mod identity;
mod monad;
mod monoid;
mod semigroup;

pub use applicative::{Applicative, lift_a2, lift_a3, lift_a4, lift_a5};
pub use bifunctor::Bifunctor;
pub use foldable::Foldable;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use identity::Identity;
pub use monad::Monad;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
