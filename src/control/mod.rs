//! Value monads: optional and two-channel values.
//!
//! - [`Maybe`]: a value that may be absent (`Some` / `None`)
//! - [`Either`]: a value on the failure (`Left`) or success (`Right`) channel
//! - [`IntoEither`]: conversion of fallible return values into `Either`
//!
//! Both types carry at most one payload and implement `Functor`,
//! `Applicative`, `Monad`, `Foldable` and `Semigroup`; `Either` is also a
//! `Bifunctor`.
//!
//! # Examples
//!
//! ```rust
//! use kleisli::control::{Either, Maybe};
//!
//! let port = Maybe::from_nullable(Some("8080"))
//!     .map_nullable(|text| text.parse::<u16>().ok());
//! let checked: Either<String, u16> = Either::from_maybe(port);
//! assert_eq!(checked, Either::Right(8080));
//! ```

mod either;
mod maybe;

pub(crate) use either::panic_message;
pub use either::{Either, EitherCases, IntoEither};
pub use maybe::{Maybe, MaybeCases};
