//! # kleisli
//!
//! Algebraic data types with a uniform monadic protocol.
//!
//! ## Overview
//!
//! Every container in this crate answers the same vocabulary (`of`, `map`,
//! `ap`, `flat_map`, `fold`, `concat`, `equals`, `is`) and the core ones also
//! implement the type classes in [`typeclass`]:
//!
//! - **Identity**: the trivial container, the reference for the protocol
//! - **Maybe**: an optional value
//! - **Either**: a value on a failure or a success channel
//! - **IO**: a deferred, re-runnable side effect
//! - **State**: a computation threading a state value
//! - **Task**: a cancellable computation whose `ap` joins and whose
//!   `concat` races, with cleanup of the discarded branches
//! - **Type**: runtime-validated tagged unions with a catamorphism
//!
//! ## Features
//!
//! - `typeclass`: type class traits and `Identity`
//! - `control`: `Maybe` and `Either`
//! - `effect`: `IO`, `State` and `Task`
//! - `tokio`: timers and a `spawn_local` scheduler for `Task`
//! - `tagged`: tagged unions over `serde_json` values
//! - `serde`: `Serialize`/`Deserialize` for the value containers
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use kleisli::prelude::*;
//!
//! let total = Maybe::of(20)
//!     .flat_map(|x| if x > 0 { Maybe::of(x + 1) } else { Maybe::None })
//!     .fold(|| 0, |x| x * 2);
//! assert_eq!(total, 42);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// One-line import of the containers and their type classes.
///
/// # Usage
///
/// ```rust
/// use kleisli::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;

    #[cfg(feature = "tagged")]
    pub use crate::tagged::{Cases, Constructor, Datum, Descriptor, Tagged, TaggedError, Type};
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "effect")]
pub mod effect;

#[cfg(feature = "tagged")]
pub mod tagged;
