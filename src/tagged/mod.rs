//! Tagged unions: named, validated wrappers over JSON payloads with a
//! catamorphism that dispatches on the tag.
//!
//! [`Type::new`] declares a type from a name and a [`Descriptor`] and
//! returns its [`Constructor`]. Instances are [`Tagged`] values; anything
//! else passed to [`Type::cata`] is treated as untagged and goes to the
//! `orElse` case of the [`Cases`] table.
//!
//! # Examples
//!
//! ```rust
//! use kleisli::tagged::{Cases, Descriptor, Type, is_number};
//!
//! let point = Type::new(
//!     "Point",
//!     Descriptor::fields().field("x", is_number).field("y", is_number),
//! )?;
//! let origin = point.of(serde_json::json!({"x": 0, "y": 0}))?;
//!
//! let cases = Cases::new()
//!     .on("Point", |p| p["x"].as_i64().unwrap_or_default())
//!     .or_else(|_| -1);
//! assert_eq!(Type::cata(&cases, origin)?, 0);
//! # Ok::<(), kleisli::tagged::TaggedError>(())
//! ```

mod cases;
mod descriptor;
mod error;
mod value;

use std::any::Any;

pub use cases::{Cases, OR_ELSE};
pub use descriptor::{
    Descriptor, Predicate, is_array, is_bool, is_integer, is_null, is_number, is_object,
    is_string,
};
pub use error::TaggedError;
pub use value::{Constructor, Datum, Tagged};

/// Entry point for declaring tagged types and dispatching over them.
#[derive(Debug, Clone, Copy, Default)]
pub struct Type;

impl Type {
    /// Declares a tagged type and returns its constructor.
    ///
    /// # Errors
    ///
    /// Returns [`TaggedError::InvalidArgument`] if `name` is not an
    /// identifier or if `descriptor` declares no fields.
    pub fn new(name: impl Into<String>, descriptor: Descriptor) -> Result<Constructor, TaggedError> {
        let name = name.into();
        if !is_identifier(&name) {
            return Err(TaggedError::InvalidArgument {
                operation: "Type",
                value: format!("{name:?} is not a type name"),
            });
        }
        if descriptor.is_empty_fields() {
            return Err(TaggedError::InvalidArgument {
                operation: "Type",
                value: format!("{name} declares no fields"),
            });
        }
        tracing::trace!(%name, ?descriptor, "tagged type declared");
        Ok(Constructor::new(&name, descriptor))
    }

    /// Returns `true` if `value` is a tagged instance of any type.
    #[must_use]
    pub fn is_type(value: &dyn Any) -> bool {
        value.is::<Tagged>()
            || value
                .downcast_ref::<Datum>()
                .is_some_and(Datum::is_tagged)
    }

    /// Dispatches `datum` through `cases`; see [`Cases::cata`].
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`Cases::cata`].
    pub fn cata<R>(cases: &Cases<R>, datum: impl Into<Datum>) -> Result<R, TaggedError> {
        cases.cata(datum)
    }
}

fn is_identifier(name: &str) -> bool {
    let mut characters = name.chars();
    characters
        .next()
        .is_some_and(|first| first.is_alphabetic() || first == '_' || first == '$')
        && characters.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}
