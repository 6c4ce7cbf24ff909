//! Dispatch tables for the catamorphism over tagged values.

use std::collections::HashMap;
use std::fmt;

use serde_json::Value;

use super::error::TaggedError;
use super::value::Datum;

/// The reserved name of the fallback case.
pub const OR_ELSE: &str = "orElse";

type Handler<R> = Box<dyn Fn(&Value) -> R>;
type Fallback<R> = Box<dyn Fn(&Datum) -> R>;

/// A dispatch table: one handler per tag plus the mandatory `orElse`
/// fallback.
///
/// # Examples
///
/// ```rust
/// use kleisli::tagged::{Cases, Descriptor, Type, is_integer};
/// use serde_json::json;
///
/// let port = Type::new("Port", Descriptor::predicate(is_integer))?;
/// let cases = Cases::new()
///     .on("Port", |p| p.as_i64().unwrap_or_default() + 1)
///     .or_else(|_| 0);
///
/// assert_eq!(Type::cata(&cases, port.of(8080)?)?, 8081);
/// assert_eq!(Type::cata(&cases, json!(8080))?, 0);
/// # Ok::<(), kleisli::tagged::TaggedError>(())
/// ```
pub struct Cases<R> {
    handlers: HashMap<String, Handler<R>>,
    fallback: Option<Fallback<R>>,
    reserved_tag_used: bool,
}

impl<R> Cases<R> {
    /// An empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
            fallback: None,
            reserved_tag_used: false,
        }
    }

    /// Registers the handler for `tag`; it receives the raw payload.
    ///
    /// `orElse` is reserved for the fallback: registering it here makes
    /// every dispatch fail with [`TaggedError::InvalidArgument`].
    #[must_use]
    pub fn on<F>(mut self, tag: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&Value) -> R + 'static,
    {
        let tag = tag.into();
        if tag == OR_ELSE {
            self.reserved_tag_used = true;
        } else {
            self.handlers.insert(tag, Box::new(handler));
        }
        self
    }

    /// Registers the fallback; it receives the whole datum.
    #[must_use]
    pub fn or_else<F>(mut self, fallback: F) -> Self
    where
        F: Fn(&Datum) -> R + 'static,
    {
        self.fallback = Some(Box::new(fallback));
        self
    }

    /// Dispatches on the tag of `datum`.
    ///
    /// A tagged value with a registered handler goes to that handler; an
    /// unknown tag or an untagged value goes to `orElse`.
    ///
    /// # Errors
    ///
    /// Returns [`TaggedError::MissingCase`] if no `orElse` fallback was
    /// registered, and [`TaggedError::InvalidArgument`] if a handler was
    /// registered under the reserved `orElse` name.
    pub fn cata(&self, datum: impl Into<Datum>) -> Result<R, TaggedError> {
        let datum = datum.into();
        if self.reserved_tag_used {
            return Err(TaggedError::InvalidArgument {
                operation: "cata",
                value: format!("handler registered under {OR_ELSE}"),
            });
        }
        let Some(fallback) = &self.fallback else {
            let tag = datum.tag().unwrap_or("<untagged>").to_string();
            tracing::debug!(%tag, "dispatch table has no fallback");
            return Err(TaggedError::MissingCase { tag });
        };
        let handler = datum.tag().and_then(|tag| self.handlers.get(tag));
        Ok(match handler {
            Some(handler) => handler(datum.value()),
            None => fallback(&datum),
        })
    }
}

impl<R> Default for Cases<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> fmt::Debug for Cases<R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tags: Vec<&String> = self.handlers.keys().collect();
        tags.sort();
        formatter
            .debug_struct("Cases")
            .field("tags", &tags)
            .field("or_else", &self.fallback.is_some())
            .finish()
    }
}
