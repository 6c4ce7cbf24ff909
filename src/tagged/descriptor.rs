//! Payload validators for tagged types.

use std::fmt;
use std::rc::Rc;

use serde_json::Value;

/// A validator over a JSON payload.
pub type Predicate = Rc<dyn Fn(&Value) -> bool>;

/// How a tagged type validates its payload.
///
/// # Examples
///
/// ```rust
/// use kleisli::tagged::{Descriptor, is_number};
/// use serde_json::json;
///
/// let point = Descriptor::fields().field("x", is_number).field("y", is_number);
/// assert!(point.validate(&json!({"x": 1, "y": 2.5})));
/// assert!(!point.validate(&json!({"x": 1})));
/// ```
#[derive(Clone)]
pub enum Descriptor {
    /// One predicate over the whole payload.
    Predicate(Predicate),
    /// One predicate per field of an object payload, in declaration order.
    Fields(Vec<(String, Predicate)>),
}

impl Descriptor {
    /// Validates the whole payload with `predicate`.
    pub fn predicate<F>(predicate: F) -> Self
    where
        F: Fn(&Value) -> bool + 'static,
    {
        Self::Predicate(Rc::new(predicate))
    }

    /// Starts an empty per-field descriptor; add fields with
    /// [`Descriptor::field`].
    #[must_use]
    pub const fn fields() -> Self {
        Self::Fields(Vec::new())
    }

    /// Adds a field predicate. On a whole-payload descriptor this replaces
    /// it with a per-field one.
    #[must_use]
    pub fn field<F>(self, name: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&Value) -> bool + 'static,
    {
        let mut fields = match self {
            Self::Fields(fields) => fields,
            Self::Predicate(_) => Vec::new(),
        };
        fields.push((name.into(), Rc::new(predicate)));
        Self::Fields(fields)
    }

    /// Returns `true` if `value` satisfies the descriptor.
    ///
    /// A per-field descriptor requires an object payload. A missing field is
    /// validated as `null`.
    #[must_use]
    pub fn validate(&self, value: &Value) -> bool {
        match self {
            Self::Predicate(predicate) => predicate(value),
            Self::Fields(fields) => value.as_object().is_some_and(|object| {
                fields.iter().all(|(name, predicate)| {
                    predicate(object.get(name).unwrap_or(&Value::Null))
                })
            }),
        }
    }

    pub(crate) fn is_empty_fields(&self) -> bool {
        matches!(self, Self::Fields(fields) if fields.is_empty())
    }
}

impl fmt::Debug for Descriptor {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Predicate(_) => formatter.write_str("Predicate(..)"),
            Self::Fields(fields) => formatter
                .debug_list()
                .entries(fields.iter().map(|(name, _)| name))
                .finish(),
        }
    }
}

/// Accepts any JSON number.
#[must_use]
pub fn is_number(value: &Value) -> bool {
    value.is_number()
}

/// Accepts JSON numbers with an integral value.
#[must_use]
pub fn is_integer(value: &Value) -> bool {
    value.is_i64() || value.is_u64()
}

/// Accepts JSON strings.
#[must_use]
pub fn is_string(value: &Value) -> bool {
    value.is_string()
}

/// Accepts JSON booleans.
#[must_use]
pub fn is_bool(value: &Value) -> bool {
    value.is_boolean()
}

/// Accepts JSON arrays.
#[must_use]
pub fn is_array(value: &Value) -> bool {
    value.is_array()
}

/// Accepts JSON objects.
#[must_use]
pub fn is_object(value: &Value) -> bool {
    value.is_object()
}

/// Accepts `null`.
#[must_use]
pub fn is_null(value: &Value) -> bool {
    value.is_null()
}
