//! Tagged instances and the constructors that build them.

use std::fmt;
use std::rc::Rc;

use serde_json::Value;

use super::descriptor::Descriptor;
use super::error::TaggedError;

/// A payload wrapped with the name of the type that validated it.
#[derive(Debug, Clone, PartialEq)]
pub struct Tagged {
    tag: Rc<str>,
    value: Value,
}

impl Tagged {
    /// The name of the type that built this instance.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The raw payload.
    #[must_use]
    pub const fn value_of(&self) -> &Value {
        &self.value
    }

    /// Consumes the instance and returns the raw payload.
    #[must_use]
    pub fn into_value(self) -> Value {
        self.value
    }

    /// Applies `function` to the raw payload.
    pub fn fold<R, F>(&self, function: F) -> R
    where
        F: FnOnce(&Value) -> R,
    {
        function(&self.value)
    }

    /// The payload as an integer, if it is one.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        self.value.as_i64()
    }

    /// The payload as a float, if it is numeric.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        self.value.as_f64()
    }
}

impl fmt::Display for Tagged {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}({})", self.tag, self.value)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Tagged {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Tagged", 2)?;
        state.serialize_field("tag", &*self.tag)?;
        state.serialize_field("value", &self.value)?;
        state.end()
    }
}

/// Anything `Type::cata` can dispatch on: a tagged instance or a plain
/// value.
#[derive(Debug, Clone, PartialEq)]
pub enum Datum {
    /// A value built by a tagged-type constructor.
    Tagged(Tagged),
    /// Any other value.
    Plain(Value),
}

impl Datum {
    /// Returns `true` for a tagged instance.
    #[must_use]
    pub const fn is_tagged(&self) -> bool {
        matches!(self, Self::Tagged(_))
    }

    /// The tag, for a tagged instance.
    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::Tagged(tagged) => Some(tagged.tag()),
            Self::Plain(_) => None,
        }
    }

    /// The raw payload of either variant.
    #[must_use]
    pub const fn value(&self) -> &Value {
        match self {
            Self::Tagged(tagged) => tagged.value_of(),
            Self::Plain(value) => value,
        }
    }
}

impl From<Tagged> for Datum {
    fn from(tagged: Tagged) -> Self {
        Self::Tagged(tagged)
    }
}

impl From<Value> for Datum {
    fn from(value: Value) -> Self {
        Self::Plain(value)
    }
}

impl fmt::Display for Datum {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tagged(tagged) => tagged.fmt(formatter),
            Self::Plain(value) => value.fmt(formatter),
        }
    }
}

/// Builds validated [`Tagged`] instances of one type.
///
/// Calling [`Constructor::construct`], its alias [`Constructor::of`], or the
/// plain function returned by [`Constructor::as_fn`] all behave the same.
#[derive(Debug, Clone)]
pub struct Constructor {
    name: Rc<str>,
    descriptor: Rc<Descriptor>,
}

impl Constructor {
    pub(super) fn new(name: &str, descriptor: Descriptor) -> Self {
        Self {
            name: Rc::from(name),
            descriptor: Rc::new(descriptor),
        }
    }

    /// The name of the type.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Validates `value` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns [`TaggedError::InvalidValue`] with the serialized payload if
    /// the descriptor rejects it.
    pub fn construct(&self, value: impl Into<Value>) -> Result<Tagged, TaggedError> {
        let value = value.into();
        if self.descriptor.validate(&value) {
            return Ok(Tagged {
                tag: Rc::clone(&self.name),
                value,
            });
        }
        let serialized = value.to_string();
        tracing::debug!(type_name = %self.name, value = %serialized, "payload rejected by descriptor");
        Err(TaggedError::InvalidValue {
            type_name: self.name.to_string(),
            value: serialized,
        })
    }

    /// Alias of [`Constructor::construct`].
    ///
    /// # Errors
    ///
    /// Returns [`TaggedError::InvalidValue`] if the descriptor rejects the
    /// payload.
    pub fn of(&self, value: impl Into<Value>) -> Result<Tagged, TaggedError> {
        self.construct(value)
    }

    /// The constructor as a plain function.
    pub fn as_fn(&self) -> impl Fn(Value) -> Result<Tagged, TaggedError> + 'static {
        let constructor = self.clone();
        move |value| constructor.construct(value)
    }

    /// Returns `true` if `tagged` was built by a constructor of this type.
    #[must_use]
    pub fn is_instance(&self, tagged: &Tagged) -> bool {
        *tagged.tag == *self.name
    }
}
