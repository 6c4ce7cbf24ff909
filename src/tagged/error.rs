//! Error types for tagged-union construction and dispatch.

use thiserror::Error;

/// Structural errors raised by the tagged-union API.
///
/// These signal programming errors (a malformed type declaration, a payload
/// its validator refuses, a dispatch table without a fallback). They are
/// returned, never panicked, so the caller decides whether to abort.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaggedError {
    /// An argument of the wrong shape was passed to an operation.
    #[error("invalid argument to {operation}: {value}")]
    InvalidArgument {
        /// The operation that rejected the argument
        operation: &'static str,
        /// The offending argument, rendered as text
        value: String,
    },

    /// A payload failed the validator of its type.
    #[error("invalid value for {type_name}: {value}")]
    InvalidValue {
        /// Name of the type being constructed
        type_name: String,
        /// The offending payload, serialized as JSON
        value: String,
    },

    /// A dispatch table has no `orElse` fallback.
    #[error("cases for {tag} have no orElse fallback")]
    MissingCase {
        /// Tag of the value being dispatched, or `<untagged>`
        tag: String,
    },
}
