use std::any::Any;
use std::fmt;

/// The opaque resource handle a task's computation returns from a run.
///
/// Whatever the computation needs to release later (a timer handle, a
/// subscription, nothing at all) goes in here; the task's cleanup function
/// receives it back and downcasts it.
///
/// # Examples
///
/// ```rust
/// use kleisli::effect::CancelState;
///
/// let state = CancelState::new(42_u32);
/// assert_eq!(state.downcast::<u32>(), Some(42));
/// assert!(CancelState::none().is_none());
/// ```
#[derive(Default)]
pub struct CancelState(Option<Box<dyn Any>>);

impl CancelState {
    /// A state holding nothing to release.
    #[must_use]
    pub const fn none() -> Self {
        Self(None)
    }

    /// Wraps a resource handle.
    #[must_use]
    pub fn new<T: 'static>(resource: T) -> Self {
        Self(Some(Box::new(resource)))
    }

    /// Returns `true` if there is nothing to release.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        self.0.is_none()
    }

    /// Takes the resource back out if it has type `T`.
    #[must_use]
    pub fn downcast<T: 'static>(self) -> Option<T> {
        self.0
            .and_then(|resource| resource.downcast::<T>().ok())
            .map(|resource| *resource)
    }
}

impl fmt::Debug for CancelState {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            formatter.write_str("CancelState(None)")
        } else {
            formatter.write_str("CancelState(..)")
        }
    }
}
