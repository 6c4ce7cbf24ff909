//! Timer-backed tasks on a tokio `LocalSet`.

use std::time::Duration;

use tokio::task::JoinHandle;

use super::{CancelState, Task};

impl<E, A> Task<E, A>
where
    E: 'static,
    A: 'static,
{
    /// A task that resolves with `value` once `duration` has elapsed.
    ///
    /// Each run spawns a timer onto the current `LocalSet`; running it
    /// outside one panics. The cleanup aborts the timer, so a branch that
    /// loses a `concat` race or is released by `ap` never fires.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::time::Duration;
    /// use kleisli::effect::Task;
    ///
    /// # tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap().block_on(async {
    /// let local = tokio::task::LocalSet::new();
    /// let outcome = local
    ///     .run_until(Task::<String, i32>::after(Duration::from_millis(5), 3).into_future())
    ///     .await;
    /// assert_eq!(outcome, Ok(3));
    /// # });
    /// ```
    pub fn after(duration: Duration, value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |_, resolve| {
            let value = value.clone();
            let handle = tokio::task::spawn_local(async move {
                tokio::time::sleep(duration).await;
                resolve(value);
            });
            CancelState::new(handle)
        })
        .with_cleanup(abort_timer)
    }

    /// A task that rejects with `error` once `duration` has elapsed.
    pub fn reject_after(duration: Duration, error: E) -> Self
    where
        E: Clone,
    {
        Self::new(move |reject, _| {
            let error = error.clone();
            let handle = tokio::task::spawn_local(async move {
                tokio::time::sleep(duration).await;
                reject(error);
            });
            CancelState::new(handle)
        })
        .with_cleanup(abort_timer)
    }
}

fn abort_timer(state: CancelState) {
    if let Some(handle) = state.downcast::<JoinHandle<()>>() {
        tracing::trace!("aborting task timer");
        handle.abort();
    }
}
