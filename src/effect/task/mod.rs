//! Task - deferred, cancellable two-channel computations.
//!
//! A `Task<E, A>` describes a computation that eventually rejects with an
//! `E` or resolves with an `A`. It is a continuation-passing function
//! `(reject, resolve) -> CancelState` paired with a cleanup function that
//! receives the returned [`CancelState`] when the resources behind a run
//! are no longer needed.
//!
//! # Execution model
//!
//! Building and composing a task runs nothing. [`Task::run`] starts one
//! execution; running the same task twice executes the whole chain twice.
//! Within one execution only the first settlement counts: later calls to
//! either callback are ignored.
//!
//! # Combinators
//!
//! - [`Task::ap`] starts both tasks at once and resolves when both have
//!   resolved; the first rejection rejects the combination.
//! - [`Task::concat`] races both tasks and settles with whichever settles
//!   first.
//!
//! Both defer the cleanup of the two branch states through the task's
//! [`Scheduler`] once the outcome is known. Cleanup never runs inside the
//! callback that settled the combination, and runs exactly once per branch.
//!
//! # Examples
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use kleisli::effect::Task;
//!
//! let resolved = Rc::new(Cell::new(0));
//! let sink = Rc::clone(&resolved);
//!
//! Task::<String, i32>::resolve(3)
//!     .map(|x| x + 1)
//!     .flat_map(|x| Task::resolve(x * 2))
//!     .run(|error| panic!("unexpected rejection: {error}"), move |value| sink.set(value));
//!
//! assert_eq!(resolved.get(), 8);
//! ```

mod branches;
mod cancel;
mod chain;
mod scheduler;
#[cfg(feature = "tokio")]
mod timer;

use std::any::Any;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::future::Future;
use std::rc::Rc;

use futures::channel::oneshot;

use self::branches::{Branches, Cleanup};
use self::chain::Chain;
pub use self::cancel::CancelState;
#[cfg(feature = "tokio")]
pub use self::scheduler::LocalSpawner;
pub use self::scheduler::{Job, MicrotaskQueue, Scheduler};

/// The rejection callback handed to a task's computation.
pub type Reject<E> = Rc<dyn Fn(E)>;

/// The resolution callback handed to a task's computation.
pub type Resolve<A> = Rc<dyn Fn(A)>;

type Computation<E, A> = Rc<dyn Fn(Reject<E>, Resolve<A>) -> CancelState>;

/// A deferred computation that rejects with `E` or resolves with `A`.
pub struct Task<E, A>
where
    E: 'static,
    A: 'static,
{
    computation: Computation<E, A>,
    cleanup: Cleanup,
    scheduler: Rc<dyn Scheduler>,
}

/// Handlers for [`Task::cata`], named after the channel they receive.
#[derive(Debug, Clone, Copy)]
pub struct TaskCases<F, G> {
    /// Called with the rejection value.
    pub rejected: F,
    /// Called with the resolved value.
    pub resolved: G,
}

impl<E, A> Task<E, A>
where
    E: 'static,
    A: 'static,
{
    /// Wraps a computation. The cleanup defaults to a no-op and the
    /// scheduler to [`MicrotaskQueue::current`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::{CancelState, Task};
    ///
    /// let task: Task<String, i32> = Task::new(|_reject, resolve| {
    ///     resolve(42);
    ///     CancelState::none()
    /// });
    /// ```
    pub fn new<F>(computation: F) -> Self
    where
        F: Fn(Reject<E>, Resolve<A>) -> CancelState + 'static,
    {
        Self {
            computation: Rc::new(computation),
            cleanup: Rc::new(|_: CancelState| {}),
            scheduler: Rc::new(MicrotaskQueue::current()),
        }
    }

    /// Replaces the cleanup function.
    #[must_use]
    pub fn with_cleanup<F>(self, cleanup: F) -> Self
    where
        F: Fn(CancelState) + 'static,
    {
        Self {
            cleanup: Rc::new(cleanup),
            ..self
        }
    }

    /// Replaces the scheduler used to defer combinator cleanup.
    ///
    /// `ap` and `concat` use the scheduler of the task they are called on.
    #[must_use]
    pub fn with_scheduler<S>(self, scheduler: S) -> Self
    where
        S: Scheduler + 'static,
    {
        Self {
            scheduler: Rc::new(scheduler),
            ..self
        }
    }

    /// A task that resolves with `value`.
    pub fn of(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |_, resolve| {
            resolve(value.clone());
            CancelState::none()
        })
    }

    /// Alias of [`Task::of`].
    pub fn resolve(value: A) -> Self
    where
        A: Clone,
    {
        Self::of(value)
    }

    /// A task that rejects with `error`.
    pub fn reject(error: E) -> Self
    where
        E: Clone,
    {
        Self::new(move |reject, _| {
            reject(error.clone());
            CancelState::none()
        })
    }

    /// A task that never settles.
    ///
    /// `concat` with it behaves as an identity for tasks that do settle, but
    /// it is not a lawful monoid unit: a combination of two `empty` tasks
    /// never terminates.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(|_, _| CancelState::none())
    }

    /// Starts one execution.
    ///
    /// Only the first settlement reaches the callbacks. The returned state
    /// is what [`Task::clean_up`] expects once the execution's resources
    /// may be released.
    pub fn run<F, G>(&self, on_rejected: F, on_resolved: G) -> CancelState
    where
        F: Fn(E) + 'static,
        G: Fn(A) + 'static,
    {
        let (reject, resolve) = settle_once(
            move |error: E| {
                tracing::trace!("task rejected");
                on_rejected(error);
            },
            move |value: A| {
                tracing::trace!("task resolved");
                on_resolved(value);
            },
        );
        tracing::trace!("task started");
        (self.computation)(reject, resolve)
    }

    /// Starts one execution, routing the outcome to `on_rejected` or
    /// `on_resolved`.
    pub fn fold<F, G>(&self, on_rejected: F, on_resolved: G) -> CancelState
    where
        F: Fn(E) + 'static,
        G: Fn(A) + 'static,
    {
        self.run(on_rejected, on_resolved)
    }

    /// Starts one execution, dispatching the outcome to the handler named
    /// after its channel.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    /// use kleisli::effect::{Task, TaskCases};
    ///
    /// let seen = Rc::new(Cell::new(0));
    /// let sink = Rc::clone(&seen);
    /// Task::<String, i32>::resolve(7).cata(TaskCases {
    ///     rejected: |_: String| {},
    ///     resolved: move |value| sink.set(value),
    /// });
    /// assert_eq!(seen.get(), 7);
    /// ```
    pub fn cata<F, G>(&self, cases: TaskCases<F, G>) -> CancelState
    where
        F: Fn(E) + 'static,
        G: Fn(A) + 'static,
    {
        self.run(cases.rejected, cases.resolved)
    }

    /// Releases the resources of one execution.
    pub fn clean_up(&self, state: CancelState) {
        (self.cleanup)(state);
    }

    /// Transforms the resolved value.
    #[must_use]
    pub fn map<B, F>(self, function: F) -> Task<E, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        self.bimap(|error| error, function)
    }

    /// Transforms the rejection value.
    #[must_use]
    pub fn map_rejected<F2, F>(self, function: F) -> Task<F2, A>
    where
        F: Fn(E) -> F2 + 'static,
        F2: 'static,
    {
        self.bimap(function, |value| value)
    }

    /// Transforms the rejection with `on_rejected` or the resolution with
    /// `on_resolved`; each stays on its own channel.
    #[must_use]
    pub fn bimap<F2, B, F, G>(self, on_rejected: F, on_resolved: G) -> Task<F2, B>
    where
        F: Fn(E) -> F2 + 'static,
        G: Fn(A) -> B + 'static,
        F2: 'static,
        B: 'static,
    {
        let computation = self.computation;
        let on_rejected = Rc::new(on_rejected);
        let on_resolved = Rc::new(on_resolved);
        Task {
            computation: Rc::new(move |reject: Reject<F2>, resolve: Resolve<B>| {
                let on_rejected = Rc::clone(&on_rejected);
                let on_resolved = Rc::clone(&on_resolved);
                let (mapped_reject, mapped_resolve) = settle_once(
                    move |error: E| reject(on_rejected(error)),
                    move |value: A| resolve(on_resolved(value)),
                );
                computation(mapped_reject, mapped_resolve)
            }),
            cleanup: self.cleanup,
            scheduler: self.scheduler,
        }
    }

    /// Exchanges the reject and resolve channels.
    #[must_use]
    pub fn swap(self) -> Task<A, E> {
        let computation = self.computation;
        Task {
            computation: Rc::new(move |reject: Reject<A>, resolve: Resolve<E>| {
                computation(resolve, reject)
            }),
            cleanup: self.cleanup,
            scheduler: self.scheduler,
        }
    }

    /// Chains a task built from the resolved value.
    ///
    /// The cleanup of the chained task releases this task's state and, once
    /// it has started, the state of the task `function` returned.
    #[must_use]
    pub fn flat_map<B, F>(self, function: F) -> Task<E, B>
    where
        F: Fn(A) -> Task<E, B> + 'static,
        B: 'static,
    {
        let computation = self.computation;
        let function = Rc::new(function);
        Task {
            computation: Rc::new(move |reject: Reject<E>, resolve: Resolve<B>| {
                let chain = Chain::default();
                let function = Rc::clone(&function);
                let links = chain.clone();
                let next_reject = Rc::clone(&reject);
                let (first_reject, first_resolve) = settle_once(
                    move |error: E| reject(error),
                    move |value: A| {
                        let next = function(value);
                        let state = (next.computation)(Rc::clone(&next_reject), Rc::clone(&resolve));
                        links.store_next(state, Rc::clone(&next.cleanup));
                    },
                );
                chain.store_first(computation(first_reject, first_resolve));
                CancelState::new(chain)
            }),
            cleanup: release_chain(self.cleanup),
            scheduler: self.scheduler,
        }
    }

    /// Recovers from a rejection with a task built from the rejection
    /// value. A resolution passes through unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::cell::RefCell;
    /// use std::rc::Rc;
    /// use kleisli::effect::Task;
    ///
    /// let outcome = Rc::new(RefCell::new(String::new()));
    /// let sink = Rc::clone(&outcome);
    /// Task::<String, String>::reject("e".to_string())
    ///     .or_else(|error| Task::resolve(format!("{error}!")))
    ///     .run(|_: String| {}, move |value| *sink.borrow_mut() = value);
    /// assert_eq!(*outcome.borrow(), "e!");
    /// ```
    #[must_use]
    pub fn or_else<F2, F>(self, function: F) -> Task<F2, A>
    where
        F: Fn(E) -> Task<F2, A> + 'static,
        F2: 'static,
    {
        let computation = self.computation;
        let function = Rc::new(function);
        Task {
            computation: Rc::new(move |reject: Reject<F2>, resolve: Resolve<A>| {
                let chain = Chain::default();
                let function = Rc::clone(&function);
                let links = chain.clone();
                let next_resolve = Rc::clone(&resolve);
                let (recover, first_resolve) = settle_once(
                    move |error: E| {
                        let next = function(error);
                        let state = (next.computation)(Rc::clone(&reject), Rc::clone(&next_resolve));
                        links.store_next(state, Rc::clone(&next.cleanup));
                    },
                    move |value: A| resolve(value),
                );
                chain.store_first(computation(recover, first_resolve));
                CancelState::new(chain)
            }),
            cleanup: release_chain(self.cleanup),
            scheduler: self.scheduler,
        }
    }

    /// Races `self` against `other`.
    ///
    /// Both computations start immediately. The combination settles with
    /// whichever settles first; both branch states are then released on
    /// the next scheduler tick.
    #[must_use]
    pub fn concat(self, other: Self) -> Self {
        let computations = [self.computation, other.computation];
        let cleanups: Rc<[Cleanup; 2]> = Rc::new([self.cleanup, other.cleanup]);
        let scheduler = self.scheduler;
        let run_scheduler = Rc::clone(&scheduler);
        Self {
            computation: Rc::new(move |reject: Reject<E>, resolve: Resolve<A>| {
                let branches = Branches::new(Rc::clone(&cleanups));
                let (race_reject, race_resolve) = {
                    let reject_branches = branches.clone();
                    let resolve_branches = branches.clone();
                    let reject_scheduler = Rc::clone(&run_scheduler);
                    let resolve_scheduler = Rc::clone(&run_scheduler);
                    settle_once(
                        move |error: E| {
                            reject_branches.request_release(reject_scheduler.as_ref());
                            reject(error);
                        },
                        move |value: A| {
                            resolve_branches.request_release(resolve_scheduler.as_ref());
                            resolve(value);
                        },
                    )
                };
                for (index, computation) in computations.iter().enumerate() {
                    let state = computation(Rc::clone(&race_reject), Rc::clone(&race_resolve));
                    branches.store(index, state);
                }
                CancelState::new(branches)
            }),
            cleanup: release_branches(),
            scheduler,
        }
    }

    /// Returns `true` if both values wrap the same computation.
    pub fn equals(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.computation, &other.computation)
    }

    /// Returns `true` if `value` is a `Task<E, A>`.
    pub fn is(value: &dyn Any) -> bool {
        value.is::<Self>()
    }

    /// Converts the task into a future of its outcome.
    ///
    /// The task starts on the first poll. Its cleanup runs once the outcome
    /// has been delivered or the future is dropped. A task that never
    /// settles yields a future that never completes.
    pub fn into_future(self) -> impl Future<Output = Result<A, E>> {
        async move {
            let (sender, receiver) = oneshot::channel();
            let sender = Rc::new(RefCell::new(Some(sender)));
            let reject_sender = Rc::clone(&sender);
            let state = self.run(
                move |error| {
                    if let Some(sender) = reject_sender.borrow_mut().take() {
                        let _ = sender.send(Err(error));
                    }
                },
                move |value| {
                    if let Some(sender) = sender.borrow_mut().take() {
                        let _ = sender.send(Ok(value));
                    }
                },
            );
            let _release = ReleaseOnDrop {
                cleanup: Rc::clone(&self.cleanup),
                state: Some(state),
            };
            match receiver.await {
                Ok(outcome) => outcome,
                Err(oneshot::Canceled) => futures::future::pending().await,
            }
        }
    }
}

impl<E, F> Task<E, F>
where
    E: 'static,
    F: 'static,
{
    /// Applies the function `self` resolves with to the value `other`
    /// resolves with.
    ///
    /// Both computations start immediately. The combination resolves once
    /// both have resolved and rejects with the first rejection; both
    /// branch states are then released on the next scheduler tick.
    #[must_use]
    pub fn ap<B, C>(self, other: Task<E, B>) -> Task<E, C>
    where
        F: FnOnce(B) -> C,
        B: 'static,
        C: 'static,
    {
        let this_computation = self.computation;
        let that_computation = other.computation;
        let cleanups: Rc<[Cleanup; 2]> = Rc::new([self.cleanup, other.cleanup]);
        let scheduler = self.scheduler;
        let run_scheduler = Rc::clone(&scheduler);
        Task {
            computation: Rc::new(move |reject: Reject<E>, resolve: Resolve<C>| {
                let branches = Branches::new(Rc::clone(&cleanups));
                let join = Rc::new(RefCell::new(Join::<F, B>::default()));
                let join_reject: Reject<E> = {
                    let join = Rc::clone(&join);
                    let branches = branches.clone();
                    let scheduler = Rc::clone(&run_scheduler);
                    Rc::new(move |error: E| {
                        if join.borrow_mut().settle() {
                            branches.request_release(scheduler.as_ref());
                            reject(error);
                        }
                    })
                };
                let complete: Rc<dyn Fn()> = {
                    let join = Rc::clone(&join);
                    let branches = branches.clone();
                    let scheduler = Rc::clone(&run_scheduler);
                    Rc::new(move || {
                        let loaded = join.borrow_mut().take_loaded();
                        if let Some((function, value)) = loaded {
                            branches.request_release(scheduler.as_ref());
                            resolve(function(value));
                        }
                    })
                };
                let on_function: Resolve<F> = {
                    let join = Rc::clone(&join);
                    let complete = Rc::clone(&complete);
                    Rc::new(move |function: F| {
                        if join.borrow_mut().load_function(function) {
                            complete();
                        }
                    })
                };
                let on_value: Resolve<B> = {
                    let join = Rc::clone(&join);
                    Rc::new(move |value: B| {
                        if join.borrow_mut().load_value(value) {
                            complete();
                        }
                    })
                };
                let this_state = this_computation(Rc::clone(&join_reject), on_function);
                branches.store(0, this_state);
                let that_state = that_computation(join_reject, on_value);
                branches.store(1, that_state);
                CancelState::new(branches)
            }),
            cleanup: release_branches(),
            scheduler,
        }
    }
}

impl<E, A> Task<E, Task<E, A>>
where
    E: 'static,
    A: 'static,
{
    /// Collapses one level of nesting.
    #[must_use]
    pub fn flatten(self) -> Task<E, A> {
        self.flat_map(|inner| inner)
    }
}

/// Join state of `ap` for one execution.
struct Join<F, B> {
    function: Option<F>,
    value: Option<B>,
    settled: bool,
}

impl<F, B> Default for Join<F, B> {
    fn default() -> Self {
        Self {
            function: None,
            value: None,
            settled: false,
        }
    }
}

impl<F, B> Join<F, B> {
    /// Marks the join settled; returns `false` if it already was.
    fn settle(&mut self) -> bool {
        !std::mem::replace(&mut self.settled, true)
    }

    fn load_function(&mut self, function: F) -> bool {
        if self.settled || self.function.is_some() {
            return false;
        }
        self.function = Some(function);
        true
    }

    fn load_value(&mut self, value: B) -> bool {
        if self.settled || self.value.is_some() {
            return false;
        }
        self.value = Some(value);
        true
    }

    fn take_loaded(&mut self) -> Option<(F, B)> {
        if self.settled || self.function.is_none() || self.value.is_none() {
            return None;
        }
        self.settled = true;
        self.function.take().zip(self.value.take())
    }
}

/// Builds the callback pair of one invocation: whichever fires first is
/// passed on, every later call to either callback is dropped.
fn settle_once<E, A, F, G>(on_rejected: F, on_resolved: G) -> (Reject<E>, Resolve<A>)
where
    E: 'static,
    A: 'static,
    F: Fn(E) + 'static,
    G: Fn(A) + 'static,
{
    let settled = Rc::new(Cell::new(false));
    let reject_settled = Rc::clone(&settled);
    let reject: Reject<E> = Rc::new(move |error: E| {
        if reject_settled.replace(true) {
            tracing::debug!("ignoring rejection of a settled task");
            return;
        }
        on_rejected(error);
    });
    let resolve: Resolve<A> = Rc::new(move |value: A| {
        if settled.replace(true) {
            tracing::debug!("ignoring resolution of a settled task");
            return;
        }
        on_resolved(value);
    });
    (reject, resolve)
}

/// Cleanup of a chained task: releases the first state with
/// `first_cleanup` and the continuation's state with its own cleanup.
fn release_chain(first_cleanup: Cleanup) -> Cleanup {
    Rc::new(move |state: CancelState| {
        if let Some(chain) = state.downcast::<Chain>() {
            chain.release(&first_cleanup);
        }
    })
}

/// Cleanup of a combined task: releases whatever branch states remain.
fn release_branches() -> Cleanup {
    Rc::new(|state: CancelState| {
        if let Some(branches) = state.downcast::<Branches>() {
            branches.release();
        }
    })
}

struct ReleaseOnDrop {
    cleanup: Cleanup,
    state: Option<CancelState>,
}

impl Drop for ReleaseOnDrop {
    fn drop(&mut self) {
        if let Some(state) = self.state.take() {
            (self.cleanup)(state);
        }
    }
}

impl<E, A> Clone for Task<E, A>
where
    E: 'static,
    A: 'static,
{
    fn clone(&self) -> Self {
        Self {
            computation: Rc::clone(&self.computation),
            cleanup: Rc::clone(&self.cleanup),
            scheduler: Rc::clone(&self.scheduler),
        }
    }
}

impl<E, A> fmt::Display for Task<E, A>
where
    E: 'static,
    A: 'static,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Task")
    }
}

impl<E, A> fmt::Debug for Task<E, A>
where
    E: 'static,
    A: 'static,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Task").finish_non_exhaustive()
    }
}

static_assertions::assert_not_impl_any!(Task<String, i32>: Send, Sync);
