//! Function-backed monads: deferred, stateful and asynchronous computations.
//!
//! - [`IO`]: a re-runnable thunk with deferred side effects
//! - [`State`]: a transition threading a state through a computation
//! - [`Task`]: a cancellable computation with a reject and a resolve
//!   channel, combined concurrently by `ap` (join) and `concat` (race)
//!
//! All three wrap an `Rc` of a closure and are single-threaded: they are
//! neither `Send` nor `Sync`.
//!
//! # Examples
//!
//! ```rust
//! use kleisli::effect::{IO, State};
//!
//! let io = IO::of(10).map(|x| x * 2);
//! assert_eq!(io.run(), 20);
//!
//! let counter = State::modify(|count: u32| count + 1)
//!     .then(State::modify(|count: u32| count + 1))
//!     .then(State::get());
//! assert_eq!(counter.run(0), 2);
//! ```

mod io;
mod state;
mod task;

pub use io::IO;
pub use state::State;
#[cfg(feature = "tokio")]
pub use task::LocalSpawner;
pub use task::{CancelState, Job, MicrotaskQueue, Reject, Resolve, Scheduler, Task, TaskCases};
