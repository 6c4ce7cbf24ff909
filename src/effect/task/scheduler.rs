//! Deferred execution for Task cleanup.
//!
//! `ap` and `concat` never release a branch's resources inside the callback
//! that settled the combination. They hand a [`Job`] to a [`Scheduler`],
//! which runs it on the next tick of whatever loop drives the tasks.
//!
//! - [`MicrotaskQueue`]: a FIFO drained explicitly with
//!   [`MicrotaskQueue::run_pending`]. Every `Task` uses the per-thread
//!   [`MicrotaskQueue::current`] unless told otherwise.
//! - `LocalSpawner` (feature `tokio`): spawns each job onto the current
//!   tokio `LocalSet`.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

/// A unit of deferred work.
pub type Job = Box<dyn FnOnce()>;

/// Runs jobs after the current synchronous call stack has returned.
pub trait Scheduler {
    /// Queues `job` for a later tick. Implementations must not run it
    /// before returning.
    fn defer(&self, job: Job);
}

thread_local! {
    static CURRENT_QUEUE: MicrotaskQueue = MicrotaskQueue::new();
}

/// A FIFO of deferred jobs shared by all of its clones.
///
/// # Examples
///
/// ```rust
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use kleisli::effect::{MicrotaskQueue, Scheduler};
///
/// let queue = MicrotaskQueue::new();
/// let ran = Rc::new(Cell::new(false));
/// let flag = Rc::clone(&ran);
/// queue.defer(Box::new(move || flag.set(true)));
///
/// assert!(!ran.get());
/// assert_eq!(queue.run_pending(), 1);
/// assert!(ran.get());
/// ```
#[derive(Clone, Default)]
pub struct MicrotaskQueue {
    jobs: Rc<RefCell<VecDeque<Job>>>,
}

impl MicrotaskQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns this thread's default queue.
    #[must_use]
    pub fn current() -> Self {
        CURRENT_QUEUE.with(Clone::clone)
    }

    /// Runs queued jobs until the queue is empty, including jobs queued by
    /// the jobs themselves, and returns how many ran.
    pub fn run_pending(&self) -> usize {
        let mut count = 0;
        loop {
            // The borrow ends before the job runs so it can queue more work.
            let next = self.jobs.borrow_mut().pop_front();
            let Some(job) = next else {
                break;
            };
            job();
            count += 1;
        }
        if count > 0 {
            tracing::trace!(count, "drained deferred jobs");
        }
        count
    }

    /// Returns the number of queued jobs.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.jobs.borrow().len()
    }
}

impl Scheduler for MicrotaskQueue {
    fn defer(&self, job: Job) {
        self.jobs.borrow_mut().push_back(job);
    }
}

impl fmt::Debug for MicrotaskQueue {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("MicrotaskQueue")
            .field("pending", &self.pending())
            .finish()
    }
}

/// Defers jobs onto the current tokio `LocalSet`.
///
/// `defer` must be called from inside a `LocalSet` context; spawning a
/// local task anywhere else panics in tokio.
#[cfg(feature = "tokio")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalSpawner;

#[cfg(feature = "tokio")]
impl Scheduler for LocalSpawner {
    fn defer(&self, job: Job) {
        drop(tokio::task::spawn_local(async move { job() }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn queue_runs_in_fifo_order() {
        let queue = MicrotaskQueue::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        for index in 0..3 {
            let log = Rc::clone(&log);
            queue.defer(Box::new(move || log.borrow_mut().push(index)));
        }
        assert_eq!(queue.pending(), 3);
        assert_eq!(queue.run_pending(), 3);
        assert_eq!(*log.borrow(), vec![0, 1, 2]);
    }

    #[rstest]
    fn queue_drains_jobs_queued_while_draining() {
        let queue = MicrotaskQueue::new();
        let count = Rc::new(Cell::new(0));
        let inner_queue = queue.clone();
        let inner_count = Rc::clone(&count);
        queue.defer(Box::new(move || {
            let inner_count = Rc::clone(&inner_count);
            inner_queue.defer(Box::new(move || inner_count.set(inner_count.get() + 1)));
        }));
        assert_eq!(queue.run_pending(), 2);
        assert_eq!(count.get(), 1);
        assert_eq!(queue.pending(), 0);
    }

    #[rstest]
    fn current_queue_is_shared_per_thread() {
        let first = MicrotaskQueue::current();
        first.run_pending();
        first.defer(Box::new(|| {}));
        assert_eq!(MicrotaskQueue::current().pending(), 1);
        assert_eq!(first.run_pending(), 1);
    }
}
