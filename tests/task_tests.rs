//! Unit tests for Task<E, A> driven by a `MicrotaskQueue`.
//!
//! These tests settle tasks synchronously or by hand and drain the queue
//! explicitly, so every assertion about cleanup timing is deterministic.

#![cfg(feature = "effect")]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures::executor::block_on;
use kleisli::effect::{CancelState, MicrotaskQueue, Reject, Resolve, Task};
use rstest::rstest;

type Calls<E, A> = Rc<RefCell<(Vec<E>, Vec<A>)>>;

fn run_capturing<E: 'static, A: 'static>(task: &Task<E, A>) -> (Calls<E, A>, CancelState) {
    let calls: Calls<E, A> = Rc::new(RefCell::new((Vec::new(), Vec::new())));
    let rejected = Rc::clone(&calls);
    let resolved = Rc::clone(&calls);
    let state = task.run(
        move |error| rejected.borrow_mut().0.push(error),
        move |value| resolved.borrow_mut().1.push(value),
    );
    (calls, state)
}

/// Channels of a task that is settled from the test body.
struct Handle {
    reject: Rc<RefCell<Option<Reject<String>>>>,
    resolve: Rc<RefCell<Option<Resolve<i32>>>>,
    cleanups: Rc<Cell<u32>>,
}

impl Handle {
    fn resolve(&self, value: i32) {
        let resolve = self.resolve.borrow_mut().take().expect("task not started");
        resolve(value);
    }

    fn reject(&self, error: &str) {
        let reject = self.reject.borrow_mut().take().expect("task not started");
        reject(error.to_string());
    }
}

fn controlled() -> (Task<String, i32>, Handle) {
    let handle = Handle {
        reject: Rc::new(RefCell::new(None)),
        resolve: Rc::new(RefCell::new(None)),
        cleanups: Rc::new(Cell::new(0)),
    };
    let reject_slot = Rc::clone(&handle.reject);
    let resolve_slot = Rc::clone(&handle.resolve);
    let cleanups = Rc::clone(&handle.cleanups);
    let task = Task::new(move |reject, resolve| {
        *reject_slot.borrow_mut() = Some(reject);
        *resolve_slot.borrow_mut() = Some(resolve);
        CancelState::new("resource")
    })
    .with_cleanup(move |state: CancelState| {
        assert_eq!(state.downcast::<&str>(), Some("resource"));
        cleanups.set(cleanups.get() + 1);
    });
    (task, handle)
}

// =============================================================================
// Sequential composition
// =============================================================================

#[rstest]
fn resolve_map_flat_map_resolves_once_with_eight() {
    let task = Task::<String, i32>::resolve(3)
        .map(|x| x + 1)
        .flat_map(|x| Task::resolve(x * 2));
    let (calls, _) = run_capturing(&task);
    let (rejections, resolutions) = &*calls.borrow();
    assert!(rejections.is_empty());
    assert_eq!(resolutions, &vec![8]);
}

#[rstest]
fn rejection_skips_map_and_flat_map() {
    let mapped = Rc::new(Cell::new(false));
    let flag = Rc::clone(&mapped);
    let task = Task::<String, i32>::reject("boom".to_string())
        .map(move |x| {
            flag.set(true);
            x
        })
        .flat_map(|x| Task::resolve(x + 1));
    let (calls, _) = run_capturing(&task);
    assert_eq!(calls.borrow().0, vec!["boom".to_string()]);
    assert!(!mapped.get());
}

#[rstest]
fn or_else_recovers_from_rejection() {
    let task = Task::<String, usize>::reject("four".to_string())
        .or_else(|error| Task::<(), usize>::resolve(error.len()));
    let (calls, _) = run_capturing(&task);
    assert_eq!(calls.borrow().1, vec![4]);
}

#[rstest]
fn map_rejected_transforms_only_errors() {
    let task = Task::<String, i32>::reject("e".to_string()).map_rejected(|error| format!("wrapped {error}"));
    let (calls, _) = run_capturing(&task);
    assert_eq!(calls.borrow().0, vec!["wrapped e".to_string()]);
}

#[rstest]
fn fold_routes_outcomes() {
    let seen = Rc::new(Cell::new(0));
    let sink = Rc::clone(&seen);
    Task::<String, i32>::resolve(5).fold(|_| {}, move |value| sink.set(value));
    assert_eq!(seen.get(), 5);
}

#[rstest]
fn is_checks_runtime_type() {
    let task = Task::<String, i32>::resolve(1);
    assert!(Task::<String, i32>::is(&task));
    assert!(!Task::<String, u8>::is(&task));
}

// =============================================================================
// ap: join
// =============================================================================

#[rstest]
fn ap_waits_for_both_and_defers_cleanup() {
    let queue = MicrotaskQueue::new();
    let (function_side, function_handle) = controlled();
    let (value_side, value_handle) = controlled();
    let joined = function_side
        .map(|offset| move |value: i32| value + offset)
        .with_scheduler(queue.clone())
        .ap(value_side);
    let (calls, _) = run_capturing(&joined);

    function_handle.resolve(1);
    assert!(calls.borrow().1.is_empty());
    value_handle.resolve(41);
    assert_eq!(calls.borrow().1, vec![42]);

    assert_eq!(function_handle.cleanups.get(), 0);
    assert_eq!(value_handle.cleanups.get(), 0);
    queue.run_pending();
    assert_eq!(function_handle.cleanups.get(), 1);
    assert_eq!(value_handle.cleanups.get(), 1);
}

#[rstest]
fn ap_rejects_with_first_rejection_only() {
    let queue = MicrotaskQueue::new();
    let (function_side, function_handle) = controlled();
    let (value_side, value_handle) = controlled();
    let joined = function_side
        .map(|offset| move |value: i32| value + offset)
        .with_scheduler(queue.clone())
        .ap(value_side);
    let (calls, _) = run_capturing(&joined);

    value_handle.reject("first");
    function_handle.reject("second");
    let (rejections, resolutions) = &*calls.borrow();
    assert_eq!(rejections, &vec!["first".to_string()]);
    assert!(resolutions.is_empty());

    queue.run_pending();
    assert_eq!(function_handle.cleanups.get() + value_handle.cleanups.get(), 2);
}

#[rstest]
fn ap_of_immediate_tasks_resolves_synchronously() {
    let queue = MicrotaskQueue::new();
    let function = Task::<String, fn(i32) -> i32>::resolve(|x| x * 3).with_scheduler(queue.clone());
    let (calls, _) = run_capturing(&function.ap(Task::resolve(5)));
    assert_eq!(calls.borrow().1, vec![15]);
    assert_eq!(queue.run_pending(), 1);
}

// =============================================================================
// concat: race
// =============================================================================

#[rstest]
fn concat_settles_with_first_rejection() {
    let queue = MicrotaskQueue::new();
    let (first, first_handle) = controlled();
    let (second, second_handle) = controlled();
    let race = first.with_scheduler(queue.clone()).concat(second);
    let (calls, _) = run_capturing(&race);

    second_handle.reject("lost connection");
    first_handle.resolve(1);
    let (rejections, resolutions) = &*calls.borrow();
    assert_eq!(rejections, &vec!["lost connection".to_string()]);
    assert!(resolutions.is_empty());
}

#[rstest]
fn concat_cleanup_runs_after_callback_returns() {
    let queue = MicrotaskQueue::new();
    let (first, first_handle) = controlled();
    let (second, second_handle) = controlled();
    let race = first.with_scheduler(queue.clone()).concat(second);

    let cleanups_at_settlement = Rc::new(Cell::new(u32::MAX));
    let observed = Rc::clone(&cleanups_at_settlement);
    let first_cleanups = Rc::clone(&first_handle.cleanups);
    let second_cleanups = Rc::clone(&second_handle.cleanups);
    race.run(
        |_| {},
        move |_| observed.set(first_cleanups.get() + second_cleanups.get()),
    );

    first_handle.resolve(7);
    assert_eq!(cleanups_at_settlement.get(), 0);
    assert_eq!(queue.pending(), 1);
    queue.run_pending();
    assert_eq!(first_handle.cleanups.get(), 1);
    assert_eq!(second_handle.cleanups.get(), 1);
}

#[rstest]
fn concat_with_empty_keeps_the_other_outcome() {
    let queue = MicrotaskQueue::new();
    let left = Task::<String, i32>::empty().with_scheduler(queue.clone()).concat(Task::resolve(2));
    let right = Task::<String, i32>::resolve(2).with_scheduler(queue.clone()).concat(Task::empty());
    let (left_calls, _) = run_capturing(&left);
    let (right_calls, _) = run_capturing(&right);
    assert_eq!(left_calls.borrow().1, vec![2]);
    assert_eq!(right_calls.borrow().1, vec![2]);
    assert_eq!(queue.run_pending(), 2);
}

#[rstest]
fn empty_never_settles() {
    let (calls, state) = run_capturing(&Task::<String, i32>::empty());
    let (rejections, resolutions) = &*calls.borrow();
    assert!(rejections.is_empty());
    assert!(resolutions.is_empty());
    assert!(state.is_none());
}

#[rstest]
fn default_scheduler_is_the_thread_queue() {
    let current = MicrotaskQueue::current();
    current.run_pending();
    let (first, first_handle) = controlled();
    let (second, _second_handle) = controlled();
    let race = first.concat(second);
    let _ = run_capturing(&race);
    first_handle.resolve(1);
    assert_eq!(current.pending(), 1);
    assert_eq!(current.run_pending(), 1);
    assert_eq!(first_handle.cleanups.get(), 1);
}

// =============================================================================
// Futures
// =============================================================================

#[rstest]
fn into_future_yields_outcome_and_cleans_up() {
    let cleanups = Rc::new(Cell::new(0));
    let counted = Rc::clone(&cleanups);
    let task = Task::<String, i32>::resolve(9).with_cleanup(move |_| counted.set(counted.get() + 1));
    assert_eq!(block_on(task.into_future()), Ok(9));
    assert_eq!(cleanups.get(), 1);
}

#[rstest]
fn into_future_reports_rejection() {
    let task = Task::<String, i32>::reject("no".to_string()).map(|x| x + 1);
    assert_eq!(block_on(task.into_future()), Err("no".to_string()));
}

#[rstest]
fn dropping_an_unpolled_future_runs_nothing() {
    let started = Rc::new(Cell::new(false));
    let flag = Rc::clone(&started);
    let task: Task<String, i32> = Task::new(move |_, resolve| {
        flag.set(true);
        resolve(1);
        CancelState::none()
    });
    drop(task.into_future());
    assert!(!started.get());
}
