//! Unit tests for IO<A>.
//!
//! IO wraps a thunk: building an IO runs nothing, and every `run` executes
//! the thunk again.

#![cfg(feature = "effect")]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use kleisli::control::{Either, Maybe};
use kleisli::effect::IO;
use kleisli::typeclass::Semigroup;
use rstest::rstest;

fn counted(counter: &Rc<Cell<u32>>, value: i32) -> IO<i32> {
    let counter = Rc::clone(counter);
    IO::new(move || {
        counter.set(counter.get() + 1);
        value
    })
}

#[rstest]
fn new_defers_and_run_repeats() {
    let runs = Rc::new(Cell::new(0));
    let io = counted(&runs, 1);
    assert_eq!(runs.get(), 0);
    assert_eq!(io.run(), 1);
    assert_eq!(io.perform_io(), 1);
    assert_eq!(runs.get(), 2);
}

#[rstest]
fn map_is_lazy() {
    let runs = Rc::new(Cell::new(0));
    let mapped = counted(&runs, 20).map(|x| x + 1).map(|x| x * 2);
    assert_eq!(runs.get(), 0);
    assert_eq!(mapped.run(), 42);
    assert_eq!(runs.get(), 1);
}

#[rstest]
fn flat_map_runs_the_chain_when_built() {
    let runs = Rc::new(Cell::new(0));
    let inner_runs = Rc::clone(&runs);
    let chained = counted(&runs, 2).flat_map(move |x| counted(&inner_runs, x * 10));
    assert_eq!(runs.get(), 2);
    assert_eq!(chained.run(), 20);
    assert_eq!(chained.run(), 20);
    assert_eq!(runs.get(), 2);
}

#[rstest]
fn ap_replaces_each_payload_with_the_thunk_result() {
    let io = IO::of("done");
    assert_eq!(io.ap(Maybe::of(1)), Maybe::of("done"));
    assert_eq!(io.ap(Maybe::<i32>::None), Maybe::None);
    assert_eq!(io.ap(Some(())), Some("done"));
}

#[rstest]
fn concat_runs_both_in_order_and_keeps_the_second() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let first_log = Rc::clone(&log);
    let second_log = Rc::clone(&log);
    let first = IO::new(move || first_log.borrow_mut().push("first"));
    let second = IO::new(move || {
        second_log.borrow_mut().push("second");
        7
    });
    let combined = first.concat(second);
    assert!(log.borrow().is_empty());
    assert_eq!(combined.run(), 7);
    assert_eq!(*log.borrow(), vec!["first", "second"]);
}

#[rstest]
fn semigroup_combine_matches_concat() {
    let combined = IO::of(1).combine(IO::of(2));
    assert_eq!(combined.run(), 2);
}

#[rstest]
fn map2_combines_both_results() {
    let sum = IO::of(3).map2(&IO::of(4), |a, b| a + b);
    assert_eq!(sum.run(), 7);
}

#[rstest]
fn fold_hands_result_to_function() {
    assert_eq!(IO::of(3).fold(|x| x.to_string()), "3");
}

#[rstest]
fn flatten_returns_the_inner_io() {
    let nested = IO::new(|| IO::of(5));
    assert_eq!(nested.flatten().run(), 5);
}

#[rstest]
fn try_run_and_from_io_capture_panics() {
    let failing: IO<i32> = IO::new(|| panic!("disk full"));
    assert!(failing.try_run().is_err());
    assert_eq!(Either::from_io(&failing), Either::Left("disk full".to_string()));
    assert_eq!(Either::from_io(&IO::of(1)), Either::Right(1));
}

#[rstest]
fn equals_compares_identity() {
    let io = IO::of(1);
    let same = io.clone();
    assert!(io.equals(&same));
    assert!(!io.equals(&IO::of(1)));
}

#[rstest]
fn is_and_display() {
    let io = IO::of(1);
    assert!(IO::<i32>::is(&io));
    assert!(!IO::<i32>::is(&1));
    assert_eq!(io.to_string(), "IO");
}
