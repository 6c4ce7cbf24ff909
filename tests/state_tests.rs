//! Unit tests for State<S, A>.
//!
//! State threads a value through a chain of transitions; nothing runs until
//! `compute`, `run` or `exec` supplies the initial state.

#![cfg(feature = "effect")]

use kleisli::effect::State;
use rstest::rstest;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Stack {
    items: Vec<i32>,
}

fn push(item: i32) -> State<Stack, ()> {
    State::modify(move |mut stack: Stack| {
        stack.items.push(item);
        stack
    })
}

fn pop() -> State<Stack, Option<i32>> {
    State::new(|mut stack: Stack| {
        let top = stack.items.pop();
        (top, stack)
    })
}

#[rstest]
#[case(10, 11)]
#[case(0, 1)]
fn modify_then_exec_returns_new_state(#[case] initial: i32, #[case] expected: i32) {
    assert_eq!(State::modify(|x: i32| x + 1).exec(initial), expected);
}

#[rstest]
fn stack_program_threads_state() {
    let program = push(1)
        .then(push(2))
        .then(push(3))
        .then(pop())
        .flat_map(|top| pop().map(move |second| (top, second)));
    let (value, final_state) = program.compute(Stack { items: Vec::new() });
    assert_eq!(value, (Some(3), Some(2)));
    assert_eq!(final_state, Stack { items: vec![1] });
}

#[rstest]
fn program_is_rerunnable() {
    let program = push(5).then(pop());
    let empty = Stack { items: Vec::new() };
    assert_eq!(program.run(empty.clone()), Some(5));
    assert_eq!(program.run(empty), Some(5));
}

#[rstest]
fn ap_runs_function_state_first() {
    let log_then_add = State::new(|log: Vec<&'static str>| {
        let mut log = log;
        log.push("function");
        (|x: i32| x + 1, log)
    });
    let value = State::new(|log: Vec<&'static str>| {
        let mut log = log;
        log.push("value");
        (41, log)
    });
    let (result, log) = log_then_add.ap(value).compute(Vec::new());
    assert_eq!(result, 42);
    assert_eq!(log, vec!["function", "value"]);
}

#[rstest]
fn map2_combines_in_order() {
    let first: State<i32, i32> = State::new(|s: i32| (s, s * 10));
    let second: State<i32, i32> = State::new(|s: i32| (s, s + 1));
    assert_eq!(first.map2(second, |a, b| (a, b)).compute(2), ((2, 20), 21));
}

#[rstest]
fn gets_projects_without_changing_state() {
    let depth: State<Stack, usize> = State::gets(|stack: &Stack| stack.items.len());
    let stack = Stack { items: vec![1, 2] };
    assert_eq!(depth.compute(stack.clone()), (2, stack));
}

#[rstest]
fn is_checks_runtime_type() {
    let state: State<i32, i32> = State::of(1);
    assert!(State::<i32, i32>::is(&state));
    assert!(!State::<i32, String>::is(&state));
}
