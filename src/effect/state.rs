//! `State`: computations threading a value through a sequence of steps.
//!
//! A `State<S, A>` wraps a transition `S -> (A, S)`. Composition threads the
//! state through each transition in order; nothing runs until the chain is
//! executed with [`State::compute`] (value and state), [`State::run`]
//! (value only) or [`State::exec`] (state only).
//!
//! # Type classes
//!
//! State provides its own `map`, `ap` and `flat_map` rather than
//! implementing the Functor/Applicative/Monad traits: the transition is a
//! shared `Rc<dyn Fn>`, so mapping functions must be `Fn` and are invoked
//! once per execution.
//!
//! # Laws
//!
//! - Get Put: `get().flat_map(put)` leaves the state unchanged
//! - Put Get: `put(s).then(get())` yields `s`
//! - Put Put: `put(s1).then(put(s2))` is `put(s2)`
//!
//! # Examples
//!
//! ```rust
//! use kleisli::effect::State;
//!
//! assert_eq!(State::modify(|x: i32| x + 1).exec(10), 11);
//! assert_eq!(State::<i32, i32>::get().run(7), 7);
//! assert_eq!(State::put(5).exec(0), 5);
//! ```

use std::any::Any;
use std::fmt;
use std::rc::Rc;

/// A computation threading a state of type `S` and producing an `A`.
pub struct State<S, A>
where
    S: 'static,
    A: 'static,
{
    transition: Rc<dyn Fn(S) -> (A, S)>,
}

impl<S, A> State<S, A>
where
    S: 'static,
    A: 'static,
{
    /// Wraps a transition function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::State;
    ///
    /// let step: State<i32, i32> = State::new(|s: i32| (s * 2, s + 1));
    /// assert_eq!(step.compute(10), (20, 11));
    /// ```
    pub fn new<F>(transition: F) -> Self
    where
        F: Fn(S) -> (A, S) + 'static,
    {
        Self {
            transition: Rc::new(transition),
        }
    }

    /// Yields `value` and leaves the state untouched.
    pub fn of(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |state| (value.clone(), state))
    }

    /// Executes the chain and returns both the value and the final state.
    pub fn compute(&self, initial_state: S) -> (A, S) {
        (self.transition)(initial_state)
    }

    /// Executes the chain and returns only the final value.
    pub fn run(&self, initial_state: S) -> A {
        let (value, _) = self.compute(initial_state);
        value
    }

    /// Executes the chain and returns only the final state.
    pub fn exec(&self, initial_state: S) -> S {
        let (_, final_state) = self.compute(initial_state);
        final_state
    }

    /// Transforms the value, passing the state through unchanged.
    #[must_use]
    pub fn map<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let transition = self.transition;
        State::new(move |state| {
            let (value, next_state) = transition(state);
            (function(value), next_state)
        })
    }

    /// Threads the state through `self`, then through the state produced by
    /// `function`.
    #[must_use]
    pub fn flat_map<B, F>(self, function: F) -> State<S, B>
    where
        F: Fn(A) -> State<S, B> + 'static,
        B: 'static,
    {
        let transition = self.transition;
        State::new(move |state| {
            let (value, intermediate_state) = transition(state);
            function(value).compute(intermediate_state)
        })
    }

    /// Sequences `next` after `self`, discarding the first value.
    #[must_use]
    pub fn then<B>(self, next: State<S, B>) -> State<S, B>
    where
        B: 'static,
    {
        self.flat_map(move |_| next.clone())
    }

    /// Runs `self` then `other`, combining both values.
    #[must_use]
    pub fn map2<B, C, F>(self, other: State<S, B>, function: F) -> State<S, C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        let first = self.transition;
        let second = other.transition;
        State::new(move |state| {
            let (a, intermediate_state) = first(state);
            let (b, final_state) = second(intermediate_state);
            (function(a, b), final_state)
        })
    }

    /// Returns `true` if both values wrap the same transition.
    pub fn equals(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.transition, &other.transition)
    }

    /// Returns `true` if `value` is a `State<S, A>`.
    pub fn is(value: &dyn Any) -> bool {
        value.is::<Self>()
    }

    /// Yields a projection of the current state without changing it.
    pub fn gets<F>(projection: F) -> Self
    where
        F: Fn(&S) -> A + 'static,
    {
        Self::new(move |state| {
            let value = projection(&state);
            (value, state)
        })
    }
}

impl<S, F> State<S, F>
where
    S: 'static,
    F: 'static,
{
    /// Applies the function produced by `self` to the value produced by
    /// `other`, threading the state through `self` first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::State;
    ///
    /// let add_state = State::new(|s: i32| (move |x: i32| x + s, s + 1));
    /// let applied = add_state.ap(State::new(|s: i32| (s * 10, s)));
    /// assert_eq!(applied.compute(1), (21, 2));
    /// ```
    #[must_use]
    pub fn ap<B, C>(self, other: State<S, B>) -> State<S, C>
    where
        F: FnOnce(B) -> C,
        B: 'static,
        C: 'static,
    {
        self.map2(other, |function, value| function(value))
    }
}

impl<S, A> State<S, State<S, A>>
where
    S: 'static,
    A: 'static,
{
    /// Collapses one level of nesting: runs the outer transition, then the
    /// inner state it produced.
    #[must_use]
    pub fn flatten(self) -> State<S, A> {
        self.flat_map(|inner| inner)
    }
}

impl<S> State<S, S>
where
    S: Clone + 'static,
{
    /// Yields the current state as the value.
    #[must_use]
    pub fn get() -> Self {
        Self::new(|state: S| (state.clone(), state))
    }
}

impl<S> State<S, ()>
where
    S: Clone + 'static,
{
    /// Ignores the incoming state and replaces it with `new_state`.
    pub fn put(new_state: S) -> Self {
        Self::new(move |_| ((), new_state.clone()))
    }

    /// Replaces the state with `modifier` applied to it.
    pub fn modify<F>(modifier: F) -> Self
    where
        F: Fn(S) -> S + 'static,
    {
        State::<S, S>::get().flat_map(move |state| Self::put(modifier(state)))
    }
}

impl<S, A> Clone for State<S, A>
where
    S: 'static,
    A: 'static,
{
    fn clone(&self) -> Self {
        Self {
            transition: Rc::clone(&self.transition),
        }
    }
}

impl<S, A> fmt::Display for State<S, A>
where
    S: 'static,
    A: 'static,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "State")
    }
}

impl<S, A> fmt::Debug for State<S, A>
where
    S: 'static,
    A: 'static,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("State").finish_non_exhaustive()
    }
}

static_assertions::assert_not_impl_any!(State<i32, i32>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn state_compute_returns_pair() {
        let step: State<i32, i32> = State::new(|s: i32| (s * 2, s + 1));
        assert_eq!(step.compute(10), (20, 11));
    }

    #[rstest]
    fn state_of_does_not_modify_state() {
        let state: State<i32, &str> = State::of("constant");
        assert_eq!(state.compute(42), ("constant", 42));
    }

    #[rstest]
    fn state_get_returns_current_state() {
        assert_eq!(State::<i32, i32>::get().run(7), 7);
    }

    #[rstest]
    fn state_put_replaces_state() {
        assert_eq!(State::put(5).exec(0), 5);
    }

    #[rstest]
    #[case(10, 11)]
    #[case(-1, 0)]
    fn state_modify_increments(#[case] initial: i32, #[case] expected: i32) {
        assert_eq!(State::modify(|x: i32| x + 1).exec(initial), expected);
    }

    #[rstest]
    fn state_map_passes_state_through() {
        let state: State<i32, i32> = State::new(|s: i32| (s, s));
        assert_eq!(state.map(|value| value * 2).compute(21), (42, 21));
    }

    #[rstest]
    fn state_flat_map_threads_state() {
        let state: State<i32, i32> = State::new(|s: i32| (s, s + 1));
        let chained = state.flat_map(|value| State::new(move |s: i32| (value + s, s)));
        assert_eq!(chained.compute(10), (21, 11));
    }

    #[rstest]
    fn state_flatten_runs_inner_state() {
        let nested: State<i32, State<i32, i32>> =
            State::new(|s: i32| (State::new(|inner: i32| (inner * 3, inner)), s + 1));
        assert_eq!(nested.flatten().compute(1), (6, 2));
    }

    #[rstest]
    fn state_gets_projects_state() {
        let length: State<String, usize> = State::gets(String::len);
        assert_eq!(length.compute("four".to_string()), (4, "four".to_string()));
    }

    #[rstest]
    fn state_put_get_law() {
        let state = State::put(9).then(State::get());
        assert_eq!(state.run(0), 9);
    }

    #[rstest]
    fn state_equals_compares_transition_identity() {
        let state: State<i32, i32> = State::get();
        assert!(state.equals(&state.clone()));
        assert!(!state.equals(&State::get()));
    }

    #[rstest]
    fn state_display() {
        assert_eq!(State::<i32, i32>::get().to_string(), "State");
    }
}
