//! IO Monad - deferred side effect handling.
//!
//! `IO<A>` wraps a thunk, not a value. Nothing happens when an `IO` is built
//! or mapped; the thunk runs when the caller invokes [`IO::run`] (or its
//! alias [`IO::perform_io`], or [`IO::fold`]). Every run executes the whole
//! composition again: results are never cached.
//!
//! [`IO::flat_map`] is the exception to the laziness of composition: it
//! executes `self` and the `IO` returned by the continuation at call time.
//!
//! # Examples
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use kleisli::effect::IO;
//!
//! let counter = Rc::new(Cell::new(0));
//! let tick = {
//!     let counter = Rc::clone(&counter);
//!     IO::new(move || {
//!         counter.set(counter.get() + 1);
//!         counter.get()
//!     })
//! };
//!
//! let doubled = tick.map(|n| n * 2);
//! assert_eq!(counter.get(), 0);
//! assert_eq!(doubled.run(), 2);
//! assert_eq!(doubled.run(), 4);
//! ```

use std::any::Any;
use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::rc::Rc;

use crate::control::{Either, panic_message};
use crate::typeclass::{Functor, Semigroup};

/// A deferred, re-runnable computation producing an `A`.
pub struct IO<A> {
    run_io: Rc<dyn Fn() -> A>,
}

impl<A: 'static> IO<A> {
    /// Wraps a thunk without running it.
    pub fn new<F>(action: F) -> Self
    where
        F: Fn() -> A + 'static,
    {
        Self {
            run_io: Rc::new(action),
        }
    }

    /// Lifts a value; every run yields a clone of it.
    pub fn of(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move || value.clone())
    }

    /// Executes the thunk.
    pub fn run(&self) -> A {
        (self.run_io)()
    }

    /// Alias of [`IO::run`].
    pub fn perform_io(&self) -> A {
        self.run()
    }

    /// Executes the thunk and hands the result to `function`.
    pub fn fold<B, F>(&self, function: F) -> B
    where
        F: FnOnce(A) -> B,
    {
        function(self.run())
    }

    /// Composes `function` after the thunk without running anything.
    #[must_use]
    pub fn map<B, F>(self, function: F) -> IO<B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let run_io = self.run_io;
        IO::new(move || function(run_io()))
    }

    /// Uses this IO's thunk as the mapper of `functor`: each payload of
    /// `functor` is replaced by the result of running this IO.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Maybe;
    /// use kleisli::effect::IO;
    ///
    /// let greeting = IO::new(|| "hello");
    /// assert_eq!(greeting.ap(Maybe::of(1)), Maybe::of("hello"));
    /// assert!(greeting.ap(Maybe::<i32>::none()).is_none());
    /// ```
    pub fn ap<G>(&self, functor: G) -> G::WithType<A>
    where
        G: Functor,
    {
        let run_io = Rc::clone(&self.run_io);
        functor.fmap(move |_| run_io())
    }

    /// Runs `self`, passes the result to `function` and runs the returned
    /// IO immediately. The outcome is wrapped in a new IO that yields it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    /// use kleisli::effect::IO;
    ///
    /// let runs = Rc::new(Cell::new(0));
    /// let counted = Rc::clone(&runs);
    /// let chained = IO::of(3).flat_map(move |n| {
    ///     counted.set(counted.get() + 1);
    ///     IO::of(n * 2)
    /// });
    /// assert_eq!(runs.get(), 1);
    /// assert_eq!(chained.run(), 6);
    /// assert_eq!(runs.get(), 1);
    /// ```
    #[must_use]
    pub fn flat_map<B, F>(self, function: F) -> IO<B>
    where
        F: FnOnce(A) -> IO<B>,
        B: Clone + 'static,
    {
        IO::of(function(self.run()).run())
    }

    /// Runs both thunks in sequence and yields the second result.
    #[must_use]
    pub fn concat<B: 'static>(&self, other: IO<B>) -> IO<B> {
        let first = Rc::clone(&self.run_io);
        IO::new(move || {
            first();
            (other.run_io)()
        })
    }

    /// Runs both thunks in sequence and combines their results.
    #[must_use]
    pub fn map2<B, C, F>(&self, other: &IO<B>, function: F) -> IO<C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        let first = Rc::clone(&self.run_io);
        let second = Rc::clone(&other.run_io);
        IO::new(move || {
            let a = first();
            function(a, second())
        })
    }

    /// Executes the thunk, capturing a panic.
    ///
    /// The captured panic payload itself is returned on failure.
    ///
    /// # Errors
    ///
    /// Returns the panic payload if the thunk panics.
    pub fn try_run(&self) -> Result<A, Box<dyn Any + Send>> {
        catch_unwind(AssertUnwindSafe(|| self.run()))
    }

    /// Returns `true` if both values wrap the same thunk.
    pub fn equals(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.run_io, &other.run_io)
    }

    /// Returns `true` if `value` is an `IO<A>`.
    pub fn is(value: &dyn Any) -> bool {
        value.is::<Self>()
    }
}

impl<A: 'static> IO<IO<A>> {
    /// Runs the outer thunk and returns the inner IO.
    pub fn flatten(&self) -> IO<A> {
        self.run()
    }
}

impl<R: 'static> Either<String, R> {
    /// Executes `io`, capturing a panic as `Left(message)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Either;
    /// use kleisli::effect::IO;
    ///
    /// let failing: IO<i32> = IO::new(|| panic!("disk full"));
    /// assert_eq!(Either::from_io(&failing), Either::Left("disk full".to_string()));
    /// ```
    pub fn from_io(io: &IO<R>) -> Self {
        match io.try_run() {
            Ok(value) => Self::Right(value),
            Err(payload) => Self::Left(panic_message(payload.as_ref())),
        }
    }
}

impl<A: 'static> Semigroup for IO<A> {
    fn combine(self, other: Self) -> Self {
        self.concat(other)
    }
}

impl<A> Clone for IO<A> {
    fn clone(&self) -> Self {
        Self {
            run_io: Rc::clone(&self.run_io),
        }
    }
}

impl<A> fmt::Display for IO<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "IO")
    }
}

impl<A> fmt::Debug for IO<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("IO").finish_non_exhaustive()
    }
}

static_assertions::assert_not_impl_any!(IO<i32>: Send, Sync);
