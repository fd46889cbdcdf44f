//! State-threading computations.
//!
//! A [`StateComputation<S, A>`] is a deferred, pure function `S -> (S, A)`.
//! Computations are built with [`unit`] and [`bind`] (plus a handful of derived
//! combinators) and nothing happens until [`run`] hands them a starting state.
//!
//! # Laws
//!
//! - Left identity: `bind(unit(x), f) ≡ f(x)`
//! - Right identity: `bind(m, unit) ≡ m`
//! - Associativity: `bind(bind(m, f), g) ≡ bind(m, |x| bind(f(x), g))`
//!
//! Two computations are equivalent when running them from the same state
//! yields the same final state and result.

use std::rc::Rc;

/// Label assigned to a tree node.
pub type Label = usize;

/// A deferred computation that threads a state of type `S` and yields an `A`.
///
/// Computations are cheap to clone: clones share the same underlying
/// function. Running a computation never changes it, so running it twice from
/// the same state gives the same answer.
///
/// # Example
///
/// ```rust
/// use treelabel::core::StateComputation;
///
/// let double_and_count = StateComputation::new(|count: u32| (count + 1, count * 2));
///
/// assert_eq!(double_and_count.run(10), (11, 20));
/// assert_eq!(double_and_count.run(10), (11, 20));
/// ```
pub struct StateComputation<S, A> {
    run_fn: Rc<dyn Fn(S) -> (S, A)>,
}

impl<S, A> Clone for StateComputation<S, A> {
    fn clone(&self) -> Self {
        Self {
            run_fn: Rc::clone(&self.run_fn),
        }
    }
}

impl<S: 'static, A: 'static> StateComputation<S, A> {
    /// Wrap a pure state transition function.
    ///
    /// The function receives the incoming state and returns the outgoing state
    /// together with the result.
    pub fn new<F>(transition: F) -> Self
    where
        F: Fn(S) -> (S, A) + 'static,
    {
        Self {
            run_fn: Rc::new(transition),
        }
    }

    /// Lift a plain value into a computation that leaves the state alone.
    pub fn unit(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |state| (state, value.clone()))
    }

    /// Sequence this computation into the one produced by `f`.
    ///
    /// When run with `s0`, this runs `self` to get `(s1, a)`, then runs `f(a)`
    /// with `s1` and returns its `(s2, b)`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use treelabel::core::{advance, unit};
    ///
    /// let pair = advance().bind(|first| advance().bind(move |second| unit((first, second))));
    ///
    /// assert_eq!(pair.run(5), (7, (5, 6)));
    /// ```
    pub fn bind<B, F>(self, f: F) -> StateComputation<S, B>
    where
        B: 'static,
        F: Fn(A) -> StateComputation<S, B> + 'static,
    {
        StateComputation::new(move |state| {
            let (state, value) = self.run(state);
            f(value).run(state)
        })
    }

    /// Transform the result, leaving the state threading untouched.
    pub fn map<B, F>(self, f: F) -> StateComputation<S, B>
    where
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        StateComputation::new(move |state| {
            let (state, value) = self.run(state);
            (state, f(value))
        })
    }

    /// Run `self`, discard its result, then run `next`.
    pub fn then<B>(self, next: StateComputation<S, B>) -> StateComputation<S, B>
    where
        B: 'static,
    {
        self.bind(move |_| next.clone())
    }

    /// Run `self` then `next`, combining both results with `f`.
    pub fn zip_with<B, C, F>(self, next: StateComputation<S, B>, f: F) -> StateComputation<S, C>
    where
        B: 'static,
        C: 'static,
        F: Fn(A, B) -> C + 'static,
    {
        StateComputation::new(move |state| {
            let (state, first) = self.run(state);
            let (state, second) = next.run(state);
            (state, f(first, second))
        })
    }

    /// Execute the computation from `initial`, returning the final state and
    /// the result.
    pub fn run(&self, initial: S) -> (S, A) {
        (self.run_fn)(initial)
    }

    /// Execute and keep only the result.
    pub fn eval(&self, initial: S) -> A {
        self.run(initial).1
    }

    /// Execute and keep only the final state.
    pub fn exec(&self, initial: S) -> S {
        self.run(initial).0
    }
}

impl<S: Clone + 'static> StateComputation<S, S> {
    /// Yield a copy of the current state without changing it.
    pub fn get() -> Self {
        Self::new(|state: S| (state.clone(), state))
    }
}

impl<S: 'static> StateComputation<S, ()> {
    /// Replace the state with `state`.
    pub fn put(state: S) -> Self
    where
        S: Clone,
    {
        Self::new(move |_| (state.clone(), ()))
    }

    /// Replace the state with `f` applied to it.
    pub fn modify<F>(f: F) -> Self
    where
        F: Fn(S) -> S + 'static,
    {
        Self::new(move |state| (f(state), ()))
    }
}

/// Free-standing form of [`StateComputation::unit`].
pub fn unit<S: 'static, A: Clone + 'static>(value: A) -> StateComputation<S, A> {
    StateComputation::unit(value)
}

/// Free-standing form of [`StateComputation::bind`].
pub fn bind<S, A, B, F>(m: StateComputation<S, A>, f: F) -> StateComputation<S, B>
where
    S: 'static,
    A: 'static,
    B: 'static,
    F: Fn(A) -> StateComputation<S, B> + 'static,
{
    m.bind(f)
}

/// Free-standing form of [`StateComputation::run`].
pub fn run<S: 'static, A: 'static>(m: &StateComputation<S, A>, initial: S) -> (S, A) {
    m.run(initial)
}

/// Yield the current counter and leave its successor behind.
///
/// Given incoming state `n` this produces `(n + 1, n)`. It is the only
/// primitive the tree labeler uses to touch the counter.
///
/// # Example
///
/// ```rust
/// use treelabel::core::advance;
///
/// assert_eq!(advance().run(0), (1, 0));
/// assert_eq!(advance().then(advance()).run(3), (5, 4));
/// ```
pub fn advance() -> StateComputation<Label, Label> {
    StateComputation::new(|next: Label| (next + 1, next))
}

/// Free-standing form of [`StateComputation::get`].
pub fn get<S: Clone + 'static>() -> StateComputation<S, S> {
    StateComputation::get()
}

/// Free-standing form of [`StateComputation::put`].
pub fn put<S: Clone + 'static>(state: S) -> StateComputation<S, ()> {
    StateComputation::put(state)
}

/// Free-standing form of [`StateComputation::modify`].
pub fn modify<S, F>(f: F) -> StateComputation<S, ()>
where
    S: 'static,
    F: Fn(S) -> S + 'static,
{
    StateComputation::modify(f)
}
