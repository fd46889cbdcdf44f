//! Core data types.
//!
//! This module contains the pure building blocks of the crate:
//! - The immutable binary [`Tree`]
//! - The [`StateComputation`] state-threading abstraction and its combinators
//!
//! Nothing in this module has side effects; state only changes inside the
//! values returned from [`run`].

mod state;
mod tree;

pub use state::{advance, bind, get, modify, put, run, unit, Label, StateComputation};
pub use tree::{Preorder, Tree};
