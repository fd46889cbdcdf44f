//! Treelabel: pre-order binary tree labeling with a pure state monad
//!
//! Labeling a tree in pre-order needs a counter that survives the trip down
//! the left subtree before the right subtree is visited. Treelabel threads
//! that counter through a [`StateComputation`], a pure `S -> (S, A)` value
//! composed with [`unit`] and [`bind`], so the labeling code never touches the
//! counter except through [`advance`].
//!
//! # Core Concepts
//!
//! - **Tree**: Immutable binary tree with optional children
//! - **StateComputation**: Deferred state-threading computation
//! - **Labeling**: Pre-order numbering, by direct recursion or by composition
//! - **Notation**: Compact `a(b, c)` text form for building and printing trees
//!
//! # Example
//!
//! ```rust
//! use treelabel::{label, notation};
//!
//! let tree = notation::parse("a(b, c(d(e, f), g))").unwrap();
//! let labeled = label(tree);
//!
//! let labels: Vec<_> = labeled.preorder().map(|(label, _)| *label).collect();
//! assert_eq!(labels, vec![0, 1, 2, 3, 4, 5, 6]);
//!
//! let names = labeled.map(|(label, name)| format!("{name}{label}"));
//! assert_eq!(notation::format(&names), "a0(b1, c2(d3(e4, f5), g6))");
//! ```

pub mod core;
pub mod labeling;
pub mod notation;

// Re-export commonly used types
pub use crate::core::{advance, bind, run, unit, Label, StateComputation, Tree};
pub use labeling::{label, label_with, LabelError, LabelOptions, Strategy};
pub use notation::NotationError;
