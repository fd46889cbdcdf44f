//! Pre-order tree labeling.
//!
//! Two labelers compute the same result:
//! - [`direct`] threads the next label through recursive calls by hand
//! - [`composed`] builds a [`StateComputation`](crate::core::StateComputation)
//!   from `unit`, `bind` and `advance` and runs it once
//!
//! [`label`] is the usual entry point. [`label_with`] accepts
//! [`LabelOptions`] to pick the starting label and the labeler.

pub mod composed;
pub mod direct;
mod error;

pub use error::LabelError;

use crate::core::{Label, Tree};
use log::debug;
use serde::{Deserialize, Serialize};

/// Which labeler to run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Explicit `next_label` threading through recursion.
    Direct,

    /// State computation composed from `unit`, `bind` and `advance`.
    #[default]
    Composed,
}

/// Options controlling a labeling run.
///
/// Missing fields take their defaults when deserialized, so a partial
/// document is enough.
///
/// # Example
///
/// ```rust
/// use treelabel::labeling::{LabelOptions, Strategy};
///
/// let options: LabelOptions = serde_json::from_str(r#"{ "start": 100 }"#).unwrap();
///
/// assert_eq!(options, LabelOptions::new().starting_at(100));
/// assert_eq!(options.strategy, Strategy::Composed);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelOptions {
    /// Label given to the root
    pub start: Label,

    /// Labeler to run
    pub strategy: Strategy,
}

impl LabelOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label given to the root.
    pub fn starting_at(mut self, start: Label) -> Self {
        self.start = start;
        self
    }

    /// Set the labeler to run.
    pub fn using(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }
}

/// Label every node of `tree` with its pre-order index, starting at 0.
///
/// The result has the same shape as `tree`; each payload is paired with its
/// label.
///
/// # Example
///
/// ```rust
/// use treelabel::core::Tree;
/// use treelabel::labeling::label;
///
/// let tree = Tree::with_left("a", Tree::with_left("b", Tree::leaf("c")));
/// let labels: Vec<_> = label(tree).preorder().map(|(label, _)| *label).collect();
///
/// assert_eq!(labels, vec![0, 1, 2]);
/// ```
pub fn label<T>(tree: Tree<T>) -> Tree<(Label, T)>
where
    T: Clone + 'static,
{
    // A tree can never hold `Label::MAX` nodes, so counting from 0 always fits.
    run_strategy(tree, 0, Strategy::default())
}

/// Label every node of `tree` in pre-order according to `options`.
///
/// Labels run from `options.start` upwards with no gaps. Every label, and
/// the label after the last one, must fit in [`Label`]; otherwise nothing is
/// labeled and [`LabelError::LabelOverflow`] is returned.
///
/// # Example
///
/// ```rust
/// use treelabel::core::Tree;
/// use treelabel::labeling::{label_with, LabelError, LabelOptions};
///
/// let tree = Tree::leaf("x");
///
/// assert_eq!(
///     label_with(tree.clone(), &LabelOptions::new().starting_at(5)),
///     Ok(Tree::leaf((5, "x")))
/// );
/// assert_eq!(
///     label_with(tree, &LabelOptions::new().starting_at(usize::MAX)),
///     Err(LabelError::LabelOverflow { start: usize::MAX, nodes: 1 })
/// );
/// ```
pub fn label_with<T>(
    tree: Tree<T>,
    options: &LabelOptions,
) -> Result<Tree<(Label, T)>, LabelError>
where
    T: Clone + 'static,
{
    let nodes = tree.size();
    if options.start.checked_add(nodes).is_none() {
        return Err(LabelError::LabelOverflow {
            start: options.start,
            nodes,
        });
    }

    Ok(run_strategy(tree, options.start, options.strategy))
}

fn run_strategy<T>(tree: Tree<T>, start: Label, strategy: Strategy) -> Tree<(Label, T)>
where
    T: Clone + 'static,
{
    debug!("labeling tree from {} using {:?} strategy", start, strategy);

    let (labeled, next) = match strategy {
        Strategy::Direct => direct::label_from(tree, start),
        Strategy::Composed => {
            let (next, labeled) = composed::labeled(tree).run(start);
            (labeled, next)
        }
    };

    debug!(
        "labeled {} nodes, next label would be {}",
        next - start,
        next
    );
    labeled
}
