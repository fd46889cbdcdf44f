//! Labeler built purely from `unit`, `bind` and `advance`.
//!
//! The counter never appears in this module: each node draws its label from
//! [`advance`] and the nesting of [`bind`] decides the order in which the
//! subtrees consume the state. Binding the node's label first, then the left
//! subtree, then the right subtree yields pre-order numbering.

use crate::core::{advance, bind, unit, Label, StateComputation, Tree};

/// Build the computation that labels `tree` in pre-order.
///
/// The computation is composed eagerly but runs only when given a starting
/// label. Its final state is the first label not used by the tree. The
/// starting label plus the node count must fit in [`Label`];
/// [`label_with`](crate::labeling::label_with) checks this before running.
///
/// # Cost
///
/// The computation can be run any number of times, so each `bind` level
/// holds its finished subtree by value and clones it when it runs. A labeled
/// node is therefore copied once per ancestor, which makes a run
/// O(nodes × depth): linear on balanced trees, quadratic on a one-sided
/// chain. This is why `T` must be `Clone`.
///
/// # Example
///
/// ```rust
/// use treelabel::core::Tree;
/// use treelabel::labeling::composed::labeled;
///
/// let computation = labeled(Tree::node("a", Some(Tree::leaf("b")), Some(Tree::leaf("c"))));
/// let (next, tree) = computation.run(0);
///
/// assert_eq!(next, 3);
/// assert_eq!(tree.right().map(|right| right.payload()), Some(&(2, "c")));
/// ```
pub fn labeled<T>(tree: Tree<T>) -> StateComputation<Label, Tree<(Label, T)>>
where
    T: Clone + 'static,
{
    let (payload, left, right) = tree.into_parts();

    match (left.map(labeled), right.map(labeled)) {
        (None, None) => bind(advance(), move |label| {
            unit(Tree::leaf((label, payload.clone())))
        }),
        (Some(left), None) => bind(advance(), move |label| {
            let payload = payload.clone();
            bind(left.clone(), move |left| {
                unit(Tree::with_left((label, payload.clone()), left))
            })
        }),
        (None, Some(right)) => bind(advance(), move |label| {
            let payload = payload.clone();
            bind(right.clone(), move |right| {
                unit(Tree::with_right((label, payload.clone()), right))
            })
        }),
        (Some(left), Some(right)) => bind(advance(), move |label| {
            let payload = payload.clone();
            let right = right.clone();
            bind(left.clone(), move |left| {
                let payload = payload.clone();
                bind(right.clone(), move |right| {
                    unit(Tree::node(
                        (label, payload.clone()),
                        Some(left.clone()),
                        Some(right),
                    ))
                })
            })
        }),
    }
}
