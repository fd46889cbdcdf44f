//! Baseline labeler that passes the next label explicitly.

use crate::core::{Label, Tree};

/// Label `tree` in pre-order starting at `next_label`.
///
/// Returns the labeled tree and the first label not used by it. The node is
/// labeled with `next_label` before the left subtree, which in turn is labeled
/// before the right subtree. `next_label` plus the node count must fit in
/// [`Label`]; [`label_with`](crate::labeling::label_with) checks this before
/// running.
///
/// # Example
///
/// ```rust
/// use treelabel::core::Tree;
/// use treelabel::labeling::direct::label_from;
///
/// let (labeled, next) = label_from(Tree::with_left("a", Tree::leaf("b")), 10);
///
/// assert_eq!(labeled.payload(), &(10, "a"));
/// assert_eq!(next, 12);
/// ```
pub fn label_from<T>(tree: Tree<T>, next_label: Label) -> (Tree<(Label, T)>, Label) {
    let (payload, left, right) = tree.into_parts();
    let mut next = next_label + 1;

    let left = left.map(|left| {
        let (labeled, after) = label_from(left, next);
        next = after;
        labeled
    });
    let right = right.map(|right| {
        let (labeled, after) = label_from(right, next);
        next = after;
        labeled
    });

    (Tree::node((next_label, payload), left, right), next)
}
