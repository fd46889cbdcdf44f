//! Immutable binary tree.
//!
//! Trees are plain values: every operation that "changes" a tree returns a
//! new one and leaves the original untouched.

use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Write};

/// Immutable binary tree node holding a payload and optional children.
///
/// Absent children are modelled as `None`, so a leaf is simply a node whose
/// `left` and `right` are both empty.
///
/// # Example
///
/// ```rust
/// use treelabel::core::Tree;
///
/// let tree = Tree::node("a", Some(Tree::leaf("b")), Some(Tree::leaf("c")));
///
/// assert_eq!(tree.payload(), &"a");
/// assert_eq!(tree.left().map(Tree::payload), Some(&"b"));
/// assert_eq!(tree.size(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tree<T> {
    payload: T,
    left: Option<Box<Tree<T>>>,
    right: Option<Box<Tree<T>>>,
}

impl<T> Tree<T> {
    /// Create a tree with no children.
    pub fn leaf(payload: T) -> Self {
        Self::node(payload, None, None)
    }

    /// Create a tree with the given optional children.
    pub fn node(payload: T, left: Option<Tree<T>>, right: Option<Tree<T>>) -> Self {
        Tree {
            payload,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    /// Create a tree with only a left child.
    pub fn with_left(payload: T, left: Tree<T>) -> Self {
        Self::node(payload, Some(left), None)
    }

    /// Create a tree with only a right child.
    pub fn with_right(payload: T, right: Tree<T>) -> Self {
        Self::node(payload, None, Some(right))
    }

    pub fn payload(&self) -> &T {
        &self.payload
    }

    pub fn left(&self) -> Option<&Tree<T>> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Tree<T>> {
        self.right.as_deref()
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Consume the tree, handing back its payload and children.
    pub fn into_parts(self) -> (T, Option<Tree<T>>, Option<Tree<T>>) {
        (
            self.payload,
            self.left.map(|left| *left),
            self.right.map(|right| *right),
        )
    }

    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        1 + self.left().map_or(0, Tree::size) + self.right().map_or(0, Tree::size)
    }

    /// Number of levels in the tree. A leaf has depth 1.
    pub fn depth(&self) -> usize {
        let left = self.left().map_or(0, Tree::depth);
        let right = self.right().map_or(0, Tree::depth);
        1 + left.max(right)
    }

    /// Iterate over payloads in pre-order: node, left subtree, right subtree.
    ///
    /// # Example
    ///
    /// ```rust
    /// use treelabel::core::Tree;
    ///
    /// let tree = Tree::node(1, Some(Tree::with_left(2, Tree::leaf(3))), Some(Tree::leaf(4)));
    /// let order: Vec<_> = tree.preorder().copied().collect();
    ///
    /// assert_eq!(order, vec![1, 2, 3, 4]);
    /// ```
    pub fn preorder(&self) -> Preorder<'_, T> {
        Preorder { stack: vec![self] }
    }

    /// Build a tree of the same shape with every payload transformed.
    pub fn map<U, F>(&self, f: F) -> Tree<U>
    where
        F: Fn(&T) -> U,
    {
        self.map_with(&f)
    }

    fn map_with<U, F>(&self, f: &F) -> Tree<U>
    where
        F: Fn(&T) -> U,
    {
        Tree::node(
            f(&self.payload),
            self.left().map(|left| left.map_with(f)),
            self.right().map(|right| right.map_with(f)),
        )
    }
}

impl<T: Debug> Tree<T> {
    /// Render the tree as indented text, one node per line in pre-order.
    ///
    /// Each level is indented by two more spaces than its parent.
    ///
    /// # Example
    ///
    /// ```rust
    /// use treelabel::core::Tree;
    ///
    /// let tree = Tree::with_left("a", Tree::leaf("b"));
    ///
    /// assert_eq!(tree.show(), "Node: \"a\"\n  Node: \"b\"\n");
    /// ```
    pub fn show(&self) -> String {
        let mut out = String::new();
        self.show_into(&mut out, 0);
        out
    }

    fn show_into(&self, out: &mut String, indent: usize) {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{:indent$}Node: {:?}", "", self.payload, indent = indent);
        if let Some(left) = self.left() {
            left.show_into(out, indent + 2);
        }
        if let Some(right) = self.right() {
            right.show_into(out, indent + 2);
        }
    }
}

/// Pre-order iterator over the payloads of a [`Tree`].
pub struct Preorder<'a, T> {
    stack: Vec<&'a Tree<T>>,
}

impl<'a, T> Iterator for Preorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.stack.pop()?;
        // Right goes on first so the left subtree is visited first.
        if let Some(right) = tree.right() {
            self.stack.push(right);
        }
        if let Some(left) = tree.left() {
            self.stack.push(left);
        }
        Some(&tree.payload)
    }
}
