//! Compact text notation for trees.
//!
//! A tree is written as its payload followed by an optional parenthesised
//! child list: `a(b, c(d(e, f), g))`. A single child is the left child and
//! `_` marks an absent child, so `a(_, c)` has only a right child.
//!
//! Names are runs of characters other than whitespace, `(`, `)` and `,`.
//! Whitespace between tokens is ignored.

mod error;

pub use error::NotationError;

use crate::core::Tree;
use log::trace;
use std::fmt::{Display, Write};

const ABSENT: &str = "_";

/// Parse tree notation into a tree of names.
///
/// # Example
///
/// ```rust
/// use treelabel::core::Tree;
/// use treelabel::notation::parse;
///
/// let tree = parse("a(_, c)").unwrap();
///
/// assert!(tree.left().is_none());
/// assert_eq!(tree.right(), Some(&Tree::leaf("c".to_string())));
/// ```
pub fn parse(input: &str) -> Result<Tree<String>, NotationError> {
    let mut cursor = Cursor::new(input);

    cursor.skip_whitespace();
    if cursor.is_at_end() {
        return Err(NotationError::MissingRoot);
    }

    let tree = cursor.parse_child()?.ok_or(NotationError::MissingRoot)?;

    cursor.skip_whitespace();
    if !cursor.is_at_end() {
        return Err(NotationError::TrailingInput {
            position: cursor.position,
        });
    }

    trace!("parsed tree of {} nodes", tree.size());
    Ok(tree)
}

/// Write a tree in canonical notation.
///
/// Children are separated by `, `. An absent left child is written as `_`
/// and an absent right child is omitted.
///
/// # Example
///
/// ```rust
/// use treelabel::core::Tree;
/// use treelabel::notation::format;
///
/// let tree = Tree::node("a", Some(Tree::leaf("b")), Some(Tree::with_right("c", Tree::leaf("d"))));
///
/// assert_eq!(format(&tree), "a(b, c(_, d))");
/// ```
pub fn format<T: Display>(tree: &Tree<T>) -> String {
    let mut out = String::new();
    write_tree(tree, &mut out);
    out
}

fn write_tree<T: Display>(tree: &Tree<T>, out: &mut String) {
    // Writing to a String cannot fail.
    let _ = write!(out, "{}", tree.payload());

    match (tree.left(), tree.right()) {
        (None, None) => {}
        (Some(left), None) => {
            out.push('(');
            write_tree(left, out);
            out.push(')');
        }
        (None, Some(right)) => {
            out.push('(');
            out.push_str(ABSENT);
            out.push_str(", ");
            write_tree(right, out);
            out.push(')');
        }
        (Some(left), Some(right)) => {
            out.push('(');
            write_tree(left, out);
            out.push_str(", ");
            write_tree(right, out);
            out.push(')');
        }
    }
}

struct Cursor<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn bump(&mut self, c: char) {
        self.position += c.len_utf8();
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek().filter(|c| c.is_whitespace()) {
            self.bump(c);
        }
    }

    fn unexpected(&self) -> NotationError {
        match self.peek() {
            Some(found) => NotationError::UnexpectedChar {
                found,
                position: self.position,
            },
            None => NotationError::UnexpectedEnd {
                position: self.position,
            },
        }
    }

    fn read_name(&mut self) -> Result<&'a str, NotationError> {
        self.skip_whitespace();
        let start = self.position;
        while let Some(c) = self.peek().filter(|c| !is_delimiter(*c)) {
            self.bump(c);
        }

        if self.position == start {
            return Err(self.unexpected());
        }
        let input = self.input;
        Ok(&input[start..self.position])
    }

    /// Parse a subtree, or `None` for the absent marker.
    fn parse_child(&mut self) -> Result<Option<Tree<String>>, NotationError> {
        let name = self.read_name()?;
        if name == ABSENT {
            return Ok(None);
        }

        self.skip_whitespace();
        if self.peek() != Some('(') {
            return Ok(Some(Tree::leaf(name.to_string())));
        }
        self.bump('(');

        self.skip_whitespace();
        if self.peek() == Some(')') {
            return Err(NotationError::EmptyChildren {
                position: self.position,
            });
        }

        let left = self.parse_child()?;
        let mut right = None;

        self.skip_whitespace();
        if self.peek() == Some(',') {
            self.bump(',');
            right = self.parse_child()?;
            self.skip_whitespace();
        }

        match self.peek() {
            Some(')') => self.bump(')'),
            Some(',') => {
                return Err(NotationError::TooManyChildren {
                    position: self.position,
                })
            }
            _ => return Err(self.unexpected()),
        }

        Ok(Some(Tree::node(name.to_string(), left, right)))
    }
}

fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || matches!(c, '(' | ')' | ',')
}
