//! Tree notation errors.

use thiserror::Error;

/// Errors that can occur when parsing tree notation.
///
/// Positions are byte offsets into the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    #[error("Unexpected end of input at position {position}")]
    UnexpectedEnd { position: usize },

    #[error("Unexpected character '{found}' at position {position}")]
    UnexpectedChar { found: char, position: usize },

    #[error("No root node. A tree must start with a name other than '_'")]
    MissingRoot,

    #[error("Empty child list at position {position}. Use '_' to mark an absent child")]
    EmptyChildren { position: usize },

    #[error("More than two children at position {position}")]
    TooManyChildren { position: usize },

    #[error("Trailing input at position {position}")]
    TrailingInput { position: usize },
}
