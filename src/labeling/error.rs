//! Labeling errors.

use crate::core::Label;
use thiserror::Error;

/// Errors that can occur when labeling from a configured start.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LabelError {
    #[error("Labels starting at {start} for {nodes} nodes do not fit below {}", Label::MAX)]
    LabelOverflow { start: Label, nodes: usize },
}
