//! Error types.

use crate::graph::ItemKind;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors raised by graph operations.
///
/// Removing an absent vertex or edge is deliberately *not* an error:
/// removal operations report that case through their return value instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    /// An operation received a handle of the wrong entity kind.
    #[error("expected a {expected} handle, got a {actual} handle")]
    TypeMismatch { expected: ItemKind, actual: ItemKind },

    /// An operation received a handle that does not belong to this graph.
    #[error("{kind} #{index} does not belong to this graph")]
    InvalidArgument { kind: ItemKind, index: usize },
}
