use super::{EdgeId, VertexId};

/// A handle to either kind of entity a graph owns.
///
/// Operations that accept both kinds take an [Item] and dispatch on the tag;
/// kind-specific ones reject the other tag with
/// [crate::error::GraphError::TypeMismatch].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Item {
    Vertex(VertexId),
    Edge(EdgeId),
}

impl Item {
    pub fn kind(&self) -> ItemKind {
        match self {
            Item::Vertex(_) => ItemKind::Vertex,
            Item::Edge(_) => ItemKind::Edge,
        }
    }

    pub fn to_raw(&self) -> usize {
        match self {
            Item::Vertex(vid) => vid.to_raw(),
            Item::Edge(eid) => eid.to_raw(),
        }
    }
}

impl From<VertexId> for Item {
    fn from(vid: VertexId) -> Self {
        Item::Vertex(vid)
    }
}

impl From<EdgeId> for Item {
    fn from(eid: EdgeId) -> Self {
        Item::Edge(eid)
    }
}

/// The kind of an [Item], for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Vertex,
    Edge,
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemKind::Vertex => write!(f, "vertex"),
            ItemKind::Edge => write!(f, "edge"),
        }
    }
}
