//! The graph container and the entities it owns.
//!
//! # Identity-keyed entities
//!
//! Vertices and edges are records owned by the graph.
//! Callers address them through lightweight ID handles minted by per-graph
//! factories; the ID is the identity, so two vertices carrying equal labels
//! are still different vertices.
//! Handles left dangling by a removal are harmless: queries resolve them to
//! nothing and the checked surface reports them as not belonging to the
//! graph.
//!
//! # One container, both modes
//!
//! [AdjacentMapGraph] covers directed and undirected graphs; the mode is
//! picked at construction. A directed graph maintains an outgoing and an
//! incoming adjacency table in lockstep. An undirected graph keeps exactly
//! one table, symmetric on both endpoints, which answers queries for either
//! role; there is no second copy to keep in sync.

mod vertex;
pub use self::vertex::*;
mod edge;
pub use self::edge::*;
mod item;
pub use self::item::*;
mod adjacent_map;
pub use self::adjacent_map::*;
mod graph_debug;
pub use self::graph_debug::*;

#[cfg(test)]
pub use self::tests::*;
