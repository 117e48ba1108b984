//! Greedy coloring of vertices and edges.
use crate::graph::{AdjacentMapGraph, Direction, EdgeId, VertexId};
use ahash::RandomState;
use std::collections::{HashMap, HashSet};

/// Greedy coloring passes over a graph.
///
/// Both passes walk their entities in insertion order and hand each one the
/// smallest non-negative color not taken by a conflicting entity visited
/// earlier in the same pass. That yields a proper coloring for undirected
/// graphs, but not necessarily a minimum one: the number of colors spent
/// depends on the enumeration order. On directed graphs only the outgoing
/// role constrains an entity, so ends of an edge may well share a color.
///
/// ```rust
/// use mapgraph::{algorithm::GreedyColoring, graph::AdjacentMapGraph};
///
/// let mut g = AdjacentMapGraph::new(false);
/// let a = g.add_vertex(Some("a"));
/// let b = g.add_vertex(Some("b"));
/// g.add_edge(a, b, None).unwrap();
/// let colors = g.greedy_vertex_coloring();
/// assert_ne!(colors[&a], colors[&b]);
/// assert_eq!(g.vertex(&a).unwrap().color(), Some(colors[&a]));
/// ```
pub trait GreedyColoring {
    /// Colors every vertex against its already-colored neighbors.
    ///
    /// Returns the assignment, which is also recorded on each vertex.
    fn greedy_vertex_coloring(&mut self) -> HashMap<VertexId, usize, RandomState>;

    /// Colors every edge against the already-colored edges incident to
    /// either of its endpoints.
    ///
    /// Returns the assignment, which is also recorded on each edge.
    fn greedy_edge_coloring(&mut self) -> HashMap<EdgeId, usize, RandomState>;
}

impl<L> GreedyColoring for AdjacentMapGraph<L> {
    fn greedy_vertex_coloring(&mut self) -> HashMap<VertexId, usize, RandomState> {
        let mut colors = HashMap::with_hasher(RandomState::new());
        let order: Vec<VertexId> = self.vertices().map(|v| v.id()).collect();
        for vid in order {
            let mut used = HashSet::with_hasher(RandomState::new());
            for nbr in self.neighbors(&vid, Direction::Outgoing) {
                if let Some(c) = colors.get(&nbr) {
                    used.insert(*c);
                }
            }
            let color = smallest_unused(&used);
            colors.insert(vid, color);
            if let Some(vert) = self.vertex_mut(&vid) {
                vert.set_color(color);
            }
        }
        colors
    }

    fn greedy_edge_coloring(&mut self) -> HashMap<EdgeId, usize, RandomState> {
        let mut colors = HashMap::with_hasher(RandomState::new());
        let order: Vec<(EdgeId, VertexId, VertexId)> = self
            .edges()
            .map(|e| (e.id(), e.source(), e.sink()))
            .collect();
        for (eid, source, sink) in order {
            let mut used = HashSet::with_hasher(RandomState::new());
            for end in [source, sink] {
                for inc in self.incident_edges(&end, Direction::Outgoing) {
                    if let Some(c) = colors.get(&inc.id()) {
                        used.insert(*c);
                    }
                }
            }
            let color = smallest_unused(&used);
            colors.insert(eid, color);
            if let Some(edge) = self.edge_mut(&eid) {
                edge.set_color(color);
            }
        }
        colors
    }
}

fn smallest_unused(used: &HashSet<usize, RandomState>) -> usize {
    let mut color = 0;
    while used.contains(&color) {
        color += 1;
    }
    color
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Ops;
    use quickcheck_macros::quickcheck;

    #[test]
    fn triangle_needs_three_colors() {
        let mut g = AdjacentMapGraph::new(false);
        let a = g.add_vertex(Some("A"));
        let b = g.add_vertex(Some("B"));
        let c = g.add_vertex(Some("C"));
        g.add_edge(a, b, None).unwrap();
        g.add_edge(b, c, None).unwrap();
        g.add_edge(a, c, None).unwrap();

        let colors = g.greedy_vertex_coloring();
        assert_eq!(colors[&a], 0);
        assert_eq!(colors[&b], 1);
        assert_eq!(colors[&c], 2);
        assert_eq!(g.vertex(&a).unwrap().color(), Some(0));
        assert_eq!(g.vertex(&b).unwrap().color(), Some(1));
        assert_eq!(g.vertex(&c).unwrap().color(), Some(2));
    }

    #[test]
    fn path_edges_alternate_while_disjoint_edges_reuse() {
        let mut g = AdjacentMapGraph::new(false);
        let a = g.add_vertex(Some("A"));
        let b = g.add_vertex(Some("B"));
        let c = g.add_vertex(Some("C"));
        let d = g.add_vertex(Some("D"));
        let e = g.add_vertex(Some("E"));
        let ab = g.add_edge(a, b, None).unwrap();
        let bc = g.add_edge(b, c, None).unwrap();
        let de = g.add_edge(d, e, None).unwrap();

        let colors = g.greedy_edge_coloring();
        assert_eq!(colors[&ab], 0);
        assert_eq!(colors[&bc], 1);
        assert_eq!(colors[&de], 0);
        assert_eq!(g.edge(&bc).unwrap().color(), Some(1));
    }

    #[test]
    fn directed_ends_may_share_a_color() {
        let mut g = AdjacentMapGraph::new(true);
        let a = g.add_vertex(Some("a"));
        let b = g.add_vertex(Some("b"));
        g.add_edge(a, b, None).unwrap();

        // b has no outgoing neighbors, so nothing constrains it
        let colors = g.greedy_vertex_coloring();
        assert_eq!(colors[&a], 0);
        assert_eq!(colors[&b], 0);
    }

    #[quickcheck]
    fn vertex_coloring_is_proper_on_undirected(ops: Ops) {
        let mut g: AdjacentMapGraph<&'static str> = AdjacentMapGraph::new(false);
        g.apply(&ops);
        let colors = g.greedy_vertex_coloring();
        for e in g.edges() {
            if e.source() != e.sink() {
                assert_ne!(colors[&e.source()], colors[&e.sink()]);
            }
        }
        for v in g.vertices() {
            assert_eq!(v.color(), colors.get(&v.id()).copied());
        }
    }

    #[quickcheck]
    fn edge_coloring_is_proper_on_undirected(ops: Ops) {
        let mut g: AdjacentMapGraph<&'static str> = AdjacentMapGraph::new(false);
        g.apply(&ops);
        let colors = g.greedy_edge_coloring();
        let edges: Vec<_> = g.edges().map(|e| (e.id(), e.source(), e.sink())).collect();
        for (i, (e1, s1, k1)) in edges.iter().enumerate() {
            for (e2, s2, k2) in edges[i + 1..].iter() {
                let shares = s1 == s2 || s1 == k2 || k1 == s2 || k1 == k2;
                if shares {
                    assert_ne!(colors[e1], colors[e2]);
                }
            }
        }
        for e in g.edges() {
            assert_eq!(e.color(), colors.get(&e.id()).copied());
        }
    }
}
