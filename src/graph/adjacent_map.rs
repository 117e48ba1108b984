use crate::error::{GraphError, Result};
use crate::graph::*;
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, trace};

/// Which adjacency role a query consults.
///
/// For undirected graphs both roles resolve to the same table, so the choice
/// makes no observable difference there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Outgoing,
    Incoming,
}

type AdjacencyTable = BTreeMap<VertexId, BTreeMap<VertexId, EdgeId>>;

/// A graph backed by adjacency maps, directed or undirected by construction.
///
/// Vertices and edges are identity-keyed records owned by the graph and
/// addressed by [VertexId]/[EdgeId] handles. Each vertex has a row per
/// adjacency role mapping a neighbor to the connecting edge, so at most one
/// edge exists per ordered vertex pair: adding another edge on the same pair
/// replaces the first. An undirected graph keeps a single table whose rows
/// are symmetric and serves it for both roles; a directed graph keeps an
/// independent `incoming` table that every mutation maintains alongside
/// `outgoing`.
///
/// Since ID's grow monotonically, all iterations run in insertion order.
///
/// |                  | Complexity                                           |
/// | ---------------- | ---------------------------------------------------- |
/// | `add_vertex`     | $O(\log \|V\|)$                                      |
/// | `add_edge`       | $O(\log \|V\| + \log \|E\|)$                         |
/// | `adjacent`       | $O(\log \|V\| + \log \|E\|)$                         |
/// | `remove_edge`    | $O(\log \|V\| + \log \|E\|)$                         |
/// | `remove_vertex`  | $O(\log \|V\| + \|E'\| \log \|E\|)$ for $E'$ the incident edges |
/// | iterations       | amortized $O(1)$ per item, in insertion order        |
#[derive(Clone)]
pub struct AdjacentMapGraph<L> {
    vid_factory: VertexIdFactory,
    eid_factory: EdgeIdFactory,
    vertices: BTreeMap<VertexId, Vertex<L>>,
    edges: BTreeMap<EdgeId, Edge<L>>,
    outgoing: AdjacencyTable,
    incoming: Option<AdjacencyTable>,
}

impl<L> AdjacentMapGraph<L> {
    /// Creates an empty graph, directed or not.
    ///
    /// The mode is fixed for the lifetime of the graph.
    pub fn new(directed: bool) -> Self {
        Self {
            vid_factory: VertexIdFactory::new(),
            eid_factory: EdgeIdFactory::new(),
            vertices: BTreeMap::new(),
            edges: BTreeMap::new(),
            outgoing: BTreeMap::new(),
            incoming: if directed { Some(BTreeMap::new()) } else { None },
        }
    }

    pub fn is_directed(&self) -> bool {
        self.incoming.is_some()
    }

    fn table(&self, dir: Direction) -> &AdjacencyTable {
        match (dir, self.incoming.as_ref()) {
            (Direction::Incoming, Some(incoming)) => incoming,
            _ => &self.outgoing,
        }
    }

    /// Adds a fresh vertex with an empty adjacency row and returns its handle.
    pub fn add_vertex(&mut self, label: Option<L>) -> VertexId {
        let vid = self.vid_factory.one_more();
        self.vertices.insert(vid, Vertex::new(vid, label));
        self.outgoing.insert(vid, BTreeMap::new());
        if let Some(incoming) = self.incoming.as_mut() {
            incoming.insert(vid, BTreeMap::new());
        }
        vid
    }

    /// Adds an edge between two vertices of this graph and returns its handle.
    ///
    /// Fails with [GraphError::InvalidArgument] if either endpoint does not
    /// belong to this graph. If the pair is already connected (in either
    /// orientation, for undirected graphs), the existing edge is removed
    /// first: the adjacency rows key edges by neighbor, so there is no
    /// multigraph support.
    pub fn add_edge(&mut self, source: VertexId, sink: VertexId, label: Option<L>) -> Result<EdgeId> {
        for v in [source, sink] {
            if !self.vertices.contains_key(&v) {
                return Err(GraphError::InvalidArgument {
                    kind: ItemKind::Vertex,
                    index: v.to_raw(),
                });
            }
        }
        let replaced = self
            .outgoing
            .get(&source)
            .and_then(|row| row.get(&sink))
            .copied();
        if let Some(old) = replaced {
            let _ = self.remove_edge(&old);
        }
        let eid = self.eid_factory.one_more();
        self.edges.insert(eid, Edge::new(eid, source, sink, label));
        self.outgoing.entry(source).or_default().insert(sink, eid);
        match self.incoming.as_mut() {
            Some(incoming) => {
                incoming.entry(sink).or_default().insert(source, eid);
            }
            None => {
                self.outgoing.entry(sink).or_default().insert(source, eid);
            }
        }
        Ok(eid)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contains_vertex(&self, v: &VertexId) -> bool {
        self.vertices.contains_key(v)
    }

    pub fn contains_edge(&self, e: &EdgeId) -> bool {
        self.edges.contains_key(e)
    }

    pub fn vertex(&self, v: &VertexId) -> Option<&Vertex<L>> {
        self.vertices.get(v)
    }

    pub fn vertex_mut(&mut self, v: &VertexId) -> Option<&mut Vertex<L>> {
        self.vertices.get_mut(v)
    }

    pub fn edge(&self, e: &EdgeId) -> Option<&Edge<L>> {
        self.edges.get(e)
    }

    pub fn edge_mut(&mut self, e: &EdgeId) -> Option<&mut Edge<L>> {
        self.edges.get_mut(e)
    }

    pub fn vertices(&self) -> Box<dyn Iterator<Item = &Vertex<L>> + '_> {
        Box::new(self.vertices.values())
    }

    pub fn edges(&self) -> Box<dyn Iterator<Item = &Edge<L>> + '_> {
        Box::new(self.edges.values())
    }

    /// The edge from `source` towards `sink` in the chosen role, if any.
    pub fn adjacent(&self, source: &VertexId, sink: &VertexId, dir: Direction) -> Option<&Edge<L>> {
        let eid = self.table(dir).get(source)?.get(sink)?;
        self.edges.get(eid)
    }

    pub fn neighbors(&self, vertex: &VertexId, dir: Direction) -> Box<dyn Iterator<Item = VertexId> + '_> {
        match self.table(dir).get(vertex) {
            Some(row) => Box::new(row.keys().copied()),
            None => Box::new(std::iter::empty()),
        }
    }

    pub fn degree(&self, vertex: &VertexId, dir: Direction) -> usize {
        self.table(dir).get(vertex).map_or(0, |row| row.len())
    }

    pub fn incident_edges(&self, vertex: &VertexId, dir: Direction) -> Box<dyn Iterator<Item = &Edge<L>> + '_> {
        match self.table(dir).get(vertex) {
            Some(row) => Box::new(row.values().filter_map(move |eid| self.edges.get(eid))),
            None => Box::new(std::iter::empty()),
        }
    }

    /// Removes an edge by handle.
    ///
    /// Returns the detached record, or `None` if no such edge is in the
    /// graph; the latter is a reported no-op, not an error.
    pub fn remove_edge(&mut self, edge: &EdgeId) -> Option<Edge<L>> {
        match self.edges.remove(edge) {
            None => {
                debug!("there is no edge #{} in the graph", edge.to_raw());
                None
            }
            Some(e) => {
                self.detach_slots(e.source(), e.sink());
                trace!("edge #{} is detached from the graph", edge.to_raw());
                Some(e)
            }
        }
    }

    /// Removes the edge from `source` towards `sink`, if the pair is
    /// connected. Same no-op contract as [Self::remove_edge].
    pub fn remove_edge_between(&mut self, source: &VertexId, sink: &VertexId) -> Option<Edge<L>> {
        let eid = match self.adjacent(source, sink, Direction::Outgoing) {
            Some(e) => e.id(),
            None => {
                debug!(
                    "there is no edge (v{}, v{}) in the graph",
                    source.to_raw(),
                    sink.to_raw()
                );
                return None;
            }
        };
        self.remove_edge(&eid)
    }

    fn detach_slots(&mut self, source: VertexId, sink: VertexId) {
        if let Some(row) = self.outgoing.get_mut(&source) {
            row.remove(&sink);
        }
        match self.incoming.as_mut() {
            Some(incoming) => {
                if let Some(row) = incoming.get_mut(&sink) {
                    row.remove(&source);
                }
            }
            None => {
                if let Some(row) = self.outgoing.get_mut(&sink) {
                    row.remove(&source);
                }
            }
        }
    }

    /// Removes a vertex together with every edge incident to it.
    ///
    /// Returns the vertex record and the detached edges, or `None` if the
    /// vertex is not in the graph (a reported no-op). The incident set is
    /// snapshot before any edge is removed, since removals rewrite the very
    /// rows being read.
    pub fn remove_vertex(&mut self, vertex: &VertexId) -> Option<(Vertex<L>, Vec<Edge<L>>)> {
        let vert = match self.vertices.remove(vertex) {
            None => {
                debug!("there is no vertex #{} in the graph", vertex.to_raw());
                return None;
            }
            Some(v) => v,
        };
        let mut incident = BTreeSet::new();
        if let Some(row) = self.outgoing.get(vertex) {
            incident.extend(row.values().copied());
        }
        if let Some(incoming) = self.incoming.as_ref() {
            if let Some(row) = incoming.get(vertex) {
                incident.extend(row.values().copied());
            }
        }
        let mut detached = Vec::with_capacity(incident.len());
        for eid in incident {
            if let Some(e) = self.remove_edge(&eid) {
                detached.push(e);
            }
        }
        self.outgoing.remove(vertex);
        if let Some(incoming) = self.incoming.as_mut() {
            incoming.remove(vertex);
        }
        trace!("vertex #{} is detached from the graph", vertex.to_raw());
        Some((vert, detached))
    }

    /// Removes whatever entity the handle refers to.
    ///
    /// Returns whether anything was actually removed.
    pub fn remove(&mut self, item: impl Into<Item>) -> bool {
        match item.into() {
            Item::Vertex(vid) => self.remove_vertex(&vid).is_some(),
            Item::Edge(eid) => self.remove_edge(&eid).is_some(),
        }
    }

    /// The label behind a vertex handle.
    ///
    /// Fails with [GraphError::TypeMismatch] for an edge handle.
    pub fn vertex_label(&self, item: impl Into<Item>) -> Result<Option<&L>> {
        match item.into() {
            Item::Vertex(vid) => Ok(self.require_vertex(vid)?.label()),
            Item::Edge(_) => Err(mismatch(ItemKind::Vertex, ItemKind::Edge)),
        }
    }

    pub fn set_vertex_label(&mut self, item: impl Into<Item>, label: Option<L>) -> Result<()> {
        match item.into() {
            Item::Vertex(vid) => {
                self.require_vertex_mut(vid)?.set_label(label);
                Ok(())
            }
            Item::Edge(_) => Err(mismatch(ItemKind::Vertex, ItemKind::Edge)),
        }
    }

    /// The label behind an edge handle.
    ///
    /// Fails with [GraphError::TypeMismatch] for a vertex handle.
    pub fn edge_label(&self, item: impl Into<Item>) -> Result<Option<&L>> {
        match item.into() {
            Item::Edge(eid) => Ok(self.require_edge(eid)?.label()),
            Item::Vertex(_) => Err(mismatch(ItemKind::Edge, ItemKind::Vertex)),
        }
    }

    pub fn set_edge_label(&mut self, item: impl Into<Item>, label: Option<L>) -> Result<()> {
        match item.into() {
            Item::Edge(eid) => {
                self.require_edge_mut(eid)?.set_label(label);
                Ok(())
            }
            Item::Vertex(_) => Err(mismatch(ItemKind::Edge, ItemKind::Vertex)),
        }
    }

    /// The label behind either kind of handle.
    pub fn label(&self, item: impl Into<Item>) -> Result<Option<&L>> {
        match item.into() {
            Item::Vertex(vid) => Ok(self.require_vertex(vid)?.label()),
            Item::Edge(eid) => Ok(self.require_edge(eid)?.label()),
        }
    }

    pub fn set_label(&mut self, item: impl Into<Item>, label: Option<L>) -> Result<()> {
        match item.into() {
            Item::Vertex(vid) => {
                self.require_vertex_mut(vid)?.set_label(label);
                Ok(())
            }
            Item::Edge(eid) => {
                self.require_edge_mut(eid)?.set_label(label);
                Ok(())
            }
        }
    }

    /// The color behind either kind of handle.
    pub fn color(&self, item: impl Into<Item>) -> Result<Option<usize>> {
        match item.into() {
            Item::Vertex(vid) => Ok(self.require_vertex(vid)?.color()),
            Item::Edge(eid) => Ok(self.require_edge(eid)?.color()),
        }
    }

    pub fn set_color(&mut self, item: impl Into<Item>, color: usize) -> Result<()> {
        match item.into() {
            Item::Vertex(vid) => {
                self.require_vertex_mut(vid)?.set_color(color);
                Ok(())
            }
            Item::Edge(eid) => {
                self.require_edge_mut(eid)?.set_color(color);
                Ok(())
            }
        }
    }

    /// The endpoints behind an edge handle.
    ///
    /// Fails with [GraphError::TypeMismatch] for a vertex handle.
    pub fn endpoints(&self, item: impl Into<Item>) -> Result<(VertexId, VertexId)> {
        match item.into() {
            Item::Edge(eid) => Ok(self.require_edge(eid)?.endpoints()),
            Item::Vertex(_) => Err(mismatch(ItemKind::Edge, ItemKind::Vertex)),
        }
    }

    pub fn debug(&self) -> GraphDebug<'_, L> {
        GraphDebug::new(self)
    }

    fn require_vertex(&self, vid: VertexId) -> Result<&Vertex<L>> {
        self.vertices.get(&vid).ok_or(GraphError::InvalidArgument {
            kind: ItemKind::Vertex,
            index: vid.to_raw(),
        })
    }

    fn require_vertex_mut(&mut self, vid: VertexId) -> Result<&mut Vertex<L>> {
        self.vertices
            .get_mut(&vid)
            .ok_or(GraphError::InvalidArgument {
                kind: ItemKind::Vertex,
                index: vid.to_raw(),
            })
    }

    fn require_edge(&self, eid: EdgeId) -> Result<&Edge<L>> {
        self.edges.get(&eid).ok_or(GraphError::InvalidArgument {
            kind: ItemKind::Edge,
            index: eid.to_raw(),
        })
    }

    fn require_edge_mut(&mut self, eid: EdgeId) -> Result<&mut Edge<L>> {
        self.edges.get_mut(&eid).ok_or(GraphError::InvalidArgument {
            kind: ItemKind::Edge,
            index: eid.to_raw(),
        })
    }

    #[cfg(test)]
    pub(crate) fn apply(&mut self, ops: &Ops) {
        for op in ops.iter() {
            match op {
                Op::AddVertex(_) => {
                    let _ = self.add_vertex(None);
                }
                Op::RemoveVertex(vid) => {
                    let _ = self.remove_vertex(vid);
                }
                Op::AddEdge((src, snk, _)) => {
                    self.add_edge(*src, *snk, None)
                        .expect("generated scripts only connect live vertices");
                }
                Op::RemoveEdge(eid) => {
                    let _ = self.remove_edge(eid);
                }
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn check_consistency(&self) {
        for vid in self.vertices.keys() {
            assert!(self.outgoing.contains_key(vid));
            if let Some(incoming) = self.incoming.as_ref() {
                assert!(incoming.contains_key(vid));
            }
        }
        for vid in self.outgoing.keys() {
            assert!(self.vertices.contains_key(vid));
        }
        let arena: BTreeSet<EdgeId> = self.edges.keys().copied().collect();
        let mut out_slots = BTreeSet::new();
        for (src, row) in self.outgoing.iter() {
            for (snk, eid) in row.iter() {
                let e = self.edges.get(eid).expect("every slot points at a live edge");
                if self.is_directed() {
                    assert_eq!((e.source(), e.sink()), (*src, *snk));
                } else {
                    let fwd = (e.source(), e.sink()) == (*src, *snk);
                    let rev = (e.source(), e.sink()) == (*snk, *src);
                    assert!(fwd || rev);
                }
                out_slots.insert(*eid);
            }
        }
        assert_eq!(out_slots, arena);
        match self.incoming.as_ref() {
            Some(incoming) => {
                let mut in_slots = BTreeSet::new();
                for (snk, row) in incoming.iter() {
                    for (src, eid) in row.iter() {
                        let e = self.edges.get(eid).expect("every slot points at a live edge");
                        assert_eq!((e.source(), e.sink()), (*src, *snk));
                        in_slots.insert(*eid);
                    }
                }
                assert_eq!(in_slots, arena);
            }
            None => {
                for e in self.edges.values() {
                    let fwd = self.outgoing.get(&e.source()).and_then(|row| row.get(&e.sink()));
                    let rev = self.outgoing.get(&e.sink()).and_then(|row| row.get(&e.source()));
                    assert_eq!(fwd, Some(&e.id()));
                    assert_eq!(rev, Some(&e.id()));
                }
            }
        }
    }
}

fn mismatch(expected: ItemKind, actual: ItemKind) -> GraphError {
    GraphError::TypeMismatch { expected, actual }
}

impl<L> std::fmt::Debug for AdjacentMapGraph<L>
where
    L: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.debug())
    }
}
