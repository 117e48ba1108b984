use super::VertexId;

/// ID for edges, which are essentially `usize`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub usize);

/// A factory to generate `EdgeId` uniquely within one graph.
#[derive(Clone)]
pub struct EdgeIdFactory(usize);

impl Default for EdgeIdFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl EdgeIdFactory {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn one_more(&mut self) -> EdgeId {
        let cur = self.0;
        self.0 += 1;
        EdgeId(cur)
    }
}

impl EdgeId {
    pub fn new(x: usize) -> Self {
        Self(x)
    }

    pub fn to_raw(&self) -> usize {
        self.0
    }
}

/// An edge record owned by the graph.
///
/// The endpoints are fixed when the edge is created; only the label and the
/// color are mutable. For undirected graphs, which endpoint is the source and
/// which the sink merely reflects the order `add_edge` was called with.
#[derive(Debug, Clone)]
pub struct Edge<L> {
    id: EdgeId,
    source: VertexId,
    sink: VertexId,
    label: Option<L>,
    color: Option<usize>,
}

impl<L> Edge<L> {
    pub(crate) fn new(id: EdgeId, source: VertexId, sink: VertexId, label: Option<L>) -> Self {
        Self {
            id,
            source,
            sink,
            label,
            color: None,
        }
    }

    pub fn id(&self) -> EdgeId {
        self.id
    }

    pub fn source(&self) -> VertexId {
        self.source
    }

    pub fn sink(&self) -> VertexId {
        self.sink
    }

    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.source, self.sink)
    }

    /// The endpoint opposite to `v`, or `None` if `v` is not an endpoint.
    ///
    /// A self-loop is its own opposite.
    pub fn opposite(&self, v: &VertexId) -> Option<VertexId> {
        if *v == self.source {
            Some(self.sink)
        } else if *v == self.sink {
            Some(self.source)
        } else {
            None
        }
    }

    pub fn label(&self) -> Option<&L> {
        self.label.as_ref()
    }

    pub fn set_label(&mut self, label: Option<L>) {
        self.label = label;
    }

    /// The color assigned by the latest coloring pass, if any.
    pub fn color(&self) -> Option<usize> {
        self.color
    }

    pub fn set_color(&mut self, color: usize) {
        self.color = Some(color);
    }
}

impl<L> std::fmt::Display for Edge<L>
where
    L: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.label.as_ref() {
            Some(label) => write!(
                f,
                "{} = (v{}, v{})",
                label,
                self.source.to_raw(),
                self.sink.to_raw()
            ),
            None => write!(f, "(v{}, v{})", self.source.to_raw(), self.sink.to_raw()),
        }
    }
}
