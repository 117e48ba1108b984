/// ID for vertices, which are essentially `usize`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub usize);

/// A factory to generate `VertexId` uniquely within one graph.
#[derive(Clone)]
pub struct VertexIdFactory(usize);

impl Default for VertexIdFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl VertexIdFactory {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn one_more(&mut self) -> VertexId {
        let cur = self.0;
        self.0 += 1;
        VertexId(cur)
    }
}

impl VertexId {
    pub fn new(x: usize) -> Self {
        Self(x)
    }

    pub fn to_raw(&self) -> usize {
        self.0
    }
}

/// A vertex record owned by the graph.
///
/// Identity is the [VertexId]; two vertices with equal labels are still
/// distinct entities. The label and the color can be changed at any time,
/// the ID never.
#[derive(Debug, Clone)]
pub struct Vertex<L> {
    id: VertexId,
    label: Option<L>,
    color: Option<usize>,
}

impl<L> Vertex<L> {
    pub(crate) fn new(id: VertexId, label: Option<L>) -> Self {
        Self {
            id,
            label,
            color: None,
        }
    }

    pub fn id(&self) -> VertexId {
        self.id
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

impl<L> std::fmt::Display for Vertex<L>
where
    L: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.label.as_ref() {
            Some(label) => write!(f, "{}", label),
            None => write!(f, "v{}", self.id.to_raw()),
        }
    }
}
